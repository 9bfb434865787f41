//! Error handling for the omap library
//!
//! Map operations themselves never fail: absence is reported through `bool`
//! and `Option` results. The error type here covers the surfaces around the
//! map, namely configuration loading and structural verification.

use std::fmt;
use thiserror::Error;

/// Structural property of a left-leaning red-black tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InvariantKind {
    /// The root node is red after a public operation returned
    RootNotBlack,
    /// A key is out of order with respect to its ancestors
    KeyOrder,
    /// A red link leaning right
    RightLeaningRed,
    /// A red node with a red child
    DoubleRed,
    /// Two root-to-nil paths cross a different number of black links
    BlackImbalance,
    /// The cached entry count disagrees with the number of nodes
    LengthMismatch,
}

impl fmt::Display for InvariantKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::RootNotBlack => "root not black",
            Self::KeyOrder => "key order",
            Self::RightLeaningRed => "right-leaning red link",
            Self::DoubleRed => "consecutive red links",
            Self::BlackImbalance => "black imbalance",
            Self::LengthMismatch => "length mismatch",
        };
        f.write_str(name)
    }
}

/// Main error type for the omap library
#[derive(Error, Debug)]
pub enum OmapError {
    /// I/O related errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration or parameter errors
    #[error("Invalid configuration: {message}")]
    Configuration {
        /// Configuration error message
        message: String,
    },

    /// A structural invariant of the tree does not hold
    #[error("Invariant violated ({kind}): {detail}")]
    InvariantViolation {
        /// Which invariant failed
        kind: InvariantKind,
        /// Where and how it failed
        detail: String,
    },
}

impl OmapError {
    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration { message: message.into() }
    }

    /// Create an invariant violation error
    pub fn invariant<S: Into<String>>(kind: InvariantKind, detail: S) -> Self {
        Self::InvariantViolation { kind, detail: detail.into() }
    }

    /// Create an I/O error from a message
    pub fn io_error<S: Into<String>>(message: S) -> Self {
        Self::Io(std::io::Error::other(message.into()))
    }

    /// The violated invariant, if this is an invariant error
    pub fn invariant_kind(&self) -> Option<InvariantKind> {
        match self {
            Self::InvariantViolation { kind, .. } => Some(*kind),
            _ => None,
        }
    }

    /// Check if this is a recoverable error
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::Io(_) => true,
            Self::Configuration { .. } => false,
            Self::InvariantViolation { .. } => false,
        }
    }

    /// Get the error category for logging
    pub fn category(&self) -> &'static str {
        match self {
            Self::Io(_) => "io",
            Self::Configuration { .. } => "config",
            Self::InvariantViolation { .. } => "invariant",
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, OmapError>;

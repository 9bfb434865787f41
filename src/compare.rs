//! Key ordering for ordered containers
//!
//! A [`Comparator`] is a strict less-than predicate fixed at construction
//! time. Any `Fn(&K, &K) -> bool` closure is a comparator, and the presets
//! below cover the common key types.
//!
//! The predicate must be a strict weak ordering (irreflexive, asymmetric,
//! transitive, with transitive equivalence). A map built on a comparator that
//! breaks these rules keeps memory safety but loses ordering, balance and
//! lookup guarantees.

use std::cmp::Ordering;

/// Strict less-than predicate over keys
///
/// # Examples
///
/// ```rust
/// use omap::{Comparator, Natural};
///
/// assert!(Natural.less(&1, &2));
/// assert!(!Natural.less(&2, &2));
///
/// let reverse = |a: &i32, b: &i32| b < a;
/// assert!(reverse.less(&3, &1));
/// ```
pub trait Comparator<K: ?Sized> {
    /// Returns whether `a` sorts strictly before `b`
    fn less(&self, a: &K, b: &K) -> bool;

    /// Returns whether neither key sorts before the other
    #[inline]
    fn equivalent(&self, a: &K, b: &K) -> bool {
        !self.less(a, b) && !self.less(b, a)
    }

    /// Three-way comparison derived from [`less`](Comparator::less)
    #[inline]
    fn compare(&self, a: &K, b: &K) -> Ordering {
        if self.less(a, b) {
            Ordering::Less
        } else if self.less(b, a) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }
}

impl<K, F> Comparator<K> for F
where
    K: ?Sized,
    F: Fn(&K, &K) -> bool,
{
    #[inline]
    fn less(&self, a: &K, b: &K) -> bool {
        self(a, b)
    }
}

/// Natural order of `Ord` keys
///
/// Serves as the plain string order for `String`/`&str` keys and integer
/// order for the integer types.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Natural;

impl<K: Ord + ?Sized> Comparator<K> for Natural {
    #[inline]
    fn less(&self, a: &K, b: &K) -> bool {
        a < b
    }

    #[inline]
    fn compare(&self, a: &K, b: &K) -> Ordering {
        a.cmp(b)
    }
}

/// Case-insensitive string order
///
/// Keys are compared by their Unicode lowercase mapping, without allocating.
/// Keys that differ only in case are equivalent, so inserting `"Apple"` after
/// `"apple"` overwrites the value and keeps the first spelling of the key.
///
/// ```rust
/// use omap::{CaseFolded, Comparator};
///
/// assert!(CaseFolded.less("apple", "Banana"));
/// assert!(CaseFolded.equivalent("RUST", "rust"));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CaseFolded;

impl<K: AsRef<str> + ?Sized> Comparator<K> for CaseFolded {
    #[inline]
    fn less(&self, a: &K, b: &K) -> bool {
        let a = a.as_ref().chars().flat_map(char::to_lowercase);
        let b = b.as_ref().chars().flat_map(char::to_lowercase);
        a.lt(b)
    }
}

/// Floating-point order
///
/// Uses the IEEE 754 `totalOrder` predicate so that NaN keys still form a
/// strict weak ordering: negative NaN < -inf < ... < -0.0 < +0.0 < ... < +inf
/// < positive NaN.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FloatOrder;

impl Comparator<f64> for FloatOrder {
    #[inline]
    fn less(&self, a: &f64, b: &f64) -> bool {
        a.total_cmp(b) == Ordering::Less
    }
}

impl Comparator<f32> for FloatOrder {
    #[inline]
    fn less(&self, a: &f32, b: &f32) -> bool {
        a.total_cmp(b) == Ordering::Less
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_natural_order() {
        assert!(Natural.less(&-5i64, &3));
        assert!(!Natural.less(&3i64, &3));
        assert!(Natural.less("abc", "abd"));
        assert!(Natural.less(&"B".to_string(), &"a".to_string()));
        assert_eq!(Natural.compare(&7u8, &7u8), Ordering::Equal);
    }

    #[test]
    fn test_closure_comparator() {
        let by_len = |a: &&str, b: &&str| a.len() < b.len();
        assert!(by_len.less(&"ab", &"abc"));
        assert!(by_len.equivalent(&"ab", &"xy"));
        assert_eq!(by_len.compare(&"abcd", &"a"), Ordering::Greater);
    }

    #[test]
    fn test_case_folded() {
        assert!(CaseFolded.less("apple", "Banana"));
        assert!(!Natural.less("apple", "Banana"));
        assert!(CaseFolded.equivalent("Hello", "hELLO"));
        assert!(CaseFolded.less("abc", "ABCD"));
        assert!(!CaseFolded.less("", ""));
        assert!(CaseFolded.less(&String::from("Émile"), &String::from("émilie")));
    }

    #[test]
    fn test_float_order() {
        assert!(FloatOrder.less(&1.5f64, &2.0));
        assert!(!FloatOrder.less(&2.0f64, &2.0));
        assert!(FloatOrder.less(&f64::NEG_INFINITY, &f64::MIN));
        assert!(FloatOrder.less(&f64::INFINITY, &f64::NAN));
        assert!(FloatOrder.equivalent(&f64::NAN, &f64::NAN));
        assert!(FloatOrder.less(&-0.0f64, &0.0));
        assert!(FloatOrder.less(&0.25f32, &0.5f32));
    }
}

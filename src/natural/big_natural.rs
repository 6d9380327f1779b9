use std::cmp::Ordering;
use std::fmt;
use num_bigint::BigUint;
use num_traits::{ToPrimitive, Zero};

use crate::natural::natural_number::NaturalNumber;

/// NaturalNumber backed by num-bigint. The only concrete representation
/// shipped with the crate; the engine stays generic over the trait.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct BigNatural {
    value: BigUint,
}
impl BigNatural {
    pub fn new() -> BigNatural {
        BigNatural { value: BigUint::zero() }
    }
}
impl From<u32> for BigNatural {
    fn from(value: u32) -> BigNatural {
        BigNatural { value: BigUint::from(value) }
    }
}
impl From<u64> for BigNatural {
    fn from(value: u64) -> BigNatural {
        BigNatural { value: BigUint::from(value) }
    }
}
impl fmt::Display for BigNatural {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl NaturalNumber for BigNatural {
    fn new_instance() -> BigNatural {
        BigNatural::new()
    }

    fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    fn compare_to(&self, other: &BigNatural) -> Ordering {
        self.value.cmp(&other.value)
    }

    fn clear(&mut self) {
        self.value = BigUint::zero();
    }

    fn copy_from(&mut self, other: &BigNatural) {
        self.value.clone_from(&other.value);
    }

    fn transfer_from(&mut self, other: &mut BigNatural) {
        // BigUint's Default is zero, so take() both moves and resets
        self.value = std::mem::take(&mut other.value);
    }

    fn add(&mut self, other: &BigNatural) {
        self.value += &other.value;
    }

    fn subtract(&mut self, other: &BigNatural) {
        assert!(
            self.value >= other.value,
            "subtract called with self < other"
        );
        self.value -= &other.value;
    }

    fn multiply(&mut self, other: &BigNatural) {
        self.value *= &other.value;
    }

    fn divide(&mut self, other: &BigNatural) -> BigNatural {
        assert!(!other.value.is_zero(), "divide called with zero divisor");
        let quotient = &self.value / &other.value;
        let remainder = &self.value % &other.value;
        self.value = quotient;
        BigNatural { value: remainder }
    }

    fn power(&mut self, exponent: i32) {
        assert!(exponent >= 0, "power called with negative exponent");
        self.value = self.value.pow(exponent as u32);
    }

    fn root(&mut self, index: i32) {
        assert!(index >= 2, "root called with index < 2");
        self.value = self.value.nth_root(index as u32);
    }

    fn multiply_by_10(&mut self, digit: u8) {
        assert!(digit < 10, "multiply_by_10 called with digit {}", digit);
        self.value *= 10u32;
        self.value += digit as u32;
    }

    fn to_int(&self) -> Option<i32> {
        self.value.to_i32()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::natural::natural_number::INT_LIMIT;

    #[test]
    fn divide_splits_quotient_and_remainder() {
        let mut a = BigNatural::from(17u32);
        let b = BigNatural::from(5u32);
        let remainder = a.divide(&b);
        assert_eq!(a, BigNatural::from(3u32));
        assert_eq!(remainder, BigNatural::from(2u32));
    }

    #[test]
    fn divide_invariant_holds() {
        let samples: [(u64, u64); 5] = [
            (0, 1), (1, 1), (100, 7), (12345678901234567890u64, 97), (97, 12345)
        ];
        for (a, b) in samples {
            let mut dividend = BigNatural::from(a);
            let divisor = BigNatural::from(b);
            let remainder = dividend.divide(&divisor);

            let mut reconstructed = divisor.clone();
            reconstructed.multiply(&dividend);
            reconstructed.add(&remainder);
            assert_eq!(reconstructed, BigNatural::from(a));
            assert_eq!(remainder.compare_to(&divisor), Ordering::Less);
        }
    }

    #[test]
    fn transfer_from_resets_source() {
        let mut src = BigNatural::from(42u32);
        let mut dst = BigNatural::new();
        dst.transfer_from(&mut src);
        assert!(src.is_zero());
        assert_eq!(dst, BigNatural::from(42u32));
    }

    #[test]
    fn copy_from_keeps_source() {
        let src = BigNatural::from(42u32);
        let mut dst = BigNatural::new();
        dst.copy_from(&src);
        assert_eq!(src, dst);
    }

    #[test]
    fn multiply_by_10_builds_digits() {
        let mut n = BigNatural::new();
        for digit in [1u8, 2, 3] {
            n.multiply_by_10(digit);
        }
        assert_eq!(n, BigNatural::from(123u32));
    }

    #[test]
    fn power_and_root_are_inverse_on_exact_powers() {
        let mut n = BigNatural::from(7u32);
        n.power(13);
        let mut back = n.clone();
        back.root(13);
        assert_eq!(back, BigNatural::from(7u32));
    }

    #[test]
    fn root_takes_floor() {
        let mut n = BigNatural::from(26u32);
        n.root(3);
        assert_eq!(n, BigNatural::from(2u32));

        let mut n = BigNatural::from(27u32);
        n.root(3);
        assert_eq!(n, BigNatural::from(3u32));
    }

    #[test]
    fn power_zero_exponent_yields_one() {
        let mut n = BigNatural::from(12345u32);
        n.power(0);
        assert_eq!(n, BigNatural::from(1u32));
    }

    #[test]
    fn to_int_boundary_is_inclusive() {
        let at_limit = BigNatural::from(INT_LIMIT as u32);
        assert_eq!(at_limit.to_int(), Some(INT_LIMIT));

        let past_limit = BigNatural::from(INT_LIMIT as u64 + 1);
        assert_eq!(past_limit.to_int(), None);
    }

    #[test]
    fn display_renders_decimal() {
        let n = BigNatural::from(12345678901234567890u64);
        assert_eq!(n.to_string(), "12345678901234567890");
    }
}

use std::cmp::Ordering;

/// Largest register value that can still be converted to a machine integer.
/// Exponents and root indexes are capped here because `power` and `root`
/// take the bottom register as a native `i32`. The bound is inclusive:
/// a bottom register equal to INT_LIMIT is still convertible.
pub const INT_LIMIT: i32 = i32::MAX;

/// Contract for the arbitrary-precision non-negative integer the calculator
/// operates on. Values are always >= 0 and unbounded in magnitude; only
/// parameters that cross into machine-integer land (exponents, root indexes)
/// are range-limited.
///
/// Method preconditions are contracts, not recoverable errors:
/// implementations assert them and the engine never calls a method whose
/// precondition is false (it consults the legality flags first).
pub trait NaturalNumber: Sized {
    /// Fresh zero-valued instance of the same concrete representation.
    fn new_instance() -> Self;

    fn is_zero(&self) -> bool;

    fn compare_to(&self, other: &Self) -> Ordering;

    /// self := 0
    fn clear(&mut self);

    /// Deep-copies other's value into self. other is unchanged.
    fn copy_from(&mut self, other: &Self);

    /// Moves other's value into self and resets other to zero.
    /// Avoids copying large magnitudes during register shuffles.
    fn transfer_from(&mut self, other: &mut Self);

    /// self := self + other
    fn add(&mut self, other: &Self);

    /// self := self - other. Requires self >= other.
    fn subtract(&mut self, other: &Self);

    /// self := self * other
    fn multiply(&mut self, other: &Self);

    /// self := floor(self / other), returns the remainder.
    /// Requires other != 0. Satisfies
    /// original_self == other * quotient + remainder, 0 <= remainder < other.
    fn divide(&mut self, other: &Self) -> Self;

    /// self := self ^ exponent. Requires exponent >= 0.
    fn power(&mut self, exponent: i32);

    /// self := floor(self ^ (1/index)). Requires index >= 2.
    fn root(&mut self, index: i32);

    /// self := self * 10 + digit. Requires digit < 10.
    /// Used for digit-by-digit entry.
    fn multiply_by_10(&mut self, digit: u8);

    /// Machine-integer conversion. None iff the value exceeds INT_LIMIT,
    /// so `to_int().is_some()` doubles as the power-allowed predicate.
    fn to_int(&self) -> Option<i32>;
}

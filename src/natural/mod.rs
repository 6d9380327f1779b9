pub mod natural_number;
pub mod big_natural;

pub use natural_number::{NaturalNumber, INT_LIMIT};
pub use big_natural::BigNatural;

pub mod natural;
pub mod calculator;

pub mod errors;
pub mod flags;
pub mod operations;
pub mod calculator;
pub mod view;
pub mod controller;

pub use calculator::Calculator;
pub use controller::CalcController;
pub use errors::CalcError;
pub use flags::{GatedOperation, LegalityFlags};
pub use operations::CalcOperation;
pub use view::{CalcView, NullView};

use strum_macros::Display;

use crate::calculator::flags::GatedOperation;

/// One variant per user action the calculator responds to.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Display)]
pub enum CalcOperation {
    ClearBottom,
    Swap,
    Enter,
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
    Root,
    AppendDigit(u8),
}
impl CalcOperation {
    /// The legality flag guarding this operation, if any.
    pub fn required_gate(&self) -> Option<GatedOperation> {
        match self {
            CalcOperation::Subtract => Some(GatedOperation::Subtract),
            CalcOperation::Divide => Some(GatedOperation::Divide),
            CalcOperation::Power => Some(GatedOperation::Power),
            CalcOperation::Root => Some(GatedOperation::Root),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_bounds_checked_operations_are_gated() {
        assert_eq!(CalcOperation::Subtract.required_gate(), Some(GatedOperation::Subtract));
        assert_eq!(CalcOperation::Divide.required_gate(), Some(GatedOperation::Divide));
        assert_eq!(CalcOperation::Power.required_gate(), Some(GatedOperation::Power));
        assert_eq!(CalcOperation::Root.required_gate(), Some(GatedOperation::Root));
        assert_eq!(CalcOperation::Add.required_gate(), None);
        assert_eq!(CalcOperation::AppendDigit(7).required_gate(), None);
    }
}

use std::cmp::Ordering;
use enum_iterator::Sequence;

use crate::natural::NaturalNumber;

/// The four operations whose preconditions depend on the register values.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Sequence)]
pub enum GatedOperation {
    Subtract,
    Divide,
    Power,
    Root,
}

/// Which gated operations are currently legal. A pure function of the
/// register pair, recomputed from scratch on demand; no history leaks in.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct LegalityFlags {
    /// top >= bottom
    pub subtract_allowed: bool,
    /// bottom != 0
    pub divide_allowed: bool,
    /// bottom <= INT_LIMIT
    pub power_allowed: bool,
    /// 2 <= bottom <= INT_LIMIT
    pub root_allowed: bool,
}
impl LegalityFlags {
    pub fn from_registers<N: NaturalNumber>(top: &N, bottom: &N) -> LegalityFlags {
        // to_int is Some exactly when bottom <= INT_LIMIT
        let bottom_as_int = bottom.to_int();
        LegalityFlags {
            subtract_allowed: top.compare_to(bottom) != Ordering::Less,
            divide_allowed: !bottom.is_zero(),
            power_allowed: bottom_as_int.is_some(),
            root_allowed: match bottom_as_int {
                Some(index) => index >= 2,
                None => false,
            },
        }
    }

    pub fn allows(&self, gate: GatedOperation) -> bool {
        match gate {
            GatedOperation::Subtract => self.subtract_allowed,
            GatedOperation::Divide => self.divide_allowed,
            GatedOperation::Power => self.power_allowed,
            GatedOperation::Root => self.root_allowed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::natural::BigNatural;

    #[test]
    fn zero_state_flags() {
        let zero = BigNatural::new();
        let flags = LegalityFlags::from_registers(&zero, &zero);
        // 0 >= 0, so subtract is legal; 0 <= INT_LIMIT, so power is legal
        assert!(flags.subtract_allowed);
        assert!(!flags.divide_allowed);
        assert!(flags.power_allowed);
        assert!(!flags.root_allowed);
    }

    #[test]
    fn root_needs_index_of_at_least_two() {
        let top = BigNatural::from(100u32);
        let flags = LegalityFlags::from_registers(&top, &BigNatural::from(1u32));
        assert!(!flags.root_allowed);
        let flags = LegalityFlags::from_registers(&top, &BigNatural::from(2u32));
        assert!(flags.root_allowed);
    }

    #[test]
    fn power_and_root_cut_off_past_int_limit() {
        use crate::natural::INT_LIMIT;
        let top = BigNatural::new();

        let at_limit = BigNatural::from(INT_LIMIT as u32);
        let flags = LegalityFlags::from_registers(&top, &at_limit);
        assert!(flags.power_allowed);
        assert!(flags.root_allowed);

        let past_limit = BigNatural::from(INT_LIMIT as u64 + 1);
        let flags = LegalityFlags::from_registers(&top, &past_limit);
        assert!(!flags.power_allowed);
        assert!(!flags.root_allowed);
    }

    #[test]
    fn flags_are_pure_in_register_values() {
        // registers built through different histories but holding the same
        // values must produce identical flags for every gate
        let mut built = BigNatural::new();
        for digit in [1u8, 2] {
            built.multiply_by_10(digit);
        }
        let direct = BigNatural::from(12u32);

        let top = BigNatural::from(7u32);
        let built_flags = LegalityFlags::from_registers(&top, &built);
        let direct_flags = LegalityFlags::from_registers(&top, &direct);
        for gate in enum_iterator::all::<GatedOperation>() {
            assert_eq!(built_flags.allows(gate), direct_flags.allows(gate));
        }
        assert_eq!(built_flags, direct_flags);
    }
}

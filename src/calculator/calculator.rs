use crate::calculator::errors::CalcError;
use crate::calculator::flags::{GatedOperation, LegalityFlags};
use crate::calculator::operations::CalcOperation;
use crate::natural::NaturalNumber;

/// The calculator state machine: two natural-number registers and nothing
/// else. Every operation is a transition on the (top, bottom) pair; the
/// legality flags are derived from the pair on demand. Gated operations
/// check their own flag and abort with state unchanged when it is false,
/// so no partial update is ever observable.
///
/// Not designed for concurrent access; one engine per logical session.
pub struct Calculator<N: NaturalNumber> {
    top: N,
    bottom: N,
}
impl<N: NaturalNumber> Calculator<N> {
    pub fn new() -> Calculator<N> {
        Calculator {
            top: N::new_instance(),
            bottom: N::new_instance(),
        }
    }

    pub fn top(&self) -> &N {
        &self.top
    }

    pub fn bottom(&self) -> &N {
        &self.bottom
    }

    /// Recomputes the legality flags from the current register values.
    pub fn flags(&self) -> LegalityFlags {
        LegalityFlags::from_registers(&self.top, &self.bottom)
    }

    fn check_gate(&self, gate: GatedOperation) -> Result<(), CalcError> {
        if self.flags().allows(gate) {
            Ok(())
        } else {
            Err(CalcError::precondition_for(gate))
        }
    }

    /// bottom := 0
    pub fn clear_bottom(&mut self) {
        self.bottom.clear();
    }

    /// Exchanges the registers.
    pub fn swap(&mut self) {
        std::mem::swap(&mut self.top, &mut self.bottom);
    }

    /// top := bottom, bottom unchanged.
    pub fn enter(&mut self) {
        self.top.copy_from(&self.bottom);
    }

    /// bottom := top + bottom; top := 0
    pub fn add(&mut self) {
        self.top.add(&self.bottom);
        self.bottom.transfer_from(&mut self.top);
    }

    /// bottom := top - bottom; top := 0. Requires top >= bottom.
    pub fn subtract(&mut self) -> Result<(), CalcError> {
        self.check_gate(GatedOperation::Subtract)?;
        self.top.subtract(&self.bottom);
        self.bottom.transfer_from(&mut self.top);
        Ok(())
    }

    /// bottom := top * bottom; top := 0
    pub fn multiply(&mut self) {
        self.top.multiply(&self.bottom);
        self.bottom.transfer_from(&mut self.top);
    }

    /// bottom := floor(top / bottom); top := top mod bottom.
    /// Requires bottom != 0.
    pub fn divide(&mut self) -> Result<(), CalcError> {
        self.check_gate(GatedOperation::Divide)?;
        // top holds the quotient after the collaborator call, the
        // remainder comes back as a short-lived temporary
        let remainder = self.top.divide(&self.bottom);
        self.bottom.transfer_from(&mut self.top);
        self.top = remainder;
        Ok(())
    }

    /// bottom := top ^ bottom; top := 0. Requires bottom <= INT_LIMIT.
    pub fn power(&mut self) -> Result<(), CalcError> {
        self.check_gate(GatedOperation::Power)?;
        let exponent = self.bottom.to_int()
            .ok_or_else(|| CalcError::unconvertible(GatedOperation::Power))?;
        self.top.power(exponent);
        self.bottom.transfer_from(&mut self.top);
        Ok(())
    }

    /// bottom := floor(top ^ (1/bottom)); top := 0.
    /// Requires 2 <= bottom <= INT_LIMIT.
    pub fn root(&mut self) -> Result<(), CalcError> {
        self.check_gate(GatedOperation::Root)?;
        let index = self.bottom.to_int()
            .ok_or_else(|| CalcError::unconvertible(GatedOperation::Root))?;
        self.top.root(index);
        self.bottom.transfer_from(&mut self.top);
        Ok(())
    }

    /// bottom := bottom * 10 + digit. Requires digit < 10.
    pub fn append_digit(&mut self, digit: u8) -> Result<(), CalcError> {
        if digit >= 10 {
            return Err(CalcError::bad_digit(digit));
        }
        self.bottom.multiply_by_10(digit);
        Ok(())
    }

    /// Dispatches an event enum value to the matching operation.
    pub fn apply(&mut self, operation: CalcOperation) -> Result<(), CalcError> {
        match operation {
            CalcOperation::ClearBottom => self.clear_bottom(),
            CalcOperation::Swap => self.swap(),
            CalcOperation::Enter => self.enter(),
            CalcOperation::Add => self.add(),
            CalcOperation::Subtract => self.subtract()?,
            CalcOperation::Multiply => self.multiply(),
            CalcOperation::Divide => self.divide()?,
            CalcOperation::Power => self.power()?,
            CalcOperation::Root => self.root()?,
            CalcOperation::AppendDigit(digit) => self.append_digit(digit)?,
        }
        Ok(())
    }
}
impl<N: NaturalNumber> Default for Calculator<N> {
    fn default() -> Calculator<N> {
        Calculator::new()
    }
}

use crate::calculator::calculator::Calculator;
use crate::calculator::errors::CalcError;
use crate::calculator::operations::CalcOperation;
use crate::calculator::view::CalcView;
use crate::natural::NaturalNumber;

/// Glue between user events, the calculator engine, and the view. One
/// process method per user action; each one runs the operation and then
/// re-syncs the view against the model. The view is expected to disable
/// any action whose legality flag it was last told is false, so a
/// rejected event here is an integration defect on the view's side; the
/// controller logs it and leaves model and view untouched.
pub struct CalcController<N: NaturalNumber, V: CalcView<N>> {
    calculator: Calculator<N>,
    view: V,
}
impl<N: NaturalNumber, V: CalcView<N>> CalcController<N, V> {
    /// Wires a fresh zero-valued model to the view and pushes the
    /// initial state so the view starts out consistent.
    pub fn new(view: V) -> CalcController<N, V> {
        let mut controller = CalcController {
            calculator: Calculator::new(),
            view,
        };
        controller.update_view_to_match_model();
        controller
    }

    pub fn calculator(&self) -> &Calculator<N> {
        &self.calculator
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    fn update_view_to_match_model(&mut self) {
        let flags = self.calculator.flags();
        self.view.update_subtract_allowed(flags.subtract_allowed);
        self.view.update_divide_allowed(flags.divide_allowed);
        self.view.update_power_allowed(flags.power_allowed);
        self.view.update_root_allowed(flags.root_allowed);
        self.view.update_top_display(self.calculator.top());
        self.view.update_bottom_display(self.calculator.bottom());
    }

    /// Runs one user event through the engine and re-syncs the view.
    pub fn process_event(
        &mut self, operation: CalcOperation
    ) -> Result<(), CalcError> {
        log::debug!("processing {} event", operation);
        match self.calculator.apply(operation) {
            Ok(()) => {
                self.update_view_to_match_model();
                Ok(())
            }
            Err(error) => {
                log::warn!("{} event rejected: {}", operation, error);
                Err(error)
            }
        }
    }

    pub fn process_clear_event(&mut self) {
        // infallible events cannot actually error through apply
        let _ = self.process_event(CalcOperation::ClearBottom);
    }
    pub fn process_swap_event(&mut self) {
        let _ = self.process_event(CalcOperation::Swap);
    }
    pub fn process_enter_event(&mut self) {
        let _ = self.process_event(CalcOperation::Enter);
    }
    pub fn process_add_event(&mut self) {
        let _ = self.process_event(CalcOperation::Add);
    }
    pub fn process_subtract_event(&mut self) -> Result<(), CalcError> {
        self.process_event(CalcOperation::Subtract)
    }
    pub fn process_multiply_event(&mut self) {
        let _ = self.process_event(CalcOperation::Multiply);
    }
    pub fn process_divide_event(&mut self) -> Result<(), CalcError> {
        self.process_event(CalcOperation::Divide)
    }
    pub fn process_power_event(&mut self) -> Result<(), CalcError> {
        self.process_event(CalcOperation::Power)
    }
    pub fn process_root_event(&mut self) -> Result<(), CalcError> {
        self.process_event(CalcOperation::Root)
    }
    pub fn process_add_new_digit_event(
        &mut self, digit: u8
    ) -> Result<(), CalcError> {
        self.process_event(CalcOperation::AppendDigit(digit))
    }
}

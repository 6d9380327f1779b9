use crate::natural::NaturalNumber;

/// Observer the controller pushes model state to after every processed
/// event. Called synchronously, no buffering; a call reports the state the
/// registers are in right now.
pub trait CalcView<N: NaturalNumber> {
    fn update_top_display(&mut self, value: &N);
    fn update_bottom_display(&mut self, value: &N);
    fn update_subtract_allowed(&mut self, allowed: bool);
    fn update_divide_allowed(&mut self, allowed: bool);
    fn update_power_allowed(&mut self, allowed: bool);
    fn update_root_allowed(&mut self, allowed: bool);
}

/// View that discards every update. For headless embeddings and tests
/// that only care about the model.
pub struct NullView;
impl<N: NaturalNumber> CalcView<N> for NullView {
    fn update_top_display(&mut self, _value: &N) {}
    fn update_bottom_display(&mut self, _value: &N) {}
    fn update_subtract_allowed(&mut self, _allowed: bool) {}
    fn update_divide_allowed(&mut self, _allowed: bool) {}
    fn update_power_allowed(&mut self, _allowed: bool) {}
    fn update_root_allowed(&mut self, _allowed: bool) {}
}

use ordered_float::OrderedFloat;
use std::fmt::Debug;

pub type HeuristicValue = OrderedFloat<f64>;

pub trait Heuristic<T>: Debug {
    /// Evaluate the given state.
    fn evaluate(&mut self, state: &T) -> HeuristicValue;

    /// Evaluate a batch of states. The default implementation simply calls
    /// `evaluate` for each state sequentially. This method should be
    /// overridden if a more efficient implementation is possible.
    fn evaluate_batch(&mut self, states: &[T]) -> Vec<HeuristicValue> {
        states.iter().map(|state| self.evaluate(state)).collect()
    }
}

/// Which of a problem's two heuristic estimates an informed strategy uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeuristicKind {
    One,
    Two,
}

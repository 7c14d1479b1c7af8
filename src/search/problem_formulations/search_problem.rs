use crate::search::Operator;
use std::fmt::Debug;
use std::hash::Hash;

/// A state that can take part in repeated-state detection. Two states are
/// treated as the same state by the search when their duplicate keys are
/// equal, which may be a coarser relation than `==`.
pub trait SearchState: Clone + Debug {
    type Key: Hash + Eq + Debug;

    fn duplicate_key(&self) -> Self::Key;

    fn is_same(&self, other: &Self) -> bool {
        self.duplicate_key() == other.duplicate_key()
    }
}

/// The problem contract consumed by the search engines: an initial state, a
/// goal test and a successor function. Costs travel with the generated
/// operators; heuristics are passed to the engines separately.
pub trait SearchProblem {
    type State: SearchState;
    /// The label of the operators, e.g. an enum of move names.
    type Name: Clone + Debug;

    fn initial_state(&self) -> Self::State;

    fn is_goal(&self, state: &Self::State) -> bool;

    /// Generate every legal successor of `state`, in a fixed order. Illegal
    /// operators are simply not generated.
    fn expand(&self, state: &Self::State) -> Vec<(Operator<Self::Name>, Self::State)>;
}

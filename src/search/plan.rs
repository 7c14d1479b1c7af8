//! A plan is the path from the initial state to a goal state recovered from
//! the search tree. This module provides the [`Plan`] struct, which keeps
//! both the operators and every state visited along the way.

use crate::search::Operator;

#[derive(Debug, Clone, PartialEq)]
pub struct Plan<S, N> {
    /// States along the path, the initial state first
    states: Vec<S>,
    /// Operators along the path, `operators[i]` leads from `states[i]` to
    /// `states[i + 1]`
    operators: Vec<Operator<N>>,
}

impl<S, N> Plan<S, N> {
    pub fn new(states: Vec<S>, operators: Vec<Operator<N>>) -> Self {
        debug_assert_eq!(
            states.len(),
            operators.len() + 1,
            "A plan has exactly one more state than operators"
        );
        Self { states, operators }
    }

    pub fn operators(&self) -> &[Operator<N>] {
        &self.operators
    }

    pub fn states(&self) -> &[S] {
        &self.states
    }

    pub fn final_state(&self) -> &S {
        // A plan always holds at least the initial state.
        &self.states[self.states.len() - 1]
    }

    /// Sum of the operator costs along the path.
    pub fn cost(&self) -> f64 {
        self.operators.iter().map(Operator::cost).sum()
    }

    /// Number of operators, i.e. the number of non-root nodes on the path.
    pub fn len(&self) -> usize {
        self.operators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operators.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cost_sums_operators() {
        let plan = Plan::new(
            vec![0, 1, 2],
            vec![Operator::new("up", 5.), Operator::new("kill", -1.)],
        );
        assert_eq!(plan.len(), 2);
        assert_eq!(plan.cost(), 4.);
        assert_eq!(*plan.final_state(), 2);
    }

    #[test]
    fn empty_plan_keeps_initial_state() {
        let plan: Plan<u32, &str> = Plan::new(vec![7], vec![]);
        assert!(plan.is_empty());
        assert_eq!(plan.cost(), 0.);
        assert_eq!(*plan.final_state(), 7);
    }
}

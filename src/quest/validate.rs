use crate::quest::{OperatorName, QuestProblem};
use crate::search::SearchProblem;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("operator {operator} at step {step} is not applicable")]
    Inapplicable { step: usize, operator: OperatorName },
    #[error("the operators do not reach the goal, {remaining} enemies remain")]
    GoalNotReached { remaining: usize },
}

/// Replay `operators` from the initial state, checking that each one is
/// applicable and that the last state is a goal.
pub fn validate(
    problem: &QuestProblem<'_>,
    operators: &[OperatorName],
) -> Result<(), ValidationError> {
    let mut state = problem.initial_state();
    for (step, &operator) in operators.iter().enumerate() {
        state = problem
            .successor(&state, operator)
            .map(|(_, next)| next)
            .ok_or(ValidationError::Inapplicable { step, operator })?;
    }

    if !problem.is_goal(&state) {
        return Err(ValidationError::GoalNotReached {
            remaining: state.enemies().len(),
        });
    }

    Ok(())
}

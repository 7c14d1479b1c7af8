//! An operator is the labelled edge between a search node and one of its
//! successors. The cost is attached to the generated operator rather than to
//! its name, since some domains compute it per transition.

use std::fmt::{self, Display};

#[derive(Debug, Clone, PartialEq)]
pub struct Operator<N> {
    name: N,
    cost: f64,
}

impl<N> Operator<N> {
    pub fn new(name: N, cost: f64) -> Self {
        Self { name, cost }
    }

    pub fn name(&self) -> &N {
        &self.name
    }

    pub fn cost(&self) -> f64 {
        self.cost
    }
}

impl<N: Display> Display for Operator<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.cost)
    }
}

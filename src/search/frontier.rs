//! The frontier of the general search. A double-ended queue for the
//! uninformed disciplines and a priority queue keyed on `(f, insertion)` for
//! the ordered ones, so equal f-values come out first-in first-out.

use crate::search::{Discipline, HeuristicValue, NodeId};
use priority_queue::PriorityQueue;
use std::cmp::Reverse;
use std::collections::VecDeque;

#[derive(Debug)]
pub enum Frontier {
    Fifo(VecDeque<NodeId>),
    Lifo(VecDeque<NodeId>),
    Ordered {
        queue: PriorityQueue<NodeId, Reverse<(HeuristicValue, usize)>>,
        insertions: usize,
    },
}

impl Frontier {
    pub fn new(discipline: Discipline) -> Self {
        match discipline {
            Discipline::Fifo => Frontier::Fifo(VecDeque::new()),
            Discipline::Lifo => Frontier::Lifo(VecDeque::new()),
            Discipline::Ordered => Frontier::Ordered {
                queue: PriorityQueue::new(),
                insertions: 0,
            },
        }
    }

    /// Insert a node. `f` is ignored by the unordered disciplines.
    pub fn push(&mut self, node_id: NodeId, f: HeuristicValue) {
        match self {
            Frontier::Fifo(queue) => queue.push_back(node_id),
            Frontier::Lifo(queue) => queue.push_front(node_id),
            Frontier::Ordered { queue, insertions } => {
                queue.push(node_id, Reverse((f, *insertions)));
                *insertions += 1;
            }
        }
    }

    /// Remove the node at the front.
    pub fn pop(&mut self) -> Option<NodeId> {
        match self {
            Frontier::Fifo(queue) | Frontier::Lifo(queue) => queue.pop_front(),
            Frontier::Ordered { queue, .. } => queue.pop().map(|(node_id, _)| node_id),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Frontier::Fifo(queue) | Frontier::Lifo(queue) => queue.len(),
            Frontier::Ordered { queue, .. } => queue.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

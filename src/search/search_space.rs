use crate::search::{NodeId, Operator, Plan, SearchNode, NO_NODE};
use segvec::{Linear, SegVec};

/// A [`SearchSpace`] is the arena holding every node generated during one
/// search. Nodes refer to their parents by [`NodeId`], so the tree is shared
/// by all frontier entries without any reference counting.
#[derive(Debug)]
pub struct SearchSpace<S, N> {
    root_node_id: NodeId,
    nodes: SegVec<SearchNode<S, N>, Linear>,
}

impl<S, N> SearchSpace<S, N> {
    pub fn new(initial_state: S) -> Self {
        let mut nodes = SegVec::new();
        let root_node_id = NodeId::new(0);
        nodes.push(SearchNode::new_without_parent(root_node_id, initial_state));

        Self {
            root_node_id,
            nodes,
        }
    }

    /// Add a successor of `parent_id` reached by `operator`.
    pub fn insert_node(
        &mut self,
        state: S,
        operator: Operator<N>,
        parent_id: NodeId,
    ) -> &mut SearchNode<S, N> {
        let node_id = NodeId::new(self.nodes.len());
        let node = SearchNode::new_with_parent(node_id, state, self.get_node(parent_id), operator);
        self.nodes.push(node);
        self.get_node_mut(node_id)
    }

    #[inline(always)]
    pub fn get_root_node(&self) -> &SearchNode<S, N> {
        self.get_node(self.root_node_id)
    }

    #[inline(always)]
    pub fn get_root_node_mut(&mut self) -> &mut SearchNode<S, N> {
        self.get_node_mut(self.root_node_id)
    }

    #[inline(always)]
    pub fn get_node(&self, node_id: NodeId) -> &SearchNode<S, N> {
        self.nodes.get(node_id.id()).expect("Invalid node id")
    }

    #[inline(always)]
    pub fn get_node_mut(&mut self, node_id: NodeId) -> &mut SearchNode<S, N> {
        self.nodes.get_mut(node_id.id()).expect("Invalid node id")
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 0
    }

    /// The nodes from the root to `node_id`, root first.
    pub fn path_to(&self, node_id: NodeId) -> Vec<&SearchNode<S, N>> {
        let mut path = vec![];
        let mut current_id = node_id;
        while current_id != NO_NODE {
            let node = self.get_node(current_id);
            path.push(node);
            current_id = node.get_parent_id();
        }
        path.reverse();
        path
    }
}

impl<S: Clone, N: Clone> SearchSpace<S, N> {
    pub fn extract_plan(&self, goal_id: NodeId) -> Plan<S, N> {
        let path = self.path_to(goal_id);
        let states = path.iter().map(|node| node.get_state().clone()).collect();
        let operators = path
            .iter()
            .filter_map(|node| node.get_operator().cloned())
            .collect();
        Plan::new(states, operators)
    }
}

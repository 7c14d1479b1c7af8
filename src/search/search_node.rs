use crate::search::{HeuristicValue, Operator};

/// Handle of a node inside a [`crate::search::SearchSpace`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }

    #[inline(always)]
    pub fn id(&self) -> usize {
        self.0
    }
}

/// Parent handle of the root node.
pub const NO_NODE: NodeId = NodeId(usize::MAX);

/// A [`SearchNode`] is a node in the search tree. It owns its state and keeps
/// a non-owning handle to its parent, so the tree itself lives in the
/// [`crate::search::SearchSpace`] arena.
#[derive(Debug, Clone)]
pub struct SearchNode<S, N> {
    /// Handle of this node in the search space
    node_id: NodeId,
    /// The state this node represents
    state: S,
    /// Parent node, [`NO_NODE`] for the root
    parent_id: NodeId,
    /// Operator that led to this node, `None` for the root
    operator: Option<Operator<N>>,
    /// Number of operators between the root and this node
    depth: usize,
    /// G-value of the node, i.e. the accumulated path cost.
    g: HeuristicValue,
    /// F-value of the node, the key the frontier orders by. Its meaning
    /// depends on the strategy.
    f: HeuristicValue,
}

impl<S, N> SearchNode<S, N> {
    /// Create the root node. Its path cost is zero.
    pub fn new_without_parent(node_id: NodeId, state: S) -> Self {
        Self {
            node_id,
            state,
            parent_id: NO_NODE,
            operator: None,
            depth: 0,
            g: (0.).into(),
            f: (0.).into(),
        }
    }

    /// Create a child node. The path cost is the parent's path cost plus the
    /// cost of the operator, even when that cost is negative.
    pub fn new_with_parent(
        node_id: NodeId,
        state: S,
        parent: &SearchNode<S, N>,
        operator: Operator<N>,
    ) -> Self {
        let g = parent.g + operator.cost();
        Self {
            node_id,
            state,
            parent_id: parent.node_id,
            operator: Some(operator),
            depth: parent.depth + 1,
            g,
            f: g,
        }
    }

    pub fn open_with_f(&mut self, f: HeuristicValue) {
        self.f = f;
    }

    pub fn is_root(&self) -> bool {
        self.parent_id == NO_NODE
    }

    pub fn get_node_id(&self) -> NodeId {
        self.node_id
    }

    pub fn get_state(&self) -> &S {
        &self.state
    }

    pub fn get_parent_id(&self) -> NodeId {
        self.parent_id
    }

    pub fn get_operator(&self) -> Option<&Operator<N>> {
        self.operator.as_ref()
    }

    pub fn get_depth(&self) -> usize {
        self.depth
    }

    pub fn get_g(&self) -> HeuristicValue {
        self.g
    }

    pub fn get_f(&self) -> HeuristicValue {
        self.f
    }
}

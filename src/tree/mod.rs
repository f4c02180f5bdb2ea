pub mod aggregate;
pub mod hierarchy;

/// A node in the 4-level grouping tree.
///
/// Internal nodes carry children; leaves (the deepest level) carry the
/// rollup `count` of records sharing the full key path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupNode {
    pub key: String,
    pub children: Vec<GroupNode>,
    pub count: usize,
}

impl GroupNode {
    pub fn group(key: impl Into<String>, children: Vec<GroupNode>) -> Self {
        Self {
            key: key.into(),
            children,
            count: 0,
        }
    }

    pub fn leaf(key: impl Into<String>, count: usize) -> Self {
        Self {
            key: key.into(),
            children: Vec::new(),
            count,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// Index into the hierarchy arena.
pub type NodeId = usize;

/// A positioned hierarchy node.
///
/// `theta`/`radial` hold the polar coordinates assigned by the layout;
/// `x`/`y` hold the final Cartesian position derived from them.
#[derive(Debug, Clone)]
pub struct HierNode {
    pub key: String,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
    /// Distance from the root (root = 0).
    pub depth: usize,
    /// Distance to the deepest descendant leaf (leaf = 0).
    pub height: usize,
    /// Number of descendant leaves (a leaf counts itself).
    pub count: usize,
    /// Sum of descendant leaf rollup counts.
    pub value: usize,
    pub theta: f64,
    pub radial: f64,
    pub x: f64,
    pub y: f64,
}

impl HierNode {
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// Arena-backed hierarchy: nodes addressed by index, parent/child links as
/// indices. This is the single authoritative node table; the renderer and
/// the interaction controller both index into it.
#[derive(Debug, Clone)]
pub struct Hierarchy {
    pub nodes: Vec<HierNode>,
    pub root: NodeId,
}

impl Hierarchy {
    /// The path from `id` up to and including the root.
    pub fn ancestor_path(&self, id: NodeId) -> Vec<NodeId> {
        let mut path = vec![id];
        let mut current = id;
        while let Some(parent) = self.nodes[current].parent {
            path.push(parent);
            current = parent;
        }
        path
    }

    /// Leaf ids in pre-order traversal order (respects sibling order).
    pub fn leaves(&self) -> Vec<NodeId> {
        let mut out = Vec::new();
        self.collect_leaves(self.root, &mut out);
        out
    }

    fn collect_leaves(&self, id: NodeId, out: &mut Vec<NodeId>) {
        let node = &self.nodes[id];
        if node.is_leaf() {
            out.push(id);
            return;
        }
        for &child in &node.children {
            self.collect_leaves(child, out);
        }
    }

    /// All parent→child edges, in pre-order.
    pub fn links(&self) -> Vec<(NodeId, NodeId)> {
        let mut out = Vec::new();
        self.collect_links(self.root, &mut out);
        out
    }

    fn collect_links(&self, id: NodeId, out: &mut Vec<(NodeId, NodeId)>) {
        for &child in &self.nodes[id].children {
            out.push((id, child));
            self.collect_links(child, out);
        }
    }

    /// Node ids in pre-order, root first.
    pub fn descendants(&self) -> Vec<NodeId> {
        let mut out = Vec::new();
        self.collect_descendants(self.root, &mut out);
        out
    }

    fn collect_descendants(&self, id: NodeId, out: &mut Vec<NodeId>) {
        out.push(id);
        for &child in &self.nodes[id].children {
            self.collect_descendants(child, out);
        }
    }
}

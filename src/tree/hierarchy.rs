use crate::tree::{GroupNode, HierNode, Hierarchy, NodeId};

impl Hierarchy {
    /// Build the arena from a grouping tree, computing `depth` top-down and
    /// `height`, `count`, `value` bottom-up.
    pub fn build(root: &GroupNode) -> Hierarchy {
        let mut nodes = Vec::new();
        let root_id = insert(&mut nodes, root, None, 0);
        let mut hierarchy = Hierarchy { nodes, root: root_id };
        hierarchy.compute_stats(root_id);
        hierarchy
    }

    fn compute_stats(&mut self, id: NodeId) -> (usize, usize, usize) {
        let children = self.nodes[id].children.clone();
        if children.is_empty() {
            let value = self.nodes[id].value;
            self.nodes[id].height = 0;
            self.nodes[id].count = 1;
            return (0, 1, value);
        }

        let mut height = 0;
        let mut count = 0;
        let mut value = 0;
        for child in children {
            let (h, c, v) = self.compute_stats(child);
            height = height.max(h + 1);
            count += c;
            value += v;
        }

        let node = &mut self.nodes[id];
        node.height = height;
        node.count = count;
        node.value = value;
        (height, count, value)
    }

    /// Impose the display order: at every level, children sorted by height
    /// (descending), then by leaf count (descending). The sort is stable, so
    /// equal-rank siblings keep their insertion order.
    pub fn sort_siblings(&mut self) {
        for id in 0..self.nodes.len() {
            let mut kids = self.nodes[id].children.clone();
            kids.sort_by(|&a, &b| {
                let (na, nb) = (&self.nodes[a], &self.nodes[b]);
                nb.height
                    .cmp(&na.height)
                    .then(nb.count.cmp(&na.count))
            });
            self.nodes[id].children = kids;
        }
    }
}

fn insert(
    nodes: &mut Vec<HierNode>,
    group: &GroupNode,
    parent: Option<NodeId>,
    depth: usize,
) -> NodeId {
    let id = nodes.len();
    nodes.push(HierNode {
        key: group.key.clone(),
        parent,
        children: Vec::new(),
        depth,
        height: 0,
        count: 0,
        value: group.count,
        theta: 0.0,
        radial: 0.0,
        x: 0.0,
        y: 0.0,
    });
    let children: Vec<NodeId> = group
        .children
        .iter()
        .map(|child| insert(nodes, child, Some(id), depth + 1))
        .collect();
    nodes[id].children = children;
    id
}

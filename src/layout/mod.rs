use std::f64::consts::TAU;

use crate::tree::{Hierarchy, NodeId};

/// Logical drawing surface size.
pub const WIDTH: f64 = 960.0;
pub const HEIGHT: f64 = 500.0;

/// Chart geometry: the layout radius is `diameter / 2 - padding`.
pub const DIAMETER: f64 = 700.0;
pub const PADDING: f64 = 140.0;

/// Offset of the plot origin from the surface origin.
pub const PLOT_OFFSET: (f64, f64) = (PADDING + 100.0, PADDING + 100.0);

pub fn chart_radius() -> f64 {
    DIAMETER / 2.0 - PADDING
}

/// Radial cluster layout.
///
/// Leaves get equal angular slots around the full circle, in sibling order:
/// leaf i of n sits at (i + 0.5) · 2π/n. An internal node's angle is the
/// mean of its children's angles. Radial distance grows linearly with depth,
/// root at 0 and the deepest leaf at `radius`.
///
/// Polar coordinates are kept in `theta`/`radial`; the final Cartesian
/// position x = r·cos θ, y = r·sin θ is written to `x`/`y`.
pub fn radial_cluster(hierarchy: &mut Hierarchy, radius: f64) {
    let leaves = hierarchy.leaves();
    let n = leaves.len();

    // A single leaf has no angular spread to divide; it sits at angle 0.
    for (i, &leaf) in leaves.iter().enumerate() {
        hierarchy.nodes[leaf].theta = if n <= 1 {
            0.0
        } else {
            (i as f64 + 0.5) * TAU / n as f64
        };
    }

    assign_internal_angles(hierarchy, hierarchy.root);

    let max_depth = leaves
        .iter()
        .map(|&leaf| hierarchy.nodes[leaf].depth)
        .max()
        .unwrap_or(0);

    for node in &mut hierarchy.nodes {
        node.radial = if max_depth == 0 {
            0.0
        } else {
            node.depth as f64 / max_depth as f64 * radius
        };
        let (x, y) = to_cartesian(node.radial, node.theta);
        node.x = x;
        node.y = y;
    }
}

fn assign_internal_angles(hierarchy: &mut Hierarchy, id: NodeId) -> f64 {
    let children = hierarchy.nodes[id].children.clone();
    if children.is_empty() {
        return hierarchy.nodes[id].theta;
    }
    let sum: f64 = children
        .iter()
        .map(|&child| assign_internal_angles(hierarchy, child))
        .sum();
    let theta = sum / children.len() as f64;
    hierarchy.nodes[id].theta = theta;
    theta
}

/// Polar → Cartesian.
pub fn to_cartesian(r: f64, theta: f64) -> (f64, f64) {
    (r * theta.cos(), r * theta.sin())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Record;
    use crate::tree::aggregate::{nest, select_root};
    use crate::tree::Hierarchy;

    const EPS: f64 = 1e-12;

    fn laid_out(records: &[Record]) -> Hierarchy {
        let root = select_root(nest(records)).unwrap();
        let mut h = Hierarchy::build(&root);
        h.sort_siblings();
        radial_cluster(&mut h, chart_radius());
        h
    }

    #[test]
    fn leaves_get_equal_angular_slots() {
        let records = vec![
            Record::new("SF", "Fire", "A", "X"),
            Record::new("SF", "Fire", "A", "Y"),
            Record::new("SF", "Fire", "A", "Z"),
            Record::new("SF", "Fire", "A", "W"),
        ];
        let h = laid_out(&records);
        let leaves = h.leaves();
        assert_eq!(leaves.len(), 4);
        for (i, &leaf) in leaves.iter().enumerate() {
            let expected = (i as f64 + 0.5) * TAU / 4.0;
            assert!((h.nodes[leaf].theta - expected).abs() < EPS);
            assert!(h.nodes[leaf].theta < TAU);
        }
    }

    #[test]
    fn internal_angle_is_mean_of_children() {
        let records = vec![
            Record::new("SF", "Fire", "A", "X"),
            Record::new("SF", "Fire", "A", "Y"),
        ];
        let h = laid_out(&records);
        let leaves = h.leaves();
        let parent = h.nodes[leaves[0]].parent.unwrap();
        let expected =
            (h.nodes[leaves[0]].theta + h.nodes[leaves[1]].theta) / 2.0;
        assert!((h.nodes[parent].theta - expected).abs() < EPS);
    }

    #[test]
    fn radius_grows_linearly_with_depth() {
        let records = vec![Record::new("SF", "Fire", "A", "X")];
        let h = laid_out(&records);
        let r = chart_radius();
        assert_eq!(r, 210.0);
        for id in h.descendants() {
            let node = &h.nodes[id];
            let expected = node.depth as f64 / 3.0 * r;
            assert!((node.radial - expected).abs() < EPS);
        }
        assert!((h.nodes[h.root].radial).abs() < EPS);
    }

    #[test]
    fn cartesian_conversion_is_exact_trigonometry() {
        let records = vec![
            Record::new("SF", "Fire", "A", "X"),
            Record::new("SF", "Fire", "B", "Y"),
            Record::new("SF", "Med", "C", "Z"),
        ];
        let h = laid_out(&records);
        for id in h.descendants() {
            let node = &h.nodes[id];
            assert!((node.x - node.radial * node.theta.cos()).abs() < EPS);
            assert!((node.y - node.radial * node.theta.sin()).abs() < EPS);
        }
    }

    #[test]
    fn single_leaf_sits_at_angle_zero() {
        let records = vec![Record::new("SF", "Fire", "A", "X")];
        let h = laid_out(&records);
        let leaves = h.leaves();
        assert_eq!(leaves.len(), 1);
        assert_eq!(h.nodes[leaves[0]].theta, 0.0);
        // Single-path tree: every internal node averages to 0 as well.
        assert_eq!(h.nodes[h.root].theta, 0.0);
    }

    #[test]
    fn single_node_tree_does_not_divide_by_zero() {
        let root = crate::tree::GroupNode::leaf("SF", 1);
        let mut h = Hierarchy::build(&root);
        radial_cluster(&mut h, chart_radius());
        let node = &h.nodes[h.root];
        assert_eq!(node.theta, 0.0);
        assert_eq!(node.radial, 0.0);
        assert_eq!((node.x, node.y), (0.0, 0.0));
    }

    #[test]
    fn empty_key_nodes_participate_in_layout() {
        let records = vec![
            Record::new("SF", "Fire", "A", ""),
            Record::new("SF", "Fire", "A", "X"),
        ];
        let h = laid_out(&records);
        let empty = h
            .descendants()
            .into_iter()
            .find(|&id| h.nodes[id].key.is_empty())
            .expect("empty-key leaf exists");
        assert!(h.nodes[empty].radial > 0.0);
    }
}

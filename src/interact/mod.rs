pub mod tooltip;

pub use tooltip::{si_format, Bounds, TextAnchor, Tooltip, TOOLTIP_FONT_SIZE};

use crate::tree::{Hierarchy, NodeId};

/// Hover interaction controller.
///
/// Two states per chart: idle (nothing hovered) and hovered. Pointer-enter
/// marks the hovered node's ancestor path as selected and creates the single
/// tooltip; pointer-leave clears the same path and destroys the tooltip.
/// Enter and leave are idempotent, so rapid in/out event bursts can never
/// leave stale selection marks or an orphaned tooltip behind.
#[derive(Debug, Clone)]
pub struct HoverController {
    selected: Vec<bool>,
    hovered: Option<NodeId>,
    tooltip: Option<Tooltip>,
    bounds: Bounds,
}

impl HoverController {
    pub fn new(hierarchy: &Hierarchy) -> Self {
        Self {
            selected: vec![false; hierarchy.nodes.len()],
            hovered: None,
            tooltip: None,
            bounds: Bounds::surface(),
        }
    }

    /// Pointer entered node `id`.
    pub fn pointer_enter(&mut self, hierarchy: &Hierarchy, id: NodeId) {
        if self.hovered == Some(id) {
            return;
        }
        if let Some(previous) = self.hovered {
            self.pointer_leave(hierarchy, previous);
        }
        for node in hierarchy.ancestor_path(id) {
            self.selected[node] = true;
        }
        self.tooltip = Some(Tooltip::for_node(hierarchy, id, self.bounds));
        self.hovered = Some(id);
    }

    /// Pointer left node `id`. A leave for a node that is not currently
    /// hovered is a no-op.
    pub fn pointer_leave(&mut self, hierarchy: &Hierarchy, id: NodeId) {
        if self.hovered != Some(id) {
            return;
        }
        for node in hierarchy.ancestor_path(id) {
            self.selected[node] = false;
        }
        self.tooltip = None;
        self.hovered = None;
    }

    pub fn is_selected(&self, id: NodeId) -> bool {
        self.selected[id]
    }

    pub fn hovered(&self) -> Option<NodeId> {
        self.hovered
    }

    pub fn tooltip(&self) -> Option<&Tooltip> {
        self.tooltip.as_ref()
    }

    pub fn selected_count(&self) -> usize {
        self.selected.iter().filter(|&&s| s).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Record;
    use crate::layout::{chart_radius, radial_cluster};
    use crate::tree::aggregate::{nest, select_root};

    fn chart() -> Hierarchy {
        let records = vec![
            Record::new("SF", "Fire", "A", "X"),
            Record::new("SF", "Fire", "A", "Y"),
            Record::new("SF", "Med", "B", "Z"),
        ];
        let root = select_root(nest(&records)).unwrap();
        let mut h = Hierarchy::build(&root);
        h.sort_siblings();
        radial_cluster(&mut h, chart_radius());
        h
    }

    fn find(h: &Hierarchy, key: &str) -> NodeId {
        h.descendants()
            .into_iter()
            .find(|&id| h.nodes[id].key == key)
            .expect("node present")
    }

    #[test]
    fn hovering_a_leaf_selects_its_whole_ancestor_path() {
        let h = chart();
        let mut hover = HoverController::new(&h);
        let x = find(&h, "X");

        hover.pointer_enter(&h, x);

        // Leaf plus all ancestors up to the root: depth + 1 nodes.
        assert_eq!(hover.selected_count(), h.nodes[x].depth + 1);
        assert!(hover.is_selected(x));
        assert!(hover.is_selected(find(&h, "A")));
        assert!(hover.is_selected(find(&h, "Fire")));
        assert!(hover.is_selected(h.root));
        assert!(!hover.is_selected(find(&h, "Y")));
        assert!(hover.tooltip().is_some());
    }

    #[test]
    fn enter_then_leave_restores_the_idle_state() {
        let h = chart();
        let mut hover = HoverController::new(&h);
        let x = find(&h, "X");

        hover.pointer_enter(&h, x);
        hover.pointer_leave(&h, x);

        assert_eq!(hover.selected_count(), 0);
        assert!(hover.tooltip().is_none());
        assert!(hover.hovered().is_none());
    }

    #[test]
    fn repeated_enters_are_idempotent() {
        let h = chart();
        let mut hover = HoverController::new(&h);
        let x = find(&h, "X");

        hover.pointer_enter(&h, x);
        hover.pointer_enter(&h, x);
        hover.pointer_leave(&h, x);

        assert_eq!(hover.selected_count(), 0);
        assert!(hover.tooltip().is_none());
    }

    #[test]
    fn moving_between_nodes_swaps_the_selection() {
        let h = chart();
        let mut hover = HoverController::new(&h);
        let x = find(&h, "X");
        let z = find(&h, "Z");

        hover.pointer_enter(&h, x);
        hover.pointer_enter(&h, z);

        assert!(hover.is_selected(z));
        assert!(hover.is_selected(find(&h, "Med")));
        assert!(!hover.is_selected(x));
        assert!(!hover.is_selected(find(&h, "Fire")));
        // Root is shared by both paths and stays selected.
        assert!(hover.is_selected(h.root));
        assert_eq!(hover.hovered(), Some(z));
    }

    #[test]
    fn stale_leave_events_are_ignored() {
        let h = chart();
        let mut hover = HoverController::new(&h);
        let x = find(&h, "X");
        let z = find(&h, "Z");

        hover.pointer_enter(&h, x);
        // A leave for a node we are no longer on must not clear anything.
        hover.pointer_leave(&h, z);

        assert!(hover.is_selected(x));
        assert!(hover.tooltip().is_some());
    }

    #[test]
    fn controller_tooltip_flips_against_the_surface_edge() {
        // A root key long enough that its centered tooltip text would
        // cross the surface's left edge at x = -240.
        let key = "x".repeat(80);
        let records = vec![Record::new(key, "Fire", "A", "X")];
        let root = select_root(nest(&records)).unwrap();
        let mut h = Hierarchy::build(&root);
        h.sort_siblings();
        radial_cluster(&mut h, chart_radius());

        let mut hover = HoverController::new(&h);
        hover.pointer_enter(&h, h.root);

        let tip = hover.tooltip().expect("tooltip present");
        assert_eq!(tip.anchor, TextAnchor::Start);
    }

    #[test]
    fn hovering_the_root_selects_only_the_root() {
        let h = chart();
        let mut hover = HoverController::new(&h);

        hover.pointer_enter(&h, h.root);

        assert_eq!(hover.selected_count(), 1);
        assert!(hover.is_selected(h.root));
    }
}

use svg::node::element::{Circle, Group, Path, Rectangle, Text};
use svg::node::Text as TextContent;
use svg::Document;

use crate::data::Columns;
use crate::layout::{HEIGHT, PLOT_OFFSET, WIDTH};
use crate::render::color::ColorScale;
use crate::render::NODE_RADIUS;
use crate::tree::Hierarchy;

/// Build the SVG scene: a translated `#plot` group holding one curve per
/// link and one circle per node, plus the color legend and its title.
pub fn render_document(
    hierarchy: &Hierarchy,
    columns: &Columns,
    scale: &ColorScale,
) -> Document {
    let plot = Group::new()
        .set("id", "plot")
        .set("transform", translate(PLOT_OFFSET.0, PLOT_OFFSET.1))
        .add(link_group(hierarchy))
        .add(node_group(hierarchy, columns, scale));

    Document::new()
        .set("width", WIDTH)
        .set("height", HEIGHT)
        .set("viewBox", format!("0 0 {} {}", WIDTH, HEIGHT))
        .set("xmlns", "http://www.w3.org/2000/svg")
        .add(plot)
        .add(legend_group(scale))
        .add(legend_title())
}

fn link_group(hierarchy: &Hierarchy) -> Group {
    let mut group = Group::new();
    for (source, target) in hierarchy.links() {
        let s = &hierarchy.nodes[source];
        let t = &hierarchy.nodes[target];
        group = group.add(
            Path::new()
                .set("d", link_path(s.x, s.y, t.x, t.y))
                .set("class", "link")
                .set("fill", "none")
                .set("stroke", "#999999"),
        );
    }
    group
}

/// Vertical-link cubic curve: both control points at the vertical midpoint,
/// endpoints exactly at the parent and child positions.
fn link_path(sx: f64, sy: f64, tx: f64, ty: f64) -> String {
    let my = (sy + ty) / 2.0;
    format!("M{},{}C{},{} {},{} {},{}", sx, sy, sx, my, tx, my, tx, ty)
}

fn node_group(hierarchy: &Hierarchy, columns: &Columns, scale: &ColorScale) -> Group {
    let mut group = Group::new();
    for id in hierarchy.descendants() {
        let node = &hierarchy.nodes[id];
        // Empty-key nodes stay in the hierarchy (they shape the layout and
        // the counts) but are not drawn and not interactive.
        if node.key.is_empty() {
            continue;
        }
        group = group.add(
            Circle::new()
                .set("r", NODE_RADIUS)
                .set("cx", node.x)
                .set("cy", node.y)
                .set("id", node.key.as_str())
                .set("class", "node")
                .set("fill", scale.color(columns.name(node.depth)))
                .set("stroke", "black"),
        );
    }
    group
}

fn legend_group(scale: &ColorScale) -> Group {
    let mut group = Group::new()
        .set("class", "legend")
        .set("transform", translate(500.0, 300.0));
    for (i, key) in scale.domain().iter().enumerate() {
        let y = i as f64 * 19.0;
        group = group.add(
            Rectangle::new()
                .set("x", 0)
                .set("y", y)
                .set("width", 15)
                .set("height", 15)
                .set("fill", scale.color(key)),
        );
        group = group.add(
            Text::new("")
                .set("x", 20)
                .set("y", y + 12.0)
                .set("font-size", "12px")
                .add(TextContent::new(key.clone())),
        );
    }
    group
}

fn legend_title() -> Text {
    Text::new("")
        .set("id", "legendtitle")
        .set("x", 510)
        .set("y", 280)
        .set("font-weight", 500)
        .set("font-size", "16px")
        .add(TextContent::new("Category"))
}

fn translate(x: f64, y: f64) -> String {
    format!("translate({},{})", x, y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Record;
    use crate::layout::{chart_radius, radial_cluster};
    use crate::tree::aggregate::{nest, select_root};

    fn rendered(records: &[Record]) -> String {
        let root = select_root(nest(records)).unwrap();
        let mut h = Hierarchy::build(&root);
        h.sort_siblings();
        radial_cluster(&mut h, chart_radius());
        let columns = Columns::default();
        let scale = ColorScale::new(columns.0.clone());
        render_document(&h, &columns, &scale).to_string()
    }

    #[test]
    fn document_has_plot_legend_and_title() {
        let out = rendered(&[Record::new("SF", "Fire", "A", "X")]);
        assert!(out.contains("id=\"plot\""));
        assert!(out.contains("translate(240,240)"));
        assert!(out.contains("class=\"legend\""));
        assert!(out.contains("id=\"legendtitle\""));
        assert!(out.contains("Category"));
    }

    #[test]
    fn one_link_per_edge_and_one_circle_per_named_node() {
        let out = rendered(&[
            Record::new("SF", "Fire", "A", "X"),
            Record::new("SF", "Fire", "A", "Y"),
        ]);
        // 5 nodes → 4 links.
        assert_eq!(out.matches("class=\"link\"").count(), 4);
        assert_eq!(out.matches("class=\"node\"").count(), 5);
        assert!(out.contains("id=\"SF\""));
        assert!(out.contains("id=\"X\""));
    }

    #[test]
    fn empty_key_nodes_are_not_drawn() {
        let out = rendered(&[
            Record::new("SF", "Fire", "A", ""),
            Record::new("SF", "Fire", "A", "X"),
        ]);
        // 5 nodes in the tree, one with an empty key: 4 circles, 4 links.
        assert_eq!(out.matches("class=\"node\"").count(), 4);
        assert_eq!(out.matches("class=\"link\"").count(), 4);
        assert!(!out.contains("id=\"\""));
    }

    #[test]
    fn nodes_are_colored_by_depth_column() {
        let out = rendered(&[Record::new("SF", "Fire", "A", "X")]);
        // Root (City) gets the first Accent color.
        assert!(out.contains("#7fc97f"));
        // Leaf (Neighborhood) gets the fourth.
        assert!(out.contains("#ffff99"));
    }

    #[test]
    fn link_curve_endpoints_match_node_positions() {
        let path = link_path(0.0, 0.0, 10.0, 20.0);
        assert_eq!(path, "M0,0C0,10 10,10 10,20");
    }
}

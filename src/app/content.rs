//! Chart painting and hover dispatch for `ViewerApp`.

use eframe::egui::epaint::CubicBezierShape;
use eframe::egui::{self, Align2, Color32, FontId, Pos2, Stroke, Vec2};

use dendra::interact::{TextAnchor, TOOLTIP_FONT_SIZE};
use dendra::render::color::ColorScale;
use dendra::layout::{HEIGHT, PLOT_OFFSET, WIDTH};
use dendra::render::NODE_RADIUS;
use dendra::tree::NodeId;

use super::ViewerApp;

const LINK_COLOR: Color32 = Color32::from_rgb(0x99, 0x99, 0x99);
const HIGHLIGHT: Color32 = Color32::from_rgb(0xd6, 0x2e, 0x2e);

impl ViewerApp {
    pub fn draw_chart(&mut self, ui: &mut egui::Ui) {
        let (Some(chart), Some(hover)) = (&self.chart, &mut self.hover) else {
            return;
        };
        let hierarchy = &chart.hierarchy;

        let (response, painter) =
            ui.allocate_painter(Vec2::new(WIDTH as f32, HEIGHT as f32), egui::Sense::hover());
        let origin = response.rect.min + egui::vec2(PLOT_OFFSET.0 as f32, PLOT_OFFSET.1 as f32);
        let to_screen =
            |x: f64, y: f64| Pos2::new(origin.x + x as f32, origin.y + y as f32);

        // Hover dispatch: enter the node under the pointer, leave otherwise.
        // Empty-key nodes are not drawn, so they are not interactive either.
        let hit: Option<NodeId> = response.hover_pos().and_then(|pointer| {
            hierarchy.descendants().into_iter().find(|&id| {
                let node = &hierarchy.nodes[id];
                !node.key.is_empty()
                    && to_screen(node.x, node.y).distance(pointer) <= NODE_RADIUS as f32
            })
        });
        match hit {
            Some(id) => hover.pointer_enter(hierarchy, id),
            None => {
                if let Some(previous) = hover.hovered() {
                    hover.pointer_leave(hierarchy, previous);
                }
            }
        }

        // Links: vertical-link cubic curves between parent and child.
        for (source, target) in hierarchy.links() {
            let s = &hierarchy.nodes[source];
            let t = &hierarchy.nodes[target];
            let my = (s.y + t.y) / 2.0;
            painter.add(CubicBezierShape::from_points_stroke(
                [
                    to_screen(s.x, s.y),
                    to_screen(s.x, my),
                    to_screen(t.x, my),
                    to_screen(t.x, t.y),
                ],
                false,
                Color32::TRANSPARENT,
                Stroke::new(1.0, LINK_COLOR),
            ));
        }

        // Nodes, colored by their level's column; ancestor-path highlight.
        for id in hierarchy.descendants() {
            let node = &hierarchy.nodes[id];
            if node.key.is_empty() {
                continue;
            }
            let (r, g, b) = self.color_scale.rgb(chart.columns.name(node.depth));
            let stroke = if hover.is_selected(id) {
                Stroke::new(2.5, HIGHLIGHT)
            } else {
                Stroke::new(1.0, Color32::BLACK)
            };
            painter.circle(
                to_screen(node.x, node.y),
                NODE_RADIUS as f32,
                Color32::from_rgb(r, g, b),
                stroke,
            );
        }

        draw_legend(&self.color_scale, &painter, response.rect.min);

        // The single tooltip, already positioned by the controller.
        if let Some(tip) = hover.tooltip() {
            let anchor = match tip.anchor {
                TextAnchor::Start => Align2::LEFT_BOTTOM,
                TextAnchor::Middle => Align2::CENTER_BOTTOM,
                TextAnchor::End => Align2::RIGHT_BOTTOM,
            };
            painter.text(
                to_screen(tip.x + tip.dx, tip.y + tip.dy),
                anchor,
                &tip.text,
                FontId::proportional(TOOLTIP_FONT_SIZE as f32),
                ui.visuals().strong_text_color(),
            );
        }
    }
}

fn draw_legend(scale: &ColorScale, painter: &egui::Painter, surface_origin: Pos2) {
    let legend_origin = surface_origin + egui::vec2(500.0, 300.0);

    painter.text(
        surface_origin + egui::vec2(510.0, 280.0),
        Align2::LEFT_BOTTOM,
        "Category",
        FontId::proportional(16.0),
        Color32::BLACK,
    );

    for (i, key) in scale.domain().iter().enumerate() {
        let y = i as f32 * 19.0;
        let (r, g, b) = scale.rgb(key);
        painter.rect_filled(
            egui::Rect::from_min_size(legend_origin + egui::vec2(0.0, y), egui::vec2(15.0, 15.0)),
            0.0,
            Color32::from_rgb(r, g, b),
        );
        painter.text(
            legend_origin + egui::vec2(20.0, y + 12.0),
            Align2::LEFT_BOTTOM,
            key,
            FontId::proportional(12.0),
            Color32::BLACK,
        );
    }
}

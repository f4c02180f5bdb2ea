//! `ViewerApp` — the top-level egui application state.
//!
//! Methods are split across the sibling sub-modules:
//!
//! - `navigation` — data loading over a worker thread
//! - `content`    — chart painting and hover dispatch

pub mod navigation;
pub mod content;

use std::sync::mpsc;

use eframe::egui;

use dendra::data::Columns;
use dendra::engine::pipeline::{Chart, ChartError};
use dendra::interact::HoverController;
use dendra::render::color::ColorScale;

pub struct ViewerApp {
    pub source_input: String,
    pub chart: Option<Chart>,
    pub hover: Option<HoverController>,
    pub color_scale: ColorScale,
    pub error: Option<String>,
    pub loading: bool,
    pub load_rx: Option<mpsc::Receiver<Result<Chart, ChartError>>>,
}

impl ViewerApp {
    pub fn new(source: String) -> Self {
        Self {
            source_input: source,
            chart: None,
            hover: None,
            color_scale: ColorScale::new(Columns::default().0.clone()),
            error: None,
            loading: false,
            load_rx: None,
        }
    }
}

impl eframe::App for ViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.check_load();

        // Kick off the initial load once; after an error we wait for the
        // user to press Load again.
        if self.chart.is_none() && !self.loading && self.error.is_none() {
            self.start_load(ctx);
        }

        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label("Data:");
                ui.text_edit_singleline(&mut self.source_input);
                if ui.button("Load").clicked() {
                    self.start_load(ctx);
                }
                if self.loading {
                    ui.spinner();
                }
                if let Some(chart) = &self.chart {
                    ui.label(format!("{} cases", chart.record_count));
                }
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(error) = &self.error {
                ui.colored_label(egui::Color32::RED, format!("Load failed: {}", error));
                return;
            }
            self.draw_chart(ui);
        });
    }
}

//! Data-load lifecycle for `ViewerApp`.
//!
//! The pipeline runs once per load on a worker thread; the result comes back
//! over an `mpsc` channel and is picked up by `check_load` on the next
//! frame. All later work (hover handling) is synchronous UI code.

use std::sync::mpsc;

use eframe::egui;

use dendra::engine::pipeline::ChartEngine;
use dendra::interact::HoverController;

use super::ViewerApp;

impl ViewerApp {
    /// Start loading the current source on a worker thread.
    pub fn start_load(&mut self, ctx: &egui::Context) {
        if self.loading {
            return;
        }
        self.loading = true;
        self.error = None;

        let source = self.source_input.clone();
        let (tx, rx) = mpsc::channel();
        self.load_rx = Some(rx);

        let ctx = ctx.clone();
        std::thread::spawn(move || {
            let engine = ChartEngine::new();
            let result = engine.load_chart(&source);
            let _ = tx.send(result);
            ctx.request_repaint();
        });
    }

    /// Poll the load channel and install the finished chart or the error.
    pub fn check_load(&mut self) {
        let Some(rx) = &self.load_rx else { return };
        let Ok(result) = rx.try_recv() else { return };

        self.loading = false;
        self.load_rx = None;
        match result {
            Ok(chart) => {
                self.hover = Some(HoverController::new(&chart.hierarchy));
                self.chart = Some(chart);
            }
            Err(e) => {
                log::error!("{}", e);
                self.chart = None;
                self.hover = None;
                self.error = Some(e.to_string());
            }
        }
    }
}

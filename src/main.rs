use clap::Parser;
use eframe::egui;

use dendra::engine::pipeline::{ChartEngine, ChartError};
use dendra::render::color::ColorScale;
use dendra::render::svg::render_document;

mod app;

use app::ViewerApp;

/// Radial dendrogram explorer for categorical dispatch-call data
#[derive(Parser, Debug)]
#[command(name = "dendra", version, about)]
struct Cli {
    /// Data source: a CSV path or an http(s) URL
    #[arg(default_value = "data.csv")]
    source: String,

    /// Write the chart as SVG to this path and exit instead of opening
    /// the viewer
    #[arg(long, value_name = "PATH")]
    export: Option<String>,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    let source = cli.source;

    if let Some(path) = cli.export {
        if let Err(e) = export_svg(&source, &path) {
            log::error!("{}", e);
            std::process::exit(1);
        }
        return;
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([960.0, 540.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Dendra — Radial Call Explorer",
        options,
        Box::new(move |_cc| Ok(Box::new(ViewerApp::new(source)))),
    )
    .expect("Failed to start dendra");
}

/// Headless mode: run the pipeline once and write the SVG.
fn export_svg(source: &str, path: &str) -> Result<(), ChartError> {
    let engine = ChartEngine::new();
    let chart = engine.load_chart(source)?;
    let scale = ColorScale::new(chart.columns.0.clone());
    let document = render_document(&chart.hierarchy, &chart.columns, &scale);
    svg::save(path, &document).map_err(|e| ChartError {
        message: format!("Failed to save {}: {}", path, e),
        phase: "export",
    })?;
    log::info!("wrote {}", path);
    Ok(())
}

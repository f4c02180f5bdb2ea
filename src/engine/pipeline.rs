use crate::data::loader::load_records;
use crate::data::{Columns, Record};
use crate::layout::{radial_cluster, DIAMETER, PADDING};
use crate::tree::aggregate::{nest, select_root};
use crate::tree::Hierarchy;

/// A fully laid-out chart, ready to render or interact with.
#[derive(Debug, Clone)]
pub struct Chart {
    pub hierarchy: Hierarchy,
    pub columns: Columns,
    /// Total records routed into the selected root.
    pub record_count: usize,
}

/// Error during chart construction
#[derive(Debug)]
pub struct ChartError {
    pub message: String,
    pub phase: &'static str,
}

impl std::fmt::Display for ChartError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.phase, self.message)
    }
}

/// The chart pipeline: Load → Aggregate → Hierarchy → Radial layout.
///
/// One-shot: it runs to completion once per data load and has no retry or
/// recovery path. A failed load surfaces as a phase-tagged error for the
/// caller to display.
pub struct ChartEngine {
    columns: Columns,
    diameter: f64,
    padding: f64,
}

impl Default for ChartEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ChartEngine {
    pub fn new() -> Self {
        Self {
            columns: Columns::default(),
            diameter: DIAMETER,
            padding: PADDING,
        }
    }

    /// Override the category column names.
    pub fn with_columns(mut self, columns: Columns) -> Self {
        self.columns = columns;
        self
    }

    pub fn columns(&self) -> &Columns {
        &self.columns
    }

    fn radius(&self) -> f64 {
        self.diameter / 2.0 - self.padding
    }

    /// Load a data source (path or URL) through the full pipeline.
    pub fn load_chart(&self, source: &str) -> Result<Chart, ChartError> {
        let records = load_records(source, &self.columns).map_err(|e| ChartError {
            message: e.message,
            phase: "load",
        })?;
        self.process_records(&records)
    }

    /// Run the pipeline on already-loaded records (for testing).
    pub fn process_records(&self, records: &[Record]) -> Result<Chart, ChartError> {
        // Phase 2: Aggregate
        let groups = nest(records);
        let root = select_root(groups).map_err(|e| ChartError {
            message: e.message,
            phase: "aggregate",
        })?;

        // Phase 3: Hierarchy + display order
        let mut hierarchy = Hierarchy::build(&root);
        hierarchy.sort_siblings();

        // Phase 4: Radial layout
        radial_cluster(&mut hierarchy, self.radius());

        let record_count = hierarchy.nodes[hierarchy.root].value;
        log::info!(
            "chart built: {} nodes, {} records under \"{}\"",
            hierarchy.nodes.len(),
            record_count,
            hierarchy.nodes[hierarchy.root].key
        );

        Ok(Chart {
            hierarchy,
            columns: self.columns.clone(),
            record_count,
        })
    }
}

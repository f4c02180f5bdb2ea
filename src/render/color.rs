/// The Accent categorical palette (8 colors).
pub const ACCENT: [&str; 8] = [
    "#7fc97f", "#beaed4", "#fdc086", "#ffff99", "#386cb0", "#f0027f", "#bf5b17", "#666666",
];

/// Ordinal color scale: a fixed mapping from domain keys (the column names,
/// in depth order) to the Accent palette. Built once, read-only after.
#[derive(Debug, Clone)]
pub struct ColorScale {
    domain: Vec<String>,
}

impl ColorScale {
    pub fn new<I, S>(domain: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            domain: domain.into_iter().map(Into::into).collect(),
        }
    }

    pub fn domain(&self) -> &[String] {
        &self.domain
    }

    /// Hex color for a domain key. Keys outside the domain fall back to the
    /// palette's neutral gray.
    pub fn color(&self, key: &str) -> &'static str {
        match self.domain.iter().position(|k| k == key) {
            Some(i) => ACCENT[i % ACCENT.len()],
            None => ACCENT[ACCENT.len() - 1],
        }
    }

    /// Same color as (r, g, b) components, for painters that want numbers.
    pub fn rgb(&self, key: &str) -> (u8, u8, u8) {
        parse_hex(self.color(key))
    }
}

fn parse_hex(hex: &str) -> (u8, u8, u8) {
    let hex = hex.trim_start_matches('#');
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).unwrap_or(0);
    (channel(0), channel(2), channel(4))
}

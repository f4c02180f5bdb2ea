pub mod loader;

/// Number of grouping levels: City → Call Type → Call Type Group → Neighborhood.
pub const LEVELS: usize = 4;

/// The four category columns, in nesting order.
///
/// Header names are configuration, not a schema: the shipped dataset
/// misspells the last column ("Neighborhoood") and we match it verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Columns(pub [String; LEVELS]);

impl Default for Columns {
    fn default() -> Self {
        Columns([
            "City".to_string(),
            "Call Type".to_string(),
            "Call Type Group".to_string(),
            "Neighborhoood".to_string(),
        ])
    }
}

impl Columns {
    pub fn name(&self, level: usize) -> &str {
        &self.0[level]
    }
}

/// One input row projected onto the four category columns.
///
/// Values are arbitrary strings; the empty string is a valid key and means
/// "no value at this level".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub fields: [String; LEVELS],
}

impl Record {
    pub fn new(
        city: impl Into<String>,
        call_type: impl Into<String>,
        group: impl Into<String>,
        neighborhood: impl Into<String>,
    ) -> Self {
        Self {
            fields: [
                city.into(),
                call_type.into(),
                group.into(),
                neighborhood.into(),
            ],
        }
    }

    pub fn key(&self, level: usize) -> &str {
        &self.fields[level]
    }
}

use std::io::Read;

use url::Url;

use crate::data::{Columns, Record, LEVELS};

/// Error while loading the input table
#[derive(Debug)]
pub struct LoadError {
    pub message: String,
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Load records from a local path or an http(s) URL.
pub fn load_records(source: &str, columns: &Columns) -> Result<Vec<Record>, LoadError> {
    let raw = if source.starts_with("http://") || source.starts_with("https://") {
        fetch_text(source)?
    } else {
        std::fs::read_to_string(source).map_err(|e| LoadError {
            message: format!("Failed to read {}: {}", source, e),
        })?
    };
    parse_records(raw.as_bytes(), columns)
}

/// Parse a delimited table into records.
///
/// Extraction is header-driven: each configured column is looked up in the
/// header row, and a column missing from the file yields the empty-string
/// key for every row rather than an error.
pub fn parse_records<R: Read>(reader: R, columns: &Columns) -> Result<Vec<Record>, LoadError> {
    let mut csv_reader = csv::ReaderBuilder::new().flexible(true).from_reader(reader);

    let headers = csv_reader
        .headers()
        .map_err(|e| LoadError {
            message: format!("Failed to read header row: {}", e),
        })?
        .clone();

    let indices: [Option<usize>; LEVELS] = std::array::from_fn(|level| {
        headers.iter().position(|h| h == columns.name(level))
    });

    let mut records = Vec::new();
    for row in csv_reader.records() {
        let row = row.map_err(|e| LoadError {
            message: format!("Malformed row: {}", e),
        })?;
        let fields: [String; LEVELS] = std::array::from_fn(|level| {
            indices[level]
                .and_then(|i| row.get(i))
                .unwrap_or("")
                .to_string()
        });
        records.push(Record { fields });
    }

    log::info!("loaded {} records", records.len());
    Ok(records)
}

/// Fetch a URL and return the response body as text (blocking).
fn fetch_text(url_str: &str) -> Result<String, LoadError> {
    let parsed = Url::parse(url_str).map_err(|e| LoadError {
        message: format!("Invalid URL: {}", e),
    })?;

    let client = reqwest::blocking::Client::builder()
        .user_agent("dendra/0.2")
        .timeout(std::time::Duration::from_secs(15))
        .redirect(reqwest::redirect::Policy::limited(10))
        .build()
        .map_err(|e| LoadError {
            message: format!("Client error: {}", e),
        })?;

    let response = client
        .get(parsed.as_str())
        .header("Accept", "text/csv,text/plain;q=0.9,*/*;q=0.8")
        .send()
        .map_err(|e| LoadError {
            message: format!("Request failed: {}", e),
        })?;

    if !response.status().is_success() {
        return Err(LoadError {
            message: format!("HTTP {} for {}", response.status().as_u16(), url_str),
        });
    }

    response.text().map_err(|e| LoadError {
        message: format!("Failed to read body: {}", e),
    })
}

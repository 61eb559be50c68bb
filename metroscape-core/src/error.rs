use thiserror::Error;

#[derive(Debug, Error)]
pub enum MetroscapeError {
    #[error("Series '{0}' is empty")]
    EmptySeries(String),

    #[error("Index '{name}' has {actual} actual samples but {ideal} ideal samples")]
    SeriesLengthMismatch {
        name: String,
        actual: usize,
        ideal: usize,
    },

    #[error("Unknown index '{0}' (expected air, water, noise or human)")]
    UnknownIndex(String),

    #[error("Unknown infrastructure category '{0}' (expected residential, commercial or transport)")]
    UnknownCategory(String),

    #[error("Value {value} for '{field}' is outside the supported range {range}")]
    OutOfDomain {
        field: &'static str,
        value: f64,
        range: &'static str,
    },

    #[error("I/O error for file '{0}': {1}")]
    FileIO(String, #[source] std::io::Error),

    #[error("Failed to parse YAML from '{0}': {1}")]
    YamlParsing(String, #[source] serde_yaml::Error),

    #[error("Failed to serialize JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Failed to write CSV '{0}': {1}")]
    CsvError(String, #[source] csv::Error),
}

pub type Result<T> = std::result::Result<T, MetroscapeError>;

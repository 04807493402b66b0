use thiserror::Error;

/// An enumerated field received a value outside its closed set.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown {kind} \"{value}\"")]
pub struct InvalidVariant {
    /// The variant family, e.g. "button variant".
    pub kind: &'static str,
    /// The rejected input.
    pub value: String,
}

impl InvalidVariant {
    pub fn new(kind: &'static str, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}

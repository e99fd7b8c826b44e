pub mod catalog;
pub mod generator;
pub mod model;
pub mod prediction;

use std::fmt;

/// Error surface shared by both pipelines. `Validation` is user-correctable
/// (empty required text) and maps to a 400; everything else is `Failed` and
/// maps to a 500.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestError {
    Validation(String),
    Failed(String),
}

impl RequestError {
    pub fn is_validation(&self) -> bool {
        matches!(self, RequestError::Validation(_))
    }

    pub fn message(&self) -> &str {
        match self {
            RequestError::Validation(message) => message,
            RequestError::Failed(message) => message,
        }
    }
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for RequestError {}

pub fn format_number(value: u64) -> String {
    let mut chars: Vec<char> = value.to_string().chars().collect();
    let mut result = String::new();
    let mut count = 0usize;

    while let Some(ch) = chars.pop() {
        if count == 3 {
            result.push(',');
            count = 0;
        }
        result.push(ch);
        count += 1;
    }

    result.chars().rev().collect()
}

pub fn format_float(value: f64, digits: usize) -> String {
    format!("{:.1$}", value, digits)
}

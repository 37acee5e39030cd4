use thiserror::Error;

#[derive(Error, Debug)]
pub enum PcsError {
    #[error("Parsed value is invalid: {}", display_value(.value))]
    InvalidValue { value: Option<String> },

    #[error("Invalid URL in {field}: '{value}' ({reason})")]
    InvalidUrl {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Format error: {message}")]
    FormatError { message: String },

    #[error("Invalid argument '{argument}': {reason}")]
    InvalidArgument { argument: String, reason: String },

    #[error("Invalid regex pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    #[error("<{element}> is missing attribute '{attribute}'")]
    MissingAttribute { element: String, attribute: String },

    #[error("Configuration error in {field}: {message}")]
    ConfigError { field: String, message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl PcsError {
    pub fn invalid_value(value: Option<&str>) -> Self {
        PcsError::InvalidValue {
            value: value.map(str::to_string),
        }
    }

    pub fn format_error(message: impl Into<String>) -> Self {
        PcsError::FormatError {
            message: message.into(),
        }
    }
}

fn display_value(value: &Option<String>) -> String {
    match value {
        Some(v) => format!("'{}'", v),
        None => "None".to_string(),
    }
}

pub type Result<T> = std::result::Result<T, PcsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_value_message() {
        assert_eq!(
            PcsError::invalid_value(Some("abc")).to_string(),
            "Parsed value is invalid: 'abc'"
        );
        assert_eq!(
            PcsError::invalid_value(None).to_string(),
            "Parsed value is invalid: None"
        );
    }
}

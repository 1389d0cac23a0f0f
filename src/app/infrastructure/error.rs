use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config parse error: {0}")]
    TomlDe(#[from] toml::de::Error),

    #[error("Config write error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    #[error("{kind} node is missing required field `{field}`")]
    MissingField {
        kind: &'static str,
        field: &'static str,
    },

    #[error("Invalid style value: {0}")]
    InvalidStyle(String),

    #[error("Markdown error: {0}")]
    Markdown(String),

    #[error("Unknown page: {0}")]
    UnknownPage(String),
}

/// Convenience type alias for Results with AppError
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let app_err: AppError = io_err.into();
        assert!(matches!(app_err, AppError::Io(_)));
        assert!(app_err.to_string().contains("file not found"));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let app_err: AppError = json_err.into();
        assert!(matches!(app_err, AppError::Json(_)));
    }

    #[test]
    fn test_error_display() {
        let err = AppError::MissingField { kind: "link", field: "href" };
        assert_eq!(err.to_string(), "link node is missing required field `href`");

        let err = AppError::InvalidStyle("12furlongs".to_string());
        assert_eq!(err.to_string(), "Invalid style value: 12furlongs");

        let err = AppError::UnknownPage("blog".to_string());
        assert_eq!(err.to_string(), "Unknown page: blog");
    }
}

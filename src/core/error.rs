use std::fmt;

/// Comprehensive error types for datasense operations
#[derive(Debug)]
pub enum DataSenseError {
    /// IO error (file operations, etc.)
    Io(std::io::Error),

    /// Configuration error
    Config(String),

    /// Input validation error
    Validation(String),

    /// YAML parsing error
    YamlParsing(serde_yaml::Error),

    /// JSON serialization error
    JsonSerialization(serde_json::Error),

    /// File not found error
    FileNotFound(String),
}

impl fmt::Display for DataSenseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSenseError::Io(err) => write!(f, "IO error: {err}"),
            DataSenseError::Config(msg) => write!(f, "Configuration error: {msg}"),
            DataSenseError::Validation(msg) => write!(f, "Validation error: {msg}"),
            DataSenseError::YamlParsing(err) => write!(f, "YAML parsing error: {err}"),
            DataSenseError::JsonSerialization(err) => write!(f, "JSON serialization error: {err}"),
            DataSenseError::FileNotFound(path) => write!(f, "File not found: {path}"),
        }
    }
}

impl std::error::Error for DataSenseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DataSenseError::Io(err) => Some(err),
            DataSenseError::YamlParsing(err) => Some(err),
            DataSenseError::JsonSerialization(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for DataSenseError {
    fn from(err: std::io::Error) -> Self {
        DataSenseError::Io(err)
    }
}

impl From<serde_yaml::Error> for DataSenseError {
    fn from(err: serde_yaml::Error) -> Self {
        DataSenseError::YamlParsing(err)
    }
}

impl From<serde_json::Error> for DataSenseError {
    fn from(err: serde_json::Error) -> Self {
        DataSenseError::JsonSerialization(err)
    }
}

/// Type alias for Results using DataSenseError
pub type Result<T> = std::result::Result<T, DataSenseError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_error_display() {
        let config_error = DataSenseError::Config("Invalid log level".to_string());
        assert_eq!(
            format!("{config_error}"),
            "Configuration error: Invalid log level"
        );

        let file_error = DataSenseError::FileNotFound("/path/to/config.yaml".to_string());
        assert_eq!(
            format!("{file_error}"),
            "File not found: /path/to/config.yaml"
        );
    }

    #[test]
    fn test_error_from_io() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "test");
        let datasense_error = DataSenseError::from(io_error);

        match datasense_error {
            DataSenseError::Io(_) => {} // Expected
            _ => panic!("Expected Io variant"),
        }
    }

    #[test]
    fn test_error_from_yaml() {
        let yaml_error = serde_yaml::from_str::<serde_yaml::Value>("foo: [unclosed").unwrap_err();
        let datasense_error = DataSenseError::from(yaml_error);

        match datasense_error {
            DataSenseError::YamlParsing(_) => {} // Expected
            _ => panic!("Expected YamlParsing variant"),
        }
    }

    #[test]
    fn test_error_from_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("{invalid").unwrap_err();
        let datasense_error = DataSenseError::from(json_error);

        match datasense_error {
            DataSenseError::JsonSerialization(_) => {} // Expected
            _ => panic!("Expected JsonSerialization variant"),
        }
    }

    #[test]
    fn test_string_error_variants_display() {
        let errors = vec![
            DataSenseError::Config("Bad config".to_string()),
            DataSenseError::Validation("The text is empty.".to_string()),
            DataSenseError::FileNotFound("/missing".to_string()),
        ];

        for error in errors {
            let display_str = format!("{error}");
            assert!(!display_str.is_empty());
            assert!(display_str.contains(":"));
        }
    }

    #[test]
    fn test_error_source() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "test");
        let datasense_error = DataSenseError::Io(io_error);

        assert!(datasense_error.source().is_some());

        let config_error = DataSenseError::Config("test".to_string());
        assert!(config_error.source().is_none());

        let validation_error = DataSenseError::Validation("test".to_string());
        assert!(validation_error.source().is_none());
    }

    #[test]
    fn test_error_source_chain() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let datasense_error = DataSenseError::Io(io_error);

        let source = datasense_error.source();
        assert!(source.is_some());

        let source_display = format!("{}", source.unwrap());
        assert!(source_display.contains("file not found"));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<DataSenseError>();
    }

    #[test]
    fn test_result_type_alias() {
        let success: Result<i32> = Ok(42);
        let error: Result<i32> = Err(DataSenseError::Config("test".to_string()));

        assert!(success.is_ok());
        assert!(error.is_err());
        if let Ok(value) = success {
            assert_eq!(value, 42);
        }
    }

    #[test]
    fn test_error_debug_format() {
        let errors = vec![
            DataSenseError::Config("debug config".to_string()),
            DataSenseError::Validation("debug validation".to_string()),
            DataSenseError::FileNotFound("debug file".to_string()),
        ];

        for error in errors {
            let debug_str = format!("{error:?}");
            assert!(!debug_str.is_empty());
            assert!(debug_str.contains("debug"));
        }
    }
}

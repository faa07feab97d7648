use thiserror::Error;

#[derive(Error, Debug)]
pub enum MapError {
    #[error("Cannot open map '{path}': {source}")]
    SourceUnavailable {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Inconsistent row length at line {line}: expected {expected} columns, found {found}")]
    FormatError {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("Allocation failed: {message}")]
    AllocationError { message: String },

    #[error("An antenna already exists at ({x}, {y})")]
    DuplicatePosition { x: usize, y: usize },

    #[error("No antennas found in the map")]
    EmptyRegistry,

    #[error("Position ({x}, {y}) is outside the {rows}x{columns} grid")]
    OutOfBounds {
        x: usize,
        y: usize,
        rows: usize,
        columns: usize,
    },

    #[error("Invalid antenna frequency {frequency:?}")]
    InvalidFrequency { frequency: char },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Storage,
    Format,
    Resource,
    Registry,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl MapError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            MapError::SourceUnavailable { .. } | MapError::IoError(_) => ErrorCategory::Storage,
            MapError::FormatError { .. } | MapError::SerializationError(_) => ErrorCategory::Format,
            MapError::AllocationError { .. } => ErrorCategory::Resource,
            MapError::DuplicatePosition { .. }
            | MapError::EmptyRegistry
            | MapError::OutOfBounds { .. }
            | MapError::InvalidFrequency { .. } => ErrorCategory::Registry,
            MapError::ConfigError { .. } | MapError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
        }
    }

    /// Rejected mutations are `Low`: the registry is left as it was.
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            MapError::DuplicatePosition { .. }
            | MapError::OutOfBounds { .. }
            | MapError::InvalidFrequency { .. } => ErrorSeverity::Low,
            MapError::EmptyRegistry => ErrorSeverity::Medium,
            MapError::SourceUnavailable { .. }
            | MapError::FormatError { .. }
            | MapError::ConfigError { .. }
            | MapError::InvalidConfigValueError { .. }
            | MapError::SerializationError(_) => ErrorSeverity::High,
            MapError::AllocationError { .. } | MapError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    /// Process exit status. Low-severity rejections are recorded by the engine
    /// instead of ending the run, so they share the generic failure code.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::Critical => 3,
            ErrorSeverity::Low | ErrorSeverity::High => 1,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            MapError::SourceUnavailable { .. } => "Check that the map file exists and is readable",
            MapError::FormatError { .. } => "Make every row of the map the same length",
            MapError::AllocationError { .. } => "Free some memory or use a smaller map",
            MapError::DuplicatePosition { .. } => "Pick a free cell or remove the existing antenna first",
            MapError::EmptyRegistry => "Add at least one antenna symbol to the map",
            MapError::OutOfBounds { .. } => "Use coordinates inside the loaded grid",
            MapError::InvalidFrequency { .. } => "Use a printable, non-'.' character as frequency",
            MapError::IoError(_) => "Check disk space and file permissions",
            MapError::SerializationError(_) => "Report output could not be encoded; try text format",
            MapError::ConfigError { .. } | MapError::InvalidConfigValueError { .. } => {
                "Review the configuration file and command line arguments"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            MapError::SourceUnavailable { path, .. } => format!("Could not open the map file {}", path),
            MapError::FormatError { line, .. } => {
                format!("Rows of different lengths found (line {})", line)
            }
            MapError::EmptyRegistry => "No antennas found.".to_string(),
            other => other.to_string(),
        }
    }
}

impl From<std::collections::TryReserveError> for MapError {
    fn from(err: std::collections::TryReserveError) -> Self {
        MapError::AllocationError {
            message: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, MapError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejections_are_low_severity() {
        let err = MapError::DuplicatePosition { x: 1, y: 2 };
        assert_eq!(err.severity(), ErrorSeverity::Low);
        assert_eq!(err.category(), ErrorCategory::Registry);
        assert_eq!(err.to_string(), "An antenna already exists at (1, 2)");
    }

    #[test]
    fn test_exit_codes_are_never_success() {
        assert_eq!(MapError::EmptyRegistry.exit_code(), 2);
        assert_eq!(
            MapError::AllocationError {
                message: "oom".to_string()
            }
            .exit_code(),
            3
        );
        assert_eq!(MapError::DuplicatePosition { x: 0, y: 0 }.exit_code(), 1);
        assert_eq!(
            MapError::FormatError {
                line: 2,
                expected: 3,
                found: 4
            }
            .exit_code(),
            1
        );
    }

    #[test]
    fn test_source_unavailable_message() {
        let err = MapError::SourceUnavailable {
            path: "missing.txt".to_string(),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert_eq!(err.user_friendly_message(), "Could not open the map file missing.txt");
    }
}

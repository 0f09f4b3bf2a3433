use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlannerError {
    #[error("Invalid coordinates: latitude {latitude}, longitude {longitude}")]
    InvalidCoordinates { latitude: f64, longitude: f64 },

    #[error("Coordinates must be a [latitude, longitude] pair of numbers, got {value}")]
    MalformedCoordinates { value: String },

    #[error("Missing required field: {field}")]
    MissingField { field: String },

    #[error("Invalid value '{value}' for {field}: expected \"good\" or \"bad\"")]
    InvalidEnum { field: String, value: String },

    #[error("Invalid field {field}: {reason}")]
    InvalidField { field: String, reason: String },

    #[error("Place does not exist: {place_id}")]
    UnresolvedReference { place_id: String },

    #[error("A {entity} named '{name}' already exists")]
    DuplicateName { entity: String, name: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid configuration value for {field} ('{value}'): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Storage error: {message}")]
    StorageError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Conflict,
    NotFound,
    Configuration,
    Storage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl PlannerError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            PlannerError::InvalidCoordinates { .. }
            | PlannerError::MalformedCoordinates { .. }
            | PlannerError::MissingField { .. }
            | PlannerError::InvalidEnum { .. }
            | PlannerError::InvalidField { .. } => ErrorCategory::Validation,
            PlannerError::DuplicateName { .. } => ErrorCategory::Conflict,
            PlannerError::UnresolvedReference { .. } => ErrorCategory::NotFound,
            PlannerError::ConfigError { .. } | PlannerError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            PlannerError::IoError(_)
            | PlannerError::SerializationError(_)
            | PlannerError::CsvError(_)
            | PlannerError::StorageError { .. } => ErrorCategory::Storage,
        }
    }

    /// Request rejections are recoverable by the caller; anything touching
    /// the store or configuration is not.
    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Validation | ErrorCategory::Conflict | ErrorCategory::NotFound => {
                ErrorSeverity::Medium
            }
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Storage => ErrorSeverity::Critical,
        }
    }

    /// Process exit status for the command line front end.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            PlannerError::InvalidCoordinates { .. } | PlannerError::MalformedCoordinates { .. } => {
                "Send [latitude, longitude] with latitude in [-90, 90] and longitude in [-180, 180]".to_string()
            }
            PlannerError::MissingField { field } => {
                format!("Provide a value for '{}'", field)
            }
            PlannerError::InvalidEnum { .. } => "Use exactly \"good\" or \"bad\"".to_string(),
            PlannerError::InvalidField { field, .. } => {
                format!("Check the type of '{}'", field)
            }
            PlannerError::UnresolvedReference { .. } => {
                "Create the place first, or list places to find its id".to_string()
            }
            PlannerError::DuplicateName { entity, .. } => {
                format!("Pick a {} name that is not in use", entity)
            }
            PlannerError::ConfigError { .. } | PlannerError::InvalidConfigValueError { .. } => {
                "Check the configuration file and command line flags".to_string()
            }
            PlannerError::IoError(_) | PlannerError::StorageError { .. } => {
                "Check that the data file exists and is writable".to_string()
            }
            PlannerError::SerializationError(_) => {
                "The data file may be corrupt; restore it from a backup".to_string()
            }
            PlannerError::CsvError(_) => "Try another output format".to_string(),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Validation => format!("Rejected: {}", self),
            ErrorCategory::Conflict => format!("Conflict: {}", self),
            ErrorCategory::NotFound => format!("Not found: {}", self),
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
            ErrorCategory::Storage => format!("Storage failure: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, PlannerError>;

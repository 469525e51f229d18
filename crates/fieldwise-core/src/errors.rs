use thiserror::Error;

/// Result type alias using CompareError
pub type Result<T> = std::result::Result<T, CompareError>;

/// Error taxonomy for Fieldwise operations
///
/// All variants abort the operation that raised them before any per-property
/// work happens; callers never observe a partially filled result set. Failures
/// inside a single property's comparison are carried as [`CompareFailure`]
/// values on that property's result instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CompareError {
    /// A required identifier was absent (e.g. an empty property name)
    #[error("required argument is absent: {name}")]
    NullArgument { name: String },

    /// A compared object's runtime type does not match the session's
    /// descriptor exactly (no subtype leniency)
    #[error("type mismatch for {side} object: expected {expected}, got {actual}")]
    TypeMismatch {
        side: &'static str,
        expected: String,
        actual: String,
    },

    /// Both compare arguments are the identical instance
    #[error("cannot compare an instance of {type_name} against itself")]
    SameInstance { type_name: String },

    /// A property name does not resolve on the expected type
    #[error("no property named '{property}' on type {type_name}")]
    InvalidProperty {
        property: String,
        type_name: String,
    },

    /// A type was referenced for comparison without ever being scanned
    #[error("no type information for {type_name}: type was never scanned")]
    NoTypeInformation { type_name: String },
}

impl CompareError {
    /// Get the stable error code for this error
    ///
    /// Codes are stable across releases and suitable for programmatic
    /// handling and test assertions.
    pub fn code(&self) -> &'static str {
        match self {
            CompareError::NullArgument { .. } => "ERR_NULL_ARGUMENT",
            CompareError::TypeMismatch { .. } => "ERR_TYPE_MISMATCH",
            CompareError::SameInstance { .. } => "ERR_SAME_INSTANCE",
            CompareError::InvalidProperty { .. } => "ERR_INVALID_PROPERTY",
            CompareError::NoTypeInformation { .. } => "ERR_NO_TYPE_INFORMATION",
        }
    }
}

/// Non-fatal failure captured while comparing a single property
///
/// Produced when a comparer returns an error or when no comparer is
/// registered for a property's value type. Carried on the property's result
/// record; never propagated as a `CompareError`, and never aborts the walk.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct CompareFailure {
    message: String,
}

impl CompareFailure {
    /// Create a new failure with the given message
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Get the failure message
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Outcome of checking one field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldResult {
    valid: bool,
    message: Option<String>,
}

impl FieldResult {
    /// A passing result with no message.
    pub fn valid() -> Self {
        Self {
            valid: true,
            message: None,
        }
    }

    /// A failing result carrying the message to display.
    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            message: Some(message.into()),
        }
    }

    /// Check if the field passed validation.
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// The error message, if the field failed.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

/// Information about a single field validation error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Field name.
    pub field_name: String,
    /// ID of the input element (for focusing).
    pub element_id: String,
    /// Error message.
    pub message: String,
}

use std::fmt::Display;

/// Domain error taxonomy shared by every layer.
///
/// Each variant is a distinct outcome so callers can render distinct states
/// ("username taken" vs "please log in" vs "something went wrong").
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} {key}")]
    NotFound { entity: &'static str, key: String },

    #[error("Validation failed: {message}")]
    Validation {
        message: String,
        /// Names of the input fields at fault, sorted.
        fields: Vec<String>,
    },

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// A lookup by id or username that matched nothing.
    pub fn not_found(entity: &'static str, key: impl Display) -> Self {
        Self::NotFound {
            entity,
            key: key.to_string(),
        }
    }

    /// A validation failure attributed to a single input field.
    pub fn invalid_field(field: &str, message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            fields: vec![field.to_string()],
        }
    }
}

impl From<validator::ValidationErrors> for CoreError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let field_errors = errors.field_errors();

        let mut fields: Vec<String> = field_errors.keys().map(|k| k.to_string()).collect();
        fields.sort();

        let mut details: Vec<String> = field_errors
            .iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |e| match &e.message {
                    Some(msg) => format!("{field}: {msg}"),
                    None => format!("{field}: {}", e.code),
                })
            })
            .collect();
        details.sort();

        Self::Validation {
            message: details.join("; "),
            fields,
        }
    }
}

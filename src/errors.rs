use thiserror::Error;

/// Error type that captures every failure the ledger core can surface.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// Caller input was missing or invalid. Rejected before any write.
    #[error("invalid {field}: {message}")]
    Validation { field: String, message: String },

    /// A referenced entity does not resolve. Aborts only the affected unit;
    /// batch operations exclude the entry rather than the whole run.
    #[error("{entity} `{id}` not found")]
    NotFound { entity: &'static str, id: String },

    /// A second active enrolment for the same holder and course.
    #[error("holder `{holder_id}` already has an active enrolment in course `{course_id}`")]
    DuplicateActive { holder_id: String, course_id: String },

    /// The billing period already has a fee-run batch recorded.
    #[error("fee run for period `{period}` has already been applied")]
    FeeRunAlreadyApplied { period: String },

    /// The persistence layer cannot be reached or refused the write. Nothing
    /// partially committed should be treated as final; retrying is safe.
    #[error("storage error: {0}")]
    Storage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

impl LedgerError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn not_found(entity: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity,
            id: id.into(),
        }
    }
}

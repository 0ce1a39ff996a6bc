/// Domain failures detected before a request touches storage.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    /// A field failed a presence or shape rule. Carries the first failing rule's message.
    #[error("{0}")]
    Validation(String),

    /// A mutation that addresses an existing record arrived without an id.
    #[error("id is required")]
    IdentityRequired,
}

impl CoreError {
    /// Shorthand for building a [`CoreError::Validation`].
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}

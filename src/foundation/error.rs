/// Convenience result type used across the crate.
pub type SiteResult<T> = Result<T, SiteError>;

/// Top-level error taxonomy used by site APIs.
#[derive(thiserror::Error, Debug)]
pub enum SiteError {
    /// Invalid configuration, registry or user-provided data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while resolving layout geometry or navigation targets.
    #[error("layout error: {0}")]
    Layout(String),

    /// Errors from the contact submission path.
    #[error("contact error: {0}")]
    Contact(String),

    /// Errors while loading a static data feed.
    #[error("feed error: {0}")]
    Feed(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SiteError {
    /// Build a [`SiteError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`SiteError::Layout`] value.
    pub fn layout(msg: impl Into<String>) -> Self {
        Self::Layout(msg.into())
    }

    /// Build a [`SiteError::Contact`] value.
    pub fn contact(msg: impl Into<String>) -> Self {
        Self::Contact(msg.into())
    }

    /// Build a [`SiteError::Feed`] value.
    pub fn feed(msg: impl Into<String>) -> Self {
        Self::Feed(msg.into())
    }

    /// Build a [`SiteError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for SiteError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;

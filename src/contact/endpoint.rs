use serde_json::{Value, json};

use crate::foundation::error::{SiteError, SiteResult};

/// 400 reply for a body missing `email` or `message`.
pub const REQUIRED_FIELDS_MESSAGE: &str = "Email and message are required";
/// 500 reply for a body that cannot be processed.
pub const PROCESSING_FAILED_MESSAGE: &str = "Failed to process contact form";

/// Where and how the mailto fallback addresses submissions.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    /// Address the mailto fallback writes to.
    pub recipient: String,
    /// Mail subject line.
    pub subject: String,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            recipient: "centerforrisc@gmail.com".to_string(),
            subject: "RISC website contact".to_string(),
        }
    }
}

impl ContactConfig {
    /// The recipient must look like an email address.
    pub fn validate(&self) -> SiteResult<()> {
        let recipient = self.recipient.trim();
        if recipient.is_empty() || !recipient.contains('@') {
            return Err(SiteError::validation(
                "contact recipient must be an email address",
            ));
        }
        Ok(())
    }

    /// `mailto:` URL carrying `submission`, with subject and body URI-component encoded.
    pub fn mailto_url(&self, submission: &ContactSubmission) -> String {
        let body = format!(
            "From: {}\n\n{}",
            submission.email.trim(),
            submission.message
        );
        format!(
            "mailto:{}?subject={}&body={}",
            self.recipient.trim(),
            urlencoding::encode(&self.subject),
            urlencoding::encode(&body)
        )
    }
}

/// A validated contact form submission.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ContactSubmission {
    /// Sender address as typed.
    pub email: String,
    /// Message body as typed.
    pub message: String,
}

impl ContactSubmission {
    /// Both fields must contain something other than whitespace. The text is kept as
    /// typed, trailing newlines included.
    pub fn new(email: &str, message: &str) -> SiteResult<Self> {
        if email.trim().is_empty() || message.trim().is_empty() {
            return Err(SiteError::contact(REQUIRED_FIELDS_MESSAGE));
        }
        Ok(Self {
            email: email.to_string(),
            message: message.to_string(),
        })
    }
}

/// Endpoint reply body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContactReply {
    /// `{"success": true}`
    Success,
    /// `{"error": message}`
    Error(String),
}

impl ContactReply {
    /// Wire body.
    pub fn to_json(&self) -> Value {
        match self {
            Self::Success => json!({ "success": true }),
            Self::Error(message) => json!({ "error": message }),
        }
    }

    /// Parse a reply body as returned by [`handle_contact`].
    pub fn from_json(body: &Value) -> SiteResult<Self> {
        if body.get("success").and_then(Value::as_bool) == Some(true) {
            return Ok(Self::Success);
        }
        match body.get("error").and_then(Value::as_str) {
            Some(message) => Ok(Self::Error(message.to_string())),
            None => Err(SiteError::contact("unrecognized contact reply body")),
        }
    }
}

/// HTTP-level outcome of a contact POST.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactResponse {
    /// HTTP status code.
    pub status: u16,
    /// Reply body.
    pub reply: ContactReply,
}

impl ContactResponse {
    fn new(status: u16, reply: ContactReply) -> Self {
        Self { status, reply }
    }

    /// Status 200.
    pub fn is_success(&self) -> bool {
        self.status == 200
    }

    /// JSON body for the reply.
    pub fn body(&self) -> Value {
        self.reply.to_json()
    }
}

/// Validate and accept a contact POST body.
///
/// Malformed JSON is a processing failure (500); a well-formed body lacking a non-empty
/// `email` or `message` string is a client error (400).
#[tracing::instrument(skip(body), fields(len = body.len()))]
pub fn handle_contact(body: &str) -> ContactResponse {
    let parsed: Value = match serde_json::from_str(body) {
        Ok(v) => v,
        Err(err) => {
            tracing::error!(error = %err, "error processing contact form");
            return ContactResponse::new(
                500,
                ContactReply::Error(PROCESSING_FAILED_MESSAGE.to_string()),
            );
        }
    };
    if parsed.is_null() {
        tracing::error!("error processing contact form: null body");
        return ContactResponse::new(
            500,
            ContactReply::Error(PROCESSING_FAILED_MESSAGE.to_string()),
        );
    }

    let field = |name: &str| parsed.get(name).and_then(Value::as_str).unwrap_or_default();
    match ContactSubmission::new(field("email"), field("message")) {
        Ok(submission) => {
            tracing::info!(
                email = %submission.email,
                message_len = submission.message.len(),
                "contact form submission"
            );
            ContactResponse::new(200, ContactReply::Success)
        }
        Err(_) => ContactResponse::new(
            400,
            ContactReply::Error(REQUIRED_FIELDS_MESSAGE.to_string()),
        ),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/contact/endpoint.rs"]
mod tests;

use crate::contact::endpoint::{
    ContactConfig, ContactReply, ContactSubmission, REQUIRED_FIELDS_MESSAGE, handle_contact,
};
use crate::foundation::error::{SiteError, SiteResult};

/// Client-side form status.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "status", content = "message", rename_all = "camelCase")]
pub enum FormStatus {
    /// Inputs enabled, nothing sent.
    #[default]
    Editing,
    /// A submission is outstanding.
    Submitting,
    /// The endpoint accepted the submission.
    Sent,
    /// Shown inline; the user decides whether to submit again.
    Failed(String),
}

/// Delivery path for a submission.
pub trait ContactTransport {
    /// Deliver `submission` and return the endpoint's reply.
    fn send(&mut self, submission: &ContactSubmission) -> SiteResult<ContactReply>;
}

/// Posts to the in-process endpoint handler.
#[derive(Debug, Default)]
pub struct EndpointTransport;

impl ContactTransport for EndpointTransport {
    fn send(&mut self, submission: &ContactSubmission) -> SiteResult<ContactReply> {
        let body = serde_json::to_string(submission)?;
        Ok(handle_contact(&body).reply)
    }
}

/// Hands the submission to the visitor's mail client via a `mailto:` URL.
#[derive(Debug, Default)]
pub struct MailtoTransport {
    /// Recipient and subject.
    pub config: ContactConfig,
    /// URLs handed to the mail client, oldest first.
    pub opened: Vec<String>,
}

impl ContactTransport for MailtoTransport {
    fn send(&mut self, submission: &ContactSubmission) -> SiteResult<ContactReply> {
        self.opened.push(self.config.mailto_url(submission));
        Ok(ContactReply::Success)
    }
}

/// Contact form state: `Editing → Submitting → Sent | Failed`.
///
/// Inputs are frozen while a submission is outstanding and a second submit is rejected.
/// Failures are never retried automatically.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    email: String,
    message: String,
    status: FormStatus,
}

impl ContactForm {
    /// Email field contents.
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Message field contents.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Current status.
    pub fn status(&self) -> &FormStatus {
        &self.status
    }

    /// Inputs are frozen only while submitting.
    pub fn inputs_enabled(&self) -> bool {
        self.status != FormStatus::Submitting
    }

    fn ensure_editable(&self) -> SiteResult<()> {
        if self.inputs_enabled() {
            Ok(())
        } else {
            Err(SiteError::contact("submission in progress"))
        }
    }

    /// Replace the email field; rejected while submitting.
    pub fn set_email(&mut self, email: impl Into<String>) -> SiteResult<()> {
        self.ensure_editable()?;
        self.email = email.into();
        Ok(())
    }

    /// Replace the message field; rejected while submitting.
    pub fn set_message(&mut self, message: impl Into<String>) -> SiteResult<()> {
        self.ensure_editable()?;
        self.message = message.into();
        Ok(())
    }

    /// Validate and enter `Submitting`. Validation failures leave the form editable and
    /// are reported inline.
    pub fn begin_submit(&mut self) -> SiteResult<ContactSubmission> {
        self.ensure_editable()?;
        match ContactSubmission::new(&self.email, &self.message) {
            Ok(submission) => {
                self.status = FormStatus::Submitting;
                Ok(submission)
            }
            Err(err) => {
                self.status = FormStatus::Failed(REQUIRED_FIELDS_MESSAGE.to_string());
                Err(err)
            }
        }
    }

    /// Settle an outstanding submission. A transport error counts as a failure.
    pub fn complete(&mut self, outcome: SiteResult<ContactReply>) -> SiteResult<&FormStatus> {
        if self.status != FormStatus::Submitting {
            return Err(SiteError::contact("no submission in progress"));
        }
        self.status = match outcome {
            Ok(ContactReply::Success) => {
                self.email.clear();
                self.message.clear();
                FormStatus::Sent
            }
            Ok(ContactReply::Error(message)) => FormStatus::Failed(message),
            Err(err) => {
                tracing::warn!(error = %err, "contact submission failed");
                FormStatus::Failed(err.to_string())
            }
        };
        Ok(&self.status)
    }

    /// Run a full submit through `transport`.
    #[tracing::instrument(skip(self, transport))]
    pub fn submit(&mut self, transport: &mut dyn ContactTransport) -> SiteResult<&FormStatus> {
        let submission = self.begin_submit()?;
        let outcome = transport.send(&submission);
        self.complete(outcome)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/contact/form.rs"]
mod tests;

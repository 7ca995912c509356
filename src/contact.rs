//! Contact form payload and its submission seam.
//!
//! SYSTEM CONTEXT
//! ==============
//! The site has no backend. The form hands its payload to whatever
//! `ContactSubmitter` is provided through context; the default one accepts
//! the payload and does nothing with it. Wiring a real endpoint means
//! providing a different submitter, not changing the form.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use std::fmt;
use std::sync::Arc;

use serde::Serialize;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub company: String,
    pub message: String,
}

impl ContactForm {
    /// JSON body a real endpoint would receive.
    pub fn to_json(&self) -> Result<String, SubmitError> {
        Ok(serde_json::to_string(self)?)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error("failed to encode contact payload: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("contact submission rejected: {0}")]
    Rejected(String),
}

/// Destination for contact form submissions.
pub trait ContactSubmitter {
    fn submit(&self, form: &ContactForm) -> Result<(), SubmitError>;
}

/// Accepts every submission and sends it nowhere.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSubmitter;

impl ContactSubmitter for NoopSubmitter {
    fn submit(&self, form: &ContactForm) -> Result<(), SubmitError> {
        let payload = form.to_json()?;
        log::debug!("no contact endpoint configured; dropping {} byte payload", payload.len());
        Ok(())
    }
}

/// Context handle for the active submitter.
#[derive(Clone)]
pub struct ContactEndpoint(Arc<dyn ContactSubmitter + Send + Sync>);

impl ContactEndpoint {
    pub fn new(submitter: impl ContactSubmitter + Send + Sync + 'static) -> Self {
        Self(Arc::new(submitter))
    }

    /// Forward `form` to the submitter and log the outcome.
    pub fn submit(&self, form: &ContactForm) -> Result<(), SubmitError> {
        let result = self.0.submit(form);
        match &result {
            Ok(()) => log::info!("contact form submitted"),
            Err(err) => log::warn!("contact form submission failed: {err}"),
        }
        result
    }
}

impl Default for ContactEndpoint {
    fn default() -> Self {
        Self::new(NoopSubmitter)
    }
}

impl fmt::Debug for ContactEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContactEndpoint").finish_non_exhaustive()
    }
}

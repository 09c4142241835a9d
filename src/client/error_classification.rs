//! Maps typed errors to the one sentence shown to end users.

use crate::error::ProviderError;
use crate::transport::{AttemptError, AttemptFailure, TransportError};
use crate::Error;

/// User-facing guidance for `error`. Never includes response bodies.
pub fn guidance_for(error: &Error) -> String {
    match error {
        Error::Configuration { .. } => "Vimeo access token is not configured. Set \
            VIMEO_ACCESS_TOKEN to a valid personal access token."
            .to_string(),
        Error::Resolution { .. } => "That link is not a recognized Vimeo video URL.".to_string(),
        Error::Provider(ProviderError::Unauthorized) => {
            "Vimeo rejected the access token. Check that it is valid and has not expired."
                .to_string()
        }
        Error::Provider(ProviderError::Forbidden) => {
            "The access token is not allowed to read this video's captions. Check the \
             token's scopes and the video's privacy settings."
                .to_string()
        }
        Error::Provider(ProviderError::VideoNotFound { .. }) => {
            "Video not found. It may be private, deleted, or the link may be wrong.".to_string()
        }
        Error::Provider(ProviderError::Status { status }) => {
            format!("Vimeo returned an unexpected error (HTTP {}). Try again later.", status)
        }
        Error::Provider(ProviderError::MalformedResponse { .. }) => {
            "Vimeo returned a caption track list that could not be read. Try again later."
                .to_string()
        }
        Error::Selection { message, .. } => {
            if message.contains("no transcript") {
                "No transcript is available for this video.".to_string()
            } else {
                "This video's caption track has no downloadable file.".to_string()
            }
        }
        Error::FetchExhausted { attempts, .. } => exhaustion_guidance(attempts),
        Error::Parse(_) => "The transcript was downloaded but could not be read.".to_string(),
        Error::Serialization(_) => "A response could not be read. Try again later.".to_string(),
        Error::Timeout { .. } => {
            "Fetching the transcript took too long. Check the network and try again.".to_string()
        }
        Error::Transport(TransportError::Http(e)) => classify_http(e),
        Error::Transport(TransportError::Other(message)) => classify_message(message),
    }
}

/// Guidance for a chain where every strategy failed, picked from the failure mix.
pub(crate) fn exhaustion_guidance(attempts: &[AttemptFailure]) -> String {
    let all = |pred: fn(&AttemptError) -> bool| {
        !attempts.is_empty() && attempts.iter().all(|a| pred(&a.error))
    };

    if all(AttemptError::is_timeout) {
        return "The caption download timed out on every route. Check the network and \
                try again."
            .to_string();
    }
    if attempts
        .iter()
        .any(|a| matches!(a.error, AttemptError::Status(401 | 403 | 410)))
    {
        return "The caption download link was refused or has expired. Reload the video \
                and try again."
            .to_string();
    }
    if all(AttemptError::is_connect) {
        return "The caption host could not be reached. Check the network connection."
            .to_string();
    }
    "The caption file could not be downloaded; it is likely blocked by cross-origin \
     restrictions or every relay refused the request."
        .to_string()
}

/// Classifies a request failure by its kind, never by its text alone.
fn classify_http(error: &reqwest::Error) -> String {
    if error.is_timeout() {
        return "The request timed out. Check the network and try again.".to_string();
    }
    if error.is_connect() {
        return "Vimeo could not be reached. Check the network connection.".to_string();
    }
    if let Some(status) = error.status() {
        return guidance_for(&ProviderError::from_status(status.as_u16(), "").into());
    }

    // The message embeds the request URL, whose digits must not be classified.
    let mut message = error.to_string();
    if let Some(url) = error.url() {
        message = message.replace(url.as_str(), "");
    }
    classify_message(&message)
}

/// Substring classification for errors that only carry a message.
fn classify_message(message: &str) -> String {
    let lower = message.to_ascii_lowercase();
    if lower.contains("cors") || lower.contains("cross-origin") {
        "The caption request was blocked by cross-origin restrictions.".to_string()
    } else if lower.contains("401") || lower.contains("token") || lower.contains("credential") {
        "Vimeo rejected the access token. Check that it is valid and has not expired."
            .to_string()
    } else if lower.contains("404") {
        "Video not found. It may be private, deleted, or the link may be wrong.".to_string()
    } else if lower.contains("403") {
        "Access to this video's captions is forbidden.".to_string()
    } else if lower.contains("timed out") || lower.contains("timeout") {
        "The request timed out. Check the network and try again.".to_string()
    } else {
        "The transcript could not be fetched because of a network error.".to_string()
    }
}

impl Error {
    /// Shorthand for [`guidance_for`].
    pub fn guidance(&self) -> String {
        guidance_for(self)
    }
}

/// Errors produced by a single AniList fetch.
///
/// Both kinds are terminal for the attempt: the caller decides whether to
/// retry and how to surface the failure.
#[derive(thiserror::Error, Debug)]
pub enum FetchError {
    #[error("API(anilist) request has failed: {reason}")]
    Transport {
        status: Option<u16>,
        reason: String,
    },

    #[error("API(anilist) request has failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API(anilist) responded with bad data at `{path}`: {message}")]
    Validation { path: String, message: String },
}

impl FetchError {
    pub fn status(status: u16, body: &str) -> Self {
        let snippet: String = body.chars().take(200).collect();
        FetchError::Transport {
            status: Some(status),
            reason: format!("status {status}: {snippet}"),
        }
    }

    pub fn validation(path: impl Into<String>, message: impl ToString) -> Self {
        FetchError::Validation {
            path: path.into(),
            message: message.to_string(),
        }
    }

    /// True for failures of the request itself, as opposed to its payload.
    pub fn is_transport(&self) -> bool {
        matches!(self, FetchError::Transport { .. } | FetchError::Http(_))
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, FetchError::Validation { .. })
    }
}

pub type FetchResult<T> = Result<T, FetchError>;

use derive_more::From;

/// Provider-facing error taxonomy. Every variant that maps to a remote
/// failure carries the request id it belongs to so log lines and error
/// messages can be correlated with a specific upload or job.
#[allow(unused)]
#[derive(Debug, From)]
pub enum Error {
    Http(String, crate::http::Error),
    #[from]
    SerdeJson(serde_json::Error),
    #[from]
    Io(std::io::Error),

    APIBadRequest {
        request_id: String,
        provider_error: String,
    },
    APIUnauthorized {
        request_id: String,
        provider_error: String,
    },
    APIForbidden {
        request_id: String,
        provider_error: String,
    },
    APINotFound {
        request_id: String,
        provider_error: String,
    },
    APIRateLimit {
        request_id: String,
        provider_error: String,
    },
    #[allow(clippy::enum_variant_names)]
    APIInternalServerError {
        request_id: String,
        provider_error: String,
    },
    APIUnknown {
        request_id: String,
        provider_error: String,
    },

    JobFailed {
        request_id: String,
        provider_error: String,
    },
    JobTimeout {
        request_id: String,
        provider_error: String,
    },
}

impl From<(String, crate::http::Error)> for Error {
    fn from((request_id, err): (String, crate::http::Error)) -> Self {
        Error::Http(request_id, err)
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, fmt: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(fmt, "{self:?}")
    }
}

impl std::error::Error for Error {}

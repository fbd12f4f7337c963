/// Unified error handling module
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::any::Any;
use thiserror::Error;

/// Error body returned by every failing route
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

/// Failure talking to the external STAC catalog.
///
/// Transport, status and decoding problems all collapse into one kind.
#[derive(Debug, Error)]
#[error("Failed to fetch satellite imagery from Planetary Computer")]
pub struct StacError(#[from] reqwest::Error);

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{message}")]
    InvalidInput {
        title: &'static str,
        message: String,
    },

    #[error("{message}")]
    NotFound {
        title: &'static str,
        message: String,
    },

    #[error("{source}")]
    Upstream {
        title: &'static str,
        #[source]
        source: StacError,
    },

    #[error("{message}")]
    Internal {
        title: &'static str,
        message: String,
    },
}

impl ApiError {
    pub fn invalid_input(title: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidInput {
            title,
            message: message.into(),
        }
    }

    pub fn not_found(title: &'static str, message: impl Into<String>) -> Self {
        Self::NotFound {
            title,
            message: message.into(),
        }
    }

    pub fn upstream(title: &'static str, source: StacError) -> Self {
        Self::Upstream { title, source }
    }

    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidInput { .. } => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Upstream { .. } | Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Short error title used as the `error` field
    pub fn title(&self) -> &'static str {
        match self {
            Self::InvalidInput { title, .. }
            | Self::NotFound { title, .. }
            | Self::Upstream { title, .. }
            | Self::Internal { title, .. } => title,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let Self::Upstream { title, source } = &self {
            tracing::error!(error = ?source, "{}", title);
        }

        let body = ErrorResponse {
            error: self.title().to_string(),
            message: self.to_string(),
        };

        (self.status_code(), Json(body)).into_response()
    }
}

/// Render a handler panic as a generic internal error
pub fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "Unknown error".to_string()
    };
    tracing::error!(panic = %detail, "handler panicked");

    ApiError::Internal {
        title: "Internal server error",
        message: "Unexpected error while handling the request".to_string(),
    }
    .into_response()
}

/// Type alias for API results
pub type ApiResult<T> = Result<T, ApiError>;

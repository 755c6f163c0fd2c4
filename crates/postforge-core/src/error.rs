//! Error taxonomy for the generation pipeline.
//!
//! Every failure a `/generate` call can hit is classified into exactly one
//! variant here.  The HTTP layer maps variants to status codes; the messages
//! on the client-facing variants are safe to return verbatim, while
//! [`GenerateError::Internal`] carries detail that must stay in the server
//! logs.

use thiserror::Error;

/// All errors the content-generation pipeline can produce.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// The caller sent an invalid request (bad topic, unknown length, ...).
    /// No upstream call is made.
    #[error("{0}")]
    InvalidInput(String),

    /// No upstream API key is configured.  No upstream call is made.
    #[error("completion API key is not configured")]
    ConfigurationMissing,

    /// The upstream call exceeded its timeout bound.
    #[error("the completion provider took too long to respond")]
    UpstreamTimeout,

    /// The upstream provider could not be reached at all.
    #[error("could not reach the completion provider")]
    UpstreamUnavailable,

    /// The upstream provider returned a non-success status.
    #[error("completion provider rejected the request: {0}")]
    UpstreamRejected(String),

    /// The upstream provider answered 2xx but returned no usable choice.
    #[error("completion provider returned an empty response")]
    UpstreamEmptyResponse,

    /// An unclassified internal failure.
    #[error("internal error: {0}")]
    Internal(String),
}

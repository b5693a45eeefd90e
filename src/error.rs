//! Error types.

use thiserror::Error;

/// Result alias for resolution operations.
pub type Result<T> = std::result::Result<T, FqdnError>;

/// Errors returned by FQDN resolution.
///
/// A failed call never writes the cache; a subsequent call re-attempts
/// resolution from scratch. There is no retry or backoff anywhere in this
/// crate.
#[derive(Debug, Error)]
pub enum FqdnError {
    /// No default-route local IP could be determined (no route, or the
    /// rendezvous address is malformed/empty).
    #[error("failed looking up local IP address: {0}")]
    NetworkUnavailable(#[source] std::io::Error),

    /// An underlying DNS query failed at the transport/protocol level.
    /// `step` names the query that failed.
    #[error("{step}: {source}")]
    LookupFailed {
        /// Which resolution step issued the failing query.
        step: &'static str,
        /// The underlying resolver error.
        #[source]
        source: std::io::Error,
    },

    /// Reverse lookup succeeded but returned zero usable names.
    #[error("unable to look up FQDN: reverse lookup returned no names")]
    EmptyResult,

    /// Reverse lookup produced a name, but the forward+reverse round trip
    /// could not confirm it.
    #[error("FQDN failed verification: {fqdn:?}")]
    VerificationFailed {
        /// The candidate name that failed the round trip.
        fqdn: String,
    },
}

impl FqdnError {
    /// Returns `true` if the error came from a DNS query (forward or
    /// reverse), as opposed to route discovery or verification logic.
    #[must_use]
    pub const fn is_lookup_failure(&self) -> bool {
        matches!(self, Self::LookupFailed { .. })
    }
}

//! FQDN resolution orchestration.
//!
//! Composes route discovery, reverse lookup, and forward-lookup verification
//! into a single memoized result.

use crate::config::ResolverConfig;
use crate::error::{FqdnError, Result};
use crate::lookup::{Lookup, SystemLookup};
use std::sync::OnceLock;

/// Best-effort FQDN resolver for the local host.
///
/// # Algorithm
///
/// 1. Determine the default-route local IP: the source address the OS picks
///    for a UDP socket "connected" to the rendezvous address. On multi-homed
///    hosts this selects the identity of the default interface.
/// 2. Reverse-resolve that IP; the first PTR name is the candidate.
/// 3. When verification is enabled, forward-resolve the candidate and check
///    that one of the returned addresses reverse-resolves back to the exact
///    candidate name. PTR records are administratively independent of A/AAAA
///    records, so this round trip catches stale or misconfigured entries.
/// 4. Strip the root-label dot and, when caching is enabled, memoize the
///    result for the lifetime of the resolver.
///
/// # Concurrency
///
/// The call chain is synchronous and blocking. Concurrent first calls may
/// each resolve redundantly; the cache write is a `OnceLock`, so the first
/// writer wins and later writers adopt its (identical) value. No timeout is
/// exposed; callers needing a deadline must enforce one externally.
///
/// # Example
///
/// ```rust,ignore
/// use fqdn_resolver::FqdnResolver;
///
/// let resolver = FqdnResolver::new();
/// let fqdn = resolver.resolve()?;
/// ```
pub struct FqdnResolver<L = SystemLookup> {
    config: ResolverConfig,
    lookup: L,
    cached: OnceLock<String>,
}

impl FqdnResolver {
    /// Creates a resolver with the default configuration (verification and
    /// caching on) and the system DNS resolver.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(ResolverConfig::new())
    }

    /// Creates a resolver with a custom configuration and the system DNS
    /// resolver.
    #[must_use]
    pub fn with_config(config: ResolverConfig) -> Self {
        Self::with_lookup(config, SystemLookup)
    }
}

impl Default for FqdnResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: Lookup> FqdnResolver<L> {
    /// Creates a resolver with a custom [`Lookup`] implementation, so tests
    /// can substitute canned answers for real network access.
    pub fn with_lookup(config: ResolverConfig, lookup: L) -> Self {
        Self {
            config,
            lookup,
            cached: OnceLock::new(),
        }
    }

    /// Returns the resolver configuration.
    #[must_use]
    pub const fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Returns the underlying [`Lookup`] implementation.
    #[must_use]
    pub const fn lookup(&self) -> &L {
        &self.lookup
    }

    /// Returns the memoized FQDN, if a resolution has already succeeded.
    #[must_use]
    pub fn cached(&self) -> Option<&str> {
        self.cached.get().map(String::as_str)
    }

    /// Resolves the FQDN of the local host.
    ///
    /// Once a call succeeds (with caching enabled), every subsequent call
    /// returns the same value without touching the network. A failed call
    /// writes nothing; the next call starts over.
    ///
    /// # Errors
    ///
    /// - [`FqdnError::NetworkUnavailable`] if no default-route IP exists.
    /// - [`FqdnError::LookupFailed`] if a DNS query errors.
    /// - [`FqdnError::EmptyResult`] if the IP has no PTR names.
    /// - [`FqdnError::VerificationFailed`] if the forward+reverse round trip
    ///   does not confirm the candidate.
    pub fn resolve(&self) -> Result<String> {
        if self.config.cache {
            if let Some(fqdn) = self.cached.get() {
                return Ok(fqdn.clone());
            }
        }

        let candidate = self.lookup_candidate()?;
        if self.config.verify {
            self.verify(&candidate)?;
        }

        let fqdn = candidate
            .strip_suffix('.')
            .unwrap_or(&candidate)
            .to_string();
        tracing::debug!(fqdn = %fqdn, "Resolved FQDN");

        if self.config.cache {
            // First writer wins; a concurrent loser resolved the same value.
            return Ok(self.cached.get_or_init(|| fqdn).clone());
        }
        Ok(fqdn)
    }

    /// Route discovery plus primary reverse lookup: produces the candidate
    /// name, trailing root-label dot and all.
    fn lookup_candidate(&self) -> Result<String> {
        let ip = self
            .lookup
            .default_ip(&self.config.rendezvous_addr)
            .map_err(FqdnError::NetworkUnavailable)?;
        tracing::debug!(ip = %ip, "Selected default-route local IP");

        let mut names = self
            .lookup
            .reverse(ip)
            .map_err(|e| FqdnError::LookupFailed {
                step: "error looking up FQDN",
                source: e,
            })?;
        if names.is_empty() {
            return Err(FqdnError::EmptyResult);
        }
        Ok(names.swap_remove(0))
    }

    /// Confirms `candidate` by forward-resolving it and reverse-resolving
    /// each returned address until one round-trips back to the exact name.
    ///
    /// A reverse failure for an individual address is skipped rather than
    /// fatal, tolerating partial DNS infrastructure failure.
    fn verify(&self, candidate: &str) -> Result<()> {
        // The unset/empty name can never round-trip.
        if candidate.is_empty() {
            return Err(FqdnError::VerificationFailed {
                fqdn: String::new(),
            });
        }

        let ips = self
            .lookup
            .forward(candidate)
            .map_err(|e| FqdnError::LookupFailed {
                step: "error resolving DNS",
                source: e,
            })?;

        for ip in ips {
            let names = match self.lookup.reverse(ip) {
                Ok(names) => names,
                Err(e) => {
                    tracing::debug!(
                        ip = %ip,
                        error = %e,
                        "Reverse lookup failed during verification, skipping address"
                    );
                    continue;
                }
            };
            if names.iter().any(|name| name == candidate) {
                return Ok(());
            }
        }

        tracing::warn!(fqdn = %candidate, "No forward address round-tripped back to candidate");
        Err(FqdnError::VerificationFailed {
            fqdn: candidate.to_string(),
        })
    }
}

/// Resolves the FQDN of the local host using a process-wide resolver with
/// the default configuration.
///
/// The first successful result is cached for the process lifetime. For
/// custom configuration or an injectable [`Lookup`], construct a
/// [`FqdnResolver`] instead.
///
/// # Errors
///
/// Same as [`FqdnResolver::resolve`].
pub fn resolve_fqdn() -> Result<String> {
    static RESOLVER: OnceLock<FqdnResolver> = OnceLock::new();
    RESOLVER.get_or_init(FqdnResolver::new).resolve()
}

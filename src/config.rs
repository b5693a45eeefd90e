//! Resolver configuration.

/// Address used solely to trigger local route selection. Port 8 is
/// arbitrary; no datagram is ever sent.
pub const DEFAULT_RENDEZVOUS_ADDR: &str = "8.8.8.8:8";

/// Configuration for a [`FqdnResolver`](crate::FqdnResolver).
///
/// The defaults give the full behavior: forward+reverse round-trip
/// verification of the candidate name, and process-lifetime caching of the
/// first successful result. Both can be switched off independently for the
/// simpler "trust the first PTR answer" variant.
///
/// # Example
///
/// ```
/// use fqdn_resolver::ResolverConfig;
///
/// let config = ResolverConfig::new()
///     .with_rendezvous_addr("1.1.1.1:53")
///     .with_verify(false);
///
/// assert_eq!(config.rendezvous_addr, "1.1.1.1:53");
/// assert!(!config.verify);
/// assert!(config.cache);
/// ```
#[derive(Debug, Clone)]
pub struct ResolverConfig {
    /// External address used to let the OS pick the default-route local IP
    /// (e.g., `"8.8.8.8:8"`). Never actually contacted.
    pub rendezvous_addr: String,

    /// Whether to confirm the reverse-lookup candidate by forward-resolving
    /// it and checking that one of those addresses reverse-resolves back to
    /// the same name.
    pub verify: bool,

    /// Whether to memoize the first successful result for the lifetime of
    /// the resolver.
    pub cache: bool,
}

impl ResolverConfig {
    /// Creates a config with the default rendezvous address, verification
    /// on, and caching on.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rendezvous_addr: DEFAULT_RENDEZVOUS_ADDR.to_string(),
            verify: true,
            cache: true,
        }
    }

    /// Overrides the rendezvous address.
    #[must_use]
    pub fn with_rendezvous_addr(mut self, addr: impl Into<String>) -> Self {
        self.rendezvous_addr = addr.into();
        self
    }

    /// Enables or disables round-trip verification.
    #[must_use]
    pub const fn with_verify(mut self, verify: bool) -> Self {
        self.verify = verify;
        self
    }

    /// Enables or disables result caching.
    #[must_use]
    pub const fn with_cache(mut self, cache: bool) -> Self {
        self.cache = cache;
        self
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_sets_defaults() {
        let c = ResolverConfig::new();
        assert_eq!(c.rendezvous_addr, DEFAULT_RENDEZVOUS_ADDR);
        assert!(c.verify);
        assert!(c.cache);
    }

    #[test]
    fn builders_override() {
        let c = ResolverConfig::new()
            .with_rendezvous_addr("127.0.0.1:1")
            .with_verify(false)
            .with_cache(false);
        assert_eq!(c.rendezvous_addr, "127.0.0.1:1");
        assert!(!c.verify);
        assert!(!c.cache);
    }
}

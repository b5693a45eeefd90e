//! # fqdn-resolver
//!
//! Best-effort detection of the local host's fully-qualified domain name
//! via forward and reverse DNS.
//!
//! Local hostname configuration is often wrong, unset, or short-form only.
//! This crate instead asks the network: it finds the machine's default local
//! IP (the source address the OS would pick for traffic toward the public
//! internet, which on multi-homed hosts selects the default interface),
//! reverse-resolves it, and verifies the answer with a forward-lookup round
//! trip. Services that must self-identify with a canonical name — for
//! certificates, cluster membership, or logging — get a network-verifiable
//! value instead of whatever `hostname` happens to say.
//!
//! Requires working forward *and* reverse DNS for your network.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! let fqdn = fqdn_resolver::resolve_fqdn()?;
//! println!("I am {fqdn}");
//! ```
//!
//! Or with explicit configuration:
//!
//! ```rust,ignore
//! use fqdn_resolver::{FqdnResolver, ResolverConfig};
//!
//! let resolver = FqdnResolver::with_config(
//!     ResolverConfig::new().with_verify(false),
//! );
//! let fqdn = resolver.resolve()?;
//! ```
//!
//! ## Verification
//!
//! PTR records are maintained independently of A/AAAA records and go stale.
//! With verification on (the default), a candidate name is accepted only if
//! forward-resolving it yields an address that reverse-resolves back to the
//! exact same name. Disable it with
//! [`ResolverConfig::with_verify`] to trust the first PTR answer as-is.
//!
//! ## Caching
//!
//! The first successful result is memoized for the lifetime of the resolver
//! (and, for [`resolve_fqdn`], the process); later calls return it without
//! network I/O. Failures are never cached. Disable with
//! [`ResolverConfig::with_cache`].
//!
//! ## Testing
//!
//! All network access goes through the [`Lookup`] trait. Construct a
//! resolver with [`FqdnResolver::with_lookup`] to substitute canned answers
//! for real DNS in tests.

#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod lookup;
pub mod resolver;

pub use config::{DEFAULT_RENDEZVOUS_ADDR, ResolverConfig};
pub use error::{FqdnError, Result};
pub use lookup::{Lookup, SystemLookup};
pub use resolver::{FqdnResolver, resolve_fqdn};

//! DNS and route-discovery primitives.
//!
//! The [`Lookup`] trait is the seam between the orchestration logic in
//! [`resolver`](crate::resolver) and the operating system: production code
//! uses [`SystemLookup`], tests substitute fakes with canned answers.

use std::io;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr, UdpSocket};

/// Primitive operations the resolver composes.
///
/// All three calls block until completion or the platform's default DNS
/// timeout; no timeout is configured by this crate.
pub trait Lookup {
    /// Returns the local IP the host's network stack would use as the
    /// source address for an outbound UDP packet toward `rendezvous`.
    ///
    /// # Errors
    ///
    /// Fails if `rendezvous` is not a valid socket address or no route to
    /// it exists.
    fn default_ip(&self, rendezvous: &str) -> io::Result<IpAddr>;

    /// Returns the hostnames associated with `ip` via PTR lookup, in
    /// resolver order. An empty vec is a valid, successful outcome meaning
    /// no PTR record exists.
    ///
    /// # Errors
    ///
    /// Fails if the underlying DNS query errors.
    fn reverse(&self, ip: IpAddr) -> io::Result<Vec<String>>;

    /// Returns the addresses `host` resolves to via A/AAAA lookup.
    ///
    /// # Errors
    ///
    /// Fails if the underlying DNS query errors.
    fn forward(&self, host: &str) -> io::Result<Vec<IpAddr>>;
}

/// Production [`Lookup`] backed by the system resolver.
///
/// Route discovery "connects" a UDP socket, which only performs local route
/// selection — no packet leaves the machine and the rendezvous host never
/// needs to be reachable.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemLookup;

impl Lookup for SystemLookup {
    fn default_ip(&self, rendezvous: &str) -> io::Result<IpAddr> {
        let target: SocketAddr = rendezvous
            .parse()
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

        let bind_addr: SocketAddr = if target.is_ipv4() {
            (Ipv4Addr::UNSPECIFIED, 0).into()
        } else {
            (Ipv6Addr::UNSPECIFIED, 0).into()
        };

        // Socket is dropped (and released) on every exit path.
        let socket = UdpSocket::bind(bind_addr)?;
        socket.connect(target)?;
        Ok(socket.local_addr()?.ip())
    }

    fn reverse(&self, ip: IpAddr) -> io::Result<Vec<String>> {
        let name = dns_lookup::lookup_addr(&ip)?;
        // getnameinfo echoes the numeric address back when no PTR record
        // exists; report that as zero candidates rather than a name.
        if name.parse::<IpAddr>().is_ok() {
            return Ok(Vec::new());
        }
        Ok(vec![name])
    }

    fn forward(&self, host: &str) -> io::Result<Vec<IpAddr>> {
        dns_lookup::lookup_host(host)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_ip_rejects_empty_rendezvous() {
        assert!(SystemLookup.default_ip("").is_err());
    }

    #[test]
    fn default_ip_rejects_missing_port() {
        assert!(SystemLookup.default_ip("8.8.8.8").is_err());
    }

    #[test]
    fn default_ip_toward_loopback_is_loopback() {
        let ip = SystemLookup.default_ip("127.0.0.1:1").unwrap();
        assert!(ip.is_loopback());
    }

    #[test]
    #[ignore = "requires a default route to the internet"]
    fn default_ip_toward_public_addr() {
        let ip = SystemLookup.default_ip("8.8.8.8:8").unwrap();
        assert!(!ip.is_unspecified());
    }
}

//! Resolution of user-supplied target tokens into concrete hosts.

use crate::domain::error::TargetError;
use crate::domain::registry::{HOST_REGISTRY, canonical_host, region_hosts, valid_targets};

/// Resolve target tokens into a list of hosts to act on.
///
/// Tokens may name a host, a region, or the special token `all`, in any mix
/// and any letter case. `all` anywhere in the list selects the whole fleet in
/// registry order. Any other combination is expanded, sorted by host name,
/// and deduplicated, so overlapping tokens never dispatch to a host twice.
///
/// # Errors
///
/// Returns `TargetError::Empty` when `tokens` is empty, and
/// `TargetError::UnknownHost` for the first token that matches neither a
/// host nor a region.
pub fn resolve_targets(tokens: &[String]) -> Result<Vec<&'static str>, TargetError> {
    if tokens.is_empty() {
        return Err(TargetError::Empty);
    }

    let mut hosts: Vec<&'static str> = Vec::new();
    for token in tokens {
        if token.eq_ignore_ascii_case("all") {
            return Ok(HOST_REGISTRY.to_vec());
        }
        if let Some(region) = region_hosts(token) {
            hosts.extend_from_slice(region);
        } else if let Some(host) = canonical_host(token) {
            hosts.push(host);
        } else {
            return Err(TargetError::UnknownHost {
                token: token.clone(),
                valid: valid_targets(),
            });
        }
    }

    hosts.sort_unstable();
    hosts.dedup();
    Ok(hosts)
}

/// The hosts acted on when no targets are given: the whole fleet, in
/// registry order.
#[must_use]
pub fn default_targets() -> &'static [&'static str] {
    HOST_REGISTRY
}

// ── Unit tests ───────────────────────────────────────────────────────────────

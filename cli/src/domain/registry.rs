//! Host registry: the fixed set of managed hosts and their regions.
//!
//! The fleet is small and never changes at runtime, so the registry is
//! compiled in. Lookup functions match case-insensitively and always hand
//! back the registry-canonical spelling.

/// Every managed host, in registry order.
pub const HOST_REGISTRY: &[&str] = &[
    "na-001.bosagora.io",
    "na-002.bosagora.io",
    "eu-002.bosagora.io",
];

/// Region aliases. The regions partition the registry: every host belongs
/// to exactly one region, and no alias overlaps another.
pub const REGIONS: &[(&str, &[&str])] = &[
    ("na", &["na-001.bosagora.io", "na-002.bosagora.io"]),
    ("eu", &["eu-002.bosagora.io"]),
];

/// The hosts of a region alias, in registry order.
#[must_use]
pub fn region_hosts(token: &str) -> Option<&'static [&'static str]> {
    REGIONS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(token))
        .map(|(_, hosts)| *hosts)
}

/// The registry-canonical spelling of a host identifier.
#[must_use]
pub fn canonical_host(token: &str) -> Option<&'static str> {
    HOST_REGISTRY
        .iter()
        .find(|host| host.eq_ignore_ascii_case(token))
        .copied()
}

/// Every accepted target token, joined for error messages.
#[must_use]
pub fn valid_targets() -> String {
    let mut tokens = vec!["all"];
    tokens.extend(REGIONS.iter().map(|(name, _)| *name));
    tokens.extend(HOST_REGISTRY);
    tokens.join(", ")
}

// ── Unit tests ───────────────────────────────────────────────────────────────

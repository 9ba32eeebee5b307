//! Managed services and the application selection over them.
//!
//! Pure functions only: no I/O, no async.

use crate::domain::error::ApplicationError;

// ── Constants ────────────────────────────────────────────────────────────────

pub const VALID_APPLICATIONS: &[&str] = &["all", "agora", "stoa"];

// ── Services ─────────────────────────────────────────────────────────────────

/// A service deployed on every fleet host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Service {
    /// The agora node container.
    Agora,
    /// The stoa API server container.
    Stoa,
}

impl Service {
    /// Every service, in the fixed dispatch order.
    pub const ALL: [Self; 2] = [Self::Agora, Self::Stoa];

    /// The container (and image) name of the service.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Agora => "agora",
            Self::Stoa => "stoa",
        }
    }
}

// ── Application selection ────────────────────────────────────────────────────

/// Which of the managed services a command applies to.
///
/// Constructed only through [`ApplicationSet::resolve`]. Commands test
/// membership per service, so "all" needs no special-casing downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApplicationSet {
    agora: bool,
    stoa: bool,
}

impl ApplicationSet {
    /// Resolve a user-supplied application token, case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Unknown` echoing the offending token when
    /// it is none of `all`, `agora`, or `stoa`.
    pub fn resolve(token: &str) -> Result<Self, ApplicationError> {
        if token.eq_ignore_ascii_case("all") {
            Ok(Self { agora: true, stoa: true })
        } else if token.eq_ignore_ascii_case("agora") {
            Ok(Self { agora: true, stoa: false })
        } else if token.eq_ignore_ascii_case("stoa") {
            Ok(Self { agora: false, stoa: true })
        } else {
            Err(ApplicationError::Unknown {
                token: token.to_string(),
                valid: VALID_APPLICATIONS.join(", "),
            })
        }
    }

    /// Whether `service` is part of the selection.
    #[must_use]
    pub fn contains(self, service: Service) -> bool {
        match service {
            Service::Agora => self.agora,
            Service::Stoa => self.stoa,
        }
    }

    /// Member services, in the fixed dispatch order (agora, then stoa).
    pub fn services(self) -> impl Iterator<Item = Service> {
        Service::ALL.into_iter().filter(move |s| self.contains(*s))
    }
}

// ── Unit tests ───────────────────────────────────────────────────────────────

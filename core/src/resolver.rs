//! Maps scanned codes to owners against the immutable registry.

use serde::Serialize;

use crate::normalize::normalize;
use crate::observer::ResolveObserver;
use crate::registry::Registry;

/// Owner reported when no registered code matches a scan. Picked to be
/// unlikely to collide with a real owner filename.
pub const DEFAULT_UNKNOWN: &str = "unknown";

/// Which rule produced a resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "code")]
pub enum MatchOutcome {
    /// The scanned code exactly equals a registered code.
    Full(String),
    /// A registered code occurs as a contiguous substring of the scan.
    Partial(String),
    /// Nothing matched; the unknown sentinel was returned.
    None,
}

/// Outcome of resolving one scanned code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub owner: String,
    pub outcome: MatchOutcome,
}

impl Resolution {
    pub fn matched(&self) -> bool {
        self.outcome != MatchOutcome::None
    }
}

/// Stateless lookup over a registry built once at startup.
///
/// Resolution is deterministic: the registry is scanned in its fixed
/// length-descending order, so an exact duplicate or an equally long
/// fragment always resolves to the entry loaded first. Takes `&self` only,
/// so a resolver shared behind an `Arc` is safe for concurrent readers.
#[derive(Debug, Clone)]
pub struct Resolver {
    registry: Registry,
    unknown: String,
}

impl Resolver {
    pub fn new(registry: Registry) -> Self {
        Self::with_unknown(registry, DEFAULT_UNKNOWN)
    }

    /// An empty sentinel would make "no match" indistinguishable from a
    /// blank owner, so it falls back to the default.
    pub fn with_unknown(registry: Registry, unknown: impl Into<String>) -> Self {
        let unknown = unknown.into();
        let unknown = if unknown.is_empty() {
            DEFAULT_UNKNOWN.to_string()
        } else {
            unknown
        };
        Self { registry, unknown }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn unknown(&self) -> &str {
        &self.unknown
    }

    /// Resolves a raw scanned code to an owner. Never fails: at worst the
    /// unknown sentinel is returned.
    pub fn resolve(&self, raw: &str) -> Resolution {
        let scanned = normalize(raw);

        if let Some(entry) = self.registry.iter().find(|e| e.code == scanned) {
            return Resolution {
                owner: entry.owner.clone(),
                outcome: MatchOutcome::Full(entry.code.clone()),
            };
        }

        // Longest registered fragment contained in the scan wins; registry
        // order already puts longer codes first.
        if !scanned.is_empty() {
            if let Some(entry) = self.registry.iter().find(|e| scanned.contains(&e.code)) {
                return Resolution {
                    owner: entry.owner.clone(),
                    outcome: MatchOutcome::Partial(entry.code.clone()),
                };
            }
        }

        Resolution {
            owner: self.unknown.clone(),
            outcome: MatchOutcome::None,
        }
    }

    /// Resolves and reports the event through the injected observer.
    pub fn resolve_observed(&self, raw: &str, observer: &dyn ResolveObserver) -> Resolution {
        let normalized = normalize(raw);
        let resolution = self.resolve(raw);
        observer.on_resolution(raw, &normalized, &resolution);
        resolution
    }
}

use std::sync::Mutex;

use crate::resolver::MatchOutcome;
use crate::resolver::Resolution;

/// Reporting seam for resolution events.
///
/// Injected into [`Resolver::resolve_observed`](crate::Resolver) so callers
/// can see which rule fired without the engine writing to any global output
/// stream. Diagnostic only: implementations must not influence resolution.
pub trait ResolveObserver {
    fn on_resolution(&self, raw: &str, normalized: &str, resolution: &Resolution);
}

/// Default production observer: one trace line per resolution.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl ResolveObserver for TracingObserver {
    fn on_resolution(&self, raw: &str, normalized: &str, resolution: &Resolution) {
        match &resolution.outcome {
            MatchOutcome::Full(code) => {
                tracing::info!(raw, normalized, code = %code, owner = %resolution.owner, "full match");
            }
            MatchOutcome::Partial(code) => {
                tracing::info!(raw, normalized, code = %code, owner = %resolution.owner, "partial match");
            }
            MatchOutcome::None => {
                tracing::info!(raw, normalized, owner = %resolution.owner, "no match");
            }
        }
    }
}

/// Test observer that records every event it sees.
#[derive(Debug, Default)]
pub struct RecordingObserver {
    events: Mutex<Vec<ResolveEvent>>,
}

/// One recorded resolution event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolveEvent {
    pub raw: String,
    pub normalized: String,
    pub resolution: Resolution,
}

impl RecordingObserver {
    pub fn events(&self) -> Vec<ResolveEvent> {
        match self.events.lock() {
            Ok(events) => events.clone(),
            Err(_) => Vec::new(),
        }
    }
}

impl ResolveObserver for RecordingObserver {
    fn on_resolution(&self, raw: &str, normalized: &str, resolution: &Resolution) {
        if let Ok(mut events) = self.events.lock() {
            events.push(ResolveEvent {
                raw: raw.to_string(),
                normalized: normalized.to_string(),
                resolution: resolution.clone(),
            });
        }
    }
}

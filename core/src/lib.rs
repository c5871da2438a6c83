//! Parcel registry and code-resolution engine.
//!
//! Loads owner-labeled barcode entries from a directory of plain-text
//! sources, normalizes them into a canonical comparable form, and resolves
//! scanned codes against the registry with full-match-first, then
//! longest-substring-partial-match semantics.

mod error;
mod loader;
mod normalize;
mod observer;
mod registry;
mod resolver;

pub use error::LoadError;
pub use loader::LoadedRegistry;
pub use loader::load_registry;
pub use normalize::normalize;
pub use observer::RecordingObserver;
pub use observer::ResolveEvent;
pub use observer::ResolveObserver;
pub use observer::TracingObserver;
pub use registry::Entry;
pub use registry::OwnerStats;
pub use registry::Registry;
pub use resolver::DEFAULT_UNKNOWN;
pub use resolver::MatchOutcome;
pub use resolver::Resolution;
pub use resolver::Resolver;

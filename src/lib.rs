//! Time-to-state resolution engine for an interactive historical atlas
//! of China (roughly 前1046 to 1912).
//!
//! Everything is a pure query over compiled-in tables: give any of the
//! entry points a year and get back the territorial configuration
//! ([`resolver::resolve`]), the enclosing dynasty ([`era::era_at`]),
//! nearby events ([`event::events_near`]) and live inter-polity
//! relationships ([`relation::relationships_active`]). The [`Atlas`]
//! façade bundles all of them behind one handle; [`playback::Playback`]
//! holds the single piece of mutable state (the scrubbed/played year)
//! for whoever drives a UI.

pub mod atlas;
pub mod era;
pub mod event;
pub mod faction;
pub mod playback;
pub mod relation;
pub mod resolver;
pub mod shapes;
pub mod types;

pub use atlas::Atlas;
pub use types::{Era, FactionDetail, HistoricalEvent, Relationship, Snapshot, Territory};

use serde::Serialize;
use thiserror::Error;

use crate::shapes::ShapeId;

// ── Era (dynasty) ────────────────────────────────────────────────────

/// A named, bounded historical period, used for the "current era" display
/// and for era-jump navigation. Bounds are inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Era {
    pub id: &'static str,
    pub name: &'static str,
    pub start_year: i32,
    pub end_year: i32,
    pub color: &'static str,
    pub description: &'static str,
}

impl Era {
    pub fn contains(&self, year: i32) -> bool {
        year >= self.start_year && year <= self.end_year
    }
}

// ── Map-space point ──────────────────────────────────────────────────

/// A point in map space (800×600 viewbox, NW Asia at the origin).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MapPoint {
    pub x: u16,
    pub y: u16,
}

// ── Territory snapshot entry ─────────────────────────────────────────

/// One polity active at a given year. `id` is reused across eras (the
/// same identifier can denote different geographic extents at different
/// times) and is unique only within one snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Territory {
    pub id: &'static str,
    pub name: &'static str,
    pub shape: ShapeId,
    pub color: &'static str,
    pub center_x: u16,
    pub center_y: u16,
}

// ── Snapshot ─────────────────────────────────────────────────────────

/// The full set of active polities plus a display label for one year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub label: &'static str,
    pub territories: Vec<Territory>,
}

impl Snapshot {
    /// Label for a year outside every segment of the cascade.
    pub const UNKNOWN_LABEL: &'static str = "未知";

    pub fn unknown() -> Self {
        Snapshot {
            label: Self::UNKNOWN_LABEL,
            territories: Vec::new(),
        }
    }

    /// Look up an active polity by id, e.g. to find the endpoints of a
    /// relationship line. A missing id means the relationship is simply
    /// not drawable for this year.
    pub fn territory(&self, id: &str) -> Option<&Territory> {
        self.territories.iter().find(|t| t.id == id)
    }
}

// ── Historical event ─────────────────────────────────────────────────

/// A point-in-time event. Events without a `location` stay out of map
/// display but remain visible to text queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HistoricalEvent {
    pub year: i32,
    pub title: &'static str,
    pub short_description: &'static str,
    pub long_description: &'static str,
    pub impact: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<MapPoint>,
}

impl HistoricalEvent {
    pub fn distance_from(&self, year: i32) -> i32 {
        (year - self.year).abs()
    }
}

// ── Relationship ─────────────────────────────────────────────────────

/// How two polities relate over a validity interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RelationKind {
    War,
    Alliance,
    Vassal,
    Peace,
}

impl RelationKind {
    pub fn as_chinese(&self) -> &'static str {
        match self {
            Self::War => "战争",
            Self::Alliance => "同盟",
            Self::Vassal => "臣属",
            Self::Peace => "和平",
        }
    }
}

/// A directed, typed link between two polity ids, valid on an inclusive
/// year interval. The same pair may appear again over a disjoint interval
/// with a different kind (alliance turning to war, and so on).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Relationship {
    pub source_id: &'static str,
    pub target_id: &'static str,
    pub kind: RelationKind,
    pub start_year: i32,
    pub end_year: i32,
    pub description: &'static str,
}

impl Relationship {
    pub fn active_in(&self, year: i32) -> bool {
        year >= self.start_year && year <= self.end_year
    }
}

// ── Faction detail ───────────────────────────────────────────────────

/// Free-text reference material for one polity id. Looked up on demand;
/// no temporal logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FactionDetail {
    pub id: &'static str,
    pub name: &'static str,
    pub duration_label: &'static str,
    pub rulers: &'static str,
    pub culture: &'static str,
    pub events: &'static str,
    pub impact: &'static str,
}

// ── Table validation ─────────────────────────────────────────────────

/// Hard data-authoring errors caught by the load-time validation pass.
/// Overlaps and gaps in the era table are diagnostics, not errors — see
/// `era::coverage_report`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    #[error("era {id}: inverted bounds {start}..{end}")]
    InvertedEraBounds {
        id: &'static str,
        start: i32,
        end: i32,
    },
    #[error("era table not sorted by start year at {id}")]
    UnsortedEras { id: &'static str },
    #[error("relationship {source_id}→{target_id}: inverted bounds {start}..{end}")]
    InvertedRelationBounds {
        source_id: &'static str,
        target_id: &'static str,
        start: i32,
        end: i32,
    },
}

// ── Year formatting ──────────────────────────────────────────────────

/// Display form of a signed year: `BC 221` / `AD 618`.
pub fn format_year(year: i32) -> String {
    if year < 0 {
        format!("BC {}", -year)
    } else {
        format!("AD {year}")
    }
}

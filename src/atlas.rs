//! The read-only query façade over all tables.

use crate::era;
use crate::event;
use crate::faction;
use crate::relation;
use crate::resolver;
use crate::types::{Era, FactionDetail, HistoricalEvent, Relationship, Snapshot, TableError};

/// Bundles the tables behind one handle so presentation collaborators
/// hold a single value. Defaults to the compiled-in tables; tests may
/// substitute their own slices. Every query is a pure function of
/// `(tables, year)` — the façade keeps no state of its own.
#[derive(Debug, Clone, Copy)]
pub struct Atlas<'a> {
    pub eras: &'a [Era],
    pub events: &'a [HistoricalEvent],
    pub relations: &'a [Relationship],
    pub factions: &'a [FactionDetail],
}

impl Default for Atlas<'static> {
    fn default() -> Self {
        Atlas {
            eras: era::ERAS,
            events: event::EVENTS,
            relations: relation::RELATIONSHIPS,
            factions: faction::FACTION_DETAILS,
        }
    }
}

impl<'a> Atlas<'a> {
    /// Territory snapshot for a year. Never fails; out-of-range years
    /// yield the unknown snapshot.
    pub fn resolve(&self, year: i32) -> Snapshot {
        resolver::resolve(year)
    }

    /// The era containing `year`, if the year is not an interregnum.
    pub fn era_at(&self, year: i32) -> Option<&'a Era> {
        era::era_at(self.eras, year)
    }

    /// Events within `window` years, nearest first.
    pub fn events_near(&self, year: i32, window: i32) -> Vec<&'a HistoricalEvent> {
        event::events_near(self.events, year, window)
    }

    /// Relationships live at `year`, in table order.
    pub fn relationships_active(&self, year: i32) -> Vec<&'a Relationship> {
        relation::relationships_active(self.relations, year)
    }

    /// Reference card for a polity id.
    pub fn faction_detail(&self, id: &str) -> Option<&'a FactionDetail> {
        faction::faction_detail(self.factions, id)
    }

    /// Run the load-time bounds/ordering checks over every table.
    pub fn validate(&self) -> Result<(), TableError> {
        era::validate(self.eras)?;
        relation::validate(self.relations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::playback::Playback;

    #[test]
    fn test_default_tables_validate() {
        assert_eq!(Atlas::default().validate(), Ok(()));
    }

    #[test]
    fn test_scrub_to_era_start_round_trips() {
        let atlas = Atlas::default();
        let mut playback = Playback::new();
        for era in atlas.eras {
            playback.scrub(era.start_year);
            let found = atlas.era_at(playback.year()).expect(era.id);
            // On shared transition years the later era is the one whose
            // start we scrubbed to, so the round trip is exact.
            assert_eq!(found.id, era.id, "scrub to {} start", era.id);
        }
    }

    #[test]
    fn test_snapshot_and_relations_agree_on_three_kingdoms() {
        let atlas = Atlas::default();
        let snap = atlas.resolve(230);
        for rel in atlas.relationships_active(230) {
            // Every live link of that year is drawable: both ends are in
            // the snapshot.
            assert!(snap.territory(rel.source_id).is_some(), "{}", rel.source_id);
            assert!(snap.territory(rel.target_id).is_some(), "{}", rel.target_id);
        }
    }

    #[test]
    fn test_undrawable_relationship_is_a_soft_miss() {
        let atlas = Atlas::default();
        // 北魏抗击柔然 is still live in 540, but by then the map shows
        // 北魏 split into 东魏/西魏 — the link has lost an endpoint and
        // is simply not drawable. No error anywhere.
        let snap = atlas.resolve(540);
        let live = atlas.relationships_active(540);
        let wei_rouran = live
            .iter()
            .find(|r| r.source_id == "bei_wei" && r.target_id == "rouran")
            .expect("link is inside its validity interval");
        assert!(snap.territory(wei_rouran.source_id).is_none());
        assert!(snap.territory(wei_rouran.target_id).is_some());
    }

    #[test]
    fn test_injected_tables_are_used() {
        let eras = [crate::types::Era {
            id: "only",
            name: "唯一",
            start_year: 0,
            end_year: 10,
            color: "#000",
            description: "",
        }];
        let atlas = Atlas {
            eras: &eras,
            events: &[],
            relations: &[],
            factions: &[],
        };
        assert_eq!(atlas.era_at(5).map(|e| e.id), Some("only"));
        assert!(atlas.events_near(5, 100).is_empty());
        assert!(atlas.relationships_active(5).is_empty());
        assert!(atlas.faction_detail("qin").is_none());
    }
}

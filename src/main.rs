use std::thread;
use std::time::Duration;

use clap::{Parser, Subcommand};

use history_atlas::atlas::Atlas;
use history_atlas::era::{self, Coverage};
use history_atlas::playback::{JumpDirection, Playback, Tick, INITIAL_YEAR, MAX_YEAR, MIN_YEAR, TICK_MILLIS};
use history_atlas::types::{format_year, Era, HistoricalEvent, Relationship, Snapshot};

/// Wide contextual window for text listings.
const TEXT_WINDOW: i32 = 20;
/// Narrow window for map pins.
const PIN_WINDOW: i32 = 2;

#[derive(Parser)]
#[command(
    name = "history_atlas",
    about = "Chinese historical atlas time-state engine"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Resolve a year to its territorial snapshot
    Resolve {
        /// Year, e.g. "-221", "前221", "BC221", "618"
        year: String,
    },
    /// Show the dynasty containing a year
    Era { year: String },
    /// List events near a year
    Events {
        year: String,
        /// Distance window in years
        #[arg(long, default_value_t = TEXT_WINDOW)]
        window: i32,
        /// Map-pin mode: narrow window, located events only
        #[arg(long)]
        pins: bool,
    },
    /// List relationships active at a year
    Relations { year: String },
    /// Show the reference card for a polity id
    Faction { id: String },
    /// Print the full era inventory with gaps and transitions
    Timeline,
    /// Validate the compiled-in tables and report coverage findings
    Check,
    /// Play the timeline forward to the upper bound
    Play {
        /// Starting year (defaults to 前221)
        #[arg(long)]
        from: Option<String>,
        /// Milliseconds between ticks (0 for a dry run)
        #[arg(long, default_value_t = TICK_MILLIS)]
        interval: u64,
    },
    /// Jump from a year to the previous/next era start
    Jump {
        year: String,
        /// "prev" or "next"
        direction: String,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Command::Resolve { year } => run_resolve(&year),
        Command::Era { year } => run_era(&year),
        Command::Events { year, window, pins } => run_events(&year, window, pins),
        Command::Relations { year } => run_relations(&year),
        Command::Faction { id } => run_faction(&id),
        Command::Timeline => run_timeline(),
        Command::Check => run_check(),
        Command::Play { from, interval } => run_play(from.as_deref(), interval),
        Command::Jump { year, direction } => run_jump(&year, &direction),
    }
}

// ═══════════════════════════════════════════════════════════════════════
//  YEAR ARGUMENT PARSING
// ═══════════════════════════════════════════════════════════════════════

/// Parse a year argument: plain signed integers plus the common
/// Chinese/Western BC spellings ("前221", "公元前221", "BC 221").
fn parse_year(raw: &str) -> Result<i32, String> {
    let s = raw.trim();

    let bc_rest = s
        .strip_prefix("公元前")
        .or_else(|| s.strip_prefix("前"))
        .or_else(|| {
            let upper = s.get(..2).filter(|p| p.eq_ignore_ascii_case("bc"));
            upper.map(|_| s[2..].trim_start())
        });

    if let Some(rest) = bc_rest {
        let n: i32 = rest
            .trim_end_matches('年')
            .parse()
            .map_err(|_| format!("cannot parse year: {raw}"))?;
        return Ok(-n);
    }

    s.trim_end_matches('年')
        .parse()
        .map_err(|_| format!("cannot parse year: {raw}"))
}

fn require_year(raw: &str) -> i32 {
    parse_year(raw).unwrap_or_else(|e| {
        eprintln!("{e}");
        eprintln!("expected forms: -221, 前221, 公元前221, BC221, 618");
        std::process::exit(1);
    })
}

fn print_json<T: serde::Serialize>(data: &T) {
    let json = serde_json::to_string_pretty(data).expect("JSON serialization failed");
    println!("{json}");
}

// ═══════════════════════════════════════════════════════════════════════
//  QUERY COMMANDS
// ═══════════════════════════════════════════════════════════════════════

fn run_resolve(raw: &str) {
    let year = require_year(raw);
    let atlas = Atlas::default();
    let snapshot = atlas.resolve(year);

    eprintln!(
        "{} [{}] — {} polities",
        format_year(year),
        snapshot.label,
        snapshot.territories.len()
    );

    #[derive(serde::Serialize)]
    struct ResolveResult<'a> {
        year: i32,
        year_label: String,
        snapshot: Snapshot,
        era: Option<&'a Era>,
    }

    print_json(&ResolveResult {
        year,
        year_label: format_year(year),
        snapshot,
        era: atlas.era_at(year),
    });
}

fn run_era(raw: &str) {
    let year = require_year(raw);
    let atlas = Atlas::default();

    match atlas.era_at(year) {
        Some(era) => {
            eprintln!("{}: {} ({} ~ {})", format_year(year), era.name, era.start_year, era.end_year);
            print_json(era);
        }
        None => {
            // Same placeholder the sidebar shows for interregna.
            eprintln!("{}: 此期间处于乱世或朝代更替期。", format_year(year));
            print_json(&serde_json::Value::Null);
        }
    }
}

fn run_events(raw: &str, window: i32, pins: bool) {
    let year = require_year(raw);
    let atlas = Atlas::default();

    let window = if pins { PIN_WINDOW } else { window };
    let mut events = atlas.events_near(year, window);
    if pins {
        events.retain(|e| e.location.is_some());
    }

    eprintln!(
        "{} event(s) within {} years of {}",
        events.len(),
        window,
        format_year(year)
    );

    #[derive(serde::Serialize)]
    struct EventsResult<'a> {
        year: i32,
        window: i32,
        count: usize,
        events: Vec<&'a HistoricalEvent>,
    }

    print_json(&EventsResult {
        year,
        window,
        count: events.len(),
        events,
    });
}

fn run_relations(raw: &str) {
    let year = require_year(raw);
    let atlas = Atlas::default();
    let snapshot = atlas.resolve(year);
    let relations = atlas.relationships_active(year);

    for rel in &relations {
        let drawable = snapshot.territory(rel.source_id).is_some()
            && snapshot.territory(rel.target_id).is_some();
        eprintln!(
            "  {} {} {}  [{} ~ {}]{}",
            rel.source_id,
            rel.kind.as_chinese(),
            rel.target_id,
            rel.start_year,
            rel.end_year,
            if drawable { "" } else { "  (不在当前地图上)" }
        );
    }

    #[derive(serde::Serialize)]
    struct RelationsResult<'a> {
        year: i32,
        count: usize,
        relationships: Vec<&'a Relationship>,
    }

    print_json(&RelationsResult {
        year,
        count: relations.len(),
        relationships: relations,
    });
}

fn run_faction(id: &str) {
    let atlas = Atlas::default();
    match atlas.faction_detail(id) {
        Some(detail) => print_json(detail),
        None => {
            eprintln!("no reference card for: {id}");
            let mut ids: Vec<&str> = atlas.factions.iter().map(|f| f.id).collect();
            ids.sort_unstable();
            eprintln!("  available ids: {}", ids.join(", "));
            std::process::exit(1);
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
//  TIMELINE / CHECK
// ═══════════════════════════════════════════════════════════════════════

fn run_timeline() {
    let atlas = Atlas::default();
    let report = era::coverage_report(atlas.eras);

    for (i, era) in atlas.eras.iter().enumerate() {
        println!(
            "{} ({} ~ {}): {}",
            era.name, era.start_year, era.end_year, era.description
        );

        // Interregnum markers between this era and the next.
        if let Some(next) = atlas.eras.get(i + 1) {
            for finding in &report {
                if let Coverage::Gap { from, to } = finding
                    && *from == era.end_year + 1
                    && *to == next.start_year - 1
                {
                    println!("  └─ (乱世/更替期 {from} ~ {to})");
                }
            }
        }
    }

    eprintln!("\nTotal: {} eras covering {} ~ {}", atlas.eras.len(), MIN_YEAR, MAX_YEAR);
}

fn run_check() {
    let atlas = Atlas::default();

    if let Err(e) = atlas.validate() {
        eprintln!("table validation FAILED: {e}");
        std::process::exit(1);
    }
    eprintln!("bounds and ordering: ok");

    let report = era::coverage_report(atlas.eras);
    if report.is_empty() {
        eprintln!("era coverage: seamless");
    } else {
        eprintln!("era coverage findings ({}):", report.len());
        for finding in &report {
            eprintln!("  {finding}");
        }
        eprintln!("(transition overlaps and interregna are authored data, not errors)");
    }
}

// ═══════════════════════════════════════════════════════════════════════
//  PLAYBACK DRIVER
// ═══════════════════════════════════════════════════════════════════════

fn run_play(from: Option<&str>, interval: u64) {
    let start = from.map(require_year).unwrap_or(INITIAL_YEAR);
    let atlas = Atlas::default();
    let mut playback = Playback::starting_at(start);
    playback.play();

    let mut label = "";
    loop {
        match playback.tick() {
            Tick::Advanced(year) => {
                let snapshot = atlas.resolve(year);
                if snapshot.label != label {
                    label = snapshot.label;
                    println!("{:>8}  {}", format_year(year), label);
                }
            }
            Tick::Stopped | Tick::Idle => break,
        }
        if interval > 0 {
            thread::sleep(Duration::from_millis(interval));
        }
    }

    eprintln!("reached {}", format_year(playback.year()));
}

fn run_jump(raw: &str, direction: &str) {
    let year = require_year(raw);
    let direction = match direction {
        "prev" => JumpDirection::Prev,
        "next" => JumpDirection::Next,
        other => {
            eprintln!("unknown direction: {other} (expected prev|next)");
            std::process::exit(1);
        }
    };

    let atlas = Atlas::default();
    let mut playback = Playback::starting_at(year);
    match playback.jump_era(direction, atlas.eras) {
        Some(era) => {
            eprintln!("{} → {} ({})", format_year(year), era.name, era.start_year);
            print_json(era);
        }
        None => {
            eprintln!("no era in that direction from {}", format_year(year));
            print_json(&serde_json::Value::Null);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_year_forms() {
        assert_eq!(parse_year("-221"), Ok(-221));
        assert_eq!(parse_year("618"), Ok(618));
        assert_eq!(parse_year("前221"), Ok(-221));
        assert_eq!(parse_year("公元前221"), Ok(-221));
        assert_eq!(parse_year("前221年"), Ok(-221));
        assert_eq!(parse_year("BC221"), Ok(-221));
        assert_eq!(parse_year("bc 221"), Ok(-221));
        assert_eq!(parse_year(" 1912 "), Ok(1912));
    }

    #[test]
    fn test_parse_year_rejects_garbage() {
        assert!(parse_year("").is_err());
        assert!(parse_year("唐").is_err());
        assert!(parse_year("BC").is_err());
    }
}

//! Playback and scrub state for the timeline.
//!
//! One mutable year plus a playing flag, owned by whoever drives the
//! UI. The wall-clock timer stays with that owner; this type only
//! provides the atomic transitions, so the query side of the crate
//! stays stateless and re-entrant. A tick that arrives after playback
//! was paused or stopped is inert — the owner may cancel its timer
//! lazily without risking a stray mutation.

use crate::types::Era;

/// First year of the covered range (start of 西周).
pub const MIN_YEAR: i32 = -1046;
/// Upper playback bound (end of 清); playback auto-stops here.
pub const MAX_YEAR: i32 = 1912;
/// Default starting position: 秦统一六国.
pub const INITIAL_YEAR: i32 = -221;
/// Years advanced per tick.
pub const YEAR_STEP: i32 = 5;
/// Wall-clock tick cadence used by the reference driver.
pub const TICK_MILLIS: u64 = 100;

// ── Tick outcome ─────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// Playback advanced to this year (possibly hitting the bound and
    /// auto-pausing in the same transition).
    Advanced(i32),
    /// Playback was playing at the bound already and stopped.
    Stopped,
    /// Not playing; nothing changed.
    Idle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpDirection {
    Prev,
    Next,
}

// ── Controller state ─────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Playback {
    year: i32,
    playing: bool,
}

impl Default for Playback {
    fn default() -> Self {
        Self::new()
    }
}

impl Playback {
    pub fn new() -> Self {
        Playback {
            year: INITIAL_YEAR,
            playing: false,
        }
    }

    pub fn starting_at(year: i32) -> Self {
        Playback {
            year: year.clamp(MIN_YEAR, MAX_YEAR),
            playing: false,
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn play(&mut self) {
        self.playing = true;
    }

    pub fn pause(&mut self) {
        self.playing = false;
    }

    pub fn toggle(&mut self) {
        self.playing = !self.playing;
    }

    /// One timer tick. Advances by `YEAR_STEP`, clamped so the year
    /// never overshoots `MAX_YEAR`, and auto-pauses the moment the
    /// bound is reached. Ticking N times from year Y while playing
    /// lands on `min(Y + N * YEAR_STEP, MAX_YEAR)`.
    pub fn tick(&mut self) -> Tick {
        if !self.playing {
            return Tick::Idle;
        }
        if self.year >= MAX_YEAR {
            self.playing = false;
            return Tick::Stopped;
        }
        self.year = (self.year + YEAR_STEP).min(MAX_YEAR);
        if self.year >= MAX_YEAR {
            self.playing = false;
        }
        Tick::Advanced(self.year)
    }

    /// Direct year set from the slider. Pauses playback as a side
    /// effect; the incoming value is clamped into the timeline bounds.
    pub fn scrub(&mut self, year: i32) {
        self.playing = false;
        self.year = year.clamp(MIN_YEAR, MAX_YEAR);
    }

    /// Jump to the start year of the previous/next era. When the
    /// current year sits in an interregnum the next era is the first
    /// one starting after it, and the previous era is the one before
    /// that. Pauses playback when a jump happens; returns the era
    /// jumped to, or `None` when there is nothing in that direction.
    pub fn jump_era<'a>(&mut self, direction: JumpDirection, eras: &'a [Era]) -> Option<&'a Era> {
        let current = eras.iter().position(|e| e.contains(self.year));

        let target = match current {
            Some(i) => match direction {
                JumpDirection::Next => i + 1,
                JumpDirection::Prev => i.checked_sub(1)?,
            },
            None => {
                let following = eras.iter().position(|e| e.start_year > self.year);
                match direction {
                    JumpDirection::Next => following?,
                    JumpDirection::Prev => following.unwrap_or(eras.len()).checked_sub(1)?,
                }
            }
        };

        let era = eras.get(target)?;
        self.scrub(era.start_year);
        Some(era)
    }

    /// Back to the initial position, paused.
    pub fn reset(&mut self) {
        self.playing = false;
        self.year = INITIAL_YEAR;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::era::ERAS;

    // ── tick ─────────────────────────────────────────────────────────

    #[test]
    fn test_tick_advances_by_step_while_playing() {
        let mut p = Playback::starting_at(0);
        p.play();
        assert_eq!(p.tick(), Tick::Advanced(5));
        assert_eq!(p.tick(), Tick::Advanced(10));
        assert_eq!(p.year(), 10);
        assert!(p.is_playing());
    }

    #[test]
    fn test_n_ticks_land_on_min_of_target_and_bound() {
        for start in [-221, 1880, 1900] {
            let mut p = Playback::starting_at(start);
            p.play();
            for n in 1..=30 {
                if p.tick() == Tick::Idle {
                    break;
                }
                let expected = (start + n * YEAR_STEP).min(MAX_YEAR);
                assert_eq!(p.year(), expected, "start {start}, tick {n}");
            }
        }
    }

    #[test]
    fn test_tick_never_overshoots_the_bound() {
        // 1910 + 5 would be 1915; the clamp lands exactly on 1912.
        let mut p = Playback::starting_at(1910);
        p.play();
        assert_eq!(p.tick(), Tick::Advanced(MAX_YEAR));
        assert!(!p.is_playing(), "must auto-pause at the bound");
        assert_eq!(p.tick(), Tick::Idle);
        assert_eq!(p.year(), MAX_YEAR);
    }

    #[test]
    fn test_play_at_bound_stops_without_moving() {
        let mut p = Playback::starting_at(MAX_YEAR);
        p.play();
        assert_eq!(p.tick(), Tick::Stopped);
        assert_eq!(p.year(), MAX_YEAR);
        assert!(!p.is_playing());
    }

    #[test]
    fn test_tick_after_pause_is_inert() {
        let mut p = Playback::starting_at(100);
        p.play();
        p.tick();
        p.pause();
        let frozen = p.year();
        // A timer callback firing after the owner paused must not move
        // anything.
        for _ in 0..10 {
            assert_eq!(p.tick(), Tick::Idle);
        }
        assert_eq!(p.year(), frozen);
        assert!(!p.is_playing());
    }

    // ── scrub / reset ────────────────────────────────────────────────

    #[test]
    fn test_scrub_pauses_and_clamps() {
        let mut p = Playback::new();
        p.play();
        p.scrub(618);
        assert_eq!(p.year(), 618);
        assert!(!p.is_playing());

        p.scrub(-99999);
        assert_eq!(p.year(), MIN_YEAR);
        p.scrub(99999);
        assert_eq!(p.year(), MAX_YEAR);
    }

    #[test]
    fn test_reset_returns_to_initial_year() {
        let mut p = Playback::starting_at(1500);
        p.play();
        p.reset();
        assert_eq!(p.year(), INITIAL_YEAR);
        assert!(!p.is_playing());
    }

    // ── era jump ─────────────────────────────────────────────────────

    #[test]
    fn test_jump_next_from_inside_an_era() {
        let mut p = Playback::starting_at(-1000); // 西周
        p.play();
        let era = p.jump_era(JumpDirection::Next, ERAS).unwrap();
        assert_eq!(era.id, "chun_qiu");
        assert_eq!(p.year(), -770);
        assert!(!p.is_playing(), "era jump pauses playback");
    }

    #[test]
    fn test_jump_prev_from_inside_an_era() {
        let mut p = Playback::starting_at(700); // 唐
        let era = p.jump_era(JumpDirection::Prev, ERAS).unwrap();
        assert_eq!(era.id, "sui");
        assert_eq!(p.year(), 581);
    }

    #[test]
    fn test_jump_from_an_interregnum() {
        // -204 belongs to no era; next is 西汉, prev is 秦.
        let mut p = Playback::starting_at(-204);
        let next = p.jump_era(JumpDirection::Next, ERAS).unwrap();
        assert_eq!(next.id, "xi_han");

        let mut p = Playback::starting_at(-204);
        let prev = p.jump_era(JumpDirection::Prev, ERAS).unwrap();
        assert_eq!(prev.id, "qin");
    }

    #[test]
    fn test_jump_past_the_ends_is_refused() {
        let mut p = Playback::starting_at(-1046);
        assert!(p.jump_era(JumpDirection::Prev, ERAS).is_none());
        assert_eq!(p.year(), -1046);

        let mut p = Playback::starting_at(1900);
        assert!(p.jump_era(JumpDirection::Next, ERAS).is_none());
        assert_eq!(p.year(), 1900);
    }
}

//! The territory snapshot resolver.
//!
//! The year axis is partitioned into major segments, each carrying a
//! rule that builds the polity list for any year inside it. Segments
//! live in one ordered table so that exclusivity and coverage can be
//! checked by iterating data instead of tracing control flow. The one
//! long segment (晋 through 南北朝, ~300 years) recurses into a second
//! table of the same shape.
//!
//! Spans are half-open `[start, end)`. Where two spans touch (the 南宋
//! span runs to 1279 while 元 opens at 1271), the later segment wins:
//! `resolve` scans the table from the end, so 1271–1278 belong to 元朝.
//!
//! Some rules contain a further conditional on the same year — a polity
//! appearing or vanishing mid-segment while the rest of the list stays
//! put (金 rising after 1115, 蒙古 after 1206, 准噶尔 gone from 1757,
//! 北周 absorbing 北齐 in 577). Those are overlays inside one rule, not
//! separate segments, because the surrounding list is identical.

use crate::shapes::ShapeId;
use crate::types::{Snapshot, Territory};

// ── Segment table ────────────────────────────────────────────────────

/// One span of the cascade: a half-open year range plus the rule that
/// builds its snapshot.
pub struct Segment {
    /// Inclusive first year.
    pub start: i32,
    /// Exclusive upper bound; `None` leaves the segment open-ended.
    pub end: Option<i32>,
    pub build: fn(i32) -> Snapshot,
}

impl Segment {
    pub fn contains(&self, year: i32) -> bool {
        year >= self.start && self.end.is_none_or(|end| year < end)
    }
}

pub static SEGMENTS: &[Segment] = &[
    Segment { start: -1046, end: Some(-770), build: western_zhou },
    Segment { start: -770, end: Some(-221), build: eastern_zhou },
    Segment { start: -221, end: Some(220), build: qin_han },
    Segment { start: 220, end: Some(280), build: three_kingdoms },
    Segment { start: 280, end: Some(581), build: jin_to_nan_bei },
    Segment { start: 581, end: Some(907), build: sui_tang },
    Segment { start: 907, end: Some(1279), build: five_dynasties_to_song },
    Segment { start: 1271, end: Some(1368), build: yuan },
    Segment { start: 1368, end: Some(1644), build: ming },
    Segment { start: 1644, end: None, build: qing },
];

/// Resolve a year to its snapshot. Total over all of `i32`: a year
/// before the covered range yields the unknown snapshot, and 清 carries
/// every year from 1644 on (the playback bound, not the resolver, ends
/// the timeline at 1912).
pub fn resolve(year: i32) -> Snapshot {
    match SEGMENTS.iter().rev().find(|s| s.contains(year)) {
        Some(seg) => (seg.build)(year),
        None => Snapshot::unknown(),
    }
}

fn polity(
    id: &'static str,
    name: &'static str,
    shape: ShapeId,
    color: &'static str,
    center_x: u16,
    center_y: u16,
) -> Territory {
    Territory {
        id,
        name,
        shape,
        color,
        center_x,
        center_y,
    }
}

// ── Segment rules ────────────────────────────────────────────────────

fn western_zhou(_year: i32) -> Snapshot {
    Snapshot {
        label: "西周",
        territories: vec![
            polity("zhou", "周", ShapeId::Core, "#7c7c7c", 480, 240),
            polity("quan_rong", "犬戎", ShapeId::Quanrong, "#57534e", 250, 220),
        ],
    }
}

/// 春秋 and 战国 share the four great states and the steppe peoples;
/// the 战国 half replaces 晋 and the minor central states with the
/// three successor states of the partition of Jin.
fn eastern_zhou(year: i32) -> Snapshot {
    let spring_autumn = year < -475;

    let mut territories = vec![
        polity("qin", "秦", ShapeId::QinState, "#1a1a1a", 380, 250),
        polity("chu", "楚", ShapeId::ChuState, "#b91c1c", 500, 330),
        polity("qi", "齐", ShapeId::QiState, "#7e22ce", 580, 200),
        polity("yan", "燕", ShapeId::YanState, "#4682b4", 560, 140),
        polity("xiongnu", "匈奴", ShapeId::SteppeFull, "#57534e", 400, 80),
        polity("xianbei", "东胡", ShapeId::SteppeEast, "#65a30d", 650, 100),
    ];

    if spring_autumn {
        territories.push(polity("state_jin", "晋", ShapeId::JinState, "#a0522d", 460, 200));
        territories.push(polity("others", "中原诸国", ShapeId::CentralStates, "#d97706", 500, 260));
    } else {
        territories.push(polity("state_zhao", "赵", ShapeId::ZhaoState, "#be185d", 470, 180));
        territories.push(polity("state_wei", "魏", ShapeId::WeiState, "#dc2626", 490, 225));
        territories.push(polity("state_han", "韩", ShapeId::HanState, "#f97316", 480, 265));
    }

    Snapshot {
        label: if spring_autumn { "春秋" } else { "战国" },
        territories,
    }
}

/// One unified core polity whose label and color track 秦→西汉→东汉,
/// ringed by the same three frontier peoples throughout.
fn qin_han(year: i32) -> Snapshot {
    let label = if year < -206 {
        "秦朝"
    } else if year < 9 {
        "西汉"
    } else {
        "东汉"
    };
    let core_color = if year < -206 { "#1a1a1a" } else { "#b22222" };

    Snapshot {
        label,
        territories: vec![
            polity("han", label, ShapeId::UnifiedProper, core_color, 500, 300),
            polity("xiongnu", "匈奴", ShapeId::SteppeFull, "#57534e", 400, 80),
            polity("qiang", "羌", ShapeId::Tibet, "#854d0e", 150, 350),
            polity("xianbei", "鲜卑", ShapeId::Manchuria, "#65a30d", 700, 100),
        ],
    }
}

fn three_kingdoms(_year: i32) -> Snapshot {
    Snapshot {
        label: "三国",
        territories: vec![
            polity("wei", "魏", ShapeId::WeiKingdom, "#1d4ed8", 500, 220),
            polity("shu", "蜀", ShapeId::ShuKingdom, "#dc2626", 300, 340),
            polity("wu", "吴", ShapeId::WuKingdom, "#16a34a", 500, 380),
            polity("xianbei", "鲜卑", ShapeId::SteppeFull, "#65a30d", 400, 100),
            polity("qiang", "羌", ShapeId::Tibet, "#854d0e", 150, 350),
        ],
    }
}

// ── 晋 → 南北朝 second-level cascade ─────────────────────────────────

static NAN_BEI_PHASES: &[Segment] = &[
    Segment { start: 280, end: Some(317), build: western_jin },
    Segment { start: 317, end: Some(351), build: sixteen_kingdoms_early },
    Segment { start: 351, end: Some(384), build: former_qin_north },
    Segment { start: 384, end: Some(420), build: sixteen_kingdoms_late },
    Segment { start: 420, end: Some(479), build: song_wei_standoff },
    Segment { start: 479, end: Some(534), build: qi_liang_vs_wei },
    Segment { start: 534, end: Some(550), build: wei_split },
    Segment { start: 550, end: Some(581), build: zhou_qi_chen },
];

fn jin_to_nan_bei(year: i32) -> Snapshot {
    match NAN_BEI_PHASES.iter().rev().find(|p| p.contains(year)) {
        Some(phase) => (phase.build)(year),
        None => Snapshot::unknown(),
    }
}

fn rouran() -> Territory {
    polity("rouran", "柔然", ShapeId::SteppeFull, "#57534e", 400, 80)
}

// The 吐谷浑 reuse the 羌 polity id: same highland footprint, and no
// snapshot of this span ever holds both.
fn tuyuhun() -> Territory {
    polity("qiang", "吐谷浑", ShapeId::Tibet, "#854d0e", 180, 320)
}

fn eastern_jin_court() -> Territory {
    polity("dong_jin", "东晋", ShapeId::EasternJin, "#0f766e", 500, 400)
}

fn western_jin(_year: i32) -> Snapshot {
    Snapshot {
        label: "西晋",
        territories: vec![
            polity("jin_xi", "西晋", ShapeId::UnifiedProper, "#1d4ed8", 500, 300),
            polity("xianbei", "鲜卑", ShapeId::SteppeFull, "#65a30d", 400, 80),
        ],
    }
}

fn sixteen_kingdoms_early(_year: i32) -> Snapshot {
    Snapshot {
        label: "东晋十六国 (早期)",
        territories: vec![
            eastern_jin_court(),
            polity("hou_zhao", "后赵", ShapeId::LaterZhao, "#9a3412", 450, 250),
            polity("cheng_han", "成汉", ShapeId::ChengHan, "#c2410c", 250, 350),
            polity("qian_yan", "前燕", ShapeId::FormerYan, "#be185d", 600, 180),
            polity("qian_liang", "前凉", ShapeId::FormerLiang, "#d97706", 200, 220),
            polity("xianbei", "代", ShapeId::SteppeFull, "#65a30d", 400, 80),
        ],
    }
}

fn former_qin_north(_year: i32) -> Snapshot {
    Snapshot {
        label: "前秦统一北方",
        territories: vec![
            eastern_jin_court(),
            polity("qian_qin", "前秦", ShapeId::FormerQinMax, "#6d28d9", 400, 250),
            rouran(),
        ],
    }
}

fn sixteen_kingdoms_late(_year: i32) -> Snapshot {
    Snapshot {
        label: "东晋十六国 (后期)",
        territories: vec![
            eastern_jin_court(),
            polity("bei_wei", "北魏", ShapeId::NorthernWeiEarly, "#1e3a8a", 420, 200),
            polity("hou_yan", "后燕", ShapeId::FormerYan, "#be185d", 600, 180),
            polity("hou_qin", "后秦", ShapeId::LaterQin, "#991b1b", 300, 260),
            rouran(),
        ],
    }
}

fn song_wei_standoff(_year: i32) -> Snapshot {
    Snapshot {
        label: "南北朝 (宋魏对峙)",
        territories: vec![
            polity("liu_song", "刘宋", ShapeId::LiuSong, "#be185d", 500, 400),
            polity("bei_wei", "北魏", ShapeId::NorthernWei, "#1e3a8a", 400, 250),
            rouran(),
            tuyuhun(),
        ],
    }
}

/// The southern court changes house (齐 then 梁) against an unchanged
/// 北魏; the label tracks the house.
fn qi_liang_vs_wei(year: i32) -> Snapshot {
    let qi = year < 502;
    let south = if qi {
        polity("nan_qi", "南齐", ShapeId::LiuSong, "#ec4899", 500, 400)
    } else {
        polity("nan_liang", "梁", ShapeId::LiuSong, "#15803d", 500, 400)
    };

    Snapshot {
        label: if qi { "南北朝 (齐魏)" } else { "南北朝 (梁魏)" },
        territories: vec![
            south,
            polity("bei_wei", "北魏", ShapeId::NorthernWei, "#1e3a8a", 400, 250),
            rouran(),
            tuyuhun(),
        ],
    }
}

fn wei_split(_year: i32) -> Snapshot {
    Snapshot {
        label: "南北朝 (东西魏分裂)",
        territories: vec![
            polity("nan_liang", "梁", ShapeId::Chen, "#15803d", 500, 420),
            polity("dong_wei", "东魏", ShapeId::EasternWei, "#93c5fd", 520, 250),
            polity("xi_wei", "西魏", ShapeId::WesternWei, "#64748b", 300, 250),
            rouran(),
            tuyuhun(),
        ],
    }
}

/// 北周 conquered 北齐 in 577, so the north collapses from two polities
/// to one mid-segment while 陈 and 突厥 stay put.
fn zhou_qi_chen(year: i32) -> Snapshot {
    let tujue = polity("tujue", "突厥", ShapeId::SteppeFull, "#4338ca", 400, 80);
    let chen = polity("nan_chen", "陈", ShapeId::Chen, "#ef4444", 500, 420);

    let territories = if year >= 577 {
        vec![
            chen,
            polity("bei_zhou", "北周", ShapeId::NorthernWei, "#4338ca", 400, 250),
            tujue,
        ]
    } else {
        vec![
            chen,
            polity("bei_qi", "北齐", ShapeId::NorthernQi, "#d8b4fe", 520, 250),
            polity("bei_zhou", "北周", ShapeId::NorthernZhou, "#4338ca", 300, 250),
            tujue,
        ]
    };

    Snapshot {
        label: "南北朝 (周齐陈)",
        territories,
    }
}

// ── 隋唐 onwards ─────────────────────────────────────────────────────

/// Three phases on one core polity: early unification flanked by 突厥
/// and 吐蕃, the post-630 maximum after the eastern Turks fell, and the
/// post-安史 contraction with an expanded 吐蕃 and the 回鹘 taking the
/// steppe.
fn sui_tang(year: i32) -> Snapshot {
    let label = if year < 618 { "隋" } else { "唐" };

    let territories = if year < 630 {
        let core_color = if year < 618 { "#4338ca" } else { "#eab308" };
        vec![
            polity("tang", label, ShapeId::UnifiedProper, core_color, 450, 280),
            polity("tujue", "突厥", ShapeId::SteppeFull, "#4338ca", 400, 80),
            polity("tubo", "吐蕃", ShapeId::Tibet, "#991b1b", 200, 350),
        ]
    } else if year < 755 {
        vec![
            polity("tang", label, ShapeId::TangMax, "#eab308", 450, 280),
            polity("tubo", "吐蕃", ShapeId::Tibet, "#991b1b", 200, 350),
        ]
    } else {
        vec![
            polity("tang", label, ShapeId::UnifiedProper, "#eab308", 500, 300),
            polity("tubo", "吐蕃", ShapeId::TuboExpanded, "#991b1b", 200, 350),
            polity("tujue", "回鹘", ShapeId::SteppeFull, "#15803d", 400, 80),
        ]
    };

    Snapshot { label, territories }
}

fn tubo_tribes() -> Territory {
    polity("tubo", "吐蕃诸部", ShapeId::Tibet, "#7f1d1d", 150, 350)
}

fn five_dynasties_to_song(year: i32) -> Snapshot {
    let liao = polity("liao", "辽", ShapeId::NorthSteppe, "#166534", 450, 120);
    let xia = polity("xia", "西夏", ShapeId::WesternXia, "#b45309", 260, 250);

    if year < 960 {
        Snapshot {
            label: "五代十国",
            territories: vec![
                polity("wudai", "中原", ShapeId::CentralPlains, "#475569", 480, 260),
                polity("shiguo", "十国", ShapeId::SongSouth, "#be185d", 500, 400),
                liao,
                tubo_tribes(),
            ],
        }
    } else if year < 1127 {
        let mut territories = vec![
            liao,
            polity("song_north", "北宋", ShapeId::SongNorth, "#0ea5e9", 480, 350),
            xia,
            tubo_tribes(),
        ];
        // 金 rises in Manchuria only after 1115; the rest of the map
        // does not change until 靖康.
        if year > 1115 {
            territories.push(polity("jin", "金(崛起)", ShapeId::Manchuria, "#ca8a04", 650, 120));
        }
        Snapshot {
            label: "北宋 & 辽",
            territories,
        }
    } else {
        let mut territories = vec![
            polity("jin", "金", ShapeId::JurchenJin, "#ca8a04", 450, 200),
            polity("song_south", "南宋", ShapeId::SongSouth, "#06b6d4", 500, 420),
            xia,
            tubo_tribes(),
        ];
        if year > 1206 {
            territories.push(polity("mongol", "蒙古", ShapeId::Mongol, "#171717", 350, 60));
        }
        Snapshot {
            label: "南宋 & 金",
            territories,
        }
    }
}

fn yuan(_year: i32) -> Snapshot {
    Snapshot {
        label: "元朝",
        territories: vec![polity("yuan", "元", ShapeId::Massive, "#1e3a8a", 450, 250)],
    }
}

fn ming(_year: i32) -> Snapshot {
    Snapshot {
        label: "明朝",
        territories: vec![
            polity("ming", "明", ShapeId::UnifiedProper, "#dc2626", 500, 300),
            polity("northern_yuan", "北元/瓦剌", ShapeId::SteppeFull, "#57534e", 400, 80),
            polity("qing", "后金", ShapeId::Manchuria, "#5b21b6", 700, 120),
        ],
    }
}

fn qing(year: i32) -> Snapshot {
    let territories = if year < 1757 {
        vec![
            polity("qing", "清", ShapeId::Massive, "#5b21b6", 500, 300),
            polity("dzungar", "准噶尔", ShapeId::WesternRegions, "#9a3412", 150, 200),
        ]
    } else {
        vec![polity("qing", "清", ShapeId::Massive, "#5b21b6", 450, 250)]
    };

    Snapshot {
        label: "清朝",
        territories,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn ids(snapshot: &Snapshot) -> Vec<&'static str> {
        snapshot.territories.iter().map(|t| t.id).collect()
    }

    fn assert_unique_ids(snapshot: &Snapshot, year: i32) {
        let ids = ids(snapshot);
        for (i, id) in ids.iter().enumerate() {
            assert!(
                !ids[i + 1..].contains(id),
                "duplicate polity id {id} at year {year}"
            );
        }
    }

    // ── Top-level segments ───────────────────────────────────────────

    #[test]
    fn test_each_top_level_branch() {
        let cases: &[(i32, &str, usize)] = &[
            (-1000, "西周", 2),
            (-700, "春秋", 8),
            (-300, "战国", 9),
            (-210, "秦朝", 4),
            (-100, "西汉", 4),
            (100, "东汉", 4),
            (250, "三国", 5),
            (600, "隋", 3),
            (700, "唐", 2),
            (950, "五代十国", 4),
            (1000, "北宋 & 辽", 4),
            (1200, "南宋 & 金", 4),
            (1300, "元朝", 1),
            (1500, "明朝", 3),
            (1700, "清朝", 2),
            (1800, "清朝", 1),
        ];
        for &(year, label, count) in cases {
            let snap = resolve(year);
            assert_eq!(snap.label, label, "label at {year}");
            assert_eq!(snap.territories.len(), count, "polity count at {year}");
        }
    }

    #[test]
    fn test_each_nan_bei_phase() {
        let cases: &[(i32, &str, usize)] = &[
            (300, "西晋", 2),
            (330, "东晋十六国 (早期)", 6),
            (370, "前秦统一北方", 3),
            (400, "东晋十六国 (后期)", 5),
            (450, "南北朝 (宋魏对峙)", 4),
            (490, "南北朝 (齐魏)", 4),
            (520, "南北朝 (梁魏)", 4),
            (540, "南北朝 (东西魏分裂)", 5),
            (560, "南北朝 (周齐陈)", 4),
            (580, "南北朝 (周齐陈)", 3),
        ];
        for &(year, label, count) in cases {
            let snap = resolve(year);
            assert_eq!(snap.label, label, "label at {year}");
            assert_eq!(snap.territories.len(), count, "polity count at {year}");
        }
    }

    #[test]
    fn test_out_of_range_years_resolve_to_unknown() {
        for year in [-1047, -2000, i32::MIN] {
            let snap = resolve(year);
            assert_eq!(snap.label, Snapshot::UNKNOWN_LABEL);
            assert!(snap.territories.is_empty());
        }
        // The open-ended 清 segment carries everything from 1644 up.
        assert_eq!(resolve(i32::MAX).label, "清朝");
    }

    // ── Boundaries and tie-break ─────────────────────────────────────

    #[test]
    fn test_segment_boundaries_enter_exactly_on_start() {
        let transitions: &[(i32, &str, &str)] = &[
            (-770, "西周", "春秋"),
            (-475, "春秋", "战国"),
            (-221, "战国", "秦朝"),
            (-206, "秦朝", "西汉"),
            (9, "西汉", "东汉"),
            (220, "东汉", "三国"),
            (280, "三国", "西晋"),
            (581, "南北朝 (周齐陈)", "隋"),
            (618, "隋", "唐"),
            (907, "唐", "五代十国"),
            (960, "五代十国", "北宋 & 辽"),
            (1127, "北宋 & 辽", "南宋 & 金"),
            (1368, "元朝", "明朝"),
            (1644, "明朝", "清朝"),
        ];
        for &(boundary, before, after) in transitions {
            assert_eq!(resolve(boundary - 1).label, before, "year {}", boundary - 1);
            assert_eq!(resolve(boundary).label, after, "year {boundary}");
        }
    }

    #[test]
    fn test_nan_bei_phase_boundaries() {
        assert_eq!(resolve(316).label, "西晋");
        assert_eq!(resolve(317).label, "东晋十六国 (早期)");
        assert_eq!(resolve(350).label, "东晋十六国 (早期)");
        assert_eq!(resolve(351).label, "前秦统一北方");
        // 淝水之战 year itself still belongs to the unified north.
        assert_eq!(resolve(383).label, "前秦统一北方");
        assert_eq!(resolve(384).label, "东晋十六国 (后期)");
        assert_eq!(resolve(419).label, "东晋十六国 (后期)");
        assert_eq!(resolve(420).label, "南北朝 (宋魏对峙)");
        assert_eq!(resolve(478).label, "南北朝 (宋魏对峙)");
        assert_eq!(resolve(479).label, "南北朝 (齐魏)");
        assert_eq!(resolve(501).label, "南北朝 (齐魏)");
        assert_eq!(resolve(502).label, "南北朝 (梁魏)");
        assert_eq!(resolve(533).label, "南北朝 (梁魏)");
        assert_eq!(resolve(534).label, "南北朝 (东西魏分裂)");
        assert_eq!(resolve(549).label, "南北朝 (东西魏分裂)");
        assert_eq!(resolve(550).label, "南北朝 (周齐陈)");
    }

    #[test]
    fn test_later_segment_wins_the_song_yuan_overlap() {
        // 1271..1278 sit in both the Song span and the 元 span; the
        // later segment claims them.
        for year in 1271..1279 {
            assert_eq!(resolve(year).label, "元朝", "year {year}");
        }
        assert_eq!(resolve(1270).label, "南宋 & 金");
    }

    #[test]
    fn test_top_level_spans_overlap_only_at_song_yuan() {
        for year in -1100..=2000 {
            let matching = SEGMENTS.iter().filter(|s| s.contains(year)).count();
            if (1271..1279).contains(&year) {
                assert_eq!(matching, 2, "year {year}");
            } else {
                assert!(matching <= 1, "year {year} matches {matching} segments");
            }
        }
    }

    #[test]
    fn test_no_coverage_gap_across_declared_range() {
        for year in -1046..=1912 {
            let snap = resolve(year);
            assert_ne!(snap.label, Snapshot::UNKNOWN_LABEL, "gap at {year}");
            assert!(!snap.territories.is_empty(), "empty snapshot at {year}");
        }
    }

    // ── Overlays ─────────────────────────────────────────────────────

    #[test]
    fn test_jurchen_jin_overlay_after_1115() {
        assert!(!ids(&resolve(1115)).contains(&"jin"));
        assert!(ids(&resolve(1116)).contains(&"jin"));
        // The surrounding list is unchanged by the overlay.
        assert_eq!(resolve(1115).label, resolve(1116).label);
        assert_eq!(resolve(1116).territories.len(), resolve(1115).territories.len() + 1);
    }

    #[test]
    fn test_mongol_overlay_after_1206() {
        assert!(!ids(&resolve(1206)).contains(&"mongol"));
        assert!(ids(&resolve(1207)).contains(&"mongol"));
        assert_eq!(resolve(1207).label, "南宋 & 金");
    }

    #[test]
    fn test_dzungar_overlay_ends_in_1757() {
        assert!(ids(&resolve(1756)).contains(&"dzungar"));
        assert!(!ids(&resolve(1757)).contains(&"dzungar"));
        assert_eq!(resolve(1757).label, "清朝");
    }

    #[test]
    fn test_zhou_absorbs_qi_in_577() {
        let before = resolve(576);
        let after = resolve(577);
        assert_eq!(before.label, after.label);
        assert!(ids(&before).contains(&"bei_qi"));
        assert!(!ids(&after).contains(&"bei_qi"));
        assert!(ids(&after).contains(&"bei_zhou"));
    }

    #[test]
    fn test_tang_phases() {
        assert_eq!(ids(&resolve(629)), vec!["tang", "tujue", "tubo"]);
        assert_eq!(ids(&resolve(630)), vec!["tang", "tubo"]);
        assert_eq!(ids(&resolve(754)), vec!["tang", "tubo"]);
        assert_eq!(ids(&resolve(755)), vec!["tang", "tubo", "tujue"]);
        // 回鹘 replace 突厥 on the steppe after 安史; same polity id.
        let late = resolve(755);
        let uighur = late.territory("tujue").unwrap();
        assert_eq!(uighur.name, "回鹘");
    }

    #[test]
    fn test_partition_of_jin_swaps_polities() {
        let spring = resolve(-500);
        assert!(ids(&spring).contains(&"state_jin"));
        let warring = resolve(-400);
        assert!(!ids(&warring).contains(&"state_jin"));
        for id in ["state_zhao", "state_wei", "state_han"] {
            assert!(ids(&warring).contains(&id));
        }
    }

    #[test]
    fn test_unified_core_tracks_label_and_color() {
        let qin = resolve(-210);
        let core = qin.territory("han").unwrap();
        assert_eq!(core.name, "秦朝");
        assert_eq!(core.color, "#1a1a1a");

        let han = resolve(-100);
        let core = han.territory("han").unwrap();
        assert_eq!(core.name, "西汉");
        assert_eq!(core.color, "#b22222");
    }

    // ── Global properties ────────────────────────────────────────────

    #[test]
    fn test_polity_ids_unique_in_every_snapshot() {
        for year in -1100..=2000 {
            assert_unique_ids(&resolve(year), year);
        }
    }

    proptest! {
        #[test]
        fn test_resolve_is_total(year in proptest::num::i32::ANY) {
            let snap = resolve(year);
            prop_assert!(!snap.label.is_empty());
            let ids: Vec<_> = snap.territories.iter().map(|t| t.id).collect();
            for (i, id) in ids.iter().enumerate() {
                prop_assert!(!ids[i + 1..].contains(id));
            }
        }
    }
}

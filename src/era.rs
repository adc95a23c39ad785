//! The era (dynasty) table and its lookups.
//!
//! The table is ordered by start year but is neither gap-free nor
//! overlap-free: transition years are authored into both the ending and
//! the starting dynasty (e.g. 220 closes 东汉 and opens 三国), and a few
//! genuine interregna (秦亡 to 汉兴, 新莽 to 东汉) are left uncovered on
//! purpose. `era_at` resolves overlaps by letting the later era win;
//! gaps resolve to `None` and are the caller's placeholder case.

use crate::types::{Era, TableError};

// ── The dynasty table ────────────────────────────────────────────────

pub static ERAS: &[Era] = &[
    Era { id: "xi_zhou", name: "西周", start_year: -1046, end_year: -771, color: "#7c7c7c", description: "分封制确立，礼乐文明形成。" },
    Era { id: "chun_qiu", name: "春秋", start_year: -770, end_year: -476, color: "#a0522d", description: "王室衰微，诸侯争霸，晋国称霸。" },
    Era { id: "zhan_guo", name: "战国", start_year: -475, end_year: -221, color: "#b91c1c", description: "三家分晋，七雄并立，变法图强。" },
    Era { id: "qin", name: "秦朝", start_year: -221, end_year: -206, color: "#1a1a1a", description: "中国历史上第一个统一的多民族封建国家。" },
    Era { id: "xi_han", name: "西汉", start_year: -202, end_year: 8, color: "#b22222", description: "休养生息，开通丝绸之路。" },
    Era { id: "xin", name: "新朝", start_year: 9, end_year: 23, color: "#65a30d", description: "王莽改制。" },
    Era { id: "dong_han", name: "东汉", start_year: 25, end_year: 220, color: "#cd5c5c", description: "光武中兴。" },
    Era { id: "sanguo", name: "三国", start_year: 220, end_year: 280, color: "#d97706", description: "魏蜀吴三足鼎立。" },
    Era { id: "xi_jin", name: "西晋", start_year: 266, end_year: 316, color: "#1d4ed8", description: "短暂统一，八王之乱。" },
    Era { id: "dong_jin", name: "东晋十六国", start_year: 317, end_year: 420, color: "#0f766e", description: "衣冠南渡，北方五胡乱华，政权林立。" },
    Era { id: "nan_bei", name: "南北朝", start_year: 420, end_year: 589, color: "#7e22ce", description: "南北对峙，民族大融合，文化多元。" },
    Era { id: "sui", name: "隋朝", start_year: 581, end_year: 618, color: "#4338ca", description: "开创科举，开凿大运河。" },
    Era { id: "tang", name: "唐朝", start_year: 618, end_year: 907, color: "#eab308", description: "贞观之治，开元盛世，万国来朝。" },
    Era { id: "wudai", name: "五代十国", start_year: 907, end_year: 960, color: "#475569", description: "藩镇割据延续。" },
    Era { id: "bei_song", name: "北宋", start_year: 960, end_year: 1127, color: "#0ea5e9", description: "经济繁荣，重文轻武。" },
    Era { id: "nan_song", name: "南宋", start_year: 1127, end_year: 1279, color: "#06b6d4", description: "偏安一隅，经济重心南移。" },
    Era { id: "yuan", name: "元朝", start_year: 1271, end_year: 1368, color: "#1e3a8a", description: "疆域辽阔，行省制度。" },
    Era { id: "ming", name: "明朝", start_year: 1368, end_year: 1644, color: "#dc2626", description: "郑和下西洋，修筑长城。" },
    Era { id: "qing", name: "清朝", start_year: 1644, end_year: 1912, color: "#5b21b6", description: "康乾盛世，近代衰落。" },
];

// ── Lookup ───────────────────────────────────────────────────────────

/// The era whose inclusive bounds contain `year`, or `None` for an
/// interregnum. On a transition year authored into two eras, the later
/// era wins (so -221 is 秦, not 战国), consistent with the resolver's
/// segment tie-break.
pub fn era_at<'a>(eras: &'a [Era], year: i32) -> Option<&'a Era> {
    eras.iter().rev().find(|e| e.contains(year))
}

// ── Validation ───────────────────────────────────────────────────────

/// Load-time sanity pass: inclusive bounds must not be inverted and the
/// table must stay sorted by start year. Overlaps and gaps are legal
/// authored data and are reported by `coverage_report` instead.
pub fn validate(eras: &[Era]) -> Result<(), TableError> {
    for e in eras {
        if e.start_year > e.end_year {
            return Err(TableError::InvertedEraBounds {
                id: e.id,
                start: e.start_year,
                end: e.end_year,
            });
        }
    }
    for pair in eras.windows(2) {
        if pair[1].start_year < pair[0].start_year {
            return Err(TableError::UnsortedEras { id: pair[1].id });
        }
    }
    Ok(())
}

// ── Coverage diagnostics ─────────────────────────────────────────────

/// One finding from walking consecutive eras. Both variants describe
/// the authored table as it is; neither is repaired at runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Coverage {
    /// Years covered by no era (interregnum): `from..=to`.
    Gap { from: i32, to: i32 },
    /// Years covered by two consecutive eras: `from..=to`.
    Overlap {
        earlier: &'static str,
        later: &'static str,
        from: i32,
        to: i32,
    },
}

impl std::fmt::Display for Coverage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Coverage::Gap { from, to } => {
                if from == to {
                    write!(f, "gap: {from} belongs to no era")
                } else {
                    write!(f, "gap: {from}..{to} belong to no era")
                }
            }
            Coverage::Overlap {
                earlier,
                later,
                from,
                to,
            } => {
                if from == to {
                    write!(f, "overlap: {from} belongs to both {earlier} and {later}")
                } else {
                    write!(f, "overlap: {from}..{to} belong to both {earlier} and {later}")
                }
            }
        }
    }
}

/// Walk consecutive eras and report every gap and overlap. Assumes the
/// table already passed `validate`.
pub fn coverage_report(eras: &[Era]) -> Vec<Coverage> {
    let mut findings = Vec::new();
    for pair in eras.windows(2) {
        let (cur, next) = (&pair[0], &pair[1]);
        if next.start_year > cur.end_year + 1 {
            findings.push(Coverage::Gap {
                from: cur.end_year + 1,
                to: next.start_year - 1,
            });
        } else if next.start_year <= cur.end_year {
            findings.push(Coverage::Overlap {
                earlier: cur.id,
                later: next.id,
                from: next.start_year,
                to: cur.end_year.min(next.end_year),
            });
        }
    }
    findings
}

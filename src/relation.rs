//! The inter-polity relationship table and the interval query.

use crate::types::{RelationKind, Relationship, TableError};

// ── The relationship table ───────────────────────────────────────────

// Source/target ids refer to snapshot polity ids; both must be present
// in the snapshot for the year before a link can be drawn, which is the
// renderer's concern, not this table's.
pub static RELATIONSHIPS: &[Relationship] = &[
    // ── Three Kingdoms ──
    Relationship { source_id: "shu", target_id: "wu", kind: RelationKind::Alliance, start_year: 208, end_year: 222, description: "孙刘联盟抗曹" },
    Relationship { source_id: "wei", target_id: "shu", kind: RelationKind::War, start_year: 219, end_year: 263, description: "魏蜀长期对峙与北伐" },
    Relationship { source_id: "wei", target_id: "wu", kind: RelationKind::War, start_year: 208, end_year: 280, description: "魏吴多次交战" },
    // ── Han & Xiongnu ──
    Relationship { source_id: "han", target_id: "xiongnu", kind: RelationKind::War, start_year: -202, end_year: -198, description: "汉初对匈战争与白登之围" },
    Relationship { source_id: "han", target_id: "xiongnu", kind: RelationKind::Peace, start_year: -197, end_year: -133, description: "汉匈和亲" },
    Relationship { source_id: "han", target_id: "xiongnu", kind: RelationKind::War, start_year: -133, end_year: 30, description: "汉武帝反击匈奴" },
    // ── Jin & Sixteen Kingdoms ──
    Relationship { source_id: "dong_jin", target_id: "qian_qin", kind: RelationKind::War, start_year: 351, end_year: 383, description: "前秦南征与淝水之战" },
    Relationship { source_id: "dong_jin", target_id: "hou_zhao", kind: RelationKind::War, start_year: 319, end_year: 351, description: "祖逖北伐" },
    // ── Northern & Southern Dynasties ──
    Relationship { source_id: "liu_song", target_id: "bei_wei", kind: RelationKind::War, start_year: 420, end_year: 479, description: "宋魏战争" },
    Relationship { source_id: "nan_liang", target_id: "bei_wei", kind: RelationKind::Peace, start_year: 502, end_year: 520, description: "梁魏通使" },
    Relationship { source_id: "nan_chen", target_id: "bei_zhou", kind: RelationKind::War, start_year: 557, end_year: 581, description: "陈周对峙" },
    Relationship { source_id: "bei_wei", target_id: "rouran", kind: RelationKind::War, start_year: 386, end_year: 550, description: "北魏抗击柔然" },
    // ── Sui / Tang ──
    Relationship { source_id: "tang", target_id: "tujue", kind: RelationKind::War, start_year: 618, end_year: 657, description: "唐灭东、西突厥" },
    Relationship { source_id: "tang", target_id: "tubo", kind: RelationKind::Peace, start_year: 641, end_year: 670, description: "文成公主入藏" },
    Relationship { source_id: "tang", target_id: "tubo", kind: RelationKind::War, start_year: 670, end_year: 821, description: "唐蕃长期拉锯" },
    // ── Song / Liao / Jin ──
    Relationship { source_id: "song_north", target_id: "liao", kind: RelationKind::War, start_year: 960, end_year: 1004, description: "宋辽战争" },
    Relationship { source_id: "song_north", target_id: "liao", kind: RelationKind::Peace, start_year: 1005, end_year: 1125, description: "澶渊之盟，约为兄弟之国" },
    Relationship { source_id: "song_north", target_id: "xia", kind: RelationKind::War, start_year: 1038, end_year: 1127, description: "宋夏战争不断" },
    Relationship { source_id: "song_north", target_id: "jin", kind: RelationKind::Alliance, start_year: 1115, end_year: 1125, description: "海上之盟，联金灭辽" },
    Relationship { source_id: "song_north", target_id: "jin", kind: RelationKind::War, start_year: 1125, end_year: 1127, description: "金灭北宋" },
    Relationship { source_id: "song_south", target_id: "jin", kind: RelationKind::War, start_year: 1127, end_year: 1141, description: "宋金战争" },
    Relationship { source_id: "song_south", target_id: "jin", kind: RelationKind::Vassal, start_year: 1141, end_year: 1161, description: "绍兴和议，南宋向金称臣" },
    Relationship { source_id: "song_south", target_id: "mongol", kind: RelationKind::War, start_year: 1234, end_year: 1279, description: "蒙宋战争" },
    // ── Ming ──
    Relationship { source_id: "ming", target_id: "northern_yuan", kind: RelationKind::War, start_year: 1368, end_year: 1450, description: "明朝北伐与土木堡之变" },
    Relationship { source_id: "ming", target_id: "qing", kind: RelationKind::War, start_year: 1616, end_year: 1644, description: "明清战争" },
    // ── Qing ──
    Relationship { source_id: "qing", target_id: "dzungar", kind: RelationKind::War, start_year: 1680, end_year: 1757, description: "清准战争" },
];

// ── Query ────────────────────────────────────────────────────────────

/// Relationships whose inclusive interval contains `year`, in stable
/// source order.
pub fn relationships_active<'a>(
    relations: &'a [Relationship],
    year: i32,
) -> Vec<&'a Relationship> {
    relations.iter().filter(|r| r.active_in(year)).collect()
}

/// Bounds sanity for the relationship table.
pub fn validate(relations: &[Relationship]) -> Result<(), TableError> {
    for r in relations {
        if r.start_year > r.end_year {
            return Err(TableError::InvertedRelationBounds {
                source_id: r.source_id,
                target_id: r.target_id,
                start: r.start_year,
                end: r.end_year,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── relationships_active ─────────────────────────────────────────

    #[test]
    fn test_interval_inclusive_on_both_ends() {
        let has_sun_liu = |year: i32| {
            relationships_active(RELATIONSHIPS, year)
                .iter()
                .any(|r| r.source_id == "shu" && r.target_id == "wu")
        };
        assert!(has_sun_liu(208));
        assert!(has_sun_liu(222));
        assert!(!has_sun_liu(207));
        assert!(!has_sun_liu(223));
    }

    #[test]
    fn test_stable_source_order() {
        // At 220 all three Three-Kingdoms links are live, in table order.
        let active = relationships_active(RELATIONSHIPS, 220);
        let pairs: Vec<(&str, &str)> = active
            .iter()
            .map(|r| (r.source_id, r.target_id))
            .collect();
        assert_eq!(pairs, vec![("shu", "wu"), ("wei", "shu"), ("wei", "wu")]);
    }

    #[test]
    fn test_same_pair_changes_kind_over_time() {
        // 汉匈: war, then 和亲, then war again, over disjoint intervals.
        let kind_at = |year: i32| {
            relationships_active(RELATIONSHIPS, year)
                .iter()
                .find(|r| r.target_id == "xiongnu")
                .map(|r| r.kind)
        };
        assert_eq!(kind_at(-200), Some(RelationKind::War));
        assert_eq!(kind_at(-150), Some(RelationKind::Peace));
        assert_eq!(kind_at(-100), Some(RelationKind::War));
    }

    #[test]
    fn test_quiet_years_have_no_links() {
        assert!(relationships_active(RELATIONSHIPS, -500).is_empty());
        assert!(relationships_active(RELATIONSHIPS, 1800).is_empty());
    }

    #[test]
    fn test_shipped_table_validates() {
        assert_eq!(validate(RELATIONSHIPS), Ok(()));
    }

    #[test]
    fn test_validate_rejects_inverted_interval() {
        let bad = [Relationship {
            source_id: "a",
            target_id: "b",
            kind: RelationKind::War,
            start_year: 10,
            end_year: 5,
            description: "",
        }];
        assert!(matches!(
            validate(&bad),
            Err(TableError::InvertedRelationBounds { .. })
        ));
    }
}

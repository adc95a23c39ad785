//! The historical event table and the distance-window query.

use crate::types::{HistoricalEvent, MapPoint};

// ── The event table ──────────────────────────────────────────────────

// Unordered point events; several may share a year. `location` is in
// map space (see `shapes`); events without one never appear as map pins.
pub static EVENTS: &[HistoricalEvent] = &[
    HistoricalEvent {
        year: -403,
        title: "三家分晋",
        short_description: "战国时代的开端。",
        long_description: "周威烈王册封韩、赵、魏三家为诸侯，标志着晋国正式分裂，春秋时代结束，战国时代开始。",
        impact: "传统的宗法分封制彻底瓦解，七雄争霸的格局正式形成。",
        location: Some(MapPoint { x: 460, y: 220 }),
    },
    HistoricalEvent {
        year: -221,
        title: "秦统一六国",
        short_description: "秦王嬴政统一中国，建立秦朝。",
        long_description: "秦王嬴政先后灭韩、赵、魏、楚、燕、齐六国，结束了春秋战国以来长达数百年的诸侯割据局面，建立了中国历史上第一个大一统的中央集权国家。",
        impact: "奠定了中国两千多年封建政治制度的基本格局，统一文字、度量衡，促进了民族融合。",
        location: Some(MapPoint { x: 480, y: 260 }),
    },
    HistoricalEvent {
        year: -200,
        title: "白登之围",
        short_description: "汉高祖被匈奴围困。",
        long_description: "汉高祖刘邦率军亲征匈奴，被冒顿单于四十万骑兵围困于白登山七天七夜。",
        impact: "汉朝认识到军事力量不足，开启了长达数十年的“和亲”政策。",
        location: Some(MapPoint { x: 430, y: 180 }),
    },
    HistoricalEvent {
        year: -138,
        title: "张骞出使西域",
        short_description: "丝绸之路的开拓。",
        long_description: "汉武帝派遣张骞出使西域，本欲联合大月氏夹击匈奴，虽未达成军事目的，却打通了汉朝通往西域的道路。",
        impact: "开辟了著名的“丝绸之路”，促进了东西方经济文化的交流。",
        location: Some(MapPoint { x: 200, y: 250 }),
    },
    HistoricalEvent {
        year: 208,
        title: "赤壁之战",
        short_description: "奠定三国鼎立基础。",
        long_description: "孙权、刘备联军在长江赤壁（今湖北赤壁西北）一带大破曹操大军。曹操北回，孙、刘各自夺去荆州的一部分。",
        impact: "中国历史上以少胜多的著名战役，直接奠定了魏、蜀、吴三国鼎立的局面。",
        location: Some(MapPoint { x: 550, y: 340 }),
    },
    HistoricalEvent {
        year: 383,
        title: "淝水之战",
        short_description: "东晋以少胜多击败前秦。",
        long_description: "前秦苻坚率领八十万大军南下伐晋，在淝水（今安徽寿县）被东晋谢安、谢玄率领的八万北府兵击败。",
        impact: "前秦瞬间土崩瓦解，北方再次陷入分裂，东晋政权得以延续，南北对峙局面长期存在。",
        location: Some(MapPoint { x: 520, y: 310 }),
    },
    HistoricalEvent {
        year: 627,
        title: "贞观之治",
        short_description: "唐太宗李世民在位期间的清明政治。",
        long_description: "唐太宗李世民在位期间，虚心纳谏，厉行节约，劝课农桑，使得社会安定，经济恢复并发展，国力强盛。",
        impact: "为唐朝后来的开元盛世奠定了坚实的基础，被后世视为治世典范。",
        location: Some(MapPoint { x: 480, y: 260 }),
    },
    HistoricalEvent {
        year: 755,
        title: "安史之乱",
        short_description: "唐朝由盛转衰的转折点。",
        long_description: "身兼三镇节度使的安禄山和部将史思明发动叛乱，攻陷长安、洛阳。",
        impact: "导致唐朝人口锐减，国力大损，藩镇割据局面形成，吐蕃趁机攻占河西陇右。",
        location: Some(MapPoint { x: 500, y: 240 }),
    },
    HistoricalEvent {
        year: 1004,
        title: "澶渊之盟",
        short_description: "宋辽缔结和约。",
        long_description: "北宋与辽在澶州（今河南濮阳）定下的盟约。宋每年给辽银10万两、绢20万匹，双方约为兄弟之国。",
        impact: "结束了宋辽之间长达25年的战争，此后百余年间双方保持和平，贸易繁荣。",
        location: Some(MapPoint { x: 550, y: 230 }),
    },
    HistoricalEvent {
        year: 1127,
        title: "靖康之变",
        short_description: "金军攻破开封，北宋灭亡。",
        long_description: "金军攻破北宋首都东京（今河南开封），俘虏了宋徽宗、宋钦宗父子及大量皇族、后宫、贵卿、朝臣等三千余人，押解北上。",
        impact: "导致北宋灭亡，宋室南迁建立南宋，中国经济重心进一步南移。",
        location: Some(MapPoint { x: 560, y: 260 }),
    },
    HistoricalEvent {
        year: 1405,
        title: "郑和下西洋",
        short_description: "明代大规模远洋航行。",
        long_description: "明成祖朱棣派遣郑和率领庞大船队七下西洋，访问了亚非三十多个国家和地区，最远到达红海沿岸和非洲东海岸。",
        impact: "展示了明朝强大的国力和航海技术，加强了中国与亚非各国的友好往来。",
        location: Some(MapPoint { x: 650, y: 400 }),
    },
    HistoricalEvent {
        year: 1449,
        title: "土木堡之变",
        short_description: "明英宗亲征瓦剌被俘。",
        long_description: "明英宗朱祁镇在宦官王振怂恿下亲征瓦剌，在土木堡（今河北怀来）惨败被俘，全军覆没。",
        impact: "明朝由盛转衰，被迫采取战略收缩，重修长城。",
        location: Some(MapPoint { x: 560, y: 190 }),
    },
];

// ── Query ────────────────────────────────────────────────────────────

/// Events within `window` years of `year`, sorted by ascending distance;
/// ties keep source order. The window is caller policy — text listings
/// use a wide one, map pins a narrow one.
pub fn events_near<'a>(
    events: &'a [HistoricalEvent],
    year: i32,
    window: i32,
) -> Vec<&'a HistoricalEvent> {
    let mut hits: Vec<&HistoricalEvent> = events
        .iter()
        .filter(|e| e.distance_from(year) <= window)
        .collect();
    // Stable sort, so equidistant events keep their table order.
    hits.sort_by_key(|e| e.distance_from(year));
    hits
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ev(year: i32, title: &'static str) -> HistoricalEvent {
        HistoricalEvent {
            year,
            title,
            short_description: "",
            long_description: "",
            impact: "",
            location: None,
        }
    }

    // ── events_near ──────────────────────────────────────────────────

    #[test]
    fn test_unification_event_is_nearest_at_minus_221() {
        let hits = events_near(EVENTS, -221, 20);
        assert_eq!(hits[0].title, "秦统一六国");
        assert_eq!(hits[0].distance_from(-221), 0);
        // 白登之围 (-200) is 21 years away and must stay outside.
        assert!(hits.iter().all(|e| e.year != -200));
    }

    #[test]
    fn test_window_bound_is_inclusive() {
        assert!(events_near(EVENTS, -180, 20).iter().any(|e| e.year == -200));
        assert!(events_near(EVENTS, -179, 20).iter().all(|e| e.year != -200));
    }

    #[test]
    fn test_sorted_by_ascending_distance() {
        let hits = events_near(EVENTS, 600, 200);
        let distances: Vec<i32> = hits.iter().map(|e| e.distance_from(600)).collect();
        assert!(distances.windows(2).all(|w| w[0] <= w[1]), "{distances:?}");
        assert_eq!(hits[0].year, 627);
    }

    #[test]
    fn test_equidistant_events_keep_source_order() {
        let table = [ev(95, "before"), ev(105, "after"), ev(100, "exact")];
        let hits = events_near(&table, 100, 10);
        assert_eq!(hits[0].title, "exact");
        assert_eq!(hits[1].title, "before");
        assert_eq!(hits[2].title, "after");
    }

    #[test]
    fn test_empty_and_degenerate_windows() {
        assert!(events_near(EVENTS, 5000, 20).is_empty());
        assert!(events_near(EVENTS, 208, -1).is_empty());
        let exact = events_near(EVENTS, 208, 0);
        assert_eq!(exact.len(), 1);
        assert_eq!(exact[0].title, "赤壁之战");
    }
}

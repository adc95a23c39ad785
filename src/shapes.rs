//! Static registry of boundary geometry.
//!
//! Every polity shape and base geography layer is a hand-authored SVG
//! path in an 800×600 viewbox (roughly: (0,0) is NW Asia, (800,600) is
//! SE Asia). The engine never interprets these strings; it only passes
//! the handle through to whatever renders the map.

use serde::Serialize;

// ── Polity shape handles ─────────────────────────────────────────────

/// Opaque handle to one authored boundary shape.
///
/// Several handles intentionally share path data: successor regimes that
/// inherited a predecessor's extent (北齐 over 东魏 land, 北周 over 西魏)
/// are authored as separate shapes with identical geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ShapeId {
    // ── Core & unified ──
    Core,
    UnifiedProper,
    TangMax,
    Massive,
    // ── Steppe & frontier ──
    SteppeFull,
    SteppeEast,
    Tibet,
    TuboExpanded,
    WesternRegions,
    Manchuria,
    Quanrong,
    // ── Pre-imperial states ──
    QinState,
    ChuState,
    QiState,
    YanState,
    JinState,
    CentralStates,
    ZhaoState,
    WeiState,
    HanState,
    // ── Three Kingdoms ──
    WeiKingdom,
    ShuKingdom,
    WuKingdom,
    // ── Sixteen Kingdoms / Northern & Southern Dynasties ──
    ChengHan,
    EasternJin,
    LaterZhao,
    FormerYan,
    FormerLiang,
    FormerQinMax,
    NorthernWeiEarly,
    LaterQin,
    NorthernWei,
    LiuSong,
    EasternWei,
    WesternWei,
    NorthernQi,
    NorthernZhou,
    Chen,
    // ── Song era ──
    CentralPlains,
    SongNorth,
    SongSouth,
    NorthSteppe,
    WesternXia,
    JurchenJin,
    Mongol,
}

impl ShapeId {
    /// Every registered shape, for registry-wide iteration.
    pub const ALL: &'static [ShapeId] = &[
        Self::Core,
        Self::UnifiedProper,
        Self::TangMax,
        Self::Massive,
        Self::SteppeFull,
        Self::SteppeEast,
        Self::Tibet,
        Self::TuboExpanded,
        Self::WesternRegions,
        Self::Manchuria,
        Self::Quanrong,
        Self::QinState,
        Self::ChuState,
        Self::QiState,
        Self::YanState,
        Self::JinState,
        Self::CentralStates,
        Self::ZhaoState,
        Self::WeiState,
        Self::HanState,
        Self::WeiKingdom,
        Self::ShuKingdom,
        Self::WuKingdom,
        Self::ChengHan,
        Self::EasternJin,
        Self::LaterZhao,
        Self::FormerYan,
        Self::FormerLiang,
        Self::FormerQinMax,
        Self::NorthernWeiEarly,
        Self::LaterQin,
        Self::NorthernWei,
        Self::LiuSong,
        Self::EasternWei,
        Self::WesternWei,
        Self::NorthernQi,
        Self::NorthernZhou,
        Self::Chen,
        Self::CentralPlains,
        Self::SongNorth,
        Self::SongSouth,
        Self::NorthSteppe,
        Self::WesternXia,
        Self::JurchenJin,
        Self::Mongol,
    ];

    /// The authored path data behind this handle.
    pub fn path(self) -> &'static str {
        match self {
            Self::Core => "M 400,200 L 500,180 L 580,200 L 600,250 L 550,300 L 450,300 L 380,250 Z",
            Self::UnifiedProper => "M 300,200 L 450,150 L 600,160 L 680,180 L 650,230 L 660,260 L 640,350 L 600,440 L 540,490 L 520,520 L 480,510 L 400,400 L 300,350 L 250,280 Z",
            Self::TangMax => "M 50,150 L 300,180 L 450,150 L 600,160 L 680,180 L 650,230 L 660,260 L 640,350 L 600,440 L 540,490 L 520,520 L 480,510 L 400,400 L 300,350 L 250,350 L 100,250 Z",
            Self::Massive => "M 20,50 L 750,20 L 750,200 L 650,230 L 660,260 L 680,310 L 670,340 L 640,360 L 620,400 L 630,420 L 600,440 L 580,480 L 540,490 L 520,520 L 480,510 L 450,540 L 300,500 L 100,400 L 20,300 Z",
            Self::SteppeFull => "M 0,0 L 800,0 L 800,150 L 600,150 L 450,140 L 300,170 L 0,140 Z",
            Self::SteppeEast => "M 450,0 L 800,0 L 800,180 L 600,150 L 450,140 Z",
            Self::Tibet => "M 0,250 L 250,280 L 250,450 L 0,450 Z",
            Self::TuboExpanded => "M 0,250 L 350,280 L 350,450 L 0,450 Z",
            Self::WesternRegions => "M 0,140 L 200,160 L 250,250 L 150,280 L 0,250 Z",
            Self::Manchuria => "M 600,0 L 800,0 L 800,200 L 650,180 L 600,150 Z",
            Self::Quanrong => "M 100,200 L 400,200 L 380,250 L 100,250 Z",
            Self::QinState => "M 350,220 L 420,200 L 430,280 L 350,280 Z",
            Self::ChuState => "M 400,300 L 550,300 L 600,350 L 500,400 Z",
            Self::QiState => "M 550,180 L 600,160 L 630,220 L 560,240 Z",
            Self::YanState => "M 520,130 L 600,100 L 630,160 L 550,170 Z",
            Self::JinState => "M 420,180 L 480,160 L 500,220 L 450,240 L 420,220 Z",
            Self::CentralStates => "M 480,240 L 520,240 L 520,280 L 480,280 Z",
            Self::ZhaoState => "M 430,160 L 500,150 L 520,200 L 450,210 Z",
            Self::WeiState => "M 450,210 L 520,200 L 530,240 L 470,250 Z",
            Self::HanState => "M 450,250 L 500,250 L 510,280 L 460,280 Z",
            Self::WeiKingdom => "M 300,180 L 680,180 L 650,230 L 600,300 L 300,280 Z",
            Self::ShuKingdom => "M 200,280 L 350,280 L 350,400 L 250,400 Z",
            Self::WuKingdom => "M 350,300 L 640,350 L 600,440 L 540,490 L 400,400 Z",
            Self::ChengHan => "M 200,300 L 280,300 L 300,350 L 250,400 L 200,380 Z",
            Self::EasternJin => "M 300,320 L 640,350 L 600,440 L 540,490 L 400,450 Z",
            Self::LaterZhao => "M 300,200 L 550,180 L 580,250 L 350,280 L 280,250 Z",
            Self::FormerYan => "M 550,150 L 650,150 L 680,220 L 580,250 Z",
            Self::FormerLiang => "M 100,180 L 300,200 L 280,280 L 120,250 Z",
            Self::FormerQinMax => "M 100,150 L 600,160 L 650,230 L 550,320 L 200,320 Z",
            Self::NorthernWeiEarly => "M 350,150 L 500,150 L 500,250 L 350,250 Z",
            Self::LaterQin => "M 250,220 L 350,220 L 350,300 L 250,300 Z",
            Self::NorthernWei => "M 150,150 L 600,160 L 650,230 L 550,320 L 250,320 Z",
            Self::LiuSong => "M 250,320 L 640,350 L 600,480 L 400,450 Z",
            Self::EasternWei => "M 450,200 L 600,180 L 640,330 L 450,320 Z",
            Self::WesternWei => "M 150,200 L 450,200 L 450,320 L 200,350 Z",
            Self::NorthernQi => "M 450,200 L 600,180 L 640,330 L 450,320 Z",
            Self::NorthernZhou => "M 150,200 L 450,200 L 450,320 L 200,350 Z",
            Self::Chen => "M 350,350 L 630,360 L 600,460 L 400,460 Z",
            Self::CentralPlains => "M 400,220 L 550,220 L 550,300 L 400,300 Z",
            Self::SongNorth => "M 350,250 L 550,250 L 600,300 L 640,350 L 600,440 L 540,490 L 520,520 L 480,510 L 400,400 L 350,350 Z",
            Self::SongSouth => "M 350,320 L 580,320 L 640,350 L 600,440 L 540,490 L 520,520 L 480,510 L 400,400 L 350,350 Z",
            Self::NorthSteppe => "M 100,50 L 700,50 L 720,200 L 650,230 L 550,220 L 350,220 L 200,150 Z",
            Self::WesternXia => "M 200,200 L 320,200 L 320,300 L 200,300 Z",
            Self::JurchenJin => "M 100,50 L 700,50 L 720,200 L 600,320 L 300,320 L 200,150 Z",
            Self::Mongol => "M 50,20 L 700,20 L 700,100 L 50,100 Z",
        }
    }
}

// ── Base geography layers ────────────────────────────────────────────

/// Static geography drawn under the political layer: landmass, islands,
/// and the two great rivers. Purely decorative; no polity ever owns one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum BaseLayer {
    Land,
    Taiwan,
    Hainan,
    Japan,
    YellowRiver,
    Yangtze,
}

impl BaseLayer {
    pub const ALL: &'static [BaseLayer] = &[
        Self::Land,
        Self::Taiwan,
        Self::Hainan,
        Self::Japan,
        Self::YellowRiver,
        Self::Yangtze,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Self::Land => "M 0,0 L 800,0 L 800,50 L 700,50 L 650,20 L 600,60 L 620,100 L 610,130 L 650,130 L 670,160 L 660,180 L 700,180 L 720,200 L 710,230 L 650,230 L 660,260 L 630,280 L 680,310 L 670,340 L 640,360 L 620,400 L 630,420 L 600,440 L 580,480 L 540,490 L 520,520 L 480,510 L 450,540 L 450,600 L 0,600 Z",
            Self::Taiwan => "M 690,430 L 710,440 L 705,470 L 685,460 Z",
            Self::Hainan => "M 530,530 L 560,540 L 550,570 L 520,560 Z",
            Self::Japan => "M 750,250 L 780,260 L 770,300 L 740,290 Z M 760,320 L 790,330 L 780,350 L 750,340 Z",
            Self::YellowRiver => "M 250,250 C 300,200 350,150 400,200 C 450,250 480,260 550,220 L 600,210",
            Self::Yangtze => "M 200,300 C 250,350 300,320 350,340 C 400,360 450,380 500,350 C 550,320 600,330 650,310",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_shape_has_path_data() {
        for s in ShapeId::ALL {
            let p = s.path();
            assert!(p.starts_with("M "), "{s:?} does not look like path data");
            assert!(p.ends_with('Z') || p.contains('L') || p.contains('C'));
        }
        for l in BaseLayer::ALL {
            assert!(l.path().starts_with("M "));
        }
    }

    #[test]
    fn test_successor_shapes_share_geometry() {
        // 北齐 inherited 东魏 land, 北周 inherited 西魏 land.
        assert_eq!(ShapeId::NorthernQi.path(), ShapeId::EasternWei.path());
        assert_eq!(ShapeId::NorthernZhou.path(), ShapeId::WesternWei.path());
    }
}

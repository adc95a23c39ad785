//! Reference cards for polities, keyed by snapshot polity id.
//!
//! Not every snapshot id has a card (五代 placeholder blocks and some
//! short-lived regimes go without); a missing card is a soft miss, not
//! an error.

use crate::types::FactionDetail;

pub static FACTION_DETAILS: &[FactionDetail] = &[
    // ── Pre-Qin ──
    FactionDetail { id: "zhou", name: "周朝", duration_label: "前1046 - 前256", rulers: "周武王, 周公旦, 周幽王", culture: "礼乐制度, 青铜器鼎盛, 诗经", events: "武王伐纣, 国人暴动, 平王东迁", impact: "确立了宗法制和分封制，奠定了中国传统文化的基础。" },
    FactionDetail { id: "quan_rong", name: "犬戎", duration_label: "西周时期", rulers: "无详细记载", culture: "游牧文化", events: "攻破镐京", impact: "导致西周灭亡，迫使周平王东迁洛邑。" },
    FactionDetail { id: "qin", name: "秦国/秦朝", duration_label: "前770 - 前206", rulers: "秦穆公, 秦孝公, 秦始皇", culture: "法家思想, 小篆, 兵马俑", events: "商鞅变法, 统一六国, 焚书坑儒", impact: "建立了第一个中央集权帝国，推行郡县制，书同文车同轨。" },
    FactionDetail { id: "chu", name: "楚国", duration_label: "前1042 - 前223", rulers: "楚庄王, 楚怀王", culture: "楚辞, 浪漫主义, 青铜铸造", events: "问鼎中原, 屈原投江", impact: "创造了灿烂的楚文化，对后世南方文化影响深远。" },
    FactionDetail { id: "qi", name: "齐国", duration_label: "前1046 - 前221", rulers: "齐桓公, 齐威王", culture: "稷下学宫, 孙子兵法", events: "尊王攘夷, 桂陵之战", impact: "东方强国，经济富庶，学术中心。" },
    FactionDetail { id: "yan", name: "燕国", duration_label: "前1044 - 前222", rulers: "燕昭王, 太子丹", culture: "慷慨悲歌", events: "乐毅伐齐, 荆轲刺秦王", impact: "开发了北方边疆，北京城的雏形。" },
    FactionDetail { id: "state_jin", name: "晋国", duration_label: "前1033 - 前376", rulers: "晋文公, 晋悼公", culture: "尚武精神, 法家萌芽", events: "城濮之战, 践土之盟", impact: "春秋霸主，遏制楚国北进，后分裂为韩赵魏。" },
    FactionDetail { id: "state_zhao", name: "赵国", duration_label: "前403 - 前222", rulers: "赵武灵王", culture: "胡服骑射", events: "长平之战", impact: "军事改革先驱，秦国统一路上最顽强的对手。" },
    FactionDetail { id: "state_wei", name: "魏国", duration_label: "前403 - 前225", rulers: "魏文侯", culture: "李悝变法", events: "战国初期霸主", impact: "最早进行变法，开启战国变法潮流。" },
    FactionDetail { id: "state_han", name: "韩国", duration_label: "前403 - 前230", rulers: "韩昭侯", culture: "申不害术治", events: "处于四战之地", impact: "法家集大成者韩非子的故国。" },
    // ── Frontier peoples ──
    FactionDetail { id: "xiongnu", name: "匈奴", duration_label: "前3世纪 - 4世纪", rulers: "冒顿单于, 呼韩邪单于", culture: "游牧骑射, 萨满教", events: "白登之围, 漠北之战", impact: "秦汉时期北方最大的威胁，促使汉朝开辟丝绸之路和修筑长城。" },
    FactionDetail { id: "xianbei", name: "鲜卑", duration_label: "1世纪 - 6世纪", rulers: "檀石槐, 拓跋珪", culture: "游牧, 后期汉化", events: "入主中原", impact: "五胡乱华主要力量之一，建立了北魏等政权，推动了民族融合。" },
    FactionDetail { id: "qiang", name: "羌", duration_label: "古老民族", rulers: "无统一首领", culture: "游牧农耕兼营", events: "东汉羌乱", impact: "长期活跃于西北，消耗了东汉大量国力。" },
    FactionDetail { id: "rouran", name: "柔然", duration_label: "4世纪 - 6世纪", rulers: "社仑", culture: "游牧", events: "与北魏长期交战", impact: "称霸草原，后被突厥所灭。" },
    FactionDetail { id: "tujue", name: "突厥", duration_label: "6世纪 - 8世纪", rulers: "颉利可汗", culture: "突厥文字, 狼图腾", events: "渭水之盟", impact: "隋唐时期北方霸主，控制丝绸之路，后分裂为东西突厥。" },
    FactionDetail { id: "tubo", name: "吐蕃", duration_label: "7世纪 - 9世纪", rulers: "松赞干布", culture: "藏传佛教", events: "安史之乱后攻占长安", impact: "统一青藏高原，建立强大帝国，与唐朝长期争霸。" },
    FactionDetail { id: "northern_yuan", name: "北元/鞑靼/瓦剌", duration_label: "1368 - 1635", rulers: "也先, 达延汗", culture: "蒙古游牧", events: "土木堡之变", impact: "明朝长期的北方边患，迫使明朝修筑长城九边。" },
    FactionDetail { id: "dzungar", name: "准噶尔", duration_label: "17世纪 - 18世纪", rulers: "噶尔丹", culture: "藏传佛教, 游牧", events: "乌兰布通之战", impact: "清朝前中期最大的劲敌，最终被乾隆帝平定。" },
    // ── Han & Three Kingdoms ──
    FactionDetail { id: "han", name: "汉朝", duration_label: "前202 - 220", rulers: "汉高祖, 汉武帝, 光武帝", culture: "独尊儒术, 史记, 造纸术", events: "文景之治, 汉武盛世, 丝绸之路", impact: "确立了儒家思想的正统地位，汉族之名由此而来。" },
    FactionDetail { id: "wei", name: "曹魏", duration_label: "220 - 266", rulers: "曹操(奠基), 曹丕, 曹叡", culture: "建安风骨, 魏碑", events: "官渡之战, 九品中正制", impact: "三国中实力最强，为西晋统一奠定基础。" },
    FactionDetail { id: "shu", name: "蜀汉", duration_label: "221 - 263", rulers: "刘备, 刘禅", culture: "忠义文化", events: "三顾茅庐, 白帝城托孤, 六出祁山", impact: "诸葛亮的忠君思想影响深远。" },
    FactionDetail { id: "wu", name: "东吴", duration_label: "229 - 280", rulers: "孙权, 孙皓", culture: "江南开发", events: "赤壁之战, 夷陵之战", impact: "促进了江南地区的经济开发和航海事业。" },
    // ── Jin & Sixteen Kingdoms ──
    FactionDetail { id: "jin_xi", name: "西晋", duration_label: "266 - 316", rulers: "司马炎, 司马衷", culture: "玄学盛行", events: "八王之乱, 五胡乱华", impact: "短暂统一后迅速崩溃，导致长达300年的分裂。" },
    FactionDetail { id: "dong_jin", name: "东晋", duration_label: "317 - 420", rulers: "司马睿, 谢安(权臣)", culture: "兰亭集序, 顾恺之画", events: "淝水之战, 祖逖北伐", impact: "南方经济文化大发展，为经济重心南移打下基础。" },
    FactionDetail { id: "cheng_han", name: "成汉", duration_label: "304 - 347", rulers: "李雄", culture: "道教盛行", events: "李特流民起义", impact: "十六国中最早建立的政权之一，割据巴蜀。" },
    FactionDetail { id: "hou_zhao", name: "后赵", duration_label: "319 - 351", rulers: "石勒, 石虎", culture: "崇尚佛教", events: "石勒灭前赵", impact: "羯族建立的政权，曾统一北方大部分地区。" },
    FactionDetail { id: "qian_yan", name: "前燕", duration_label: "337 - 370", rulers: "慕容皝, 慕容儁", culture: "慕容鲜卑", events: "入主中原", impact: "鲜卑族汉化程度较深，雄踞关东。" },
    FactionDetail { id: "qian_qin", name: "前秦", duration_label: "351 - 394", rulers: "苻坚, 王猛", culture: "汉化改革, 儒学", events: "统一北方, 淝水之战", impact: "十六国中最接近统一全国的政权，因淝水战败而瓦解。" },
    FactionDetail { id: "qian_liang", name: "前凉", duration_label: "301 - 376", rulers: "张轨", culture: "保存中原文化", events: "保境安民", impact: "中原大乱时，河西走廊保持了相对安定。" },
    // ── Northern & Southern Dynasties ──
    FactionDetail { id: "bei_wei", name: "北魏", duration_label: "386 - 534", rulers: "拓跋焘, 孝文帝", culture: "孝文帝汉化, 龙门石窟", events: "统一北方, 迁都洛阳", impact: "鲜卑族建立的强大政权，推行均田制，促进民族大融合。" },
    FactionDetail { id: "liu_song", name: "刘宋", duration_label: "420 - 479", rulers: "刘裕, 刘义隆", culture: "元嘉之治", events: "刘裕北伐", impact: "南朝疆域最广的朝代，“七分天下，而有其四”。" },
    FactionDetail { id: "nan_qi", name: "南齐", duration_label: "479 - 502", rulers: "萧道成", culture: "永明体诗歌", events: "政权更迭频繁", impact: "存续时间较短，士族政治延续。" },
    FactionDetail { id: "nan_liang", name: "梁朝", duration_label: "502 - 557", rulers: "萧衍(梁武帝)", culture: "佛教极盛 (\"南朝四百八十寺\")", events: "侯景之乱", impact: "前期经济繁荣，后期因侯景之乱导致江南残破。" },
    FactionDetail { id: "nan_chen", name: "陈朝", duration_label: "557 - 589", rulers: "陈霸先, 陈后主", culture: "玉树后庭花", events: "偏安江南", impact: "南朝疆域最小，最终被隋所灭。" },
    FactionDetail { id: "dong_wei", name: "东魏", duration_label: "534 - 550", rulers: "高欢(权臣)", culture: "鲜卑化回潮", events: "沙苑之战", impact: "北魏分裂后的关东政权，实权由高氏掌握。" },
    FactionDetail { id: "xi_wei", name: "西魏", duration_label: "535 - 556", rulers: "宇文泰(权臣)", culture: "府兵制创建", events: "改革官制", impact: "关中本位政策，为后来北周、隋、唐的强盛奠基。" },
    FactionDetail { id: "bei_qi", name: "北齐", duration_label: "550 - 577", rulers: "高洋", culture: "胡风重", events: "兰陵王破阵", impact: "军事实力曾很强，但政治腐败迅速灭亡。" },
    FactionDetail { id: "bei_zhou", name: "北周", duration_label: "557 - 581", rulers: "宇文邕", culture: "崇儒重道", events: "灭北齐, 毁佛", impact: "统一北方，为隋朝统一全国铺平了道路。" },
    // ── Later dynasties ──
    FactionDetail { id: "tang", name: "唐朝", duration_label: "618 - 907", rulers: "唐太宗, 武则天, 唐玄宗", culture: "唐诗, 乐舞, 书法", events: "玄武门之变, 安史之乱", impact: "中国封建社会的巅峰，国际影响力极大的盛世。" },
    FactionDetail { id: "song_north", name: "北宋", duration_label: "960 - 1127", rulers: "赵匡胤, 宋仁宗, 宋徽宗", culture: "宋词, 理学, 四大发明", events: "陈桥兵变, 熙宁变法", impact: "经济文化高度繁荣，科技发展达到高峰。" },
    FactionDetail { id: "liao", name: "辽", duration_label: "916 - 1125", rulers: "耶律阿保机, 萧太后", culture: "契丹文字, 捺钵制度", events: "澶渊之盟", impact: "促进了草原文明与中原文明的融合。" },
    FactionDetail { id: "jin", name: "金", duration_label: "1115 - 1234", rulers: "完颜阿骨打", culture: "女真文", events: "靖康之变", impact: "为后来清朝的建立奠定了民族基础。" },
    FactionDetail { id: "yuan", name: "元朝", duration_label: "1271 - 1368", rulers: "忽必烈", culture: "元曲, 青花瓷", events: "崖山海战", impact: "行省制度沿用至今，疆域空前辽阔。" },
    FactionDetail { id: "ming", name: "明朝", duration_label: "1368 - 1644", rulers: "朱元璋, 朱棣", culture: "小说, 阳明心学", events: "土木堡之变, 郑和下西洋", impact: "君主专制强化，资本主义萌芽出现。" },
    FactionDetail { id: "qing", name: "清朝", duration_label: "1644 - 1912", rulers: "康熙, 乾隆", culture: "京剧, 红楼梦", events: "三藩之乱, 鸦片战争", impact: "奠定了现代中国的版图，中国历史上最后一个封建王朝。" },
];

/// Look up the reference card for a polity id.
pub fn faction_detail<'a>(table: &'a [FactionDetail], id: &str) -> Option<&'a FactionDetail> {
    table.iter().find(|f| f.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_known_ids() {
        assert_eq!(faction_detail(FACTION_DETAILS, "qin").map(|f| f.name), Some("秦国/秦朝"));
        assert_eq!(faction_detail(FACTION_DETAILS, "jin_xi").map(|f| f.name), Some("西晋"));
        assert_eq!(faction_detail(FACTION_DETAILS, "dzungar").map(|f| f.name), Some("准噶尔"));
    }

    #[test]
    fn test_unknown_id_is_a_soft_miss() {
        assert!(faction_detail(FACTION_DETAILS, "atlantis").is_none());
        // 五代 placeholder blocks intentionally have no card.
        assert!(faction_detail(FACTION_DETAILS, "wudai").is_none());
        assert!(faction_detail(FACTION_DETAILS, "shiguo").is_none());
    }

    #[test]
    fn test_ids_unique_within_table() {
        for (i, f) in FACTION_DETAILS.iter().enumerate() {
            assert!(
                FACTION_DETAILS[i + 1..].iter().all(|g| g.id != f.id),
                "duplicate card for {}",
                f.id
            );
        }
    }
}

use crate::config::Config;
use crate::models::district::TimeMode;
use crate::models::error::AppError;
use crate::models::station::{PileStatus, Station};
use crate::models::view::{ViewLevel, ViewState};

/// Slice palette shared by the pie charts and their legends.
pub const COLORS: [&str; 9] = [
    "#0ea5e9", "#22c55e", "#eab308", "#f43f5e", "#8b5cf6", "#d946ef", "#64748b", "#ec4899",
    "#14b8a6",
];

/// Days shown in the station header as accident-free operation.
pub const SAFE_OPERATION_DAYS: u32 = 1245;

pub fn palette_color(index: usize) -> &'static str {
    COLORS[index % COLORS.len()]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatVariant {
    #[default]
    Default,
    Alert,
    Success,
}

impl StatVariant {
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Default => "stat-card",
            Self::Alert => "stat-card alert",
            Self::Success => "stat-card success",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatCardData {
    pub title: &'static str,
    pub value: String,
    pub unit: &'static str,
    /// Percentage change, positive is up
    pub trend: Option<f64>,
    pub variant: StatVariant,
}

impl StatCardData {
    fn new(title: &'static str, value: impl ToString, unit: &'static str) -> Self {
        Self {
            title,
            value: value.to_string(),
            unit,
            trend: None,
            variant: StatVariant::Default,
        }
    }

    fn trend(mut self, trend: f64) -> Self {
        self.trend = Some(trend);
        self
    }

    fn variant(mut self, variant: StatVariant) -> Self {
        self.variant = variant;
        self
    }
}

/// Share of the city totals shown for a view; districts get a fixed ratio.
pub fn region_scale(view: &ViewState) -> f64 {
    if view.is_city() {
        1.0
    } else {
        Config::DISTRICT_SCALE
    }
}

fn scaled(total: u32, scale: f64) -> u32 {
    (f64::from(total) * scale).floor() as u32
}

/// The eight key-asset cards of the city and district summary.
///
/// Counts are scaled and floored; the two percentages are not scaled.
pub fn region_stats(scale: f64) -> Vec<StatCardData> {
    vec![
        StatCardData::new("场站总数", scaled(450, scale), "座"),
        StatCardData::new("总桩数", scaled(12_450, scale), "个"),
        StatCardData::new("平均利用率", "28.4", "%").trend(1.2),
        StatCardData::new("设备故障率", "0.8", "%").variant(StatVariant::Alert),
        StatCardData::new("今日营收", scaled(45, scale), "万元").variant(StatVariant::Success),
        StatCardData::new("碳减排量", scaled(120, scale), "吨").variant(StatVariant::Success),
        StatCardData::new("额定功率", scaled(850, scale), "MW"),
        StatCardData::new("累计服务车次", scaled(8_500, scale), "次/日"),
    ]
}

/// Left panel heading for the city and district levels.
pub fn region_title(view: &ViewState) -> String {
    view.selected_district_id().map_or_else(
        || "深圳市全域".to_string(),
        |id| format!("区域: {}", id.to_uppercase()),
    )
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PieSlice {
    pub name: &'static str,
    pub value: f64,
}

const fn slice(name: &'static str, value: f64) -> PieSlice {
    PieSlice { name, value }
}

/// Eight-way cost breakdown of a single station, in percent.
pub const COST_STRUCTURE: &[PieSlice] = &[
    slice("充电桩资产", 30.0),
    slice("变压器/增容", 15.0),
    slice("电气配套", 10.0),
    slice("运维支出", 12.0),
    slice("场地租金", 10.0),
    slice("购电成本", 15.0),
    slice("人工支出", 5.0),
    slice("平台服务费", 3.0),
];

const BY_POWER: [PieSlice; 4] = [
    slice("直流快充", 45.0),
    slice("液冷超充", 25.0),
    slice("交流慢充", 20.0),
    slice("V2G终端", 10.0),
];

const BY_FUNCTION: [PieSlice; 6] = [
    slice("专用场站", 120.0),
    slice("公共开放", 350.0),
    slice("换电站", 45.0),
    slice("居民小区", 210.0),
    slice("商业中心", 180.0),
    slice("高速服务", 95.0),
];

const BY_UTILIZATION: [PieSlice; 3] = [
    slice("高利用率 (>60%)", 200.0),
    slice("中利用率 (30-60%)", 450.0),
    slice("低利用率 (<30%)", 350.0),
];

const BY_COST: [PieSlice; 3] = [
    slice("高成本站", 150.0),
    slice("中成本站", 500.0),
    slice("低成本站", 350.0),
];

const BY_L2_GRID: [PieSlice; 4] = [
    slice("核心商业网格", 320.0),
    slice("居住密集网格", 480.0),
    slice("工业区网格", 150.0),
    slice("其他网格", 50.0),
];

const BY_SERVICE: [PieSlice; 4] = [
    slice("S级卓越", 120.0),
    slice("A级优秀", 340.0),
    slice("B级良好", 400.0),
    slice("C级一般", 140.0),
];

const BY_OPS: [PieSlice; 3] = [
    slice("运营正常", 850.0),
    slice("部分故障", 120.0),
    slice("停运维护", 30.0),
];

/// Dimension of the multi-dimensional classification pie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Classification {
    #[default]
    Power,
    Function,
    Utilization,
    Cost,
    L2Grid,
    Service,
    Ops,
}

impl Classification {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Power => "power",
            Self::Function => "function",
            Self::Utilization => "utilization",
            Self::Cost => "cost",
            Self::L2Grid => "l2",
            Self::Service => "service",
            Self::Ops => "ops",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Power => "按功率类型 (Power)",
            Self::Function => "按功能场所 (Function)",
            Self::Utilization => "按利用率 (Utilization)",
            Self::Cost => "按成本分类 (Cost)",
            Self::L2Grid => "按L2网格 (L2 Grid)",
            Self::Service => "按服务能力 (Service)",
            Self::Ops => "按运营情况 (Status)",
        }
    }

    pub fn slices(&self) -> &'static [PieSlice] {
        match self {
            Self::Power => &BY_POWER,
            Self::Function => &BY_FUNCTION,
            Self::Utilization => &BY_UTILIZATION,
            Self::Cost => &BY_COST,
            Self::L2Grid => &BY_L2_GRID,
            Self::Service => &BY_SERVICE,
            Self::Ops => &BY_OPS,
        }
    }

    pub fn all() -> &'static [Self] {
        &[
            Self::Power,
            Self::Function,
            Self::Utilization,
            Self::Cost,
            Self::L2Grid,
            Self::Service,
            Self::Ops,
        ]
    }
}

impl std::fmt::Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl std::str::FromStr for Classification {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|c| c.code() == s)
            .ok_or_else(|| AppError::ConfigError(format!("Invalid classification: {s}")))
    }
}

/// One bar of the real-time terminal status block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalShare {
    pub label: &'static str,
    pub percent: u32,
    pub css_class: &'static str,
}

pub const TERMINAL_STATUS: [TerminalShare; 3] = [
    TerminalShare {
        label: "空闲 (Idle)",
        percent: 45,
        css_class: "bar-idle",
    },
    TerminalShare {
        label: "充电中 (Busy)",
        percent: 42,
        css_class: "bar-busy",
    },
    TerminalShare {
        label: "离线/故障 (Fault)",
        percent: 13,
        css_class: "bar-fault",
    },
];

/// Per-status pile counts for a station, in display order.
pub fn pile_status_counts(station: &Station) -> [(PileStatus, usize); 4] {
    PileStatus::all().map(|status| (status, station.piles_with_status(status)))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagKind {
    Danger,
    Warning,
    Info,
}

impl TagKind {
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Danger => "tag-danger",
            Self::Warning => "tag-warning",
            Self::Info => "tag-info",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::Danger => "✕",
            Self::Warning => "⚠",
            Self::Info => "✓",
        }
    }
}

/// A diagnostic finding on the station's operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssessmentTag {
    pub label: &'static str,
    pub kind: TagKind,
    pub evidence: &'static str,
}

pub fn assessment_tags() -> [AssessmentTag; 3] {
    [
        AssessmentTag {
            label: "营收增长乏力",
            kind: TagKind::Warning,
            evidence: "环比下降 12%",
        },
        AssessmentTag {
            label: "尖峰时段拥堵",
            kind: TagKind::Danger,
            evidence: "18:00 排队 > 15车",
        },
        AssessmentTag {
            label: "用户粘性高",
            kind: TagKind::Info,
            evidence: "复购率 68%",
        },
    ]
}

/// Base and variance of the right panel's main series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesProfile {
    pub base: f64,
    pub variance: f64,
}

pub fn analysis_profile(mode: TimeMode) -> SeriesProfile {
    SeriesProfile {
        base: if mode == TimeMode::Prediction {
            120.0
        } else {
            80.0
        },
        variance: if mode == TimeMode::Current { 20.0 } else { 5.0 },
    }
}

/// Grid capacity behind the power chart in kW.
///
/// A station uses the summed rating of its piles; regions use the city
/// rated power card, scaled like the other region statistics.
pub fn capacity_kw(view: &ViewState) -> f64 {
    match view.selected_station() {
        Some(station) => f64::from(station.rated_power_kw()),
        None => f64::from(scaled(850, region_scale(view))) * 1_000.0,
    }
}

/// Headings of the right panel for a view level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisTitles {
    pub panel: &'static str,
    pub main_chart: &'static str,
    pub activity_chart: &'static str,
}

pub fn analysis_titles(level: ViewLevel) -> AnalysisTitles {
    if level == ViewLevel::Station {
        AnalysisTitles {
            panel: "单站动态经营",
            main_chart: "实时充电流水曲线",
            activity_chart: "用户排队与在桩热度",
        }
    } else {
        AnalysisTitles {
            panel: "区域动态分析",
            main_chart: "区域营收趋势",
            activity_chart: "区域用户活跃度",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(cards: &[StatCardData]) -> Vec<&str> {
        cards.iter().map(|c| c.value.as_str()).collect()
    }

    #[test]
    fn test_city_stats_are_unscaled() {
        let cards = region_stats(region_scale(&ViewState::City));
        assert_eq!(
            values(&cards),
            ["450", "12450", "28.4", "0.8", "45", "120", "850", "8500"]
        );
    }

    #[test]
    fn test_district_stats_are_floored() {
        let view = ViewState::District {
            district_id: "sz_futian".to_string(),
        };
        let cards = region_stats(region_scale(&view));
        assert_eq!(
            values(&cards),
            ["90", "2490", "28.4", "0.8", "9", "24", "170", "1700"]
        );
    }

    #[test]
    fn test_stat_card_variants() {
        let cards = region_stats(1.0);
        assert_eq!(cards[2].trend, Some(1.2));
        assert_eq!(cards[3].variant, StatVariant::Alert);
        assert_eq!(cards[4].variant, StatVariant::Success);
        assert_eq!(cards[6].variant, StatVariant::Default);
    }

    #[test]
    fn test_region_title() {
        assert_eq!(region_title(&ViewState::City), "深圳市全域");
        let view = ViewState::District {
            district_id: "sz_longhua".to_string(),
        };
        assert_eq!(region_title(&view), "区域: SZ_LONGHUA");
    }

    #[test]
    fn test_classification_parsing() {
        assert_eq!("l2".parse::<Classification>().unwrap(), Classification::L2Grid);
        assert_eq!("ops".parse::<Classification>().unwrap(), Classification::Ops);
        assert!("grid".parse::<Classification>().is_err());
        assert_eq!(Classification::default(), Classification::Power);
    }

    #[test]
    fn test_every_classification_has_slices() {
        for c in Classification::all() {
            assert!(!c.slices().is_empty(), "{c}");
            assert_eq!(c.to_string().parse::<Classification>().unwrap(), *c);
        }
        assert_eq!(Classification::Ops.slices()[0].value, 850.0);
    }

    #[test]
    fn test_cost_structure_sums_to_hundred() {
        let total: f64 = COST_STRUCTURE.iter().map(|s| s.value).sum();
        assert_eq!(total, 100.0);
    }

    #[test]
    fn test_terminal_status_covers_all_terminals() {
        let total: u32 = TERMINAL_STATUS.iter().map(|s| s.percent).sum();
        assert_eq!(total, 100);
    }

    #[test]
    fn test_palette_wraps() {
        assert_eq!(palette_color(0), "#0ea5e9");
        assert_eq!(palette_color(9), "#0ea5e9");
    }

    #[test]
    fn test_analysis_profile_by_mode() {
        let current = analysis_profile(TimeMode::Current);
        assert_eq!((current.base, current.variance), (80.0, 20.0));
        let history = analysis_profile(TimeMode::History);
        assert_eq!((history.base, history.variance), (80.0, 5.0));
        let prediction = analysis_profile(TimeMode::Prediction);
        assert_eq!((prediction.base, prediction.variance), (120.0, 5.0));
    }

    #[test]
    fn test_assessment_tags() {
        let tags = assessment_tags();
        assert_eq!(tags[1].kind, TagKind::Danger);
        assert_eq!(tags[1].label, "尖峰时段拥堵");
    }

    #[test]
    fn test_capacity_follows_selection() {
        assert_eq!(capacity_kw(&ViewState::City), 850_000.0);
        let view = ViewState::District {
            district_id: "sz_pingshan".to_string(),
        };
        assert_eq!(capacity_kw(&view), 170_000.0);
    }

    #[test]
    fn test_titles_follow_level() {
        assert_eq!(analysis_titles(ViewLevel::Station).panel, "单站动态经营");
        assert_eq!(analysis_titles(ViewLevel::District).panel, "区域动态分析");
        assert_eq!(analysis_titles(ViewLevel::City).main_chart, "区域营收趋势");
    }

    #[test]
    fn test_pile_status_counts_cover_every_pile() {
        use crate::services::catalog::generate_stations_for_district;
        use rand::SeedableRng;

        let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(5);
        let station = generate_stations_for_district("sz_futian", &mut rng).remove(0);
        let counts = pile_status_counts(&station);

        assert_eq!(counts.map(|(status, _)| status), PileStatus::all());
        assert_eq!(
            counts.iter().map(|(_, n)| n).sum::<usize>(),
            station.piles.len()
        );
        for (status, count) in counts {
            let expected = station.piles.iter().filter(|p| p.status == status).count();
            assert_eq!(count, expected);
        }
    }
}

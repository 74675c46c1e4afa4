use serde::Serialize;

use super::error::AppError;

/// Geographic coordinate as `(lat, lng)` in degrees.
pub type LatLng = (f64, f64);

/// Which slice of time the dashboard is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TimeMode {
    History,
    #[default]
    Current,
    Prediction,
}

impl TimeMode {
    /// Identifier used in element values and class names.
    pub fn code(&self) -> &'static str {
        match self {
            Self::History => "HISTORY",
            Self::Current => "CURRENT",
            Self::Prediction => "PREDICTION",
        }
    }

    /// Button label in the time switcher.
    pub fn label(&self) -> &'static str {
        match self {
            Self::History => "历史回溯",
            Self::Current => "实时监控",
            Self::Prediction => "未来预测",
        }
    }

    /// Badge text shown above the analysis charts.
    pub fn badge(&self) -> &'static str {
        match self {
            Self::History => "历史数据回放",
            Self::Current => "实时数据流",
            Self::Prediction => "趋势预测模式",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Self::History => "mode-history",
            Self::Current => "mode-current",
            Self::Prediction => "mode-prediction",
        }
    }

    pub fn all() -> &'static [TimeMode] {
        &[Self::History, Self::Current, Self::Prediction]
    }
}

impl std::fmt::Display for TimeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for TimeMode {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "HISTORY" => Ok(Self::History),
            "CURRENT" => Ok(Self::Current),
            "PREDICTION" => Ok(Self::Prediction),
            _ => Err(AppError::ConfigError(format!("Invalid time mode: {s}"))),
        }
    }
}

/// Revenue classification shared by districts and stations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum RevenueRank {
    S,
    A,
    B,
    C,
}

impl RevenueRank {
    pub fn code(&self) -> &'static str {
        match self {
            Self::S => "S",
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
        }
    }

    /// Marker and badge color (hex code)
    pub fn color(&self) -> &'static str {
        match self {
            Self::S => "#f43f5e", // rose, hot
            Self::A => "#f59e0b", // amber
            Self::B => "#06b6d4", // cyan
            Self::C => "#94a3b8", // slate
        }
    }

    /// Legend label
    pub fn label(&self) -> &'static str {
        match self {
            Self::S => "S级 (高营收)",
            Self::A => "A级 (良好)",
            Self::B => "B级 (一般)",
            Self::C => "C级 (亏损)",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Self::S => "rank-s",
            Self::A => "rank-a",
            Self::B => "rank-b",
            Self::C => "rank-c",
        }
    }

    pub fn all() -> &'static [RevenueRank] {
        &[Self::S, Self::A, Self::B, Self::C]
    }
}

impl std::fmt::Display for RevenueRank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// A fixed grid region of the city map.
///
/// Active districts are the interactive Shenzhen grids; inactive ones are
/// decorative background shapes (neighbouring cities and sea).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct District {
    pub id: &'static str,
    pub name: &'static str,
    pub center: LatLng,
    pub coordinates: &'static [LatLng],
    pub capacity_history: u32,
    pub capacity_current: u32,
    pub capacity_prediction: u32,
    pub revenue_rank: RevenueRank,
    pub is_active: bool,
}

impl District {
    /// Load percentage for the given time mode.
    pub fn capacity(&self, mode: TimeMode) -> u32 {
        match mode {
            TimeMode::History => self.capacity_history,
            TimeMode::Current => self.capacity_current,
            TimeMode::Prediction => self.capacity_prediction,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_mode_parsing() {
        assert_eq!("prediction".parse::<TimeMode>().unwrap(), TimeMode::Prediction);
        assert_eq!("HISTORY".parse::<TimeMode>().unwrap(), TimeMode::History);
        assert!("tomorrow".parse::<TimeMode>().is_err());
    }

    #[test]
    fn test_time_mode_default_is_current() {
        assert_eq!(TimeMode::default(), TimeMode::Current);
        assert_eq!(TimeMode::all().len(), 3);
    }

    #[test]
    fn test_time_mode_code_round_trips_through_from_str() {
        for mode in TimeMode::all() {
            assert_eq!(mode.code().parse::<TimeMode>().unwrap(), *mode);
        }
    }

    #[test]
    fn test_revenue_rank_colors_are_distinct() {
        let colors: Vec<_> = RevenueRank::all().iter().map(RevenueRank::color).collect();
        for (i, a) in colors.iter().enumerate() {
            assert!(!colors[i + 1..].contains(a));
        }
    }
}

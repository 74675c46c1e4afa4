use serde::Serialize;

use super::district::{LatLng, RevenueRank};

/// How a station is operated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum OperatingType {
    Public,
    Private,
    Dedicated,
}

impl OperatingType {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Public => "公共开放",
            Self::Private => "私人专属",
            Self::Dedicated => "专用场站",
        }
    }
}

/// Terminal state of a single charging pile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PileStatus {
    Idle,
    Charging,
    Offline,
    Fault,
}

impl PileStatus {
    pub fn all() -> [Self; 4] {
        [Self::Idle, Self::Charging, Self::Offline, Self::Fault]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Idle => "空闲",
            Self::Charging => "充电中",
            Self::Offline => "离线",
            Self::Fault => "故障",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Idle => "pile-idle",
            Self::Charging => "pile-charging",
            Self::Offline => "pile-offline",
            Self::Fault => "pile-fault",
        }
    }
}

/// DC power class of a pile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PileType {
    Dc120,
    Dc60,
}

impl PileType {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Dc120 => "DC-120kW",
            Self::Dc60 => "DC-60kW",
        }
    }

    /// Rated power in kW
    pub fn power_kw(&self) -> u32 {
        match self {
            Self::Dc120 => 120,
            Self::Dc60 => 60,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Pile {
    pub id: String,
    pub pile_type: PileType,
    pub status: PileStatus,
    /// Plate of the vehicle currently plugged in
    pub current_user: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StaffRole {
    pub role: &'static str,
    pub count: u32,
    /// Monthly salary in RMB
    pub salary: u32,
}

/// A charging site inside an active district.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Station {
    pub id: String,
    pub district_id: String,
    pub name: String,
    pub location_label: &'static str,
    pub position: LatLng,
    pub operating_type: OperatingType,
    pub features: Vec<&'static str>,
    pub revenue_level: RevenueRank,
    /// 万元
    pub fixed_cost: u32,
    /// 万元 per year
    pub operational_cost: u32,
    /// ¥ per hour
    pub parking_fee: f64,
    /// ¥ per kWh
    pub service_fee: f64,
    pub has_ground_lock: bool,
    /// Percentage of bays covered by ground locks
    pub ground_lock_coverage: u32,
    pub staff: Vec<StaffRole>,
    pub piles: Vec<Pile>,
}

impl Station {
    /// Total headcount across all roles.
    pub fn staff_count(&self) -> u32 {
        self.staff.iter().map(|r| r.count).sum()
    }

    /// Headcount-weighted average monthly salary, 0 for an empty roster.
    pub fn avg_staff_salary(&self) -> u32 {
        let count = self.staff_count();
        if count == 0 {
            return 0;
        }
        let payroll: u32 = self.staff.iter().map(|r| r.count * r.salary).sum();
        payroll / count
    }

    /// Number of piles in the given status.
    pub fn piles_with_status(&self, status: PileStatus) -> usize {
        self.piles.iter().filter(|p| p.status == status).count()
    }

    /// Combined rated power of all piles in kW.
    pub fn rated_power_kw(&self) -> u32 {
        self.piles.iter().map(|p| p.pile_type.power_kw()).sum()
    }
}

use rand::Rng;
use rand::seq::SliceRandom;

use crate::models::district::{District, LatLng, RevenueRank};
use crate::models::error::AppError;
use crate::models::station::{OperatingType, Pile, PileStatus, PileType, StaffRole, Station};

// CONSTANTS
const STATION_COUNT_MIN: usize = 12;
const STATION_COUNT_SPAN: usize = 6;
const POSITION_JITTER_DEG: f64 = 0.08;
const PILE_COUNT_MIN: usize = 10;
const PILE_COUNT_SPAN: usize = 20;
const PILE_ID_BASE: usize = 1000;
const SALARY_JITTER: i32 = 500;

/// Functional zone tags assigned to stations.
pub const LOCATION_TAGS: &[&str] = &[
    "核心商业区",
    "高新科技园",
    "5A级景区",
    "高端住宅区",
    "交通枢纽",
    "物流园区",
    "会展中心",
];

/// On-site amenities a station may advertise.
pub const FEATURE_TAGS: &[&str] = &[
    "便利店",
    "卫生间",
    "休息室",
    "免费WiFi",
    "洗车服务",
    "24小时营业",
    "无人值守",
];

/// Staff roles with their base monthly salary (RMB).
pub const ROLE_POOL: &[(&str, u32)] = &[
    ("站长", 9000),
    ("运维工程师", 7500),
    ("安全员", 6000),
    ("客服专员", 5500),
    ("停车管理员", 5000),
    ("保洁员", 4500),
];

// DISTRICT TABLE
static DISTRICTS: &[District] = &[
    // Background, Dongguan / Huizhou side
    District {
        id: "bg_nw",
        name: "东莞西部",
        center: (22.85, 113.80),
        coordinates: &[(22.95, 113.60), (22.95, 113.95), (22.82, 113.92), (22.80, 113.70)],
        capacity_history: 0,
        capacity_current: 0,
        capacity_prediction: 0,
        revenue_rank: RevenueRank::C,
        is_active: false,
    },
    District {
        id: "bg_n",
        name: "东莞中部",
        center: (22.85, 114.10),
        coordinates: &[(22.95, 113.95), (22.95, 114.30), (22.80, 114.25), (22.82, 113.92)],
        capacity_history: 0,
        capacity_current: 0,
        capacity_prediction: 0,
        revenue_rank: RevenueRank::C,
        is_active: false,
    },
    District {
        id: "bg_ne",
        name: "惠州区域",
        center: (22.85, 114.45),
        coordinates: &[(22.95, 114.30), (22.95, 114.80), (22.75, 114.70), (22.80, 114.25)],
        capacity_history: 0,
        capacity_current: 0,
        capacity_prediction: 0,
        revenue_rank: RevenueRank::C,
        is_active: false,
    },
    // West
    District {
        id: "sz_baoan_n",
        name: "宝安北部",
        center: (22.72, 113.82),
        coordinates: &[(22.80, 113.70), (22.82, 113.92), (22.68, 113.90), (22.65, 113.75)],
        capacity_history: 45,
        capacity_current: 68,
        capacity_prediction: 75,
        revenue_rank: RevenueRank::A,
        is_active: true,
    },
    District {
        id: "sz_guangming",
        name: "光明区",
        center: (22.76, 113.96),
        coordinates: &[(22.82, 113.92), (22.80, 114.05), (22.72, 114.02), (22.68, 113.90)],
        capacity_history: 50,
        capacity_current: 72,
        capacity_prediction: 85,
        revenue_rank: RevenueRank::B,
        is_active: true,
    },
    // Center
    District {
        id: "sz_longhua",
        name: "龙华区",
        center: (22.70, 114.04),
        coordinates: &[
            (22.80, 114.05),
            (22.78, 114.15),
            (22.65, 114.12),
            (22.62, 114.02),
            (22.72, 114.02),
        ],
        capacity_history: 60,
        capacity_current: 88,
        capacity_prediction: 95,
        revenue_rank: RevenueRank::S,
        is_active: true,
    },
    District {
        id: "sz_longgang_w",
        name: "龙岗西部",
        center: (22.72, 114.18),
        coordinates: &[(22.78, 114.15), (22.80, 114.25), (22.65, 114.28), (22.65, 114.12)],
        capacity_history: 55,
        capacity_current: 70,
        capacity_prediction: 65,
        revenue_rank: RevenueRank::B,
        is_active: true,
    },
    // East
    District {
        id: "sz_longgang_e",
        name: "龙岗东部",
        center: (22.73, 114.35),
        coordinates: &[(22.80, 114.25), (22.75, 114.45), (22.62, 114.42), (22.65, 114.28)],
        capacity_history: 40,
        capacity_current: 55,
        capacity_prediction: 50,
        revenue_rank: RevenueRank::B,
        is_active: true,
    },
    District {
        id: "sz_pingshan",
        name: "坪山区",
        center: (22.68, 114.40),
        coordinates: &[(22.75, 114.45), (22.75, 114.70), (22.60, 114.60), (22.62, 114.42)],
        capacity_history: 30,
        capacity_current: 45,
        capacity_prediction: 42,
        revenue_rank: RevenueRank::C,
        is_active: true,
    },
    // South core
    District {
        id: "sz_qianhai",
        name: "前海中心",
        center: (22.54, 113.88),
        coordinates: &[
            (22.65, 113.75),
            (22.68, 113.90),
            (22.62, 114.02),
            (22.48, 113.95),
            (22.48, 113.80),
        ],
        capacity_history: 70,
        capacity_current: 92,
        capacity_prediction: 88,
        revenue_rank: RevenueRank::S,
        is_active: true,
    },
    District {
        id: "sz_futian",
        name: "福田/罗湖",
        center: (22.55, 114.08),
        coordinates: &[
            (22.62, 114.02),
            (22.65, 114.12),
            (22.52, 114.15),
            (22.50, 114.05),
            (22.48, 113.95),
        ],
        capacity_history: 75,
        capacity_current: 85,
        capacity_prediction: 98,
        revenue_rank: RevenueRank::S,
        is_active: true,
    },
    District {
        id: "sz_yantian",
        name: "盐田/大鹏",
        center: (22.58, 114.30),
        coordinates: &[
            (22.65, 114.12),
            (22.62, 114.42),
            (22.60, 114.60),
            (22.45, 114.55),
            (22.52, 114.15),
        ],
        capacity_history: 35,
        capacity_current: 50,
        capacity_prediction: 45,
        revenue_rank: RevenueRank::C,
        is_active: true,
    },
    // Background, estuary and bay
    District {
        id: "bg_sw",
        name: "珠江口",
        center: (22.40, 113.80),
        coordinates: &[(22.48, 113.60), (22.48, 113.95), (22.30, 113.95), (22.30, 113.60)],
        capacity_history: 0,
        capacity_current: 0,
        capacity_prediction: 0,
        revenue_rank: RevenueRank::C,
        is_active: false,
    },
    District {
        id: "bg_se",
        name: "大亚湾海域",
        center: (22.40, 114.40),
        coordinates: &[(22.45, 114.55), (22.60, 114.70), (22.30, 114.80), (22.30, 114.40)],
        capacity_history: 0,
        capacity_current: 0,
        capacity_prediction: 0,
        revenue_rank: RevenueRank::C,
        is_active: false,
    },
];

/// All districts, interactive and background, in drawing order.
pub fn list_districts() -> &'static [District] {
    DISTRICTS
}

pub fn find_district(id: &str) -> Option<&'static District> {
    DISTRICTS.iter().find(|d| d.id == id)
}

/// Like [`find_district`], but an unknown id is an error.
pub fn lookup_district(id: &str) -> Result<&'static District, AppError> {
    find_district(id).ok_or_else(|| AppError::UnknownDistrict(id.to_string()))
}

/// Looks up a district that accepts drill-down.
pub fn find_active_district(id: &str) -> Option<&'static District> {
    find_district(id).filter(|d| d.is_active)
}

/// Generates a fresh set of stations for a district.
///
/// Unknown and background districts yield no stations. Every call draws new
/// values from `rng`, so repeated calls with an unseeded source differ.
pub fn generate_stations_for_district<R: Rng + ?Sized>(
    district_id: &str,
    rng: &mut R,
) -> Vec<Station> {
    let Some(district) = find_active_district(district_id) else {
        return Vec::new();
    };

    let count = STATION_COUNT_MIN + rng.gen_range(0..STATION_COUNT_SPAN);
    (0..count)
        .map(|i| generate_station(district, i, rng))
        .collect()
}

fn generate_station<R: Rng + ?Sized>(district: &District, index: usize, rng: &mut R) -> Station {
    let position = jitter(district.center, rng);
    let has_ground_lock = rng.gen_bool(0.7);
    let pile_count = PILE_COUNT_MIN + rng.gen_range(0..PILE_COUNT_SPAN);
    let feature_count = rng.gen_range(1..=3);

    Station {
        id: format!("{}-s-{index}", district.id),
        district_id: district.id.to_string(),
        name: format!("{}站 #{}", district.name, index + 1),
        location_label: LOCATION_TAGS.choose(rng).copied().unwrap_or(LOCATION_TAGS[0]),
        position,
        operating_type: operating_type(rng.r#gen()),
        features: FEATURE_TAGS
            .choose_multiple(rng, feature_count)
            .copied()
            .collect(),
        revenue_level: revenue_level(rng.r#gen()),
        fixed_cost: rng.gen_range(100..300),
        operational_cost: rng.gen_range(20..50),
        parking_fee: 10.0,
        service_fee: 0.6,
        has_ground_lock,
        ground_lock_coverage: if has_ground_lock {
            rng.gen_range(40..100)
        } else {
            0
        },
        staff: generate_staff(rng),
        piles: generate_piles(pile_count, rng),
    }
}

fn jitter<R: Rng + ?Sized>((lat, lng): LatLng, rng: &mut R) -> LatLng {
    (
        lat + (rng.r#gen::<f64>() - 0.5) * POSITION_JITTER_DEG,
        lng + (rng.r#gen::<f64>() - 0.5) * POSITION_JITTER_DEG,
    )
}

/// Maps a uniform sample onto the S/A/B/C split of 20/30/30/20.
fn revenue_level(roll: f64) -> RevenueRank {
    if roll > 0.8 {
        RevenueRank::S
    } else if roll > 0.5 {
        RevenueRank::A
    } else if roll > 0.2 {
        RevenueRank::B
    } else {
        RevenueRank::C
    }
}

fn operating_type(roll: f64) -> OperatingType {
    if roll > 0.7 {
        OperatingType::Dedicated
    } else if roll > 0.4 {
        OperatingType::Public
    } else {
        OperatingType::Private
    }
}

fn generate_staff<R: Rng + ?Sized>(rng: &mut R) -> Vec<StaffRole> {
    let roles = rng.gen_range(2..=5);
    ROLE_POOL
        .choose_multiple(rng, roles)
        .map(|&(role, base)| StaffRole {
            role,
            count: rng.gen_range(1..=3),
            salary: base.saturating_add_signed(rng.gen_range(-SALARY_JITTER..=SALARY_JITTER)),
        })
        .collect()
}

fn generate_piles<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<Pile> {
    (0..count)
        .map(|i| {
            let status = pile_status(rng.r#gen());
            let current_user = (status == PileStatus::Charging)
                .then(|| format!("粤B{}", rng.gen_range(10_000..100_000)));
            Pile {
                id: format!("P-{}", PILE_ID_BASE + i),
                pile_type: if i % 3 == 0 {
                    PileType::Dc120
                } else {
                    PileType::Dc60
                },
                status,
                current_user,
            }
        })
        .collect()
}

/// 80% idle, 10% charging, 10% fault.
fn pile_status(roll: f64) -> PileStatus {
    if roll < 0.8 {
        PileStatus::Idle
    } else if roll < 0.9 {
        PileStatus::Charging
    } else {
        PileStatus::Fault
    }
}

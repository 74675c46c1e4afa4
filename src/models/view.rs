use std::rc::Rc;

use super::district::District;
use super::error::AppError;
use super::station::Station;

/// Drill-down granularity, without the selection payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewLevel {
    City,
    District,
    Station,
}

/// Navigation state of the dashboard.
///
/// Each variant carries exactly the selection valid at that level, so a
/// station can never be selected without its owning district.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ViewState {
    #[default]
    City,
    District {
        district_id: String,
    },
    Station {
        district_id: String,
        station: Rc<Station>,
    },
}

impl ViewState {
    pub fn level(&self) -> ViewLevel {
        match self {
            Self::City => ViewLevel::City,
            Self::District { .. } => ViewLevel::District,
            Self::Station { .. } => ViewLevel::Station,
        }
    }

    pub fn selected_district_id(&self) -> Option<&str> {
        match self {
            Self::City => None,
            Self::District { district_id } | Self::Station { district_id, .. } => {
                Some(district_id.as_str())
            }
        }
    }

    pub fn selected_station(&self) -> Option<&Rc<Station>> {
        match self {
            Self::Station { station, .. } => Some(station),
            _ => None,
        }
    }

    pub const fn is_city(&self) -> bool {
        matches!(self, Self::City)
    }

    /// Drills into an active district from any level.
    pub fn select_district(&self, district: &District) -> Result<Self, AppError> {
        if !district.is_active {
            return Err(AppError::InactiveDistrict(district.id.to_string()));
        }
        Ok(Self::District {
            district_id: district.id.to_string(),
        })
    }

    /// Opens a station of the currently selected district.
    pub fn select_station(&self, station: Rc<Station>) -> Result<Self, AppError> {
        match self {
            Self::District { district_id } if station.district_id == *district_id => {
                Ok(Self::Station {
                    district_id: district_id.clone(),
                    station,
                })
            }
            Self::District { district_id } => Err(AppError::StationOutsideDistrict {
                station: station.id.clone(),
                district: district_id.clone(),
            }),
            Self::City => Err(AppError::NoDistrictSelected),
            Self::Station { .. } => Err(AppError::InvalidTransition(format!(
                "station {} is already open",
                self.selected_station().map_or("", |s| s.id.as_str())
            ))),
        }
    }

    /// Moves one level up; a no-op at city level.
    pub fn back(&self) -> Self {
        match self {
            Self::City | Self::District { .. } => Self::City,
            Self::Station { district_id, .. } => Self::District {
                district_id: district_id.clone(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::catalog::{find_district, generate_stations_for_district};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn open(district_id: &str) -> Result<ViewState, AppError> {
        ViewState::City.select_district(find_district(district_id).unwrap())
    }

    fn first_station(district_id: &str) -> Rc<Station> {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let stations = generate_stations_for_district(district_id, &mut rng);
        Rc::new(stations.into_iter().next().unwrap())
    }

    #[test]
    fn test_back_from_city_is_noop() {
        assert_eq!(ViewState::City.back(), ViewState::City);
    }

    #[test]
    fn test_select_district_rejects_background() {
        let err = open("bg_nw").unwrap_err();
        assert_eq!(err, AppError::InactiveDistrict("bg_nw".to_string()));
    }

    #[test]
    fn test_select_district_from_station_level() {
        let station = first_station("sz_futian");
        let state = open("sz_futian")
            .and_then(|s| s.select_station(station))
            .unwrap();

        let next = state
            .select_district(find_district("sz_qianhai").unwrap())
            .unwrap();
        assert_eq!(next.selected_district_id(), Some("sz_qianhai"));
        assert!(next.selected_station().is_none());
    }

    #[test]
    fn test_station_from_other_district_rejected() {
        let state = open("sz_longhua").unwrap();
        let foreign = first_station("sz_pingshan");
        let err = state.select_station(foreign).unwrap_err();
        assert!(matches!(err, AppError::StationOutsideDistrict { .. }));
    }

    #[test]
    fn test_station_requires_district() {
        let station = first_station("sz_longhua");
        assert_eq!(
            ViewState::City.select_station(station).unwrap_err(),
            AppError::NoDistrictSelected
        );
    }

    #[test]
    fn test_no_station_to_station_transition() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let stations = generate_stations_for_district("sz_longhua", &mut rng);
        let state = open("sz_longhua")
            .and_then(|s| s.select_station(Rc::new(stations[0].clone())))
            .unwrap();

        let err = state.select_station(Rc::new(stations[1].clone())).unwrap_err();
        assert!(matches!(err, AppError::InvalidTransition(_)));
    }
}

use std::rc::Rc;
use yew::prelude::*;

use crate::models::error::AppError;
use crate::models::station::Station;
use crate::models::view::ViewState;
use crate::services::catalog::{generate_stations_for_district, lookup_district};
use crate::services::map_scene::MapAction;

/// Handle returned by `use_navigation` hook
#[derive(Clone, PartialEq)]
pub struct NavigationHandle {
    pub view: ViewState,
    /// Stations of the selected district, regenerated whenever it changes
    pub stations: Rc<Vec<Rc<Station>>>,
    pub dispatch: Callback<MapAction>,
    pub back: Callback<()>,
}

/// Resolves a map interaction against the current view.
pub fn apply_action(
    view: &ViewState,
    stations: &[Rc<Station>],
    action: &MapAction,
) -> Result<ViewState, AppError> {
    match action {
        MapAction::SelectDistrict(district_id) => {
            view.select_district(lookup_district(district_id)?)
        }
        MapAction::SelectStation(station_id) => {
            let station = stations
                .iter()
                .find(|s| s.id == *station_id)
                .ok_or_else(|| AppError::InvalidTransition(format!("unknown station {station_id}")))?;
            view.select_station(Rc::clone(station))
        }
    }
}

/// Custom hook for the city → district → station drill-down
#[hook]
pub fn use_navigation() -> NavigationHandle {
    let view = use_state(ViewState::default);

    let district_id = view.selected_district_id().map(str::to_string);
    let stations = use_memo(district_id, |district_id| {
        district_id.as_deref().map_or_else(Vec::new, |id| {
            generate_stations_for_district(id, &mut rand::thread_rng())
                .into_iter()
                .map(Rc::new)
                .collect()
        })
    });

    // Rejected transitions leave the view as it is
    let dispatch = {
        let view = view.clone();
        let stations = stations.clone();
        Callback::from(move |action: MapAction| {
            match apply_action(&view, &stations, &action) {
                Ok(next) => view.set(next),
                Err(e) => gloo::console::warn!(format!("Navigation rejected: {e}")),
            }
        })
    };

    let back = {
        let view = view.clone();
        Callback::from(move |()| view.set(view.back()))
    };

    NavigationHandle {
        view: (*view).clone(),
        stations,
        dispatch,
        back,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn stations(district_id: &str) -> Vec<Rc<Station>> {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        generate_stations_for_district(district_id, &mut rng)
            .into_iter()
            .map(Rc::new)
            .collect()
    }

    #[test]
    fn test_district_click_from_city() {
        let next = apply_action(
            &ViewState::City,
            &[],
            &MapAction::SelectDistrict("sz_futian".into()),
        )
        .unwrap();
        assert_eq!(next.selected_district_id(), Some("sz_futian"));
    }

    #[test]
    fn test_background_district_is_rejected() {
        let result = apply_action(
            &ViewState::City,
            &[],
            &MapAction::SelectDistrict("bg_sw".into()),
        );
        assert_eq!(result, Err(AppError::InactiveDistrict("bg_sw".into())));
    }

    #[test]
    fn test_unknown_district_is_rejected() {
        let result = apply_action(
            &ViewState::City,
            &[],
            &MapAction::SelectDistrict("sz_nowhere".into()),
        );
        assert_eq!(result, Err(AppError::UnknownDistrict("sz_nowhere".into())));
    }

    #[test]
    fn test_station_click_resolves_by_id() {
        let stations = stations("sz_yantian");
        let view = ViewState::District {
            district_id: "sz_yantian".into(),
        };
        let target = stations[3].id.clone();
        let next = apply_action(&view, &stations, &MapAction::SelectStation(target.clone())).unwrap();
        assert_eq!(next.selected_station().map(|s| s.id.clone()), Some(target));
    }

    #[test]
    fn test_unknown_station_is_rejected() {
        let stations = stations("sz_yantian");
        let view = ViewState::District {
            district_id: "sz_yantian".into(),
        };
        let result = apply_action(&view, &stations, &MapAction::SelectStation("nope".into()));
        assert!(matches!(result, Err(AppError::InvalidTransition(_))));
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use station_dashboard::models::{
        district::{RevenueRank, TimeMode},
        error::AppError,
        view::{ViewLevel, ViewState},
    };
    use station_dashboard::services::{
        catalog::{find_district, generate_stations_for_district, list_districts, lookup_district},
        map_scene::{HeatClass, build_scene, heat_style},
        panels::{region_scale, region_stats},
        series::{order_series, spot_price_series, time_series},
    };
    use std::collections::HashSet;
    use std::rc::Rc;

    fn rng(seed: u64) -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(seed)
    }

    fn open(district_id: &str) -> Result<ViewState, AppError> {
        lookup_district(district_id).and_then(|d| ViewState::City.select_district(d))
    }

    // ===== Catalog Tests =====

    #[test]
    fn test_catalog_has_nine_active_grids() {
        let districts = list_districts();
        assert_eq!(districts.len(), 14);
        assert_eq!(districts.iter().filter(|d| d.is_active).count(), 9);
        assert!(
            districts
                .iter()
                .filter(|d| !d.is_active)
                .all(|d| d.id.starts_with("bg_"))
        );
    }

    #[test]
    fn test_generator_shape_for_every_active_district() {
        let mut rng = rng(42);
        for district in list_districts().iter().filter(|d| d.is_active) {
            let stations = generate_stations_for_district(district.id, &mut rng);
            assert!(
                (12..=17).contains(&stations.len()),
                "{}: {} stations",
                district.id,
                stations.len()
            );

            for station in &stations {
                assert_eq!(station.district_id, district.id);
                assert!((10..=29).contains(&station.piles.len()));
                assert!((2..=5).contains(&station.staff.len()));

                let roles: HashSet<_> = station.staff.iter().map(|r| r.role).collect();
                assert_eq!(roles.len(), station.staff.len(), "roles must be distinct");
            }
        }
    }

    #[test]
    fn test_generator_rejects_background_and_unknown() {
        let mut rng = rng(1);
        assert!(generate_stations_for_district("bg_ne", &mut rng).is_empty());
        assert!(generate_stations_for_district("nowhere", &mut rng).is_empty());
    }

    // ===== Navigation Tests =====

    #[test]
    fn test_longhua_round_trip_back_to_city() {
        let longhua = find_district("sz_longhua").unwrap();
        assert!(longhua.is_active);
        assert_eq!(longhua.revenue_rank, RevenueRank::S);

        let stations = generate_stations_for_district("sz_longhua", &mut rng(3));
        let station = Rc::new(stations[0].clone());

        let view = open("sz_longhua").unwrap();
        assert_eq!(view.level(), ViewLevel::District);

        let view = view.select_station(Rc::clone(&station)).unwrap();
        assert_eq!(view.level(), ViewLevel::Station);
        assert_eq!(view.selected_station(), Some(&station));

        let view = view.back();
        assert_eq!(view.selected_district_id(), Some("sz_longhua"));
        assert!(view.selected_station().is_none());

        let view = view.back();
        assert_eq!(view, ViewState::City);
        assert!(view.selected_district_id().is_none());
        assert_eq!(view.back(), ViewState::City);
    }

    #[test]
    fn test_station_requires_matching_district() {
        let futian = generate_stations_for_district("sz_futian", &mut rng(9));
        let station = Rc::new(futian[0].clone());

        assert_eq!(
            ViewState::City.select_station(Rc::clone(&station)),
            Err(AppError::NoDistrictSelected)
        );

        let in_longhua = open("sz_longhua").unwrap();
        assert!(matches!(
            in_longhua.select_station(station),
            Err(AppError::StationOutsideDistrict { .. })
        ));
    }

    #[test]
    fn test_inactive_district_causes_no_transition() {
        assert_eq!(
            open("bg_se"),
            Err(AppError::InactiveDistrict("bg_se".to_string()))
        );
        assert!(matches!(
            open("sz_atlantis"),
            Err(AppError::UnknownDistrict(_))
        ));

        let scene = build_scene(&ViewState::City, TimeMode::Current, &[]);
        let interactive = scene.polygons.iter().filter(|p| p.on_click.is_some()).count();
        assert_eq!(interactive, 9);
    }

    // ===== Map Tests =====

    #[test]
    fn test_futian_prediction_is_overloaded() {
        let futian = find_district("sz_futian").unwrap();
        let capacity = futian.capacity(TimeMode::Prediction);
        assert_eq!(capacity, 98);

        let style = heat_style(capacity, TimeMode::Prediction);
        assert_eq!(style.class, HeatClass::Overload);
        assert_eq!(style.fill_color, "#ef4444");
    }

    // ===== Series Tests =====

    #[test]
    fn test_series_lengths_and_labels() {
        let series = time_series(48, 80.0, 20.0, &mut rng(4));
        assert_eq!(series.len(), 48);
        assert_eq!(series[0].time, "00:00");
        assert_eq!(series[23].time, "23:00");
        assert_eq!(series[24].time, "00:00");
        assert_eq!(series[47].time, "23:00");
    }

    #[test]
    fn test_series_are_non_negative() {
        let mut rng = rng(8);
        for _ in 0..20 {
            for p in time_series(24, 5.0, 20.0, &mut rng) {
                assert!(p.value >= 0.0);
                assert!(p.value2.unwrap() >= 0.0);
                assert!(p.value3.unwrap() >= 0.0);
            }
            for p in order_series(24, 2.0, 15.0, &mut rng) {
                assert!(p.value >= 0.0);
                assert!(p.value2.unwrap() >= 0.0);
            }
        }
    }

    #[test]
    fn test_spot_price_at_noon() {
        let mut rng = rng(12);
        for _ in 0..50 {
            let prices = spot_price_series(&mut rng);
            assert_eq!(prices.len(), 24);
            assert!((prices[12].value - 1.2).abs() <= 0.05);
        }
    }

    // ===== Panel Tests =====

    #[test]
    fn test_district_stats_scale_down() {
        let district = open("sz_qianhai").unwrap();
        let city = region_stats(region_scale(&ViewState::City));
        let local = region_stats(region_scale(&district));

        assert_eq!(city[0].value, "450");
        assert_eq!(local[0].value, "90");
        assert_eq!(local[2].value, city[2].value);
    }
}

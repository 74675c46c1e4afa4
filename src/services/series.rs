use rand::Rng;

use crate::models::series::ChartSeriesPoint;

const QUARTER_HOUR_POINTS: usize = 96;
const DAY_HOURS: usize = 24;
const PEAK_MULTIPLIER: f64 = 1.5;
const QUEUE_THRESHOLD: f64 = 80.0;

/// Slot label: quarter-hour steps for a 96-point day, `HH:00` otherwise.
pub fn slot_label(index: usize, points: usize) -> String {
    if points == QUARTER_HOUR_POINTS {
        format!("{:02}:{:02}", index / 4, (index % 4) * 15)
    } else {
        format!("{:02}:00", index % DAY_HOURS)
    }
}

/// Hour of day a slot falls in.
fn slot_hour(index: usize, points: usize) -> usize {
    if points == QUARTER_HOUR_POINTS {
        index / 4
    } else {
        index % DAY_HOURS
    }
}

/// Noon and evening demand windows.
pub const fn is_peak_hour(hour: usize) -> bool {
    matches!(hour, 10..=14 | 18..=21)
}

/// Load windows used by the power curve; the evening bump runs one hour longer.
const fn is_load_peak_hour(hour: usize) -> bool {
    matches!(hour, 10..=14 | 18..=22)
}

/// Centered uniform jitter in `[-0.5, 0.5)`.
fn centered<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    rng.r#gen::<f64>() - 0.5
}

/// General oscillating series used for revenue and load charts.
///
/// `value` follows `base + sin(i·0.25)·variance` plus jitter, `value2` a
/// cosine companion at 60% of base, `value3` the undisturbed trend at 110%.
pub fn time_series<R: Rng + ?Sized>(
    points: usize,
    base: f64,
    variance: f64,
    rng: &mut R,
) -> Vec<ChartSeriesPoint> {
    (0..points)
        .map(|i| {
            let phase = i as f64 * 0.25;
            let trend = phase.sin() * variance;
            let jitter = centered(rng) * (variance / 2.0);

            ChartSeriesPoint::new(slot_label(i, points), (base + trend + jitter).max(0.0))
                .with_value2(phase.cos().mul_add(variance, base * 0.6).max(0.0))
                .with_value3(base.mul_add(1.1, trend).max(0.0))
        })
        .collect()
}

/// Charging (`value`) and queued (`value2`) user counts.
pub fn order_series<R: Rng + ?Sized>(
    points: usize,
    base: f64,
    variance: f64,
    rng: &mut R,
) -> Vec<ChartSeriesPoint> {
    (0..points)
        .map(|i| {
            let phase = i as f64 * 0.25;
            let multiplier = if is_peak_hour(slot_hour(i, points)) {
                PEAK_MULTIPLIER
            } else {
                1.0
            };
            let charging = (base + phase.sin() * variance + centered(rng) * variance / 2.0)
                .max(0.0)
                * multiplier;
            let queued = (base * 0.3 + phase.cos() * variance * 0.3 + centered(rng) * 4.0)
                .max(0.0)
                * multiplier;

            ChartSeriesPoint::new(slot_label(i, points), charging.floor())
                .with_value2(queued.floor())
        })
        .collect()
}

/// Utilization % (`value`), available piles (`value2`) and queue length
/// (`value3`) for a station with `total_piles` terminals.
pub fn service_capability_series<R: Rng + ?Sized>(
    points: usize,
    total_piles: usize,
    rng: &mut R,
) -> Vec<ChartSeriesPoint> {
    let total = total_piles as f64;
    (0..points)
        .map(|i| {
            let profile = if is_peak_hour(slot_hour(i, points)) {
                85.0
            } else {
                45.0
            };
            let utilization = centered(rng)
                .mul_add(20.0, profile)
                .clamp(0.0, 100.0)
                .round();
            let available = (total * (1.0 - utilization / 100.0)).round();
            let queue = if utilization > QUEUE_THRESHOLD {
                ((utilization - QUEUE_THRESHOLD) / 2.0 + rng.r#gen::<f64>() * 3.0).round()
            } else {
                0.0
            };

            ChartSeriesPoint::new(slot_label(i, points), utilization)
                .with_value2(available)
                .with_value3(queue)
        })
        .collect()
}

/// Load (`value`) against a flat capacity line (`value2`), both in kW.
///
/// The load is left unclamped so peaks can cross the capacity line.
pub fn power_capacity_series<R: Rng + ?Sized>(
    points: usize,
    capacity: f64,
    rng: &mut R,
) -> Vec<ChartSeriesPoint> {
    (0..points)
        .map(|i| {
            let bump = if is_load_peak_hour(slot_hour(i, points)) {
                capacity * rng.r#gen::<f64>().mul_add(0.3, 0.35)
            } else {
                capacity * rng.r#gen::<f64>() * 0.1
            };
            let load = capacity.mul_add(0.4, bump);

            ChartSeriesPoint::new(slot_label(i, points), load.round()).with_value2(capacity)
        })
        .collect()
}

/// Base spot price (¥/kWh) for an hour of day.
pub const fn spot_price_band(hour: usize) -> f64 {
    match hour {
        0..=6 => 0.25,
        10..=14 => 1.2,
        18..=21 => 1.5,
        _ => 0.7,
    }
}

/// 24h spot price with ±0.05 jitter around each band.
pub fn spot_price_series<R: Rng + ?Sized>(rng: &mut R) -> Vec<ChartSeriesPoint> {
    (0..DAY_HOURS)
        .map(|hour| {
            let price = centered(rng).mul_add(0.1, spot_price_band(hour));
            ChartSeriesPoint::new(slot_label(hour, DAY_HOURS), price)
        })
        .collect()
}

/// 24h grid carbon emission factor (kgCO₂/kWh), roughly 0.4 to 0.6.
pub fn carbon_factor_series<R: Rng + ?Sized>(rng: &mut R) -> Vec<ChartSeriesPoint> {
    (0..DAY_HOURS)
        .map(|hour| {
            let factor = (hour as f64 * 0.5).sin().mul_add(0.1, 0.5) + centered(rng) * 0.05;
            ChartSeriesPoint::new(slot_label(hour, DAY_HOURS), factor)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(2024)
    }

    #[test]
    fn test_slot_labels() {
        assert_eq!(slot_label(0, 24), "00:00");
        assert_eq!(slot_label(23, 24), "23:00");
        assert_eq!(slot_label(25, 48), "01:00");
        assert_eq!(slot_label(5, 96), "01:15");
        assert_eq!(slot_label(95, 96), "23:45");
    }

    #[test]
    fn test_peak_windows() {
        assert!(!is_peak_hour(9));
        assert!(is_peak_hour(10));
        assert!(is_peak_hour(14));
        assert!(!is_peak_hour(15));
        assert!(is_peak_hour(21));
        assert!(!is_peak_hour(22));
        assert!(is_load_peak_hour(22));
    }

    #[test]
    fn test_time_series_tertiary_tracks_trend() {
        let series = time_series(24, 80.0, 20.0, &mut rng());
        let expected = 80.0f64.mul_add(1.1, 0.0);
        assert!((series[0].value3.unwrap() - expected).abs() < 1e-9);
    }

    #[test]
    fn test_order_series_is_integer_valued() {
        let series = order_series(24, 40.0, 15.0, &mut rng());
        for p in &series {
            assert_eq!(p.value, p.value.floor());
            assert_eq!(p.value2.unwrap(), p.value2.unwrap().floor());
        }
    }

    #[test]
    fn test_order_series_peak_multiplier() {
        let series = order_series(24, 40.0, 0.0, &mut rng());
        assert_eq!(series[9].value, 40.0);
        assert_eq!(series[12].value, 60.0);
        assert_eq!(series[19].value, 60.0);
        assert_eq!(series[22].value, 40.0);
    }

    #[test]
    fn test_time_series_floors_tertiary_at_zero() {
        let series = time_series(24, 1.0, 50.0, &mut rng());
        assert!(series.iter().all(|p| p.value3.unwrap() >= 0.0));
        // sin(4.0) is negative, so the raw trend at slot 16 is below zero.
        assert_eq!(series[16].value3, Some(0.0));
    }

    #[test]
    fn test_service_capability_queue_only_when_saturated() {
        let series = service_capability_series(24, 20, &mut rng());
        for p in &series {
            assert!((0.0..=100.0).contains(&p.value));
            let available = p.value2.unwrap();
            assert!((0.0..=20.0).contains(&available));
            if p.value <= 80.0 {
                assert_eq!(p.value3, Some(0.0));
            }
        }
    }

    #[test]
    fn test_off_peak_utilization_stays_low() {
        let series = service_capability_series(24, 20, &mut rng());
        for (hour, p) in series.iter().enumerate() {
            if !is_peak_hour(hour) {
                assert!(p.value <= 55.0, "hour {hour}: {}", p.value);
            } else {
                assert!(p.value >= 75.0, "hour {hour}: {}", p.value);
            }
        }
    }

    #[test]
    fn test_power_capacity_line_is_flat() {
        let series = power_capacity_series(24, 500.0, &mut rng());
        assert!(series.iter().all(|p| p.value2 == Some(500.0)));
        // Off-peak load stays between 40% and 50% of capacity.
        assert!((200.0..=250.0).contains(&series[3].value));
        // Peak load lies between 75% and 105% of capacity.
        assert!((375.0..=525.0).contains(&series[12].value));
    }

    #[test]
    fn test_spot_price_bands() {
        assert_eq!(spot_price_band(3), 0.25);
        assert_eq!(spot_price_band(8), 0.7);
        assert_eq!(spot_price_band(12), 1.2);
        assert_eq!(spot_price_band(19), 1.5);
        assert_eq!(spot_price_band(23), 0.7);
    }

    #[test]
    fn test_carbon_factor_range() {
        let series = carbon_factor_series(&mut rng());
        assert_eq!(series.len(), 24);
        assert!(series.iter().all(|p| (0.37..=0.63).contains(&p.value)));
    }
}

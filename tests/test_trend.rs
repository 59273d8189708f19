use sales_forecast::trend::{calculate_trend, TrendDirection};

#[test]
fn test_perfectly_linear_series_recovers_parameters() {
    let slope = 2.5;
    let intercept = 4.0;
    let data: Vec<f64> = (0..20).map(|i| slope * i as f64 + intercept).collect();

    let trend = calculate_trend(&data);

    assert!((trend.slope - slope).abs() < 1e-9);
    assert!((trend.intercept - intercept).abs() < 1e-9);
    assert_eq!(trend.direction, TrendDirection::Up);
}

#[test]
fn test_constant_series_is_stable() {
    let data = vec![100.0; 10];

    let trend = calculate_trend(&data);

    assert_eq!(trend.slope, 0.0);
    assert_eq!(trend.intercept, 100.0);
    assert_eq!(trend.direction, TrendDirection::Stable);
}

#[test]
fn test_fourteen_flat_days_scenario() {
    let data = vec![100.0; 14];

    let trend = calculate_trend(&data);

    assert_eq!(trend.direction, TrendDirection::Stable);
}

#[test]
fn test_short_series_edge_cases() {
    let empty = calculate_trend(&[]);
    assert_eq!(empty.slope, 0.0);
    assert_eq!(empty.intercept, 0.0);
    assert_eq!(empty.direction, TrendDirection::Stable);

    let single = calculate_trend(&[42.0]);
    assert_eq!(single.slope, 0.0);
    assert_eq!(single.intercept, 42.0);
    assert_eq!(single.direction, TrendDirection::Stable);
}

#[test]
fn test_stable_band_scales_with_series_magnitude() {
    // Slope of 1 against a mean near 100: inside the 2% band, so stable
    let gentle: Vec<f64> = (0..10).map(|i| 95.5 + i as f64).collect();
    let trend = calculate_trend(&gentle);
    assert_eq!(trend.direction, TrendDirection::Stable);

    // The same slope against a mean near 10 is a clear upward trend
    let steep: Vec<f64> = (0..10).map(|i| 5.5 + i as f64).collect();
    let trend = calculate_trend(&steep);
    assert_eq!(trend.direction, TrendDirection::Up);
}

#[test]
fn test_downward_trend() {
    let data: Vec<f64> = (0..10).map(|i| 100.0 - 3.0 * i as f64).collect();

    let trend = calculate_trend(&data);

    assert!(trend.slope < 0.0);
    assert_eq!(trend.direction, TrendDirection::Down);
}

use pretty_assertions::assert_eq;
use rstest::rstest;
use sales_forecast::smoothing::{exponential_smoothing, moving_average, BASELINE_WINDOW};

#[test]
fn test_moving_average_full_length_output() {
    let data = vec![10.0, 20.0, 30.0, 40.0, 50.0, 60.0, 70.0];

    let ma = moving_average(&data, 3);

    assert_eq!(ma.len(), data.len());

    // The first window-1 points average over the data available so far
    assert_eq!(ma[0], 10.0);
    assert_eq!(ma[1], 15.0); // (10 + 20) / 2

    // From index window-1 on, the full window is used
    assert_eq!(ma[2], 20.0); // (10 + 20 + 30) / 3
    assert_eq!(ma[6], 60.0); // (50 + 60 + 70) / 3
}

#[test]
fn test_moving_average_exact_mean_at_window_boundary() {
    let data = vec![4.0, 8.0, 6.0, 10.0, 2.0, 12.0, 7.0];
    let window = 5;

    let ma = moving_average(&data, window);

    let expected: f64 = data[..window].iter().sum::<f64>() / window as f64;
    assert_eq!(ma[window - 1], expected);
}

#[test]
fn test_moving_average_short_series_returned_unchanged() {
    let data = vec![10.0, 20.0, 30.0];

    let ma = moving_average(&data, 10);

    assert_eq!(ma, data);
}

#[test]
fn test_moving_average_empty_input() {
    let ma = moving_average(&[], 3);
    assert!(ma.is_empty());
}

#[test]
fn test_moving_average_flat_series_baseline() {
    // 14 flat days with the baseline window land exactly on the level
    let data = vec![100.0; 14];

    let ma = moving_average(&data, BASELINE_WINDOW);

    assert_eq!(ma.len(), 14);
    assert_eq!(*ma.last().unwrap(), 100.0);
}

#[test]
fn test_exponential_smoothing_starts_at_first_value() {
    let data = vec![10.0, 20.0, 30.0, 40.0];

    let smoothed = exponential_smoothing(&data, 0.5);

    assert_eq!(smoothed.len(), data.len());
    assert_eq!(smoothed[0], data[0]);
    assert_eq!(smoothed[1], 15.0); // 0.5 * 20 + 0.5 * 10
}

#[test]
fn test_exponential_smoothing_empty_input() {
    let smoothed = exponential_smoothing(&[], 0.3);
    assert!(smoothed.is_empty());
}

#[rstest]
#[case(0.1)]
#[case(0.3)]
#[case(0.7)]
#[case(1.0)]
fn test_exponential_smoothing_is_convex_combination(#[case] alpha: f64) {
    let data = vec![10.0, 50.0, 20.0, 80.0, 5.0, 95.0, 40.0];

    let smoothed = exponential_smoothing(&data, alpha);

    // Every output lies within the running min/max of the inputs seen so far
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for (i, &value) in data.iter().enumerate() {
        min = min.min(value);
        max = max.max(value);
        assert!(
            smoothed[i] >= min && smoothed[i] <= max,
            "smoothed[{}] = {} outside [{}, {}]",
            i,
            smoothed[i],
            min,
            max
        );
    }
}

#[test]
fn test_exponential_smoothing_alpha_one_is_identity() {
    let data = vec![3.0, 1.0, 4.0, 1.0, 5.0];

    let smoothed = exponential_smoothing(&data, 1.0);

    assert_eq!(smoothed, data);
}

//! Integration tests for the weighted percentile summary.

use ndarray::{arr1, Array1};
use rand::Rng;

use topomesh_arrays::{weighted_percentile, ArrayToolsError};

const EPS: f64 = 1e-9;

// ---------------------------------------------------------------------------
// Agreement with the unweighted definition
// ---------------------------------------------------------------------------

#[test]
fn uniform_weights_match_standard_percentiles() {
    let values = arr1(&[1.0, 2.0, 3.0, 4.0, 5.0]);
    let percentiles = arr1(&[0.0, 50.0, 100.0]);
    let result = weighted_percentile(values.view(), percentiles.view(), None, false).unwrap();

    assert!((result[0] - 1.0).abs() < EPS);
    assert!((result[1] - 3.0).abs() < EPS);
    assert!((result[2] - 5.0).abs() < EPS);
}

#[test]
fn uniform_weights_interpolate_between_midpoint_ranks() {
    // Ranks for 4 uniform elements sit at 12.5, 37.5, 62.5, 87.5.
    let values = arr1(&[10.0, 20.0, 30.0, 40.0]);
    let percentiles = arr1(&[25.0]);
    let result = weighted_percentile(values.view(), percentiles.view(), None, false).unwrap();
    assert!((result[0] - 15.0).abs() < EPS);
}

#[test]
fn explicit_uniform_weights_match_default() {
    let values = arr1(&[4.0, 1.0, 3.0, 2.0]);
    let percentiles = arr1(&[10.0, 50.0, 90.0]);
    let weights = Array1::<f64>::ones(4);

    let defaulted = weighted_percentile(values.view(), percentiles.view(), None, false).unwrap();
    let explicit = weighted_percentile(
        values.view(),
        percentiles.view(),
        Some(weights.view()),
        false,
    )
    .unwrap();

    for (a, b) in defaulted.iter().zip(explicit.iter()) {
        assert!((a - b).abs() < EPS);
    }
}

// ---------------------------------------------------------------------------
// Weighting and sorting behavior
// ---------------------------------------------------------------------------

#[test]
fn heavy_weight_pulls_the_median() {
    let values = arr1(&[1.0, 2.0, 3.0]);
    let weights = arr1(&[1.0, 1.0, 10.0]);
    let percentiles = arr1(&[50.0]);
    let result = weighted_percentile(
        values.view(),
        percentiles.view(),
        Some(weights.view()),
        false,
    )
    .unwrap();

    // Most of the mass sits on 3.0, so the median must land well above 2.
    assert!(result[0] > 2.5);
    assert!(result[0] <= 3.0);
}

#[test]
fn unsorted_input_matches_presorted_input() {
    let unsorted = arr1(&[3.0, 1.0, 5.0, 2.0, 4.0]);
    let weights_unsorted = arr1(&[0.5, 2.0, 1.0, 1.5, 1.0]);
    let sorted = arr1(&[1.0, 2.0, 3.0, 4.0, 5.0]);
    let weights_sorted = arr1(&[2.0, 1.5, 0.5, 1.0, 1.0]);
    let percentiles = arr1(&[10.0, 25.0, 50.0, 75.0, 90.0]);

    let a = weighted_percentile(
        unsorted.view(),
        percentiles.view(),
        Some(weights_unsorted.view()),
        false,
    )
    .unwrap();
    let b = weighted_percentile(
        sorted.view(),
        percentiles.view(),
        Some(weights_sorted.view()),
        true,
    )
    .unwrap();

    for (x, y) in a.iter().zip(b.iter()) {
        assert!((x - y).abs() < EPS);
    }
}

#[test]
fn zero_weight_element_adds_no_rank_separation() {
    // Ranks become 25, 50, 75; the median lands exactly on the middle node.
    let values = arr1(&[1.0, 2.0, 3.0]);
    let weights = arr1(&[1.0, 0.0, 1.0]);
    let percentiles = arr1(&[50.0]);
    let result = weighted_percentile(
        values.view(),
        percentiles.view(),
        Some(weights.view()),
        false,
    )
    .unwrap();
    assert!((result[0] - 2.0).abs() < EPS);
}

#[test]
fn results_are_monotone_in_the_requested_rank() {
    let mut rng = rand::thread_rng();
    let values: Array1<f64> = (0..40).map(|_| rng.gen_range(-100.0..100.0)).collect();
    let weights: Array1<f64> = (0..40).map(|_| rng.gen_range(0.1..5.0)).collect();
    let percentiles: Array1<f64> = (0..=20).map(|k| 5.0 * k as f64).collect();

    let result = weighted_percentile(
        values.view(),
        percentiles.view(),
        Some(weights.view()),
        false,
    )
    .unwrap();

    for window in result.to_vec().windows(2) {
        assert!(window[0] <= window[1] + EPS);
    }
}

// ---------------------------------------------------------------------------
// Degenerate inputs and failure paths
// ---------------------------------------------------------------------------

#[test]
fn single_element_answers_every_percentile() {
    let values = arr1(&[7.0]);
    let percentiles = arr1(&[0.0, 13.0, 50.0, 99.0, 100.0]);
    let result = weighted_percentile(values.view(), percentiles.view(), None, false).unwrap();
    for v in result.iter() {
        assert!((v - 7.0).abs() < EPS);
    }
}

#[test]
fn percentile_above_100_errors() {
    let values = arr1(&[1.0, 2.0]);
    let percentiles = arr1(&[50.0, 120.0]);
    let result = weighted_percentile(values.view(), percentiles.view(), None, false);
    assert_eq!(result, Err(ArrayToolsError::PercentileOutOfRange(120.0)));
}

#[test]
fn negative_percentile_errors() {
    let values = arr1(&[1.0, 2.0]);
    let percentiles = arr1(&[-0.5]);
    let result = weighted_percentile(values.view(), percentiles.view(), None, false);
    assert_eq!(result, Err(ArrayToolsError::PercentileOutOfRange(-0.5)));
}

#[test]
fn weight_length_mismatch_errors() {
    let values = arr1(&[1.0, 2.0, 3.0]);
    let weights = arr1(&[1.0, 1.0]);
    let percentiles = arr1(&[50.0]);
    let result = weighted_percentile(
        values.view(),
        percentiles.view(),
        Some(weights.view()),
        false,
    );
    assert_eq!(
        result,
        Err(ArrayToolsError::WeightLengthMismatch {
            values: 3,
            weights: 2
        })
    );
}

#[test]
fn empty_values_errors() {
    let values: Array1<f64> = arr1(&[]);
    let percentiles = arr1(&[50.0]);
    let result = weighted_percentile(values.view(), percentiles.view(), None, false);
    assert_eq!(result, Err(ArrayToolsError::EmptyInput));
}

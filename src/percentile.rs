//! Weighted percentile summary of a numeric sample.

use ndarray::{Array1, ArrayView1};

use crate::error::ArrayToolsError;

/// Compute weighted percentiles of `values`.
///
/// Each element contributes proportionally to its weight rather than counting
/// as one unit. The weighted rank of sorted element `i` with cumulative
/// weight `W_i` is `100 * (W_i - 0.5 * w_i) / W_total`; requested percentiles
/// are linearly interpolated against the `(rank, value)` nodes, clamping to
/// the boundary values outside the observed rank range. With uniform weights
/// this matches the standard midpoint percentile definition.
///
/// # Arguments
///
/// * `values` - The sample to summarize.
/// * `percentiles` - Requested percentile ranks, each in `[0, 100]`.
/// * `sample_weight` - Per-element weights of the same length as `values`;
///   `None` means uniform weight 1. Zero or negative weights are not
///   validated; zero-weight elements add no rank separation and may produce
///   tied nodes, which resolve to the later value.
/// * `values_sorted` - Set when `values` is already sorted ascending to skip
///   the internal stable sort (weights are permuted together with values
///   otherwise).
///
/// # Returns
///
/// One value per requested percentile, in request order. A single-element
/// sample answers every percentile with that element.
///
/// # Errors
///
/// `EmptyInput` for an empty sample, `PercentileOutOfRange` for a rank
/// outside `[0, 100]`, `WeightLengthMismatch` when the weight vector does not
/// match `values` in length.
pub fn weighted_percentile(
    values: ArrayView1<f64>,
    percentiles: ArrayView1<f64>,
    sample_weight: Option<ArrayView1<f64>>,
    values_sorted: bool,
) -> Result<Array1<f64>, ArrayToolsError> {
    if values.is_empty() {
        return Err(ArrayToolsError::EmptyInput);
    }
    if let Some(&p) = percentiles.iter().find(|p| !(0.0..=100.0).contains(*p)) {
        return Err(ArrayToolsError::PercentileOutOfRange(p));
    }

    let n = values.len();
    let weights = match sample_weight {
        Some(w) => {
            if w.len() != n {
                return Err(ArrayToolsError::WeightLengthMismatch {
                    values: n,
                    weights: w.len(),
                });
            }
            w.to_owned()
        }
        None => Array1::ones(n),
    };

    let (values, weights) = if values_sorted {
        (values.to_owned(), weights)
    } else {
        let mut order: Vec<usize> = (0..n).collect();
        order.sort_by(|&a, &b| values[a].total_cmp(&values[b]));
        let sorted_values = order.iter().map(|&i| values[i]).collect::<Array1<f64>>();
        let sorted_weights = order.iter().map(|&i| weights[i]).collect::<Array1<f64>>();
        (sorted_values, sorted_weights)
    };

    let total: f64 = weights.sum();
    let ranks = weights
        .iter()
        .scan(0.0, |cum, &w| {
            *cum += w;
            Some(100.0 * (*cum - 0.5 * w) / total)
        })
        .collect::<Array1<f64>>();

    Ok(percentiles
        .iter()
        .map(|&p| interp_clamped(p, &ranks, &values))
        .collect())
}

/// Piecewise-linear interpolation of `x` against nodes `(xs, ys)`.
///
/// `xs` must be non-decreasing. Outside `[xs[0], xs[last]]` the boundary
/// value is returned; tied abscissae resolve to the later node.
fn interp_clamped(x: f64, xs: &Array1<f64>, ys: &Array1<f64>) -> f64 {
    let last = xs.len() - 1;
    if x <= xs[0] {
        return ys[0];
    }
    if x >= xs[last] {
        return ys[last];
    }

    for i in 1..=last {
        if x <= xs[i] {
            let (x0, x1) = (xs[i - 1], xs[i]);
            if x0 == x1 {
                return ys[i];
            }
            let t = (x - x0) / (x1 - x0);
            return ys[i - 1] + t * (ys[i] - ys[i - 1]);
        }
    }

    ys[last]
}

use std::error::Error;
use std::fmt;

/// Contract-violation errors raised by the array utilities.
///
/// All failures are fail-fast: a function either returns a complete result or
/// one of these variants, never a partial answer.
#[derive(Debug, Clone, PartialEq)]
pub enum ArrayToolsError {
    /// A requested percentile rank lies outside the closed interval [0, 100].
    PercentileOutOfRange(f64),
    /// `values` and `sample_weight` have different lengths.
    WeightLengthMismatch { values: usize, weights: usize },
    /// The operation needs at least one element.
    EmptyInput,
    /// Row sets with different row widths were combined.
    RowWidthMismatch { left: usize, right: usize },
}

impl fmt::Display for ArrayToolsError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ArrayToolsError::PercentileOutOfRange(p) => {
                write!(f, "percentile {} is outside the closed interval [0, 100]", p)
            }
            ArrayToolsError::WeightLengthMismatch { values, weights } => write!(
                f,
                "sample_weight has {} entries but values has {}",
                weights, values
            ),
            ArrayToolsError::EmptyInput => write!(f, "input array must not be empty"),
            ArrayToolsError::RowWidthMismatch { left, right } => write!(
                f,
                "row widths differ: {} columns vs {} columns",
                left, right
            ),
        }
    }
}

impl Error for ArrayToolsError {}

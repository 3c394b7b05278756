//! topomesh-arrays: stateless numeric-array helpers for mesh and
//! cell-complex processing pipelines.
//!
//! This crate bundles the small array-algebra operations that topology code
//! keeps reaching for: collapsing a 2-D index table to its distinct rows,
//! locating a list of values inside an array, set-subtracting one element or
//! row collection from another, and summarizing a sample with weighted
//! percentiles.
//!
//! Every function is a pure transformation over `ndarray` views: inputs are
//! borrowed, outputs are freshly allocated, and nothing is logged, cached, or
//! retried. Contract violations surface as [`ArrayToolsError`].
pub mod error;
pub mod locate;
pub mod percentile;
pub mod rows;

pub use error::ArrayToolsError;
pub use locate::{where_list, where_list2};
pub use percentile::weighted_percentile;
pub use rows::{array_difference, row_difference, unique_rows, unique_rows_indexed};

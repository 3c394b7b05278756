//! Row-oriented set algebra over 2-D index tables.
//!
//! Topology code manipulates tables whose rows are compound values (edges,
//! face corners, cell adjacencies). These helpers treat each fixed-width row
//! as one atomic key: `Vec<T>` ordering stands in for the row, so standard
//! map/set machinery gives row-wise uniqueness and difference without
//! element-wise comparison loops at the call site.

use std::collections::{BTreeMap, HashSet};
use std::hash::Hash;

use ndarray::{Array1, Array2, ArrayView1, ArrayView2};

use crate::error::ArrayToolsError;

/// Return one representative row per distinct row value of `array`.
///
/// Output rows are sorted by ascending row key (lexicographic element
/// order), not by first appearance. The representative content is always a
/// row that occurs in the input, so the result is a subset of the input's
/// rows with duplicates removed.
///
/// # Arguments
///
/// * `array` - A 2-D view whose rows are compared as atomic compound values.
///
/// # Returns
///
/// A new array with one row per distinct row value, in ascending key order.
/// An input with zero rows yields a zero-row output of the same width.
pub fn unique_rows<T>(array: ArrayView2<T>) -> Array2<T>
where
    T: Clone + Ord,
{
    unique_rows_indexed(array).0
}

/// Like [`unique_rows`], but also report where each distinct row first occurs.
///
/// # Returns
///
/// `(unique, indices)` where `indices[k]` is the index into `array` of the
/// first occurrence of `unique` row `k`. Both are ordered by ascending row
/// key.
pub fn unique_rows_indexed<T>(array: ArrayView2<T>) -> (Array2<T>, Array1<usize>)
where
    T: Clone + Ord,
{
    let width = array.ncols();

    let mut first_seen: BTreeMap<Vec<T>, usize> = BTreeMap::new();
    for (i, row) in array.rows().into_iter().enumerate() {
        first_seen.entry(row.to_vec()).or_insert(i);
    }

    let mut flat = Vec::with_capacity(first_seen.len() * width);
    let mut indices = Vec::with_capacity(first_seen.len());
    for (row, index) in first_seen {
        flat.extend(row);
        indices.push(index);
    }

    let unique = Array2::from_shape_vec((indices.len(), width), flat)
        .expect("unique_rows: buffer length must equal rows * width");
    (unique, Array1::from_vec(indices))
}

/// Elements of `array` that do not occur in `subarray`.
///
/// Set semantics: duplicates in `array` are collapsed and the output order is
/// not part of the contract (this implementation emits first occurrences in
/// input order). Identical contents yield an empty result.
pub fn array_difference<T>(array: ArrayView1<T>, subarray: ArrayView1<T>) -> Array1<T>
where
    T: Clone + Hash + Eq,
{
    let exclude: HashSet<&T> = subarray.iter().collect();

    let mut seen: HashSet<&T> = HashSet::new();
    let mut kept = Vec::new();
    for value in array.iter() {
        if !exclude.contains(value) && seen.insert(value) {
            kept.push(value.clone());
        }
    }

    Array1::from_vec(kept)
}

/// Rows of `array` that do not occur in `subarray`, compared as whole rows.
///
/// Each row is packed into an owned key before hashing, so multi-column rows
/// participate in set subtraction as single values. Duplicates are collapsed
/// and first occurrences are kept in input order.
///
/// # Errors
///
/// `RowWidthMismatch` if the two row sets have different widths. A
/// `subarray` with zero rows is accepted at any width and leaves every
/// distinct row of `array` in the result.
pub fn row_difference<T>(
    array: ArrayView2<T>,
    subarray: ArrayView2<T>,
) -> Result<Array2<T>, ArrayToolsError>
where
    T: Clone + Hash + Eq,
{
    let width = array.ncols();
    if subarray.nrows() > 0 && subarray.ncols() != width {
        return Err(ArrayToolsError::RowWidthMismatch {
            left: width,
            right: subarray.ncols(),
        });
    }

    let exclude: HashSet<Vec<T>> = subarray.rows().into_iter().map(|r| r.to_vec()).collect();

    let mut seen: HashSet<Vec<T>> = HashSet::new();
    let mut flat = Vec::new();
    let mut count = 0;
    for row in array.rows() {
        let key = row.to_vec();
        if exclude.contains(&key) {
            continue;
        }
        if seen.insert(key) {
            flat.extend(row.iter().cloned());
            count += 1;
        }
    }

    Ok(Array2::from_shape_vec((count, width), flat)
        .expect("row_difference: buffer length must equal rows * width"))
}

//! Coordinate lookup of listed values inside an array.

use std::collections::HashSet;
use std::hash::Hash;

use ndarray::{Array1, ArrayBase, Data, Dimension, Ix2};

/// Coordinates of every position of `array` whose value occurs in `values`.
///
/// Membership is tested against a hash set built from `values`, so the query
/// list behaves as a set (duplicates are harmless) and element magnitude does
/// not matter.
///
/// # Arguments
///
/// * `array` - The array to search, of any dimensionality.
/// * `values` - The values to look for.
///
/// # Returns
///
/// One `Array1<usize>` per axis of `array`, in axis order; entry `k` of each
/// coordinate array together addresses the `k`-th matching position, emitted
/// in row-major traversal order. For a 2-D input this is
/// `[row_indices, col_indices]`.
pub fn where_list<A, S, D>(array: &ArrayBase<S, D>, values: &[A]) -> Vec<Array1<usize>>
where
    A: Hash + Eq,
    S: Data<Elem = A>,
    D: Dimension,
{
    let wanted: HashSet<&A> = values.iter().collect();

    let view = array.view().into_dyn();
    let mut coords: Vec<Vec<usize>> = vec![Vec::new(); view.ndim()];
    for (index, value) in view.indexed_iter() {
        if wanted.contains(value) {
            for (axis, &position) in index.slice().iter().enumerate() {
                coords[axis].push(position);
            }
        }
    }

    coords.into_iter().map(Array1::from_vec).collect()
}

/// 2-D convenience for [`where_list`]: returns `(row_indices, col_indices)`.
pub fn where_list2<A, S>(array: &ArrayBase<S, Ix2>, values: &[A]) -> (Array1<usize>, Array1<usize>)
where
    A: Hash + Eq,
    S: Data<Elem = A>,
{
    let wanted: HashSet<&A> = values.iter().collect();

    let mut rows = Vec::new();
    let mut cols = Vec::new();
    for ((r, c), value) in array.indexed_iter() {
        if wanted.contains(value) {
            rows.push(r);
            cols.push(c);
        }
    }

    (Array1::from_vec(rows), Array1::from_vec(cols))
}

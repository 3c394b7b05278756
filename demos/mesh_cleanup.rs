//! Walk through a small triangle-mesh cleanup with the array helpers:
//! dedupe the edge table, locate a vertex, strip boundary edges, and
//! summarize edge lengths with weighted percentiles.
//!
//! Run with: RUST_LOG=info cargo run --example mesh_cleanup

use anyhow::Result;
use log::info;
use ndarray::{arr1, Array2};

use topomesh_arrays::{row_difference, unique_rows_indexed, weighted_percentile, where_list2};

/// Collect the (min, max)-normalized edges of each triangle, duplicates and
/// all, the way a face loop would emit them.
fn edges_of(faces: &[[usize; 3]]) -> Result<Array2<usize>> {
    let mut flat = Vec::with_capacity(faces.len() * 6);
    for face in faces {
        for (a, b) in [(0, 1), (1, 2), (2, 0)] {
            let (v0, v1) = (face[a], face[b]);
            flat.push(v0.min(v1));
            flat.push(v0.max(v1));
        }
    }
    Ok(Array2::from_shape_vec((faces.len() * 3, 2), flat)?)
}

fn main() -> Result<()> {
    env_logger::init();

    // Two triangles sharing the edge (1, 2).
    let faces = [[0, 1, 2], [1, 3, 2]];
    let raw_edges = edges_of(&faces)?;
    info!("raw edge table: {} rows", raw_edges.nrows());

    let (edges, first_seen) = unique_rows_indexed(raw_edges.view());
    info!(
        "{} distinct edges (first occurrences at {:?})",
        edges.nrows(),
        first_seen.to_vec()
    );

    // Every edge touching vertex 2.
    let (edge_ids, _) = where_list2(&edges, &[2]);
    info!("edges touching vertex 2: {:?}", edge_ids.to_vec());

    // Interior edges only: shared edges occur in more than one face.
    let mut boundary_flat = Vec::new();
    let mut boundary_count = 0;
    for row in edges.rows() {
        let occurrences = raw_edges
            .rows()
            .into_iter()
            .filter(|r| *r == row)
            .count();
        if occurrences == 1 {
            boundary_flat.extend(row.iter().cloned());
            boundary_count += 1;
        }
    }
    let boundary = Array2::from_shape_vec((boundary_count, 2), boundary_flat)?;
    let interior = row_difference(edges.view(), boundary.view())?;
    info!(
        "{} boundary edges removed, {} interior edges left",
        boundary.nrows(),
        interior.nrows()
    );

    // Edge-length summary, weighting each length by its face multiplicity.
    let lengths = arr1(&[1.0, 1.4, 1.0, 1.0, 1.4]);
    let multiplicity = arr1(&[1.0, 1.0, 2.0, 1.0, 1.0]);
    let quartiles = arr1(&[25.0, 50.0, 75.0]);
    let summary = weighted_percentile(
        lengths.view(),
        quartiles.view(),
        Some(multiplicity.view()),
        false,
    )?;
    info!("edge length quartiles: {:?}", summary.to_vec());

    Ok(())
}

//! Randomized Prim's algorithm: grow the maze from a frontier of edges.

use rand_chacha::ChaCha8Rng;

use super::topology::MazeTopology;
use super::{cell_neighbors, pick};

pub(super) fn carve(width: usize, height: usize, rng: &mut ChaCha8Rng) -> MazeTopology {
    let mut topology = MazeTopology::fully_walled(width, height);
    let cell_count = width * height;
    let mut in_maze = vec![false; cell_count];

    let start = pick(rng, cell_count);
    in_maze[start] = true;

    // (cell to add, cell already in the maze it would attach to)
    let mut frontier: Vec<(usize, usize)> = cell_neighbors(width, height, start)
        .into_iter()
        .map(|neighbor| (neighbor, start))
        .collect();

    while !frontier.is_empty() {
        let (cell, attach_to) = frontier.swap_remove(pick(rng, frontier.len()));
        if in_maze[cell] {
            continue;
        }
        in_maze[cell] = true;
        topology.open_between(cell, attach_to);

        for neighbor in cell_neighbors(width, height, cell) {
            if !in_maze[neighbor] {
                frontier.push((neighbor, cell));
            }
        }
    }

    topology
}

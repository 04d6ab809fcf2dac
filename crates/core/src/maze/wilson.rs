//! Wilson's algorithm: loop-erased random walks from unvisited cells.

use rand_chacha::ChaCha8Rng;

use super::topology::MazeTopology;
use super::{cell_neighbors, pick};

pub(super) fn carve(width: usize, height: usize, rng: &mut ChaCha8Rng) -> MazeTopology {
    let mut topology = MazeTopology::fully_walled(width, height);
    let cell_count = width * height;
    let mut in_maze = vec![false; cell_count];
    in_maze[pick(rng, cell_count)] = true;

    loop {
        let unvisited: Vec<usize> =
            (0..cell_count).filter(|&index| !in_maze[index]).collect();
        if unvisited.is_empty() {
            break;
        }

        // Random walk until the existing maze is hit, erasing any loop the
        // walk closes over itself.
        let mut current = unvisited[pick(rng, unvisited.len())];
        let mut path = vec![current];
        while !in_maze[current] {
            let neighbors = cell_neighbors(width, height, current);
            let next = neighbors[pick(rng, neighbors.len())];
            if let Some(position) = path.iter().position(|&cell| cell == next) {
                path.truncate(position + 1);
            } else {
                path.push(next);
            }
            current = next;
        }

        for pair in path.windows(2) {
            topology.open_between(pair[0], pair[1]);
            in_maze[pair[0]] = true;
            in_maze[pair[1]] = true;
        }
    }

    topology
}

#[cfg(test)]
mod tests {
    use rand_chacha::ChaCha8Rng;
    use rand_chacha::rand_core::SeedableRng;

    use super::*;

    #[test]
    fn carved_topologies_are_spanning_trees() {
        for seed in [1_u64, 13, 555] {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let topology = carve(7, 7, &mut rng);
            assert!(topology.is_perfect(), "seed {seed} broke the tree invariant");
        }
    }

    #[test]
    fn equal_rng_streams_carve_identical_topologies() {
        let mut first_rng = ChaCha8Rng::seed_from_u64(8);
        let mut second_rng = ChaCha8Rng::seed_from_u64(8);
        assert_eq!(carve(5, 4, &mut first_rng), carve(5, 4, &mut second_rng));
    }
}

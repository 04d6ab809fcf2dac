//! Eller's algorithm: row-by-row carving with per-row disjoint set labels.

use std::collections::BTreeMap;

use rand_chacha::ChaCha8Rng;

use super::topology::MazeTopology;
use super::{coin, pick};

pub(super) fn carve(width: usize, height: usize, rng: &mut ChaCha8Rng) -> MazeTopology {
    let mut topology = MazeTopology::fully_walled(width, height);
    let mut sets: Vec<u32> = vec![0; width];
    let mut next_set_id: u32 = 1;

    for y in 0..height {
        // Columns that did not carry a set across the row boundary get a
        // fresh unique label.
        for label in sets.iter_mut() {
            if *label == 0 {
                *label = next_set_id;
                next_set_id += 1;
            }
        }

        // Horizontal merges between adjacent differing sets. Forced on the
        // last row so no region stays isolated.
        for x in 0..width - 1 {
            if sets[x] == sets[x + 1] {
                continue;
            }
            if y == height - 1 || coin(rng) {
                topology.open_right(y, x);
                let old = sets[x + 1];
                let new = sets[x];
                for label in sets.iter_mut() {
                    if *label == old {
                        *label = new;
                    }
                }
            }
        }

        // Downward passages: every set is guaranteed at least one, the rest
        // of its columns descend with 50% probability. Columns that do not
        // descend lose their label for the next row.
        if y < height - 1 {
            let mut members: BTreeMap<u32, Vec<usize>> = BTreeMap::new();
            for (x, &label) in sets.iter().enumerate() {
                members.entry(label).or_default().push(x);
            }

            let mut next_sets = vec![0_u32; width];
            for (label, columns) in members {
                let guaranteed = columns[pick(rng, columns.len())];
                for &x in &columns {
                    if x == guaranteed || coin(rng) {
                        topology.open_bottom(y, x);
                        next_sets[x] = label;
                    }
                }
            }
            sets = next_sets;
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
        for seed in [0_u64, 7, 99, 4096] {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let topology = carve(11, 9, &mut rng);
            assert!(topology.is_perfect(), "seed {seed} broke the tree invariant");
        }
    }

    #[test]
    fn equal_rng_streams_carve_identical_topologies() {
        let mut first_rng = ChaCha8Rng::seed_from_u64(31);
        let mut second_rng = ChaCha8Rng::seed_from_u64(31);
        let first = carve(8, 6, &mut first_rng);
        let second = carve(8, 6, &mut second_rng);
        assert_eq!(first, second);
    }

    #[test]
    fn single_row_maze_becomes_one_corridor() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let topology = carve(6, 1, &mut rng);
        for x in 0..5 {
            assert!(!topology.right_wall(0, x), "last-row merge must join column {x}");
        }
    }
}

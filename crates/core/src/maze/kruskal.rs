//! Randomized Kruskal's algorithm over a shuffled edge list with union-find.

use rand_chacha::ChaCha8Rng;

use super::pick;
use super::topology::MazeTopology;

struct DisjointSets {
    parent: Vec<usize>,
}

impl DisjointSets {
    fn new(count: usize) -> Self {
        Self { parent: (0..count).collect() }
    }

    fn find(&mut self, mut cell: usize) -> usize {
        while self.parent[cell] != cell {
            // Path halving keeps the forest shallow without recursion.
            self.parent[cell] = self.parent[self.parent[cell]];
            cell = self.parent[cell];
        }
        cell
    }

    fn union(&mut self, a: usize, b: usize) -> bool {
        let root_a = self.find(a);
        let root_b = self.find(b);
        if root_a == root_b {
            return false;
        }
        self.parent[root_b] = root_a;
        true
    }
}

pub(super) fn carve(width: usize, height: usize, rng: &mut ChaCha8Rng) -> MazeTopology {
    let mut topology = MazeTopology::fully_walled(width, height);

    let mut edges: Vec<(usize, usize)> = Vec::with_capacity(2 * width * height);
    for y in 0..height {
        for x in 0..width {
            let index = y * width + x;
            if x + 1 < width {
                edges.push((index, index + 1));
            }
            if y + 1 < height {
                edges.push((index, index + width));
            }
        }
    }

    // Fisher-Yates with the caller's rng.
    for i in (1..edges.len()).rev() {
        edges.swap(i, pick(rng, i + 1));
    }

    let mut sets = DisjointSets::new(width * height);
    for (a, b) in edges {
        if sets.union(a, b) {
            topology.open_between(a, b);
        }
    }

    topology
}

//! Procedural maze construction.
//!
//! Eller's row-by-row algorithm is the production carver; the Wilson, Prim and
//! Kruskal variants are kept alongside it and exercised by the CLI and the
//! invariant tests. Every carver draws from an explicit seeded RNG handle —
//! there is no global random source anywhere in this crate.

pub mod topology;

mod carve;
mod default_map;
mod eller;
mod kruskal;
mod prim;
mod wilson;

pub use carve::stamp_map;
pub use default_map::default_map_rows;
pub use topology::MazeTopology;

use std::fmt;

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::{Rng, SeedableRng};

/// Cell dimensions for generated playfields. The carved tile grid is
/// `(2*w + 1) x (2*h + 1)`, close to the hand-authored default map's size.
pub const GENERATED_CELL_WIDTH: usize = 12;
pub const GENERATED_CELL_HEIGHT: usize = 14;

/// A carver draw that violates the spanning-tree invariant is discarded and
/// redrawn; `Degenerate` after this many attempts signals an internal bug
/// rather than bad luck.
const CARVE_ATTEMPTS: usize = 8;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MazeAlgorithm {
    Eller,
    Wilson,
    Prim,
    Kruskal,
}

impl MazeAlgorithm {
    pub const ALL: [Self; 4] = [Self::Eller, Self::Wilson, Self::Prim, Self::Kruskal];

    pub fn label(self) -> &'static str {
        match self {
            Self::Eller => "eller",
            Self::Wilson => "wilson",
            Self::Prim => "prim",
            Self::Kruskal => "kruskal",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MazeError {
    OddWidth { width: usize },
    TooSmall { width: usize, height: usize },
    Degenerate,
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OddWidth { width } => {
                write!(f, "symmetric mazes require an even width, got {width}")
            }
            Self::TooSmall { width, height } => {
                write!(f, "maze dimensions {width}x{height} are below the supported minimum")
            }
            Self::Degenerate => {
                write!(f, "carver kept producing topologies that violate the spanning-tree invariant")
            }
        }
    }
}

/// Carve a perfect maze. Deterministic for a given seed.
pub fn generate(
    width: usize,
    height: usize,
    seed: u64,
    algorithm: MazeAlgorithm,
) -> Result<MazeTopology, MazeError> {
    if width < 2 || height < 2 {
        return Err(MazeError::TooSmall { width, height });
    }
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    carve_checked(width, height, &mut rng, algorithm)
}

/// Carve a bilaterally symmetric perfect maze: the algorithm runs on the left
/// half, the result is mirrored widthwise, and exactly one seam wall between
/// the halves is opened so the whole remains a single spanning tree.
pub fn generate_symmetric(
    width: usize,
    height: usize,
    seed: u64,
    algorithm: MazeAlgorithm,
) -> Result<MazeTopology, MazeError> {
    if width % 2 != 0 {
        return Err(MazeError::OddWidth { width });
    }
    if width < 4 || height < 2 {
        return Err(MazeError::TooSmall { width, height });
    }

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    for _ in 0..CARVE_ATTEMPTS {
        let half = carve_once(width / 2, height, &mut rng, algorithm);
        let mut full = half.mirror_widthwise();
        full.open_seam(pick(&mut rng, height));
        if full.is_perfect() {
            return Ok(full);
        }
    }
    Err(MazeError::Degenerate)
}

/// Carve the symbol-grid playfield the session consumes for generated levels.
pub fn generated_map_rows(seed: u64) -> Result<Vec<String>, MazeError> {
    let topology =
        generate_symmetric(GENERATED_CELL_WIDTH, GENERATED_CELL_HEIGHT, seed, MazeAlgorithm::Eller)?;
    Ok(carve::stamp_map(&topology))
}

fn carve_checked(
    width: usize,
    height: usize,
    rng: &mut ChaCha8Rng,
    algorithm: MazeAlgorithm,
) -> Result<MazeTopology, MazeError> {
    for _ in 0..CARVE_ATTEMPTS {
        let topology = carve_once(width, height, rng, algorithm);
        if topology.is_perfect() {
            return Ok(topology);
        }
    }
    Err(MazeError::Degenerate)
}

fn carve_once(
    width: usize,
    height: usize,
    rng: &mut ChaCha8Rng,
    algorithm: MazeAlgorithm,
) -> MazeTopology {
    match algorithm {
        MazeAlgorithm::Eller => eller::carve(width, height, rng),
        MazeAlgorithm::Wilson => wilson::carve(width, height, rng),
        MazeAlgorithm::Prim => prim::carve(width, height, rng),
        MazeAlgorithm::Kruskal => kruskal::carve(width, height, rng),
    }
}

fn coin(rng: &mut ChaCha8Rng) -> bool {
    rng.next_u64() & 1 == 0
}

fn pick(rng: &mut ChaCha8Rng, len: usize) -> usize {
    debug_assert!(len > 0);
    (rng.next_u64() % len as u64) as usize
}

/// Orthogonal cell neighbours of `index` on a `width x height` cell grid.
fn cell_neighbors(width: usize, height: usize, index: usize) -> Vec<usize> {
    let y = index / width;
    let x = index % width;
    let mut neighbors = Vec::with_capacity(4);
    if y > 0 {
        neighbors.push(index - width);
    }
    if x > 0 {
        neighbors.push(index - 1);
    }
    if y + 1 < height {
        neighbors.push(index + width);
    }
    if x + 1 < width {
        neighbors.push(index + 1);
    }
    neighbors
}

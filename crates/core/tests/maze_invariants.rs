use game_core::maze::{self, MazeAlgorithm};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn every_generated_maze_is_a_spanning_tree(
        seed in any::<u64>(),
        width in 2_usize..20,
        height in 2_usize..16,
        algorithm_selector in 0_u8..4,
    ) {
        let algorithm = MazeAlgorithm::ALL[algorithm_selector as usize];
        let topology = maze::generate(width, height, seed, algorithm)
            .expect("generation should succeed for supported dimensions");
        prop_assert_eq!(
            topology.passage_count(),
            width * height - 1,
            "{} must carve exactly cells-1 passages",
            algorithm.label()
        );
        prop_assert!(topology.is_connected(), "{} left isolated cells", algorithm.label());
    }

    #[test]
    fn symmetric_mazes_mirror_and_stay_perfect(
        seed in any::<u64>(),
        half_width in 2_usize..10,
        height in 2_usize..14,
    ) {
        let width = half_width * 2;
        let topology = maze::generate_symmetric(width, height, seed, MazeAlgorithm::Eller)
            .expect("generation should succeed for even widths");
        prop_assert!(topology.is_perfect());
        for y in 0..height {
            for x in 0..width - 1 {
                prop_assert_eq!(
                    topology.right_wall(y, x),
                    topology.right_wall(y, width - 2 - x),
                    "right-wall mirror broken at ({}, {})", y, x
                );
            }
            for x in 0..width {
                prop_assert_eq!(
                    topology.bottom_wall(y, x),
                    topology.bottom_wall(y, width - 1 - x),
                    "bottom-wall mirror broken at ({}, {})", y, x
                );
            }
        }
    }

    #[test]
    fn generation_is_idempotent_per_seed(seed in any::<u64>()) {
        let first = maze::generate(12, 9, seed, MazeAlgorithm::Eller).expect("first");
        let second = maze::generate(12, 9, seed, MazeAlgorithm::Eller).expect("second");
        prop_assert_eq!(first.canonical_bytes(), second.canonical_bytes());
    }

    #[test]
    fn generated_playfields_always_parse(seed in any::<u64>()) {
        let rows = maze::generated_map_rows(seed).expect("playfield generation");
        let grid = game_core::GridMap::parse(&rows).expect("carved playfields are valid grids");
        prop_assert_eq!(grid.width(), maze::GENERATED_CELL_WIDTH * 2 + 1);
        prop_assert_eq!(grid.height(), maze::GENERATED_CELL_HEIGHT * 2 + 1);
        prop_assert!(grid.pellet_tile_count() > 0);
    }
}

//! Tile carving: turns wall topology into the playfield symbol grid.
//!
//! Cells become pellet floor on odd tile coordinates, open edges become the
//! passages between them, and a ghost house is stamped over the centre: a
//! walled pen with holding cells and two gate tiles, wrapped in a cleared
//! floor ring so the surrounding maze stays connected.

use super::topology::MazeTopology;

const WALL: char = '#';
const PELLET: char = 'O';
const ENERGIZER: char = '*';
const FLOOR: char = '.';
const GATE: char = '=';
const PLAYER_SPAWN: char = 'p';
const HOLDING: char = 'g';

/// Carve `topology` into symbol rows ready for `GridMap::parse`.
///
/// The topology must be at least 7x7 cells so the house stamp and its ring
/// fit inside the border.
pub fn stamp_map(topology: &MazeTopology) -> Vec<String> {
    let tile_width = topology.width() * 2 + 1;
    let tile_height = topology.height() * 2 + 1;
    debug_assert!(
        tile_width >= 15 && tile_height >= 15,
        "topology too small for the ghost house stamp"
    );

    let mut tiles = vec![vec![WALL; tile_width]; tile_height];
    for y in 0..topology.height() {
        for x in 0..topology.width() {
            tiles[2 * y + 1][2 * x + 1] = PELLET;
            if x + 1 < topology.width() && !topology.right_wall(y, x) {
                tiles[2 * y + 1][2 * x + 2] = PELLET;
            }
            if y + 1 < topology.height() && !topology.bottom_wall(y, x) {
                tiles[2 * y + 2][2 * x + 1] = PELLET;
            }
        }
    }

    stamp_ghost_house(&mut tiles);
    stamp_tunnel(&mut tiles);
    stamp_energizers(&mut tiles);

    tiles.into_iter().map(|row| row.into_iter().collect()).collect()
}

fn stamp_ghost_house(tiles: &mut [Vec<char>]) {
    let tile_height = tiles.len();
    let tile_width = tiles[0].len();
    let center_y = tile_height / 2;
    let center_x = tile_width / 2;

    // Cleared ring first: everything the shell displaces reconnects here.
    for y in (center_y - 3)..=(center_y + 2) {
        for x in (center_x - 4)..=(center_x + 3) {
            tiles[y][x] = PELLET;
        }
    }

    // Pen shell.
    for y in (center_y - 2)..=(center_y + 1) {
        for x in (center_x - 3)..=(center_x + 2) {
            tiles[y][x] = WALL;
        }
    }

    // Holding cells.
    for y in (center_y - 1)..=center_y {
        for x in (center_x - 2)..=(center_x + 1) {
            tiles[y][x] = HOLDING;
        }
    }

    // Gates centred in the shell's top wall, player spawn on the ring below.
    tiles[center_y - 2][center_x - 1] = GATE;
    tiles[center_y - 2][center_x] = GATE;
    tiles[center_y + 2][center_x] = PLAYER_SPAWN;
}

/// Open a wrap-around tunnel on the first cell row below the house ring.
fn stamp_tunnel(tiles: &mut [Vec<char>]) {
    let tile_height = tiles.len();
    let tile_width = tiles[0].len();
    let mut row = tile_height / 2 + 3;
    if row % 2 == 0 {
        row += 1;
    }
    debug_assert!(row < tile_height - 1);
    tiles[row][0] = FLOOR;
    tiles[row][tile_width - 1] = FLOOR;
}

/// Energizers live on the four cell tiles nearest the corners; those are
/// always pellet floor by construction.
fn stamp_energizers(tiles: &mut [Vec<char>]) {
    let tile_height = tiles.len();
    let tile_width = tiles[0].len();
    for (y, x) in [
        (1, 1),
        (1, tile_width - 2),
        (tile_height - 2, 1),
        (tile_height - 2, tile_width - 2),
    ] {
        debug_assert_eq!(tiles[y][x], PELLET);
        tiles[y][x] = ENERGIZER;
    }
}

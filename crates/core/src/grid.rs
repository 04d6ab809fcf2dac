//! The static tile grid a level plays on, parsed from symbol rows.
//!
//! Symbols: `#` wall, `O` pellet floor, `*` energizer, `.` plain floor,
//! `=` ghost gate, `p` player spawn, `g` holding cell.

use std::collections::BTreeMap;
use std::fmt;

use crate::types::{PelletKind, Pos, TileKind};

#[derive(Clone, Debug)]
pub struct GridMap {
    width: usize,
    height: usize,
    tiles: Vec<TileKind>,
    /// Derived render hint only; recomputed by the session every frame.
    gates_open: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MapError {
    Empty,
    RaggedRow { row: usize },
    UnknownSymbol { row: usize, column: usize, symbol: char },
    MissingPlayerSpawn,
    MultiplePlayerSpawns,
    MissingHoldingCells,
    MissingGates,
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "map has no rows"),
            Self::RaggedRow { row } => write!(f, "map row {row} differs in width from row 0"),
            Self::UnknownSymbol { row, column, symbol } => {
                write!(f, "unknown map symbol '{symbol}' at row {row}, column {column}")
            }
            Self::MissingPlayerSpawn => write!(f, "map defines no player spawn"),
            Self::MultiplePlayerSpawns => write!(f, "map defines more than one player spawn"),
            Self::MissingHoldingCells => write!(f, "map defines no ghost holding cells"),
            Self::MissingGates => write!(f, "map defines no ghost gates"),
        }
    }
}

fn tile_from_symbol(symbol: char) -> Option<TileKind> {
    match symbol {
        '#' => Some(TileKind::Wall),
        'O' => Some(TileKind::Pellet),
        '*' => Some(TileKind::PowerPellet),
        '.' => Some(TileKind::Floor),
        '=' => Some(TileKind::GhostGate),
        'p' => Some(TileKind::PlayerSpawn),
        'g' => Some(TileKind::GhostSpawn),
        _ => None,
    }
}

impl GridMap {
    pub fn parse<S: AsRef<str>>(rows: &[S]) -> Result<Self, MapError> {
        if rows.is_empty() {
            return Err(MapError::Empty);
        }

        let width = rows[0].as_ref().chars().count();
        if width == 0 {
            return Err(MapError::Empty);
        }
        let height = rows.len();

        let mut tiles = Vec::with_capacity(width * height);
        let mut player_spawns = 0_usize;
        let mut holding_cells = 0_usize;
        let mut gates = 0_usize;

        for (row_index, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.chars().count() != width {
                return Err(MapError::RaggedRow { row: row_index });
            }
            for (column, symbol) in row.chars().enumerate() {
                let tile = tile_from_symbol(symbol).ok_or(MapError::UnknownSymbol {
                    row: row_index,
                    column,
                    symbol,
                })?;
                match tile {
                    TileKind::PlayerSpawn => player_spawns += 1,
                    TileKind::GhostSpawn => holding_cells += 1,
                    TileKind::GhostGate => gates += 1,
                    _ => {}
                }
                tiles.push(tile);
            }
        }

        match player_spawns {
            0 => return Err(MapError::MissingPlayerSpawn),
            1 => {}
            _ => return Err(MapError::MultiplePlayerSpawns),
        }
        if holding_cells == 0 {
            return Err(MapError::MissingHoldingCells);
        }
        if gates == 0 {
            return Err(MapError::MissingGates);
        }

        Ok(Self { width, height, tiles, gates_open: false })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn in_bounds(&self, pos: Pos) -> bool {
        pos.x >= 0
            && pos.y >= 0
            && (pos.x as usize) < self.width
            && (pos.y as usize) < self.height
    }

    /// Out-of-bounds positions read as walls.
    pub fn tile_at(&self, pos: Pos) -> TileKind {
        if !self.in_bounds(pos) {
            return TileKind::Wall;
        }
        self.tiles[(pos.y as usize) * self.width + (pos.x as usize)]
    }

    pub fn player_spawn(&self) -> Pos {
        self.scan(TileKind::PlayerSpawn)
            .into_iter()
            .next()
            .expect("validated at parse time: exactly one player spawn")
    }

    /// Holding cells in row-major scan order.
    pub fn holding_cells(&self) -> Vec<Pos> {
        self.scan(TileKind::GhostSpawn)
    }

    pub fn gate_cells(&self) -> Vec<Pos> {
        self.scan(TileKind::GhostGate)
    }

    /// The tile just outside the pen, above the first gate. Released ghosts
    /// path here to leave the house.
    pub fn pen_exit(&self) -> Pos {
        let gate = self.gate_cells()[0];
        Pos { y: gate.y - 1, x: gate.x }
    }

    pub fn pellet_scan(&self) -> BTreeMap<Pos, PelletKind> {
        let mut pellets = BTreeMap::new();
        for y in 0..self.height {
            for x in 0..self.width {
                let pos = Pos { y: y as i32, x: x as i32 };
                match self.tile_at(pos) {
                    TileKind::Pellet => {
                        pellets.insert(pos, PelletKind::Normal);
                    }
                    TileKind::PowerPellet => {
                        pellets.insert(pos, PelletKind::Energizer);
                    }
                    _ => {}
                }
            }
        }
        pellets
    }

    /// How many tiles carry food when the level starts.
    pub fn pellet_tile_count(&self) -> usize {
        self.tiles
            .iter()
            .filter(|tile| matches!(tile, TileKind::Pellet | TileKind::PowerPellet))
            .count()
    }

    /// A tunnel row is open at both horizontal extremes; movement off one
    /// edge re-enters at the opposite edge.
    pub fn is_tunnel_row(&self, y: i32) -> bool {
        if y < 0 || y as usize >= self.height {
            return false;
        }
        self.tile_at(Pos { y, x: 0 }).is_walkable()
            && self.tile_at(Pos { y, x: self.width as i32 - 1 }).is_walkable()
    }

    /// Wrap a position horizontally through a tunnel row; anything else is
    /// returned unchanged (and reads as wall if out of bounds).
    pub fn wrap(&self, pos: Pos) -> Pos {
        if !self.is_tunnel_row(pos.y) {
            return pos;
        }
        if pos.x < 0 {
            return Pos { y: pos.y, x: self.width as i32 - 1 };
        }
        if pos.x as usize >= self.width {
            return Pos { y: pos.y, x: 0 };
        }
        pos
    }

    pub fn gates_open(&self) -> bool {
        self.gates_open
    }

    pub fn set_gates_open(&mut self, open: bool) {
        self.gates_open = open;
    }

    fn scan(&self, wanted: TileKind) -> Vec<Pos> {
        let mut found = Vec::new();
        for y in 0..self.height {
            for x in 0..self.width {
                let pos = Pos { y: y as i32, x: x as i32 };
                if self.tile_at(pos) == wanted {
                    found.push(pos);
                }
            }
        }
        found
    }
}

//! The fixed, hand-authored classic playfield.
//!
//! 28x31 tiles: bordered pellet corridors around free-standing wall islands,
//! a central ghost pen with two gates, four corner energizers and one
//! wrap-around tunnel row. Interchangeable with generated maps as a
//! `GridMap` source.

const DEFAULT_MAP: [&str; 31] = [
    "############################",
    "#*OOOOOOOOOOOOOOOOOOOOOOOO*#",
    "#O####O#####OOOO#####O####O#",
    "#O####O#####OOOO#####O####O#",
    "#OOOOOOOOOOOOOOOOOOOOOOOOOO#",
    "#O####O#####O##O#####O####O#",
    "#O####O#####O##O#####O####O#",
    "#OOOOOO#####OOOO#####OOOOOO#",
    "#OOOOOO#####OOOO#####OOOOOO#",
    "#OOOOOO#####OOOO#####OOOOOO#",
    "#OOOOOOOOOOOOOOOOOOOOOOOOOO#",
    "#OOOOOOOOOOOOOOOOOOOOOOOOOO#",
    "#O######OO###==###OO######O#",
    "#O######OO#gggggg#OO######O#",
    ".OOOOOOOOO#gggggg#OOOOOOOOO.",
    "#OOOOOOOOO#gggggg#OOOOOOOOO#",
    "#OOOOOOOOO########OOOOOOOOO#",
    "#OOOOOOOOOOOOpOOOOOOOOOOOOO#",
    "#O####O#####O##O#####O####O#",
    "#O####O#####O##O#####O####O#",
    "#OOOOOOOOOOOOOOOOOOOOOOOOOO#",
    "#O####O#####OOOO#####O####O#",
    "#O####O#####OOOO#####O####O#",
    "#OOOOOOOOOOOOOOOOOOOOOOOOOO#",
    "#O####O#####O##O#####O####O#",
    "#O####O#####O##O#####O####O#",
    "#OOOOOOOOOOOOOOOOOOOOOOOOOO#",
    "#O####O#####OOOO#####O####O#",
    "#O####O#####OOOO#####O####O#",
    "#*OOOOOOOOOOOOOOOOOOOOOOOO*#",
    "############################",
];

pub fn default_map_rows() -> Vec<String> {
    DEFAULT_MAP.iter().map(|row| (*row).to_string()).collect()
}

//! Deterministic A* distances over the tile grid, used by ghost steering.

use std::collections::{BTreeMap, BTreeSet};

use crate::grid::GridMap;
use crate::types::{Direction, Pos};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
struct OpenNode {
    f: u32,
    h: u32,
    y: i32,
    x: i32,
}

pub fn manhattan(a: Pos, b: Pos) -> u32 {
    a.x.abs_diff(b.x) + a.y.abs_diff(b.y)
}

/// Shortest walkable distance from `start` to `goal` under `can_enter`, or
/// `None` when unreachable. Ordered sets keep equal-cost expansion identical
/// across runs, which ghost steering relies on for reproducibility.
pub fn shortest_distance(
    grid: &GridMap,
    start: Pos,
    goal: Pos,
    can_enter: &impl Fn(Pos, Direction) -> bool,
) -> Option<u32> {
    if start == goal {
        return Some(0);
    }

    let mut open_set = BTreeSet::new();
    let mut open_entries: BTreeMap<Pos, OpenNode> = BTreeMap::new();
    let mut g_score: BTreeMap<Pos, u32> = BTreeMap::new();

    let start_h = manhattan(start, goal);
    let start_node = OpenNode { f: start_h, h: start_h, y: start.y, x: start.x };
    open_set.insert(start_node);
    open_entries.insert(start, start_node);
    g_score.insert(start, 0);

    while let Some(current_node) = open_set.pop_first() {
        let current = Pos { y: current_node.y, x: current_node.x };
        open_entries.remove(&current);
        let current_g = *g_score.get(&current).unwrap_or(&u32::MAX);
        if current == goal {
            return Some(current_g);
        }

        for direction in Direction::PRIORITY {
            if !can_enter(current, direction) {
                continue;
            }
            let neighbor = grid.wrap(current.step(direction));

            let tentative_g = current_g.saturating_add(1);
            let existing_g = g_score.get(&neighbor).copied().unwrap_or(u32::MAX);
            if tentative_g >= existing_g {
                continue;
            }

            if let Some(existing_node) = open_entries.remove(&neighbor) {
                open_set.remove(&existing_node);
            }

            g_score.insert(neighbor, tentative_g);
            let h = manhattan(neighbor, goal);
            let node = OpenNode { f: tentative_g.saturating_add(h), h, y: neighbor.y, x: neighbor.x };
            open_set.insert(node);
            open_entries.insert(neighbor, node);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::movement::player_can_enter;

    /// Outer corridor ring around a sealed central pen.
    fn fixture() -> GridMap {
        let rows = [
            "#######",
            "#pOOOO#",
            "#O#O#O#",
            "#O#=#O#",
            "#O#g#O#",
            "#OO#OO#",
            "#######",
        ];
        GridMap::parse(&rows).expect("fixture must parse")
    }

    #[test]
    fn straight_corridor_distance_is_exact() {
        let grid = fixture();
        let pass = |pos: Pos, direction: Direction| player_can_enter(&grid, pos, direction);
        let distance =
            shortest_distance(&grid, Pos { y: 1, x: 1 }, Pos { y: 1, x: 5 }, &pass);
        assert_eq!(distance, Some(4));
    }

    #[test]
    fn detours_around_walls_are_counted() {
        let grid = fixture();
        let pass = |pos: Pos, direction: Direction| player_can_enter(&grid, pos, direction);
        // (5,3) is a wall, so (5,4) is only reachable down the right side.
        let distance =
            shortest_distance(&grid, Pos { y: 1, x: 1 }, Pos { y: 5, x: 4 }, &pass);
        assert_eq!(distance, Some(9));
    }

    #[test]
    fn gated_tiles_are_unreachable_for_the_player() {
        let grid = fixture();
        let pass = |pos: Pos, direction: Direction| player_can_enter(&grid, pos, direction);
        let distance =
            shortest_distance(&grid, Pos { y: 1, x: 1 }, Pos { y: 4, x: 3 }, &pass);
        assert_eq!(distance, None, "the holding pen is sealed behind the gate");
    }

    #[test]
    fn zero_distance_to_self() {
        let grid = fixture();
        let pass = |pos: Pos, direction: Direction| player_can_enter(&grid, pos, direction);
        assert_eq!(
            shortest_distance(&grid, Pos { y: 3, x: 3 }, Pos { y: 3, x: 3 }, &pass),
            Some(0)
        );
    }
}

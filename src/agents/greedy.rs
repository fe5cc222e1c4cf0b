//! Shortest-path chasing strategy.

use std::collections::{HashSet, VecDeque};

use crate::agents::Agent;
use crate::game::{Cell, Coord, Field, Figure, Move, Player};

/// Walks a breadth-first shortest path each turn: the sheep toward the
/// nearest food, the wolf toward the opposing sheep.
///
/// Deterministic: direction order breaks ties, so identical snapshots
/// always yield identical moves.
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedyAgent;

impl GreedyAgent {
    /// First move of a shortest legal path from the figure's position to a
    /// target cell, or `Move::None` when no target is reachable.
    fn chase(field: &Field, figure: Figure, is_target: impl Fn(Cell) -> bool) -> Move {
        let Some(origin) = field.locate(figure) else {
            return Move::None;
        };

        let mut visited: HashSet<Coord> = HashSet::new();
        visited.insert(origin);
        let mut frontier: VecDeque<(Coord, Move)> = VecDeque::new();

        for mv in Move::DIRECTIONS {
            let next = origin.step(mv);
            if field.is_legal(figure, next) && visited.insert(next) {
                if field.get(next).is_some_and(&is_target) {
                    return mv;
                }
                frontier.push_back((next, mv));
            }
        }

        while let Some((coord, first)) = frontier.pop_front() {
            for mv in Move::DIRECTIONS {
                let next = coord.step(mv);
                if field.is_legal(figure, next) && visited.insert(next) {
                    if field.get(next).is_some_and(&is_target) {
                        return first;
                    }
                    frontier.push_back((next, first));
                }
            }
        }

        Move::None
    }
}

impl Agent for GreedyAgent {
    fn name(&self) -> &str {
        "greedy"
    }

    fn decide_sheep_move(&self, player: Player, field: &Field) -> Move {
        Self::chase(field, Figure::Sheep(player), Cell::is_food)
    }

    fn decide_wolf_move(&self, player: Player, field: &Field) -> Move {
        let prey = Cell::Sheep(player.opponent());
        Self::chase(field, Figure::Wolf(player), move |cell| cell == prey)
    }
}

//! Move resolution.
//!
//! One entry point, [`apply_move`]: given a figure and a requested
//! direction, applies the collision, consumption and elimination rules,
//! mutating the field and the score ledger. Illegal moves are silently
//! treated as a pass, never as an error.

use std::fmt;

use crate::game::{Cell, Field, Figure, Move, Player, Scoreboard};

/// Food award table.
#[derive(Debug, Clone, Copy)]
pub struct Awards {
    /// Points a sheep scores for grass.
    pub grass: u32,
    /// Points a sheep scores for rhubarb.
    pub rhubarb: u32,
}

impl Default for Awards {
    fn default() -> Self {
        Self {
            grass: 1,
            rhubarb: 5,
        }
    }
}

impl Awards {
    /// Points a sheep scores for stepping on the given cell.
    #[must_use]
    pub const fn for_cell(self, cell: Cell) -> u32 {
        match cell {
            Cell::Grass => self.grass,
            Cell::Rhubarb => self.rhubarb,
            _ => 0,
        }
    }
}

/// The first terminal event of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndReason {
    /// A sheep walked into the opposing wolf.
    Suicide(Player),
    /// A wolf caught the opposing sheep; the player is the sheep's owner.
    Eaten(Player),
    /// A player's agent missed the per-move deadline (or faulted).
    Timeout(Player),
}

impl fmt::Display for EndReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EndReason::Suicide(p) => write!(f, "sheep{} suicide", p.number()),
            EndReason::Eaten(p) => write!(f, "sheep{} eaten", p.number()),
            EndReason::Timeout(p) => write!(f, "timeout{}", p.number()),
        }
    }
}

/// Result of resolving one slot's move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepResult {
    /// Whether this step ended the match.
    pub game_over: bool,
    /// Terminal reason: the carried reason on a pass-through, or the new
    /// reason when this step itself was terminal.
    pub reason: Option<EndReason>,
}

impl StepResult {
    /// A non-terminal step that carries the previous reason forward.
    #[must_use]
    pub const fn pass(carried: Option<EndReason>) -> Self {
        Self {
            game_over: false,
            reason: carried,
        }
    }

    /// A terminal step with its reason.
    #[must_use]
    pub const fn terminal(reason: EndReason) -> Self {
        Self {
            game_over: true,
            reason: Some(reason),
        }
    }
}

/// Resolve one requested move.
///
/// Outcome table, checked in order:
/// 1. `Move::None`, an absent figure, or an illegal destination: pass,
///    nothing mutates.
/// 2. Sheep into the opposing wolf: the origin becomes the sheep's dead
///    marker, the sheep's whole score transfers to the opponent, terminal.
/// 3. Sheep into food: the owner scores the award, then relocates.
/// 4. Wolf into the opposing sheep: the destination becomes the sheep's
///    dead marker, the victim's whole score transfers to the wolf's owner,
///    terminal. The wolf stays on its own square.
/// 5. Anything else (wolf eats food without award, empty square): relocate.
///
/// Score transfers are atomic within the call; no partial transfer is ever
/// observable.
pub fn apply_move(
    field: &mut Field,
    scores: &mut Scoreboard,
    awards: Awards,
    figure: Figure,
    mv: Move,
    carried: Option<EndReason>,
) -> StepResult {
    if mv == Move::None {
        return StepResult::pass(carried);
    }

    let Some(origin) = field.locate(figure) else {
        // Frozen or absent figure: nothing to resolve.
        return StepResult::pass(carried);
    };

    let destination = origin.step(mv);
    if !field.is_legal(figure, destination) {
        return StepResult::pass(carried);
    }

    let target = field.get(destination).unwrap_or(Cell::Empty);

    match figure {
        Figure::Sheep(p) => {
            if target == Cell::Wolf(p.opponent()) {
                field.set(origin, Cell::DeadSheep(p));
                scores.transfer_all(p);
                return StepResult::terminal(EndReason::Suicide(p));
            }
            scores.award(p, awards.for_cell(target));
        }
        Figure::Wolf(p) => {
            let victim = p.opponent();
            if target == Cell::Sheep(victim) {
                field.set(destination, Cell::DeadSheep(victim));
                scores.transfer_all(victim);
                return StepResult::terminal(EndReason::Eaten(victim));
            }
            // A wolf removes food without scoring; the relocation below
            // overwrites the food cell.
        }
    }

    field.set(destination, figure.cell());
    field.set(origin, Cell::Empty);
    StepResult::pass(carried)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Coord;

    fn open_field() -> (Field, Scoreboard) {
        // 5x5 open field, sheep1 in the middle
        let mut field = Field::new(5, 5).expect("valid dimensions");
        field.set(Coord::new(2, 2), Cell::Sheep(Player::One));
        field.set(Coord::new(4, 0), Cell::Sheep(Player::Two));
        field.set(Coord::new(0, 0), Cell::Wolf(Player::One));
        field.set(Coord::new(4, 4), Cell::Wolf(Player::Two));
        (field, Scoreboard::new())
    }

    #[test]
    fn test_none_is_a_pass() {
        let (mut field, mut scores) = open_field();
        let before = field.clone();
        let result = apply_move(
            &mut field,
            &mut scores,
            Awards::default(),
            Figure::Sheep(Player::One),
            Move::None,
            None,
        );
        assert!(!result.game_over);
        assert_eq!(field, before);
    }

    #[test]
    fn test_illegal_move_never_mutates() {
        let (mut field, mut scores) = open_field();
        field.set(Coord::new(2, 1), Cell::Fence);
        let before = field.clone();

        let result = apply_move(
            &mut field,
            &mut scores,
            Awards::default(),
            Figure::Sheep(Player::One),
            Move::Left,
            None,
        );
        assert!(!result.game_over);
        assert_eq!(field, before);
        assert_eq!(scores.get(Player::One), 0);
    }

    #[test]
    fn test_out_of_bounds_never_mutates() {
        let (mut field, mut scores) = open_field();
        let before = field.clone();

        let result = apply_move(
            &mut field,
            &mut scores,
            Awards::default(),
            Figure::Wolf(Player::One),
            Move::Up,
            None,
        );
        assert!(!result.game_over);
        assert_eq!(field, before);
    }

    #[test]
    fn test_relocation_moves_marker() {
        let (mut field, mut scores) = open_field();
        let result = apply_move(
            &mut field,
            &mut scores,
            Awards::default(),
            Figure::Sheep(Player::One),
            Move::Right,
            None,
        );
        assert!(!result.game_over);
        assert_eq!(field.get(Coord::new(2, 2)), Some(Cell::Empty));
        assert_eq!(field.get(Coord::new(2, 3)), Some(Cell::Sheep(Player::One)));
    }

    #[test]
    fn test_sheep_eats_grass_and_rhubarb() {
        let (mut field, mut scores) = open_field();
        field.set(Coord::new(2, 3), Cell::Grass);
        field.set(Coord::new(2, 4), Cell::Rhubarb);
        let awards = Awards::default();

        apply_move(
            &mut field,
            &mut scores,
            awards,
            Figure::Sheep(Player::One),
            Move::Right,
            None,
        );
        assert_eq!(scores.get(Player::One), 1);

        apply_move(
            &mut field,
            &mut scores,
            awards,
            Figure::Sheep(Player::One),
            Move::Right,
            None,
        );
        assert_eq!(scores.get(Player::One), 6);
        assert_eq!(field.get(Coord::new(2, 4)), Some(Cell::Sheep(Player::One)));
    }

    #[test]
    fn test_wolf_eats_food_without_award() {
        let (mut field, mut scores) = open_field();
        field.set(Coord::new(0, 1), Cell::Rhubarb);

        apply_move(
            &mut field,
            &mut scores,
            Awards::default(),
            Figure::Wolf(Player::One),
            Move::Right,
            None,
        );
        assert_eq!(scores.get(Player::One), 0);
        assert_eq!(field.get(Coord::new(0, 1)), Some(Cell::Wolf(Player::One)));
    }

    #[test]
    fn test_sheep_suicide_transfers_score() {
        let (mut field, mut scores) = open_field();
        scores.award(Player::One, 7);
        scores.award(Player::Two, 3);
        // Put the opposing wolf next to sheep1.
        field.set(Coord::new(2, 3), Cell::Wolf(Player::Two));
        field.set(Coord::new(4, 4), Cell::Empty);

        let result = apply_move(
            &mut field,
            &mut scores,
            Awards::default(),
            Figure::Sheep(Player::One),
            Move::Right,
            None,
        );

        assert!(result.game_over);
        assert_eq!(result.reason, Some(EndReason::Suicide(Player::One)));
        assert_eq!(format!("{}", EndReason::Suicide(Player::One)), "sheep1 suicide");
        assert_eq!(scores.get(Player::One), 0);
        assert_eq!(scores.get(Player::Two), 10);
        // The sheep does not move onto the wolf's square.
        assert_eq!(
            field.get(Coord::new(2, 2)),
            Some(Cell::DeadSheep(Player::One))
        );
        assert_eq!(field.get(Coord::new(2, 3)), Some(Cell::Wolf(Player::Two)));
    }

    #[test]
    fn test_wolf_eats_sheep_and_stays_in_place() {
        let (mut field, mut scores) = open_field();
        scores.award(Player::One, 2);
        scores.award(Player::Two, 9);
        // Put sheep2 next to wolf1.
        field.set(Coord::new(4, 0), Cell::Empty);
        field.set(Coord::new(0, 1), Cell::Sheep(Player::Two));

        let result = apply_move(
            &mut field,
            &mut scores,
            Awards::default(),
            Figure::Wolf(Player::One),
            Move::Right,
            None,
        );

        assert!(result.game_over);
        assert_eq!(result.reason, Some(EndReason::Eaten(Player::Two)));
        assert_eq!(format!("{}", EndReason::Eaten(Player::Two)), "sheep2 eaten");
        assert_eq!(scores.get(Player::One), 11);
        assert_eq!(scores.get(Player::Two), 0);
        // The wolf keeps its own square; the victim's square holds the marker.
        assert_eq!(field.get(Coord::new(0, 0)), Some(Cell::Wolf(Player::One)));
        assert_eq!(
            field.get(Coord::new(0, 1)),
            Some(Cell::DeadSheep(Player::Two))
        );
        // The eaten sheep must no longer be locatable.
        assert_eq!(field.locate(Figure::Sheep(Player::Two)), None);
    }

    #[test]
    fn test_absent_figure_is_a_pass() {
        let (mut field, mut scores) = open_field();
        field.set(Coord::new(2, 2), Cell::DeadSheep(Player::One));
        let before = field.clone();

        let result = apply_move(
            &mut field,
            &mut scores,
            Awards::default(),
            Figure::Sheep(Player::One),
            Move::Up,
            Some(EndReason::Timeout(Player::Two)),
        );
        assert!(!result.game_over);
        assert_eq!(result.reason, Some(EndReason::Timeout(Player::Two)));
        assert_eq!(field, before);
    }

    #[test]
    fn test_carried_reason_passes_through() {
        let (mut field, mut scores) = open_field();
        let carried = Some(EndReason::Suicide(Player::Two));
        let result = apply_move(
            &mut field,
            &mut scores,
            Awards::default(),
            Figure::Sheep(Player::One),
            Move::Right,
            carried,
        );
        assert!(!result.game_over);
        assert_eq!(result.reason, carried);
    }

    #[test]
    fn test_marker_count_invariant_on_legal_move() {
        let (mut field, mut scores) = open_field();
        apply_move(
            &mut field,
            &mut scores,
            Awards::default(),
            Figure::Wolf(Player::Two),
            Move::Up,
            None,
        );
        let wolves = field
            .iter()
            .filter(|&(_, c)| c == Cell::Wolf(Player::Two))
            .count();
        assert_eq!(wolves, 1);
    }
}

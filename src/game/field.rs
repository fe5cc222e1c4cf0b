//! Field, cells and movement vocabulary.

use std::fmt;

/// One of the two players in a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    /// Player 1 (uppercase markers).
    One,
    /// Player 2 (lowercase markers).
    Two,
}

impl Player {
    /// Both players, in slot order.
    pub const BOTH: [Player; 2] = [Player::One, Player::Two];

    /// The other player.
    #[must_use]
    pub const fn opponent(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Zero-based index, for per-player arrays.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }

    /// One-based player number, as used in reason tags and output.
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }
}

/// One of the four controllable figures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Figure {
    /// A player's sheep.
    Sheep(Player),
    /// A player's wolf.
    Wolf(Player),
}

impl Figure {
    /// All four figures, in round slot order.
    pub const ALL: [Figure; 4] = [
        Figure::Sheep(Player::One),
        Figure::Sheep(Player::Two),
        Figure::Wolf(Player::One),
        Figure::Wolf(Player::Two),
    ];

    /// The player controlling this figure.
    #[must_use]
    pub const fn player(self) -> Player {
        match self {
            Figure::Sheep(p) | Figure::Wolf(p) => p,
        }
    }

    /// The live cell marker for this figure.
    #[must_use]
    pub const fn cell(self) -> Cell {
        match self {
            Figure::Sheep(p) => Cell::Sheep(p),
            Figure::Wolf(p) => Cell::Wolf(p),
        }
    }
}

impl fmt::Display for Figure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Figure::Sheep(p) => write!(f, "sheep{}", p.number()),
            Figure::Wolf(p) => write!(f, "wolf{}", p.number()),
        }
    }
}

/// A single cell value on the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    /// Empty square.
    Empty,
    /// A live sheep.
    Sheep(Player),
    /// A dead sheep marker; the entity is frozen and never moves again.
    DeadSheep(Player),
    /// A live wolf.
    Wolf(Player),
    /// Grass, worth the small food award.
    Grass,
    /// Rhubarb, worth the large food award.
    Rhubarb,
    /// Permanent fence; never mutates.
    Fence,
}

impl Cell {
    /// The map-file character for this cell.
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Sheep(Player::One) => 'S',
            Cell::Sheep(Player::Two) => 's',
            Cell::DeadSheep(Player::One) => 'U',
            Cell::DeadSheep(Player::Two) => 'u',
            Cell::Wolf(Player::One) => 'W',
            Cell::Wolf(Player::Two) => 'w',
            Cell::Grass => 'g',
            Cell::Rhubarb => 'r',
            Cell::Fence => '#',
        }
    }

    /// Parses a map-file character, or `None` for characters outside the
    /// cell alphabet.
    #[must_use]
    pub const fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' => Some(Cell::Empty),
            'S' => Some(Cell::Sheep(Player::One)),
            's' => Some(Cell::Sheep(Player::Two)),
            'U' => Some(Cell::DeadSheep(Player::One)),
            'u' => Some(Cell::DeadSheep(Player::Two)),
            'W' => Some(Cell::Wolf(Player::One)),
            'w' => Some(Cell::Wolf(Player::Two)),
            'g' => Some(Cell::Grass),
            'r' => Some(Cell::Rhubarb),
            '#' => Some(Cell::Fence),
            _ => None,
        }
    }

    /// Check if this cell holds food (grass or rhubarb).
    #[must_use]
    pub const fn is_food(self) -> bool {
        matches!(self, Cell::Grass | Cell::Rhubarb)
    }
}

/// A requested move direction. `None` is the explicit pass sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Move {
    /// Do not move.
    #[default]
    None,
    /// One row up.
    Up,
    /// One row down.
    Down,
    /// One column left.
    Left,
    /// One column right.
    Right,
}

impl Move {
    /// The four actual directions, excluding the pass sentinel.
    pub const DIRECTIONS: [Move; 4] = [Move::Up, Move::Down, Move::Left, Move::Right];
}

/// A coordinate on the field.
///
/// Signed so that destination arithmetic can step off the field; legality
/// checking rejects out-of-bounds coordinates afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    /// Row (0 at the top).
    pub row: i16,
    /// Column (0 at the left).
    pub col: i16,
}

impl Coord {
    /// Create a new coordinate.
    #[must_use]
    pub const fn new(row: i16, col: i16) -> Self {
        Self { row, col }
    }

    /// Pure destination arithmetic for a move from this coordinate.
    ///
    /// `Move::None` returns the coordinate unchanged. The result may lie
    /// outside any field.
    #[must_use]
    pub const fn step(self, mv: Move) -> Coord {
        match mv {
            Move::None => self,
            Move::Up => Coord::new(self.row - 1, self.col),
            Move::Down => Coord::new(self.row + 1, self.col),
            Move::Left => Coord::new(self.row, self.col - 1),
            Move::Right => Coord::new(self.row, self.col + 1),
        }
    }
}

/// The game field: a fixed-size 2D array of cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// Width in cells.
    width: u16,
    /// Height in cells.
    height: u16,
    /// Cells stored in row-major order.
    cells: Vec<Cell>,
}

impl Field {
    /// Create a new field filled with empty cells.
    ///
    /// Returns `None` if width or height is zero or exceeds the signed
    /// coordinate range.
    #[must_use]
    pub fn new(width: u16, height: u16) -> Option<Self> {
        let limit = i16::MAX.unsigned_abs();
        if width == 0 || height == 0 || width > limit || height > limit {
            return None;
        }

        let size = usize::from(width) * usize::from(height);
        let cells = vec![Cell::Empty; size];

        Some(Self {
            width,
            height,
            cells,
        })
    }

    /// Get the width of the field.
    #[must_use]
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Get the height of the field.
    #[must_use]
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// Check if a coordinate is within the field bounds.
    #[must_use]
    pub fn in_bounds(&self, coord: Coord) -> bool {
        self.index(coord).is_some()
    }

    /// Convert a coordinate to an index into the cells array.
    fn index(&self, coord: Coord) -> Option<usize> {
        if coord.row < 0 || coord.col < 0 {
            return None;
        }
        let row = coord.row.unsigned_abs();
        let col = coord.col.unsigned_abs();
        if row >= self.height || col >= self.width {
            return None;
        }
        Some(usize::from(row) * usize::from(self.width) + usize::from(col))
    }

    /// Get the cell at the given coordinate.
    #[must_use]
    pub fn get(&self, coord: Coord) -> Option<Cell> {
        self.index(coord).map(|idx| self.cells[idx])
    }

    /// Set the cell at the given coordinate.
    ///
    /// Returns `false` if the coordinate is out of bounds.
    pub fn set(&mut self, coord: Coord, cell: Cell) -> bool {
        if let Some(idx) = self.index(coord) {
            self.cells[idx] = cell;
            true
        } else {
            false
        }
    }

    /// The unique position of a figure's live marker.
    ///
    /// Returns `None` if the figure has no live marker (for example after
    /// its sheep died); callers must not resolve moves for absent figures.
    #[must_use]
    pub fn locate(&self, figure: Figure) -> Option<Coord> {
        let marker = figure.cell();
        self.iter()
            .find(|&(_, cell)| cell == marker)
            .map(|(coord, _)| coord)
    }

    /// Rule-book legality of a figure entering the given coordinate.
    ///
    /// False when the target is out of bounds, a fence, or blocked:
    /// a wolf may not enter the opposing wolf's or its own sheep's square,
    /// a sheep may not enter its own wolf's or the opposing sheep's square.
    /// A wolf entering the opposing sheep's square is an eat, and a sheep
    /// entering the opposing wolf's square is a suicide; both are legal.
    #[must_use]
    pub fn is_legal(&self, figure: Figure, coord: Coord) -> bool {
        let Some(target) = self.get(coord) else {
            return false;
        };

        if target == Cell::Fence {
            return false;
        }

        match figure {
            Figure::Wolf(p) => {
                target != Cell::Wolf(p.opponent()) && target != Cell::Sheep(p)
            }
            Figure::Sheep(p) => {
                target != Cell::Wolf(p) && target != Cell::Sheep(p.opponent())
            }
        }
    }

    /// Full independent copy for safe hand-off to agent decision functions.
    #[must_use]
    pub fn snapshot(&self) -> Field {
        self.clone()
    }

    /// Iterate over all coordinates and cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, Cell)> {
        let width = i32::from(self.width);
        self.cells.iter().enumerate().map(move |(idx, &cell)| {
            let idx = i32::try_from(idx).unwrap_or(i32::MAX);
            #[allow(clippy::cast_possible_truncation)]
            let coord = Coord::new((idx / width) as i16, (idx % width) as i16);
            (coord, cell)
        })
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..i16::try_from(self.height).unwrap_or(i16::MAX) {
            for col in 0..i16::try_from(self.width).unwrap_or(i16::MAX) {
                let cell = self.get(Coord::new(row, col)).unwrap_or(Cell::Empty);
                write!(f, "{}", cell.to_char())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

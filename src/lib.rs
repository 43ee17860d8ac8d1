//! # Goban TUI
//!
//! A terminal Go board view. The crate keeps a per-cell visual grid in sync
//! with an external rules engine after every play, undo, or new game, tracks
//! the most recent move with a crosshair, supports interactive dead-stone
//! marking during scoring, and renders analysis overlays (background tints,
//! influence heat maps, text labels, markup) pushed in by the caller.
//!
//! ## Modules
//! - [`board`] - The board view, its cell widgets, coordinate mapping, and
//!   click routing
//! - [`engine`] - A minimal bundled rules engine used by the binary and tests
//! - [`metrics`] - Environment metrics for the preferred cell size
//! - [`app`] / [`tui`] - The interactive terminal session
//!
//! ## Board view contract
//! All game knowledge lives behind the [`GoEngine`] trait; the view never
//! inspects board state except through it. Display state flows one way: the
//! caller (or the engine, after a move) writes into the view, and the view
//! writes into its cells.

pub mod app;
pub mod board;
pub mod engine;
pub mod metrics;
pub mod tui;

/// A board coordinate. `x` runs left to right, `y` runs bottom to top, both
/// 0-indexed and less than the engine's board size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: usize,
    pub y: usize,
}

impl Point {
    pub fn new(x: usize, y: usize) -> Self {
        Point { x, y }
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

/// The state of a single board point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Color {
    #[default]
    Empty,
    Black,
    White,
}

impl Color {
    /// The opposing stone color. Empty is its own opponent.
    pub fn opponent(self) -> Color {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
            Color::Empty => Color::Empty,
        }
    }
}

/// A move as stored in the engine's history: a stone color and the point it
/// was placed on, or no point for a pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub point: Option<Point>,
    pub color: Color,
}

impl Move {
    /// A stone placement.
    pub fn place(point: Point, color: Color) -> Self {
        Move {
            point: Some(point),
            color,
        }
    }

    /// A pass by the given color.
    pub fn pass(color: Color) -> Self {
        Move { point: None, color }
    }
}

/// The rules-engine contract consumed by the board view.
///
/// The view mediates every read from and write to the engine; it never keeps
/// game state of its own beyond what it displays. Implementations own move
/// legality, capture logic, group connectivity, scoring, and move history.
pub trait GoEngine {
    /// Board side length.
    fn size(&self) -> usize;

    /// Number of points on the board.
    fn num_points(&self) -> usize {
        self.size() * self.size()
    }

    /// Enumeration of board points by linear index, `0..num_points()`.
    fn point_at(&self, index: usize) -> Point {
        Point::new(index % self.size(), index / self.size())
    }

    /// The stone (or lack of one) currently at `p`.
    fn color_at(&self, p: Point) -> Color;

    /// Whether `p` is a standard handicap-stone location for this size.
    fn is_handicap_point(&self, p: Point) -> bool;

    /// Reset to an empty board with no history.
    fn new_game(&mut self);

    /// Apply a move, performing any captures it causes.
    fn play(&mut self, m: Move);

    /// Roll back the most recent move. No-op on an empty history.
    fn undo(&mut self);

    /// Number of moves played so far.
    fn move_number(&self) -> usize;

    /// The move at history index `index`, `0..move_number()`.
    fn move_at(&self, index: usize) -> Move;

    /// The maximal connected group of `color` stones containing `p`.
    fn group_at(&self, p: Point, color: Color) -> Vec<Point>;

    /// Whether the stone at `p` is currently marked dead for scoring.
    fn is_dead(&self, p: Point) -> bool;

    /// Mark or unmark the stone at `p` as dead for scoring.
    fn set_dead(&mut self, p: Point, dead: bool);

    /// Recompute the score from the current position and dead marks.
    fn calc_score(&mut self);

    /// The owner of `p` per the most recent `calc_score`, or Empty if
    /// neutral.
    fn score_color_at(&self, p: Point) -> Color;
}

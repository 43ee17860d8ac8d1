//! # Board View Module
//!
//! The display side of the crate: a grid of cell widgets kept in sync with
//! the rules engine, plus the pieces it is built from.
//!
//! - [`view`] - The orchestrator owning the cell grid and the engine handle
//! - [`field`] - A single cell's display state and terminal appearance
//! - [`coords`] - Translation between model points and the visual grid,
//!   including column-letter labels and click hit-testing
//! - [`click`] - Single-listener forwarding of cell clicks
//! - [`theme`] - Styles and the overlay color-token table

pub mod click;
pub mod coords;
pub mod field;
pub mod theme;
pub mod view;

pub use click::{ClickRouter, FieldListener};
pub use coords::GridLayout;
pub use field::Field;
pub use theme::BoardTheme;
pub use view::{BoardView, PageFormat, PrintOutcome, CELL_WIDTH};

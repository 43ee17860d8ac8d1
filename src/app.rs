//! Application state for the interactive session.
//!
//! Wires the board view to the bundled engine: clicks arrive from the
//! terminal loop, flow through the view's click router into a channel, and
//! are applied here as moves or dead-stone toggles depending on the mode.

use std::sync::mpsc::{self, Receiver};

use ratatui::layout::Rect;

use crate::board::BoardView;
use crate::engine::LocalEngine;
use crate::{Color, GoEngine, Move, Point};

/// What a board click means right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Clicks place stones, alternating colors.
    Play,
    /// Clicks toggle the life status of the clicked group.
    Score,
}

pub struct App {
    pub view: BoardView<LocalEngine>,
    pub mode: Mode,
    pub status: String,
    pub should_quit: bool,
    /// Screen area the board was last drawn into, for click hit-testing.
    pub board_area: Rect,
    clicks: Receiver<Point>,
}

impl App {
    pub fn new(size: usize) -> Self {
        let mut view = BoardView::new(LocalEngine::new(size));
        let (tx, rx) = mpsc::channel();
        view.set_listener(Box::new(move |p| {
            let _ = tx.send(p);
        }));
        let mut app = App {
            view,
            mode: Mode::Play,
            status: String::new(),
            should_quit: false,
            board_area: Rect::default(),
            clicks: rx,
        };
        app.update_status();
        app
    }

    /// The color to move, derived from the move count.
    pub fn to_move(&self) -> Color {
        if self.view.engine().move_number() % 2 == 0 {
            Color::Black
        } else {
            Color::White
        }
    }

    /// Route a raw terminal click through the board's click router and apply
    /// whatever points it forwarded.
    pub fn handle_click(&mut self, column: u16, row: u16) {
        let area = self.board_area;
        if column < area.x
            || row < area.y
            || column >= area.x + area.width
            || row >= area.y + area.height
        {
            return;
        }
        self.view.handle_click(column - area.x, row - area.y);
        while let Ok(p) = self.clicks.try_recv() {
            self.on_field_clicked(p);
        }
    }

    fn on_field_clicked(&mut self, p: Point) {
        match self.mode {
            Mode::Play => {
                if self.view.engine().color_at(p) == Color::Empty {
                    let color = self.to_move();
                    self.view.play(Move::place(p, color));
                }
            }
            Mode::Score => self.view.score_set_dead(p),
        }
        self.update_status();
    }

    pub fn new_game(&mut self) {
        self.view.new_game();
        self.mode = Mode::Play;
        self.update_status();
    }

    pub fn undo(&mut self) {
        self.view.undo();
        self.update_status();
    }

    pub fn pass(&mut self) {
        let color = self.to_move();
        self.view.play(Move::pass(color));
        self.update_status();
    }

    /// Switch between playing and scoring. Leaving scoring clears the score
    /// overlays and dead-stone crosshairs.
    pub fn toggle_score_mode(&mut self) {
        self.mode = match self.mode {
            Mode::Play => Mode::Score,
            Mode::Score => {
                self.view.clear_all();
                Mode::Play
            }
        };
        self.update_status();
    }

    fn update_status(&mut self) {
        let moves = self.view.engine().move_number();
        self.status = match self.mode {
            Mode::Play => format!(
                "move {}  {:?} to play  |  click: place  n: new game  u: undo  p: pass  s: score  q: quit",
                moves + 1,
                self.to_move()
            ),
            Mode::Score => format!(
                "scoring after {} moves  |  click: toggle dead group  s: back to play  q: quit",
                moves
            ),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn click_board_point(app: &mut App, p: Point) {
        let (row, col) = app.view.layout().grid_pos(p);
        let x = app.board_area.x + col as u16 * crate::board::CELL_WIDTH;
        let y = app.board_area.y + row as u16;
        app.handle_click(x, y);
    }

    #[test]
    fn test_click_places_alternating_stones() {
        let mut app = App::new(9);
        app.board_area = Rect::new(0, 0, 22, 11);
        click_board_point(&mut app, Point::new(2, 2));
        click_board_point(&mut app, Point::new(3, 3));
        assert_eq!(app.view.engine().color_at(Point::new(2, 2)), Color::Black);
        assert_eq!(app.view.engine().color_at(Point::new(3, 3)), Color::White);
    }

    #[test]
    fn test_click_on_occupied_point_ignored() {
        let mut app = App::new(9);
        app.board_area = Rect::new(0, 0, 22, 11);
        click_board_point(&mut app, Point::new(2, 2));
        click_board_point(&mut app, Point::new(2, 2));
        assert_eq!(app.view.engine().move_number(), 1);
        assert_eq!(app.to_move(), Color::White);
    }

    #[test]
    fn test_click_outside_board_ignored() {
        let mut app = App::new(9);
        app.board_area = Rect::new(5, 5, 22, 11);
        app.handle_click(0, 0);
        assert_eq!(app.view.engine().move_number(), 0);
    }

    #[test]
    fn test_score_mode_click_marks_group() {
        let mut app = App::new(9);
        app.board_area = Rect::new(0, 0, 22, 11);
        click_board_point(&mut app, Point::new(4, 4));
        app.toggle_score_mode();
        click_board_point(&mut app, Point::new(4, 4));
        assert!(app.view.field(Point::new(4, 4)).crosshair());
        assert!(app.view.engine().is_dead(Point::new(4, 4)));
    }

    #[test]
    fn test_leaving_score_mode_clears_overlays() {
        let mut app = App::new(9);
        app.board_area = Rect::new(0, 0, 22, 11);
        click_board_point(&mut app, Point::new(4, 4));
        app.toggle_score_mode();
        click_board_point(&mut app, Point::new(4, 4));
        app.toggle_score_mode();
        assert_eq!(app.mode, Mode::Play);
        assert!(app.view.field(Point::new(4, 4)).is_cleared());
        // The stone itself is still displayed.
        assert_eq!(app.view.field(Point::new(4, 4)).color(), Color::Black);
    }

    #[test]
    fn test_pass_alternates_color() {
        let mut app = App::new(9);
        assert_eq!(app.to_move(), Color::Black);
        app.pass();
        assert_eq!(app.to_move(), Color::White);
        app.undo();
        assert_eq!(app.to_move(), Color::Black);
    }
}

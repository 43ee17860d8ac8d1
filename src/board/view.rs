//! The board view orchestrator.
//!
//! Owns one [`Field`] per board point and mediates every read from and write
//! to the rules engine. After each play, undo, or new game the view re-reads
//! the color of every point and pushes it into the matching field, then
//! recomputes the last-move crosshair. A full resync is deliberate: captures
//! can change arbitrarily many cells in one move, and the board is small
//! enough that a diff would buy nothing but bugs.
//!
//! The crosshair is a single shared visual channel per cell. Setting it
//! through [`BoardView::set_crosshair`] (directly or via dead-stone marking)
//! cancels the tracked last-move highlight until the next play, undo, or new
//! game re-establishes it.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Color as TermColor;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::board::click::{ClickRouter, FieldListener};
use crate::board::coords::GridLayout;
use crate::board::field::Field;
use crate::board::theme::BoardTheme;
use crate::metrics::{preferred_field_size, EnvMetrics, TerminalMetrics};
use crate::{Color, GoEngine, Move, Point};

/// Width in characters of one grid cell at the natural scale.
pub const CELL_WIDTH: u16 = 2;

/// Imageable area of a print target page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageFormat {
    pub area: Rect,
}

/// Result of rendering one page of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrintOutcome {
    Rendered,
    NoSuchPage,
}

/// The display-synchronization engine: a grid of fields, the last-move
/// tracker, and the click router, wrapped around a rules engine.
pub struct BoardView<E> {
    engine: E,
    layout: GridLayout,
    fields: Vec<Vec<Field>>,
    last_move: Option<Point>,
    router: ClickRouter,
    theme: BoardTheme,
    preferred_field_size: u16,
}

impl<E: GoEngine> BoardView<E> {
    /// Build a view over `engine` using terminal-derived metrics for the
    /// preferred cell size.
    pub fn new(engine: E) -> Self {
        Self::with_metrics(engine, &TerminalMetrics)
    }

    /// Build a view with injected environment metrics.
    pub fn with_metrics(engine: E, metrics: &dyn EnvMetrics) -> Self {
        let layout = GridLayout::new(engine.size());
        let mut view = BoardView {
            engine,
            layout,
            fields: Vec::new(),
            last_move: None,
            router: ClickRouter::new(),
            theme: BoardTheme::default(),
            preferred_field_size: preferred_field_size(metrics),
        };
        view.init_size();
        view
    }

    /// Read access to the rules engine.
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Rebuild the field grid from the engine's current size and start a new
    /// game. Discards all prior display state, including the last-move
    /// tracker. Each field learns once, here, whether it sits on a handicap
    /// point.
    pub fn init_size(&mut self) {
        self.last_move = None;
        self.layout = GridLayout::new(self.engine.size());
        let size = self.engine.size();
        self.fields = (0..size)
            .map(|x| {
                (0..size)
                    .map(|y| Field::new(self.engine.is_handicap_point(Point::new(x, y))))
                    .collect()
            })
            .collect();
        self.new_game();
    }

    /// The display-size hint for one cell, computed once at construction.
    pub fn preferred_field_size(&self) -> u16 {
        self.preferred_field_size
    }

    /// The coordinate mapping in use.
    pub fn layout(&self) -> &GridLayout {
        &self.layout
    }

    /// The field displaying `p`. Off-board points are a programming error.
    pub fn field(&self, p: Point) -> &Field {
        let size = self.layout.size();
        assert!(p.x < size && p.y < size, "point {p} off board");
        &self.fields[p.x][p.y]
    }

    fn field_mut(&mut self, p: Point) -> &mut Field {
        let size = self.layout.size();
        assert!(p.x < size && p.y < size, "point {p} off board");
        &mut self.fields[p.x][p.y]
    }

    /// Remove the influence value shown at `p`.
    pub fn clear_influence(&mut self, p: Point) {
        self.field_mut(p).clear_influence();
    }

    /// Set or clear the background tint at `p`.
    pub fn set_field_background(&mut self, p: Point, color: Option<TermColor>) {
        self.field_mut(p).set_background(color);
    }

    /// Show an influence value at `p`.
    pub fn set_influence(&mut self, p: Point, value: f64) {
        self.field_mut(p).set_influence(value);
    }

    /// Set or clear the markup flag at `p`.
    pub fn set_markup(&mut self, p: Point, markup: bool) {
        self.field_mut(p).set_markup(markup);
    }

    /// Set the text label at `p`. An empty string clears it.
    pub fn set_string(&mut self, p: Point, s: impl Into<String>) {
        self.field_mut(p).set_label(s);
    }

    /// Set or clear the crosshair at `p`.
    ///
    /// Any call through here first cancels the tracked last-move highlight,
    /// whichever cell it is on. The next play, undo, or new game restores
    /// it.
    pub fn set_crosshair(&mut self, p: Point, crosshair: bool) {
        if let Some(last) = self.last_move.take() {
            self.field_mut(last).set_crosshair(false);
        }
        self.field_mut(p).set_crosshair(crosshair);
    }

    /// Clear influence, background, markup, and text on every point, then
    /// clear every crosshair. Used before drawing a fresh overlay set.
    pub fn clear_all(&mut self) {
        for i in 0..self.engine.num_points() {
            let p = self.engine.point_at(i);
            self.clear_influence(p);
            self.set_field_background(p, None);
            self.set_markup(p, false);
            self.set_string(p, "");
        }
        self.clear_all_crosshair();
    }

    /// Clear the crosshair on every point.
    pub fn clear_all_crosshair(&mut self) {
        for i in 0..self.engine.num_points() {
            let p = self.engine.point_at(i);
            self.set_crosshair(p, false);
        }
    }

    /// Tint every cell from a per-point grid of color-name tokens, indexed
    /// `[x][y]`. Unrecognized tokens clear the tint rather than failing.
    pub fn show_color_board(&mut self, tokens: &[Vec<String>]) {
        for i in 0..self.engine.num_points() {
            let p = self.engine.point_at(i);
            let color = self.theme.overlay_color(&tokens[p.x][p.y]);
            self.set_field_background(p, color);
        }
    }

    /// Show a per-point grid of numeric values, indexed `[x][y]`, scaled by
    /// `scale`.
    pub fn show_double_board(&mut self, values: &[Vec<f64>], scale: f64) {
        for i in 0..self.engine.num_points() {
            let p = self.engine.point_at(i);
            let value = values[p.x][p.y] * scale;
            self.set_influence(p, value);
        }
    }

    /// Show a per-point grid of text labels, indexed `[x][y]`.
    pub fn show_string_board(&mut self, strings: &[Vec<String>]) {
        for i in 0..self.engine.num_points() {
            let p = self.engine.point_at(i);
            let s = strings[p.x][p.y].clone();
            self.set_string(p, s);
        }
    }

    /// Mark every present point in the list. `None` entries are skipped.
    pub fn show_point_list(&mut self, points: &[Option<Point>]) {
        for p in points.iter().flatten() {
            self.set_markup(*p, true);
        }
    }

    /// Reset the engine to its initial state and resynchronize the display.
    pub fn new_game(&mut self) {
        self.engine.new_game();
        self.update_fields();
        self.draw_last_move();
    }

    /// Submit a move to the engine and resynchronize the display.
    pub fn play(&mut self, m: Move) {
        self.engine.play(m);
        self.update_fields();
        self.draw_last_move();
    }

    /// Roll the engine back one move and resynchronize the display.
    pub fn undo(&mut self) {
        self.engine.undo();
        self.update_fields();
        self.draw_last_move();
    }

    /// Toggle the life status of the group at `p` during scoring.
    ///
    /// Clicking an empty point does nothing. Otherwise the whole connected
    /// group flips together: the new status is the inverse of the first
    /// group member's current one. Dead stones are shown crosshaired, and
    /// the score display is recomputed afterwards.
    pub fn score_set_dead(&mut self, p: Point) {
        let color = self.engine.color_at(p);
        if color == Color::Empty {
            return;
        }
        let stones = self.engine.group_at(p, color);
        let dead = !self.engine.is_dead(stones[0]);
        for &stone in &stones {
            self.engine.set_dead(stone, dead);
            self.set_crosshair(stone, dead);
        }
        self.show_score();
    }

    fn show_score(&mut self) {
        self.engine.calc_score();
        for i in 0..self.engine.num_points() {
            let p = self.engine.point_at(i);
            let value = match self.engine.score_color_at(p) {
                Color::Black => 1.0,
                Color::White => -1.0,
                Color::Empty => 0.0,
            };
            self.set_influence(p, value);
        }
    }

    fn update_fields(&mut self) {
        for i in 0..self.engine.num_points() {
            let p = self.engine.point_at(i);
            let color = self.engine.color_at(p);
            self.field_mut(p).set_color(color);
        }
    }

    fn draw_last_move(&mut self) {
        if let Some(last) = self.last_move.take() {
            self.field_mut(last).set_crosshair(false);
        }
        let move_number = self.engine.move_number();
        if move_number > 0 {
            let m = self.engine.move_at(move_number - 1);
            if let Some(p) = m.point {
                if m.color != Color::Empty {
                    self.fields[p.x][p.y].set_crosshair(true);
                    self.last_move = Some(p);
                }
            }
        }
    }

    /// Register the click listener, replacing any previous one.
    pub fn set_listener(&mut self, listener: FieldListener) {
        self.router.set_listener(listener);
    }

    /// Remove the click listener.
    pub fn clear_listener(&mut self) {
        self.router.clear_listener();
    }

    /// Forward a cell click to the registered listener, if any.
    pub fn field_clicked(&mut self, p: Point) {
        self.router.field_clicked(p);
    }

    /// Route a terminal click, relative to the board's top-left corner, to
    /// the listener. Clicks on labels or outside the grid are dropped.
    pub fn handle_click(&mut self, local_x: u16, local_y: u16) {
        if let Some(p) = self.layout.hit_test(local_x, local_y, CELL_WIDTH) {
            #[cfg(debug_assertions)]
            eprintln!("click ({local_x},{local_y}) -> {p}");
            self.field_clicked(p);
        }
    }

    /// Terminal footprint of the full grid at the natural scale.
    pub fn required_size(&self) -> (u16, u16) {
        let dim = self.layout.grid_dim() as u16;
        (dim * CELL_WIDTH, dim)
    }

    /// Render the board into `area`, anchored at its top-left corner.
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let paragraph = Paragraph::new(self.board_lines(CELL_WIDTH as usize));
        frame.render_widget(paragraph, area);
    }

    /// Render the board as page `page` of a print target, scaled to fit the
    /// imageable area and centered within it.
    ///
    /// The board always fits on one page; any page index past the first
    /// reports [`PrintOutcome::NoSuchPage`].
    pub fn print(&self, buf: &mut Buffer, format: &PageFormat, page: usize) -> PrintOutcome {
        if page >= 1 {
            return PrintOutcome::NoSuchPage;
        }
        let dim = self.layout.grid_dim() as u16;
        let (natural_width, height) = self.required_size();
        let cell_width = if natural_width <= format.area.width {
            CELL_WIDTH
        } else {
            1
        };
        let width = dim * cell_width;
        let x = format.area.x + format.area.width.saturating_sub(width) / 2;
        let y = format.area.y + format.area.height.saturating_sub(height) / 2;
        for (i, line) in self.board_lines(cell_width as usize).iter().enumerate() {
            let line_y = y + i as u16;
            if line_y >= format.area.y + format.area.height {
                break;
            }
            buf.set_line(x, line_y, line, format.area.width.saturating_sub(x - format.area.x));
        }
        PrintOutcome::Rendered
    }

    fn board_lines(&self, cell_width: usize) -> Vec<Line<'static>> {
        let size = self.layout.size();
        let mut lines = Vec::with_capacity(self.layout.grid_dim());
        lines.push(self.label_line(cell_width));
        for y in (0..size).rev() {
            let mut spans = Vec::with_capacity(self.layout.grid_dim());
            let row_label = pad(&self.layout.row_label(y), cell_width);
            spans.push(Span::styled(row_label.clone(), self.theme.label_style()));
            for x in 0..size {
                let (symbol, style) = self.fields[x][y].appearance(&self.theme);
                spans.push(Span::styled(pad(&symbol, cell_width), style));
            }
            spans.push(Span::styled(row_label, self.theme.label_style()));
            lines.push(Line::from(spans));
        }
        lines.push(self.label_line(cell_width));
        lines
    }

    fn label_line(&self, cell_width: usize) -> Line<'static> {
        let size = self.layout.size();
        let mut spans = Vec::with_capacity(self.layout.grid_dim());
        spans.push(Span::raw(" ".repeat(cell_width)));
        for x in 0..size {
            let label = self.layout.column_label(x).to_string();
            spans.push(Span::styled(pad(&label, cell_width), self.theme.label_style()));
        }
        spans.push(Span::raw(" ".repeat(cell_width)));
        Line::from(spans)
    }
}

/// Pad or truncate a cell symbol to exactly `width` characters.
fn pad(s: &str, width: usize) -> String {
    let mut out: String = s.chars().take(width).collect();
    while out.chars().count() < width {
        out.push(' ');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::LocalEngine;

    fn view(size: usize) -> BoardView<LocalEngine> {
        BoardView::new(LocalEngine::new(size))
    }

    fn all_points(view: &BoardView<LocalEngine>) -> Vec<Point> {
        (0..view.engine().num_points())
            .map(|i| view.engine().point_at(i))
            .collect()
    }

    #[test]
    fn test_play_updates_display() {
        let mut view = view(9);
        let p = Point::new(4, 4);
        view.play(Move::place(p, Color::Black));
        assert_eq!(view.field(p).color(), Color::Black);
        assert!(view.field(p).crosshair());
    }

    #[test]
    fn test_show_double_board_applies_scale() {
        let mut view = view(5);
        let values = vec![vec![0.5; 5]; 5];
        view.show_double_board(&values, 2.0);
        assert_eq!(view.field(Point::new(3, 1)).influence(), Some(1.0));
    }

    #[test]
    fn test_show_point_list_skips_none() {
        let mut view = view(5);
        let a = Point::new(1, 1);
        let b = Point::new(2, 3);
        view.show_point_list(&[Some(a), None, Some(b)]);
        assert!(view.field(a).markup());
        assert!(view.field(b).markup());
        assert!(!view.field(Point::new(0, 0)).markup());
    }

    #[test]
    fn test_clear_all_resets_overlays() {
        let mut view = view(5);
        for p in all_points(&view) {
            view.set_influence(p, 0.3);
            view.set_field_background(p, Some(TermColor::Red));
            view.set_markup(p, true);
            view.set_string(p, "x");
        }
        view.set_crosshair(Point::new(2, 2), true);
        view.clear_all();
        for p in all_points(&view) {
            assert!(view.field(p).is_cleared(), "point {p}");
        }
    }

    #[test]
    fn test_init_size_rebuilds_grid() {
        let mut view = view(9);
        view.play(Move::place(Point::new(0, 0), Color::Black));
        view.set_markup(Point::new(3, 3), true);
        view.init_size();
        for p in all_points(&view) {
            assert!(view.field(p).is_cleared(), "point {p}");
            assert_eq!(view.field(p).color(), Color::Empty);
        }
    }

    #[test]
    fn test_handicap_flags_set_at_construction() {
        let view = view(9);
        assert!(view.field(Point::new(4, 4)).is_handicap_point());
        assert!(!view.field(Point::new(0, 0)).is_handicap_point());
    }

    #[test]
    #[should_panic(expected = "off board")]
    fn test_off_board_point_panics() {
        let mut view = view(9);
        view.set_markup(Point::new(9, 0), true);
    }

    #[test]
    fn test_print_single_page_only() {
        let view = view(5);
        let area = Rect::new(0, 0, 40, 20);
        let mut buf = Buffer::empty(area);
        assert_eq!(
            view.print(&mut buf, &PageFormat { area }, 0),
            PrintOutcome::Rendered
        );
        assert_eq!(
            view.print(&mut buf, &PageFormat { area }, 1),
            PrintOutcome::NoSuchPage
        );
    }

    #[test]
    fn test_print_centers_board() {
        let view = view(5);
        let area = Rect::new(0, 0, 40, 20);
        let mut buf = Buffer::empty(area);
        view.print(&mut buf, &PageFormat { area }, 0);
        // Grid is 7 cells of width 2 = 14 columns, centered in 40.
        let left = (40 - 14) / 2;
        let top = (20 - 7) / 2;
        // Top-left label corner is blank, first column letter follows.
        assert_eq!(buf.get(left as u16 + 2, top as u16).symbol(), "A");
    }

    #[test]
    fn test_print_scales_down_when_narrow() {
        let view = view(9);
        // Natural width is (9 + 2) * 2 = 22; force the 1-wide fallback.
        let area = Rect::new(0, 0, 14, 14);
        let mut buf = Buffer::empty(area);
        assert_eq!(
            view.print(&mut buf, &PageFormat { area }, 0),
            PrintOutcome::Rendered
        );
        let left = (14 - 11) / 2;
        let top = (14 - 11) / 2;
        assert_eq!(buf.get(left as u16 + 1, top as u16).symbol(), "A");
    }

    #[test]
    fn test_required_size() {
        let view = view(9);
        assert_eq!(view.required_size(), (22, 11));
    }
}

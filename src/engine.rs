//! A minimal bundled rules engine.
//!
//! Enough Go to drive the board view interactively and in tests: stone
//! placement with capture, pass, undo through a move record history, flood
//! group queries, dead-stone flags, and a naive area score. It is not a
//! rules reference; anything beyond what the view consumes is out of scope.

use crate::{Color, GoEngine, Move, Point};

/// One history entry: the move and the stones it captured, so undo can
/// restore them.
#[derive(Debug, Clone)]
struct Record {
    mv: Move,
    captured: Vec<(Point, Color)>,
}

/// In-process rules engine over a square board.
pub struct LocalEngine {
    size: usize,
    board: Vec<Color>,
    history: Vec<Record>,
    dead: Vec<bool>,
    score: Vec<Color>,
}

impl LocalEngine {
    pub fn new(size: usize) -> Self {
        assert!((2..=25).contains(&size), "unsupported board size {size}");
        let points = size * size;
        LocalEngine {
            size,
            board: vec![Color::Empty; points],
            history: Vec::new(),
            dead: vec![false; points],
            score: vec![Color::Empty; points],
        }
    }

    fn index(&self, p: Point) -> usize {
        assert!(p.x < self.size && p.y < self.size, "point {p} off board");
        p.y * self.size + p.x
    }

    fn neighbors(&self, p: Point) -> Vec<Point> {
        let mut out = Vec::with_capacity(4);
        if p.x > 0 {
            out.push(Point::new(p.x - 1, p.y));
        }
        if p.x + 1 < self.size {
            out.push(Point::new(p.x + 1, p.y));
        }
        if p.y > 0 {
            out.push(Point::new(p.x, p.y - 1));
        }
        if p.y + 1 < self.size {
            out.push(Point::new(p.x, p.y + 1));
        }
        out
    }

    /// Flood the group of `color` stones containing `p`, reporting whether
    /// it has at least one liberty.
    fn flood_group(&self, p: Point, color: Color) -> (Vec<Point>, bool) {
        let mut stones = Vec::new();
        let mut visited = vec![false; self.board.len()];
        let mut stack = vec![p];
        let mut has_liberty = false;
        visited[self.index(p)] = true;
        while let Some(current) = stack.pop() {
            stones.push(current);
            for n in self.neighbors(current) {
                let i = self.index(n);
                match self.board[i] {
                    Color::Empty => has_liberty = true,
                    c if c == color && !visited[i] => {
                        visited[i] = true;
                        stack.push(n);
                    }
                    _ => {}
                }
            }
        }
        (stones, has_liberty)
    }

    fn remove_group(&mut self, stones: &[Point], captured: &mut Vec<(Point, Color)>) {
        for &stone in stones {
            let i = self.index(stone);
            captured.push((stone, self.board[i]));
            self.board[i] = Color::Empty;
        }
    }

    /// Lines on which handicap points sit for this board size.
    fn handicap_lines(&self) -> Vec<usize> {
        if self.size < 7 {
            return Vec::new();
        }
        let edge = if self.size >= 13 { 3 } else { 2 };
        let mut lines = vec![edge, self.size - 1 - edge];
        if self.size % 2 == 1 && self.size >= 9 {
            lines.push(self.size / 2);
        }
        lines
    }
}

impl GoEngine for LocalEngine {
    fn size(&self) -> usize {
        self.size
    }

    fn color_at(&self, p: Point) -> Color {
        self.board[self.index(p)]
    }

    fn is_handicap_point(&self, p: Point) -> bool {
        let lines = self.handicap_lines();
        lines.contains(&p.x) && lines.contains(&p.y)
    }

    fn new_game(&mut self) {
        self.board.fill(Color::Empty);
        self.history.clear();
        self.dead.fill(false);
        self.score.fill(Color::Empty);
    }

    fn play(&mut self, m: Move) {
        let mut captured = Vec::new();
        if let Some(p) = m.point {
            let i = self.index(p);
            assert!(self.board[i] == Color::Empty, "point {p} is occupied");
            self.board[i] = m.color;
            let opponent = m.color.opponent();
            for n in self.neighbors(p) {
                if self.color_at(n) == opponent {
                    let (stones, has_liberty) = self.flood_group(n, opponent);
                    if !has_liberty {
                        self.remove_group(&stones, &mut captured);
                    }
                }
            }
            // Self-capture: if the played group ends up with no liberties,
            // it comes off the board.
            let (own, has_liberty) = self.flood_group(p, m.color);
            if !has_liberty {
                self.remove_group(&own, &mut captured);
            }
        }
        self.history.push(Record { mv: m, captured });
    }

    fn undo(&mut self) {
        let Some(record) = self.history.pop() else {
            return;
        };
        if let Some(p) = record.mv.point {
            let i = self.index(p);
            self.board[i] = Color::Empty;
        }
        for (p, color) in record.captured {
            let i = self.index(p);
            self.board[i] = color;
        }
    }

    fn move_number(&self) -> usize {
        self.history.len()
    }

    fn move_at(&self, index: usize) -> Move {
        self.history[index].mv
    }

    fn group_at(&self, p: Point, color: Color) -> Vec<Point> {
        assert!(self.color_at(p) == color, "no {color:?} stone at {p}");
        self.flood_group(p, color).0
    }

    fn is_dead(&self, p: Point) -> bool {
        self.dead[self.index(p)]
    }

    fn set_dead(&mut self, p: Point, dead: bool) {
        let i = self.index(p);
        self.dead[i] = dead;
    }

    fn calc_score(&mut self) {
        let points = self.board.len();
        let mut score = vec![Color::Empty; points];
        // Live stones own their point; dead stones yield it to the opponent.
        for i in 0..points {
            let c = self.board[i];
            if c != Color::Empty {
                score[i] = if self.dead[i] { c.opponent() } else { c };
            }
        }
        // Empty regions bordered by live stones of exactly one color belong
        // to that color. A dead stone borders as its opponent.
        let mut visited = vec![false; points];
        for start in 0..points {
            if self.board[start] != Color::Empty || visited[start] {
                continue;
            }
            let mut region = Vec::new();
            let mut borders = Vec::new();
            let mut stack = vec![self.point_at(start)];
            visited[start] = true;
            while let Some(p) = stack.pop() {
                region.push(p);
                for n in self.neighbors(p) {
                    let i = self.index(n);
                    match self.board[i] {
                        Color::Empty => {
                            if !visited[i] {
                                visited[i] = true;
                                stack.push(n);
                            }
                        }
                        c => {
                            let owner = if self.dead[i] { c.opponent() } else { c };
                            if !borders.contains(&owner) {
                                borders.push(owner);
                            }
                        }
                    }
                }
            }
            if let [owner] = borders[..] {
                for p in region {
                    let i = self.index(p);
                    score[i] = owner;
                }
            }
        }
        self.score = score;
    }

    fn score_color_at(&self, p: Point) -> Color {
        self.score[self.index(p)]
    }
}

use std::io;

use anyhow::Context as _;
use chakana_engine::{EdgeKind, EdgeRef, GameConfig, GameSession};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, MouseButton,
        MouseEvent, MouseEventKind,
    },
    execute,
};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Layout, Position, Rect},
    style::Color,
    widgets::Block,
};

use crate::{
    pattern::PatternSource,
    ui::{
        picker,
        widgets::{BoardDisplay, StatusDisplay, parse_hex_color},
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    CursorUp,
    CursorDown,
    CursorLeft,
    CursorRight,
    FlipOrientation,
    Claim,
    ResetRound,
    NewPattern,
    Quit,
}

impl Action {
    fn from_key(key: KeyCode) -> Option<Self> {
        match key {
            KeyCode::Up => Some(Action::CursorUp),
            KeyCode::Down => Some(Action::CursorDown),
            KeyCode::Left => Some(Action::CursorLeft),
            KeyCode::Right => Some(Action::CursorRight),
            KeyCode::Tab => Some(Action::FlipOrientation),
            KeyCode::Enter | KeyCode::Char(' ') => Some(Action::Claim),
            KeyCode::Char('r') => Some(Action::ResetRound),
            KeyCode::Char('p') => Some(Action::NewPattern),
            KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
            _ => None,
        }
    }
}

pub(crate) struct App {
    session: GameSession,
    source: PatternSource,
    pattern_name: String,
    player_colors: Vec<Color>,
    cursor: EdgeRef,
    tolerance: f64,
    board_area: Rect,
    message: Option<String>,
    exit: bool,
}

impl App {
    pub(crate) fn new(
        config: GameConfig,
        source: PatternSource,
        tolerance: f64,
    ) -> anyhow::Result<Self> {
        let player_colors = config
            .players
            .iter()
            .map(|player| parse_hex_color(&player.color).unwrap_or(Color::White))
            .collect();
        let mut session = GameSession::new(config);
        let samples = source.samples(session.config().grid, session.palette())?;
        session
            .new_round(&samples)
            .context("failed to deal the opening pattern")?;
        Ok(Self {
            pattern_name: source.describe(),
            session,
            source,
            player_colors,
            cursor: EdgeRef::horizontal(0, 0),
            tolerance,
            board_area: Rect::default(),
            message: None,
            exit: false,
        })
    }

    pub(crate) fn run(&mut self, terminal: &mut DefaultTerminal) -> anyhow::Result<()> {
        execute!(io::stdout(), EnableMouseCapture)?;
        let result = self.event_loop(terminal);
        execute!(io::stdout(), DisableMouseCapture)?;
        result
    }

    fn event_loop(&mut self, terminal: &mut DefaultTerminal) -> anyhow::Result<()> {
        while !self.exit {
            terminal.draw(|frame| self.draw(frame))?;
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key(key.code),
                Event::Mouse(mouse) => self.on_mouse(mouse),
                _ => {}
            }
        }
        Ok(())
    }

    fn draw(&mut self, frame: &mut Frame) {
        let board_widget =
            BoardDisplay::new(&self.session, &self.player_colors).cursor(self.cursor);
        let board_block = Block::bordered().title("Conquista de la Chakana");

        let [board_col, status_col] = Layout::horizontal([
            Constraint::Length(board_widget.width() + 2),
            Constraint::Min(32),
        ])
        .areas(frame.area());
        let board_rect = Rect {
            height: (board_widget.height() + 2).min(board_col.height),
            ..board_col
        };
        self.board_area = board_block.inner(board_rect);
        frame.render_widget(board_widget.block(board_block), board_rect);

        let status = StatusDisplay::new(&self.session, &self.player_colors)
            .pattern(&self.pattern_name)
            .message(self.message.as_deref())
            .block(Block::bordered().title("Score"));
        frame.render_widget(status, status_col);
    }

    fn on_key(&mut self, code: KeyCode) {
        let Some(action) = Action::from_key(code) else {
            return;
        };
        match action {
            Action::CursorUp => self.move_cursor(-1, 0),
            Action::CursorDown => self.move_cursor(1, 0),
            Action::CursorLeft => self.move_cursor(0, -1),
            Action::CursorRight => self.move_cursor(0, 1),
            Action::FlipOrientation => self.flip_cursor(),
            Action::Claim => self.place(self.cursor),
            Action::ResetRound => {
                self.session.reset_round();
                self.message = None;
            }
            Action::NewPattern => self.deal_new_pattern(),
            Action::Quit => self.exit = true,
        }
    }

    fn on_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        let area = self.board_area;
        if !area.contains(Position::new(mouse.column, mouse.row)) {
            return;
        }
        let x = f64::from(mouse.column - area.x);
        let y = f64::from(mouse.row - area.y);
        if let Some(edge) =
            picker::nearest_unowned_edge(self.session.board(), x, y, self.tolerance)
        {
            self.cursor = edge;
            self.place(edge);
        }
    }

    fn move_cursor(&mut self, row_step: isize, col_step: isize) {
        let grid = self.session.config().grid;
        let (max_row, max_col) = match self.cursor.kind {
            EdgeKind::Horizontal => (grid, grid - 1),
            EdgeKind::Vertical => (grid - 1, grid),
        };
        self.cursor.row = saturating_step(self.cursor.row, row_step, max_row);
        self.cursor.col = saturating_step(self.cursor.col, col_step, max_col);
    }

    /// Swaps the cursor's orientation in place, clamping into the other
    /// kind's coordinate ranges.
    fn flip_cursor(&mut self) {
        let grid = self.session.config().grid;
        self.cursor = match self.cursor.kind {
            EdgeKind::Horizontal => {
                EdgeRef::vertical(self.cursor.row.min(grid - 1), self.cursor.col)
            }
            EdgeKind::Vertical => {
                EdgeRef::horizontal(self.cursor.row, self.cursor.col.min(grid - 1))
            }
        };
    }

    fn place(&mut self, edge: EdgeRef) {
        let scorer = self.session.active_player();
        match self.session.place_edge(edge) {
            Ok(outcome) if outcome.closed.is_empty() => self.message = None,
            Ok(outcome) => {
                let points: u32 = outcome
                    .closed
                    .iter()
                    .filter_map(|&boxref| self.session.board().box_cell(boxref).ok())
                    .map(|cell| self.session.palette().points(cell.category))
                    .sum();
                let name = self
                    .session
                    .player_spec(scorer)
                    .map(|spec| spec.name.clone())
                    .unwrap_or_default();
                let what = if outcome.closed.len() == 2 {
                    "two boxes"
                } else {
                    "a box"
                };
                self.message = Some(format!("{name} closed {what} (+{points}) and plays again"));
            }
            Err(err) => self.message = Some(err.to_string()),
        }
        if self.session.is_complete() {
            self.message = Some("All edges claimed. r replays this pattern, p deals a new one".to_owned());
        }
    }

    fn deal_new_pattern(&mut self) {
        match self
            .source
            .samples(self.session.config().grid, self.session.palette())
        {
            Ok(samples) => match self.session.new_round(&samples) {
                Ok(()) => {
                    self.message = None;
                    self.cursor = EdgeRef::horizontal(0, 0);
                }
                Err(err) => self.message = Some(err.to_string()),
            },
            Err(err) => self.message = Some(format!("{err:#}")),
        }
    }
}

fn saturating_step(value: usize, delta: isize, max: usize) -> usize {
    let stepped = if delta < 0 {
        value.saturating_sub(delta.unsigned_abs())
    } else {
        value.saturating_add(delta.unsigned_abs())
    };
    stepped.min(max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_saturating_step_clamps_to_the_range() {
        assert_eq!(saturating_step(0, -1, 7), 0);
        assert_eq!(saturating_step(3, -1, 7), 2);
        assert_eq!(saturating_step(7, 1, 7), 7);
        assert_eq!(saturating_step(6, 1, 7), 7);
    }

    #[test]
    fn test_key_bindings() {
        assert_eq!(Action::from_key(KeyCode::Enter), Some(Action::Claim));
        assert_eq!(Action::from_key(KeyCode::Char(' ')), Some(Action::Claim));
        assert_eq!(Action::from_key(KeyCode::Tab), Some(Action::FlipOrientation));
        assert_eq!(Action::from_key(KeyCode::Char('q')), Some(Action::Quit));
        assert_eq!(Action::from_key(KeyCode::Char('x')), None);
    }
}

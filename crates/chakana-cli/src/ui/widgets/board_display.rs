use chakana_engine::{EdgeRef, GameSession, PlayerId};
use ratatui::{
    buffer::{Buffer, Cell},
    layout::Rect,
    style::{Color, Modifier},
    widgets::{Block, BlockExt as _, Widget},
};

use crate::ui::widgets::color;

/// Columns per box, dot column included.
pub(crate) const CELL_W: u16 = 4;
/// Rows per box, dot row included.
pub(crate) const CELL_H: u16 = 2;

/// The board lattice: dots, edges in their claimants' colors, boxes filled
/// with their category's calibrated tone, and a sun marker on owned boxes.
#[derive(Debug)]
pub(crate) struct BoardDisplay<'a> {
    session: &'a GameSession,
    player_colors: &'a [Color],
    cursor: Option<EdgeRef>,
    block: Option<Block<'a>>,
}

impl<'a> BoardDisplay<'a> {
    pub(crate) fn new(session: &'a GameSession, player_colors: &'a [Color]) -> Self {
        Self {
            session,
            player_colors,
            cursor: None,
            block: None,
        }
    }

    pub(crate) fn cursor(self, cursor: EdgeRef) -> Self {
        Self {
            cursor: Some(cursor),
            ..self
        }
    }

    pub(crate) fn block(self, block: Block<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }

    /// Columns the lattice itself needs, borders excluded.
    pub(crate) fn width(&self) -> u16 {
        grid_extent(self.session.config().grid, CELL_W)
    }

    /// Rows the lattice itself needs, borders excluded.
    pub(crate) fn height(&self) -> u16 {
        grid_extent(self.session.config().grid, CELL_H)
    }

    fn player_color(&self, player: PlayerId) -> Color {
        self.player_colors
            .get(player.index())
            .copied()
            .unwrap_or(Color::White)
    }
}

#[expect(clippy::cast_possible_truncation)]
fn grid_extent(grid: usize, step: u16) -> u16 {
    grid as u16 * step + 1
}

#[expect(clippy::cast_possible_truncation)]
fn offset(index: usize, step: u16) -> u16 {
    index as u16 * step
}

fn cell_at<'b>(buf: &'b mut Buffer, area: Rect, x: u16, y: u16) -> Option<&'b mut Cell> {
    if x >= area.width || y >= area.height {
        return None;
    }
    buf.cell_mut((area.x + x, area.y + y))
}

impl Widget for BoardDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &BoardDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);

        let board = self.session.board();
        let palette = self.session.palette();
        let grid = board.grid();

        for y in 0..grid_extent(grid, CELL_H).min(area.height) {
            for x in 0..grid_extent(grid, CELL_W).min(area.width) {
                if let Some(cell) = cell_at(buf, area, x, y) {
                    cell.set_char(' ').set_bg(color::BOARD_BG);
                }
            }
        }

        for (row, cells) in board.box_rows().enumerate() {
            for (col, box_cell) in cells.iter().enumerate() {
                let reference = palette.spec(box_cell.category).reference;
                let fill = Color::Rgb(reference.0, reference.1, reference.2);
                let (x0, y0) = (offset(col, CELL_W), offset(row, CELL_H));
                for dy in 1..CELL_H {
                    for dx in 1..CELL_W {
                        if let Some(cell) = cell_at(buf, area, x0 + dx, y0 + dy) {
                            cell.set_char(' ').set_bg(fill);
                        }
                    }
                }
                if let Some(owner) = box_cell.owner {
                    let marker = self.player_color(owner);
                    if let Some(cell) = cell_at(buf, area, x0 + CELL_W / 2, y0 + 1) {
                        cell.set_char('☼').set_fg(marker);
                    }
                }
            }
        }

        for (row, owners) in board.h_edge_rows().enumerate() {
            for (col, &owner) in owners.iter().enumerate() {
                let on_cursor = self.cursor == Some(EdgeRef::horizontal(row, col));
                let (symbol, fg) = match owner {
                    Some(player) => ('━', self.player_color(player)),
                    None => ('─', color::FREE_EDGE),
                };
                let fg = if on_cursor { color::CURSOR } else { fg };
                let (x0, y0) = (offset(col, CELL_W), offset(row, CELL_H));
                for dx in 1..CELL_W {
                    if let Some(cell) = cell_at(buf, area, x0 + dx, y0) {
                        cell.set_char(symbol).set_fg(fg);
                        if on_cursor {
                            cell.modifier.insert(Modifier::BOLD);
                        }
                    }
                }
            }
        }

        for (row, owners) in board.v_edge_rows().enumerate() {
            for (col, &owner) in owners.iter().enumerate() {
                let on_cursor = self.cursor == Some(EdgeRef::vertical(row, col));
                let (symbol, fg) = match owner {
                    Some(player) => ('┃', self.player_color(player)),
                    None => ('│', color::FREE_EDGE),
                };
                let fg = if on_cursor { color::CURSOR } else { fg };
                if let Some(cell) = cell_at(buf, area, offset(col, CELL_W), offset(row, CELL_H) + 1)
                {
                    cell.set_char(symbol).set_fg(fg);
                    if on_cursor {
                        cell.modifier.insert(Modifier::BOLD);
                    }
                }
            }
        }

        for row in 0..=grid {
            for col in 0..=grid {
                if let Some(cell) = cell_at(buf, area, offset(col, CELL_W), offset(row, CELL_H)) {
                    cell.set_char('·').set_fg(color::DOT);
                }
            }
        }
    }
}

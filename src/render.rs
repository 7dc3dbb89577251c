use std::io::{stdout, Stdout, Write};

use anyhow::{Context, Result};
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::terminal::{self, ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{cursor, execute, queue};
use tracing::warn;

use crate::board::Board;
use crate::error::GameError;
use crate::game_state::GameState;
use crate::point::Point;
use crate::snake::{Direction, Snake};

/// Draws the game. Called every tick, whether or not anything moved.
pub trait Renderer {
    fn render_frame(&mut self, board: &Board, snake: &Snake, state: &GameState) -> Result<()>;
}

const BORDER_COLOR: Color = Color::White;
const TEXT_COLOR: Color = Color::White;

/// Columns and rows needed to show `board`: every cell is two characters wide,
/// plus a one character frame and a score line on top.
pub fn required_size(board: &Board) -> (u16, u16) {
    ((2 * board.width() + 2) as u16, (board.height() + 3) as u16)
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Cell {
    Empty,
    Body,
    Head(Direction),
    Food,
    Dead,
}

impl Cell {
    fn glyph(self) -> (&'static str, Color) {
        match self {
            Cell::Empty => ("  ", Color::Reset),
            Cell::Body => ("{}", Color::Green),
            Cell::Head(Direction::North) => ("^^", Color::Yellow),
            Cell::Head(Direction::East) => (">>", Color::Yellow),
            Cell::Head(Direction::South) => ("vv", Color::Yellow),
            Cell::Head(Direction::West) => ("<<", Color::Yellow),
            Cell::Food => ("[]", Color::Red),
            Cell::Dead => ("XX", Color::Red),
        }
    }
}

/// Crossterm renderer. Keeps the last drawn frame and only rewrites the cells
/// that changed since then.
pub struct TermRenderer<W: Write> {
    out: W,
    screen: Option<Vec<Cell>>,
    info: Option<(u32, u8)>,
    message_shown: bool,
}

impl TermRenderer<Stdout> {
    pub fn stdout() -> Self {
        TermRenderer::new(stdout())
    }
}

impl<W: Write> TermRenderer<W> {
    pub fn new(out: W) -> Self {
        TermRenderer { out, screen: None, info: None, message_shown: false }
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    ///////////////////////////////////////////////////////////////////////////

    fn compose(board: &Board, snake: &Snake, state: &GameState) -> Vec<Cell> {
        let mut cells = vec![Cell::Empty; board.cell_count()];
        let index = |p: Point| board.width() as usize * p.y as usize + p.x as usize;

        cells[index(state.food())] = Cell::Food;

        if state.is_game_over() {
            for pos in snake.body() {
                cells[index(*pos)] = Cell::Dead;
            }
        } else {
            for pos in snake.body().iter().skip(1) {
                cells[index(*pos)] = Cell::Body;
            }
            cells[index(snake.head())] = Cell::Head(snake.heading());
        }

        cells
    }

    fn draw_borders(&mut self, board: &Board) -> Result<()> {
        let (cols, rows) = required_size(board);
        let horizontal = format!("+{}+", "-".repeat(cols as usize - 2));

        queue!(self.out, terminal::Clear(ClearType::All), SetForegroundColor(BORDER_COLOR))?;
        queue!(self.out, cursor::MoveTo(0, 1), Print(&horizontal))?;
        queue!(self.out, cursor::MoveTo(0, rows - 1), Print(&horizontal))?;

        for row in 2..rows - 1 {
            queue!(self.out, cursor::MoveTo(0, row), Print('|'))?;
            queue!(self.out, cursor::MoveTo(cols - 1, row), Print('|'))?;
        }

        queue!(self.out, ResetColor)?;
        Ok(())
    }

    fn draw_cell(&mut self, pos: Point, cell: Cell) -> Result<()> {
        let (glyph, color) = cell.glyph();
        let col = (1 + 2 * pos.x) as u16;
        let row = (2 + pos.y) as u16;

        queue!(self.out, cursor::MoveTo(col, row), SetForegroundColor(color), Print(glyph), ResetColor)?;
        Ok(())
    }

    fn draw_info(&mut self, state: &GameState) -> Result<()> {
        let text = format!("Score: {}  Level: {}", state.score(), state.level());

        queue!(
            self.out,
            cursor::MoveTo(1, 0),
            terminal::Clear(ClearType::CurrentLine),
            SetForegroundColor(TEXT_COLOR),
            Print(text),
            ResetColor
        )?;
        Ok(())
    }

    fn show_message(&mut self, board: &Board, lines: &[&str]) -> Result<()> {
        let (cols, rows) = required_size(board);
        let msg_width = lines.iter().map(|l| l.len()).max().unwrap_or(0) + 4;
        let msg_height = lines.len() + 2;
        let left = (cols as usize).saturating_sub(msg_width) / 2;
        // Center over the board rows, below the score line.
        let top = 1 + (rows as usize - 1).saturating_sub(msg_height) / 2;

        let blank = " ".repeat(msg_width);
        queue!(self.out, SetForegroundColor(TEXT_COLOR))?;
        queue!(self.out, cursor::MoveTo(left as u16, top as u16), Print(&blank))?;

        for (i, line) in lines.iter().enumerate() {
            let padded = format!("{line: ^width$}", line = line, width = msg_width);
            queue!(self.out, cursor::MoveTo(left as u16, (top + 1 + i) as u16), Print(padded))?;
        }

        queue!(self.out, cursor::MoveTo(left as u16, (top + msg_height - 1) as u16), Print(&blank))?;
        queue!(self.out, ResetColor)?;
        Ok(())
    }
}

impl<W: Write> Renderer for TermRenderer<W> {
    fn render_frame(&mut self, board: &Board, snake: &Snake, state: &GameState) -> Result<()> {
        let cells = Self::compose(board, snake, state);
        let previous = match self.screen.take() {
            Some(previous) if previous.len() == cells.len() => previous,
            _ => {
                self.draw_borders(board)?;
                self.info = None;
                self.message_shown = false;
                vec![Cell::Empty; cells.len()]
            }
        };

        for (pos, (new, old)) in board.cells().zip(cells.iter().zip(previous.iter())) {
            if new != old {
                self.draw_cell(pos, *new)?;
            }
        }
        self.screen = Some(cells);

        if self.info != Some((state.score(), state.level())) {
            self.draw_info(state)?;
            self.info = Some((state.score(), state.level()));
        }

        if state.is_game_over() && !self.message_shown {
            let score = format!("Score: {}", state.score());
            self.show_message(board, &["GAME OVER", &score, "", "Press q to quit"])?;
            self.message_shown = true;
        }

        self.out.flush().context("Failed to flush frame")?;
        Ok(())
    }
}

/// Owns the terminal while the game runs: raw mode, alternate screen and a
/// hidden cursor. Dropping it, also while unwinding from a panic, puts the
/// terminal back.
pub struct TerminalGuard {
    _private: (),
}

impl TerminalGuard {
    /// Fails with `GameError::TerminalTooSmall` before touching the terminal
    /// if `board` would not fit.
    pub fn acquire(board: &Board) -> Result<Self> {
        let required = required_size(board);
        let actual = terminal::size().context("Failed to read terminal size")?;

        if actual.0 < required.0 || actual.1 < required.1 {
            return Err(GameError::TerminalTooSmall { required, actual }.into());
        }

        terminal::enable_raw_mode().context("Failed to enable raw mode")?;
        let guard = TerminalGuard { _private: () };

        let mut out = stdout();
        execute!(out, EnterAlternateScreen, cursor::Hide, cursor::DisableBlinking)
            .context("Failed to enter alternate screen")?;

        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let mut out = stdout();
        if let Err(e) = execute!(out, ResetColor, cursor::EnableBlinking, cursor::Show, LeaveAlternateScreen) {
            warn!(error = %e, "failed to leave alternate screen");
        }

        if let Err(e) = terminal::disable_raw_mode() {
            warn!(error = %e, "failed to disable raw mode");
        }
    }
}

//! # Application
//!
//! The application state and logic for playing a generated puzzle in the
//! text-based user interface (TUI).

use std::{io, time::Duration};

use crossterm::event::{poll, read, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
	buffer::Buffer,
	layout::{Alignment, Constraint, Direction, Layout, Rect},
	style::{Color, Modifier, Style, Stylize},
	text::Line,
	widgets::{Block, BorderType, Borders, Paragraph, Widget},
	Frame
};
use wordtiles::{board::SIZE, puzzle::{is_adjacent, Puzzle, CELLS}};

use crate::tui::Tui;

////////////////////////////////////////////////////////////////////////////////
//                                Application.                                //
////////////////////////////////////////////////////////////////////////////////

/// The colour of a letter tile.
const TILE: Color = Color::Rgb(0x39, 0x93, 0xdd);

/// The number of grid rows needed to show every cell.
const GRID_ROWS: usize = CELLS.div_ceil(SIZE);

/// The application state.
#[must_use]
pub struct App
{
	/// What the application is doing.
	state: ExecutionState,

	/// The puzzle being played.
	puzzle: Puzzle,

	/// The index of the cell under the cursor.
	cursor: usize,

	/// The index of the cell picked up for moving, if any.
	held: Option<usize>,

	/// The number of letters moved so far.
	moves: u32
}

// Public interface.
impl App
{
	/// Create a new application state.
	///
	/// # Arguments
	///
	/// * `puzzle` - The puzzle to play, typically already scrambled.
	///
	/// # Returns
	///
	/// The new application state.
	#[inline]
	pub fn new(puzzle: Puzzle) -> Self
	{
		let state =
			if puzzle.is_solved() { ExecutionState::Solved }
			else { ExecutionState::Playing };
		Self { state, puzzle, cursor: 0, held: None, moves: 0 }
	}

	/// Run the application until the player exits.
	///
	/// # Arguments
	///
	/// * `tui` - The text-based user interface (TUI).
	///
	/// # Returns
	///
	/// `true` if the player solved the puzzle, `false` otherwise.
	///
	/// # Errors
	///
	/// Any error that occurs while running the application.
	pub fn run(mut self, tui: &mut Tui) -> io::Result<bool>
	{
		while self.is_running()
		{
			tui.draw(|frame| self.render_frame(frame))?;
			self.process_event()?;
		}
		Ok(self.puzzle.is_solved())
	}

	/// Check if the application is running.
	#[inline]
	#[must_use]
	pub fn is_running(&self) -> bool
	{
		!matches!(self.state, ExecutionState::Exiting)
	}
}

// Private implementation details.
impl App
{
	/// Move the cursor by the given deltas. Moves that would leave the grid,
	/// or land beyond the last cell, are ignored.
	///
	/// # Arguments
	///
	/// * `dx` - The change in the column.
	/// * `dy` - The change in the row.
	fn move_cursor(&mut self, dx: isize, dy: isize)
	{
		let x = (self.cursor % SIZE) as isize + dx;
		let y = (self.cursor / SIZE) as isize + dy;
		if (0 .. SIZE as isize).contains(&x) && (0 .. GRID_ROWS as isize).contains(&y)
		{
			let index = y as usize * SIZE + x as usize;
			if index < CELLS
			{
				self.cursor = index;
			}
		}
	}

	/// Pick up the letter under the cursor, or drop the held letter into the
	/// blank under the cursor. A drop that the puzzle refuses simply lets go
	/// of the letter.
	fn select(&mut self)
	{
		match self.held
		{
			None if !self.puzzle.is_blank(self.cursor) =>
				self.held = Some(self.cursor),
			None => {}
			Some(from) =>
			{
				self.held = None;
				if self.puzzle.slide(from, self.cursor)
				{
					self.moves += 1;
					if self.puzzle.is_solved()
					{
						self.state = ExecutionState::Solved;
					}
				}
			}
		}
	}

	/// Render the application frame.
	///
	/// # Arguments
	///
	/// * `frame` - The target frame.
	fn render_frame(&self, frame: &mut Frame)
	{
		frame.render_widget(self, frame.area());
	}

	/// Build the widget for a single cell.
	///
	/// # Arguments
	///
	/// * `index` - The index of the cell.
	/// * `c` - The content of the cell.
	///
	/// # Returns
	///
	/// The cell widget.
	fn cell(&self, index: usize, c: char) -> Paragraph<'static>
	{
		let solved = matches!(self.state, ExecutionState::Solved);
		let background =
			if self.puzzle.is_blank(index) { Color::Black }
			else if self.held == Some(index) { Color::Yellow }
			else if solved { Color::Green }
			else { TILE };
		let border =
			if index == self.cursor && !solved { Color::Cyan }
			else if self.held.is_some_and(|held| is_adjacent(held, index))
				&& self.puzzle.is_blank(index) { Color::Yellow }
			else { Color::White };
		let block = Block::new()
			.border_type(BorderType::Rounded)
			.borders(Borders::ALL)
			.border_style(Style::default().fg(border));
		Paragraph::new(c.to_string())
			.block(block)
			.alignment(Alignment::Center)
			.style(
				Style::default()
					.fg(Color::White)
					.bg(background)
					.add_modifier(Modifier::BOLD)
			)
	}

	/// Process events. Block briefly, so that the frame is redrawn at a
	/// steady pace.
	///
	/// # Errors
	///
	/// Any error that occurs while processing events.
	fn process_event(&mut self) -> io::Result<()>
	{
		if poll(Duration::from_millis(50))?
		{
			match read()?
			{
				Event::Key(event) if event.kind == KeyEventKind::Press =>
					self.process_key_event(event),
				_ => {}
			}
		}
		Ok(())
	}

	/// Process a key event:
	///
	/// * Escape - Exit the application.
	/// * Up, Down, Left, Right - Move the cursor.
	/// * Enter, Space - Pick up the letter under the cursor, or drop the held
	///   letter into the blank under the cursor.
	///
	/// Once the puzzle is solved, Escape and Enter exit.
	///
	/// # Arguments
	///
	/// * `event` - The key event to process.
	fn process_key_event(&mut self, event: KeyEvent)
	{
		match self.state
		{
			ExecutionState::Playing => match event.code
			{
				KeyCode::Esc => self.exit(),
				KeyCode::Up => self.move_cursor(0, -1),
				KeyCode::Down => self.move_cursor(0, 1),
				KeyCode::Left => self.move_cursor(-1, 0),
				KeyCode::Right => self.move_cursor(1, 0),
				KeyCode::Enter | KeyCode::Char(' ') => self.select(),
				_ => {}
			},
			ExecutionState::Solved => match event.code
			{
				KeyCode::Esc | KeyCode::Enter => self.exit(),
				_ => {}
			},
			ExecutionState::Exiting => {}
		}
	}

	/// Mark the application for exit. The application will exit after the next
	/// iteration of the main loop.
	fn exit(&mut self)
	{
		self.state = ExecutionState::Exiting;
	}
}

impl Widget for &App
{
	fn render(self, area: Rect, buf: &mut Buffer)
	{
		let status = match self.state
		{
			ExecutionState::Solved =>
				Line::from(format!("Solved in {} moves! ↵ – exit", self.moves))
					.green()
					.bold(),
			_ => Line::from(format!("Moves: {}", self.moves)).white()
		};
		let outer = Block::default()
			.borders(Borders::ALL)
			.border_style(Style::default().fg(Color::White))
			.title_top(Line::from("Wordtiles").centered())
			.title_top(Line::from("⎋ – exit").yellow().bold().left_aligned())
			.title_top(status.right_aligned())
			.title_bottom(
				Line::from("←↑↓→ - move  ↵ - pick up / drop").cyan().centered()
			);
		let inner = outer.inner(area);
		outer.render(area, buf);
		// Centre a grid of fixed-size cells.
		let mut rows = vec![Constraint::Fill(1)];
		rows.extend((0 .. GRID_ROWS).map(|_| Constraint::Length(3)));
		rows.push(Constraint::Fill(1));
		let grid = Layout::default()
			.direction(Direction::Vertical)
			.constraints(rows)
			.split(inner);
		self.puzzle.cells()
			.chunks(SIZE)
			.enumerate()
			.for_each(|(row, chunk)| {
				let mut columns = vec![Constraint::Fill(1)];
				columns.extend((0 .. SIZE).map(|_| Constraint::Length(7)));
				columns.push(Constraint::Fill(1));
				let line = Layout::default()
					.direction(Direction::Horizontal)
					.constraints(columns)
					.split(grid[row + 1]);
				for (column, &c) in chunk.iter().enumerate()
				{
					self.cell(row * SIZE + column, c)
						.render(line[column + 1], buf);
				}
			});
	}
}

/// The execution state of the application.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ExecutionState
{
	/// The player is moving letters.
	Playing,

	/// The letters spell the board; the player is admiring the result.
	Solved,

	/// The application is exiting.
	Exiting
}

////////////////////////////////////////////////////////////////////////////////
//                                   Tests.                                   //
////////////////////////////////////////////////////////////////////////////////

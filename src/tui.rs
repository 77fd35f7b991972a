//! # Text-based user interface (TUI)
//!
//! Terminal setup and teardown for playing a puzzle. The terminal is put into
//! raw mode on the alternate screen for the duration of a session, and is
//! handed back in its original state however the session ends, panics
//! included.

use std::{
	io::{self, stdout, Stdout},
	panic,
	sync::{Arc, Mutex},
	thread
};

use crossterm::{
	execute,
	terminal::{
		disable_raw_mode, enable_raw_mode,
		EnterAlternateScreen, LeaveAlternateScreen
	}
};
use ratatui::{backend::{Backend, CrosstermBackend}, Terminal};

/// The terminal type driven by the application.
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Run a session on the terminal. While the session runs, a panic on the
/// calling thread restores the terminal before the previous panic hook
/// reports it; afterwards, the previous hook is reinstated.
///
/// # Arguments
///
/// * `session` - The session to run.
///
/// # Returns
///
/// The result of the session.
///
/// # Errors
///
/// Any error from the session, or from preparing or restoring the terminal.
pub fn tui<F, T>(session: F) -> io::Result<T>
	where F: FnOnce(&mut Tui) -> io::Result<T>
{
	let previous = Arc::new(Mutex::new(Some(panic::take_hook())));
	let hook_previous = Arc::clone(&previous);
	let session_thread = thread::current().id();
	panic::set_hook(Box::new(move |info| {
		if thread::current().id() == session_thread
		{
			// Already panicking; a failed restore changes nothing.
			let _ = leave();
		}
		if let Ok(previous) = hook_previous.lock()
		{
			if let Some(hook) = previous.as_ref()
			{
				hook(info);
			}
		}
	}));
	// Entering is not atomic, so leave unconditionally.
	let result = enter().and_then(|mut terminal| session(&mut terminal));
	let hook = previous.lock()
		.ok()
		.and_then(|mut previous| previous.take());
	match hook
	{
		Some(hook) => panic::set_hook(hook),
		None => drop(panic::take_hook())
	}
	leave()?;
	result
}

/// Switch to the alternate screen and raw mode.
///
/// # Returns
///
/// The terminal.
///
/// # Errors
///
/// Any error from the terminal.
fn enter() -> io::Result<Tui>
{
	let mut stdout = stdout();
	execute!(stdout, EnterAlternateScreen)?;
	enable_raw_mode()?;
	Terminal::new(CrosstermBackend::new(stdout))
}

/// Leave the alternate screen and raw mode, and show the cursor again.
///
/// # Errors
///
/// Any error from the terminal.
fn leave() -> io::Result<()>
{
	let mut stdout = stdout();
	execute!(stdout, LeaveAlternateScreen)?;
	disable_raw_mode()?;
	CrosstermBackend::new(stdout).show_cursor()
}

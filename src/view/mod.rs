//! TUI rendering and terminal management (impure shell)

pub mod constants;
pub mod list;
pub mod recognizer;
pub mod row;
pub mod styles;

pub use list::{ListViewport, ListWidget};
pub use recognizer::PointerRecognizer;
pub use row::{RowKind, RowTemplate};
pub use styles::{ColorConfig, RowStyles};

use crate::config::{KeyBindings, ResolvedConfig};
use crate::integration::DragList;
use crate::model::{AppError, Dataset, KeyAction, OrderError};
use crate::state::{MoveOutcome, ScrollDirection};
use constants::{HEADER_HEIGHT, IDLE_POLL_INTERVAL, STATUS_BAR_HEIGHT};
use crossterm::{
    ExecutableCommand,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Layout, Rect},
    text::Line,
    widgets::Paragraph,
};
use std::io::{self, Stdout};
use std::time::Instant;
use thiserror::Error;
use tracing::{debug, error, info};

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),

    /// Application error
    #[error("Application error: {0}")]
    App(#[from] AppError),
}

impl From<OrderError> for TuiError {
    fn from(err: OrderError) -> Self {
        Self::App(AppError::Order(err))
    }
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: Backend,
{
    terminal: Terminal<B>,
    list: DragList,
    scroll: ListViewport,
    recognizer: PointerRecognizer,
    key_bindings: KeyBindings,
    styles: RowStyles,
    /// Last computed list area (for handle hit testing)
    list_area: Rect,
    /// Inputs of the last drawn frame; `None` forces a redraw.
    drawn: Option<FrameStamp>,
}

/// What a frame was drawn from.
///
/// The pointer version changes on every move, lift and drop, the snapshot
/// generation on every reorder and drop, and the offset on every scroll.
#[derive(Debug, Clone, Copy, PartialEq)]
struct FrameStamp {
    pointer_version: u64,
    generation: u64,
    scroll_offset: f64,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen, mouse capture and
    /// focus reporting.
    pub fn new(config: &ResolvedConfig) -> Result<Self, TuiError> {
        let dataset = Dataset::generate(config.row_count, config.color_seed);
        let list = DragList::from_dataset(config.drag_config(), dataset)?;

        enable_raw_mode()?;
        let app = enter_screen()
            .and_then(|terminal| Self::with_terminal(terminal, list, RowStyles::default()));
        restore_on_error(app, restore_terminal)
    }

    /// Run the main event loop
    ///
    /// Returns when user quits (q or Ctrl+C). While an auto-scroll is running
    /// the poll timeout is the time until its next tick; otherwise the loop
    /// sleeps until input arrives.
    pub fn run(&mut self) -> Result<(), TuiError> {
        self.draw()?;

        loop {
            let timeout = self
                .list
                .time_until_tick(Instant::now())
                .unwrap_or(IDLE_POLL_INTERVAL);

            if event::poll(timeout)? {
                match event::read()? {
                    Event::Key(key) => {
                        if self.handle_key(key)? {
                            return Ok(()); // User quit
                        }
                    }
                    Event::Mouse(mouse) => self.handle_mouse(mouse)?,
                    Event::Resize(width, height) => self.handle_resize(width, height)?,
                    Event::FocusLost => {
                        self.cancel_drag()?;
                    }
                    _ => {}
                }
            }

            self.tick(Instant::now())?;
            self.draw_if_changed()?;
        }
    }
}

impl<B> TuiApp<B>
where
    B: Backend,
{
    /// Wrap an already initialized terminal.
    ///
    /// Reports the initial layout to `list`.
    pub fn with_terminal(
        terminal: Terminal<B>,
        list: DragList,
        styles: RowStyles,
    ) -> Result<Self, TuiError> {
        let size = terminal.size()?;
        let mut app = Self {
            terminal,
            list,
            scroll: ListViewport::new(),
            recognizer: PointerRecognizer::new(),
            key_bindings: KeyBindings::default(),
            styles,
            list_area: Rect::default(),
            drawn: None,
        };
        app.handle_resize(size.width, size.height)?;
        Ok(app)
    }

    /// The list being edited.
    pub fn list(&self) -> &DragList {
        &self.list
    }

    /// Host scroll position.
    pub fn scroll(&self) -> &ListViewport {
        &self.scroll
    }

    /// Screen area of the list.
    pub fn list_area(&self) -> Rect {
        self.list_area
    }

    /// Terminal backend (for buffer inspection).
    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    /// Handle a single keyboard event
    ///
    /// Returns true if app should quit
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<bool, TuiError> {
        if key.kind == KeyEventKind::Release {
            return Ok(false);
        }

        // Ctrl+C always quits, even if not in bindings
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Ok(true);
        }

        let Some(action) = self.key_bindings.get(key) else {
            return Ok(false);
        };

        match action {
            KeyAction::Quit => return Ok(true),
            KeyAction::CancelDrag => {
                self.cancel_drag()?;
            }
            _ if action.is_scroll() => self.apply_scroll_action(action)?,
            _ => {}
        }

        Ok(false)
    }

    /// Handle a single mouse event
    ///
    /// The wheel scrolls one row per notch while no drag is in progress; left
    /// button events go through the gesture recognizer.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> Result<(), TuiError> {
        match mouse.kind {
            MouseEventKind::ScrollUp | MouseEventKind::ScrollDown => {
                if self.list.is_dragging() {
                    return Ok(());
                }
                let row_height = self.list.controller().viewport().row_height();
                let delta = if mouse.kind == MouseEventKind::ScrollUp {
                    -row_height
                } else {
                    row_height
                };
                self.scroll.scroll_by(delta);
                self.report_scroll()
            }
            _ => {
                if let Some(sample) = self.recognizer.sample_for(&mouse, self.list_area) {
                    let outcome = self.list.handle_sample(sample)?;
                    log_outcome(outcome);
                }
                Ok(())
            }
        }
    }

    /// Handle a terminal resize event
    ///
    /// Recomputes the list area and reports it to the engine.
    pub fn handle_resize(&mut self, width: u16, height: u16) -> Result<(), TuiError> {
        debug!("Handling resize to {}x{}", width, height);
        let [_, list_area, _] = frame_areas(Rect::new(0, 0, width, height));
        self.list_area = list_area;

        let row_count = self.list.snapshot().len();
        let content = self.list.controller().viewport().content_height(row_count);
        self.scroll.set_bounds(content, f64::from(list_area.height));
        self.list
            .on_layout(f64::from(list_area.height), f64::from(list_area.y));
        self.drawn = None;
        self.report_scroll()
    }

    /// Abort the drag in progress, if any.
    ///
    /// Returns true if a drag was cancelled.
    pub fn cancel_drag(&mut self) -> Result<bool, TuiError> {
        let Some(sample) = self.recognizer.cancel() else {
            return Ok(false);
        };
        self.list.handle_sample(sample)?;
        Ok(true)
    }

    /// Run a due auto-scroll tick.
    ///
    /// Returns true if the list actually scrolled. A request clamped back to
    /// the current offset (pointer resting in the edge zone at either end)
    /// is not reported to the engine.
    pub fn tick(&mut self, now: Instant) -> Result<bool, TuiError> {
        let before = self.scroll.offset();
        if self.list.tick(now, &mut self.scroll).is_none() || self.scroll.offset() == before {
            return Ok(false);
        }
        self.report_scroll()?;
        Ok(true)
    }

    /// Render the current frame
    pub fn draw(&mut self) -> Result<(), TuiError> {
        let list = &self.list;
        let styles = self.styles;
        self.terminal.draw(|frame| render_frame(frame, list, styles))?;
        self.drawn = Some(self.frame_stamp());
        Ok(())
    }

    /// Render only if something drawn changed since the last frame.
    ///
    /// Returns true if a frame was drawn.
    pub fn draw_if_changed(&mut self) -> Result<bool, TuiError> {
        if !self.needs_redraw() {
            return Ok(false);
        }
        self.draw()?;
        Ok(true)
    }

    /// True when the pointer, the order or the scroll offset changed since
    /// the last frame, or after a resize.
    pub fn needs_redraw(&self) -> bool {
        let Some(drawn) = self.drawn else {
            return true;
        };
        self.list
            .controller()
            .pointer()
            .changed_since(drawn.pointer_version)
            || self.list.snapshot().generation() != drawn.generation
            || self.scroll.offset() != drawn.scroll_offset
    }

    fn frame_stamp(&self) -> FrameStamp {
        FrameStamp {
            pointer_version: self.list.controller().pointer().version(),
            generation: self.list.snapshot().generation(),
            scroll_offset: self.scroll.offset(),
        }
    }

    fn apply_scroll_action(&mut self, action: KeyAction) -> Result<(), TuiError> {
        let page = self.scroll.viewport_height().max(1.0);
        match action {
            KeyAction::ScrollUp => self.scroll.scroll_by(-1.0),
            KeyAction::ScrollDown => self.scroll.scroll_by(1.0),
            KeyAction::PageUp => self.scroll.scroll_by(-page),
            KeyAction::PageDown => self.scroll.scroll_by(page),
            KeyAction::ScrollToTop => self.scroll.scroll_to_top(),
            KeyAction::ScrollToBottom => self.scroll.scroll_to_bottom(),
            KeyAction::CancelDrag | KeyAction::Quit => {}
        }
        self.report_scroll()
    }

    /// Feed the clamped scroll offset back to the engine.
    fn report_scroll(&mut self) -> Result<(), TuiError> {
        let outcome = self.list.on_scroll(self.scroll.offset())?;
        log_outcome(outcome);
        Ok(())
    }
}

fn log_outcome(outcome: MoveOutcome) {
    if let MoveOutcome::Reordered { from, to } = outcome {
        debug!(from, to, "List reordered");
    }
}

/// Header, list and status bar areas.
fn frame_areas(area: Rect) -> [Rect; 3] {
    Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Min(0),
        Constraint::Length(STATUS_BAR_HEIGHT),
    ])
    .areas(area)
}

fn render_frame(frame: &mut Frame, list: &DragList, styles: RowStyles) {
    let [header, body, status] = frame_areas(frame.area());

    frame.render_widget(
        Paragraph::new(Line::from("rowdrag: drag a row by its @ handle")).style(styles.bar()),
        header,
    );
    frame.render_widget(ListWidget::new(list, styles), body);
    frame.render_widget(
        Paragraph::new(status_line(list)).style(styles.bar()),
        status,
    );
}

fn status_line(list: &DragList) -> Line<'static> {
    let rows = list.snapshot().len();
    let session = list.controller().session();
    let text = match (session.dragged_index(), list.ghost()) {
        (Some(index), Some(ghost)) => {
            let scrolling = match list.controller().auto_scroll_direction() {
                Some(ScrollDirection::Up) => " (scrolling up)",
                Some(ScrollDirection::Down) => " (scrolling down)",
                None => "",
            };
            format!(
                "{rows} rows | moving {} to {}{scrolling} | Esc cancel",
                ghost.view.row,
                index + 1
            )
        }
        _ => format!("{rows} rows | j/k scroll  q quit"),
    };
    Line::from(text)
}

/// Initialize and run the TUI application
///
/// This is the main entry point for the TUI. It handles terminal
/// setup, runs the event loop, and ensures cleanup on exit.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run(config: &ResolvedConfig) -> Result<(), TuiError> {
    let mut app = TuiApp::new(config)?;
    info!(rows = app.list().snapshot().len(), "TUI started");

    // Run the app and ensure cleanup happens even on error
    let result = app.run();
    if let Err(err) = &result {
        error!(error = %err, "Event loop failed");
    }

    // Always restore terminal state
    restore_terminal()?;

    result
}

/// Raw mode is already on; switch to the alternate screen and build the
/// terminal.
fn enter_screen() -> Result<Terminal<CrosstermBackend<Stdout>>, TuiError> {
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(event::EnableMouseCapture)?;
    stdout.execute(event::EnableFocusChange)?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

/// Run `restore` if setup failed, so a half-initialized terminal is not left
/// in raw mode. The setup error wins over a restore error.
fn restore_on_error<T>(
    setup: Result<T, TuiError>,
    restore: impl FnOnce() -> Result<(), TuiError>,
) -> Result<T, TuiError> {
    if let Err(err) = &setup {
        error!(error = %err, "Terminal setup failed");
        if let Err(restore_err) = restore() {
            error!(error = %restore_err, "Terminal restore failed");
        }
    }
    setup
}

/// Restore terminal to normal state
///
/// Disables raw mode, mouse capture and focus reporting, and leaves the
/// alternate screen
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(event::DisableFocusChange)?;
    io::stdout().execute(event::DisableMouseCapture)?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

#[cfg(test)]
#[path = "view_tests.rs"]
mod tests;

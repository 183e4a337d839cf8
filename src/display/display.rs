use anyhow::Result;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use log::{debug, info};
use ratatui::{Frame, Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;

use crate::carousel::{Carousel, Navigation};
use crate::display::carousel_view::{CardHitbox, CarouselLayout, card_at, render_carousel};
use crate::display::session::TerminalSession;

// === Public entry point =====================================================

/// Mount the carousel on the terminal until the user quits.
///
/// # Arguments
/// * `carousel` - fully fetched records; the view never calls back into the
///   fetch layer.
/// * `heading` - title of the details panel.
///
/// The function:
/// - acquires a [`TerminalSession`] (released on every exit path),
/// - redraws on each tick, remeasuring the card strip as it lays it out,
/// - maps ←/→ (or h/l) key releases and card clicks to navigation,
/// - and exits when the user presses `q` or `Esc`.
pub fn display_carousel_interactive(carousel: Carousel, heading: &str) -> Result<()> {
    info!(
        "display_carousel_interactive: mounting carousel with {} records",
        carousel.len()
    );

    let session = TerminalSession::enter()?;
    let nav_kind = session.navigation_kind();
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    let mut app = CarouselApp::new(carousel, heading);

    loop {
        terminal.draw(|f| app.draw(f))?;

        if event::poll(Duration::from_millis(100))? {
            let ev = event::read()?;
            if app.handle_event(&ev, nav_kind) == Flow::Quit {
                info!("display_carousel_interactive: user quit (q/ESC)");
                break;
            }
        }
    }

    terminal.show_cursor()?;
    drop(session);
    info!(
        "display_carousel_interactive: unmounted at index {}",
        app.carousel.active()
    );
    Ok(())
}

// === Event handling =========================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Carousel state plus what the last frame put on screen.
#[derive(Debug)]
pub struct CarouselApp {
    pub carousel: Carousel,
    heading: String,
    hovered: Option<usize>,
    hitboxes: Vec<CardHitbox>,
}

impl CarouselApp {
    pub fn new(carousel: Carousel, heading: &str) -> Self {
        Self {
            carousel,
            heading: heading.to_string(),
            hovered: None,
            hitboxes: Vec::new(),
        }
    }

    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    /// Lay out, remeasure and render one frame.
    pub fn draw(&mut self, f: &mut Frame) {
        let layout = CarouselLayout::new(f.area());
        self.carousel.resize(
            layout.viewport.width as f64,
            &layout.measured_items(self.carousel.len()),
        );
        self.hitboxes = render_carousel(f, &self.carousel, &layout, &self.heading, self.hovered);
    }

    /// Apply one terminal event.
    ///
    /// `nav_kind` is the key event kind that navigates; see
    /// [`TerminalSession::navigation_kind`].
    pub fn handle_event(&mut self, ev: &Event, nav_kind: KeyEventKind) -> Flow {
        match ev {
            Event::Key(KeyEvent { code, kind, .. }) => match code {
                KeyCode::Char('q') | KeyCode::Esc if *kind == KeyEventKind::Press => {
                    return Flow::Quit;
                }
                KeyCode::Left | KeyCode::Char('h') if *kind == nav_kind => {
                    self.carousel.navigate(Navigation::Left);
                }
                KeyCode::Right | KeyCode::Char('l') if *kind == nav_kind => {
                    self.carousel.navigate(Navigation::Right);
                }
                _ => {}
            },

            Event::Mouse(MouseEvent {
                kind, column, row, ..
            }) => match kind {
                MouseEventKind::Down(MouseButton::Left) => {
                    if let Some(index) = card_at(&self.hitboxes, *column, *row) {
                        self.carousel.navigate(Navigation::Select(index));
                    }
                }
                MouseEventKind::Moved => {
                    let hovered = card_at(&self.hitboxes, *column, *row);
                    if hovered != self.hovered {
                        debug!("CarouselApp: hover {:?} -> {:?}", self.hovered, hovered);
                        self.hovered = hovered;
                    }
                }
                _ => {}
            },

            // The next draw lays the strip out again and remeasures.
            Event::Resize(width, height) => {
                debug!("CarouselApp: terminal resized to {}x{}", width, height);
            }

            _ => {}
        }
        Flow::Continue
    }
}

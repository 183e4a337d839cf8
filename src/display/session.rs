use std::io::{self, Write};

use crossterm::{
    event::{
        DisableMouseCapture, EnableMouseCapture, KeyEventKind, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    execute,
    terminal::{
        EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
        supports_keyboard_enhancement,
    },
};
use log::{debug, info, warn};

/// Terminal modes held for as long as the carousel is mounted.
///
/// Entering enables raw mode, the alternate screen, mouse capture and, when
/// the terminal speaks the kitty keyboard protocol, key release reporting.
/// Dropping the session undoes them in reverse order, on every exit path.
#[derive(Debug)]
pub struct TerminalSession {
    alternate_screen: bool,
    mouse_capture: bool,
    key_release_events: bool,
}

impl TerminalSession {
    pub fn enter() -> io::Result<Self> {
        enable_raw_mode()?;

        // Fields flip as each mode is enabled so a failure halfway still
        // cleans up exactly what was turned on.
        let mut session = Self {
            alternate_screen: false,
            mouse_capture: false,
            key_release_events: false,
        };
        let mut stdout = io::stdout();

        execute!(stdout, EnterAlternateScreen)?;
        session.alternate_screen = true;

        execute!(stdout, EnableMouseCapture)?;
        session.mouse_capture = true;

        if supports_keyboard_enhancement().unwrap_or(false) {
            execute!(
                stdout,
                PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
            )?;
            session.key_release_events = true;
        } else {
            debug!("TerminalSession: no keyboard enhancement, acting on key press");
        }

        info!(
            "TerminalSession: entered (key_release_events={})",
            session.key_release_events
        );
        Ok(session)
    }

    /// The key event kind navigation reacts to.
    ///
    /// Release when the terminal reports it, press otherwise.
    pub fn navigation_kind(&self) -> KeyEventKind {
        navigation_kind(self.key_release_events)
    }
}

pub(crate) fn navigation_kind(key_release_events: bool) -> KeyEventKind {
    if key_release_events {
        KeyEventKind::Release
    } else {
        KeyEventKind::Press
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let mut stdout = io::stdout();
        if self.key_release_events {
            let _ = execute!(stdout, PopKeyboardEnhancementFlags);
        }
        if self.mouse_capture {
            let _ = execute!(stdout, DisableMouseCapture);
        }
        if self.alternate_screen {
            let _ = execute!(stdout, LeaveAlternateScreen);
        }
        if let Err(e) = disable_raw_mode() {
            warn!("TerminalSession: failed to leave raw mode: {e}");
        }
        let _ = stdout.flush();
        info!("TerminalSession: terminal restored");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn release_reporting_selects_release_events() {
        assert_eq!(navigation_kind(true), KeyEventKind::Release);
        assert_eq!(navigation_kind(false), KeyEventKind::Press);
    }
}

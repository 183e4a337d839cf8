pub mod carousel_view;
pub mod display;
pub mod session;

pub use display::{CarouselApp, Flow, display_carousel_interactive};
pub use session::TerminalSession;

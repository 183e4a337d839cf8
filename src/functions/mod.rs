pub mod fetch;
pub mod list;
pub mod request;
pub mod tui;

pub use fetch::{FetchConfig, fetch_with};
pub use list::{cmd_list, list_with};
pub use request::{cmd_request, request_json};
pub use tui::run_tui;

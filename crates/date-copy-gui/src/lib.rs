pub mod config;
pub mod state;
pub mod ui;
pub mod view;

pub use state::{DateCopyApp, Status, ABOUT_TEXT, APP_TITLE};
pub use view::View;

mod menu;
mod session;
mod table;

pub use menu::{MenuAction, labelled, pick};
pub use session::Session;
pub use table::{format_area, group_thousands, render_history};

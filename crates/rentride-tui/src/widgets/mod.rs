mod list;
mod status_bar;
mod tab_bar;
mod trip;

pub use list::ContentWidget;
pub use status_bar::StatusBarWidget;
pub use tab_bar::TabBarWidget;
pub use trip::TripWidget;

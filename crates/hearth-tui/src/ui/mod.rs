mod app;
pub mod components;
pub mod format;
pub mod layout;
pub mod markdown;
pub mod notifications;
pub mod terminal;
pub mod theme;
pub mod views;

pub use app::{App, InputMode, LoadKind, LoadRequest, LoadResult, LoadState, Modal};
pub use terminal::Tui;

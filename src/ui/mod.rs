pub mod app;
pub mod events;
pub mod fetch;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod picture;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;
pub mod viewer;

pub use runtime::run;

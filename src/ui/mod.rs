pub mod app;
pub mod events;
pub mod input;
pub mod layout;
pub mod render;
pub mod runtime;
pub mod scheduler;
pub mod terminal_guard;
pub mod theme;

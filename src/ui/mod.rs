pub mod app;
pub mod class_counter;
pub mod component;
pub mod counter;
pub mod events;
pub mod footer;
pub mod function_counter;
pub mod header;
pub mod hooks;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;

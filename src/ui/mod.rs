//! Terminal UI: one event loop, per-screen state machines, ratatui views.

pub mod actions;
pub mod app;
pub mod cart;
pub mod catalog;
pub mod counter;
pub mod events;
pub mod fetch;
pub mod footer;
pub mod form;
pub mod gallery;
pub mod header;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod render;
pub mod runtime;
pub mod search;
pub mod terminal_guard;
pub mod theme;

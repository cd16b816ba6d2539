pub mod action;
pub mod event;
pub mod handler;
pub mod prompt;
pub mod state;

//! Minimal terminal runtime: an event loop that interleaves animation ticks,
//! redraws, and crossterm input, plus the [`App`] trait it drives.

mod app;
mod event;
mod event_loop;
mod runner;

pub use self::{app::App, runner::Tui};

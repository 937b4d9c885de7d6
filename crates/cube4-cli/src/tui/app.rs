use crossterm::event::Event;
use ratatui::Frame;

use crate::tui::Tui;

/// Application driven by [`Tui::run`].
pub trait App {
    /// Called once before the first event.
    fn init(&mut self, tui: &mut Tui);

    fn should_exit(&self) -> bool;

    /// Handles key, mouse and resize events.
    fn handle_event(&mut self, tui: &mut Tui, event: Event);

    fn draw(&self, frame: &mut Frame);

    /// Advances animations; called on each tick.
    fn update(&mut self, tui: &mut Tui);
}

//! Maps terminal key and mouse events to game commands.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use cube4_engine::MoveDirection;

/// Minimum horizontal drag, in terminal cells, that counts as a swipe.
///
/// A drag shorter than this on both axes is a tap.
pub const SWIPE_THRESHOLD: u16 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameCommand {
    Move(MoveDirection),
    Drop,
    Reset,
    Quit,
}

impl GameCommand {
    /// Reset and quit stay available while a piece is falling or after the game ends.
    pub fn is_always_allowed(self) -> bool {
        matches!(self, GameCommand::Reset | GameCommand::Quit)
    }
}

pub fn command_for_key(key: KeyEvent) -> Option<GameCommand> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    let command = match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => GameCommand::Quit,
        KeyCode::Left | KeyCode::Char('h') => GameCommand::Move(MoveDirection::Left),
        KeyCode::Right | KeyCode::Char('l') => GameCommand::Move(MoveDirection::Right),
        KeyCode::Up | KeyCode::Char('k') => GameCommand::Move(MoveDirection::Up),
        KeyCode::Down | KeyCode::Char('j') => GameCommand::Move(MoveDirection::Down),
        KeyCode::Char(' ') | KeyCode::Enter => GameCommand::Drop,
        KeyCode::Char('r') => GameCommand::Reset,
        KeyCode::Char('q') | KeyCode::Esc => GameCommand::Quit,
        _ => return None,
    };
    Some(command)
}

/// A completed pointer press, classified by how far it travelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    Tap,
    SwipeLeft,
    SwipeRight,
}

impl Gesture {
    /// Classifies a press that started at `start` and was released at `end`
    /// (both `(column, row)`).
    ///
    /// Vertical and diagonal-ish drags, and drags exactly `threshold` long,
    /// are not gestures.
    pub fn classify(start: (u16, u16), end: (u16, u16), threshold: u16) -> Option<Self> {
        let dx = i32::from(end.0) - i32::from(start.0);
        let dy = i32::from(end.1) - i32::from(start.1);
        let threshold = i32::from(threshold);

        if dx.abs() < threshold && dy.abs() < threshold {
            return Some(Gesture::Tap);
        }
        if dx.abs() > dy.abs() && dx.abs() > threshold {
            return Some(if dx > 0 {
                Gesture::SwipeRight
            } else {
                Gesture::SwipeLeft
            });
        }
        None
    }

    pub fn command(self) -> GameCommand {
        match self {
            Gesture::Tap => GameCommand::Drop,
            Gesture::SwipeLeft => GameCommand::Move(MoveDirection::Left),
            Gesture::SwipeRight => GameCommand::Move(MoveDirection::Right),
        }
    }
}

/// Remembers where the left button went down so the release can be classified.
#[derive(Debug, Default)]
pub struct PointerTracker {
    start: Option<(u16, u16)>,
}

impl PointerTracker {
    pub fn handle(&mut self, mouse: MouseEvent) -> Option<GameCommand> {
        let position = (mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.start = Some(position);
                None
            }
            MouseEventKind::Up(MouseButton::Left) => {
                let start = self.start.take()?;
                Gesture::classify(start, position, SWIPE_THRESHOLD).map(Gesture::command)
            }
            _ => None,
        }
    }
}

/// Turns any terminal event into a command, if it maps to one.
pub fn command_for_event(pointer: &mut PointerTracker, event: &Event) -> Option<GameCommand> {
    match event {
        Event::Key(key) => command_for_key(*key),
        Event::Mouse(mouse) => pointer.handle(*mouse),
        _ => None,
    }
}

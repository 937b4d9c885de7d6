use std::time::Duration;

use crossterm::event::Event;
use cube4_engine::{BoardSize, GameSession};
use ratatui::{
    Frame,
    layout::{Constraint, Layout},
};
use tracing::{debug, info, warn};

use crate::{
    command::play::drop_animation::DropAnimation,
    input::{self, GameCommand, PointerTracker},
    tui::{App, Tui},
    view::widgets::{KeyBinding, KeyBindingDisplay, SessionDisplay},
};

const PLAYING_KEYS: &[KeyBinding<'static>] = &[
    (&["←", "→", "↑", "↓"], "Move"),
    (&["Space"], "Drop"),
    (&["R"], "Reset"),
    (&["Q"], "Quit"),
];
const WAITING_KEYS: &[KeyBinding<'static>] = &[(&["R"], "Reset"), (&["Q"], "Quit")];

#[derive(Debug)]
pub struct PlayApp {
    session: GameSession,
    size: BoardSize,
    step_interval: Duration,
    animation: Option<DropAnimation>,
    pointer: PointerTracker,
    is_exiting: bool,
}

impl PlayApp {
    pub fn new(size: BoardSize, step_interval: Duration) -> Self {
        Self {
            session: GameSession::new(size),
            size,
            step_interval,
            animation: None,
            pointer: PointerTracker::default(),
            is_exiting: false,
        }
    }

    fn apply(&mut self, tui: &mut Tui, command: GameCommand) {
        if !command.is_always_allowed() && !self.session.accepts_input() {
            debug!(?command, "input ignored");
            return;
        }
        match command {
            GameCommand::Quit => self.is_exiting = true,
            GameCommand::Reset => {
                self.session.reset(self.size);
                self.animation = None;
                tui.set_tick_interval(None);
                info!("game reset");
            }
            GameCommand::Move(direction) => {
                self.session.move_claw(direction);
            }
            GameCommand::Drop => self.start_drop(tui),
        }
    }

    fn start_drop(&mut self, tui: &mut Tui) {
        let player = self.session.current_player();
        match self.session.initiate_drop() {
            Ok(target) => {
                self.animation = Some(DropAnimation::new(target, player, self.size));
                tui.set_tick_interval(Some(self.step_interval));
            }
            // The session status already tells the player what went wrong.
            Err(err) => debug!(%err, "drop refused"),
        }
    }

    fn advance_drop(&mut self, tui: &mut Tui) {
        let Some(animation) = &mut self.animation else {
            return;
        };
        if animation.step().is_falling() {
            return;
        }

        self.animation = None;
        tui.set_tick_interval(None);
        match self.session.complete_drop() {
            Ok(result) if result.game_over() => info!(status = %result.status, "game over"),
            Ok(_) => {}
            Err(err) => warn!(%err, "drop could not be completed"),
        }
    }
}

impl App for PlayApp {
    fn init(&mut self, tui: &mut Tui) {
        tui.set_tick_interval(None);
    }

    fn should_exit(&self) -> bool {
        self.is_exiting
    }

    fn handle_event(&mut self, tui: &mut Tui, event: Event) {
        if let Some(command) = input::command_for_event(&mut self.pointer, &event) {
            self.apply(tui, command);
        }
    }

    fn draw(&self, frame: &mut Frame) {
        let mut session_display = SessionDisplay::new(&self.session);
        if let Some(animation) = &self.animation {
            let target = animation.target();
            session_display = session_display.ghost(target.column.at(target.row));
            if let Some(coord) = animation.position() {
                session_display = session_display.falling_piece(coord, animation.player());
            }
        }
        let bindings = if self.session.accepts_input() {
            PLAYING_KEYS
        } else {
            WAITING_KEYS
        };

        let [main_area, help_area] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(frame.area());
        frame.render_widget(session_display, main_area);
        frame.render_widget(KeyBindingDisplay::new(bindings), help_area);
    }

    fn update(&mut self, tui: &mut Tui) {
        if self.animation.is_some() {
            self.advance_drop(tui);
        } else if tui.is_ticking() {
            tui.set_tick_interval(None);
        }
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use cube4_engine::{Column, Coord, Player};
    use ratatui::{Terminal, backend::TestBackend};

    use super::*;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn app() -> (PlayApp, Tui) {
        let mut app = PlayApp::new(BoardSize::new(4).unwrap(), Duration::from_millis(10));
        let mut tui = Tui::new();
        app.init(&mut tui);
        (app, tui)
    }

    fn finish_drop(app: &mut PlayApp, tui: &mut Tui) {
        for _ in 0..=app.size.get() + 1 {
            app.update(tui);
        }
    }

    #[test]
    fn test_drop_animates_then_places() {
        let (mut app, mut tui) = app();
        app.handle_event(&mut tui, key(KeyCode::Char(' ')));
        assert!(tui.is_ticking());
        assert!(app.session.drop_phase().is_dropping());
        assert_eq!(app.session.grid().occupied_count(), 0);

        finish_drop(&mut app, &mut tui);
        assert!(!tui.is_ticking());
        assert!(app.animation.is_none());
        assert_eq!(
            app.session.grid().get(Coord::new(2, 0, 2)),
            Some(Player::One.to_cell())
        );
        assert_eq!(app.session.current_player(), Player::Two);
    }

    #[test]
    fn test_input_ignored_while_dropping() {
        let (mut app, mut tui) = app();
        app.handle_event(&mut tui, key(KeyCode::Enter));
        app.handle_event(&mut tui, key(KeyCode::Left));
        app.handle_event(&mut tui, key(KeyCode::Enter));
        assert_eq!(app.session.claw_position(), Column::new(2, 2));

        finish_drop(&mut app, &mut tui);
        assert_eq!(app.session.grid().occupied_count(), 1);
    }

    #[test]
    fn test_moves_follow_keys() {
        let (mut app, mut tui) = app();
        app.handle_event(&mut tui, key(KeyCode::Char('h')));
        app.handle_event(&mut tui, key(KeyCode::Char('j')));
        assert_eq!(app.session.claw_position(), Column::new(1, 3));
    }

    #[test]
    fn test_reset_cancels_animation() {
        let (mut app, mut tui) = app();
        app.handle_event(&mut tui, key(KeyCode::Char(' ')));
        app.handle_event(&mut tui, key(KeyCode::Char('r')));
        assert!(app.animation.is_none());
        assert!(!tui.is_ticking());
        assert!(app.session.drop_phase().is_idle());

        finish_drop(&mut app, &mut tui);
        assert_eq!(app.session.grid().occupied_count(), 0);
    }

    #[test]
    fn test_quit() {
        let (mut app, mut tui) = app();
        assert!(!app.should_exit());
        app.handle_event(&mut tui, key(KeyCode::Char('q')));
        assert!(app.should_exit());
    }

    #[test]
    fn test_draw_mid_drop() {
        let (mut app, mut tui) = app();
        app.handle_event(&mut tui, key(KeyCode::Char(' ')));
        app.update(&mut tui);

        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|frame| app.draw(frame)).unwrap();
        let buffer = terminal.backend().buffer();
        let text: String = buffer.content().iter().map(|cell| cell.symbol()).collect();
        assert!(text.contains("Player 1's Turn"));
        assert!(text.contains("Reset"));
        assert!(!text.contains("Drop"));
    }
}

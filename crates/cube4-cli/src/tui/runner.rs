use std::{io, time::Duration};

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
};
use ratatui::DefaultTerminal;
use tracing::debug;

use crate::tui::{App, event::TuiEvent, event_loop::EventLoop};

/// Terminal application runtime.
#[derive(Default, Debug)]
pub struct Tui {
    events: EventLoop,
}

impl Tui {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts or stops tick events.
    pub fn set_tick_interval(&mut self, interval: Option<Duration>) {
        self.events.set_tick_interval(interval);
    }

    pub fn is_ticking(&self) -> bool {
        self.events.tick_interval().is_some()
    }

    /// Runs `app` until [`App::should_exit`] returns true.
    ///
    /// The terminal is switched to the alternate screen with mouse capture
    /// enabled, and restored on return.
    pub fn run<A>(mut self, app: &mut A) -> anyhow::Result<()>
    where
        A: App,
    {
        app.init(&mut self);

        ratatui::run(|terminal| -> anyhow::Result<()> {
            execute!(io::stdout(), EnableMouseCapture)?;
            let result = self.drive(app, terminal);
            execute!(io::stdout(), DisableMouseCapture)?;
            debug!("terminal restored");
            result
        })
    }

    fn drive<A>(&mut self, app: &mut A, terminal: &mut DefaultTerminal) -> anyhow::Result<()>
    where
        A: App,
    {
        while !app.should_exit() {
            match self.events.next()? {
                TuiEvent::Tick => app.update(self),
                TuiEvent::Render => {
                    terminal.draw(|f| app.draw(f))?;
                }
                TuiEvent::Terminal(event) => app.handle_event(self, event),
            }
        }
        Ok(())
    }
}

use crossterm::event::Event as CrosstermEvent;

/// Events processed by the runtime.
#[derive(Debug, Clone, derive_more::IsVariant, derive_more::From)]
pub(super) enum TuiEvent {
    /// Animation step, only generated while a tick interval is set.
    Tick,
    /// The screen is stale and should be redrawn.
    Render,
    /// Key presses, mouse input, resizes.
    Terminal(CrosstermEvent),
}

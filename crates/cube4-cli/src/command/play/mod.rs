use std::time::Duration;

use cube4_engine::BoardSize;
use tracing::info;

use crate::{command::play::app::PlayApp, tui::Tui};

mod app;
mod drop_animation;

const DEFAULT_DROP_SPEED: f64 = 12.0;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct PlayArg {
    /// Edge length of the cube
    #[clap(long, default_value_t = BoardSize::DEFAULT)]
    pub(crate) size: BoardSize,
    /// How fast a dropped piece falls, in rows per second
    #[clap(long, default_value_t = DEFAULT_DROP_SPEED, value_parser = parse_drop_speed)]
    pub(crate) drop_speed: f64,
}

impl Default for PlayArg {
    fn default() -> Self {
        Self {
            size: BoardSize::DEFAULT,
            drop_speed: DEFAULT_DROP_SPEED,
        }
    }
}

fn parse_drop_speed(s: &str) -> Result<f64, String> {
    let speed: f64 = s.parse().map_err(|e| format!("{e}"))?;
    step_interval(speed)?;
    Ok(speed)
}

/// Time the falling piece spends on each row at `speed` rows per second.
fn step_interval(speed: f64) -> Result<Duration, String> {
    if !(speed.is_finite() && speed > 0.0) {
        return Err(format!("drop speed must be a positive number, got {speed}"));
    }
    Duration::try_from_secs_f64(1.0 / speed)
        .map_err(|e| format!("drop speed {speed} is too slow: {e}"))
}

pub(crate) fn run(arg: &PlayArg) -> anyhow::Result<()> {
    let PlayArg { size, drop_speed } = *arg;
    info!(%size, drop_speed, "starting interactive game");

    let interval = step_interval(drop_speed).map_err(anyhow::Error::msg)?;
    let mut app = PlayApp::new(size, interval);
    Tui::new().run(&mut app)?;

    info!("interactive game closed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_drop_speed() {
        assert!(parse_drop_speed("2.5").is_ok_and(|speed| (speed - 2.5).abs() < f64::EPSILON));
        assert!(parse_drop_speed("0").is_err());
        assert!(parse_drop_speed("-1").is_err());
        assert!(parse_drop_speed("inf").is_err());
        assert!(parse_drop_speed("fast").is_err());
    }

    #[test]
    fn test_drop_speed_too_slow_for_duration() {
        assert!(parse_drop_speed("1e-20").is_err());
        assert!(parse_drop_speed("5e-324").is_err());
        assert!(step_interval(1e-20).is_err());
    }

    #[test]
    fn test_step_interval() {
        assert_eq!(step_interval(4.0), Ok(Duration::from_millis(250)));
        assert_eq!(
            step_interval(DEFAULT_DROP_SPEED).map(|interval| interval.is_zero()),
            Ok(false)
        );
    }
}

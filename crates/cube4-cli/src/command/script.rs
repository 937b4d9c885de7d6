use std::fmt::Write as _;

use anyhow::{Context as _, bail};
use cube4_engine::{BoardSize, Cell, Column, Coord, GameSession, MoveDirection, PlaceError};
use tracing::{info, warn};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct ScriptArg {
    /// Columns to drop into, as `x,z` pairs, in turn order
    #[clap(value_parser = parse_column, required = true)]
    moves: Vec<Column>,
    /// Edge length of the cube
    #[clap(long, default_value_t = BoardSize::DEFAULT)]
    size: BoardSize,
    /// Print the final state as JSON instead of text
    #[clap(long)]
    json: bool,
}

fn parse_column(s: &str) -> Result<Column, String> {
    let (x, z) = s
        .split_once(',')
        .ok_or_else(|| format!("expected `x,z`, got `{s}`"))?;
    let x = x.trim().parse().map_err(|e| format!("bad x in `{s}`: {e}"))?;
    let z = z.trim().parse().map_err(|e| format!("bad z in `{s}`: {e}"))?;
    Ok(Column::new(x, z))
}

pub(crate) fn run(arg: &ScriptArg) -> anyhow::Result<()> {
    let ScriptArg { moves, size, json } = arg;

    let mut session = GameSession::new(*size);
    let played = play(&mut session, moves);

    if *json {
        let output = serde_json::to_string_pretty(&session.snapshot())
            .context("failed to serialize game state")?;
        println!("{output}");
    } else {
        print!("{}", render_text(&session));
    }

    let played = played?;
    if played < moves.len() {
        warn!(played, total = moves.len(), "game ended before all moves were played");
        eprintln!(
            "game ended after {played} of {} moves; the rest were ignored",
            moves.len()
        );
    }
    Ok(())
}

/// Drops a piece into each column in turn through the claw.
///
/// Returns how many moves were played before the game ended.
fn play(session: &mut GameSession, moves: &[Column]) -> anyhow::Result<usize> {
    for (i, &column) in moves.iter().enumerate() {
        if session.is_game_over() {
            return Ok(i);
        }
        let size = session.size();
        if !column.is_inside(size) {
            let err = PlaceError::InvalidCoordinate {
                x: column.x,
                z: column.z,
                size: size.get(),
            };
            bail!("move {}: {err}", i + 1);
        }
        steer(session, column);
        session
            .initiate_drop()
            .with_context(|| format!("move {}: cannot drop into {column}", i + 1))?;
        let result = session
            .complete_drop()
            .with_context(|| format!("move {}: drop into {column} failed", i + 1))?;
        info!(move_number = i + 1, coord = %result.coord, player = %result.player, "piece dropped");
    }
    Ok(moves.len())
}

/// Moves the idle claw over `target`, which must be inside the board.
fn steer(session: &mut GameSession, target: Column) {
    while session.accepts_input() && session.claw_position() != target {
        let claw = session.claw_position();
        let direction = if claw.x > target.x {
            MoveDirection::Left
        } else if claw.x < target.x {
            MoveDirection::Right
        } else if claw.z > target.z {
            MoveDirection::Up
        } else {
            MoveDirection::Down
        };
        session.move_claw(direction);
    }
}

fn cell_char(cell: Cell) -> char {
    match cell.player() {
        None => '.',
        Some(player) => char::from(b'0' + player.number()),
    }
}

/// Every layer from the top down, x across and z down, then the status.
fn render_text(session: &GameSession) -> String {
    let n = session.size().get();
    let grid = session.grid();
    let mut out = String::new();

    for y in (0..n).rev() {
        let _ = writeln!(out, "y={y}");
        for z in 0..n {
            let row = (0..n)
                .map(|x| cell_char(grid.get(Coord::new(x, y, z)).unwrap_or_default()).to_string())
                .collect::<Vec<_>>();
            let _ = writeln!(out, "{}", row.join(" "));
        }
        out.push('\n');
    }

    let _ = writeln!(out, "{}", session.status_message());
    if let Some(line) = session.winning_line() {
        let cells = line
            .cells
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>();
        let _ = writeln!(out, "Winning line: {}", cells.join(" "));
    }
    out
}

#[cfg(test)]
mod tests {
    use cube4_engine::{GameOutcome, Player};

    use super::*;

    fn columns(moves: &[(usize, usize)]) -> Vec<Column> {
        moves.iter().map(|&(x, z)| Column::new(x, z)).collect()
    }

    #[test]
    fn test_parse_column() {
        assert_eq!(parse_column("1,3"), Ok(Column::new(1, 3)));
        assert_eq!(parse_column(" 0 , 4 "), Ok(Column::new(0, 4)));
        assert!(parse_column("1").is_err());
        assert!(parse_column("a,1").is_err());
        assert!(parse_column("1,-1").is_err());
    }

    #[test]
    fn test_play_stops_at_win() {
        let mut session = GameSession::new(BoardSize::new(4).unwrap());
        let moves = columns(&[(0, 0), (0, 3), (1, 0), (1, 3), (2, 0), (2, 3), (3, 0), (3, 3)]);

        assert_eq!(play(&mut session, &moves).unwrap(), 7);
        assert_eq!(session.outcome(), Some(GameOutcome::Winner(Player::One)));
        assert_eq!(session.grid().occupied_count(), 7);
    }

    #[test]
    fn test_play_rejects_outside_column() {
        let mut session = GameSession::new(BoardSize::new(4).unwrap());
        let err = play(&mut session, &columns(&[(1, 1), (4, 0)])).unwrap_err();
        assert_eq!(
            err.to_string(),
            "move 2: column (4, 0) is outside a board of size 4"
        );
        assert_eq!(session.grid().occupied_count(), 1);
    }

    #[test]
    fn test_play_reports_full_column() {
        let mut session = GameSession::new(BoardSize::new(2).unwrap());
        let err = play(&mut session, &columns(&[(0, 0), (0, 0), (0, 0)])).unwrap_err();
        assert!(err.to_string().starts_with("move 3: cannot drop into (0, 0)"));
        assert_eq!(session.status_message(), "Column is full!");
    }

    #[test]
    fn test_render_text() {
        let mut session = GameSession::new(BoardSize::new(2).unwrap());
        play(&mut session, &columns(&[(1, 0), (1, 0), (0, 1)])).unwrap();
        assert_eq!(
            render_text(&session),
            "y=1\n. 2\n. .\n\ny=0\n. 1\n1 .\n\nPlayer 2's Turn\n"
        );
    }

    #[test]
    fn test_render_text_lists_winning_line() {
        let mut session = GameSession::new(BoardSize::new(4).unwrap());
        let moves = columns(&[(0, 0), (0, 3), (1, 0), (1, 3), (2, 0), (2, 3), (3, 0)]);
        play(&mut session, &moves).unwrap();

        let text = render_text(&session);
        assert!(text.ends_with(
            "Player 1 Wins!\nWinning line: (0, 0, 0) (1, 0, 0) (2, 0, 0) (3, 0, 0)\n"
        ));
    }
}

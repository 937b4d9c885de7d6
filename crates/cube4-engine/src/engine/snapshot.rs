use serde::Serialize;

use crate::core::{BoardSize, Cell, Coord, Player};

use super::{
    board_state::GameOutcome, claw::ClawState, game_session::GameSession,
    win_detector::WinningLine,
};

/// Owned, serializable copy of everything a renderer needs from a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub size: BoardSize,
    /// Cells indexed `[x][y][z]`.
    pub grid: Vec<Vec<Vec<Cell>>>,
    pub current_player: Player,
    pub game_over: bool,
    pub outcome: Option<GameOutcome>,
    pub status: String,
    pub claw: ClawState,
    pub last_placed: Option<Coord>,
    pub winning_line: Option<WinningLine>,
}

impl Snapshot {
    #[must_use]
    pub fn new(session: &GameSession) -> Self {
        Self {
            size: session.size(),
            grid: session.grid().to_nested(),
            current_player: session.current_player(),
            game_over: session.is_game_over(),
            outcome: session.outcome(),
            status: session.status_message().to_owned(),
            claw: session.claw().clone(),
            last_placed: session.last_placed(),
            winning_line: session.winning_line().cloned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_snapshot_json() {
        let mut session = GameSession::new(BoardSize::new(4).unwrap());
        session.place(1, 2).unwrap();

        let value = serde_json::to_value(session.snapshot()).unwrap();
        assert_eq!(value["size"], json!(4));
        assert_eq!(value["grid"][1][0][2], json!(1));
        assert_eq!(value["grid"][2][0][1], json!(0));
        assert_eq!(value["current_player"], json!(2));
        assert_eq!(value["game_over"], json!(false));
        assert_eq!(value["outcome"], json!(null));
        assert_eq!(value["status"], json!("Player 2's Turn"));
        assert_eq!(
            value["claw"],
            json!({ "position": { "x": 2, "z": 2 }, "phase": "idle", "pending_column": null })
        );
        assert_eq!(value["last_placed"], json!({ "x": 1, "y": 0, "z": 2 }));
    }

    #[test]
    fn test_snapshot_records_win() {
        let mut session = GameSession::default();
        for y in 0..3 {
            session.place(0, 0).unwrap();
            session.place(4, y).unwrap();
        }
        session.place(0, 0).unwrap();

        let snapshot = session.snapshot();
        assert!(snapshot.game_over);
        assert_eq!(snapshot.outcome, Some(GameOutcome::Winner(Player::One)));
        let line = snapshot.winning_line.unwrap();
        assert_eq!(line.cells.len(), 4);
        assert!(line.cells.iter().all(|c| c.x == 0 && c.z == 0));

        let value = serde_json::to_value(&session.snapshot()).unwrap();
        assert_eq!(value["outcome"], json!({ "winner": 1 }));
    }
}

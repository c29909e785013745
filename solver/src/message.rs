use serde::{Deserialize, Serialize};

/// Inbound request from the board-watching collaborator.
///
/// Wire shape is a tagged JSON object: `{"type":"startSolve",
/// "fen_string":"..."}`, `{"type":"newGame"}` or `{"type":"stopSolve"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SolveMessage {
    #[serde(rename = "startSolve")]
    StartSolve { fen_string: String },
    #[serde(rename = "newGame")]
    NewGame,
    #[serde(rename = "stopSolve")]
    StopSolve,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_solve_wire_shape() {
        let msg: SolveMessage =
            serde_json::from_str(r#"{"type":"startSolve","fen_string":"fen-a"}"#).unwrap();
        assert_eq!(
            msg,
            SolveMessage::StartSolve {
                fen_string: "fen-a".to_string()
            }
        );
    }

    #[test]
    fn test_unit_message_wire_shapes() {
        let msg: SolveMessage = serde_json::from_str(r#"{"type":"newGame"}"#).unwrap();
        assert_eq!(msg, SolveMessage::NewGame);

        let msg: SolveMessage = serde_json::from_str(r#"{"type":"stopSolve"}"#).unwrap();
        assert_eq!(msg, SolveMessage::StopSolve);
    }

    #[test]
    fn test_start_solve_requires_fen() {
        let result = serde_json::from_str::<SolveMessage>(r#"{"type":"startSolve"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_type_is_rejected() {
        let result = serde_json::from_str::<SolveMessage>(r#"{"type":"solveHarder"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_serialize_matches_wire_names() {
        let json = serde_json::to_string(&SolveMessage::StartSolve {
            fen_string: "fen-a".to_string(),
        })
        .unwrap();
        assert_eq!(json, r#"{"type":"startSolve","fen_string":"fen-a"}"#);
    }
}

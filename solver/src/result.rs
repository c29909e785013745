use serde::{Deserialize, Serialize};
use uci::Score;

/// Best-move notification republished to observers after every processed
/// engine line, under the `solver_result` store key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolveResult {
    pub best_move: String,
    pub fen: String,
    pub evaluation: Evaluation,
    /// Depth reported by the line that produced this notification; absent
    /// for lines that carried none.
    pub depth: Option<u32>,
}

/// Position strength as observers see it: a plain centipawn number, or a
/// signed mate-distance token such as `"M3"` / `"-M3"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Evaluation {
    Centipawns(i32),
    Mate(String),
}

impl From<Score> for Evaluation {
    fn from(score: Score) -> Self {
        match score {
            Score::Centipawns(cp) => Evaluation::Centipawns(cp),
            Score::Mate(_) => Evaluation::Mate(score.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centipawn_evaluation_serializes_as_number() {
        let result = SolveResult {
            best_move: "d2d4".to_string(),
            fen: "fen-a".to_string(),
            evaluation: Score::Centipawns(35).into(),
            depth: Some(10),
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "best_move": "d2d4",
                "fen": "fen-a",
                "evaluation": 35,
                "depth": 10,
            })
        );
    }

    #[test]
    fn test_mate_evaluation_serializes_as_token() {
        assert_eq!(
            serde_json::to_value(Evaluation::from(Score::Mate(3))).unwrap(),
            serde_json::json!("M3")
        );
        assert_eq!(
            serde_json::to_value(Evaluation::from(Score::Mate(-3))).unwrap(),
            serde_json::json!("-M3")
        );
    }

    #[test]
    fn test_missing_depth_serializes_as_null() {
        let result = SolveResult {
            best_move: String::new(),
            fen: "fen-a".to_string(),
            evaluation: Evaluation::Centipawns(0),
            depth: None,
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["depth"], serde_json::Value::Null);
    }

    #[test]
    fn test_evaluation_roundtrip() {
        let number: Evaluation = serde_json::from_str("-120").unwrap();
        assert_eq!(number, Evaluation::Centipawns(-120));

        let token: Evaluation = serde_json::from_str("\"-M5\"").unwrap();
        assert_eq!(token, Evaluation::Mate("-M5".to_string()));
    }
}

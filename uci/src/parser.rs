use crate::{EngineEvent, Score, SearchProgress};

/// Decode one line of engine output.
///
/// This never fails: the solver has to keep running whatever the engine
/// prints, so unknown or malformed lines decode to
/// [`EngineEvent::Unrecognized`] instead of an error.
pub fn parse_engine_line(line: &str) -> EngineEvent {
    let tokens: Vec<&str> = line.split_whitespace().collect();

    match tokens.first() {
        Some(&"bestmove") => EngineEvent::BestMove {
            mv: tokens.get(1).unwrap_or(&"").to_string(),
        },
        Some(&"info") => EngineEvent::Progress(parse_info_line(&tokens[1..])),
        _ => EngineEvent::Unrecognized,
    }
}

/// Scan an "info" line for the fields the solver consumes
fn parse_info_line(tokens: &[&str]) -> SearchProgress {
    let mut progress = SearchProgress::default();
    let mut i = 0;

    while i < tokens.len() {
        match tokens[i] {
            "depth" => {
                i += 1;
                progress.depth = tokens.get(i).and_then(|s| s.parse().ok());
            }
            "score" => {
                i += 1;
                if let Some(&score_type) = tokens.get(i) {
                    i += 1;
                    if let Some(value_str) = tokens.get(i) {
                        progress.score = match score_type {
                            "cp" => value_str.parse().ok().map(Score::Centipawns),
                            "mate" => value_str.parse().ok().map(Score::Mate),
                            _ => None,
                        };
                    }
                }
            }
            "pv" => {
                // The move list is the tail of the line; only the first
                // move matters here.
                progress.pv_move = tokens.get(i + 1).unwrap_or(&"").to_string();
                break;
            }
            _ => {
                // Unknown keyword, skip
            }
        }
        i += 1;
    }

    progress
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bestmove() {
        let event = parse_engine_line("bestmove e2e4 ponder e7e5");
        assert_eq!(
            event,
            EngineEvent::BestMove {
                mv: "e2e4".to_string()
            }
        );
    }

    #[test]
    fn test_parse_bestmove_without_move_token() {
        let event = parse_engine_line("bestmove");
        assert_eq!(event, EngineEvent::BestMove { mv: String::new() });
    }

    #[test]
    fn test_parse_bestmove_none_token() {
        // Mated or stalemated positions produce "bestmove (none)"; the
        // token passes through untouched.
        let event = parse_engine_line("bestmove (none)");
        assert_eq!(
            event,
            EngineEvent::BestMove {
                mv: "(none)".to_string()
            }
        );
    }

    #[test]
    fn test_parse_info() {
        let event =
            parse_engine_line("info depth 12 seldepth 16 score cp 35 nodes 15234 pv e2e4 e7e5");
        match event {
            EngineEvent::Progress(progress) => {
                assert_eq!(progress.depth, Some(12));
                assert_eq!(progress.score, Some(Score::Centipawns(35)));
                assert_eq!(progress.pv_move, "e2e4");
            }
            other => panic!("Wrong event type: {:?}", other),
        }
    }

    #[test]
    fn test_parse_info_mate_score() {
        let event = parse_engine_line("info depth 18 score mate -3 pv h5f7 g8f7");
        match event {
            EngineEvent::Progress(progress) => {
                assert_eq!(progress.score, Some(Score::Mate(-3)));
                assert_eq!(progress.pv_move, "h5f7");
            }
            other => panic!("Wrong event type: {:?}", other),
        }
    }

    #[test]
    fn test_parse_info_without_pv() {
        let event = parse_engine_line("info depth 5 currmove e2e4 currmovenumber 1");
        match event {
            EngineEvent::Progress(progress) => {
                assert_eq!(progress.depth, Some(5));
                assert_eq!(progress.pv_move, "");
                assert_eq!(progress.score, None);
            }
            other => panic!("Wrong event type: {:?}", other),
        }
    }

    #[test]
    fn test_parse_info_score_missing_value() {
        let event = parse_engine_line("info depth 4 score cp");
        match event {
            EngineEvent::Progress(progress) => {
                assert_eq!(progress.depth, Some(4));
                assert_eq!(progress.score, None);
            }
            other => panic!("Wrong event type: {:?}", other),
        }
    }

    #[test]
    fn test_parse_info_unknown_score_type() {
        let event = parse_engine_line("info score wdl 512 488 0");
        match event {
            EngineEvent::Progress(progress) => assert_eq!(progress.score, None),
            other => panic!("Wrong event type: {:?}", other),
        }
    }

    #[test]
    fn test_parse_info_trailing_pv_keyword() {
        let event = parse_engine_line("info depth 3 pv");
        match event {
            EngineEvent::Progress(progress) => assert_eq!(progress.pv_move, ""),
            other => panic!("Wrong event type: {:?}", other),
        }
    }

    #[test]
    fn test_parse_info_non_numeric_depth() {
        let event = parse_engine_line("info depth x score cp 10 pv d2d4");
        match event {
            EngineEvent::Progress(progress) => {
                assert_eq!(progress.depth, None);
                assert_eq!(progress.score, Some(Score::Centipawns(10)));
                assert_eq!(progress.pv_move, "d2d4");
            }
            other => panic!("Wrong event type: {:?}", other),
        }
    }

    #[test]
    fn test_unrecognized_lines() {
        let lines = [
            "uciok",
            "readyok",
            "id name Stockfish 16",
            "Stockfish 16 by the Stockfish developers (see AUTHORS file)",
            "option name Hash type spin default 16 min 1 max 33554432",
            "",
            "   ",
        ];
        for line in lines {
            assert_eq!(
                parse_engine_line(line),
                EngineEvent::Unrecognized,
                "line: {:?}",
                line
            );
        }
    }
}

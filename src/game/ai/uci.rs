//! UCI text codec
//!
//! Formats the handful of commands the adapter sends and parses the replies
//! it cares about. Anything else the engine prints (`id`, `option`,
//! `info string`, ...) parses to `None` and is ignored.

use super::SkillLevel;
use std::fmt;

/// A command line sent to the engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UciCommand {
    Uci,
    IsReady,
    SetOption { name: &'static str, value: String },
    Position { fen: String },
    Go { depth: u32, movetime_ms: u64 },
    Quit,
}

impl fmt::Display for UciCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UciCommand::Uci => write!(f, "uci"),
            UciCommand::IsReady => write!(f, "isready"),
            UciCommand::SetOption { name, value } => {
                write!(f, "setoption name {} value {}", name, value)
            }
            UciCommand::Position { fen } => write!(f, "position fen {}", fen),
            UciCommand::Go { depth, movetime_ms } => {
                write!(f, "go depth {} movetime {}", depth, movetime_ms)
            }
            UciCommand::Quit => write!(f, "quit"),
        }
    }
}

/// Strength options for `level`: unlimited at the top level, Elo-capped below
pub fn strength_commands(level: SkillLevel) -> Vec<UciCommand> {
    if level.limits_strength() {
        vec![
            UciCommand::SetOption {
                name: "UCI_LimitStrength",
                value: "true".to_string(),
            },
            UciCommand::SetOption {
                name: "UCI_Elo",
                value: level.elo().to_string(),
            },
        ]
    } else {
        vec![UciCommand::SetOption {
            name: "UCI_LimitStrength",
            value: "false".to_string(),
        }]
    }
}

/// Engine score, from the side to move's point of view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Evaluation {
    Centipawns(i32),
    /// Mate in n moves; negative when the side to move gets mated
    Mate(i32),
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Evaluation::Centipawns(cp) => write!(f, "{:+.2}", f64::from(*cp) / 100.0),
            Evaluation::Mate(n) if *n < 0 => write!(f, "-M{}", n.unsigned_abs()),
            Evaluation::Mate(n) => write!(f, "M{}", n),
        }
    }
}

/// A reply line the adapter acts on
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineReply {
    UciOk,
    ReadyOk,
    /// `bestmove <uci>`; `None` for `bestmove (none)` in terminal positions
    BestMove { best: Option<String> },
    Info {
        depth: Option<u32>,
        score: Option<Evaluation>,
    },
}

/// Parse one line of engine output
pub fn parse_reply(line: &str) -> Option<EngineReply> {
    let line = line.trim();
    match line {
        "uciok" => return Some(EngineReply::UciOk),
        "readyok" => return Some(EngineReply::ReadyOk),
        _ => {}
    }

    let mut tokens = line.split_whitespace();
    match tokens.next()? {
        // Always ends the search; an unusable move is reported as no move
        "bestmove" => {
            let best = tokens
                .next()
                .filter(|best| is_uci_move(best))
                .map(str::to_string);
            Some(EngineReply::BestMove { best })
        }
        "info" => parse_info(tokens),
        _ => None,
    }
}

fn parse_info<'a>(mut tokens: impl Iterator<Item = &'a str>) -> Option<EngineReply> {
    let mut depth: Option<u32> = None;
    let mut score: Option<Evaluation> = None;

    while let Some(token) = tokens.next() {
        match token {
            "depth" => depth = tokens.next().and_then(|t| t.parse().ok()),
            "score" => {
                score = match (tokens.next(), tokens.next().and_then(|t| t.parse::<i32>().ok())) {
                    (Some("cp"), Some(cp)) => Some(Evaluation::Centipawns(cp)),
                    (Some("mate"), Some(n)) => Some(Evaluation::Mate(n)),
                    _ => score,
                }
            }
            // Free text and move lists follow; nothing after them is a field
            "string" | "pv" => break,
            _ => {}
        }
    }

    if depth.is_none() && score.is_none() {
        return None;
    }
    Some(EngineReply::Info { depth, score })
}

/// `[a-h][1-8][a-h][1-8][qrbn]?`
pub fn is_uci_move(text: &str) -> bool {
    let bytes = text.as_bytes();
    if bytes.len() != 4 && bytes.len() != 5 {
        return false;
    }
    let file = |b: u8| (b'a'..=b'h').contains(&b);
    let rank = |b: u8| (b'1'..=b'8').contains(&b);
    file(bytes[0])
        && rank(bytes[1])
        && file(bytes[2])
        && rank(bytes[3])
        && bytes.get(4).is_none_or(|p| b"qrbn".contains(p))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_text() {
        assert_eq!(UciCommand::Uci.to_string(), "uci");
        assert_eq!(
            UciCommand::Position {
                fen: "8/8/8/8/8/8/8/8 w - - 0 1".to_string()
            }
            .to_string(),
            "position fen 8/8/8/8/8/8/8/8 w - - 0 1"
        );
        assert_eq!(
            UciCommand::Go {
                depth: 12,
                movetime_ms: 2000
            }
            .to_string(),
            "go depth 12 movetime 2000"
        );
    }

    #[test]
    fn test_strength_commands() {
        let limited: Vec<_> = strength_commands(SkillLevel::new(10).unwrap())
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(
            limited,
            vec![
                "setoption name UCI_LimitStrength value true",
                "setoption name UCI_Elo value 1700"
            ]
        );
        let full: Vec<_> = strength_commands(SkillLevel::MAX)
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(full, vec!["setoption name UCI_LimitStrength value false"]);
    }

    #[test]
    fn test_parse_handshake() {
        assert_eq!(parse_reply("uciok"), Some(EngineReply::UciOk));
        assert_eq!(parse_reply("readyok\r"), Some(EngineReply::ReadyOk));
        assert_eq!(parse_reply("id name Stockfish 16"), None);
    }

    #[test]
    fn test_parse_bestmove() {
        assert_eq!(
            parse_reply("bestmove e2e4 ponder e7e5"),
            Some(EngineReply::BestMove {
                best: Some("e2e4".to_string())
            })
        );
        assert_eq!(
            parse_reply("bestmove e7e8q"),
            Some(EngineReply::BestMove {
                best: Some("e7e8q".to_string())
            })
        );
        assert_eq!(
            parse_reply("bestmove (none)"),
            Some(EngineReply::BestMove { best: None })
        );
        // Malformed moves still close the search
        assert_eq!(
            parse_reply("bestmove"),
            Some(EngineReply::BestMove { best: None })
        );
        assert_eq!(
            parse_reply("bestmove e1e9"),
            Some(EngineReply::BestMove { best: None })
        );
        assert_eq!(parse_reply("bestmoves e2e4"), None);
    }

    #[test]
    fn test_parse_info() {
        assert_eq!(
            parse_reply("info depth 14 seldepth 20 multipv 1 score cp -35 nodes 1000 pv e7e5 g1f3"),
            Some(EngineReply::Info {
                depth: Some(14),
                score: Some(Evaluation::Centipawns(-35))
            })
        );
        assert_eq!(
            parse_reply("info depth 9 score mate 3 pv d1h5"),
            Some(EngineReply::Info {
                depth: Some(9),
                score: Some(Evaluation::Mate(3))
            })
        );
        assert_eq!(parse_reply("info string NNUE enabled depth 3"), None);
        assert_eq!(parse_reply("info currmove e2e4 currmovenumber 1"), None);
    }

    #[test]
    fn test_evaluation_display() {
        assert_eq!(Evaluation::Centipawns(35).to_string(), "+0.35");
        assert_eq!(Evaluation::Centipawns(-120).to_string(), "-1.20");
        assert_eq!(Evaluation::Centipawns(0).to_string(), "+0.00");
        assert_eq!(Evaluation::Mate(3).to_string(), "M3");
        assert_eq!(Evaluation::Mate(-4).to_string(), "-M4");
    }
}

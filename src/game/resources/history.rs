//! Move history tracking
//!
//! Ordered SAN record of the current game. Append-only while the game runs;
//! only [`crate::game::session::TrainingSession::undo_last_exchange`] removes
//! entries, two at a time.
//!
//! The history length doubles as the ply index into the active book line:
//! the book token the next mover is expected to play is `line.moves[len]`.

/// Ordered SAN record of the current game
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MoveHistory {
    /// Index 0 = White's first move, index 1 = Black's reply, etc.
    moves: Vec<String>,
}

impl MoveHistory {
    pub fn add_move(&mut self, san: impl Into<String>) {
        self.moves.push(san.into());
    }

    /// Remove and return the most recent move
    pub fn pop(&mut self) -> Option<String> {
        self.moves.pop()
    }

    pub fn last_move(&self) -> Option<&str> {
        self.moves.last().map(String::as_str)
    }

    pub fn get_move(&self, ply: usize) -> Option<&str> {
        self.moves.get(ply).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn clear(&mut self) {
        self.moves.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.moves.iter().map(String::as_str)
    }

    /// Completed full-move count, rounding a lone white move up
    pub fn full_moves(&self) -> usize {
        self.moves.len().div_ceil(2)
    }

    /// Numbered move pairs, e.g. `["1. e4 e5", "2. Nf3"]`
    pub fn numbered_pairs(&self) -> Vec<String> {
        self.moves
            .chunks(2)
            .enumerate()
            .map(|(i, pair)| match pair {
                [white, black] => format!("{}. {} {}", i + 1, white, black),
                [white] => format!("{}. {}", i + 1, white),
                _ => String::new(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_pop() {
        let mut history = MoveHistory::default();
        assert!(history.is_empty());
        history.add_move("e4");
        history.add_move("e5");
        assert_eq!(history.len(), 2);
        assert_eq!(history.last_move(), Some("e5"));
        assert_eq!(history.pop().as_deref(), Some("e5"));
        assert_eq!(history.get_move(0), Some("e4"));
    }

    #[test]
    fn test_numbered_pairs() {
        let mut history = MoveHistory::default();
        for san in ["e4", "e5", "Nf3"] {
            history.add_move(san);
        }
        assert_eq!(history.numbered_pairs(), vec!["1. e4 e5", "2. Nf3"]);
        assert_eq!(history.full_moves(), 2);
    }
}

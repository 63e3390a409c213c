//! Opening repertoire - the static catalog of named openings
//!
//! Every opening has one or more named lines (literal SAN token sequences from
//! the initial position), a designated main line and the side the trainee
//! plays. The catalog is immutable and lives for the whole program.
//!
//! # Examples
//!
//! ```rust,ignore
//! let philidor = repertoire::opening("philidor")?;
//! assert_eq!(philidor.trainee, Color::Black);
//! assert_eq!(repertoire::main_line_length("philidor")?, 19);
//! ```

mod catalog;

use crate::game::error::{TrainerError, TrainerResult};
use shakmaty::Color;

/// A named opening and its lines
#[derive(Debug)]
pub struct Opening {
    pub key: &'static str,
    pub name: &'static str,
    /// Side the trainee plays; the computer plays the other side
    pub trainee: Color,
    /// Key of the line used by `selectOpening` / `newGame`
    pub main_line: &'static str,
    pub lines: &'static [Line],
    /// Sound developing moves accepted with an informational verdict.
    /// Only Philidor and London carry a list; every other opening is empty.
    pub alternatives: &'static [&'static str],
    pub description: &'static str,
}

/// One variation: SAN tokens alternating white and black from move 1
#[derive(Debug)]
pub struct Line {
    pub key: &'static str,
    pub moves: &'static [&'static str],
}

impl Line {
    /// Book token expected at `ply` (0-based), if the line reaches that far
    pub fn token(&self, ply: usize) -> Option<&'static str> {
        self.moves.get(ply).copied()
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }
}

impl Opening {
    /// Look up a line of this opening by key
    pub fn line(&self, key: &str) -> TrainerResult<&'static Line> {
        self.lines
            .iter()
            .find(|line| line.key == key)
            .ok_or_else(|| TrainerError::UnknownLine {
                opening: self.key.to_string(),
                line: key.to_string(),
            })
    }

    /// The designated main line
    pub fn main(&self) -> TrainerResult<&'static Line> {
        self.line(self.main_line)
    }

    /// Keys of all lines, main line first
    pub fn line_keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        std::iter::once(self.main_line).chain(
            self.lines
                .iter()
                .map(|line| line.key)
                .filter(move |key| *key != self.main_line),
        )
    }
}

/// All openings in catalog order
pub fn openings() -> &'static [Opening] {
    catalog::OPENINGS
}

/// Look up an opening by key
pub fn opening(key: &str) -> TrainerResult<&'static Opening> {
    catalog::OPENINGS
        .iter()
        .find(|opening| opening.key == key)
        .ok_or_else(|| TrainerError::UnknownOpening {
            key: key.to_string(),
        })
}

/// Number of plies in the opening's main line
pub fn main_line_length(key: &str) -> TrainerResult<usize> {
    Ok(opening(key)?.main()?.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_opening_has_its_main_line() {
        for opening in openings() {
            assert!(
                opening.main().is_ok(),
                "{} is missing main line {}",
                opening.key,
                opening.main_line
            );
            assert!(!opening.description.is_empty());
        }
    }

    #[test]
    fn test_keys_are_unique() {
        let mut keys: Vec<_> = openings().iter().map(|o| o.key).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), openings().len());
    }

    #[test]
    fn test_philidor_shape() {
        let philidor = opening("philidor").unwrap();
        assert_eq!(philidor.name, "Philidor Defense");
        assert_eq!(philidor.trainee, Color::Black);
        assert_eq!(main_line_length("philidor").unwrap(), 19);
        assert_eq!(philidor.main().unwrap().token(3), Some("d6"));
        assert_eq!(philidor.main().unwrap().token(19), None);
    }

    #[test]
    fn test_unknown_keys_are_errors() {
        assert!(matches!(
            opening("bongcloud"),
            Err(TrainerError::UnknownOpening { .. })
        ));
        let london = opening("london").unwrap();
        assert!(matches!(
            london.line("nope"),
            Err(TrainerError::UnknownLine { .. })
        ));
    }

    #[test]
    fn test_line_keys_start_with_main() {
        let sicilian = opening("sicilian").unwrap();
        let keys: Vec<_> = sicilian.line_keys().collect();
        assert_eq!(keys[0], "najdorf");
        assert_eq!(keys.len(), sicilian.lines.len());
    }

    #[test]
    fn test_only_two_openings_carry_alternatives() {
        let with_lists: Vec<_> = openings()
            .iter()
            .filter(|o| !o.alternatives.is_empty())
            .map(|o| o.key)
            .collect();
        assert_eq!(with_lists, vec!["philidor", "london"]);
    }
}

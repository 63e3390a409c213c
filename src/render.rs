//! Terminal rendering collaborator
//!
//! Paints a [`SessionView`] as a framed ASCII board plus a side panel. Square
//! markers, strongest first:
//!
//! | Marker  | Meaning                          |
//! |---------|----------------------------------|
//! | `[x]`   | selected square                  |
//! | `(x)`   | legal destination                |
//! | `{x}`   | engine hint / predicted reply    |
//! | `<x>`   | next book move                   |

use crate::game::runtime::Presenter;
use crate::game::session::SessionView;
use shakmaty::{Color, File, Rank, Square};
use std::io::Write;
use tracing::warn;

/// Writes views and notices to any `Write`, normally stdout
pub struct TerminalRenderer<W: Write> {
    out: W,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    fn write(&mut self, text: &str) {
        let result = writeln!(self.out, "{}", text).and_then(|_| self.out.flush());
        if let Err(e) = result {
            warn!("[RUNTIME] Terminal write failed: {}", e);
        }
    }
}

impl<W: Write> Presenter for TerminalRenderer<W> {
    fn present(&mut self, view: &SessionView) {
        let text = render(view);
        self.write(&text);
    }

    fn notice(&mut self, text: &str) {
        self.write(text);
    }
}

/// Board and side panel as text
pub fn render(view: &SessionView) -> String {
    let mut lines = Vec::with_capacity(24);

    let files: Vec<u32> = if view.flipped {
        (0..8).rev().collect()
    } else {
        (0..8).collect()
    };
    let ranks: Vec<u32> = if view.flipped {
        (0..8).collect()
    } else {
        (0..8).rev().collect()
    };
    let file_labels: String = files
        .iter()
        .map(|f| format!(" {} ", char::from(b'a' + *f as u8)))
        .collect();

    lines.push(format!("    {}", file_labels));
    lines.push(format!("  +{}+", "-".repeat(24)));
    for rank in &ranks {
        let cells: String = files
            .iter()
            .map(|file| cell(view, Square::from_coords(File::new(*file), Rank::new(*rank))))
            .collect();
        lines.push(format!("{} |{}| {}", rank + 1, cells, rank + 1));
    }
    lines.push(format!("  +{}+", "-".repeat(24)));
    lines.push(format!("    {}", file_labels));
    lines.push(String::new());

    lines.extend(panel(view));
    lines.join("\n")
}

fn cell(view: &SessionView, square: Square) -> String {
    let piece = view.piece_at(square).map_or('.', |p| p.char());
    let (open, close) = if view.selected == Some(square) {
        ('[', ']')
    } else if view.targets.contains(&square) {
        ('(', ')')
    } else if view.engine_hint().is_some_and(|h| h.contains(square)) {
        ('{', '}')
    } else if view.hints.book.is_some_and(|h| h.contains(square)) {
        ('<', '>')
    } else {
        (' ', ' ')
    };
    format!("{}{}{}", open, piece, close)
}

fn panel(view: &SessionView) -> Vec<String> {
    let side = |color: Color| match color {
        Color::White => "White",
        Color::Black => "Black",
    };

    let mut lines = vec![
        format!(
            "{} ({} line) - you play {}",
            view.opening_name,
            view.line_key,
            side(view.trainee)
        ),
        format!(
            "Move {} | {} | {} to move | {}",
            view.full_moves.max(1),
            view.position_label,
            side(view.turn),
            view.phase
        ),
        view.book_text(),
    ];

    let engine = match (view.evaluation, view.depth) {
        (Some(eval), Some(depth)) => format!("Eval {} (depth {})", eval, depth),
        (Some(eval), None) => format!("Eval {}", eval),
        _ => "Eval -".to_string(),
    };
    lines.push(format!("{} | Engine {} | {:?}", engine, view.skill, view.engine));

    if !view.moves.is_empty() {
        lines.push(format!("Moves: {}", view.moves.join(" ")));
    }
    if let Some(feedback) = &view.feedback {
        lines.push(format!("[{}] {}", feedback.severity, feedback.message));
    }
    if view.promotion.is_some() {
        lines.push("Promote to? (promote q|r|b|n, or cancel)".to_string());
    }
    if let Some(result) = view.result {
        lines.push(format!("Result: {}", result));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::ai::{NoEngine, SkillLevel};
    use crate::game::rules::ChessBoard;
    use crate::game::session::{SessionConfig, TrainingSession};

    fn view(opening: &str) -> SessionView {
        let config = SessionConfig {
            opening: opening.to_string(),
            skill: SkillLevel::MAX,
            rng_seed: Some(1),
            ..SessionConfig::default()
        };
        TrainingSession::new(ChessBoard::new(), NoEngine, config)
            .unwrap()
            .view()
    }

    #[test]
    fn test_white_orientation() {
        let text = render(&view("italian"));
        let rows: Vec<&str> = text.lines().collect();
        assert_eq!(rows[0].trim(), "a  b  c  d  e  f  g  h");
        assert!(rows[2].starts_with("8 | r  n  b  q  k  b  n  r |"));
        // Book hint e2e4 is marked
        assert!(rows[8].contains("<P>"));
        assert!(text.contains("Next Book Move: 1. e4 (Your turn - Try to find this move!)"));
    }

    #[test]
    fn test_flipped_orientation() {
        let text = render(&view("philidor"));
        let rows: Vec<&str> = text.lines().collect();
        assert_eq!(rows[0].trim(), "h  g  f  e  d  c  b  a");
        assert!(rows[2].starts_with("1 |"));
        assert!(text.contains("you play Black"));
    }

    #[test]
    fn test_presenter_writes_to_sink() {
        let mut renderer = TerminalRenderer::new(Vec::new());
        renderer.notice("hello");
        renderer.present(&view("italian"));
        let written = String::from_utf8(renderer.out).unwrap();
        assert!(written.starts_with("hello\n"));
        assert!(written.contains("Italian Game (main line)"));
    }
}

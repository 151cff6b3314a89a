//! Terminal rendering for notes.
//!
//! Renderers return `String`s and take every styling decision from the
//! [`Palette`] they are handed; printing is left to the caller.

use colored::{Color, Colorize};
use sumbapp::api::{CmdMessage, MessageLevel};
use sumbapp::config::SumbConfig;
use sumbapp::model::Note;
use unicode_width::UnicodeWidthStr;

/// Column `show` wraps note bodies at.
pub const SHOW_WIDTH: usize = 80;
const RULE_WIDTH: usize = 40;

const BRANCH: &str = "├── ";
const LAST_BRANCH: &str = "╰── ";
const PIPE: &str = "│   ";
const SPACE: &str = "    ";

/// Colours for terminal output. `Palette::plain()` renders without escapes.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub enabled: bool,
    pub accent: Color,
    pub success: Color,
    pub info: Color,
    pub warning: Color,
    pub error: Color,
}

impl Palette {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            accent: Color::TrueColor {
                r: 95,
                g: 95,
                b: 255,
            },
            success: Color::Green,
            info: Color::Cyan,
            warning: Color::Yellow,
            error: Color::Red,
        }
    }

    pub fn plain() -> Self {
        Self::new(false)
    }

    fn paint(&self, text: &str, color: Color) -> String {
        if self.enabled {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn bold(&self, text: &str, color: Color) -> String {
        if self.enabled {
            text.color(color).bold().to_string()
        } else {
            text.to_string()
        }
    }
}

/// Layout settings for list and search output.
#[derive(Debug, Clone, Copy)]
pub struct TreeLayout {
    pub preview_chars: usize,
    pub wrap_width: usize,
}

impl From<&SumbConfig> for TreeLayout {
    fn from(config: &SumbConfig) -> Self {
        Self {
            preview_chars: config.preview_chars,
            wrap_width: config.wrap_width,
        }
    }
}

pub fn render_messages(messages: &[CmdMessage], palette: &Palette) -> String {
    messages
        .iter()
        .map(|message| {
            let color = match message.level {
                MessageLevel::Info => palette.info,
                MessageLevel::Success => palette.success,
                MessageLevel::Warning => palette.warning,
                MessageLevel::Error => palette.error,
            };
            palette.paint(&message.content, color)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Renders notes as a tree under `title`, one `[id]` branch per note with a
/// wrapped, possibly truncated, body underneath.
pub fn render_note_tree(title: &str, notes: &[Note], layout: TreeLayout, palette: &Palette) -> String {
    let mut out = vec![palette.bold(title, palette.accent)];

    for (i, note) in notes.iter().enumerate() {
        let last = i + 1 == notes.len();
        let (branch, indent) = if last { (LAST_BRANCH, SPACE) } else { (BRANCH, PIPE) };

        out.push(format!("{}[{}]", palette.paint(branch, palette.accent), note.id));

        let body = preview(&note.body, layout, palette);
        for (j, line) in body.lines().enumerate() {
            let lead = if j == 0 { LAST_BRANCH } else { SPACE };
            out.push(format!(
                "{}{}{}",
                palette.paint(indent, palette.accent),
                palette.paint(lead, palette.accent),
                line
            ));
        }
    }

    out.join("\n")
}

/// The body as shown in a tree: at most `preview_chars` characters, wrapped.
fn preview(body: &str, layout: TreeLayout, palette: &Palette) -> String {
    let total = body.chars().count();
    if total <= layout.preview_chars {
        return wrap(body, layout.wrap_width);
    }

    let taken: String = body.chars().take(layout.preview_chars).collect();
    let remaining = total - layout.preview_chars;
    format!(
        "{}... {}",
        wrap(&taken, layout.wrap_width),
        palette.paint(
            &format!("(truncated, {} more characters)", remaining),
            palette.warning
        )
    )
}

/// Full view of a single note.
pub fn render_note(note: &Note, palette: &Palette) -> String {
    let header = format!("Note ID: {}", note.id);
    let rule = "─".repeat(header.width().max(RULE_WIDTH));
    format!(
        "{}\n{}\n{}",
        palette.bold(&header, palette.accent),
        palette.paint(&rule, palette.accent),
        wrap(&note.body, SHOW_WIDTH)
    )
}

/// Greedy word wrap by display width. Existing line breaks are kept and words
/// longer than `width` are left whole on their own line.
pub fn wrap(text: &str, width: usize) -> String {
    let width = width.max(1);
    let mut lines = Vec::new();

    for raw in text.split('\n') {
        let mut line = String::new();
        let mut line_width = 0;

        for word in raw.split(' ') {
            let word_width = word.width();
            if line_width > 0 && line_width + 1 + word_width > width {
                lines.push(std::mem::take(&mut line));
                line_width = 0;
            } else if !line.is_empty() {
                line.push(' ');
                line_width += 1;
            }
            line.push_str(word);
            line_width += word_width;
        }
        lines.push(line);
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> TreeLayout {
        TreeLayout {
            preview_chars: 200,
            wrap_width: 50,
        }
    }

    #[test]
    fn wraps_on_word_boundaries() {
        assert_eq!(wrap("one two three four", 9), "one two\nthree\nfour");
    }

    #[test]
    fn wrap_keeps_line_breaks_and_long_words() {
        assert_eq!(wrap("a\nb", 10), "a\nb");
        assert_eq!(wrap("supercalifragilistic yes", 5), "supercalifragilistic\nyes");
    }

    #[test]
    fn tree_has_one_branch_per_note() {
        let notes = vec![Note::new("3", "buy bread"), Note::new("1", "buy milk")];
        let out = render_note_tree("Search results for 'buy'", &notes, layout(), &Palette::plain());
        assert_eq!(
            out,
            "Search results for 'buy'\n\
             ├── [3]\n\
             │   ╰── buy bread\n\
             ╰── [1]\n\
             \x20   ╰── buy milk"
        );
    }

    #[test]
    fn multi_line_bodies_stay_under_their_branch() {
        let notes = vec![Note::new("1", "first\nsecond")];
        let out = render_note_tree("t", &notes, layout(), &Palette::plain());
        assert_eq!(out, "t\n╰── [1]\n    ╰── first\n        second");
    }

    #[test]
    fn long_bodies_are_truncated() {
        let body = "x".repeat(250);
        let notes = vec![Note::new("1", body)];
        let layout = TreeLayout {
            preview_chars: 200,
            wrap_width: 500,
        };
        let out = render_note_tree("t", &notes, layout, &Palette::plain());
        assert!(out.contains(&format!("{}... (truncated, 50 more characters)", "x".repeat(200))));
    }

    #[test]
    fn note_view_has_header() {
        let out = render_note(&Note::new("12", "body text"), &Palette::plain());
        assert!(out.starts_with("Note ID: 12\n"));
        assert!(out.ends_with("\nbody text"));
    }

    #[test]
    fn plain_messages_have_no_escapes() {
        let out = render_messages(
            &[CmdMessage::success("done"), CmdMessage::warning("careful")],
            &Palette::plain(),
        );
        assert_eq!(out, "done\ncareful");
    }
}

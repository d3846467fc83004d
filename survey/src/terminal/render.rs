use std::io::{self, Stdout, Write};

use crossterm::cursor::{Hide, MoveToColumn, MoveUp, Show};
use crossterm::style::Stylize;
use crossterm::terminal::{Clear, ClearType};
use crossterm::{execute, queue};
use survey_types::{ConfirmFrame, Frame, HELP_INPUT, InputFrame, Renderer, SelectFrame, SurveyError};

const QUESTION_ICON: &str = "?";
const HELP_ICON: &str = "?";
const ERROR_ICON: &str = "X";
const FOCUS_ICON: &str = ">";

/// Paints frames inline, erasing and redrawing the rows of the previous frame.
///
/// Answered frames and validation messages stay on screen once the next
/// question starts.
///
/// The renderer tracks how many rows the live prompt and the last validation
/// message occupy. Rows that wrap past the terminal width are not accounted
/// for.
#[derive(Debug)]
pub struct TerminalRenderer<W: Write> {
    out: W,
    prompt_rows: u16,
    error_rows: u16,
}

impl TerminalRenderer<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            prompt_rows: 0,
            error_rows: 0,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Move to the first row of the live prompt (or the validation message
    /// above it) and clear everything below.
    fn erase(&mut self, include_error: bool) -> io::Result<()> {
        let mut up = self.prompt_rows.saturating_sub(1);
        if include_error {
            up += self.error_rows;
            self.error_rows = 0;
        }
        self.prompt_rows = 0;

        queue!(self.out, MoveToColumn(0))?;
        if up > 0 {
            queue!(self.out, MoveUp(up))?;
        }
        queue!(self.out, Clear(ClearType::FromCursorDown))
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn render(&mut self, frame: &Frame) -> Result<(), SurveyError> {
        tracing::trace!(message = frame.message(), answered = frame.is_answered(), "paint");
        let rows = layout(frame);

        if frame.is_answered() {
            self.erase(false)?;
            for row in &rows {
                write!(self.out, "{row}\r\n")?;
            }
            self.error_rows = 0;
        } else {
            self.erase(false)?;
            write!(self.out, "{}", rows.join("\r\n"))?;
            self.prompt_rows = u16::try_from(rows.len()).unwrap_or(u16::MAX);
        }

        self.out.flush()?;
        Ok(())
    }

    fn render_error(&mut self, message: &str) -> Result<(), SurveyError> {
        self.erase(true)?;
        write!(
            self.out,
            "{} {}\r\n",
            ERROR_ICON.red().bold(),
            format!("Sorry, your reply was invalid: {message}").red()
        )?;
        self.error_rows = 1;
        self.out.flush()?;
        Ok(())
    }

    fn hide_cursor(&mut self) -> Result<(), SurveyError> {
        execute!(self.out, Hide)?;
        Ok(())
    }

    fn show_cursor(&mut self) -> Result<(), SurveyError> {
        execute!(self.out, Show)?;
        Ok(())
    }
}

/// The rows of a frame, styled, without line endings.
fn layout(frame: &Frame) -> Vec<String> {
    match frame {
        Frame::Select(frame) => select_rows(frame),
        Frame::Input(frame) => input_rows(frame),
        Frame::Confirm(frame) => confirm_rows(frame),
    }
}

fn question(message: &str) -> String {
    format!("{} {}", QUESTION_ICON.green().bold(), message.bold())
}

/// Help text worth offering; empty text counts as none.
fn help_text(help: Option<&str>) -> Option<&str> {
    help.filter(|help| !help.is_empty())
}

fn help_row(help: Option<&str>, show_help: bool) -> Option<String> {
    help.filter(|_| show_help)
        .map(|help| format!("{HELP_ICON} {help}").cyan().to_string())
}

fn select_rows(frame: &SelectFrame) -> Vec<String> {
    if let Some(answer) = &frame.answer {
        return vec![format!("{} {}", question(&frame.message), answer.as_str().cyan())];
    }

    let mut rows: Vec<String> = help_row(help_text(frame.help.as_deref()), frame.show_help)
        .into_iter()
        .collect();

    let more_help = if help_text(frame.help.as_deref()).is_some() && !frame.show_help {
        format!(", {HELP_INPUT} for more help")
    } else {
        String::new()
    };
    let hint = format!("[Use arrows to move, type to filter{more_help}]");
    rows.push(format!(
        "{}{}  {}",
        question(&frame.message),
        frame.filter_message.as_str().bold(),
        hint.cyan()
    ));

    for (ix, entry) in frame.page_entries.iter().enumerate() {
        if ix == frame.selected_index {
            rows.push(format!("{FOCUS_ICON} {entry}").cyan().bold().to_string());
        } else {
            rows.push(format!("  {entry}"));
        }
    }
    rows
}

fn input_rows(frame: &InputFrame) -> Vec<String> {
    if let Some(answer) = &frame.answer {
        return vec![format!("{} {}", question(&frame.message), answer.as_str().cyan())];
    }

    let mut rows: Vec<String> = help_row(help_text(frame.help.as_deref()), frame.show_help)
        .into_iter()
        .collect();

    let mut row = question(&frame.message);
    if help_text(frame.help.as_deref()).is_some() && !frame.show_help {
        row.push_str(&format!(" [{HELP_INPUT} for help]").cyan().to_string());
    }
    if let Some(default) = frame.default.as_deref().filter(|d| !d.is_empty()) {
        row.push_str(&format!(" ({default})").white().to_string());
    }
    row.push(' ');
    row.push_str(&frame.line);
    rows.push(row);
    rows
}

fn confirm_rows(frame: &ConfirmFrame) -> Vec<String> {
    if let Some(answer) = frame.answer {
        let answer = if answer { "Yes" } else { "No" };
        return vec![format!("{} {}", question(&frame.message), answer.cyan())];
    }

    let mut rows: Vec<String> = help_row(help_text(frame.help.as_deref()), frame.show_help)
        .into_iter()
        .collect();

    let mut row = question(&frame.message);
    if help_text(frame.help.as_deref()).is_some() && !frame.show_help {
        row.push_str(&format!(" [{HELP_INPUT} for help]").cyan().to_string());
    }
    let choices = if frame.default { "(Y/n)" } else { "(y/N)" };
    row.push_str(&format!(" {choices}").white().to_string());
    row.push(' ');
    row.push_str(&frame.line);
    rows.push(row);
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    fn colors(selected_index: usize) -> SelectFrame {
        SelectFrame {
            message: "Choose a color:".into(),
            page_entries: vec!["red".into(), "blue".into(), "green".into()],
            selected_index,
            ..SelectFrame::default()
        }
    }

    fn painted(frames: &[Frame]) -> String {
        let mut renderer = TerminalRenderer::new(Vec::new());
        for frame in frames {
            renderer.render(frame).unwrap();
        }
        String::from_utf8(renderer.into_inner()).unwrap()
    }

    #[test]
    fn select_marks_the_focused_entry() {
        let rows = select_rows(&colors(1));
        assert_eq!(rows.len(), 4);
        assert!(rows[0].contains("Choose a color:"));
        assert!(rows[0].contains("[Use arrows to move, type to filter]"));
        assert!(rows[2].contains("> blue"));
        assert_eq!(rows[1], "  red");
    }

    #[test]
    fn select_offers_help_until_shown() {
        let mut frame = SelectFrame {
            help: Some("Pick the one you like".into()),
            ..colors(0)
        };
        let rows = select_rows(&frame);
        assert!(rows[0].contains("? for more help"));

        frame.show_help = true;
        let rows = select_rows(&frame);
        assert!(rows[0].contains("Pick the one you like"));
        assert!(!rows[1].contains("for more help"));
    }

    #[test]
    fn empty_help_text_is_not_offered() {
        let frame = SelectFrame {
            help: Some(String::new()),
            show_help: true,
            ..colors(0)
        };
        let rows = select_rows(&frame);
        assert_eq!(rows.len(), 4);
        assert!(!rows[0].contains("for more help"));

        let input = InputFrame {
            message: "Name:".into(),
            help: Some(String::new()),
            ..InputFrame::default()
        };
        assert!(!input_rows(&input)[0].contains("for help"));
    }

    #[test]
    fn answered_frames_are_one_row() {
        let frame = SelectFrame {
            answer: Some("blue".into()),
            ..colors(1)
        };
        let rows = select_rows(&frame);
        assert_eq!(rows.len(), 1);
        assert!(rows[0].contains("blue"));

        let confirm = ConfirmFrame {
            message: "Sure?".into(),
            answer: Some(false),
            ..ConfirmFrame::default()
        };
        assert!(confirm_rows(&confirm)[0].contains("No"));
    }

    #[test]
    fn confirm_shows_default_choice() {
        let frame = ConfirmFrame {
            message: "Sure?".into(),
            default: true,
            ..ConfirmFrame::default()
        };
        assert!(confirm_rows(&frame)[0].contains("(Y/n)"));
    }

    #[test]
    fn input_echoes_default_and_line() {
        let frame = InputFrame {
            message: "Name:".into(),
            default: Some("anon".into()),
            line: "Jo".into(),
            ..InputFrame::default()
        };
        let row = &input_rows(&frame)[0];
        assert!(row.contains("(anon)"));
        assert!(row.ends_with("Jo"));
    }

    #[test]
    fn answered_frame_ends_with_newline() {
        let live = Frame::Select(colors(0));
        let done = Frame::Select(SelectFrame {
            answer: Some("red".into()),
            ..colors(0)
        });
        let out = painted(&[live, done]);
        assert!(out.ends_with("\r\n"));
        assert!(out.contains("> red"));
    }

    #[test]
    fn live_frame_has_no_trailing_newline() {
        let out = painted(&[Frame::Select(colors(2))]);
        assert!(!out.ends_with("\r\n"));
        assert!(out.contains("green"));
    }

    #[test]
    fn error_row() {
        let mut renderer = TerminalRenderer::new(Vec::new());
        renderer.render_error("Value is required").unwrap();
        assert_eq!(renderer.error_rows, 1);
        let out = String::from_utf8(renderer.into_inner()).unwrap();
        assert!(out.contains("Sorry, your reply was invalid: Value is required"));
        assert!(out.ends_with("\r\n"));
    }
}

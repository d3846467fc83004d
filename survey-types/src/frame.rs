//! Render snapshots.
//!
//! A frame is an owned copy of everything a renderer needs to paint one state
//! of a prompt. Widgets build a fresh frame after every reaction, so a
//! renderer never observes a half-updated widget.

/// One paintable state of a prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Frame {
    Select(SelectFrame),
    Input(InputFrame),
    Confirm(ConfirmFrame),
}

impl Frame {
    /// The question text of the prompt being painted.
    pub fn message(&self) -> &str {
        match self {
            Self::Select(f) => &f.message,
            Self::Input(f) => &f.message,
            Self::Confirm(f) => &f.message,
        }
    }

    /// Whether this frame shows the final answer.
    pub fn is_answered(&self) -> bool {
        match self {
            Self::Select(f) => f.answer.is_some(),
            Self::Input(f) => f.answer.is_some(),
            Self::Confirm(f) => f.answer.is_some(),
        }
    }
}

/// Snapshot of a select prompt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectFrame {
    pub message: String,
    /// Echo of the filter text, `" " + filter` or empty.
    pub filter_message: String,
    pub help: Option<String>,
    pub show_help: bool,
    /// The visible page of (filtered) options.
    pub page_entries: Vec<String>,
    /// Cursor position within `page_entries`.
    pub selected_index: usize,
    pub vim_mode: bool,
    /// Set once the question has been answered.
    pub answer: Option<String>,
}

/// Snapshot of a single-line text prompt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputFrame {
    pub message: String,
    pub default: Option<String>,
    pub help: Option<String>,
    pub show_help: bool,
    /// Text typed so far.
    pub line: String,
    pub answer: Option<String>,
}

/// Snapshot of a yes/no prompt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfirmFrame {
    pub message: String,
    pub default: bool,
    pub help: Option<String>,
    pub show_help: bool,
    pub line: String,
    pub answer: Option<bool>,
}

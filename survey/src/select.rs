//! Select prompt: pick one option with the arrow keys, typing to filter.

use std::fmt;

use survey_types::{
    Answer, Frame, HELP_INPUT, Key, Prompt, PromptConfig, SelectFrame, Stdio, SurveyError,
    WantsStdio,
};

use crate::filter::{Filter, default_filter};
use crate::paginate::paginate;
use crate::terminal;

/// A prompt that presents a list of options to choose from.
///
/// The answer is the chosen option as `Answer::Text`.
///
/// ```rust,ignore
/// let mut color = String::new();
/// let mut prompt = Select::new("Choose a color:", ["red", "blue", "green"]);
/// survey::ask_one(&mut prompt, &mut color, [])?;
/// ```
pub struct Select {
    message: String,
    options: Vec<String>,
    default: Option<String>,
    help: Option<String>,
    /// `0` uses the page size of the `PromptConfig`.
    page_size: usize,
    vim_mode: bool,
    filter: Option<Filter>,
    state: SelectState,
    stdio: Option<Stdio>,
}

/// Interaction state, reset whenever the prompt starts.
#[derive(Debug, Clone, Default)]
struct SelectState {
    filter: String,
    filter_message: String,
    /// Index into the filtered options.
    selected_index: usize,
    /// Answer with the default until the user navigates or types.
    use_default: bool,
    showing_help: bool,
    vim_mode: bool,
}

impl Select {
    /// Create a select prompt over `options`.
    pub fn new<I, S>(message: impl Into<String>, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            message: message.into(),
            options: options.into_iter().map(Into::into).collect(),
            default: None,
            help: None,
            page_size: 0,
            vim_mode: false,
            filter: None,
            state: SelectState::default(),
            stdio: None,
        }
    }

    /// Preselect `default` and answer with it unless the user moves or types.
    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }

    /// Help text revealed with `?`. Empty text leaves `?` as a filter key.
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into()).filter(|help| !help.is_empty());
        self
    }

    /// Options shown at once; `0` falls back to the global page size.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Start with `j`/`k` navigation enabled.
    pub fn with_vim_mode(mut self, vim_mode: bool) -> Self {
        self.vim_mode = vim_mode;
        self
    }

    /// Replace the case-insensitive substring filter.
    pub fn with_filter(mut self, filter: impl Fn(&str, &[String]) -> Vec<String> + 'static) -> Self {
        self.filter = Some(Box::new(filter));
        self
    }

    /// React to one key. Returns `true` once the user has made a choice.
    ///
    /// Every call paints exactly one frame; the only error source is the
    /// renderer.
    pub fn on_change(&mut self, key: Key, config: &PromptConfig) -> Result<bool, SurveyError> {
        tracing::trace!(?key, "select key");
        let options = self.filtered_options();
        let old_filter = self.state.filter.clone();
        let vim_nav = self.state.vim_mode && !options.is_empty();
        let mut done = false;

        match key {
            Key::Enter => {
                done = !options.is_empty() && self.state.selected_index < options.len();
            }
            Key::Up => self.move_up(options.len()),
            Key::Char('k') if vim_nav => self.move_up(options.len()),
            Key::Down => self.move_down(options.len()),
            Key::Char('j') if vim_nav => self.move_down(options.len()),
            Key::Char(HELP_INPUT) if self.help.is_some() => self.state.showing_help = true,
            Key::Escape => self.state.vim_mode = !self.state.vim_mode,
            Key::DeleteWord | Key::DeleteLine => self.state.filter.clear(),
            Key::Backspace | Key::Delete => {
                self.state.filter.pop();
            }
            key => {
                if let Some(c) = key.printable() {
                    self.state.filter.push(c);
                    self.state.vim_mode = false;
                    self.state.use_default = false;
                }
            }
        }

        self.state.filter_message = if self.state.filter.is_empty() {
            String::new()
        } else {
            format!(" {}", self.state.filter)
        };

        let options = if old_filter == self.state.filter {
            options
        } else {
            let narrowed = self.filtered_options();
            if !narrowed.is_empty() && narrowed.len() <= self.state.selected_index {
                self.state.selected_index = narrowed.len() - 1;
            }
            narrowed
        };

        let stdio = self.stdio();
        self.render_page(&stdio, config, &options)?;
        Ok(done)
    }

    fn move_up(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.state.use_default = false;
        let sel = self.state.selected_index;
        self.state.selected_index = if sel == 0 || sel >= len { len - 1 } else { sel - 1 };
    }

    fn move_down(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.state.use_default = false;
        let sel = self.state.selected_index;
        self.state.selected_index = if sel + 1 >= len { 0 } else { sel + 1 };
    }

    fn filtered_options(&self) -> Vec<String> {
        if self.state.filter.is_empty() {
            return self.options.clone();
        }
        match &self.filter {
            Some(filter) => filter(&self.state.filter, &self.options),
            None => default_filter(&self.state.filter, &self.options),
        }
    }

    fn effective_page_size(&self, config: &PromptConfig) -> usize {
        if self.page_size == 0 {
            config.page_size
        } else {
            self.page_size
        }
    }

    fn render_page(
        &self,
        stdio: &Stdio,
        config: &PromptConfig,
        options: &[String],
    ) -> Result<(), SurveyError> {
        let (page, cursor) = paginate(
            self.effective_page_size(config),
            options,
            self.state.selected_index,
        );
        stdio.render(&Frame::Select(SelectFrame {
            page_entries: page.to_vec(),
            selected_index: cursor,
            ..self.frame()
        }))
    }

    fn frame(&self) -> SelectFrame {
        SelectFrame {
            message: self.message.clone(),
            filter_message: self.state.filter_message.clone(),
            help: self.help.clone(),
            show_help: self.state.showing_help,
            page_entries: Vec::new(),
            selected_index: 0,
            vim_mode: self.state.vim_mode,
            answer: None,
        }
    }

    /// The answer once the key loop has ended.
    fn resolve(&self, options: &[String]) -> String {
        if self.state.use_default || self.state.selected_index >= options.len() {
            self.default
                .as_ref()
                .filter(|default| !default.is_empty())
                .or_else(|| options.first())
                .cloned()
                .unwrap_or_default()
        } else {
            options[self.state.selected_index].clone()
        }
    }

    fn stdio(&mut self) -> Stdio {
        self.stdio.get_or_insert_with(terminal::stdio).clone()
    }
}

impl Prompt for Select {
    fn prompt(&mut self, config: &PromptConfig) -> Result<Answer, SurveyError> {
        if self.options.is_empty() {
            return Err(SurveyError::NoOptions);
        }

        let selected_index = self
            .default
            .as_ref()
            .and_then(|default| self.options.iter().position(|option| option == default))
            .unwrap_or(0);
        self.state = SelectState {
            selected_index,
            vim_mode: self.vim_mode,
            ..SelectState::default()
        };

        let stdio = self.stdio();
        self.render_page(&stdio, config, &self.options)?;
        self.state.use_default = true;

        let _raw = stdio.raw_mode()?;
        let _cursor = stdio.hidden_cursor()?;

        loop {
            match stdio.read_key()? {
                Key::Interrupt => return Err(SurveyError::Interrupted),
                Key::EndOfTransmission => break,
                key => {
                    if self.on_change(key, config)? {
                        break;
                    }
                }
            }
        }

        let options = self.filtered_options();
        self.state.filter.clear();
        self.state.filter_message.clear();

        Ok(Answer::Text(self.resolve(&options)))
    }

    fn cleanup(&mut self, _config: &PromptConfig, answer: &Answer) -> Result<(), SurveyError> {
        let stdio = self.stdio();
        stdio.render(&Frame::Select(SelectFrame {
            answer: Some(answer.to_string()),
            ..self.frame()
        }))
    }

    fn error(&mut self, message: &str) -> Result<(), SurveyError> {
        self.stdio().render_error(message)
    }

    fn as_wants_stdio(&mut self) -> Option<&mut dyn WantsStdio> {
        Some(self)
    }
}

impl WantsStdio for Select {
    fn with_stdio(&mut self, stdio: Stdio) {
        self.stdio = Some(stdio);
    }
}

impl fmt::Debug for Select {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Select")
            .field("message", &self.message)
            .field("options", &self.options)
            .field("default", &self.default)
            .field("help", &self.help)
            .field("page_size", &self.page_size)
            .field("vim_mode", &self.vim_mode)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

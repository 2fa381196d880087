//! Host capabilities
//!
//! Everything the commands need from the surrounding editor goes through the
//! [`Host`] trait: the active editor, settings, prompts, the settings UI and
//! the browser opener. [`TerminalHost`] implements it for the command line,
//! backed by a [`FileSettings`] TOML store.

pub mod settings;
pub mod terminal;

pub use settings::{FileSettings, SettingsStore, default_settings_path};
pub use terminal::{EditorInput, TerminalHost};

use crate::editor::TextEditor;
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Scope a setting is written to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfigTarget {
    Global,
    Workspace,
}

impl std::fmt::Display for ConfigTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigTarget::Global => write!(f, "global"),
            ConfigTarget::Workspace => write!(f, "workspace"),
        }
    }
}

/// Live validation hook: returns an empty string for an acceptable value,
/// otherwise the message to show.
pub type InputValidator = fn(&str) -> String;

/// Options for a single-line input prompt
#[derive(Debug, Clone, Default)]
pub struct InputBoxOptions {
    /// Text shown above the input
    pub prompt: Option<String>,

    /// Hint shown while the input is empty
    pub placeholder: Option<String>,

    /// Prefilled value
    pub value: String,

    /// Range of the prefilled value selected initially (start, end)
    pub value_selection: Option<(usize, usize)>,

    /// Keep the prompt open when focus moves elsewhere
    pub ignore_focus_out: bool,

    /// Live validation hook
    pub validate_input: Option<InputValidator>,
}

impl InputBoxOptions {
    /// Builder method: set the prompt text
    pub fn prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = Some(prompt.into());
        self
    }

    /// Builder method: set the placeholder
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Builder method: set the prefilled value
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    /// Builder method: set the initially selected range
    pub fn value_selection(mut self, start: usize, end: usize) -> Self {
        self.value_selection = Some((start, end));
        self
    }

    /// Builder method: keep the prompt open on focus loss
    pub fn ignore_focus_out(mut self, ignore: bool) -> Self {
        self.ignore_focus_out = ignore;
        self
    }

    /// Builder method: set the validation hook
    pub fn validate_input(mut self, validator: InputValidator) -> Self {
        self.validate_input = Some(validator);
        self
    }

    /// Run the validation hook; `None` means the value is acceptable
    pub fn validation_message(&self, value: &str) -> Option<String> {
        self.validate_input
            .map(|validate| validate(value))
            .filter(|message| !message.is_empty())
    }
}

/// Editor capabilities consumed by the commands.
///
/// Prompts return `None` when dismissed; callers treat that as a no-op.
pub trait Host {
    /// Snapshot of the active editor, if any
    fn active_editor(&self) -> Option<TextEditor>;

    /// Read a setting by `section.name` key
    fn get_setting(&self, key: &str) -> Option<String>;

    /// Persist a setting into the given scope
    fn update_setting(&mut self, key: &str, value: &str, target: ConfigTarget) -> Result<()>;

    /// Ask for a single line of text
    fn show_input_box(&mut self, options: &InputBoxOptions) -> Option<String>;

    /// Show an informational message with optional actions; returns the
    /// chosen action
    fn show_information_message(&mut self, message: &str, actions: &[&str]) -> Option<String>;

    /// Open the settings UI filtered to `section`
    fn open_settings(&mut self, section: &str);

    /// Open a URL in the default browser. Fire-and-forget.
    fn open_external(&mut self, url: &str);
}

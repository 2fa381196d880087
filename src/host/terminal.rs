use crate::editor::{Position, Selection, TextDocument, TextEditor, language_for_path};
use crate::error::{Result, SearchError};
use crate::host::{ConfigTarget, FileSettings, Host, InputBoxOptions, SettingsStore};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Opens a URL or file with the operating system's default handler
pub type Opener = Box<dyn FnMut(&str) -> io::Result<()>>;

fn system_opener() -> Opener {
    Box::new(|target: &str| open::that_detached(target))
}

/// Editor state described on the command line
#[derive(Debug, Clone, Default)]
pub struct EditorInput {
    /// Document to read from disk
    pub file: Option<PathBuf>,

    /// Inline document text (used when no file is given)
    pub text: Option<String>,

    /// Language id; inferred from the file extension when absent
    pub language: Option<String>,

    /// One-based `LINE:COL` caret or `LINE:COL-LINE:COL` span
    pub selection: Option<String>,
}

impl EditorInput {
    /// Build the active editor, or `None` when no document was described
    pub fn into_editor(self) -> Result<Option<TextEditor>> {
        let (document, default_selection) = match (&self.file, self.text) {
            (Some(path), _) => {
                let text = std::fs::read_to_string(path).map_err(|e| {
                    SearchError::InvalidEditorInput(format!(
                        "failed to read {}: {}",
                        path.display(),
                        e
                    ))
                })?;
                let language = self
                    .language
                    .clone()
                    .unwrap_or_else(|| language_for_path(path).to_string());
                (TextDocument::new(text, language), None)
            }
            (None, Some(text)) => {
                let document = TextDocument::new(text, self.language.clone().unwrap_or_default());
                let whole = Selection::new(Position::default(), end_of(&document));
                (document, Some(whole))
            }
            (None, None) => return Ok(None),
        };

        let selection = match self.selection.as_deref() {
            Some(spec) => parse_selection(spec)?,
            None => default_selection.unwrap_or(Selection::caret(Position::default())),
        };

        Ok(Some(TextEditor::new(document).with_selection(selection)))
    }
}

fn end_of(document: &TextDocument) -> Position {
    let line = document.line_count() - 1;
    Position::new(line, document.line_at(line).chars().count())
}

/// Parse `LINE:COL` or `LINE:COL-LINE:COL` (one-based) into a selection
pub fn parse_selection(spec: &str) -> Result<Selection> {
    let (anchor, active) = match spec.split_once('-') {
        Some((from, to)) => (parse_position(from)?, parse_position(to)?),
        None => {
            let caret = parse_position(spec)?;
            (caret, caret)
        }
    };
    Ok(Selection::new(anchor, active))
}

fn parse_position(spec: &str) -> Result<Position> {
    let invalid = || {
        SearchError::InvalidEditorInput(format!(
            "invalid position '{}', expected LINE:COL starting at 1:1",
            spec
        ))
    };

    let (line, column) = spec.trim().split_once(':').ok_or_else(invalid)?;
    let line: usize = line.parse().map_err(|_| invalid())?;
    let column: usize = column.parse().map_err(|_| invalid())?;
    if line == 0 || column == 0 {
        return Err(invalid());
    }
    Ok(Position::new(line - 1, column - 1))
}

/// Host backed by a terminal: prompts on `output`, answers from `input`,
/// settings in TOML files, browser via the OS opener.
pub struct TerminalHost<R, W> {
    editor: Option<TextEditor>,
    settings: FileSettings,
    input: R,
    output: W,
    opener: Opener,
}

impl TerminalHost<io::StdinLock<'static>, io::Stderr> {
    /// Prompt on stderr and read answers from stdin
    pub fn stdio(settings: FileSettings, editor: Option<TextEditor>) -> Self {
        Self::new(settings, editor, io::stdin().lock(), io::stderr())
    }
}

impl<R: BufRead, W: Write> TerminalHost<R, W> {
    pub fn new(settings: FileSettings, editor: Option<TextEditor>, input: R, output: W) -> Self {
        Self {
            editor,
            settings,
            input,
            output,
            opener: system_opener(),
        }
    }

    /// Builder method: replace the OS opener
    pub fn with_opener(mut self, opener: Opener) -> Self {
        self.opener = opener;
        self
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    /// Read one line without its terminator; `None` on EOF or read failure
    fn read_answer(&mut self) -> Option<String> {
        self.output.flush().ok();
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => Some(line.trim_end_matches(['\r', '\n']).to_string()),
            Err(e) => {
                log::debug!("Failed to read answer: {}", e);
                None
            }
        }
    }
}

impl<R: BufRead, W: Write> Host for TerminalHost<R, W> {
    fn active_editor(&self) -> Option<TextEditor> {
        self.editor.clone()
    }

    fn get_setting(&self, key: &str) -> Option<String> {
        self.settings.get(key)
    }

    fn update_setting(&mut self, key: &str, value: &str, target: ConfigTarget) -> Result<()> {
        self.settings.update(key, value, target)
    }

    fn show_input_box(&mut self, options: &InputBoxOptions) -> Option<String> {
        let label = options
            .prompt
            .as_deref()
            .or(options.placeholder.as_deref())
            .unwrap_or("Input");

        loop {
            if options.value.is_empty() {
                write!(self.output, "{}: ", label).ok();
            } else {
                write!(self.output, "{} [{}]: ", label, options.value).ok();
            }

            let answer = self.read_answer()?;
            let answer = if answer.is_empty() {
                options.value.clone()
            } else {
                answer
            };

            match options.validation_message(&answer) {
                Some(message) => {
                    writeln!(self.output, "{}", message).ok();
                }
                None => return Some(answer),
            }
        }
    }

    fn show_information_message(&mut self, message: &str, actions: &[&str]) -> Option<String> {
        writeln!(self.output, "{}", message).ok();
        if actions.is_empty() {
            return None;
        }

        for (idx, action) in actions.iter().enumerate() {
            writeln!(self.output, "  [{}] {}", idx + 1, action).ok();
        }
        write!(self.output, "Choose an action (Enter to dismiss): ").ok();

        let answer = self.read_answer()?;
        let answer = answer.trim();
        if let Ok(choice) = answer.parse::<usize>() {
            return actions
                .get(choice.wrapping_sub(1))
                .map(|action| action.to_string());
        }
        actions
            .iter()
            .find(|action| action.eq_ignore_ascii_case(answer))
            .map(|action| action.to_string())
    }

    fn open_settings(&mut self, section: &str) {
        let path = match self.settings.ensure_global_file() {
            Ok(path) => path.to_path_buf(),
            Err(e) => {
                writeln!(self.output, "{}", e).ok();
                return;
            }
        };

        writeln!(
            self.output,
            "Settings for [{}] are stored in {}",
            section,
            path.display()
        )
        .ok();

        let target = path.to_string_lossy().into_owned();
        if let Err(e) = (self.opener)(target.as_str()) {
            log::debug!("Failed to open settings file {}: {}", path.display(), e);
        }
    }

    fn open_external(&mut self, url: &str) {
        log::debug!("Opening {}", url);
        if let Err(e) = (self.opener)(url) {
            log::debug!("Failed to launch browser for {}: {}", url, e);
        }
    }
}

use crate::editor::document::{Position, TextDocument};
use serde::{Deserialize, Serialize};

/// A selection between an anchor and the active (cursor) position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub anchor: Position,
    pub active: Position,
}

impl Selection {
    pub fn new(anchor: Position, active: Position) -> Self {
        Self { anchor, active }
    }

    /// A zero-width selection at `position`
    pub fn caret(position: Position) -> Self {
        Self::new(position, position)
    }

    pub fn start(&self) -> Position {
        self.anchor.min(self.active)
    }

    pub fn end(&self) -> Position {
        self.anchor.max(self.active)
    }

    /// True when start and end coincide
    pub fn is_empty(&self) -> bool {
        self.anchor == self.active
    }
}

/// The active editor: a document plus its selections, primary first
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextEditor {
    pub document: TextDocument,
    #[serde(default)]
    pub selections: Vec<Selection>,
}

impl TextEditor {
    /// Create an editor with a caret at the start of the document
    pub fn new(document: TextDocument) -> Self {
        Self {
            document,
            selections: vec![Selection::caret(Position::default())],
        }
    }

    /// Builder method: replace the selections
    pub fn with_selections(mut self, selections: Vec<Selection>) -> Self {
        self.selections = selections;
        self
    }

    /// Builder method: a single selection
    pub fn with_selection(self, selection: Selection) -> Self {
        self.with_selections(vec![selection])
    }

    /// Clamp both ends of `selection` to the document
    pub fn validate_selection(&self, selection: &Selection) -> Selection {
        Selection::new(
            self.document.validate_position(selection.anchor),
            self.document.validate_position(selection.active),
        )
    }

    /// Text covered by a selection. A caret yields its whole line followed by
    /// the document's end-of-line sequence. Ends are clamped first, so a range
    /// lying past the end of a line collapses to a caret on that line.
    pub fn selection_text(&self, selection: &Selection) -> String {
        let selection = self.validate_selection(selection);
        if selection.is_empty() {
            let line = self.document.line_at(selection.start().line);
            format!("{}{}", line, self.document.eol.as_str())
        } else {
            self.document
                .get_text(selection.start(), selection.end())
                .to_string()
        }
    }
}

/// Search text taken from the primary selection of the active editor.
///
/// Only the first selection is used; further cursors are ignored. The
/// result is trimmed, so a caret on a line yields that line without its
/// terminator. No editor yields an empty string.
pub fn get_selected_text(editor: Option<&TextEditor>) -> String {
    let Some(editor) = editor else {
        return String::new();
    };

    editor
        .selections
        .first()
        .map(|selection| editor.selection_text(selection).trim().to_string())
        .unwrap_or_default()
}

/// Language identifier of the active document, or an empty string
pub fn get_language_id(editor: Option<&TextEditor>) -> String {
    editor
        .map(|editor| editor.document.language_id.clone())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::document::EndOfLine;

    fn editor(text: &str, language: &str) -> TextEditor {
        TextEditor::new(TextDocument::new(text, language))
    }

    #[test]
    fn test_no_editor() {
        assert_eq!(get_selected_text(None), "");
        assert_eq!(get_language_id(None), "");
    }

    #[test]
    fn test_selection_past_line_end_collapses_to_caret() {
        let ed = editor("const x = 1;\n", "javascript")
            .with_selection(Selection::new(Position::new(0, 50), Position::new(0, 60)));
        assert_eq!(
            ed.validate_selection(&ed.selections[0]),
            Selection::caret(Position::new(0, 12))
        );
        assert_eq!(get_selected_text(Some(&ed)), "const x = 1;");
    }

    #[test]
    fn test_selection_partly_past_line_end_is_clamped() {
        let ed = editor("const x = 1;\nlet b = 2;", "javascript")
            .with_selection(Selection::new(Position::new(0, 6), Position::new(0, 40)));
        assert_eq!(get_selected_text(Some(&ed)), "x = 1;");
    }

    #[test]
    fn test_caret_uses_whole_line_lf() {
        let ed = editor("let a = 0;\nconst x = 1;\nlet b = 2;", "javascript")
            .with_selection(Selection::caret(Position::new(1, 3)));
        assert_eq!(ed.selection_text(&ed.selections[0]), "const x = 1;\n");
        assert_eq!(get_selected_text(Some(&ed)), "const x = 1;");
    }

    #[test]
    fn test_caret_uses_crlf_sequence() {
        let ed = editor("one\r\n  two  \r\n", "")
            .with_selection(Selection::caret(Position::new(1, 0)));
        assert_eq!(ed.document.eol, EndOfLine::CrLf);
        assert_eq!(ed.selection_text(&ed.selections[0]), "  two  \r\n");
        assert_eq!(get_selected_text(Some(&ed)), "two");
    }

    #[test]
    fn test_span_selection_is_exact_then_trimmed() {
        let ed = editor("    def foo(bar):", "python")
            .with_selection(Selection::new(Position::new(0, 2), Position::new(0, 11)));
        assert_eq!(ed.selection_text(&ed.selections[0]), "  def foo");
        assert_eq!(get_selected_text(Some(&ed)), "def foo");
    }

    #[test]
    fn test_backwards_selection() {
        let ed = editor("hello world", "")
            .with_selection(Selection::new(Position::new(0, 11), Position::new(0, 6)));
        assert_eq!(get_selected_text(Some(&ed)), "world");
    }

    #[test]
    fn test_only_first_selection_is_used() {
        let ed = editor("alpha beta gamma", "").with_selections(vec![
            Selection::new(Position::new(0, 6), Position::new(0, 10)),
            Selection::new(Position::new(0, 0), Position::new(0, 5)),
        ]);
        assert_eq!(get_selected_text(Some(&ed)), "beta");
    }

    #[test]
    fn test_no_selections() {
        let ed = editor("text", "").with_selections(Vec::new());
        assert_eq!(get_selected_text(Some(&ed)), "");
    }

    #[test]
    fn test_language_id() {
        let ed = editor("print(1)", "python");
        assert_eq!(get_language_id(Some(&ed)), "python");
    }
}

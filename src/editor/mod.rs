//! Editor state model
//!
//! This module models the parts of the host editor the search commands read:
//! - TextDocument: document text, language id and end-of-line mode
//! - Selection / TextEditor: the active editor and its selections
//! - Selection Extractor and Language Identifier Reader

pub mod document;
pub mod language;
pub mod selection;

pub use document::{EndOfLine, Position, TextDocument};
pub use language::language_for_path;
pub use selection::{Selection, TextEditor, get_language_id, get_selected_text};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_editor_exports() {
        let editor = TextEditor::new(TextDocument::new("x", "rust"));
        assert_eq!(get_language_id(Some(&editor)), "rust");
        assert_eq!(get_selected_text(Some(&editor)), "x");
    }
}

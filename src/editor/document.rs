use serde::{Deserialize, Serialize};

/// End-of-line sequence recorded for a document
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EndOfLine {
    /// Single line feed (`\n`)
    #[default]
    Lf,
    /// Carriage return + line feed (`\r\n`)
    CrLf,
}

impl EndOfLine {
    /// The sequence appended to a line for this mode
    pub fn as_str(&self) -> &'static str {
        match self {
            EndOfLine::Lf => "\n",
            EndOfLine::CrLf => "\r\n",
        }
    }

    /// Detect the mode of `text`: CRLF when any `\r\n` is present, LF otherwise
    pub fn detect(text: &str) -> Self {
        if text.contains("\r\n") {
            EndOfLine::CrLf
        } else {
            EndOfLine::Lf
        }
    }
}

/// Zero-based line/character position. Characters count Unicode scalar values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub line: usize,
    pub character: usize,
}

impl Position {
    pub fn new(line: usize, character: usize) -> Self {
        Self { line, character }
    }
}

/// An open document as seen by the editor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextDocument {
    /// Full document text
    pub text: String,

    /// Language identifier assigned by the host (e.g. "python")
    #[serde(default)]
    pub language_id: String,

    /// Recorded end-of-line mode
    #[serde(default)]
    pub eol: EndOfLine,
}

impl TextDocument {
    /// Create a document, detecting its end-of-line mode from the text
    pub fn new(text: impl Into<String>, language_id: impl Into<String>) -> Self {
        let text = text.into();
        let eol = EndOfLine::detect(&text);
        Self {
            text,
            language_id: language_id.into(),
            eol,
        }
    }

    /// Number of lines; an empty document has one empty line
    pub fn line_count(&self) -> usize {
        self.text.split('\n').count()
    }

    /// Text of the line containing `line`, without its terminator.
    /// Lines past the end resolve to the last line.
    pub fn line_at(&self, line: usize) -> &str {
        let (start, end) = self.line_bounds(line.min(self.line_count() - 1));
        &self.text[start..end]
    }

    /// Clamp a position so that it lies inside the document
    pub fn validate_position(&self, position: Position) -> Position {
        let line = position.line.min(self.line_count() - 1);
        let max_char = self.line_at(line).chars().count();
        Position::new(line, position.character.min(max_char))
    }

    /// Byte offset of a (clamped) position
    pub fn offset_at(&self, position: Position) -> usize {
        let position = self.validate_position(position);
        let (start, end) = self.line_bounds(position.line);
        self.text[start..end]
            .char_indices()
            .nth(position.character)
            .map(|(idx, _)| start + idx)
            .unwrap_or(end)
    }

    /// Text between two positions, in either order
    pub fn get_text(&self, from: Position, to: Position) -> &str {
        let a = self.offset_at(from);
        let b = self.offset_at(to);
        &self.text[a.min(b)..a.max(b)]
    }

    /// Byte range of a line's content, excluding `\n` and a preceding `\r`
    fn line_bounds(&self, line: usize) -> (usize, usize) {
        let mut start = 0;
        for (idx, segment) in self.text.split('\n').enumerate() {
            if idx == line {
                let content = segment.strip_suffix('\r').unwrap_or(segment);
                return (start, start + content.len());
            }
            start += segment.len() + 1;
        }
        (self.text.len(), self.text.len())
    }
}

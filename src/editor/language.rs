use std::path::Path;

/// Language id used when a file extension is not recognised
pub const PLAINTEXT: &str = "plaintext";

/// Extension → language id, using the identifiers editors commonly assign
const EXTENSION_LANGUAGES: &[(&str, &str)] = &[
    ("bat", "bat"),
    ("c", "c"),
    ("h", "c"),
    ("cc", "cpp"),
    ("cpp", "cpp"),
    ("cxx", "cpp"),
    ("hpp", "cpp"),
    ("cs", "csharp"),
    ("css", "css"),
    ("dart", "dart"),
    ("dockerfile", "dockerfile"),
    ("go", "go"),
    ("groovy", "groovy"),
    ("html", "html"),
    ("htm", "html"),
    ("java", "java"),
    ("js", "javascript"),
    ("mjs", "javascript"),
    ("cjs", "javascript"),
    ("jsx", "javascriptreact"),
    ("json", "json"),
    ("kt", "kotlin"),
    ("kts", "kotlin"),
    ("less", "less"),
    ("lua", "lua"),
    ("md", "markdown"),
    ("markdown", "markdown"),
    ("m", "objective-c"),
    ("php", "php"),
    ("ps1", "powershell"),
    ("py", "python"),
    ("r", "r"),
    ("rb", "ruby"),
    ("rs", "rust"),
    ("scala", "scala"),
    ("scss", "scss"),
    ("sh", "shellscript"),
    ("bash", "shellscript"),
    ("sql", "sql"),
    ("swift", "swift"),
    ("toml", "toml"),
    ("ts", "typescript"),
    ("tsx", "typescriptreact"),
    ("txt", "plaintext"),
    ("vb", "vb"),
    ("xml", "xml"),
    ("yaml", "yaml"),
    ("yml", "yaml"),
];

/// Infer a language id from a file path's extension (or bare file name for
/// extension-less files such as `Dockerfile`). Unknown files are plaintext.
pub fn language_for_path(path: &Path) -> &'static str {
    let key = path
        .extension()
        .or_else(|| path.file_name())
        .and_then(|s| s.to_str())
        .map(|s| s.to_ascii_lowercase());

    key.and_then(|key| {
        EXTENSION_LANGUAGES
            .iter()
            .find(|(ext, _)| *ext == key)
            .map(|(_, language)| *language)
    })
    .unwrap_or(PLAINTEXT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_extensions() {
        assert_eq!(language_for_path(Path::new("src/main.rs")), "rust");
        assert_eq!(language_for_path(Path::new("app.PY")), "python");
        assert_eq!(language_for_path(Path::new("index.tsx")), "typescriptreact");
        assert_eq!(language_for_path(Path::new("Dockerfile")), "dockerfile");
    }

    #[test]
    fn test_unknown_extension_is_plaintext() {
        assert_eq!(language_for_path(Path::new("notes.xyz")), PLAINTEXT);
        assert_eq!(language_for_path(Path::new("README")), PLAINTEXT);
    }
}

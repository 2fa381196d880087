//! # percipio-search
//!
//! Search a Percipio learning site from the editor: the current selection (or a
//! typed query) is turned into a site search URL, annotated with the active
//! document's language, and opened in the default browser.
//!
//! ## Features
//!
//! - **Commands**: search the selection, search with a prompt, configure the
//!   site URL, open the settings
//! - **Host abstraction**: editor state, prompts, settings and the browser are
//!   reached through the [`Host`] trait, so the commands run inside any editor
//!   integration or the bundled terminal host
//! - **Site policy**: only `https://*.percipio.com` sites are accepted, stored as
//!   their origin
//!
//! ## Command line
//!
//! ```bash
//! percipio-search configure --site-url https://demo.percipio.com
//! percipio-search search-selection --file src/main.py --selection 12:1
//! percipio-search search "dependency injection"
//! ```
//!
//! ## Library Usage
//!
//! ```rust,no_run
//! use percipio_search::{CommandContext, CommandRegistry, FileSettings, TerminalHost};
//! use serde_json::json;
//!
//! # fn main() -> percipio_search::Result<()> {
//! let settings = FileSettings::load_default()?;
//! let mut host = TerminalHost::stdio(settings, None);
//! let registry = CommandRegistry::with_defaults();
//! let mut context = CommandContext::new(&mut host);
//!
//! registry.execute("percipio-search", json!({"query": "async rust"}), &mut context)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Overview
//!
//! - [`commands`]: command trait, registry and the built-in commands
//! - [`editor`]: document/selection model, selection extraction
//! - [`host`]: host capability trait, terminal host, TOML settings
//! - [`search`]: search query and URL construction
//! - [`site`]: site URL validation and normalization
//! - [`error`]: error types and result aliases

pub mod commands;
pub mod editor;
pub mod error;
pub mod host;
pub mod search;
pub mod site;

pub use commands::{
    Command, CommandContext, CommandRegistry, CommandResult, ConfigureOutcome, activate,
    configure_search,
};
pub use editor::{EndOfLine, Position, Selection, TextDocument, TextEditor};
pub use editor::{get_language_id, get_selected_text};
pub use error::{Result, SearchError};
pub use host::{ConfigTarget, EditorInput, FileSettings, Host, InputBoxOptions, SettingsStore, TerminalHost};
pub use search::{SearchOutcome, build_search_query, build_search_url, execute_search};
pub use site::{is_valid_percipio_url, normalize_site_url, validate_percipio_input};

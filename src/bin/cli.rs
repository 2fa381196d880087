//! percipio-search CLI
//!
//! Runs the Percipio search commands from a terminal. The active editor is
//! described with `--file`/`--text` and `--selection`; prompts are answered on
//! stdin and the search page opens in the default browser.

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use percipio_search::commands::{
    CONFIGURE_COMMAND, OPEN_SETTINGS_COMMAND, SEARCH_COMMAND, SEARCH_SELECTION_COMMAND,
};
use percipio_search::host::default_settings_path;
use percipio_search::search::configured_site;
use percipio_search::{
    CommandContext, CommandRegistry, CommandResult, EditorInput, FileSettings, TerminalHost, activate,
};
use serde_json::json;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "percipio-search")]
#[command(version)]
#[command(about = "Search a Percipio learning site from the command line", long_about = None)]
struct Cli {
    /// Global settings file (default: <config dir>/percipio-search/settings.toml)
    #[arg(long, value_name = "PATH", global = true)]
    settings: Option<PathBuf>,

    /// Workspace settings file; its values take precedence
    #[arg(long, value_name = "PATH", global = true)]
    workspace_settings: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Active editor description shared by the search commands
#[derive(Args, Debug, Default)]
struct EditorArgs {
    /// Document to search from
    #[arg(long, value_name = "PATH", conflicts_with = "text")]
    file: Option<PathBuf>,

    /// Inline document text
    #[arg(long, value_name = "TEXT")]
    text: Option<String>,

    /// Language id of the document (default: inferred from the file extension)
    #[arg(long, value_name = "ID")]
    language: Option<String>,

    /// Selection as LINE:COL or LINE:COL-LINE:COL, one-based
    #[arg(long, value_name = "RANGE")]
    selection: Option<String>,
}

impl From<EditorArgs> for EditorInput {
    fn from(args: EditorArgs) -> Self {
        EditorInput {
            file: args.file,
            text: args.text,
            language: args.language,
            selection: args.selection,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Search for the selected text without prompting
    SearchSelection {
        #[command(flatten)]
        editor: EditorArgs,
    },

    /// Search for QUERY, or prompt with the selection prefilled
    Search {
        /// Search text; skips the prompt
        query: Option<String>,

        #[command(flatten)]
        editor: EditorArgs,
    },

    /// Validate and store the Percipio site URL
    Configure {
        /// Site URL to store; skips the prompt
        #[arg(long, value_name = "URL")]
        site_url: Option<String>,
    },

    /// Open the settings file
    Settings,

    /// Check the configuration and show the configured site
    Status,

    /// List available commands and their parameters
    Commands,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn print_result(result: &CommandResult) {
    match result.status() {
        Some("opened") => {
            if let Some(url) = result.data.as_ref().and_then(|d| d.get("url")).and_then(|u| u.as_str()) {
                println!("Opened {}", url);
            }
        }
        Some("saved") => {
            if let Some(site) = result
                .data
                .as_ref()
                .and_then(|d| d.get("site_url"))
                .and_then(|u| u.as_str())
            {
                println!("Percipio site set to {}", site);
            }
        }
        Some("invalid") => {
            if let Some(message) = result
                .data
                .as_ref()
                .and_then(|d| d.get("message"))
                .and_then(|m| m.as_str())
            {
                eprintln!("{}", message);
            }
        }
        Some("unchanged") => println!("Percipio site unchanged"),
        _ => {}
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let settings_path = cli.settings.unwrap_or_else(default_settings_path);
    let settings = FileSettings::load(&settings_path, cli.workspace_settings)
        .with_context(|| format!("Failed to load settings from {}", settings_path.display()))?;

    let (name, params, editor) = match cli.command {
        Commands::SearchSelection { editor } => (SEARCH_SELECTION_COMMAND, json!({}), editor),
        Commands::Search { query, editor } => (SEARCH_COMMAND, json!({ "query": query }), editor),
        Commands::Configure { site_url } => (
            CONFIGURE_COMMAND,
            json!({ "site_url": site_url }),
            EditorArgs::default(),
        ),
        Commands::Settings => (OPEN_SETTINGS_COMMAND, json!({}), EditorArgs::default()),
        Commands::Status => {
            let mut host = TerminalHost::stdio(settings, None);
            activate(&mut host);
            match configured_site(&host) {
                Some(site) => println!("Percipio site: {}", site),
                None => println!("Percipio site: not configured"),
            }
            return Ok(());
        }
        Commands::Commands => {
            let registry = CommandRegistry::with_defaults();
            for name in registry.names() {
                if let Some(command) = registry.get(name) {
                    println!("{}", name);
                    println!("{}", serde_json::to_string_pretty(&command.parameters_schema())?);
                }
            }
            return Ok(());
        }
    };

    let editor = EditorInput::from(editor).into_editor()?;
    let mut host = TerminalHost::stdio(settings, editor);
    let registry = CommandRegistry::with_defaults();
    let mut context = CommandContext::new(&mut host);

    let result = registry
        .execute(name, params, &mut context)
        .with_context(|| format!("Command {} failed", name))?;
    log::debug!("{} -> {:?}", name, result);
    print_result(&result);

    Ok(())
}

//! Command system
//!
//! Every user-facing action is a [`Command`] with typed, JSON-deserializable
//! parameters. Commands are registered by id in a [`CommandRegistry`] and run
//! against a [`CommandContext`] that lends them the [`Host`].

pub mod configure;
pub mod open_settings;
pub mod search;
pub mod search_selection;

pub use configure::{ConfigureCommand, ConfigureOutcome, ConfigureParams, configure_search};
pub use open_settings::{OpenSettingsCommand, OpenSettingsParams};
pub use search::{SearchCommand, SearchParams};
pub use search_selection::{SearchSelectionCommand, SearchSelectionParams};

use crate::error::{Result, SearchError};
use crate::host::Host;
use crate::search::{configured_site, prompt_to_configure};
use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Search using the current selection, no prompt
pub const SEARCH_SELECTION_COMMAND: &str = "percipio-search-selection";
/// Search with a prompt prefilled from the selection
pub const SEARCH_COMMAND: &str = "percipio-search";
/// Validate and persist the site URL
pub const CONFIGURE_COMMAND: &str = "configure-percipio-search";
/// Open the settings UI for this add-on
pub const OPEN_SETTINGS_COMMAND: &str = "open-percipio-settings";

/// Execution context handed to every command
pub struct CommandContext<'a> {
    pub host: &'a mut dyn Host,
}

impl<'a> CommandContext<'a> {
    pub fn new(host: &'a mut dyn Host) -> Self {
        Self { host }
    }
}

/// Result of a command invocation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandResult {
    pub success: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CommandResult {
    pub fn success_with(data: Value) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    /// The `status` field of the data payload, if any
    pub fn status(&self) -> Option<&str> {
        self.data.as_ref()?.get("status")?.as_str()
    }
}

/// A named command with typed parameters
pub trait Command {
    type Params: DeserializeOwned + JsonSchema;

    /// Command id used for registration and dispatch
    fn name(&self) -> &str;

    fn execute_typed(&self, params: Self::Params, context: &mut CommandContext) -> Result<CommandResult>;

    /// Deserialize `params` and run the command. `null` is treated as `{}`.
    fn execute(&self, params: Value, context: &mut CommandContext) -> Result<CommandResult> {
        let params = if params.is_null() {
            Value::Object(serde_json::Map::new())
        } else {
            params
        };

        let typed = serde_json::from_value(params).map_err(|e| SearchError::InvalidParams {
            command: Command::name(self).to_string(),
            reason: e.to_string(),
        })?;
        self.execute_typed(typed, context)
    }

    /// JSON schema of the parameters
    fn parameters_schema(&self) -> Value {
        serde_json::to_value(schemars::schema_for!(Self::Params)).unwrap_or(Value::Null)
    }
}

/// Object-safe view of [`Command`] used by the registry
pub trait DynCommand {
    fn name(&self) -> &str;
    fn execute(&self, params: Value, context: &mut CommandContext) -> Result<CommandResult>;
    fn parameters_schema(&self) -> Value;
}

impl<T: Command> DynCommand for T {
    fn name(&self) -> &str {
        Command::name(self)
    }

    fn execute(&self, params: Value, context: &mut CommandContext) -> Result<CommandResult> {
        Command::execute(self, params, context)
    }

    fn parameters_schema(&self) -> Value {
        Command::parameters_schema(self)
    }
}

/// Commands registered by id, in registration order
#[derive(Default)]
pub struct CommandRegistry {
    commands: IndexMap<String, Box<dyn DynCommand>>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every built-in command
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(SearchSelectionCommand);
        registry.register(SearchCommand);
        registry.register(ConfigureCommand);
        registry.register(OpenSettingsCommand);
        registry
    }

    /// Register a command, replacing any previous one with the same id
    pub fn register<C: Command + 'static>(&mut self, command: C) {
        let name = Command::name(&command).to_string();
        self.commands.insert(name, Box::new(command));
    }

    pub fn get(&self, name: &str) -> Option<&dyn DynCommand> {
        self.commands.get(name).map(|c| c.as_ref())
    }

    pub fn has(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }

    /// Registered ids in registration order
    pub fn names(&self) -> Vec<&str> {
        self.commands.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Run the command registered under `name`
    pub fn execute(&self, name: &str, params: Value, context: &mut CommandContext) -> Result<CommandResult> {
        let command = self
            .get(name)
            .ok_or_else(|| SearchError::UnknownCommand(name.to_string()))?;

        log::debug!("Executing command {}", name);
        command.execute(params, context)
    }
}

/// Build the command registry and run the activation check: when no site is
/// configured yet, offer to open the settings.
pub fn activate(host: &mut dyn Host) -> CommandRegistry {
    if configured_site(&*host).is_none() {
        log::debug!("No Percipio site configured at activation");
        prompt_to_configure(host);
    }
    CommandRegistry::with_defaults()
}

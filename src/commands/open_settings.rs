use crate::commands::{Command, CommandContext, CommandResult, OPEN_SETTINGS_COMMAND};
use crate::error::Result;
use crate::site::SETTINGS_SECTION;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Parameters for opening the settings (no parameters needed)
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct OpenSettingsParams {}

/// Open the host's settings UI filtered to this add-on
#[derive(Default)]
pub struct OpenSettingsCommand;

impl Command for OpenSettingsCommand {
    type Params = OpenSettingsParams;

    fn name(&self) -> &str {
        OPEN_SETTINGS_COMMAND
    }

    fn execute_typed(&self, _params: OpenSettingsParams, context: &mut CommandContext) -> Result<CommandResult> {
        context.host.open_settings(SETTINGS_SECTION);
        Ok(CommandResult::success_with(serde_json::json!({
            "status": "opened",
            "section": SETTINGS_SECTION
        })))
    }
}

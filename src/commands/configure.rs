use crate::commands::{CONFIGURE_COMMAND, Command, CommandContext, CommandResult};
use crate::error::Result;
use crate::host::{ConfigTarget, Host, InputBoxOptions};
use crate::site::{
    INVALID_SITE_MESSAGE, SITE_URL_KEY, is_valid_percipio_url, normalize_site_url,
    validate_percipio_input,
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Prompt text of the site URL input
pub const SITE_PROMPT: &str = "Percipio site URL";

/// Placeholder of the site URL input
pub const SITE_PLACEHOLDER: &str = "https://demo.percipio.com";

/// What the configure flow did
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ConfigureOutcome {
    /// The normalized origin was written to global settings
    Saved { site_url: String },
    /// The prompt was dismissed or left empty
    Cancelled,
    /// The value failed validation and was not stored
    Invalid { message: String },
    /// The value matches what is already stored
    Unchanged,
}

/// Ask for a site URL, validate it and persist its origin globally.
///
/// `preset` stands in for the prompt answer. Nothing is written when the
/// prompt is cancelled, the value is invalid, or it equals the stored value.
pub fn configure_search(host: &mut dyn Host, preset: Option<String>) -> Result<ConfigureOutcome> {
    let current = host.get_setting(SITE_URL_KEY).unwrap_or_default();

    let value = match preset {
        Some(value) => value,
        None => {
            let options = InputBoxOptions::default()
                .prompt(SITE_PROMPT)
                .placeholder(SITE_PLACEHOLDER)
                .value(current.clone())
                .validate_input(validate_percipio_input);
            match host.show_input_box(&options) {
                Some(value) => value,
                None => return Ok(ConfigureOutcome::Cancelled),
            }
        }
    };

    if value.is_empty() {
        return Ok(ConfigureOutcome::Cancelled);
    }

    let invalid = || ConfigureOutcome::Invalid {
        message: INVALID_SITE_MESSAGE.to_string(),
    };

    if !is_valid_percipio_url(Some(&value)) {
        log::debug!("Rejected site URL {}", value);
        return Ok(invalid());
    }

    if value == current {
        return Ok(ConfigureOutcome::Unchanged);
    }

    let Some(site_url) = normalize_site_url(&value) else {
        return Ok(invalid());
    };
    if site_url == current {
        return Ok(ConfigureOutcome::Unchanged);
    }

    host.update_setting(SITE_URL_KEY, &site_url, ConfigTarget::Global)?;
    log::info!("Percipio site set to {}", site_url);

    Ok(ConfigureOutcome::Saved { site_url })
}

/// Parameters for configuring the site
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct ConfigureParams {
    /// Site URL to store; when given, the prompt is skipped
    #[serde(default)]
    pub site_url: Option<String>,
}

/// Validate-and-persist flow for the Percipio site URL
#[derive(Default)]
pub struct ConfigureCommand;

impl Command for ConfigureCommand {
    type Params = ConfigureParams;

    fn name(&self) -> &str {
        CONFIGURE_COMMAND
    }

    fn execute_typed(&self, params: ConfigureParams, context: &mut CommandContext) -> Result<CommandResult> {
        let outcome = configure_search(context.host, params.site_url)?;
        Ok(CommandResult::success_with(serde_json::to_value(outcome)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configure_metadata() {
        let command = ConfigureCommand;
        assert_eq!(command.name(), "configure-percipio-search");
        assert!(command.parameters_schema().is_object());
    }

    #[test]
    fn test_outcome_serialization() {
        let json = serde_json::to_value(ConfigureOutcome::Saved {
            site_url: "https://demo.percipio.com".to_string(),
        })
        .unwrap();
        assert_eq!(json["status"], "saved");
        assert_eq!(json["site_url"], "https://demo.percipio.com");

        let json = serde_json::to_value(ConfigureOutcome::Unchanged).unwrap();
        assert_eq!(json["status"], "unchanged");
    }
}

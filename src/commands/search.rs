use crate::commands::{Command, CommandContext, CommandResult, SEARCH_COMMAND};
use crate::editor::get_selected_text;
use crate::error::Result;
use crate::host::InputBoxOptions;
use crate::search::{SearchOutcome, execute_search};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Placeholder of the search prompt
pub const SEARCH_PLACEHOLDER: &str = "Enter your Percipio search query";

/// Parameters for the prompted search
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct SearchParams {
    /// Search text; when given, the prompt is skipped
    #[serde(default)]
    pub query: Option<String>,
}

/// Ask for a query (prefilled with the selection), then search for it
#[derive(Default)]
pub struct SearchCommand;

/// Prompt options for a given selection: the whole prefill is selected, and
/// the prompt stays open on focus loss when there is nothing prefilled.
pub fn search_prompt(selected: &str) -> InputBoxOptions {
    InputBoxOptions::default()
        .placeholder(SEARCH_PLACEHOLDER)
        .value(selected)
        .value_selection(0, selected.chars().count() + 1)
        .ignore_focus_out(selected.is_empty())
}

impl Command for SearchCommand {
    type Params = SearchParams;

    fn name(&self) -> &str {
        SEARCH_COMMAND
    }

    fn execute_typed(&self, params: SearchParams, context: &mut CommandContext) -> Result<CommandResult> {
        let term = match params.query {
            Some(query) => Some(query),
            None => {
                let selected = get_selected_text(context.host.active_editor().as_ref());
                context.host.show_input_box(&search_prompt(&selected))
            }
        };

        let outcome = match term {
            Some(term) if !term.is_empty() => execute_search(context.host, &term),
            _ => SearchOutcome::Cancelled,
        };

        Ok(CommandResult::success_with(serde_json::to_value(outcome)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_metadata() {
        let command = SearchCommand;
        assert_eq!(command.name(), "percipio-search");
        assert!(command.parameters_schema().is_object());
    }

    #[test]
    fn test_params_default_query() {
        let params: SearchParams = serde_json::from_value(serde_json::json!({})).unwrap();
        assert!(params.query.is_none());

        let params: SearchParams =
            serde_json::from_value(serde_json::json!({"query": "async rust"})).unwrap();
        assert_eq!(params.query.as_deref(), Some("async rust"));
    }

    #[test]
    fn test_prompt_with_selection() {
        let opts = search_prompt("def foo");
        assert_eq!(opts.value, "def foo");
        assert_eq!(opts.value_selection, Some((0, 8)));
        assert!(!opts.ignore_focus_out);
        assert_eq!(opts.placeholder.as_deref(), Some(SEARCH_PLACEHOLDER));
    }

    #[test]
    fn test_prompt_without_selection_is_sticky() {
        let opts = search_prompt("");
        assert!(opts.ignore_focus_out);
        assert_eq!(opts.value_selection, Some((0, 1)));
    }
}

use crate::commands::{Command, CommandContext, CommandResult, SEARCH_SELECTION_COMMAND};
use crate::editor::get_selected_text;
use crate::error::Result;
use crate::search::execute_search;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Parameters for searching the selection (no parameters needed)
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct SearchSelectionParams {}

/// Search the Percipio site for the current selection without prompting
#[derive(Default)]
pub struct SearchSelectionCommand;

impl Command for SearchSelectionCommand {
    type Params = SearchSelectionParams;

    fn name(&self) -> &str {
        SEARCH_SELECTION_COMMAND
    }

    fn execute_typed(
        &self,
        _params: SearchSelectionParams,
        context: &mut CommandContext,
    ) -> Result<CommandResult> {
        let term = get_selected_text(context.host.active_editor().as_ref());
        let outcome = execute_search(context.host, &term);
        Ok(CommandResult::success_with(serde_json::to_value(outcome)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_selection_metadata() {
        let command = SearchSelectionCommand;
        assert_eq!(command.name(), "percipio-search-selection");
        assert!(command.parameters_schema().is_object());
    }
}

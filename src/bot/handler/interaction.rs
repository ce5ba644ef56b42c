use serenity::all::{CommandInteraction, Context, Interaction};

use crate::bot::{
    command::CommandInvocation, dispatch::Dispatcher, reply::SerenityResponder,
};

/// Handles interaction creation.
///
/// Only slash commands are dispatched; the bot registers no components or
/// autocomplete options, so other interaction kinds are ignored.
pub async fn handle_interaction_create(
    dispatcher: &Dispatcher,
    ctx: Context,
    interaction: Interaction,
) {
    let Some(command) = command_interaction(interaction) else {
        return;
    };

    let invocation = CommandInvocation::from_interaction(&command);
    let responder = SerenityResponder::new(ctx.http.clone(), command);

    dispatcher.dispatch(&invocation, responder).await;
}

/// Slash command carried by the interaction, `None` for every other kind.
pub fn command_interaction(interaction: Interaction) -> Option<CommandInteraction> {
    match interaction {
        Interaction::Command(command) => Some(command),
        other => {
            tracing::debug!(kind = ?other.kind(), "Ignoring non-command interaction");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::serenity::{
        create_test_autocomplete_interaction, create_test_command_interaction,
    };

    /// Tests that slash commands are passed on.
    ///
    /// Expected: Some with the command's name
    #[test]
    fn passes_slash_commands() {
        let interaction =
            Interaction::Command(create_test_command_interaction("identify", 42, None));

        let command = command_interaction(interaction).expect("command should be dispatched");

        assert_eq!(command.data.name, "identify");
    }

    /// Tests that autocomplete requests are not dispatched.
    ///
    /// Expected: None
    #[test]
    fn ignores_autocomplete() {
        let interaction = create_test_autocomplete_interaction("identify", 42);

        assert!(matches!(interaction, Interaction::Autocomplete(_)));
        assert!(command_interaction(interaction).is_none());
    }
}

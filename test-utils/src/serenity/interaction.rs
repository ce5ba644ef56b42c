//! Test factories for creating Serenity interaction objects.
//!
//! Interactions are built from JSON shaped like Discord's gateway payload for
//! a slash command used in a DM, so no guild or member data is needed.

use serde_json::{json, Value};
use serenity::all::{CommandInteraction, Interaction};

use super::attachment::{attachment_json, TEST_ATTACHMENT_ID};

const INTERACTION_TYPE_COMMAND: u8 = 2;
const INTERACTION_TYPE_AUTOCOMPLETE: u8 = 4;
const OPTION_TYPE_ATTACHMENT: u8 = 11;

/// Attachment supplied for a command option in a test interaction.
pub struct TestAttachmentOption<'a> {
    /// Name of the command option the attachment was given for
    pub option: &'a str,
    pub url: &'a str,
    pub filename: &'a str,
    pub size: u32,
    pub content_type: Option<&'a str>,
}

/// Creates a test slash command interaction.
///
/// The attachment, when given, is placed both in the command options and in
/// the interaction's `resolved` data, as Discord does.
///
/// # Arguments
/// - `name` - Command name
/// - `user_id` - Discord id of the invoking user
/// - `attachment` - Optional attachment option
///
/// # Returns
/// - `CommandInteraction` - A valid Serenity CommandInteraction for testing
///
/// # Panics
/// - If the JSON cannot be deserialized (indicates invalid test data)
///
/// # Examples
///
/// ```rust,ignore
/// use test_utils::serenity::interaction::{create_test_command_interaction, TestAttachmentOption};
///
/// let interaction = create_test_command_interaction(
///     "identify",
///     200000000000000000,
///     Some(TestAttachmentOption {
///         option: "image",
///         url: "https://cdn.discordapp.com/attachments/1/2/card.png",
///         filename: "card.png",
///         size: 2048,
///         content_type: Some("image/png"),
///     }),
/// );
/// assert_eq!(interaction.data.name, "identify");
/// ```
pub fn create_test_command_interaction(
    name: &str,
    user_id: u64,
    attachment: Option<TestAttachmentOption<'_>>,
) -> CommandInteraction {
    serde_json::from_value(interaction_json(
        INTERACTION_TYPE_COMMAND,
        name,
        user_id,
        attachment,
    ))
    .expect("Failed to create test command interaction - invalid JSON structure")
}

/// Creates a test autocomplete interaction for the given command.
///
/// # Panics
/// - If the JSON cannot be deserialized (indicates invalid test data)
pub fn create_test_autocomplete_interaction(name: &str, user_id: u64) -> Interaction {
    serde_json::from_value(interaction_json(
        INTERACTION_TYPE_AUTOCOMPLETE,
        name,
        user_id,
        None,
    ))
    .expect("Failed to create test autocomplete interaction - invalid JSON structure")
}

fn interaction_json(
    kind: u8,
    name: &str,
    user_id: u64,
    attachment: Option<TestAttachmentOption<'_>>,
) -> Value {
    let (options, attachments) = match attachment {
        Some(attachment) => (
            json!([{
                "name": attachment.option,
                "type": OPTION_TYPE_ATTACHMENT,
                "value": TEST_ATTACHMENT_ID,
            }]),
            json!({
                TEST_ATTACHMENT_ID: attachment_json(
                    attachment.url,
                    attachment.filename,
                    attachment.size,
                    attachment.content_type,
                ),
            }),
        ),
        None => (json!([]), json!({})),
    };

    json!({
        "id": "1200000000000000000",
        "application_id": "1300000000000000000",
        "type": kind,
        "data": {
            "id": "1400000000000000000",
            "name": name,
            "type": 1,
            "options": options,
            "resolved": {
                "attachments": attachments,
            },
        },
        "channel_id": "1500000000000000000",
        "user": {
            "id": user_id.to_string(),
            "username": "collector",
            "discriminator": "0",
            "global_name": null,
            "avatar": null,
        },
        "token": "test-interaction-token",
        "version": 1,
        "locale": "en-US",
        "entitlements": [],
        "authorizing_integration_owners": {},
        "context": 1,
    })
}

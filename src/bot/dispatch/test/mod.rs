use super::*;
use std::sync::Arc;

use httpmock::prelude::*;
use test_utils::{fixture::cardsight, serenity::create_test_attachment};

use crate::{
    bot::{
        command::identify::IMAGE_OPTION,
        test::{RecordedReply, RecordingResponder},
    },
    model::{attachment::ImageAttachment, message::ReplyContent},
    service::{identification::IdentificationService, test::ScriptedIdentifier},
};

mod unknown_command;

const USER_ID: u64 = 42;

fn dispatcher_with(identifier: Arc<ScriptedIdentifier>) -> Dispatcher {
    let state = BotState::new(IdentificationService::new(identifier), reqwest::Client::new());
    Dispatcher::new(CommandRegistry::new(), state)
}

fn identify_invocation(
    url: &str,
    filename: &str,
    size: u32,
    content_type: Option<&str>,
) -> CommandInvocation {
    let attachment = create_test_attachment(url, filename, size, content_type);

    CommandInvocation::new("identify", USER_ID)
        .with_attachment(IMAGE_OPTION, ImageAttachment::from(&attachment))
}

/// Serves a small PNG at `/card.png`.
async fn serve_image(server: &MockServer) -> httpmock::Mock<'_> {
    server
        .mock_async(|when, then| {
            when.method(GET).path("/card.png");
            then.status(200)
                .header("content-type", "image/png")
                .body([0x89, 0x50, 0x4E, 0x47]);
        })
        .await
}

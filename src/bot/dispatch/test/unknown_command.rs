use super::*;

/// Tests dispatching a command name that is not registered.
///
/// Verifies that the user gets a private "Unknown command." reply and that
/// no command runs.
///
/// Expected: one ephemeral text response, identifier untouched
#[tokio::test]
async fn replies_privately_to_unknown_command() {
    let identifier = Arc::new(ScriptedIdentifier::unused());
    let dispatcher = dispatcher_with(identifier.clone());
    let responder = RecordingResponder::new();

    let state = dispatcher
        .dispatch(&CommandInvocation::new("ping", USER_ID), responder.clone())
        .await;

    assert_eq!(state, ReplyState::Sent);
    assert_eq!(
        responder.replies(),
        vec![RecordedReply::Response(
            ReplyContent::Text(UNKNOWN_COMMAND.to_string()),
            true
        )]
    );
    assert!(identifier.calls().is_empty());
    assert_eq!(dispatcher.registry().len(), 1);
}

/// Tests that command names are matched exactly.
///
/// Expected: "Identify" is unknown
#[tokio::test]
async fn matches_command_names_exactly() {
    let identifier = Arc::new(ScriptedIdentifier::unused());
    let dispatcher = dispatcher_with(identifier.clone());
    let responder = RecordingResponder::new();

    dispatcher
        .dispatch(&CommandInvocation::new("Identify", USER_ID), responder.clone())
        .await;

    assert_eq!(
        responder.replies(),
        vec![RecordedReply::Response(
            ReplyContent::Text(UNKNOWN_COMMAND.to_string()),
            true
        )]
    );
    assert!(identifier.calls().is_empty());
}

//! `/identify image:<attachment>`: identify trading cards in an uploaded image.
//!
//! The attachment is validated before any network call. Valid images get an
//! immediate "processing" reply which is then edited with the result, since
//! identification can take several seconds.

use serenity::all::{CommandOptionType, CreateCommand, CreateCommandOption};

use crate::{
    bot::{
        command::CommandInvocation,
        reply::{Reply, Responder},
    },
    error::AppError,
    model::{attachment::ImageAttachment, identification::IdentificationResult},
    service::format,
    state::BotState,
};

pub const NAME: &str = "identify";
pub const IMAGE_OPTION: &str = "image";

/// Largest accepted attachment, in bytes.
pub const MAX_FILE_SIZE: u64 = 8 * 1024 * 1024;

const ALLOWED_CONTENT_TYPES: [&str; 5] = [
    "image/jpeg",
    "image/jpg",
    "image/png",
    "image/webp",
    "image/gif",
];

const MAX_FILENAME_LENGTH: usize = 255;

pub fn schema() -> CreateCommand {
    CreateCommand::new(NAME)
        .description("Identify a trading card from an image")
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::Attachment,
                IMAGE_OPTION,
                "Image of the trading card",
            )
            .required(true),
        )
}

/// Strips every character outside `[A-Za-z0-9._-]` and truncates to 255
/// characters.
///
/// Filenames come straight from users; only the sanitized form may be logged
/// or sent to CardSight.
pub fn sanitize_filename(filename: &str) -> String {
    filename
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
        .take(MAX_FILENAME_LENGTH)
        .collect()
}

/// Lowercased MIME type without parameters, e.g. `"image/png"` for
/// `"Image/PNG; charset=binary"`.
fn normalize_content_type(content_type: &str) -> String {
    content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase()
}

fn is_allowed_content_type(content_type: &str) -> bool {
    ALLOWED_CONTENT_TYPES.contains(&content_type)
}

/// Runs the identify command.
///
/// Validation failures are answered with an ephemeral notice. Download and
/// processing failures replace the processing notice with a generic message;
/// only failures to talk to Discord are returned as errors.
pub async fn execute<R: Responder>(
    state: &BotState,
    invocation: &CommandInvocation,
    reply: &mut Reply<R>,
) -> Result<(), AppError> {
    let attachment = invocation.attachment(IMAGE_OPTION).ok_or_else(|| {
        AppError::InternalError(format!("Missing required option '{}'", IMAGE_OPTION))
    })?;

    let filename = sanitize_filename(&attachment.filename);
    let content_type = attachment
        .content_type
        .as_deref()
        .map(normalize_content_type);

    let Some(content_type) = content_type.filter(|ct| is_allowed_content_type(ct)) else {
        tracing::debug!(
            filename = %filename,
            content_type = attachment.content_type.as_deref(),
            "Rejected attachment with unsupported content type"
        );
        return reply.send(format::format_invalid_file_type(), true).await;
    };

    if attachment.size > MAX_FILE_SIZE {
        tracing::debug!(
            filename = %filename,
            size = attachment.size,
            "Rejected attachment over size limit"
        );
        return reply.send(format::format_file_too_large(), true).await;
    }

    reply.send(format::format_processing(), false).await?;

    let message = match identify_attachment(state, attachment, &filename, &content_type).await {
        Ok(result) if result.is_success() => {
            format::format_identification(&result, Some(attachment.url.as_str()))
        }
        Ok(result) => format::format_error(&result),
        Err(e) => {
            tracing::error!(
                filename = %filename,
                user_id = invocation.user_id,
                error = %e,
                "Failed to process image"
            );
            format::format_processing_failed()
        }
    };

    reply.edit(message).await
}

async fn identify_attachment(
    state: &BotState,
    attachment: &ImageAttachment,
    filename: &str,
    content_type: &str,
) -> Result<IdentificationResult, AppError> {
    let image = download_attachment(&state.http_client, &attachment.url).await?;

    Ok(state
        .identification
        .identify(image, filename, Some(content_type))
        .await)
}

/// Downloads attachment bytes; non-success statuses are errors.
async fn download_attachment(client: &reqwest::Client, url: &str) -> Result<Vec<u8>, AppError> {
    let response = client.get(url).send().await?.error_for_status()?;
    let bytes = response.bytes().await?;

    Ok(bytes.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests that path separators and traversal are removed.
    ///
    /// Expected: only [A-Za-z0-9._-] survives
    #[test]
    fn sanitizes_path_traversal() {
        let sanitized = sanitize_filename("../../etc/passwd.jpg");

        assert_eq!(sanitized, "....etcpasswd.jpg");
        assert!(!sanitized.contains('/'));
        assert!(!sanitized.contains('\\'));
    }

    /// Tests that shell and markup characters are removed.
    #[test]
    fn sanitizes_special_characters() {
        assert_eq!(sanitize_filename("my card (1) <b>.png"), "mycard1b.png");
        assert_eq!(sanitize_filename("a\\b\nc\u{202e}.gif"), "abc.gif");
        assert_eq!(sanitize_filename("trout_2023-chrome.webp"), "trout_2023-chrome.webp");
    }

    /// Tests truncation to 255 characters.
    #[test]
    fn truncates_long_filenames() {
        let long = format!("{}.png", "a".repeat(300));

        assert_eq!(sanitize_filename(&long).len(), 255);
    }

    /// Tests content type normalization and the allow-list.
    #[test]
    fn checks_content_type_allow_list() {
        for allowed in ALLOWED_CONTENT_TYPES {
            assert!(is_allowed_content_type(allowed));
        }
        assert!(is_allowed_content_type(&normalize_content_type("Image/PNG; charset=binary")));
        assert!(!is_allowed_content_type(&normalize_content_type("application/pdf")));
        assert!(!is_allowed_content_type(&normalize_content_type("image/svg+xml")));
        assert!(!is_allowed_content_type(""));
    }

    /// Tests that the schema requires the image option.
    #[test]
    fn schema_requires_image_attachment() {
        let schema = serde_json::to_value(schema()).unwrap();

        assert_eq!(schema["name"], NAME);
        assert_eq!(schema["options"][0]["name"], IMAGE_OPTION);
        assert_eq!(schema["options"][0]["required"], true);
    }
}

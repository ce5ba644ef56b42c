//! Test factory for creating Serenity Attachment objects.
//!
//! Attachments arrive as the resolved value of a slash command's attachment
//! option. The factory builds them from JSON shaped like Discord's payload.

use serde_json::Value;
use serenity::all::Attachment;

/// Attachment id used by every factory-built attachment.
pub const TEST_ATTACHMENT_ID: &str = "1100000000000000000";

/// Creates a test Serenity Attachment with customizable fields.
///
/// The attachment id is fixed and `proxy_url` mirrors `url`. Image dimensions
/// are set when the content type is an image, as Discord does.
///
/// # Arguments
/// - `url` - CDN URL the attachment bytes are downloaded from
/// - `filename` - Filename as uploaded by the user (untrusted)
/// - `size` - Declared size in bytes
/// - `content_type` - Declared MIME type, if Discord detected one
///
/// # Returns
/// - `Attachment` - A valid Serenity Attachment struct for testing
///
/// # Panics
/// - If the JSON cannot be deserialized into an Attachment (indicates invalid test data)
///
/// # Examples
///
/// ```rust,ignore
/// use test_utils::serenity::create_test_attachment;
///
/// let attachment = create_test_attachment(
///     "https://cdn.discordapp.com/attachments/1/2/card.png",
///     "card.png",
///     2048,
///     Some("image/png"),
/// );
/// assert_eq!(attachment.size, 2048);
/// ```
pub fn create_test_attachment(
    url: &str,
    filename: &str,
    size: u32,
    content_type: Option<&str>,
) -> Attachment {
    serde_json::from_value(attachment_json(url, filename, size, content_type))
        .expect("Failed to create test attachment - invalid JSON structure")
}

/// Attachment payload as Discord sends it, also used inside interaction
/// `resolved` data.
pub(crate) fn attachment_json(
    url: &str,
    filename: &str,
    size: u32,
    content_type: Option<&str>,
) -> Value {
    let is_image = content_type.is_some_and(|ct| ct.starts_with("image/"));
    let dimension = if is_image { Some(512) } else { None };

    serde_json::json!({
        "id": TEST_ATTACHMENT_ID,
        "filename": filename,
        "size": size,
        "url": url,
        "proxy_url": url,
        "content_type": content_type,
        "height": dimension,
        "width": dimension,
        "ephemeral": false,
    })
}

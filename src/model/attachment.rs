use serenity::all::Attachment;

/// Image attachment supplied with a command invocation.
///
/// Holds the untrusted values exactly as Discord reported them; the identify
/// command sanitizes the filename and validates type and size before use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageAttachment {
    pub url: String,
    pub filename: String,
    /// Declared size in bytes.
    pub size: u64,
    /// Declared MIME type, absent when Discord could not detect one.
    pub content_type: Option<String>,
}

impl From<&Attachment> for ImageAttachment {
    fn from(attachment: &Attachment) -> Self {
        Self {
            url: attachment.url.clone(),
            filename: attachment.filename.clone(),
            size: u64::from(attachment.size),
            content_type: attachment.content_type.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::serenity::create_test_attachment;

    /// Tests conversion from a Serenity attachment.
    ///
    /// Expected: url, filename, size and content type copied verbatim
    #[test]
    fn converts_from_serenity_attachment() {
        let attachment = create_test_attachment(
            "https://cdn.discordapp.com/attachments/1/2/card.png",
            "card.png",
            2048,
            Some("image/png"),
        );

        let image = ImageAttachment::from(&attachment);

        assert_eq!(image.url, "https://cdn.discordapp.com/attachments/1/2/card.png");
        assert_eq!(image.filename, "card.png");
        assert_eq!(image.size, 2048);
        assert_eq!(image.content_type.as_deref(), Some("image/png"));
    }

    /// Tests conversion when Discord did not report a content type.
    ///
    /// Expected: content_type is None
    #[test]
    fn converts_attachment_without_content_type() {
        let attachment = create_test_attachment("https://example.com/a", "a", 1, None);

        let image = ImageAttachment::from(&attachment);

        assert!(image.content_type.is_none());
    }
}

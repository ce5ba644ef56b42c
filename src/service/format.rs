//! Response formatting for identification results.
//!
//! Every function here is pure: the same input always yields the same
//! [`EmbedMessage`]. Layout depends on the number of detections: none gets
//! usage tips, one gets a detailed card view, several get a one-line summary
//! per card.

use crate::model::{
    identification::{Detection, IdentificationResult},
    message::EmbedMessage,
};

/// Color for error notices.
pub const ERROR_COLOR: u32 = 0x992D22;
/// Color for informational notices.
pub const INFO_COLOR: u32 = 0x5865F2;

const UNKNOWN_ERROR: &str = "An unknown error occurred.";

/// Formats an identification result.
///
/// # Arguments
/// - `result` - Normalized identification result
/// - `image_url` - URL of the uploaded image, shown as thumbnail when present
///
/// # Returns
/// - `EmbedMessage` - "no cards" notice, single card view, or multi-card summary
pub fn format_identification(result: &IdentificationResult, image_url: Option<&str>) -> EmbedMessage {
    let message = match result.detections() {
        [] => return format_no_detections(),
        [detection] => format_single_detection(detection, result),
        detections => format_multiple_detections(detections, result),
    };

    match image_url {
        Some(url) => message.thumbnail(url),
        None => message,
    }
}

fn format_no_detections() -> EmbedMessage {
    EmbedMessage::new("🔍 No Cards Detected", INFO_COLOR)
        .description("We couldn't identify any trading cards in this image.")
        .field(
            "Tips for better results",
            "• Make sure the card is clearly visible and in focus\n\
             • Use good lighting and avoid glare\n\
             • Photograph the card against a plain background\n\
             • Include the whole card in the frame",
            false,
        )
}

fn format_single_detection(detection: &Detection, result: &IdentificationResult) -> EmbedMessage {
    let card = &detection.card;
    let confidence = detection.confidence;

    let mut message = EmbedMessage::new("🃏 Card Identified", confidence.color())
        .field(
            "Card",
            format!(
                "**{}**\nNumber: #{}\nYear: {}",
                card.name, card.number, card.year
            ),
            false,
        )
        .field(
            "Set",
            format!(
                "{}\nRelease: {}\nManufacturer: {}",
                card.set_name, card.release_name, card.manufacturer
            ),
            false,
        )
        .field(
            "Confidence",
            format!("{} {}", confidence.icon(), confidence.label()),
            true,
        );

    if let Some(parallel) = &card.parallel {
        message = message.field("Parallel", parallel.display_name(), true);
    }

    message.footer(processing_footer(result))
}

fn format_multiple_detections(
    detections: &[Detection],
    result: &IdentificationResult,
) -> EmbedMessage {
    let lines: Vec<String> = detections
        .iter()
        .enumerate()
        .map(|(index, detection)| {
            format!(
                "{}. {} - {} {}",
                index + 1,
                detection.card.display_name(),
                detection.confidence.icon(),
                detection.confidence.label()
            )
        })
        .collect();

    EmbedMessage::new(
        format!("🃏 {} Cards Identified", detections.len()),
        INFO_COLOR,
    )
    .description(lines.join("\n"))
    .footer(processing_footer(result))
}

fn processing_footer(result: &IdentificationResult) -> String {
    format!("Processed in {:.2}s", result.processing_time_secs())
}

/// Formats a failed identification.
///
/// Uses the result's error message, or a generic fallback, and appends the
/// request id as footer so users can quote it to support.
pub fn format_error(result: &IdentificationResult) -> EmbedMessage {
    let message = EmbedMessage::new("❌ Identification Failed", ERROR_COLOR)
        .description(result.error().unwrap_or(UNKNOWN_ERROR));

    match result.request_id() {
        Some(request_id) => message.footer(format!("Request ID: {}", request_id)),
        None => message,
    }
}

pub fn format_invalid_file_type() -> EmbedMessage {
    EmbedMessage::new("❌ Invalid File Type", ERROR_COLOR)
        .description("Please upload an image file (JPEG, PNG, WebP, or GIF).")
}

pub fn format_file_too_large() -> EmbedMessage {
    EmbedMessage::new("❌ File Too Large", ERROR_COLOR)
        .description("Please upload an image smaller than 8 MB.")
}

pub fn format_processing() -> EmbedMessage {
    EmbedMessage::new("⏳ Processing", INFO_COLOR)
        .description("Analyzing your card image. This may take a few seconds...")
}

/// Shown when the image could not be downloaded or processed at all.
pub fn format_processing_failed() -> EmbedMessage {
    EmbedMessage::new("❌ Processing Failed", ERROR_COLOR)
        .description("Failed to process the image. Please try again with a different image.")
}

/// Shown by the dispatcher when a command returns an error.
pub fn format_command_error() -> EmbedMessage {
    EmbedMessage::new("❌ Error", ERROR_COLOR)
        .description("There was an error while executing this command.")
}

//! Domain models for card identification results.
//!
//! These types are produced by the identification adapter from the raw
//! CardSight response and consumed by the response formatter. A result lives
//! only for the duration of one command execution.

/// Coarse reliability bucket the remote service attaches to a detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Confidence {
    High,
    Medium,
    Low,
}

impl Confidence {
    pub fn label(&self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::High => "🟢",
            Self::Medium => "🟡",
            Self::Low => "🔴",
        }
    }

    /// Embed color for the confidence tier.
    pub fn color(&self) -> u32 {
        match self {
            Self::High => 0x57F287,
            Self::Medium => 0xFEE75C,
            Self::Low => 0xED4245,
        }
    }
}

/// Parallel (variant) information for a card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParallelInfo {
    pub name: String,
    /// Print run for numbered parallels, e.g. `99` for "/99". Always positive.
    pub numbered_to: Option<u32>,
}

impl ParallelInfo {
    /// Parallel name with the print run appended when numbered, e.g. "Refractor /99".
    pub fn display_name(&self) -> String {
        match self.numbered_to {
            Some(numbered_to) => format!("{} /{}", self.name, numbered_to),
            None => self.name.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardInfo {
    pub name: String,
    pub number: String,
    pub year: String,
    pub set_name: String,
    pub release_name: String,
    pub manufacturer: String,
    pub parallel: Option<ParallelInfo>,
}

impl CardInfo {
    /// One-line display string for the card.
    ///
    /// Format: `"{year} {set_name} - {name} #{number}"`, followed by
    /// `" ({parallel})"` when the card is a parallel.
    pub fn display_name(&self) -> String {
        let base = format!(
            "{} {} - {} #{}",
            self.year, self.set_name, self.name, self.number
        );

        match &self.parallel {
            Some(parallel) => format!("{} ({})", base, parallel.display_name()),
            None => base,
        }
    }
}

/// One identified card within an image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Detection {
    pub confidence: Confidence,
    pub card: CardInfo,
}

/// Normalized outcome of one identification call.
///
/// Only built through [`IdentificationResult::success`] or
/// [`IdentificationResult::failure`]: a successful result never carries an
/// error and a failed result never carries detections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentificationResult {
    success: bool,
    /// Detections in the relevance order returned by the remote service.
    detections: Vec<Detection>,
    processing_time_ms: u64,
    request_id: Option<String>,
    error: Option<String>,
}

impl IdentificationResult {
    pub fn success(
        detections: Vec<Detection>,
        processing_time_ms: u64,
        request_id: Option<String>,
    ) -> Self {
        Self {
            success: true,
            detections,
            processing_time_ms,
            request_id,
            error: None,
        }
    }

    pub fn failure(
        error: impl Into<String>,
        processing_time_ms: u64,
        request_id: Option<String>,
    ) -> Self {
        Self {
            success: false,
            detections: Vec::new(),
            processing_time_ms,
            request_id,
            error: Some(error.into()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Detections in the relevance order returned by the remote service.
    pub fn detections(&self) -> &[Detection] {
        &self.detections
    }

    pub fn processing_time_ms(&self) -> u64 {
        self.processing_time_ms
    }

    /// Correlation id reported by CardSight, if any.
    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }

    /// User-facing error message; `None` for successful results.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Processing time in seconds, as shown to users.
    pub fn processing_time_secs(&self) -> f64 {
        self.processing_time_ms as f64 / 1000.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trout() -> CardInfo {
        CardInfo {
            name: "Mike Trout".to_string(),
            number: "27".to_string(),
            year: "2023".to_string(),
            set_name: "Topps Chrome".to_string(),
            release_name: "Topps Chrome Baseball".to_string(),
            manufacturer: "Topps".to_string(),
            parallel: None,
        }
    }

    /// Tests the display string of a base card.
    ///
    /// Expected: "{year} {set} - {name} #{number}"
    #[test]
    fn displays_base_card() {
        assert_eq!(trout().display_name(), "2023 Topps Chrome - Mike Trout #27");
    }

    /// Tests the display string of a numbered parallel.
    ///
    /// Expected: parallel name and print run appended in parentheses
    #[test]
    fn displays_numbered_parallel() {
        let card = CardInfo {
            parallel: Some(ParallelInfo {
                name: "Refractor".to_string(),
                numbered_to: Some(99),
            }),
            ..trout()
        };

        assert_eq!(
            card.display_name(),
            "2023 Topps Chrome - Mike Trout #27 (Refractor /99)"
        );
    }

    /// Tests the display string of an unnumbered parallel.
    ///
    /// Expected: parallel name appended without a print run
    #[test]
    fn displays_unnumbered_parallel() {
        let card = CardInfo {
            parallel: Some(ParallelInfo {
                name: "Refractor".to_string(),
                numbered_to: None,
            }),
            ..trout()
        };

        assert_eq!(
            card.display_name(),
            "2023 Topps Chrome - Mike Trout #27 (Refractor)"
        );
    }

    /// Tests that a failed result never carries detections and a successful
    /// one never carries an error.
    #[test]
    fn constructors_keep_invariants() {
        let ok = IdentificationResult::success(
            vec![Detection {
                confidence: Confidence::High,
                card: trout(),
            }],
            1200,
            Some("req_1".to_string()),
        );
        assert!(ok.is_success());
        assert!(ok.error().is_none());
        assert_eq!(ok.detections().len(), 1);
        assert_eq!(ok.request_id(), Some("req_1"));
        assert_eq!(ok.processing_time_secs(), 1.2);

        let failed = IdentificationResult::failure("Card identification failed", 50, None);
        assert!(!failed.is_success());
        assert!(failed.detections().is_empty());
        assert_eq!(failed.error(), Some("Card identification failed"));
        assert_eq!(failed.processing_time_ms(), 50);
    }
}

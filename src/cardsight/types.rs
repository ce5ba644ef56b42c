//! Wire types for the CardSight API.
//!
//! Field names follow the API's camelCase JSON. Card fields are lenient: the
//! API sends years and card numbers as either strings or numbers, and omits
//! fields it could not read.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::model::identification::{CardInfo, Confidence, Detection, ParallelInfo};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentifyResponse {
    /// Absent on some malformed responses; treated as a failure.
    pub success: Option<bool>,
    #[serde(default)]
    pub detections: Vec<DetectionDto>,
    pub request_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DetectionDto {
    pub confidence: ConfidenceDto,
    pub card: CardDto,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub enum ConfidenceDto {
    #[serde(alias = "high", alias = "HIGH")]
    High,
    #[serde(alias = "medium", alias = "MEDIUM")]
    Medium,
    #[serde(alias = "low", alias = "LOW")]
    Low,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardDto {
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub number: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub year: String,
    #[serde(default)]
    pub set_name: String,
    #[serde(default)]
    pub release_name: String,
    #[serde(default)]
    pub manufacturer: String,
    pub parallel: Option<ParallelDto>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParallelDto {
    pub name: String,
    pub numbered_to: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

/// Body the API sends alongside non-success statuses.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ErrorBody {
    pub error: Option<String>,
    pub message: Option<String>,
    pub request_id: Option<String>,
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => s,
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Null) | None => String::new(),
        Some(other) => other.to_string(),
    })
}

impl From<ConfidenceDto> for Confidence {
    fn from(dto: ConfidenceDto) -> Self {
        match dto {
            ConfidenceDto::High => Confidence::High,
            ConfidenceDto::Medium => Confidence::Medium,
            ConfidenceDto::Low => Confidence::Low,
        }
    }
}

impl From<DetectionDto> for Detection {
    fn from(dto: DetectionDto) -> Self {
        let card = dto.card;

        Self {
            confidence: dto.confidence.into(),
            card: CardInfo {
                name: card.name,
                number: card.number,
                year: card.year,
                set_name: card.set_name,
                release_name: card.release_name,
                manufacturer: card.manufacturer,
                // A print run of zero is not a numbered parallel
                parallel: card.parallel.map(|p| ParallelInfo {
                    name: p.name,
                    numbered_to: p.numbered_to.filter(|n| *n > 0),
                }),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::fixture::cardsight;

    /// Tests decoding a full identify response.
    ///
    /// Expected: Ok with detections in order and numeric year converted to string
    #[test]
    fn decodes_identify_response() {
        let body = cardsight::identify_response(vec![
            cardsight::trout_detection("High"),
            cardsight::detection(
                "medium",
                "Shohei Ohtani",
                "17",
                2024,
                "Bowman",
                Some(("Gold", Some(50))),
            ),
        ]);

        let response: IdentifyResponse = serde_json::from_value(body).unwrap();

        assert_eq!(response.success, Some(true));
        assert_eq!(response.request_id.as_deref(), Some(cardsight::REQUEST_ID));

        let detections: Vec<Detection> = response.detections.into_iter().map(Into::into).collect();
        assert_eq!(detections.len(), 2);
        assert_eq!(detections[0].confidence, Confidence::High);
        assert_eq!(detections[0].card.year, "2023");
        assert_eq!(detections[0].card.name, "Mike Trout");
        assert_eq!(detections[1].confidence, Confidence::Medium);
        assert_eq!(
            detections[1].card.parallel,
            Some(ParallelInfo {
                name: "Gold".to_string(),
                numbered_to: Some(50),
            })
        );
    }

    /// Tests decoding a response that omits the success flag.
    ///
    /// Expected: Ok with success None and empty detections
    #[test]
    fn decodes_response_without_success_flag() {
        let response: IdentifyResponse =
            serde_json::from_value(cardsight::identify_response_without_success()).unwrap();

        assert!(response.success.is_none());
        assert!(response.detections.is_empty());
    }

    /// Tests decoding a card with missing fields and a string year.
    ///
    /// Expected: Ok with empty strings for missing fields
    #[test]
    fn decodes_sparse_card() {
        let dto: CardDto = serde_json::from_value(serde_json::json!({
            "name": "Unknown Player",
            "year": "1989",
        }))
        .unwrap();

        assert_eq!(dto.year, "1989");
        assert_eq!(dto.number, "");
        assert_eq!(dto.set_name, "");
        assert!(dto.parallel.is_none());
    }

    /// Tests that a zero print run is dropped.
    ///
    /// Expected: parallel kept, numbered_to None
    #[test]
    fn drops_zero_print_run() {
        let dto: DetectionDto = serde_json::from_value(cardsight::detection(
            "Low",
            "Mike Trout",
            "27",
            2023,
            "Topps Chrome",
            Some(("Refractor", Some(0))),
        ))
        .unwrap();

        let detection = Detection::from(dto);

        assert_eq!(
            detection.card.parallel.map(|p| p.numbered_to),
            Some(None)
        );
    }
}

//! Test fixtures providing reusable CardSight API payloads.
//!
//! Fixtures build the JSON bodies the CardSight API returns so tests can serve
//! them from a mock HTTP server.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture::cardsight;
//!
//! let body = cardsight::identify_response(vec![
//!     cardsight::trout_detection("High"),
//!     cardsight::detection("Low", "Shohei Ohtani", "1", 2024, "Topps", None),
//! ]);
//! ```

pub mod cardsight;

//! CardSight Bot Test Utils
//!
//! Provides shared testing utilities for the bot's unit tests. This crate has
//! no dependency on the bot itself; it only builds the external data the bot
//! consumes.
//!
//! # Overview
//!
//! The test utilities consist of two components:
//! - **serenity**: factories for Serenity API objects (attachments and
//!   interactions) built by deserializing JSON the way Discord would send it
//! - **fixture**: CardSight API response bodies for mocking the HTTP API
//!
//! # Usage
//!
//! ```rust,ignore
//! use httpmock::prelude::*;
//! use test_utils::fixture::cardsight;
//!
//! #[tokio::test]
//! async fn identifies_card() {
//!     let server = MockServer::start();
//!     server.mock(|when, then| {
//!         when.method(POST).path("/v1/identify/card");
//!         then.status(200)
//!             .json_body(cardsight::identify_response(vec![cardsight::trout_detection("High")]));
//!     });
//!     // Point the client at server.base_url()...
//! }
//! ```

pub mod fixture;
pub mod serenity;

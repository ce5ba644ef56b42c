//! Test factories for creating Serenity API objects.
//!
//! This module provides factory functions for creating mock Serenity structs
//! for testing purposes. These factories create valid Serenity objects by
//! deserializing JSON, simulating what Discord's API would return.
//!
//! # Available Factories
//!
//! - `attachment::create_test_attachment` - Create Serenity Attachment objects
//! - `interaction::create_test_command_interaction` - Create slash command interactions
//! - `interaction::create_test_autocomplete_interaction` - Create autocomplete interactions

pub mod attachment;
pub mod interaction;

pub use attachment::create_test_attachment;
pub use interaction::{
    create_test_autocomplete_interaction, create_test_command_interaction, TestAttachmentOption,
};

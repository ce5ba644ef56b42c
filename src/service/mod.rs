//! Business logic between the Discord bot and the CardSight API.
//!
//! - `identification` - Calls CardSight and folds every outcome into an
//!   `IdentificationResult`
//! - `format` - Renders results and fixed notices as embed payloads

pub mod format;
pub mod identification;

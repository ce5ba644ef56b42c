pub mod bot;
pub mod cardsight;
pub mod config;
pub mod error;
pub mod model;
pub mod service;
pub mod startup;
pub mod state;

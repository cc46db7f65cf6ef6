//! Playlist filtering and document assembly

pub mod document;
pub mod filter;

pub use document::{SaveOutcome, save};
pub use filter::{ChannelEntry, australia_live_channels};

//! Xtream provider client module

pub mod client;

pub use client::{FetchError, XtreamClient};

//! Client for the dolarapi.com quote service.

pub mod client;
pub mod parsers;

pub use client::DolarApiClient;
pub use parsers::DolarApiParser;

/// Upstream image API access
///
/// - `client.rs` - HTTP client for the random image endpoint and image downloads

pub mod client;

pub use client::ImageClient;

/// Image media handling
///
/// This module handles:
/// - Decoding downloaded image bytes and building display handles (loader.rs)
/// - Saving a displayed image to disk (download.rs)

pub mod loader;
pub mod download;

pub use loader::LoadedImage;

/// Presentation layer
///
/// Pure rendering from the session and the current image:
/// - `controls.rs` - type toggle, category selector, generate button
/// - `viewer.rs` - current image, metadata line, download button
/// - `history_grid.rs` - history thumbnails
/// - `banner.rs` - error banner with auto-dismiss
/// - `hearts.rs` - floating hearts canvas

pub mod banner;
pub mod controls;
pub mod hearts;
pub mod history_grid;
pub mod viewer;

/// State management module
///
/// This module handles all application state, including:
/// - Image types, categories and origins (data.rs)
/// - The bounded viewing history (history.rs)
/// - Loaded images for history entries (cache.rs)
/// - Current selection and the loading guard (view.rs)
/// - The session that owns all of the above (session.rs)

pub mod data;
pub mod history;
pub mod cache;
pub mod view;
pub mod session;

pub use session::Session;

use super::cache::ImageCache;
use super::data::{ImageType, Origin};
use super::history::History;
use super::view::ViewState;
use crate::error::FetchError;
use crate::media::LoadedImage;

/// Everything the user has selected and seen during this run.
///
/// Owned by the application; presentation code borrows it.
#[derive(Debug, Default)]
pub struct Session {
    view: ViewState,
    history: History,
    cache: ImageCache,
    in_flight: Option<Origin>,
}

impl Session {
    pub fn new() -> Self {
        Self {
            view: ViewState::new(),
            history: History::new(),
            cache: ImageCache::new(),
            in_flight: None,
        }
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn cache(&self) -> &ImageCache {
        &self.cache
    }

    pub fn set_type(&mut self, image_type: ImageType) {
        self.view.set_type(image_type);
    }

    pub fn set_category(&mut self, category: &str) -> bool {
        self.view.set_category(category)
    }

    /// Start a generation flow.
    ///
    /// Returns the request to send, or None if one is already in flight.
    pub fn begin_generation(&mut self) -> Option<Origin> {
        if !self.view.begin_loading() {
            return None;
        }

        let request = Origin::new(self.view.image_type(), self.view.category());
        self.in_flight = Some(request.clone());
        Some(request)
    }

    /// Finish the in-flight generation flow.
    ///
    /// Always leaves the loading state. On success the URL goes to the
    /// front of the history; on failure the history is untouched.
    pub fn complete_generation(
        &mut self,
        result: Result<String, FetchError>,
    ) -> Result<(String, Origin), FetchError> {
        self.view.end_loading();
        let origin = self
            .in_flight
            .take()
            .unwrap_or_else(|| Origin::new(self.view.image_type(), self.view.category()));

        let url = result?;

        if let Some(evicted) = self.history.push(url.clone()) {
            if !self.history.contains(&evicted) {
                self.cache.remove(&evicted);
            }
        }
        self.cache.insert_origin(&url, origin.clone());

        Ok((url, origin))
    }

    /// Keep a loaded image if its URL is still in the history
    pub fn store_image(&mut self, image: LoadedImage) -> bool {
        self.cache.store_image(image)
    }

    /// Origin recorded for a history URL.
    ///
    /// A URL listed more than once has a single origin, the one of its
    /// most recent generation.
    pub fn origin_of(&self, url: &str) -> Option<&Origin> {
        self.cache.get(url).map(|entry| &entry.origin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn urls(session: &Session) -> Vec<String> {
        session.history().list().map(str::to_string).collect()
    }

    #[test]
    fn test_successful_generation_updates_history() {
        let mut session = Session::new();

        let request = session.begin_generation().unwrap();
        assert_eq!(request, Origin::new(ImageType::Sfw, "waifu"));
        assert!(session.view().is_loading());

        let (url, origin) = session
            .complete_generation(Ok("https://x/1.png".to_string()))
            .unwrap();

        assert_eq!(url, "https://x/1.png");
        assert_eq!(origin, request);
        assert_eq!(urls(&session), vec!["https://x/1.png"]);
        assert!(!session.view().is_loading());
        assert_eq!(session.origin_of("https://x/1.png"), Some(&request));
    }

    #[test]
    fn test_second_generation_rejected_while_loading() {
        let mut session = Session::new();
        assert!(session.begin_generation().is_some());
        assert!(session.begin_generation().is_none());
    }

    #[test]
    fn test_transport_error_leaves_history() {
        let mut session = Session::new();
        session.begin_generation().unwrap();

        let result = session.complete_generation(Err(FetchError::Transport { status: 500 }));

        assert_eq!(result, Err(FetchError::Transport { status: 500 }));
        assert!(session.history().is_empty());
        assert!(!session.view().is_loading());
        assert!(session.begin_generation().is_some());
    }

    #[test]
    fn test_malformed_response_leaves_history() {
        let mut session = Session::new();
        session.begin_generation().unwrap();
        session
            .complete_generation(Ok("https://x/0.png".to_string()))
            .unwrap();

        session.begin_generation().unwrap();
        let result = session.complete_generation(Err(FetchError::MalformedResponse));

        assert_eq!(result, Err(FetchError::MalformedResponse));
        assert_eq!(urls(&session), vec!["https://x/0.png"]);
    }

    #[test]
    fn test_request_uses_selection_at_begin() {
        let mut session = Session::new();
        session.set_type(ImageType::Nsfw);
        assert!(session.set_category("neko"));

        session.begin_generation().unwrap();
        // Toggling while the request is out does not change its origin
        session.set_type(ImageType::Sfw);

        let (_, origin) = session
            .complete_generation(Ok("https://x/n.png".to_string()))
            .unwrap();
        assert_eq!(origin, Origin::new(ImageType::Nsfw, "neko"));
        assert_eq!(session.view().category(), "waifu");
    }

    #[test]
    fn test_eviction_drops_cache_entry() {
        let mut session = Session::new();
        for i in 1..=13 {
            session.begin_generation().unwrap();
            session.complete_generation(Ok(format!("u{}", i))).unwrap();
        }

        let expected: Vec<String> = (2..=13).rev().map(|i| format!("u{}", i)).collect();
        assert_eq!(urls(&session), expected);
        assert!(session.origin_of("u1").is_none());
        assert!(expected.iter().all(|url| session.origin_of(url).is_some()));
    }

    #[test]
    fn test_eviction_keeps_cache_for_duplicate_url() {
        let mut session = Session::new();
        session.begin_generation().unwrap();
        session.complete_generation(Ok("dup".to_string())).unwrap();
        for i in 2..=12 {
            session.begin_generation().unwrap();
            session.complete_generation(Ok(format!("u{}", i))).unwrap();
        }
        session.begin_generation().unwrap();
        session.complete_generation(Ok("dup".to_string())).unwrap();

        // The older "dup" was evicted but a newer copy is still listed
        assert_eq!(session.history().list().next(), Some("dup"));
        assert!(session.origin_of("dup").is_some());
    }

    #[test]
    fn test_duplicate_url_shows_latest_origin() {
        let mut session = Session::new();
        session.begin_generation().unwrap();
        session.complete_generation(Ok("dup".to_string())).unwrap();

        session.set_type(ImageType::Nsfw);
        assert!(session.set_category("trap"));
        session.begin_generation().unwrap();
        session.complete_generation(Ok("dup".to_string())).unwrap();

        assert_eq!(urls(&session), vec!["dup", "dup"]);
        assert_eq!(
            session.origin_of("dup"),
            Some(&Origin::new(ImageType::Nsfw, "trap"))
        );
    }
}

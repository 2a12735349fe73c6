/// Error banner with auto-dismiss
use iced::task;
use iced::widget::{container, text};
use iced::{Border, Color, Element, Length, Theme};
use std::time::Duration;

use crate::Message;

/// Shown for every failed generation or image load
pub const LOAD_FAILED: &str = "Failed to load image. Please try again.";
/// Shown when writing a downloaded image fails
pub const SAVE_FAILED: &str = "Failed to save image.";

/// The error banner and its dismiss timer.
///
/// Each `show` starts a new timer generation identified by a token; a
/// dismiss carrying an older token does nothing. The banner owns the
/// abort handle of its pending dismiss task, so replacing or dropping
/// the banner cancels the old timer.
pub struct ErrorBanner {
    message: Option<String>,
    token: u64,
    dismiss_after: Duration,
    timer: Option<task::Handle>,
}

impl ErrorBanner {
    pub fn new(dismiss_after: Duration) -> Self {
        Self {
            message: None,
            token: 0,
            dismiss_after,
            timer: None,
        }
    }

    /// Show `message` and start a new timer generation. Returns the token
    /// the dismiss timer must carry.
    pub fn show(&mut self, message: impl Into<String>) -> u64 {
        self.token += 1;
        self.message = Some(message.into());
        // Dropping the old handle aborts the old timer
        self.timer = None;
        self.token
    }

    /// Attach the abort handle of the dismiss task for `token`
    pub fn arm(&mut self, token: u64, handle: task::Handle) {
        if token == self.token {
            self.timer = Some(handle.abort_on_drop());
        } else {
            handle.abort();
        }
    }

    /// Timer fired. Only the latest timer may hide the banner.
    pub fn dismiss(&mut self, token: u64) -> bool {
        if token != self.token || self.message.is_none() {
            return false;
        }
        self.hide();
        true
    }

    /// Hide immediately and cancel the pending timer
    pub fn hide(&mut self) {
        self.message = None;
        self.timer = None;
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn dismiss_after(&self) -> Duration {
        self.dismiss_after
    }
}

/// Resolves to `token` once `delay` has passed
pub async fn dismiss_timer(token: u64, delay: Duration) -> u64 {
    tokio::time::sleep(delay).await;
    token
}

impl std::fmt::Debug for ErrorBanner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ErrorBanner")
            .field("message", &self.message)
            .field("token", &self.token)
            .field("dismiss_after", &self.dismiss_after)
            .field("armed", &self.timer.is_some())
            .finish()
    }
}

/// Render the banner, if there is anything to show
pub fn view(banner: &ErrorBanner) -> Option<Element<'_, Message>> {
    let message = banner.message()?;

    Some(
        container(text(message).size(16))
            .padding(12)
            .width(Length::Fill)
            .style(|_theme: &Theme| container::Style {
                text_color: Some(Color::WHITE),
                background: Some(Color::from_rgb8(0xd9, 0x34, 0x4b).into()),
                border: Border::default().rounded(10.0),
                ..container::Style::default()
            })
            .into(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::Instant;

    fn secs(s: u64) -> Duration {
        Duration::from_secs(s)
    }

    #[tokio::test(start_paused = true)]
    async fn test_auto_dismiss_after_five_seconds() {
        let start = Instant::now();
        let mut banner = ErrorBanner::new(secs(5));

        let token = banner.show(LOAD_FAILED);
        let fired = dismiss_timer(token, banner.dismiss_after()).await;

        let elapsed = start.elapsed();
        assert!(elapsed >= secs(5) && elapsed < secs(6), "{:?}", elapsed);
        assert_eq!(banner.message(), Some(LOAD_FAILED));
        assert!(banner.dismiss(fired));
        assert_eq!(banner.message(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_second_error_restarts_timer() {
        let start = Instant::now();
        let mut banner = ErrorBanner::new(secs(5));

        let first = banner.show(LOAD_FAILED);
        let first_timer = tokio::spawn(dismiss_timer(first, banner.dismiss_after()));

        tokio::time::sleep(secs(2)).await;
        let second = banner.show(SAVE_FAILED);
        let second_timer = tokio::spawn(dismiss_timer(second, banner.dismiss_after()));

        // The first timer fires at T+5 and must not hide the second message
        let fired = first_timer.await.unwrap();
        let elapsed = start.elapsed();
        assert!(elapsed >= secs(5) && elapsed < secs(6), "{:?}", elapsed);
        assert!(!banner.dismiss(fired));
        assert_eq!(banner.message(), Some(SAVE_FAILED));

        let fired = second_timer.await.unwrap();
        let elapsed = start.elapsed();
        assert!(elapsed >= secs(7) && elapsed < secs(8), "{:?}", elapsed);
        assert!(banner.dismiss(fired));
        assert_eq!(banner.message(), None);
    }

    #[test]
    fn test_hide_clears_message() {
        let mut banner = ErrorBanner::new(secs(5));
        let token = banner.show(LOAD_FAILED);

        banner.hide();

        assert_eq!(banner.message(), None);
        assert!(!banner.dismiss(token));
    }
}

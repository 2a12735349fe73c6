use iced::widget::{canvas, column, container, scrollable, stack, text};
use iced::{time, window};
use iced::{Alignment, Element, Length, Subscription, Task, Theme};
use std::path::PathBuf;
use std::time::Instant;
use tracing::{debug, error, info, warn};

mod api;
mod config;
mod error;
mod logging;
mod media;
mod state;
mod ui;

use api::ImageClient;
use config::Config;
use error::FetchError;
use media::{download, LoadedImage};
use state::data::{ImageType, Origin};
use state::Session;
use ui::banner::{self, ErrorBanner};
use ui::hearts::{self, Hearts};
use ui::viewer::{self, CurrentImage, ImageStatus};
use ui::{controls, history_grid};

/// Main application state
struct WaifuViewer {
    config: Config,
    /// Shared HTTP client for the API and image downloads
    client: ImageClient,
    /// Selection, history and loaded images
    session: Session,
    /// The image on screen, if any
    current: Option<CurrentImage>,
    banner: ErrorBanner,
    hearts: Hearts,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// User picked SFW or NSFW
    TypeSelected(ImageType),
    /// User picked a category of the current type
    CategorySelected(String),
    /// User clicked "Generate Waifu"
    Generate,
    /// The API call of the in-flight generation finished
    Fetched(Result<String, FetchError>),
    /// An image finished downloading and decoding (or failed to)
    ImageLoaded(String, Result<LoadedImage, FetchError>),
    /// User clicked a history thumbnail
    HistorySelected(String),
    /// User clicked "Download Image"
    Download,
    DownloadComplete(Result<PathBuf, String>),
    /// Dismiss timer of the error banner fired
    DismissError(u64),
    /// Once per second, a new heart floats up
    SpawnHeart(Instant),
    AnimationFrame(Instant),
}

impl WaifuViewer {
    /// Create a new instance of the application
    fn new(config: Config, client: ImageClient) -> (Self, Task<Message>) {
        let mut hearts = Hearts::new();
        if config.ui.hearts {
            // First heart right away, the ticker takes over after that
            hearts.spawn(&mut rand::thread_rng(), Instant::now());
        }

        let banner = ErrorBanner::new(config.ui.error_dismiss());

        (
            WaifuViewer {
                config,
                client,
                session: Session::new(),
                current: None,
                banner,
                hearts,
            },
            Task::none(),
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::TypeSelected(image_type) => {
                self.session.set_type(image_type);
                debug!(
                    "Type set to {}, category reset to {}",
                    image_type,
                    self.session.view().category()
                );
                Task::none()
            }
            Message::CategorySelected(category) => {
                if !self.session.set_category(&category) {
                    warn!(
                        "Ignoring category {} for type {}",
                        category,
                        self.session.view().image_type()
                    );
                }
                Task::none()
            }
            Message::Generate => {
                let Some(request) = self.session.begin_generation() else {
                    debug!("Generation already in flight, ignoring click");
                    return Task::none();
                };

                self.banner.hide();
                info!("🎲 Requesting {}/{}", request.image_type, request.category);

                let client = self.client.clone();
                Task::perform(
                    async move { client.fetch_image(request.image_type, request.category).await },
                    Message::Fetched,
                )
            }
            Message::Fetched(result) => match self.session.complete_generation(result) {
                Ok((url, origin)) => {
                    info!("✅ Got {} ({} in history)", url, self.session.history().len());
                    self.current = Some(CurrentImage::pending(url.clone(), origin));
                    self.load_image(url)
                }
                Err(e) => {
                    error!("Generation failed: {}", e);
                    self.show_error(banner::LOAD_FAILED)
                }
            },
            Message::ImageLoaded(url, result) => {
                let is_current = self.current.as_ref().is_some_and(|c| c.url == url);

                match result {
                    Ok(image) => {
                        self.session.store_image(image.clone());
                        if let Some(current) = self.current.as_mut().filter(|_| is_current) {
                            current.status = ImageStatus::Loaded(image);
                        }
                        Task::none()
                    }
                    Err(e) => {
                        error!("Image {} failed to load: {}", url, e);
                        match self.current.as_mut().filter(|_| is_current) {
                            Some(current) => {
                                current.status = ImageStatus::Failed;
                                self.show_error(banner::LOAD_FAILED)
                            }
                            None => Task::none(),
                        }
                    }
                }
            }
            Message::HistorySelected(url) => match self.select_history(url) {
                Some(url) => self.load_image(url),
                None => Task::none(),
            },
            Message::Download => {
                let Some(image) = self.current.as_ref().and_then(CurrentImage::image) else {
                    return Task::none();
                };

                let directory = download::default_directory(self.config.ui.download_dir.as_deref());
                let file_name = download::default_file_name(&image.url, image.extension);
                let bytes = image.bytes.clone();

                match download::pick_destination(&directory, &file_name) {
                    Some(path) => Task::perform(download::save_image(path, bytes), |result| {
                        Message::DownloadComplete(result.map_err(|e| e.to_string()))
                    }),
                    None => {
                        debug!("Save dialog cancelled");
                        Task::none()
                    }
                }
            }
            Message::DownloadComplete(Ok(path)) => {
                info!("⬇️  Image saved to {}", path.display());
                Task::none()
            }
            Message::DownloadComplete(Err(e)) => {
                error!("Failed to save image: {}", e);
                self.show_error(banner::SAVE_FAILED)
            }
            Message::DismissError(token) => {
                self.banner.dismiss(token);
                Task::none()
            }
            Message::SpawnHeart(now) => {
                self.hearts.spawn(&mut rand::thread_rng(), now);
                Task::none()
            }
            Message::AnimationFrame(now) => {
                self.hearts.advance(now);
                Task::none()
            }
        }
    }

    /// Display a history entry. Returns the URL to download when its
    /// image is neither cached nor already loading.
    fn select_history(&mut self, url: String) -> Option<String> {
        let already_loading = self
            .current
            .as_ref()
            .is_some_and(|c| c.url == url && matches!(c.status, ImageStatus::Loading));
        if already_loading {
            debug!("{} is still loading", url);
            return None;
        }

        let origin = self.session.origin_of(&url).cloned().unwrap_or_else(|| {
            Origin::new(
                self.session.view().image_type(),
                self.session.view().category(),
            )
        });

        match self.session.cache().image(&url).cloned() {
            Some(image) => {
                self.current = Some(CurrentImage::loaded(image, origin));
                None
            }
            None => {
                // Never finished loading, try the image URL again
                self.current = Some(CurrentImage::pending(url.clone(), origin));
                Some(url)
            }
        }
    }

    /// Download and decode `url` in the background
    fn load_image(&self, url: String) -> Task<Message> {
        let client = self.client.clone();
        Task::perform(
            async move {
                let result = client.load_image(url.clone()).await;
                (url, result)
            },
            |(url, result)| Message::ImageLoaded(url, result),
        )
    }

    /// Show the banner and (re)start its dismiss timer
    fn show_error(&mut self, message: &str) -> Task<Message> {
        let token = self.banner.show(message);
        let delay = self.banner.dismiss_after();

        let (task, handle) =
            Task::perform(banner::dismiss_timer(token, delay), Message::DismissError).abortable();
        self.banner.arm(token, handle);

        task
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let content = column![
            text("💖 Random Waifu Generator 💖").size(40),
            controls::type_selector(self.session.view()),
            controls::category_selector(self.session.view()),
            controls::generate_button(self.session.view().is_loading()),
        ]
        .push_maybe(banner::view(&self.banner))
        .push(viewer::view(self.current.as_ref()))
        .push(text("📜 History").size(24))
        .push(history_grid::view(&self.session, Message::HistorySelected))
        .spacing(20)
        .padding(40)
        .max_width(960.0)
        .align_x(Alignment::Center);

        let page = scrollable(container(content).center_x(Length::Fill));

        if self.config.ui.hearts {
            stack![
                canvas(&self.hearts).width(Length::Fill).height(Length::Fill),
                page,
            ]
            .into()
        } else {
            page.into()
        }
    }

    /// Heart ticker and animation frames, both dropped when hearts are off
    fn subscription(&self) -> Subscription<Message> {
        if !self.config.ui.hearts {
            return Subscription::none();
        }

        let spawner = time::every(hearts::SPAWN_INTERVAL).map(Message::SpawnHeart);

        if self.hearts.is_empty() {
            spawner
        } else {
            Subscription::batch([spawner, window::frames().map(Message::AnimationFrame)])
        }
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dracula
    }
}

fn main() -> iced::Result {
    if let Err(e) = logging::init() {
        eprintln!("⚠️  {}", e);
    }

    let config = Config::load_default();

    let client = match ImageClient::new(&config.api) {
        Ok(client) => client,
        Err(e) => {
            error!("Cannot start without an HTTP client: {}", e);
            std::process::exit(1);
        }
    };

    info!("Using image API at {}", config.api.endpoint);

    iced::application(
        "Random Waifu Generator",
        WaifuViewer::update,
        WaifuViewer::view,
    )
    .subscription(WaifuViewer::subscription)
    .theme(WaifuViewer::theme)
    .window_size(iced::Size::new(1024.0, 900.0))
    .centered()
    .run_with(move || WaifuViewer::new(config, client))
}

// SPDX-License-Identifier: MPL-2.0
//! Application root state and the Iced launch.
//!
//! The image is picked and decoded before the event loop starts, so `App`
//! always has something to show; it only wires the viewer component into
//! Iced's update/view/subscription cycle.

pub mod dialog;
mod message;
mod subscription;

pub use message::{Flags, Message};

use crate::config::ThemeMode;
use crate::ui::viewer;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

pub const WINDOW_TITLE: &str = "Image Pan Zoom";

/// Root Iced application state.
pub struct App {
    viewer: viewer::State,
    file_name: Option<String>,
    theme_mode: ThemeMode,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("file_name", &self.file_name)
            .field("scale", &self.viewer.controller().scale())
            .finish()
    }
}

/// Builds the window settings from the configured size.
pub fn window_settings(config: &crate::config::Config) -> window::Settings {
    let (width, height) = config.window_size();

    window::Settings {
        size: iced::Size::new(width, height),
        min_size: Some(iced::Size::new(
            crate::config::MIN_WINDOW_WIDTH,
            crate::config::MIN_WINDOW_HEIGHT,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    let window = window_settings(&flags.config);

    // iced requires a `Fn` boot closure but the flags can only be consumed once
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window)
        .subscription(App::subscription)
        .run()
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let file_name = flags
            .path
            .file_name()
            .and_then(|name| name.to_str())
            .map(String::from);

        tracing::info!(
            path = %flags.path.display(),
            width = flags.image.width,
            height = flags.image.height,
            "image loaded"
        );

        let viewer = viewer::State::new(flags.image, flags.config.slider_step());
        let task = viewer.initial_task().map(Message::Viewer);

        let app = App {
            viewer,
            file_name,
            theme_mode: flags.config.theme_mode(),
        };

        (app, task)
    }

    fn title(&self) -> String {
        match &self.file_name {
            Some(name) => format!("{WINDOW_TITLE} - {name}"),
            None => WINDOW_TITLE.to_string(),
        }
    }

    fn theme(&self) -> Theme {
        match self.theme_mode {
            ThemeMode::Light => Theme::Light,
            ThemeMode::Dark => Theme::Dark,
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_event_subscription()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Viewer(msg) => self.viewer.update(msg).map(Message::Viewer),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        self.viewer.view().map(Message::Viewer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::media::ImageData;
    use std::path::PathBuf;

    fn app_with(path: &str) -> App {
        let flags = Flags {
            image: ImageData::from_rgba(2, 2, vec![255; 16]),
            path: PathBuf::from(path),
            config: Config::default(),
        };
        App::new(flags).0
    }

    #[test]
    fn title_includes_file_name() {
        let app = app_with("/tmp/photos/cat.png");
        assert_eq!(app.title(), "Image Pan Zoom - cat.png");
    }

    #[test]
    fn default_theme_is_dark() {
        let app = app_with("cat.png");
        assert_eq!(app.theme(), Theme::Dark);
    }

    #[test]
    fn window_settings_use_config_size() {
        let mut config = Config::default();
        config.window.width = Some(1024.0);
        config.window.height = Some(700.0);

        let settings = window_settings(&config);
        assert_eq!(settings.size, iced::Size::new(1024.0, 700.0));
    }

    #[test]
    fn viewer_messages_reach_the_viewer() {
        let mut app = app_with("cat.png");
        let _ = app.update(Message::Viewer(viewer::Message::SliderChanged(2.0)));
        assert_eq!(app.viewer.controller().scale(), 2.0);
    }
}

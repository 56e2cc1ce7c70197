use minifb::{KeyRepeat, Window, WindowOptions};

use crate::canvas::Canvas;
use crate::error::GameError;
use crate::input::{control_for_key, InputEvent};
use crate::settings::Settings;

/// What the game loop needs from the host: input in, frames out.
pub trait Platform {
    /// Returns the input gathered since the last call. Never blocks; an
    /// empty batch means nothing happened.
    fn poll_events(&mut self) -> Vec<InputEvent>;

    fn present(&mut self, canvas: &Canvas) -> Result<(), GameError>;
}

pub struct MinifbPlatform {
    window: Window,
}

impl MinifbPlatform {
    pub fn open(settings: &Settings) -> Result<Self, GameError> {
        let mut window = Window::new(
            Settings::TITLE,
            settings.screen_width,
            settings.screen_height,
            WindowOptions {
                borderless: false,
                title: true,
                resize: false,
                ..WindowOptions::default()
            },
        )
        .map_err(GameError::Window)?;

        window.set_target_fps(settings.target_fps);

        Ok(Self { window })
    }

    /// Size the window was actually given, which may differ from the request
    pub fn size(&self) -> (usize, usize) {
        self.window.get_size()
    }
}

impl Platform for MinifbPlatform {
    fn poll_events(&mut self) -> Vec<InputEvent> {
        if !self.window.is_open() {
            return vec![InputEvent::Close];
        }

        // Key state is refreshed by the last `update_with_buffer` call
        let pressed = self
            .window
            .get_keys_pressed(KeyRepeat::No)
            .into_iter()
            .filter_map(control_for_key)
            .map(InputEvent::Pressed);
        let released = self
            .window
            .get_keys_released()
            .into_iter()
            .filter_map(control_for_key)
            .map(InputEvent::Released);

        pressed.chain(released).collect()
    }

    fn present(&mut self, canvas: &Canvas) -> Result<(), GameError> {
        self.window
            .update_with_buffer(canvas.buffer(), canvas.width(), canvas.height())
            .map_err(GameError::Present)
    }
}

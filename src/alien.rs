use crate::canvas::{Canvas, Color};
use crate::geometry::Rect;
use crate::settings::Settings;
use crate::sprite::Sprite;

/// One member of the alien fleet.
pub struct Alien {
    x: f32,
    rect: Rect,
    color: Color,
}

impl Alien {
    pub fn new(settings: &Settings, left: i32, top: i32) -> Self {
        Self {
            x: left as f32,
            rect: Rect::new(left, top, settings.alien_width, settings.alien_height),
            color: settings.alien_color,
        }
    }

    pub fn x(&self) -> f32 {
        self.x
    }
}

impl Sprite for Alien {
    // The fleet holds still: sideways drift and edge reversal are not
    // implemented yet.
    fn update(&mut self, _settings: &Settings) {}

    fn draw(&self, canvas: &mut Canvas) {
        canvas.fill_rect(self.rect, self.color);
    }

    fn rect(&self) -> Rect {
        self.rect
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_update_keeps_position() {
        let settings = Settings::default();
        let mut alien = Alien::new(&settings, 60, 48);
        alien.update(&settings);
        assert_eq!(alien.rect(), Rect::new(60, 48, 60, 48));
        assert_relative_eq!(alien.x(), 60.0);
    }
}

use crate::canvas::{Canvas, Color};
use crate::geometry::Rect;
use crate::settings::Settings;
use crate::sprite::Sprite;

/// The player's ship, steered by the left/right controls.
pub struct Ship {
    x: f32,
    rect: Rect,
    color: Color,
    pub moving_right: bool,
    pub moving_left: bool,
}

impl Ship {
    /// Creates the ship centred on the bottom edge of the screen.
    pub fn new(settings: &Settings) -> Self {
        let mut rect = Rect::new(0, 0, settings.ship_width, settings.ship_height);
        rect.set_mid_bottom((
            (settings.screen_width / 2) as i32,
            settings.screen_height as i32,
        ));

        Self {
            x: rect.left as f32,
            rect,
            color: settings.ship_color,
            moving_right: false,
            moving_left: false,
        }
    }

    pub fn x(&self) -> f32 {
        self.x
    }
}

impl Sprite for Ship {
    fn update(&mut self, settings: &Settings) {
        if self.moving_right {
            self.x += settings.ship_speed;
        }
        if self.moving_left {
            self.x -= settings.ship_speed;
        }

        // Keep the whole ship on screen
        let max_x = (settings.screen_width as f32 - self.rect.width as f32).max(0.0);
        self.x = self.x.clamp(0.0, max_x);
        self.rect.left = self.x.round() as i32;
    }

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

    fn settings() -> Settings {
        Settings {
            screen_width: 200,
            screen_height: 100,
            ship_width: 20,
            ship_height: 10,
            ship_speed: 3.0,
            ..Settings::default()
        }
    }

    #[test]
    fn test_spawns_at_bottom_centre() {
        let ship = Ship::new(&settings());
        assert_eq!(ship.rect(), Rect::new(90, 90, 20, 10));
        assert_relative_eq!(ship.x(), 90.0);
    }

    #[test]
    fn test_moves_with_flags() {
        let settings = settings();
        let mut ship = Ship::new(&settings);

        ship.update(&settings);
        assert_relative_eq!(ship.x(), 90.0);

        ship.moving_right = true;
        ship.update(&settings);
        assert_relative_eq!(ship.x(), 93.0);

        ship.moving_left = true;
        ship.update(&settings);
        assert_relative_eq!(ship.x(), 93.0);

        ship.moving_right = false;
        ship.update(&settings);
        ship.update(&settings);
        assert_relative_eq!(ship.x(), 87.0);
        assert_eq!(ship.rect().left, 87);
    }

    #[test]
    fn test_stays_on_screen() {
        let settings = settings();
        let mut ship = Ship::new(&settings);

        ship.moving_right = true;
        for _ in 0..1000 {
            ship.update(&settings);
            assert!(ship.rect().left >= 0);
            assert!(ship.rect().right() <= settings.screen_width as i32);
        }
        assert_eq!(ship.rect().right(), 200);

        ship.moving_right = false;
        ship.moving_left = true;
        for _ in 0..1000 {
            ship.update(&settings);
            assert!(ship.rect().left >= 0);
            assert!(ship.rect().right() <= settings.screen_width as i32);
        }
        assert_eq!(ship.rect().left, 0);
    }

    #[test]
    fn test_draw() {
        let settings = settings();
        let ship = Ship::new(&settings);
        let mut canvas = Canvas::new(settings.screen_width, settings.screen_height);
        ship.draw(&mut canvas);
        let pixel = Some(settings.ship_color.to_pixel());
        assert_eq!(canvas.pixel(90, 90), pixel);
        assert_eq!(canvas.pixel(109, 99), pixel);
        assert_eq!(canvas.pixel(89, 95), Some(0));
    }
}

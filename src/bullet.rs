use crate::canvas::{Canvas, Color};
use crate::geometry::Rect;
use crate::settings::Settings;
use crate::sprite::Sprite;

/// A shot fired by the ship. Travels straight up until it leaves the screen.
pub struct Bullet {
    y: f32,
    rect: Rect,
    color: Color,
}

impl Bullet {
    /// Creates a bullet whose top-centre sits on `mid_top`.
    pub fn new(settings: &Settings, mid_top: (i32, i32)) -> Self {
        let mut rect = Rect::new(0, 0, settings.bullet_width, settings.bullet_height);
        rect.set_mid_top(mid_top);

        Self {
            y: rect.top as f32,
            rect,
            color: settings.bullet_color,
        }
    }

    /// True once the bullet's bottom edge has crossed the top of the screen
    pub fn is_off_screen(&self) -> bool {
        self.rect.bottom() <= 0
    }
}

impl Sprite for Bullet {
    fn update(&mut self, settings: &Settings) {
        self.y -= settings.bullet_speed;
        self.rect.top = self.y.round() as i32;
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

    #[test]
    fn test_spawn_position() {
        let settings = Settings::default();
        let bullet = Bullet::new(&settings, (600, 752));
        assert_eq!(bullet.rect(), Rect::new(599, 752, 3, 15));
        assert!(!bullet.is_off_screen());
    }

    #[test]
    fn test_flies_up() {
        let settings = Settings {
            bullet_speed: 1.5,
            ..Settings::default()
        };
        let mut bullet = Bullet::new(&settings, (10, 100));
        bullet.update(&settings);
        assert_eq!(bullet.rect().top, 99); // 98.5 rounds away from zero
        bullet.update(&settings);
        assert_eq!(bullet.rect().top, 97);
        assert_eq!(bullet.rect().left, 9);
    }

    #[test]
    fn test_off_screen_once_bottom_crosses_top() {
        let settings = Settings {
            bullet_speed: 1.0,
            bullet_height: 15,
            ..Settings::default()
        };
        let mut bullet = Bullet::new(&settings, (10, 0));
        for _ in 0..14 {
            bullet.update(&settings);
            assert!(!bullet.is_off_screen());
        }
        bullet.update(&settings);
        assert_eq!(bullet.rect().bottom(), 0);
        assert!(bullet.is_off_screen());
    }
}

use slotmap::{new_key_type, SlotMap};

use crate::canvas::Canvas;
use crate::geometry::Rect;
use crate::settings::Settings;

new_key_type! {
    /// Handle to a sprite inside the `Group` that owns it
    pub struct SpriteKey;
}

/// Anything the game loop moves and draws once per frame
pub trait Sprite {
    /// Advances the sprite by one simulation tick.
    fn update(&mut self, settings: &Settings);

    fn draw(&self, canvas: &mut Canvas);

    fn rect(&self) -> Rect;
}

/// Unordered set of sprites of one kind. Handles are never reused for a
/// different sprite, so the group cannot hold the same sprite twice.
pub struct Group<T: Sprite> {
    sprites: SlotMap<SpriteKey, T>,
}

impl<T: Sprite> Group<T> {
    pub fn new() -> Self {
        Self {
            sprites: SlotMap::with_key(),
        }
    }

    pub fn insert(&mut self, sprite: T) -> SpriteKey {
        self.sprites.insert(sprite)
    }

    pub fn get(&self, key: SpriteKey) -> Option<&T> {
        self.sprites.get(key)
    }

    pub fn len(&self) -> usize {
        self.sprites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (SpriteKey, &T)> {
        self.sprites.iter()
    }

    pub fn update(&mut self, settings: &Settings) {
        for sprite in self.sprites.values_mut() {
            sprite.update(settings);
        }
    }

    pub fn draw(&self, canvas: &mut Canvas) {
        for sprite in self.sprites.values() {
            sprite.draw(canvas);
        }
    }

    /// Drops every sprite for which `keep` returns false, returning how many
    /// were removed.
    pub fn retain(&mut self, mut keep: impl FnMut(&T) -> bool) -> usize {
        let before = self.sprites.len();
        self.sprites.retain(|_, sprite| keep(sprite));
        before - self.sprites.len()
    }
}

impl<T: Sprite> Default for Group<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::Color;

    struct Dot {
        rect: Rect,
    }

    impl Sprite for Dot {
        fn update(&mut self, _settings: &Settings) {
            self.rect.top -= 1;
        }

        fn draw(&self, canvas: &mut Canvas) {
            canvas.fill_rect(self.rect, Color::new(0xff, 0xff, 0xff));
        }

        fn rect(&self) -> Rect {
            self.rect
        }
    }

    fn dot(x: i32, y: i32) -> Dot {
        Dot {
            rect: Rect::new(x, y, 1, 1),
        }
    }

    #[test]
    fn test_handles_are_unique() {
        let mut group = Group::new();
        let a = group.insert(dot(0, 0));
        let b = group.insert(dot(0, 0));
        assert_ne!(a, b);
        assert_eq!(group.len(), 2);
    }

    #[test]
    fn test_update_and_draw_every_sprite() {
        let settings = Settings::default();
        let mut group = Group::new();
        let a = group.insert(dot(1, 2));
        group.insert(dot(3, 4));

        group.update(&settings);
        assert_eq!(group.get(a).map(|d| d.rect().top), Some(1));

        let mut canvas = Canvas::new(5, 5);
        group.draw(&mut canvas);
        assert_eq!(canvas.pixel(1, 1), Some(0xff_ff_ff));
        assert_eq!(canvas.pixel(3, 3), Some(0xff_ff_ff));
    }

    #[test]
    fn test_retain() {
        let mut group = Group::new();
        let kept = group.insert(dot(0, 5));
        let dropped = group.insert(dot(0, -1));

        assert_eq!(group.retain(|d| d.rect().top >= 0), 1);
        assert!(group.get(kept).is_some());
        assert!(group.get(dropped).is_none());

        // A stale handle stays invalid even after new inserts
        group.insert(dot(0, 0));
        assert!(group.get(dropped).is_none());
        assert_eq!(group.iter().count(), 2);
    }
}

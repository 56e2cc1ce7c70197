use crate::canvas::Color;

/// Every tunable of the game. Only the screen size changes after startup,
/// once the real window size is known.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    // Screen
    pub screen_width: usize,
    pub screen_height: usize,
    pub bg_color: Color,
    pub target_fps: usize,
    /// Simulation tick length in seconds; all speeds are per tick
    pub timestep: f64,

    // Ship
    pub ship_speed: f32,
    pub ship_width: u32,
    pub ship_height: u32,
    pub ship_color: Color,

    // Bullets
    pub bullet_speed: f32,
    pub bullet_width: u32,
    pub bullet_height: u32,
    pub bullet_color: Color,
    pub bullet_allowed: usize,

    // Aliens
    pub alien_speed: f32,
    pub alien_width: u32,
    pub alien_height: u32,
    pub alien_color: Color,
}

impl Settings {
    pub const TITLE: &'static str = "Alien Invasion";

    /// Records the size the window actually ended up with.
    pub fn set_screen_size(&mut self, (width, height): (usize, usize)) {
        self.screen_width = width;
        self.screen_height = height;
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            screen_width: 1200,
            screen_height: 800,
            bg_color: Color::new(230, 230, 230),
            target_fps: 60,
            timestep: 1.0 / 120.0,

            ship_speed: 1.5,
            ship_width: 60,
            ship_height: 48,
            ship_color: Color::new(40, 90, 160),

            bullet_speed: 1.5,
            bullet_width: 3,
            bullet_height: 15,
            bullet_color: Color::new(60, 60, 60),
            bullet_allowed: 3,

            alien_speed: 1.0,
            alien_width: 60,
            alien_height: 48,
            alien_color: Color::new(70, 150, 60),
        }
    }
}

use std::ops::ControlFlow;
use std::time::{Duration, Instant};

use log::{debug, info, trace, warn};

use crate::alien::Alien;
use crate::bullet::Bullet;
use crate::canvas::Canvas;
use crate::clock::FixedTimestep;
use crate::input::{Control, InputEvent};
use crate::platform::Platform;
use crate::settings::Settings;
use crate::ship::Ship;
use crate::sprite::{Group, Sprite};

/// Owns every sprite and the frame buffer, and drives the frame loop.
pub struct AlienInvasion {
    settings: Settings,
    ship: Ship,
    bullets: Group<Bullet>,
    aliens: Group<Alien>,
    canvas: Canvas,
    clock: FixedTimestep,
}

impl AlienInvasion {
    /// Builds the game for a drawing surface of `surface_size` pixels. The
    /// surface size wins over whatever `settings` asked for.
    pub fn new(mut settings: Settings, surface_size: (usize, usize)) -> Self {
        settings.set_screen_size(surface_size);
        debug!(
            "Screen is {}x{}",
            settings.screen_width, settings.screen_height
        );

        let mut game = Self {
            ship: Ship::new(&settings),
            bullets: Group::new(),
            aliens: Group::new(),
            canvas: Canvas::new(settings.screen_width, settings.screen_height),
            clock: FixedTimestep::from_secs(settings.timestep),
            settings,
        };
        game.create_fleet();
        info!("Fleet of {} aliens ready", game.aliens.len());

        game
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn ship(&self) -> &Ship {
        &self.ship
    }

    pub fn bullets(&self) -> &Group<Bullet> {
        &self.bullets
    }

    pub fn aliens(&self) -> &Group<Alien> {
        &self.aliens
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// Fills the fleet with one alien per grid cell, leaving one alien's
    /// worth of gap between neighbours and three rows of room above the ship.
    fn create_fleet(&mut self) {
        let (columns, rows) = fleet_grid(&self.settings, self.ship.rect().height);
        let width = i64::from(self.settings.alien_width);
        let height = i64::from(self.settings.alien_height);

        for row in 0..rows {
            for column in 0..columns {
                let left = width + 2 * width * column;
                let top = height + 2 * height * row;
                self.aliens
                    .insert(Alien::new(&self.settings, left as i32, top as i32));
            }
        }
    }

    /// Runs until a quit is requested.
    pub fn run(&mut self, platform: &mut impl Platform) {
        info!("Starting game loop");
        let mut last_frame = Instant::now();

        loop {
            let now = Instant::now();
            let elapsed = now - last_frame;
            last_frame = now;

            if self.frame(platform, elapsed).is_break() {
                info!("Quit requested, leaving game loop");
                return;
            }
        }
    }

    /// One pass of the loop: input, `elapsed` worth of simulation ticks,
    /// then render and present. Nothing is rendered once a quit comes in.
    pub fn frame(&mut self, platform: &mut impl Platform, elapsed: Duration) -> ControlFlow<()> {
        self.handle_events(platform.poll_events())?;

        for _ in 0..self.clock.advance(elapsed) {
            self.step();
        }

        self.render();
        platform
            .present(&self.canvas)
            .unwrap_or_else(|e| warn!("{}", e));

        ControlFlow::Continue(())
    }

    /// Applies a batch of input, stopping at the first quit.
    pub fn handle_events(&mut self, events: impl IntoIterator<Item = InputEvent>) -> ControlFlow<()> {
        for event in events {
            self.handle_event(event)?;
        }
        ControlFlow::Continue(())
    }

    pub fn handle_event(&mut self, event: InputEvent) -> ControlFlow<()> {
        match event {
            InputEvent::Close | InputEvent::Pressed(Control::Quit) => {
                return ControlFlow::Break(());
            }
            InputEvent::Pressed(Control::MoveRight) => self.ship.moving_right = true,
            InputEvent::Pressed(Control::MoveLeft) => self.ship.moving_left = true,
            InputEvent::Pressed(Control::Fire) => {
                self.fire_bullet();
            }
            InputEvent::Released(Control::MoveRight) => self.ship.moving_right = false,
            InputEvent::Released(Control::MoveLeft) => self.ship.moving_left = false,
            InputEvent::Released(Control::Fire | Control::Quit) => {}
        }
        ControlFlow::Continue(())
    }

    /// Spawns a bullet at the ship's nose if fewer than `bullet_allowed` are
    /// in flight. Returns whether a bullet was fired.
    pub fn fire_bullet(&mut self) -> bool {
        if self.bullets.len() >= self.settings.bullet_allowed {
            trace!("Bullet limit of {} reached", self.settings.bullet_allowed);
            return false;
        }

        let bullet = Bullet::new(&self.settings, self.ship.rect().mid_top());
        self.bullets.insert(bullet);
        true
    }

    /// Advances the simulation by one tick.
    pub fn step(&mut self) {
        self.ship.update(&self.settings);
        self.update_bullets();
        self.update_aliens();
    }

    fn update_bullets(&mut self) {
        self.bullets.update(&self.settings);

        let removed = self.bullets.retain(|bullet| !bullet.is_off_screen());
        if removed > 0 {
            trace!("Dropped {} bullets past the top of the screen", removed);
        }
    }

    fn update_aliens(&mut self) {
        self.aliens.update(&self.settings);
    }

    /// Draws the frame back to front: background, ship, bullets, aliens.
    pub fn render(&mut self) {
        self.canvas.clear(self.settings.bg_color);
        self.ship.draw(&mut self.canvas);
        self.bullets.draw(&mut self.canvas);
        self.aliens.draw(&mut self.canvas);
    }
}

/// Columns and rows of the fleet for the current screen. Screens too small
/// for a single row or column give an empty fleet.
fn fleet_grid(settings: &Settings, ship_height: u32) -> (i64, i64) {
    let width = i64::from(settings.alien_width);
    let height = i64::from(settings.alien_height);
    if width == 0 || height == 0 {
        return (0, 0);
    }

    let available_x = settings.screen_width as i64;
    let available_y = settings.screen_height as i64 - i64::from(ship_height) - 3 * height;

    let columns = (available_x / (2 * width)).max(0);
    let rows = (available_y / (2 * height)).max(0);
    (columns, rows)
}

#![deny(clippy::pedantic)]

use alien_invasion::error::GameError;
use alien_invasion::game::AlienInvasion;
use alien_invasion::platform::MinifbPlatform;
use alien_invasion::settings::Settings;

fn main() -> Result<(), GameError> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let settings = Settings::default();

    // Create window
    let mut platform = MinifbPlatform::open(&settings).map_err(|e| {
        log::error!("{}", e);
        e
    })?;

    let mut game = AlienInvasion::new(settings, platform.size());
    game.run(&mut platform);

    log::info!("Goodbye");
    Ok(())
}

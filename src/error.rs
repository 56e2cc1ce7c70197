use thiserror::Error;

#[derive(Error, Debug)]
pub enum GameError {
    #[error("could not open window: {0}")]
    Window(#[source] minifb::Error),

    #[error("could not present frame: {0}")]
    Present(#[source] minifb::Error),
}

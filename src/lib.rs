#![deny(clippy::pedantic)]
#![allow(
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss,
    clippy::must_use_candidate,
    clippy::missing_errors_doc
)]

pub mod alien;
pub mod bullet;
pub mod canvas;
pub mod clock;
pub mod error;
pub mod game;
pub mod geometry;
pub mod input;
pub mod platform;
pub mod settings;
pub mod ship;
pub mod sprite;

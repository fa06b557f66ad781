pub mod assets;
pub mod audio_backend;
pub mod config;
pub mod context;
pub mod hand;
pub mod input;
pub mod round;
pub mod screens;
pub mod sfx;
pub mod sound;
pub mod state;

pub mod app;
pub mod audio;
pub mod buttons;
pub mod font;
pub mod game_loop;
pub mod graphics;
pub mod image;
pub mod input;
pub mod pixels_renderer;
pub mod surface;
pub mod ui;

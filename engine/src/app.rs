use std::io;
use std::time::Instant;

use pixels::{Pixels, SurfaceTexture};
use thiserror::Error;
use winit::dpi::PhysicalSize;
use winit::error::OsError;
use winit::event::{ElementState, Event, KeyboardInput, MouseButton, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoopBuilder, EventLoopProxy};
use winit::window::{Window, WindowBuilder};

use crate::game_loop::{GameLoop, LoopRates, LoopTick, TickSink};
use crate::graphics::Renderer2d;
use crate::input::{InputEvent, PointerTracker};
use crate::pixels_renderer::PixelsRenderer2d;
use crate::surface::SurfaceSize;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("failed to create window: {0}")]
    Window(#[from] OsError),
    #[error("failed to initialize renderer: {0}")]
    Renderer(#[from] pixels::Error),
    #[error("failed to start game loop thread: {0}")]
    LoopThread(#[from] io::Error),
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub title: String,
    pub desired_size: PhysicalSize<u32>,
    pub clamp_to_monitor: bool,
    pub resizable: bool,
    pub rates: LoopRates,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// What the window glue needs from a game. All calls happen on the UI thread.
pub trait GameApp {
    fn handle_input(&mut self, event: InputEvent, now: Instant) -> AppControl;

    /// Fixed-rate logic tick, driven by the game loop thread.
    fn update(&mut self, _now: Instant) {}

    fn resize(&mut self, _size: SurfaceSize) {}

    fn render(&mut self, gfx: &mut dyn Renderer2d, now: Instant);

    /// Called once when the event loop is shutting down.
    fn shutdown(&mut self) {}
}

/// Posts loop ticks onto the UI thread's event queue.
struct ProxySink(EventLoopProxy<LoopTick>);

impl TickSink for ProxySink {
    fn tick(&mut self, tick: LoopTick) -> bool {
        self.0.send_event(tick).is_ok()
    }
}

struct AppContext {
    window: Window,
    renderer: PixelsRenderer2d,
    pointer: PointerTracker,
}

fn surface_size(size: PhysicalSize<u32>) -> SurfaceSize {
    SurfaceSize::new(size.width, size.height)
}

pub fn run_game<G: GameApp + 'static>(config: AppConfig, mut game: G) -> Result<(), AppError> {
    let event_loop = EventLoopBuilder::<LoopTick>::with_user_event().build();
    let monitor_size = if config.clamp_to_monitor {
        event_loop.primary_monitor().map(|m| m.size())
    } else {
        None
    };
    let initial_size = if let Some(monitor) = monitor_size {
        PhysicalSize::new(
            config.desired_size.width.min(monitor.width),
            config.desired_size.height.min(monitor.height),
        )
    } else {
        config.desired_size
    };
    let window = WindowBuilder::new()
        .with_title(config.title)
        .with_inner_size(initial_size)
        .with_resizable(config.resizable)
        .build(&event_loop)?;

    let size = surface_size(window.inner_size());
    let surface_texture = SurfaceTexture::new(size.width.max(1), size.height.max(1), &window);
    let pixels = Pixels::new(size.width.max(1), size.height.max(1), surface_texture)?;
    let renderer = PixelsRenderer2d::new(pixels, size)?;
    game.resize(size);

    let mut ctx = AppContext {
        window,
        renderer,
        pointer: PointerTracker::default(),
    };

    GameLoop::spawn(config.rates, ProxySink(event_loop.create_proxy()))?;
    log::info!(
        "window {}x{}, {} UPS / {} FPS",
        size.width,
        size.height,
        config.rates.updates_per_second,
        config.rates.frames_per_second
    );

    event_loop.run(move |event, _, control_flow| {
        if *control_flow != ControlFlow::Exit {
            *control_flow = ControlFlow::Wait;
        }

        let mut inputs: Vec<InputEvent> = Vec::new();
        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => {
                    *control_flow = ControlFlow::Exit;
                }
                WindowEvent::Resized(new_size) => {
                    resize(&mut ctx, &mut game, surface_size(new_size));
                }
                WindowEvent::ScaleFactorChanged { new_inner_size, .. } => {
                    resize(&mut ctx, &mut game, surface_size(*new_inner_size));
                }
                WindowEvent::CursorMoved { position, .. } => {
                    let x = position.x.max(0.0) as u32;
                    let y = position.y.max(0.0) as u32;
                    inputs.push(ctx.pointer.moved(x, y));
                }
                WindowEvent::CursorLeft { .. } => {
                    inputs.push(ctx.pointer.left());
                }
                WindowEvent::MouseInput {
                    state,
                    button: MouseButton::Left,
                    ..
                } => match state {
                    ElementState::Pressed => inputs.extend(ctx.pointer.pressed()),
                    ElementState::Released => inputs.extend(ctx.pointer.released()),
                },
                WindowEvent::KeyboardInput {
                    input:
                        KeyboardInput {
                            state: ElementState::Pressed,
                            virtual_keycode: Some(key),
                            ..
                        },
                    ..
                } => {
                    inputs.push(InputEvent::KeyPressed(key));
                }
                _ => {}
            },
            Event::UserEvent(LoopTick::Update) => game.update(Instant::now()),
            Event::UserEvent(LoopTick::Render) => ctx.window.request_redraw(),
            Event::RedrawRequested(_) => {
                let now = Instant::now();
                ctx.renderer.draw_frame(|gfx| game.render(gfx, now));
                if let Err(err) = ctx.renderer.present() {
                    log::error!("present failed: {err}");
                }
            }
            Event::LoopDestroyed => game.shutdown(),
            _ => {}
        }

        for input in inputs {
            if game.handle_input(input, Instant::now()) == AppControl::Exit {
                *control_flow = ControlFlow::Exit;
                break;
            }
            ctx.window.request_redraw();
        }
    });

    #[allow(unreachable_code)]
    Ok(())
}

fn resize<G: GameApp>(ctx: &mut AppContext, game: &mut G, size: SurfaceSize) {
    if let Err(err) = ctx.renderer.resize(size) {
        log::error!("resize failed: {err}");
        return;
    }
    game.resize(size);
    ctx.window.request_redraw();
}

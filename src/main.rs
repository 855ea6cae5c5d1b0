use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use log::{debug, error, info, warn};
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, EventLoop},
    window::{Window, WindowId},
};

use dice_scene::camera::Projection;
use dice_scene::cli::Cli;
use dice_scene::config::AppConfig;
use dice_scene::core::{Accumulator, Clock, Input, InputAdapter, SurfaceRenderer};
use dice_scene::error::DisplayError;
use dice_scene::game::GameState;
use dice_scene::picking::{FrameOutcome, PickRequest, PickingPipeline};
use dice_scene::render::SoftwareRasterizer;
use dice_scene::scenes::DiceScene;
use dice_scene::traits::FrameUniforms;

/// Ticks run per redraw at most; the rest of a long stall is dropped
const MAX_TICKS_PER_FRAME: u8 = 8;

struct Display {
    window: Arc<Window>,
    surface: SurfaceRenderer,
}

struct App {
    config: AppConfig,
    display: Option<Display>,
    game: GameState,
    scene: DiceScene,
    raster: SoftwareRasterizer,
    pipeline: PickingPipeline<GameState>,
    input: InputAdapter,
    projection: Projection,
    clock: Clock,
    ticks: Accumulator,
}

impl App {
    fn new(config: AppConfig) -> Self {
        let (scene, meshes) = DiceScene::build();
        info!(
            "scene built: {} meshes, {} triangles",
            meshes.len(),
            meshes.total_triangles()
        );

        Self {
            game: GameState::new(config.seed, config.light_spin),
            raster: SoftwareRasterizer::new(config.width, config.height, meshes),
            ticks: Accumulator::from_interval(config.tick_seconds(), MAX_TICKS_PER_FRAME),
            config,
            display: None,
            scene,
            pipeline: PickingPipeline::new(),
            input: InputAdapter::new(),
            projection: Projection::default(),
            clock: Clock::new(),
        }
    }

    fn handle_input(&mut self, input: Input, event_loop: &ActiveEventLoop) {
        match input {
            Input::Action(action) => {
                self.game.apply(action);
                if self.game.quit_requested() {
                    info!("quit requested");
                    event_loop.exit();
                }
            }
            Input::Pick { x, y } => {
                self.pipeline
                    .request(PickRequest::new(x, y).on_resolved(|target, game: &mut GameState| {
                        game.handle_pick(target);
                    }));
            }
        }
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let delta = self.clock.tick();
        for step in self.ticks.tick(delta) {
            if let Some(event) = self.game.tick(step) {
                debug!("{event:?}");
            }
        }

        let (width, height) = (self.raster.width(), self.raster.height());
        let uniforms = FrameUniforms::new(
            self.projection.matrix(width, height),
            self.game.camera(),
            self.game.light_position(),
        );

        let outcome = self
            .pipeline
            .run_frame(&self.scene, &mut self.game, &mut self.raster, &uniforms);
        if let FrameOutcome::Hidden(target) = outcome {
            debug!("id frame resolved {target:?}, redrawing lit");
            self.pipeline
                .run_frame(&self.scene, &mut self.game, &mut self.raster, &uniforms);
        }

        let (Some(display), Some(pixels)) = (&self.display, self.raster.presentable_pixels())
        else {
            return;
        };
        match display.surface.present(pixels, width, height) {
            Ok(()) => {}
            Err(DisplayError::Acquire(wgpu::SurfaceError::Timeout)) => {
                warn!("surface timeout, skipping frame");
            }
            Err(DisplayError::Acquire(wgpu::SurfaceError::OutOfMemory)) => {
                error!("out of GPU memory");
                event_loop.exit();
            }
            Err(e) => error!("present failed: {e}"),
        }
    }

    fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if let Some(display) = &mut self.display {
            display.surface.resize(width, height);
        }
        self.raster.resize(width, height);
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.display.is_some() {
            return;
        }

        let window = match event_loop.create_window(
            Window::default_attributes()
                .with_title(self.config.title.clone())
                .with_inner_size(winit::dpi::LogicalSize::new(
                    self.config.width,
                    self.config.height,
                )),
        ) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                error!("failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };

        let surface = match pollster::block_on(SurfaceRenderer::new(window.clone())) {
            Ok(surface) => surface,
            Err(e) => {
                error!("failed to initialize display: {e}");
                event_loop.exit();
                return;
            }
        };

        let (width, height) = surface.dimensions();
        self.raster.resize(width, height);
        self.display = Some(Display { window, surface });
        self.clock.reset();
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        if let Some(input) = self.input.process_event(&event) {
            self.handle_input(input, event_loop);
            return;
        }

        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Resized(size) => self.resize(size.width, size.height),
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(display) = &self.display {
            display.window.request_redraw();
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = cli.resolve().context("loading configuration")?;

    println!(
        "Dice - Controls: click the middle die to roll, w/s/a/d move and yaw, \
         W/S/A/D pitch and roll, Ctrl+w/s/a/d strafe, l toggles the light, q quits"
    );

    let event_loop = EventLoop::new()?;
    let mut app = App::new(config);
    event_loop.run_app(&mut app)?;

    Ok(())
}

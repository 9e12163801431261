use std::sync::Arc;
use winit::{event::*, event_loop::EventLoop, window::WindowBuilder};

use glass_core::gpu::GpuState;
use glass_core::{scatter_rng, FrameClock, SceneConfig, SceneGraph, Viewport, ViewportState};

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let cfg = SceneConfig::default();
    cfg.validate()?;

    let event_loop = EventLoop::new()?;
    let window = Arc::new(
        WindowBuilder::new()
            .with_title("Glass field (native)")
            .with_transparent(true)
            .build(&event_loop)?,
    );
    let size = window.inner_size();

    let scene = SceneGraph::build(&cfg, &mut scatter_rng(&cfg));
    let gpu = pollster::block_on(GpuState::new(
        Arc::clone(&window),
        size.width,
        size.height,
        &scene,
    ))?;
    let mut viewport = Viewport::mount(&cfg, scene, gpu, size.width, size.height)?;
    let tracker = viewport.tracker();
    let mut clock = FrameClock::new(cfg.max_frame_delta);

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent {
            event: WindowEvent::Resized(size),
            ..
        } => viewport.resize(size.width, size.height),
        Event::WindowEvent {
            event: WindowEvent::CursorMoved { position, .. },
            ..
        } => {
            let size = window.inner_size();
            tracker.on_pointer_move(
                position.x as f32,
                position.y as f32,
                size.width as f32,
                size.height as f32,
            );
        }
        Event::WindowEvent {
            event: WindowEvent::CloseRequested,
            ..
        } => {
            viewport.dispose();
            elwt.exit();
        }
        Event::AboutToWait => {
            viewport.render_frame(clock.tick());
            if viewport.state() == ViewportState::Disposed {
                elwt.exit();
            } else {
                window.request_redraw();
            }
        }
        _ => {}
    })?;
    Ok(())
}

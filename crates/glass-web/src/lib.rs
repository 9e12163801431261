#![cfg(target_arch = "wasm32")]
//! Browser front-end: mounts the glass field on a background canvas and
//! tears it down again on request.

mod dom;
mod events;
mod frame;

use glass_core::gpu::GpuState;
use glass_core::{scatter_rng, MountGate, MountOutcome, SceneConfig, SceneGraph, Viewport};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

type SharedViewport = Rc<RefCell<Viewport<GpuState<'static>>>>;

thread_local! {
    static GATE: RefCell<MountGate> = const { RefCell::new(MountGate::new()) };
    static MOUNTED: RefCell<Option<SharedViewport>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("glass-web starting");
    mount();
    Ok(())
}

/// Mounts the background. Repeated calls while mounted or mounting are
/// absorbed; the last of mount/unmount wins once a pending build finishes.
#[wasm_bindgen]
pub fn mount() {
    let Some(generation) = GATE.with(|g| g.borrow_mut().request_mount()) else {
        log::debug!("[mount] already mounted or mounting");
        return;
    };
    spawn_local(async move {
        let built = build(generation).await;
        let outcome = GATE.with(|g| g.borrow_mut().finish_mount(generation, built.is_ok()));
        match (outcome, built) {
            (MountOutcome::Install, Ok((viewport, canvas, cfg))) => {
                if let Err(e) = install(generation, viewport, canvas, &cfg) {
                    log::error!("init error: {:?}", e);
                    lose(generation);
                }
            }
            (_, Ok((viewport, canvas, _))) => {
                // unmount() arrived while the device was being created
                viewport.borrow_mut().dispose();
                dom::hide_canvas(&canvas);
            }
            (_, Err(e)) => {
                log::error!("init error: {:?}", e);
                if let Some(canvas) = dom::find_canvas() {
                    dom::hide_canvas(&canvas);
                }
            }
        }
    });
}

/// Stops the frame loop, removes listeners and releases GPU resources.
#[wasm_bindgen]
pub fn unmount() {
    if GATE.with(|g| g.borrow_mut().request_unmount()) {
        teardown();
        log::info!("[mount] unmounted");
    }
}

fn teardown() {
    if let Some(viewport) = MOUNTED.with(|m| m.borrow_mut().take()) {
        viewport.borrow_mut().dispose();
    }
    if let Some(canvas) = dom::find_canvas() {
        dom::hide_canvas(&canvas);
    }
}

/// The mounted viewport of `generation` stopped on its own; leave the page
/// as if the effect were absent.
fn lose(generation: u64) {
    if GATE.with(|g| g.borrow_mut().lost(generation)) {
        teardown();
        log::warn!("[mount] glass field stopped");
    }
}

async fn build(
    generation: u64,
) -> anyhow::Result<(SharedViewport, web::HtmlCanvasElement, SceneConfig)> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas = dom::ensure_canvas(&document)?;
    let (width, height) = dom::sync_canvas_backing_size(&canvas);

    let cfg = SceneConfig::default();
    let scene = SceneGraph::build(&cfg, &mut scatter_rng(&cfg));
    let gpu = GpuState::new(
        wgpu::SurfaceTarget::Canvas(canvas.clone()),
        width,
        height,
        &scene,
    )
    .await?;
    let viewport = Viewport::mount(&cfg, scene, gpu, width, height)?;
    log::debug!("[mount] built generation {}", generation);
    Ok((Rc::new(RefCell::new(viewport)), canvas, cfg))
}

fn install(
    generation: u64,
    viewport: SharedViewport,
    canvas: web::HtmlCanvasElement,
    cfg: &SceneConfig,
) -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    // stored first so a wiring failure below is torn down by lose()
    MOUNTED.with(|m| *m.borrow_mut() = Some(viewport.clone()));

    let tracker = viewport.borrow().tracker();
    let pointer = events::wire_pointer_tracking(&window, &canvas, tracker)?;
    viewport.borrow_mut().attach(pointer);
    let resize = events::wire_resize(&window, &canvas)?;
    viewport.borrow_mut().attach(resize);
    let frames = frame::start_loop(
        Rc::downgrade(&viewport),
        canvas.clone(),
        cfg.max_frame_delta,
        move || lose(generation),
    )?;
    viewport.borrow_mut().attach(frames);

    dom::show_canvas(&canvas);
    log::info!("[mount] glass field running");
    Ok(())
}

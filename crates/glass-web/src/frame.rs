use glass_core::gpu::GpuState;
use glass_core::{FrameClock, Subscription, Viewport, ViewportState};
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type TickSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

fn request_next(slot: &TickSlot, pending: &Cell<Option<i32>>) -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let slot = slot.borrow();
    let Some(tick) = slot.as_ref() else {
        return Ok(());
    };
    let id = window
        .request_animation_frame(tick.as_ref().unchecked_ref())
        .map_err(|e| anyhow::anyhow!("requestAnimationFrame: {:?}", e))?;
    pending.set(Some(id));
    Ok(())
}

/// Drives `viewport` from requestAnimationFrame until the returned
/// subscription is detached or the viewport goes away. `on_stop` runs once if
/// the loop ends on its own (a fatal frame or a failed reschedule).
pub fn start_loop(
    viewport: Weak<RefCell<Viewport<GpuState<'static>>>>,
    canvas: web::HtmlCanvasElement,
    max_delta: f32,
    on_stop: impl FnOnce() + 'static,
) -> anyhow::Result<Subscription> {
    let slot: TickSlot = Rc::new(RefCell::new(None));
    let pending: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));

    let slot_tick = slot.clone();
    let pending_tick = pending.clone();
    let mut clock = FrameClock::new(max_delta);
    let mut on_stop = Some(on_stop);
    *slot.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        pending_tick.set(None);
        let Some(vp) = viewport.upgrade() else {
            slot_tick.borrow_mut().take();
            return;
        };
        let delta = clock.tick();
        let running = {
            let mut vp = vp.borrow_mut();
            vp.resize(canvas.width(), canvas.height());
            vp.render_frame(delta);
            vp.state() == ViewportState::Mounted
        };
        // vp is no longer borrowed here; on_stop may dispose it
        let stopped = if running {
            match request_next(&slot_tick, &pending_tick) {
                Ok(()) => false,
                Err(e) => {
                    log::error!("[frame] {e}");
                    true
                }
            }
        } else {
            true
        };
        if stopped {
            if let Some(f) = on_stop.take() {
                f();
            }
        }
    }) as Box<dyn FnMut()>));
    request_next(&slot, &pending)?;

    Ok(Subscription::new("frame", move || {
        if let (Some(id), Some(w)) = (pending.take(), web::window()) {
            if let Err(e) = w.cancel_animation_frame(id) {
                log::warn!("[frame] cancelAnimationFrame: {:?}", e);
            }
        }
        slot.borrow_mut().take();
        Ok(())
    }))
}

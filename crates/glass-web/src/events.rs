//! DOM listener wiring. Every listener is returned as a [`Subscription`] so
//! the viewport can remove it again on unmount.

use glass_core::{GlassError, InputTracker, Subscription};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Adds `handler` for `kind` on `target`; detaching removes exactly this listener.
pub fn listen(
    target: &web::EventTarget,
    kind: &'static str,
    handler: impl FnMut(web::Event) + 'static,
) -> anyhow::Result<Subscription> {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
    target
        .add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())
        .map_err(|e| anyhow::anyhow!("add {kind} listener: {:?}", e))?;
    let target = target.clone();
    Ok(Subscription::new(kind, move || {
        let removed =
            target.remove_event_listener_with_callback(kind, closure.as_ref().unchecked_ref());
        drop(closure);
        removed.map_err(|e| GlassError::Detach {
            label: kind,
            reason: format!("{:?}", e),
        })
    }))
}

/// Feeds window-level pointer moves into `tracker`, normalized against the
/// canvas rectangle. The canvas itself never receives pointer events.
pub fn wire_pointer_tracking(
    window: &web::Window,
    canvas: &web::HtmlCanvasElement,
    tracker: InputTracker,
) -> anyhow::Result<Subscription> {
    let canvas = canvas.clone();
    listen(window, "pointermove", move |ev| {
        let Some(ev) = ev.dyn_ref::<web::PointerEvent>() else {
            return;
        };
        let rect = canvas.get_bounding_client_rect();
        tracker.on_pointer_move(
            ev.client_x() as f32 - rect.left() as f32,
            ev.client_y() as f32 - rect.top() as f32,
            rect.width() as f32,
            rect.height() as f32,
        );
    })
}

/// Keeps the canvas backing store in step with the window; the frame loop
/// picks the new size up on its next tick.
pub fn wire_resize(
    window: &web::Window,
    canvas: &web::HtmlCanvasElement,
) -> anyhow::Result<Subscription> {
    let canvas = canvas.clone();
    listen(window, "resize", move |_| {
        let (w, h) = crate::dom::sync_canvas_backing_size(&canvas);
        log::debug!("[events] resize -> {}x{}", w, h);
    })
}

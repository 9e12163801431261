use glass_core::DEVICE_PIXEL_RATIO_RANGE;
use wasm_bindgen::JsCast;
use web_sys as web;

pub const CANVAS_ID: &str = "glass-canvas";

const BACKGROUND_STYLE: &str =
    "position:fixed;inset:0;width:100vw;height:100vh;z-index:-1;pointer-events:none;";

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Returns the page's `#glass-canvas`, creating a full-viewport background
/// canvas when the host page does not provide one.
pub fn ensure_canvas(document: &web::Document) -> anyhow::Result<web::HtmlCanvasElement> {
    if let Some(el) = document.get_element_by_id(CANVAS_ID) {
        return el
            .dyn_into::<web::HtmlCanvasElement>()
            .map_err(|_| anyhow::anyhow!("#{CANVAS_ID} is not a canvas"));
    }
    let canvas = document
        .create_element("canvas")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|_| anyhow::anyhow!("created element is not a canvas"))?;
    canvas.set_id(CANVAS_ID);
    canvas
        .set_attribute("style", BACKGROUND_STYLE)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    canvas
        .set_attribute("aria-hidden", "true")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let body = document
        .body()
        .ok_or_else(|| anyhow::anyhow!("no body"))?;
    body.append_child(&canvas)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    log::info!("[dom] created background canvas");
    Ok(canvas)
}

pub fn clamped_pixel_ratio(dpr: f64) -> f64 {
    let [lo, hi] = DEVICE_PIXEL_RATIO_RANGE;
    if dpr.is_finite() {
        dpr.clamp(lo, hi)
    } else {
        lo
    }
}

/// Matches the canvas backing store to its CSS size times the clamped pixel ratio.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) -> (u32, u32) {
    if let Some(w) = web::window() {
        let dpr = clamped_pixel_ratio(w.device_pixel_ratio());
        let rect = canvas.get_bounding_client_rect();
        // a collapsed canvas reports 0; the viewport ignores zero sizes
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        if canvas.width() != w_px {
            canvas.set_width(w_px);
        }
        if canvas.height() != h_px {
            canvas.set_height(h_px);
        }
    }
    (canvas.width(), canvas.height())
}

/// Leaves the page as it would look without the effect.
pub fn hide_canvas(canvas: &web::HtmlCanvasElement) {
    if let Err(e) = canvas.style().set_property("display", "none") {
        log::warn!("[dom] could not hide canvas: {:?}", e);
    }
}

pub fn show_canvas(canvas: &web::HtmlCanvasElement) {
    if let Err(e) = canvas.style().remove_property("display") {
        log::warn!("[dom] could not show canvas: {:?}", e);
    }
}

pub fn find_canvas() -> Option<web::HtmlCanvasElement> {
    window_document()?
        .get_element_by_id(CANVAS_ID)?
        .dyn_into::<web::HtmlCanvasElement>()
        .ok()
}

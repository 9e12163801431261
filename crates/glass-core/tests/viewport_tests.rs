// Host-side tests for the viewport lifecycle, using a recording backend and
// an in-memory event source in place of the browser.

use glass_core::{
    FrameError, InputTracker, Orientation, RenderBackend, SceneConfig, SceneGraph, SceneUniforms,
    Subscription, Viewport, ViewportState,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;

type Log = Rc<RefCell<Vec<String>>>;

struct RecordingBackend {
    log: Log,
    fail_with: Rc<RefCell<Option<FrameError>>>,
}

impl RenderBackend for RecordingBackend {
    fn resize(&mut self, width: u32, height: u32) {
        self.log.borrow_mut().push(format!("resize {width}x{height}"));
    }

    fn render(&mut self, uniforms: &SceneUniforms) -> Result<(), FrameError> {
        if let Some(e) = self.fail_with.borrow().clone() {
            return Err(e);
        }
        assert_eq!(uniforms.camera_pos[3], 2.0);
        self.log.borrow_mut().push("render".into());
        Ok(())
    }

    fn release(&mut self) {
        self.log.borrow_mut().push("release".into());
    }
}

/// Minimal stand-in for a DOM event target.
#[derive(Default)]
struct PointerSource {
    listeners: RefCell<Vec<(u32, InputTracker)>>,
    next_id: RefCell<u32>,
}

impl PointerSource {
    fn subscribe(self: &Rc<Self>, tracker: InputTracker, log: Log) -> Subscription {
        let id = {
            let mut n = self.next_id.borrow_mut();
            *n += 1;
            *n
        };
        self.listeners.borrow_mut().push((id, tracker));
        let source = self.clone();
        Subscription::new("pointermove", move || {
            source.listeners.borrow_mut().retain(|(i, _)| *i != id);
            log.borrow_mut().push("detach pointermove".into());
            Ok(())
        })
    }

    fn emit(&self, x: f32, y: f32, w: f32, h: f32) {
        for (_, t) in self.listeners.borrow().iter() {
            t.on_pointer_move(x, y, w, h);
        }
    }

    fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }
}

struct Harness {
    viewport: Viewport<RecordingBackend>,
    log: Log,
    fail_with: Rc<RefCell<Option<FrameError>>>,
}

fn mount(source: &Rc<PointerSource>) -> Harness {
    let cfg = SceneConfig::default().with_panel_count(4).with_seed(9);
    let scene = SceneGraph::build(&cfg, &mut StdRng::seed_from_u64(9));
    let log: Log = Rc::default();
    let fail_with = Rc::new(RefCell::new(None));
    let backend = RecordingBackend {
        log: log.clone(),
        fail_with: fail_with.clone(),
    };
    let mut viewport = Viewport::mount(&cfg, scene, backend, 800, 600).unwrap();
    let pointer_sub = source.subscribe(viewport.tracker(), log.clone());
    viewport.attach(pointer_sub);
    let frame_log = log.clone();
    viewport.attach(Subscription::new("frame", move || {
        frame_log.borrow_mut().push("detach frame".into());
        Ok(())
    }));
    Harness {
        viewport,
        log,
        fail_with,
    }
}

#[test]
fn mount_sizes_backend_and_camera() {
    let source = Rc::new(PointerSource::default());
    let h = mount(&source);
    assert_eq!(h.log.borrow().as_slice(), ["resize 800x600"]);
    assert_eq!(h.viewport.size(), (800, 600));
    assert!((h.viewport.scene().camera.aspect - 800.0 / 600.0).abs() < 1e-6);
    assert_eq!(h.viewport.state(), ViewportState::Mounted);
}

#[test]
fn dispose_detaches_listener_then_frame_then_releases() {
    let source = Rc::new(PointerSource::default());
    let mut h = mount(&source);
    h.log.borrow_mut().clear();
    h.viewport.dispose();
    assert_eq!(
        h.log.borrow().as_slice(),
        ["detach pointermove", "detach frame", "release"]
    );
    assert_eq!(h.viewport.state(), ViewportState::Disposed);

    // second dispose is a no-op
    h.viewport.dispose();
    assert_eq!(h.log.borrow().len(), 3);
}

#[test]
fn pointer_moves_steer_the_group() {
    let source = Rc::new(PointerSource::default());
    let mut h = mount(&source);
    source.emit(800.0, 0.0, 800.0, 600.0); // top-right corner -> (1, 1)
    for _ in 0..10 {
        assert!(h.viewport.render_frame(0.05));
    }
    let o = h.viewport.orientation();
    assert!(o.pitch > 0.0 && o.yaw > 0.0);
    assert_eq!(h.viewport.frames(), 10);
}

#[test]
fn events_after_unmount_change_nothing() {
    let source = Rc::new(PointerSource::default());
    let mut h = mount(&source);
    let tracker = h.viewport.tracker();
    h.viewport.render_frame(0.016);
    h.viewport.dispose();
    let frozen = h.viewport.orientation();

    assert_eq!(source.listener_count(), 0);
    source.emit(0.0, 0.0, 800.0, 600.0);
    // a stale handle that escaped teardown is still inert
    assert!(!tracker.on_pointer_move(0.0, 600.0, 800.0, 600.0));
    assert!(!h.viewport.render_frame(0.016));
    assert_eq!(h.viewport.orientation(), frozen);
}

#[test]
fn repeated_mount_unmount_leaves_no_listeners() {
    let source = Rc::new(PointerSource::default());
    for _ in 0..5 {
        let mut h = mount(&source);
        assert_eq!(source.listener_count(), 1);
        h.viewport.render_frame(0.016);
        h.viewport.dispose();
        assert_eq!(source.listener_count(), 0);
        assert_eq!(
            h.log.borrow().iter().filter(|e| e.as_str() == "release").count(),
            1
        );
    }
}

#[test]
fn dropping_the_viewport_disposes_it() {
    let source = Rc::new(PointerSource::default());
    let h = mount(&source);
    let log = h.log.clone();
    drop(h);
    assert_eq!(source.listener_count(), 0);
    assert_eq!(log.borrow().last().map(String::as_str), Some("release"));
}

#[test]
fn zero_sized_resize_is_ignored() {
    let source = Rc::new(PointerSource::default());
    let mut h = mount(&source);
    h.log.borrow_mut().clear();
    h.viewport.resize(0, 600);
    h.viewport.resize(800, 0);
    h.viewport.resize(0, 0);
    assert!(h.log.borrow().is_empty());
    assert_eq!(h.viewport.size(), (800, 600));

    h.viewport.resize(1920, 1080);
    assert_eq!(h.log.borrow().as_slice(), ["resize 1920x1080"]);
    assert!((h.viewport.scene().camera.aspect - 1920.0 / 1080.0).abs() < 1e-6);
    assert!(h.viewport.render_frame(0.016));
}

#[test]
fn resize_after_dispose_is_ignored() {
    let source = Rc::new(PointerSource::default());
    let mut h = mount(&source);
    h.viewport.dispose();
    h.log.borrow_mut().clear();
    h.viewport.resize(640, 480);
    assert!(h.log.borrow().is_empty());
}

#[test]
fn skipped_frames_keep_running_and_fatal_frames_dispose() {
    let source = Rc::new(PointerSource::default());
    let mut h = mount(&source);

    *h.fail_with.borrow_mut() = Some(FrameError::Skipped);
    assert!(!h.viewport.render_frame(0.016));
    assert_eq!(h.viewport.state(), ViewportState::Mounted);
    // the animation still advanced even though nothing was presented
    assert_ne!(h.viewport.orientation(), Orientation::default());

    *h.fail_with.borrow_mut() = Some(FrameError::Fatal("device lost".into()));
    assert!(!h.viewport.render_frame(0.016));
    assert_eq!(h.viewport.state(), ViewportState::Disposed);
    assert_eq!(source.listener_count(), 0);
}

#[test]
fn attach_after_dispose_detaches_immediately() {
    let source = Rc::new(PointerSource::default());
    let mut h = mount(&source);
    h.viewport.dispose();
    let hits = Rc::new(RefCell::new(0));
    let hits_in = hits.clone();
    h.viewport.attach(Subscription::new("late", move || {
        *hits_in.borrow_mut() += 1;
        Ok(())
    }));
    assert_eq!(*hits.borrow(), 1);
}

#[test]
fn mount_rejects_scene_from_another_config() {
    let built_with = SceneConfig::default().with_panel_count(4);
    let scene = SceneGraph::build(&built_with, &mut StdRng::seed_from_u64(1));
    let log: Log = Rc::default();
    let backend = RecordingBackend {
        log: log.clone(),
        fail_with: Rc::new(RefCell::new(None)),
    };
    let cfg = SceneConfig::default().with_panel_count(5);
    assert!(Viewport::mount(&cfg, scene, backend, 800, 600).is_err());
    assert_eq!(log.borrow().as_slice(), ["release"]);
}

#[test]
fn mount_rejects_invalid_config() {
    let cfg = SceneConfig::default().with_panel_count(0);
    let scene = SceneGraph::build(&cfg, &mut StdRng::seed_from_u64(1));
    let log: Log = Rc::default();
    let backend = RecordingBackend {
        log: log.clone(),
        fail_with: Rc::new(RefCell::new(None)),
    };
    assert!(Viewport::mount(&cfg, scene, backend, 800, 600).is_err());
    assert_eq!(log.borrow().as_slice(), ["release"]);
}

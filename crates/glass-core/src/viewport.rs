//! Viewport host: owns the scene, the animation driver, the pointer cell and
//! the rendering backend for one mounted surface.
//!
//! Front-ends create the backend, hand it to [`Viewport::mount`], register
//! their listener and frame-loop [`Subscription`]s with [`Viewport::attach`]
//! and call [`Viewport::render_frame`] once per display refresh. Disposal
//! closes the pointer cell, detaches subscriptions in registration order and
//! only then releases the backend.

use crate::animation::{AnimationDriver, DriverParams, Orientation};
use crate::config::SceneConfig;
use crate::error::{GlassError, Result};
use crate::pointer::{InputTracker, PointerCell};
use crate::scene::{SceneGraph, SceneUniforms};
use crate::subscription::Subscription;
use std::sync::Arc;

/// Why a frame did not reach the screen.
#[derive(Debug, Clone, PartialEq)]
pub enum FrameError {
    /// Transient (surface lost/outdated/timeout); the next frame may succeed.
    Skipped,
    /// Unrecoverable; the effect should be torn down.
    Fatal(String),
}

/// Rendering side of the viewport. Implemented by the wgpu state and by test
/// fakes.
pub trait RenderBackend {
    fn resize(&mut self, width: u32, height: u32);
    fn render(&mut self, uniforms: &SceneUniforms) -> Result<(), FrameError>;
    /// Free GPU resources. Called exactly once, after every subscription has
    /// been detached.
    fn release(&mut self);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewportState {
    Mounted,
    Disposed,
}

pub struct Viewport<B: RenderBackend> {
    scene: SceneGraph,
    driver: AnimationDriver,
    pointer: Arc<PointerCell>,
    backend: Option<B>,
    subscriptions: Vec<Subscription>,
    size: (u32, u32),
    frames: u64,
}

impl<B: RenderBackend> Viewport<B> {
    /// Takes ownership of `backend` and the scene built from `cfg`. A config
    /// that fails validation, or a scene with a different panel count,
    /// releases the backend and is rejected.
    pub fn mount(
        cfg: &SceneConfig,
        mut scene: SceneGraph,
        mut backend: B,
        width: u32,
        height: u32,
    ) -> Result<Self> {
        let checked = cfg.validate().and_then(|()| {
            let built = scene.panels.instances.len();
            if built == cfg.panel_count {
                Ok(())
            } else {
                Err(GlassError::InvalidConfig(format!(
                    "scene has {built} panels, config expects {}",
                    cfg.panel_count
                )))
            }
        });
        if let Err(e) = checked {
            backend.release();
            return Err(e);
        }
        let size = (width.max(1), height.max(1));
        scene.set_aspect(size.0, size.1);
        backend.resize(size.0, size.1);
        log::info!("[viewport] mounted {}x{}", size.0, size.1);
        Ok(Self {
            scene,
            driver: AnimationDriver::new(DriverParams::from(cfg)),
            pointer: PointerCell::new(),
            backend: Some(backend),
            subscriptions: Vec::new(),
            size,
            frames: 0,
        })
    }

    pub fn state(&self) -> ViewportState {
        if self.backend.is_some() {
            ViewportState::Mounted
        } else {
            ViewportState::Disposed
        }
    }

    /// Write handle for pointer events targeting this viewport.
    pub fn tracker(&self) -> InputTracker {
        InputTracker::new(self.pointer.clone())
    }

    /// Keep `sub` alive until disposal. Attaching to a disposed viewport
    /// detaches immediately.
    pub fn attach(&mut self, sub: Subscription) {
        if self.state() == ViewportState::Disposed {
            sub.detach();
            return;
        }
        log::debug!("[viewport] attached {}", sub.label());
        self.subscriptions.push(sub);
    }

    pub fn orientation(&self) -> Orientation {
        self.scene.group
    }

    pub fn scene(&self) -> &SceneGraph {
        &self.scene
    }

    pub fn size(&self) -> (u32, u32) {
        self.size
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn backend(&self) -> Option<&B> {
        self.backend.as_ref()
    }

    /// Resize the surface and camera aspect. Zero-sized requests (minimized
    /// window, collapsed element) are ignored.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            log::debug!("[viewport] ignoring resize to {}x{}", width, height);
            return;
        }
        let Some(backend) = self.backend.as_mut() else {
            return;
        };
        if (width, height) == self.size {
            return;
        }
        self.size = (width, height);
        self.scene.set_aspect(width, height);
        backend.resize(width, height);
        log::debug!("[viewport] resized to {}x{}", width, height);
    }

    /// Advance the animation by `delta` seconds and draw. Returns whether a
    /// frame was presented.
    pub fn render_frame(&mut self, delta: f32) -> bool {
        if self.backend.is_none() {
            return false;
        }
        let pointer = self.pointer.load();
        self.scene.group = self.driver.step(delta, pointer);
        let uniforms = self.scene.uniforms();
        let result = match self.backend.as_mut() {
            Some(backend) => backend.render(&uniforms),
            None => return false,
        };
        match result {
            Ok(()) => {
                self.frames += 1;
                true
            }
            Err(FrameError::Skipped) => false,
            Err(FrameError::Fatal(reason)) => {
                log::error!("[viewport] render failed, disposing: {}", reason);
                self.dispose();
                false
            }
        }
    }

    /// Tear down in order: stop pointer writes, detach subscriptions, release
    /// the backend. Safe to call more than once.
    pub fn dispose(&mut self) {
        let Some(mut backend) = self.backend.take() else {
            return;
        };
        self.pointer.close();
        for sub in self.subscriptions.drain(..) {
            sub.detach();
        }
        backend.release();
        log::info!("[viewport] disposed after {} frames", self.frames);
    }
}

impl<B: RenderBackend> Drop for Viewport<B> {
    fn drop(&mut self) {
        self.dispose();
    }
}

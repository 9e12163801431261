use crate::error::GlassError;

type DetachFn = Box<dyn FnOnce() -> Result<(), GlassError>>;

/// Detach handle for a listener or per-frame callback.
///
/// Detaching consumes the handle, so it runs at most once; dropping an
/// undetached handle detaches it as well. Failures are logged, never retried.
pub struct Subscription {
    label: &'static str,
    detach: Option<DetachFn>,
}

impl Subscription {
    pub fn new(
        label: &'static str,
        detach: impl FnOnce() -> Result<(), GlassError> + 'static,
    ) -> Self {
        Self {
            label,
            detach: Some(Box::new(detach)),
        }
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn detach(mut self) {
        self.run();
    }

    fn run(&mut self) {
        if let Some(f) = self.detach.take() {
            match f() {
                Ok(()) => log::debug!("[viewport] detached {}", self.label),
                Err(e) => log::warn!("[viewport] {}", e),
            }
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.run();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("label", &self.label)
            .field("attached", &self.detach.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn detach_runs_exactly_once() {
        let hits = Rc::new(Cell::new(0));
        let h = hits.clone();
        let sub = Subscription::new("pointermove", move || {
            h.set(h.get() + 1);
            Ok(())
        });
        sub.detach();
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn drop_detaches() {
        let hits = Rc::new(Cell::new(0));
        let h = hits.clone();
        {
            let _sub = Subscription::new("frame", move || {
                h.set(h.get() + 1);
                Ok(())
            });
        }
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn failure_is_swallowed() {
        let sub = Subscription::new("resize", || {
            Err(GlassError::Detach {
                label: "resize",
                reason: "target gone".into(),
            })
        });
        sub.detach();
    }
}

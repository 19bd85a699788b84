//! View life-cycle scope owning teardown hooks.

use crate::bus::Subscription;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

/// Type alias for teardown hooks.
type DestroyHook = Box<dyn FnOnce() + Send>;

/// The life-cycle of one rendered view.
///
/// Components created for a view register their cleanup with
/// [`on_destroy`](Self::on_destroy); [`destroy`](Self::destroy) runs every hook
/// exactly once, in registration order. Dropping a scope that was never
/// destroyed destroys it.
///
/// # Examples
///
/// ```rust
/// use entity_detail::bus::EventBus;
/// use entity_detail::core::ViewScope;
///
/// let bus = EventBus::new();
/// let scope = ViewScope::new("department-detail");
///
/// scope.own(bus.subscribe("myApp:departmentUpdate", |_| {}));
/// assert_eq!(bus.subscriber_count(), 1);
///
/// scope.destroy();
/// assert_eq!(bus.subscriber_count(), 0);
/// ```
pub struct ViewScope {
    name: String,
    hooks: Mutex<Vec<DestroyHook>>,
    destroyed: AtomicBool,
}

impl ViewScope {
    /// Create a live scope for the named view.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hooks: Mutex::new(Vec::new()),
            destroyed: AtomicBool::new(false),
        }
    }

    /// The view name this scope belongs to.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Register a hook to run when the view is torn down.
    ///
    /// If the scope is already destroyed the hook runs immediately.
    pub fn on_destroy<F>(&self, hook: F)
    where
        F: FnOnce() + Send + 'static,
    {
        {
            let mut hooks = self.hooks.lock();
            if !self.destroyed.load(Ordering::Acquire) {
                hooks.push(Box::new(hook));
                return;
            }
        }
        tracing::debug!(scope = %self.name, "scope already destroyed, running hook now");
        hook();
    }

    /// Tie a bus subscription to this scope's lifetime.
    pub fn own(&self, subscription: Subscription) {
        self.on_destroy(move || subscription.dispose());
    }

    /// Fire the teardown signal.
    ///
    /// Returns `true` if this call tore the scope down, `false` if it had
    /// already been destroyed.
    pub fn destroy(&self) -> bool {
        let hooks = {
            let mut hooks = self.hooks.lock();
            if self.destroyed.swap(true, Ordering::AcqRel) {
                return false;
            }
            std::mem::take(&mut *hooks)
        };

        tracing::debug!(scope = %self.name, hooks = hooks.len(), "destroying view scope");
        for hook in hooks {
            hook();
        }
        true
    }

    /// Whether the teardown signal has fired.
    pub fn is_destroyed(&self) -> bool {
        self.destroyed.load(Ordering::Acquire)
    }
}

impl Drop for ViewScope {
    fn drop(&mut self) {
        self.destroy();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::AtomicUsize;

    #[test]
    fn test_destroy_runs_hooks_once() {
        let scope = ViewScope::new("view");
        let counter = Arc::new(AtomicUsize::new(0));

        let counter_clone = Arc::clone(&counter);
        scope.on_destroy(move || {
            counter_clone.fetch_add(1, Ordering::SeqCst);
        });

        assert!(scope.destroy());
        assert!(!scope.destroy());
        assert_eq!(counter.load(Ordering::SeqCst), 1);
        assert!(scope.is_destroyed());
    }

    #[test]
    fn test_hooks_run_in_registration_order() {
        let scope = ViewScope::new("view");
        let order = Arc::new(Mutex::new(Vec::new()));

        for i in 0..3 {
            let order_clone = Arc::clone(&order);
            scope.on_destroy(move || order_clone.lock().push(i));
        }

        scope.destroy();
        assert_eq!(*order.lock(), vec![0, 1, 2]);
    }

    #[test]
    fn test_hook_after_destroy_runs_immediately() {
        let scope = ViewScope::new("view");
        scope.destroy();

        let counter = Arc::new(AtomicUsize::new(0));
        let counter_clone = Arc::clone(&counter);
        scope.on_destroy(move || {
            counter_clone.fetch_add(1, Ordering::SeqCst);
        });
        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_drop_destroys() {
        let counter = Arc::new(AtomicUsize::new(0));
        {
            let scope = ViewScope::new("view");
            let counter_clone = Arc::clone(&counter);
            scope.on_destroy(move || {
                counter_clone.fetch_add(1, Ordering::SeqCst);
            });
        }
        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }
}

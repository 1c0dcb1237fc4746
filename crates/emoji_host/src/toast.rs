//! User-visible toast notification contract and baseline adapters.

use std::{cell::RefCell, rc::Rc};

/// Semantic tone of a toast message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastTone {
    /// Confirmation of a completed action.
    Success,
    /// A failed operation the user should know about.
    Error,
}

/// Sink for transient user-visible notices.
///
/// The collection core pushes exactly one toast per failed operation through
/// this seam; the UI layer supplies an implementation that renders them.
pub trait ToastService {
    /// Dispatches a toast message.
    fn toast(&self, tone: ToastTone, message: &str);

    /// Dispatches a success toast.
    fn success(&self, message: &str) {
        self.toast(ToastTone::Success, message);
    }

    /// Dispatches an error toast.
    fn error(&self, message: &str) {
        self.toast(ToastTone::Error, message);
    }
}

/// No-op toast sink for headless targets and baseline tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopToastService;

impl ToastService for NoopToastService {
    fn toast(&self, _tone: ToastTone, _message: &str) {}
}

/// Recording toast sink for asserting notification behavior in tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryToastService {
    inner: Rc<RefCell<Vec<(ToastTone, String)>>>,
}

impl MemoryToastService {
    /// Returns every toast dispatched so far, in order.
    pub fn recorded(&self) -> Vec<(ToastTone, String)> {
        self.inner.borrow().clone()
    }

    /// Number of error toasts dispatched so far.
    pub fn error_count(&self) -> usize {
        self.inner
            .borrow()
            .iter()
            .filter(|(tone, _)| *tone == ToastTone::Error)
            .count()
    }
}

impl ToastService for MemoryToastService {
    fn toast(&self, tone: ToastTone, message: &str) {
        self.inner.borrow_mut().push((tone, message.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_toast_service_records_in_dispatch_order() {
        let toasts = MemoryToastService::default();
        let toasts_obj: &dyn ToastService = &toasts;

        toasts_obj.success("saved");
        toasts_obj.error("broke");

        assert_eq!(
            toasts.recorded(),
            vec![
                (ToastTone::Success, "saved".to_string()),
                (ToastTone::Error, "broke".to_string()),
            ]
        );
        assert_eq!(toasts.error_count(), 1);
    }
}

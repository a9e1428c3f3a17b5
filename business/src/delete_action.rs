//! The per-row delete control and the callback it is bound to.

use std::{fmt, rc::Rc};

/// Marker identifying delete controls, used to salt their widget ids.
pub const DELETE_BUTTON_CLASS: &str = "qa-token-delete";

/// Accessible label of the delete control.
pub const DELETE_BUTTON_LABEL: &str = "🗑";

/// Hover text of the delete control.
pub const DELETE_BUTTON_HINT: &str = "Delete token";

thread_local! {
    static NOOP: DeleteCallback = DeleteCallback::new(|_| {});
}

/// Caller-supplied deletion logic, invoked with the row's token.
///
/// Two callbacks are equal only if they share the same allocation, which is
/// what the column memo keys on.
#[derive(Clone)]
pub struct DeleteCallback(Rc<dyn Fn(&str)>);

impl DeleteCallback {
    pub fn new(on_delete: impl Fn(&str) + 'static) -> Self {
        Self(Rc::new(on_delete))
    }

    /// The shared do-nothing callback. Every call on a thread returns the
    /// same allocation.
    pub fn noop() -> Self {
        NOOP.with(Clone::clone)
    }

    pub fn call(&self, token: &str) {
        (self.0)(token);
    }
}

impl Default for DeleteCallback {
    fn default() -> Self {
        Self::noop()
    }
}

impl PartialEq for DeleteCallback {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for DeleteCallback {}

impl fmt::Debug for DeleteCallback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DeleteCallback({:p})", Rc::as_ptr(&self.0).cast::<()>())
    }
}

/// A delete control bound to one token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteButton {
    token: String,
    on_delete: DeleteCallback,
}

impl DeleteButton {
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Runs the bound callback once with this row's token.
    pub fn activate(&self) {
        log::debug!(
            "Delete activated for token of length {}",
            self.token.len()
        );
        self.on_delete.call(&self.token);
    }
}

/// Builds the delete control for `token`.
pub fn render_delete_action(token: &str, on_delete: &DeleteCallback) -> DeleteButton {
    DeleteButton {
        token: token.to_owned(),
        on_delete: on_delete.clone(),
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    #[test]
    fn activation_invokes_callback_once_with_token() {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let recorded = Rc::clone(&calls);
        let on_delete = DeleteCallback::new(move |token| recorded.borrow_mut().push(token.to_owned()));

        render_delete_action("abc123", &on_delete).activate();

        assert_eq!(*calls.borrow(), vec!["abc123".to_owned()]);
    }

    #[test]
    fn default_callback_is_inert() {
        let button = render_delete_action("abc123", &DeleteCallback::default());
        button.activate();
        assert_eq!(button.token(), "abc123");
    }

    #[test]
    fn noop_identity_is_stable() {
        assert_eq!(DeleteCallback::noop(), DeleteCallback::noop());
        assert_eq!(DeleteCallback::default(), DeleteCallback::noop());
    }

    #[test]
    fn distinct_closures_are_distinct_callbacks() {
        let a = DeleteCallback::new(|_| {});
        let b = DeleteCallback::new(|_| {});
        assert_ne!(a, b);
        assert_eq!(a.clone(), a);
    }
}

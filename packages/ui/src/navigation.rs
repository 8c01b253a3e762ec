use dioxus::prelude::*;
use store::NavTarget;

/// Route changes requested from shared UI.
///
/// The platform crate owns the router; it provides this context with a
/// callback that maps a [`NavTarget`] onto its own route type.
#[derive(Clone, Copy, PartialEq)]
pub struct Navigation {
    go: EventHandler<NavTarget>,
}

impl Navigation {
    pub fn new(go: EventHandler<NavTarget>) -> Self {
        Self { go }
    }

    pub fn go(&self, target: NavTarget) {
        self.go.call(target);
    }
}

pub fn use_navigation() -> Navigation {
    use_context::<Navigation>()
}

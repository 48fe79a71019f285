//! View components and their deferred loaders

use std::fmt;
use std::sync::{Arc, OnceLock};

/// A resolved view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ViewComponent {
    /// Component name, e.g. `GoodsList`
    pub name: &'static str,
    /// View module the component lives in
    pub module: &'static str,
}

impl ViewComponent {
    pub const fn new(name: &'static str, module: &'static str) -> Self {
        Self { name, module }
    }
}

type Loader = dyn Fn() -> ViewComponent + Send + Sync;

/// Deferred view reference
///
/// The factory runs on the first [`resolve`](Self::resolve) only; later
/// calls, including from clones, return the cached component.
#[derive(Clone)]
pub struct LazyComponent {
    loader: Arc<Loader>,
    resolved: Arc<OnceLock<ViewComponent>>,
}

impl LazyComponent {
    pub fn new<F>(loader: F) -> Self
    where
        F: Fn() -> ViewComponent + Send + Sync + 'static,
    {
        Self {
            loader: Arc::new(loader),
            resolved: Arc::new(OnceLock::new()),
        }
    }

    /// Load the component, running the factory at most once
    pub fn resolve(&self) -> &ViewComponent {
        self.resolved.get_or_init(|| {
            let component = (self.loader)();
            tracing::debug!(
                component = component.name,
                module = component.module,
                "Loaded view component"
            );
            component
        })
    }

    pub fn is_resolved(&self) -> bool {
        self.resolved.get().is_some()
    }
}

impl fmt::Debug for LazyComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LazyComponent")
            .field("resolved", &self.resolved.get())
            .finish_non_exhaustive()
    }
}

// ========== Views ==========

/// Authenticated shell wrapping menu pages
pub fn default_layout() -> ViewComponent {
    ViewComponent::new("DefaultLayout", "layout/default-layout")
}

pub fn goods_list_view() -> ViewComponent {
    ViewComponent::new("GoodsList", "views/goods/goods-list")
}

pub fn card_list_view() -> ViewComponent {
    ViewComponent::new("Card", "views/list/card")
}

//! Dashboard route registry
//!
//! Route modules declare a static tree of [`RouteRecord`]s. The [`Router`]
//! indexes the registered trees and resolves a concrete path to the chain
//! of records it matched. Authorization is not enforced here; a guard reads
//! [`RouteMatch::requires_auth`] and [`RouteMatch::permits`].

pub mod component;
pub mod goods;

pub use component::{LazyComponent, ViewComponent};
pub use goods::goods_routes;

/// Role allow-list entry matching any role
pub const ANY_ROLE: &str = "*";

/// Route metadata
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteMeta {
    /// Locale key of the menu label
    pub locale: String,
    pub requires_auth: bool,
    pub icon: Option<String>,
    /// Menu position, ascending
    pub order: Option<i32>,
    /// Allowed roles; empty means nothing is declared at this level
    pub roles: Vec<String>,
}

impl RouteMeta {
    pub fn new(locale: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            ..Default::default()
        }
    }

    pub fn requires_auth(mut self) -> Self {
        self.requires_auth = true;
        self
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn with_order(mut self, order: i32) -> Self {
        self.order = Some(order);
        self
    }

    pub fn with_roles<I, S>(mut self, roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.roles = roles.into_iter().map(Into::into).collect();
        self
    }

    /// Whether `role` passes this level's allow-list
    pub fn permits(&self, role: &str) -> bool {
        self.roles.is_empty() || self.roles.iter().any(|r| r == ANY_ROLE || r == role)
    }
}

/// One node of a route tree
#[derive(Debug, Clone)]
pub struct RouteRecord {
    /// Absolute for top-level records, relative for children
    pub path: String,
    pub name: String,
    pub component: LazyComponent,
    pub meta: RouteMeta,
    pub children: Vec<RouteRecord>,
}

impl RouteRecord {
    pub fn new(path: impl Into<String>, name: impl Into<String>, component: LazyComponent) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            component,
            meta: RouteMeta::default(),
            children: Vec::new(),
        }
    }

    pub fn with_meta(mut self, meta: RouteMeta) -> Self {
        self.meta = meta;
        self
    }

    pub fn with_child(mut self, child: RouteRecord) -> Self {
        self.children.push(child);
        self
    }
}

/// Records matched by a path, outermost first
#[derive(Debug, Clone)]
pub struct RouteMatch<'a> {
    records: Vec<&'a RouteRecord>,
    leaf: &'a RouteRecord,
}

impl<'a> RouteMatch<'a> {
    fn from_chain(records: Vec<&'a RouteRecord>) -> Option<Self> {
        let leaf = records.last().copied()?;
        Some(Self { records, leaf })
    }

    pub fn records(&self) -> &[&'a RouteRecord] {
        &self.records
    }

    /// Innermost matched record
    pub fn leaf(&self) -> &'a RouteRecord {
        self.leaf
    }

    pub fn name(&self) -> &'a str {
        &self.leaf().name
    }

    /// Load the leaf's view component
    pub fn component(&self) -> &'a ViewComponent {
        self.leaf().component.resolve()
    }

    /// Normalized full path of the match
    pub fn full_path(&self) -> String {
        let segments: Vec<&str> = self
            .records
            .iter()
            .flat_map(|r| split_segments(&r.path))
            .collect();
        format!("/{}", segments.join("/"))
    }

    /// True when any record along the chain requires authentication
    pub fn requires_auth(&self) -> bool {
        self.records.iter().any(|r| r.meta.requires_auth)
    }

    /// True when every allow-list along the chain admits `role`
    pub fn permits(&self, role: &str) -> bool {
        self.records.iter().all(|r| r.meta.permits(role))
    }
}

/// Menu entry derived from the route tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub name: String,
    pub locale: String,
    pub icon: Option<String>,
    pub path: String,
    pub order: Option<i32>,
    pub children: Vec<MenuItem>,
}

/// Route registry
#[derive(Debug, Clone, Default)]
pub struct Router {
    routes: Vec<RouteRecord>,
}

impl Router {
    pub fn new(routes: Vec<RouteRecord>) -> Self {
        Self { routes }
    }

    /// All dashboard route modules
    pub fn dashboard() -> Self {
        Self::new(vec![goods_routes()])
    }

    pub fn register(mut self, route: RouteRecord) -> Self {
        self.routes.push(route);
        self
    }

    pub fn routes(&self) -> &[RouteRecord] {
        &self.routes
    }

    /// Match a concrete path; every segment must be consumed
    pub fn resolve(&self, path: &str) -> Option<RouteMatch<'_>> {
        let segments = split_segments(path);
        let mut chain = Vec::new();
        for route in &self.routes {
            if match_path(route, &segments, &mut chain) {
                return RouteMatch::from_chain(chain);
            }
        }
        None
    }

    /// Find a route by its name
    pub fn resolve_by_name(&self, name: &str) -> Option<RouteMatch<'_>> {
        let mut chain = Vec::new();
        for route in &self.routes {
            if match_name(route, name, &mut chain) {
                return RouteMatch::from_chain(chain);
            }
        }
        None
    }

    /// Menu tree ordered by `order`; entries without one keep their
    /// declaration order after the ordered ones
    pub fn menu(&self) -> Vec<MenuItem> {
        menu_items(&self.routes, "")
    }
}

fn split_segments(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}

fn match_path<'a>(
    record: &'a RouteRecord,
    segments: &[&str],
    chain: &mut Vec<&'a RouteRecord>,
) -> bool {
    let own = split_segments(&record.path);
    let Some(rest) = segments.strip_prefix(own.as_slice()) else {
        return false;
    };

    chain.push(record);
    if rest.is_empty() || record.children.iter().any(|c| match_path(c, rest, chain)) {
        return true;
    }
    chain.pop();
    false
}

fn match_name<'a>(record: &'a RouteRecord, name: &str, chain: &mut Vec<&'a RouteRecord>) -> bool {
    chain.push(record);
    if record.name == name || record.children.iter().any(|c| match_name(c, name, chain)) {
        return true;
    }
    chain.pop();
    false
}

fn menu_items(records: &[RouteRecord], parent: &str) -> Vec<MenuItem> {
    let mut items: Vec<MenuItem> = records
        .iter()
        .map(|record| {
            let mut segments = split_segments(parent);
            segments.extend(split_segments(&record.path));
            let path = format!("/{}", segments.join("/"));
            MenuItem {
                name: record.name.clone(),
                locale: record.meta.locale.clone(),
                icon: record.meta.icon.clone(),
                order: record.meta.order,
                children: menu_items(&record.children, &path),
                path,
            }
        })
        .collect();
    items.sort_by_key(|item| (item.order.is_none(), item.order));
    items
}

//! Static prefix table: request path → owning service.
//!
//! A prefix matches the exact path or the path followed by `/`, so
//! `/api/todo` does not swallow `/api/todos`. The longest match wins.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Upstream {
    Auth,
    Student,
    Todo,
}

impl Upstream {
    pub fn name(&self) -> &'static str {
        match self {
            Upstream::Auth => "auth",
            Upstream::Student => "student",
            Upstream::Todo => "todo",
        }
    }
}

#[derive(Debug, Clone)]
pub struct RouteTable {
    entries: Vec<(&'static str, Upstream)>,
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::new(vec![
            ("/auth", Upstream::Auth),
            ("/api/students", Upstream::Student),
            ("/students", Upstream::Student),
            ("/api/todo", Upstream::Todo),
            ("/api/todos", Upstream::Todo),
        ])
    }
}

impl RouteTable {
    pub fn new(mut entries: Vec<(&'static str, Upstream)>) -> Self {
        // longest first so the first hit is the most specific
        entries.sort_by(|a, b| b.0.len().cmp(&a.0.len()));
        Self { entries }
    }

    pub fn resolve(&self, path: &str) -> Option<Upstream> {
        self.entries
            .iter()
            .find(|(prefix, _)| matches_prefix(path, prefix))
            .map(|(_, upstream)| *upstream)
    }
}

fn matches_prefix(path: &str, prefix: &str) -> bool {
    match path.strip_prefix(prefix) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}

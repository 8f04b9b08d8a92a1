//! Route table: one landing page, everything else is not found

pub const NOT_FOUND_CODE: &str = "404";
pub const NOT_FOUND_TITLE: &str = "Page Not Found";
pub const NOT_FOUND_LINK: &str = "Go back home";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    NotFound,
}

impl Route {
    /// Resolves a request path, with or without the site base path prefix
    pub fn resolve(path: &str, base_path: &str) -> Self {
        let base = base_path.trim_end_matches('/');
        let rest = if !base.is_empty() && path.starts_with(base) {
            let tail = &path[base.len()..];
            // "/baanrainaifunx" must not match the "/baanrainaifun" prefix
            if !tail.is_empty() && !tail.starts_with('/') {
                return Route::NotFound;
            }
            tail
        } else {
            path
        };

        match rest.split(['?', '#']).next().unwrap_or("") {
            "" | "/" | "/index.html" => Route::Home,
            _ => Route::NotFound,
        }
    }
}

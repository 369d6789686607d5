//! Page Navigation
//!
//! Full-page navigation helpers and page detection from the URL path.

/// Browser navigation seam
pub trait Navigator {
    /// Navigate to a path on this origin
    fn go_to(&self, path: &str);
    /// Reload the current page
    fn reload(&self);
}

/// `window.location` backed navigator
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn go_to(&self, path: &str) {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().set_href(path) {
                log::error!("navigation to {} failed: {:?}", path, e);
            }
        }
    }

    fn reload(&self) {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().reload() {
                log::error!("reload failed: {:?}", e);
            }
        }
    }
}

pub const OVERVIEW_PATH: &str = "/overview";

/// Detail page of a project
pub fn project_path(project_id: u32) -> String {
    format!("/project/{}", project_id)
}

/// Which page the browser is on
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Overview,
    Project(u32),
}

impl Page {
    pub fn from_path(path: &str) -> Self {
        let mut segments = path.trim_matches('/').split('/');
        match (segments.next(), segments.next(), segments.next()) {
            (Some("project"), Some(id), None) => id.parse().map(Page::Project).unwrap_or(Page::Overview),
            _ => Page::Overview,
        }
    }

    pub fn current() -> Self {
        web_sys::window()
            .and_then(|w| w.location().pathname().ok())
            .map(|path| Self::from_path(&path))
            .unwrap_or(Page::Overview)
    }

    pub fn project_id(&self) -> Option<u32> {
        match self {
            Page::Project(id) => Some(*id),
            Page::Overview => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_from_path() {
        assert_eq!(Page::from_path("/project/12"), Page::Project(12));
        assert_eq!(Page::from_path("/project/12/"), Page::Project(12));
        assert_eq!(Page::from_path("/project/abc"), Page::Overview);
        assert_eq!(Page::from_path("/project/1/items"), Page::Overview);
        assert_eq!(Page::from_path("/overview"), Page::Overview);
        assert_eq!(Page::from_path("/"), Page::Overview);
    }

    #[test]
    fn test_project_path_round_trips() {
        assert_eq!(Page::from_path(&project_path(5)).project_id(), Some(5));
    }
}

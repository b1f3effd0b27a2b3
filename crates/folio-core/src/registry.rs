//! One-time installation of the global stylesheet.
//!
//! Global styles are document-wide, so installing them twice would duplicate
//! every rule. The host calls [`initialize_global_styles`] once from its
//! startup sequence; later calls return the stylesheet that is already
//! installed and do not rebuild it. Installation is once per process, not
//! once per component mount.
//!
//! The process-wide registry is never torn down. Owned [`StyleRegistry`]
//! values (tests, embedded hosts) can be cleared with [`StyleRegistry::reset`].

use std::sync::OnceLock;

use crate::styles::Stylesheet;
use crate::theme::Theme;

static GLOBAL_REGISTRY: StyleRegistry = StyleRegistry::new();

/// Outcome of an install request
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Injection<'a> {
    /// This call built and installed the stylesheet
    Installed(&'a Stylesheet),
    /// A previous call already installed it; the builder was not run
    AlreadyInstalled(&'a Stylesheet),
}

impl<'a> Injection<'a> {
    pub fn stylesheet(&self) -> &'a Stylesheet {
        match self {
            Injection::Installed(sheet) | Injection::AlreadyInstalled(sheet) => sheet,
        }
    }

    pub fn is_first(&self) -> bool {
        matches!(self, Injection::Installed(_))
    }
}

/// Holds at most one installed stylesheet
#[derive(Debug, Default)]
pub struct StyleRegistry {
    sheet: OnceLock<Stylesheet>,
}

impl StyleRegistry {
    pub const fn new() -> Self {
        Self {
            sheet: OnceLock::new(),
        }
    }

    /// Install the stylesheet produced by `build`, unless one is installed already.
    ///
    /// Concurrent callers block until the first one finishes; `build` runs once.
    pub fn install(&self, build: impl FnOnce() -> Stylesheet) -> Injection<'_> {
        let mut built = false;
        let sheet = self.sheet.get_or_init(|| {
            built = true;
            build()
        });

        if built {
            Injection::Installed(sheet)
        } else {
            Injection::AlreadyInstalled(sheet)
        }
    }

    pub fn get(&self) -> Option<&Stylesheet> {
        self.sheet.get()
    }

    pub fn is_installed(&self) -> bool {
        self.sheet.get().is_some()
    }

    /// Remove the installed stylesheet so the next `install` builds again.
    pub fn reset(&mut self) -> Option<Stylesheet> {
        self.sheet.take()
    }
}

/// Install the site stylesheet for `theme` into the process-wide registry.
///
/// Only the first call's theme takes effect.
pub fn initialize_global_styles(theme: &Theme) -> Injection<'static> {
    let injection = GLOBAL_REGISTRY.install(|| Stylesheet::standard(theme));
    match injection {
        Injection::Installed(sheet) => {
            tracing::info!(sources = sheet.sources().len(), "Installed global styles");
        }
        Injection::AlreadyInstalled(_) => {
            tracing::debug!("Global styles already installed, keeping the first theme");
        }
    }
    injection
}

/// The process-wide stylesheet, if [`initialize_global_styles`] has run
pub fn global_stylesheet() -> Option<&'static Stylesheet> {
    GLOBAL_REGISTRY.get()
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    fn sheet(tag: &'static str) -> Stylesheet {
        Stylesheet::new().with_source(tag, "a { color: red; }")
    }

    #[test]
    fn second_install_does_not_rebuild() {
        let registry = StyleRegistry::new();
        let builds = AtomicUsize::new(0);

        let first = registry.install(|| {
            builds.fetch_add(1, Ordering::SeqCst);
            sheet("first")
        });
        assert!(first.is_first());

        let second = registry.install(|| {
            builds.fetch_add(1, Ordering::SeqCst);
            sheet("second")
        });
        assert!(!second.is_first());
        assert_eq!(second.stylesheet().sources()[0].name, "first");
        assert_eq!(builds.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn concurrent_installs_build_once() {
        let registry = StyleRegistry::new();
        let builds = AtomicUsize::new(0);
        let firsts = AtomicUsize::new(0);

        std::thread::scope(|scope| {
            for _ in 0..8 {
                scope.spawn(|| {
                    let injection = registry.install(|| {
                        builds.fetch_add(1, Ordering::SeqCst);
                        sheet("racy")
                    });
                    if injection.is_first() {
                        firsts.fetch_add(1, Ordering::SeqCst);
                    }
                });
            }
        });

        assert_eq!(builds.load(Ordering::SeqCst), 1);
        assert_eq!(firsts.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn reset_allows_reinstall() {
        let mut registry = StyleRegistry::new();
        assert!(!registry.is_installed());

        registry.install(|| sheet("one"));
        let removed = registry.reset().unwrap();
        assert_eq!(removed.sources()[0].name, "one");
        assert!(registry.get().is_none());

        assert!(registry.install(|| sheet("two")).is_first());
    }

    #[test]
    fn global_registry_keeps_first_theme() {
        let first = initialize_global_styles(&Theme::default());
        let again = initialize_global_styles(&Theme::default());

        assert!(!again.is_first());
        assert!(std::ptr::eq(first.stylesheet(), again.stylesheet()));
        assert!(global_stylesheet().is_some());
    }
}

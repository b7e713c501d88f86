//! Light/dark theme toggle.
//!
//! The toggle owns one boolean. Every change, including the initial mount,
//! applies the "dark" marker to the document root through a [`ThemeTarget`].
//! Nothing is persisted across reloads.

/// Where the dark marker lives (the `<html>` class list in the browser).
pub trait ThemeTarget {
    fn set_dark(&mut self, dark: bool);
}

/// Class list of the document root.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RootClasses(Vec<String>);

impl RootClasses {
    pub const DARK: &'static str = "dark";

    pub fn contains(&self, class: &str) -> bool {
        self.0.iter().any(|c| c == class)
    }

    /// Space-separated, as written into the `class` attribute.
    pub fn to_attr(&self) -> String {
        self.0.join(" ")
    }
}

impl ThemeTarget for RootClasses {
    fn set_dark(&mut self, dark: bool) {
        let present = self.contains(Self::DARK);
        if dark && !present {
            self.0.push(Self::DARK.to_string());
        } else if !dark && present {
            self.0.retain(|c| c != Self::DARK);
        }
    }
}

#[derive(Debug)]
pub struct ThemeToggle<T: ThemeTarget> {
    is_dark: bool,
    target: T,
}

impl<T: ThemeTarget> ThemeToggle<T> {
    /// Mount with the dark theme.
    pub fn new(target: T) -> Self {
        Self::with_initial(target, true)
    }

    pub fn with_initial(mut target: T, dark: bool) -> Self {
        target.set_dark(dark);
        Self {
            is_dark: dark,
            target,
        }
    }

    /// Flip the theme; returns the new state.
    pub fn toggle(&mut self) -> bool {
        self.is_dark = !self.is_dark;
        self.target.set_dark(self.is_dark);
        self.is_dark
    }

    pub fn is_dark(&self) -> bool {
        self.is_dark
    }

    pub fn target(&self) -> &T {
        &self.target
    }
}

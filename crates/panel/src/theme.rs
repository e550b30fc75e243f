//! Light/dark theme preference.

use crate::ports::PreferenceStore;

/// Key the preference is persisted under
pub const THEME_KEY: &str = "theme";

/// Binary visual theme
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    /// Parse a persisted value; anything but "dark" reads as light
    pub fn from_name(name: &str) -> Self {
        if name == "dark" {
            Self::Dark
        } else {
            Self::Light
        }
    }

    /// Persisted representation
    pub const fn name(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub const fn opposite(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Icon class shown while this theme is applied. The glyph names
    /// the theme a click would switch to: sun while dark, moon while
    /// light.
    pub const fn icon_class(self) -> &'static str {
        match self {
            Self::Dark => "fas fa-sun",
            Self::Light => "fas fa-moon",
        }
    }
}

/// Where the applied theme is visible: a marker on the document plus
/// the toggle control's icon glyph.
pub trait ThemeScreen {
    /// Currently applied theme, if a marker is set
    fn applied(&self) -> Option<Theme>;

    /// Set the document marker
    fn apply(&self, theme: Theme);

    /// Update the icon glyph
    fn set_icon(&self, class: &str);
}

/// Applies and persists the theme preference.
pub struct ThemeToggle<S, P> {
    screen: S,
    prefs: P,
}

impl<S: ThemeScreen, P: PreferenceStore> ThemeToggle<S, P> {
    pub fn new(screen: S, prefs: P) -> Self {
        Self { screen, prefs }
    }

    /// Apply the persisted preference, defaulting to light when nothing
    /// is stored. Does not write the store.
    pub fn initialize(&self) -> Theme {
        let theme = self
            .prefs
            .get(THEME_KEY)
            .map_or(Theme::Light, |name| Theme::from_name(&name));
        self.show(theme);
        theme
    }

    /// Flip the applied theme, persist the new preference and update
    /// the icon. An unset marker reads as light, so the first toggle
    /// always lands on dark.
    pub fn toggle(&self) -> Theme {
        let next = self.screen.applied().unwrap_or(Theme::Light).opposite();
        self.show(next);
        self.prefs.set(THEME_KEY, next.name());
        next
    }

    fn show(&self, theme: Theme) {
        self.screen.apply(theme);
        self.screen.set_icon(theme.icon_class());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::{MemoryPrefs, MemoryScreen};

    #[test]
    fn initialize_defaults_to_light_with_the_moon_icon() {
        let screen = MemoryScreen::default();
        let prefs = MemoryPrefs::default();
        let toggle = ThemeToggle::new(screen.clone(), prefs.clone());

        assert_eq!(toggle.initialize(), Theme::Light);
        assert_eq!(screen.applied(), Some(Theme::Light));
        assert_eq!(screen.icon().as_deref(), Some("fas fa-moon"));
        // Initialization never writes the store
        assert_eq!(prefs.get(THEME_KEY), None);
    }

    #[test]
    fn initialize_applies_a_stored_dark_preference() {
        let prefs = MemoryPrefs::default();
        prefs.set(THEME_KEY, "dark");
        let screen = MemoryScreen::default();
        let toggle = ThemeToggle::new(screen.clone(), prefs);

        assert_eq!(toggle.initialize(), Theme::Dark);
        assert_eq!(screen.applied(), Some(Theme::Dark));
        assert_eq!(screen.icon().as_deref(), Some("fas fa-sun"));
    }

    #[test]
    fn toggle_flips_applies_and_persists() {
        let screen = MemoryScreen::default();
        let prefs = MemoryPrefs::default();
        let toggle = ThemeToggle::new(screen.clone(), prefs.clone());
        toggle.initialize();

        assert_eq!(toggle.toggle(), Theme::Dark);
        assert_eq!(screen.applied(), Some(Theme::Dark));
        assert_eq!(prefs.get(THEME_KEY).as_deref(), Some("dark"));
        assert_eq!(screen.icon().as_deref(), Some("fas fa-sun"));
    }

    #[test]
    fn double_toggle_round_trips() {
        let screen = MemoryScreen::default();
        let prefs = MemoryPrefs::default();
        let toggle = ThemeToggle::new(screen.clone(), prefs.clone());
        toggle.initialize();
        let initial_icon = screen.icon();

        toggle.toggle();
        toggle.toggle();

        assert_eq!(screen.applied(), Some(Theme::Light));
        assert_eq!(prefs.get(THEME_KEY).as_deref(), Some("light"));
        assert_eq!(screen.icon(), initial_icon);
    }

    #[test]
    fn first_toggle_without_initialize_lands_on_dark() {
        let screen = MemoryScreen::default();
        let toggle = ThemeToggle::new(screen.clone(), MemoryPrefs::default());

        assert_eq!(toggle.toggle(), Theme::Dark);
    }

    #[test]
    fn unrecognized_stored_values_read_as_light() {
        assert_eq!(Theme::from_name("solarized"), Theme::Light);
        assert_eq!(Theme::from_name(""), Theme::Light);
        assert_eq!(Theme::from_name("dark"), Theme::Dark);
    }
}

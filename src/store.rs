//! Theme and navigation menu state.
//!
//! The theme is resolved once at startup (stored preference, then OS
//! preference, then light), changed only by an explicit toggle, and
//! persisted in local storage. When storage is unavailable the preference
//! lives in memory for the session only.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

use yew::prelude::*;

use crate::config::THEME_STORAGE_KEY;
use crate::error::{self, SiteError};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            _ => Err(()),
        }
    }
}

/// Stored preference, then OS preference, then light.
pub fn resolve_initial(stored: Option<Theme>, os_prefers_dark: Option<bool>) -> Theme {
    match (stored, os_prefers_dark) {
        (Some(theme), _) => theme,
        (None, Some(true)) => Theme::Dark,
        _ => Theme::Light,
    }
}

pub trait PreferenceStore {
    fn load(&self) -> Option<Theme>;
    fn save(&self, theme: Theme) -> Result<(), SiteError>;
}

/// `window.localStorage`, under [`THEME_STORAGE_KEY`].
pub struct LocalPreferenceStore {
    storage: web_sys::Storage,
}

impl LocalPreferenceStore {
    pub fn open() -> Result<Self, SiteError> {
        let storage = error::window()?
            .local_storage()
            .map_err(|_| SiteError::StorageUnavailable)?
            .ok_or(SiteError::StorageUnavailable)?;
        Ok(Self { storage })
    }
}

impl PreferenceStore for LocalPreferenceStore {
    fn load(&self) -> Option<Theme> {
        self.storage
            .get_item(THEME_STORAGE_KEY)
            .ok()
            .flatten()
            .and_then(|value| value.parse().ok())
    }

    fn save(&self, theme: Theme) -> Result<(), SiteError> {
        self.storage
            .set_item(THEME_STORAGE_KEY, theme.as_str())
            .map_err(SiteError::from)
    }
}

/// Session-only fallback.
#[derive(Default)]
pub struct MemoryPreferenceStore {
    theme: RefCell<Option<Theme>>,
}

impl PreferenceStore for MemoryPreferenceStore {
    fn load(&self) -> Option<Theme> {
        *self.theme.borrow()
    }

    fn save(&self, theme: Theme) -> Result<(), SiteError> {
        *self.theme.borrow_mut() = Some(theme);
        Ok(())
    }
}

pub fn browser_preference_store() -> Rc<dyn PreferenceStore> {
    match LocalPreferenceStore::open() {
        Ok(store) => Rc::new(store),
        Err(err) => {
            log::warn!("Theme preference will not persist: {}", err);
            Rc::new(MemoryPreferenceStore::default())
        }
    }
}

/// `None` when `matchMedia` is unavailable.
pub fn os_prefers_dark() -> Option<bool> {
    let window = web_sys::window()?;
    let query = window.match_media("(prefers-color-scheme: dark)").ok().flatten()?;
    Some(query.matches())
}

pub struct ThemeStore {
    theme: Theme,
    prefs: Rc<dyn PreferenceStore>,
}

impl ThemeStore {
    pub fn load(prefs: Rc<dyn PreferenceStore>, os_prefers_dark: Option<bool>) -> Self {
        let theme = resolve_initial(prefs.load(), os_prefers_dark);
        Self { theme, prefs }
    }

    /// Loads the theme and hands it to `apply` straight away, so the page
    /// never renders a frame in the wrong theme. A failed apply is logged.
    pub fn load_applied(
        prefs: Rc<dyn PreferenceStore>,
        os_prefers_dark: Option<bool>,
        apply: impl FnOnce(Theme) -> Result<(), SiteError>,
    ) -> Self {
        let store = Self::load(prefs, os_prefers_dark);
        if let Err(err) = apply(store.theme) {
            log::warn!("Could not apply initial theme: {}", err);
        }
        store
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Flips the theme and persists the new choice. A failed write keeps
    /// the change for this session.
    pub fn toggle(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        if let Err(err) = self.prefs.save(self.theme) {
            log::warn!("Could not persist theme: {}", err);
        }
        self.theme
    }
}

/// Sets the `dark` class and `data-theme` attribute on `<html>`.
pub fn apply_to_document(theme: Theme) -> Result<(), SiteError> {
    let root = error::document()?
        .document_element()
        .ok_or(SiteError::NoDocument)?;
    root.class_list().toggle_with_force("dark", theme.is_dark())?;
    root.set_attribute("data-theme", theme.as_str())?;
    Ok(())
}

#[derive(Clone, PartialEq)]
pub struct ThemeContext {
    pub theme: Theme,
    pub toggle: Callback<()>,
}

#[derive(Properties, PartialEq)]
pub struct ThemeProviderProps {
    pub children: Children,
}

#[function_component(ThemeProvider)]
pub fn theme_provider(props: &ThemeProviderProps) -> Html {
    let store = use_mut_ref(|| {
        ThemeStore::load_applied(browser_preference_store(), os_prefers_dark(), apply_to_document)
    });
    let theme = {
        let store = store.clone();
        use_state(move || store.borrow().theme())
    };

    use_effect_with_deps(
        |theme| {
            if let Err(err) = apply_to_document(*theme) {
                log::warn!("Could not apply theme: {}", err);
            }
            || ()
        },
        *theme,
    );

    let toggle = {
        let theme = theme.clone();
        Callback::from(move |_| {
            let next = store.borrow_mut().toggle();
            log::debug!("Theme set to {}", next);
            theme.set(next);
        })
    };

    let context = ThemeContext {
        theme: *theme,
        toggle,
    };

    html! {
        <ContextProvider<ThemeContext> context={context}>
            { for props.children.iter() }
        </ContextProvider<ThemeContext>>
    }
}

/// Hover state of the header dropdown.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MenuState {
    pub open: bool,
}

pub enum MenuAction {
    Enter,
    Leave,
}

impl Reducible for MenuState {
    type Action = MenuAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let open = matches!(action, MenuAction::Enter);
        if open == self.open {
            self
        } else {
            Rc::new(MenuState { open })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn memory() -> Rc<dyn PreferenceStore> {
        Rc::new(MemoryPreferenceStore::default())
    }

    #[test]
    fn stored_preference_wins() {
        assert_eq!(resolve_initial(Some(Theme::Light), Some(true)), Theme::Light);
        assert_eq!(resolve_initial(Some(Theme::Dark), Some(false)), Theme::Dark);
    }

    #[test]
    fn falls_back_to_os_then_light() {
        assert_eq!(resolve_initial(None, Some(true)), Theme::Dark);
        assert_eq!(resolve_initial(None, Some(false)), Theme::Light);
        assert_eq!(resolve_initial(None, None), Theme::Light);
    }

    #[test]
    fn theme_parses_stored_values() {
        assert_eq!("dark".parse::<Theme>(), Ok(Theme::Dark));
        assert_eq!(" light\n".parse::<Theme>(), Ok(Theme::Light));
        assert!("sepia".parse::<Theme>().is_err());
        assert_eq!(Theme::Dark.to_string(), "dark");
    }

    #[test]
    fn toggle_survives_reload() {
        let prefs = memory();
        let mut store = ThemeStore::load(prefs.clone(), None);
        assert_eq!(store.theme(), Theme::Light);

        assert_eq!(store.toggle(), Theme::Dark);

        let reloaded = ThemeStore::load(prefs, None);
        assert_eq!(reloaded.theme(), Theme::Dark);
    }

    #[test]
    fn resolved_os_theme_is_not_persisted() {
        let prefs = memory();
        let store = ThemeStore::load(prefs.clone(), Some(true));
        assert_eq!(store.theme(), Theme::Dark);
        assert_eq!(prefs.load(), None);
    }

    #[test]
    fn explicit_choice_beats_os_on_reload() {
        let prefs = memory();
        let mut store = ThemeStore::load(prefs.clone(), Some(true));
        store.toggle();
        assert_eq!(ThemeStore::load(prefs, Some(true)).theme(), Theme::Light);
    }

    struct BrokenStore;

    impl PreferenceStore for BrokenStore {
        fn load(&self) -> Option<Theme> {
            None
        }

        fn save(&self, _theme: Theme) -> Result<(), SiteError> {
            Err(SiteError::StorageUnavailable)
        }
    }

    #[test]
    fn failed_save_still_toggles_for_session() {
        let mut store = ThemeStore::load(Rc::new(BrokenStore), None);
        assert_eq!(store.toggle(), Theme::Dark);
        assert_eq!(store.theme(), Theme::Dark);
        assert_eq!(store.toggle(), Theme::Light);
    }

    #[test]
    fn initial_theme_applied_during_load() {
        let prefs = memory();
        prefs.save(Theme::Dark).unwrap();

        let applied = RefCell::new(None);
        let store = ThemeStore::load_applied(prefs, Some(false), |theme| {
            *applied.borrow_mut() = Some(theme);
            Ok(())
        });

        assert_eq!(*applied.borrow(), Some(Theme::Dark));
        assert_eq!(store.theme(), Theme::Dark);
    }

    #[test]
    fn failed_initial_apply_keeps_resolved_theme() {
        let store = ThemeStore::load_applied(memory(), Some(true), |_| Err(SiteError::NoDocument));
        assert_eq!(store.theme(), Theme::Dark);
    }

    #[test]
    fn menu_follows_hover() {
        let menu = Rc::new(MenuState::default());
        let menu = menu.reduce(MenuAction::Enter);
        assert!(menu.open);
        let menu = menu.reduce(MenuAction::Leave);
        assert!(!menu.open);
    }

    #[test]
    fn repeated_hover_keeps_same_state() {
        let open = Rc::new(MenuState::default()).reduce(MenuAction::Enter);
        let again = open.clone().reduce(MenuAction::Enter);
        assert!(Rc::ptr_eq(&open, &again));
    }
}

//! the active theme, shared between whoever shows it and whoever changes it
use {
    crate::{
        error::{Result, ThemeError},
        theme::{GenerateOptions, Theme, generator::ThemeGenerator},
    },
    rand::Rng,
    std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard},
    tracing::debug,
};

/// somewhere the current theme lives
pub trait ThemeStore: Send + Sync {
    /// a copy of the current theme, if one was set
    fn current(&self) -> Result<Option<Theme>>;

    /// replace the current theme
    fn replace(&self, theme: Theme) -> Result<()>;

    /// regenerate the current theme (or make one) from `rng` and return a copy of it
    fn randomize<R: Rng + ?Sized>(
        &self,
        generator: &ThemeGenerator,
        rng: &mut R,
    ) -> Result<Theme>;
}

/// what [`ActiveTheme`] guards
#[derive(Debug, Default)]
struct ActiveState {
    /// the theme being shown
    theme: Option<Theme>,
    /// changed since the last [`ActiveTheme::mark_saved`]
    is_modified: bool,
}

/// an in-memory [`ThemeStore`], last writer wins
#[derive(Debug, Default)]
pub struct ActiveTheme {
    /// the guarded state
    state: RwLock<ActiveState>,
}

/// turn a poisoned lock into a [`ThemeError`]
fn poisoned<T>(e: PoisonError<T>) -> ThemeError {
    ThemeError::LockPoisoned(e.to_string())
}

impl ActiveTheme {
    /// an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// a store holding `theme`, not marked as modified
    pub fn with_theme(theme: Theme) -> Self {
        Self {
            state: RwLock::new(ActiveState {
                theme: Some(theme),
                is_modified: false,
            }),
        }
    }

    /// get a ro ref to the state
    fn read(&self) -> Result<RwLockReadGuard<'_, ActiveState>> {
        self.state.read().map_err(poisoned)
    }

    /// get a rw ref to the state
    fn write(&self) -> Result<RwLockWriteGuard<'_, ActiveState>> {
        self.state.write().map_err(poisoned)
    }

    /// whether the theme changed since it was last saved
    pub fn is_modified(&self) -> Result<bool> {
        Ok(self.read()?.is_modified)
    }

    /// clear the modified flag
    pub fn mark_saved(&self) -> Result<()> {
        self.write()?.is_modified = false;
        Ok(())
    }

    /// take the theme out of the store, leaving it empty
    pub fn take(&self) -> Result<Option<Theme>> {
        let mut state = self.write()?;
        state.is_modified = state.theme.is_some();
        Ok(state.theme.take())
    }
}

impl ThemeStore for ActiveTheme {
    fn current(&self) -> Result<Option<Theme>> {
        Ok(self.read()?.theme.clone())
    }

    fn replace(&self, theme: Theme) -> Result<()> {
        let mut state = self.write()?;
        debug!(name = %theme.name, "replacing active theme");

        state.theme = Some(theme);
        state.is_modified = true;
        Ok(())
    }

    fn randomize<R: Rng + ?Sized>(
        &self,
        generator: &ThemeGenerator,
        rng: &mut R,
    ) -> Result<Theme> {
        let mut state = self.write()?;

        let theme = match state.theme.as_mut() {
            Some(theme) => generator.randomize_in_place(theme, rng).clone(),
            None => {
                let theme = generator.generate(&GenerateOptions::default(), rng);
                state.theme = Some(theme.clone());
                theme
            }
        };

        state.is_modified = true;
        debug!(name = %theme.name, id = %theme.id, "randomized active theme");

        Ok(theme)
    }
}

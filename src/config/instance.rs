//! the process-wide config
use {
    crate::config::options::ThemegenCfg,
    color_eyre::{Result, eyre::eyre},
    std::sync::{LazyLock, OnceLock},
};

/// the config installed by [`install`]
static INSTALLED: OnceLock<ThemegenCfg> = OnceLock::new();

/// what [`config`] hands out before anything is installed
static DEFAULTS: LazyLock<ThemegenCfg> = LazyLock::new(ThemegenCfg::default);

/// make `cfg` the process-wide config
///
/// loading is left to the caller, so nothing is read from disk here.
///
/// # Errors
///
/// returns an error if a config was already installed
pub fn install(cfg: ThemegenCfg) -> Result<&'static ThemegenCfg> {
    INSTALLED
        .set(cfg)
        .map_err(|_| eyre!("a configuration is already installed"))?;
    Ok(config())
}

/// the installed config, or the built-in defaults when none was installed
pub fn config() -> &'static ThemegenCfg {
    INSTALLED.get().unwrap_or(&DEFAULTS)
}

/// read one setting, falling back to its built-in default and then to `T::default()`
pub fn get_or_default<T, F>(getter: F) -> T
where
    F: Fn(&ThemegenCfg) -> Option<T>,
    T: Default,
{
    getter(config())
        .or_else(|| getter(&DEFAULTS))
        .unwrap_or_default()
}

//! every available configuration option and its type is listed in this file
use {
    crate::{
        config::validate::{Validate, format_validation_errors},
        theme::{
            ThemeType,
            export::OutputFormat,
            generator::ThemeGenerator,
            naming::{DEFAULT_ADJECTIVES, DEFAULT_NOUNS, NameStrategy, WordLists},
        },
    },
    color_eyre::{
        Section, SectionExt,
        eyre::{Context, OptionExt, Result, eyre},
    },
    config::{Config, ConfigBuilder},
    schemars::JsonSchema,
    serde::{Deserialize, Serialize},
    smart_default::SmartDefault,
    std::path::{Path, PathBuf},
    tracing::info,
};

/// name of config files, both global and local
pub const CONFIG_FILE_NAME: &str = "themegen.toml";

/// prefix of environment overrides, e.g. `THEMEGEN_GENERATOR__THEME_TYPE=dark`
pub const ENV_PREFIX: &str = "THEMEGEN";

/// most themes a single run may generate
pub const MAX_COUNT: usize = 1000;

/// Settings for theme generation
#[derive(Serialize, Deserialize, Clone, Debug, JsonSchema, SmartDefault)]
#[schemars(default)]
pub struct GeneratorCfg {
    /// Which variant to generate (light, dark or random)
    #[default(Some(ThemeType::Random))]
    pub theme_type: Option<ThemeType>,

    /// How to name generated themes (adjective-noun, uuid or timestamp)
    #[default(Some(NameStrategy::AdjectiveNoun))]
    pub name_strategy: Option<NameStrategy>,

    /// Nudge backgrounds until their text reaches the contrast target.
    /// When off, the best available text color is used and a warning is logged
    #[default(Some(true))]
    pub enforce_contrast: Option<bool>,

    /// Seed for reproducible output, leave unset for a fresh theme every run
    #[default(None)]
    pub seed: Option<u64>,
}

/// Word lists for adjective-noun names
#[derive(Serialize, Deserialize, Clone, Debug, JsonSchema, SmartDefault)]
#[schemars(default)]
pub struct NamingCfg {
    /// First words of generated names
    #[default(Some(DEFAULT_ADJECTIVES.iter().map(|s| s.to_string()).collect()))]
    pub adjectives: Option<Vec<String>>,

    /// Second words of generated names
    #[default(Some(DEFAULT_NOUNS.iter().map(|s| s.to_string()).collect()))]
    pub nouns: Option<Vec<String>>,
}

/// Settings for printing themes
#[derive(Serialize, Deserialize, Clone, Debug, JsonSchema, SmartDefault)]
#[schemars(default)]
pub struct OutputCfg {
    /// Output format (json, toml, css or daisyui)
    #[default(Some(OutputFormat::Json))]
    pub format: Option<OutputFormat>,

    /// How many themes to generate per run
    #[schemars(range(min = 1, max = 1000))]
    #[default(Some(1))]
    pub count: Option<usize>,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, JsonSchema, SmartDefault)]
#[serde(rename_all = "lowercase")]
/// The format to log in
pub enum LoggingFormat {
    /// Use the compact output format
    #[default]
    Compact,

    /// Use the multi-line pretty output format
    Pretty,
}

/// Settings for logging
#[derive(Serialize, Deserialize, Clone, Debug, JsonSchema, SmartDefault)]
#[schemars(default)]
pub struct LoggingConfig {
    /// Enable logging
    #[default(Some(true))]
    pub enable: Option<bool>,

    /// The max level to log at
    #[default(Some("warn".to_string()))]
    pub level: Option<String>,

    /// Log line layout
    #[default(Some(LoggingFormat::Compact))]
    pub format: Option<LoggingFormat>,

    /// Enable ANSI escape codes for colors
    #[default(Some(true))]
    pub ansi: Option<bool>,

    /// Display event targets in log messages
    #[default(Some(false))]
    pub event_targets: Option<bool>,

    /// Display line numbers in log messages
    #[default(Some(false))]
    pub line_numbers: Option<bool>,
}

/// The themegen config
#[derive(Serialize, Deserialize, Clone, Debug, JsonSchema, SmartDefault)]
#[schemars(default)]
pub struct ThemegenCfg {
    /// Generation settings
    #[default(Some(GeneratorCfg::default()))]
    pub generator: Option<GeneratorCfg>,

    /// Name word lists
    #[default(Some(NamingCfg::default()))]
    pub naming: Option<NamingCfg>,

    /// Output settings
    #[default(Some(OutputCfg::default()))]
    pub output: Option<OutputCfg>,

    /// Logging settings
    #[default(Some(LoggingConfig::default()))]
    pub logging: Option<LoggingConfig>,
}

impl ThemegenCfg {
    /// load config from default locations
    ///
    /// load prio: env > local > global > defaults
    pub fn load() -> Result<Self> {
        let global_config_path = Self::global_config_path()?;
        let defaults = Self::load_defaults()?;
        let mut builder = Self::create_builder(&defaults)?;

        builder = builder.add_source(config::File::from(global_config_path.clone()).required(false));

        if let Some(local_config) = Self::find_local_config()? {
            info!(path = %local_config.display(), "using local config");
            builder = builder.add_source(config::File::from(local_config).required(false));
        }

        builder = builder.add_source(Self::env_source());

        let cfg = Self::finish(builder)?;

        if !global_config_path.exists() {
            Self::create_default_config(&global_config_path, &defaults)?;
        }

        Ok(cfg)
    }

    /// load config from a single file layered over the defaults, ignoring the global and local
    /// config files
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let defaults = Self::load_defaults()?;
        let builder = Self::create_builder(&defaults)?
            .add_source(config::File::from(path.to_path_buf()).required(true));

        Self::finish(builder)
            .with_section(|| path.display().to_string().header("Config file:"))
    }

    /// build, deserialize and validate
    fn finish(builder: ConfigBuilder<config::builder::DefaultState>) -> Result<Self> {
        let settings = builder.build().wrap_err("Failed to build configuration")?;
        let cfg: ThemegenCfg = settings
            .try_deserialize()
            .wrap_err("Failed to deserialize configuration")?;

        cfg.run_validation()?;
        info!("Configuration validation successful");

        Ok(cfg)
    }

    /// environment overrides, nested keys separated by `__`
    fn env_source() -> config::Environment {
        config::Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
    }

    /// get the global config file path
    pub fn global_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_eyre("Unable to determine system config directory")
            .suggestion("Ensure XDG_CONFIG_HOME or HOME environment variables are set")
            .suggestion("On Windows, APPDATA should be set")?;

        Ok(config_dir.join(CONFIG_FILE_NAME))
    }

    /// load default config from the embedded default config file
    fn load_defaults() -> Result<Self> {
        toml::from_str(include_str!("../../resources/themegen.default.toml"))
            .wrap_err("Failed to parse embedded default configuration")
            .note("This is a bug - the embedded defaults are malformed")
    }

    /// create a config builder with defaults
    fn create_builder(defaults: &ThemegenCfg) -> Result<ConfigBuilder<config::builder::DefaultState>> {
        let config_source = Config::try_from(defaults)
            .wrap_err("Failed to convert default config struct to config source")?;

        Ok(Config::builder().add_source(config_source))
    }

    /// run validation and return a pretty error if it fails
    fn run_validation(&self) -> Result<()> {
        self.validate()
            .map_err(|errors| eyre!(format_validation_errors(&errors)))
            .wrap_err("config validation failed")
            .suggestion("Check your themegen.toml for invalid values")
            .suggestion("Run `themegen --gen-default` to see valid options")
    }

    /// find the nearest local config file, walking up from the working directory
    fn find_local_config() -> Result<Option<PathBuf>> {
        let curr_dir = std::env::current_dir()
            .wrap_err("Failed to get current working directory")
            .suggestion("Ensure the current directory exists and is accessible")?;

        Ok(Self::find_config_in(&curr_dir))
    }

    /// the first `themegen.toml` in `dir` or one of its ancestors
    fn find_config_in(dir: &Path) -> Option<PathBuf> {
        dir.ancestors()
            .map(|ancestor| ancestor.join(CONFIG_FILE_NAME))
            .find(|path| path.exists())
    }

    /// create the default config file
    fn create_default_config(path: &Path, defaults: &ThemegenCfg) -> Result<()> {
        let config_dir = path
            .parent()
            .ok_or_eyre("Unable to determine parent directory of config path")?;

        std::fs::create_dir_all(config_dir)
            .wrap_err("Failed to create config directory")
            .with_section(|| format!("{}", config_dir.display()).header("Directory:"))?;

        defaults
            .save_to_file(path)
            .wrap_err("Failed to write default configuration file")?;

        Ok(())
    }

    /// save config to a file
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let toml_str =
            toml::to_string_pretty(self).wrap_err("Failed to serialize config to TOML")?;

        std::fs::write(path, &toml_str)
            .wrap_err_with(|| format!("Failed to write config file: {}", path.display()))
            .with_section(|| path.display().to_string().header("File path"))
            .with_section(|| format!("{} bytes", toml_str.len()).header("Content size:"))?;

        Ok(())
    }

    /// the generator section, or its defaults
    pub fn generator(&self) -> GeneratorCfg {
        self.generator.clone().unwrap_or_default()
    }

    /// the word lists from the naming section, blanks falling back to the defaults
    pub fn word_lists(&self) -> WordLists {
        let naming = self.naming.clone().unwrap_or_default();
        WordLists::new(
            naming.adjectives.unwrap_or_default(),
            naming.nouns.unwrap_or_default(),
        )
    }
}

impl ThemeGenerator {
    /// make a generator from the loaded config
    pub fn from_config(cfg: &ThemegenCfg) -> Self {
        let enforce_contrast = cfg.generator().enforce_contrast.unwrap_or(true);
        Self::new(cfg.word_lists(), enforce_contrast)
    }
}

#[cfg(test)]
mod tests {
    use {super::*, std::fs, tempfile::TempDir};

    #[test]
    fn test_defaults_validate() {
        assert!(ThemegenCfg::default().is_valid());
        assert!(ThemegenCfg::load_defaults().unwrap().is_valid());
    }

    #[test]
    fn test_embedded_defaults_match_struct_defaults() {
        let embedded = ThemegenCfg::load_defaults().unwrap();
        let defaults = ThemegenCfg::default();

        assert_eq!(
            toml::to_string(&embedded).unwrap(),
            toml::to_string(&defaults).unwrap()
        );
    }

    #[test]
    fn test_file_overrides_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(
            &path,
            "[generator]\ntheme_type = \"dark\"\nname_strategy = \"uuid\"\n\n[naming]\nnouns = [\"Otter\"]\n",
        )
        .unwrap();

        let cfg = ThemegenCfg::load_from(&path).unwrap();
        let generator = cfg.generator();

        assert_eq!(generator.theme_type, Some(ThemeType::Dark));
        assert_eq!(generator.name_strategy, Some(NameStrategy::Uuid));
        assert_eq!(generator.enforce_contrast, Some(true));
        assert_eq!(cfg.word_lists().nouns(), ["Otter".to_string()]);
        assert_eq!(cfg.word_lists().adjectives().len(), DEFAULT_ADJECTIVES.len());
    }

    #[test]
    fn test_invalid_file_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "[naming]\nadjectives = [\"not a word\"]\n").unwrap();

        let err = ThemegenCfg::load_from(&path).unwrap_err();
        assert!(format!("{err:?}").contains("adjectives"), "{err:?}");
    }

    #[test]
    fn test_save_then_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);

        let mut cfg = ThemegenCfg::default();
        if let Some(output) = cfg.output.as_mut() {
            output.format = Some(OutputFormat::Daisyui);
            output.count = Some(4);
        }
        cfg.save_to_file(&path).unwrap();

        let back = ThemegenCfg::load_from(&path).unwrap();
        let output = back.output.unwrap();
        assert_eq!(output.format, Some(OutputFormat::Daisyui));
        assert_eq!(output.count, Some(4));
    }

    #[test]
    fn test_local_config_lookup_walks_up() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("a").join("b");
        fs::create_dir_all(&nested).unwrap();

        assert_eq!(ThemegenCfg::find_config_in(&nested), None);

        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "").unwrap();
        assert_eq!(ThemegenCfg::find_config_in(&nested), Some(path));
    }

    #[test]
    fn test_generator_from_config() {
        let mut cfg = ThemegenCfg::default();
        if let Some(generator) = cfg.generator.as_mut() {
            generator.enforce_contrast = Some(false);
        }

        let generator = ThemeGenerator::from_config(&cfg);
        assert!(!generator.enforces_contrast());
        assert_eq!(generator.words(), &WordLists::default());
    }
}

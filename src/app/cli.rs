//! cli stuff
use {
    crate::{
        config::options::{MAX_COUNT, ThemegenCfg},
        theme::{
            GenerateOptions, Theme, ThemeType,
            export::OutputFormat,
            generator::ThemeGenerator,
            naming::NameStrategy,
        },
    },
    clap::{ArgAction, Parser},
    color_eyre::{
        Report, Section,
        eyre::{Result, ensure},
    },
    rand::{Rng, SeedableRng, rngs::StdRng},
    schemars::generate::SchemaSettings,
    std::{
        fs::OpenOptions,
        io::{BufWriter, Write},
        path::{Path, PathBuf},
    },
    tracing::info,
};

/// where `--gen-schema --save` writes to
const SCHEMA_PATH: &str = "resources/themegen.schema.json";

/// where `--gen-default --save` writes to
const DEFAULTS_PATH: &str = "resources/themegen.default.toml";

/// generate random daisyUI themes with readable text on every color
#[derive(Parser, Debug)]
#[command(name = "themegen", version, about)]
pub struct Cli {
    /// Which variant to generate
    #[arg(short = 't', long = "type", value_enum)]
    pub theme_type: Option<ThemeType>,

    /// How to name generated themes
    #[arg(short = 'n', long = "name", value_enum)]
    pub name_strategy: Option<NameStrategy>,

    /// How many themes to generate
    #[arg(short = 'c', long)]
    pub count: Option<usize>,

    /// Seed for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output format
    #[arg(short = 'f', long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Write themes to a file instead of stdout
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,

    /// Keep generated backgrounds as drawn, settling for the best available text color
    #[arg(long)]
    pub best_effort: bool,

    /// Read config from this file instead of the usual locations
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log more, repeat for even more
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Save instead of printing
    #[arg(long)]
    pub save: bool,

    /// Generate a JSON schemafile for the config
    #[arg(short = 's', long)]
    pub gen_schema: bool,

    /// Generate the default config file
    #[arg(short = 'd', long)]
    pub gen_default: bool,
}

/// everything a run needs, cli flags layered over the config
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSettings {
    /// per-theme options
    pub options: GenerateOptions,
    /// how many themes
    pub count: usize,
    /// how to print them
    pub format: OutputFormat,
    /// fixed seed, if any
    pub seed: Option<u64>,
    /// whether contrast is enforced
    pub enforce_contrast: bool,
}

impl Cli {
    /// run the CLI against a loaded config
    ///
    /// # Errors
    ///
    /// returns an error if it fails to generate and/or save the json schema
    /// returns an error if it fails to generate and/or save the default config
    /// returns an error if the settings are invalid or the output can't be written
    pub fn run(&self, cfg: &ThemegenCfg) -> Result<()> {
        if self.gen_schema || self.gen_default {
            if self.gen_schema {
                Self::gen_schema(self.save)?;
            }

            if self.gen_default {
                Self::gen_defaults(self.save)?;
            }

            return Ok(());
        }

        let rendered = self.render(cfg)?;

        match &self.output {
            Some(path) => {
                Self::write_to_file(path, &rendered)?;
                info!(path = %path.display(), "wrote themes");
            }
            None => println!("{}", rendered.trim_end()),
        }

        Ok(())
    }

    /// layer the flags over `cfg`
    ///
    /// # Errors
    ///
    /// returns an error if the theme count is out of range
    pub fn settings(&self, cfg: &ThemegenCfg) -> Result<RunSettings> {
        let generator = cfg.generator();
        let output = cfg.output.clone().unwrap_or_default();

        let count = self.count.or(output.count).unwrap_or(1);
        ensure!(
            (1..=MAX_COUNT).contains(&count),
            "theme count must be between 1 and {MAX_COUNT}, got {count}"
        );

        Ok(RunSettings {
            options: GenerateOptions::new(
                self.theme_type.or(generator.theme_type).unwrap_or_default(),
                self.name_strategy
                    .or(generator.name_strategy)
                    .unwrap_or_default(),
            ),
            count,
            format: self.format.or(output.format).unwrap_or_default(),
            seed: self.seed.or(generator.seed),
            enforce_contrast: !self.best_effort && generator.enforce_contrast.unwrap_or(true),
        })
    }

    /// generate and render themes as configured
    ///
    /// # Errors
    ///
    /// returns an error if the settings are invalid or rendering fails
    pub fn render(&self, cfg: &ThemegenCfg) -> Result<String> {
        let settings = self.settings(cfg)?;
        let generator = ThemeGenerator::new(cfg.word_lists(), settings.enforce_contrast);

        info!(
            count = settings.count,
            theme_type = ?settings.options.theme_type,
            name = %settings.options.name_strategy,
            seed = ?settings.seed,
            "generating themes"
        );

        let themes = match settings.seed {
            Some(seed) => generate_many(&generator, &settings, &mut StdRng::seed_from_u64(seed)),
            None => generate_many(&generator, &settings, &mut rand::rng()),
        };

        settings
            .format
            .render(&themes)
            .map_err(Report::new)
            .suggestion("try another --format")
    }

    /// save a string to a file
    ///
    /// # Errors
    ///
    /// returns an error if it fails to open or write `path`
    pub fn write_to_file(path: impl AsRef<Path>, contents: &str) -> Result<()> {
        let file = OpenOptions::new()
            .write(true)
            .truncate(true)
            .create(true)
            .open(path)?;
        let mut w = BufWriter::new(file);
        w.write_all(contents.as_bytes()).map_err(Report::new)
    }

    /// generate/save the config schema
    ///
    /// # Errors
    ///
    /// returns an error if it fails to convert the schema to a JSON string
    /// returns an error if it fails to save the schema to `resources/themegen.schema.json`
    pub fn gen_schema(save: bool) -> Result<()> {
        let schema_str = Self::schema()?;

        if save {
            Self::write_to_file(SCHEMA_PATH, &schema_str)?;
        } else {
            println!("{}", schema_str);
        }

        Ok(())
    }

    /// the config schema as pretty JSON
    fn schema() -> Result<String> {
        let settings = SchemaSettings::draft2020_12().for_serialize();
        let generator = settings.into_generator();
        let schema = generator.into_root_schema_for::<ThemegenCfg>();
        Ok(serde_json::to_string_pretty(&schema)?)
    }

    /// generate/save the default config file
    ///
    /// # Errors
    ///
    /// returns an error if it fails to convert the default config to TOML
    /// returns an error if it fails to save the default config to `resources/themegen.default.toml`
    pub fn gen_defaults(save: bool) -> Result<()> {
        let defaults = toml::to_string_pretty(&ThemegenCfg::default())?;

        if save {
            Self::write_to_file(DEFAULTS_PATH, &defaults)?;
        } else {
            println!("{}", defaults);
        }

        Ok(())
    }
}

/// generate `settings.count` themes from one random source
fn generate_many<R: Rng + ?Sized>(
    generator: &ThemeGenerator,
    settings: &RunSettings,
    rng: &mut R,
) -> Vec<Theme> {
    (0..settings.count)
        .map(|_| generator.generate(&settings.options, rng))
        .collect()
}

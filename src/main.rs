use {
    clap::Parser,
    color_eyre::eyre::{Context, Result},
    themegen::{
        app::{Cli, logging},
        config::{ThemegenCfg, instance::install},
    },
};

fn main() -> Result<()> {
    color_eyre::install()?;

    let argv = Cli::parse();

    let cfg = match &argv.config {
        Some(path) => ThemegenCfg::load_from(path).wrap_err("Failed to load --config file")?,
        None => ThemegenCfg::load().wrap_err("Failed to load configuration")?,
    };
    let cfg = install(cfg)?;

    logging::setup(argv.verbose)?;

    argv.run(cfg)
}

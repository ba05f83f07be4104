use anyhow::Context;
use clap::Parser;
use dualcount::config::{Config, Variant};
use dualcount::logging::init_tracing;
use dualcount::ui::component::Props;
use dualcount::ui::runtime;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "dualcount",
    version,
    about = "Class-style and function-style counters side by side"
)]
struct Cli {
    /// Config file (default: <config dir>/dualcount/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Component to mount; repeat to mount several, left to right
    #[arg(long = "variant", value_enum, value_name = "VARIANT")]
    variants: Vec<Variant>,

    /// JSON value passed to every component as props
    #[arg(long, value_name = "JSON", value_parser = parse_props)]
    props: Option<Props>,
}

fn parse_props(raw: &str) -> Result<Props, String> {
    serde_json::from_str(raw).map_err(|err| format!("invalid JSON: {err}"))
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let config = load_config(cli)?;
    runtime::run(&config).context("terminal UI failed")
}

fn load_config(cli: Cli) -> anyhow::Result<Config> {
    let path = cli.config.unwrap_or_else(Config::config_path);
    let mut config = Config::load_from(&path)
        .with_context(|| format!("failed to load config from {}", path.display()))?;

    if !cli.variants.is_empty() {
        config.ui.variants = cli.variants;
    }
    if let Some(props) = cli.props {
        config.props = props;
    }
    Ok(config)
}

//! EdgeStack Synth - distribution plan synthesizer.
//!
//! This binary reads a JSON site configuration, builds the distribution plan
//! through `edgestack-core`, and writes the synthesized template JSON to
//! stdout or a file. The template is consumed by an external provisioning
//! engine; nothing is deployed from here.
//!
//! # Usage
//!
//! ```text
//! edgestack-synth site.json --output template.json
//! ```
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `EDGESTACK_CONFIG` | *(unset)* | Config path used when no positional argument is given |
//! | `LOG_LEVEL` | `info` | Log level filter |
//! | `RUST_LOG` | *(unset)* | Fine-grained tracing filter (overrides `LOG_LEVEL`) |

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use edgestack_core::{SiteConfig, build_plan};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Version reported at startup.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Parsed command line.
#[derive(Debug, Default, PartialEq, Eq)]
struct CliArgs {
    /// Path to the site configuration file.
    config: Option<PathBuf>,
    /// Where the synthesized template is written; stdout when unset.
    output: Option<PathBuf>,
}

/// Parse the command line (without the program name).
fn parse_args(args: impl IntoIterator<Item = String>) -> Result<CliArgs> {
    let mut parsed = CliArgs::default();
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--output" | "-o" => {
                let path = args.next().context("--output requires a path")?;
                parsed.output = Some(PathBuf::from(path));
            }
            _ if arg.starts_with('-') => bail!("unknown flag: {arg}"),
            _ if parsed.config.is_none() => parsed.config = Some(PathBuf::from(arg)),
            _ => bail!("unexpected argument: {arg}"),
        }
    }
    Ok(parsed)
}

/// Initialize the tracing subscriber.
///
/// Uses `RUST_LOG` if set, otherwise falls back to `LOG_LEVEL`.
fn init_tracing() -> Result<()> {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        let level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_owned());
        EnvFilter::try_new(&level).with_context(|| format!("invalid log level filter: {level}"))?
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();

    Ok(())
}

/// Load and parse the site configuration.
fn load_config(path: &Path) -> Result<SiteConfig> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("cannot read config file {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("invalid site configuration in {}", path.display()))
}

fn main() -> Result<()> {
    init_tracing()?;

    let args = parse_args(std::env::args().skip(1))?;
    let config_path = args
        .config
        .or_else(|| std::env::var("EDGESTACK_CONFIG").ok().map(PathBuf::from))
        .context("no config file given (pass a path or set EDGESTACK_CONFIG)")?;

    let config = load_config(&config_path)?;

    info!(
        config = %config_path.display(),
        envname = %config.envname,
        version = VERSION,
        "building distribution plan",
    );

    let plan = build_plan(&config).context("failed to build distribution plan")?;
    let rendered =
        serde_json::to_string_pretty(&plan.template).context("failed to serialize template")?;

    match &args.output {
        Some(path) => {
            fs::write(path, rendered)
                .with_context(|| format!("cannot write template to {}", path.display()))?;
            info!(
                output = %path.display(),
                resources = plan.template.len(),
                "template written",
            );
        }
        None => println!("{rendered}"),
    }

    Ok(())
}

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use test_hierarchy::codec::{self, Format};
use test_hierarchy::config::{get_config_path, Config};
use test_hierarchy::models::*;
use test_hierarchy::{audit, render};

#[derive(Parser)]
#[command(name = "thier")]
#[command(about = "Inspect and normalise test plan hierarchies")]
struct Cli {
    /// Config file (defaults to $TEST_HIERARCHY_CONFIG, then the user config dir)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a hierarchy file as a tree
    Show {
        file: PathBuf,

        /// Hide `#id` suffixes
        #[arg(long)]
        no_ids: bool,
    },
    /// Report ids repeated among siblings
    Check {
        file: PathBuf,

        /// Fail if any duplicate is found
        #[arg(long)]
        deny_duplicates: bool,
    },
    /// Re-encode a hierarchy file, keeping child order
    Fmt {
        file: PathBuf,

        /// Write single-line JSON
        #[arg(long)]
        compact: bool,

        /// Write to this path instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Write a default config file to the resolved config path
    InitConfig {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Print the JSON Schema of a record kind
    Schema {
        #[arg(long, value_enum, default_value_t = Entity::Hierarchy)]
        entity: Entity,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Entity {
    Hierarchy,
    TestPlan,
    Functionality,
    Scenario,
    Step,
}

/// Initialize tracing with output to stderr so stdout carries command output
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "test_hierarchy=info,thier=info".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn load_model(file: &Path) -> anyhow::Result<HierarchyModel> {
    codec::read_file(file).with_context(|| format!("Failed to load {}", file.display()))
}

/// Log every duplicate sibling id and fail if `deny` is set and any exist.
/// Returns the number of duplicates found.
fn check_model(model: &HierarchyModel, label: &str, deny: bool) -> anyhow::Result<usize> {
    let duplicates = audit::duplicate_sibling_ids(model);

    for duplicate in &duplicates {
        tracing::warn!("{}", duplicate);
    }

    if duplicates.is_empty() {
        tracing::info!("{}: no duplicate sibling ids", label);
    } else if deny {
        anyhow::bail!("{}: {} duplicate sibling id(s)", label, duplicates.len());
    }

    Ok(duplicates.len())
}

fn output_format(compact: bool, config: &Config) -> Format {
    if compact || !config.pretty {
        Format::Compact
    } else {
        Format::Pretty
    }
}

fn init_config(path: &Path, force: bool) -> anyhow::Result<()> {
    if path.exists() && !force {
        anyhow::bail!(
            "{} already exists (use --force to overwrite)",
            path.display()
        );
    }
    Config::default().save_to(path)?;
    tracing::info!("Wrote default config to {}", path.display());
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let config = Config::load(cli.config.as_deref());
    tracing::debug!(?config, "Loaded configuration");

    match cli.command {
        Commands::Show { file, no_ids } => {
            let model = load_model(&file)?;
            let options = render::RenderOptions {
                show_ids: config.show_ids && !no_ids,
            };
            print!("{}", render::render_model(&model, &options));
        }
        Commands::Check {
            file,
            deny_duplicates,
        } => {
            let model = load_model(&file)?;
            check_model(
                &model,
                &file.display().to_string(),
                deny_duplicates || config.deny_duplicate_ids,
            )?;
        }
        Commands::Fmt {
            file,
            compact,
            output,
        } => {
            let model = load_model(&file)?;
            let format = output_format(compact, &config);

            match output {
                Some(path) => {
                    codec::write_file(&path, &model, format)?;
                    tracing::info!("Wrote {}", path.display());
                }
                None => println!("{}", codec::to_json(&model, format)?),
            }
        }
        Commands::InitConfig { force } => {
            let path = match cli.config {
                Some(path) => path,
                None => get_config_path()?,
            };
            init_config(&path, force)?;
        }
        Commands::Schema { entity } => {
            let schema = match entity {
                Entity::Hierarchy => schemars::schema_for!(HierarchyModel),
                Entity::TestPlan => schemars::schema_for!(TestPlan),
                Entity::Functionality => schemars::schema_for!(Functionality),
                Entity::Scenario => schemars::schema_for!(Scenario),
                Entity::Step => schemars::schema_for!(Step),
            };
            println!("{}", serde_json::to_string_pretty(&schema)?);
        }
    }

    Ok(())
}

//! Command line interface
//!
//! | Command | Description |
//! |---------|-------------|
//! | `tny config` | Print the effective configuration as TOML |
//! | `tny providers` | List registered cache providers |
//! | `tny demo <name> <new-name>` | Create, cache and rename a tenant, then report the cache state |

use clap::{Parser, Subcommand};
use std::fmt;
use std::path::PathBuf;
use tny_application::ports::registry::list_cache_providers;
use tny_domain::records::TenantConfiguration;
use tny_infrastructure::config::loader::to_toml;
use tny_infrastructure::{AppConfig, AppContext, ConfigLoader, init_app};

/// Command line interface for Tenantry
#[derive(Parser, Debug)]
#[command(name = "tny")]
#[command(about = "Tenantry - tenant definitions with cache invalidation on write")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Command to run
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print the effective configuration as TOML
    Config,
    /// List registered cache providers
    Providers,
    /// Create a tenant, cache its configuration and rename it
    Demo {
        /// Initial tenant name
        name: String,
        /// Name to rename the tenant to
        new_name: String,
    },
}

/// Outcome of the `demo` command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoReport {
    /// Id of the created tenant
    pub tenant_id: String,
    /// Cache key of the initial name
    pub old_key: String,
    /// Whether the old key was cached before the rename
    pub cached_before_rename: bool,
    /// Whether the old key was cached after the rename
    pub cached_after_rename: bool,
    /// Configuration served under the new name
    pub new_configuration: Option<TenantConfiguration>,
}

impl fmt::Display for DemoReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "tenant:           {}", self.tenant_id)?;
        writeln!(f, "old key:          {}", self.old_key)?;
        writeln!(f, "cached (before):  {}", self.cached_before_rename)?;
        writeln!(f, "cached (after):   {}", self.cached_after_rename)?;
        match &self.new_configuration {
            Some(configuration) => write!(
                f,
                "new key:          {} ({})",
                configuration.cache_key(),
                configuration.name()
            ),
            None => write!(f, "new key:          <missing>"),
        }
    }
}

/// Load configuration for the CLI
pub fn load_config(cli: &Cli) -> tny_domain::Result<AppConfig> {
    let mut loader = ConfigLoader::new();
    if let Some(path) = &cli.config {
        loader = loader.with_config_path(path);
    }
    loader.load()
}

/// Registered cache providers as printable lines
pub fn provider_lines() -> Vec<String> {
    list_cache_providers()
        .into_iter()
        .map(|(name, description)| format!("{name:<8} {description}"))
        .collect()
}

/// Create `name`, cache its configuration, rename it to `new_name` and
/// report what the cache holds afterwards
pub async fn run_demo(
    context: &AppContext,
    name: &str,
    new_name: &str,
) -> tny_domain::Result<DemoReport> {
    let service = context.tenant_service();
    let cache = context.tenant_manager().cache();
    let old_key = TenantConfiguration::calculate_cache_key(name);

    let tenant = service.create(name).await?;
    service.get_configuration(name).await?;
    let cached_before_rename = cache.exists(&old_key).await?;

    service.rename(tenant.id(), new_name).await?;
    let cached_after_rename = cache.exists(&old_key).await?;
    let new_configuration = service.get_configuration(new_name).await?;

    Ok(DemoReport {
        tenant_id: tenant.id().to_string(),
        old_key,
        cached_before_rename,
        cached_after_rename,
        new_configuration,
    })
}

/// Execute a parsed command line
pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = load_config(&cli)?;
    match cli.command {
        Command::Config => println!("{}", to_toml(&config)?),
        Command::Providers => {
            for line in provider_lines() {
                println!("{line}");
            }
        }
        Command::Demo { name, new_name } => {
            tny_infrastructure::logging::init_logging(&config.logging)?;
            let context = init_app(config)?;
            println!("{}", run_demo(&context, &name, &new_name).await?);
        }
    }
    Ok(())
}

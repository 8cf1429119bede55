use clap::{Parser, Subcommand};
use docsite_config::{config, output};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "docsite-config")]
#[command(about = "Load and validate documentation site configuration")]
#[command(long_about = "\
Load and validate documentation site configuration

Reads siteConfig.toml from the project root, applies DOCSITE_* environment
overrides, and validates the result. Any invalid field stops the load and is
reported with its path, e.g. `headerLinks[1].href`.

Environment overrides:

  DOCSITE_TITLE, DOCSITE_TAGLINE, DOCSITE_URL, DOCSITE_BASE_URL,
  DOCSITE_PROJECT_NAME, DOCSITE_ORGANIZATION_NAME, DOCSITE_EDIT_URL,
  DOCSITE_REPO_URL, DOCSITE_COPYRIGHT

Run 'docsite-config gen-config' to generate a documented siteConfig.toml.")]
#[command(version)]
struct Cli {
    /// Project root containing siteConfig.toml
    #[arg(long, default_value = ".", global = true)]
    root: PathBuf,

    /// Log loader details (same as RUST_LOG=debug)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Validate the configuration and print a summary
    Check,
    /// Print the resolved configuration as JSON
    Show,
    /// Print a stock siteConfig.toml with all options documented
    GenConfig,
    /// Print CSS custom properties for the configured colors and fonts
    Css,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Check => {
            let site = config::load_config(&cli.root, config::utf8_vars(std::env::vars_os()))?;
            output::print_check_output(&site, &cli.root.join(config::CONFIG_FILE_NAME));
            println!("==> Configuration is valid");
        }
        Command::Show => {
            let site = config::load_config(&cli.root, config::utf8_vars(std::env::vars_os()))?;
            println!("{}", serde_json::to_string_pretty(&site)?);
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
        Command::Css => {
            let site = config::load_config(&cli.root, config::utf8_vars(std::env::vars_os()))?;
            println!("{}", config::generate_color_css(site.colors()));
            if !site.fonts().is_empty() {
                println!("{}", config::generate_font_css(site.fonts()));
            }
        }
    }

    Ok(())
}

/// Install the stderr log subscriber.
///
/// `RUST_LOG` wins when set; otherwise `--verbose` picks debug, else warn.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

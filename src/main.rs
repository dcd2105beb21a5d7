use clap::Parser;
use pseo_gen::pipeline::{self, RunOptions};
use pseo_gen::{config, output};
use std::path::PathBuf;
use tracing::Level;

#[derive(Parser)]
#[command(name = "pseo-gen")]
#[command(version)]
#[command(about = "Programmatic SEO page generator for a PG listing site")]
#[command(long_about = "\
Programmatic SEO page generator for a PG listing site

Structured JSON content becomes static HTML pages, each linked to its most
relevant neighbours and checked against quality gates. Validation problems
are reported as warnings; pages are written regardless.

Project layout (paths configurable in pseo.toml):

  <root>/
  ├── pseo.toml                        # Optional config (stock defaults otherwise)
  ├── pseo/
  │   ├── data/
  │   │   ├── locations.json           # → pages/seo/pg-near-{id}.html
  │   │   ├── personas.json            # → pages/seo/{slug}.html
  │   │   ├── glossary.json            # → pages/seo/glossary/{slug}.html
  │   │   ├── comparisons.json         # → pages/seo/{slug}.html
  │   │   ├── curations.json           # → pages/seo/{slug}.html
  │   │   ├── colleges.json            # Lookup for location pages
  │   │   └── amenities.json           # Lookup for curation pages
  │   └── generated-pages-manifest.json
  ├── pages/seo/                       # Generated pages
  └── sitemap.xml

Run 'pseo-gen --print-config' for a documented pseo.toml.")]
struct Cli {
    /// Dry run: generate, link and validate, print every issue, write nothing
    #[arg(long)]
    validate: bool,

    /// Project root; relative paths in the config resolve against it
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// Config file [default: <root>/pseo.toml]
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print a stock pseo.toml with all options documented
    #[arg(long)]
    print_config: bool,

    /// More log output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.print_config {
        print!("{}", config::stock_config_toml());
        return Ok(());
    }

    init_logging(cli.verbose);

    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| cli.root.join(config::CONFIG_FILE));
    let site_config = config::load_config(&config_path)?;

    let options = RunOptions {
        dry_run: cli.validate,
        today: chrono::Local::now().date_naive(),
    };
    let report = pipeline::run(&site_config, &cli.root, options)?;
    output::print_run_output(&report);

    Ok(())
}

/// Install the stderr log subscriber. Verbosity comes from `-v` alone.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use kryon_site::app::domain::settings::CONFIG_FILE_NAME;
use kryon_site::app::services::tree;
use kryon_site::app::{
    AppConfig, ExportRuntime, Result, SiteController, SiteSettings, init_logging,
};

#[derive(Parser)]
#[command(name = "kryon-site")]
#[command(about = "Compose the Kryon website pages and hand them to a renderer")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Project config file
    #[arg(long, global = true, default_value = CONFIG_FILE_NAME)]
    config: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// List registered pages
    List,

    /// Print a page's tree as JSON
    Show {
        /// Page name, e.g. `index`
        page: String,
    },

    /// Export the selected pages for a renderer
    Build {
        /// Render target passed through to the runtime
        #[arg(short, long)]
        target: Option<String>,

        /// Directory the page files are written to
        #[arg(short, long)]
        out_dir: Option<PathBuf>,
    },

    /// Validate a previously exported page file
    Check {
        /// Exported `.json` page
        file: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let (settings, failure) = SiteSettings::load(&cli.config);
    init_logging(&settings.log_level);
    if let Some(e) = failure {
        tracing::warn!("Failed to load {}: {}. Using defaults.", cli.config.display(), e);
    }

    match run(cli.command, settings) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(command: Commands, mut settings: SiteSettings) -> Result<()> {
    match command {
        Commands::List => {
            let site = SiteController::new(settings);
            for page in site.pages() {
                let app = page.build()?;
                let stats = tree::stats(app.root());
                println!(
                    "{:<20} {:>4} nodes  depth {:<3} {}",
                    page.name,
                    stats.nodes,
                    stats.depth,
                    app.title().unwrap_or("-")
                );
            }
        }
        Commands::Show { page } => {
            let app = SiteController::new(settings).build(&page)?;
            println!("{}", app.to_json_pretty()?);
        }
        Commands::Build { target, out_dir } => {
            if let Some(target) = target {
                settings.target = target;
            }
            if let Some(out_dir) = out_dir {
                settings.output_dir = out_dir;
            }

            let options = settings.run_options();
            let runtime = ExportRuntime::new(settings.project_root.clone());
            let manifest = SiteController::new(settings).export(&runtime, &options)?;
            println!(
                "Exported {} page(s) to {}",
                manifest.pages.len(),
                options.output_dir.display()
            );
        }
        Commands::Check { file } => {
            let app = AppConfig::from_json(&fs::read_to_string(&file)?)?;
            let stats = tree::stats(app.root());
            println!(
                "{}: ok ({} nodes, {} links, {} markdown)",
                file.display(),
                stats.nodes,
                stats.links,
                stats.markdown
            );
        }
    }
    Ok(())
}

mod cmd;
mod display;
mod output;
mod prompt;
mod root;

use clap::{Parser, Subcommand};
use cmd::{
    config::ConfigSubcommand, create::CreateArgs, template::TemplateSubcommand, view::ViewFormat,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "prd-manager",
    about = "Create, view, edit, validate and export Product Requirements Documents",
    version,
    propagate_version = true
)]
struct Cli {
    /// Working root for relative paths and .prd/config.yaml (default: current directory)
    #[arg(long, global = true, env = "PRD_ROOT")]
    root: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new PRD document
    Create(CreateArgs),

    /// List PRD documents in a directory
    List {
        /// Directory to scan (default: root)
        dir: Option<PathBuf>,
    },

    /// View a PRD document
    View {
        file: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = ViewFormat::Pretty)]
        format: ViewFormat,

        /// Show a single section (header, overview, objectives, requirements,
        /// stories, timeline, technical, risks; table: requirements, stories,
        /// milestones, overview)
        #[arg(short, long)]
        section: Option<String>,
    },

    /// Edit a PRD document interactively
    Edit {
        file: PathBuf,

        /// Section to edit: basic, overview, objectives, requirements
        #[arg(short, long)]
        section: Option<String>,
    },

    /// Validate a PRD document
    Validate {
        file: PathBuf,

        /// Also report completeness warnings
        #[arg(long)]
        strict: bool,
    },

    /// Show PRD status and statistics
    Status { file: PathBuf },

    /// Export a PRD to Markdown or HTML
    Export {
        file: PathBuf,

        /// markdown or html (default: export.format from config)
        #[arg(short, long)]
        format: Option<String>,

        /// Output file (default: input path with .md / .html)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Manage PRD templates
    Template {
        #[command(subcommand)]
        subcommand: TemplateSubcommand,
    },

    /// Manage .prd/config.yaml
    Config {
        #[command(subcommand)]
        subcommand: ConfigSubcommand,
    },
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let root = root::resolve_root(cli.root.as_deref());

    let result = match cli.command {
        Commands::Create(args) => cmd::create::run(&root, args, cli.json),
        Commands::List { dir } => cmd::list::run(&root, dir.as_deref(), cli.json),
        Commands::View {
            file,
            format,
            section,
        } => cmd::view::run(&root, &file, format, section.as_deref(), cli.json),
        Commands::Edit { file, section } => {
            cmd::edit::run(&root, &file, section.as_deref(), cli.json)
        }
        Commands::Validate { file, strict } => cmd::validate::run(&root, &file, strict, cli.json),
        Commands::Status { file } => cmd::status::run(&root, &file, cli.json),
        Commands::Export {
            file,
            format,
            output,
        } => cmd::export::run(&root, &file, format.as_deref(), output.as_deref(), cli.json),
        Commands::Template { subcommand } => cmd::template::run(&root, subcommand, cli.json),
        Commands::Config { subcommand } => cmd::config::run(&root, subcommand, cli.json),
    };

    if let Err(e) = result {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

//! REAPER Knowledge Chat - keyword-driven Q&A over a static knowledge base.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use reaper_kb_chat::chat::ChatShell;
use reaper_kb_chat::config::ConfigLoader;
use reaper_kb_chat::display;
use reaper_kb_chat::kb::KnowledgeBaseService;
use reaper_kb_chat::render::render_section;
use reaper_kb_chat::resolver::Resolver;

#[derive(Parser)]
#[command(
    name = "reaper-kb-chat",
    about = "Ask questions about REAPER from a static knowledge base",
    version
)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short = 'v', long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Config file path (overrides the default search locations).
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive chat session.
    Chat,
    /// Ask a single question and print the reply.
    Ask {
        /// The question to resolve.
        question: String,
    },
    /// Print one knowledge-base section by dotted path (e.g. plugins.reaPlugs).
    Section {
        /// Dotted path to the section.
        path: String,
    },
}

fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let loader = match cli.config {
        Some(path) => ConfigLoader::with_path(path),
        None => ConfigLoader::new(),
    };
    let config = match loader.load() {
        Ok(config) => config,
        Err(e) => {
            display::print_error(&e.to_string());
            std::process::exit(1);
        }
    };

    let service = KnowledgeBaseService::new(config.kb_primary.clone(), config.kb_fallback.clone());
    let resolver = Resolver {
        max_search_results: config.max_search_results,
    };

    match cli.command {
        Commands::Chat => {
            let mut shell = ChatShell::new(&service, resolver);
            if let Err(e) = shell.run().await {
                display::print_error(&format!("Chat input failed: {e}"));
                std::process::exit(1);
            }
        }
        Commands::Ask { question } => {
            let doc = service.document().await;
            println!("{}", resolver.resolve(&question, doc));
        }
        Commands::Section { path } => match service.section(&path).await {
            Some(section) => println!("{}", render_section(section)),
            None => {
                display::print_error(&format!("No section at path '{path}'"));
                std::process::exit(1);
            }
        },
    }
}

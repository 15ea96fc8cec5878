use anyhow::Result;
use clap::{Parser, Subcommand};
use voies_paris::{districts, search, view};

#[derive(Parser)]
#[command(name = "voies-paris")]
#[command(about = "Browse the streets of Paris by arrondissement")]
#[command(version)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the voies of one arrondissement
    View(view::ViewArgs),
    /// Filter an arrondissement's voies live, one query per stdin line
    Search(search::SearchArgs),
    /// List the arrondissements and their page links
    Districts(districts::DistrictsArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        std::env::set_var("RUST_LOG", "debug");
    }

    match cli.command {
        Commands::View(args) => view::run(args),
        Commands::Search(args) => search::run(args),
        Commands::Districts(args) => districts::run(args),
    }
}

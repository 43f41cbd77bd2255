use clap::{Parser, Subcommand};

use shadegen_cli::cli;
use shadegen_cli::config::Config;
use shadegen_cli::error::Result;
use shadegen_cli::utils;

#[derive(Parser)]
#[command(name = "shadegen")]
#[command(about = "Command-line utility for generating design-system color scales and semantic tokens")]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Config file path (optional)
    #[arg(short, long)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a color between HEX, RGB and HSL representations
    Convert(cli::convert::ConvertArgs),

    /// Generate the 11-level shade scale for a base color
    Scale(cli::scale::ScaleArgs),

    /// Generate the semantic role palette for a base color
    Palette(cli::palette::PaletteArgs),

    /// Export the full design system (scales + semantic tokens)
    Export(cli::export::ExportArgs),

    /// Validate a HEX, RGB or HSL color string
    Validate(cli::validate::ValidateArgs),

    /// Show or change configuration
    Config(cli::config::ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    utils::logging::init_logging(cli.verbose).map_err(shadegen_cli::error::ShadeGenError::Internal)?;

    // Load configuration
    let config = Config::load(cli.config.as_deref())
        .map_err(shadegen_cli::error::ShadeGenError::Internal)?;

    match cli.command {
        Commands::Convert(args) => cli::convert::execute(args, &config),
        Commands::Scale(args) => cli::scale::execute(args, &config),
        Commands::Palette(args) => cli::palette::execute(args, &config),
        Commands::Export(args) => cli::export::execute(args, &config),
        Commands::Validate(args) => cli::validate::execute(args, &config),
        Commands::Config(args) => cli::config::execute(args, &config),
    }
}

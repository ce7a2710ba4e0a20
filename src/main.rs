use std::path::PathBuf;

use clap::Parser;

mod assemble;
mod config;

use assemble::Assembler;
use config::Config;

/// Assemble the configured source document into a single styled output page.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// The path to the configuration file (defaults to `docweld.yaml`)
    #[arg(short, long)]
    config_file: Option<PathBuf>,
}

fn main() -> Result<(), anyhow::Error> {
    let args = Args::parse();

    println!("Generating consolidated documentation...");

    let (config, base_path) = Config::load_from_arg(args.config_file.as_deref())?;

    let assembler = Assembler::new(config, base_path);
    let result = assembler.assemble()?;

    println!("Documentation generated successfully!");
    println!("  Output: {}", result.output_path.display());
    println!("  Size: {} characters", result.characters);
    println!("  Lines: {}", result.lines);

    Ok(())
}

// crates/glyphtint-cli/src/main.rs

use clap::{Parser, Subcommand};

mod cmd;

#[derive(Parser)]
#[command(name = "glyphtint")]
#[command(about = "Text-effect color-code tools", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Encode an effect triple into a color code
    Encode(cmd::encode::EncodeArgs),

    /// Decode a color code back into its effect triple
    Decode(cmd::decode::DecodeArgs),

    /// List the effect palette (id, name, param meaning)
    Effects(cmd::effects::EffectsArgs),

    /// Print every speed x param code for one base color and effect
    Sweep(cmd::sweep::SweepArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.cmd {
        Commands::Encode(args) => cmd::encode::run(args),
        Commands::Decode(args) => cmd::decode::run(args),
        Commands::Effects(args) => cmd::effects::run(args),
        Commands::Sweep(args) => cmd::sweep::run(args),
    }
}

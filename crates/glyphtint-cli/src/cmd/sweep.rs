// crates/glyphtint-cli/src/cmd/sweep.rs

use clap::Args;
use glyphtint_core::codec::encode::encode;
use glyphtint_core::color::Rgb;
use glyphtint_core::effect::TextEffect;

#[derive(Args, Debug)]
pub struct SweepArgs {
    /// Base color as #RRGGBB
    #[arg(long, short = 'c')]
    pub color: String,

    /// Effect name or id 0..=7
    #[arg(long, short = 'e')]
    pub effect: String,
}

pub fn run(args: SweepArgs) -> anyhow::Result<()> {
    let base = Rgb::parse_hex(&args.color)?;
    let effect = super::parse_effect(&args.effect)?;

    eprintln!("--- sweep ---");
    eprintln!("base    = {}", base.to_hex());
    eprintln!("effect  = {} (id {})", effect.name(), effect.id());

    // Rows are speed 1..=7, columns param 0..=7.
    print!("speed\\param");
    for param in 0u8..=7 {
        print!("  {param:>7}");
    }
    println!();
    for speed in 1u8..=7 {
        print!("{speed:>11}");
        for param in 0u8..=7 {
            let enc = encode(base, TextEffect::new(effect, speed, param));
            print!("  {}", enc.hex());
        }
        println!();
    }
    Ok(())
}

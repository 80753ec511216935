// crates/glyphtint-cli/src/cmd/encode.rs

use clap::Args;
use glyphtint_core::codec::encode::encode;
use glyphtint_core::color::Rgb;
use glyphtint_core::effect::TextEffect;

#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// Base color as #RRGGBB
    #[arg(long, short = 'c')]
    pub color: String,

    /// Effect name (wave, shake, ...) or id 0..=7
    #[arg(long, short = 'e')]
    pub effect: String,

    /// Animation rate, 1..=7 (saturates)
    #[arg(long, short = 's', default_value_t = 1)]
    pub speed: u8,

    /// Effect-specific value, 0..=7 (saturates)
    #[arg(long, short = 'p', default_value_t = 0)]
    pub param: u8,
}

pub fn run(args: EncodeArgs) -> anyhow::Result<()> {
    let base = Rgb::parse_hex(&args.color)?;
    let effect = super::parse_effect(&args.effect)?;
    let fx = TextEffect::new(effect, args.speed, args.param).clamped();
    let enc = encode(base, fx);

    eprintln!("--- encode ---");
    eprintln!("base    = {}", base.to_hex());
    eprintln!("effect  = {} (id {})", fx.effect.name(), fx.effect.id());
    eprintln!("speed   = {}", fx.speed);
    eprintln!("param   = {} ({})", fx.param, fx.effect.param_hint());
    let rgb = enc.rgb();
    eprintln!("rgb     = ({}, {}, {})", rgb.r, rgb.g, rgb.b);

    println!("{}", enc.hex());
    Ok(())
}

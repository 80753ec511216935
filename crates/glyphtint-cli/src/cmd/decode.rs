// crates/glyphtint-cli/src/cmd/decode.rs

use clap::Args;
use glyphtint_core::codec::decode::decode_text_effect;
use glyphtint_core::codec::sentinel::is_glyph_sentinel;
use glyphtint_core::color::Rgb;

#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// Color code as #RRGGBB
    #[arg(long)]
    pub code: String,
}

pub fn run(args: DecodeArgs) -> anyhow::Result<()> {
    let color = Rgb::parse_hex(&args.code)?;

    eprintln!("--- decode ---");
    eprintln!("code    = {}", color.to_hex());
    eprintln!("rgb     = ({}, {}, {})", color.r, color.g, color.b);

    match decode_text_effect(color) {
        Some(fx) => {
            println!("effect = {} (id {})", fx.effect.name(), fx.effect.id());
            println!("speed  = {}", fx.speed);
            println!("param  = {} ({})", fx.param, fx.effect.param_hint());
        }
        None => {
            if is_glyph_sentinel(color.r) {
                println!("no encoded data (reserved marker red {})", color.r);
            } else {
                println!("no encoded data");
            }
        }
    }
    Ok(())
}

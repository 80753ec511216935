// crates/glyphtint-cli/src/cmd/effects.rs

use clap::Args;
use glyphtint_core::effect::EffectKind;

#[derive(Args, Debug)]
pub struct EffectsArgs {}

pub fn run(_args: EffectsArgs) -> anyhow::Result<()> {
    println!("{:>2}  {:<8}  param", "id", "name");
    for e in EffectKind::ALL {
        println!("{:>2}  {:<8}  {}", e.id(), e.name(), e.param_hint());
    }
    Ok(())
}

use anyhow::Result;
use clap::Parser;
use lotus_icon_gen::icon_gen::{self, IconSet, Options};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[clap(
    name = "lotus-icon-gen",
    about = "Draw the lotus and zen circle icons for the meditation app"
)]
struct Args {
    /// Output directory.
    #[clap(short, long, value_name = "DIR", default_value = "./assets")]
    output: PathBuf,

    /// Icon set to draw.
    #[clap(long, value_enum, default_value_t = IconSet::Classic)]
    set: IconSet,

    /// The color of the lotus and zen circle (CSS color format)
    #[clap(long, default_value = "#ffffff")]
    glyph_color: String,

    /// Also write an icons.json manifest next to the icons
    #[clap(long)]
    manifest: bool,
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    icon_gen::generate_icons(&Options {
        output: args.output,
        set: args.set,
        glyph_color: args.glyph_color,
        manifest: args.manifest,
    })?;

    Ok(())
}

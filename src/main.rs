use std::path::Path;

use clap::Parser;
use env_logger::Env;
use notion2md::{Args, EXTRACT_DIR, convert_export};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    convert_export(&args.file, Path::new(EXTRACT_DIR))?;

    Ok(())
}

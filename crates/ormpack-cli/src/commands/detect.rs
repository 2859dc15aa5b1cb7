use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use ormpack_core::discover::find_pairs;

#[derive(Args)]
pub struct DetectArgs {
    /// Folder to scan for *_CS / *_NAM files
    pub folder: PathBuf,
}

pub fn run(args: &DetectArgs) -> Result<()> {
    let pairs = find_pairs(&args.folder)?;

    if pairs.is_empty() {
        println!("No complete CS/NAM pairs in {}", args.folder.display());
        return Ok(());
    }

    for pair in &pairs {
        println!("{}: (_CS and _NAM found)", pair.prefix);
    }
    println!("\n{} pair(s)", pairs.len());

    Ok(())
}

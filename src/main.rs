use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use table_icon_gen::{check_capabilities, generate_icons, GenerateOptions};

#[derive(Debug, Parser)]
#[clap(
    name = "table-icon-gen",
    about = "Generate the data scraper extension icons (16, 48 and 128 px)"
)]
struct Args {
    /// Output directory.
    #[clap(short, long, value_name = "DIR", default_value = "icons")]
    output: PathBuf,

    /// Also write manifest-icons.json with the extension manifest "icons" entry
    #[clap(long)]
    manifest: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    env_logger::init();
    log::debug!("{:?}", args);

    if let Err(err) = check_capabilities() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }

    let options = GenerateOptions {
        manifest: args.manifest,
    };
    let report = generate_icons(&args.output, &options)
        .with_context(|| format!("Can't generate icons in {}", args.output.display()))?;

    if !report.is_success() {
        anyhow::bail!(
            "{} of {} icons failed",
            report.failed.len(),
            report.failed.len() + report.generated.len()
        );
    }

    println!("\n✓ All icons generated in {}", args.output.display());
    Ok(())
}

use anyhow::Result;
use clap::Parser;
use exifshift_core::{
    apply_renames, print_skip_report, scan_for_rename, ExifToolSource, ScanOptions, SuffixMode,
    TimeOffset, SUFFIX_SENTINEL_NONE,
};
use log::debug;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "exifshift-rename")]
#[command(about = "Rename files based on EXIF dates")]
struct Cli {
    /// Path to the file or directory
    path: PathBuf,
    /// Appended before the extension; keeps the original name as suffix if empty
    #[arg(long, default_value = SUFFIX_SENTINEL_NONE)]
    suffix: String,
    /// Only process files containing this string
    #[arg(long, default_value = "")]
    filter: String,
    /// Time shift in hours
    #[arg(long = "timeShift", default_value_t = 0)]
    time_shift: i64,
    /// Show new names without renaming
    #[arg(long = "dryRun", default_value_t = false)]
    dry_run: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    debug!("parsed arguments: {cli:?}");

    let options = ScanOptions {
        suffix: SuffixMode::from_arg(&cli.suffix),
        filter: cli.filter,
        offset: TimeOffset::from_hours(cli.time_shift),
    };

    let mut source = ExifToolSource::new()?;
    let ledger = scan_for_rename(&cli.path, &options, &mut source)?;

    apply_renames(&ledger, cli.dry_run)?;
    print_skip_report(&ledger);
    Ok(())
}

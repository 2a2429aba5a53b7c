use anyhow::Result;
use clap::Parser;
use exifshift_core::{
    print_shift_summary, shift_path, ExifToolSource, TimeOffset, IMAGE_EXTENSIONS, PHOTO_DATE_TAGS,
};
use log::debug;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "exifshift-image")]
#[command(about = "Adjust EXIF dates of images by a specified time shift")]
struct Cli {
    /// Path to the file or directory
    path: PathBuf,
    /// Time shift in hours
    shift: i64,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    debug!("parsed arguments: {cli:?}");

    let mut source = ExifToolSource::new()?;
    let ledger = shift_path(
        &cli.path,
        PHOTO_DATE_TAGS,
        IMAGE_EXTENSIONS,
        TimeOffset::from_hours(cli.shift),
        &mut source,
    )?;

    print_shift_summary(&ledger);
    Ok(())
}

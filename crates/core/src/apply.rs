use crate::metadata::MetadataSource;
use crate::report::OutcomeLedger;
use crate::selector::{has_media_extension, list_directory};
use crate::shift::{shifted_tag_values, TimeOffset};
use crate::tags::DateTag;
use anyhow::{Context, Result};
use log::debug;
use std::fs;
use std::path::Path;

pub fn apply_renames(ledger: &OutcomeLedger, dry_run: bool) -> Result<()> {
    if dry_run {
        println!("DRY RUN: No files will be renamed");
    }

    println!("\nFiles renamed: {}:", ledger.processed().len());
    for entry in ledger.processed() {
        if dry_run {
            println!(
                "DRY RUN: File would be renamed {} -> {}",
                entry.path.display(),
                entry.outcome
            );
            continue;
        }

        let target = entry
            .path
            .parent()
            .unwrap_or_else(|| Path::new(""))
            .join(&entry.outcome);
        // No per-entry recovery here: a failing rename stops the batch.
        fs::rename(&entry.path, &target).with_context(|| {
            format!(
                "could not rename {} -> {}",
                entry.path.display(),
                target.display()
            )
        })?;
        println!("File renamed {} -> {}", entry.path.display(), entry.outcome);
    }

    Ok(())
}

pub fn shift_path(
    path: &Path,
    tags: &[DateTag],
    extensions: &[&str],
    offset: TimeOffset,
    source: &mut dyn MetadataSource,
) -> Result<OutcomeLedger> {
    let mut ledger = OutcomeLedger::default();

    if path.is_file() {
        if has_media_extension(path, extensions) {
            shift_file(path, tags, offset, source, &mut ledger);
        }
    } else if path.is_dir() {
        for entry in list_directory(path)? {
            if has_media_extension(&entry, extensions) {
                shift_file(&entry, tags, offset, source, &mut ledger);
            }
        }
    } else {
        println!("Path {} is not a file or directory", path.display());
        ledger.record_skip(path, "Path is not a file or directory");
    }

    Ok(ledger)
}

fn shift_file(
    path: &Path,
    tags: &[DateTag],
    offset: TimeOffset,
    source: &mut dyn MetadataSource,
    ledger: &mut OutcomeLedger,
) {
    println!("EXIF adjusting data for file {}", path.display());
    match rewrite_dates(path, tags, offset, source) {
        Ok(updated) => {
            println!("EXIF data adjusted for {}", path.display());
            ledger.record_processed(path, format!("{updated} date tags adjusted"));
        }
        Err(err) => {
            println!(
                "Failed to adjust EXIF data for {}: {err:#}",
                path.display()
            );
            ledger.record_skip(path, format!("Failed to adjust EXIF data: {err:#}"));
        }
    }
}

fn rewrite_dates(
    path: &Path,
    tags: &[DateTag],
    offset: TimeOffset,
    source: &mut dyn MetadataSource,
) -> Result<usize> {
    let record = source.read(path)?;
    debug!(
        "metadata record for {} has {} tags",
        path.display(),
        record.len()
    );

    let updates = shifted_tag_values(&record, tags, offset)?;
    for update in &updates {
        debug!("- new datetime: {} for key {}", update.value, update.tag.key());
    }

    if !updates.is_empty() {
        source.write(path, &updates)?;
    }
    Ok(updates.len())
}

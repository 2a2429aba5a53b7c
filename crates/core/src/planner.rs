use crate::metadata::MetadataSource;
use crate::naming::{build_new_name, SuffixMode};
use crate::report::OutcomeLedger;
use crate::selector::{has_media_extension, list_directory, MEDIA_EXTENSIONS};
use crate::shift::{timestamp_fragments, DateFragment, FragmentOrigin, TimeOffset};
use anyhow::Result;
use log::debug;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct ScanOptions {
    pub suffix: SuffixMode,
    pub filter: String,
    pub offset: TimeOffset,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            suffix: SuffixMode::DropOriginalName,
            filter: String::new(),
            offset: TimeOffset::default(),
        }
    }
}

pub fn scan_for_rename(
    path: &Path,
    options: &ScanOptions,
    source: &mut dyn MetadataSource,
) -> Result<OutcomeLedger> {
    let mut ledger = OutcomeLedger::default();

    if path.is_file() {
        scan_file(path, options, source, &mut ledger);
    } else if path.is_dir() {
        for entry in list_directory(path)? {
            scan_file(&entry, options, source, &mut ledger);
        }
    } else {
        ledger.record_skip(path, "Path is not a file or directory");
    }

    Ok(ledger)
}

fn scan_file(
    path: &Path,
    options: &ScanOptions,
    source: &mut dyn MetadataSource,
    ledger: &mut OutcomeLedger,
) {
    if !has_media_extension(path, MEDIA_EXTENSIONS) {
        ledger.record_skip(path, "Non-media file");
        return;
    }

    if !options.filter.is_empty() && !path.to_string_lossy().contains(&options.filter) {
        ledger.record_skip(
            path,
            format!("Does not contain filter {}", options.filter),
        );
        return;
    }

    match candidate_name(path, options, source) {
        Ok(Some(new_name)) => {
            println!("File will be renamed {} -> {}", basename(path), new_name);
            ledger.record_processed(path, new_name);
        }
        Ok(None) => ledger.record_skip(path, "No EXIF dates found"),
        Err(err) => ledger.record_skip(path, format!("Failed to read EXIF data: {err:#}")),
    }
}

fn candidate_name(
    path: &Path,
    options: &ScanOptions,
    source: &mut dyn MetadataSource,
) -> Result<Option<String>> {
    let record = source.read(path)?;
    let fragments = timestamp_fragments(&record, options.offset)?;
    debug!(
        "{} usable date fragments in {}",
        fragments.len(),
        path.display()
    );

    // Every fragment is announced; only the first one names the file.
    for fragment in &fragments {
        announce_fragment(fragment);
    }

    let Some(first) = fragments.first() else {
        return Ok(None);
    };
    Ok(Some(build_new_name(&first.value, path, &options.suffix)))
}

fn announce_fragment(fragment: &DateFragment) {
    match fragment.origin {
        FragmentOrigin::GpsPair => println!("- GPS date: {}", fragment.value),
        FragmentOrigin::Tag(tag) => {
            println!("- Date: {} for key {}", fragment.value, tag.key());
        }
    }
}

fn basename(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::testing::FakeSource;
    use crate::metadata::MetadataRecord;
    use std::fs;
    use tempfile::tempdir;

    fn dated_record(value: &str) -> MetadataRecord {
        let mut record = MetadataRecord::default();
        record.insert("EXIF:DateTimeOriginal", value);
        record
    }

    #[test]
    fn non_media_file_is_skipped_without_a_metadata_read() {
        let temp = tempdir().expect("tempdir");
        let notes = temp.path().join("notes.txt");
        fs::write(&notes, b"x").expect("write notes");

        let mut source = FakeSource::default();
        let ledger = scan_for_rename(&notes, &ScanOptions::default(), &mut source)
            .expect("scan should succeed");

        assert_eq!(source.reads, 0);
        assert!(ledger.processed().is_empty());
        assert_eq!(ledger.skipped()[0].reason, "Non-media file");
    }

    #[test]
    fn file_without_dates_lands_in_the_skip_ledger() {
        let temp = tempdir().expect("tempdir");
        let photo = temp.path().join("IMG_0001.jpg");
        fs::write(&photo, b"x").expect("write photo");

        let mut source = FakeSource::default().with_record(&photo, MetadataRecord::default());
        let ledger = scan_for_rename(&photo, &ScanOptions::default(), &mut source)
            .expect("scan should succeed");

        assert!(ledger.processed().is_empty());
        assert_eq!(ledger.skipped()[0].reason, "No EXIF dates found");
    }

    #[test]
    fn exif_date_wins_over_quicktime_date() {
        let temp = tempdir().expect("tempdir");
        let photo = temp.path().join("IMG_0001.JPG");
        fs::write(&photo, b"x").expect("write photo");

        let mut record = MetadataRecord::default();
        record.insert("QuickTime:CreateDate", "2020:01:01 00:00:00");
        record.insert("EXIF:DateTimeOriginal", "2023:01:01 12:00:00");

        let mut source = FakeSource::default().with_record(&photo, record);
        let ledger = scan_for_rename(&photo, &ScanOptions::default(), &mut source)
            .expect("scan should succeed");

        assert_eq!(ledger.processed()[0].outcome, "20230101_120000.jpg");
    }

    #[test]
    fn filter_mismatch_skips_before_any_read() {
        let temp = tempdir().expect("tempdir");
        let photo = temp.path().join("IMG_0001.jpg");
        fs::write(&photo, b"x").expect("write photo");

        let options = ScanOptions {
            filter: "holiday".to_string(),
            ..ScanOptions::default()
        };
        let mut source = FakeSource::default();
        let ledger =
            scan_for_rename(&photo, &options, &mut source).expect("scan should succeed");

        assert_eq!(source.reads, 0);
        assert_eq!(
            ledger.skipped()[0].reason,
            "Does not contain filter holiday"
        );
    }

    #[test]
    fn unreadable_metadata_becomes_a_skip_reason() {
        let temp = tempdir().expect("tempdir");
        let photo = temp.path().join("IMG_0001.jpg");
        fs::write(&photo, b"x").expect("write photo");

        let mut source = FakeSource::default();
        let ledger = scan_for_rename(&photo, &ScanOptions::default(), &mut source)
            .expect("scan should succeed");

        assert!(ledger.skipped()[0]
            .reason
            .starts_with("Failed to read EXIF data:"));
    }

    #[test]
    fn malformed_date_value_becomes_a_skip_reason() {
        let temp = tempdir().expect("tempdir");
        let photo = temp.path().join("IMG_0001.jpg");
        fs::write(&photo, b"x").expect("write photo");

        let mut source = FakeSource::default().with_record(&photo, dated_record("yesterday"));
        let ledger = scan_for_rename(&photo, &ScanOptions::default(), &mut source)
            .expect("scan should succeed");

        assert!(ledger.processed().is_empty());
        assert!(ledger.skipped()[0]
            .reason
            .starts_with("Failed to read EXIF data:"));
    }

    #[test]
    fn missing_path_is_recorded_not_fatal() {
        let temp = tempdir().expect("tempdir");
        let ghost = temp.path().join("ghost");

        let mut source = FakeSource::default();
        let ledger = scan_for_rename(&ghost, &ScanOptions::default(), &mut source)
            .expect("scan should succeed");

        assert_eq!(
            ledger.skipped()[0].reason,
            "Path is not a file or directory"
        );
    }

    #[test]
    fn directory_scan_partitions_entries_in_sorted_order() {
        let temp = tempdir().expect("tempdir");
        let first = temp.path().join("a.jpg");
        let second = temp.path().join("b.txt");
        let third = temp.path().join("c.jpg");
        for path in [&first, &second, &third] {
            fs::write(path, b"x").expect("write entry");
        }

        let mut source = FakeSource::default()
            .with_record(&first, dated_record("2023:01:01 12:00:00"))
            .with_record(&third, dated_record("2023:01:02 12:00:00"));
        let ledger = scan_for_rename(temp.path(), &ScanOptions::default(), &mut source)
            .expect("scan should succeed");

        let processed: Vec<_> = ledger
            .processed()
            .iter()
            .map(|entry| entry.path.clone())
            .collect();
        assert_eq!(processed, vec![first, third]);
        assert_eq!(ledger.skipped()[0].path, second);
        assert_eq!(ledger.skipped()[0].reason, "Non-media file");
    }

    #[test]
    fn time_shift_flows_into_the_planned_name() {
        let temp = tempdir().expect("tempdir");
        let photo = temp.path().join("IMG_0001.jpg");
        fs::write(&photo, b"x").expect("write photo");

        let options = ScanOptions {
            offset: TimeOffset::from_hours(2),
            suffix: SuffixMode::from_arg("_trip"),
            ..ScanOptions::default()
        };
        let mut source =
            FakeSource::default().with_record(&photo, dated_record("2023:01:31 23:30:00"));
        let ledger = scan_for_rename(&photo, &options, &mut source).expect("scan should succeed");

        assert_eq!(ledger.processed()[0].outcome, "20230201_013000_trip.jpg");
    }
}

mod apply;
mod metadata;
mod naming;
mod planner;
mod report;
mod selector;
mod shift;
mod tags;

pub use apply::{apply_renames, shift_path};
pub use metadata::{ExifToolSource, MetadataRecord, MetadataSource};
pub use naming::{build_new_name, SuffixMode, SUFFIX_SENTINEL_NONE};
pub use planner::{scan_for_rename, ScanOptions};
pub use report::{
    print_shift_summary, print_skip_report, OutcomeLedger, ProcessedEntry, SkipEntry,
};
pub use selector::{has_media_extension, list_directory, IMAGE_EXTENSIONS, MEDIA_EXTENSIONS};
pub use shift::{
    format_exif_datetime, format_fragment, parse_exif_datetime, shifted_tag_values,
    timestamp_fragments, DateFragment, FragmentOrigin, TagUpdate, TimeOffset, TimestampParseError,
    EXIF_DATETIME_FORMAT, FRAGMENT_FORMAT,
};
pub use tags::{DateTag, GPS_DATE_STAMP, GPS_TIME_STAMP, MEDIA_DATE_TAGS, PHOTO_DATE_TAGS};

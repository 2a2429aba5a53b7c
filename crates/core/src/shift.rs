use crate::metadata::MetadataRecord;
use crate::tags::{DateTag, GPS_DATE_STAMP, GPS_TIME_STAMP, MEDIA_DATE_TAGS};
use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const EXIF_DATETIME_FORMAT: &str = "%Y:%m:%d %H:%M:%S";
pub const FRAGMENT_FORMAT: &str = "%Y%m%d_%H%M%S";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid timestamp {value:?}, expected the YYYY:MM:DD HH:MM:SS form")]
pub struct TimestampParseError {
    pub value: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeOffset {
    delta: Duration,
}

impl Default for TimeOffset {
    fn default() -> Self {
        Self::from_hours(0)
    }
}

impl TimeOffset {
    pub fn from_hours(hours: i64) -> Self {
        Self {
            delta: Duration::hours(hours),
        }
    }

    pub fn as_duration(self) -> Duration {
        self.delta
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagUpdate {
    pub tag: DateTag,
    pub value: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FragmentOrigin {
    GpsPair,
    Tag(DateTag),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateFragment {
    pub origin: FragmentOrigin,
    pub value: String,
}

pub fn parse_exif_datetime(raw: &str) -> Result<NaiveDateTime, TimestampParseError> {
    NaiveDateTime::parse_from_str(raw, EXIF_DATETIME_FORMAT).map_err(|_| TimestampParseError {
        value: raw.to_string(),
    })
}

pub fn format_exif_datetime(datetime: NaiveDateTime) -> String {
    datetime.format(EXIF_DATETIME_FORMAT).to_string()
}

pub fn format_fragment(datetime: NaiveDateTime) -> String {
    datetime.format(FRAGMENT_FORMAT).to_string()
}

fn shift_raw_value(raw: &str, offset: TimeOffset) -> Result<NaiveDateTime, TimestampParseError> {
    Ok(parse_exif_datetime(raw)? + offset.as_duration())
}

pub fn shifted_tag_values(
    record: &MetadataRecord,
    tags: &[DateTag],
    offset: TimeOffset,
) -> Result<Vec<TagUpdate>, TimestampParseError> {
    let mut updates = Vec::new();
    for &tag in tags {
        if let Some(raw) = record.get_tag(tag) {
            let shifted = shift_raw_value(raw, offset)?;
            updates.push(TagUpdate {
                tag,
                value: format_exif_datetime(shifted),
            });
        }
    }
    Ok(updates)
}

pub fn timestamp_fragments(
    record: &MetadataRecord,
    offset: TimeOffset,
) -> Result<Vec<DateFragment>, TimestampParseError> {
    let mut fragments = Vec::new();

    // The GPS stamp is split across two tags; only the complete pair counts.
    if let (Some(date), Some(time)) = (record.get(GPS_DATE_STAMP), record.get(GPS_TIME_STAMP)) {
        let shifted = shift_raw_value(&format!("{date} {time}"), offset)?;
        fragments.push(DateFragment {
            origin: FragmentOrigin::GpsPair,
            value: format_fragment(shifted),
        });
    }

    for &tag in MEDIA_DATE_TAGS {
        if let Some(raw) = record.get_tag(tag) {
            let shifted = shift_raw_value(raw, offset)?;
            fragments.push(DateFragment {
                origin: FragmentOrigin::Tag(tag),
                value: format_fragment(shifted),
            });
        }
    }

    Ok(fragments)
}

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DateTag {
    DateTimeOriginal,
    DateTimeDigitized,
    QuickTimeCreateDate,
    QuickTimeModifyDate,
    QuickTimeTrackCreateDate,
    QuickTimeTrackModifyDate,
    TrackCreateDate,
    TrackModifyDate,
    CreationTime,
    CreateDate,
    ModifyDate,
    MediaCreateDate,
    MediaModifyDate,
}

impl DateTag {
    pub fn key(self) -> &'static str {
        match self {
            DateTag::DateTimeOriginal => "EXIF:DateTimeOriginal",
            DateTag::DateTimeDigitized => "EXIF:DateTimeDigitized",
            DateTag::QuickTimeCreateDate => "QuickTime:CreateDate",
            DateTag::QuickTimeModifyDate => "QuickTime:ModifyDate",
            DateTag::QuickTimeTrackCreateDate => "QuickTime:TrackCreateDate",
            DateTag::QuickTimeTrackModifyDate => "QuickTime:TrackModifyDate",
            DateTag::TrackCreateDate => "EXIF:TrackCreateDate",
            DateTag::TrackModifyDate => "EXIF:TrackModifyDate",
            DateTag::CreationTime => "EXIF:CreationTime",
            DateTag::CreateDate => "EXIF:CreateDate",
            DateTag::ModifyDate => "EXIF:ModifyDate",
            DateTag::MediaCreateDate => "EXIF:MediaCreateDate",
            DateTag::MediaModifyDate => "EXIF:MediaModifyDate",
        }
    }
}

impl fmt::Display for DateTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

pub const GPS_DATE_STAMP: &str = "GPS:GPSDateStamp";
pub const GPS_TIME_STAMP: &str = "GPS:GPSTimeStamp";

pub const PHOTO_DATE_TAGS: &[DateTag] = &[DateTag::DateTimeOriginal, DateTag::DateTimeDigitized];

// Lookup order decides which timestamp names a file; keep it fixed.
pub const MEDIA_DATE_TAGS: &[DateTag] = &[
    DateTag::DateTimeOriginal,
    DateTag::DateTimeDigitized,
    DateTag::QuickTimeCreateDate,
    DateTag::QuickTimeModifyDate,
    DateTag::QuickTimeTrackCreateDate,
    DateTag::QuickTimeTrackModifyDate,
    DateTag::TrackCreateDate,
    DateTag::TrackModifyDate,
    DateTag::CreationTime,
    DateTag::CreateDate,
    DateTag::ModifyDate,
    DateTag::MediaCreateDate,
    DateTag::MediaModifyDate,
];

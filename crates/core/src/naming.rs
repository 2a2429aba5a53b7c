use serde::{Deserialize, Serialize};
use std::path::Path;

pub const SUFFIX_SENTINEL_NONE: &str = "none";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SuffixMode {
    KeepOriginalName,
    DropOriginalName,
    Custom(String),
}

impl SuffixMode {
    pub fn from_arg(arg: &str) -> Self {
        match arg {
            "" => SuffixMode::KeepOriginalName,
            SUFFIX_SENTINEL_NONE => SuffixMode::DropOriginalName,
            other => SuffixMode::Custom(other.to_string()),
        }
    }
}

pub fn build_new_name(fragment: &str, original: &Path, suffix: &SuffixMode) -> String {
    let basename = original
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    match suffix {
        SuffixMode::KeepOriginalName => format!("{fragment}__{basename}"),
        SuffixMode::DropOriginalName => format!("{fragment}{}", lowercased_extension(&basename)),
        SuffixMode::Custom(text) => {
            format!("{fragment}{text}{}", lowercased_extension(&basename))
        }
    }
}

// Suffix starting at the last dot, unless that dot leads the name.
fn lowercased_extension(basename: &str) -> String {
    match basename.rfind('.') {
        Some(position) if position > 0 => basename[position..].to_lowercase(),
        _ => String::new(),
    }
}

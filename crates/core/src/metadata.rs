use crate::shift::TagUpdate;
use crate::tags::DateTag;
use anyhow::{Context, Result};
use exiftool::ExifTool;
use log::debug;
use serde_json::Value;
use std::collections::HashMap;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetadataRecord {
    values: HashMap<String, String>,
}

impl MetadataRecord {
    pub fn insert(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn get_tag(&self, tag: DateTag) -> Option<&str> {
        self.get(tag.key())
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

pub trait MetadataSource {
    fn read(&mut self, path: &Path) -> Result<MetadataRecord>;
    fn write(&mut self, path: &Path, updates: &[TagUpdate]) -> Result<()>;
}

pub struct ExifToolSource {
    tool: ExifTool,
}

impl ExifToolSource {
    pub fn new() -> Result<Self> {
        let tool =
            ExifTool::new().context("could not start exiftool (is it installed and on PATH?)")?;
        Ok(Self { tool })
    }
}

impl MetadataSource for ExifToolSource {
    fn read(&mut self, path: &Path) -> Result<MetadataRecord> {
        let json = self
            .tool
            .json(path, &["-G"])
            .with_context(|| format!("could not read metadata: {}", path.display()))?;
        let record = record_from_json(&json);
        debug!("read {} metadata tags from {}", record.len(), path.display());
        Ok(record)
    }

    fn write(&mut self, path: &Path, updates: &[TagUpdate]) -> Result<()> {
        if updates.is_empty() {
            return Ok(());
        }

        // One invocation carries every assignment so the file is rewritten once.
        let mut args: Vec<String> = updates
            .iter()
            .map(|update| format!("-{}={}", update.tag.key(), update.value))
            .collect();
        args.push("-overwrite_original".to_string());
        args.push(path.to_string_lossy().into_owned());
        let arg_refs: Vec<&str> = args.iter().map(String::as_str).collect();
        debug!("exiftool write args: {arg_refs:?}");

        self.tool
            .execute_raw(&arg_refs)
            .with_context(|| format!("could not write metadata: {}", path.display()))?;
        Ok(())
    }
}

fn record_from_json(json: &Value) -> MetadataRecord {
    let mut record = MetadataRecord::default();
    if let Some(object) = json.as_object() {
        for (key, value) in object {
            match value {
                Value::String(text) => record.insert(key, text),
                other => record.insert(key, &other.to_string()),
            }
        }
    }
    record
}

#[cfg(test)]
pub(crate) mod testing {
    use super::{MetadataRecord, MetadataSource};
    use crate::shift::TagUpdate;
    use anyhow::{bail, Result};
    use std::collections::HashMap;
    use std::path::{Path, PathBuf};

    #[derive(Debug, Default)]
    pub(crate) struct FakeSource {
        pub records: HashMap<PathBuf, MetadataRecord>,
        pub reads: usize,
        pub writes: Vec<(PathBuf, Vec<TagUpdate>)>,
        pub fail_writes: bool,
    }

    impl FakeSource {
        pub fn with_record(mut self, path: impl Into<PathBuf>, record: MetadataRecord) -> Self {
            self.records.insert(path.into(), record);
            self
        }
    }

    impl MetadataSource for FakeSource {
        fn read(&mut self, path: &Path) -> Result<MetadataRecord> {
            self.reads += 1;
            match self.records.get(path) {
                Some(record) => Ok(record.clone()),
                None => bail!("unreadable file: {}", path.display()),
            }
        }

        fn write(&mut self, path: &Path, updates: &[TagUpdate]) -> Result<()> {
            if self.fail_writes {
                bail!("write rejected: {}", path.display());
            }
            self.writes.push((path.to_path_buf(), updates.to_vec()));
            Ok(())
        }
    }
}

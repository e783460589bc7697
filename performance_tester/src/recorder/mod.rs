//!
//! The run results recorder.
//!

pub mod file;

use std::path::Path;
use std::path::PathBuf;

use crate::aggregator::Aggregator;
use crate::environment::target::Target;
use crate::environment::Environment;

use self::file::File;

///
/// The run results recorder.
///
/// Writes the receipts, the elapsed times, and the gas used of a completed run into
/// a directory scoped by the target name.
///
#[derive(Debug, Clone)]
pub struct Recorder {
    /// The directory containing every target data directory.
    root: PathBuf,
}

impl Recorder {
    /// The target data directory prefix.
    pub const DIRECTORY_PREFIX: &'static str = "data_";

    /// The receipts file prefix.
    pub const PREFIX_RECEIPTS: &'static str = "receipts";

    /// The elapsed times file prefix.
    pub const PREFIX_ELAPSED_TIMES: &'static str = "elapsed-times";

    /// The gas used file prefix.
    pub const PREFIX_GAS_USED: &'static str = "gas-used";

    ///
    /// A shortcut constructor.
    ///
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    ///
    /// Returns the data directory of the target.
    ///
    pub fn directory(&self, target: &Target) -> PathBuf {
        self.root
            .join(format!("{}{}", Self::DIRECTORY_PREFIX, target.name()))
    }

    ///
    /// Writes the results stamped with the current time in Unix milliseconds.
    ///
    pub fn flush(
        &self,
        aggregator: &Aggregator,
        environment: &Environment,
    ) -> anyhow::Result<Vec<PathBuf>> {
        self.flush_at(
            aggregator,
            &environment.target,
            chrono::Utc::now().timestamp_millis(),
        )
    }

    ///
    /// Writes the results stamped with the specified timestamp.
    ///
    /// Every file is serialized before anything is written, and the written files are
    /// removed if a later one fails, so the set is either complete or absent.
    ///
    pub fn flush_at(
        &self,
        aggregator: &Aggregator,
        target: &Target,
        timestamp: i64,
    ) -> anyhow::Result<Vec<PathBuf>> {
        let files = vec![
            File::new(Self::PREFIX_RECEIPTS, timestamp, aggregator.receipts())?,
            File::new(
                Self::PREFIX_ELAPSED_TIMES,
                timestamp,
                aggregator.elapsed_times(),
            )?,
            File::new(Self::PREFIX_GAS_USED, timestamp, aggregator.gas_used())?,
        ];

        let directory = self.directory(target);
        std::fs::create_dir_all(directory.as_path()).map_err(|error| {
            anyhow::anyhow!("Results directory {directory:?} creating: {error}")
        })?;

        let mut paths: Vec<PathBuf> = Vec::with_capacity(files.len());
        for File {
            path: relative_path,
            contents,
        } in files.into_iter()
        {
            let path = directory.join(relative_path);
            if let Err(error) = Self::write(path.as_path(), contents.as_str()) {
                for written in paths.iter() {
                    let _ = std::fs::remove_file(written);
                }
                return Err(error);
            }
            paths.push(path);
        }
        Ok(paths)
    }

    ///
    /// Writes the file through a temporary sibling, which is removed on failure.
    ///
    fn write(path: &Path, contents: &str) -> anyhow::Result<()> {
        let mut temporary = path.to_path_buf();
        temporary.set_extension("json.tmp");
        let result = std::fs::write(temporary.as_path(), contents)
            .map_err(|error| anyhow::anyhow!("Results file {temporary:?} writing: {error}"))
            .and_then(|()| {
                std::fs::rename(temporary.as_path(), path)
                    .map_err(|error| anyhow::anyhow!("Results file {path:?} renaming: {error}"))
            });
        if result.is_err() {
            let _ = std::fs::remove_file(temporary.as_path());
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::file::Contents;
    use super::Recorder;
    use crate::aggregator::Aggregator;
    use crate::environment::target::Target;
    use crate::invoker::receipt::Receipt;

    fn read<T>(path: &std::path::Path) -> BTreeMap<String, T>
    where
        T: serde::de::DeserializeOwned,
    {
        let text = std::fs::read_to_string(path).expect("Results file reading failed");
        serde_json::from_str::<Contents<BTreeMap<String, T>>>(text.as_str())
            .expect("Results file parsing failed")
            .map
    }

    #[test]
    fn flush_round_trip() {
        let directory = tempfile::tempdir().expect("Temporary directory creation failed");
        let recorder = Recorder::new(directory.path().to_path_buf());

        let mut aggregator = Aggregator::default();
        let mut receipt = Receipt::new("0xaa".to_owned(), 46000);
        receipt
            .fields
            .insert("status".to_owned(), serde_json::json!("0x1"));
        aggregator.record("approve", 15.25, Some(46000));
        aggregator.record("getReserves", 2.5, None);
        aggregator.record_receipt(receipt);

        let target = Target::Network("zkevm_testnet".to_owned());
        let paths = recorder
            .flush_at(&aggregator, &target, 1_700_000_000_000)
            .expect("Flushing failed");

        let data_directory = directory.path().join("data_zkevm_testnet");
        assert_eq!(
            paths,
            vec![
                data_directory.join("receipts-1700000000000.json"),
                data_directory.join("elapsed-times-1700000000000.json"),
                data_directory.join("gas-used-1700000000000.json"),
            ]
        );

        assert_eq!(&read::<Receipt>(paths[0].as_path()), aggregator.receipts());
        assert_eq!(&read::<Vec<f64>>(paths[1].as_path()), aggregator.elapsed_times());
        assert_eq!(&read::<Vec<u64>>(paths[2].as_path()), aggregator.gas_used());

        let entries = std::fs::read_dir(data_directory.as_path())
            .expect("Results directory reading failed")
            .count();
        assert_eq!(entries, 3);
    }

    #[test]
    fn format() {
        let directory = tempfile::tempdir().expect("Temporary directory creation failed");
        let recorder = Recorder::new(directory.path().to_path_buf());

        let mut aggregator = Aggregator::default();
        aggregator.record("noop", 10.0, Some(21000));

        let paths = recorder
            .flush_at(&aggregator, &Target::Development, 1)
            .expect("Flushing failed");

        let gas_used = std::fs::read_to_string(paths[2].as_path()).expect("Always exists");
        assert_eq!(gas_used, r#"{"map":{"noop":[21000]}}"#);
        let receipts = std::fs::read_to_string(paths[0].as_path()).expect("Always exists");
        assert_eq!(receipts, r#"{"map":{}}"#);
    }

    #[test]
    fn existing_directory() {
        let directory = tempfile::tempdir().expect("Temporary directory creation failed");
        let recorder = Recorder::new(directory.path().to_path_buf());
        std::fs::create_dir_all(recorder.directory(&Target::Development))
            .expect("Directory creation failed");

        let paths = recorder
            .flush_at(&Aggregator::default(), &Target::Development, 2)
            .expect("Flushing failed");
        assert!(paths.iter().all(|path| path.exists()));
    }

    #[test]
    fn partial_failure_rolled_back() {
        let directory = tempfile::tempdir().expect("Temporary directory creation failed");
        let recorder = Recorder::new(directory.path().to_path_buf());
        let data_directory = recorder.directory(&Target::Development);
        let blocker = data_directory.join("elapsed-times-5.json");
        std::fs::create_dir_all(blocker.join("occupied")).expect("Directory creation failed");

        let mut aggregator = Aggregator::default();
        aggregator.record("noop", 10.0, Some(21000));
        aggregator.record_receipt(Receipt::new("0x01".to_owned(), 21000));

        assert!(recorder
            .flush_at(&aggregator, &Target::Development, 5)
            .is_err());

        let mut entries: Vec<String> = std::fs::read_dir(data_directory.as_path())
            .expect("Results directory reading failed")
            .map(|entry| {
                entry
                    .expect("Entry reading failed")
                    .file_name()
                    .to_string_lossy()
                    .into_owned()
            })
            .collect();
        entries.sort();
        assert_eq!(entries, vec!["elapsed-times-5.json".to_owned()]);
    }
}

// crates/infra/src/measurement/strategies.rs
use std::{
    fs::File,
    io::{self, Read, Seek, SeekFrom},
    path::Path,
};

/// One way of determining a file's byte size.
///
/// Strategies are tried in a fixed priority order by
/// [`StrategyProbe`](crate::measurement::StrategyProbe); adding or removing
/// one never touches the classifier or the packer. Implementations must be
/// read-only: no writes, no locks.
pub trait SizeStrategy: Send + Sync {
    fn name(&self) -> &'static str;

    fn measure(&self, path: &Path) -> io::Result<u64>;
}

/// Primary strategy: a plain `stat` call, following symlinks.
pub struct MetadataSize;

impl SizeStrategy for MetadataSize {
    fn name(&self) -> &'static str {
        "metadata"
    }

    fn measure(&self, path: &Path) -> io::Result<u64> {
        let metadata = std::fs::metadata(path)?;
        if !metadata.is_file() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "not a regular file",
            ));
        }
        Ok(metadata.len())
    }
}

/// Fallback: open read-only and seek to the end.
///
/// Covers filesystems where `stat` is unreliable but the file can still be
/// opened (network mounts, some FUSE implementations).
pub struct SeekEnd;

impl SizeStrategy for SeekEnd {
    fn name(&self) -> &'static str {
        "seek-end"
    }

    fn measure(&self, path: &Path) -> io::Result<u64> {
        let mut file = File::open(path)?;
        file.seek(SeekFrom::End(0))
    }
}

const READ_BUF_BYTES: usize = 64 * 1024;

/// Last resort: read the file through a fixed buffer and count bytes.
///
/// Never loads the whole file into memory, unlike a naive read-to-end.
pub struct StreamedRead;

impl SizeStrategy for StreamedRead {
    fn name(&self) -> &'static str {
        "streamed-read"
    }

    fn measure(&self, path: &Path) -> io::Result<u64> {
        let mut file = File::open(path)?;
        let mut buf = [0u8; READ_BUF_BYTES];
        let mut total: u64 = 0;
        loop {
            let n = file.read(&mut buf)?;
            if n == 0 {
                return Ok(total);
            }
            total += n as u64;
        }
    }
}

/// The fixed default chain: stat, then seek, then streamed read.
pub fn default_strategies() -> Vec<Box<dyn SizeStrategy>> {
    vec![Box::new(MetadataSize), Box::new(SeekEnd), Box::new(StreamedRead)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metadata_reports_exact_length() {
        let temp = tempfile::tempdir().expect("temp dir");
        let path = temp.path().join("data.bin");
        std::fs::write(&path, b"0123456789").unwrap();

        assert_eq!(MetadataSize.measure(&path).unwrap(), 10);
    }

    #[test]
    fn metadata_rejects_directories() {
        let temp = tempfile::tempdir().expect("temp dir");
        assert!(MetadataSize.measure(temp.path()).is_err());
    }

    #[test]
    fn all_strategies_agree_on_a_regular_file() {
        let temp = tempfile::tempdir().expect("temp dir");
        let path = temp.path().join("data.bin");
        std::fs::write(&path, vec![7u8; 100_000]).unwrap();

        for strategy in default_strategies() {
            assert_eq!(strategy.measure(&path).unwrap(), 100_000, "{}", strategy.name());
        }
    }

    #[cfg(unix)]
    #[test]
    fn symlink_measures_the_target_not_the_link() {
        let temp = tempfile::tempdir().expect("temp dir");
        let target = temp.path().join("target.bin");
        std::fs::write(&target, b"abcdef").unwrap();
        let link = temp.path().join("link.bin");
        std::os::unix::fs::symlink(&target, &link).unwrap();

        assert_eq!(MetadataSize.measure(&link).unwrap(), 6);
    }

    #[cfg(unix)]
    #[test]
    fn dangling_symlink_fails() {
        let temp = tempfile::tempdir().expect("temp dir");
        let link = temp.path().join("dangling");
        std::os::unix::fs::symlink(temp.path().join("missing"), &link).unwrap();

        assert!(MetadataSize.measure(&link).is_err());
    }
}

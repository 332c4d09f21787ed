// src/cli/parsers.rs
use anyhow::Context as _;

/// Parse a size literal such as `25MiB`, `512K`, `1_000_000` into bytes.
pub fn parse_size(s: &str) -> anyhow::Result<u64> {
    let s = s.trim().replace('_', "");

    let parse_with_suffix = |suffixes: &[&str], multiplier: u64| {
        for suffix in suffixes {
            if let Some(stripped) = s.strip_suffix(suffix) {
                return Some((stripped, multiplier));
            }
        }
        None
    };

    let (num_str, multiplier) = parse_with_suffix(&["KiB", "KB", "K", "k"], 1024)
        .or_else(|| parse_with_suffix(&["MiB", "MB", "M", "m"], 1024 * 1024))
        .or_else(|| parse_with_suffix(&["GiB", "GB", "G", "g"], 1024 * 1024 * 1024))
        .or_else(|| parse_with_suffix(&["TiB", "TB", "T", "t"], 1024 * 1024 * 1024 * 1024))
        .unwrap_or((s.as_str(), 1));

    let num: u64 = num_str.parse().context("Invalid size number")?;
    num.checked_mul(multiplier)
        .ok_or_else(|| anyhow::anyhow!("Size out of range: {s}"))
}

//! Output document assembly
//!
//! The generated playlist starts with a fixed banner and a `Last Updated`
//! timestamp, followed by the kept entries in source order.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Duration, Utc};
use tracing::debug;

use super::ChannelEntry;

const BANNER: [&str; 3] = [
    r#"#EXTM3U billed-msg="RJM Tv - RJMBTS Network""#,
    "# RJMS - RJMBTS Network",
    "# Scripted & Updated by Kittujk",
];

/// Outcome of a save attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// File written with this many channels
    Saved(usize),
    /// Nothing matched; the output file was left untouched
    NoChannels,
}

/// Header timestamp: the current instant shifted to IST (+05:30)
fn timestamp(now: DateTime<Utc>) -> String {
    let ist = now + Duration::hours(5) + Duration::minutes(30);
    format!("{} IST", ist.format("%Y-%m-%d %H:%M:%S"))
}

/// Render the full output document
pub fn render(channels: &[ChannelEntry], now: DateTime<Utc>) -> String {
    let mut lines: Vec<String> = BANNER.iter().map(|s| s.to_string()).collect();
    lines.push(format!("# Last Updated: {}", timestamp(now)));
    lines.push(String::new());

    for channel in channels {
        lines.push(channel.extinf.clone());
        lines.push(channel.url.clone());
    }

    lines.join("\n")
}

/// Write the document to `path`, or report that nothing matched.
///
/// With zero channels nothing is written and the existing output file, if
/// any, is left untouched.
pub fn save(path: &Path, channels: &[ChannelEntry]) -> Result<SaveOutcome> {
    if channels.is_empty() {
        return Ok(SaveOutcome::NoChannels);
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create output directory {:?}", parent))?;
        }
    }

    let document = render(channels, Utc::now());
    fs::write(path, document)
        .with_context(|| format!("Failed to write playlist to {:?}", path))?;

    debug!("Wrote {} channels to {:?}", channels.len(), path);
    Ok(SaveOutcome::Saved(channels.len()))
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn channel(extinf: &str, url: &str) -> ChannelEntry {
        ChannelEntry {
            extinf: extinf.to_string(),
            url: url.to_string(),
        }
    }

    #[test]
    fn test_timestamp_is_ist_shifted() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(timestamp(now), "2024-01-01 05:30:00 IST");
    }

    #[test]
    fn test_render_layout() {
        let now = Utc.with_ymd_and_hms(2024, 6, 15, 10, 0, 0).unwrap();
        let channels = vec![
            channel("#EXTINF:-1,Seven", "http://h/live/1.ts"),
            channel("#EXTINF:-1,Nine", "http://h/live/2.ts"),
        ];

        let document = render(&channels, now);
        let lines: Vec<&str> = document.lines().collect();

        assert_eq!(lines[0], r#"#EXTM3U billed-msg="RJM Tv - RJMBTS Network""#);
        assert_eq!(lines[1], "# RJMS - RJMBTS Network");
        assert_eq!(lines[2], "# Scripted & Updated by Kittujk");
        assert_eq!(lines[3], "# Last Updated: 2024-06-15 15:30:00 IST");
        assert_eq!(lines[4], "");
        assert_eq!(lines[5], "#EXTINF:-1,Seven");
        assert_eq!(lines[6], "http://h/live/1.ts");
        assert_eq!(lines[7], "#EXTINF:-1,Nine");
        assert_eq!(lines[8], "http://h/live/2.ts");
        assert_eq!(lines.len(), 9);
    }

    #[test]
    fn test_save_writes_file_and_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Queen").join("Australia_Live.m3u");

        let channels = vec![channel("#EXTINF:-1,Seven", "http://h/live/1.ts")];
        let outcome = save(&path, &channels).unwrap();

        assert_eq!(outcome, SaveOutcome::Saved(1));
        let written = fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("#EXTM3U billed-msg="));
        assert!(written.ends_with("http://h/live/1.ts"));
    }

    #[test]
    fn test_save_with_no_channels_leaves_file_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Australia_Live.m3u");
        fs::write(&path, "previous run").unwrap();

        let outcome = save(&path, &[]).unwrap();

        assert_eq!(outcome, SaveOutcome::NoChannels);
        assert_eq!(fs::read_to_string(&path).unwrap(), "previous run");
    }

    #[test]
    fn test_save_with_no_channels_creates_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Queen").join("Australia_Live.m3u");

        let outcome = save(&path, &[]).unwrap();

        assert_eq!(outcome, SaveOutcome::NoChannels);
        assert!(!path.exists());
        assert!(!path.parent().unwrap().exists());
    }
}

//! Extended-M3U filtering for Australian live channels
//!
//! The filter is a pure function from playlist text to kept entries, so it can
//! be tested against literal strings without touching the network. Entries are
//! `#EXTINF`/URL line pairs; a pair survives when its group-title mentions
//! Australia and the stream looks live, and is then rewritten for output.

use std::sync::LazyLock;

use regex::Regex;

use crate::utils::{collapse_whitespace, title_case};

/// Logo applied to channels that ship without one
pub const DEFAULT_LOGO: &str = "https://simgbb.com/avatar/dw9KLnpdGh3y.jpg";

/// Group title stamped on every kept channel
pub const OUTPUT_GROUP_TITLE: &str = "RJM | Australia Live";

static AUSTRALIA_GROUP_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)group-title="[^"]*australia[^"]*""#).unwrap());
static TVG_NAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"tvg-name=".*?""#).unwrap());
static GROUP_TITLE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"group-title=".*?""#).unwrap());

/// A kept channel: rewritten `#EXTINF` metadata line plus its stream URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelEntry {
    pub extinf: String,
    pub url: String,
}

/// Scan `content` and collect the Australian live channels, rewritten for
/// output. Source order is preserved.
///
/// Pairs that fail the region or liveness checks, lack a following URL line,
/// or lack a display-name comma are dropped silently.
pub fn australia_live_channels(content: &str) -> Vec<ChannelEntry> {
    let lines: Vec<&str> = content.lines().collect();
    let mut channels = Vec::new();

    for (i, line) in lines.iter().enumerate() {
        if !line.starts_with("#EXTINF") {
            continue;
        }

        if !is_australia_group(line) {
            continue;
        }

        let Some(next) = lines.get(i + 1) else {
            continue;
        };
        let stream_url = next.trim();

        if !is_live_stream(stream_url, line) {
            continue;
        }

        if let Some(entry) = rewrite_entry(line, stream_url) {
            channels.push(entry);
        }
    }

    channels
}

/// Region check: the group-title attribute must mention Australia
fn is_australia_group(extinf: &str) -> bool {
    AUSTRALIA_GROUP_REGEX.is_match(extinf)
}

/// Liveness heuristic over the stream URL and metadata line.
///
/// Substring markers; can over- and under-match.
fn is_live_stream(stream_url: &str, extinf: &str) -> bool {
    let url = stream_url.to_lowercase();
    url.contains("/live/")
        || url.ends_with(".ts")
        || extinf.contains("24/7")
        || extinf.to_lowercase().contains("live")
}

/// Apply the metadata rewrite rules to a kept pair.
///
/// Returns `None` when the metadata line has no display-name comma.
fn rewrite_entry(extinf: &str, stream_url: &str) -> Option<ChannelEntry> {
    let line = extinf.replace(r#"tvg-id="""#, "");
    let line = TVG_NAME_REGEX.replace_all(&line, "");
    let line = GROUP_TITLE_REGEX.replace_all(&line, "");

    let (meta, name) = line.rsplit_once(',')?;

    let mut meta = meta.to_string();
    if meta.contains(r#"tvg-logo="""#) {
        meta = meta.replace(r#"tvg-logo="""#, &format!(r#"tvg-logo="{}""#, DEFAULT_LOGO));
    } else if !meta.contains("tvg-logo=") {
        meta.push_str(&format!(r#" tvg-logo="{}""#, DEFAULT_LOGO));
    }

    let meta = collapse_whitespace(&meta);
    let meta = format!(r#"{} group-title="{}""#, meta, OUTPUT_GROUP_TITLE);

    let name = name.replace(['_', '-'], " ").replace('.', "");
    let name = title_case(&collapse_whitespace(&name));

    Some(ChannelEntry {
        extinf: format!("{},{}", meta, name),
        url: stream_url.to_string(),
    })
}

//! Read-only queries over decoded segments: mentions and media URLs.

use crate::error::ValueError;
use crate::segment::Segment;

/// Literal directive for a mention of everyone.
pub const MENTION_ALL: &str = "[CQ:at,qq=all]";

/// Substring check on raw text.
///
/// Independent of [`mentions_all`]: escaped text such as `&#91;CQ:at,qq=all&#93;` never
/// matches here, while a raw string that merely contains the literal always does.
pub fn raw_mentions_all(raw: &str) -> bool {
    raw.contains(MENTION_ALL)
}

/// True if any segment is an `at` with `qq=all`.
pub fn mentions_all(segments: &[Segment]) -> bool {
    segments
        .iter()
        .any(|s| s.kind == "at" && s.get("qq") == Some("all"))
}

/// Ids of all mentioned users, excluding mention-all, in message order.
///
/// One non-numeric or missing `qq` fails the whole query.
pub fn mentioned_ids(segments: &[Segment]) -> Result<Vec<i64>, ValueError> {
    segments
        .iter()
        .enumerate()
        .filter(|(_, s)| s.kind == "at" && s.get("qq") != Some("all"))
        .map(|(index, s)| {
            let value = s.get("qq").ok_or(ValueError::MissingMentionId { index })?;
            value
                .parse::<i64>()
                .map_err(|source| ValueError::InvalidMentionId {
                    index,
                    value: value.to_string(),
                    source,
                })
        })
        .collect()
}

/// `url` of every `image` segment; empty string where a segment has none.
pub fn image_urls(segments: &[Segment]) -> Vec<String> {
    urls_of(segments, "image")
}

/// `url` of every `video` segment; empty string where a segment has none.
pub fn video_urls(segments: &[Segment]) -> Vec<String> {
    urls_of(segments, "video")
}

fn urls_of(segments: &[Segment], kind: &str) -> Vec<String> {
    segments
        .iter()
        .filter(|s| s.kind == kind)
        .map(|s| s.get("url").unwrap_or_default().to_string())
        .collect()
}

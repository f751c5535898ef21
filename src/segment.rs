//! Decoded message representation: segments with ordered parameters.

use crate::codec;
use crate::error::DecodeError;
use crate::query;
use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Segment type of plain-text runs.
pub const TEXT: &str = "text";
/// Parameter key holding the content of a `text` segment.
pub const TEXT_KEY: &str = "text";

/// Insertion-ordered parameter map with unique keys.
///
/// Order is the textual order of the directive and is kept on re-encode.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    entries: Vec<(String, String)>,
}

impl Params {
    pub fn new() -> Self {
        Params::default()
    }

    /// Insert a parameter. A duplicate key keeps its position and takes the new value;
    /// the previous value is returned.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, v)) => Some(std::mem::replace(v, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        let idx = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(idx).1)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Params::new();
        for (k, v) in iter {
            params.insert(k, v);
        }
        params
    }
}

impl IntoIterator for Params {
    type Item = (String, String);
    type IntoIter = std::vec::IntoIter<(String, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl Serialize for Params {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

/// String form of one JSON parameter value; `None` for `null`.
///
/// OneBot implementations send ids as numbers and some segments (`node` content,
/// `face` raw data) as nested arrays or objects. Numbers keep their JSON text
/// (`1.0` stays `1.0`); arrays and objects are kept as compact JSON.
fn param_text(value: serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::Null => None,
        serde_json::Value::String(s) => Some(s),
        serde_json::Value::Number(n) => Some(n.to_string()),
        serde_json::Value::Bool(b) => Some(b.to_string()),
        nested @ (serde_json::Value::Array(_) | serde_json::Value::Object(_)) => {
            Some(nested.to_string())
        }
    }
}

struct ParamsVisitor;

impl<'de> Visitor<'de> for ParamsVisitor {
    type Value = Params;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map of segment parameters")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Params, A::Error> {
        let mut params = Params::new();
        while let Some((key, value)) = access.next_entry::<String, serde_json::Value>()? {
            if let Some(value) = param_text(value) {
                params.insert(key, value);
            }
        }
        Ok(params)
    }
}

impl<'de> Deserialize<'de> for Params {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(ParamsVisitor)
    }
}

fn non_empty_kind<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    let kind = String::deserialize(deserializer)?;
    if kind.is_empty() {
        return Err(de::Error::invalid_value(
            de::Unexpected::Str(""),
            &"a non-empty segment type",
        ));
    }
    Ok(kind)
}

/// One element of a message: a `text` run or a typed directive with parameters.
///
/// `kind` is expected to be non-empty; the encoder writes a segment with an empty
/// `kind` as plain text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    #[serde(rename = "type", deserialize_with = "non_empty_kind")]
    pub kind: String,
    #[serde(default)]
    pub data: Params,
}

impl Segment {
    /// Segment of the given type with no parameters.
    pub fn new(kind: impl Into<String>) -> Self {
        Segment {
            kind: kind.into(),
            data: Params::new(),
        }
    }

    /// Plain-text segment holding `content` unescaped.
    pub fn text(content: impl Into<String>) -> Self {
        Segment::new(TEXT).with(TEXT_KEY, content)
    }

    /// Mention of one user.
    pub fn at(user_id: i64) -> Self {
        Segment::new("at").with("qq", user_id.to_string())
    }

    /// Mention of everyone (`qq=all`).
    pub fn at_all() -> Self {
        Segment::new("at").with("qq", "all")
    }

    pub fn image(file: impl Into<String>) -> Self {
        Segment::new("image").with("file", file)
    }

    pub fn video(file: impl Into<String>) -> Self {
        Segment::new("video").with("file", file)
    }

    pub fn reply(message_id: impl Into<String>) -> Self {
        Segment::new("reply").with("id", message_id)
    }

    pub fn face(id: i32) -> Self {
        Segment::new("face").with("id", id.to_string())
    }

    /// Add a parameter, builder style.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.insert(key, value);
        self
    }

    pub fn is_text(&self) -> bool {
        self.kind == TEXT
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.data.get(key)
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&codec::encode_segment(self))
    }
}

/// Ordered sequence of segments in reading order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Message(Vec<Segment>);

impl Message {
    pub fn new() -> Self {
        Message::default()
    }

    pub fn push(&mut self, segment: Segment) {
        self.0.push(segment);
    }

    /// Append a segment, builder style.
    pub fn with(mut self, segment: Segment) -> Self {
        self.0.push(segment);
        self
    }

    pub fn segments(&self) -> &[Segment] {
        &self.0
    }

    pub fn into_segments(self) -> Vec<Segment> {
        self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Segment> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Concatenated content of all `text` segments.
    pub fn plain_text(&self) -> String {
        self.0
            .iter()
            .filter(|s| s.is_text())
            .filter_map(|s| s.get(TEXT_KEY))
            .collect()
    }

    pub fn mentions_all(&self) -> bool {
        query::mentions_all(&self.0)
    }

    pub fn mentioned_ids(&self) -> Result<Vec<i64>, crate::error::ValueError> {
        query::mentioned_ids(&self.0)
    }

    pub fn image_urls(&self) -> Vec<String> {
        query::image_urls(&self.0)
    }

    pub fn video_urls(&self) -> Vec<String> {
        query::video_urls(&self.0)
    }
}

impl From<Vec<Segment>> for Message {
    fn from(segments: Vec<Segment>) -> Self {
        Message(segments)
    }
}

impl FromIterator<Segment> for Message {
    fn from_iter<I: IntoIterator<Item = Segment>>(iter: I) -> Self {
        Message(iter.into_iter().collect())
    }
}

impl IntoIterator for Message {
    type Item = Segment;
    type IntoIter = std::vec::IntoIter<Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Message {
    type Item = &'a Segment;
    type IntoIter = std::slice::Iter<'a, Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromStr for Message {
    type Err = DecodeError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        codec::decode(raw)
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&codec::encode(self))
    }
}

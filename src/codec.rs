//! Decode raw CQ-code text into a [`Message`] and encode a [`Message`] back to raw text.
//!
//! Decoding never fails on malformed markup: a bracketed token that does not parse as a
//! directive becomes a `text` segment. Only an internal grammar fault yields [`DecodeError`].
//! Encoding is total.

use crate::error::DecodeError;
use crate::escape::{escape, unescape};
use crate::parser::{parse_directive, tokenize, Token};
use crate::segment::{Message, Segment, TEXT, TEXT_KEY};

/// Decode raw text into segments. Text runs are unescaped just like directive values.
#[must_use = "a decode failure is not an empty message"]
pub fn decode(raw: &str) -> Result<Message, DecodeError> {
    decode_tokens(raw).inspect_err(|e| {
        tracing::error!(error = %e, len = raw.len(), "raw message convert failed");
    })
}

fn decode_tokens(raw: &str) -> Result<Message, DecodeError> {
    let tokens = tokenize(raw)?;
    let mut message = Message::new();
    for token in tokens {
        let segment = match token {
            Token::Directive(s) => match parse_directive(s) {
                Some((kind, data)) => Segment { kind, data },
                None => {
                    tracing::debug!(token = s, "malformed directive decoded as text");
                    Segment::text(unescape(s))
                }
            },
            Token::Text(s) => Segment::text(unescape(s)),
        };
        message.push(segment);
    }
    Ok(message)
}

/// Encode segments into raw text: `text` segments escaped and unwrapped, others as `[CQ:...]`.
pub fn encode(message: &Message) -> String {
    let mut out = String::new();
    for segment in message {
        write_segment(&mut out, segment);
    }
    out
}

/// Encode one segment with the same rules as [`encode`].
pub fn encode_segment(segment: &Segment) -> String {
    let mut out = String::new();
    write_segment(&mut out, segment);
    out
}

fn write_segment(out: &mut String, segment: &Segment) {
    if segment.kind.is_empty() || segment.kind == TEXT {
        out.push_str(&escape(segment.data.get(TEXT_KEY).unwrap_or_default()));
        return;
    }
    out.push_str("[CQ:");
    out.push_str(&segment.kind);
    for (key, value) in segment.data.iter() {
        out.push(',');
        out.push_str(key);
        out.push('=');
        out.push_str(&escape(value));
    }
    out.push(']');
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_mixed() {
        let m = decode("hello [CQ:at,qq=123] &#91;x&#93;").expect("decode");
        assert_eq!(m.len(), 3);
        assert_eq!(m.segments()[0], Segment::text("hello "));
        assert_eq!(m.segments()[1], Segment::at(123));
        assert_eq!(m.segments()[2], Segment::text(" [x]"));
    }

    #[test]
    fn malformed_directive_is_unescaped_text() {
        let m = decode("[CQ:at,qq&#44;1]").expect("decode");
        assert_eq!(m.segments(), &[Segment::text("[CQ:at,qq,1]")]);
    }

    #[test]
    fn encode_text_unwrapped() {
        assert_eq!(encode_segment(&Segment::text("a,b")), "a&#44;b");
    }

    #[test]
    fn encode_escapes_values() {
        let seg = Segment::new("share").with("title", "[a,b]").with("url", "x&y");
        assert_eq!(encode_segment(&seg), "[CQ:share,title=&#91;a&#44;b&#93;,url=x&amp;y]");
    }

    #[test]
    fn encode_text_without_content() {
        assert_eq!(encode_segment(&Segment::new(TEXT)), "");
    }

    #[test]
    fn encode_empty_kind_as_text() {
        let seg = Segment::new("").with(TEXT_KEY, "hi");
        assert_eq!(encode_segment(&seg), "hi");
    }

    #[test]
    fn encode_directive_without_params() {
        assert_eq!(encode_segment(&Segment::new("shake")), "[CQ:shake]");
    }
}

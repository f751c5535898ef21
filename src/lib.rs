//! # cqcode — CQ-code message codec
//!
//! Chat-bot protocols in the OneBot family send messages as flat text with inline
//! directives (`[CQ:type,key=value,...]`). This crate converts that text into an ordered
//! list of typed [`Segment`]s and back, using a PEST grammar.
//!
//! ## Wire format
//!
//! ```text
//! message    := (text | directive)*
//! directive  := "[CQ:" type ("," key "=" value)* "]"
//! ```
//!
//! `&`, `,`, `[` and `]` inside text and values are written as `&amp;`, `&#44;`, `&#91;`
//! and `&#93;` (see the [`escape`](mod@escape) module). A bracketed token that does not
//! parse as a directive is kept as plain text.
//!
//! ## Usage
//!
//! ```
//! use cqcode::{decode, encode, Segment};
//!
//! let message = decode("hi [CQ:at,qq=10001]").unwrap();
//! assert_eq!(message.segments()[1], Segment::at(10001));
//! assert_eq!(message.mentioned_ids().unwrap(), vec![10001]);
//! assert_eq!(encode(&message), "hi [CQ:at,qq=10001]");
//! ```

pub mod avatar;
pub mod codec;
pub mod error;
pub mod escape;
pub mod forward;
pub mod json;
pub mod parser;
pub mod query;
pub mod segment;

pub use codec::{decode, encode, encode_segment};
pub use error::{DecodeError, EventError, ValueError};
pub use escape::{escape, escape_brackets, unescape};
pub use json::{event_message, EventMessage};
pub use query::{image_urls, mentioned_ids, mentions_all, raw_mentions_all, video_urls};
pub use segment::{Message, Params, Segment};

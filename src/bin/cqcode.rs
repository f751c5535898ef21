//! Convert between CQ-code text and OneBot array JSON from the command line.
//!
//! Usage:
//!   cqcode <COMMAND> [FILE]
//!
//! Commands:
//!   decode     CQ-code text -> array JSON (pretty printed)
//!   encode     array JSON -> CQ-code text
//!   query      CQ-code text -> mentions and media URLs
//!   escape     escape reserved characters
//!   unescape   unescape reserved characters
//!
//! Input is read from FILE, or from stdin when no file is given. One trailing newline is
//! dropped from text input. Set `RUST_LOG` (e.g. `RUST_LOG=debug`) for diagnostics on stderr.

use anyhow::Context;
use cqcode::{decode, encode, escape, raw_mentions_all, unescape, Message};
use std::io::{self, Read, Write};
use std::path::Path;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "usage: cqcode <decode|encode|query|escape|unescape> [FILE]";

#[derive(Clone, Copy)]
enum Command {
    Decode,
    Encode,
    Query,
    Escape,
    Unescape,
}

fn parse_command(name: &str) -> Option<Command> {
    match name {
        "decode" => Some(Command::Decode),
        "encode" => Some(Command::Encode),
        "query" => Some(Command::Query),
        "escape" => Some(Command::Escape),
        "unescape" => Some(Command::Unescape),
        _ => None,
    }
}

fn read_input(path: Option<&str>) -> anyhow::Result<String> {
    match path {
        Some(p) => {
            std::fs::read_to_string(Path::new(p)).with_context(|| format!("{}: read failed", p))
        }
        None => {
            let mut src = String::new();
            io::stdin().read_to_string(&mut src).context("stdin: read failed")?;
            Ok(src)
        }
    }
}

fn strip_newline(s: &str) -> &str {
    s.strip_suffix("\r\n")
        .or_else(|| s.strip_suffix('\n'))
        .unwrap_or(s)
}

fn query_report(raw: &str, message: &Message) -> anyhow::Result<String> {
    let ids = message.mentioned_ids()?;
    let mut out = String::new();
    out.push_str(&format!("mention_all_raw: {}\n", raw_mentions_all(raw)));
    out.push_str(&format!("mention_all: {}\n", message.mentions_all()));
    out.push_str(&format!(
        "mentioned: {}\n",
        ids.iter().map(|id| id.to_string()).collect::<Vec<_>>().join(" ")
    ));
    for url in message.image_urls() {
        out.push_str(&format!("image: {}\n", url));
    }
    for url in message.video_urls() {
        out.push_str(&format!("video: {}\n", url));
    }
    Ok(out)
}

fn run(command: Command, input: &str) -> anyhow::Result<String> {
    let out = match command {
        Command::Decode => {
            let message = decode(strip_newline(input))?;
            let mut json = serde_json::to_string_pretty(&message)?;
            json.push('\n');
            json
        }
        Command::Encode => {
            let message: Message = serde_json::from_str(input).context("invalid array JSON")?;
            format!("{}\n", encode(&message))
        }
        Command::Query => {
            let raw = strip_newline(input);
            query_report(raw, &decode(raw)?)?
        }
        Command::Escape => format!("{}\n", escape(strip_newline(input))),
        Command::Unescape => format!("{}\n", unescape(strip_newline(input))),
    };
    Ok(out)
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "--help" || a == "-h") {
        println!("{}", USAGE);
        return Ok(());
    }
    let command = match args.first().and_then(|a| parse_command(a)) {
        Some(c) => c,
        None => {
            eprintln!("{}", USAGE);
            std::process::exit(2);
        }
    };
    if args.len() > 2 {
        eprintln!("{}", USAGE);
        std::process::exit(2);
    }

    let input = read_input(args.get(1).map(String::as_str))?;
    let out = run(command, &input)?;
    io::stdout().write_all(out.as_bytes())?;
    Ok(())
}

//! Tokenize raw CQ-code text and parse single directives using PEST.
//!
//! Two stages:
//!
//! - [`tokenize`] splits a raw message into [`Token`]s: whole `[CQ:...]` directives and the
//!   maximal text runs between them. Concatenating the tokens gives back the input.
//! - [`parse_directive`] turns one directive token into its type and ordered parameters,
//!   or `None` when the token does not fit the directive grammar.

use crate::error::DecodeError;
use crate::escape::unescape;
use crate::segment::Params;
use pest::iterators::Pair;
use pest::Parser;
use pest_derive::Parser as PestParser;

#[derive(PestParser)]
#[grammar = "grammar.pest"]
struct CqParser;

/// A raw slice of the input: a bracketed directive candidate or a plain-text run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// `[CQ:` + one or more non-`]` characters + `]`. May still fail [`parse_directive`].
    Directive(&'a str),
    Text(&'a str),
}

impl<'a> Token<'a> {
    pub fn as_str(&self) -> &'a str {
        match self {
            Token::Directive(s) | Token::Text(s) => s,
        }
    }
}

/// Split raw text into directive tokens and text runs. Empty input gives no tokens.
pub fn tokenize(raw: &str) -> Result<Vec<Token<'_>>, DecodeError> {
    let pairs = CqParser::parse(Rule::message, raw)
        .map_err(|e| DecodeError::Grammar(format!("Segmentation error: {}", e)))?;
    let message = pairs
        .into_iter()
        .next()
        .ok_or_else(|| DecodeError::Tree("Empty segmentation".to_string()))?;

    let mut tokens = Vec::new();
    for inner in message.into_inner() {
        let token = match inner.as_rule() {
            Rule::directive_token => Token::Directive(inner.as_str()),
            Rule::text_run => Token::Text(inner.as_str()),
            Rule::EOI => continue,
            other => {
                return Err(DecodeError::Tree(format!(
                    "unexpected segmentation rule: {:?}",
                    other
                )))
            }
        };
        if !token.as_str().is_empty() {
            tokens.push(token);
        }
    }
    tracing::trace!(tokens = tokens.len(), "segmented raw message");
    Ok(tokens)
}

/// Parse `[CQ:type,key=value,...]` into its type and parameters (values unescaped).
///
/// Returns `None` when the token is not a well-formed directive; callers treat it as text.
pub fn parse_directive(token: &str) -> Option<(String, Params)> {
    let directive = CqParser::parse(Rule::directive, token).ok()?.next()?;
    let mut kind = None;
    let mut params = Params::new();
    for inner in directive.into_inner() {
        match inner.as_rule() {
            Rule::directive_type => kind = Some(inner.as_str().to_string()),
            Rule::param => {
                let (key, value) = build_param(inner)?;
                params.insert(key, value);
            }
            _ => {}
        }
    }
    Some((kind?, params))
}

fn build_param(pair: Pair<Rule>) -> Option<(String, String)> {
    let mut it = pair.into_inner();
    let key = it.next()?;
    let value = it.next()?;
    Some((key.as_str().to_string(), unescape(value.as_str())))
}

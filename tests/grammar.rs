//! Grammar tests: token boundaries of the segmenter and acceptance of the directive parser.

use cqcode::parser::{parse_directive, tokenize, Token};

fn texts(raw: &str) -> Vec<String> {
    tokenize(raw)
        .expect("tokenize")
        .iter()
        .map(|t| t.as_str().to_string())
        .collect()
}

// ==================== Segmenter ====================

#[test]
fn tokens_concatenate_to_input() {
    for raw in [
        "",
        "plain",
        "a[CQ:at,qq=1]b",
        "[CQ:face,id=1][CQ:face,id=2]",
        "[[CQ:x]]",
        "[CQ:a[CQ:b]",
        "x]y[z",
        "line1\n[CQ:image,file=a\nb]\nline3",
        "你好[CQ:at,qq=all]世界",
    ] {
        assert_eq!(texts(raw).concat(), raw, "concat of {:?}", raw);
    }
}

#[test]
fn plain_text_is_one_token() {
    assert_eq!(
        tokenize("hello, world").expect("tokenize"),
        vec![Token::Text("hello, world")]
    );
}

#[test]
fn directive_not_merged_with_text() {
    assert_eq!(texts("a[CQ:at,qq=1]b"), vec!["a", "[CQ:at,qq=1]", "b"]);
}

#[test]
fn brackets_around_directive() {
    assert_eq!(
        tokenize("[[CQ:x]]").expect("tokenize"),
        vec![Token::Text("["), Token::Directive("[CQ:x]"), Token::Text("]")]
    );
}

#[test]
fn empty_body_is_not_a_directive() {
    assert_eq!(
        tokenize("[CQ:]").expect("tokenize"),
        vec![Token::Text("[CQ:]")]
    );
}

#[test]
fn unterminated_directive_is_text() {
    assert_eq!(
        tokenize("[CQ:at,qq=1").expect("tokenize"),
        vec![Token::Text("[CQ:at,qq=1")]
    );
}

#[test]
fn directive_does_not_swallow_next_directive() {
    assert_eq!(
        tokenize("[CQ:a[CQ:b]").expect("tokenize"),
        vec![Token::Text("[CQ:a"), Token::Directive("[CQ:b]")]
    );
}

#[test]
fn directive_body_may_span_lines() {
    assert_eq!(
        texts("x[CQ:image,file=a\nb]y"),
        vec!["x", "[CQ:image,file=a\nb]", "y"]
    );
}

#[test]
fn lowercase_prefix_is_text() {
    assert_eq!(
        tokenize("[cq:at,qq=1]").expect("tokenize"),
        vec![Token::Text("[cq:at,qq=1]")]
    );
}

// ==================== Directive parser ====================

#[test]
fn directive_type_and_params_in_order() {
    let token = "[CQ:image,file=a.png,url=http://x/a.png,type=flash]";
    let (kind, params) = parse_directive(token).expect("directive");
    assert_eq!(kind, "image");
    let entries: Vec<_> = params.iter().collect();
    assert_eq!(
        entries,
        vec![("file", "a.png"), ("url", "http://x/a.png"), ("type", "flash")]
    );
}

#[test]
fn key_is_not_unescaped() {
    let (_, params) = parse_directive("[CQ:x,a&amp;b=c&amp;d]").expect("directive");
    assert_eq!(params.get("a&amp;b"), Some("c&d"));
}

#[test]
fn value_split_at_first_equals() {
    let (_, params) = parse_directive("[CQ:json,data=a=b==c]").expect("directive");
    assert_eq!(params.get("data"), Some("a=b==c"));
}

#[test]
fn value_entities_are_unescaped() {
    let (_, params) = parse_directive("[CQ:text,text=&#91;1&#44;2&#93;]").expect("directive");
    assert_eq!(params.get("text"), Some("[1,2]"));
}

#[test]
fn duplicate_key_last_value_wins() {
    let (_, params) = parse_directive("[CQ:at,qq=1,name=n,qq=2]").expect("directive");
    let entries: Vec<_> = params.iter().collect();
    assert_eq!(entries, vec![("qq", "2"), ("name", "n")]);
}

#[test]
fn type_with_spaces_is_kept_verbatim() {
    let (kind, _) = parse_directive("[CQ: at ,qq=1]").expect("directive");
    assert_eq!(kind, " at ");
}

#[test]
fn rejects_malformed() {
    for token in [
        "[CQ:]",
        "[CQ:,qq=1]",
        "[CQ:at,]",
        "[CQ:at,qq]",
        "[CQ:at,,qq=1]",
        "[CQ:at,qq=1",
        "CQ:at,qq=1]",
        "[CQ:at,qq=1]]",
    ] {
        assert!(parse_directive(token).is_none(), "{:?} should not parse", token);
    }
}

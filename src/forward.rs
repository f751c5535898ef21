//! Custom forward messages: a sequence of `node` segments sent under one sender identity.

use crate::segment::{Message, Segment};

/// One `node` per entry of `contents`, each carrying `name`, `uin` and `content`.
///
/// `content` is kept as given (typically raw CQ text); it is escaped when the node is encoded.
/// Parameters are strings, so array JSON carries `uin` as `"10001"`; OneBot implementations
/// accept both the string and the number form.
pub fn forward_nodes<I, S>(uin: i64, name: &str, contents: I) -> Message
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    contents
        .into_iter()
        .map(|content| {
            Segment::new("node")
                .with("name", name)
                .with("uin", uin.to_string())
                .with("content", content)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::json::to_array_string;

    #[test]
    fn one_node_per_content() {
        let nodes = forward_nodes(10001, "bot", ["first", "[CQ:face,id=1]"]);
        assert_eq!(nodes.len(), 2);
        let keys: Vec<_> = nodes.segments()[0].data.keys().collect();
        assert_eq!(keys, vec!["name", "uin", "content"]);
        assert_eq!(nodes.segments()[1].get("content"), Some("[CQ:face,id=1]"));
    }

    #[test]
    fn uin_is_a_json_string() {
        let nodes = forward_nodes(10001, "bot", ["hi"]);
        assert_eq!(
            to_array_string(&nodes).expect("serialize"),
            r#"[{"type":"node","data":{"name":"bot","uin":"10001","content":"hi"}}]"#
        );
    }

    #[test]
    fn empty_contents() {
        assert!(forward_nodes(1, "x", Vec::<String>::new()).is_empty());
    }
}

//! HTML serialization of rich text nodes

use super::Node;

pub(crate) fn write_nodes(nodes: &[Node], out: &mut String) {
    for node in nodes {
        match node {
            Node::Text(text) => escape_text(text, out),
            Node::Span { style, children } => {
                out.push_str("<span style=\"");
                escape_attr(&style.span_css(), out);
                out.push_str("\">");
                write_nodes(children, out);
                out.push_str("</span>");
            }
        }
    }
}

fn escape_text(text: &str, out: &mut String) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
}

fn escape_attr(value: &str, out: &mut String) {
    for c in value.chars() {
        match c {
            '"' => out.push_str("&quot;"),
            _ => escape_text(c.encode_utf8(&mut [0; 4]), out),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::TextStyle;

    #[test]
    fn test_escapes_text() {
        let mut out = String::new();
        write_nodes(&[Node::Text("a < b && c > d".into())], &mut out);
        assert_eq!(out, "a &lt; b &amp;&amp; c &gt; d");
    }

    #[test]
    fn test_escapes_quoted_family() {
        let style = TextStyle::new("\"Fira Code\"", "bold", false);
        let mut out = String::new();
        write_nodes(
            &[Node::Span {
                style,
                children: vec![Node::Text("x".into())],
            }],
            &mut out,
        );
        assert_eq!(
            out,
            "<span style=\"font-family: &quot;Fira Code&quot;; font-weight: bold; font-style: normal;\">x</span>"
        );
    }
}

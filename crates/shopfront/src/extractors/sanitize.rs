// ABOUTME: Structural HTML sanitizer that serializes a fragment with every attribute removed.
// ABOUTME: Tag names, nesting, text and comments survive; the source tree is never mutated.

use ego_tree::NodeRef;
use scraper::{ElementRef, Node};

const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

// Elements whose text children serialize without escaping.
const RAW_TEXT_ELEMENTS: &[&str] = &[
    "style", "script", "xmp", "iframe", "noembed", "noframes", "plaintext",
];

fn is_void_element(tag: &str) -> bool {
    VOID_ELEMENTS.contains(&tag)
}

fn escape_text(text: &str, out: &mut String) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\u{a0}' => out.push_str("&nbsp;"),
            _ => out.push(c),
        }
    }
}

/// Serializes the children of `element` with all attributes stripped, trimmed.
pub fn sanitized_inner_html(element: ElementRef<'_>) -> String {
    let raw_text = RAW_TEXT_ELEMENTS.contains(&element.value().name());
    let mut out = String::new();
    for child in element.children() {
        serialize_stripped(child, raw_text, &mut out);
    }
    out.trim().to_string()
}

fn serialize_stripped(node: NodeRef<'_, Node>, raw_text: bool, out: &mut String) {
    match node.value() {
        Node::Text(text) => {
            if raw_text {
                out.push_str(&**text);
            } else {
                escape_text(&**text, out);
            }
        }
        Node::Comment(comment) => {
            out.push_str("<!--");
            out.push_str(&**comment);
            out.push_str("-->");
        }
        Node::Element(el) => {
            let tag = el.name();
            out.push('<');
            out.push_str(tag);
            out.push('>');
            if is_void_element(tag) {
                return;
            }
            let child_raw = RAW_TEXT_ELEMENTS.contains(&tag);
            for child in node.children() {
                serialize_stripped(child, child_raw, out);
            }
            out.push_str("</");
            out.push_str(tag);
            out.push('>');
        }
        _ => {}
    }
}

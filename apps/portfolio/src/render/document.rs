//! Document tree produced by the renderer, plus its HTML and plain-text serializers.
//!
//! The tree is deliberately small: elements with ordered attributes, and text.
//! Hosts embed it as-is, or serialize it with [`Document::to_html`].

use serde::Serialize;

/// Tags written without a closing tag.
const VOID_TAGS: &[&str] = &["img", "meta", "br", "hr", "link", "input"];

/// Tags that start a new line in the plain-text rendition.
const BLOCK_TAGS: &[&str] = &[
    "div", "p", "li", "h1", "h2", "h3", "h4", "header", "footer", "section", "article", "aside",
    "main", "ul", "button",
];

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Node {
    Element(Element),
    Text { text: String },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Element {
    pub tag: String,
    /// Attribute pairs in insertion order.
    pub attrs: Vec<(String, String)>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: &str) -> Self {
        Element {
            tag: tag.to_string(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn attr(mut self, name: &str, value: impl Into<String>) -> Self {
        self.attrs.push((name.to_string(), value.into()));
        self
    }

    pub fn class(self, value: &str) -> Self {
        self.attr("class", value)
    }

    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    pub fn children<I, N>(mut self, nodes: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Node>,
    {
        self.children.extend(nodes.into_iter().map(Into::into));
        self
    }

    /// Appends `node` only when it is `Some`.
    pub fn child_opt(mut self, node: Option<impl Into<Node>>) -> Self {
        if let Some(node) = node {
            self.children.push(node.into());
        }
        self
    }

    pub fn text(self, value: impl Into<String>) -> Self {
        self.child(Node::text(value))
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Concatenated text of all descendant text nodes.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        collect_text(&self.children, &mut out);
        out
    }

    /// Every descendant element (including `self`) matching `predicate`, in document order.
    pub fn find_all<F>(&self, predicate: F) -> Vec<&Element>
    where
        F: Fn(&Element) -> bool,
    {
        let mut found = Vec::new();
        walk(self, &predicate, &mut found);
        found
    }

    pub fn find_by_attr(&self, name: &str, value: &str) -> Vec<&Element> {
        self.find_all(|el| el.get_attr(name) == Some(value))
    }

    pub fn find_by_tag(&self, tag: &str) -> Vec<&Element> {
        self.find_all(|el| el.tag == tag)
    }
}

impl Node {
    pub fn text(value: impl Into<String>) -> Self {
        Node::Text { text: value.into() }
    }
}

impl From<Element> for Node {
    fn from(el: Element) -> Self {
        Node::Element(el)
    }
}

fn walk<'a, F>(el: &'a Element, predicate: &F, found: &mut Vec<&'a Element>)
where
    F: Fn(&Element) -> bool,
{
    if predicate(el) {
        found.push(el);
    }
    for child in &el.children {
        if let Node::Element(inner) = child {
            walk(inner, predicate, found);
        }
    }
}

fn collect_text(nodes: &[Node], out: &mut String) {
    for node in nodes {
        match node {
            Node::Text { text } => out.push_str(text),
            Node::Element(el) => collect_text(&el.children, out),
        }
    }
}

/// A rendered page: a title and the root element of the body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Document {
    pub title: String,
    pub root: Element,
}

impl Document {
    pub fn find_all<F>(&self, predicate: F) -> Vec<&Element>
    where
        F: Fn(&Element) -> bool,
    {
        self.root.find_all(predicate)
    }

    pub fn find_by_attr(&self, name: &str, value: &str) -> Vec<&Element> {
        self.root.find_by_attr(name, value)
    }

    pub fn find_by_tag(&self, tag: &str) -> Vec<&Element> {
        self.root.find_by_tag(tag)
    }

    /// The section tagged `data-section="<name>"`, if rendered.
    pub fn section(&self, name: &str) -> Option<&Element> {
        self.find_by_attr("data-section", name).into_iter().next()
    }

    pub fn text_content(&self) -> String {
        self.root.text_content()
    }

    /// Full HTML5 page.
    pub fn to_html(&self) -> String {
        let mut out = String::with_capacity(8 * 1024);
        out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        out.push_str("<meta charset=\"utf-8\">\n");
        out.push_str(
            "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n",
        );
        out.push_str("<title>");
        escape_into(&self.title, &mut out);
        out.push_str("</title>\n</head>\n<body>\n");
        write_element(&self.root, &mut out);
        out.push_str("\n</body>\n</html>\n");
        out
    }

    /// Readable plain-text rendition: one line per block element, blank lines dropped.
    pub fn to_text(&self) -> String {
        let mut raw = String::new();
        write_text(&self.root, &mut raw);
        raw.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join("\n")
            + "\n"
    }
}

fn write_element(el: &Element, out: &mut String) {
    out.push('<');
    out.push_str(&el.tag);
    for (name, value) in &el.attrs {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        escape_into(value, out);
        out.push('"');
    }
    out.push('>');

    if VOID_TAGS.contains(&el.tag.as_str()) {
        return;
    }

    for child in &el.children {
        match child {
            Node::Text { text } => escape_into(text, out),
            Node::Element(inner) => write_element(inner, out),
        }
    }

    out.push_str("</");
    out.push_str(&el.tag);
    out.push('>');
}

fn write_text(el: &Element, out: &mut String) {
    let block = BLOCK_TAGS.contains(&el.tag.as_str());
    if block {
        out.push('\n');
    }
    for child in &el.children {
        match child {
            Node::Text { text } => out.push_str(text),
            Node::Element(inner) => write_text(inner, out),
        }
    }
    if el.tag == "li" {
        // Bullets read better with a marker.
        if let Some(pos) = out.rfind('\n') {
            out.insert_str(pos + 1, "- ");
        }
    }
    if block {
        out.push('\n');
    }
}

/// Escapes text for use in both element content and double-quoted attribute values.
fn escape_into(input: &str, out: &mut String) {
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Document {
        Document {
            title: "A & B".to_string(),
            root: Element::new("div")
                .class("root")
                .child(Element::new("p").attr("data-k", "1").text("one"))
                .child(
                    Element::new("ul")
                        .child(Element::new("li").text("x < y"))
                        .child(Element::new("li").text("z")),
                )
                .child(Element::new("img").attr("src", "a\"b.png")),
        }
    }

    #[test]
    fn test_text_is_escaped() {
        let doc = Document {
            title: String::new(),
            root: Element::new("p").text(r#"<a href="x">Tom & 'Jerry'</a>"#),
        };
        assert!(doc
            .to_html()
            .contains("<p>&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;</p>"));
    }

    #[test]
    fn test_to_html_escapes_and_closes() {
        let html = sample().to_html();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>A &amp; B</title>"));
        assert!(html.contains("<p data-k=\"1\">one</p>"));
        assert!(html.contains("<li>x &lt; y</li>"));
        assert!(html.contains("<img src=\"a&quot;b.png\">"));
        assert!(!html.contains("</img>"));
    }

    #[test]
    fn test_to_text_marks_list_items() {
        let text = sample().to_text();
        assert_eq!(text, "one\n- x < y\n- z\n");
    }

    #[test]
    fn test_find_all_is_document_order() {
        let doc = sample();
        let items: Vec<String> = doc
            .find_by_tag("li")
            .iter()
            .map(|li| li.text_content())
            .collect();
        assert_eq!(items, vec!["x < y", "z"]);
    }

    #[test]
    fn test_child_opt_skips_none() {
        let el = Element::new("div")
            .child_opt(None::<Element>)
            .child_opt(Some(Element::new("span")));
        assert_eq!(el.children.len(), 1);
    }

    #[test]
    fn test_get_attr_and_text_content() {
        let doc = sample();
        let p = doc.find_by_attr("data-k", "1");
        assert_eq!(p.len(), 1);
        assert_eq!(p[0].text_content(), "one");
        assert_eq!(doc.root.get_attr("class"), Some("root"));
    }
}

// src/core/html.rs
//
// Thin helpers over the scraper DOM. Everything here is tolerant: a missing
// node is `None` or an empty string, never an error.

use scraper::{ElementRef, Html, Node};

use super::sanitize::{normalize_entities, normalize_ws};

selector!(TABLE = "table");
selector!(TR = "tr");
selector!(STRONG = "strong");
selector!(BR = "br");

/// A parsed page snapshot. Parsers borrow it; nothing mutates it.
pub struct Document {
    html: Html,
}

impl Document {
    pub fn parse(raw: &str) -> Self {
        Self { html: Html::parse_document(raw) }
    }

    pub fn root(&self) -> ElementRef<'_> {
        self.html.root_element()
    }

    /// First `<table>` whose `attr` equals `value` (ASCII case-insensitive).
    pub fn table_with_attr(&self, attr: &str, value: &str) -> Option<ElementRef<'_>> {
        self.html.select(&TABLE).find(|t| attr_eq(*t, attr, value))
    }

    /// First `<table>` carrying `class` among its classes.
    pub fn table_with_class(&self, class: &str) -> Option<ElementRef<'_>> {
        self.html
            .select(&TABLE)
            .find(|t| t.value().classes().any(|c| c.eq_ignore_ascii_case(class)))
    }

    /// Every `<table>` that has `attr` at all, whatever its value.
    pub fn tables_having<'a>(&'a self, attr: &'a str) -> impl Iterator<Item = ElementRef<'a>> + 'a {
        self.html.select(&TABLE).filter(move |t| t.value().attr(attr).is_some())
    }
}

pub fn attr_eq(el: ElementRef<'_>, attr: &str, value: &str) -> bool {
    el.value()
        .attr(attr)
        .is_some_and(|v| v.trim().eq_ignore_ascii_case(value))
}

/// Text of an element: each text node trimmed, empty ones dropped, the rest
/// joined by single spaces.
pub fn text_of(el: ElementRef<'_>) -> String {
    let parts: Vec<&str> = el.text().map(str::trim).filter(|t| !t.is_empty()).collect();
    normalize_ws(&parts.join(" "))
}

/// Text of the first `<strong>` inside `el`, if it has any.
pub fn strong_text(el: ElementRef<'_>) -> Option<String> {
    el.select(&STRONG).next().map(text_of).filter(|t| !t.is_empty())
}

/// Text of whatever node sits right after the first `<br>` inside `el`.
/// `None` when the cell has no `<br>`; `Some("")` when the break ends the cell.
pub fn text_after_br(el: ElementRef<'_>) -> Option<String> {
    let br = el.select(&BR).next()?;
    let text = match br.next_sibling() {
        Some(node) => match node.value() {
            Node::Text(t) => normalize_ws(t),
            Node::Element(_) => ElementRef::wrap(node).map(text_of).unwrap_or_default(),
            _ => s!(),
        },
        None => s!(),
    };
    Some(text)
}

/// Closest enclosing element named `tag`, not counting `el` itself.
pub fn enclosing<'a>(el: ElementRef<'a>, tag: &str) -> Option<ElementRef<'a>> {
    el.ancestors()
        .filter_map(ElementRef::wrap)
        .find(|a| a.value().name() == tag)
}

/// Rows that belong to `table` itself, skipping rows of nested tables.
pub fn own_rows<'a>(table: ElementRef<'a>) -> Vec<ElementRef<'a>> {
    table
        .select(&TR)
        .filter(|tr| enclosing(*tr, "table").is_some_and(|t| t.id() == table.id()))
        .collect()
}

/// Direct `<td>` children of a row.
pub fn cells<'a>(row: ElementRef<'a>) -> Vec<ElementRef<'a>> {
    row.children()
        .filter_map(ElementRef::wrap)
        .filter(|c| c.value().name() == "td")
        .collect()
}

/// Next `<td>` sibling of a cell.
pub fn next_cell<'a>(cell: ElementRef<'a>) -> Option<ElementRef<'a>> {
    cell.next_siblings()
        .filter_map(ElementRef::wrap)
        .find(|c| c.value().name() == "td")
}

/// Strip tags from a raw HTML fragment and normalize entities and whitespace.
pub fn strip_tags<S: AsRef<str>>(s: S) -> String {
    let s = s.as_ref();

    let mut out = String::with_capacity(s.len());
    let mut in_tag = false;

    for ch in s.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    normalize_ws(&normalize_entities(&out))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_joins_nodes_with_single_spaces() {
        let doc = Document::parse("<table><tr><td> 21CSC101J<br>\n Regular </td></tr></table>");
        let row = doc.root().select(&TR).next().unwrap();
        assert_eq!(text_of(cells(row)[0]), "21CSC101J Regular");
    }

    #[test]
    fn own_rows_skip_nested_tables() {
        let doc = Document::parse(
            r#"<table id=outer><tr><td>a</td></tr>
                 <tr><td><table border=1><tr><td>inner</td></tr></table></td></tr>
               </table>"#,
        );
        let outer = doc.table_with_attr("id", "outer").unwrap();
        assert_eq!(own_rows(outer).len(), 2);
        let inner = doc.tables_having("border").next().unwrap();
        assert_eq!(own_rows(inner).len(), 1);
    }

    #[test]
    fn attr_match_ignores_case() {
        let doc = Document::parse(r##"<table bgcolor="#fafad2"><tr><td>x</td></tr></table>"##);
        assert!(doc.table_with_attr("bgcolor", "#FAFAD2").is_some());
        assert!(doc.table_with_attr("bgcolor", "#E6E6FA").is_none());
    }

    #[test]
    fn after_br_reads_text_or_nothing() {
        let doc = Document::parse(
            "<table><tr><td><strong>CT-1/20</strong><br> 15.5 </td><td>no break</td></tr></table>",
        );
        let row = doc.root().select(&TR).next().unwrap();
        let cs = cells(row);
        assert_eq!(text_after_br(cs[0]).as_deref(), Some("15.5"));
        assert_eq!(text_after_br(cs[1]), None);
        assert_eq!(strong_text(cs[0]).as_deref(), Some("CT-1/20"));
        assert_eq!(next_cell(cs[0]).map(text_of).as_deref(), Some("no break"));
    }

    #[test]
    fn strip_tags_cleans_fragment() {
        assert_eq!(strip_tags("<b>A&nbsp;&amp; B</b>\n <i>C</i>"), "A & B C");
    }
}

use std::collections::BTreeMap;

use crate::{
    animation::style::Style,
    dom::{
        document::{Document, NodeId, NodeKind},
        node::is_void,
    },
    foundation::error::FolioResult,
    page::Page,
};

pub fn escape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn escape_attr(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Serializes a [`Document`] subtree as HTML.
///
/// `inline_style` may supply a `style` attribute per element; it is merged after any
/// `style` attribute already present on the node.
pub struct HtmlWriter<'a> {
    doc: &'a Document,
    inline_style: &'a dyn Fn(NodeId) -> Option<String>,
    indent: bool,
}

impl<'a> HtmlWriter<'a> {
    pub fn new(doc: &'a Document, inline_style: &'a dyn Fn(NodeId) -> Option<String>) -> Self {
        Self {
            doc,
            inline_style,
            indent: true,
        }
    }

    pub fn compact(mut self) -> Self {
        self.indent = false;
        self
    }

    pub fn write(&self, id: NodeId, out: &mut String) {
        self.write_node(id, 0, out);
    }

    fn newline(&self, depth: usize, out: &mut String) {
        if self.indent {
            out.push('\n');
            for _ in 0..depth {
                out.push_str("  ");
            }
        }
    }

    fn write_node(&self, id: NodeId, depth: usize, out: &mut String) {
        let Some(node) = self.doc.node(id) else {
            return;
        };
        let NodeKind::Element {
            tag,
            id: elem_id,
            classes,
            attrs,
        } = &node.kind
        else {
            if let NodeKind::Text(t) = &node.kind {
                out.push_str(&escape_text(t));
            }
            return;
        };

        out.push('<');
        out.push_str(tag);
        if let Some(eid) = elem_id {
            push_attr(out, "id", eid);
        }
        if !classes.is_empty() {
            push_attr(out, "class", &classes.join(" "));
        }
        let extra_style = (self.inline_style)(id);
        let mut wrote_style = false;
        for (k, v) in attrs {
            if k == "style"
                && let Some(extra) = &extra_style
            {
                push_attr(out, "style", &format!("{v} {extra}"));
                wrote_style = true;
                continue;
            }
            push_attr(out, k, v);
        }
        if let Some(extra) = &extra_style
            && !wrote_style
        {
            push_attr(out, "style", extra);
        }
        out.push('>');

        if is_void(tag) {
            return;
        }

        // Text-only elements stay on one line.
        let block_children = node.children.iter().any(|&c| self.doc.tag(c).is_some());
        for &child in &node.children {
            if block_children {
                self.newline(depth + 1, out);
            }
            self.write_node(child, depth + 1, out);
        }
        if block_children {
            self.newline(depth, out);
        }
        out.push_str("</");
        out.push_str(tag);
        out.push('>');
    }
}

fn push_attr(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    out.push_str(&escape_attr(value));
    out.push('"');
}

/// Render without inline styles or indentation.
pub fn to_html(doc: &Document, id: NodeId) -> String {
    let none = |_: NodeId| -> Option<String> { None };
    let mut out = String::new();
    HtmlWriter::new(doc, &none).compact().write(id, &mut out);
    out
}

/// Options for [`render_document`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RenderOpts {
    /// Overrides the page title.
    pub title: Option<String>,
    /// Stylesheet href linked from `<head>`.
    pub stylesheet: Option<String>,
    /// Write each reveal target's starting state as an inline style, so the first paint
    /// matches what the animator applies at mount.
    pub inline_initial_styles: bool,
    /// Append the page [`Manifest`](crate::page::Manifest) as a JSON script block.
    pub embed_manifest: bool,
}

pub const MANIFEST_ID: &str = "folio-manifest";

/// Starting styles of every reveal target, later requests winning.
fn initial_styles(page: &Page, doc: &Document) -> BTreeMap<NodeId, String> {
    let mut out = BTreeMap::new();
    for entry in page.sections() {
        for req in &entry.reveals {
            let css = req.spec.from.resolve(Style::IDENTITY).to_css();
            for id in req.targets.resolve(doc) {
                out.insert(id, css.clone());
            }
        }
    }
    out
}

/// Serialize a composed page as a standalone HTML5 document.
#[tracing::instrument(skip_all, fields(title = page.title()))]
pub fn render_document(page: &Page, opts: &RenderOpts) -> FolioResult<String> {
    let doc = page.document()?;
    let styles = if opts.inline_initial_styles {
        initial_styles(page, &doc)
    } else {
        BTreeMap::new()
    };
    let lookup = |id: NodeId| styles.get(&id).cloned();

    let title = opts.title.as_deref().unwrap_or(page.title());
    let mut out = String::with_capacity(64 * 1024);
    out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    out.push_str("<meta charset=\"utf-8\">\n");
    out.push_str(
        "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
    );
    out.push_str("<title>");
    out.push_str(&escape_text(title));
    out.push_str("</title>\n");
    if let Some(href) = &opts.stylesheet {
        out.push_str("<link rel=\"stylesheet\"");
        push_attr(&mut out, "href", href);
        out.push_str(">\n");
    }
    out.push_str("</head>\n<body>\n");
    HtmlWriter::new(&doc, &lookup).write(doc.root(), &mut out);
    out.push('\n');

    if opts.embed_manifest {
        let json = serde_json::to_string(&page.manifest())?;
        out.push_str("<script type=\"application/json\"");
        push_attr(&mut out, "id", MANIFEST_ID);
        out.push('>');
        // Keep `</script>` inside strings from closing the block.
        out.push_str(&json.replace("</", "<\\/"));
        out.push_str("</script>\n");
    }
    out.push_str("</body>\n</html>\n");

    tracing::debug!(bytes = out.len(), nodes = doc.len(), "document rendered");
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/dom/html.rs"]
mod tests;

use super::*;
use crate::dom::node::{Node, el};

#[test]
fn text_and_attributes_are_escaped() {
    let root: Node = el("p")
        .attr("title", "a \"quoted\" <b>")
        .text("Tom & Jerry <3")
        .into();
    let doc = Document::from_root(root).unwrap();
    assert_eq!(
        to_html(&doc, doc.root()),
        "<p title=\"a &quot;quoted&quot; &lt;b&gt;\">Tom &amp; Jerry &lt;3</p>"
    );
}

#[test]
fn void_elements_have_no_closing_tag() {
    let root: Node = el("form")
        .child(el("input").id("name").attr("name", "name").attr("required", ""))
        .into();
    let doc = Document::from_root(root).unwrap();
    assert_eq!(
        to_html(&doc, doc.root()),
        "<form><input id=\"name\" name=\"name\" required=\"\"></form>"
    );
}

#[test]
fn inline_styles_are_applied_per_node() {
    let root: Node = el("div")
        .child(el("h2").id("t").class("text-3xl font-bold").text("Hi"))
        .into();
    let doc = Document::from_root(root).unwrap();
    let target = doc.get_element_by_id("t").unwrap();
    let style = move |id: NodeId| (id == target).then(|| "opacity: 0;".to_string());
    let mut out = String::new();
    HtmlWriter::new(&doc, &style).compact().write(doc.root(), &mut out);
    assert_eq!(
        out,
        "<div><h2 id=\"t\" class=\"text-3xl font-bold\" style=\"opacity: 0;\">Hi</h2></div>"
    );
}

#[test]
fn indented_output_nests_block_children() {
    let root: Node = el("ul").child(el("li").text("a")).into();
    let doc = Document::from_root(root).unwrap();
    let none = |_: NodeId| -> Option<String> { None };
    let mut out = String::new();
    HtmlWriter::new(&doc, &none).write(doc.root(), &mut out);
    assert_eq!(out, "<ul>\n  <li>a</li>\n</ul>");
}

mod full_page {
    use super::super::*;
    use crate::{
        content::ContentStore,
        page::{ComposeOpts, Manifest, Page},
    };

    fn page() -> Page {
        Page::compose(&ContentStore::builtin(), &ComposeOpts { year: Some(2026) })
    }

    #[test]
    fn shell_has_head_and_title() {
        let html = render_document(&page(), &RenderOpts::default()).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>\n<html lang=\"en\">"));
        assert!(html.contains("<title>Dorsa Khalili | Frontend Developer</title>"));
        assert!(html.contains("<section id=\"home\""));
        assert!(html.trim_end().ends_with("</html>"));
        assert!(!html.contains(MANIFEST_ID));
        assert!(!html.contains("stylesheet"));
    }

    #[test]
    fn title_and_stylesheet_options() {
        let opts = RenderOpts {
            title: Some("Me & co".into()),
            stylesheet: Some("/app.css".into()),
            ..RenderOpts::default()
        };
        let html = render_document(&page(), &opts).unwrap();
        assert!(html.contains("<title>Me &amp; co</title>"));
        assert!(html.contains("<link rel=\"stylesheet\" href=\"/app.css\">"));
    }

    #[test]
    fn initial_styles_are_inlined_on_targets() {
        let opts = RenderOpts {
            inline_initial_styles: true,
            ..RenderOpts::default()
        };
        let html = render_document(&page(), &opts).unwrap();
        assert!(html.contains(
            "id=\"hero-title\" class=\"text-4xl sm:text-5xl md:text-6xl lg:text-7xl font-bold mb-6 leading-tight\" style=\"opacity: 0; transform: translate(0px, 50px) scale(1);\""
        ));
        assert!(html.contains("style=\"opacity: 0; transform: translate(-50px, 0px) scale(1);\""));

        let plain = render_document(&page(), &RenderOpts::default()).unwrap();
        assert!(!plain.contains("opacity: 0"));
    }

    #[test]
    fn manifest_is_embedded_and_parses() {
        let opts = RenderOpts {
            embed_manifest: true,
            ..RenderOpts::default()
        };
        let page = page();
        let html = render_document(&page, &opts).unwrap();
        let open = format!("<script type=\"application/json\" id=\"{MANIFEST_ID}\">");
        let start = html.find(&open).unwrap() + open.len();
        let end = start + html[start..].find("</script>").unwrap();
        let manifest: Manifest = serde_json::from_str(&html[start..end]).unwrap();
        assert_eq!(manifest, page.manifest());
    }
}

use super::*;
use crate::{content::ContentBuilder, dom::document::Document};

#[test]
fn links_target_section_anchors() {
    let view = render(&ContentStore::builtin());
    let doc = Document::from_root(view.root.clone().into()).unwrap();
    let targets: Vec<_> = doc
        .query_tag_within(doc.root(), "a")
        .into_iter()
        .filter_map(|a| doc.attr(a, "data-scroll-to"))
        .collect();
    assert_eq!(
        targets,
        vec!["home", "about", "skills", "projects", "experience", "contact"]
    );
}

#[test]
fn resume_link_follows_content() {
    let store = ContentStore::builtin();
    let doc = Document::from_root(render(&store).root.into()).unwrap();
    let resume = doc
        .query_tag_within(doc.root(), "a")
        .into_iter()
        .find(|&a| doc.text_content(a) == "Resume")
        .unwrap();
    assert_eq!(doc.attr(resume, "href"), Some("/resume.pdf"));

    let mut info = store.personal().clone();
    info.resume_url = None;
    let bare = ContentBuilder::new(info).build().unwrap();
    let doc = Document::from_root(render(&bare).root.into()).unwrap();
    assert!(
        doc.query_tag_within(doc.root(), "a")
            .into_iter()
            .all(|a| doc.text_content(a) != "Resume")
    );
}

use super::*;
use crate::{content::ContentStore, page::ComposeOpts};

fn page() -> Page {
    Page::compose(&ContentStore::builtin(), &ComposeOpts { year: Some(2026) })
}

fn mount() -> PageSession {
    PageSession::mount(page(), &SiteConfig::default()).unwrap()
}

/// Step 60 fps frames from `from` to `to` seconds inclusive.
fn run(session: &mut PageSession, from: f64, to: f64) {
    let mut t = from;
    while t <= to + 1e-9 {
        session.frame(t);
        t += 1.0 / 60.0;
    }
}

#[test]
fn mount_registers_every_section() {
    let session = mount();
    // hero 4, about 2, skills 2, projects 2, experience 2, contact 2
    assert_eq!(session.animator().reveal_count(), 14);
    assert_eq!(session.animator().scrub_count(), 1);
    assert_eq!(session.mounted_sections(), SectionKind::ALL.to_vec());
    assert_eq!(session.scroll_offset(), 0.0);
}

#[test]
fn targets_start_at_from_state() {
    let session = mount();
    let title = session.style_of("hero-title").unwrap();
    assert_eq!(title.opacity, 0.0);
    assert_eq!(title.translate.y, 50.0);
    let about = session.style_of("about-title").unwrap();
    assert_eq!(about.opacity, 0.0);
    // Untouched elements keep the identity style.
    assert!(session.style_of("about").unwrap().is_identity());
    assert!(session.style_of("nope").is_none());
}

#[test]
fn hero_intro_plays_on_first_frames() {
    let mut session = mount();
    run(&mut session, 0.0, 2.5);
    let title = session.style_of("hero-title").unwrap();
    assert!((title.opacity - 1.0).abs() < 1e-9);
    assert!(title.translate.y.abs() < 1e-9);
    let social = session.style_of("hero-social").unwrap();
    assert!(social.translate.x.abs() < 1e-9);
    // Below the fold nothing has played.
    assert_eq!(session.style_of("about-title").unwrap().opacity, 0.0);
}

#[test]
fn navigation_reveals_and_scrolling_back_reverses() {
    let mut session = mount();
    run(&mut session, 0.0, 0.5);

    assert_eq!(session.navigate("about"), NavigateOutcome::Smooth);
    run(&mut session, 0.5, 4.0);
    let about = session.document().get_element_by_id("about").unwrap();
    let expected = (session.layout().top(about).unwrap() - 80.0).min(session.host().limit());
    assert!((session.scroll_offset() - expected).abs() < 1e-6);
    let title = session.style_of("about-title").unwrap();
    assert!((title.opacity - 1.0).abs() < 1e-9);

    assert_eq!(session.navigate("home"), NavigateOutcome::Smooth);
    run(&mut session, 4.0, 8.0);
    assert_eq!(session.scroll_offset(), 0.0);
    let title = session.style_of("about-title").unwrap();
    assert!(title.opacity.abs() < 1e-9);
    assert!((title.translate.y - 50.0).abs() < 1e-9);
}

#[test]
fn missing_target_is_a_no_op() {
    let mut session = mount();
    assert_eq!(session.navigate("blog"), NavigateOutcome::Missing);
    run(&mut session, 0.0, 1.0);
    assert_eq!(session.scroll_offset(), 0.0);
}

#[test]
fn without_controller_navigation_jumps_natively() {
    let mut session =
        PageSession::mount_with(page(), &SiteConfig::default(), SessionOpts { smooth: false })
            .unwrap();
    assert!(session.smooth().is_none());
    assert_eq!(session.navigate("skills"), NavigateOutcome::Native);
    let skills = session.document().get_element_by_id("skills").unwrap();
    let top = session.layout().top(skills).unwrap().min(session.host().limit());
    assert_eq!(session.scroll_offset(), top);

    let report = session.frame(0.0);
    assert_eq!(report.frame.offset, top);
    assert_eq!(report.frame.direction, ScrollDirection::Down);
    assert!(!report.animator.events.is_empty());
}

#[test]
fn native_input_moves_offset_directly() {
    let mut session =
        PageSession::mount_with(page(), &SiteConfig::default(), SessionOpts { smooth: false })
            .unwrap();
    assert!(session.input(ScrollInput::Wheel { delta_y: 120.0 }));
    assert_eq!(session.scroll_offset(), 120.0);
    assert!(session.input(ScrollInput::Touch { delta_y: -500.0 }));
    assert_eq!(session.scroll_offset(), 0.0);
    assert!(!session.input(ScrollInput::Wheel { delta_y: -10.0 }));
}

#[test]
fn native_input_ignores_non_finite_deltas() {
    let mut session =
        PageSession::mount_with(page(), &SiteConfig::default(), SessionOpts { smooth: false })
            .unwrap();
    assert!(session.input(ScrollInput::Wheel { delta_y: 300.0 }));
    assert!(!session.input(ScrollInput::Wheel { delta_y: f64::NAN }));
    assert!(!session.input(ScrollInput::Touch { delta_y: f64::INFINITY }));
    assert_eq!(session.scroll_offset(), 300.0);
}

#[test]
fn stopped_controller_ignores_navigation() {
    let mut session = mount();
    session.smooth_mut().unwrap().stop();
    assert_eq!(session.navigate("contact"), NavigateOutcome::Ignored);
    assert!(!session.input(ScrollInput::Wheel { delta_y: 100.0 }));
    session.smooth_mut().unwrap().start();
    assert_eq!(session.navigate("contact"), NavigateOutcome::Smooth);
}

#[test]
fn wheel_input_eases_downward() {
    let mut session = mount();
    session.frame(0.0);
    assert!(session.input(ScrollInput::Wheel { delta_y: 400.0 }));
    let mut last = 0.0;
    let mut t = 0.0;
    while t < 1.5 {
        t += 1.0 / 60.0;
        let report = session.frame(t);
        assert!(report.frame.offset >= last);
        assert_eq!(report.frame.offset, session.scroll_offset());
        last = report.frame.offset;
    }
    assert_eq!(session.scroll_offset(), 400.0);
}

#[test]
fn activate_follows_scroll_links() {
    let mut session = mount();
    let doc = session.document();
    let link = doc
        .query_tag_within(doc.root(), "a")
        .into_iter()
        .find(|&a| doc.attr(a, "data-scroll-to") == Some("contact"))
        .unwrap();
    let plain = doc.get_element_by_id("about-title").unwrap();
    assert_eq!(session.activate(link), Some(NavigateOutcome::Smooth));
    assert_eq!(session.activate(plain), None);
    run(&mut session, 0.0, 3.0);
    assert!(session.scroll_offset() > 0.0);
}

#[test]
fn unmounting_a_section_reverts_its_styles() {
    let mut session = mount();
    assert_eq!(session.unmount_section(SectionKind::Hero), 5);
    assert!(session.style_of("hero-title").unwrap().is_identity());
    assert_eq!(session.unmount_section(SectionKind::Hero), 0);
    assert_eq!(session.unmount_section(SectionKind::Footer), 0);
    assert!(!session.mounted_sections().contains(&SectionKind::Hero));
    assert_eq!(session.unmount(), 10);
}

#[test]
fn resize_relayouts_and_keeps_bindings() {
    let mut session = mount();
    session.navigate("contact");
    run(&mut session, 0.0, 3.0);
    let wide_limit = session.host().limit();

    session.resize(Viewport::new(390.0, 844.0).unwrap()).unwrap();
    assert_eq!(session.layout().viewport().width, 390.0);
    assert!(session.host().limit() > wide_limit);
    assert!(session.scroll_offset() <= session.host().limit());
    assert_eq!(session.animator().reveal_count(), 14);
    assert!(session.resize(Viewport { width: 0.0, height: 1.0 }).is_err());
}

#[test]
fn invalid_config_fails_mount() {
    let mut cfg = SiteConfig::default();
    cfg.scroll.duration = 0.0;
    assert!(PageSession::mount(page(), &cfg).is_err());
}

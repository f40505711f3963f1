use super::*;
use crate::{
    dom::{document::Document, node::el},
    foundation::core::Viewport,
    layout::{TextMetrics, solve},
};

fn page() -> (Document, Layout, ScrollHost) {
    let root = el("div")
        .child(el("section").id("a").class("h-250"))
        .child(el("section").id("b").class("h-250"));
    let doc = Document::from_root(root.into()).unwrap();
    let viewport = Viewport::new(1000.0, 800.0).unwrap();
    let layout = solve(&doc, viewport, &TextMetrics::default()).unwrap();
    let host = ScrollHost::new(viewport, layout.document_height()).unwrap();
    (doc, layout, host)
}

#[test]
fn wheel_input_eases_to_target_within_duration() {
    let (_, _, mut host) = page();
    let mut s = SmoothScroll::new(SmoothScrollOpts::default(), &host).unwrap();
    assert!(s.on_input(ScrollInput::Wheel { delta_y: 100.0 }));
    assert_eq!(s.target(), 100.0);

    let mut prev = 0.0;
    for i in 0..=72 {
        let frame = s.raf(i as f64 / 60.0, &mut host);
        assert!(frame.offset >= prev);
        assert!(frame.offset <= 100.0);
        prev = frame.offset;
    }
    let frame = s.raf(1.3, &mut host);
    assert_eq!(frame.offset, 100.0);
    assert_eq!(host.scroll_y(), 100.0);
    assert!(!s.is_scrolling());
}

#[test]
fn overshooting_ease_never_passes_the_target() {
    let (_, _, mut host) = page();
    let opts = SmoothScrollOpts {
        ease: Ease::OutBack { overshoot: 1.70158 },
        ..SmoothScrollOpts::default()
    };
    let mut s = SmoothScroll::new(opts, &host).unwrap();
    assert!(s.on_input(ScrollInput::Wheel { delta_y: 400.0 }));
    let mut peak: f64 = 0.0;
    for i in 0..=90 {
        peak = peak.max(s.raf(i as f64 / 60.0, &mut host).offset);
    }
    assert_eq!(peak, 400.0);
    assert_eq!(host.scroll_y(), 400.0);
}

#[test]
fn touch_is_weighted_more_than_wheel() {
    let (_, _, host) = page();
    let mut s = SmoothScroll::new(SmoothScrollOpts::default(), &host).unwrap();
    s.on_input(ScrollInput::Touch { delta_y: 50.0 });
    assert_eq!(s.target(), 100.0);
    s.on_input(ScrollInput::Wheel { delta_y: 50.0 });
    assert_eq!(s.target(), 150.0);
}

#[test]
fn target_never_leaves_the_document() {
    let (_, layout, host) = page();
    let mut s = SmoothScroll::new(SmoothScrollOpts::default(), &host).unwrap();
    s.on_input(ScrollInput::Wheel { delta_y: -100.0 });
    assert_eq!(s.target(), 0.0);
    s.on_input(ScrollInput::Wheel { delta_y: 1e9 });
    assert_eq!(s.target(), layout.scroll_limit());
    assert!(!s.on_input(ScrollInput::Wheel { delta_y: 0.0 }));
    assert!(!s.on_input(ScrollInput::Wheel { delta_y: f64::NAN }));
}

#[test]
fn non_smooth_wheel_jumps() {
    let (_, _, mut host) = page();
    let opts = SmoothScrollOpts {
        smooth_wheel: false,
        ..SmoothScrollOpts::default()
    };
    let mut s = SmoothScroll::new(opts, &host).unwrap();
    s.on_input(ScrollInput::Wheel { delta_y: 300.0 });
    assert_eq!(s.offset(), 300.0);
    assert_eq!(s.raf(0.0, &mut host).offset, 300.0);
}

#[test]
fn scroll_to_element_converges_monotonically() {
    let (doc, layout, mut host) = page();
    let b = doc.get_element_by_id("b").unwrap();
    let mut s = SmoothScroll::new(SmoothScrollOpts::default(), &host).unwrap();
    s.raf(10.0, &mut host);

    let opts = ScrollToOpts {
        offset: -80.0,
        duration: Some(1.5),
        immediate: false,
    };
    assert!(s.scroll_to(ScrollTarget::Element(b), opts, &layout));
    assert_eq!(s.target(), 920.0);

    let mut prev = 0.0;
    for i in 1..=90 {
        let frame = s.raf(10.0 + i as f64 / 60.0, &mut host);
        assert!(frame.offset >= prev, "frame {i} went backwards");
        assert!(frame.offset <= 920.0, "frame {i} overshot");
        assert_eq!(frame.direction, if frame.velocity > 0.0 {
            ScrollDirection::Down
        } else {
            ScrollDirection::Idle
        });
        prev = frame.offset;
    }
    assert_eq!(s.raf(11.6, &mut host).offset, 920.0);
}

#[test]
fn scroll_to_overrides_input_motion() {
    let (_, layout, mut host) = page();
    let mut s = SmoothScroll::new(SmoothScrollOpts::default(), &host).unwrap();
    s.on_input(ScrollInput::Wheel { delta_y: 600.0 });
    s.raf(0.0, &mut host);
    s.raf(0.3, &mut host);
    assert!(s.scroll_to(ScrollTarget::Top, ScrollToOpts::default(), &layout));
    assert_eq!(s.target(), 0.0);
    let f = s.raf(0.4, &mut host);
    assert_eq!(f.direction, ScrollDirection::Up);
    assert_eq!(s.raf(2.0, &mut host).offset, 0.0);
}

#[test]
fn missing_target_is_a_no_op() {
    let (_, layout, host) = page();
    let mut s = SmoothScroll::new(SmoothScrollOpts::default(), &host).unwrap();
    assert!(!s.scroll_to(
        ScrollTarget::Element(NodeId(999)),
        ScrollToOpts::default(),
        &layout
    ));
    assert_eq!(s.target(), 0.0);
}

#[test]
fn immediate_scroll_to_and_bottom() {
    let (_, layout, mut host) = page();
    let mut s = SmoothScroll::new(SmoothScrollOpts::default(), &host).unwrap();
    let opts = ScrollToOpts {
        immediate: true,
        ..ScrollToOpts::default()
    };
    assert!(s.scroll_to(ScrollTarget::Bottom, opts, &layout));
    let f = s.raf(0.0, &mut host);
    assert_eq!(f.offset, 1200.0);
    assert_eq!(f.progress, 1.0);
    assert_eq!(f.velocity, 1200.0);
}

#[test]
fn stop_ignores_input_until_started() {
    let (_, layout, host) = page();
    let mut s = SmoothScroll::new(SmoothScrollOpts::default(), &host).unwrap();
    s.stop();
    assert!(!s.on_input(ScrollInput::Wheel { delta_y: 100.0 }));
    assert!(!s.scroll_to(ScrollTarget::Offset(100.0), ScrollToOpts::default(), &layout));
    s.start();
    assert!(s.on_input(ScrollInput::Wheel { delta_y: 100.0 }));
}

#[test]
fn shrinking_limit_clamps_offsets() {
    let (_, _, host) = page();
    let mut s = SmoothScroll::new(SmoothScrollOpts::default(), &host).unwrap();
    s.on_input(ScrollInput::Wheel { delta_y: 1000.0 });
    s.set_limit(400.0);
    assert_eq!(s.target(), 400.0);
    assert_eq!(s.limit(), 400.0);
}

#[test]
fn opts_validation() {
    assert!(SmoothScrollOpts::default().validate().is_ok());
    let bad = SmoothScrollOpts {
        duration: 0.0,
        ..SmoothScrollOpts::default()
    };
    assert!(bad.validate().is_err());
    let bad = SmoothScrollOpts {
        touch_multiplier: f64::INFINITY,
        ..SmoothScrollOpts::default()
    };
    assert!(bad.validate().unwrap_err().to_string().contains("touch_multiplier"));
}

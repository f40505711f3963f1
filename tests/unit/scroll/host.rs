use super::*;

fn host() -> ScrollHost {
    ScrollHost::new(Viewport::new(1000.0, 800.0).unwrap(), 3000.0).unwrap()
}

#[test]
fn limit_is_document_minus_viewport() {
    assert_eq!(host().limit(), 2200.0);
    let short = ScrollHost::new(Viewport::new(1000.0, 800.0).unwrap(), 500.0).unwrap();
    assert_eq!(short.limit(), 0.0);
}

#[test]
fn scroll_is_clamped() {
    let mut h = host();
    assert_eq!(h.set_scroll(-50.0), 0.0);
    assert_eq!(h.set_scroll(5000.0), 2200.0);
    assert_eq!(h.set_scroll(f64::NAN), 0.0);
    assert_eq!(h.scroll_into_view(1200.0, -80.0), 1120.0);
    assert_eq!(h.scroll_y(), 1120.0);
}

#[test]
fn resize_reclamps_offset() {
    let mut h = host();
    h.set_scroll(2000.0);
    h.resize(Viewport::new(1000.0, 800.0).unwrap(), 2000.0).unwrap();
    assert_eq!(h.scroll_y(), 1200.0);
    assert!(h.resize(Viewport::new(1000.0, 800.0).unwrap(), -1.0).is_err());
}

#[test]
fn rejects_bad_geometry() {
    assert!(ScrollHost::new(Viewport::default(), f64::INFINITY).is_err());
    let zero = Viewport {
        width: 0.0,
        height: 800.0,
    };
    assert!(ScrollHost::new(zero, 100.0).is_err());
}

use super::*;

#[test]
fn partial_props_resolve_against_base() {
    let base = Style::IDENTITY;
    let s = StyleProps::new().opacity(0.0).y(50.0).resolve(base);
    assert_eq!(s.opacity, 0.0);
    assert_eq!(s.translate, Vec2::new(0.0, 50.0));
    assert_eq!(s.scale, 1.0);
}

#[test]
fn lerp_midpoint() {
    let a = StyleProps::new().opacity(0.0).y(60.0).scale(0.95).resolve(Style::IDENTITY);
    let b = Style::IDENTITY;
    let m = Style::lerp(&a, &b, 0.5);
    assert_eq!(m.opacity, 0.5);
    assert_eq!(m.translate.y, 30.0);
    assert!((m.scale - 0.975).abs() < 1e-12);
}

#[test]
fn compose_adds_translation_and_multiplies_the_rest() {
    let reveal = StyleProps::new().opacity(0.5).y(10.0).resolve(Style::IDENTITY);
    let overlay = StyleProps::new().y(-50.0).scale(2.0).resolve(Style::IDENTITY);
    let out = reveal.compose(&overlay);
    assert_eq!(out.translate.y, -40.0);
    assert_eq!(out.opacity, 0.5);
    assert_eq!(out.scale, 2.0);
}

#[test]
fn css_is_compact() {
    let s = StyleProps::new().opacity(0.0).y(50.0).resolve(Style::IDENTITY);
    assert_eq!(
        s.to_css(),
        "opacity: 0; transform: translate(0px, 50px) scale(1);"
    );
}

#[test]
fn unknown_fields_are_rejected() {
    assert!(serde_json::from_str::<StyleProps>(r#"{"rotate": 3}"#).is_err());
    let p: StyleProps = serde_json::from_str(r#"{"y": 30}"#).unwrap();
    assert_eq!(p, StyleProps::new().y(30.0));
}

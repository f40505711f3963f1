use super::*;

const POLY: [Ease; 10] = [
    Ease::Linear,
    Ease::InQuad,
    Ease::OutQuad,
    Ease::InOutQuad,
    Ease::InCubic,
    Ease::OutCubic,
    Ease::InOutCubic,
    Ease::InQuart,
    Ease::OutQuart,
    Ease::InOutQuart,
];

#[test]
fn endpoints_are_stable() {
    for ease in POLY {
        assert_eq!(ease.apply(0.0), 0.0);
        assert_eq!(ease.apply(1.0), 1.0);
    }
    let back = Ease::OutBack { overshoot: 1.7 };
    assert!(back.apply(0.0).abs() < 1e-12);
    assert!((back.apply(1.0) - 1.0).abs() < 1e-12);
}

#[test]
fn monotonic_spot_check() {
    for ease in POLY.into_iter().chain([Ease::OutExpo]) {
        let a = ease.apply(0.25);
        let b = ease.apply(0.5);
        let c = ease.apply(0.75);
        assert!(a < b);
        assert!(b < c);
    }
}

#[test]
fn expo_out_reaches_one_before_the_end() {
    assert!(Ease::OutExpo.apply(0.0) > 0.0);
    assert_eq!(Ease::OutExpo.apply(0.9975), 1.0);
    assert_eq!(Ease::OutExpo.apply(1.0), 1.0);
    assert!(Ease::OutExpo.is_monotonic());
}

#[test]
fn back_out_overshoots() {
    let back = Ease::OutBack { overshoot: 1.7 };
    let peak = (1..100)
        .map(|i| back.apply(f64::from(i) / 100.0))
        .fold(0.0, f64::max);
    assert!(peak > 1.0);
    assert!(!back.is_monotonic());
}

#[test]
fn parses_gsap_names() {
    assert_eq!("power3.out".parse::<Ease>().unwrap(), Ease::OutQuart);
    assert_eq!("expo.out".parse::<Ease>().unwrap(), Ease::OutExpo);
    assert_eq!(
        "back.out(1.7)".parse::<Ease>().unwrap(),
        Ease::OutBack { overshoot: 1.7 }
    );
    assert_eq!(
        "back.out".parse::<Ease>().unwrap(),
        Ease::OutBack {
            overshoot: Ease::BACK_OVERSHOOT
        }
    );
    assert!("elastic.out".parse::<Ease>().is_err());
    assert!("back.out(x)".parse::<Ease>().is_err());
}

#[test]
fn serde_uses_display_names() {
    let json = serde_json::to_string(&Ease::OutBack { overshoot: 1.7 }).unwrap();
    assert_eq!(json, "\"back.out(1.7)\"");
    let back: Ease = serde_json::from_str("\"power2.inOut\"").unwrap();
    assert_eq!(back, Ease::InOutCubic);
}

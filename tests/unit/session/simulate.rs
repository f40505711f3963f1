use super::*;
use crate::{content::ContentStore, page::ComposeOpts};

fn page() -> Page {
    Page::compose(&ContentStore::builtin(), &ComposeOpts { year: Some(2026) })
}

const SCRIPT: &str = r#"{
    "fps": 30,
    "duration_s": 4,
    "watch": ["hero-title", "about-title"],
    "sample_every": 15,
    "events": [
        { "at": 1.0, "action": "navigate", "target": "about" },
        { "at": 0.5, "action": "wheel", "delta_y": 100 },
        { "at": 3.0, "action": "navigate", "target": "blog" }
    ]
}"#;

#[test]
fn script_parses_with_defaults() {
    let script = Script::from_json_str(r#"{ "duration_s": 1 }"#).unwrap();
    assert_eq!(script.fps, 60.0);
    assert_eq!(script.sample_every, 1);
    assert!(script.smooth);
    assert_eq!(script.frame_count(), 61);

    let script = Script::from_json_str(SCRIPT).unwrap();
    assert_eq!(script.events.len(), 3);
    assert_eq!(
        script.events[0].action,
        ScriptAction::Navigate {
            target: "about".into()
        }
    );
}

#[test]
fn invalid_scripts_are_rejected() {
    assert!(Script::from_json_str(r#"{ "duration_s": -1 }"#).is_err());
    assert!(Script::from_json_str(r#"{ "duration_s": 1, "fps": 0 }"#).is_err());
    assert!(Script::from_json_str(r#"{ "duration_s": 1, "sample_every": 0 }"#).is_err());
    assert!(Script::from_json_str(r#"{ "duration_s": 100000, "fps": 1000 }"#).is_err());
    assert!(
        Script::from_json_str(r#"{ "duration_s": 1, "events": [{ "at": 0, "action": "fly" }] }"#)
            .is_err()
    );
}

#[test]
fn events_apply_in_time_order() {
    let script = Script::from_json_str(SCRIPT).unwrap();
    let report = simulate(page(), &SiteConfig::default(), &script).unwrap();

    assert_eq!(report.frames_total, 121);
    let kinds: Vec<_> = report.actions.iter().map(|a| a.action.clone()).collect();
    assert!(matches!(kinds[0], ScriptAction::Wheel { .. }));
    assert_eq!(report.actions[0].time_s, 0.5);
    assert_eq!(report.actions[1].outcome, Some(NavigateOutcome::Smooth));
    assert_eq!(report.actions[2].outcome, Some(NavigateOutcome::Missing));
    assert!(!report.actions[2].applied);

    // Samples every 15th frame plus the last.
    let indices: Vec<_> = report.samples.iter().map(|s| s.index).collect();
    assert_eq!(indices, vec![0, 15, 30, 45, 60, 75, 90, 105, 120]);
    assert!(report.final_offset > 0.0);

    let last = report.samples.last().unwrap();
    assert!((last.styles["about-title"].opacity - 1.0).abs() < 1e-9);
    assert!(report.events.iter().any(|e| e.event.scope == "about"));
}

#[test]
fn runs_are_deterministic() {
    let script = Script::from_json_str(SCRIPT).unwrap();
    let a = simulate(page(), &SiteConfig::default(), &script).unwrap();
    let b = simulate(page(), &SiteConfig::default(), &script).unwrap();
    assert_eq!(a, b);
    assert_eq!(
        serde_json::to_string(&a).unwrap(),
        serde_json::to_string(&b).unwrap()
    );
}

#[test]
fn resize_and_unmount_actions() {
    let script = Script::from_json_str(
        r#"{
            "duration_s": 0.5,
            "smooth": false,
            "viewport": { "width": 1024, "height": 768 },
            "watch": ["hero-title"],
            "events": [
                { "at": 0, "action": "resize", "width": 390, "height": 844 },
                { "at": 0.1, "action": "unmount_section", "section": "hero" },
                { "at": 0.2, "action": "unmount_section", "section": "hero" }
            ]
        }"#,
    )
    .unwrap();
    let report = simulate(page(), &SiteConfig::default(), &script).unwrap();
    let applied: Vec<_> = report.actions.iter().map(|a| a.applied).collect();
    assert_eq!(applied, vec![true, true, false]);
    let last = report.samples.last().unwrap();
    assert!(last.styles["hero-title"].is_identity());
}

#[test]
fn bad_resize_fails_the_run() {
    let script = Script::from_json_str(
        r#"{ "duration_s": 0.1, "events": [{ "at": 0, "action": "resize", "width": 0, "height": 5 }] }"#,
    )
    .unwrap();
    assert!(simulate(page(), &SiteConfig::default(), &script).is_err());
}

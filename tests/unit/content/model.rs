use super::*;

#[test]
fn end_date_present_round_trips_as_literal() {
    let d: EndDate = serde_json::from_str("\"Present\"").unwrap();
    assert!(d.is_present());
    assert_eq!(serde_json::to_string(&d).unwrap(), "\"Present\"");

    let y: EndDate = serde_json::from_str("\"2022\"").unwrap();
    assert_eq!(y, EndDate::Until("2022".into()));
    assert_eq!(y.to_string(), "2022");
}

#[test]
fn period_is_not_reformatted() {
    let e = Experience {
        id: "1".into(),
        company: "Acme".into(),
        position: "Engineer".into(),
        location: "Remote".into(),
        start_date: "2022".into(),
        end_date: EndDate::Present,
        description: vec![],
        technologies: vec![],
    };
    assert_eq!(e.period(), "2022 - Present");
}

#[test]
fn skill_enums_use_lowercase_names() {
    let s: Skill =
        serde_json::from_str(r#"{"name":"Rust","level":"advanced","category":"backend"}"#).unwrap();
    assert_eq!(s.level, SkillLevel::Advanced);
    assert_eq!(s.category, SkillCategory::Backend);
    assert!(
        serde_json::from_str::<Skill>(r#"{"name":"x","level":"novice","category":"tools"}"#)
            .is_err()
    );
}

#[test]
fn project_fields_are_camel_case() {
    let p: Project = serde_json::from_str(
        r#"{"id":"p","title":"T","description":"d","longDescription":"ld",
            "githubUrl":"https://g","featured":true,"category":"Web"}"#,
    )
    .unwrap();
    assert!(p.technologies.is_empty());
    assert_eq!(p.github_url.as_deref(), Some("https://g"));
    assert!(p.live_url.is_none());
}

use super::*;
use crate::content::builtin::sample_personal_info;

#[test]
fn builder_creates_expected_structure() {
    let mut featured = project("a", "Alpha", "first", "Web");
    featured.featured = true;
    featured.technologies = vec!["Rust".into()];

    let store = ContentBuilder::new(sample_personal_info())
        .skill("Rust", SkillLevel::Expert, SkillCategory::Backend)
        .project(featured)
        .unwrap()
        .project(project("b", "Beta", "second", "CLI"))
        .unwrap()
        .experience(experience("e1", "Acme", "Engineer", "2021", "Present"))
        .unwrap()
        .build()
        .unwrap();

    assert_eq!(store.skills().len(), 1);
    assert_eq!(store.projects().len(), 2);
    assert_eq!(store.featured_projects().count(), 1);
    assert_eq!(store.current_roles().count(), 1);
}

#[test]
fn duplicate_project_id_is_rejected() {
    let builder = ContentBuilder::new(sample_personal_info())
        .project(project("a", "Alpha", "x", "Web"))
        .unwrap();
    assert!(builder.project(project("a", "Again", "y", "Web")).is_err());
}

#[test]
fn duplicate_experience_id_is_rejected() {
    let builder = ContentBuilder::new(sample_personal_info())
        .experience(experience("1", "A", "Dev", "2019", "2020"))
        .unwrap();
    assert!(
        builder
            .experience(experience("1", "B", "Dev", "2020", "2021"))
            .is_err()
    );
}

#[test]
fn build_validates_personal_info() {
    let mut personal = sample_personal_info();
    personal.email = "  ".into();
    assert!(ContentBuilder::new(personal).build().is_err());
}

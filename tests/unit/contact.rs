use super::*;

fn filled() -> ContactForm {
    let mut form = ContactForm::new();
    form.set_field(FormField::Name, "Jane");
    form.set_field(FormField::Email, "jane@example.com");
    form.set_field(FormField::Message, "Hi");
    form
}

#[test]
fn submit_builds_mailto_link() {
    let link = filled().submit("me@example.com").unwrap();
    assert_eq!(
        link.as_str(),
        "mailto:me@example.com?subject=Contact from Jane&body=Hi"
    );
}

#[test]
fn body_is_percent_encoded_subject_is_not() {
    let mut form = filled();
    form.set_field(FormField::Name, "Jane Doe");
    form.set_field(FormField::Message, "Hello there & (thanks)!\nBye");
    let link = form.submit("me@example.com").unwrap();
    assert_eq!(
        link.to_string(),
        "mailto:me@example.com?subject=Contact from Jane Doe&body=Hello%20there%20%26%20(thanks)!%0ABye"
    );
}

#[test]
fn missing_fields_are_reported_in_order() {
    let mut form = ContactForm::new();
    form.set_field(FormField::Email, "x@y.z");
    assert_eq!(
        form.missing_fields(),
        vec![FormField::Name, FormField::Message]
    );
    let err = form.submit("me@example.com").unwrap_err();
    assert!(err.to_string().contains("'name' is required"));
}

#[test]
fn empty_recipient_is_rejected() {
    assert!(filled().submit("  ").is_err());
}

#[test]
fn field_names_parse() {
    for f in FormField::ALL {
        assert_eq!(f.as_str().parse::<FormField>().unwrap(), f);
    }
    assert!("phone".parse::<FormField>().is_err());
}

use super::*;

fn form(first: &str, last: &str, phone: &str) -> EditForm {
    EditForm { first_name: first.into(), last_name: last.into(), phone: phone.into(), email: None }
}

#[test]
fn valid_form_passes() {
    assert_eq!(validate(&form("Ada", "Park", "555-1234")), Ok(()));
}

#[test]
fn names_are_required() {
    let err = validate(&form("", "", "555-1234")).unwrap_err();
    assert_eq!(
        err.0,
        vec![
            FieldError { field: "firstName", message: "Must enter a First Name" },
            FieldError { field: "lastName", message: "Must enter a Last Name" },
        ]
    );
}

#[test]
fn names_allow_exactly_255_chars() {
    let max = "a".repeat(NAME_MAX_CHARS);
    assert!(validate(&form(&max, &max, "55512")).is_ok());

    let over = "a".repeat(NAME_MAX_CHARS + 1);
    let err = validate(&form(&over, "Park", "55512")).unwrap_err();
    assert_eq!(err.0[0].message, "Must be shorter than 255 Characters");
}

#[test]
fn phone_length_bounds() {
    assert!(validate(&form("Ada", "Park", "5551")).is_err());
    assert!(validate(&form("Ada", "Park", "55512")).is_ok());
    assert!(validate(&form("Ada", "Park", &"5".repeat(20))).is_ok());

    let err = validate(&form("Ada", "Park", &"5".repeat(21))).unwrap_err();
    assert_eq!(err.0, vec![FieldError { field: "phone", message: "*Numbers can't be longer than 20 digits" }]);
}

#[test]
fn missing_phone_reports_required_message() {
    let err = validate(&form("Ada", "Park", "")).unwrap_err();
    assert_eq!(err.0[0].message, "*a valid phone number is required");
}

#[test]
fn display_joins_field_messages() {
    let err = validate(&form("", "Park", "123")).unwrap_err();
    assert_eq!(
        err.to_string(),
        "firstName: Must enter a First Name; \
         phone: *Number must contain at least 5 digits to be a valid phone/text number"
    );
    assert_eq!(err.error_code(), "E_VALIDATION");
}

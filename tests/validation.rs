use contact_popup::validation::{is_email, is_phone, validate, validate_contact, ContactError};

#[test]
fn test_valid_emails() {
    assert!(validate("user@example.com"));
    assert!(validate("first.last-name@my-domain.io"));
    assert!(validate("USER@EXAMPLE.COM"));
    assert!(validate("  padded@example.org  "));
}

#[test]
fn test_invalid_emails() {
    assert!(!is_email("not-an-email"));
    assert!(!is_email("user@example"));
    assert!(!is_email("user@example.c"));
    assert!(!is_email("@example.com"));
    // Only one domain label before the TLD is accepted
    assert!(!is_email("user@mail.example.com"));
    assert!(!is_email("user name@example.com"));
}

#[test]
fn test_valid_phones() {
    assert!(is_phone("+1 (555) 123-4567"));
    assert!(is_phone("5551234"));
    assert!(is_phone("555.123.4567"));
    assert!(is_phone("+44 20 7946 0958"));
}

#[test]
fn test_invalid_phones() {
    // Too short
    assert!(!is_phone("123456"));
    // Too long (21 characters)
    assert!(!is_phone("123456789012345678901"));
    // Plus only allowed at the start
    assert!(!is_phone("555+1234567"));
    assert!(!is_phone("555-CALL-NOW"));
}

#[test]
fn test_phone_length_boundaries() {
    assert!(is_phone("1234567"));
    assert!(is_phone("12345678901234567890"));
    assert!(is_phone("+12345678901234567890"));
}

#[test]
fn test_validate_contact_empty() {
    assert_eq!(validate_contact(""), Err(ContactError::EmptyContact));
    assert_eq!(validate_contact("   \t "), Err(ContactError::EmptyContact));
}

#[test]
fn test_validate_contact_invalid_format() {
    assert_eq!(validate_contact("not-an-email"), Err(ContactError::InvalidFormat));
}

#[test]
fn test_validate_contact_returns_trimmed() {
    assert_eq!(validate_contact("  user@example.com "), Ok("user@example.com"));
    assert_eq!(validate_contact(" +1 (555) 123-4567"), Ok("+1 (555) 123-4567"));
}

#[test]
fn test_error_messages() {
    assert_eq!(ContactError::EmptyContact.to_string(), "Contact info is required.");
    assert_eq!(
        ContactError::InvalidFormat.to_string(),
        "Please enter a valid phone number or email address."
    );
}

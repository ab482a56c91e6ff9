//! Contact and sign-in form validation.
//!
//! Validation is user feedback, not an error path: every failing field gets
//! one inline message and the form is not "sent". Lengths are UTF-16 code
//! units so limits agree with the browser's `value.length`.

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

pub const EMAIL_FIELD: &str = "email";
pub const MESSAGE_FIELD: &str = "message";
pub const REMEMBER_FIELD: &str = "remember";

pub const INVALID_EMAIL: &str = "Please enter a valid email address";

pub const SENDING_LABEL: &str = "Sending...";
pub const IDLE_LABEL: &str = "Send Message";
pub const SENT_MESSAGE: &str = "Message sent successfully! We'll contact you soon.";

/// Class of the inline error paragraph appended next to a field.
pub const ERROR_MESSAGE_CLASS: &str = "input-error";

/// Class added to a field while it shows an error.
pub const ERROR_FIELD_CLASS: &str = "error";

/// One failing field and the message to show next to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    fn new(field: &str, message: impl Into<String>) -> Self {
        Self { field: field.to_owned(), message: message.into() }
    }
}

/// Length as the browser reports it for an input's value.
#[must_use]
pub fn text_len(value: &str) -> usize {
    value.encode_utf16().count()
}

/// Whitespace as a JavaScript regex `\s` matches it: the ECMAScript
/// WhiteSpace and LineTerminator sets.
///
/// Narrower than [`char::is_whitespace`] in places (U+0085 is not included)
/// and wider in others (U+FEFF is).
#[must_use]
pub fn is_js_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n' | '\u{0B}' | '\u{0C}' | '\r' | ' ' | '\u{A0}' | '\u{1680}' | '\u{2000}'..='\u{200A}'
            | '\u{2028}' | '\u{2029}' | '\u{202F}' | '\u{205F}' | '\u{3000}' | '\u{FEFF}'
    )
}

/// Loose email shape check: `local@domain.tld`.
///
/// The local part and domain must be non-empty and free of whitespace and
/// `@`, and the domain needs a dot with at least one character on each side.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    if email.chars().any(is_js_whitespace) {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

#[must_use]
pub fn short_message_error(min_len: usize) -> String {
    format!("Message must be at least {min_len} characters")
}

/// Validate the contact form, email first.
#[must_use]
pub fn validate_contact(email: &str, message: &str, min_message_len: usize) -> Vec<FieldError> {
    let mut errors = Vec::new();
    if !is_valid_email(email) {
        errors.push(FieldError::new(EMAIL_FIELD, INVALID_EMAIL));
    }
    if text_len(message) < min_message_len {
        errors.push(FieldError::new(MESSAGE_FIELD, short_message_error(min_message_len)));
    }
    errors
}

/// Validate the mock sign-in form.
#[must_use]
pub fn validate_login(email: &str) -> Vec<FieldError> {
    if is_valid_email(email) {
        Vec::new()
    } else {
        vec![FieldError::new(EMAIL_FIELD, INVALID_EMAIL)]
    }
}

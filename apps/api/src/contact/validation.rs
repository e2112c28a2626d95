use serde::Deserialize;

use crate::models::contact::NewContactMessage;

#[derive(Debug, Clone, Deserialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldError {
    pub field: &'static str,
    pub reason: String,
}

/// Character bounds, checked after trimming.
const NAME_LEN: (usize, usize) = (2, 100);
const SUBJECT_LEN: (usize, usize) = (5, 200);
const MESSAGE_LEN: (usize, usize) = (10, 2000);

/// Validates a contact submission, collecting every failing field.
pub fn validate_contact(req: &ContactRequest) -> Result<NewContactMessage, Vec<FieldError>> {
    let name = req.name.trim();
    let email = req.email.trim();
    let subject = req.subject.trim();
    let message = req.message.trim();

    let mut errors = Vec::new();
    check_length("name", name, NAME_LEN, &mut errors);
    if !is_plausible_email(email) {
        errors.push(FieldError {
            field: "email",
            reason: "must be a valid e-mail address".to_string(),
        });
    }
    check_length("subject", subject, SUBJECT_LEN, &mut errors);
    check_length("message", message, MESSAGE_LEN, &mut errors);

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(NewContactMessage {
        name: name.to_string(),
        email: normalize_email(email),
        subject: subject.to_string(),
        message: message.to_string(),
    })
}

pub fn describe(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| format!("{}: {}", e.field, e.reason))
        .collect::<Vec<_>>()
        .join("; ")
}

fn check_length(
    field: &'static str,
    value: &str,
    (min, max): (usize, usize),
    errors: &mut Vec<FieldError>,
) {
    let len = value.chars().count();
    if len < min || len > max {
        errors.push(FieldError {
            field,
            reason: format!("must be between {min} and {max} characters (got {len})"),
        });
    }
}

/// Lowercases the domain only; the local part is kept as typed.
fn normalize_email(email: &str) -> String {
    match email.rsplit_once('@') {
        Some((local, domain)) => format!("{local}@{}", domain.to_lowercase()),
        None => email.to_string(),
    }
}

/// Structural check only: `local@domain.tld`, no whitespace.
fn is_plausible_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = email.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    !local.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !domain.contains("..")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> ContactRequest {
        ContactRequest {
            name: "Grace Hopper".to_string(),
            email: "Grace@Navy.mil".to_string(),
            subject: "Compiler internship".to_string(),
            message: "I enjoyed your projects page a lot.".to_string(),
        }
    }

    #[test]
    fn test_valid_submission_is_normalized() {
        let msg = validate_contact(&ContactRequest {
            name: "  Grace Hopper ".to_string(),
            ..valid()
        })
        .unwrap();
        assert_eq!(msg.name, "Grace Hopper");
        assert_eq!(msg.email, "Grace@navy.mil");
    }

    #[test]
    fn test_email_local_part_keeps_its_case() {
        let msg = validate_contact(&ContactRequest {
            email: " First.LAST+Tag@Sub.Example.ORG ".to_string(),
            ..valid()
        })
        .unwrap();
        assert_eq!(msg.email, "First.LAST+Tag@sub.example.org");
    }

    #[test]
    fn test_short_name_rejected() {
        let errs = validate_contact(&ContactRequest {
            name: " G ".to_string(),
            ..valid()
        })
        .unwrap_err();
        assert_eq!(errs.len(), 1);
        assert_eq!(errs[0].field, "name");
    }

    #[test]
    fn test_long_message_rejected() {
        let errs = validate_contact(&ContactRequest {
            message: "x".repeat(2001),
            ..valid()
        })
        .unwrap_err();
        assert_eq!(errs[0].field, "message");
    }

    #[test]
    fn test_boundary_lengths_accepted() {
        assert!(validate_contact(&ContactRequest {
            name: "Al".to_string(),
            subject: "Hello".to_string(),
            message: "x".repeat(2000),
            ..valid()
        })
        .is_ok());
    }

    #[test]
    fn test_lengths_count_characters_not_bytes() {
        // 5 chars, 15 bytes
        assert!(validate_contact(&ContactRequest {
            subject: "日本語です".to_string(),
            ..valid()
        })
        .is_ok());
    }

    #[test]
    fn test_bad_emails() {
        for email in [
            "",
            "plain",
            "@example.com",
            "a@b",
            "a@.com",
            "a@com.",
            "a@@b.com",
            "a b@c.com",
            "a@b..com",
        ] {
            assert!(!is_plausible_email(email), "{email} should be rejected");
        }
        assert!(is_plausible_email("first.last+tag@sub.example.org"));
    }

    #[test]
    fn test_all_errors_collected() {
        let errs = validate_contact(&ContactRequest {
            name: String::new(),
            email: "nope".to_string(),
            subject: "hi".to_string(),
            message: "short".to_string(),
        })
        .unwrap_err();
        let fields: Vec<_> = errs.iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["name", "email", "subject", "message"]);
        assert!(describe(&errs).starts_with("name: must be between 2 and 100"));
    }
}

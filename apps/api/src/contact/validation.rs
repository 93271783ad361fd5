//! Contact-form schema check.
//!
//! Every field is inspected and all problems are reported together, so the
//! form can highlight each offending input at once.

use serde::Deserialize;
use serde_json::Value;

use crate::errors::FieldError;
use crate::models::{NewContactRequest, Urgency};

/// Raw request body. Fields stay untyped so a wrong JSON type becomes a
/// field error instead of a whole-body rejection.
#[derive(Debug, Default, Deserialize)]
pub struct ContactSubmission {
    pub name: Option<Value>,
    pub email: Option<Value>,
    pub phone: Option<Value>,
    pub subject: Option<Value>,
    pub message: Option<Value>,
    pub urgency: Option<Value>,
}

fn required_string(
    field: &'static str,
    value: Option<&Value>,
    errors: &mut Vec<FieldError>,
) -> Option<String> {
    match value {
        None | Some(Value::Null) => {
            errors.push(FieldError::new(field, "Required"));
            None
        }
        Some(Value::String(s)) if s.trim().is_empty() => {
            errors.push(FieldError::new(field, "Must not be empty"));
            None
        }
        Some(Value::String(s)) => Some(s.trim().to_string()),
        Some(_) => {
            errors.push(FieldError::new(field, "Expected string"));
            None
        }
    }
}

fn optional_string(
    field: &'static str,
    value: Option<&Value>,
    errors: &mut Vec<FieldError>,
) -> Option<String> {
    match value {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) if s.trim().is_empty() => None,
        Some(Value::String(s)) => Some(s.trim().to_string()),
        Some(_) => {
            errors.push(FieldError::new(field, "Expected string"));
            None
        }
    }
}

/// Local part and domain must be non-empty and the domain must contain a dot.
pub fn is_plausible_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && !email.chars().any(char::is_whitespace)
        && domain
            .split_once('.')
            .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty() && !tld.ends_with('.'))
}

pub fn validate_contact(submission: &ContactSubmission) -> Result<NewContactRequest, Vec<FieldError>> {
    let mut errors = Vec::new();

    let name = required_string("name", submission.name.as_ref(), &mut errors);
    let email = required_string("email", submission.email.as_ref(), &mut errors);
    let phone = optional_string("phone", submission.phone.as_ref(), &mut errors);
    let subject = required_string("subject", submission.subject.as_ref(), &mut errors);
    let message = required_string("message", submission.message.as_ref(), &mut errors);
    let urgency_raw = required_string("urgency", submission.urgency.as_ref(), &mut errors);

    if let Some(email) = &email {
        if !is_plausible_email(email) {
            errors.push(FieldError::new("email", "Invalid email"));
        }
    }

    let urgency = urgency_raw.as_deref().and_then(|raw| match raw.parse::<Urgency>() {
        Ok(u) => Some(u),
        Err(_) => {
            errors.push(FieldError::new(
                "urgency",
                format!("Invalid enum value. Expected 'low' | 'medium' | 'high', received '{raw}'"),
            ));
            None
        }
    });

    match (name, email, subject, message, urgency) {
        (Some(name), Some(email), Some(subject), Some(message), Some(urgency)) if errors.is_empty() => {
            Ok(NewContactRequest {
                name,
                email,
                phone,
                subject,
                message,
                urgency,
            })
        }
        _ => Err(errors),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn submission(body: Value) -> ContactSubmission {
        serde_json::from_value(body).unwrap()
    }

    fn fields(errors: &[FieldError]) -> Vec<&str> {
        errors.iter().map(|e| e.field.as_str()).collect()
    }

    #[test]
    fn test_valid_submission() {
        let s = submission(json!({
            "name": "Maria Lopez",
            "email": "maria@example.com",
            "phone": "555-0101",
            "subject": "Visiting hours",
            "message": "When can family visit?",
            "urgency": "high"
        }));
        let request = validate_contact(&s).unwrap();
        assert_eq!(request.urgency, Urgency::High);
        assert_eq!(request.phone.as_deref(), Some("555-0101"));
    }

    #[test]
    fn test_phone_is_optional() {
        let s = submission(json!({
            "name": "Sam",
            "email": "sam@example.org",
            "subject": "Hi",
            "message": "Question",
            "urgency": "low",
            "phone": ""
        }));
        assert_eq!(validate_contact(&s).unwrap().phone, None);
    }

    #[test]
    fn test_invalid_urgency() {
        let s = submission(json!({
            "name": "Sam",
            "email": "sam@example.org",
            "subject": "Hi",
            "message": "Question",
            "urgency": "invalid"
        }));
        let errors = validate_contact(&s).unwrap_err();
        assert_eq!(fields(&errors), vec!["urgency"]);
        assert!(errors[0].message.contains("received 'invalid'"));
    }

    #[test]
    fn test_urgency_is_case_sensitive() {
        let s = submission(json!({
            "name": "Sam",
            "email": "sam@example.org",
            "subject": "Hi",
            "message": "Question",
            "urgency": "High"
        }));
        assert!(validate_contact(&s).is_err());
    }

    #[test]
    fn test_all_missing_fields_reported() {
        let errors = validate_contact(&submission(json!({}))).unwrap_err();
        assert_eq!(fields(&errors), vec!["name", "email", "subject", "message", "urgency"]);
        assert!(errors.iter().all(|e| e.message == "Required"));
    }

    #[test]
    fn test_wrong_types_and_blanks() {
        let s = submission(json!({
            "name": 42,
            "email": "   ",
            "phone": 5550101,
            "subject": ["a"],
            "message": "ok",
            "urgency": "medium"
        }));
        let errors = validate_contact(&s).unwrap_err();
        assert_eq!(fields(&errors), vec!["name", "email", "phone", "subject"]);
    }

    #[test]
    fn test_email_shape() {
        for ok in ["a@b.co", "first.last@mail.example.com"] {
            assert!(is_plausible_email(ok), "{ok}");
        }
        for bad in ["plain", "@b.co", "a@", "a@b", "a@.com", "a@b.", "a b@c.io", "a@b@c.io"] {
            assert!(!is_plausible_email(bad), "{bad}");
        }
    }
}

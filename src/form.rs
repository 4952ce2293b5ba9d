//! Declarative form schemas and the state a form component keeps between
//! keystrokes.
//!
//! A [`FormState`] owns the current value of every field in its [`Schema`].
//! Submitting validates every field; on success the caller's notifier runs
//! exactly once and all values go back to empty.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use thiserror::Error;

pub type Values = BTreeMap<&'static str, String>;

static EMAIL_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^[A-Z0-9_'+\-.]*[A-Z0-9_+\-]@([A-Z0-9][A-Z0-9\-]*\.)+[A-Z]{2,}$")
        .expect("email pattern should compile")
});

pub fn is_email(value: &str) -> bool {
    !value.starts_with('.') && !value.contains("..") && EMAIL_SHAPE.is_match(value)
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum FieldError {
    #[error("{message}")]
    TooShort { min: usize, message: &'static str },
    #[error("{0}")]
    InvalidEmail(&'static str),
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("{} field(s) failed validation", .0.len())]
pub struct ValidationErrors(pub BTreeMap<&'static str, FieldError>);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rule {
    Optional,
    MinLen(usize, &'static str),
    Email(&'static str),
}

impl Rule {
    pub fn check(&self, value: &str) -> Result<(), FieldError> {
        match *self {
            Rule::Optional => Ok(()),
            Rule::MinLen(min, message) if value.chars().count() < min => {
                Err(FieldError::TooShort { min, message })
            }
            Rule::MinLen(..) => Ok(()),
            Rule::Email(message) if !is_email(value) => Err(FieldError::InvalidEmail(message)),
            Rule::Email(_) => Ok(()),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Field {
    pub name: &'static str,
    pub rule: Rule,
}

#[derive(Debug, PartialEq, Eq)]
pub struct Schema {
    fields: &'static [Field],
}

impl Schema {
    pub const fn new(fields: &'static [Field]) -> Self {
        Self { fields }
    }

    pub fn fields(&self) -> &'static [Field] {
        self.fields
    }

    fn field(&self, name: &str) -> Option<&'static Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Checks every field; a missing value counts as empty.
    pub fn validate(&self, values: &Values) -> Result<(), ValidationErrors> {
        let errors: BTreeMap<_, _> = self
            .fields
            .iter()
            .filter_map(|field| {
                let value = values.get(field.name).map(String::as_str).unwrap_or("");
                field.rule.check(value).err().map(|err| (field.name, err))
            })
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors(errors))
        }
    }
}

const VALID_EMAIL: &str = "Enter a valid email address";

pub static CONTACT: Schema = Schema::new(&[
    Field { name: "name", rule: Rule::MinLen(2, "Please enter your full name") },
    Field { name: "email", rule: Rule::Email(VALID_EMAIL) },
    Field { name: "subject", rule: Rule::Optional },
    Field {
        name: "message",
        rule: Rule::MinLen(10, "Please include a brief message (min 10 chars)"),
    },
]);

// Waitlist and newsletter signups.
pub static EMAIL_ONLY: Schema = Schema::new(&[Field { name: "email", rule: Rule::Email(VALID_EMAIL) }]);

#[derive(Clone, Debug, PartialEq)]
pub struct FormState {
    schema: &'static Schema,
    values: Values,
    errors: BTreeMap<&'static str, FieldError>,
    // A rejected submit makes later edits re-check the edited field.
    attempted: bool,
    submitted: bool,
}

impl FormState {
    pub fn new(schema: &'static Schema) -> Self {
        Self {
            schema,
            values: empty_values(schema),
            errors: BTreeMap::new(),
            attempted: false,
            submitted: false,
        }
    }

    pub fn value(&self, field: &str) -> &str {
        self.values.get(field).map(String::as_str).unwrap_or("")
    }

    pub fn values(&self) -> &Values {
        &self.values
    }

    pub fn error(&self, field: &str) -> Option<&FieldError> {
        self.errors.get(field)
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn submitted(&self) -> bool {
        self.submitted
    }

    /// Updates one field. Names outside the schema are ignored.
    pub fn set(&mut self, field: &str, value: impl Into<String>) {
        let Some(known) = self.schema.field(field) else {
            return;
        };
        let value = value.into();
        if self.attempted {
            match known.rule.check(&value) {
                Ok(()) => {
                    self.errors.remove(known.name);
                }
                Err(err) => {
                    self.errors.insert(known.name, err);
                }
            }
        }
        self.values.insert(known.name, value);
    }

    /// Validates every field. On failure the errors are recorded and nothing
    /// else changes; on success `notify` runs once with the submitted values
    /// and the form is cleared.
    pub fn submit<F>(&mut self, notify: F) -> Result<(), ValidationErrors>
    where
        F: FnOnce(&Values),
    {
        self.errors.clear();
        if let Err(errors) = self.schema.validate(&self.values) {
            self.attempted = true;
            self.errors = errors.0.clone();
            return Err(errors);
        }

        notify(&self.values);
        self.values = empty_values(self.schema);
        self.attempted = false;
        self.submitted = true;
        Ok(())
    }
}

/// A validated contact submission, as it is handed to the notifier.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct ContactMessage<'a> {
    pub name: &'a str,
    pub email: &'a str,
    #[serde(skip_serializing_if = "str::is_empty")]
    pub subject: &'a str,
    pub message: &'a str,
}

impl<'a> ContactMessage<'a> {
    pub fn from_values(values: &'a Values) -> Self {
        let get = |field: &str| values.get(field).map(String::as_str).unwrap_or("");
        Self {
            name: get("name"),
            email: get("email"),
            subject: get("subject"),
            message: get("message"),
        }
    }
}

fn empty_values(schema: &Schema) -> Values {
    schema.fields().iter().map(|f| (f.name, String::new())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn filled_contact() -> FormState {
        let mut form = FormState::new(&CONTACT);
        form.set("name", "Alex Johnson");
        form.set("email", "a@b.com");
        form.set("subject", "");
        form.set("message", "Hello there, this is a test.");
        form
    }

    #[test]
    fn valid_contact_submission_notifies_once_and_resets() {
        let mut form = filled_contact();
        let calls = Cell::new(0);

        let result = form.submit(|values| {
            assert_eq!(values["name"], "Alex Johnson");
            calls.set(calls.get() + 1);
        });

        assert!(result.is_ok());
        assert_eq!(calls.get(), 1);
        assert!(form.submitted());
        for field in CONTACT.fields() {
            assert_eq!(form.value(field.name), "");
        }
    }

    #[test]
    fn empty_or_short_required_fields_are_rejected() {
        for (field, bad) in [("name", ""), ("name", "A"), ("email", ""), ("message", "too short")] {
            let mut form = filled_contact();
            form.set(field, bad);

            let errors = form.submit(|_| panic!("notifier must not run")).unwrap_err();

            assert!(errors.0.contains_key(field), "{field}={bad:?} should fail");
            assert!(!form.error(field).unwrap().to_string().is_empty());
            assert!(!form.submitted());
            // no reset on failure
            assert_eq!(form.value("name"), if field == "name" { bad } else { "Alex Johnson" });
        }
    }

    #[test]
    fn contact_payload_omits_empty_subject() {
        let mut form = filled_contact();
        let mut payload = String::new();
        form.submit(|values| payload = serde_json::to_string(&ContactMessage::from_values(values)).unwrap())
            .unwrap();
        assert_eq!(
            payload,
            r#"{"name":"Alex Johnson","email":"a@b.com","message":"Hello there, this is a test."}"#
        );
    }

    #[test]
    fn subject_is_optional() {
        let mut form = filled_contact();
        form.set("subject", "Partnership inquiry");
        assert!(form.submit(|_| {}).is_ok());
    }

    #[test]
    fn email_only_rejects_malformed_address() {
        let mut form = FormState::new(&EMAIL_ONLY);
        form.set("email", "not-an-email");
        let notified = Cell::new(false);

        let errors = form.submit(|_| notified.set(true)).unwrap_err();

        assert_eq!(errors.0.get("email"), Some(&FieldError::InvalidEmail("Enter a valid email address")));
        assert!(!notified.get());
        assert!(!form.submitted());
    }

    #[test]
    fn errors_are_re_evaluated_on_each_attempt() {
        let mut form = FormState::new(&CONTACT);
        let first = form.submit(|_| {}).unwrap_err();
        assert_eq!(first.0.len(), 3);

        form.set("name", "Alex Johnson");
        form.set("email", "alex@example.com");
        let second = form.submit(|_| {}).unwrap_err();
        assert_eq!(second.0.keys().copied().collect::<Vec<_>>(), vec!["message"]);
        assert!(form.error("name").is_none());
    }

    #[test]
    fn editing_after_rejection_rechecks_the_field() {
        let mut form = FormState::new(&EMAIL_ONLY);
        form.set("email", "nope");
        assert!(form.error("email").is_none());
        let _ = form.submit(|_| {});
        assert!(form.has_errors());

        form.set("email", "nope@example.org");
        assert!(!form.has_errors());
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let mut form = FormState::new(&EMAIL_ONLY);
        form.set("phone", "555-0100");
        assert!(!form.values().contains_key("phone"));
    }

    #[test]
    fn email_shapes() {
        for ok in ["a@b.com", "first.last+tag@sub.example.co", "o'neil@example.org"] {
            assert!(is_email(ok), "{ok}");
        }
        for bad in ["", "not-an-email", "a@b", "a b@c.com", ".a@b.com", "a..b@c.com", "a@b.c", "@b.com"] {
            assert!(!is_email(bad), "{bad}");
        }
    }

    #[test]
    fn min_len_counts_characters_not_bytes() {
        assert!(Rule::MinLen(2, "x").check("Zoë").is_ok());
        assert!(Rule::MinLen(2, "x").check("é").is_err());
    }
}

//! Contact form state: field values, their annotations, and the submission
//! lifecycle. Held in a `use_state` handle by the component layer; every
//! mutation goes through a named method here so the whole machine stays
//! testable off the browser.

use super::transport::ContactPayload;
use super::validation::{validate_value, FieldError, FieldKind};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub placeholder: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub multiline: bool,
}

pub const CONTACT_FIELDS: [FieldSpec; 5] = [
    FieldSpec {
        name: "name",
        label: "Name",
        placeholder: "Your name",
        kind: FieldKind::Text,
        required: true,
        multiline: false,
    },
    FieldSpec {
        name: "email",
        label: "Email",
        placeholder: "you@company.com",
        kind: FieldKind::Email,
        required: true,
        multiline: false,
    },
    FieldSpec {
        name: "phone",
        label: "Phone",
        placeholder: "(555) 123-4567",
        kind: FieldKind::Phone,
        required: false,
        multiline: false,
    },
    FieldSpec {
        name: "website",
        label: "Current website",
        placeholder: "https://example.com",
        kind: FieldKind::Url,
        required: false,
        multiline: false,
    },
    FieldSpec {
        name: "message",
        label: "Tell us about your project",
        placeholder: "What are you looking to build?",
        kind: FieldKind::Text,
        required: true,
        multiline: true,
    },
];

#[derive(Clone, Debug, PartialEq)]
pub struct FieldState {
    pub spec: FieldSpec,
    pub value: String,
    pub error: Option<FieldError>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmissionState {
    Idle,
    Submitting,
    Succeeded,
}

/// Why a submit attempt was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitBlocked {
    /// At least one required field failed validation.
    Invalid,
    /// A submission is already in flight; the attempt is rejected, not queued.
    InFlight,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FormState {
    fields: Vec<FieldState>,
    submission: SubmissionState,
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

impl FormState {
    pub fn new() -> Self {
        Self {
            fields: CONTACT_FIELDS
                .into_iter()
                .map(|spec| FieldState {
                    spec,
                    value: String::new(),
                    error: None,
                })
                .collect(),
            submission: SubmissionState::Idle,
        }
    }

    pub fn fields(&self) -> &[FieldState] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&FieldState> {
        self.fields.iter().find(|f| f.spec.name == name)
    }

    pub fn submission(&self) -> SubmissionState {
        self.submission
    }

    pub fn is_submitting(&self) -> bool {
        self.submission == SubmissionState::Submitting
    }

    /// Unknown names are ignored; the field set is fixed at build time.
    pub fn set_value(&mut self, name: &str, value: String) {
        if let Some(field) = self.fields.iter_mut().find(|f| f.spec.name == name) {
            field.value = value;
        }
    }

    /// Revalidate one field, replacing any previous annotation. Repeated
    /// calls with an unchanged value keep exactly one annotation.
    pub fn validate_field(&mut self, name: &str) -> bool {
        let Some(field) = self.fields.iter_mut().find(|f| f.spec.name == name) else {
            return true;
        };
        field.error = validate_value(field.spec.kind, field.spec.required, &field.value).err();
        field.error.is_none()
    }

    /// Validate every required field without short-circuiting, so each
    /// failing field carries its own annotation after a single pass.
    pub fn validate_form(&mut self) -> bool {
        let required: Vec<&'static str> = self
            .fields
            .iter()
            .filter(|f| f.spec.required)
            .map(|f| f.spec.name)
            .collect();
        let mut valid = true;
        for name in required {
            valid &= self.validate_field(name);
        }
        valid
    }

    /// `Idle -> Submitting`, handing back the payload for the transport.
    /// Rejects reentry while a submission is in flight.
    pub fn begin_submission(&mut self) -> Result<ContactPayload, SubmitBlocked> {
        if self.submission == SubmissionState::Submitting {
            return Err(SubmitBlocked::InFlight);
        }
        if !self.validate_form() {
            return Err(SubmitBlocked::Invalid);
        }
        self.submission = SubmissionState::Submitting;
        Ok(self.payload())
    }

    /// `Submitting -> Succeeded -> Idle`. Success is momentary: it is only
    /// observable through the notification the caller emits; the form itself
    /// comes back empty and ready for another submission.
    pub fn complete_submission(&mut self) {
        self.submission = SubmissionState::Succeeded;
        for field in &mut self.fields {
            field.value.clear();
            field.error = None;
        }
        self.submission = SubmissionState::Idle;
    }

    pub fn payload(&self) -> ContactPayload {
        let value = |name: &str| {
            self.field(name)
                .map(|f| f.value.trim().to_string())
                .unwrap_or_default()
        };
        ContactPayload {
            name: value("name"),
            email: value("email"),
            phone: value("phone"),
            website: value("website"),
            message: value("message"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> FormState {
        let mut form = FormState::new();
        form.set_value("name", "Ada Lovelace".into());
        form.set_value("email", "ada@example.com".into());
        form.set_value("message", "Need a site for my bakery".into());
        form
    }

    fn annotation_count(form: &FormState) -> usize {
        form.fields().iter().filter(|f| f.error.is_some()).count()
    }

    #[test]
    fn validate_form_annotates_every_failing_required_field() {
        let mut form = FormState::new();
        assert!(!form.validate_form());
        // name, email and message are required and empty
        assert_eq!(annotation_count(&form), 3);
        assert_eq!(
            form.field("name").unwrap().error,
            Some(FieldError::Required)
        );
        assert_eq!(form.field("phone").unwrap().error, None);
    }

    #[test]
    fn revalidation_is_idempotent() {
        let mut form = FormState::new();
        form.set_value("email", "not-an-email".into());
        assert!(!form.validate_field("email"));
        assert!(!form.validate_field("email"));
        assert_eq!(form.field("email").unwrap().error, Some(FieldError::Email));
        assert_eq!(annotation_count(&form), 1);
    }

    #[test]
    fn fixing_a_field_clears_its_annotation() {
        let mut form = FormState::new();
        form.set_value("email", "a@b".into());
        form.validate_field("email");
        assert_eq!(form.field("email").unwrap().error, Some(FieldError::Email));
        form.set_value("email", "a@b.com".into());
        assert!(form.validate_field("email"));
        assert_eq!(form.field("email").unwrap().error, None);
    }

    #[test]
    fn begin_submission_rejects_an_invalid_form() {
        let mut form = FormState::new();
        assert_eq!(form.begin_submission(), Err(SubmitBlocked::Invalid));
        assert_eq!(form.submission(), SubmissionState::Idle);
    }

    #[test]
    fn begin_submission_enters_submitting_with_the_payload() {
        let mut form = filled_form();
        let payload = form.begin_submission().expect("form is valid");
        assert_eq!(form.submission(), SubmissionState::Submitting);
        assert_eq!(payload.email, "ada@example.com");
        assert_eq!(payload.message, "Need a site for my bakery");
    }

    #[test]
    fn begin_submission_rejects_reentry_while_in_flight() {
        let mut form = filled_form();
        form.begin_submission().expect("form is valid");
        assert_eq!(form.begin_submission(), Err(SubmitBlocked::InFlight));
        assert_eq!(form.submission(), SubmissionState::Submitting);
    }

    #[test]
    fn complete_submission_clears_the_form_and_returns_to_idle() {
        let mut form = filled_form();
        form.begin_submission().expect("form is valid");
        form.complete_submission();
        assert_eq!(form.submission(), SubmissionState::Idle);
        assert!(form.fields().iter().all(|f| f.value.is_empty()));
        assert_eq!(annotation_count(&form), 0);
        // the cleared form is required-empty again
        assert_eq!(form.begin_submission(), Err(SubmitBlocked::Invalid));
    }

    #[test]
    fn invalid_optional_field_does_not_block_submission() {
        let mut form = filled_form();
        form.set_value("website", "example.com".into());
        assert!(form.begin_submission().is_ok());
    }

    #[test]
    fn payload_trims_field_values() {
        let mut form = filled_form();
        form.set_value("name", "  Ada Lovelace  ".into());
        assert_eq!(form.payload().name, "Ada Lovelace");
    }
}

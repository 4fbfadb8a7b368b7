//! Contact form handler
//!
//! One [`ContactForm`] is bound to each inserted copy of the contact form
//! template. Field ids carry the owning element id so two live forms never
//! share ids.

use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;
use std::time::{Duration, Instant};
use tracing::info;

use crate::constants::form::{MIN_MESSAGE_LEN, MIN_NAME_LEN, SUCCESS_MESSAGE};
use crate::deferred::Debouncer;

static EMAIL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex should compile"));
static PHONE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[\d\s\-+()]{10,}$").expect("phone regex should compile"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Phone,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Phone, Field::Message];

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Phone => "Phone",
            Field::Message => "Message",
        }
    }

    fn slug(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Message => "message",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Subject {
    #[default]
    General,
    Order,
    Custom,
    Feedback,
    Other,
}

impl Subject {
    pub const ALL: [Subject; 5] = [
        Subject::General,
        Subject::Order,
        Subject::Custom,
        Subject::Feedback,
        Subject::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Subject::General => "General Inquiry",
            Subject::Order => "Place an Order",
            Subject::Custom => "Custom Request",
            Subject::Feedback => "Feedback",
            Subject::Other => "Other",
        }
    }
}

/// Validate one field value, returning the error message when invalid
pub fn validate(field: Field, raw: &str) -> Option<&'static str> {
    let value = raw.trim();
    match field {
        Field::Name if value.chars().count() < MIN_NAME_LEN => {
            Some("Name must be at least 2 characters")
        }
        Field::Email if !EMAIL.is_match(value) => Some("Please enter a valid email"),
        Field::Phone if !value.is_empty() && !PHONE.is_match(value) => {
            Some("Please enter a valid phone number")
        }
        Field::Message if value.chars().count() < MIN_MESSAGE_LEN => {
            Some("Message must be at least 10 characters")
        }
        _ => None,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Sent,
    Invalid(Vec<Field>),
}

#[derive(Debug)]
pub struct ContactForm {
    form_id: String,
    values: HashMap<Field, String>,
    errors: HashMap<Field, &'static str>,
    pub subject: Subject,
    pub prefer_email: bool,
    pub prefer_phone: bool,
    live_validation: Debouncer,
    edited: Vec<Field>,
    success_reset: Duration,
    success_until: Option<Instant>,
}

impl ContactForm {
    pub fn bind(form_id: impl Into<String>, validation_debounce: Duration, success_reset: Duration) -> Self {
        let form_id = form_id.into();
        info!(form = %form_id, "contact form bound");
        Self {
            form_id,
            values: HashMap::new(),
            errors: HashMap::new(),
            subject: Subject::default(),
            prefer_email: true,
            prefer_phone: false,
            live_validation: Debouncer::new(validation_debounce),
            edited: Vec::new(),
            success_reset,
            success_until: None,
        }
    }

    pub fn form_id(&self) -> &str {
        &self.form_id
    }

    /// Element id of a field inside this form instance
    pub fn field_id(&self, field: Field) -> String {
        format!("{}-{}", self.form_id, field.slug())
    }

    pub fn value(&self, field: Field) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or("")
    }

    pub fn value_mut(&mut self, field: Field) -> &mut String {
        self.values.entry(field).or_default()
    }

    pub fn error(&self, field: Field) -> Option<&'static str> {
        self.errors.get(&field).copied()
    }

    /// Record an edit; validation of edited fields runs after the debounce
    pub fn edited(&mut self, field: Field, now: Instant) {
        if !self.edited.contains(&field) {
            self.edited.push(field);
        }
        self.live_validation.trigger(now);
    }

    /// Drive timers: debounced validation and success-message reset
    pub fn tick(&mut self, now: Instant) {
        if self.live_validation.fire(now) {
            for field in std::mem::take(&mut self.edited) {
                self.check(field);
            }
        }

        if let Some(until) = self.success_until
            && now >= until
        {
            self.reset();
        }
    }

    /// Next time `tick` has work to do
    pub fn next_deadline(&self) -> Option<Instant> {
        match (self.live_validation.deadline(), self.success_until) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    fn check(&mut self, field: Field) -> bool {
        match validate(field, self.value(field)) {
            Some(message) => {
                self.errors.insert(field, message);
                false
            }
            None => {
                self.errors.remove(&field);
                true
            }
        }
    }

    pub fn submit(&mut self, now: Instant) -> SubmitOutcome {
        let invalid: Vec<Field> = Field::ALL
            .into_iter()
            .filter(|field| !self.check(*field))
            .collect();

        if !invalid.is_empty() {
            return SubmitOutcome::Invalid(invalid);
        }

        info!(form = %self.form_id, subject = self.subject.label(), "contact form submitted");
        self.success_until = Some(now + self.success_reset);
        SubmitOutcome::Sent
    }

    pub fn success_message(&self) -> Option<&'static str> {
        self.success_until.map(|_| SUCCESS_MESSAGE)
    }

    fn reset(&mut self) {
        self.values.clear();
        self.errors.clear();
        self.edited.clear();
        self.subject = Subject::default();
        self.prefer_email = true;
        self.prefer_phone = false;
        self.success_until = None;
    }
}

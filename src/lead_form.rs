use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::config;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

const MIN_NAME_CHARS: usize = 2;
const MIN_MESSAGE_CHARS: usize = 10;

pub const SUCCESS_TEXT: &str = "Mensagem pronta! Abrindo seu e-mail para enviar…";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    /// Id of the input in the contact form.
    pub fn input_id(self) -> &'static str {
        match self {
            Field::Name => "nome",
            Field::Email => "email",
            Field::Message => "mensagem",
        }
    }
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum LeadFormError {
    #[error("Por favor, informe seu nome (mínimo 2 caracteres).")]
    NameTooShort,
    #[error("Por favor, informe um e-mail válido.")]
    InvalidEmail,
    #[error("Por favor, escreva uma mensagem um pouco mais detalhada (mínimo 10 caracteres).")]
    MessageTooShort,
}

impl LeadFormError {
    /// The input that gets focus back.
    pub fn field(&self) -> Field {
        match self {
            LeadFormError::NameTooShort => Field::Name,
            LeadFormError::InvalidEmail => Field::Email,
            LeadFormError::MessageTooShort => Field::Message,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Error,
}

impl StatusKind {
    pub fn class(self) -> &'static str {
        match self {
            StatusKind::Success => "ok",
            StatusKind::Error => "err",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormStatus {
    pub kind: StatusKind,
    pub text: String,
}

impl FormStatus {
    pub fn success() -> Self {
        Self { kind: StatusKind::Success, text: SUCCESS_TEXT.to_string() }
    }

    pub fn error(err: &LeadFormError) -> Self {
        Self { kind: StatusKind::Error, text: err.to_string() }
    }
}

/// Raw values read from the form on a submission attempt.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LeadFields {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// A lead that passed validation, fields already trimmed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Lead {
    pub name: String,
    pub email: String,
    pub message: String,
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

impl LeadFields {
    /// Validates name, email, message in that order and stops at the first failure.
    pub fn validate(&self) -> Result<Lead, LeadFormError> {
        let name = self.name.trim();
        let email = self.email.trim();
        let message = self.message.trim();

        if name.chars().count() < MIN_NAME_CHARS {
            return Err(LeadFormError::NameTooShort);
        }
        if !is_valid_email(email) {
            return Err(LeadFormError::InvalidEmail);
        }
        if message.chars().count() < MIN_MESSAGE_CHARS {
            return Err(LeadFormError::MessageTooShort);
        }

        Ok(Lead {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        })
    }
}

impl Lead {
    pub fn subject(&self) -> String {
        format!("Contato pelo site — {}", self.name)
    }

    pub fn body(&self) -> String {
        format!(
            "Nome: {}\nEmail: {}\n\nMensagem:\n{}\n\n---\nEnviado via site (demo).",
            self.name, self.email, self.message
        )
    }

    pub fn mailto_url(&self, address: &str) -> String {
        format!(
            "mailto:{}?subject={}&body={}",
            address,
            urlencoding::encode(&self.subject()),
            urlencoding::encode(&self.body())
        )
    }
}

/// What a submission attempt resolves to: the status to show plus either the
/// field to focus or the mail link to open.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Invalid { status: FormStatus, focus: Field },
    Ready { status: FormStatus, mailto: String },
}

pub fn submit(fields: &LeadFields) -> SubmitOutcome {
    match fields.validate() {
        Ok(lead) => SubmitOutcome::Ready {
            status: FormStatus::success(),
            mailto: lead.mailto_url(config::CONTACT_EMAIL),
        },
        Err(err) => SubmitOutcome::Invalid {
            status: FormStatus::error(&err),
            focus: err.field(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(name: &str, email: &str, message: &str) -> LeadFields {
        LeadFields {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        }
    }

    fn query_param<'a>(url: &'a str, key: &str) -> &'a str {
        let (_, query) = url.split_once('?').unwrap();
        query
            .split('&')
            .find_map(|pair| pair.strip_prefix(key).and_then(|v| v.strip_prefix('=')))
            .unwrap()
    }

    #[test]
    fn email_pattern() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("ana@x.com"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a.com"));
        assert!(!is_valid_email("a @b.com"));
        assert!(!is_valid_email("a@@b.com"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn name_needs_two_chars() {
        let ok = fields("Al", "a@b.co", "mensagem longa o bastante");
        assert!(ok.validate().is_ok());

        let short = fields("A", "a@b.co", "mensagem longa o bastante");
        assert_eq!(short.validate(), Err(LeadFormError::NameTooShort));
    }

    #[test]
    fn name_is_trimmed_before_counting() {
        let padded = fields("  A  ", "a@b.co", "mensagem longa o bastante");
        assert_eq!(padded.validate(), Err(LeadFormError::NameTooShort));
    }

    #[test]
    fn message_needs_ten_chars() {
        assert!(fields("Ana", "a@b.co", "0123456789").validate().is_ok());
        assert_eq!(
            fields("Ana", "a@b.co", "012345678").validate(),
            Err(LeadFormError::MessageTooShort)
        );
    }

    #[test]
    fn lengths_count_characters_not_bytes() {
        assert!(fields("Zé", "a@b.co", "orçamento!").validate().is_ok());
        // 9 characters, 10 bytes
        assert_eq!(
            fields("Zé", "a@b.co", "orçamento").validate(),
            Err(LeadFormError::MessageTooShort)
        );
    }

    #[test]
    fn first_failure_wins() {
        let err = fields("A", "bad", "curta").validate().unwrap_err();
        assert_eq!(err, LeadFormError::NameTooShort);
        assert_eq!(err.field(), Field::Name);

        let err = fields("Ana", "bad", "curta").validate().unwrap_err();
        assert_eq!(err.field(), Field::Email);
    }

    #[test]
    fn invalid_submit_reports_error_and_focus() {
        match submit(&fields("Ana", "ana@x.com", "curta")) {
            SubmitOutcome::Invalid { status, focus } => {
                assert_eq!(status.kind, StatusKind::Error);
                assert_eq!(status.text, LeadFormError::MessageTooShort.to_string());
                assert_eq!(focus, Field::Message);
                assert_eq!(focus.input_id(), "mensagem");
            }
            other => panic!("expected invalid outcome, got {:?}", other),
        }
    }

    #[test]
    fn valid_submit_builds_mailto() {
        let outcome = submit(&fields(" Ana ", "ana@x.com", "Gostaria de um orçamento"));
        let SubmitOutcome::Ready { status, mailto } = outcome else {
            panic!("expected ready outcome");
        };
        assert_eq!(status.kind, StatusKind::Success);
        assert_eq!(status.text, SUCCESS_TEXT);
        assert!(mailto.starts_with("mailto:contato@l3me.com.br?subject="));

        let subject = urlencoding::decode(query_param(&mailto, "subject")).unwrap();
        assert_eq!(subject, "Contato pelo site — Ana");

        let body = urlencoding::decode(query_param(&mailto, "body")).unwrap();
        assert!(body.contains("Ana"));
        assert!(body.contains("ana@x.com"));
        assert!(body.contains("Gostaria de um orçamento"));
        assert!(body.starts_with("Nome: Ana\nEmail: ana@x.com\n\nMensagem:\n"));
    }

    #[test]
    fn status_classes() {
        assert_eq!(StatusKind::Success.class(), "ok");
        assert_eq!(StatusKind::Error.class(), "err");
    }
}

use thiserror::Error;

use crate::record::{Student, StudentPayload};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("{0} is required")]
    Missing(&'static str),
    #[error("`{0}` is not an email address")]
    InvalidEmail(String),
}

/// What the add/edit modal currently holds.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StudentForm {
    pub name: String,
    pub email: String,
    pub course: String,
}

impl StudentForm {
    /// Prefill from a listed record; absent fields become empty inputs.
    pub fn from_student(s: &Student) -> Self {
        Self {
            name: s.name.clone().unwrap_or_default(),
            email: s.email.clone().unwrap_or_default(),
            course: s.course.clone().unwrap_or_default(),
        }
    }

    /// Required-field and email-shape checks. Nothing is sent when this fails.
    pub fn validate(&self) -> Result<StudentPayload, FormError> {
        if self.name.trim().is_empty() {
            return Err(FormError::Missing("name"));
        }
        let email = self.email.trim();
        if email.is_empty() {
            return Err(FormError::Missing("email"));
        }
        if !is_email_shaped(email) {
            return Err(FormError::InvalidEmail(email.to_string()));
        }
        if self.course.trim().is_empty() {
            return Err(FormError::Missing("course"));
        }
        Ok(StudentPayload {
            name: self.name.clone(),
            email: email.to_string(),
            course: self.course.clone(),
        })
    }
}

/// Same acceptance rule as an HTML `type=email` input:
/// `local@label(.label)*`, no dot required in the domain.
pub fn is_email_shaped(s: &str) -> bool {
    let Some((local, domain)) = s.split_once('@') else { return false };
    if local.is_empty() || domain.is_empty() {
        return false;
    }
    const LOCAL_EXTRA: &str = ".!#$%&'*+/=?^_`{|}~-";
    if !local.chars().all(|c| c.is_ascii_alphanumeric() || LOCAL_EXTRA.contains(c)) {
        return false;
    }
    domain.split('.').all(is_domain_label)
}

fn is_domain_label(label: &str) -> bool {
    let bytes = label.as_bytes();
    !bytes.is_empty()
        && bytes.len() <= 63
        && bytes.iter().all(|b| b.is_ascii_alphanumeric() || *b == b'-')
        && bytes[0] != b'-'
        && bytes[bytes.len() - 1] != b'-'
}

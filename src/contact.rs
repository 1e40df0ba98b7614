//! Contact-form submissions and their access rules.
//!
//! Anyone may submit the form; only authenticated callers may read what was
//! submitted.

use chrono::{DateTime, Utc};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum ContactError {
    #[error("field '{0}' is required")]
    MissingField(&'static str),

    #[error("'{0}' is not a valid email address")]
    InvalidEmail(String),

    #[error("{0} requires an authenticated caller")]
    AccessDenied(&'static str),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ContactError>;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Caller {
    Anonymous,
    Authenticated { user_id: String },
}

impl Caller {
    pub fn user_id(&self) -> Option<&str> {
        match self {
            Caller::Anonymous => None,
            Caller::Authenticated { user_id } => Some(user_id),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user_id().is_some()
    }
}

/// Form fields as submitted by the visitor
#[derive(Clone, Debug, Default, Deserialize)]
pub struct NewSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
}

/// Stored submission row
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub message: String,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Default)]
pub struct ContactStore {
    rows: Vec<ContactSubmission>,
}

impl ContactStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a submission; open to every caller
    pub fn insert(&mut self, _caller: &Caller, submission: NewSubmission) -> Result<Uuid> {
        let name = required("name", &submission.name)?;
        let email = required("email", &submission.email)?;
        let message = required("message", &submission.message)?;
        if !is_plausible_email(&email) {
            return Err(ContactError::InvalidEmail(email));
        }

        let row = ContactSubmission {
            id: Uuid::new_v4(),
            name,
            email,
            message,
            ip_address: submission.ip_address.filter(|s| !s.trim().is_empty()),
            user_agent: submission.user_agent.filter(|s| !s.trim().is_empty()),
            created_at: Utc::now(),
        };
        let id = row.id;
        self.rows.push(row);

        info!("Stored contact submission {}", id);
        Ok(id)
    }

    /// All rows, oldest first
    pub fn list(&self, caller: &Caller) -> Result<&[ContactSubmission]> {
        let Some(user_id) = caller.user_id() else {
            warn!("Anonymous caller tried to read contact submissions");
            return Err(ContactError::AccessDenied("reading submissions"));
        };
        info!("User {} read {} contact submission(s)", user_id, self.rows.len());
        Ok(&self.rows)
    }

    pub fn export_json(&self, caller: &Caller) -> Result<String> {
        let rows = self.list(caller)?;
        Ok(serde_json::to_string_pretty(rows)?)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

fn required(field: &'static str, value: &str) -> Result<String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ContactError::MissingField(field));
    }
    Ok(value.to_string())
}

fn is_plausible_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && !domain.is_empty() && !domain.contains('@') && !email.contains(char::is_whitespace)
        }
        None => false,
    }
}

//! Loading the clinic dataset from JSON.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ClinicError, Result};
use crate::records::{Document, Feedback, Notification, Patient, Resource, Session};

/// Every record collection the dashboard shows. Missing arrays load as empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Dataset {
    pub patients: Vec<Patient>,
    pub sessions: Vec<Session>,
    pub notifications: Vec<Notification>,
    pub documents: Vec<Document>,
    pub resources: Vec<Resource>,
    pub feedback: Vec<Feedback>,
}

impl Dataset {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(ClinicError::Dataset)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path).map_err(|source| ClinicError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let dataset = Self::from_json(&json)?;
        tracing::debug!(
            path = %path.display(),
            patients = dataset.patients.len(),
            sessions = dataset.sessions.len(),
            notifications = dataset.notifications.len(),
            documents = dataset.documents.len(),
            resources = dataset.resources.len(),
            feedback = dataset.feedback.len(),
            "loaded dataset"
        );
        Ok(dataset)
    }
}

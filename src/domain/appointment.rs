//! Appointment record and its status.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Identified;

/// Appointment lifecycle status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AppointmentStatus {
    Scheduled,
    #[default]
    Pending,
}

impl AppointmentStatus {
    /// Human-readable label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Scheduled => "Scheduled",
            Self::Pending => "Pending",
        }
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A booked or requested appointment.
///
/// `client` is a free-text name, not a reference into the client collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: String,
    pub client: String,
    pub date: String,
    pub time: String,
    pub status: AppointmentStatus,
}

impl Identified for Appointment {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Seed appointments shown on a fresh dashboard.
pub fn mock_appointments() -> Vec<Appointment> {
    vec![
        Appointment {
            id: "1".to_string(),
            client: "John Doe".to_string(),
            date: "2024-03-10".to_string(),
            time: "10:00 AM".to_string(),
            status: AppointmentStatus::Scheduled,
        },
        Appointment {
            id: "2".to_string(),
            client: "Jane Smith".to_string(),
            date: "2024-03-12".to_string(),
            time: "2:00 PM".to_string(),
            status: AppointmentStatus::Pending,
        },
    ]
}

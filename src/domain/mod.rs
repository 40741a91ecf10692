//! Domain records displayed by the views.
//!
//! - [`Session`] / [`User`]: owned by the session provider
//! - [`Client`] and [`Appointment`]: owned by the dashboard repositories

pub mod appointment;
pub mod client;
pub mod session;

pub use appointment::{Appointment, AppointmentStatus, mock_appointments};
pub use client::{Client, mock_clients};
pub use session::{Session, User};

/// Records with an identifier unique within their collection.
pub trait Identified {
    fn id(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn mock_ids_are_unique() {
        let clients = mock_clients();
        let ids: HashSet<_> = clients.iter().map(Identified::id).collect();
        assert_eq!(ids.len(), clients.len());

        let appointments = mock_appointments();
        let ids: HashSet<_> = appointments.iter().map(Identified::id).collect();
        assert_eq!(ids.len(), appointments.len());
    }

    #[test]
    fn status_labels() {
        assert_eq!(AppointmentStatus::Scheduled.to_string(), "Scheduled");
        assert_eq!(AppointmentStatus::Pending.label(), "Pending");
    }
}

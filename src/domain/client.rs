//! Practice client record.

use serde::{Deserialize, Serialize};

use super::Identified;

/// A client of the practice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    /// Date of the last visit, `YYYY-MM-DD`.
    pub last_visit: String,
}

impl Identified for Client {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Seed clients shown on a fresh dashboard.
pub fn mock_clients() -> Vec<Client> {
    vec![
        Client {
            id: "1".to_string(),
            name: "John Doe".to_string(),
            email: "john@example.com".to_string(),
            phone: "123-456-7890".to_string(),
            last_visit: "2024-01-15".to_string(),
        },
        Client {
            id: "2".to_string(),
            name: "Jane Smith".to_string(),
            email: "jane@example.com".to_string(),
            phone: "987-654-3210".to_string(),
            last_visit: "2024-02-20".to_string(),
        },
    ]
}

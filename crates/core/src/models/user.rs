use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub is_advisor: bool,
    pub advisor_id: Option<Uuid>,
}

impl User {
    /// "First Last (username)", the form shown to advisors.
    pub fn display_name(&self) -> String {
        format!("{} {} ({})", self.first_name, self.last_name, self.username)
    }

    pub fn is_advised_by(&self, advisor_id: Uuid) -> bool {
        self.advisor_id == Some(advisor_id)
    }
}

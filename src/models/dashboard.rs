use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_books: u64,
    pub total_users: u64,
    pub total_borrowed_books: u64,
    pub total_available_books: u64,
    #[serde(default)]
    pub recent_activity: Vec<ActivityItem>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActivityType {
    BookAdded,
    BookBorrowed,
    BookReturned,
    UserRegistered,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityItem {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: ActivityType,
    pub description: String,
    pub timestamp: String,
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub book_id: Option<i64>,
}

use std::fmt;

use serde::{Deserialize, Serialize};

/// Legal practice areas an article can be filed under. The set is closed
/// for the editor dropdown, but `Other` keeps free-text categories from
/// older records readable.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(from = "String", into = "String")]
pub enum Category {
    Criminal,
    Family,
    Civil,
    General,
    Other(String),
}

impl Category {
    pub const LABELS: [&'static str; 4] = [
        "Criminal Law",
        "Family Matters",
        "Civil Litigation",
        "General",
    ];

    pub fn label(&self) -> &str {
        match self {
            Category::Criminal => "Criminal Law",
            Category::Family => "Family Matters",
            Category::Civil => "Civil Litigation",
            Category::General => "General",
            Category::Other(s) => s,
        }
    }
}

impl From<String> for Category {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Criminal Law" => Category::Criminal,
            "Family Matters" => Category::Family,
            "Civil Litigation" => Category::Civil,
            "General" => Category::General,
            _ => Category::Other(value),
        }
    }
}

impl From<Category> for String {
    fn from(value: Category) -> Self {
        value.label().to_string()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Article {
    pub id: i64,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub category: Category,
    /// Display date shown on the card, e.g. "March 12, 2025".
    pub date: String,
    pub image_url: String,
    pub is_featured: bool,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum AppointmentStatus {
    Pending,
    #[serde(rename = "Followed Up")]
    FollowedUp,
}

impl AppointmentStatus {
    /// Stored column value ("Pending" / "Followed Up").
    pub fn as_str(&self) -> &'static str {
        match self {
            AppointmentStatus::Pending => "Pending",
            AppointmentStatus::FollowedUp => "Followed Up",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Pending" => Some(AppointmentStatus::Pending),
            "Followed Up" => Some(AppointmentStatus::FollowedUp),
            _ => None,
        }
    }

    /// Pending ⇄ Followed Up; there are no other states.
    pub fn toggled(&self) -> Self {
        match self {
            AppointmentStatus::Pending => AppointmentStatus::FollowedUp,
            AppointmentStatus::FollowedUp => AppointmentStatus::Pending,
        }
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Appointment {
    pub id: i64,
    pub name: String,
    pub phone: String,
    pub purpose: String,
    /// Original submission timestamp (RFC 3339).
    pub created_at: String,
    /// YYYY-MM-DD
    pub booked_date: String,
    /// HH:MM start of a 30-minute slot.
    pub booked_slot: String,
    pub status: AppointmentStatus,
}

/// Fields of the booking form; the server assigns id, timestamp and the
/// initial Pending status.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct NewAppointment {
    pub name: String,
    pub phone: String,
    pub purpose: String,
    pub booked_date: String,
    pub booked_slot: String,
}

/// Fields of the article editor; the server assigns the id.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ArticleDraft {
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub category: Category,
    pub date: String,
    pub image_url: String,
    pub is_featured: bool,
}

/// A static entry on the achievements timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Milestone {
    pub year: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub badge: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_toggle_is_reversible() {
        let s = AppointmentStatus::Pending;
        assert_eq!(s.toggled(), AppointmentStatus::FollowedUp);
        assert_eq!(s.toggled().toggled(), AppointmentStatus::Pending);
    }

    #[test]
    fn status_serializes_to_stored_labels() {
        let json = serde_json::to_string(&AppointmentStatus::FollowedUp).unwrap();
        assert_eq!(json, "\"Followed Up\"");
        let back: AppointmentStatus = serde_json::from_str(&json).unwrap();
        assert_eq!(back, AppointmentStatus::FollowedUp);
        assert_eq!(AppointmentStatus::parse("Pending"), Some(AppointmentStatus::Pending));
        assert_eq!(AppointmentStatus::parse("cancelled"), None);
    }

    #[test]
    fn category_round_trips_known_and_free_text() {
        let c: Category = serde_json::from_str("\"Family Matters\"").unwrap();
        assert_eq!(c, Category::Family);
        let free: Category = serde_json::from_str("\"Property Disputes\"").unwrap();
        assert_eq!(free, Category::Other("Property Disputes".to_string()));
        assert_eq!(serde_json::to_string(&free).unwrap(), "\"Property Disputes\"");
    }
}

use leptos::prelude::*;
use leptos::server;
use serde::{Deserialize, Serialize};
use shared_types::{Appointment, AppointmentStatus, Article, ArticleDraft, NewAppointment};

#[cfg(feature = "ssr")]
use crate::db::repository::{self, DbError};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginData {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub success: bool,
    pub token: Option<String>,
    pub error: Option<String>,
}

/// What became of a booking attempt. A taken slot is an expected
/// outcome, not a transport failure, so it travels in the Ok arm.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum BookingOutcome {
    Booked,
    SlotTaken,
}

/// Rejects the call unless `token` is a valid admin JWT.
#[cfg(feature = "ssr")]
fn require_admin(token: &str) -> Result<(), ServerFnError> {
    let claims = crate::utils::auth::verify_token(token)
        .map_err(|_| ServerFnError::new("Unauthorized".to_string()))?;

    if claims.role != "admin" {
        return Err(ServerFnError::new("Unauthorized".to_string()));
    }

    Ok(())
}

// ---- articles ----

#[server]
pub async fn fetch_articles() -> Result<Vec<Article>, ServerFnError> {
    match repository::list_articles().await {
        Ok(articles) => Ok(articles),
        Err(e) => Err(ServerFnError::new(format!("Database error: {}", e))),
    }
}

#[server]
pub async fn create_article(token: String, draft: ArticleDraft) -> Result<(), ServerFnError> {
    require_admin(&token)?;

    if draft.title.trim().is_empty() || draft.content.trim().is_empty() {
        return Err(ServerFnError::new("Title and content are required".to_string()));
    }

    match repository::insert_article(&draft).await {
        Ok(()) => Ok(()),
        Err(e) => Err(ServerFnError::new(format!("Database error: {}", e))),
    }
}

#[server]
pub async fn update_article(token: String, article: Article) -> Result<(), ServerFnError> {
    require_admin(&token)?;

    if article.title.trim().is_empty() || article.content.trim().is_empty() {
        return Err(ServerFnError::new("Title and content are required".to_string()));
    }

    match repository::update_article(&article).await {
        Ok(()) => Ok(()),
        Err(e) => Err(ServerFnError::new(format!("Database error: {}", e))),
    }
}

#[server]
pub async fn delete_article(token: String, id: i64) -> Result<(), ServerFnError> {
    require_admin(&token)?;

    match repository::delete_article(id).await {
        Ok(()) => Ok(()),
        Err(e) => Err(ServerFnError::new(format!("Database error: {}", e))),
    }
}

// ---- appointments ----

#[server]
pub async fn fetch_appointments() -> Result<Vec<Appointment>, ServerFnError> {
    match repository::list_appointments().await {
        Ok(appointments) => Ok(appointments),
        Err(e) => Err(ServerFnError::new(format!("Database error: {}", e))),
    }
}

#[server]
pub async fn create_appointment(request: NewAppointment) -> Result<BookingOutcome, ServerFnError> {
    if request.name.trim().is_empty()
        || request.phone.trim().is_empty()
        || request.booked_date.is_empty()
        || request.booked_slot.is_empty()
    {
        return Err(ServerFnError::new("All booking fields are required".to_string()));
    }

    if !crate::schedule::ALL_SLOTS.contains(&request.booked_slot.as_str()) {
        return Err(ServerFnError::new("Unknown consultation slot".to_string()));
    }

    match repository::insert_appointment(&request).await {
        Ok(()) => Ok(BookingOutcome::Booked),
        Err(DbError::SlotTaken) => Ok(BookingOutcome::SlotTaken),
        Err(DbError::InvalidDate(d)) => {
            Err(ServerFnError::new(format!("Invalid booking date: {}", d)))
        }
        Err(e) => Err(ServerFnError::new(format!("Database error: {}", e))),
    }
}

#[server]
pub async fn update_appointment_status(
    token: String,
    id: i64,
    status: AppointmentStatus,
) -> Result<(), ServerFnError> {
    require_admin(&token)?;

    match repository::update_appointment_status(id, status).await {
        Ok(()) => Ok(()),
        Err(e) => Err(ServerFnError::new(format!("Database error: {}", e))),
    }
}

#[server]
pub async fn delete_appointment(token: String, id: i64) -> Result<(), ServerFnError> {
    require_admin(&token)?;

    match repository::delete_appointment(id).await {
        Ok(()) => Ok(()),
        Err(e) => Err(ServerFnError::new(format!("Database error: {}", e))),
    }
}

// ---- auth ----

#[server]
pub async fn login_admin(login_data: LoginData) -> Result<AuthResponse, ServerFnError> {
    let denied = AuthResponse {
        success: false,
        token: None,
        error: Some("Invalid email or password".to_string()),
    };

    let account = match repository::find_admin_by_email(&login_data.email).await {
        Ok(Some(account)) => account,
        Ok(None) => return Ok(denied),
        Err(e) => {
            tracing::error!("admin lookup failed: {}", e);
            return Err(ServerFnError::new("Database error".to_string()));
        }
    };

    let valid = bcrypt::verify(&login_data.password, &account.password_hash).unwrap_or(false);
    if !valid {
        return Ok(denied);
    }

    match crate::utils::auth::issue_token(&account.email) {
        Ok(token) => Ok(AuthResponse {
            success: true,
            token: Some(token),
            error: None,
        }),
        Err(e) => {
            tracing::error!("token signing failed: {}", e);
            Err(ServerFnError::new("Could not create session".to_string()))
        }
    }
}

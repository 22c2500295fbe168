pub mod achievements;
pub mod admin_appointments;
pub mod admin_login;
pub mod article_detail;
pub mod articles;
pub mod contact;
pub mod home;
pub mod not_found;

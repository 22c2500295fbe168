use leptos::prelude::*;
use leptos::task::spawn_local;
use shared_types::{Appointment, AppointmentStatus, Article};

use crate::server::{fetch_appointments, fetch_articles};

/// App-wide reactive state, provided once at the router root. The
/// database stays the source of truth; after any mutation the relevant
/// collection is refetched rather than patched locally.
#[derive(Clone, Copy)]
pub struct SiteState {
    pub articles: RwSignal<Vec<Article>>,
    pub appointments: RwSignal<Vec<Appointment>>,
    pub is_admin: RwSignal<bool>,
}

impl SiteState {
    pub fn new() -> Self {
        Self {
            articles: RwSignal::new(Vec::new()),
            appointments: RwSignal::new(Vec::new()),
            is_admin: RwSignal::new(false),
        }
    }

    pub fn refresh_articles(&self) {
        let articles = self.articles;
        spawn_local(async move {
            match fetch_articles().await {
                Ok(list) => articles.set(list),
                Err(e) => leptos::logging::log!("Failed to load articles: {}", e),
            }
        });
    }

    pub fn refresh_appointments(&self) {
        let appointments = self.appointments;
        spawn_local(async move {
            match fetch_appointments().await {
                Ok(list) => appointments.set(list),
                Err(e) => leptos::logging::log!("Failed to load appointments: {}", e),
            }
        });
    }

    /// Appointments still awaiting follow-up, shown as the header badge.
    pub fn pending_count(&self) -> usize {
        self.appointments
            .get()
            .iter()
            .filter(|a| a.status == AppointmentStatus::Pending)
            .count()
    }
}

pub fn use_site_state() -> SiteState {
    expect_context::<SiteState>()
}

use leptos::{prelude::*, task::spawn_local};
use shared_types::{Appointment, AppointmentStatus};
use thaw::*;

use crate::server::{delete_appointment, update_appointment_status};
use crate::state::use_site_state;
use crate::utils::auth::stored_token;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFilter {
    All,
    Only(AppointmentStatus),
}

impl StatusFilter {
    fn label(&self) -> &'static str {
        match self {
            StatusFilter::All => "All",
            StatusFilter::Only(status) => status.as_str(),
        }
    }
}

const FILTERS: [StatusFilter; 3] = [
    StatusFilter::All,
    StatusFilter::Only(AppointmentStatus::Pending),
    StatusFilter::Only(AppointmentStatus::FollowedUp),
];

/// Name matches case-insensitively, phone as a plain substring. Status
/// must match unless the filter is All.
pub fn filter_appointments(
    appointments: &[Appointment],
    term: &str,
    status: StatusFilter,
) -> Vec<Appointment> {
    let term_lower = term.to_lowercase();
    appointments
        .iter()
        .filter(|a| {
            let matches_search =
                a.name.to_lowercase().contains(&term_lower) || a.phone.contains(term);
            let matches_status = match status {
                StatusFilter::All => true,
                StatusFilter::Only(s) => a.status == s,
            };
            matches_search && matches_status
        })
        .cloned()
        .collect()
}

/// Consultation-lead dashboard: search, status filter, follow-up
/// toggling and deletion.
#[component]
pub fn AdminAppointmentsPage() -> impl IntoView {
    let state = use_site_state();

    let search_term = RwSignal::new(String::new());
    let status_filter = RwSignal::new(StatusFilter::All);

    let filtered = Memo::new(move |_| {
        filter_appointments(
            &state.appointments.get(),
            &search_term.get(),
            status_filter.get(),
        )
    });

    let toggle_status = move |appointment: Appointment| {
        let Some(token) = stored_token() else {
            return;
        };
        let next = appointment.status.toggled();

        spawn_local(async move {
            match update_appointment_status(token, appointment.id, next).await {
                Ok(()) => state.refresh_appointments(),
                Err(e) => leptos::logging::log!("Failed to update status: {}", e),
            }
        });
    };

    let remove = move |id: i64| {
        let confirmed = web_sys::window()
            .and_then(|w| {
                w.confirm_with_message("Are you sure you want to permanently delete this record?")
                    .ok()
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }

        let Some(token) = stored_token() else {
            return;
        };

        spawn_local(async move {
            match delete_appointment(token, id).await {
                Ok(()) => state.refresh_appointments(),
                Err(e) => leptos::logging::log!("Failed to delete appointment: {}", e),
            }
        });
    };

    view! {
        <div class="admin-appointments">
            <div class="admin-appointments__header">
                <div>
                    <h1>"Chamber Schedule"</h1>
                    <p>"Manage your consultation leads."</p>
                </div>
                <div class="admin-appointments__total">
                    "Total Appointments: " {move || state.appointments.get().len()}
                </div>
            </div>

            <div class="admin-appointments__layout">
                <aside class="admin-appointments__sidebar">
                    <div class="admin-appointments__filter-group">
                        <p class="admin-appointments__filter-label">"Filter Status"</p>
                        {FILTERS
                            .iter()
                            .map(|filter| {
                                let filter = *filter;
                                view! {
                                    <button
                                        class="admin-appointments__filter-btn"
                                        class:active=move || status_filter.get() == filter
                                        on:click=move |_| status_filter.set(filter)
                                    >
                                        {filter.label()}
                                    </button>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>

                    <div class="admin-appointments__filter-group">
                        <p class="admin-appointments__filter-label">"Search Directory"</p>
                        <Input
                            class="admin-appointments__search"
                            placeholder="Name or Phone..."
                            value=search_term
                        />
                    </div>

                    <div class="admin-appointments__notice">
                        <h4>"Admin Notice"</h4>
                        <p>"Ensure you follow up with clients within 24 hours."</p>
                    </div>
                </aside>

                <div class="admin-appointments__list">
                    <For
                        each=move || filtered.get()
                        key=|appointment| appointment.id
                        children=move |appointment| {
                            let toggle_target = appointment.clone();
                            let appointment_id = appointment.id;
                            let is_pending = appointment.status == AppointmentStatus::Pending;

                            view! {
                                <div class="admin-appointments__card">
                                    <div class="admin-appointments__card-body">
                                        <div class="admin-appointments__card-tags">
                                            <span class="admin-appointments__slot-tag">
                                                {format!("{} @ {}", appointment.booked_date, appointment.booked_slot)}
                                            </span>
                                            <span
                                                class="admin-appointments__status-tag"
                                                class:pending=is_pending
                                            >
                                                {appointment.status.as_str()}
                                            </span>
                                        </div>
                                        <h3>{appointment.name.clone()}</h3>
                                        <p class="admin-appointments__phone">
                                            "Phone: " {appointment.phone.clone()}
                                        </p>
                                        <p class="admin-appointments__purpose">
                                            "\"" {appointment.purpose.clone()} "\""
                                        </p>
                                    </div>
                                    <div class="admin-appointments__card-actions">
                                        <button
                                            class="admin-appointments__toggle-btn"
                                            on:click=move |_| toggle_status(toggle_target.clone())
                                        >
                                            {if is_pending { "Mark Followed Up" } else { "Re-open" }}
                                        </button>
                                        <button
                                            class="admin-appointments__delete-btn"
                                            on:click=move |_| remove(appointment_id)
                                        >
                                            "Delete"
                                        </button>
                                    </div>
                                </div>
                            }
                        }
                    />

                    <Show when=move || filtered.get().is_empty()>
                        <div class="admin-appointments__empty">
                            <p>"No records found for this view."</p>
                        </div>
                    </Show>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn appt(name: &str, phone: &str, status: AppointmentStatus) -> Appointment {
        Appointment {
            id: 0,
            name: name.to_string(),
            phone: phone.to_string(),
            purpose: String::new(),
            created_at: "2026-01-01T00:00:00Z".to_string(),
            booked_date: "2026-03-02".to_string(),
            booked_slot: "10:00".to_string(),
            status,
        }
    }

    #[test]
    fn search_matches_name_case_insensitively_or_phone_substring() {
        let list = vec![
            appt("Ramesh Kumar", "9080111111", AppointmentStatus::Pending),
            appt("Priya", "9444222222", AppointmentStatus::Pending),
        ];

        let by_name = filter_appointments(&list, "ramesh", StatusFilter::All);
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].name, "Ramesh Kumar");

        let by_phone = filter_appointments(&list, "9444", StatusFilter::All);
        assert_eq!(by_phone.len(), 1);
        assert_eq!(by_phone[0].name, "Priya");

        assert!(filter_appointments(&list, "suresh", StatusFilter::All).is_empty());
    }

    #[test]
    fn status_filter_narrows_unless_all() {
        let list = vec![
            appt("Ramesh", "1", AppointmentStatus::Pending),
            appt("Priya", "2", AppointmentStatus::FollowedUp),
        ];

        assert_eq!(filter_appointments(&list, "", StatusFilter::All).len(), 2);

        let pending =
            filter_appointments(&list, "", StatusFilter::Only(AppointmentStatus::Pending));
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].name, "Ramesh");

        let followed =
            filter_appointments(&list, "", StatusFilter::Only(AppointmentStatus::FollowedUp));
        assert_eq!(followed.len(), 1);
        assert_eq!(followed[0].name, "Priya");
    }

    #[test]
    fn search_and_status_combine() {
        let list = vec![
            appt("Ramesh", "9080111111", AppointmentStatus::Pending),
            appt("Ramesh", "9080222222", AppointmentStatus::FollowedUp),
        ];

        let result = filter_appointments(
            &list,
            "ramesh",
            StatusFilter::Only(AppointmentStatus::FollowedUp),
        );
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].phone, "9080222222");
    }

    #[test]
    fn empty_term_matches_everything() {
        let list = vec![appt("Anyone", "123", AppointmentStatus::Pending)];
        assert_eq!(filter_appointments(&list, "", StatusFilter::All).len(), 1);
    }
}

use leptos::{prelude::*, task::spawn_local};
use shared_types::NewAppointment;
use thaw::*;

use crate::components::{BookingCalendar, SlotGrid};
use crate::schedule::{format_display_date, occupied_slots, slot_locally_taken};
use crate::server::{create_appointment, BookingOutcome};
use crate::state::use_site_state;

const SLOT_TAKEN_LOCAL: &str = "This slot was just taken. Please select another time.";
const SLOT_TAKEN_REMOTE: &str = "This slot has just been booked.";

/// Booking form plus chamber contact details. The slot grid reflects
/// the shared appointment list; the database unique constraint has the
/// final say on conflicts.
#[component]
pub fn ContactPage() -> impl IntoView {
    let state = use_site_state();

    let name = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let purpose = RwSignal::new(String::new());
    let booked_date = RwSignal::new(String::new());
    let booked_slot = RwSignal::new(String::new());

    let calendar_open = RwSignal::new(false);
    let is_submitting = RwSignal::new(false);
    let is_success = RwSignal::new(false);
    let submission_error = RwSignal::new(Option::<String>::None);

    let occupied = Signal::derive(move || {
        occupied_slots(&state.appointments.get(), &booked_date.get())
    });

    let is_button_disabled = Memo::new(move |_| {
        name.get().trim().is_empty()
            || phone.get().trim().is_empty()
            || booked_date.get().is_empty()
            || booked_slot.get().is_empty()
            || is_submitting.get()
    });

    // Picking a date invalidates any slot chosen for the previous date
    let on_date_selected = move |_key: String| {
        booked_slot.set(String::new());
        calendar_open.set(false);
        submission_error.set(None);
    };

    let submit = move |_| {
        if is_button_disabled.get() {
            return;
        }

        // Local fast path before the round trip
        if slot_locally_taken(&occupied.get(), &booked_slot.get()) {
            submission_error.set(Some(SLOT_TAKEN_LOCAL.to_string()));
            return;
        }

        is_submitting.set(true);
        submission_error.set(None);

        let request = NewAppointment {
            name: name.get(),
            phone: phone.get(),
            purpose: purpose.get(),
            booked_date: booked_date.get(),
            booked_slot: booked_slot.get(),
        };

        spawn_local(async move {
            match create_appointment(request).await {
                Ok(BookingOutcome::Booked) => {
                    is_success.set(true);
                    name.set(String::new());
                    phone.set(String::new());
                    purpose.set(String::new());
                    booked_date.set(String::new());
                    booked_slot.set(String::new());
                    state.refresh_appointments();
                    set_timeout(
                        move || is_success.set(false),
                        std::time::Duration::from_secs(5),
                    );
                }
                Ok(BookingOutcome::SlotTaken) => {
                    submission_error.set(Some(SLOT_TAKEN_REMOTE.to_string()));
                    // Pull the fresh list so the grid shows the clash
                    state.refresh_appointments();
                }
                Err(e) => {
                    submission_error.set(Some(format!("Failed to book appointment: {}", e)));
                }
            }
            is_submitting.set(false);
        });
    };

    view! {
        <div class="contact">
            <div class="contact__header">
                <h1>"Get in Touch"</h1>
                <p>
                    "Consultation for Civil, Criminal, and Court matters. Visit our office in Theni or reach out via phone."
                </p>
            </div>

            <div class="contact__layout">
                <div class="contact__form-panel">
                    <Show when=move || is_success.get()>
                        <div class="contact__success-overlay">
                            <h3>"Slot Reserved"</h3>
                            <p>"Your 30-minute session is blocked. We will follow up shortly."</p>
                        </div>
                    </Show>

                    <h3 class="contact__form-title">"Request Appointment"</h3>

                    <form on:submit=move |ev| {
                        ev.prevent_default();
                        submit(());
                    }>
                        {move || submission_error.get().map(|msg| view! {
                            <div class="contact__error">{msg}</div>
                        })}

                        <div class="contact__field-row">
                            <div class="contact__field">
                                <label>"Full Name"</label>
                                <Input
                                    class="contact__input"
                                    placeholder="Enter your name"
                                    value=name
                                />
                            </div>
                            <div class="contact__field">
                                <label>"Contact Number"</label>
                                <Input
                                    class="contact__input"
                                    placeholder="Phone number"
                                    input_type=InputType::Tel
                                    value=phone
                                />
                            </div>
                        </div>

                        <div class="contact__field contact__field--calendar">
                            <label>"1. Select Consultation Date"</label>
                            <button
                                type="button"
                                class="contact__date-button"
                                class:open=move || calendar_open.get()
                                on:click=move |_| calendar_open.update(|v| *v = !*v)
                            >
                                {move || {
                                    let date = booked_date.get();
                                    if date.is_empty() {
                                        "Select Consultation Date".to_string()
                                    } else {
                                        format_display_date(&date)
                                    }
                                }}
                            </button>

                            <Show when=move || calendar_open.get()>
                                <div class="contact__calendar-popover">
                                    <BookingCalendar
                                        selected_date=booked_date
                                        on_date_selected=on_date_selected
                                    />
                                </div>
                            </Show>
                        </div>

                        <div class="contact__field">
                            <label>"2. Select 30-Minute Slot"</label>
                            <SlotGrid
                                selected_date=booked_date
                                selected_slot=booked_slot
                                occupied=occupied
                            />
                        </div>

                        <div class="contact__field">
                            <Textarea
                                class="contact__textarea"
                                placeholder="Briefly explain your legal requirement..."
                                value=purpose
                            />
                        </div>

                        <div class="contact__submit-row">
                            <Button
                                class="contact__submit"
                                button_type=ButtonType::Submit
                                loading=Signal::from(is_submitting)
                                disabled=Signal::from(is_button_disabled)
                            >
                                {move || if is_submitting.get() { "Confirming Slot..." } else { "Submit Request" }}
                            </Button>
                            <p class="contact__fine-print">
                                "Disclaimer: Form submission is for scheduling purposes and does not establish an immediate attorney-client relationship."
                            </p>
                        </div>
                    </form>
                </div>

                <div class="contact__info-panel">
                    <section>
                        <h3>"Contact Information"</h3>
                        <div class="contact__info-item">
                            <span class="contact__info-label">"Advocate"</span>
                            <p>"J. Samuvel BA., LL.B"</p>
                        </div>
                        <div class="contact__info-item">
                            <span class="contact__info-label">"Mobile Number"</span>
                            <p>"+91 9080485223"</p>
                        </div>
                        <div class="contact__info-item">
                            <span class="contact__info-label">"Office Address"</span>
                            <p>"No.06, MM Complex," <br/> "Near District Court Lakshmipuram," <br/> "Theni - 625523"</p>
                        </div>
                        <div class="contact__info-item">
                            <span class="contact__info-label">"Residence"</span>
                            <p>"Parasuramapuram, Batlagundu."</p>
                        </div>
                    </section>

                    <section>
                        <h3>"Social Presence"</h3>
                        <div class="contact__social">
                            <a href="https://www.linkedin.com/in/samuvel-j-5346163a6/" class="contact__social-link">
                                "LinkedIn"
                            </a>
                            <a href="https://wa.me/919080485223" class="contact__social-link">
                                "WhatsApp"
                            </a>
                        </div>
                    </section>
                </div>
            </div>
        </div>
    }
}

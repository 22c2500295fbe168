use leptos::prelude::*;

use crate::schedule::ALL_SLOTS;

/// The fixed grid of 30-minute consultation slots for one day. Booked
/// slots stay visible but cannot be picked.
#[component]
pub fn SlotGrid(
    selected_date: RwSignal<String>,
    selected_slot: RwSignal<String>,
    occupied: Signal<Vec<String>>,
) -> impl IntoView {
    view! {
        <div class="slot-grid">
            <div class="slot-grid__header">
                <h4>"Available Time Slots"</h4>
                <p class="slot-grid__subtitle">
                    {move || {
                        let date = selected_date.get();
                        if date.trim().is_empty() {
                            "Please select a date first".to_string()
                        } else {
                            format!("Consultation slots for {}", crate::schedule::format_display_date(&date))
                        }
                    }}
                </p>
            </div>

            <Show when=move || !selected_date.get().trim().is_empty()>
                <div class="slot-grid__slots">
                    {ALL_SLOTS
                        .iter()
                        .map(|slot| {
                            let slot = *slot;
                            let is_occupied = Memo::new(move |_| {
                                occupied.get().iter().any(|s| s == slot)
                            });
                            let is_selected = Memo::new(move |_| selected_slot.get() == slot);

                            view! {
                                <button
                                    class="slot-grid__slot"
                                    class:occupied=move || is_occupied.get()
                                    class:selected=move || is_selected.get()
                                    disabled=move || is_occupied.get()
                                    on:click=move |_| {
                                        if !is_occupied.get() {
                                            selected_slot.set(slot.to_string());
                                        }
                                    }
                                >
                                    <span class="slot-grid__time">{slot}</span>
                                    <span class="slot-grid__label">
                                        {move || if is_occupied.get() { "Booked" } else { "Open" }}
                                    </span>
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </Show>
        </div>
    }
}

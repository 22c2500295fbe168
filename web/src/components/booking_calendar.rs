use chrono::Datelike;
use leptos::prelude::*;
use thaw::*;

use crate::schedule::{
    date_key, is_selectable, month_cells, month_name, step_month, today, DAYS_OF_WEEK,
};

/// Month-grid date picker for the booking form. Dates before today are
/// disabled; anything else is open since every day shares the same
/// consultation grid.
#[component]
pub fn BookingCalendar(
    selected_date: RwSignal<String>,
    on_date_selected: impl Fn(String) + 'static + Copy + Send + Sync,
) -> impl IntoView {
    let current_month_offset = RwSignal::new(0i32);

    let displayed_month = move || {
        let now = today();
        step_month(now.year(), now.month(), current_month_offset.get())
    };

    view! {
        <div class="booking-calendar">
            <div class="booking-calendar__header">
                <Button
                    appearance=ButtonAppearance::Secondary
                    size=ButtonSize::Small
                    on_click=move |_| {
                        current_month_offset.update(|v| *v -= 1);
                    }
                    disabled=Signal::derive(move || current_month_offset.get() <= 0)
                >
                    "←"
                </Button>

                <div class="booking-calendar__month-label">
                    {move || {
                        let (year, month) = displayed_month();
                        format!("{} {}", month_name(month), year)
                    }}
                </div>

                <Button
                    appearance=ButtonAppearance::Secondary
                    size=ButtonSize::Small
                    on_click=move |_| {
                        current_month_offset.update(|v| *v += 1);
                    }
                    disabled=Signal::derive(move || current_month_offset.get() >= 3)
                >
                    "→"
                </Button>
            </div>

            <div class="booking-calendar__grid">
                <div class="booking-calendar__weekdays">
                    {DAYS_OF_WEEK
                        .iter()
                        .map(|day| view! { <div class="booking-calendar__weekday">{*day}</div> })
                        .collect::<Vec<_>>()}
                </div>

                <div class="booking-calendar__days">
                    {move || {
                        let (year, month) = displayed_month();
                        let now = today();
                        let selected = selected_date.get();

                        month_cells(year, month)
                            .into_iter()
                            .map(|cell| match cell {
                                Some(date) => {
                                    let key = date_key(date);
                                    let is_past = !is_selectable(date, now);
                                    let is_selected = selected == key;
                                    let day = date.day();

                                    view! {
                                        <button
                                            class="booking-calendar__day"
                                            class:past=is_past
                                            class:selected=is_selected
                                            disabled=is_past
                                            on:click=move |_| {
                                                if !is_past {
                                                    selected_date.set(key.clone());
                                                    on_date_selected(key.clone());
                                                }
                                            }
                                        >
                                            {day}
                                        </button>
                                    }
                                    .into_any()
                                }
                                None => view! {
                                    <div class="booking-calendar__day empty"></div>
                                }
                                .into_any(),
                            })
                            .collect::<Vec<_>>()
                    }}
                </div>
            </div>
        </div>
    }
}

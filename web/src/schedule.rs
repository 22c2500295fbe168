use chrono::{Datelike, Local, NaiveDate};
use shared_types::Appointment;

/// The fixed daily consultation grid: a morning session, a lunch gap,
/// then an afternoon session. Every appointment blocks one 30-minute
/// slot, keyed by its HH:MM start time.
pub const ALL_SLOTS: [&str; 14] = [
    "10:00", "10:30", "11:00", "11:30", "12:00", "12:30",
    "14:00", "14:30", "15:00", "15:30", "16:00", "16:30", "17:00", "17:30",
];

pub const DAYS_OF_WEEK: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

pub const MONTHS: [&str; 12] = [
    "January", "February", "March", "April", "May", "June",
    "July", "August", "September", "October", "November", "December",
];

/// Slots already booked on `date` (YYYY-MM-DD), derived from the full
/// appointment collection. Pure; callers recompute whenever the selected
/// date or the collection changes.
pub fn occupied_slots(appointments: &[Appointment], date: &str) -> Vec<String> {
    if date.is_empty() {
        return Vec::new();
    }
    appointments
        .iter()
        .filter(|a| a.booked_date == date)
        .map(|a| a.booked_slot.clone())
        .collect()
}

/// Today with the time-of-day zeroed; dates strictly before this are not
/// selectable in the booking calendar.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Whether a calendar date can be picked. Today itself stays open.
pub fn is_selectable(date: NaiveDate, today: NaiveDate) -> bool {
    date >= today
}

/// Advisory pre-submit guard: true when the chosen slot already appears
/// in the locally cached occupied set, so the form can reject the
/// submission before any round trip. The database constraint remains
/// the final arbiter.
pub fn slot_locally_taken(occupied: &[String], slot: &str) -> bool {
    !slot.is_empty() && occupied.iter().any(|s| s == slot)
}

/// Cells of the month grid: leading `None` blanks for the weekday offset
/// of the 1st (Sunday-first week), then one entry per day of the month.
pub fn month_cells(year: i32, month: u32) -> Vec<Option<NaiveDate>> {
    let first = match NaiveDate::from_ymd_opt(year, month, 1) {
        Some(d) => d,
        None => return Vec::new(),
    };

    let mut cells: Vec<Option<NaiveDate>> = Vec::with_capacity(37);
    for _ in 0..first.weekday().num_days_from_sunday() {
        cells.push(None);
    }
    for day in 1..=days_in_month(year, month) {
        cells.push(NaiveDate::from_ymd_opt(year, month, day));
    }
    cells
}

/// Move the displayed month by `offset` months, rolling over year
/// boundaries in both directions.
pub fn step_month(year: i32, month: u32, offset: i32) -> (i32, u32) {
    let total = year * 12 + month as i32 - 1 + offset;
    (total.div_euclid(12), (total.rem_euclid(12) + 1) as u32)
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = step_month(year, month, 1);
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|d| d.pred_opt())
        .map(|d| d.day())
        .unwrap_or(30)
}

pub fn month_name(month: u32) -> &'static str {
    MONTHS.get(month as usize - 1).copied().unwrap_or("Unknown")
}

/// Canonical YYYY-MM-DD form used for storage and equality checks.
pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Human form shown on the date button, e.g. "Wed, March 4, 2026".
pub fn format_display_date(date_key: &str) -> String {
    match NaiveDate::parse_from_str(date_key, "%Y-%m-%d") {
        Ok(d) => d.format("%a, %B %-d, %Y").to_string(),
        Err(_) => date_key.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::AppointmentStatus;

    fn appt(date: &str, slot: &str) -> Appointment {
        Appointment {
            id: 0,
            name: "Test Client".to_string(),
            phone: "9080000000".to_string(),
            purpose: String::new(),
            created_at: "2026-01-01T00:00:00Z".to_string(),
            booked_date: date.to_string(),
            booked_slot: slot.to_string(),
            status: AppointmentStatus::Pending,
        }
    }

    #[test]
    fn slot_grid_has_two_sessions_with_lunch_gap() {
        assert_eq!(ALL_SLOTS.len(), 14);
        assert_eq!(ALL_SLOTS[0], "10:00");
        assert_eq!(ALL_SLOTS[5], "12:30");
        assert_eq!(ALL_SLOTS[6], "14:00");
        assert_eq!(ALL_SLOTS[13], "17:30");
        assert!(!ALL_SLOTS.contains(&"13:00"));
        assert!(!ALL_SLOTS.contains(&"13:30"));
    }

    #[test]
    fn occupied_slots_matches_only_the_target_date() {
        let appointments = vec![
            appt("2026-03-02", "10:00"),
            appt("2026-03-02", "15:30"),
            appt("2026-03-03", "10:00"),
        ];
        let mut occupied = occupied_slots(&appointments, "2026-03-02");
        occupied.sort();
        assert_eq!(occupied, vec!["10:00", "15:30"]);
        assert!(occupied_slots(&appointments, "2026-03-04").is_empty());
        assert!(occupied_slots(&appointments, "").is_empty());
    }

    #[test]
    fn month_cells_offsets_to_first_weekday() {
        // June 2025 starts on a Sunday: no leading blanks, 30 days.
        let june = month_cells(2025, 6);
        assert_eq!(june.len(), 30);
        assert_eq!(june[0], NaiveDate::from_ymd_opt(2025, 6, 1));

        // March 2026 starts on a Sunday too; check a Thursday start instead.
        // January 2026 starts on a Thursday: 4 leading blanks, 31 days.
        let january = month_cells(2026, 1);
        assert_eq!(january.len(), 4 + 31);
        assert!(january[..4].iter().all(Option::is_none));
        assert_eq!(january[4], NaiveDate::from_ymd_opt(2026, 1, 1));
    }

    #[test]
    fn month_step_rolls_over_year_boundaries() {
        assert_eq!(step_month(2026, 1, -1), (2025, 12));
        assert_eq!(step_month(2025, 12, 1), (2026, 1));
        assert_eq!(step_month(2026, 6, -18), (2024, 12));
        assert_eq!(step_month(2026, 6, 7), (2027, 1));
    }

    #[test]
    fn february_leap_years() {
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2026, 2), 28);
        assert_eq!(days_in_month(2026, 4), 30);
        assert_eq!(days_in_month(2026, 12), 31);
    }

    #[test]
    fn past_dates_are_not_selectable() {
        let today = NaiveDate::from_ymd_opt(2026, 3, 10).unwrap();
        assert!(!is_selectable(NaiveDate::from_ymd_opt(2026, 3, 9).unwrap(), today));
        assert!(!is_selectable(NaiveDate::from_ymd_opt(2025, 12, 31).unwrap(), today));
        assert!(is_selectable(today, today));
        assert!(is_selectable(NaiveDate::from_ymd_opt(2026, 3, 11).unwrap(), today));
    }

    #[test]
    fn local_occupied_check_catches_taken_slot() {
        let appointments = vec![appt("2026-03-02", "10:00"), appt("2026-03-02", "15:30")];
        let occupied = occupied_slots(&appointments, "2026-03-02");

        assert!(slot_locally_taken(&occupied, "10:00"));
        assert!(slot_locally_taken(&occupied, "15:30"));
        assert!(!slot_locally_taken(&occupied, "10:30"));
        // an unset slot never counts as a clash
        assert!(!slot_locally_taken(&occupied, ""));
    }

    #[test]
    fn date_key_is_zero_padded() {
        let d = NaiveDate::from_ymd_opt(2026, 3, 7).unwrap();
        assert_eq!(date_key(d), "2026-03-07");
    }
}

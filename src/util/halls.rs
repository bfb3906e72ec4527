//! Built-in dining hall reference: ids, names, and service hours.
//!
//! The hall list mirrors the ids the menu API recognizes; it changes
//! rarely enough that shipping it with the client beats another fetch.

#[cfg(test)]
#[path = "halls_test.rs"]
mod halls_test;

/// One dining hall with its weekday/weekend service windows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DiningHall {
    pub id: u32,
    pub name: &'static str,
    pub weekday_breakfast: &'static str,
    pub weekday_lunch: &'static str,
    pub weekday_dinner: &'static str,
    /// Saturday-only breakfast window; most halls serve brunch instead.
    pub weekend_sat_breakfast: Option<&'static str>,
    /// Sunday-only breakfast window.
    pub weekend_sun_breakfast: Option<&'static str>,
    pub weekend_brunch: &'static str,
    pub weekend_dinner: &'static str,
    pub has_late_night: bool,
    pub has_grab_n_go: bool,
}

impl DiningHall {
    /// Display text for the hall's weekend breakfast windows, like
    /// `"Sat 07:00-09:30, Sun 08:00-09:30"`. Empty when the hall only
    /// serves weekend brunch.
    pub fn weekend_breakfast_label(&self) -> String {
        let mut parts = Vec::with_capacity(2);
        if let Some(window) = self.weekend_sat_breakfast {
            parts.push(format!("Sat {window}"));
        }
        if let Some(window) = self.weekend_sun_breakfast {
            parts.push(format!("Sun {window}"));
        }
        parts.join(", ")
    }
}

/// All dining halls the menu API reports, in display order.
pub const DINING_HALLS: &[DiningHall] = &[
    DiningHall {
        id: 3,
        name: "Connecticut",
        weekday_breakfast: "07:00-10:45",
        weekday_lunch: "11:00-14:30",
        weekday_dinner: "16:00-19:15",
        weekend_sat_breakfast: None,
        weekend_sun_breakfast: None,
        weekend_brunch: "10:30-14:30",
        weekend_dinner: "16:00-19:15",
        has_late_night: false,
        has_grab_n_go: false,
    },
    DiningHall {
        id: 5,
        name: "McMahon",
        weekday_breakfast: "07:00-10:45",
        weekday_lunch: "11:00-15:00",
        weekday_dinner: "16:00-19:15",
        weekend_sat_breakfast: None,
        weekend_sun_breakfast: None,
        weekend_brunch: "10:30-14:00",
        weekend_dinner: "15:30-19:15",
        has_late_night: false,
        has_grab_n_go: false,
    },
    DiningHall {
        id: 7,
        name: "North",
        weekday_breakfast: "07:00-10:45",
        weekday_lunch: "11:00-15:00",
        weekday_dinner: "16:30-19:15",
        weekend_sat_breakfast: None,
        weekend_sun_breakfast: None,
        weekend_brunch: "10:30-15:00",
        weekend_dinner: "16:30-19:15",
        has_late_night: false,
        has_grab_n_go: false,
    },
    DiningHall {
        id: 15,
        name: "Northwest",
        weekday_breakfast: "07:00-10:45",
        weekday_lunch: "11:00-14:15",
        weekday_dinner: "15:45-19:15",
        weekend_sat_breakfast: None,
        weekend_sun_breakfast: None,
        weekend_brunch: "10:30-14:15",
        weekend_dinner: "15:45-19:15",
        has_late_night: true,
        has_grab_n_go: false,
    },
    DiningHall {
        id: 6,
        name: "Putnam",
        weekday_breakfast: "07:00-10:45",
        weekday_lunch: "11:00-14:30",
        weekday_dinner: "16:00-19:15",
        weekend_sat_breakfast: None,
        weekend_sun_breakfast: None,
        weekend_brunch: "09:30-14:30",
        weekend_dinner: "16:00-19:15",
        has_late_night: false,
        has_grab_n_go: true,
    },
    DiningHall {
        id: 16,
        name: "South",
        weekday_breakfast: "07:00-10:45",
        weekday_lunch: "11:00-15:00",
        weekday_dinner: "16:30-19:15",
        weekend_sat_breakfast: Some("07:00-09:30"),
        weekend_sun_breakfast: Some("08:00-09:30"),
        weekend_brunch: "09:30-15:00",
        weekend_dinner: "16:30-19:15",
        has_late_night: true,
        has_grab_n_go: false,
    },
    DiningHall {
        id: 42,
        name: "Towers",
        weekday_breakfast: "07:00-10:45",
        weekday_lunch: "11:00-15:00",
        weekday_dinner: "16:30-19:15",
        weekend_sat_breakfast: None,
        weekend_sun_breakfast: None,
        weekend_brunch: "09:30-15:00",
        weekend_dinner: "16:30-19:15",
        has_late_night: false,
        has_grab_n_go: true,
    },
    DiningHall {
        id: 1,
        name: "Whitney",
        weekday_breakfast: "07:00-10:45",
        weekday_lunch: "11:00-15:00",
        weekday_dinner: "16:30-19:15",
        weekend_sat_breakfast: None,
        weekend_sun_breakfast: None,
        weekend_brunch: "10:30-15:00",
        weekend_dinner: "16:30-19:15",
        has_late_night: false,
        has_grab_n_go: false,
    },
];

/// Look up a hall name by id in either numeric or string form. Returns
/// an empty string for unknown or blank identifiers.
pub fn hall_name(identifier: &str) -> &'static str {
    let trimmed = identifier.trim();
    if trimmed.is_empty() {
        return "";
    }
    DINING_HALLS
        .iter()
        .find(|hall| hall.id.to_string() == trimmed)
        .map_or("", |hall| hall.name)
}

/// Label for a sample's hall: `"North (#7)"` when the id is known,
/// otherwise the raw id.
pub fn hall_label(identifier: &str) -> String {
    let name = hall_name(identifier);
    if name.is_empty() {
        identifier.to_owned()
    } else {
        format!("{name} (#{identifier})")
    }
}

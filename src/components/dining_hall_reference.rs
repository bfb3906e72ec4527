//! Reference table of dining halls with service hours, used by the
//! upload form to pick a hall id.

use leptos::prelude::*;

use crate::util::halls::DINING_HALLS;

/// Selectable dining-hall reference. Clicking a row reports the hall id
/// through `on_select`.
#[component]
pub fn DiningHallReference(on_select: Callback<String>) -> impl IntoView {
    view! {
        <div class="hall-reference">
            <h3 class="hall-reference__title">"Dining hall reference"</h3>
            <table class="hall-reference__table">
                <thead>
                    <tr>
                        <th>"Hall"</th>
                        <th>"Weekday breakfast"</th>
                        <th>"Weekday lunch"</th>
                        <th>"Weekday dinner"</th>
                        <th>"Weekend breakfast"</th>
                        <th>"Weekend brunch"</th>
                        <th>"Weekend dinner"</th>
                        <th>"Extras"</th>
                    </tr>
                </thead>
                <tbody>
                    {DINING_HALLS
                        .iter()
                        .map(|hall| {
                            let id = hall.id.to_string();
                            let extras = match (hall.has_late_night, hall.has_grab_n_go) {
                                (true, true) => "Late night, Grab-n-go",
                                (true, false) => "Late night",
                                (false, true) => "Grab-n-go",
                                (false, false) => "",
                            };
                            view! {
                                <tr
                                    class="hall-reference__row"
                                    on:click=move |_| on_select.run(id.clone())
                                >
                                    <td>{format!("{} (#{})", hall.name, hall.id)}</td>
                                    <td>{hall.weekday_breakfast}</td>
                                    <td>{hall.weekday_lunch}</td>
                                    <td>{hall.weekday_dinner}</td>
                                    <td>{hall.weekend_breakfast_label()}</td>
                                    <td>{hall.weekend_brunch}</td>
                                    <td>{hall.weekend_dinner}</td>
                                    <td>{extras}</td>
                                </tr>
                            }
                        })
                        .collect::<Vec<_>>()}
                </tbody>
            </table>
        </div>
    }
}

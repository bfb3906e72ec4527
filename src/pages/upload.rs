//! Upload page: validate a plate photo locally, then presign, transfer,
//! and record its metadata.
//!
//! SYSTEM CONTEXT
//! ==============
//! The three-step submission (presign, object upload, metadata post) is
//! not transactional: a failure after the object upload leaves an
//! orphaned object behind, which the backend tolerates. Every validation
//! runs before the first network call.

#[cfg(test)]
#[path = "upload_test.rs"]
mod upload_test;

use leptos::prelude::*;

use crate::components::dining_hall_reference::DiningHallReference;
use crate::components::menu_item_search::MenuItemSearch;
use crate::components::token_status_card::TokenStatusCard;
use crate::net::types::{Mealtime, UploadItem};
use crate::state::catalog::CatalogState;
use crate::state::status::FetchStatus;
use crate::state::token::TokenState;
use crate::util::halls::DINING_HALLS;

/// One editable row of the plate item list.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ItemDraft {
    /// Stable row key for list rendering.
    pub key: String,
    pub menu_item_id: String,
    /// Raw servings input; parsed during normalization.
    pub servings: String,
}

impl ItemDraft {
    fn new() -> Self {
        Self { key: uuid::Uuid::new_v4().to_string(), ..Self::default() }
    }
}

/// Normalize item drafts into the wire form: ids trimmed and non-empty,
/// servings parsed as positive numbers.
///
/// # Errors
///
/// Returns a user-visible message naming the first offending row.
fn normalize_items(drafts: &[ItemDraft]) -> Result<Vec<UploadItem>, String> {
    if drafts.is_empty() {
        return Err("Add at least one plate item.".to_owned());
    }
    let mut items = Vec::with_capacity(drafts.len());
    for (index, draft) in drafts.iter().enumerate() {
        let row = index + 1;
        let id = draft.menu_item_id.trim();
        if id.is_empty() {
            return Err(format!("Item {row} is missing a menu item ID."));
        }
        let servings = draft
            .servings
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite() && *value > 0.0)
            .ok_or_else(|| format!("Item {row} needs servings greater than zero."))?;
        items.push(UploadItem { menu_item_id: id.to_owned(), servings });
    }
    Ok(items)
}

/// Check the non-file form fields before submission.
///
/// # Errors
///
/// Returns a user-visible message for the first missing field.
fn validate_fields(meal_date: &str, hall_id: &str) -> Result<(), String> {
    if meal_date.trim().is_empty() {
        return Err("Pick the meal date.".to_owned());
    }
    if hall_id.trim().is_empty() {
        return Err("Pick the dining hall.".to_owned());
    }
    Ok(())
}

/// Upload form page. Requires a configured token; without one it renders
/// the token prompt and submits nothing.
#[component]
pub fn UploadPage() -> impl IntoView {
    let token = expect_context::<RwSignal<TokenState>>();
    let catalog = expect_context::<RwSignal<CatalogState>>();

    let meal_date = RwSignal::new(String::new());
    let mealtime = RwSignal::new(Mealtime::Lunch);
    let hall_id = RwSignal::new(String::new());
    let difficulty = RwSignal::new("medium".to_owned());
    let drafts = RwSignal::new(vec![ItemDraft::new()]);
    let search_selection = RwSignal::new(String::new());

    let submit_status = RwSignal::new(FetchStatus::Idle);
    let message = RwSignal::new(String::new());

    let file_input: NodeRef<leptos::html::Input> = NodeRef::new();

    let on_add_item = move |_| drafts.update(|list| list.push(ItemDraft::new()));

    let on_remove_item = Callback::new(move |key: String| {
        drafts.update(|list| list.retain(|draft| draft.key != key));
    });

    // Catalog search fills the first row with a blank id.
    let on_search_select = Callback::new(move |id: String| {
        search_selection.set(id.clone());
        drafts.update(|list| {
            if let Some(open) = list.iter_mut().find(|draft| draft.menu_item_id.trim().is_empty()) {
                open.menu_item_id = id;
            } else {
                let mut draft = ItemDraft::new();
                draft.menu_item_id = id;
                list.push(draft);
            }
        });
    });

    let on_retry_catalog = Callback::new(move |()| {
        #[cfg(feature = "hydrate")]
        {
            let seq = catalog.try_update(crate::state::catalog::CatalogState::begin);
            if let Some(seq) = seq {
                leptos::task::spawn_local(async move {
                    let outcome = crate::net::menu::fetch_catalog().await;
                    catalog.update(|state| state.apply(seq, outcome));
                });
            }
        }
    });

    let on_hall_pick = Callback::new(move |id: String| hall_id.set(id));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submit_status.get_untracked().is_loading() {
            return;
        }
        let token_value = token.get_untracked().token;
        if token_value.is_empty() {
            token.update(TokenState::open_modal);
            return;
        }

        // Everything local happens before the first network call.
        if let Err(error) =
            validate_fields(&meal_date.get_untracked(), &hall_id.get_untracked())
        {
            submit_status.set(FetchStatus::Error);
            message.set(error);
            return;
        }
        let items = match normalize_items(&drafts.get_untracked()) {
            Ok(items) => items,
            Err(error) => {
                submit_status.set(FetchStatus::Error);
                message.set(error);
                return;
            }
        };

        #[cfg(feature = "hydrate")]
        {
            let Some(file) = file_input
                .get_untracked()
                .and_then(|input| input.files())
                .and_then(|files| files.get(0))
            else {
                submit_status.set(FetchStatus::Error);
                message.set("Choose a plate photo first.".to_owned());
                return;
            };

            submit_status.set(FetchStatus::Loading);
            message.set("Validating image...".to_owned());

            let date_value = meal_date.get_untracked();
            let hall_value = hall_id.get_untracked();
            let difficulty_value = difficulty.get_untracked();
            let mealtime_value = mealtime.get_untracked();

            leptos::task::spawn_local(async move {
                let outcome = run_submission(
                    &token_value,
                    &file,
                    crate::net::types::UploadMetadata {
                        object_key: String::new(),
                        bucket: String::new(),
                        mealtime: mealtime_value.as_str().to_owned(),
                        meal_date: date_value,
                        dining_hall_id: hall_value,
                        difficulty: difficulty_value,
                        items,
                    },
                )
                .await;

                match outcome {
                    Ok(object_key) => {
                        submit_status.set(FetchStatus::Success);
                        message.set(format!("Recorded {object_key}."));
                        meal_date.set(String::new());
                        hall_id.set(String::new());
                        difficulty.set("medium".to_owned());
                        mealtime.set(Mealtime::Lunch);
                        drafts.set(vec![ItemDraft::new()]);
                        search_selection.set(String::new());
                        if let Some(input) = file_input.get_untracked() {
                            input.set_value("");
                        }
                    }
                    Err(error) => {
                        submit_status.set(FetchStatus::Error);
                        message.set(error);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = items;
        }
    };

    view! {
        <section class="page page--upload">
            <TokenStatusCard/>

            <header class="page__header">
                <h1>"Upload Plate Data"</h1>
                <p>
                    "Upload a reference photo of a plate, then list every menu item "
                    "along with serving information."
                </p>
            </header>

            <Show when=move || !token.get().has_token()>
                <div class="page__token-prompt">
                    "Set the team API token above to submit labeled plates."
                </div>
            </Show>

            <form class="upload-form" on:submit=on_submit>
                <label class="upload-form__field">
                    "Plate photo (JPEG or PNG, 1024x1024, up to 2 MB)"
                    <input node_ref=file_input type="file" accept="image/jpeg,image/png"/>
                </label>

                <div class="upload-form__row">
                    <label class="upload-form__field">
                        "Meal date"
                        <input
                            type="date"
                            prop:value=move || meal_date.get()
                            on:input=move |ev| meal_date.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="upload-form__field">
                        "Mealtime"
                        <select on:change=move |ev| {
                            if let Some(meal) = Mealtime::parse(&event_target_value(&ev)) {
                                mealtime.set(meal);
                            }
                        }>
                            {Mealtime::ALL
                                .into_iter()
                                .map(|meal| {
                                    view! {
                                        <option
                                            value=meal.as_str()
                                            selected=move || mealtime.get() == meal
                                        >
                                            {meal.label()}
                                        </option>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </select>
                    </label>
                    <label class="upload-form__field">
                        "Dining hall"
                        <select on:change=move |ev| hall_id.set(event_target_value(&ev))>
                            <option value="" selected=move || hall_id.get().is_empty()>
                                "Choose a hall"
                            </option>
                            {DINING_HALLS
                                .iter()
                                .map(|hall| {
                                    let id = hall.id.to_string();
                                    let value = id.clone();
                                    view! {
                                        <option
                                            value=value
                                            selected=move || hall_id.get() == id
                                        >
                                            {format!("{} (#{})", hall.name, hall.id)}
                                        </option>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </select>
                    </label>
                    <label class="upload-form__field">
                        "Difficulty"
                        <select on:change=move |ev| difficulty.set(event_target_value(&ev))>
                            {["easy", "medium", "hard"]
                                .into_iter()
                                .map(|level| {
                                    view! {
                                        <option
                                            value=level
                                            selected=move || difficulty.get() == level
                                        >
                                            {crate::util::format::capitalize(level)}
                                        </option>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </select>
                    </label>
                </div>

                <MenuItemSearch
                    selected_id=search_selection
                    on_select=on_search_select
                    on_retry=on_retry_catalog
                />

                <div class="upload-form__items">
                    <h2>"Plate items"</h2>
                    <For
                        each=move || drafts.get()
                        key=|draft| draft.key.clone()
                        children=move |draft| {
                            let id_value_key = draft.key.clone();
                            let id_input_key = draft.key.clone();
                            let servings_value_key = draft.key.clone();
                            let servings_input_key = draft.key.clone();
                            let remove_key = draft.key.clone();
                            view! {
                                <div class="upload-form__item-row">
                                    <input
                                        type="text"
                                        placeholder="Menu item ID"
                                        prop:value=move || {
                                            drafts
                                                .get()
                                                .iter()
                                                .find(|row| row.key == id_value_key)
                                                .map(|row| row.menu_item_id.clone())
                                                .unwrap_or_default()
                                        }
                                        on:input=move |ev| {
                                            let value = event_target_value(&ev);
                                            drafts.update(|list| {
                                                if let Some(row) =
                                                    list.iter_mut().find(|row| row.key == id_input_key)
                                                {
                                                    row.menu_item_id = value.clone();
                                                }
                                            });
                                        }
                                    />
                                    <input
                                        type="text"
                                        inputmode="decimal"
                                        placeholder="Servings"
                                        prop:value=move || {
                                            drafts
                                                .get()
                                                .iter()
                                                .find(|row| row.key == servings_value_key)
                                                .map(|row| row.servings.clone())
                                                .unwrap_or_default()
                                        }
                                        on:input=move |ev| {
                                            let value = event_target_value(&ev);
                                            drafts.update(|list| {
                                                if let Some(row) = list
                                                    .iter_mut()
                                                    .find(|row| row.key == servings_input_key)
                                                {
                                                    row.servings = value.clone();
                                                }
                                            });
                                        }
                                    />
                                    <button
                                        class="btn btn--small"
                                        type="button"
                                        on:click=move |_| on_remove_item.run(remove_key.clone())
                                    >
                                        "Remove"
                                    </button>
                                </div>
                            }
                        }
                    />
                    <button class="btn" type="button" on:click=on_add_item>
                        "+ Add item"
                    </button>
                </div>

                <div class="upload-form__actions">
                    <button
                        class="btn btn--primary"
                        type="submit"
                        disabled=move || submit_status.get().is_loading()
                    >
                        {move || {
                            if submit_status.get().is_loading() { "Submitting..." } else { "Submit plate" }
                        }}
                    </button>
                </div>

                <Show when=move || !message.get().is_empty()>
                    <p class=move || {
                        if submit_status.get().is_error() {
                            "upload-form__message upload-form__message--error"
                        } else {
                            "upload-form__message"
                        }
                    }>{move || message.get()}</p>
                </Show>
            </form>

            <DiningHallReference on_select=on_hall_pick/>
        </section>
    }
}

/// Run the three-step submission: validate the image, presign, transfer
/// the bytes, then record metadata. Returns the recorded object key.
#[cfg(feature = "hydrate")]
async fn run_submission(
    token: &str,
    file: &web_sys::File,
    mut metadata: crate::net::types::UploadMetadata,
) -> Result<String, String> {
    use crate::net::api;
    use crate::util::image;

    let facts = image::read_image_facts(file).await?;
    image::validate(&facts)?;

    let presign = api::presign_upload(token, &file.name(), &facts.content_type).await?;
    api::upload_object(&presign, file).await?;

    metadata.object_key = presign.object_key.clone();
    metadata.bucket = presign.bucket;
    api::submit_metadata(token, &metadata).await?;
    Ok(presign.object_key)
}

//! Dataset page: every labeled plate in a table with links to detail.

use leptos::prelude::*;

use crate::components::token_status_card::TokenStatusCard;
use crate::state::dataset::DatasetState;
use crate::state::status::FetchStatus;
use crate::state::token::TokenState;
use crate::util::format;
use crate::util::halls;

/// Kick off a dataset fetch for the current token. No-op off-browser.
pub fn refresh_dataset(token: RwSignal<TokenState>, dataset: RwSignal<DatasetState>) {
    #[cfg(feature = "hydrate")]
    {
        let token_value = token.get_untracked().token;
        if token_value.is_empty() {
            dataset.update(DatasetState::reset);
            return;
        }
        let seq = match dataset.try_update(DatasetState::begin) {
            Some(seq) => seq,
            None => return,
        };
        leptos::task::spawn_local(async move {
            let outcome = crate::net::api::fetch_dataset(&token_value).await;
            if let Err(message) = &outcome {
                log::warn!("dataset fetch failed: {message}");
            }
            dataset.update(|state| state.apply(seq, outcome));
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, dataset);
    }
}

/// Dataset overview page. Fetches whenever the token changes and offers
/// a manual refresh; rows link to the sample detail route.
#[component]
pub fn DatasetPage() -> impl IntoView {
    let token = expect_context::<RwSignal<TokenState>>();
    let dataset = expect_context::<RwSignal<DatasetState>>();

    // Refetch on token change; clearing the token resets the table.
    Effect::new(move || {
        let _ = token.get().token;
        refresh_dataset(token, dataset);
    });

    view! {
        <section class="page page--dataset">
            <TokenStatusCard/>

            <header class="page__header">
                <h1>"Dataset Overview"</h1>
                <p>"Review every labeled plate in the MenuMatch dataset."</p>
            </header>

            <Show when=move || !token.get().has_token()>
                <div class="page__token-prompt">
                    "Set the team API token above to fetch dataset entries."
                </div>
            </Show>

            <div class="dataset-table">
                <div class="dataset-table__toolbar">
                    <span class="dataset-table__count">
                        {move || {
                            let state = dataset.get();
                            match state.status {
                                FetchStatus::Success => {
                                    format!("{} labeled plates", state.records.len())
                                }
                                FetchStatus::Loading => "Loading dataset...".to_owned(),
                                FetchStatus::Idle | FetchStatus::Error => String::new(),
                            }
                        }}
                    </span>
                    <button
                        class="btn"
                        disabled=move || dataset.get().status.is_loading()
                        on:click=move |_| refresh_dataset(token, dataset)
                    >
                        "Refresh"
                    </button>
                </div>

                <Show when=move || dataset.get().status.is_error()>
                    <p class="dataset-table__error">{move || dataset.get().error}</p>
                </Show>

                <Show when=move || dataset.get().status.is_success()>
                    <table class="dataset-table__table">
                        <thead>
                            <tr>
                                <th>"Object key"</th>
                                <th>"Meal date"</th>
                                <th>"Mealtime"</th>
                                <th>"Dining hall"</th>
                                <th>"Difficulty"</th>
                                <th>"Items"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                dataset
                                    .get()
                                    .records
                                    .into_iter()
                                    .map(|record| {
                                        let href = format!(
                                            "/dataset/{}",
                                            encode_key(&record.object_key)
                                        );
                                        view! {
                                            <tr>
                                                <td class="dataset-table__key">
                                                    <a href=href>{record.object_key.clone()}</a>
                                                </td>
                                                <td>{format::format_meal_date(&record.meal_date)}</td>
                                                <td>{format::capitalize(&record.mealtime)}</td>
                                                <td>{halls::hall_label(&record.dining_hall_id)}</td>
                                                <td>{format::capitalize(&record.difficulty)}</td>
                                                <td>{record.items.len()}</td>
                                            </tr>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </tbody>
                    </table>
                </Show>
            </div>
        </section>
    }
}

fn encode_key(object_key: &str) -> String {
    #[cfg(feature = "hydrate")]
    {
        js_sys::encode_uri_component(object_key).into()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        object_key.to_owned()
    }
}

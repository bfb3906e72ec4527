//! Typeahead search over the menu-item catalog for the upload form.

#[cfg(test)]
#[path = "menu_item_search_test.rs"]
mod menu_item_search_test;

use leptos::prelude::*;

use crate::state::catalog::CatalogState;
use crate::state::status::FetchStatus;
use crate::net::types::CatalogItem;

/// Most results shown under the search input.
const MAX_RESULTS: usize = 8;

/// Filter catalog items by a case-insensitive substring over name, or a
/// raw substring over id, capped at [`MAX_RESULTS`]. A blank query shows
/// the head of the catalog so the dropdown is never empty on focus.
fn filter_catalog(items: &[CatalogItem], query: &str) -> Vec<CatalogItem> {
    let normalized = query.trim().to_lowercase();
    if normalized.is_empty() {
        return items.iter().take(MAX_RESULTS).cloned().collect();
    }
    items
        .iter()
        .filter(|item| {
            item.name.to_lowercase().contains(&normalized) || item.id.contains(&normalized)
        })
        .take(MAX_RESULTS)
        .cloned()
        .collect()
}

/// Searchable catalog dropdown. Selecting a result reports the item id
/// through `on_select`; catalog fetch errors surface inline with a retry
/// hook so the form can still be filled by hand.
#[component]
pub fn MenuItemSearch(
    selected_id: RwSignal<String>,
    on_select: Callback<String>,
    on_retry: Callback<()>,
) -> impl IntoView {
    let catalog = expect_context::<RwSignal<CatalogState>>();

    let query = RwSignal::new(String::new());
    let open = RwSignal::new(false);

    let selected_name = move || {
        let id = selected_id.get();
        if id.is_empty() {
            return String::new();
        }
        catalog.get().name_of(&id).unwrap_or_default().to_owned()
    };

    let results = move || filter_catalog(&catalog.get().items, &query.get());

    let choose = Callback::new(move |id: String| {
        on_select.run(id);
        open.set(false);
        query.set(String::new());
    });

    view! {
        <div class="item-search">
            <span class="item-search__label">"Search Husky Eats catalog"</span>
            <input
                class="item-search__input"
                type="search"
                autocomplete="off"
                placeholder="Search by name or ID"
                prop:value=move || if open.get() { query.get() } else { selected_name() }
                on:focus=move |_| open.set(true)
                on:input=move |ev| {
                    query.set(event_target_value(&ev));
                    open.set(true);
                }
                on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                    if ev.key() == "Escape" {
                        open.set(false);
                    } else if ev.key() == "Enter" {
                        ev.prevent_default();
                        if let Some(first) = results().into_iter().next() {
                            choose.run(first.id);
                        }
                    }
                }
            />
            <Show when=move || open.get()>
                <div class="item-search__dropdown">
                    {move || {
                        let state = catalog.get();
                        match state.status {
                            FetchStatus::Loading => view! {
                                <p class="item-search__note">"Loading menu catalog..."</p>
                            }
                            .into_any(),
                            FetchStatus::Error => view! {
                                <div class="item-search__error">
                                    <p>"Unable to load menu items. You can still enter the ID."</p>
                                    <button
                                        class="btn btn--small"
                                        type="button"
                                        on:click=move |_| on_retry.run(())
                                    >
                                        "Retry fetch"
                                    </button>
                                    <p class="item-search__error-detail">
                                        {move || format!("Error: {}", catalog.get().error)}
                                    </p>
                                </div>
                            }
                            .into_any(),
                            FetchStatus::Idle | FetchStatus::Success => {
                                let matches = results();
                                if matches.is_empty() {
                                    view! {
                                        <p class="item-search__note">
                                            "No matches. Try a different name or ID."
                                        </p>
                                    }
                                    .into_any()
                                } else {
                                    view! {
                                        <ul class="item-search__results">
                                            {matches
                                                .into_iter()
                                                .map(|item| {
                                                    let id = item.id.clone();
                                                    view! {
                                                        <li>
                                                            <button
                                                                type="button"
                                                                on:mousedown=move |ev| ev.prevent_default()
                                                                on:click=move |_| choose.run(id.clone())
                                                            >
                                                                <span class="item-search__name">{item.name.clone()}</span>
                                                                <span class="item-search__id">
                                                                    {format!("Item ID: {}", item.id)}
                                                                </span>
                                                            </button>
                                                        </li>
                                                    }
                                                })
                                                .collect::<Vec<_>>()}
                                        </ul>
                                    }
                                    .into_any()
                                }
                            }
                        }
                    }}
                </div>
            </Show>
        </div>
    }
}

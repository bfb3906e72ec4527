//! Coverage page: per-item labeling counts cross-referenced against the
//! menu catalog, with search and an optional menu-context filter.
//!
//! SYSTEM CONTEXT
//! ==============
//! Three independent fetches feed this page (dataset, catalog, menu
//! context). Rows are a pure function of whatever has arrived so far and
//! recompute on every input change; there is no ordering requirement
//! between the fetches.

use leptos::prelude::*;

use crate::components::token_status_card::TokenStatusCard;
use crate::coverage;
use crate::net::types::Mealtime;
use crate::state::catalog::CatalogState;
use crate::state::dataset::DatasetState;
use crate::state::menu_context::{HallSelector, MealSelector, MenuContextState};
use crate::state::status::FetchStatus;
use crate::state::token::TokenState;
use crate::util::halls::DINING_HALLS;

/// Start a context resolution for the current selection, superseding any
/// in-flight one. No-op off-browser.
fn resolve_context(context: RwSignal<MenuContextState>) {
    #[cfg(feature = "hydrate")]
    {
        let state = context.get_untracked();
        if !state.enabled || state.selection.date.is_empty() {
            return;
        }
        let selection = state.selection.clone();
        let seq = match context.try_update(MenuContextState::begin) {
            Some(seq) => seq,
            None => return,
        };
        leptos::task::spawn_local(async move {
            let outcome = crate::state::menu_context::resolve(&selection).await;
            if let Err(message) = &outcome {
                log::warn!("menu-context resolution failed: {message}");
            }
            context.update(|state| state.apply(seq, outcome));
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = context;
    }
}

/// Coverage overview page.
#[component]
pub fn CoveragePage() -> impl IntoView {
    let token = expect_context::<RwSignal<TokenState>>();
    let dataset = expect_context::<RwSignal<DatasetState>>();
    let catalog = expect_context::<RwSignal<CatalogState>>();

    let search = RwSignal::new(String::new());
    let context = RwSignal::new(MenuContextState::default());

    // The dataset may not have been fetched yet if the user landed here
    // directly; reuse the dataset page's refresh flow.
    Effect::new(move || {
        let _ = token.get().token;
        super::dataset::refresh_dataset(token, dataset);
    });

    let coverage_by_id = Memo::new(move |_| coverage::aggregate(&dataset.get().records));

    let rows = Memo::new(move |_| {
        let catalog_items = catalog.get().items;
        let membership_state = context.get();
        coverage::build_rows(
            &catalog_items,
            &coverage_by_id.get(),
            &search.get(),
            membership_state.active_membership(),
        )
    });

    let summary = move || {
        let catalog_items = catalog.get().items;
        if catalog_items.is_empty() {
            return "Loading catalog...".to_owned();
        }
        let covered = coverage::covered_count(&catalog_items, &coverage_by_id.get());
        format!("{covered} of {} catalog items have at least one label.", catalog_items.len())
    };

    let on_toggle_context = move |ev: leptos::ev::Event| {
        let enabled = event_target_checked(&ev);
        if enabled {
            context.update(|state| state.enabled = true);
            resolve_context(context);
        } else {
            context.update(MenuContextState::disable);
        }
    };

    let on_date = move |ev: leptos::ev::Event| {
        context.update(|state| state.selection.date = event_target_value(&ev));
        resolve_context(context);
    };

    let on_meal = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        context.update(|state| {
            state.selection.meal = Mealtime::parse(&value).map_or(MealSelector::All, MealSelector::One);
        });
        resolve_context(context);
    };

    let on_hall = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        context.update(|state| {
            state.selection.hall =
                if value.is_empty() { HallSelector::All } else { HallSelector::One(value) };
        });
        resolve_context(context);
    };

    view! {
        <section class="page page--coverage">
            <TokenStatusCard/>

            <header class="page__header">
                <h1>"Coverage Overview"</h1>
                <p>
                    "See which Husky Eats menu items have been labeled, how often they "
                    "appear on multi-item plates, and serving distributions for solo plates."
                </p>
            </header>

            <div class="coverage-panel">
                <div class="coverage-panel__toolbar">
                    <div class="coverage-panel__summary">
                        <h2>"Menu item coverage"</h2>
                        <p>{summary}</p>
                        <Show when=move || dataset.get().status.is_error()>
                            <p class="coverage-panel__error">{move || dataset.get().error}</p>
                        </Show>
                        <Show when=move || catalog.get().status.is_error()>
                            <p class="coverage-panel__error">{move || catalog.get().error}</p>
                        </Show>
                        <Show when=move || context.get().status.is_error()>
                            <p class="coverage-panel__error">{move || context.get().error}</p>
                        </Show>
                    </div>
                    <div class="coverage-panel__controls">
                        <input
                            type="search"
                            placeholder="Search by ID or name"
                            prop:value=move || search.get()
                            on:input=move |ev| search.set(event_target_value(&ev))
                        />
                        <Show when=move || !token.get().has_token()>
                            <button class="btn" on:click=move |_| token.update(TokenState::open_modal)>
                                "Set API token"
                            </button>
                        </Show>
                    </div>
                </div>

                <div class="coverage-panel__context">
                    <label class="coverage-panel__toggle">
                        <input
                            type="checkbox"
                            prop:checked=move || context.get().enabled
                            on:change=on_toggle_context
                        />
                        "Only items on the menu for"
                    </label>
                    <input
                        type="date"
                        prop:value=move || context.get().selection.date
                        on:input=on_date
                    />
                    <select on:change=on_meal>
                        <option value="" selected=move || context.get().selection.meal == MealSelector::All>
                            "All meals"
                        </option>
                        {Mealtime::ALL
                            .into_iter()
                            .map(|meal| {
                                view! {
                                    <option
                                        value=meal.as_str()
                                        selected=move || {
                                            context.get().selection.meal == MealSelector::One(meal)
                                        }
                                    >
                                        {meal.label()}
                                    </option>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </select>
                    <select on:change=on_hall>
                        <option value="" selected=move || context.get().selection.hall == HallSelector::All>
                            "All halls"
                        </option>
                        {DINING_HALLS
                            .iter()
                            .map(|hall| {
                                let id = hall.id.to_string();
                                let value = id.clone();
                                view! {
                                    <option
                                        value=value
                                        selected=move || {
                                            context.get().selection.hall == HallSelector::One(id.clone())
                                        }
                                    >
                                        {hall.name}
                                    </option>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </select>
                    <Show when=move || context.get().awaiting_date()>
                        <span class="coverage-panel__note">
                            "Pick a date to apply the menu filter."
                        </span>
                    </Show>
                    <Show when=move || context.get().status.is_loading()>
                        <span class="coverage-panel__note">"Resolving menu..."</span>
                    </Show>
                </div>

                <Show when=move || !token.get().has_token()>
                    <div class="page__token-prompt">
                        "Set the team API token above to fetch dataset entries."
                    </div>
                </Show>

                <Show when=move || {
                    dataset.get().status.is_loading() || catalog.get().status.is_loading()
                }>
                    <p class="coverage-panel__note">"Loading coverage..."</p>
                </Show>

                <Show
                    when=move || !rows.get().is_empty()
                    fallback=move || {
                        view! {
                            <Show when=move || {
                                token.get().has_token()
                                    && catalog.get().status == FetchStatus::Success
                            }>
                                <p class="coverage-panel__note">"No catalog items to display yet."</p>
                            </Show>
                        }
                    }
                >
                    <table class="coverage-table">
                        <thead>
                            <tr>
                                <th>"ID"</th>
                                <th>"Name"</th>
                                <th>"Multi-item plates"</th>
                                <th>"Total appearances"</th>
                                <th>"Solo 0-1"</th>
                                <th>"Solo 1-2"</th>
                                <th>"Solo 2+"</th>
                                <Show when=move || context.get().active_membership().is_some()>
                                    <th>"Offered at"</th>
                                </Show>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                let show_labels = context.get().active_membership().is_some();
                                rows.get()
                                    .into_iter()
                                    .map(|row| {
                                        let badge = if row.counts.multi_count > 0 {
                                            "badge badge--covered"
                                        } else {
                                            "badge badge--missing"
                                        };
                                        view! {
                                            <tr>
                                                <td class="page__mono">
                                                    {crate::util::format::or_blank(&row.id)}
                                                </td>
                                                <td>{crate::util::format::or_blank(&row.name)}</td>
                                                <td>
                                                    <span class=badge>{row.counts.multi_count}</span>
                                                </td>
                                                <td>{row.counts.total}</td>
                                                <td>{row.counts.solo_0_to_1}</td>
                                                <td>{row.counts.solo_1_to_2}</td>
                                                <td>{row.counts.solo_2_plus}</td>
                                                <Show when=move || show_labels>
                                                    <td>{row.context_labels.join(", ")}</td>
                                                </Show>
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

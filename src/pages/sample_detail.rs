//! Sample detail page: full metadata plus the plate photo via a
//! presigned download URL.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::token_status_card::TokenStatusCard;
use crate::net::types::{PresignedDownload, SampleRecord};
use crate::state::status::FetchStatus;
use crate::state::token::TokenState;
use crate::util::format;
use crate::util::halls;

/// Local fetch state for the record and its download presign. Both use
/// the shared seq pattern so a navigation or token change supersedes
/// in-flight requests.
#[derive(Clone, Debug, Default)]
struct DetailState {
    status: FetchStatus,
    error: String,
    record: Option<SampleRecord>,
    seq: u64,
}

#[derive(Clone, Debug, Default)]
struct DownloadState {
    status: FetchStatus,
    error: String,
    presign: Option<PresignedDownload>,
    seq: u64,
}

/// Sample detail page for route `/dataset/:objectKey`.
#[component]
pub fn SampleDetailPage() -> impl IntoView {
    let token = expect_context::<RwSignal<TokenState>>();
    let params = use_params_map();

    let object_key = Memo::new(move |_| {
        let raw = params.read().get("objectKey").unwrap_or_default();
        decode_key(&raw)
    });

    let detail = RwSignal::new(DetailState::default());
    let download = RwSignal::new(DownloadState::default());

    // Fetch the record whenever the key or token changes.
    Effect::new(move || {
        let key = object_key.get();
        let token_value = token.get().token;

        download.update(|state| {
            state.seq += 1;
            state.status = FetchStatus::Idle;
            state.presign = None;
            state.error.clear();
        });

        if key.is_empty() {
            detail.update(|state| {
                state.seq += 1;
                state.status = FetchStatus::Error;
                state.error = "Missing object key.".to_owned();
                state.record = None;
            });
            return;
        }
        if token_value.is_empty() {
            detail.update(|state| {
                state.seq += 1;
                state.status = FetchStatus::Idle;
                state.error.clear();
                state.record = None;
            });
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let seq = detail
                .try_update(|state| {
                    state.seq += 1;
                    state.status = FetchStatus::Loading;
                    state.error.clear();
                    state.seq
                })
                .unwrap_or_default();
            leptos::task::spawn_local(async move {
                let outcome = crate::net::api::fetch_sample(&token_value, &key).await;
                detail.update(|state| {
                    if seq != state.seq {
                        return;
                    }
                    match outcome {
                        Ok(record) => {
                            state.record = Some(record);
                            state.status = FetchStatus::Success;
                        }
                        Err(message) => {
                            state.record = None;
                            state.status = FetchStatus::Error;
                            state.error = message;
                        }
                    }
                });
            });
        }
    });

    // Once the record lands, fetch a presigned image URL.
    Effect::new(move |_| {
        let record = detail.get().record;
        let token_value = token.get().token;

        let Some(record) = record else {
            return;
        };
        if token_value.is_empty() || record.object_key.is_empty() {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let seq = download
                .try_update(|state| {
                    state.seq += 1;
                    state.status = FetchStatus::Loading;
                    state.error.clear();
                    state.seq
                })
                .unwrap_or_default();
            leptos::task::spawn_local(async move {
                let outcome = crate::net::api::presign_download(
                    &token_value,
                    &record.object_key,
                    &record.bucket,
                )
                .await;
                download.update(|state| {
                    if seq != state.seq {
                        return;
                    }
                    match outcome {
                        Ok(presign) => {
                            state.presign = Some(presign);
                            state.status = FetchStatus::Success;
                        }
                        Err(message) => {
                            state.presign = None;
                            state.status = FetchStatus::Error;
                            state.error = message;
                        }
                    }
                });
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = record;
        }
    });

    view! {
        <section class="page page--sample">
            <TokenStatusCard/>

            <div class="page__header page__header--split">
                <div>
                    <p class="page__eyebrow">"Dataset sample"</p>
                    <h1 class="page__mono">{move || format::or_blank(&object_key.get())}</h1>
                    <p>"Full metadata for this labeled plate."</p>
                </div>
                <a class="btn" href="/dataset">
                    "Back to dataset"
                </a>
            </div>

            <Show when=move || !token.get().has_token()>
                <div class="page__token-prompt">
                    "Set the team API token above to fetch sample details."
                </div>
            </Show>

            <Show when=move || detail.get().status.is_error()>
                <p class="page__error">{move || detail.get().error}</p>
            </Show>

            <Show when=move || detail.get().status.is_loading()>
                <p>"Loading sample..."</p>
            </Show>

            <Show when=move || detail.get().record.is_some()>
                {move || {
                    detail
                        .get()
                        .record
                        .map(|record| {
                            let items = record.items.clone();
                            view! {
                                <div class="sample-card">
                                    <div class="sample-card__head">
                                        <div>
                                            <p class="page__eyebrow">"Object key"</p>
                                            <p class="page__mono">{format::or_blank(&record.object_key)}</p>
                                            <p class="sample-card__bucket">{record.bucket.clone()}</p>
                                        </div>
                                        <div class="sample-card__meta">
                                            <p>{format!("Recorded {}", format::format_timestamp(&record.created_at))}</p>
                                            <p>{format!("Uploader: {}", format::or_blank(&record.uploaded_by))}</p>
                                        </div>
                                    </div>

                                    <Show when=move || download.get().status.is_loading()>
                                        <p class="sample-card__image-note">"Fetching image link..."</p>
                                    </Show>
                                    <Show when=move || download.get().status.is_error()>
                                        <p class="page__error">{move || download.get().error}</p>
                                    </Show>
                                    {move || {
                                        download
                                            .get()
                                            .presign
                                            .map(|presign| {
                                                view! {
                                                    <figure class="sample-card__image">
                                                        <img src=presign.download_url.clone() alt="Plate"/>
                                                        {presign
                                                            .expires_in
                                                            .map(|seconds| {
                                                                view! {
                                                                    <figcaption>
                                                                        {format!("Link expires in {seconds} s")}
                                                                    </figcaption>
                                                                }
                                                            })}
                                                    </figure>
                                                }
                                            })
                                    }}

                                    <dl class="sample-card__grid">
                                        <div>
                                            <dt>"Meal date"</dt>
                                            <dd>{format::format_meal_date(&record.meal_date)}</dd>
                                        </div>
                                        <div>
                                            <dt>"Mealtime"</dt>
                                            <dd>{format::capitalize(&record.mealtime)}</dd>
                                        </div>
                                        <div>
                                            <dt>"Dining hall"</dt>
                                            <dd>{halls::hall_label(&record.dining_hall_id)}</dd>
                                        </div>
                                        <div>
                                            <dt>"Difficulty"</dt>
                                            <dd>{format::capitalize(&record.difficulty)}</dd>
                                        </div>
                                        <div>
                                            <dt>"Items recorded"</dt>
                                            <dd>{items.len()}</dd>
                                        </div>
                                    </dl>

                                    <div class="sample-card__items">
                                        <h2>"Plate items"</h2>
                                        <table>
                                            <thead>
                                                <tr>
                                                    <th>"Menu item ID"</th>
                                                    <th>"Servings"</th>
                                                </tr>
                                            </thead>
                                            <tbody>
                                                {if items.is_empty() {
                                                    view! {
                                                        <tr>
                                                            <td colspan="2">"No items recorded."</td>
                                                        </tr>
                                                    }
                                                        .into_any()
                                                } else {
                                                    items
                                                        .iter()
                                                        .map(|item| {
                                                            view! {
                                                                <tr>
                                                                    <td class="page__mono">
                                                                        {format::or_blank(&item.menu_item_id)}
                                                                    </td>
                                                                    <td>{format::format_servings(item.servings)}</td>
                                                                </tr>
                                                            }
                                                        })
                                                        .collect::<Vec<_>>()
                                                        .into_any()
                                                }}
                                            </tbody>
                                        </table>
                                    </div>
                                </div>
                            }
                        })
                }}
            </Show>
        </section>
    }
}

fn decode_key(raw: &str) -> String {
    #[cfg(feature = "hydrate")]
    {
        js_sys::decode_uri_component(raw).map_or_else(|_| raw.to_owned(), Into::into)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        raw.to_owned()
    }
}

//! Status card showing whether the team API token is configured.

use leptos::prelude::*;

use crate::state::token::TokenState;
use crate::util::storage;

/// Compact token status with update/remove actions. Pages that need the
/// token render this above their content so the missing-credential path
/// always has a visible fix.
#[component]
pub fn TokenStatusCard() -> impl IntoView {
    let token = expect_context::<RwSignal<TokenState>>();

    let status_label = move || {
        let state = token.get();
        if state.has_token() {
            format!("Configured ({})", state.masked())
        } else {
            "Not yet configured".to_owned()
        }
    };

    let on_open = move |_| token.update(TokenState::open_modal);
    let on_clear = move |_| token.update(|state| state.clear(storage::now_iso()));

    view! {
        <div class="token-card">
            <div class="token-card__summary">
                <span class="token-card__label">"Team API token"</span>
                <span class="token-card__status">{status_label}</span>
            </div>
            <div class="token-card__actions">
                <button class="btn" on:click=on_open>
                    {move || if token.get().has_token() { "Update token" } else { "Set token" }}
                </button>
                <Show when=move || token.get().has_token()>
                    <button class="btn btn--danger-outline" on:click=on_clear>
                        "Remove"
                    </button>
                </Show>
            </div>
        </div>
    }
}

//! Modal dialog for entering, updating, or clearing the team API token.

use leptos::prelude::*;

use crate::state::token::TokenState;
use crate::util::storage;

/// Token entry modal. Mounted once at the app root and shown whenever
/// `TokenState::modal_open` is set, including at startup when no token
/// is stored.
#[component]
pub fn TokenModal() -> impl IntoView {
    let token = expect_context::<RwSignal<TokenState>>();

    let submit = Callback::new(move |_| {
        let draft = token.get_untracked().input;
        token.update(|state| {
            state.save(&draft, storage::now_iso());
        });
    });

    let on_close = move |_| token.update(TokenState::close_modal);
    let on_clear = move |_| token.update(|state| state.clear(storage::now_iso()));

    view! {
        <Show when=move || token.get().modal_open>
            <div class="dialog-backdrop">
                <form
                    class="dialog dialog--token"
                    on:submit=move |ev: leptos::ev::SubmitEvent| {
                        ev.prevent_default();
                        submit.run(());
                    }
                >
                    <h2>"Enter API Token"</h2>
                    <p class="dialog__hint">
                        "This token authorizes MenuMatch API requests for uploads and dataset access. "
                        "Ask a teammate for the shared token if you don't have it."
                    </p>
                    <label class="dialog__label">
                        "Team token"
                        <input
                            class="dialog__input"
                            type="password"
                            autocomplete="off"
                            placeholder="Paste token here"
                            prop:value=move || token.get().input
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                token.update(|state| state.input = value);
                            }
                        />
                    </label>
                    <Show when=move || !token.get().feedback.is_empty()>
                        <p class="dialog__error">{move || token.get().feedback}</p>
                    </Show>
                    <div class="dialog__actions">
                        <button class="btn" type="button" on:click=on_close>
                            "Close"
                        </button>
                        <button class="btn btn--primary" type="submit">
                            "Save Token"
                        </button>
                    </div>
                    <Show when=move || token.get().has_token()>
                        <button class="dialog__clear-link" type="button" on:click=on_clear>
                            "Clear saved token"
                        </button>
                    </Show>
                </form>
            </div>
        </Show>
    }
}

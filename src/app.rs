//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{A, Route, Router, Routes},
};

use crate::components::token_modal::TokenModal;
use crate::pages::{
    coverage::CoveragePage, dataset::DatasetPage, sample_detail::SampleDetailPage,
    upload::UploadPage,
};
use crate::state::{
    catalog::CatalogState, dataset::DatasetState, menu_context::MenuContextState,
    token::TokenState,
};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Fetch the Husky Eats item catalog once at startup. No-op off-browser.
fn load_catalog(catalog: RwSignal<CatalogState>) {
    #[cfg(feature = "hydrate")]
    {
        let seq = match catalog.try_update(CatalogState::begin) {
            Some(seq) => seq,
            None => return,
        };
        leptos::task::spawn_local(async move {
            let outcome = crate::net::menu::fetch_catalog().await;
            if let Err(message) = &outcome {
                log::warn!("catalog fetch failed: {message}");
            }
            catalog.update(|state| state.apply(seq, outcome));
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = catalog;
    }
}

/// Root application component.
///
/// Provides all shared state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Provide reactive state contexts for all child components.
    let token = RwSignal::new(TokenState::default());
    let dataset = RwSignal::new(DatasetState::default());
    let catalog = RwSignal::new(CatalogState::default());
    let menu_context = RwSignal::new(MenuContextState::default());

    provide_context(token);
    provide_context(dataset);
    provide_context(catalog);
    provide_context(menu_context);

    // Stored-token restore and the catalog fetch both need the browser, so
    // they run in an effect rather than during SSR.
    Effect::new(move || {
        #[cfg(feature = "hydrate")]
        token.set(TokenState::load());
        load_catalog(catalog);
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/menumatch.css"/>
        <Title text="MenuMatch Labeler"/>

        <Router>
            <div class="app-shell">
                <header class="app-shell__header">
                    <span class="app-shell__brand">"MenuMatch"</span>
                    <nav class="app-shell__nav">
                        <A href="/">"Upload"</A>
                        <A href="/dataset">"Dataset"</A>
                        <A href="/coverage">"Coverage"</A>
                    </nav>
                </header>
                <main class="app-shell__main">
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=StaticSegment("") view=UploadPage/>
                        <Route path=StaticSegment("dataset") view=DatasetPage/>
                        <Route
                            path=(StaticSegment("dataset"), ParamSegment("objectKey"))
                            view=SampleDetailPage
                        />
                        <Route path=StaticSegment("coverage") view=CoveragePage/>
                    </Routes>
                </main>
                <TokenModal/>
            </div>
        </Router>
    }
}

// web_app/app.rs - Root application component
//
// This is the entry point for the Leptos application.
// It sets up routing, backend configuration, and the component tree.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::web_app::api::ApiConfig;
use crate::web_app::pages::StorePage;

/// Root application component
///
/// Sets up:
/// - Meta tags
/// - The backend configuration, injected once into context
/// - Router with routes
#[component]
pub fn App() -> impl IntoView {
    // Provide meta context for <Title>, <Meta>, etc.
    provide_meta_context();

    // Backend endpoints are fixed at startup; everything below reads this
    // from context instead of ambient global state.
    provide_context(ApiConfig::default());

    view! {
        // HTML meta tags
        <Title text="MLBB Store" />
        <Meta name="description" content="Jual beli akun Mobile Legends: rank tinggi, hero dan skin lengkap" />
        <Meta name="viewport" content="width=device-width, initial-scale=1" />

        // Stylesheet link (Tailwind CSS)
        <Stylesheet id="leptos" href="/pkg/mlbb_store.css" />

        // Router setup
        <Router>
            <main class="min-h-screen">
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=StorePage />
                </Routes>
            </main>
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gray-100 flex items-center justify-center">
            <div class="text-center">
                <h1 class="text-6xl font-bold text-gray-300 mb-4">"404"</h1>
                <p class="text-xl text-gray-600 mb-8">"Halaman tidak ditemukan"</p>
                <a
                    href="/"
                    class="px-6 py-3 bg-blue-600 text-white rounded-lg hover:bg-blue-700 transition-colors"
                >
                    "Kembali ke Toko"
                </a>
            </div>
        </div>
    }
}

// web_app/pages/store.rs - Storefront page component
//
// The catalog controller: owns the item list, loading/error state, and the
// create-account / create-order flows. Re-fetches the catalog whenever the
// settled filters change or a successful write bumps the refresh trigger.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::web_app::api::{self, ApiConfig};
use crate::web_app::components::*;
use crate::web_app::model::{Account, AccountFilters, OrderRequest};

pub const LOAD_ERROR: &str = "Gagal memuat data";
pub const ORDER_ERROR: &str = "Gagal membuat pesanan";

/// Main storefront page component
///
/// State machine over three flags: `loading`, `error` ("" = none) and
/// `items` (server order preserved). The displayed list is always the
/// server's response to the most recently applied fetch; a failed fetch
/// leaves the previous list in place.
#[component]
pub fn StorePage() -> impl IntoView {
    let config = use_context::<ApiConfig>().unwrap_or_default();

    // Catalog state
    let items = RwSignal::new(Vec::<Account>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(String::new());
    let filters = RwSignal::new(AccountFilters::default());

    // Bumped after a successful write to re-fetch with the active filters
    let refresh_trigger = RwSignal::new(0_u32);

    // Modal state
    let show_form = RwSignal::new(false);
    let buy_target = RwSignal::new(None::<Account>);
    let order_busy = RwSignal::new(false);
    let order_error = RwSignal::new(String::new());
    let order_notice = RwSignal::new(String::new());

    // Fetch on mount and on every (filters, trigger) change. In-flight
    // requests are not cancelled or sequenced; completion order may differ
    // from issuance order and the last completion wins.
    {
        let config = config.clone();
        Effect::new(move || {
            let current = filters.get();
            refresh_trigger.track();

            loading.set(true);
            error.set(String::new());

            let config = config.clone();
            spawn_local(async move {
                match api::list_accounts(&config, &current).await {
                    Ok(accounts) => items.set(accounts),
                    Err(e) => {
                        tracing::error!("Catalog fetch failed: {}", e);
                        error.set(LOAD_ERROR.to_string());
                    }
                }
                loading.set(false);
            });
        });
    }

    // Settled filter emissions from the panel
    let on_filters_change = Callback::new(move |settled: AccountFilters| {
        filters.set(settled);
    });

    // A saved listing re-fetches with the currently active filters
    let on_saved = Callback::new(move |()| {
        refresh_trigger.update(|t| *t += 1);
    });

    let on_buy = Callback::new(move |account: Account| {
        order_error.set(String::new());
        order_notice.set(String::new());
        buy_target.set(Some(account));
    });

    let on_order_cancel = Callback::new(move |()| {
        buy_target.set(None);
    });

    let on_order_submit = Callback::new({
        let config = config.clone();
        move |order: OrderRequest| {
            if order_busy.get_untracked() {
                return;
            }
            order_busy.set(true);
            order_error.set(String::new());

            let config = config.clone();
            spawn_local(async move {
                match api::create_order(&config, &order).await {
                    Ok(created) => {
                        order_notice.set(format!("Pesanan dibuat! ID: {}", created.id));
                        buy_target.set(None);
                        refresh_trigger.update(|t| *t += 1);
                    }
                    Err(e) => {
                        tracing::error!("Order failed: {}", e);
                        order_error.set(ORDER_ERROR.to_string());
                    }
                }
                order_busy.set(false);
            });
        }
    });

    let items_signal: Signal<Vec<Account>> = items.into();
    let connectivity_url = config.connectivity_url();

    view! {
        <div class="min-h-screen bg-gradient-to-br from-blue-50 to-purple-50">
            // Header
            <header class="bg-white/80 backdrop-blur sticky top-0 z-10 border-b">
                <div class="max-w-6xl mx-auto px-4 py-4 flex items-center justify-between">
                    <h1 class="text-2xl font-bold">"MLBB Store"</h1>
                    <div class="flex gap-2">
                        <a
                            href=connectivity_url
                            class="px-4 py-2 border rounded-md hover:bg-gray-50"
                        >
                            "Cek Koneksi"
                        </a>
                        <Button on_click=Callback::new(move |()| show_form.set(true))>
                            "Tambah Akun"
                        </Button>
                    </div>
                </div>
            </header>

            // Main content
            <main class="max-w-6xl mx-auto p-4 space-y-4">
                <FilterPanel on_change=on_filters_change />

                <Show when=move || !order_notice.get().is_empty()>
                    <div class="bg-green-50 border border-green-200 text-green-800 rounded-lg px-4 py-3 text-sm">
                        {move || order_notice.get()}
                    </div>
                </Show>

                <Show when=move || loading.get()>
                    <Loading />
                </Show>

                {move || {
                    let message = error.get();
                    (!message.is_empty()).then(|| view! { <ErrorDisplay error=message.clone() /> })
                }}

                <ListingGrid items=items_signal on_buy=on_buy />
            </main>

            // Add-account modal
            <Show when=move || show_form.get()>
                <AddAccountForm
                    on_close=Callback::new(move |()| show_form.set(false))
                    on_saved=on_saved
                />
            </Show>

            // Order capture dialog
            {move || {
                buy_target.get().map(|account| view! {
                    <BuyDialog
                        account=account
                        on_cancel=on_order_cancel
                        on_submit=on_order_submit
                        error=order_error
                        busy=order_busy
                    />
                })
            }}
        </div>
    }
}

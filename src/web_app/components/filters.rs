// web_app/components/filters.rs - Catalog filter panel
//
// Four free-text/numeric fields that settle into a single consolidated
// filter emission. "Settled" means 400ms of inactivity across all fields;
// any edit inside the window restarts the wait (trailing-edge debounce).

use std::time::Duration;

use leptos::prelude::*;

use crate::web_app::model::{AccountFilters, Rank};

/// Quiescent period before an edit burst is emitted upward
pub const FILTER_DEBOUNCE: Duration = Duration::from_millis(400);

/// Filter panel component
///
/// Owns the four filter fields and invokes `on_change` with a consolidated
/// [`AccountFilters`] once per quiescent period. Nothing is emitted before
/// the first edit; the parent owns the implicit all-empty default.
#[component]
pub fn FilterPanel(
    /// Callback invoked with the settled filter state
    on_change: Callback<AccountFilters>,
) -> impl IntoView {
    let q = RwSignal::new(String::new());
    let rank = RwSignal::new(String::new());
    let min_price = RwSignal::new(String::new());
    let max_price = RwSignal::new(String::new());

    // At most one live timer per panel instance
    let pending = StoredValue::new(None::<TimeoutHandle>);

    let schedule_emit = move || {
        if let Some(handle) = pending.get_value() {
            handle.clear();
        }
        let handle = set_timeout_with_handle(
            move || {
                pending.set_value(None);
                on_change.run(AccountFilters {
                    q: q.get_untracked(),
                    rank: rank.get_untracked(),
                    min_price: min_price.get_untracked(),
                    max_price: max_price.get_untracked(),
                });
            },
            FILTER_DEBOUNCE,
        )
        .ok();
        pending.set_value(handle);
    };

    let input_class = "w-full border border-gray-300 rounded-md px-3 py-2 \
                       focus:outline-none focus:ring-2 focus:ring-blue-500";

    view! {
        <div class="w-full bg-white/70 backdrop-blur border rounded-lg p-4 grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-3">
            <input
                type="text"
                placeholder="Cari akun..."
                class=input_class
                prop:value=move || q.get()
                on:input=move |ev| {
                    q.set(event_target_value(&ev));
                    schedule_emit();
                }
            />
            <select
                class=input_class
                on:change=move |ev| {
                    rank.set(event_target_value(&ev));
                    schedule_emit();
                }
            >
                <option value="" selected=move || rank.get().is_empty()>"Semua Rank"</option>
                {Rank::ALL.into_iter().map(|r| {
                    let label = r.as_str();
                    view! {
                        <option
                            value=label
                            selected=move || rank.get() == label
                        >
                            {label}
                        </option>
                    }
                }).collect_view()}
            </select>
            <input
                type="number"
                min="0"
                placeholder="Harga min (IDR)"
                class=input_class
                prop:value=move || min_price.get()
                on:input=move |ev| {
                    min_price.set(event_target_value(&ev));
                    schedule_emit();
                }
            />
            <input
                type="number"
                min="0"
                placeholder="Harga max (IDR)"
                class=input_class
                prop:value=move || max_price.get()
                on:input=move |ev| {
                    max_price.set(event_target_value(&ev));
                    schedule_emit();
                }
            />
        </div>
    }
}

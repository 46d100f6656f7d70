// web_app/components/listing.rs - Listing display components
//
// Components for displaying account listings:
// - ListingCard: grid card for one listing
// - ListingGrid: grid layout with empty state

use leptos::prelude::*;

use super::common::{Badge, PriceDisplay};
use crate::web_app::model::Account;

fn count_or_dash(count: Option<i32>) -> String {
    count.map(|n| n.to_string()).unwrap_or_else(|| "-".to_string())
}

/// Listing card for the catalog grid
///
/// Shows the first image (or a placeholder block), the descriptive fields
/// and the price; the buy action is always enabled.
#[component]
pub fn ListingCard(
    /// The listing to display
    account: Account,
    /// Buy handler, receives the full listing
    on_buy: Callback<Account>,
) -> impl IntoView {
    let cover = account.images.first().cloned();
    let title = account.title.clone();
    let description = account
        .description
        .clone()
        .filter(|d| !d.is_empty())
        .unwrap_or_else(|| "—".to_string());
    let hero_display = count_or_dash(account.hero_count);
    let skin_display = count_or_dash(account.skin_count);
    let buy_target = account.clone();

    view! {
        <div class="bg-white rounded-lg shadow border overflow-hidden flex flex-col">
            {match cover {
                Some(url) => view! {
                    <img src=url alt=title.clone() class="h-40 w-full object-cover" />
                }.into_any(),
                None => view! {
                    <div class="h-40 w-full bg-gray-200 flex items-center justify-center text-gray-500">
                        "Tidak ada gambar"
                    </div>
                }.into_any(),
            }}

            <div class="p-4 flex flex-col gap-2 flex-1">
                <h3 class="text-lg font-semibold">{title}</h3>
                <p class="text-sm text-gray-600 line-clamp-3">{description}</p>

                <div class="flex items-center gap-2 text-sm text-gray-700">
                    "Rank: "
                    <Badge variant="purple">{account.rank.to_string()}</Badge>
                    {account.email_access.then(|| view! {
                        <Badge variant="green">"Akses email"</Badge>
                    })}
                </div>

                <div class="text-sm text-gray-700">
                    "Hero: " {hero_display} " | Skin: " {skin_display}
                </div>

                {(!account.login_method.is_empty()).then(|| view! {
                    <div class="text-xs text-gray-500">"Login: " {account.login_method.clone()}</div>
                })}

                <div class="mt-auto">
                    <PriceDisplay price=account.price highlight=true />
                </div>

                <button
                    class="mt-2 w-full bg-green-600 hover:bg-green-700 text-white py-2 rounded-md"
                    on:click=move |_| on_buy.run(buy_target.clone())
                >
                    "Beli via WA"
                </button>
            </div>
        </div>
    }
}

/// Catalog grid component
///
/// Renders the listings in server order, or an empty state.
#[component]
pub fn ListingGrid(
    /// Listings to display
    items: Signal<Vec<Account>>,
    /// Buy handler passed through to each card
    on_buy: Callback<Account>,
) -> impl IntoView {
    view! {
        <div class="w-full">
            <div class="flex justify-between items-center mb-4">
                <span class="text-gray-500 font-medium">
                    {move || {
                        let count = items.get().len();
                        format!("{} akun ditemukan", count)
                    }}
                </span>
            </div>

            <Show
                when=move || !items.get().is_empty()
                fallback=|| view! {
                    <div class="text-center py-16 bg-white rounded-2xl border border-dashed border-gray-300">
                        <div class="text-gray-300 text-6xl mb-4">"🎮"</div>
                        <h3 class="text-xl font-bold text-gray-900 mb-2">"Tidak ada akun"</h3>
                        <p class="text-gray-500 max-w-md mx-auto">
                            "Tidak ada akun yang cocok dengan filter. Coba ubah kata kunci atau rentang harga."
                        </p>
                    </div>
                }
            >
                <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-4">
                    <For
                        each=move || items.get()
                        key=|account| account.id
                        children=move |account| {
                            view! {
                                <ListingCard
                                    account=account
                                    on_buy=on_buy
                                />
                            }
                        }
                    />
                </div>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::web_app::model::Rank;

    fn listing(id: i64) -> Account {
        Account {
            id,
            title: format!("Akun {}", id),
            description: None,
            rank: Rank::Epic,
            price: 150000.0,
            hero_count: None,
            skin_count: None,
            login_method: "Moonton".to_string(),
            email_access: false,
            images: Vec::new(),
        }
    }

    #[test]
    fn test_count_or_dash() {
        assert_eq!(count_or_dash(Some(120)), "120");
        assert_eq!(count_or_dash(Some(0)), "0");
        assert_eq!(count_or_dash(None), "-");
    }

    #[test]
    fn test_missing_description_renders_dash() {
        let account = listing(1);
        let display = account
            .description
            .clone()
            .filter(|d| !d.is_empty())
            .unwrap_or_else(|| "—".to_string());
        assert_eq!(display, "—");

        let mut with_text = listing(2);
        with_text.description = Some("Akun sultan full skin".to_string());
        let display = with_text
            .description
            .clone()
            .filter(|d| !d.is_empty())
            .unwrap_or_else(|| "—".to_string());
        assert_eq!(display, "Akun sultan full skin");
    }

    #[test]
    fn test_empty_description_treated_as_absent() {
        let mut account = listing(3);
        account.description = Some(String::new());
        let display = account
            .description
            .clone()
            .filter(|d| !d.is_empty())
            .unwrap_or_else(|| "—".to_string());
        assert_eq!(display, "—");
    }

    #[test]
    fn test_first_image_selection() {
        let mut account = listing(4);
        assert_eq!(account.images.first(), None);

        account.images = vec!["a.png".to_string(), "b.png".to_string()];
        assert_eq!(account.images.first().map(String::as_str), Some("a.png"));
    }

    #[test]
    fn test_grid_count_label() {
        let items = [listing(1), listing(2)];
        let label = format!("{} akun ditemukan", items.len());
        assert_eq!(label, "2 akun ditemukan");
    }
}

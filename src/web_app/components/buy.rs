// web_app/components/buy.rs - Order capture dialog
//
// Inline modal for the buy flow. Both fields are required; submitting
// with either blank aborts without a request, as does cancelling.

use leptos::prelude::*;

use super::common::{ModalWrapper, PriceDisplay, TextInput};
use crate::web_app::model::{Account, OrderRequest};

/// Order capture dialog for one listing
///
/// Collects buyer name and WhatsApp number; `on_submit` receives the
/// complete [`OrderRequest`]. The parent owns the actual POST, so a
/// failure message and busy flag come in as props and the dialog stays
/// open for a retry.
#[component]
pub fn BuyDialog(
    /// The listing being bought
    account: Account,
    /// Close the dialog without ordering
    on_cancel: Callback<()>,
    /// Submit handler with the completed order request
    on_submit: Callback<OrderRequest>,
    /// Failure message to surface inside the dialog ("" = none)
    #[prop(into)]
    error: Signal<String>,
    /// Whether an order request is in flight
    #[prop(into)]
    busy: Signal<bool>,
) -> impl IntoView {
    let buyer_name = RwSignal::new(String::new());
    let whatsapp = RwSignal::new(String::new());

    let account_id = account.id;
    let title = account.title.clone();

    let submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }

        let name = buyer_name.get_untracked();
        let number = whatsapp.get_untracked();
        // Either field blank aborts the whole flow with no request sent
        if name.trim().is_empty() || number.trim().is_empty() {
            return;
        }

        on_submit.run(OrderRequest {
            account_id,
            buyer_name: name,
            whatsapp: number,
        });
    };

    view! {
        <ModalWrapper title="Beli Akun" on_close=on_cancel>
            <div class="flex items-center justify-between mb-4 bg-gray-50 rounded-lg p-3 border border-gray-100">
                <span class="font-semibold text-gray-800">{title}</span>
                <PriceDisplay price=account.price highlight=true />
            </div>

            <form on:submit=submit class="space-y-4">
                <TextInput value=buyer_name placeholder="Nama Anda" required=true />
                <TextInput value=whatsapp placeholder="Nomor WhatsApp" input_type="tel" required=true />

                <Show when=move || !error.get().is_empty()>
                    <p class="text-sm text-red-600">{move || error.get()}</p>
                </Show>

                <div class="flex gap-2 justify-end">
                    <button
                        type="button"
                        class="px-4 py-2 rounded-lg border border-gray-300 text-gray-700 hover:bg-gray-50"
                        on:click=move |_| on_cancel.run(())
                    >
                        "Batal"
                    </button>
                    <button
                        type="submit"
                        disabled=move || busy.get()
                        class="px-4 py-2 bg-green-600 hover:bg-green-700 text-white rounded-lg \
                               disabled:bg-gray-400 disabled:cursor-not-allowed font-medium"
                    >
                        {move || if busy.get() { "Memproses..." } else { "Beli via WA" }}
                    </button>
                </div>
            </form>
        </ModalWrapper>
    }
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_blank_fields_abort_submission() {
        // Mirror of the submit guard: any blank field means no request.
        let cases = [
            ("", "", false),
            ("Budi", "", false),
            ("", "0812345", false),
            ("   ", "0812345", false),
            ("Budi", "   ", false),
            ("Budi", "0812345", true),
        ];

        for (name, number, expect_request) in cases {
            let sends = !name.trim().is_empty() && !number.trim().is_empty();
            assert_eq!(sends, expect_request, "name={:?} number={:?}", name, number);
        }
    }
}

// web_app/components/account_form.rs - Add-account modal form
//
// A stable top-level component with explicit props. The parent decides
// when it is shown and reacts to `on_saved` by re-fetching with the
// active filters.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::common::{Checkbox, ModalWrapper, SecondaryButton, TextInput};
use crate::web_app::api::{self, ApiConfig};
use crate::web_app::model::{AccountFormInput, Rank};

pub const SAVE_SUCCESS: &str = "✅ Akun berhasil ditambahkan";
pub const SAVE_FAILURE: &str = "❌ Gagal menambah akun";

/// Modal form for creating a new listing
///
/// On success the form resets to its defaults and `on_saved` fires; on
/// failure the message is shown and all field values are preserved for
/// correction. Submission is disabled while a save is in flight.
#[component]
pub fn AddAccountForm(
    /// Close the modal without saving
    on_close: Callback<()>,
    /// Invoked after a successful save, before the modal is closed by the user
    on_saved: Callback<()>,
) -> impl IntoView {
    let config = use_context::<ApiConfig>().unwrap_or_default();

    let defaults = AccountFormInput::default();
    let title = RwSignal::new(defaults.title);
    let description = RwSignal::new(defaults.description);
    let rank = RwSignal::new(defaults.rank);
    let price = RwSignal::new(defaults.price);
    let hero_count = RwSignal::new(defaults.hero_count);
    let skin_count = RwSignal::new(defaults.skin_count);
    let login_method = RwSignal::new(defaults.login_method);
    let email_access = RwSignal::new(defaults.email_access);
    let images = RwSignal::new(defaults.images);

    let saving = RwSignal::new(false);
    let message = RwSignal::new(String::new());

    let reset_fields = move || {
        let defaults = AccountFormInput::default();
        title.set(defaults.title);
        description.set(defaults.description);
        rank.set(defaults.rank);
        price.set(defaults.price);
        hero_count.set(defaults.hero_count);
        skin_count.set(defaults.skin_count);
        login_method.set(defaults.login_method);
        email_access.set(defaults.email_access);
        images.set(defaults.images);
    };

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        if saving.get_untracked() {
            return;
        }

        let draft = AccountFormInput {
            title: title.get_untracked(),
            description: description.get_untracked(),
            rank: rank.get_untracked(),
            price: price.get_untracked(),
            hero_count: hero_count.get_untracked(),
            skin_count: skin_count.get_untracked(),
            login_method: login_method.get_untracked(),
            email_access: email_access.get_untracked(),
            images: images.get_untracked(),
        }
        .to_draft();

        saving.set(true);
        message.set(String::new());

        let config = config.clone();
        spawn_local(async move {
            match api::create_account(&config, &draft).await {
                Ok(_) => {
                    message.set(SAVE_SUCCESS.to_string());
                    reset_fields();
                    on_saved.run(());
                }
                Err(e) => {
                    tracing::error!("Create listing failed: {}", e);
                    message.set(SAVE_FAILURE.to_string());
                }
            }
            saving.set(false);
        });
    };

    view! {
        <ModalWrapper title="Tambah Akun" on_close=on_close>
            <form on:submit=on_submit class="grid grid-cols-1 sm:grid-cols-2 gap-4">
                <TextInput value=title placeholder="Judul" required=true />

                <select
                    class="w-full px-4 py-2 border border-gray-300 rounded-lg bg-white \
                           focus:ring-2 focus:ring-blue-500 focus:border-transparent \
                           outline-none cursor-pointer shadow-sm"
                    on:change=move |ev| {
                        rank.set(Rank::parse(&event_target_value(&ev)).unwrap_or_default());
                    }
                >
                    {Rank::ALL.into_iter().map(|r| {
                        let label = r.as_str();
                        view! {
                            <option
                                value=label
                                selected=move || rank.get() == r
                            >
                                {label}
                            </option>
                        }
                    }).collect_view()}
                </select>

                <TextInput value=price placeholder="Harga (IDR)" input_type="number" required=true />
                <TextInput value=login_method placeholder="Metode Login" />
                <TextInput value=hero_count placeholder="Jumlah Hero" input_type="number" />
                <TextInput value=skin_count placeholder="Jumlah Skin" input_type="number" />

                <div class="sm:col-span-2">
                    <textarea
                        class="w-full px-4 py-2 border border-gray-300 rounded-lg \
                               focus:ring-2 focus:ring-blue-500 focus:border-transparent \
                               outline-none transition-shadow shadow-sm"
                        placeholder="Deskripsi"
                        prop:value=move || description.get()
                        on:input=move |ev| description.set(event_target_value(&ev))
                    ></textarea>
                </div>

                <div class="sm:col-span-2">
                    <TextInput value=images placeholder="Gambar (pisahkan dengan koma)" />
                </div>

                <Checkbox checked=email_access label={"Termasuk akses email".to_string()} />

                <div class="sm:col-span-2 flex gap-2 justify-end">
                    <SecondaryButton on_click=on_close>"Batal"</SecondaryButton>
                    <button
                        type="submit"
                        disabled=move || saving.get()
                        class="px-4 py-2 bg-blue-600 text-white rounded-lg hover:bg-blue-700 \
                               transition-colors disabled:bg-gray-400 disabled:cursor-not-allowed \
                               font-medium shadow-sm"
                    >
                        {move || if saving.get() { "Menyimpan..." } else { "Simpan" }}
                    </button>
                </div>
            </form>

            <Show when=move || !message.get().is_empty()>
                <p class="text-sm mt-4">{move || message.get()}</p>
            </Show>
        </ModalWrapper>
    }
}

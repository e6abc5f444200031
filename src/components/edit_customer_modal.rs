//! Edit Customer Modal
//!
//! Dialog for editing a record's name and country, with inline
//! validation and a country selector backed by the reference list.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api;
use crate::context::{AppContext, ToastKind};
use crate::models::{Country, TaxRecord};
use crate::validation::{build_update_payload, validate_draft, FieldErrors};

/// Modal dialog for editing one customer record.
///
/// The draft name/country are local copies seeded from `customer`;
/// cancelling discards them without touching the original. A successful
/// save notifies the parent via `on_save` (list reload) and then
/// `on_close`, in that order.
#[component]
pub fn EditCustomerModal(
    is_open: ReadSignal<bool>,
    customer: ReadSignal<Option<TaxRecord>>,
    #[prop(into)] on_close: Callback<()>,
    #[prop(into)] on_save: Callback<()>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    // Draft fields, seeded from the selected customer
    let (name, set_name) = signal(String::new());
    let (country, set_country) = signal(String::new());
    let (errors, set_errors) = signal(FieldErrors::default());

    // Reference data and in-flight flags
    let (countries, set_countries) = signal(Vec::<Country>::new());
    let (loading_countries, set_loading_countries) = signal(false);
    let (saving, set_saving) = signal(false);

    // Reseed the draft whenever the edit target changes, dropping any
    // leftover draft from a previously cancelled session
    Effect::new(move |_| {
        if let Some(record) = customer.get() {
            set_name.set(record.name.clone());
            set_country.set(record.country.clone());
            set_errors.set(FieldErrors::default());
        }
    });

    // Refetch the country list on every open; the selector stays
    // disabled until the load resolves
    Effect::new(move |_| {
        if !is_open.get() {
            return;
        }
        set_loading_countries.set(true);
        spawn_local(async move {
            match api::list_countries().await {
                Ok(loaded) => set_countries.set(loaded),
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("[MODAL] Failed to load countries: {}", e).into(),
                    );
                    ctx.notify(ToastKind::Error, "Failed to load countries");
                }
            }
            set_loading_countries.set(false);
        });
    });

    let save = move |_| {
        let draft_name = name.get();
        let draft_country = country.get();

        let checked = validate_draft(&draft_name, &draft_country);
        if !checked.is_empty() {
            set_errors.set(checked);
            return;
        }

        let Some(record) = customer.get() else { return };
        let payload = build_update_payload(&record, &draft_name, &draft_country);

        set_saving.set(true);
        spawn_local(async move {
            match api::update_tax(&record.id, &payload).await {
                Ok(_) => {
                    ctx.notify(ToastKind::Success, "Customer updated successfully");
                    on_save.run(());
                    on_close.run(());
                }
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("[MODAL] Failed to update record {}: {}", record.id, e).into(),
                    );
                    ctx.notify(ToastKind::Error, "Failed to update customer");
                }
            }
            set_saving.set(false);
        });
    };

    // Discards the draft without any network call; the draft is
    // reseeded on the next open anyway
    let cancel = move |_| {
        if saving.get() {
            return;
        }
        on_close.run(());
    };

    view! {
        <Show when=move || is_open.get()>
            <div class="modal-overlay">
                <div class="modal">
                    <div class="modal-header">
                        <h2>"Edit Customer"</h2>
                        <button class="modal-close-btn" on:click=cancel>"×"</button>
                    </div>

                    <div class="modal-body">
                        <div class="form-field">
                            <label for="name">
                                "Name " <span class="required-mark">"*"</span>
                            </label>
                            <input
                                id="name"
                                type="text"
                                placeholder="Enter name"
                                class=move || {
                                    if errors.get().name.is_some() { "field-input invalid" } else { "field-input" }
                                }
                                prop:value=move || name.get()
                                on:input=move |ev| {
                                    let target = ev.target().unwrap();
                                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                                    set_name.set(input.value());
                                    set_errors.update(|e| e.name = None);
                                }
                            />
                            {move || errors.get().name.map(|msg| view! {
                                <p class="field-error">{msg}</p>
                            })}
                        </div>

                        <div class="form-field">
                            <label for="country">
                                "Country " <span class="required-mark">"*"</span>
                            </label>
                            <select
                                id="country"
                                class=move || {
                                    if errors.get().country.is_some() { "field-input invalid" } else { "field-input" }
                                }
                                prop:value=move || country.get()
                                disabled=move || loading_countries.get()
                                on:change=move |ev| {
                                    set_country.set(event_target_value(&ev));
                                    set_errors.update(|e| e.country = None);
                                }
                            >
                                <option value="" disabled=true>"Select a country"</option>
                                <For
                                    each=move || countries.get()
                                    key=|c| c.id.clone()
                                    children=move |c| {
                                        let country_name = c.name;
                                        view! {
                                            <option value=country_name.clone()>{country_name.clone()}</option>
                                        }
                                    }
                                />
                            </select>
                            {move || errors.get().country.map(|msg| view! {
                                <p class="field-error">{msg}</p>
                            })}
                        </div>
                    </div>

                    <div class="modal-footer">
                        <button
                            class="cancel-btn"
                            on:click=cancel
                            disabled=move || saving.get()
                        >
                            "Cancel"
                        </button>
                        <button
                            class="save-btn"
                            on:click=save
                            disabled=move || saving.get()
                        >
                            <Show when=move || saving.get()>
                                <span class="spinner small"></span>
                            </Show>
                            "Save"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}

//! Customer Admin App
//!
//! Page component owning the record list and the edit dialog state.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{CustomerTable, EditCustomerModal, ToastHost};
use crate::context::{AppContext, Toast, ToastKind};
use crate::models::TaxRecord;

#[component]
pub fn App() -> impl IntoView {
    // State
    let (records, set_records) = signal(Vec::<TaxRecord>::new());
    let (is_loading, set_is_loading) = signal(true);
    let (selected_customer, set_selected_customer) = signal::<Option<TaxRecord>>(None);
    let (modal_open, set_modal_open) = signal(false);
    let (toast, set_toast) = signal::<Option<Toast>>(None);
    let (reload_trigger, set_reload_trigger) = signal(0u32);

    // Provide context to all children
    let ctx = AppContext::new((toast, set_toast), (reload_trigger, set_reload_trigger));
    provide_context(ctx);

    // Load records on mount and again whenever a save bumps the trigger
    Effect::new(move |_| {
        let trigger = reload_trigger.get();
        web_sys::console::log_1(&format!("[APP] Loading records, trigger={}", trigger).into());
        set_is_loading.set(true);
        spawn_local(async move {
            match api::list_taxes().await {
                Ok(loaded) => {
                    web_sys::console::log_1(&format!("[APP] Loaded {} records", loaded.len()).into());
                    set_records.set(loaded);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[APP] Failed to load records: {}", e).into());
                    ctx.notify(ToastKind::Error, "Failed to load data");
                }
            }
            set_is_loading.set(false);
        });
    });

    let on_edit = move |record: TaxRecord| {
        set_selected_customer.set(Some(record));
        set_modal_open.set(true);
    };

    view! {
        <div class="page">
            <header class="page-header">
                <h1>"Customer Management"</h1>
                <p class="page-subtitle">"View and manage customer information"</p>
            </header>

            <CustomerTable records=records is_loading=is_loading on_edit=on_edit />

            <EditCustomerModal
                is_open=modal_open
                customer=selected_customer
                on_close=move |_| set_modal_open.set(false)
                on_save=move |_| ctx.reload()
            />

            <ToastHost />
        </div>
    }
}

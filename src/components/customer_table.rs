//! Customer Table Component
//!
//! Read-only table of tax records with a per-row edit action.

use leptos::prelude::*;

use crate::format::format_request_date;
use crate::models::TaxRecord;

/// Table of customer records. Holds no state of its own; rendering is a
/// pure function of the inputs, and the edit button hands the row's
/// record back to the parent.
#[component]
pub fn CustomerTable(
    records: ReadSignal<Vec<TaxRecord>>,
    is_loading: ReadSignal<bool>,
    #[prop(into)] on_edit: Callback<TaxRecord>,
) -> impl IntoView {
    view! {
        <div class="table-card">
            <Show when=move || is_loading.get()>
                <div class="table-loading">
                    <span class="spinner"></span>
                </div>
            </Show>

            <Show when=move || !is_loading.get()>
                <table class="customer-table">
                    <thead>
                        <tr>
                            <th>"Entity"</th>
                            <th>"Gender"</th>
                            <th>"Request date"</th>
                            <th>"Country"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || records.get()
                            key=|record| record.id.clone()
                            children=move |record| {
                                let row = record.clone();
                                view! {
                                    <tr>
                                        <td class="cell-name">{record.name.clone()}</td>
                                        <td>
                                            <span class=record.gender.badge_class()>
                                                {record.gender.label()}
                                            </span>
                                        </td>
                                        <td>{format_request_date(&record.request_date)}</td>
                                        <td>{record.country.clone()}</td>
                                        <td class="cell-actions">
                                            <button
                                                class="edit-btn"
                                                title="Edit"
                                                on:click=move |_| on_edit.run(row.clone())
                                            >
                                                "✎"
                                            </button>
                                        </td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>

                <Show when=move || records.get().is_empty()>
                    <div class="empty-state">"No data available"</div>
                </Show>
            </Show>
        </div>
    }
}

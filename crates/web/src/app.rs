//! Leptos components for the invoice editor.
//!
//! The whole editor is a single page. The [`Document`] lives in one
//! `RwSignal`; every input is controlled (`prop:value` + write-back on
//! input), and the derived totals re-render reactively from the same
//! signal.

use leptos::*;
use web_sys::HtmlInputElement;

use billcraft_ledger::{Document, DocumentField, LineItemField, PartyField, PartyRole, TaxKind};

use crate::export::{self, ExportOptions};
use crate::upload;

/// Presentation rounding: all figures are shown with exactly two decimals;
/// the ledger accumulates unrounded values.
fn money(value: f64) -> String {
    format!("{value:.2}")
}

/// Log a boundary failure to the browser console.
fn report_error(scope: &str, message: &str) {
    web_sys::console::error_1(&format!("{scope}: {message}").into());
}

/// Blocking user notice.
fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

/// Main application component.
#[component]
pub fn App() -> impl IntoView {
    let doc = create_rw_signal(Document::new());
    let exporting = create_rw_signal(false);

    // Repeat clicks while an export is pending are no-ops; the pending
    // export owns the button until it resolves.
    let export_pdf = move |_| {
        if exporting.get() {
            return;
        }
        let Ok(Some(element)) = document().query_selector(".invoice-container") else {
            report_error("export", "invoice view is not mounted");
            return;
        };
        exporting.set(true);
        spawn_local(async move {
            if let Err(e) = export::download_pdf(&element, &ExportOptions::default()).await {
                report_error("export", &e);
                alert("Could not generate the PDF. Please try again.");
            }
            exporting.set(false);
        });
    };

    view! {
        <div class="invoice-container">
            <div class="invoice-header">
                <LogoUploader doc=doc/>
                <TitleHeading doc=doc/>
            </div>

            <div class="company-details">
                <PartyFields doc=doc role=PartyRole::Company/>
            </div>

            <div class="billing-row">
                <div class="client-details">
                    <h2>"Bill To:"</h2>
                    <PartyFields doc=doc role=PartyRole::Client/>
                </div>
                <div class="invoice-meta">
                    <MetaRow doc=doc label="Invoice#" field=DocumentField::InvoiceNumber
                        kind="text" placeholder="INV-12"/>
                    <MetaRow doc=doc label="Invoice Date" field=DocumentField::InvoiceDate
                        kind="date" placeholder=""/>
                    <MetaRow doc=doc label="Due Date" field=DocumentField::DueDate
                        kind="date" placeholder=""/>
                </div>
            </div>

            <div class="place-of-supply">
                <h4>"Place of Supply:"</h4>
                <input
                    type="text"
                    placeholder="State"
                    prop:value=move || doc.with(|d| d.field(DocumentField::PlaceOfSupply).to_string())
                    on:input=move |ev| {
                        doc.update(|d| d.set_field(DocumentField::PlaceOfSupply, event_target_value(&ev)))
                    }
                />
            </div>

            <LineItemsTable doc=doc/>

            <div class="table-footer">
                <button class="add-line-item" on:click=move |_| doc.update(|d| d.add_line_item())>
                    "+ Add Line Item"
                </button>
                <TotalsPanel doc=doc/>
            </div>

            <NotesSection doc=doc/>

            <button class="download" on:click=export_pdf disabled=move || exporting.get()>
                {move || if exporting.get() { "Exporting..." } else { "Download Invoice" }}
            </button>
        </div>
    }
}

/// Logo upload box: shows the uploaded image or the upload affordance.
///
/// A successful upload replaces any prior logo wholesale; an oversized
/// payload is rejected by the ledger and surfaced as a blocking notice
/// with no state change.
#[component]
fn LogoUploader(doc: RwSignal<Document>) -> impl IntoView {
    let on_change = move |ev: web_sys::Event| {
        let input = event_target::<HtmlInputElement>(&ev);
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };
        spawn_local(async move {
            match upload::read_file_bytes(&file).await {
                Ok(bytes) => {
                    let outcome = doc
                        .try_update(|d| d.set_logo_image(&file.type_(), &bytes))
                        .unwrap_or(Ok(()));
                    if let Err(e) = outcome {
                        report_error("upload", &e.to_string());
                        alert("Image size must be less than 1MB.");
                    }
                }
                Err(e) => report_error("upload", &e),
            }
        });
    };

    view! {
        <div class="logo-upload">
            <label class="logo-box" for="file-upload">
                {move || match doc.with(|d| d.logo().map(|logo| logo.data_url().to_string())) {
                    Some(src) => view! { <img src=src alt="Uploaded logo"/> }.into_view(),
                    None => view! { <span class="logo-placeholder">"Upload"</span> }.into_view(),
                }}
            </label>
            <input
                id="file-upload"
                type="file"
                accept="image/*"
                style="display: none"
                on:change=on_change
            />
            <div class="logo-hint">
                <h5>"Upload Logo"</h5>
                <p>"240 x 240 pixels @ 72 DPI, Maximum size of 1MB."</p>
            </div>
        </div>
    }
}

/// Editable invoice title.
///
/// Edit mode is transient UI state: the heading switches to an input while
/// editing and the text is committed back to the document on the event
/// that ends the edit. The model has no notion of "editing".
#[component]
fn TitleHeading(doc: RwSignal<Document>) -> impl IntoView {
    let editing = create_rw_signal(false);

    view! {
        <div class="invoice-title">
            {move || {
                if editing.get() {
                    view! {
                        <input
                            type="text"
                            class="title-input"
                            autofocus=true
                            prop:value=doc.with(|d| d.field(DocumentField::InvoiceTitle).to_string())
                            on:blur=move |ev| {
                                doc.update(|d| {
                                    d.set_field(DocumentField::InvoiceTitle, event_target_value(&ev))
                                });
                                editing.set(false);
                            }
                        />
                    }
                    .into_view()
                } else {
                    view! {
                        <h1 on:click=move |_| editing.set(true)>
                            {move || doc.with(|d| d.field(DocumentField::InvoiceTitle).to_string())}
                        </h1>
                    }
                    .into_view()
                }
            }}
        </div>
    }
}

/// Free-text inputs for one party, rendered from the field list.
#[component]
fn PartyFields(doc: RwSignal<Document>, role: PartyRole) -> impl IntoView {
    PartyField::ALL
        .into_iter()
        .map(|field| {
            view! {
                <input
                    type="text"
                    placeholder=party_placeholder(role, field)
                    prop:value=move || doc.with(|d| d.party(role).get(field).to_string())
                    on:input=move |ev| {
                        doc.update(|d| d.set_party_field(role, field, event_target_value(&ev)))
                    }
                />
            }
        })
        .collect_view()
}

fn party_placeholder(role: PartyRole, field: PartyField) -> &'static str {
    match (role, field) {
        (PartyRole::Company, PartyField::Name) => "Your Company",
        (PartyRole::Company, PartyField::Gstin) => "Company's GSTIN",
        (PartyRole::Company, PartyField::Address) => "Company's Address",
        (PartyRole::Client, PartyField::Name) => "Your Client's Company",
        (PartyRole::Client, PartyField::Gstin) => "Client's GSTIN",
        (PartyRole::Client, PartyField::Address) => "Client's Address",
        (_, PartyField::City) => "City",
        (_, PartyField::State) => "State",
        (_, PartyField::Country) => "Country",
    }
}

/// One labeled metadata row (invoice number, dates).
#[component]
fn MetaRow(
    doc: RwSignal<Document>,
    label: &'static str,
    field: DocumentField,
    kind: &'static str,
    placeholder: &'static str,
) -> impl IntoView {
    view! {
        <div class="meta-row">
            <h4>{label}</h4>
            <input
                type=kind
                placeholder=placeholder
                prop:value=move || doc.with(|d| d.field(field).to_string())
                on:input=move |ev| doc.update(|d| d.set_field(field, event_target_value(&ev)))
            />
        </div>
    }
}

/// The line-item ledger table: one editable row per item.
#[component]
fn LineItemsTable(doc: RwSignal<Document>) -> impl IntoView {
    view! {
        <table class="line-items">
            <thead>
                <tr>
                    <th>"Item Description"</th>
                    <th>"Qty"</th>
                    <th>"Rate"</th>
                    <th>"SGST"</th>
                    <th>"CGST"</th>
                    <th>"Cess"</th>
                    <th>"Amount"</th>
                    <th>"Action"</th>
                </tr>
            </thead>
            <tbody>
                <For
                    each=move || 0..doc.with(|d| d.line_items().len())
                    key=|index| *index
                    children=move |index| view! { <LineItemRow doc=doc index=index/> }
                />
            </tbody>
        </table>
    }
}

/// One editable table row bound to the line item at `index`.
#[component]
fn LineItemRow(doc: RwSignal<Document>, index: usize) -> impl IntoView {
    // Display accessors tolerate a just-deleted row while the table
    // catches up; mutation always goes through the ledger operations.
    let description = move || {
        doc.with(|d| {
            d.line_items()
                .get(index)
                .map(|item| item.description().to_string())
                .unwrap_or_default()
        })
    };
    let hsn_sac = move || {
        doc.with(|d| {
            d.line_items()
                .get(index)
                .map(|item| item.hsn_sac().to_string())
                .unwrap_or_default()
        })
    };
    let qty = move || {
        doc.with(|d| {
            d.line_items()
                .get(index)
                .map(|item| item.qty().to_string())
                .unwrap_or_default()
        })
    };
    let rate = move || {
        doc.with(|d| {
            d.line_items()
                .get(index)
                .map(|item| item.rate().to_string())
                .unwrap_or_default()
        })
    };
    let sgst = move || {
        doc.with(|d| {
            d.line_items()
                .get(index)
                .map(|item| item.sgst().to_string())
                .unwrap_or_default()
        })
    };
    let cgst = move || {
        doc.with(|d| {
            d.line_items()
                .get(index)
                .map(|item| item.cgst().to_string())
                .unwrap_or_default()
        })
    };
    let cess = move || {
        doc.with(|d| {
            d.line_items()
                .get(index)
                .map(|item| item.cess().to_string())
                .unwrap_or_default()
        })
    };
    let amount = move || {
        doc.with(|d| {
            d.line_items()
                .get(index)
                .map(|item| money(item.amount()))
                .unwrap_or_default()
        })
    };

    let set = move |field: LineItemField| {
        move |ev: web_sys::Event| {
            doc.update(|d| d.set_line_item_field(index, field, &event_target_value(&ev)))
        }
    };

    view! {
        <tr>
            <td class="description-cell">
                <input
                    type="text"
                    placeholder="Enter item name/description"
                    prop:value=description
                    on:input=set(LineItemField::Description)
                />
                <input
                    type="text"
                    placeholder="HSN/SAC"
                    prop:value=hsn_sac
                    on:input=set(LineItemField::HsnSac)
                />
            </td>
            <td><input type="number" class="numeric" prop:value=qty on:input=set(LineItemField::Qty)/></td>
            <td><input type="text" class="numeric" prop:value=rate on:input=set(LineItemField::Rate)/></td>
            <td><input type="number" class="numeric" prop:value=sgst on:input=set(LineItemField::Sgst)/></td>
            <td><input type="number" class="numeric" prop:value=cgst on:input=set(LineItemField::Cgst)/></td>
            <td><input type="number" class="numeric" prop:value=cess on:input=set(LineItemField::Cess)/></td>
            <td class="amount">{amount}</td>
            <td class="action">
                <button on:click=move |_| doc.update(|d| d.delete_line_item(index))>
                    "Delete"
                </button>
            </td>
        </tr>
    }
}

/// Derived figures. Tax rows are absolute amounts contributed per line,
/// not percentage rates; the labels deliberately carry no rate suffix.
#[component]
fn TotalsPanel(doc: RwSignal<Document>) -> impl IntoView {
    view! {
        <div class="totals">
            <div class="totals-row">
                <span>"Subtotal"</span>
                <span>{move || doc.with(|d| money(d.subtotal()))}</span>
            </div>
            <div class="totals-row">
                <span>"SGST"</span>
                <span>{move || doc.with(|d| money(d.tax_total(TaxKind::Sgst)))}</span>
            </div>
            <div class="totals-row">
                <span>"CGST"</span>
                <span>{move || doc.with(|d| money(d.tax_total(TaxKind::Cgst)))}</span>
            </div>
            <div class="totals-row">
                <span>"Cess"</span>
                <span>{move || doc.with(|d| money(d.tax_total(TaxKind::Cess)))}</span>
            </div>
            <div class="totals-row grand-total">
                <span>"TOTAL"</span>
                <span>{move || doc.with(|d| money(d.grand_total()))}</span>
            </div>
        </div>
    }
}

/// Notes and terms, written back to the document as the user types.
#[component]
fn NotesSection(doc: RwSignal<Document>) -> impl IntoView {
    view! {
        <div class="notes">
            <h4>"Notes"</h4>
            <input
                type="text"
                placeholder="It was great doing business with you."
                prop:value=move || doc.with(|d| d.field(DocumentField::Notes).to_string())
                on:input=move |ev| {
                    doc.update(|d| d.set_field(DocumentField::Notes, event_target_value(&ev)))
                }
            />
        </div>
        <div class="terms">
            <h4>"Terms & Conditions"</h4>
            <input
                type="text"
                placeholder="Please make the payment by the due date."
                prop:value=move || doc.with(|d| d.field(DocumentField::TermsAndConditions).to_string())
                on:input=move |ev| {
                    doc.update(|d| d.set_field(DocumentField::TermsAndConditions, event_target_value(&ev)))
                }
            />
        </div>
    }
}

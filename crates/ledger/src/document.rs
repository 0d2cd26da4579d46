//! Document: invoice metadata, party details, and the line-item ledger.

use serde::{Deserialize, Serialize};

use crate::error::LedgerResult;
use crate::line_item::{LineItem, LineItemField, TaxKind};
use crate::logo::LogoImage;

/// Which party a field update addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartyRole {
    Company,
    Client,
}

/// Addressable fields of a [`PartyInfo`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartyField {
    Name,
    Gstin,
    Address,
    City,
    State,
    Country,
}

impl PartyField {
    /// Display/iteration order of the party fields.
    pub const ALL: [PartyField; 6] = [
        PartyField::Name,
        PartyField::Gstin,
        PartyField::Address,
        PartyField::City,
        PartyField::State,
        PartyField::Country,
    ];
}

/// Free-text details for the issuing company or the billed client.
///
/// All fields are optional free text; GSTIN is opaque to the system.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartyInfo {
    pub name: String,
    pub gstin: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub country: String,
}

impl PartyInfo {
    pub fn get(&self, field: PartyField) -> &str {
        match field {
            PartyField::Name => &self.name,
            PartyField::Gstin => &self.gstin,
            PartyField::Address => &self.address,
            PartyField::City => &self.city,
            PartyField::State => &self.state,
            PartyField::Country => &self.country,
        }
    }

    pub fn set(&mut self, field: PartyField, value: String) {
        match field {
            PartyField::Name => self.name = value,
            PartyField::Gstin => self.gstin = value,
            PartyField::Address => self.address = value,
            PartyField::City => self.city = value,
            PartyField::State => self.state = value,
            PartyField::Country => self.country = value,
        }
    }
}

/// Addressable top-level free-text fields of a [`Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentField {
    InvoiceTitle,
    InvoiceNumber,
    InvoiceDate,
    DueDate,
    PlaceOfSupply,
    Notes,
    TermsAndConditions,
}

/// The invoice document being edited.
///
/// Created once per editing session. All mutation operations are
/// synchronous and leave the document immediately consistent; derived
/// totals are computed on demand from unrounded values (rounding to two
/// decimals is a presentation concern).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    company: PartyInfo,
    client: PartyInfo,
    invoice_title: String,
    invoice_number: String,
    invoice_date: String,
    due_date: String,
    place_of_supply: String,
    notes: String,
    terms_and_conditions: String,
    logo: Option<LogoImage>,
    line_items: Vec<LineItem>,
}

impl Document {
    /// A fresh document: default title, empty metadata, one blank line item.
    pub fn new() -> Self {
        Self {
            company: PartyInfo::default(),
            client: PartyInfo::default(),
            invoice_title: "Tax Invoice".to_string(),
            invoice_number: String::new(),
            invoice_date: String::new(),
            due_date: String::new(),
            place_of_supply: String::new(),
            notes: String::new(),
            terms_and_conditions: String::new(),
            logo: None,
            line_items: vec![LineItem::new()],
        }
    }

    pub fn field(&self, field: DocumentField) -> &str {
        match field {
            DocumentField::InvoiceTitle => &self.invoice_title,
            DocumentField::InvoiceNumber => &self.invoice_number,
            DocumentField::InvoiceDate => &self.invoice_date,
            DocumentField::DueDate => &self.due_date,
            DocumentField::PlaceOfSupply => &self.place_of_supply,
            DocumentField::Notes => &self.notes,
            DocumentField::TermsAndConditions => &self.terms_and_conditions,
        }
    }

    /// Update a single top-level field; stores the value verbatim and
    /// always succeeds.
    pub fn set_field(&mut self, field: DocumentField, value: String) {
        match field {
            DocumentField::InvoiceTitle => self.invoice_title = value,
            DocumentField::InvoiceNumber => self.invoice_number = value,
            DocumentField::InvoiceDate => self.invoice_date = value,
            DocumentField::DueDate => self.due_date = value,
            DocumentField::PlaceOfSupply => self.place_of_supply = value,
            DocumentField::Notes => self.notes = value,
            DocumentField::TermsAndConditions => self.terms_and_conditions = value,
        }
    }

    pub fn party(&self, role: PartyRole) -> &PartyInfo {
        match role {
            PartyRole::Company => &self.company,
            PartyRole::Client => &self.client,
        }
    }

    pub fn set_party_field(&mut self, role: PartyRole, field: PartyField, value: String) {
        match role {
            PartyRole::Company => self.company.set(field, value),
            PartyRole::Client => self.client.set(field, value),
        }
    }

    /// Line items in display and export order.
    pub fn line_items(&self) -> &[LineItem] {
        &self.line_items
    }

    /// Update one field of the line item at `index`.
    ///
    /// `index` must reference an existing item. Indices are derived from
    /// the rendered list, so an out-of-range index is a caller bug and
    /// panics.
    pub fn set_line_item_field(&mut self, index: usize, field: LineItemField, raw: &str) {
        self.line_items[index].set_field(field, raw);
    }

    /// Append a blank line item.
    pub fn add_line_item(&mut self) {
        self.line_items.push(LineItem::new());
    }

    /// Remove the line item at `index`, keeping the order of the rest.
    ///
    /// Out-of-range indices are ignored. Removing the last remaining row
    /// is allowed; an empty ledger is valid and all totals are then zero.
    pub fn delete_line_item(&mut self, index: usize) {
        if index < self.line_items.len() {
            self.line_items.remove(index);
        }
    }

    /// Sum of `amount` over all line items, unrounded.
    pub fn subtotal(&self) -> f64 {
        self.line_items.iter().map(LineItem::amount).sum()
    }

    /// Sum of one tax field over all line items, unrounded.
    pub fn tax_total(&self, kind: TaxKind) -> f64 {
        self.line_items.iter().map(|item| item.tax(kind)).sum()
    }

    /// Subtotal plus all three tax totals.
    pub fn grand_total(&self) -> f64 {
        self.subtotal()
            + self.tax_total(TaxKind::Sgst)
            + self.tax_total(TaxKind::Cgst)
            + self.tax_total(TaxKind::Cess)
    }

    pub fn logo(&self) -> Option<&LogoImage> {
        self.logo.as_ref()
    }

    /// Replace the logo with a new image payload.
    ///
    /// Rejects payloads over [`crate::logo::MAX_LOGO_BYTES`]; on rejection
    /// the current logo (if any) is kept.
    pub fn set_logo_image(&mut self, content_type: &str, bytes: &[u8]) -> LedgerResult<()> {
        self.logo = Some(LogoImage::from_bytes(content_type, bytes)?);
        Ok(())
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    use crate::error::LedgerError;
    use crate::logo::MAX_LOGO_BYTES;

    #[test]
    fn new_document_has_default_title_and_one_blank_item() {
        let doc = Document::new();
        assert_eq!(doc.field(DocumentField::InvoiceTitle), "Tax Invoice");
        assert_eq!(doc.line_items().len(), 1);

        let item = &doc.line_items()[0];
        assert_eq!(item.qty(), 1.0);
        assert_eq!(item.rate(), 0.0);
        assert_eq!(item.amount(), 0.0);
        assert_eq!(item.description(), "");
    }

    #[test]
    fn set_field_stores_values_verbatim() {
        let mut doc = Document::new();
        doc.set_field(DocumentField::InvoiceNumber, "INV-42".to_string());
        doc.set_field(DocumentField::PlaceOfSupply, "Karnataka".to_string());
        doc.set_field(DocumentField::InvoiceTitle, "Proforma Invoice".to_string());
        assert_eq!(doc.field(DocumentField::InvoiceNumber), "INV-42");
        assert_eq!(doc.field(DocumentField::PlaceOfSupply), "Karnataka");
        assert_eq!(doc.field(DocumentField::InvoiceTitle), "Proforma Invoice");
    }

    #[test]
    fn set_party_field_updates_the_addressed_party_only() {
        let mut doc = Document::new();
        doc.set_party_field(PartyRole::Company, PartyField::Name, "Acme Ltd".to_string());
        doc.set_party_field(PartyRole::Client, PartyField::City, "Pune".to_string());
        assert_eq!(doc.party(PartyRole::Company).name, "Acme Ltd");
        assert_eq!(doc.party(PartyRole::Client).name, "");
        assert_eq!(doc.party(PartyRole::Client).city, "Pune");
    }

    #[test]
    fn editing_scenario_tracks_running_totals() {
        let mut doc = Document::new();
        doc.set_line_item_field(0, LineItemField::Rate, "100");
        assert_eq!(doc.line_items()[0].amount(), 100.0);
        assert_eq!(doc.subtotal(), 100.0);

        doc.add_line_item();
        doc.set_line_item_field(1, LineItemField::Qty, "2");
        doc.set_line_item_field(1, LineItemField::Rate, "50");
        doc.set_line_item_field(1, LineItemField::Sgst, "3");
        doc.set_line_item_field(1, LineItemField::Cgst, "3");
        assert_eq!(doc.line_items()[1].amount(), 100.0);
        assert_eq!(doc.subtotal(), 200.0);
        assert_eq!(doc.tax_total(TaxKind::Sgst), 3.0);
        assert_eq!(doc.tax_total(TaxKind::Cgst), 3.0);
        assert_eq!(doc.grand_total(), 206.0);

        doc.delete_line_item(0);
        assert_eq!(doc.subtotal(), 100.0);
        assert_eq!(doc.grand_total(), 106.0);
    }

    #[test]
    fn deleting_the_last_item_leaves_a_valid_empty_ledger() {
        let mut doc = Document::new();
        doc.delete_line_item(0);
        assert!(doc.line_items().is_empty());
        assert_eq!(doc.subtotal(), 0.0);
        for kind in TaxKind::ALL {
            assert_eq!(doc.tax_total(kind), 0.0);
        }
        assert_eq!(doc.grand_total(), 0.0);
    }

    #[test]
    fn deleting_an_out_of_range_index_is_ignored() {
        let mut doc = Document::new();
        doc.delete_line_item(5);
        assert_eq!(doc.line_items().len(), 1);
    }

    #[test]
    fn non_numeric_input_coerces_to_zero_and_recomputes_amount() {
        let mut doc = Document::new();
        doc.set_line_item_field(0, LineItemField::Qty, "4");
        doc.set_line_item_field(0, LineItemField::Rate, "25");
        assert_eq!(doc.line_items()[0].amount(), 100.0);

        doc.set_line_item_field(0, LineItemField::Rate, "abc");
        assert_eq!(doc.line_items()[0].rate(), 0.0);
        assert_eq!(doc.line_items()[0].amount(), 0.0);
    }

    #[test]
    fn logo_at_the_size_limit_is_accepted() {
        let mut doc = Document::new();
        let bytes = vec![0u8; MAX_LOGO_BYTES];
        doc.set_logo_image("image/png", &bytes).unwrap();
        assert!(doc.logo().is_some());
    }

    #[test]
    fn oversized_logo_is_rejected_without_state_change() {
        let mut doc = Document::new();
        doc.set_logo_image("image/png", &[1u8; 16]).unwrap();
        let before = doc.logo().cloned();

        let oversized = vec![0u8; MAX_LOGO_BYTES + 1];
        let err = doc.set_logo_image("image/jpeg", &oversized).unwrap_err();
        assert_eq!(err, LedgerError::logo_too_large(MAX_LOGO_BYTES + 1));
        assert_eq!(doc.logo().cloned(), before);
    }

    #[test]
    fn uploading_again_replaces_the_previous_logo() {
        let mut doc = Document::new();
        doc.set_logo_image("image/png", &[1u8; 16]).unwrap();
        doc.set_logo_image("image/jpeg", &[2u8; 16]).unwrap();
        assert_eq!(doc.logo().unwrap().content_type(), "image/jpeg");
    }

    const FIELDS: [LineItemField; 7] = [
        LineItemField::Description,
        LineItemField::HsnSac,
        LineItemField::Qty,
        LineItemField::Rate,
        LineItemField::Sgst,
        LineItemField::Cgst,
        LineItemField::Cess,
    ];

    fn raw_input() -> impl Strategy<Value = String> {
        prop_oneof![
            "-?[0-9]{1,6}(\\.[0-9]{1,3})?",
            "[a-zA-Z ]{0,10}",
            Just("NaN".to_string()),
            Just("inf".to_string()),
        ]
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: after any sequence of line-item field sets, every
        /// item's amount equals qty * rate measured with post-call values.
        #[test]
        fn amount_is_always_qty_times_rate(
            ops in prop::collection::vec((0usize..4, 0usize..7, raw_input()), 1..40)
        ) {
            let mut doc = Document::new();
            doc.add_line_item();
            doc.add_line_item();
            doc.add_line_item();

            for (slot, field_idx, raw) in ops {
                doc.set_line_item_field(slot, FIELDS[field_idx], &raw);
            }

            for item in doc.line_items() {
                prop_assert_eq!(item.amount(), item.qty() * item.rate());
            }
        }

        /// Property: the grand total always decomposes into subtotal plus
        /// the three tax totals, exactly.
        #[test]
        fn grand_total_decomposes_exactly(
            rows in prop::collection::vec(
                (0.0f64..1e6, 0.0f64..1e6, 0.0f64..1e5, 0.0f64..1e5, 0.0f64..1e5),
                0..12
            )
        ) {
            let mut doc = Document::new();
            doc.delete_line_item(0);
            for (i, (qty, rate, sgst, cgst, cess)) in rows.iter().enumerate() {
                doc.add_line_item();
                doc.set_line_item_field(i, LineItemField::Qty, &qty.to_string());
                doc.set_line_item_field(i, LineItemField::Rate, &rate.to_string());
                doc.set_line_item_field(i, LineItemField::Sgst, &sgst.to_string());
                doc.set_line_item_field(i, LineItemField::Cgst, &cgst.to_string());
                doc.set_line_item_field(i, LineItemField::Cess, &cess.to_string());
            }

            prop_assert_eq!(
                doc.grand_total(),
                doc.subtotal()
                    + doc.tax_total(TaxKind::Sgst)
                    + doc.tax_total(TaxKind::Cgst)
                    + doc.tax_total(TaxKind::Cess)
            );
        }
    }
}

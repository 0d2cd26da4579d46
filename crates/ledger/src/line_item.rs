//! Line items: one billable row with quantity, rate, and tax contributions.

use serde::{Deserialize, Serialize};

/// Addressable fields of a [`LineItem`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineItemField {
    Description,
    HsnSac,
    Qty,
    Rate,
    Sgst,
    Cgst,
    Cess,
}

/// Named tax-amount fields summed independently into the grand total.
///
/// These hold absolute currency amounts contributed per line, not
/// percentage rates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaxKind {
    Sgst,
    Cgst,
    Cess,
}

impl TaxKind {
    pub const ALL: [TaxKind; 3] = [TaxKind::Sgst, TaxKind::Cgst, TaxKind::Cess];
}

/// One billable row.
///
/// `amount` is derived (`qty * rate`) and recomputed on every field set;
/// it is never independently settable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    description: String,
    hsn_sac: String,
    qty: f64,
    rate: f64,
    sgst: f64,
    cgst: f64,
    cess: f64,
    amount: f64,
}

impl LineItem {
    /// A blank row: quantity 1, everything else zero/empty.
    pub fn new() -> Self {
        Self {
            description: String::new(),
            hsn_sac: String::new(),
            qty: 1.0,
            rate: 0.0,
            sgst: 0.0,
            cgst: 0.0,
            cess: 0.0,
            amount: 0.0,
        }
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn hsn_sac(&self) -> &str {
        &self.hsn_sac
    }

    pub fn qty(&self) -> f64 {
        self.qty
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }

    pub fn sgst(&self) -> f64 {
        self.sgst
    }

    pub fn cgst(&self) -> f64 {
        self.cgst
    }

    pub fn cess(&self) -> f64 {
        self.cess
    }

    /// Derived row total, `qty * rate`.
    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn tax(&self, kind: TaxKind) -> f64 {
        match kind {
            TaxKind::Sgst => self.sgst,
            TaxKind::Cgst => self.cgst,
            TaxKind::Cess => self.cess,
        }
    }

    /// Set a single field from raw user input.
    ///
    /// Text fields store the input verbatim. Numeric fields coerce
    /// unparseable or non-finite input to 0.0, so the form never blocks on
    /// malformed numeric entry. `amount` is recomputed after every set,
    /// tax fields included.
    pub fn set_field(&mut self, field: LineItemField, raw: &str) {
        match field {
            LineItemField::Description => self.description = raw.to_string(),
            LineItemField::HsnSac => self.hsn_sac = raw.to_string(),
            LineItemField::Qty => self.qty = coerce_number(raw),
            LineItemField::Rate => self.rate = coerce_number(raw),
            LineItemField::Sgst => self.sgst = coerce_number(raw),
            LineItemField::Cgst => self.cgst = coerce_number(raw),
            LineItemField::Cess => self.cess = coerce_number(raw),
        }
        self.recompute_amount();
    }

    fn recompute_amount(&mut self) {
        self.amount = finite_or_zero(self.qty) * finite_or_zero(self.rate);
    }
}

impl Default for LineItem {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse raw input as `f64`, substituting 0.0 for anything unparseable or
/// non-finite. The model never holds NaN.
fn coerce_number(raw: &str) -> f64 {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .unwrap_or(0.0)
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}

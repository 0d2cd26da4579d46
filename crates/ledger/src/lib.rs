//! `billcraft-ledger` — invoice document model and derived totals.
//!
//! This crate contains the editable invoice document (party details,
//! metadata, and the ordered line-item ledger) together with its aggregate
//! computations, implemented purely as deterministic domain logic (no IO,
//! no UI, no rendering concerns).

pub mod document;
pub mod error;
pub mod line_item;
pub mod logo;

pub use document::{Document, DocumentField, PartyField, PartyInfo, PartyRole};
pub use error::{LedgerError, LedgerResult};
pub use line_item::{LineItem, LineItemField, TaxKind};
pub use logo::{LogoImage, MAX_LOGO_BYTES};

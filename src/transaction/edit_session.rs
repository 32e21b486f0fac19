//! Inline editing of a single transaction row.
//!
//! At most one [EditSession] exists at a time. The session owns the row's
//! key bindings, so they disappear with it and never pile up.

use serde::Deserialize;
use time::{OffsetDateTime, format_description::BorrowedFormatItem, macros::format_description};

use crate::{
    Error, ResourceId,
    transaction::{Transaction, TransactionPatch, TransactionType, core::iso_date},
};

/// The format the `date` input uses.
pub(crate) const DATE_INPUT_FORMAT: &[BorrowedFormatItem] =
    format_description!("[year]-[month]-[day]");

/// Where the session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditPhase {
    /// The row shows inputs and accepts a save.
    Editing,
    /// A save request is in flight, further saves are rejected.
    Saving,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditAction {
    Save,
    Cancel,
}

/// A key that triggers an action while the row is being edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyBinding {
    /// The `KeyboardEvent.key` value.
    pub key: &'static str,
    pub action: EditAction,
}

/// The bindings installed for the lifetime of an edit session.
pub const EDIT_KEY_BINDINGS: [KeyBinding; 2] = [
    KeyBinding {
        key: "Escape",
        action: EditAction::Cancel,
    },
    KeyBinding {
        key: "Enter",
        action: EditAction::Save,
    },
];

/// The values shown in the edit inputs.
///
/// Kept as text so the user's input survives a failed save unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct EditDraft {
    pub amount: String,
    pub date: String,
    pub category: String,
    pub description: String,
    pub kind: String,
}

impl From<&Transaction> for EditDraft {
    fn from(transaction: &Transaction) -> Self {
        Self {
            amount: transaction.amount.to_string(),
            date: format_date_input(transaction.date),
            category: transaction.category.to_string(),
            description: transaction.description.clone(),
            kind: transaction.kind.as_str().to_owned(),
        }
    }
}

/// Format `date` for a `date` input, e.g. `2025-03-04`.
pub(crate) fn format_date_input(date: OffsetDateTime) -> String {
    date.date()
        .format(DATE_INPUT_FORMAT)
        .inspect_err(|error| tracing::error!("could not format date {date}: {error}"))
        .unwrap_or_default()
}

/// The form submitted when saving an edited row.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EditTransactionForm {
    pub amount: String,
    pub date: String,
    pub category: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl From<EditTransactionForm> for EditDraft {
    fn from(form: EditTransactionForm) -> Self {
        Self {
            amount: form.amount,
            date: form.date,
            category: form.category,
            description: form.description,
            kind: form.kind,
        }
    }
}

impl EditDraft {
    /// The patch that writes every edited field back to the backend.
    pub fn to_patch(&self) -> Result<TransactionPatch, Error> {
        let amount = self
            .amount
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|amount| amount.is_finite())
            .ok_or_else(|| Error::InvalidField {
                field: "amount",
                value: self.amount.clone(),
            })?;

        let date = iso_date::parse(self.date.trim()).ok_or_else(|| Error::InvalidField {
            field: "date",
            value: self.date.clone(),
        })?;

        let kind = self
            .kind
            .parse::<TransactionType>()
            .map_err(|_| Error::InvalidField {
                field: "transaction type",
                value: self.kind.clone(),
            })?;

        let Ok(category) = self.category.parse::<ResourceId>();

        Ok(TransactionPatch {
            amount: Some(amount),
            date: Some(date),
            category: Some(category),
            description: Some(self.description.clone()),
            kind: Some(kind),
        })
    }
}

/// The row currently being edited.
#[derive(Debug, Clone, PartialEq)]
pub struct EditSession {
    id: ResourceId,
    draft: EditDraft,
    phase: EditPhase,
}

impl EditSession {
    /// Start editing `transaction` with its current values.
    pub fn new(transaction: &Transaction) -> Self {
        Self {
            id: transaction.id.clone(),
            draft: EditDraft::from(transaction),
            phase: EditPhase::Editing,
        }
    }

    pub fn id(&self) -> &ResourceId {
        &self.id
    }

    pub fn draft(&self) -> &EditDraft {
        &self.draft
    }

    pub fn phase(&self) -> EditPhase {
        self.phase
    }

    /// The key bindings that are active while this session exists.
    pub fn key_bindings(&self) -> &'static [KeyBinding] {
        &EDIT_KEY_BINDINGS
    }

    /// Move to [EditPhase::Saving] with the submitted values.
    ///
    /// The submitted values replace the draft even when they are invalid, so
    /// the row shows what the user typed.
    pub fn begin_save(&mut self, form: EditTransactionForm) -> Result<TransactionPatch, Error> {
        if self.phase == EditPhase::Saving {
            return Err(Error::SaveInProgress);
        }

        self.draft = EditDraft::from(form);
        let patch = self.draft.to_patch()?;
        self.phase = EditPhase::Saving;

        Ok(patch)
    }

    /// Return to [EditPhase::Editing] after a failed save.
    pub fn save_failed(&mut self) {
        self.phase = EditPhase::Editing;
    }
}

#[cfg(test)]
mod tests {
    use time::macros::datetime;

    use crate::{
        Error, ResourceId,
        transaction::{Transaction, TransactionPatch, TransactionType},
    };

    use super::{EditAction, EditPhase, EditSession, EditTransactionForm};

    fn transaction() -> Transaction {
        Transaction {
            id: ResourceId::Number(7),
            amount: 12.5,
            date: datetime!(2025-03-04 10:20:30 UTC),
            category: ResourceId::Number(2),
            description: "Groceries".to_owned(),
            kind: TransactionType::Expense,
        }
    }

    fn form(amount: &str) -> EditTransactionForm {
        EditTransactionForm {
            amount: amount.to_owned(),
            date: "2025-03-05".to_owned(),
            category: "1".to_owned(),
            description: "Groceries".to_owned(),
            kind: "expense".to_owned(),
        }
    }

    #[test]
    fn draft_starts_with_rendered_values() {
        let session = EditSession::new(&transaction());

        assert_eq!(session.phase(), EditPhase::Editing);
        assert_eq!(session.draft().amount, "12.5");
        assert_eq!(session.draft().date, "2025-03-04");
        assert_eq!(session.draft().category, "2");
        assert_eq!(session.draft().kind, "expense");
    }

    #[test]
    fn escape_cancels_and_enter_saves() {
        let session = EditSession::new(&transaction());
        let bindings = session.key_bindings();

        assert!(
            bindings
                .iter()
                .any(|binding| binding.key == "Escape" && binding.action == EditAction::Cancel)
        );
        assert!(
            bindings
                .iter()
                .any(|binding| binding.key == "Enter" && binding.action == EditAction::Save)
        );
    }

    #[test]
    fn save_builds_full_patch() {
        let mut session = EditSession::new(&transaction());

        let patch = session.begin_save(form("42.5")).unwrap();

        assert_eq!(session.phase(), EditPhase::Saving);
        assert_eq!(
            patch,
            TransactionPatch {
                amount: Some(42.5),
                date: Some(datetime!(2025-03-05 00:00 UTC)),
                category: Some(ResourceId::Number(1)),
                description: Some("Groceries".to_owned()),
                kind: Some(TransactionType::Expense),
            }
        );
    }

    #[test]
    fn second_save_while_saving_is_rejected() {
        let mut session = EditSession::new(&transaction());
        session.begin_save(form("42.5")).unwrap();

        assert_eq!(session.begin_save(form("43")), Err(Error::SaveInProgress));
    }

    #[test]
    fn failed_save_keeps_submitted_values() {
        let mut session = EditSession::new(&transaction());
        session.begin_save(form("42.5")).unwrap();

        session.save_failed();

        assert_eq!(session.phase(), EditPhase::Editing);
        assert_eq!(session.draft().amount, "42.5");
        assert_eq!(session.draft().date, "2025-03-05");
    }

    #[test]
    fn invalid_amount_stays_editing() {
        let mut session = EditSession::new(&transaction());

        let result = session.begin_save(form("abc"));

        assert_eq!(
            result,
            Err(Error::InvalidField {
                field: "amount",
                value: "abc".to_owned(),
            })
        );
        assert_eq!(session.phase(), EditPhase::Editing);
        assert_eq!(session.draft().amount, "abc");
    }
}

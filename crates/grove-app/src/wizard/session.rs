//! The donation session aggregate and its transitions
//!
//! Every method here is synchronous and free of I/O. "Now" is passed in by the
//! caller so expiry checks stay deterministic under test.

use grove_core::prelude::*;
use grove_core::{
    are_card_fields_ready, focus_after_edit, format_card_number, format_cvc, format_expiry,
    is_amount_valid, is_cvc_valid, is_expiry_format_complete, is_expiry_temporally_valid,
    sanitize_custom_amount, Cadence, CardDetails, CardField, DonationRecord, Edit, PaymentMethod,
    Receipt, Step, SubmissionState, YearMonth, MIN_PRESET_AMOUNT, PRESET_AMOUNTS,
};

use super::fields::WizardField;
use super::SessionId;

/// Why a submit request was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitBlocker {
    NotOnPaymentStep,
    AlreadySubmitting,
    AlreadySucceeded,
    MissingAmount,
    CardIncomplete,
    CardExpired,
}

/// State of one open wizard, from type selection to the thank-you screen
#[derive(Debug, Clone)]
pub struct DonationSession {
    /// Unique session identifier
    pub id: SessionId,

    pub step: Step,
    pub cadence: Cadence,

    // ─────────────────────────────────────────────────────────
    // Amount
    // ─────────────────────────────────────────────────────────
    /// Last preset the user picked (the view highlights by numeric equality)
    pub selected_preset_amount: Option<u64>,

    /// Digits only; authoritative amount when non-empty
    pub custom_amount_text: String,

    /// Set once the user types into the custom amount field
    pub amount_manually_edited: bool,

    pub plant_tree_opt_in: bool,

    // ─────────────────────────────────────────────────────────
    // Payment
    // ─────────────────────────────────────────────────────────
    pub email: String,
    pub payment_method: Option<PaymentMethod>,
    pub card: CardDetails,

    /// `false` only once a complete expiry resolves to a past month
    pub expiry_temporal_valid: bool,

    pub submission_state: SubmissionState,
    pub receipt: Option<Receipt>,

    // ─────────────────────────────────────────────────────────
    // Focus & Scrolling
    // ─────────────────────────────────────────────────────────
    /// Control that currently holds keyboard focus
    pub focused: Option<WizardField>,

    /// Deferred focus transfer, applied once by the view then cleared
    pub focus_target: Option<WizardField>,

    /// Highlighted button in the preset row
    pub preset_cursor: usize,

    /// Highlighted button in the payment method row
    pub method_cursor: usize,

    /// The view should bring the submit control into view
    pub scroll_to_submit: bool,

    /// Card readiness as of the last check, so auto-scroll fires on the rising edge only
    pub card_ready_latched: bool,
}

impl DonationSession {
    pub fn new(id: SessionId) -> Self {
        Self {
            id,
            step: Step::TypeSelection,
            cadence: Cadence::OneTime,
            selected_preset_amount: None,
            custom_amount_text: String::new(),
            amount_manually_edited: false,
            plant_tree_opt_in: true,
            email: String::new(),
            payment_method: None,
            card: CardDetails::default(),
            expiry_temporal_valid: true,
            submission_state: SubmissionState::Idle,
            receipt: None,
            focused: WizardField::initial(Step::TypeSelection),
            focus_target: None,
            preset_cursor: 0,
            method_cursor: 0,
            scroll_to_submit: false,
            card_ready_latched: false,
        }
    }

    /// Amount that would be submitted right now
    pub fn amount(&self) -> Option<u64> {
        if self.custom_amount_text.is_empty() {
            self.selected_preset_amount
        } else {
            self.custom_amount_text.parse().ok()
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.submission_state == SubmissionState::Submitting
    }

    // ─────────────────────────────────────────────────────────
    // Step Sequence
    // ─────────────────────────────────────────────────────────

    fn enter_step(&mut self, step: Step) {
        debug!("Session {}: {:?} -> {:?}", self.id, self.step, step);
        self.step = step;
        self.focused = WizardField::initial(step);
        self.focus_target = None;
        self.scroll_to_submit = false;
        self.card_ready_latched = false;

        if step == Step::AmountSelection {
            self.seed_minimum_amount();
        }
    }

    /// Seed the smallest preset when the amount step is entered with nothing typed
    fn seed_minimum_amount(&mut self) {
        if self.custom_amount_text.is_empty() {
            self.selected_preset_amount = Some(MIN_PRESET_AMOUNT);
            self.custom_amount_text = MIN_PRESET_AMOUNT.to_string();
            self.preset_cursor = 0;
        }
    }

    /// `true` when the forward transition of the current step is allowed
    pub fn can_advance(&self) -> bool {
        match self.step {
            Step::TypeSelection => true,
            Step::AmountSelection => is_amount_valid(&self.custom_amount_text),
            Step::PaymentDetails | Step::Success => false,
        }
    }

    /// Continue to the next step. Returns `false` when the guard refuses.
    pub fn advance(&mut self) -> bool {
        if !self.can_advance() {
            return false;
        }
        let next = match self.step {
            Step::TypeSelection => Step::AmountSelection,
            Step::AmountSelection => Step::PaymentDetails,
            Step::PaymentDetails | Step::Success => return false,
        };
        self.enter_step(next);
        true
    }

    pub fn can_retreat(&self) -> bool {
        match self.step {
            Step::AmountSelection => true,
            Step::PaymentDetails => !self.is_submitting(),
            Step::TypeSelection | Step::Success => false,
        }
    }

    /// Go back one step. Returns `false` when there is nowhere to go.
    pub fn retreat(&mut self) -> bool {
        if !self.can_retreat() {
            return false;
        }
        let prev = match self.step {
            Step::AmountSelection => Step::TypeSelection,
            Step::PaymentDetails => Step::AmountSelection,
            Step::TypeSelection | Step::Success => return false,
        };
        self.enter_step(prev);
        true
    }

    // ─────────────────────────────────────────────────────────
    // Type & Amount
    // ─────────────────────────────────────────────────────────

    pub fn set_cadence(&mut self, cadence: Cadence) {
        self.cadence = cadence;
    }

    /// Pick one of [`PRESET_AMOUNTS`]. Returns `false`, changing nothing, for any other value.
    pub fn select_preset(&mut self, amount: u64) -> bool {
        if !PRESET_AMOUNTS.contains(&amount) {
            debug!("Ignoring non-preset amount {}", amount);
            return false;
        }
        self.selected_preset_amount = Some(amount);
        self.custom_amount_text = amount.to_string();
        self.amount_manually_edited = false;
        true
    }

    /// Offer new text for the custom amount field; non-digit candidates are dropped
    pub fn set_custom_amount(&mut self, candidate: &str) {
        let accepted = sanitize_custom_amount(&self.custom_amount_text, candidate);
        if accepted == candidate {
            self.custom_amount_text = accepted;
            self.amount_manually_edited = true;
        } else {
            trace!("Dropped custom amount candidate {:?}", candidate);
        }
    }

    /// A keystroke in the custom amount field.
    ///
    /// Text that came from a preset or the seed is replaced rather than extended.
    pub fn type_custom_amount(&mut self, c: char) {
        let candidate = if self.amount_manually_edited {
            format!("{}{c}", self.custom_amount_text)
        } else {
            c.to_string()
        };
        self.set_custom_amount(&candidate);
    }

    pub fn delete_custom_amount_char(&mut self) {
        let mut candidate = self.custom_amount_text.clone();
        candidate.pop();
        self.set_custom_amount(&candidate);
    }

    pub fn toggle_plant_tree(&mut self) {
        self.plant_tree_opt_in = !self.plant_tree_opt_in;
    }

    // ─────────────────────────────────────────────────────────
    // Payment Details
    // ─────────────────────────────────────────────────────────

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    /// Select `method`, or clear it when it is already selected.
    ///
    /// Returns `true` when the card method has just become selected.
    pub fn toggle_payment_method(&mut self, method: PaymentMethod) -> bool {
        if self.payment_method == Some(method) {
            self.payment_method = None;
        } else {
            self.payment_method = Some(method);
        }

        if self.payment_method != Some(PaymentMethod::Card) {
            if matches!(self.focused, Some(WizardField::Card(_))) {
                self.focused = Some(WizardField::Method);
            }
            if matches!(self.focus_target, Some(WizardField::Card(_))) {
                self.focus_target = None;
            }
        }

        self.payment_method == Some(PaymentMethod::Card)
    }

    fn card_text(&self, field: CardField) -> &str {
        match field {
            CardField::Number => &self.card.number_text,
            CardField::Expiry => &self.card.expiry_text,
            CardField::Cvc => &self.card.cvc_text,
        }
    }

    fn store_card_text(&mut self, field: CardField, raw: &str, now: YearMonth) {
        match field {
            CardField::Number => self.card.number_text = format_card_number(raw),
            CardField::Expiry => {
                self.card.expiry_text = format_expiry(raw);
                self.expiry_temporal_valid = if is_expiry_format_complete(&self.card.expiry_text) {
                    is_expiry_temporally_valid(&self.card.expiry_text, now)
                } else {
                    true
                };
            }
            CardField::Cvc => self.card.cvc_text = format_cvc(raw),
        }
    }

    /// Append typed or pasted text to a card field.
    ///
    /// A single typed non-digit is dropped outright. Returns the field focus
    /// should move to, if the edit completed this one.
    pub fn insert_card_text(
        &mut self,
        field: CardField,
        text: &str,
        now: YearMonth,
    ) -> Option<CardField> {
        let chars = text.chars().count();
        if chars == 0 || (chars == 1 && !text.chars().all(|c| c.is_ascii_digit())) {
            return None;
        }

        let before = self.card_text(field).to_string();
        let raw = format!("{before}{text}");
        self.store_card_text(field, &raw, now);
        focus_after_edit(field, &before, self.card_text(field), Edit::Insert { chars })
    }

    /// Remove the last character of a card field.
    pub fn delete_card_char(&mut self, field: CardField, now: YearMonth) -> Option<CardField> {
        let before = self.card_text(field).to_string();
        let mut raw = before.clone();
        raw.pop();
        self.store_card_text(field, &raw, now);
        focus_after_edit(field, &before, self.card_text(field), Edit::Delete)
    }

    /// Replace a card field's content wholesale, as a paste over a selection would
    pub fn replace_card_text(
        &mut self,
        field: CardField,
        raw: &str,
        now: YearMonth,
    ) -> Option<CardField> {
        let before = self.card_text(field).to_string();
        self.store_card_text(field, raw, now);
        let edit = if raw.is_empty() {
            Edit::Delete
        } else {
            Edit::Insert {
                chars: raw.chars().count(),
            }
        };
        focus_after_edit(field, &before, self.card_text(field), edit)
    }

    /// Card sub-form open and every required card field acceptable
    pub fn card_fields_ready(&self, now: YearMonth) -> bool {
        self.step == Step::PaymentDetails
            && self.payment_method == Some(PaymentMethod::Card)
            && are_card_fields_ready(&self.card, now)
    }

    // ─────────────────────────────────────────────────────────
    // Focus
    // ─────────────────────────────────────────────────────────

    /// Fields currently mounted, in tab order
    pub fn mounted_fields(&self) -> Vec<WizardField> {
        WizardField::for_step(self.step, self.payment_method)
    }

    pub fn is_mounted(&self, field: WizardField) -> bool {
        self.mounted_fields().contains(&field)
    }

    /// Move focus to the next mounted field, wrapping around
    pub fn focus_next(&mut self) {
        self.cycle_focus(1);
    }

    /// Move focus to the previous mounted field, wrapping around
    pub fn focus_prev(&mut self) {
        self.cycle_focus(-1);
    }

    fn cycle_focus(&mut self, delta: isize) {
        let fields = self.mounted_fields();
        if fields.is_empty() {
            self.focused = None;
            return;
        }
        let len = fields.len() as isize;
        let next = match self.focused.and_then(|f| fields.iter().position(|x| *x == f)) {
            Some(index) => (index as isize + delta).rem_euclid(len) as usize,
            None => 0,
        };
        self.focused = Some(fields[next]);
    }

    /// Apply the pending focus transfer, if its target is still mounted.
    ///
    /// The target is cleared either way; returns the newly focused field.
    pub fn take_focus_target(&mut self) -> Option<WizardField> {
        let target = self.focus_target.take()?;
        if self.is_mounted(target) {
            self.focused = Some(target);
            Some(target)
        } else {
            debug!("Dropping focus transfer to unmounted {:?}", target);
            None
        }
    }

    // ─────────────────────────────────────────────────────────
    // Submission
    // ─────────────────────────────────────────────────────────

    /// Reason the submit control is disabled, if any
    pub fn submit_blocker(&self, now: YearMonth, block_expired: bool) -> Option<SubmitBlocker> {
        match self.submission_state {
            SubmissionState::Submitting => return Some(SubmitBlocker::AlreadySubmitting),
            SubmissionState::Succeeded => return Some(SubmitBlocker::AlreadySucceeded),
            SubmissionState::Idle => {}
        }
        if self.step != Step::PaymentDetails {
            return Some(SubmitBlocker::NotOnPaymentStep);
        }
        if self.amount().is_none() {
            return Some(SubmitBlocker::MissingAmount);
        }
        if self.payment_method == Some(PaymentMethod::Card) {
            let card = &self.card;
            let complete = !card.number_text.is_empty()
                && is_expiry_format_complete(&card.expiry_text)
                && is_cvc_valid(&card.cvc_text);
            if !complete {
                return Some(SubmitBlocker::CardIncomplete);
            }
            if block_expired && !is_expiry_temporally_valid(&card.expiry_text, now) {
                return Some(SubmitBlocker::CardExpired);
            }
        }
        None
    }

    /// Mark the session as submitting and build the record to hand off
    pub fn begin_submission(
        &mut self,
        now: YearMonth,
        block_expired: bool,
    ) -> std::result::Result<DonationRecord, SubmitBlocker> {
        if let Some(blocker) = self.submit_blocker(now, block_expired) {
            return Err(blocker);
        }
        let amount = self.amount().ok_or(SubmitBlocker::MissingAmount)?;

        self.submission_state = SubmissionState::Submitting;
        let email = self.email.trim();
        Ok(DonationRecord {
            amount,
            cadence: self.cadence,
            plant_tree_opt_in: self.plant_tree_opt_in,
            email: (!email.is_empty()).then(|| email.to_string()),
            payment_method: self.payment_method,
        })
    }

    /// The gateway accepted the donation
    pub fn complete_submission(&mut self, receipt: Receipt) {
        self.submission_state = SubmissionState::Succeeded;
        self.receipt = Some(receipt);
        self.enter_step(Step::Success);
    }

    /// The gateway refused; the user may try again
    pub fn fail_submission(&mut self) {
        self.submission_state = SubmissionState::Idle;
    }
}

//! Focusable controls of the wizard

use grove_core::{CardField, PaymentMethod, Step};

/// A control inside the wizard that can hold keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WizardField {
    /// One-time / monthly choice (type step)
    Cadence,
    /// Row of preset amount buttons (amount step)
    Presets,
    /// Free-form amount input (amount step)
    CustomAmount,
    /// "Plant a tree" checkbox (amount step)
    PlantTree,
    /// Optional receipt email (payment step)
    Email,
    /// Row of payment method buttons (payment step)
    Method,
    /// Card sub-form input, only mounted while the card method is selected
    Card(CardField),
}

impl WizardField {
    /// Fields mounted on `step`, in tab order
    pub fn for_step(step: Step, method: Option<PaymentMethod>) -> Vec<WizardField> {
        match step {
            Step::TypeSelection => vec![WizardField::Cadence],
            Step::AmountSelection => vec![
                WizardField::Presets,
                WizardField::CustomAmount,
                WizardField::PlantTree,
            ],
            Step::PaymentDetails => {
                let mut fields = vec![WizardField::Email, WizardField::Method];
                if method == Some(PaymentMethod::Card) {
                    fields.extend([
                        WizardField::Card(CardField::Number),
                        WizardField::Card(CardField::Expiry),
                        WizardField::Card(CardField::Cvc),
                    ]);
                }
                fields
            }
            Step::Success => Vec::new(),
        }
    }

    /// The field that receives focus when `step` is entered
    pub fn initial(step: Step) -> Option<WizardField> {
        Self::for_step(step, None).into_iter().next()
    }

    /// `true` for free-text inputs that take typed characters
    pub fn is_text_input(&self) -> bool {
        matches!(
            self,
            WizardField::CustomAmount | WizardField::Email | WizardField::Card(_)
        )
    }

    pub fn label(&self) -> &'static str {
        match self {
            WizardField::Cadence => "Donation type",
            WizardField::Presets => "Amount",
            WizardField::CustomAmount => "Custom amount",
            WizardField::PlantTree => "Plant a tree",
            WizardField::Email => "Email (Optional)",
            WizardField::Method => "Payment method",
            WizardField::Card(field) => field.label(),
        }
    }

    /// Stable name used in headless output
    pub fn name(&self) -> &'static str {
        match self {
            WizardField::Cadence => "cadence",
            WizardField::Presets => "presets",
            WizardField::CustomAmount => "custom_amount",
            WizardField::PlantTree => "plant_tree",
            WizardField::Email => "email",
            WizardField::Method => "method",
            WizardField::Card(CardField::Number) => "card_number",
            WizardField::Card(CardField::Expiry) => "card_expiry",
            WizardField::Card(CardField::Cvc) => "card_cvc",
        }
    }
}

//! Line builders for each wizard step

use grove_app::{format_dollars, DonationSession, SubmitBlocker, WizardField};
use grove_core::{Cadence, CardField, PaymentMethod, YearMonth, PRESET_AMOUNTS};
use ratatui::style::Style;
use ratatui::text::{Line, Span};

use super::WizardBody;
use crate::theme::{palette, styles};

const INDENT: &str = "  ";
const INPUT_WIDTH: usize = 32;

fn label(text: &'static str, focused: bool) -> Line<'static> {
    let (marker, style) = if focused {
        ("▸ ", styles::accent_bold())
    } else {
        (INDENT, styles::text_secondary())
    };
    Line::from(vec![Span::styled(marker, style), Span::styled(text, style)])
}

fn muted(text: impl Into<String>) -> Line<'static> {
    Line::from(vec![
        Span::raw(INDENT),
        Span::styled(text.into(), styles::text_muted()),
    ])
}

fn input(value: &str, placeholder: &str, focused: bool) -> Line<'static> {
    let (text, style) = if value.is_empty() && !focused {
        (placeholder, styles::text_muted().bg(palette::INPUT_BG))
    } else {
        (value, styles::input(focused))
    };
    let cursor = if focused { "▏" } else { " " };
    let content = format!(" {text}{cursor}");
    Line::from(vec![
        Span::raw(INDENT),
        Span::styled(format!("{content:<INPUT_WIDTH$}"), style),
    ])
}

fn button(text: &str, enabled: bool, primary: bool) -> Span<'static> {
    let style = match (enabled, primary) {
        (false, _) => styles::text_muted().bg(palette::INPUT_BG),
        (true, true) => styles::focused_selected(),
        (true, false) => styles::border_active(),
    };
    Span::styled(format!(" {text} "), style)
}

fn buttons(spans: Vec<Span<'static>>) -> Line<'static> {
    let mut line = vec![Span::raw(INDENT)];
    for (i, span) in spans.into_iter().enumerate() {
        if i > 0 {
            line.push(Span::raw("  "));
        }
        line.push(span);
    }
    Line::from(line)
}

// ─────────────────────────────────────────────────────────
// Steps
// ─────────────────────────────────────────────────────────

pub(super) fn type_selection(body: &mut WizardBody, session: &DonationSession) {
    let focused = session.focused == Some(WizardField::Cadence);

    body.blank();
    body.push(label("How would you like to give?", focused));
    body.blank();

    let mut row = vec![Span::raw(INDENT)];
    for cadence in [Cadence::OneTime, Cadence::Monthly] {
        let selected = session.cadence == cadence;
        row.push(Span::styled(
            format!(" {} ", cadence.label()),
            styles::choice(selected, selected && focused),
        ));
        row.push(Span::raw("  "));
    }
    body.push(Line::from(row));
    body.blank();
    body.push(muted(session.cadence.blurb()));
    body.blank();
    body.push(buttons(vec![button("Continue", true, true)]));
}

pub(super) fn amount_selection(body: &mut WizardBody, session: &DonationSession) {
    let focused = session.focused;
    let amount = session.amount();

    body.push(label("Select amount", focused == Some(WizardField::Presets)));
    let mut row = vec![Span::raw(INDENT)];
    for (i, preset) in PRESET_AMOUNTS.iter().enumerate() {
        let cursor = focused == Some(WizardField::Presets) && session.preset_cursor == i;
        row.push(Span::styled(
            format!(" ${preset} "),
            styles::choice(amount == Some(*preset), cursor),
        ));
        row.push(Span::raw(" "));
    }
    body.push(Line::from(row));
    body.blank();

    let custom_focused = focused == Some(WizardField::CustomAmount);
    body.push(label("Or enter custom amount", custom_focused));
    let text = if session.custom_amount_text.is_empty() {
        String::new()
    } else {
        format!("${}", session.custom_amount_text)
    };
    body.push(input(&text, "Custom amount", custom_focused));
    body.blank();

    let tree_focused = focused == Some(WizardField::PlantTree);
    let check = if session.plant_tree_opt_in { "[x]" } else { "[ ]" };
    let tree_style = if tree_focused {
        styles::accent_bold()
    } else {
        styles::text_primary()
    };
    body.push(Line::from(vec![
        Span::raw(INDENT),
        Span::styled(
            format!("{check} This donation will plant a tree on our map"),
            tree_style,
        ),
    ]));
    body.blank();

    body.push(buttons(vec![
        button("Back", true, false),
        button("Continue", session.can_advance(), true),
    ]));
}

pub(super) fn payment_details(
    body: &mut WizardBody,
    session: &DonationSession,
    now: YearMonth,
    block_expired: bool,
) {
    let focused = session.focused;

    let email_focused = focused == Some(WizardField::Email);
    body.push(label("Email (Optional)", email_focused));
    body.push(input(&session.email, "your.email@example.com", email_focused));
    body.push(muted("We'll send your receipt to this address"));
    body.blank();

    let amount = session
        .amount()
        .map(format_dollars)
        .unwrap_or_else(|| "-".to_string());
    body.push(Line::from(vec![
        Span::raw(INDENT),
        Span::styled("Donation amount: ", styles::text_secondary()),
        Span::styled(amount, styles::text_bright_bold()),
    ]));
    body.push(Line::from(vec![
        Span::raw(INDENT),
        Span::styled("Type: ", styles::text_secondary()),
        Span::styled(session.cadence.label(), styles::text_primary()),
    ]));
    body.blank();

    let method_focused = focused == Some(WizardField::Method);
    body.push(label("Payment methods", method_focused));
    let mut row = vec![Span::raw(INDENT)];
    for (i, method) in PaymentMethod::ALL.iter().enumerate() {
        let cursor = method_focused && session.method_cursor == i;
        row.push(Span::styled(
            format!(" {} ", method.label()),
            styles::choice(session.payment_method == Some(*method), cursor),
        ));
        row.push(Span::raw(" "));
    }
    body.push(Line::from(row));

    if session.payment_method == Some(PaymentMethod::Card) {
        card_form(body, session);
    }
    body.blank();

    let blocker = session.submit_blocker(now, block_expired);
    let submit = if session.is_submitting() {
        button("Processing...", false, true)
    } else {
        button("Complete Donation", blocker.is_none(), true)
    };
    body.mark_submit();
    body.push(buttons(vec![
        button("Back", session.can_retreat(), false),
        submit,
    ]));

    match blocker {
        Some(SubmitBlocker::CardIncomplete) => {
            body.push(muted("Fill in the card details to continue"))
        }
        Some(SubmitBlocker::CardExpired) => body.push(Line::from(vec![
            Span::raw(INDENT),
            Span::styled("An expired card cannot be charged", styles::status_red()),
        ])),
        _ => {}
    }
}

fn card_form(body: &mut WizardBody, session: &DonationSession) {
    let card = &session.card;
    let fields = [
        (CardField::Number, card.number_text.as_str(), "1234 5678 9012 3456"),
        (CardField::Expiry, card.expiry_text.as_str(), "MM/YY"),
        (CardField::Cvc, card.cvc_text.as_str(), "123"),
    ];

    for (field, value, placeholder) in fields {
        let focused = session.focused == Some(WizardField::Card(field));
        body.blank();
        body.push(label(field.label(), focused));
        body.push(input(value, placeholder, focused));

        if field == CardField::Expiry && !session.expiry_temporal_valid {
            body.push(Line::from(vec![
                Span::raw(INDENT),
                Span::styled("⚠ This card has expired", styles::status_yellow()),
            ]));
        }
    }
}

pub(super) fn success(body: &mut WizardBody, session: &DonationSession) {
    let amount = session
        .receipt
        .as_ref()
        .map(|r| r.amount)
        .or_else(|| session.amount())
        .unwrap_or_default();

    body.blank();
    body.push(Line::from(vec![
        Span::raw(INDENT),
        Span::styled("✓", styles::accent_bold()),
    ]));
    body.blank();
    body.push(Line::from(vec![
        Span::raw(INDENT),
        Span::styled(
            format!("Your donation of {} has been received", format_dollars(amount)),
            styles::text_bright_bold(),
        ),
    ]));
    body.push(muted("A receipt has been sent to your email"));
    if let Some(receipt) = &session.receipt {
        body.push(muted(format!("Reference: {}", receipt.reference)));
    }
    body.blank();
    body.push(buttons(vec![button("Close", true, false)]));
}

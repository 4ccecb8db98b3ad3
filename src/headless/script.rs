//! Headless command script
//!
//! One command per line. Blank lines and lines starting with `#` are skipped.
//!
//! ```text
//! open
//! cadence monthly
//! continue
//! preset 50
//! continue
//! method card
//! number 4111 1111 1111 1111
//! expiry 1230
//! cvc 123
//! submit
//! wait 1000
//! quit
//! ```

use std::time::Duration;

use grove_app::Message;
use grove_core::prelude::*;
use grove_core::{Cadence, CardField, PaymentMethod, PRESET_AMOUNTS};

/// A parsed script line
#[derive(Debug, Clone)]
pub enum Command {
    /// Feed a message to the engine
    Send(Message),

    /// Pause the reader so deferred work (submission, resets) can land
    Wait(Duration),
}

/// Parse one script line. `line_no` is 1-based and only used for errors.
pub fn parse_line(line_no: usize, line: &str) -> Result<Option<Command>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let (verb, arg) = match line.split_once(char::is_whitespace) {
        Some((verb, arg)) => (verb, arg.trim()),
        None => (line, ""),
    };

    let message = match verb {
        "open" => Message::OpenWizard,
        "close" => Message::CloseWizard,
        "continue" => Message::Continue,
        "back" => Message::Back,
        "tree" => Message::TogglePlantTree,
        "submit" => Message::Submit,
        "quit" => Message::Quit,
        "cadence" => Message::SetCadence(parse_cadence(line_no, arg)?),
        "preset" => Message::SelectPreset(parse_preset(line_no, arg)?),
        "amount" => Message::SetCustomAmount(arg.to_string()),
        "email" => Message::SetEmail(arg.to_string()),
        "method" => Message::TogglePaymentMethod(parse_method(line_no, arg)?),
        "number" => card(CardField::Number, arg),
        "expiry" => card(CardField::Expiry, arg),
        "cvc" => card(CardField::Cvc, arg),
        "wait" => {
            let ms = arg
                .parse::<u64>()
                .map_err(|_| Error::script(line_no, format!("invalid wait duration {:?}", arg)))?;
            return Ok(Some(Command::Wait(Duration::from_millis(ms))));
        }
        other => return Err(Error::script(line_no, format!("unknown command {:?}", other))),
    };

    Ok(Some(Command::Send(message)))
}

fn card(field: CardField, value: &str) -> Message {
    Message::SetCardField {
        field,
        value: value.to_string(),
    }
}

fn parse_cadence(line_no: usize, arg: &str) -> Result<Cadence> {
    match arg {
        "one_time" | "one-time" | "once" => Ok(Cadence::OneTime),
        "monthly" => Ok(Cadence::Monthly),
        _ => Err(Error::script(line_no, format!("unknown cadence {:?}", arg))),
    }
}

fn parse_method(line_no: usize, arg: &str) -> Result<PaymentMethod> {
    match arg {
        "card" => Ok(PaymentMethod::Card),
        "apple_pay" | "apple-pay" => Ok(PaymentMethod::ApplePay),
        "google_pay" | "google-pay" => Ok(PaymentMethod::GooglePay),
        _ => Err(Error::script(line_no, format!("unknown payment method {:?}", arg))),
    }
}

fn parse_preset(line_no: usize, arg: &str) -> Result<u64> {
    let amount = arg
        .parse::<u64>()
        .map_err(|_| Error::script(line_no, format!("invalid amount {:?}", arg)))?;
    if !PRESET_AMOUNTS.contains(&amount) {
        return Err(Error::script(
            line_no,
            format!("{} is not a preset (expected one of {:?})", amount, PRESET_AMOUNTS),
        ));
    }
    Ok(amount)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn send(line: &str) -> Message {
        match parse_line(1, line) {
            Ok(Some(Command::Send(message))) => message,
            other => panic!("expected a message for {:?}, got {:?}", line, other),
        }
    }

    #[test]
    fn test_blank_and_comment_lines_skipped() {
        assert!(parse_line(1, "").unwrap().is_none());
        assert!(parse_line(2, "   ").unwrap().is_none());
        assert!(parse_line(3, "# open the wizard").unwrap().is_none());
    }

    #[test]
    fn test_bare_verbs() {
        assert!(matches!(send("open"), Message::OpenWizard));
        assert!(matches!(send("close"), Message::CloseWizard));
        assert!(matches!(send("  continue  "), Message::Continue));
        assert!(matches!(send("back"), Message::Back));
        assert!(matches!(send("tree"), Message::TogglePlantTree));
        assert!(matches!(send("submit"), Message::Submit));
        assert!(matches!(send("quit"), Message::Quit));
    }

    #[test]
    fn test_cadence() {
        assert!(matches!(send("cadence monthly"), Message::SetCadence(Cadence::Monthly)));
        assert!(matches!(send("cadence one-time"), Message::SetCadence(Cadence::OneTime)));
    }

    #[test]
    fn test_preset_and_amount() {
        assert!(matches!(send("preset 50"), Message::SelectPreset(50)));
        assert!(matches!(send("amount 75"), Message::SetCustomAmount(text) if text == "75"));
    }

    #[test]
    fn test_preset_outside_the_set_rejected() {
        let err = parse_line(4, "preset 7").unwrap_err();
        assert!(matches!(err, Error::Script { line: 4, .. }));
        assert!(parse_line(4, "preset 100").is_ok());
    }

    #[test]
    fn test_card_number_keeps_spaces_for_the_formatter() {
        let message = send("number 4111 1111 1111 1111");
        assert!(matches!(
            message,
            Message::SetCardField { field: CardField::Number, value } if value == "4111 1111 1111 1111"
        ));
    }

    #[test]
    fn test_method() {
        assert!(matches!(
            send("method google_pay"),
            Message::TogglePaymentMethod(PaymentMethod::GooglePay)
        ));
    }

    #[test]
    fn test_wait() {
        let command = parse_line(1, "wait 900").unwrap();
        assert!(matches!(command, Some(Command::Wait(d)) if d == Duration::from_millis(900)));
    }

    #[test]
    fn test_unknown_command_reports_line() {
        let err = parse_line(7, "donate").unwrap_err();
        assert!(matches!(err, Error::Script { line: 7, .. }));
    }

    #[test]
    fn test_bad_arguments_rejected() {
        assert!(parse_line(1, "preset lots").is_err());
        assert!(parse_line(1, "cadence weekly").is_err());
        assert!(parse_line(1, "method cash").is_err());
        assert!(parse_line(1, "wait soon").is_err());
    }
}

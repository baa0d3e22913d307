//! Signature text back to a MIDI message.
//!
//! Only control-change shaped channel-voice signatures are invertible:
//!
//! ```text
//! channel <1-16>: <COMMAND> <0-127> value: <0-127>
//! ```
//!
//! The channel is displayed 1-based and reconstructed 0-based. Everything
//! else fails with a [`ParseError`] rather than producing a guessed message.

use crate::error::ParseError;
use crate::message::{Command, RawMessage, ShortMessage};

const CHANNEL_PREFIX: &str = "channel ";
const CHANNEL_SEPARATOR: &str = ": ";
const VALUE_SEPARATOR: &str = " value: ";

/// Fields of a control-change shaped signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SignatureFields {
    channel: u8,
    command: Command,
    param: u8,
    value: u8,
}

/// Parses a persisted signature into the message it describes.
pub fn parse(signature: &str) -> Result<RawMessage, ParseError> {
    let fields = parse_fields(signature)?;
    Ok(RawMessage::Short(ShortMessage::channel_voice(
        fields.command,
        fields.channel - 1,
        fields.param,
        fields.value,
    )))
}

fn parse_fields(signature: &str) -> Result<SignatureFields, ParseError> {
    let malformed = || ParseError::MalformedSignature(signature.to_string());
    let unsupported = || ParseError::UnsupportedSignatureShape(signature.to_string());

    let rest = signature
        .strip_prefix(CHANNEL_PREFIX)
        .ok_or_else(unsupported)?;
    let (channel, body) = rest.split_once(CHANNEL_SEPARATOR).ok_or_else(malformed)?;
    let channel = parse_number(channel)
        .filter(|channel| (1..=16).contains(channel))
        .ok_or_else(malformed)?;

    let (head, value) = body.split_once(VALUE_SEPARATOR).ok_or_else(unsupported)?;
    let (command_name, param) = head.rsplit_once(' ').ok_or_else(malformed)?;

    let command = Command::from_name(command_name)
        .ok_or_else(|| ParseError::UnknownCommand(command_name.to_string()))?;
    if !command.is_channel_voice() {
        return Err(unsupported());
    }

    let param = parse_number(param)
        .filter(|param| *param <= 127)
        .ok_or_else(malformed)?;
    let value = parse_number(value)
        .filter(|value| *value <= 127)
        .ok_or_else(malformed)?;

    Ok(SignatureFields {
        channel,
        command,
        param,
        value,
    })
}

/// Plain ASCII digits only; no sign, no whitespace.
fn parse_number(text: &str) -> Option<u8> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

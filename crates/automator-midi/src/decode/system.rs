//! System common and real-time messages (status 0xF0-0xFF).

use super::combine_14bit;
use crate::message::ShortMessage;

/// Indexed by the low nibble of the status byte.
const SYSTEM_MESSAGE_TEXT: [&str; 16] = [
    "System Exclusive (should not be in ShortMessage!)",
    "MTC Quarter Frame: ",
    "Song Position: ",
    "Song Select: ",
    "Undefined",
    "Undefined",
    "Tune Request",
    "End of SysEx (should not be in ShortMessage!)",
    "Timing clock",
    "Undefined",
    "Start",
    "Continue",
    "Stop",
    "Undefined",
    "Active Sensing",
    "System Reset",
];

const QUARTER_FRAME_TEXT: [&str; 8] = [
    "frame count LS: ",
    "frame count MS: ",
    "seconds count LS: ",
    "seconds count MS: ",
    "minutes count LS: ",
    "minutes count MS: ",
    "hours count LS: ",
    "hours count MS: ",
];

const FRAME_TYPE_TEXT: [&str; 4] = [
    "24 frames/second",
    "25 frames/second",
    "30 frames/second (drop)",
    "30 frames/second (non-drop)",
];

pub(super) fn render(msg: &ShortMessage) -> String {
    let index = msg.status & 0x0F;
    let text = SYSTEM_MESSAGE_TEXT[usize::from(index)];
    match index {
        0x1 => format!("{}{}", text, quarter_frame(msg.data1)),
        0x2 => format!("{}{}", text, combine_14bit(msg.data1, msg.data2)),
        0x3 => format!("{}{}", text, msg.data1),
        _ => text.to_string(),
    }
}

fn quarter_frame(data: u8) -> String {
    let kind = usize::from((data & 0x70) >> 4);
    if kind == 7 {
        // Hours MS carries the frame rate in bits 1-2.
        let frame_type = usize::from((data & 0x06) >> 1);
        format!(
            "{}{}, frame type: {}",
            QUARTER_FRAME_TEXT[kind],
            data & 0x01,
            FRAME_TYPE_TEXT[frame_type]
        )
    } else {
        format!("{}{}", QUARTER_FRAME_TEXT[kind], data & 0x0F)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_status(status: u8, data1: u8, data2: u8) -> String {
        render(&ShortMessage::new(status, data1, data2))
    }

    #[test]
    fn test_fixed_strings() {
        assert_eq!(
            render_status(0xF0, 0, 0),
            "System Exclusive (should not be in ShortMessage!)"
        );
        assert_eq!(render_status(0xF4, 0, 0), "Undefined");
        assert_eq!(render_status(0xF6, 0, 0), "Tune Request");
        assert_eq!(render_status(0xF8, 0, 0), "Timing clock");
        assert_eq!(render_status(0xFA, 0, 0), "Start");
        assert_eq!(render_status(0xFB, 0, 0), "Continue");
        assert_eq!(render_status(0xFC, 0, 0), "Stop");
        assert_eq!(render_status(0xFE, 0, 0), "Active Sensing");
        assert_eq!(render_status(0xFF, 0, 0), "System Reset");
    }

    #[test]
    fn test_song_position_and_select() {
        assert_eq!(render_status(0xF2, 0x00, 0x40), "Song Position: 8192");
        assert_eq!(render_status(0xF2, 0x05, 0x01), "Song Position: 133");
        assert_eq!(render_status(0xF3, 42, 0), "Song Select: 42");
    }

    #[test]
    fn test_quarter_frames() {
        assert_eq!(
            render_status(0xF1, 0x03, 0),
            "MTC Quarter Frame: frame count LS: 3"
        );
        assert_eq!(
            render_status(0xF1, 0x5C, 0),
            "MTC Quarter Frame: minutes count MS: 12"
        );
        assert_eq!(
            render_status(0xF1, 0x71, 0),
            "MTC Quarter Frame: hours count MS: 1, frame type: 24 frames/second"
        );
        assert_eq!(
            render_status(0xF1, 0x76, 0),
            "MTC Quarter Frame: hours count MS: 0, frame type: 30 frames/second (non-drop)"
        );
        assert_eq!(
            render_status(0xF1, 0x72, 0),
            "MTC Quarter Frame: hours count MS: 0, frame type: 25 frames/second"
        );
    }
}

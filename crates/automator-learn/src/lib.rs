//! Learned MIDI triggers for MIDI Automator.
//!
//! Each entry of the learned list is persisted as a MIDI signature. On load
//! the signature is parsed back into a message that live input is matched
//! against; entries whose signature cannot be parsed stay in the list but
//! never fire.
//!
//! ```
//! use automator_learn::TriggerManager;
//! use automator_midi::{RawMessage, ShortMessage};
//!
//! let manager = TriggerManager::new();
//! let id = manager.add_signature("channel 16: CONTROL CHANGE 1 value: 127");
//!
//! let incoming = RawMessage::from(ShortMessage::control_change(15, 1, 127));
//! assert_eq!(manager.process(&incoming).fired, vec![id]);
//! ```

pub mod error;
pub use error::{Error, Result};

pub mod manager;
pub use manager::{ProcessResult, TriggerManager};

pub mod trigger;
pub use trigger::{LearnedTrigger, TriggerId};

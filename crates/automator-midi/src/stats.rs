//! Decode counters, shared between MIDI callback threads.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Counters snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsSnapshot {
    pub short_messages: u64,
    pub short_bytes: u64,
    pub sysex_messages: u64,
    pub sysex_bytes: u64,
    pub meta_messages: u64,
    pub total_messages: u64,
}

/// Running message/byte counts, updated by every decode that carries them.
///
/// Inject one into a [`Decoder`](crate::Decoder) with `Arc` to share it
/// across devices.
#[derive(Debug, Default)]
pub struct DecodeStats {
    short_messages: AtomicU64,
    short_bytes: AtomicU64,
    sysex_messages: AtomicU64,
    sysex_bytes: AtomicU64,
    meta_messages: AtomicU64,
    total_messages: AtomicU64,
}

impl DecodeStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record_short(&self, bytes: usize) {
        self.short_messages.fetch_add(1, Ordering::Relaxed);
        self.short_bytes.fetch_add(bytes as u64, Ordering::Relaxed);
        self.total_messages.fetch_add(1, Ordering::Relaxed);
    }

    /// The 0xF7 of a continuation packet is not counted.
    pub(crate) fn record_sysex(&self, payload_len: usize, continuation: bool) {
        let status_byte = u64::from(!continuation);
        self.sysex_messages.fetch_add(1, Ordering::Relaxed);
        self.sysex_bytes
            .fetch_add(payload_len as u64 + status_byte, Ordering::Relaxed);
        self.total_messages.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_meta(&self) {
        self.meta_messages.fetch_add(1, Ordering::Relaxed);
        self.total_messages.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_other(&self) {
        self.total_messages.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            short_messages: self.short_messages.load(Ordering::Relaxed),
            short_bytes: self.short_bytes.load(Ordering::Relaxed),
            sysex_messages: self.sysex_messages.load(Ordering::Relaxed),
            sysex_bytes: self.sysex_bytes.load(Ordering::Relaxed),
            meta_messages: self.meta_messages.load(Ordering::Relaxed),
            total_messages: self.total_messages.load(Ordering::Relaxed),
        }
    }

    pub fn reset(&self) {
        for counter in [
            &self.short_messages,
            &self.short_bytes,
            &self.sysex_messages,
            &self.sysex_bytes,
            &self.meta_messages,
            &self.total_messages,
        ] {
            counter.store(0, Ordering::Relaxed);
        }
    }
}

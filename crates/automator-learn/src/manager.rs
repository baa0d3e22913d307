//! Learned trigger manager with MIDI learn support.

use crate::error::{Error, Result};
use crate::trigger::{LearnedTrigger, TriggerId};
use arc_swap::ArcSwap;
use automator_midi::{decode, normalize, RawMessage};
use dashmap::{DashMap, DashSet};
use parking_lot::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessResult {
    /// Enabled triggers matching the message, in ID order.
    pub fired: Vec<TriggerId>,
    /// Outcome of a learn that this message completed.
    pub learned: Option<Result<TriggerId>>,
}

#[derive(Debug, Clone, Copy)]
struct LearnState {
    /// `None` = learn a new entry.
    target: Option<TriggerId>,
}

pub struct TriggerManager {
    triggers: Arc<DashMap<TriggerId, LearnedTrigger>>,
    /// Signatures owned by built-in commands.
    reserved: DashSet<String>,
    next_id: AtomicU64,
    learn_state: ArcSwap<Option<LearnState>>,
    /// Serializes the duplicate check with the insert.
    bind_lock: Mutex<()>,
}

impl TriggerManager {
    pub fn new() -> Self {
        Self {
            triggers: Arc::new(DashMap::new()),
            reserved: DashSet::new(),
            next_id: AtomicU64::new(1),
            learn_state: ArcSwap::new(Arc::new(None)),
            bind_lock: Mutex::new(()),
        }
    }

    pub fn triggers_arc(&self) -> Arc<DashMap<TriggerId, LearnedTrigger>> {
        Arc::clone(&self.triggers)
    }

    /// Adds a persisted signature without a duplicate check.
    pub fn add_signature(&self, signature: impl Into<String>) -> TriggerId {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let trigger = LearnedTrigger::from_signature(signature);
        debug!("Loaded trigger {}: {}", id, trigger.signature());
        self.triggers.insert(id, trigger);
        id
    }

    /// Learns a message as a new entry.
    pub fn bind(&self, message: &RawMessage) -> Result<TriggerId> {
        let _guard = self.bind_lock.lock();
        let signature = decode(&normalize(message));
        self.check_unassigned(&signature, None)?;

        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        info!("Learned trigger {}: {}", id, signature);
        self.triggers.insert(id, LearnedTrigger::from_signature(signature));
        Ok(id)
    }

    /// Replaces the signature of an existing entry.
    pub fn rebind(&self, trigger_id: TriggerId, message: &RawMessage) -> Result<()> {
        let _guard = self.bind_lock.lock();
        if !self.triggers.contains_key(&trigger_id) {
            return Err(Error::UnknownTrigger(trigger_id));
        }

        let signature = decode(&normalize(message));
        self.check_unassigned(&signature, Some(trigger_id))?;

        if let Some(mut entry) = self.triggers.get_mut(&trigger_id) {
            let enabled = entry.enabled;
            info!("Re-learned trigger {}: {}", trigger_id, signature);
            *entry = LearnedTrigger::from_signature(signature);
            entry.enabled = enabled;
        }
        Ok(())
    }

    fn check_unassigned(&self, signature: &str, except: Option<TriggerId>) -> Result<()> {
        if self.reserved.contains(signature) {
            return Err(Error::DuplicateSignature {
                signature: signature.to_string(),
                existing: None,
            });
        }
        match self.find_by_signature(signature) {
            Some(existing) if Some(existing) != except => Err(Error::DuplicateSignature {
                signature: signature.to_string(),
                existing: Some(existing),
            }),
            _ => Ok(()),
        }
    }

    /// Claims a signature for a built-in command so it cannot be learned.
    pub fn reserve(&self, signature: impl Into<String>) {
        self.reserved.insert(signature.into());
    }

    pub fn is_reserved(&self, signature: &str) -> bool {
        self.reserved.contains(signature)
    }

    pub fn remove(&self, trigger_id: TriggerId) -> bool {
        self.triggers.remove(&trigger_id).is_some()
    }

    pub fn get(&self, trigger_id: TriggerId) -> Option<LearnedTrigger> {
        self.triggers
            .get(&trigger_id)
            .map(|entry| entry.value().clone())
    }

    /// All triggers in ID order.
    pub fn all(&self) -> Vec<(TriggerId, LearnedTrigger)> {
        let mut all: Vec<_> = self
            .triggers
            .iter()
            .map(|entry| (*entry.key(), entry.value().clone()))
            .collect();
        all.sort_unstable_by_key(|(id, _)| *id);
        all
    }

    /// Persisted form of the list, in ID order.
    pub fn signatures(&self) -> Vec<String> {
        self.all()
            .into_iter()
            .map(|(_, trigger)| trigger.signature().to_string())
            .collect()
    }

    /// Lowest ID carrying this exact signature.
    pub fn find_by_signature(&self, signature: &str) -> Option<TriggerId> {
        self.triggers
            .iter()
            .filter(|entry| entry.value().signature() == signature)
            .map(|entry| *entry.key())
            .min()
    }

    pub fn find_matches(&self, message: &RawMessage) -> Vec<TriggerId> {
        let mut ids: Vec<TriggerId> = self
            .triggers
            .iter()
            .filter(|entry| entry.value().matches(message))
            .map(|entry| *entry.key())
            .collect();
        ids.sort_unstable();
        ids
    }

    pub fn set_enabled(&self, trigger_id: TriggerId, enabled: bool) -> bool {
        if let Some(mut entry) = self.triggers.get_mut(&trigger_id) {
            entry.enabled = enabled;
            true
        } else {
            false
        }
    }

    pub fn len(&self) -> usize {
        self.triggers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triggers.is_empty()
    }

    pub fn clear_all(&self) {
        self.triggers.clear();
    }

    /// Arms learn mode. `target` re-learns an existing entry, `None` adds one.
    pub fn start_learn(&self, target: Option<TriggerId>) {
        self.learn_state
            .store(Arc::new(Some(LearnState { target })));
    }

    pub fn cancel_learn(&self) {
        self.learn_state.store(Arc::new(None));
    }

    pub fn is_learning(&self) -> bool {
        self.learn_state.load().is_some()
    }

    pub fn learn_target(&self) -> Option<TriggerId> {
        let guard = self.learn_state.load();
        guard.as_ref().as_ref().and_then(|state| state.target)
    }

    /// Processes a live message: completes learn if armed, otherwise
    /// reports the triggers it fires.
    ///
    /// Only channel voice messages complete a learn; clock and other system
    /// traffic passes through while learn stays armed. When callbacks race on
    /// one arming, exactly one of them learns.
    pub fn process(&self, message: &RawMessage) -> ProcessResult {
        let learn_guard = self.learn_state.load();
        if let Some(state) = **learn_guard {
            if !message.is_channel_voice() {
                return ProcessResult {
                    fired: vec![],
                    learned: None,
                };
            }

            // Disarm first so one arming completes exactly once.
            let prev = self
                .learn_state
                .compare_and_swap(&learn_guard, Arc::new(None));
            if !Arc::ptr_eq(&*prev, &*learn_guard) {
                return ProcessResult {
                    fired: vec![],
                    learned: None,
                };
            }

            let learned = match state.target {
                Some(target) => self.rebind(target, message).map(|()| target),
                None => self.bind(message),
            };
            if let Err(ref err) = learned {
                info!("MIDI learn rejected: {}", err);
            }

            return ProcessResult {
                fired: vec![],
                learned: Some(learned),
            };
        }

        ProcessResult {
            fired: self.find_matches(message),
            learned: None,
        }
    }
}

impl Default for TriggerManager {
    fn default() -> Self {
        Self::new()
    }
}

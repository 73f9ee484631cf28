use std::{collections::HashMap, sync::Arc};

use log::info;
use parking_lot::RwLock;

use hotwire_shared::SessionKey;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionInfo {
    pub key: SessionKey,
    pub label: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum SessionChange {
    Connected(SessionKey),
    Disconnected(SessionKey),
}

#[derive(Default)]
struct SessionTable {
    sessions: HashMap<SessionKey, SessionInfo>,
    next_key: u64,
    pending: Vec<SessionChange>,
}

/// The set of connected sessions, shared between the network callbacks that
/// connect and disconnect clients and the simulation thread that processes
/// their input.
///
/// Cloning gives another handle to the same registry. Membership queries take
/// the read lock; connect and disconnect take the write lock.
#[derive(Clone, Default)]
pub struct SessionRegistry {
    table: Arc<RwLock<SessionTable>>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new session and returns its key
    pub fn connect(&self, label: &str) -> SessionKey {
        let mut table = self.table.write();
        let key = SessionKey::new(table.next_key);
        table.next_key += 1;
        table.sessions.insert(
            key,
            SessionInfo {
                key,
                label: label.to_string(),
            },
        );
        table.pending.push(SessionChange::Connected(key));
        info!("session {} connected ({})", key.to_u64(), label);
        key
    }

    /// Removes a session. Returns false if it was not connected.
    pub fn disconnect(&self, key: &SessionKey) -> bool {
        let mut table = self.table.write();
        let Some(session) = table.sessions.remove(key) else {
            return false;
        };
        table.pending.push(SessionChange::Disconnected(*key));
        info!("session {} disconnected ({})", key.to_u64(), session.label);
        true
    }

    pub fn contains(&self, key: &SessionKey) -> bool {
        self.table.read().sessions.contains_key(key)
    }

    /// Keys of every connected session, in connection order
    pub fn keys(&self) -> Vec<SessionKey> {
        let mut keys: Vec<SessionKey> = self.table.read().sessions.keys().copied().collect();
        keys.sort();
        keys
    }

    pub fn info(&self, key: &SessionKey) -> Option<SessionInfo> {
        self.table.read().sessions.get(key).cloned()
    }

    pub fn len(&self) -> usize {
        self.table.read().sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.read().sessions.is_empty()
    }

    /// Whether `key` is connected and its connection has already been
    /// drained by the simulation thread
    pub(crate) fn is_settled(&self, key: &SessionKey) -> bool {
        let table = self.table.read();
        table.sessions.contains_key(key)
            && !table
                .pending
                .iter()
                .any(|change| *change == SessionChange::Connected(*key))
    }

    /// Takes the connects and disconnects made since the last call, in order
    pub(crate) fn drain_changes(&self) -> Vec<SessionChange> {
        std::mem::take(&mut self.table.write().pending)
    }
}

use std::fmt;

use crate::key::{error::KeyComboError, key::Key};

pub const MAX_MODIFIERS: usize = 3;

/// A base key plus up to three modifier keys.
///
/// Modifiers are stored in descending key-code order with empty slots filled
/// by [`Key::None`], so combos built from the same keys in any order compare
/// equal and pack to the same [`KeyCombo::value`].
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    base: Key,
    modifiers: [Key; MAX_MODIFIERS],
}

impl KeyCombo {
    pub fn new(base: Key) -> Result<Self, KeyComboError> {
        Self::with_modifiers(base, &[])
    }

    pub fn with_modifiers(base: Key, modifiers: &[Key]) -> Result<Self, KeyComboError> {
        if base.is_none() {
            return Err(KeyComboError::MissingBaseKey);
        }

        let mut present: Vec<Key> = modifiers.iter().copied().filter(|k| !k.is_none()).collect();
        if present.len() > MAX_MODIFIERS {
            return Err(KeyComboError::TooManyModifiers {
                count: present.len(),
                max: MAX_MODIFIERS,
            });
        }

        present.sort_unstable_by(|a, b| b.cmp(a));
        for (index, key) in present.iter().enumerate() {
            if *key == base || present[index + 1..].contains(key) {
                return Err(KeyComboError::DuplicateKey { key: *key });
            }
        }

        let mut slots = [Key::None; MAX_MODIFIERS];
        slots[..present.len()].copy_from_slice(&present);

        Ok(Self {
            base,
            modifiers: slots,
        })
    }

    /// Unpacks a value produced by [`KeyCombo::value`]
    pub fn from_value(value: u32) -> Option<Self> {
        let base = Key::from_code((value & 0xFF) as u8)?;
        let mut modifiers = Vec::with_capacity(MAX_MODIFIERS);
        for slot in 0..MAX_MODIFIERS {
            modifiers.push(Key::from_code(((value >> (8 * (slot + 1))) & 0xFF) as u8)?);
        }
        let combo = Self::with_modifiers(base, &modifiers).ok()?;
        if combo.value() == value {
            Some(combo)
        } else {
            None
        }
    }

    pub fn base(&self) -> Key {
        self.base
    }

    pub fn modifiers(&self) -> impl Iterator<Item = Key> + '_ {
        self.modifiers.iter().copied().filter(|k| !k.is_none())
    }

    /// Base key followed by every present modifier
    pub fn keys(&self) -> impl Iterator<Item = Key> + '_ {
        std::iter::once(self.base).chain(self.modifiers())
    }

    /// Packs the base key and the sorted modifier slots into one value
    pub fn value(&self) -> u32 {
        let mut value = u32::from(self.base.code());
        for (slot, key) in self.modifiers.iter().enumerate() {
            value |= u32::from(key.code()) << (8 * (slot + 1));
        }
        value
    }

    /// Number of keys in the combo, base key included
    pub fn size(&self) -> usize {
        1 + self.modifiers().count()
    }

    pub fn contains(&self, key: Key) -> bool {
        !key.is_none() && self.keys().any(|k| k == key)
    }

    /// Whether every key of `self` is also part of `other`, and the two differ
    pub fn is_sub_pattern_of(&self, other: &KeyCombo) -> bool {
        self != other && self.keys().all(|key| other.contains(key))
    }
}

impl fmt::Display for KeyCombo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut modifiers: Vec<Key> = self.modifiers().collect();
        modifiers.reverse();
        for modifier in modifiers {
            write!(f, "{}+", modifier)?;
        }
        write!(f, "{}", self.base)
    }
}

impl fmt::Debug for KeyCombo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "KeyCombo({})", self)
    }
}

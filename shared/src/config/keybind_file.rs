use std::{io::ErrorKind, path::Path};

use log::{error, info};
use serde::Deserialize;

use crate::{
    binding::key_binding::{BindingKind, KeyBinding},
    config::error::{KeybindFileError, KeybindRecordError},
    function::function_registry::FunctionRegistry,
    key::{key::Key, key_combo::KeyCombo},
};

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct KeybindRecord {
    function: String,
    key: String,
    #[serde(default)]
    modifiers: Vec<String>,
    kind: BindingKind,
    #[serde(default)]
    can_focus: bool,
    #[serde(default)]
    can_repeat: bool,
    #[serde(default)]
    priority: i32,
}

/// The usable bindings of a keybind file, plus every record that was skipped
#[derive(Debug, Default)]
pub struct KeybindFile {
    pub bindings: Vec<KeyBinding>,
    pub rejected: Vec<KeybindRecordError>,
}

impl KeybindFile {
    /// Loads keybinds from `path`. A missing file yields no bindings.
    pub fn load(path: &Path, functions: &FunctionRegistry) -> Result<Self, KeybindFileError> {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!("no keybind file at {}, using no bindings", path.display());
                return Ok(Self::default());
            }
            Err(err) => {
                return Err(KeybindFileError::Io {
                    path: path.display().to_string(),
                    message: err.to_string(),
                });
            }
        };

        let file = Self::parse(&contents, functions)?;
        info!(
            "loaded {} keybinds from {} ({} rejected)",
            file.bindings.len(),
            path.display(),
            file.rejected.len()
        );
        Ok(file)
    }

    /// Parses a JSON array of keybind records. Malformed records are logged
    /// and skipped.
    pub fn parse(json: &str, functions: &FunctionRegistry) -> Result<Self, KeybindFileError> {
        let value: serde_json::Value =
            serde_json::from_str(json).map_err(|err| KeybindFileError::Parse {
                message: err.to_string(),
            })?;
        let serde_json::Value::Array(records) = value else {
            return Err(KeybindFileError::NotAnArray);
        };

        let mut file = Self::default();
        for (index, record) in records.into_iter().enumerate() {
            match Self::read_record(index, record, functions) {
                Ok(binding) => file.bindings.push(binding),
                Err(err) => {
                    error!("{}", err);
                    file.rejected.push(err);
                }
            }
        }
        Ok(file)
    }

    fn read_record(
        index: usize,
        value: serde_json::Value,
        functions: &FunctionRegistry,
    ) -> Result<KeyBinding, KeybindRecordError> {
        let record: KeybindRecord =
            serde_json::from_value(value).map_err(|err| KeybindRecordError::Malformed {
                index,
                message: err.to_string(),
            })?;

        let Some(function) = functions.get(&record.function) else {
            return Err(KeybindRecordError::UnknownFunction {
                index,
                function: record.function,
            });
        };

        let parse_key = |name: &str| {
            name.parse::<Key>()
                .map_err(|_| KeybindRecordError::UnknownKey {
                    index,
                    key: name.to_string(),
                })
        };
        let base = parse_key(&record.key)?;
        let modifiers = record
            .modifiers
            .iter()
            .map(|name| parse_key(name))
            .collect::<Result<Vec<Key>, _>>()?;

        let combo = KeyCombo::with_modifiers(base, &modifiers)
            .map_err(|source| KeybindRecordError::InvalidCombo { index, source })?;

        Ok(KeyBinding::new(function, combo)
            .kind(record.kind)
            .can_focus(record.can_focus)
            .can_repeat(record.can_repeat)
            .priority(record.priority))
    }
}

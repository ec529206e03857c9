//! External configuration and settings seams.
//!
//! Two distinct stores feed the processor contract:
//!
//! - [`ConfigStore`]: the hierarchical project configuration (package → module
//!   → project scopes). Scope resolution lives entirely behind the trait; the
//!   only contract this crate relies on is "returns a boolean, with a defined
//!   default on a total miss". This core reads booleans only.
//! - [`SettingsStore`]: opaque persisted editor-level preferences, consulted by
//!   [`Processor::is_enabled`](crate::processor::Processor::is_enabled).

use std::collections::HashMap;

use crate::ast::ClassDecl;

/// Stable handle for a boolean configuration key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigKey {
    /// `accessors.fluent` — accessor names are the bare (stripped) field name.
    AccessorsFluent,
    /// `accessors.chain` — setters return the receiver for chaining.
    AccessorsChain,
    /// `getter.no_is_prefix` — boolean getters use `get` instead of `is`.
    GetterNoIsPrefix,
    /// `getter.lazy` — getters memoize their computed value.
    GetterLazy,
    /// `builder.chain_setters` — builder setters return the builder.
    BuilderChainSetters,
}

/// Metadata entry for a configuration key.
#[derive(Debug, Clone, Copy)]
pub struct ConfigKeyInfo {
    pub key: ConfigKey,
    /// Canonical dotted path as spelled in configuration files.
    pub path: &'static str,
    /// Defined default, applied when no scope declares the key.
    pub default: bool,
}

/// Registry of boolean configuration keys read by this core.
pub const CONFIG_KEYS: &[ConfigKeyInfo] = &[
    info(ConfigKey::AccessorsFluent, "accessors.fluent", false),
    info(ConfigKey::AccessorsChain, "accessors.chain", false),
    info(ConfigKey::GetterNoIsPrefix, "getter.no_is_prefix", false),
    info(ConfigKey::GetterLazy, "getter.lazy", false),
    info(ConfigKey::BuilderChainSetters, "builder.chain_setters", true),
];

/// Return the canonical dotted path for a key.
pub fn path_for(key: ConfigKey) -> &'static str {
    info_for(key).path
}

/// Return the defined default for a key.
pub fn default_for(key: ConfigKey) -> bool {
    info_for(key).default
}

/// Return the metadata entry for a key.
pub fn info_for(key: ConfigKey) -> &'static ConfigKeyInfo {
    CONFIG_KEYS.iter().find(|k| k.key == key).expect("config key info missing")
}

const fn info(key: ConfigKey, path: &'static str, default: bool) -> ConfigKeyInfo {
    ConfigKeyInfo { key, path, default }
}

/// Hierarchical boolean configuration lookup.
///
/// Implementations resolve `key` through whatever scope chain they maintain
/// for `class` (package, module, project). A miss at every scope must resolve
/// to the key's defined default — never to an error.
pub trait ConfigStore {
    fn get_boolean(&self, key: ConfigKey, class: &ClassDecl) -> bool;
}

/// In-memory [`ConfigStore`] with a per-class layer over a global layer.
///
/// The per-class layer wins; a miss in both falls back to the key's registry
/// default. This is the store used in tests and small embeddings; real hosts
/// plug in their own hierarchical resolver.
#[derive(Debug, Clone, Default)]
pub struct MapConfigStore {
    global: HashMap<ConfigKey, bool>,
    per_class: HashMap<(String, ConfigKey), bool>,
}

impl MapConfigStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a value at the global (project) layer.
    pub fn with_global(mut self, key: ConfigKey, value: bool) -> Self {
        self.global.insert(key, value);
        self
    }

    /// Set a value for one class, shadowing the global layer.
    pub fn with_for_class(mut self, class_name: impl Into<String>, key: ConfigKey, value: bool) -> Self {
        self.per_class.insert((class_name.into(), key), value);
        self
    }
}

impl ConfigStore for MapConfigStore {
    fn get_boolean(&self, key: ConfigKey, class: &ClassDecl) -> bool {
        if let Some(value) = self.per_class.get(&(class.name.clone(), key)) {
            return *value;
        }
        self.global.get(&key).copied().unwrap_or_else(|| default_for(key))
    }
}

/// Opaque persisted editor-level preferences.
pub trait SettingsStore {
    /// Read a boolean preference, with the caller-supplied default on a miss.
    fn get_bool(&self, key: &str, default: bool) -> bool;
}

/// In-memory [`SettingsStore`]; an empty store answers every query with the
/// supplied default.
#[derive(Debug, Clone, Default)]
pub struct MemorySettings {
    values: HashMap<String, bool>,
}

impl MemorySettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(mut self, key: impl Into<String>, value: bool) -> Self {
        self.values.insert(key.into(), value);
        self
    }
}

impl SettingsStore for MemorySettings {
    fn get_bool(&self, key: &str, default: bool) -> bool {
        self.values.get(key).copied().unwrap_or(default)
    }
}

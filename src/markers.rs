//! Annotation marker vocabulary registry.
//!
//! This module centralizes recognized synthesis-request spellings so downstream
//! code doesn't need stringly-typed comparisons. A marker has one canonical
//! spelling and zero or more alias spellings; lookup treats them identically.

/// Stable identifier for supported annotation markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkerId {
    Getter,
    Setter,
    With,
    Builder,
    Data,
    Value,
    Accessors,
    Tolerate,
    NoArgsConstructor,
    AllArgsConstructor,
    RequiredArgsConstructor,
}

/// Named argument for `@accessors(prefix=[...])`.
pub const ACCESSORS_PREFIX_ARG: &str = "prefix";

/// Named argument for `@accessors(fluent=...)`.
pub const ACCESSORS_FLUENT_ARG: &str = "fluent";

/// Named argument for `@accessors(chain=...)`.
pub const ACCESSORS_CHAIN_ARG: &str = "chain";

/// Named argument for `@getter(lazy=...)`.
pub const GETTER_LAZY_ARG: &str = "lazy";

/// Forwarding argument: annotations to copy onto a generated method.
pub const ON_METHOD_ARG: &str = "on_method";

/// Forwarding argument: annotations to copy onto a generated parameter.
pub const ON_PARAM_ARG: &str = "on_param";

/// Forwarding argument: annotations to copy onto a generated constructor.
pub const ON_CONSTRUCTOR_ARG: &str = "on_constructor";

/// Metadata entry for a marker.
#[derive(Debug, Clone, Copy)]
pub struct MarkerInfo {
    pub id: MarkerId,
    pub canonical: &'static str,
    pub aliases: &'static [&'static str],
    pub description: &'static str,
}

/// Registry of supported markers.
pub const MARKERS: &[MarkerInfo] = &[
    info(MarkerId::Getter, "getter", &[], "Synthesize a read accessor for a field."),
    info(MarkerId::Setter, "setter", &[], "Synthesize a write accessor for a field."),
    info(
        MarkerId::With,
        "with",
        &["wither"],
        "Synthesize a copy-with-replacement method for a field.",
    ),
    info(MarkerId::Builder, "builder", &[], "Synthesize a builder type for a class."),
    info(
        MarkerId::Data,
        "data",
        &[],
        "Synthesize accessors, equality and string formatting for a class.",
    ),
    info(
        MarkerId::Value,
        "value",
        &["immutable"],
        "Synthesize an immutable value class (read accessors only).",
    ),
    info(
        MarkerId::Accessors,
        "accessors",
        &[],
        "Configure accessor naming (prefix stripping, fluent/chain style).",
    ),
    info(
        MarkerId::Tolerate,
        "tolerate",
        &[],
        "Mark a hand-written member as exempt from duplicate-generation conflicts.",
    ),
    info(
        MarkerId::NoArgsConstructor,
        "no_args_constructor",
        &[],
        "Synthesize a constructor taking no arguments.",
    ),
    info(
        MarkerId::AllArgsConstructor,
        "all_args_constructor",
        &[],
        "Synthesize a constructor taking every field.",
    ),
    info(
        MarkerId::RequiredArgsConstructor,
        "required_args_constructor",
        &[],
        "Synthesize a constructor taking the required fields.",
    ),
];

/// Resolve a spelling (canonical or alias) to its stable id.
pub fn from_str(name: &str) -> Option<MarkerId> {
    if let Some(info) = MARKERS.iter().find(|m| m.canonical == name) {
        return Some(info.id);
    }
    MARKERS
        .iter()
        .find(|m| {
            let aliases: &[&str] = m.aliases;
            aliases.contains(&name)
        })
        .map(|m| m.id)
}

/// Return the canonical spelling for a marker.
pub fn as_str(id: MarkerId) -> &'static str {
    info_for(id).canonical
}

/// Return the metadata entry for a marker.
pub fn info_for(id: MarkerId) -> &'static MarkerInfo {
    MARKERS.iter().find(|m| m.id == id).expect("marker info missing")
}

const fn info(
    id: MarkerId,
    canonical: &'static str,
    aliases: &'static [&'static str],
    description: &'static str,
) -> MarkerInfo {
    MarkerInfo {
        id,
        canonical,
        aliases,
        description,
    }
}

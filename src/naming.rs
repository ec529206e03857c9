//! Accessor naming conventions (prefix stripping, fluent style, boolean forms).
//!
//! All helpers here are pure: the derived name is a function of the field's
//! identity, its own `@accessors` overrides and the enclosing scope's
//! configuration, never of processing order.

use crate::ast::{ClassDecl, FieldDecl};
use crate::config::{ConfigKey, ConfigStore};
use crate::markers::{self, MarkerId};

/// Which accessor form a name is derived for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessorKind {
    Getter,
    Setter,
}

/// Resolved naming convention for one field.
///
/// Built per field at resolution time; not cached across calls.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AccessorsInfo {
    /// Field-name prefixes to strip before deriving the accessor name.
    pub prefixes: Vec<String>,
    /// Fluent style: the accessor is named after the bare field.
    pub fluent: bool,
    /// Chained setters: setters return the receiver.
    pub chain: bool,
    /// Use `get` even for primitive-boolean fields.
    pub no_is_prefix: bool,
}

impl AccessorsInfo {
    /// Resolve the naming convention for a field.
    ///
    /// Resolution order: an `@accessors` annotation on the field itself, else
    /// one on the enclosing class, else the configuration store. The prefix
    /// list comes only from annotations (the store is boolean-valued); the
    /// `no_is_prefix` policy comes only from configuration.
    ///
    /// ## Notes
    /// - `chain` left undeclared defaults to `fluent` when that is set, which
    ///   keeps fluent accessors chainable without extra spelling.
    pub fn build(field: &FieldDecl, class: &ClassDecl, config: &dyn ConfigStore) -> Self {
        let annotation = field
            .find_annotation(MarkerId::Accessors)
            .or_else(|| class.find_annotation(MarkerId::Accessors));

        let prefixes = annotation
            .map(|a| a.declared_strings(markers::ACCESSORS_PREFIX_ARG))
            .unwrap_or_default();
        let fluent = annotation
            .and_then(|a| a.declared_bool(markers::ACCESSORS_FLUENT_ARG))
            .unwrap_or_else(|| config.get_boolean(ConfigKey::AccessorsFluent, class));
        let chain = annotation
            .and_then(|a| a.declared_bool(markers::ACCESSORS_CHAIN_ARG))
            .unwrap_or_else(|| fluent || config.get_boolean(ConfigKey::AccessorsChain, class));
        let no_is_prefix = config.get_boolean(ConfigKey::GetterNoIsPrefix, class);

        Self {
            prefixes,
            fluent,
            chain,
            no_is_prefix,
        }
    }
}

/// Strip the first matching configured prefix from a field name.
///
/// A non-empty prefix matches when the name starts with it and, if the prefix
/// ends in a letter, the following character is uppercase (`mValue`, not
/// `mature`). An empty prefix always matches. With no prefixes configured the
/// name passes through untouched.
///
/// ## Returns
/// - `Some(rest)`: the name with the prefix removed.
/// - `None`: a non-empty prefix list matched nothing; the field gets no
///   accessor under this convention.
pub fn strip_prefix<'a>(info: &AccessorsInfo, name: &'a str) -> Option<&'a str> {
    if info.prefixes.is_empty() {
        return Some(name);
    }
    for prefix in &info.prefixes {
        if prefix.is_empty() {
            return Some(name);
        }
        if let Some(rest) = name.strip_prefix(prefix.as_str()) {
            let prefix_ends_in_letter = prefix.chars().last().is_some_and(char::is_alphabetic);
            let rest_starts_upper = rest.chars().next().is_some_and(char::is_uppercase);
            if !prefix_ends_in_letter || rest_starts_upper {
                return Some(rest);
            }
        }
    }
    None
}

/// Derive the canonical accessor identifier for a field name.
///
/// ## Parameters
/// - `info`: resolved naming convention for the field.
/// - `field_name`: the raw declared field name.
/// - `is_primitive_bool`: whether the declared type is *exactly* primitive
///   bool (boxed/nullable booleans pass `false` and get the `get` form).
/// - `kind`: getter or setter form.
///
/// ## Returns
/// - `Some(name)`: e.g. `isActive` for boolean `active`, `getName` for `name`,
///   `setName` for a setter, the bare name under the fluent style.
/// - `None`: the configured prefixes matched nothing.
pub fn accessor_name(info: &AccessorsInfo, field_name: &str, is_primitive_bool: bool, kind: AccessorKind) -> Option<String> {
    let core = strip_prefix(info, field_name)?;
    if info.fluent {
        return Some(decapitalize(core));
    }
    let accessor_prefix = match kind {
        AccessorKind::Getter if is_primitive_bool && !info.no_is_prefix => "is",
        AccessorKind::Getter => "get",
        AccessorKind::Setter => "set",
    };
    let mut name = String::with_capacity(accessor_prefix.len() + core.len());
    name.push_str(accessor_prefix);
    name.push_str(&capitalize(core));
    Some(name)
}

/// Uppercase the first scalar of a name.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Lowercase the first scalar of a name.
pub fn decapitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{AnnotationInstance, PrimitiveKind, TypeRef};
    use crate::config::MapConfigStore;

    fn plain_info() -> AccessorsInfo {
        AccessorsInfo::default()
    }

    // ========================================
    // Case helper tests
    // ========================================

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("active"), "Active");
        assert_eq!(capitalize("Active"), "Active");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_decapitalize() {
        assert_eq!(decapitalize("Active"), "active");
        assert_eq!(decapitalize("active"), "active");
        assert_eq!(decapitalize(""), "");
    }

    // ========================================
    // Prefix stripping tests
    // ========================================

    #[test]
    fn test_no_prefixes_passes_through() {
        assert_eq!(strip_prefix(&plain_info(), "active"), Some("active"));
    }

    #[test]
    fn test_letter_prefix_requires_uppercase_follow() {
        let info = AccessorsInfo {
            prefixes: vec!["m".into()],
            ..Default::default()
        };
        assert_eq!(strip_prefix(&info, "mValue"), Some("Value"));
        // "mature" starts with "m" but is not a prefixed name.
        assert_eq!(strip_prefix(&info, "mature"), None);
    }

    #[test]
    fn test_non_letter_prefix_matches_any_follow() {
        let info = AccessorsInfo {
            prefixes: vec!["m_".into()],
            ..Default::default()
        };
        assert_eq!(strip_prefix(&info, "m_value"), Some("value"));
    }

    #[test]
    fn test_first_matching_prefix_wins() {
        let info = AccessorsInfo {
            prefixes: vec!["f".into(), "fld".into()],
            ..Default::default()
        };
        assert_eq!(strip_prefix(&info, "fldName"), Some("ldName"));
    }

    #[test]
    fn test_empty_prefix_always_matches() {
        let info = AccessorsInfo {
            prefixes: vec!["m".into(), "".into()],
            ..Default::default()
        };
        assert_eq!(strip_prefix(&info, "mature"), Some("mature"));
    }

    // ========================================
    // Accessor name derivation tests
    // ========================================

    #[test]
    fn test_boolean_getter_uses_is() {
        assert_eq!(
            accessor_name(&plain_info(), "active", true, AccessorKind::Getter),
            Some("isActive".into())
        );
    }

    #[test]
    fn test_non_boolean_getter_uses_get() {
        assert_eq!(
            accessor_name(&plain_info(), "active", false, AccessorKind::Getter),
            Some("getActive".into())
        );
    }

    #[test]
    fn test_setter_ignores_boolness() {
        assert_eq!(
            accessor_name(&plain_info(), "active", true, AccessorKind::Setter),
            Some("setActive".into())
        );
    }

    #[test]
    fn test_no_is_prefix_forces_get() {
        let info = AccessorsInfo {
            no_is_prefix: true,
            ..Default::default()
        };
        assert_eq!(
            accessor_name(&info, "active", true, AccessorKind::Getter),
            Some("getActive".into())
        );
    }

    #[test]
    fn test_fluent_name_is_bare_field() {
        let info = AccessorsInfo {
            fluent: true,
            ..Default::default()
        };
        assert_eq!(accessor_name(&info, "active", true, AccessorKind::Getter), Some("active".into()));
        assert_eq!(accessor_name(&info, "active", false, AccessorKind::Setter), Some("active".into()));
    }

    #[test]
    fn test_fluent_decapitalizes_stripped_core() {
        let info = AccessorsInfo {
            prefixes: vec!["m".into()],
            fluent: true,
            ..Default::default()
        };
        assert_eq!(accessor_name(&info, "mValue", false, AccessorKind::Getter), Some("value".into()));
    }

    #[test]
    fn test_unmatched_prefix_yields_no_name() {
        let info = AccessorsInfo {
            prefixes: vec!["m".into()],
            ..Default::default()
        };
        assert_eq!(accessor_name(&info, "active", false, AccessorKind::Getter), None);
    }

    // ========================================
    // AccessorsInfo::build resolution tests
    // ========================================

    #[test]
    fn test_build_field_annotation_wins_over_class() {
        let field = FieldDecl::new("name", TypeRef::Named("String".into()))
            .with_annotation(AnnotationInstance::new("accessors").with_bool_arg("fluent", false));
        let class = ClassDecl::new("Point")
            .with_annotation(AnnotationInstance::new("accessors").with_bool_arg("fluent", true));
        let info = AccessorsInfo::build(&field, &class, &MapConfigStore::new());
        assert!(!info.fluent);
    }

    #[test]
    fn test_build_class_annotation_wins_over_config() {
        let field = FieldDecl::new("name", TypeRef::Named("String".into()));
        let class = ClassDecl::new("Point")
            .with_annotation(AnnotationInstance::new("accessors").with_bool_arg("fluent", true));
        let config = MapConfigStore::new().with_global(ConfigKey::AccessorsFluent, false);
        let info = AccessorsInfo::build(&field, &class, &config);
        assert!(info.fluent);
    }

    #[test]
    fn test_build_falls_back_to_config() {
        let field = FieldDecl::new("name", TypeRef::Named("String".into()));
        let class = ClassDecl::new("Point");
        let config = MapConfigStore::new().with_global(ConfigKey::AccessorsFluent, true);
        let info = AccessorsInfo::build(&field, &class, &config);
        assert!(info.fluent);
    }

    #[test]
    fn test_build_chain_defaults_to_fluent() {
        let field = FieldDecl::new("name", TypeRef::Named("String".into()))
            .with_annotation(AnnotationInstance::new("accessors").with_bool_arg("fluent", true));
        let class = ClassDecl::new("Point");
        let info = AccessorsInfo::build(&field, &class, &MapConfigStore::new());
        assert!(info.chain);
    }

    #[test]
    fn test_build_reads_prefixes_from_annotation() {
        let field = FieldDecl::new("mValue", TypeRef::Primitive(PrimitiveKind::Int))
            .with_annotation(AnnotationInstance::new("accessors").with_str_list_arg("prefix", ["m"]));
        let class = ClassDecl::new("Point");
        let info = AccessorsInfo::build(&field, &class, &MapConfigStore::new());
        assert_eq!(info.prefixes, vec!["m".to_string()]);
    }

    #[test]
    fn test_build_is_pure() {
        let field = FieldDecl::new("active", TypeRef::Primitive(PrimitiveKind::Bool));
        let class = ClassDecl::new("Point");
        let config = MapConfigStore::new().with_global(ConfigKey::GetterNoIsPrefix, true);
        let first = AccessorsInfo::build(&field, &class, &config);
        let second = AccessorsInfo::build(&field, &class, &config);
        assert_eq!(first, second);
    }
}

//! The processor contract shared by every member-synthesis rule.
//!
//! A *processor* recognizes one or more annotation markers on a class (or its
//! fields) and synthesizes new members for it. This module provides the
//! behavior every concrete rule composes with:
//!
//! - marker registration (primary + equivalent spellings, fixed at construction),
//! - target-kind declaration,
//! - enable/disable gating against persisted editor settings,
//! - accessor-name derivation under the resolved naming convention,
//! - tolerated-member filtering,
//! - the universal "explicit annotation value beats inherited configuration"
//!   boolean resolution, and
//! - forwarded-annotation injection onto generated elements.
//!
//! Concrete rules (getter/setter/builder/constructor synthesis) live in the
//! embedding host; a dispatcher there selects which rule applies to which
//! annotation.

use crate::ast::{AnnotationInstance, ClassDecl, FieldDecl, GeneratedElement, MemberCandidate, ModifierList, TargetKind};
use crate::config::{ConfigKey, ConfigStore, SettingsStore};
use crate::context::GenerationContext;
use crate::errors::ProcessorError;
use crate::markers::MarkerId;
use crate::naming::{self, AccessorKind, AccessorsInfo};

/// How a synthesis rule uses a field, for unused-field diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldUsage {
    /// The rule does not touch the field.
    #[default]
    None,
    Read,
    Write,
    ReadWrite,
}

/// Fixed per-processor identity: recognized markers and emitted node kind.
///
/// Built once, immutable afterwards. Concrete rules hold one and expose it
/// through [`Processor::base`].
#[derive(Debug, Clone)]
pub struct ProcessorBase {
    /// Primary marker first, equivalents after, declaration order preserved.
    markers: Vec<MarkerId>,
    target: TargetKind,
}

impl ProcessorBase {
    /// Build the identity for a processor.
    ///
    /// ## Parameters
    /// - `target`: the kind of AST node this processor may emit.
    /// - `markers`: primary marker first, then equivalent markers, in the
    ///   order diagnostics should enumerate them.
    ///
    /// ## Errors
    /// - [`ProcessorError::EmptyMarkerSet`] when `markers` is empty; the
    ///   primary marker is mandatory and this is rejected here, not at first
    ///   use.
    pub fn new(target: TargetKind, markers: Vec<MarkerId>) -> Result<Self, ProcessorError> {
        if markers.is_empty() {
            return Err(ProcessorError::EmptyMarkerSet);
        }
        Ok(Self { markers, target })
    }

    /// The recognized markers, primary first. Same slice, same order, on
    /// every call for the lifetime of the processor.
    pub fn supported_markers(&self) -> &[MarkerId] {
        &self.markers
    }

    /// The primary marker (always present).
    pub fn primary_marker(&self) -> MarkerId {
        self.markers[0]
    }

    /// The kind of AST node this processor may emit.
    pub fn target_kind(&self) -> TargetKind {
        self.target
    }

    /// Check whether an annotation spells any recognized marker.
    pub fn recognizes(&self, annotation: &AnnotationInstance) -> bool {
        self.markers.iter().any(|marker| annotation.is_marker(*marker))
    }
}

/// The contract every member-synthesis rule satisfies.
///
/// Default methods carry the shared policy; `collect_processed_annotations`
/// has no default, so the contract cannot be satisfied without deciding which
/// annotations a rule consumes.
pub trait Processor {
    /// The fixed identity (markers + target kind) declared at construction.
    fn base(&self) -> &ProcessorBase;

    /// The recognized markers, primary first, stable across calls.
    fn supported_markers(&self) -> &[MarkerId] {
        self.base().supported_markers()
    }

    /// The kind of AST node this processor may emit.
    fn target_kind(&self) -> TargetKind {
        self.base().target_kind()
    }

    /// Whether this rule is switched on. Pure predicate; callers must not
    /// assume the result is cached.
    fn is_enabled(&self, _settings: &dyn SettingsStore) -> bool {
        true
    }

    /// Whether synthesized bodies should be fully elaborated this session.
    fn should_generate_full_body(&self, ctx: &GenerationContext) -> bool {
        ctx.full_body()
    }

    /// Synthesize members for a class. The default synthesizes nothing.
    fn process(&self, _class: &ClassDecl) -> Vec<GeneratedElement> {
        Vec::new()
    }

    /// Report which annotation instances on `class` (or its members) this
    /// rule consumed, for downstream consistency/highlighting.
    fn collect_processed_annotations(&self, class: &ClassDecl) -> Vec<AnnotationInstance>;

    /// Report how the synthesis uses a field, for unused-field diagnostics.
    fn classify_field_usage(&self, _field: &FieldDecl, _annotation: &AnnotationInstance) -> FieldUsage {
        FieldUsage::None
    }

    /// Derive the canonical read-accessor name for a field.
    ///
    /// Resolves the field's naming convention, detects whether the declared
    /// type is exactly primitive bool, and applies the convention:
    /// `isActive` for a primitive-bool `active`, `getActive` for a boxed or
    /// nullable one. Deterministic and side-effect-free.
    ///
    /// ## Returns
    /// - `None` when the convention's prefixes match nothing; such fields get
    ///   no accessor.
    fn resolve_accessor_name(&self, field: &FieldDecl, class: &ClassDecl, config: &dyn ConfigStore) -> Option<String> {
        let info = AccessorsInfo::build(field, class, config);
        naming::accessor_name(&info, &field.name, field.ty.is_primitive_bool(), AccessorKind::Getter)
    }
}

/// Drop every candidate carrying the `tolerate` marker.
///
/// A tolerated member is a hand-written member whose signature generation must
/// not conflict with. Returns a new sequence; relative order and identity of
/// the remaining candidates are preserved. Empty input is a no-op.
pub fn filter_tolerated(candidates: Vec<MemberCandidate>) -> Vec<MemberCandidate> {
    candidates
        .into_iter()
        .filter(|candidate| !candidate.is_annotated_with(MarkerId::Tolerate))
        .collect()
}

/// Resolve a boolean feature toggle with the universal precedence rule:
/// explicit per-use annotation value beats inherited configuration.
///
/// ## Parameters
/// - `annotation`: the processed annotation instance.
/// - `class`: the enclosing class, used as the configuration scope anchor.
/// - `option_name`: the annotation argument that may declare the value.
/// - `key`: the configuration key consulted when the argument is undeclared.
/// - `config`: the hierarchical configuration store.
pub fn resolve_boolean_option(
    annotation: &AnnotationInstance,
    class: &ClassDecl,
    option_name: &str,
    key: ConfigKey,
    config: &dyn ConfigStore,
) -> bool {
    match annotation.declared_bool(option_name) {
        Some(declared) => declared,
        None => config.get_boolean(key, class),
    }
}

/// Copy forwarded annotations from a source annotation onto a generated
/// element's modifier list.
///
/// No-op when `source` is absent. Otherwise every fragment declared under
/// `parameter_name` (e.g. `on_method = ["@NotNull"]`) is appended verbatim, in
/// declaration order, after any pre-existing entries. No deduplication: a
/// caller invoking this twice for the same target gets the fragments twice.
#[tracing::instrument(skip_all, fields(parameter = parameter_name))]
pub fn add_forwarded_annotations(source: Option<&AnnotationInstance>, target: &mut ModifierList, parameter_name: &str) {
    let Some(annotation) = source else {
        return;
    };
    let fragments = annotation.declared_strings(parameter_name);
    if !fragments.is_empty() {
        tracing::debug!(count = fragments.len(), "forwarding annotations onto generated element");
    }
    for fragment in fragments {
        target.add_annotation(fragment);
    }
}

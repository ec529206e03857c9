#![forbid(unsafe_code)]
//! Processor contract and shared helpers for annotation-driven member synthesis.
//!
//! Given a parsed class declaration annotated with markers requesting generated
//! behavior (accessors, builders, constructors), a *processor* produces new
//! members to be merged into that class. This crate is the shared layer every
//! concrete rule builds on: marker recognition (including aliases), canonical
//! accessor-name derivation, tolerated-member suppression, the universal
//! annotation-beats-configuration boolean resolution, and forwarded-annotation
//! injection. The concrete per-feature rules and the dispatcher that selects
//! them live in the embedding host.
//!
//! ## Panic Policy
//!
//! This codebase follows explicit error handling:
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`.
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//! - **True invariants**: If a panic represents a bug (logic error), use
//!   `.expect("reason")` with a clear explanation.

pub mod ast;
pub mod config;
pub mod context;
pub mod errors;
pub mod markers;
pub mod naming;
pub mod processor;

pub use ast::{
    AnnotationInstance, AnnotationValue, ClassDecl, FieldDecl, GeneratedElement, MemberCandidate, ModifierList,
    PrimitiveKind, TargetKind, TypeRef,
};
pub use config::{ConfigKey, ConfigStore, MapConfigStore, MemorySettings, SettingsStore};
pub use context::GenerationContext;
pub use errors::ProcessorError;
pub use markers::MarkerId;
pub use naming::{AccessorKind, AccessorsInfo};
pub use processor::{
    FieldUsage, Processor, ProcessorBase, add_forwarded_annotations, filter_tolerated, resolve_boolean_option,
};

//! Class/annotation data model consumed by synthesis processors.
//!
//! This is a deliberately small, owned data model: processors only ever *read*
//! classes, fields and annotations, and *append* to modifier lists. Parsing
//! source text into these structures is the embedding frontend's job.

use crate::markers::{self, MarkerId};

/// Identifier (interned string index in practice, String for simplicity here)
pub type Ident = String;

/// The category of AST node a processor is permitted to emit.
///
/// Every processor declares exactly one target kind at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetKind {
    Method,
    Field,
    Class,
    InnerClass,
}

/// Builtin value categories with dedicated type spellings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    Bool,
    Int,
    Float,
    Str,
}

/// A declared type reference.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeRef {
    /// Builtin primitive: `bool`, `int`, ...
    Primitive(PrimitiveKind),
    /// Named (class/boxed) type: `Boolean`, `String`, `MyType`
    Named(Ident),
    /// Nullable wrapper: `Bool?`
    Optional(Box<TypeRef>),
    /// Generic type: `List[T]`, `Map[K, V]`
    Generic(Ident, Vec<TypeRef>),
}

impl TypeRef {
    /// Check whether this is *exactly* the primitive boolean type.
    ///
    /// ## Notes
    /// - Boxed (`Named("Boolean")`) and nullable (`Optional(bool)`) booleans
    ///   are intentionally **not** primitive booleans: accessor naming uses
    ///   the `get` form for those, never `is`.
    pub fn is_primitive_bool(&self) -> bool {
        matches!(self, TypeRef::Primitive(PrimitiveKind::Bool))
    }
}

/// A value declared for a named annotation argument.
#[derive(Debug, Clone, PartialEq)]
pub enum AnnotationValue {
    Bool(bool),
    Str(String),
    List(Vec<AnnotationValue>),
}

/// A named argument on an annotation: `@getter(lazy = true)`.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotationArg {
    pub name: Ident,
    pub value: AnnotationValue,
}

/// A concrete annotation occurrence attached to a class, field or member.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotationInstance {
    pub name: Ident,
    pub args: Vec<AnnotationArg>,
}

impl AnnotationInstance {
    pub fn new(name: impl Into<Ident>) -> Self {
        Self {
            name: name.into(),
            args: Vec::new(),
        }
    }

    /// Attach a boolean argument (builder-style, mainly for embedders/tests).
    pub fn with_bool_arg(mut self, name: impl Into<Ident>, value: bool) -> Self {
        self.args.push(AnnotationArg {
            name: name.into(),
            value: AnnotationValue::Bool(value),
        });
        self
    }

    /// Attach a string argument.
    pub fn with_str_arg(mut self, name: impl Into<Ident>, value: impl Into<String>) -> Self {
        self.args.push(AnnotationArg {
            name: name.into(),
            value: AnnotationValue::Str(value.into()),
        });
        self
    }

    /// Attach a list-of-strings argument.
    pub fn with_str_list_arg<I, S>(mut self, name: impl Into<Ident>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.push(AnnotationArg {
            name: name.into(),
            value: AnnotationValue::List(values.into_iter().map(|s| AnnotationValue::Str(s.into())).collect()),
        });
        self
    }

    /// Look up a declared argument value by name.
    pub fn declared(&self, arg: &str) -> Option<&AnnotationValue> {
        self.args.iter().find(|a| a.name == arg).map(|a| &a.value)
    }

    /// Read an explicitly declared boolean argument.
    ///
    /// ## Returns
    /// - `Some(value)` when the argument is declared as a boolean.
    /// - `None` when the argument is absent or not a boolean — callers fall
    ///   back to configuration in that case.
    pub fn declared_bool(&self, arg: &str) -> Option<bool> {
        match self.declared(arg) {
            Some(AnnotationValue::Bool(v)) => Some(*v),
            _ => None,
        }
    }

    /// Collect the string fragments declared under an argument.
    ///
    /// A single string and a list of strings are both accepted; declaration
    /// order is preserved. Non-string entries are ignored.
    pub fn declared_strings(&self, arg: &str) -> Vec<String> {
        match self.declared(arg) {
            Some(AnnotationValue::Str(s)) => vec![s.clone()],
            Some(AnnotationValue::List(items)) => items
                .iter()
                .filter_map(|item| match item {
                    AnnotationValue::Str(s) => Some(s.clone()),
                    _ => None,
                })
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Check whether this annotation spells the given marker (canonical or alias).
    pub fn is_marker(&self, marker: MarkerId) -> bool {
        markers::from_str(&self.name) == Some(marker)
    }
}

/// A class field: name, declared type, attached annotations.
///
/// Read-only to synthesis processors.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDecl {
    pub name: Ident,
    pub ty: TypeRef,
    pub annotations: Vec<AnnotationInstance>,
}

impl FieldDecl {
    pub fn new(name: impl Into<Ident>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
            annotations: Vec::new(),
        }
    }

    pub fn with_annotation(mut self, annotation: AnnotationInstance) -> Self {
        self.annotations.push(annotation);
        self
    }

    /// Find the first attached annotation matching a marker.
    pub fn find_annotation(&self, marker: MarkerId) -> Option<&AnnotationInstance> {
        self.annotations.iter().find(|a| a.is_marker(marker))
    }
}

/// An existing or previously generated class member, subject to tolerated-member
/// filtering before synthesis is finalized.
#[derive(Debug, Clone, PartialEq)]
pub struct MemberCandidate {
    pub name: Ident,
    pub annotations: Vec<AnnotationInstance>,
}

impl MemberCandidate {
    pub fn new(name: impl Into<Ident>) -> Self {
        Self {
            name: name.into(),
            annotations: Vec::new(),
        }
    }

    pub fn with_annotation(mut self, annotation: AnnotationInstance) -> Self {
        self.annotations.push(annotation);
        self
    }

    pub fn is_annotated_with(&self, marker: MarkerId) -> bool {
        self.annotations.iter().any(|a| a.is_marker(marker))
    }
}

/// A parsed class declaration processors synthesize members for.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassDecl {
    pub name: Ident,
    pub annotations: Vec<AnnotationInstance>,
    pub fields: Vec<FieldDecl>,
    pub members: Vec<MemberCandidate>,
}

impl ClassDecl {
    pub fn new(name: impl Into<Ident>) -> Self {
        Self {
            name: name.into(),
            annotations: Vec::new(),
            fields: Vec::new(),
            members: Vec::new(),
        }
    }

    pub fn with_annotation(mut self, annotation: AnnotationInstance) -> Self {
        self.annotations.push(annotation);
        self
    }

    pub fn with_field(mut self, field: FieldDecl) -> Self {
        self.fields.push(field);
        self
    }

    pub fn with_member(mut self, member: MemberCandidate) -> Self {
        self.members.push(member);
        self
    }

    /// Find the first class-level annotation matching a marker.
    pub fn find_annotation(&self, marker: MarkerId) -> Option<&AnnotationInstance> {
        self.annotations.iter().find(|a| a.is_marker(marker))
    }
}

/// The ordered annotation list of a (generated) element.
///
/// Append-only from the processor contract's point of view; no deduplication
/// is performed on insertion.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModifierList {
    pub annotations: Vec<String>,
}

impl ModifierList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an annotation in source-text form (e.g. `"@NotNull"`).
    pub fn add_annotation(&mut self, text: impl Into<String>) {
        self.annotations.push(text.into());
    }
}

/// A member synthesized by a processor, to be merged into the class.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedElement {
    pub kind: TargetKind,
    pub name: Ident,
    pub modifiers: ModifierList,
    /// Whether the body was fully elaborated or left as a minimal stub.
    pub full_body: bool,
}

impl GeneratedElement {
    pub fn new(kind: TargetKind, name: impl Into<Ident>) -> Self {
        Self {
            kind,
            name: name.into(),
            modifiers: ModifierList::new(),
            full_body: false,
        }
    }
}

//! Node definitions.
//!
//! Nodes live in the `Ast` arena and point at each other by `NodeId`.
//! Kinds that share a shape share a payload variant; the `kind` field
//! says which one it is (`Wrapped` is a decorator, a parenthesized
//! expression, a spread, ...).

use crate::syntax_kind::SyntaxKind;
use crate::types::*;
use tscheck_core::intern::InternedString;
use tscheck_core::text::TextRange;
use tscheck_diagnostics::Diagnostic;

// ============================================================================
// Core Node
// ============================================================================

#[derive(Debug, Clone)]
pub struct Node {
    pub kind: SyntaxKind,
    /// Source range, leading trivia included.
    pub range: TextRange,
    pub flags: NodeFlags,
    /// Computed from `modifiers` by `AstBuilder::finish_file`.
    pub modifier_flags: ModifierFlags,
    pub parent: Option<NodeId>,
    /// Declared symbol (set by the binder).
    pub symbol: Option<SymbolId>,
    /// Local half of an exported declaration (set by the binder).
    pub local_symbol: Option<SymbolId>,
    pub payload: NodePayload,
}

impl Node {
    pub fn new(kind: SyntaxKind, payload: NodePayload) -> Self {
        Self {
            kind,
            range: TextRange::default(),
            flags: NodeFlags::NONE,
            modifier_flags: ModifierFlags::NONE,
            parent: None,
            symbol: None,
            local_symbol: None,
            payload,
        }
    }

    #[inline]
    pub fn pos(&self) -> u32 {
        self.range.pos
    }

    #[inline]
    pub fn end(&self) -> u32 {
        self.range.end
    }
}

/// An ordered child list with its own range.
#[derive(Debug, Clone, Default)]
pub struct NodeList {
    pub nodes: Vec<NodeId>,
    /// Position just after the opening delimiter.
    pub pos: u32,
    /// Position of the closing delimiter, trailing comma included before it.
    pub end: u32,
    pub has_trailing_comma: bool,
}

impl NodeList {
    pub fn new(nodes: Vec<NodeId>) -> Self {
        Self {
            nodes,
            ..Default::default()
        }
    }

    pub fn with_trailing_comma(nodes: Vec<NodeId>) -> Self {
        Self {
            nodes,
            has_trailing_comma: true,
            ..Default::default()
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> std::iter::Copied<std::slice::Iter<'_, NodeId>> {
        self.nodes.iter().copied()
    }

    #[inline]
    pub fn first(&self) -> Option<NodeId> {
        self.nodes.first().copied()
    }

    #[inline]
    pub fn last(&self) -> Option<NodeId> {
        self.nodes.last().copied()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<NodeId> {
        self.nodes.get(index).copied()
    }
}

impl<'a> IntoIterator for &'a NodeList {
    type Item = NodeId;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, NodeId>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ============================================================================
// Payloads
// ============================================================================

#[derive(Debug, Clone)]
pub enum NodePayload {
    /// Keywords, punctuation, `this` types, empty/debugger statements.
    Token,
    /// `Identifier` and `PrivateIdentifier` (text keeps the `#`).
    Identifier { text: InternedString },
    /// Literal tokens with their source text.
    Literal { text: String },
    SourceFile(Box<SourceFileData>),
    QualifiedName { left: NodeId, right: NodeId },
    /// One-child wrappers: decorators, computed names, parenthesized
    /// and unary keyword expressions, spreads, non-null, expression
    /// and throw statements, simple type wrappers, module references.
    Wrapped { expression: NodeId },
    ReturnStatement { expression: Option<NodeId> },
    /// Blocks, type literals, tuples, unions, literals, binding
    /// patterns, named imports/exports, declaration lists.
    List(NodeList),
    FunctionLike(Box<FunctionLikeData>),
    ClassLike(Box<ClassLikeData>),
    VariableLike(Box<VariableLikeData>),
    TypeParameter {
        modifiers: Option<NodeList>,
        name: NodeId,
        constraint: Option<NodeId>,
        default: Option<NodeId>,
    },
    TypeAlias {
        modifiers: Option<NodeList>,
        name: NodeId,
        type_parameters: Option<NodeList>,
        type_node: NodeId,
    },
    Enum {
        modifiers: Option<NodeList>,
        name: NodeId,
        members: NodeList,
    },
    Module {
        modifiers: Option<NodeList>,
        name: NodeId,
        body: Option<NodeId>,
    },
    VariableStatement {
        modifiers: Option<NodeList>,
        declaration_list: NodeId,
    },
    HeritageClause {
        token: SyntaxKind,
        types: NodeList,
    },

    // -- Types --
    /// `TypeReference`, `ExpressionWithTypeArguments` and `TypeQuery`.
    TypeReference {
        type_name: NodeId,
        type_arguments: Option<NodeList>,
    },
    TypeOperator {
        operator: SyntaxKind,
        type_node: NodeId,
    },
    IndexedAccessType {
        object_type: NodeId,
        index_type: NodeId,
    },
    ConditionalType {
        check_type: NodeId,
        extends_type: NodeId,
        true_type: NodeId,
        false_type: NodeId,
    },
    InferType { type_parameter: NodeId },
    MappedType {
        readonly_token: Option<NodeId>,
        type_parameter: NodeId,
        name_type: Option<NodeId>,
        question_token: Option<NodeId>,
        type_node: Option<NodeId>,
        members: Option<NodeList>,
    },
    /// `TemplateExpression` and `TemplateLiteralType`.
    TemplateLiteral { head: NodeId, spans: NodeList },
    /// `TemplateSpan` and `TemplateLiteralTypeSpan`.
    TemplateSpan { expression: NodeId, literal: NodeId },
    TypePredicate {
        asserts_modifier: Option<NodeId>,
        parameter_name: NodeId,
        type_node: Option<NodeId>,
    },
    ImportType {
        is_type_of: bool,
        argument: NodeId,
        qualifier: Option<NodeId>,
        type_arguments: Option<NodeList>,
    },

    // -- Expressions --
    PropertyAccess {
        expression: NodeId,
        question_dot_token: Option<NodeId>,
        name: NodeId,
    },
    ElementAccess {
        expression: NodeId,
        question_dot_token: Option<NodeId>,
        argument_expression: NodeId,
    },
    /// `CallExpression` and `NewExpression` (arguments optional for `new`).
    Call {
        expression: NodeId,
        question_dot_token: Option<NodeId>,
        type_arguments: Option<NodeList>,
        arguments: Option<NodeList>,
    },
    TaggedTemplate {
        tag: NodeId,
        question_dot_token: Option<NodeId>,
        type_arguments: Option<NodeList>,
        template: NodeId,
    },
    /// `<T>x`, `x as T` and `x satisfies T`.
    TypeAssertion { expression: NodeId, type_node: NodeId },
    /// `PrefixUnaryExpression` and `PostfixUnaryExpression`.
    Unary { operator: SyntaxKind, operand: NodeId },
    Binary {
        left: NodeId,
        operator_token: NodeId,
        right: NodeId,
    },
    Conditional {
        condition: NodeId,
        when_true: NodeId,
        when_false: NodeId,
    },
    Yield {
        asterisk_token: Option<NodeId>,
        expression: Option<NodeId>,
    },
    MetaProperty { keyword_token: SyntaxKind, name: NodeId },

    // -- Statements --
    If {
        expression: NodeId,
        then_statement: NodeId,
        else_statement: Option<NodeId>,
    },
    /// `DoStatement` and `WhileStatement`.
    Loop { expression: NodeId, statement: NodeId },
    For {
        initializer: Option<NodeId>,
        condition: Option<NodeId>,
        incrementor: Option<NodeId>,
        statement: NodeId,
    },
    ForInOrOf {
        await_modifier: Option<NodeId>,
        initializer: NodeId,
        expression: NodeId,
        statement: NodeId,
    },
    /// `BreakStatement` and `ContinueStatement`.
    Jump { label: Option<NodeId> },
    With { expression: NodeId, statement: NodeId },
    Switch { expression: NodeId, case_block: NodeId },
    Labeled { label: NodeId, statement: NodeId },
    Try {
        try_block: NodeId,
        catch_clause: Option<NodeId>,
        finally_block: Option<NodeId>,
    },
    CatchClause {
        variable_declaration: Option<NodeId>,
        block: NodeId,
    },
    /// `CaseClause` and `DefaultClause`.
    CaseClause {
        expression: Option<NodeId>,
        statements: NodeList,
    },

    // -- Modules --
    ImportDeclaration {
        modifiers: Option<NodeList>,
        import_clause: Option<NodeId>,
        module_specifier: NodeId,
    },
    ImportEquals {
        modifiers: Option<NodeList>,
        is_type_only: bool,
        name: NodeId,
        module_reference: NodeId,
    },
    ImportClause {
        is_type_only: bool,
        name: Option<NodeId>,
        named_bindings: Option<NodeId>,
    },
    /// `NamespaceImport`, `NamespaceExport`, `NamespaceExportDeclaration`.
    Named {
        modifiers: Option<NodeList>,
        name: NodeId,
    },
    /// `ImportSpecifier` and `ExportSpecifier`.
    Specifier {
        is_type_only: bool,
        property_name: Option<NodeId>,
        name: NodeId,
    },
    ExportAssignment {
        modifiers: Option<NodeList>,
        is_export_equals: bool,
        expression: NodeId,
    },
    ExportDeclaration {
        modifiers: Option<NodeList>,
        is_type_only: bool,
        export_clause: Option<NodeId>,
        module_specifier: Option<NodeId>,
    },
}

/// Functions, methods, accessors, constructors, signatures, function
/// and constructor types, class static blocks.
#[derive(Debug, Clone, Default)]
pub struct FunctionLikeData {
    pub modifiers: Option<NodeList>,
    pub asterisk_token: Option<NodeId>,
    pub name: Option<NodeId>,
    /// `?` on a method, `!` is a parse error but still recorded.
    pub postfix_token: Option<NodeId>,
    pub type_parameters: Option<NodeList>,
    pub parameters: NodeList,
    pub type_node: Option<NodeId>,
    pub equals_greater_than_token: Option<NodeId>,
    pub body: Option<NodeId>,
}

/// Class declarations and expressions, interfaces.
#[derive(Debug, Clone, Default)]
pub struct ClassLikeData {
    pub modifiers: Option<NodeList>,
    pub name: Option<NodeId>,
    pub type_parameters: Option<NodeList>,
    pub heritage_clauses: Option<NodeList>,
    pub members: NodeList,
}

/// Parameters, properties, variable declarations, binding elements,
/// object literal properties, enum members, named tuple members.
#[derive(Debug, Clone)]
pub struct VariableLikeData {
    pub modifiers: Option<NodeList>,
    pub dot_dot_dot_token: Option<NodeId>,
    /// Binding element `a: b` keeps `a` here.
    pub property_name: Option<NodeId>,
    pub name: NodeId,
    /// `?` or `!`.
    pub postfix_token: Option<NodeId>,
    pub type_node: Option<NodeId>,
    /// For shorthand properties this is the `= value` of `{ a = value }`.
    pub initializer: Option<NodeId>,
}

impl VariableLikeData {
    pub fn named(name: NodeId) -> Self {
        Self {
            modifiers: None,
            dot_dot_dot_token: None,
            property_name: None,
            name,
            postfix_token: None,
            type_node: None,
            initializer: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SourceFileData {
    pub statements: NodeList,
    pub file_name: String,
    /// Position of the file in program order.
    pub file_index: u32,
    pub is_declaration_file: bool,
    /// First top-level import/export, if the file is a module.
    pub external_module_indicator: Option<NodeId>,
    pub parse_diagnostics: Vec<Diagnostic>,
    /// Source text the node ranges index into.
    pub text: String,
}

impl SourceFileData {
    #[inline]
    pub fn is_external_module(&self) -> bool {
        self.external_module_indicator.is_some()
    }

    #[inline]
    pub fn has_parse_diagnostics(&self) -> bool {
        !self.parse_diagnostics.is_empty()
    }
}

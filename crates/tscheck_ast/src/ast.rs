//! The node arena and its views.
//!
//! `Ast` owns every node of every file in a program. Accessors return
//! `None` when a node's shape has no such part, so callers can ask any
//! node for its `name`, `body`, ... without first matching on the kind.

use crate::node::*;
use crate::syntax_kind::SyntaxKind;
use crate::types::*;
use crate::visitor::{visit_children, Child};
use tscheck_core::intern::StringInterner;
use tscheck_core::text::{line_of_position, skip_trivia, TextRange, TextSpan};

#[derive(Debug, Clone)]
pub struct Ast {
    nodes: Vec<Node>,
    files: Vec<NodeId>,
    interner: StringInterner,
}

impl Ast {
    pub fn new(interner: StringInterner) -> Self {
        Self {
            nodes: Vec::new(),
            files: Vec::new(),
            interner,
        }
    }

    pub(crate) fn alloc(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    pub(crate) fn push_file(&mut self, file: NodeId) {
        self.files.push(file);
    }

    #[inline]
    pub fn interner(&self) -> &StringInterner {
        &self.interner
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Source files in program order.
    #[inline]
    pub fn files(&self) -> &[NodeId] {
        &self.files
    }

    #[inline]
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    #[inline]
    pub fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.index()]
    }

    #[inline]
    pub fn kind(&self, id: NodeId) -> SyntaxKind {
        self.node(id).kind
    }

    #[inline]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).parent
    }

    #[inline]
    pub fn flags(&self, id: NodeId) -> NodeFlags {
        self.node(id).flags
    }

    #[inline]
    pub fn modifier_flags(&self, id: NodeId) -> ModifierFlags {
        self.node(id).modifier_flags
    }

    #[inline]
    pub fn range(&self, id: NodeId) -> TextRange {
        self.node(id).range
    }

    #[inline]
    pub fn symbol(&self, id: NodeId) -> Option<SymbolId> {
        self.node(id).symbol
    }

    #[inline]
    pub fn local_symbol(&self, id: NodeId) -> Option<SymbolId> {
        self.node(id).local_symbol
    }

    // ========================================================================
    // Source files
    // ========================================================================

    /// Data of a `SourceFile` node. Panics on any other kind.
    pub fn source_file(&self, file: NodeId) -> &SourceFileData {
        match &self.node(file).payload {
            NodePayload::SourceFile(data) => data,
            _ => panic!("Node {} is not a source file: {:?}", file, self.kind(file)),
        }
    }

    pub(crate) fn source_file_mut(&mut self, file: NodeId) -> &mut SourceFileData {
        let kind = self.kind(file);
        match &mut self.node_mut(file).payload {
            NodePayload::SourceFile(data) => data,
            _ => panic!("Node {} is not a source file: {:?}", file, kind),
        }
    }

    /// The `SourceFile` node containing `id`.
    pub fn source_file_of(&self, id: NodeId) -> NodeId {
        let mut current = id;
        while let Some(parent) = self.parent(current) {
            current = parent;
        }
        debug_assert_eq!(self.kind(current), SyntaxKind::SourceFile);
        current
    }

    /// Data of the file containing `id`.
    pub fn file_of(&self, id: NodeId) -> &SourceFileData {
        self.source_file(self.source_file_of(id))
    }

    // ========================================================================
    // Text
    // ========================================================================

    /// Identifier or literal text, empty for other nodes.
    pub fn text(&self, id: NodeId) -> &str {
        match &self.node(id).payload {
            NodePayload::Identifier { text } => self.interner.resolve(*text),
            NodePayload::Literal { text } => text,
            _ => "",
        }
    }

    /// Source text of a node, leading trivia skipped.
    pub fn source_text(&self, id: NodeId) -> &str {
        let text = &self.file_of(id).text;
        let start = self.token_pos(id) as usize;
        let end = self.node(id).end() as usize;
        text.get(start..end).unwrap_or("")
    }

    /// Start of the first token of `id`.
    pub fn token_pos(&self, id: NodeId) -> u32 {
        skip_trivia(&self.file_of(id).text, self.node(id).pos())
    }

    /// Span of the first token of `id`.
    pub fn first_token_span(&self, id: NodeId) -> TextSpan {
        let text = &self.file_of(id).text;
        let start = skip_trivia(text, self.node(id).pos());
        TextSpan::from_bounds(start, scan_token_end(text, start))
    }

    /// Span used when reporting an error on `id`: the name of named
    /// declarations, the first token of some statements, the whole
    /// node (trivia skipped) otherwise.
    pub fn error_span(&self, id: NodeId) -> TextSpan {
        let node = self.node(id);
        let error_node = match node.kind {
            SyntaxKind::SourceFile => return TextSpan::new(0, 0),
            SyntaxKind::VariableDeclaration
            | SyntaxKind::BindingElement
            | SyntaxKind::ClassDeclaration
            | SyntaxKind::ClassExpression
            | SyntaxKind::InterfaceDeclaration
            | SyntaxKind::ModuleDeclaration
            | SyntaxKind::EnumDeclaration
            | SyntaxKind::EnumMember
            | SyntaxKind::FunctionDeclaration
            | SyntaxKind::FunctionExpression
            | SyntaxKind::MethodDeclaration
            | SyntaxKind::GetAccessor
            | SyntaxKind::SetAccessor
            | SyntaxKind::TypeAliasDeclaration
            | SyntaxKind::PropertyDeclaration
            | SyntaxKind::PropertySignature
            | SyntaxKind::NamespaceImport => self.name(id).unwrap_or(id),
            SyntaxKind::ReturnStatement
            | SyntaxKind::YieldExpression
            | SyntaxKind::CaseClause
            | SyntaxKind::DefaultClause => return self.first_token_span(id),
            SyntaxKind::Constructor => {
                let after_modifiers = self
                    .modifiers(id)
                    .and_then(|m| m.last())
                    .map(|last| self.node(last).end())
                    .unwrap_or(node.pos());
                let text = &self.file_of(id).text;
                let start = skip_trivia(text, after_modifiers);
                return TextSpan::from_bounds(start, scan_token_end(text, start));
            }
            SyntaxKind::ArrowFunction => {
                let start = self.token_pos(id);
                let end = self
                    .arrow_token(id)
                    .map(|arrow| self.node(arrow).end())
                    .unwrap_or(node.end());
                return TextSpan::from_bounds(start, end);
            }
            _ => id,
        };
        let start = self.token_pos(error_node);
        TextSpan::from_bounds(start, self.node(error_node).end().max(start))
    }

    /// Line (0-based) of a position in the file containing `id`.
    pub fn line_of(&self, id: NodeId, pos: u32) -> u32 {
        line_of_position(&self.file_of(id).text, pos)
    }

    // ========================================================================
    // Children
    // ========================================================================

    /// Call `f` on each direct child in source order, lists flattened.
    /// Stops and returns `true` as soon as `f` does.
    pub fn for_each_child(&self, id: NodeId, mut f: impl FnMut(NodeId) -> bool) -> bool {
        visit_children(self.node(id), &mut |child| match child {
            Child::Node(c) => f(c),
            Child::List(_, list) => list.iter().any(&mut f),
        })
    }

    pub fn children(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        self.for_each_child(id, |c| {
            out.push(c);
            false
        });
        out
    }

    // ========================================================================
    // Views
    // ========================================================================

    pub fn name(&self, id: NodeId) -> Option<NodeId> {
        match &self.node(id).payload {
            NodePayload::FunctionLike(d) => d.name,
            NodePayload::ClassLike(d) => d.name,
            NodePayload::VariableLike(d) => Some(d.name),
            NodePayload::TypeParameter { name, .. }
            | NodePayload::TypeAlias { name, .. }
            | NodePayload::Enum { name, .. }
            | NodePayload::Module { name, .. }
            | NodePayload::ImportEquals { name, .. }
            | NodePayload::Named { name, .. }
            | NodePayload::Specifier { name, .. }
            | NodePayload::PropertyAccess { name, .. }
            | NodePayload::MetaProperty { name, .. } => Some(*name),
            NodePayload::ImportClause { name, .. } => *name,
            _ => None,
        }
    }

    pub fn modifiers(&self, id: NodeId) -> Option<&NodeList> {
        match &self.node(id).payload {
            NodePayload::FunctionLike(d) => d.modifiers.as_ref(),
            NodePayload::ClassLike(d) => d.modifiers.as_ref(),
            NodePayload::VariableLike(d) => d.modifiers.as_ref(),
            NodePayload::TypeParameter { modifiers, .. }
            | NodePayload::TypeAlias { modifiers, .. }
            | NodePayload::Enum { modifiers, .. }
            | NodePayload::Module { modifiers, .. }
            | NodePayload::VariableStatement { modifiers, .. }
            | NodePayload::ImportDeclaration { modifiers, .. }
            | NodePayload::ImportEquals { modifiers, .. }
            | NodePayload::Named { modifiers, .. }
            | NodePayload::ExportAssignment { modifiers, .. }
            | NodePayload::ExportDeclaration { modifiers, .. } => modifiers.as_ref(),
            _ => None,
        }
    }

    pub fn body(&self, id: NodeId) -> Option<NodeId> {
        match &self.node(id).payload {
            NodePayload::FunctionLike(d) => d.body,
            NodePayload::Module { body, .. } => *body,
            _ => None,
        }
    }

    pub fn initializer(&self, id: NodeId) -> Option<NodeId> {
        match &self.node(id).payload {
            NodePayload::VariableLike(d) => d.initializer,
            NodePayload::For { initializer, .. } => *initializer,
            NodePayload::ForInOrOf { initializer, .. } => Some(*initializer),
            _ => None,
        }
    }

    /// Type annotation, return type, or the wrapped type of type wrappers.
    pub fn type_node(&self, id: NodeId) -> Option<NodeId> {
        let node = self.node(id);
        match &node.payload {
            NodePayload::FunctionLike(d) => d.type_node,
            NodePayload::VariableLike(d) => d.type_node,
            NodePayload::TypeAlias { type_node, .. }
            | NodePayload::TypeOperator { type_node, .. }
            | NodePayload::TypeAssertion { type_node, .. } => Some(*type_node),
            NodePayload::MappedType { type_node, .. } | NodePayload::TypePredicate { type_node, .. } => {
                *type_node
            }
            NodePayload::Wrapped { expression } => match node.kind {
                SyntaxKind::ParenthesizedType | SyntaxKind::OptionalType | SyntaxKind::RestType => {
                    Some(*expression)
                }
                _ => None,
            },
            _ => None,
        }
    }

    pub fn parameters(&self, id: NodeId) -> Option<&NodeList> {
        match &self.node(id).payload {
            NodePayload::FunctionLike(d) => Some(&d.parameters),
            _ => None,
        }
    }

    pub fn type_parameters(&self, id: NodeId) -> Option<&NodeList> {
        match &self.node(id).payload {
            NodePayload::FunctionLike(d) => d.type_parameters.as_ref(),
            NodePayload::ClassLike(d) => d.type_parameters.as_ref(),
            NodePayload::TypeAlias { type_parameters, .. } => type_parameters.as_ref(),
            _ => None,
        }
    }

    pub fn type_arguments(&self, id: NodeId) -> Option<&NodeList> {
        match &self.node(id).payload {
            NodePayload::TypeReference { type_arguments, .. }
            | NodePayload::Call { type_arguments, .. }
            | NodePayload::TaggedTemplate { type_arguments, .. }
            | NodePayload::ImportType { type_arguments, .. } => type_arguments.as_ref(),
            _ => None,
        }
    }

    pub fn arguments(&self, id: NodeId) -> Option<&NodeList> {
        match &self.node(id).payload {
            NodePayload::Call { arguments, .. } => arguments.as_ref(),
            _ => None,
        }
    }

    pub fn members(&self, id: NodeId) -> Option<&NodeList> {
        let node = self.node(id);
        match &node.payload {
            NodePayload::ClassLike(d) => Some(&d.members),
            NodePayload::Enum { members, .. } => Some(members),
            NodePayload::MappedType { members, .. } => members.as_ref(),
            NodePayload::List(list) => match node.kind {
                SyntaxKind::TypeLiteral | SyntaxKind::ObjectLiteralExpression => Some(list),
                _ => None,
            },
            _ => None,
        }
    }

    pub fn statements(&self, id: NodeId) -> Option<&NodeList> {
        let node = self.node(id);
        match &node.payload {
            NodePayload::SourceFile(data) => Some(&data.statements),
            NodePayload::CaseClause { statements, .. } => Some(statements),
            NodePayload::List(list) => match node.kind {
                SyntaxKind::Block | SyntaxKind::ModuleBlock => Some(list),
                _ => None,
            },
            _ => None,
        }
    }

    /// Elements of a list-shaped node (patterns, literals, unions, ...).
    pub fn elements(&self, id: NodeId) -> Option<&NodeList> {
        match &self.node(id).payload {
            NodePayload::List(list) => Some(list),
            _ => None,
        }
    }

    pub fn heritage_clauses(&self, id: NodeId) -> Option<&NodeList> {
        match &self.node(id).payload {
            NodePayload::ClassLike(d) => d.heritage_clauses.as_ref(),
            _ => None,
        }
    }

    /// The main expression child of expression-bearing nodes.
    pub fn expression(&self, id: NodeId) -> Option<NodeId> {
        match &self.node(id).payload {
            NodePayload::Wrapped { expression }
            | NodePayload::PropertyAccess { expression, .. }
            | NodePayload::ElementAccess { expression, .. }
            | NodePayload::Call { expression, .. }
            | NodePayload::TypeAssertion { expression, .. }
            | NodePayload::If { expression, .. }
            | NodePayload::Loop { expression, .. }
            | NodePayload::ForInOrOf { expression, .. }
            | NodePayload::With { expression, .. }
            | NodePayload::Switch { expression, .. }
            | NodePayload::ExportAssignment { expression, .. }
            | NodePayload::TemplateSpan { expression, .. } => Some(*expression),
            NodePayload::ReturnStatement { expression }
            | NodePayload::Yield { expression, .. }
            | NodePayload::CaseClause { expression, .. } => *expression,
            NodePayload::TypeReference { type_name, .. } if self.kind(id) == SyntaxKind::ExpressionWithTypeArguments => {
                Some(*type_name)
            }
            _ => None,
        }
    }

    /// Loop, labeled and `with` statement bodies.
    pub fn statement(&self, id: NodeId) -> Option<NodeId> {
        match &self.node(id).payload {
            NodePayload::Loop { statement, .. }
            | NodePayload::For { statement, .. }
            | NodePayload::ForInOrOf { statement, .. }
            | NodePayload::With { statement, .. }
            | NodePayload::Labeled { statement, .. } => Some(*statement),
            _ => None,
        }
    }

    pub fn label(&self, id: NodeId) -> Option<NodeId> {
        match &self.node(id).payload {
            NodePayload::Jump { label } => *label,
            NodePayload::Labeled { label, .. } => Some(*label),
            _ => None,
        }
    }

    /// `?` or `!` after a name.
    pub fn postfix_token(&self, id: NodeId) -> Option<NodeId> {
        match &self.node(id).payload {
            NodePayload::FunctionLike(d) => d.postfix_token,
            NodePayload::VariableLike(d) => d.postfix_token,
            _ => None,
        }
    }

    pub fn question_token(&self, id: NodeId) -> Option<NodeId> {
        match &self.node(id).payload {
            NodePayload::MappedType { question_token, .. } => *question_token,
            _ => self
                .postfix_token(id)
                .filter(|&t| self.kind(t) == SyntaxKind::QuestionToken),
        }
    }

    pub fn exclamation_token(&self, id: NodeId) -> Option<NodeId> {
        self.postfix_token(id)
            .filter(|&t| self.kind(t) == SyntaxKind::ExclamationToken)
    }

    pub fn asterisk_token(&self, id: NodeId) -> Option<NodeId> {
        match &self.node(id).payload {
            NodePayload::FunctionLike(d) => d.asterisk_token,
            NodePayload::Yield { asterisk_token, .. } => *asterisk_token,
            _ => None,
        }
    }

    pub fn dot_dot_dot_token(&self, id: NodeId) -> Option<NodeId> {
        match &self.node(id).payload {
            NodePayload::VariableLike(d) => d.dot_dot_dot_token,
            _ => None,
        }
    }

    pub fn question_dot_token(&self, id: NodeId) -> Option<NodeId> {
        match &self.node(id).payload {
            NodePayload::PropertyAccess { question_dot_token, .. }
            | NodePayload::ElementAccess { question_dot_token, .. }
            | NodePayload::Call { question_dot_token, .. }
            | NodePayload::TaggedTemplate { question_dot_token, .. } => *question_dot_token,
            _ => None,
        }
    }

    pub fn arrow_token(&self, id: NodeId) -> Option<NodeId> {
        match &self.node(id).payload {
            NodePayload::FunctionLike(d) => d.equals_greater_than_token,
            _ => None,
        }
    }

    pub fn property_name(&self, id: NodeId) -> Option<NodeId> {
        match &self.node(id).payload {
            NodePayload::VariableLike(d) => d.property_name,
            NodePayload::Specifier { property_name, .. } => *property_name,
            _ => None,
        }
    }

    pub fn is_type_only(&self, id: NodeId) -> bool {
        match &self.node(id).payload {
            NodePayload::ImportEquals { is_type_only, .. }
            | NodePayload::ImportClause { is_type_only, .. }
            | NodePayload::Specifier { is_type_only, .. }
            | NodePayload::ExportDeclaration { is_type_only, .. } => *is_type_only,
            _ => false,
        }
    }
}

/// End of the token starting at `start` in builder-produced text.
fn scan_token_end(text: &str, start: u32) -> u32 {
    let bytes = text.as_bytes();
    let mut i = start as usize;
    if i >= bytes.len() {
        return start;
    }
    let quote = bytes[i];
    if matches!(quote, b'"' | b'\'' | b'`') {
        i += 1;
        while i < bytes.len() && bytes[i] != quote {
            i += 1;
        }
        return (i + 1).min(bytes.len()) as u32;
    }
    while i < bytes.len() && !matches!(bytes[i], b' ' | b'\t' | b'\n' | b'\r') {
        i += 1;
    }
    i as u32
}

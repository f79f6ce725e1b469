//! Programmatic tree construction.
//!
//! `AstBuilder` creates nodes bottom-up and `finish_file` turns a list of
//! top-level statements into a `SourceFile`. Finishing a file links
//! parents, computes modifier flags, propagates context flags and
//! synthesizes source text so every node gets a real range.

use crate::ast::Ast;
use crate::node::*;
use crate::syntax_kind::SyntaxKind;
use crate::types::*;
use crate::visitor::{for_each_list_mut, visit_children, Child, ListRole};
use rustc_hash::FxHashSet;
use tscheck_core::intern::StringInterner;
use tscheck_core::text::TextRange;
use tscheck_diagnostics::Diagnostic;

pub struct AstBuilder {
    ast: Ast,
    line_breaks: FxHashSet<NodeId>,
    pending_diagnostics: Vec<Diagnostic>,
}

impl Default for AstBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl AstBuilder {
    pub fn new() -> Self {
        Self::with_interner(StringInterner::new())
    }

    pub fn with_interner(interner: StringInterner) -> Self {
        Self {
            ast: Ast::new(interner),
            line_breaks: FxHashSet::default(),
            pending_diagnostics: Vec::new(),
        }
    }

    #[inline]
    pub fn ast(&self) -> &Ast {
        &self.ast
    }

    pub fn build(self) -> Ast {
        self.ast
    }

    // ========================================================================
    // Raw nodes
    // ========================================================================

    pub fn node(&mut self, kind: SyntaxKind, payload: NodePayload) -> NodeId {
        self.ast.alloc(Node::new(kind, payload))
    }

    pub fn token(&mut self, kind: SyntaxKind) -> NodeId {
        self.node(kind, NodePayload::Token)
    }

    pub fn list(&mut self, kind: SyntaxKind, elements: Vec<NodeId>) -> NodeId {
        self.node(kind, NodePayload::List(NodeList::new(elements)))
    }

    pub fn list_with_trailing_comma(&mut self, kind: SyntaxKind, elements: Vec<NodeId>) -> NodeId {
        self.node(kind, NodePayload::List(NodeList::with_trailing_comma(elements)))
    }

    pub fn wrap(&mut self, kind: SyntaxKind, expression: NodeId) -> NodeId {
        self.node(kind, NodePayload::Wrapped { expression })
    }

    pub fn function_like(&mut self, kind: SyntaxKind, data: FunctionLikeData) -> NodeId {
        self.node(kind, NodePayload::FunctionLike(Box::new(data)))
    }

    pub fn class_like(&mut self, kind: SyntaxKind, data: ClassLikeData) -> NodeId {
        self.node(kind, NodePayload::ClassLike(Box::new(data)))
    }

    pub fn variable_like(&mut self, kind: SyntaxKind, data: VariableLikeData) -> NodeId {
        self.node(kind, NodePayload::VariableLike(Box::new(data)))
    }

    /// OR `flags` into a node's flags (`CONST`, `NAMESPACE`, ...).
    pub fn set_flags(&mut self, id: NodeId, flags: NodeFlags) -> NodeId {
        self.ast.node_mut(id).flags |= flags;
        id
    }

    /// Start `id` on a new line in the synthesized text.
    pub fn line_break_before(&mut self, id: NodeId) -> NodeId {
        self.line_breaks.insert(id);
        id
    }

    /// Attach a parse diagnostic to the next finished file.
    pub fn add_parse_diagnostic(&mut self, diagnostic: Diagnostic) {
        self.pending_diagnostics.push(diagnostic);
    }

    // ========================================================================
    // Names and literals
    // ========================================================================

    pub fn identifier(&mut self, text: &str) -> NodeId {
        let text = self.ast.interner().intern(text);
        self.node(SyntaxKind::Identifier, NodePayload::Identifier { text })
    }

    /// `#name`; `name` is given without the `#`.
    pub fn private_identifier(&mut self, name: &str) -> NodeId {
        let text = self.ast.interner().intern(&format!("#{}", name));
        self.node(SyntaxKind::PrivateIdentifier, NodePayload::Identifier { text })
    }

    fn literal(&mut self, kind: SyntaxKind, text: &str) -> NodeId {
        self.node(kind, NodePayload::Literal { text: text.to_string() })
    }

    pub fn numeric_literal(&mut self, text: &str) -> NodeId {
        self.literal(SyntaxKind::NumericLiteral, text)
    }

    pub fn bigint_literal(&mut self, text: &str) -> NodeId {
        self.literal(SyntaxKind::BigIntLiteral, text)
    }

    /// String literal; `value` is the unquoted content.
    pub fn string_literal(&mut self, value: &str) -> NodeId {
        self.literal(SyntaxKind::StringLiteral, value)
    }

    pub fn regex_literal(&mut self, text: &str) -> NodeId {
        self.literal(SyntaxKind::RegularExpressionLiteral, text)
    }

    pub fn no_substitution_template(&mut self, value: &str) -> NodeId {
        self.literal(SyntaxKind::NoSubstitutionTemplateLiteral, value)
    }

    pub fn template_head(&mut self, value: &str) -> NodeId {
        self.literal(SyntaxKind::TemplateHead, value)
    }

    pub fn template_middle(&mut self, value: &str) -> NodeId {
        self.literal(SyntaxKind::TemplateMiddle, value)
    }

    pub fn template_tail(&mut self, value: &str) -> NodeId {
        self.literal(SyntaxKind::TemplateTail, value)
    }

    pub fn qualified_name(&mut self, left: NodeId, right: &str) -> NodeId {
        let right = self.identifier(right);
        self.node(SyntaxKind::QualifiedName, NodePayload::QualifiedName { left, right })
    }

    pub fn computed_property_name(&mut self, expression: NodeId) -> NodeId {
        self.wrap(SyntaxKind::ComputedPropertyName, expression)
    }

    // ========================================================================
    // Modifiers and small lists
    // ========================================================================

    /// Modifier tokens for `kinds`, `None` when empty.
    pub fn modifiers(&mut self, kinds: &[SyntaxKind]) -> Option<NodeList> {
        let nodes = kinds.iter().map(|&k| self.token(k)).collect();
        Self::modifier_list(nodes)
    }

    /// Modifier list from already-built decorators and modifier tokens.
    pub fn modifier_list(nodes: Vec<NodeId>) -> Option<NodeList> {
        Self::opt_list(nodes)
    }

    pub fn decorator(&mut self, expression: NodeId) -> NodeId {
        self.wrap(SyntaxKind::Decorator, expression)
    }

    /// `Some(list)` for non-empty `nodes`.
    pub fn opt_list(nodes: Vec<NodeId>) -> Option<NodeList> {
        if nodes.is_empty() {
            None
        } else {
            Some(NodeList::new(nodes))
        }
    }

    // ========================================================================
    // Declarations
    // ========================================================================

    pub fn type_parameter(&mut self, name: &str, constraint: Option<NodeId>, default: Option<NodeId>) -> NodeId {
        let name = self.identifier(name);
        self.node(
            SyntaxKind::TypeParameter,
            NodePayload::TypeParameter {
                modifiers: None,
                name,
                constraint,
                default,
            },
        )
    }

    /// `name: type_node`
    pub fn parameter(&mut self, name: &str, type_node: Option<NodeId>) -> NodeId {
        let name = self.identifier(name);
        self.variable_like(
            SyntaxKind::Parameter,
            VariableLikeData {
                type_node,
                ..VariableLikeData::named(name)
            },
        )
    }

    pub fn variable_declaration(
        &mut self,
        name: NodeId,
        type_node: Option<NodeId>,
        initializer: Option<NodeId>,
    ) -> NodeId {
        self.variable_like(
            SyntaxKind::VariableDeclaration,
            VariableLikeData {
                type_node,
                initializer,
                ..VariableLikeData::named(name)
            },
        )
    }

    /// `flags` is `NONE` for `var`, or `LET`, `CONST`, `USING`, `AWAIT_USING`.
    pub fn variable_declaration_list(&mut self, flags: NodeFlags, declarations: Vec<NodeId>) -> NodeId {
        let list = self.list(SyntaxKind::VariableDeclarationList, declarations);
        self.set_flags(list, flags)
    }

    pub fn variable_statement(
        &mut self,
        modifiers: Option<NodeList>,
        flags: NodeFlags,
        declarations: Vec<NodeId>,
    ) -> NodeId {
        let declaration_list = self.variable_declaration_list(flags, declarations);
        self.node(
            SyntaxKind::VariableStatement,
            NodePayload::VariableStatement {
                modifiers,
                declaration_list,
            },
        )
    }

    /// `let|const|var name = initializer;` with a plain identifier name.
    pub fn simple_variable(&mut self, flags: NodeFlags, name: &str, initializer: Option<NodeId>) -> NodeId {
        let name = self.identifier(name);
        let decl = self.variable_declaration(name, None, initializer);
        self.variable_statement(None, flags, vec![decl])
    }

    pub fn function_declaration(
        &mut self,
        modifiers: Option<NodeList>,
        name: &str,
        parameters: Vec<NodeId>,
        body: Option<Vec<NodeId>>,
    ) -> NodeId {
        let name = self.identifier(name);
        let body = body.map(|statements| self.block(statements));
        self.function_like(
            SyntaxKind::FunctionDeclaration,
            FunctionLikeData {
                modifiers,
                name: Some(name),
                parameters: NodeList::new(parameters),
                body,
                ..Default::default()
            },
        )
    }

    pub fn class_declaration(&mut self, modifiers: Option<NodeList>, name: &str, members: Vec<NodeId>) -> NodeId {
        let name = self.identifier(name);
        self.class_like(
            SyntaxKind::ClassDeclaration,
            ClassLikeData {
                modifiers,
                name: Some(name),
                members: NodeList::new(members),
                ..Default::default()
            },
        )
    }

    pub fn interface_declaration(&mut self, modifiers: Option<NodeList>, name: &str, members: Vec<NodeId>) -> NodeId {
        let name = self.identifier(name);
        self.class_like(
            SyntaxKind::InterfaceDeclaration,
            ClassLikeData {
                modifiers,
                name: Some(name),
                members: NodeList::new(members),
                ..Default::default()
            },
        )
    }

    pub fn heritage_clause(&mut self, token: SyntaxKind, types: Vec<NodeId>) -> NodeId {
        self.node(
            SyntaxKind::HeritageClause,
            NodePayload::HeritageClause {
                token,
                types: NodeList::new(types),
            },
        )
    }

    pub fn expression_with_type_arguments(&mut self, expression: NodeId, type_arguments: Vec<NodeId>) -> NodeId {
        self.node(
            SyntaxKind::ExpressionWithTypeArguments,
            NodePayload::TypeReference {
                type_name: expression,
                type_arguments: Self::opt_list(type_arguments),
            },
        )
    }

    pub fn property_declaration(
        &mut self,
        modifiers: Option<NodeList>,
        name: NodeId,
        type_node: Option<NodeId>,
        initializer: Option<NodeId>,
    ) -> NodeId {
        self.variable_like(
            SyntaxKind::PropertyDeclaration,
            VariableLikeData {
                modifiers,
                type_node,
                initializer,
                ..VariableLikeData::named(name)
            },
        )
    }

    pub fn property_signature(&mut self, name: NodeId, type_node: Option<NodeId>) -> NodeId {
        self.variable_like(
            SyntaxKind::PropertySignature,
            VariableLikeData {
                type_node,
                ..VariableLikeData::named(name)
            },
        )
    }

    pub fn method_declaration(
        &mut self,
        modifiers: Option<NodeList>,
        name: NodeId,
        parameters: Vec<NodeId>,
        body: Option<Vec<NodeId>>,
    ) -> NodeId {
        let body = body.map(|statements| self.block(statements));
        self.function_like(
            SyntaxKind::MethodDeclaration,
            FunctionLikeData {
                modifiers,
                name: Some(name),
                parameters: NodeList::new(parameters),
                body,
                ..Default::default()
            },
        )
    }

    pub fn constructor(
        &mut self,
        modifiers: Option<NodeList>,
        parameters: Vec<NodeId>,
        body: Option<Vec<NodeId>>,
    ) -> NodeId {
        let body = body.map(|statements| self.block(statements));
        self.function_like(
            SyntaxKind::Constructor,
            FunctionLikeData {
                modifiers,
                parameters: NodeList::new(parameters),
                body,
                ..Default::default()
            },
        )
    }

    /// `get name() { body }` or `set name(params) { body }`.
    pub fn accessor(
        &mut self,
        kind: SyntaxKind,
        modifiers: Option<NodeList>,
        name: NodeId,
        parameters: Vec<NodeId>,
        body: Option<Vec<NodeId>>,
    ) -> NodeId {
        debug_assert!(matches!(kind, SyntaxKind::GetAccessor | SyntaxKind::SetAccessor));
        let body = body.map(|statements| self.block(statements));
        self.function_like(
            kind,
            FunctionLikeData {
                modifiers,
                name: Some(name),
                parameters: NodeList::new(parameters),
                body,
                ..Default::default()
            },
        )
    }

    pub fn index_signature(
        &mut self,
        modifiers: Option<NodeList>,
        parameters: Vec<NodeId>,
        type_node: Option<NodeId>,
    ) -> NodeId {
        self.function_like(
            SyntaxKind::IndexSignature,
            FunctionLikeData {
                modifiers,
                parameters: NodeList::new(parameters),
                type_node,
                ..Default::default()
            },
        )
    }

    pub fn class_static_block(&mut self, statements: Vec<NodeId>) -> NodeId {
        let body = self.block(statements);
        self.function_like(
            SyntaxKind::ClassStaticBlockDeclaration,
            FunctionLikeData {
                body: Some(body),
                ..Default::default()
            },
        )
    }

    pub fn enum_declaration(&mut self, modifiers: Option<NodeList>, name: &str, members: Vec<NodeId>) -> NodeId {
        let name = self.identifier(name);
        self.node(
            SyntaxKind::EnumDeclaration,
            NodePayload::Enum {
                modifiers,
                name,
                members: NodeList::new(members),
            },
        )
    }

    pub fn enum_member(&mut self, name: NodeId, initializer: Option<NodeId>) -> NodeId {
        self.variable_like(
            SyntaxKind::EnumMember,
            VariableLikeData {
                initializer,
                ..VariableLikeData::named(name)
            },
        )
    }

    pub fn type_alias(
        &mut self,
        modifiers: Option<NodeList>,
        name: &str,
        type_parameters: Vec<NodeId>,
        type_node: NodeId,
    ) -> NodeId {
        let name = self.identifier(name);
        self.node(
            SyntaxKind::TypeAliasDeclaration,
            NodePayload::TypeAlias {
                modifiers,
                name,
                type_parameters: Self::opt_list(type_parameters),
                type_node,
            },
        )
    }

    /// `namespace N { ... }` when `flags` has `NAMESPACE`, `module "m"` for
    /// a string-literal name, `declare global` with `GLOBAL_AUGMENTATION`.
    pub fn module_declaration(
        &mut self,
        modifiers: Option<NodeList>,
        name: NodeId,
        body: Option<NodeId>,
        flags: NodeFlags,
    ) -> NodeId {
        let module = self.node(SyntaxKind::ModuleDeclaration, NodePayload::Module { modifiers, name, body });
        self.set_flags(module, flags)
    }

    pub fn module_block(&mut self, statements: Vec<NodeId>) -> NodeId {
        self.list(SyntaxKind::ModuleBlock, statements)
    }

    pub fn binding_element(
        &mut self,
        dot_dot_dot: bool,
        property_name: Option<NodeId>,
        name: NodeId,
        initializer: Option<NodeId>,
    ) -> NodeId {
        let dot_dot_dot_token = dot_dot_dot.then(|| self.token(SyntaxKind::DotDotDotToken));
        self.variable_like(
            SyntaxKind::BindingElement,
            VariableLikeData {
                dot_dot_dot_token,
                property_name,
                initializer,
                ..VariableLikeData::named(name)
            },
        )
    }

    // ========================================================================
    // Imports and exports
    // ========================================================================

    pub fn import_declaration(
        &mut self,
        modifiers: Option<NodeList>,
        import_clause: Option<NodeId>,
        module_specifier: &str,
    ) -> NodeId {
        let module_specifier = self.string_literal(module_specifier);
        self.node(
            SyntaxKind::ImportDeclaration,
            NodePayload::ImportDeclaration {
                modifiers,
                import_clause,
                module_specifier,
            },
        )
    }

    pub fn import_clause(&mut self, is_type_only: bool, name: Option<NodeId>, named_bindings: Option<NodeId>) -> NodeId {
        self.node(
            SyntaxKind::ImportClause,
            NodePayload::ImportClause {
                is_type_only,
                name,
                named_bindings,
            },
        )
    }

    pub fn namespace_import(&mut self, name: &str) -> NodeId {
        let name = self.identifier(name);
        self.node(SyntaxKind::NamespaceImport, NodePayload::Named { modifiers: None, name })
    }

    pub fn namespace_export(&mut self, name: &str) -> NodeId {
        let name = self.identifier(name);
        self.node(SyntaxKind::NamespaceExport, NodePayload::Named { modifiers: None, name })
    }

    /// `export as namespace name;`
    pub fn namespace_export_declaration(&mut self, name: &str) -> NodeId {
        let name = self.identifier(name);
        self.node(
            SyntaxKind::NamespaceExportDeclaration,
            NodePayload::Named { modifiers: None, name },
        )
    }

    /// `ImportSpecifier` or `ExportSpecifier`.
    pub fn specifier(
        &mut self,
        kind: SyntaxKind,
        is_type_only: bool,
        property_name: Option<&str>,
        name: &str,
    ) -> NodeId {
        let property_name = property_name.map(|p| self.identifier(p));
        let name = self.identifier(name);
        self.node(
            kind,
            NodePayload::Specifier {
                is_type_only,
                property_name,
                name,
            },
        )
    }

    pub fn import_equals(
        &mut self,
        modifiers: Option<NodeList>,
        is_type_only: bool,
        name: &str,
        module_reference: NodeId,
    ) -> NodeId {
        let name = self.identifier(name);
        self.node(
            SyntaxKind::ImportEqualsDeclaration,
            NodePayload::ImportEquals {
                modifiers,
                is_type_only,
                name,
                module_reference,
            },
        )
    }

    pub fn external_module_reference(&mut self, module: &str) -> NodeId {
        let specifier = self.string_literal(module);
        self.wrap(SyntaxKind::ExternalModuleReference, specifier)
    }

    pub fn export_declaration(
        &mut self,
        modifiers: Option<NodeList>,
        is_type_only: bool,
        export_clause: Option<NodeId>,
        module_specifier: Option<&str>,
    ) -> NodeId {
        let module_specifier = module_specifier.map(|m| self.string_literal(m));
        self.node(
            SyntaxKind::ExportDeclaration,
            NodePayload::ExportDeclaration {
                modifiers,
                is_type_only,
                export_clause,
                module_specifier,
            },
        )
    }

    /// `export = expression` or `export default expression`.
    pub fn export_assignment(&mut self, modifiers: Option<NodeList>, is_export_equals: bool, expression: NodeId) -> NodeId {
        self.node(
            SyntaxKind::ExportAssignment,
            NodePayload::ExportAssignment {
                modifiers,
                is_export_equals,
                expression,
            },
        )
    }

    // ========================================================================
    // Statements
    // ========================================================================

    pub fn block(&mut self, statements: Vec<NodeId>) -> NodeId {
        self.list(SyntaxKind::Block, statements)
    }

    pub fn expression_statement(&mut self, expression: NodeId) -> NodeId {
        self.wrap(SyntaxKind::ExpressionStatement, expression)
    }

    pub fn return_statement(&mut self, expression: Option<NodeId>) -> NodeId {
        self.node(SyntaxKind::ReturnStatement, NodePayload::ReturnStatement { expression })
    }

    pub fn throw_statement(&mut self, expression: NodeId) -> NodeId {
        self.wrap(SyntaxKind::ThrowStatement, expression)
    }

    pub fn if_statement(&mut self, expression: NodeId, then_statement: NodeId, else_statement: Option<NodeId>) -> NodeId {
        self.node(
            SyntaxKind::IfStatement,
            NodePayload::If {
                expression,
                then_statement,
                else_statement,
            },
        )
    }

    /// `while` or `do` loop.
    pub fn loop_statement(&mut self, kind: SyntaxKind, expression: NodeId, statement: NodeId) -> NodeId {
        debug_assert!(matches!(kind, SyntaxKind::WhileStatement | SyntaxKind::DoStatement));
        self.node(kind, NodePayload::Loop { expression, statement })
    }

    pub fn for_statement(
        &mut self,
        initializer: Option<NodeId>,
        condition: Option<NodeId>,
        incrementor: Option<NodeId>,
        statement: NodeId,
    ) -> NodeId {
        self.node(
            SyntaxKind::ForStatement,
            NodePayload::For {
                initializer,
                condition,
                incrementor,
                statement,
            },
        )
    }

    /// `for (initializer in|of expression) statement`; `is_await` adds
    /// the `await` modifier of `for await`.
    pub fn for_in_or_of(
        &mut self,
        kind: SyntaxKind,
        is_await: bool,
        initializer: NodeId,
        expression: NodeId,
        statement: NodeId,
    ) -> NodeId {
        let await_modifier = is_await.then(|| self.token(SyntaxKind::AwaitKeyword));
        self.node(
            kind,
            NodePayload::ForInOrOf {
                await_modifier,
                initializer,
                expression,
                statement,
            },
        )
    }

    /// `break` or `continue`, optionally labeled.
    pub fn jump(&mut self, kind: SyntaxKind, label: Option<&str>) -> NodeId {
        let label = label.map(|l| self.identifier(l));
        self.node(kind, NodePayload::Jump { label })
    }

    pub fn labeled_statement(&mut self, label: &str, statement: NodeId) -> NodeId {
        let label = self.identifier(label);
        self.node(SyntaxKind::LabeledStatement, NodePayload::Labeled { label, statement })
    }

    pub fn with_statement(&mut self, expression: NodeId, statement: NodeId) -> NodeId {
        self.node(SyntaxKind::WithStatement, NodePayload::With { expression, statement })
    }

    pub fn switch_statement(&mut self, expression: NodeId, clauses: Vec<NodeId>) -> NodeId {
        let case_block = self.list(SyntaxKind::CaseBlock, clauses);
        self.node(SyntaxKind::SwitchStatement, NodePayload::Switch { expression, case_block })
    }

    /// `case expression:` or, without an expression, `default:`.
    pub fn case_clause(&mut self, expression: Option<NodeId>, statements: Vec<NodeId>) -> NodeId {
        let kind = if expression.is_some() {
            SyntaxKind::CaseClause
        } else {
            SyntaxKind::DefaultClause
        };
        self.node(
            kind,
            NodePayload::CaseClause {
                expression,
                statements: NodeList::new(statements),
            },
        )
    }

    pub fn try_statement(&mut self, try_block: NodeId, catch_clause: Option<NodeId>, finally_block: Option<NodeId>) -> NodeId {
        self.node(
            SyntaxKind::TryStatement,
            NodePayload::Try {
                try_block,
                catch_clause,
                finally_block,
            },
        )
    }

    pub fn catch_clause(&mut self, variable_declaration: Option<NodeId>, block: NodeId) -> NodeId {
        self.node(
            SyntaxKind::CatchClause,
            NodePayload::CatchClause {
                variable_declaration,
                block,
            },
        )
    }

    // ========================================================================
    // Expressions
    // ========================================================================

    pub fn call(&mut self, expression: NodeId, arguments: Vec<NodeId>) -> NodeId {
        self.node(
            SyntaxKind::CallExpression,
            NodePayload::Call {
                expression,
                question_dot_token: None,
                type_arguments: None,
                arguments: Some(NodeList::new(arguments)),
            },
        )
    }

    pub fn new_expression(&mut self, expression: NodeId, arguments: Option<Vec<NodeId>>) -> NodeId {
        self.node(
            SyntaxKind::NewExpression,
            NodePayload::Call {
                expression,
                question_dot_token: None,
                type_arguments: None,
                arguments: arguments.map(NodeList::new),
            },
        )
    }

    /// `expression.name`, or `expression?.name` with `optional`.
    pub fn property_access(&mut self, expression: NodeId, name: NodeId, optional: bool) -> NodeId {
        let question_dot_token = optional.then(|| self.token(SyntaxKind::QuestionDotToken));
        let access = self.node(
            SyntaxKind::PropertyAccessExpression,
            NodePayload::PropertyAccess {
                expression,
                question_dot_token,
                name,
            },
        );
        if optional {
            self.set_flags(access, NodeFlags::OPTIONAL_CHAIN);
        }
        access
    }

    pub fn element_access(&mut self, expression: NodeId, argument_expression: NodeId) -> NodeId {
        self.node(
            SyntaxKind::ElementAccessExpression,
            NodePayload::ElementAccess {
                expression,
                question_dot_token: None,
                argument_expression,
            },
        )
    }

    pub fn tagged_template(&mut self, tag: NodeId, template: NodeId) -> NodeId {
        self.node(
            SyntaxKind::TaggedTemplateExpression,
            NodePayload::TaggedTemplate {
                tag,
                question_dot_token: None,
                type_arguments: None,
                template,
            },
        )
    }

    /// Template expression or template literal type.
    pub fn template(&mut self, kind: SyntaxKind, head: NodeId, spans: Vec<NodeId>) -> NodeId {
        self.node(
            kind,
            NodePayload::TemplateLiteral {
                head,
                spans: NodeList::new(spans),
            },
        )
    }

    pub fn template_span(&mut self, kind: SyntaxKind, expression: NodeId, literal: NodeId) -> NodeId {
        self.node(kind, NodePayload::TemplateSpan { expression, literal })
    }

    pub fn binary(&mut self, left: NodeId, operator: SyntaxKind, right: NodeId) -> NodeId {
        let operator_token = self.token(operator);
        self.node(
            SyntaxKind::BinaryExpression,
            NodePayload::Binary {
                left,
                operator_token,
                right,
            },
        )
    }

    pub fn prefix_unary(&mut self, operator: SyntaxKind, operand: NodeId) -> NodeId {
        self.node(SyntaxKind::PrefixUnaryExpression, NodePayload::Unary { operator, operand })
    }

    pub fn postfix_unary(&mut self, operand: NodeId, operator: SyntaxKind) -> NodeId {
        self.node(SyntaxKind::PostfixUnaryExpression, NodePayload::Unary { operator, operand })
    }

    pub fn conditional(&mut self, condition: NodeId, when_true: NodeId, when_false: NodeId) -> NodeId {
        self.node(
            SyntaxKind::ConditionalExpression,
            NodePayload::Conditional {
                condition,
                when_true,
                when_false,
            },
        )
    }

    /// `x as T`, `x satisfies T` or `<T>x`.
    pub fn type_assertion(&mut self, kind: SyntaxKind, expression: NodeId, type_node: NodeId) -> NodeId {
        self.node(kind, NodePayload::TypeAssertion { expression, type_node })
    }

    pub fn yield_expression(&mut self, delegate: bool, expression: Option<NodeId>) -> NodeId {
        let asterisk_token = delegate.then(|| self.token(SyntaxKind::AsteriskToken));
        self.node(
            SyntaxKind::YieldExpression,
            NodePayload::Yield {
                asterisk_token,
                expression,
            },
        )
    }

    /// `new.target` or `import.meta`.
    pub fn meta_property(&mut self, keyword_token: SyntaxKind, name: &str) -> NodeId {
        let name = self.identifier(name);
        self.node(SyntaxKind::MetaProperty, NodePayload::MetaProperty { keyword_token, name })
    }

    pub fn arrow_function(&mut self, modifiers: Option<NodeList>, parameters: Vec<NodeId>, body: NodeId) -> NodeId {
        let arrow = self.token(SyntaxKind::EqualsGreaterThanToken);
        self.function_like(
            SyntaxKind::ArrowFunction,
            FunctionLikeData {
                modifiers,
                parameters: NodeList::new(parameters),
                equals_greater_than_token: Some(arrow),
                body: Some(body),
                ..Default::default()
            },
        )
    }

    pub fn function_expression(
        &mut self,
        modifiers: Option<NodeList>,
        name: Option<&str>,
        parameters: Vec<NodeId>,
        statements: Vec<NodeId>,
    ) -> NodeId {
        let name = name.map(|n| self.identifier(n));
        let body = self.block(statements);
        self.function_like(
            SyntaxKind::FunctionExpression,
            FunctionLikeData {
                modifiers,
                name,
                parameters: NodeList::new(parameters),
                body: Some(body),
                ..Default::default()
            },
        )
    }

    pub fn property_assignment(&mut self, name: NodeId, initializer: NodeId) -> NodeId {
        self.variable_like(
            SyntaxKind::PropertyAssignment,
            VariableLikeData {
                initializer: Some(initializer),
                ..VariableLikeData::named(name)
            },
        )
    }

    pub fn shorthand_property_assignment(&mut self, name: &str) -> NodeId {
        let name = self.identifier(name);
        self.variable_like(SyntaxKind::ShorthandPropertyAssignment, VariableLikeData::named(name))
    }

    // ========================================================================
    // Types
    // ========================================================================

    pub fn type_reference(&mut self, name: &str, type_arguments: Vec<NodeId>) -> NodeId {
        let type_name = self.identifier(name);
        self.type_reference_to(type_name, type_arguments)
    }

    pub fn type_reference_to(&mut self, type_name: NodeId, type_arguments: Vec<NodeId>) -> NodeId {
        self.node(
            SyntaxKind::TypeReference,
            NodePayload::TypeReference {
                type_name,
                type_arguments: Self::opt_list(type_arguments),
            },
        )
    }

    pub fn type_query(&mut self, expression_name: NodeId) -> NodeId {
        self.node(
            SyntaxKind::TypeQuery,
            NodePayload::TypeReference {
                type_name: expression_name,
                type_arguments: None,
            },
        )
    }

    pub fn literal_type(&mut self, literal: NodeId) -> NodeId {
        self.wrap(SyntaxKind::LiteralType, literal)
    }

    pub fn type_operator(&mut self, operator: SyntaxKind, type_node: NodeId) -> NodeId {
        self.node(SyntaxKind::TypeOperator, NodePayload::TypeOperator { operator, type_node })
    }

    pub fn indexed_access_type(&mut self, object_type: NodeId, index_type: NodeId) -> NodeId {
        self.node(
            SyntaxKind::IndexedAccessType,
            NodePayload::IndexedAccessType {
                object_type,
                index_type,
            },
        )
    }

    pub fn conditional_type(
        &mut self,
        check_type: NodeId,
        extends_type: NodeId,
        true_type: NodeId,
        false_type: NodeId,
    ) -> NodeId {
        self.node(
            SyntaxKind::ConditionalType,
            NodePayload::ConditionalType {
                check_type,
                extends_type,
                true_type,
                false_type,
            },
        )
    }

    /// `infer name`
    pub fn infer_type(&mut self, name: &str) -> NodeId {
        let type_parameter = self.type_parameter(name, None, None);
        self.node(SyntaxKind::InferType, NodePayload::InferType { type_parameter })
    }

    pub fn function_type(
        &mut self,
        kind: SyntaxKind,
        type_parameters: Vec<NodeId>,
        parameters: Vec<NodeId>,
        type_node: NodeId,
    ) -> NodeId {
        let arrow = self.token(SyntaxKind::EqualsGreaterThanToken);
        self.function_like(
            kind,
            FunctionLikeData {
                type_parameters: Self::opt_list(type_parameters),
                parameters: NodeList::new(parameters),
                equals_greater_than_token: Some(arrow),
                type_node: Some(type_node),
                ..Default::default()
            },
        )
    }

    pub fn mapped_type(&mut self, type_parameter: NodeId, name_type: Option<NodeId>, type_node: Option<NodeId>) -> NodeId {
        self.node(
            SyntaxKind::MappedType,
            NodePayload::MappedType {
                readonly_token: None,
                type_parameter,
                name_type,
                question_token: None,
                type_node,
                members: None,
            },
        )
    }

    pub fn type_predicate(&mut self, asserts: bool, parameter_name: NodeId, type_node: Option<NodeId>) -> NodeId {
        let asserts_modifier = asserts.then(|| self.token(SyntaxKind::AssertsKeyword));
        self.node(
            SyntaxKind::TypePredicate,
            NodePayload::TypePredicate {
                asserts_modifier,
                parameter_name,
                type_node,
            },
        )
    }

    pub fn import_type(&mut self, is_type_of: bool, argument: NodeId, qualifier: Option<NodeId>) -> NodeId {
        self.node(
            SyntaxKind::ImportType,
            NodePayload::ImportType {
                is_type_of,
                argument,
                qualifier,
                type_arguments: None,
            },
        )
    }

    // ========================================================================
    // Finishing
    // ========================================================================

    /// Wrap `statements` in a `SourceFile` and finish every node under it.
    /// Names ending in `.d.ts`, `.d.mts` or `.d.cts` are declaration files.
    pub fn finish_file(&mut self, file_name: &str, statements: Vec<NodeId>) -> NodeId {
        let is_declaration_file = [".d.ts", ".d.mts", ".d.cts"]
            .iter()
            .any(|ext| file_name.ends_with(ext));
        let file_index = self.ast.files().len() as u32;
        let data = SourceFileData {
            statements: NodeList::new(statements),
            file_name: file_name.to_string(),
            file_index,
            is_declaration_file,
            external_module_indicator: None,
            parse_diagnostics: std::mem::take(&mut self.pending_diagnostics),
            text: String::new(),
        };
        let file = self.node(SyntaxKind::SourceFile, NodePayload::SourceFile(Box::new(data)));

        let mut state = FinishState::default();
        let context = if is_declaration_file {
            NodeFlags::AMBIENT
        } else {
            NodeFlags::NONE
        };
        self.finish_node(file, None, context, &mut state);

        let indicator = self.external_module_indicator(file);
        if state.has_async_functions {
            self.ast.node_mut(file).flags |= NodeFlags::HAS_ASYNC_FUNCTIONS;
        }
        let source = self.ast.source_file_mut(file);
        source.text = state.text;
        source.external_module_indicator = indicator;
        self.ast.push_file(file);
        tracing::debug!(file = file_name, index = file_index, nodes = self.ast.len(), "finished source file");
        file
    }

    fn finish_node(&mut self, id: NodeId, parent: Option<NodeId>, context: NodeFlags, state: &mut FinishState) {
        let modifier_flags = self
            .ast
            .modifiers(id)
            .map(|mods| {
                mods.iter()
                    .fold(ModifierFlags::NONE, |acc, m| acc | ModifierFlags::from_modifier_kind(self.ast.kind(m)))
            })
            .unwrap_or(ModifierFlags::NONE);
        let context = if modifier_flags.contains(ModifierFlags::AMBIENT) {
            context | NodeFlags::AMBIENT
        } else {
            context
        };
        {
            let node = self.ast.node_mut(id);
            node.parent = parent;
            node.modifier_flags = modifier_flags;
            node.flags |= context;
        }
        let inner = self.inner_context(id, modifier_flags, context, state);
        let name = self.ast.name(id);

        if self.line_breaks.contains(&id) {
            state.newline = true;
        }
        let pos = state.cursor();

        let kind = self.ast.kind(id);
        let pieces = self.pieces(id);
        if pieces.is_empty() && is_leaf(&self.ast.node(id).payload) {
            let text = self.leaf_text(id);
            state.emit(&text);
        } else {
            let lead = self.leading_text(id);
            let mut lead_done = false;
            let mut list_ranges = Vec::new();
            for piece in pieces {
                let is_modifiers = matches!(piece, Piece::List(ListRole::Modifiers, ..));
                if !lead_done && !is_modifiers {
                    lead.iter().for_each(|t| state.emit(t));
                    lead_done = true;
                }
                match piece {
                    Piece::Node(child) => {
                        let head = Some(child) == name && has_head_name(kind);
                        let ctx = if head { context } else { inner };
                        self.finish_node(child, Some(id), ctx, state);
                    }
                    Piece::List(role, nodes, has_trailing_comma) => {
                        let ctx = if role == ListRole::Modifiers { context } else { inner };
                        let delimiters = role.delimiters();
                        if let Some((open, _)) = delimiters {
                            state.emit(open);
                        }
                        let list_pos = state.cursor();
                        for (i, child) in nodes.iter().copied().enumerate() {
                            if i > 0 {
                                if let Some(sep) = role.separator(kind) {
                                    state.emit(sep);
                                }
                            }
                            self.finish_node(child, Some(id), ctx, state);
                        }
                        if has_trailing_comma {
                            state.emit(",");
                        }
                        list_ranges.push((list_pos, state.cursor()));
                        if let Some((_, close)) = delimiters {
                            state.emit(close);
                        }
                    }
                }
            }
            if !lead_done {
                lead.iter().for_each(|t| state.emit(t));
            }
            if let Some(trail) = trailing_text(kind, &self.ast.node(id).payload) {
                state.emit(trail);
            }
            let mut ranges = list_ranges.into_iter();
            for_each_list_mut(self.ast.node_mut(id), &mut |list| {
                if let Some((list_pos, list_end)) = ranges.next() {
                    list.pos = list_pos;
                    list.end = list_end;
                }
            });
        }
        self.ast.node_mut(id).range = TextRange::new(pos, state.cursor());
    }

    /// Context flags for everything but the modifiers and the name.
    fn inner_context(
        &self,
        id: NodeId,
        modifier_flags: ModifierFlags,
        context: NodeFlags,
        state: &mut FinishState,
    ) -> NodeFlags {
        let kind = self.ast.kind(id);
        match &self.ast.node(id).payload {
            NodePayload::FunctionLike(_) if kind == SyntaxKind::ClassStaticBlockDeclaration => {
                (context - NodeFlags::YIELD_CONTEXT) | NodeFlags::AWAIT_CONTEXT
            }
            NodePayload::FunctionLike(data) => {
                let mut inner = context - (NodeFlags::AWAIT_CONTEXT | NodeFlags::YIELD_CONTEXT);
                if modifier_flags.contains(ModifierFlags::ASYNC) {
                    inner |= NodeFlags::AWAIT_CONTEXT;
                    state.has_async_functions = true;
                }
                if data.asterisk_token.is_some() {
                    inner |= NodeFlags::YIELD_CONTEXT;
                }
                inner
            }
            NodePayload::ClassLike(_)
                if kind != SyntaxKind::InterfaceDeclaration && modifier_flags.contains(ModifierFlags::EXPORT) =>
            {
                context | NodeFlags::AWAIT_CONTEXT
            }
            NodePayload::ExportAssignment { .. } => context | NodeFlags::AWAIT_CONTEXT,
            _ => context,
        }
    }

    fn pieces(&self, id: NodeId) -> Vec<Piece> {
        let mut pieces = Vec::new();
        visit_children(self.ast.node(id), &mut |child| {
            pieces.push(match child {
                Child::Node(n) => Piece::Node(n),
                Child::List(role, list) => Piece::List(role, list.nodes.clone(), list.has_trailing_comma),
            });
            false
        });
        pieces
    }

    fn leaf_text(&self, id: NodeId) -> String {
        let node = self.ast.node(id);
        match (&node.payload, node.kind) {
            (NodePayload::Identifier { .. }, _) => self.ast.text(id).to_string(),
            (NodePayload::Literal { text }, SyntaxKind::StringLiteral) => format!("\"{}\"", text),
            (NodePayload::Literal { text }, SyntaxKind::NoSubstitutionTemplateLiteral) => format!("`{}`", text),
            (NodePayload::Literal { text }, SyntaxKind::TemplateHead) => format!("`{}${{", text),
            (NodePayload::Literal { text }, SyntaxKind::TemplateMiddle) => format!("}}{}${{", text),
            (NodePayload::Literal { text }, SyntaxKind::TemplateTail) => format!("}}{}`", text),
            (NodePayload::Literal { text }, _) => text.clone(),
            (_, SyntaxKind::ThisType) => "this".to_string(),
            (_, SyntaxKind::DebuggerStatement) => "debugger".to_string(),
            (_, SyntaxKind::EmptyStatement | SyntaxKind::SemicolonClassElement) => ";".to_string(),
            (_, kind) => kind.token_text().unwrap_or("").to_string(),
        }
    }

    /// Keywords written after the modifiers and before the first child.
    fn leading_text(&self, id: NodeId) -> Vec<&'static str> {
        let node = self.ast.node(id);
        let single = |s: &'static str| vec![s];
        match node.kind {
            SyntaxKind::VariableDeclarationList => {
                let flags = node.flags.block_scope_kind();
                if flags == NodeFlags::AWAIT_USING {
                    vec!["await", "using"]
                } else if flags == NodeFlags::USING {
                    single("using")
                } else if flags == NodeFlags::CONST {
                    single("const")
                } else if flags == NodeFlags::LET {
                    single("let")
                } else {
                    single("var")
                }
            }
            SyntaxKind::FunctionDeclaration | SyntaxKind::FunctionExpression => single("function"),
            SyntaxKind::ClassDeclaration | SyntaxKind::ClassExpression => single("class"),
            SyntaxKind::InterfaceDeclaration => single("interface"),
            SyntaxKind::EnumDeclaration => single("enum"),
            SyntaxKind::TypeAliasDeclaration => single("type"),
            SyntaxKind::ModuleDeclaration => {
                if node.flags.contains(NodeFlags::GLOBAL_AUGMENTATION) {
                    Vec::new()
                } else if node.flags.contains(NodeFlags::NAMESPACE) {
                    single("namespace")
                } else {
                    single("module")
                }
            }
            SyntaxKind::Constructor => single("constructor"),
            SyntaxKind::GetAccessor => single("get"),
            SyntaxKind::SetAccessor => single("set"),
            SyntaxKind::ClassStaticBlockDeclaration => single("static"),
            SyntaxKind::ConstructSignature | SyntaxKind::ConstructorType | SyntaxKind::NewExpression => single("new"),
            SyntaxKind::Decorator => single("@"),
            SyntaxKind::IfStatement => single("if"),
            SyntaxKind::DoStatement => single("do"),
            SyntaxKind::WhileStatement => single("while"),
            SyntaxKind::ForStatement | SyntaxKind::ForInStatement | SyntaxKind::ForOfStatement => single("for"),
            SyntaxKind::ContinueStatement => single("continue"),
            SyntaxKind::BreakStatement => single("break"),
            SyntaxKind::ReturnStatement => single("return"),
            SyntaxKind::WithStatement => single("with"),
            SyntaxKind::SwitchStatement => single("switch"),
            SyntaxKind::ThrowStatement => single("throw"),
            SyntaxKind::TryStatement => single("try"),
            SyntaxKind::CatchClause => single("catch"),
            SyntaxKind::CaseClause => single("case"),
            SyntaxKind::DefaultClause => single("default"),
            SyntaxKind::ImportDeclaration | SyntaxKind::ImportEqualsDeclaration => single("import"),
            SyntaxKind::ExportDeclaration => single("export"),
            SyntaxKind::ExportAssignment => match node.payload {
                NodePayload::ExportAssignment { is_export_equals: true, .. } => vec!["export", "="],
                _ => vec!["export", "default"],
            },
            SyntaxKind::NamespaceExportDeclaration => vec!["export", "as", "namespace"],
            SyntaxKind::NamespaceImport | SyntaxKind::NamespaceExport => vec!["*", "as"],
            SyntaxKind::ExternalModuleReference => single("require"),
            SyntaxKind::HeritageClause => match node.payload {
                NodePayload::HeritageClause { token, .. } => token.token_text().into_iter().collect(),
                _ => Vec::new(),
            },
            SyntaxKind::TypeOfExpression | SyntaxKind::TypeQuery => single("typeof"),
            SyntaxKind::DeleteExpression => single("delete"),
            SyntaxKind::VoidExpression => single("void"),
            SyntaxKind::AwaitExpression => single("await"),
            SyntaxKind::YieldExpression => single("yield"),
            SyntaxKind::SpreadElement | SyntaxKind::SpreadAssignment | SyntaxKind::RestType => single("..."),
            SyntaxKind::InferType => single("infer"),
            SyntaxKind::ImportType => match node.payload {
                NodePayload::ImportType { is_type_of: true, .. } => vec!["typeof", "import"],
                _ => single("import"),
            },
            SyntaxKind::ParenthesizedExpression | SyntaxKind::ParenthesizedType => single("("),
            SyntaxKind::ComputedPropertyName => single("["),
            SyntaxKind::TypeOperator | SyntaxKind::PrefixUnaryExpression => match node.payload {
                NodePayload::TypeOperator { operator, .. } | NodePayload::Unary { operator, .. } => {
                    operator.token_text().into_iter().collect()
                }
                _ => Vec::new(),
            },
            SyntaxKind::MetaProperty => match node.payload {
                NodePayload::MetaProperty { keyword_token, .. } => {
                    keyword_token.token_text().into_iter().chain(Some(".")).collect()
                }
                _ => Vec::new(),
            },
            _ => Vec::new(),
        }
    }

    /// First top-level statement that makes `file` a module.
    fn external_module_indicator(&self, file: NodeId) -> Option<NodeId> {
        let statements = self.ast.statements(file)?;
        statements.iter().find(|&statement| {
            let node = self.ast.node(statement);
            match &node.payload {
                NodePayload::ImportDeclaration { .. }
                | NodePayload::ExportDeclaration { .. }
                | NodePayload::ExportAssignment { .. } => true,
                NodePayload::ImportEquals { module_reference, .. } => {
                    self.ast.kind(*module_reference) == SyntaxKind::ExternalModuleReference
                }
                _ => node.modifier_flags.contains(ModifierFlags::EXPORT),
            }
        })
    }
}

/// Owned copy of a direct child, so the finishing pass can mutate nodes
/// while walking a parent's children.
enum Piece {
    Node(NodeId),
    List(ListRole, Vec<NodeId>, bool),
}

#[derive(Default)]
struct FinishState {
    text: String,
    newline: bool,
    has_async_functions: bool,
}

impl FinishState {
    #[inline]
    fn cursor(&self) -> u32 {
        self.text.len() as u32
    }

    fn emit(&mut self, token: &str) {
        if token.is_empty() {
            return;
        }
        self.text.push(if std::mem::take(&mut self.newline) { '\n' } else { ' ' });
        self.text.push_str(token);
    }
}

fn is_leaf(payload: &NodePayload) -> bool {
    matches!(
        payload,
        NodePayload::Token | NodePayload::Identifier { .. } | NodePayload::Literal { .. }
    )
}

/// Kinds whose name keeps the outer context.
fn has_head_name(kind: SyntaxKind) -> bool {
    matches!(
        kind,
        SyntaxKind::FunctionDeclaration
            | SyntaxKind::FunctionExpression
            | SyntaxKind::MethodDeclaration
            | SyntaxKind::MethodSignature
            | SyntaxKind::GetAccessor
            | SyntaxKind::SetAccessor
            | SyntaxKind::ClassDeclaration
            | SyntaxKind::ClassExpression
    )
}

fn trailing_text(kind: SyntaxKind, payload: &NodePayload) -> Option<&'static str> {
    match kind {
        SyntaxKind::ParenthesizedExpression | SyntaxKind::ParenthesizedType => Some(")"),
        SyntaxKind::ComputedPropertyName => Some("]"),
        SyntaxKind::NonNullExpression => Some("!"),
        SyntaxKind::ArrayType => Some("[]"),
        SyntaxKind::OptionalType => Some("?"),
        SyntaxKind::PostfixUnaryExpression => match payload {
            NodePayload::Unary { operator, .. } => operator.token_text(),
            _ => None,
        },
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finish_links_parents() {
        let mut b = AstBuilder::new();
        let one = b.numeric_literal("1");
        let stmt = b.simple_variable(NodeFlags::CONST, "x", Some(one));
        let file = b.finish_file("a.ts", vec![stmt]);
        let ast = b.build();
        assert_eq!(ast.parent(stmt), Some(file));
        assert_eq!(ast.source_file_of(one), file);
    }

    #[test]
    fn test_keyword_leads_after_modifiers() {
        let mut b = AstBuilder::new();
        let mods = b.modifiers(&[SyntaxKind::ExportKeyword]);
        let one = b.numeric_literal("1");
        let x = b.identifier("x");
        let decl = b.variable_declaration(x, None, Some(one));
        let stmt = b.variable_statement(mods, NodeFlags::CONST, vec![decl]);
        let file = b.finish_file("a.ts", vec![stmt]);
        let ast = b.build();
        assert_eq!(ast.source_file(file).text, " export const x 1");
        assert_eq!(ast.source_text(x), "x");
    }

    #[test]
    fn test_leaf_emits_empty_for_omitted() {
        let mut b = AstBuilder::new();
        let omitted = b.token(SyntaxKind::OmittedExpression);
        let array = b.list(SyntaxKind::ArrayLiteralExpression, vec![omitted]);
        let stmt = b.expression_statement(array);
        let file = b.finish_file("a.ts", vec![stmt]);
        let ast = b.build();
        assert_eq!(ast.source_file(file).text, " [ ]");
        assert_eq!(ast.range(omitted).len(), 0);
    }
}

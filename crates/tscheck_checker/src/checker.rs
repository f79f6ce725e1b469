//! The checker driver.
//!
//! `Checker` walks the source files of a bound `Program`. Every node is
//! visited once: its grammar checks run, the names it references are
//! resolved and the types its declarations need are computed on demand.
//! Function bodies are deferred until the enclosing file walk is done.
//!
//! All derived state lives in link stores owned by the checker. The AST
//! and the binding are shared read-only.

use crate::links::*;
use crate::mapper::MapperId;
use crate::types::{TypeId, TypeTable};
use rustc_hash::FxHashMap;
use tracing::{debug, trace};
use tscheck_ast::types::{NodeFlags, NodeId, SymbolFlags, SymbolId};
use tscheck_ast::utilities::*;
use tscheck_ast::{Ast, NodePayload, SyntaxKind};
use tscheck_binder::{bind_program, CheckFlags, Binding, NameResolver, NameResolverHost, Symbol, SymbolTable};
use tscheck_core::{InternedString, Tristate};
use tscheck_diagnostics::{
    messages, Diagnostic, DiagnosticCategory, DiagnosticCollection, DiagnosticMessage,
};
use tscheck_options::{CompilerOptions, ModuleKind, ScriptTarget};

/// A syntax tree bound together with the options it was bound under.
pub struct Program {
    pub ast: Ast,
    pub binding: Binding,
    pub options: CompilerOptions,
}

impl Program {
    pub fn new(mut ast: Ast, options: CompilerOptions) -> Self {
        let binding = bind_program(&mut ast, &options);
        Self { ast, binding, options }
    }
}

/// Entries of the circularity stack. Each names the lazily computed
/// property that is being resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ResolutionTarget {
    Type(SymbolId),
    DeclaredType(SymbolId),
    TypeParameterConstraint(TypeId),
    BaseTypes(SymbolId),
}

/// Type checker for one program.
pub struct Checker<'a> {
    pub(crate) ast: &'a Ast,
    pub(crate) binding: &'a Binding,
    pub(crate) options: &'a CompilerOptions,

    /// Types, mappers and signatures created by this checker.
    pub(crate) types: TypeTable,
    diagnostics: DiagnosticCollection,
    suggestion_diagnostics: DiagnosticCollection,

    pub(crate) language_version: ScriptTarget,
    pub(crate) module_kind: ModuleKind,
    /// `experimentalDecorators` is on.
    pub(crate) legacy_decorators: bool,

    /// Properties under resolution, with a flag cleared when a cycle
    /// through the entry was found.
    type_resolutions: Vec<(ResolutionTarget, bool)>,
    /// Symbols created by the checker. Their ids continue after the
    /// binder's symbols.
    transient_symbols: Vec<Symbol>,
    /// Synthetic properties of unions and intersections by name.
    pub(crate) union_property_cache: FxHashMap<(TypeId, InternedString), Option<SymbolId>>,
    /// Instantiations of generic types by mapper.
    pub(crate) instantiations: FxHashMap<(TypeId, MapperId), TypeId>,

    pub(crate) node_links: LinkStore<NodeId, NodeLinks>,
    pub(crate) symbol_node_links: LinkStore<NodeId, SymbolNodeLinks>,
    pub(crate) type_node_links: LinkStore<NodeId, TypeNodeLinks>,
    pub(crate) enum_member_links: LinkStore<NodeId, EnumMemberLinks>,
    pub(crate) switch_statement_links: LinkStore<NodeId, SwitchStatementLinks>,
    pub(crate) source_file_links: LinkStore<NodeId, SourceFileLinks>,
    pub(crate) signature_links: LinkStore<NodeId, SignatureLinks>,
    pub(crate) value_symbol_links: LinkStore<SymbolId, ValueSymbolLinks>,
    pub(crate) alias_symbol_links: LinkStore<SymbolId, AliasSymbolLinks>,
    pub(crate) module_symbol_links: LinkStore<SymbolId, ModuleSymbolLinks>,
    pub(crate) mapped_symbol_links: LinkStore<SymbolId, MappedSymbolLinks>,
    pub(crate) deferred_symbol_links: LinkStore<SymbolId, DeferredSymbolLinks>,
    pub(crate) type_alias_links: LinkStore<SymbolId, TypeAliasLinks>,
    pub(crate) declared_type_links: LinkStore<SymbolId, DeclaredTypeLinks>,
    pub(crate) variance_links: LinkStore<SymbolId, VarianceLinks>,
    pub(crate) marked_assignment_symbol_links: LinkStore<SymbolId, MarkedAssignmentSymbolLinks>,
}

impl<'a> Checker<'a> {
    pub fn new(program: &'a Program) -> Self {
        let options = &program.options;
        Self {
            ast: &program.ast,
            binding: &program.binding,
            options,
            types: TypeTable::new(),
            diagnostics: DiagnosticCollection::new(),
            suggestion_diagnostics: DiagnosticCollection::new(),
            language_version: options.emit_script_target(),
            module_kind: options.emit_module_kind(),
            legacy_decorators: options.experimental_decorators_enabled(),
            type_resolutions: Vec::new(),
            transient_symbols: Vec::new(),
            union_property_cache: FxHashMap::default(),
            instantiations: FxHashMap::default(),
            node_links: LinkStore::new(),
            symbol_node_links: LinkStore::new(),
            type_node_links: LinkStore::new(),
            enum_member_links: LinkStore::new(),
            switch_statement_links: LinkStore::new(),
            source_file_links: LinkStore::new(),
            signature_links: LinkStore::new(),
            value_symbol_links: LinkStore::new(),
            alias_symbol_links: LinkStore::new(),
            module_symbol_links: LinkStore::new(),
            mapped_symbol_links: LinkStore::new(),
            deferred_symbol_links: LinkStore::new(),
            type_alias_links: LinkStore::new(),
            declared_type_links: LinkStore::new(),
            variance_links: LinkStore::new(),
            marked_assignment_symbol_links: LinkStore::new(),
        }
    }

    // ========================================================================
    // Public API
    // ========================================================================

    /// Check every file of the program in program order.
    pub fn check_program(&mut self) {
        let ast = self.ast;
        for &file in ast.files() {
            self.check_source_file(file);
        }
    }

    /// Check one source file. Checking a file twice is a no-op.
    pub fn check_source_file(&mut self, file: NodeId) {
        let ast = self.ast;
        if self.source_file_links.get_or_insert(file).type_checked {
            return;
        }
        let data = ast.source_file(file);
        debug!(file = %data.file_name, "checking source file");

        self.check_grammar_source_file(file);
        for statement in data.statements.iter() {
            self.check_source_element(statement);
        }
        self.check_deferred_nodes(file);
        if data.is_external_module() {
            self.check_external_module_exports(file);
        }

        self.source_file_links.get_or_insert(file).type_checked = true;
        trace!(file = %data.file_name, errors = self.diagnostics.error_count(), "checked source file");
    }

    /// Diagnostics reported by the checker so far.
    pub fn diagnostics(&self) -> &DiagnosticCollection {
        &self.diagnostics
    }

    pub fn suggestion_diagnostics(&self) -> &DiagnosticCollection {
        &self.suggestion_diagnostics
    }

    pub fn take_diagnostics(&mut self) -> DiagnosticCollection {
        std::mem::take(&mut self.diagnostics)
    }

    /// Check the whole program and return parse, binder and checker
    /// diagnostics in sorted order.
    pub fn get_diagnostics(&mut self) -> Vec<Diagnostic> {
        self.check_program();
        let ast = self.ast;
        let mut all = DiagnosticCollection::new();
        for &file in ast.files() {
            all.extend_from_slice(&ast.source_file(file).parse_diagnostics);
        }
        all.extend_from_slice(self.binding.diagnostics.diagnostics());
        all.extend_from_slice(self.diagnostics.diagnostics());
        all.sort();
        all.into_diagnostics()
    }

    pub fn types(&self) -> &TypeTable {
        &self.types
    }

    /// A symbol of the binding or one the checker created.
    pub fn symbol(&self, id: SymbolId) -> &Symbol {
        let bound = self.binding.symbols.len();
        match id.index().checked_sub(bound) {
            Some(index) => &self.transient_symbols[index],
            None => self.binding.symbol(id),
        }
    }

    pub fn symbol_name(&self, id: SymbolId) -> &'a str {
        let ast: &'a Ast = self.ast;
        ast.interner().resolve(self.symbol(id).name)
    }

    // ========================================================================
    // Internal state helpers
    // ========================================================================

    pub(crate) fn create_transient_symbol(
        &mut self,
        name: InternedString,
        flags: SymbolFlags,
        check_flags: CheckFlags,
    ) -> SymbolId {
        let id = SymbolId((self.binding.symbols.len() + self.transient_symbols.len()) as u32);
        let mut symbol = Symbol::new(id, name, flags | SymbolFlags::TRANSIENT);
        symbol.check_flags = check_flags;
        self.transient_symbols.push(symbol);
        id
    }

    pub(crate) fn transient_symbol_mut(&mut self, id: SymbolId) -> &mut Symbol {
        let bound = self.binding.symbols.len();
        match id.index().checked_sub(bound) {
            Some(index) => &mut self.transient_symbols[index],
            None => panic!("Symbol {} is not a transient symbol", id.0),
        }
    }

    /// Start resolving `target`. Returns `false` when it is already on
    /// the stack; every entry from there up is then marked circular.
    pub(crate) fn push_type_resolution(&mut self, target: ResolutionTarget) -> bool {
        if let Some(start) = self.type_resolutions.iter().position(|(t, _)| *t == target) {
            for entry in &mut self.type_resolutions[start..] {
                entry.1 = false;
            }
            trace!(?target, "circular type resolution");
            return false;
        }
        self.type_resolutions.push((target, true));
        true
    }

    /// Finish the innermost resolution. Returns `false` if a cycle ran
    /// through it.
    pub(crate) fn pop_type_resolution(&mut self) -> bool {
        match self.type_resolutions.pop() {
            Some((_, ok)) => ok,
            None => panic!("Type resolution stack underflow"),
        }
    }

    // ========================================================================
    // Diagnostics
    // ========================================================================

    pub(crate) fn add_diagnostic(&mut self, diagnostic: Diagnostic) {
        if diagnostic.category == DiagnosticCategory::Suggestion {
            self.suggestion_diagnostics.add(diagnostic);
        } else {
            self.diagnostics.add(diagnostic);
        }
    }

    pub(crate) fn error(&mut self, location: NodeId, message: &DiagnosticMessage, args: &[&str]) {
        let diagnostic = create_diagnostic_for_node(self.ast, location, message, args);
        self.add_diagnostic(diagnostic);
    }

    pub(crate) fn error_with_related(
        &mut self,
        location: NodeId,
        message: &DiagnosticMessage,
        args: &[&str],
        related: Diagnostic,
    ) {
        let diagnostic = create_diagnostic_for_node(self.ast, location, message, args).with_related(related);
        self.add_diagnostic(diagnostic);
    }

    /// Text of a declaration name for messages.
    pub(crate) fn declaration_name_to_string(&self, name: Option<NodeId>) -> &'a str {
        let ast: &'a Ast = self.ast;
        match name {
            Some(name) if matches!(ast.kind(name), SyntaxKind::Identifier | SyntaxKind::PrivateIdentifier) => {
                ast.text(name)
            }
            Some(name) => ast.source_text(name),
            None => "(Missing)",
        }
    }

    // ========================================================================
    // Walk
    // ========================================================================

    pub(crate) fn check_source_element(&mut self, node: NodeId) {
        let ast = self.ast;
        {
            let links = self.node_links.get_or_insert(node);
            if links.flags.contains(NodeCheckFlags::TYPE_CHECKED) {
                return;
            }
            links.flags |= NodeCheckFlags::TYPE_CHECKED;
        }

        self.check_node(node);

        let body = match &ast.node(node).payload {
            NodePayload::FunctionLike(data) => data.body,
            _ => None,
        };
        for child in ast.children(node) {
            if Some(child) == body {
                self.check_node_deferred(child);
            } else {
                self.check_source_element(child);
            }
        }
    }

    fn check_node_deferred(&mut self, node: NodeId) {
        let file = self.ast.source_file_of(node);
        trace!(node = node.0, "deferred function body");
        self.source_file_links.get_or_insert(file).deferred_nodes.push(node);
    }

    /// Bodies deferred while walking `file`, in the order they were
    /// queued. Bodies queued while draining are checked too.
    fn check_deferred_nodes(&mut self, file: NodeId) {
        let mut index = 0;
        loop {
            let next = self
                .source_file_links
                .try_get(file)
                .and_then(|links| links.deferred_nodes.get(index).copied());
            let Some(node) = next else {
                break;
            };
            index += 1;
            self.check_source_element(node);
        }
    }

    fn check_node(&mut self, node: NodeId) {
        let ast = self.ast;
        match ast.kind(node) {
            SyntaxKind::Identifier => self.check_identifier(node),
            SyntaxKind::PrivateIdentifier => {
                self.check_grammar_private_identifier_expression(node);
            }
            SyntaxKind::NumericLiteral => {
                self.check_grammar_numeric_literal(node);
            }
            SyntaxKind::BigIntLiteral => {
                self.check_grammar_big_int_literal(node);
            }
            SyntaxKind::TypeParameter => {
                self.check_grammar_modifiers(node);
            }
            SyntaxKind::Parameter => {
                self.check_grammar_modifiers(node);
                self.check_variable_like_declaration(node);
            }
            SyntaxKind::PropertyDeclaration | SyntaxKind::PropertySignature => {
                if ast.kind(node) == SyntaxKind::PropertySignature
                    && ast.name(node).is_some_and(|n| ast.kind(n) == SyntaxKind::PrivateIdentifier)
                {
                    self.error(node, &messages::PRIVATE_IDENTIFIERS_ARE_NOT_ALLOWED_OUTSIDE_CLASS_BODIES, &[]);
                }
                if !self.check_grammar_modifiers(node) && !self.check_grammar_property(node) {
                    self.check_grammar_computed_property_name(ast.name(node));
                }
                self.check_variable_like_declaration(node);
            }
            SyntaxKind::MethodDeclaration | SyntaxKind::MethodSignature => {
                if !self.check_grammar_method(node) {
                    self.check_grammar_computed_property_name(ast.name(node));
                }
            }
            SyntaxKind::Constructor => {
                self.check_grammar_function_like_declaration(node);
                if !self.check_grammar_constructor_type_parameters(node) {
                    self.check_grammar_constructor_type_annotation(node);
                }
            }
            SyntaxKind::GetAccessor | SyntaxKind::SetAccessor => {
                if !self.check_grammar_function_like_declaration(node) && !self.check_grammar_accessor(node) {
                    self.check_grammar_computed_property_name(ast.name(node));
                }
            }
            SyntaxKind::CallSignature
            | SyntaxKind::ConstructSignature
            | SyntaxKind::FunctionType
            | SyntaxKind::ConstructorType
            | SyntaxKind::ArrowFunction => {
                self.check_grammar_function_like_declaration(node);
            }
            SyntaxKind::IndexSignature => {
                self.check_grammar_index_signature(node);
            }
            SyntaxKind::FunctionDeclaration => {
                self.check_grammar_function_like_declaration(node);
                self.check_grammar_for_generator(node);
            }
            SyntaxKind::FunctionExpression => {
                if !self.check_grammar_function_like_declaration(node) {
                    self.check_grammar_for_generator(node);
                }
            }
            SyntaxKind::ClassStaticBlockDeclaration => {
                self.check_grammar_modifiers(node);
            }
            SyntaxKind::ClassDeclaration => {
                if ast.name(node).is_none() && !has_syntactic_modifier(ast, node, tscheck_ast::ModifierFlags::DEFAULT) {
                    self.grammar_error_on_first_token(
                        node,
                        &messages::A_CLASS_DECLARATION_WITHOUT_THE_DEFAULT_MODIFIER_MUST_HAVE_A_NAME,
                        &[],
                    );
                }
                self.check_grammar_class_like_declaration(node);
                self.check_declared_type_of_declaration(node);
            }
            SyntaxKind::ClassExpression => {
                self.check_grammar_class_like_declaration(node);
            }
            SyntaxKind::InterfaceDeclaration => {
                if !self.check_grammar_modifiers(node) {
                    self.check_grammar_interface_declaration(node);
                }
                self.check_declared_type_of_declaration(node);
            }
            SyntaxKind::TypeAliasDeclaration => {
                self.check_grammar_modifiers(node);
                self.check_declared_type_of_declaration(node);
            }
            SyntaxKind::EnumDeclaration => {
                self.check_grammar_modifiers(node);
                self.compute_enum_member_values(node);
            }
            SyntaxKind::ModuleDeclaration => {
                self.check_grammar_module_declaration(node);
            }
            SyntaxKind::ImportDeclaration => {
                self.check_grammar_import_declaration(node);
            }
            SyntaxKind::ImportEqualsDeclaration => {
                if !self.check_grammar_module_element_context(
                    node,
                    &messages::AN_IMPORT_DECLARATION_CAN_ONLY_BE_USED_AT_THE_TOP_LEVEL_OF_A_NAMESPACE_OR_MODULE,
                ) {
                    self.check_grammar_modifiers(node);
                    self.check_alias_symbol(node);
                }
            }
            SyntaxKind::ExportDeclaration => {
                self.check_grammar_export_declaration_statement(node);
            }
            SyntaxKind::ExportAssignment => {
                if !self.check_grammar_module_element_context(
                    node,
                    &messages::AN_EXPORT_ASSIGNMENT_MUST_BE_AT_THE_TOP_LEVEL_OF_A_FILE_OR_MODULE_DECLARATION,
                ) {
                    if !self.check_grammar_modifiers(node) && ast.modifiers(node).is_some_and(|m| !m.is_empty()) {
                        self.grammar_error_on_first_token(node, &messages::AN_EXPORT_ASSIGNMENT_CANNOT_HAVE_MODIFIERS, &[]);
                    }
                    self.check_export_assignment(node);
                }
            }
            SyntaxKind::NamespaceImport | SyntaxKind::ImportSpecifier | SyntaxKind::ExportSpecifier => {
                self.check_alias_symbol(node);
            }
            SyntaxKind::ImportClause => {
                if ast.name(node).is_some() {
                    self.check_alias_symbol(node);
                }
            }
            SyntaxKind::VariableStatement => {
                if !self.check_grammar_modifiers(node) {
                    let list = match &ast.node(node).payload {
                        NodePayload::VariableStatement { declaration_list, .. } => Some(*declaration_list),
                        _ => None,
                    };
                    if !list.is_some_and(|list| self.check_grammar_variable_declaration_list(list)) {
                        self.check_grammar_for_disallowed_block_scoped_variable_statement(node);
                    }
                }
            }
            SyntaxKind::VariableDeclaration => {
                self.check_grammar_variable_declaration(node);
                self.check_variable_like_declaration(node);
            }
            SyntaxKind::BindingElement => {
                self.check_grammar_binding_element(node);
            }
            SyntaxKind::Decorator => {
                self.check_grammar_decorator(node);
            }
            SyntaxKind::TypeReference => {
                self.check_grammar_type_arguments(node, ast.type_arguments(node));
                self.get_type_from_type_node(node);
            }
            SyntaxKind::ExpressionWithTypeArguments => {
                self.check_grammar_expression_with_type_arguments(node);
                if is_part_of_type_node(ast, node) {
                    self.get_type_from_type_node(node);
                }
            }
            SyntaxKind::TypeOperator => {
                self.check_grammar_type_operator_node(node);
                self.check_root_type_node(node);
            }
            SyntaxKind::MappedType => {
                self.check_grammar_mapped_type(node);
                self.check_root_type_node(node);
            }
            SyntaxKind::TaggedTemplateExpression => {
                self.check_grammar_tagged_template_chain(node);
                self.check_grammar_type_arguments(node, ast.type_arguments(node));
            }
            SyntaxKind::CallExpression => {
                let is_import_call = ast.expression(node).is_some_and(|e| ast.kind(e) == SyntaxKind::ImportKeyword);
                if is_import_call {
                    self.check_grammar_import_call_expression(node);
                } else {
                    self.check_grammar_type_arguments(node, ast.type_arguments(node));
                }
            }
            SyntaxKind::NewExpression => {
                self.check_grammar_type_arguments(node, ast.type_arguments(node));
            }
            SyntaxKind::ObjectLiteralExpression => {
                let in_destructuring_pattern = is_assignment_target(ast, node);
                self.check_grammar_object_literal_expression(node, in_destructuring_pattern);
            }
            SyntaxKind::AwaitExpression => {
                self.check_grammar_await_or_await_using(node);
            }
            SyntaxKind::YieldExpression => {
                self.check_grammar_yield_expression(node);
            }
            SyntaxKind::MetaProperty => {
                self.check_grammar_meta_property(node);
            }
            SyntaxKind::Block
            | SyntaxKind::EmptyStatement
            | SyntaxKind::SemicolonClassElement
            | SyntaxKind::DebuggerStatement
            | SyntaxKind::ExpressionStatement
            | SyntaxKind::IfStatement
            | SyntaxKind::DoStatement
            | SyntaxKind::WhileStatement
            | SyntaxKind::ThrowStatement => {
                self.check_grammar_statement_in_ambient_context(node);
            }
            SyntaxKind::ForStatement => {
                if !self.check_grammar_statement_in_ambient_context(node) {
                    if let Some(initializer) = ast.initializer(node) {
                        if ast.kind(initializer) == SyntaxKind::VariableDeclarationList {
                            self.check_grammar_variable_declaration_list(initializer);
                        }
                    }
                }
            }
            SyntaxKind::ForInStatement | SyntaxKind::ForOfStatement => {
                self.check_grammar_for_in_or_for_of_statement(node);
            }
            SyntaxKind::BreakStatement | SyntaxKind::ContinueStatement => {
                if !self.check_grammar_statement_in_ambient_context(node) {
                    self.check_grammar_break_or_continue_statement(node);
                }
            }
            SyntaxKind::ReturnStatement => {
                self.check_grammar_return_statement(node);
            }
            SyntaxKind::WithStatement => {
                self.check_grammar_with_statement(node);
            }
            SyntaxKind::SwitchStatement => {
                self.check_grammar_switch_statement(node);
            }
            SyntaxKind::LabeledStatement => {
                self.check_grammar_labeled_statement(node);
            }
            SyntaxKind::TryStatement => {
                self.check_grammar_try_statement(node);
            }
            kind if kind.is_type_node() => self.check_root_type_node(node),
            _ => {}
        }
    }

    /// Resolve the type of an outermost type node so errors inside it
    /// are reported even when no declaration asks for it.
    fn check_root_type_node(&mut self, node: NodeId) {
        let ast = self.ast;
        let nested = ast.parent(node).is_some_and(|p| ast.kind(p).is_type_node());
        if !nested {
            self.get_type_from_type_node(node);
        }
    }

    fn check_variable_like_declaration(&mut self, node: NodeId) {
        let ast = self.ast;
        let has_identifier_name = ast.name(node).is_some_and(|n| ast.kind(n) == SyntaxKind::Identifier);
        if !has_identifier_name {
            return;
        }
        if let Some(symbol) = ast.symbol(node) {
            self.get_type_of_symbol(symbol);
        }
    }

    fn check_declared_type_of_declaration(&mut self, node: NodeId) {
        if let Some(symbol) = self.ast.symbol(node) {
            self.get_declared_type_of_symbol(symbol);
        }
    }

    fn check_external_module_exports(&mut self, file: NodeId) {
        let ast = self.ast;
        let binding = self.binding;
        let Some(module_symbol) = ast.symbol(file) else {
            return;
        };
        if self.module_symbol_links.get_or_insert(module_symbol).exports_checked {
            return;
        }
        if let Some(exports) = binding.exports(module_symbol) {
            let export_equals = ast.interner().get(tscheck_binder::internal_names::EXPORT_EQUALS);
            let export_equals_symbol = export_equals.and_then(|name| exports.get(name));
            if let Some(export_equals_symbol) = export_equals_symbol {
                let has_exported_members = exports.iter().any(|(name, _)| Some(name) != export_equals);
                if has_exported_members {
                    let declaration = self
                        .get_declaration_of_alias_symbol(export_equals_symbol)
                        .or(self.symbol(export_equals_symbol).value_declaration);
                    if let Some(declaration) = declaration {
                        self.error(
                            declaration,
                            &messages::AN_EXPORT_ASSIGNMENT_CANNOT_BE_USED_IN_A_MODULE_WITH_OTHER_EXPORTED_ELEMENTS,
                            &[],
                        );
                    }
                }
            }
        }
        self.module_symbol_links.get_or_insert(module_symbol).exports_checked = true;
    }

    fn check_export_assignment(&mut self, node: NodeId) {
        let ast = self.ast;
        let Some(expression) = ast.expression(node) else {
            return;
        };
        if ast.kind(expression) != SyntaxKind::Identifier {
            return;
        }
        if self.symbol_node_links.try_get(expression).is_some() {
            return;
        }
        let meaning = SymbolFlags::VALUE | SymbolFlags::TYPE | SymbolFlags::NAMESPACE | SymbolFlags::ALIAS;
        let resolved = NameResolver::new(ast, self.binding, self.options).resolve(
            self,
            expression,
            ast.text(expression),
            meaning,
            Some(&messages::CANNOT_FIND_NAME_0),
            true,
            false,
        );
        self.symbol_node_links.get_or_insert(expression).resolved_symbol = resolved;
        if let Some(symbol) = resolved {
            if self.symbol(symbol).has_flags(SymbolFlags::ALIAS) {
                self.alias_symbol_links.get_or_insert(symbol).referenced = true;
            }
        }
    }

    // ========================================================================
    // Identifiers
    // ========================================================================

    /// Whether `node` is an identifier read or written as a value.
    fn is_value_reference_identifier(&self, node: NodeId) -> bool {
        let ast = self.ast;
        if ast.kind(node) != SyntaxKind::Identifier {
            return false;
        }
        let Some(parent) = ast.parent(node) else {
            return false;
        };
        let parent_kind = ast.kind(parent);
        if parent_kind == SyntaxKind::ShorthandPropertyAssignment {
            return ast.name(parent) == Some(node);
        }
        if is_declaration_name(ast, node) {
            return false;
        }
        let is_excluded_slot = match &ast.node(parent).payload {
            NodePayload::PropertyAccess { name, .. } => *name == node,
            NodePayload::QualifiedName { .. } => true,
            NodePayload::Labeled { label, .. } => *label == node,
            NodePayload::Jump { label } => *label == Some(node),
            NodePayload::MetaProperty { .. } => true,
            NodePayload::Specifier { .. } => true,
            NodePayload::ImportEquals { module_reference, .. } => *module_reference == node,
            NodePayload::ExportAssignment { .. } => true,
            NodePayload::VariableLike(data) => data.property_name == Some(node),
            NodePayload::Named { .. } => true,
            _ => false,
        };
        if is_excluded_slot {
            return false;
        }
        if is_part_of_type_node(ast, node) || is_part_of_type_query(ast, node) {
            return false;
        }
        !matches!(ast.text(node), "undefined" | "globalThis")
    }

    fn check_identifier(&mut self, node: NodeId) {
        if !self.is_value_reference_identifier(node) {
            return;
        }
        let Some(symbol) = self.get_resolved_symbol(node) else {
            return;
        };
        if is_assignment_target(self.ast, node) {
            self.check_assignment_to_symbol(node, symbol);
            self.mark_assignment(node, symbol);
        }
    }

    /// The symbol a value reference resolves to, computed once per node.
    pub fn get_resolved_symbol(&mut self, node: NodeId) -> Option<SymbolId> {
        if let Some(links) = self.symbol_node_links.try_get(node) {
            return links.resolved_symbol;
        }
        let ast = self.ast;
        let message = self.cannot_find_name_message(node);
        let is_use = !self.is_write_only_access(node);
        let resolved = NameResolver::new(ast, self.binding, self.options).resolve(
            self,
            node,
            ast.text(node),
            SymbolFlags::VALUE | SymbolFlags::EXPORT_VALUE,
            Some(message),
            is_use,
            false,
        );
        self.symbol_node_links.get_or_insert(node).resolved_symbol = resolved;
        resolved
    }

    /// `x = ...` and `for (x in ...)` write without reading.
    fn is_write_only_access(&self, node: NodeId) -> bool {
        let ast = self.ast;
        match get_assignment_target(ast, node) {
            Some(target) => match &ast.node(target).payload {
                NodePayload::Binary { operator_token, .. } => ast.kind(*operator_token) == SyntaxKind::EqualsToken,
                NodePayload::ForInOrOf { .. } => true,
                _ => false,
            },
            None => false,
        }
    }

    fn cannot_find_name_message(&self, node: NodeId) -> &'static DiagnosticMessage {
        let ast = self.ast;
        match ast.text(node) {
            "document" | "console" => &messages::CANNOT_FIND_NAME_0_DO_YOU_NEED_TO_CHANGE_YOUR_TARGET_LIBRARY_INCLUDE_DOM,
            "$" => &messages::CANNOT_FIND_NAME_0_DO_YOU_NEED_TO_INSTALL_TYPE_DEFINITIONS_FOR_JQUERY,
            "describe" | "suite" | "it" | "test" => {
                &messages::CANNOT_FIND_NAME_0_DO_YOU_NEED_TO_INSTALL_TYPE_DEFINITIONS_FOR_A_TEST_RUNNER
            }
            "process" | "require" | "Buffer" | "module" => {
                &messages::CANNOT_FIND_NAME_0_DO_YOU_NEED_TO_INSTALL_TYPE_DEFINITIONS_FOR_NODE
            }
            "Bun" => &messages::CANNOT_FIND_NAME_0_DO_YOU_NEED_TO_INSTALL_TYPE_DEFINITIONS_FOR_BUN,
            name if suggested_lib_for_name(name).is_some() => {
                &messages::CANNOT_FIND_NAME_0_DO_YOU_NEED_TO_CHANGE_YOUR_TARGET_LIBRARY
            }
            "await" if ast.parent(node).is_some_and(|p| ast.kind(p) == SyntaxKind::CallExpression) => {
                &messages::CANNOT_FIND_NAME_0_DID_YOU_MEAN_TO_WRITE_THIS_IN_AN_ASYNC_FUNCTION
            }
            _ if ast
                .parent(node)
                .is_some_and(|p| ast.kind(p) == SyntaxKind::ShorthandPropertyAssignment) =>
            {
                &messages::NO_VALUE_EXISTS_IN_SCOPE_FOR_THE_SHORTHAND_PROPERTY_0
            }
            _ => &messages::CANNOT_FIND_NAME_0,
        }
    }

    /// Report writes to constants, enums, classes, functions, namespaces
    /// and imports.
    fn check_assignment_to_symbol(&mut self, node: NodeId, symbol: SymbolId) {
        let ast = self.ast;
        let mut target = symbol;
        if self.symbol(target).has_flags(SymbolFlags::EXPORT_VALUE) {
            if let Some(export_symbol) = self.symbol(target).export_symbol {
                target = export_symbol;
            }
        }
        let flags = self.symbol(target).flags;
        let name = ast.text(node);
        if !flags.intersects(SymbolFlags::VARIABLE) {
            let message = if flags.intersects(SymbolFlags::ENUM) {
                &messages::CANNOT_ASSIGN_TO_0_BECAUSE_IT_IS_AN_ENUM
            } else if flags.intersects(SymbolFlags::CLASS) {
                &messages::CANNOT_ASSIGN_TO_0_BECAUSE_IT_IS_A_CLASS
            } else if flags.intersects(SymbolFlags::MODULE) {
                &messages::CANNOT_ASSIGN_TO_0_BECAUSE_IT_IS_A_NAMESPACE
            } else if flags.intersects(SymbolFlags::FUNCTION) {
                &messages::CANNOT_ASSIGN_TO_0_BECAUSE_IT_IS_A_FUNCTION
            } else if flags.intersects(SymbolFlags::ALIAS) {
                &messages::CANNOT_ASSIGN_TO_0_BECAUSE_IT_IS_AN_IMPORT
            } else {
                &messages::CANNOT_ASSIGN_TO_0_BECAUSE_IT_IS_NOT_A_VARIABLE
            };
            self.error(node, message, &[name]);
            return;
        }
        let is_constant = self
            .symbol(target)
            .value_declaration
            .is_some_and(|decl| get_combined_node_flags(ast, decl).intersects(NodeFlags::CONST | NodeFlags::USING));
        if is_constant {
            self.error(node, &messages::CANNOT_ASSIGN_TO_0_BECAUSE_IT_IS_A_CONSTANT, &[name]);
        }
    }

    // ========================================================================
    // Resolution support
    // ========================================================================

    /// Nearest ancestor that scopes `let`, `const`, classes and enums.
    pub(crate) fn get_enclosing_block_scope_container(&self, node: NodeId) -> Option<NodeId> {
        let ast = self.ast;
        find_ancestor(ast, ast.parent(node), |current| match ast.kind(current) {
            SyntaxKind::SourceFile
            | SyntaxKind::CaseBlock
            | SyntaxKind::CatchClause
            | SyntaxKind::ModuleDeclaration
            | SyntaxKind::ForStatement
            | SyntaxKind::ForInStatement
            | SyntaxKind::ForOfStatement
            | SyntaxKind::PropertyDeclaration
            | SyntaxKind::ClassStaticBlockDeclaration => true,
            SyntaxKind::Block => !ast.parent(current).is_some_and(|p| is_function_like(ast, p)),
            kind => is_function_like_kind(kind),
        })
    }

    /// `usage` sits under `parent` without crossing a function boundary
    /// (immediately invoked non-generator functions do not count).
    fn is_same_scope_descendent_of(&self, initial: NodeId, parent: Option<NodeId>, stop_at: Option<NodeId>) -> bool {
        let ast = self.ast;
        let Some(parent) = parent else {
            return false;
        };
        let mut current = Some(initial);
        while let Some(node) = current {
            if node == parent {
                return true;
            }
            if Some(node) == stop_at {
                return false;
            }
            if is_function_like(ast, node)
                && (get_immediately_invoked_function_expression(ast, node).is_none()
                    || ast.asterisk_token(node).is_some())
            {
                return false;
            }
            current = ast.parent(node);
        }
        false
    }

    fn is_block_scoped_name_declared_before_use(&self, declaration: NodeId, usage: NodeId) -> bool {
        let ast = self.ast;
        if ast.source_file_of(declaration) != ast.source_file_of(usage) {
            return true;
        }
        if is_in_ambient_context(ast, usage) || is_part_of_type_query(ast, usage) || is_part_of_type_node(ast, usage) {
            return true;
        }
        let decl_container = self.get_enclosing_block_scope_container(declaration);
        if ast.node(declaration).pos() <= ast.node(usage).pos() {
            if ast.kind(declaration) == SyntaxKind::VariableDeclaration {
                return !self.is_immediately_used_in_initializer_of_block_scoped_variable(
                    declaration,
                    usage,
                    decl_container,
                );
            }
            return true;
        }

        // Declared after the use; legal when the use is deferred.
        if let Some(parent) = ast.parent(usage) {
            match &ast.node(parent).payload {
                NodePayload::Specifier { .. } if ast.kind(parent) == SyntaxKind::ExportSpecifier => return true,
                NodePayload::ExportAssignment { is_export_equals, .. } if *is_export_equals => return true,
                _ => {}
            }
        }
        self.is_used_in_function_or_instance_property(usage, declaration, decl_container)
    }

    fn is_immediately_used_in_initializer_of_block_scoped_variable(
        &self,
        declaration: NodeId,
        usage: NodeId,
        decl_container: Option<NodeId>,
    ) -> bool {
        let ast = self.ast;
        let Some(grandparent) = ast.parent(declaration).and_then(|list| ast.parent(list)) else {
            return false;
        };
        match ast.kind(grandparent) {
            SyntaxKind::VariableStatement | SyntaxKind::ForStatement | SyntaxKind::ForOfStatement => {
                if self.is_same_scope_descendent_of(usage, Some(declaration), decl_container) {
                    return true;
                }
            }
            _ => {}
        }
        matches!(ast.kind(grandparent), SyntaxKind::ForInStatement | SyntaxKind::ForOfStatement)
            && self.is_same_scope_descendent_of(usage, ast.expression(grandparent), decl_container)
    }

    fn is_used_in_function_or_instance_property(
        &self,
        usage: NodeId,
        declaration: NodeId,
        decl_container: Option<NodeId>,
    ) -> bool {
        let ast = self.ast;
        let mut current = Some(usage);
        while let Some(node) = current {
            if Some(node) == decl_container {
                return false;
            }
            if is_function_like(ast, node) {
                return true;
            }
            if ast.kind(node) == SyntaxKind::ClassStaticBlockDeclaration {
                return ast.node(declaration).pos() < ast.node(usage).pos();
            }
            if let Some(parent) = ast.parent(node) {
                if ast.kind(parent) == SyntaxKind::PropertyDeclaration
                    && ast.initializer(parent) == Some(node)
                    && !is_static(ast, parent)
                {
                    let is_declaration_instance_property =
                        ast.kind(declaration) == SyntaxKind::PropertyDeclaration && !is_static(ast, declaration);
                    if !is_declaration_instance_property
                        || get_containing_class(ast, usage) != get_containing_class(ast, declaration)
                    {
                        return true;
                    }
                }
            }
            current = ast.parent(node);
        }
        false
    }

    fn check_resolved_block_scoped_variable(&mut self, symbol: SymbolId, error_location: NodeId) {
        let ast = self.ast;
        let flags = self.symbol(symbol).flags;
        if flags.intersects(SymbolFlags::ALIAS) {
            return;
        }
        let declaration = self.symbol(symbol).declarations.iter().copied().find(|&d| {
            is_block_or_catch_scoped(ast, d) || is_class_like(ast, d) || ast.kind(d) == SyntaxKind::EnumDeclaration
        });
        let Some(declaration) = declaration else {
            return;
        };
        if is_in_ambient_context(ast, declaration) || self.is_block_scoped_name_declared_before_use(declaration, error_location)
        {
            return;
        }
        let name = self.declaration_name_to_string(ast.name(declaration));
        let message = if flags.intersects(SymbolFlags::BLOCK_SCOPED_VARIABLE) {
            &messages::BLOCK_SCOPED_VARIABLE_0_USED_BEFORE_ITS_DECLARATION
        } else if flags.intersects(SymbolFlags::CLASS) {
            &messages::CLASS_0_USED_BEFORE_ITS_DECLARATION
        } else if flags.intersects(SymbolFlags::REGULAR_ENUM) {
            &messages::ENUM_0_USED_BEFORE_ITS_DECLARATION
        } else {
            return;
        };
        let related = create_diagnostic_for_node(ast, declaration, &messages::_0_IS_DECLARED_HERE, &[name]);
        self.error_with_related(error_location, message, &[name], related);
    }

    fn check_parameter_initializer_reference(
        &mut self,
        error_location: NodeId,
        result: SymbolId,
        meaning: SymbolFlags,
        associated_declaration: NodeId,
    ) {
        let ast = self.ast;
        let associated_name = self.declaration_name_to_string(ast.name(associated_declaration));
        if ast.symbol(associated_declaration) == Some(result) {
            self.error(error_location, &messages::PARAMETER_0_CANNOT_REFERENCE_ITSELF, &[associated_name]);
            return;
        }
        let Some(value_declaration) = self.symbol(result).value_declaration else {
            return;
        };
        if ast.node(value_declaration).pos() <= ast.node(associated_declaration).pos() {
            return;
        }
        let root = get_root_declaration(ast, associated_declaration);
        let name = self.symbol(result).name;
        let declared_in_same_list = ast
            .parent(root)
            .and_then(|function| self.binding.locals(function))
            .and_then(|locals| locals.get(name))
            .is_some_and(|found| found == result && self.symbol(found).flags.intersects(meaning));
        if declared_in_same_list {
            self.error(
                error_location,
                &messages::PARAMETER_0_CANNOT_REFERENCE_IDENTIFIER_1_DECLARED_AFTER_IT,
                &[associated_name, self.declaration_name_to_string(Some(error_location))],
            );
        }
    }

    fn is_valid_type_only_alias_use_site(&self, use_site: NodeId) -> bool {
        let ast = self.ast;
        is_in_ambient_context(ast, use_site) || is_part_of_type_query(ast, use_site) || is_part_of_type_node(ast, use_site)
    }

    fn check_type_only_alias_use(&mut self, error_location: NodeId, result: SymbolId, name: &str) {
        let Some(type_only_declaration) = self.get_type_only_alias_declaration(result, SymbolFlags::VALUE) else {
            return;
        };
        let ast = self.ast;
        let is_export = matches!(
            ast.kind(type_only_declaration),
            SyntaxKind::ExportSpecifier | SyntaxKind::ExportDeclaration | SyntaxKind::NamespaceExport
        );
        let (message, related_message) = if is_export {
            (
                &messages::_0_CANNOT_BE_USED_AS_A_VALUE_BECAUSE_IT_WAS_EXPORTED_USING_EXPORT_TYPE,
                &messages::_0_WAS_EXPORTED_HERE,
            )
        } else {
            (
                &messages::_0_CANNOT_BE_USED_AS_A_VALUE_BECAUSE_IT_WAS_IMPORTED_USING_IMPORT_TYPE,
                &messages::_0_WAS_IMPORTED_HERE,
            )
        };
        let related = create_diagnostic_for_node(ast, type_only_declaration, related_message, &[name]);
        self.error_with_related(error_location, message, &[name], related);
    }

    /// Under `isolatedModules` an import may not shadow a global that
    /// the file uses as a value.
    fn check_isolated_modules_global_conflict(
        &mut self,
        result: SymbolId,
        name: &str,
        meaning: SymbolFlags,
        last_location: Option<NodeId>,
    ) {
        let ast = self.ast;
        let binding = self.binding;
        let Some(file) = last_location.filter(|&l| ast.kind(l) == SyntaxKind::SourceFile) else {
            return;
        };
        let Some(key) = ast.interner().get(name) else {
            return;
        };
        if binding.globals.get(key) != Some(result) {
            return;
        }
        let Some(non_value) = binding
            .locals(file)
            .and_then(|locals| locals.get(key))
            .filter(|&s| !self.symbol(s).flags.intersects(meaning & SymbolFlags::VALUE))
        else {
            return;
        };
        let import_declaration = self.symbol(non_value).declarations.iter().copied().find(|&d| {
            matches!(
                ast.kind(d),
                SyntaxKind::ImportSpecifier
                    | SyntaxKind::ImportClause
                    | SyntaxKind::NamespaceImport
                    | SyntaxKind::ImportEqualsDeclaration
            )
        });
        if let Some(import_declaration) = import_declaration {
            if !self.is_type_only_import_or_export_declaration(import_declaration) {
                self.error(
                    import_declaration,
                    &messages::IMPORT_0_CONFLICTS_WITH_GLOBAL_VALUE_USED_IN_THIS_FILE_SO_MUST_BE_DECLARED_WITH_A_TYPE_ONLY_IMPORT_WHEN_ISOLATEDMODULES_IS_ENABLED,
                    &[name],
                );
            }
        }
    }

    fn resolve_for_report(&mut self, location: NodeId, name: &str, meaning: SymbolFlags) -> Option<SymbolId> {
        NameResolver::new(self.ast, self.binding, self.options).resolve(self, location, name, meaning, None, false, false)
    }
}

/// The `lib` that declares a well-known global.
fn suggested_lib_for_name(name: &str) -> Option<&'static str> {
    let lib = match name {
        "Map" | "Set" | "Promise" | "Symbol" | "WeakMap" | "WeakSet" | "Iterator" | "Reflect" => "es2015",
        "SharedArrayBuffer" | "Atomics" => "es2017",
        "AsyncIterator" | "AsyncIterable" | "AsyncIterableIterator" | "AsyncGenerator" | "AsyncGeneratorFunction" => {
            "es2018"
        }
        "BigInt" | "BigInt64Array" | "BigUint64Array" => "es2020",
        _ => return None,
    };
    Some(lib)
}

impl<'a> NameResolverHost for Checker<'a> {
    fn error(&mut self, location: NodeId, message: &DiagnosticMessage, args: &[&str]) {
        Checker::error(self, location, message, args);
    }

    fn symbol_referenced(&mut self, symbol: SymbolId, meaning: SymbolFlags) {
        if meaning.intersects(SymbolFlags::VALUE) && self.symbol(symbol).has_flags(SymbolFlags::ALIAS) {
            self.alias_symbol_links.get_or_insert(symbol).referenced = true;
        }
    }

    fn on_property_with_invalid_initializer(
        &mut self,
        location: NodeId,
        name: &str,
        declaration: NodeId,
        _result: Option<SymbolId>,
    ) -> bool {
        if self.options.emit_standard_class_fields() {
            return false;
        }
        let ast = self.ast;
        let property_name = self.declaration_name_to_string(ast.name(declaration));
        let in_type = ast
            .type_node(declaration)
            .is_some_and(|type_node| find_ancestor(ast, Some(location), |n| n == type_node).is_some());
        let message = if in_type {
            &messages::TYPE_OF_INSTANCE_MEMBER_VARIABLE_0_CANNOT_REFERENCE_IDENTIFIER_1_DECLARED_IN_THE_CONSTRUCTOR
        } else {
            &messages::INITIALIZER_OF_INSTANCE_MEMBER_VARIABLE_0_CANNOT_REFERENCE_IDENTIFIER_1_DECLARED_IN_THE_CONSTRUCTOR
        };
        Checker::error(self, location, message, &[property_name, name]);
        true
    }

    fn on_failed_to_resolve_symbol(
        &mut self,
        location: NodeId,
        name: &str,
        meaning: SymbolFlags,
        message: &DiagnosticMessage,
    ) {
        if meaning.intersects(SymbolFlags::VALUE) {
            let type_meaning = SymbolFlags::TYPE & !SymbolFlags::VALUE;
            if let Some(found) = self.resolve_for_report(location, name, type_meaning) {
                let target = self.resolve_symbol(found);
                if !self.symbol(target).has_flags(SymbolFlags::VALUE) {
                    Checker::error(
                        self,
                        location,
                        &messages::_0_ONLY_REFERS_TO_A_TYPE_BUT_IS_BEING_USED_AS_A_VALUE_HERE,
                        &[name],
                    );
                    return;
                }
            }
        }
        if meaning.intersects(SymbolFlags::TYPE & !SymbolFlags::NAMESPACE) && !meaning.intersects(SymbolFlags::VALUE) {
            let value_meaning = SymbolFlags::VALUE & !SymbolFlags::TYPE;
            if let Some(found) = self.resolve_for_report(location, name, value_meaning) {
                let target = self.resolve_symbol(found);
                if !self.symbol(target).has_flags(SymbolFlags::NAMESPACE) {
                    Checker::error(
                        self,
                        location,
                        &messages::_0_REFERS_TO_A_VALUE_BUT_IS_BEING_USED_AS_A_TYPE_HERE_DID_YOU_MEAN_TYPEOF_0,
                        &[name],
                    );
                    return;
                }
            }
        }
        match suggested_lib_for_name(name) {
            Some(lib) if message.code == messages::CANNOT_FIND_NAME_0_DO_YOU_NEED_TO_CHANGE_YOUR_TARGET_LIBRARY.code => {
                Checker::error(self, location, message, &[name, lib]);
            }
            _ => Checker::error(self, location, message, &[name]),
        }
    }

    fn on_successfully_resolved_symbol(
        &mut self,
        location: NodeId,
        result: SymbolId,
        meaning: SymbolFlags,
        last_location: Option<NodeId>,
        associated_declaration: Option<NodeId>,
        within_deferred_context: bool,
    ) {
        let ast = self.ast;
        let checks_block_scope = meaning.intersects(SymbolFlags::BLOCK_SCOPED_VARIABLE)
            || (meaning.intersects(SymbolFlags::CLASS | SymbolFlags::ENUM) && meaning.contains(SymbolFlags::VALUE));
        if checks_block_scope {
            let mut target = result;
            if self.symbol(target).has_flags(SymbolFlags::EXPORT_VALUE) {
                if let Some(export_symbol) = self.symbol(target).export_symbol {
                    target = export_symbol;
                }
            }
            if self
                .symbol(target)
                .has_flags(SymbolFlags::BLOCK_SCOPED_VARIABLE | SymbolFlags::CLASS | SymbolFlags::ENUM)
            {
                self.check_resolved_block_scoped_variable(target, location);
            }
        }

        if let Some(associated) = associated_declaration {
            if !within_deferred_context && meaning.contains(SymbolFlags::VALUE) {
                self.check_parameter_initializer_reference(location, result, meaning, associated);
            }
        }

        let name = ast.text(location);
        let flags = self.symbol(result).flags;
        if meaning.intersects(SymbolFlags::VALUE)
            && flags.intersects(SymbolFlags::ALIAS)
            && !flags.intersects(SymbolFlags::VALUE)
            && !self.is_valid_type_only_alias_use_site(location)
        {
            self.check_type_only_alias_use(location, result, name);
        }

        if self.options.isolated_modules_enabled()
            && ast.file_of(location).is_external_module()
            && meaning.contains(SymbolFlags::VALUE)
        {
            self.check_isolated_modules_global_conflict(result, name, meaning, last_location);
        }
    }

    /// Table lookup that sees through aliases: an alias matches when the
    /// symbol it resolves to has the requested meaning.
    fn lookup(
        &mut self,
        _binding: &Binding,
        table: &SymbolTable,
        name: InternedString,
        meaning: SymbolFlags,
    ) -> Option<SymbolId> {
        let meaning = meaning & !SymbolFlags::GLOBAL_LOOKUP;
        if meaning.is_empty() {
            return None;
        }
        let symbol = table.get(name)?;
        let flags = self.symbol(symbol).flags;
        if flags.intersects(meaning) {
            return Some(symbol);
        }
        if flags.intersects(SymbolFlags::ALIAS) {
            let target_flags = self.get_symbol_flags_of_alias(symbol);
            // An unresolvable alias matches every meaning
            if target_flags.intersects(meaning) {
                return Some(symbol);
            }
        }
        None
    }

    fn get_requires_scope_change_cache(&mut self, function: NodeId) -> Tristate {
        self.node_links
            .try_get(function)
            .map_or(Tristate::Unknown, |links| links.declaration_requires_scope_change)
    }

    fn set_requires_scope_change_cache(&mut self, function: NodeId, value: Tristate) {
        self.node_links.get_or_insert(function).declaration_requires_scope_change = value;
    }
}

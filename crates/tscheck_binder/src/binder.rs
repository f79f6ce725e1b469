//! The binder implementation.
//!
//! Walks each source file and declares a symbol for every declaration.
//! Handles:
//! - Locals, members and exports tables per container
//! - Function-scoped and block-scoped declarations
//! - Exported module members and their `ExportValue` locals
//! - Declaration merging and duplicate-declaration diagnostics
//! - `infer` type parameters scoped to their conditional type
//! - Merging script files and `declare global` blocks into the globals

use crate::symbol::{get_excluded_symbol_flags, internal_names, Symbol, SymbolTable};
use rustc_hash::FxHashMap;
use tscheck_ast::types::{ModifierFlags, NodeFlags, NodeId, SymbolFlags, SymbolId};
use tscheck_ast::utilities::*;
use tscheck_ast::{Ast, NodePayload, SyntaxKind};
use tscheck_core::intern::{InternedString, StringInterner};
use tscheck_diagnostics::{messages, Diagnostic, DiagnosticCollection, DiagnosticMessage};
use tscheck_options::CompilerOptions;
use tracing::{debug, trace};

/// Symbols and scopes of a bound program.
#[derive(Debug)]
pub struct Binding {
    /// All symbols, indexed by `SymbolId`.
    pub symbols: Vec<Symbol>,
    /// Locals of each container that declared any.
    pub locals: FxHashMap<NodeId, SymbolTable>,
    /// Script-file locals and `declare global` members.
    pub globals: SymbolTable,
    /// The implicit `arguments` binding of non-arrow functions.
    pub arguments_symbol: SymbolId,
    /// Duplicate-declaration and misplaced-declaration errors.
    pub diagnostics: DiagnosticCollection,
}

impl Binding {
    pub fn new(interner: &StringInterner) -> Self {
        let mut binding = Self {
            symbols: Vec::new(),
            locals: FxHashMap::default(),
            globals: SymbolTable::new(),
            arguments_symbol: SymbolId::INVALID,
            diagnostics: DiagnosticCollection::new(),
        };
        binding.arguments_symbol = binding.create_symbol(
            SymbolFlags::PROPERTY | SymbolFlags::TRANSIENT,
            interner.intern(internal_names::ARGUMENTS),
        );
        binding
    }

    pub fn create_symbol(&mut self, flags: SymbolFlags, name: InternedString) -> SymbolId {
        let id = SymbolId(self.symbols.len() as u32);
        self.symbols.push(Symbol::new(id, name, flags));
        id
    }

    #[inline]
    pub fn symbol(&self, id: SymbolId) -> &Symbol {
        &self.symbols[id.index()]
    }

    #[inline]
    pub fn symbol_mut(&mut self, id: SymbolId) -> &mut Symbol {
        &mut self.symbols[id.index()]
    }

    pub fn locals(&self, container: NodeId) -> Option<&SymbolTable> {
        self.locals.get(&container)
    }

    pub fn members(&self, symbol: SymbolId) -> Option<&SymbolTable> {
        self.symbol(symbol).members.as_ref()
    }

    pub fn exports(&self, symbol: SymbolId) -> Option<&SymbolTable> {
        self.symbol(symbol).exports.as_ref()
    }

    pub fn take_diagnostics(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.diagnostics).into_diagnostics()
    }
}

/// Bind every file of `ast` in program order.
pub fn bind_program(ast: &mut Ast, options: &CompilerOptions) -> Binding {
    let files = ast.files().to_vec();
    let mut binder = Binder::new(ast, options);
    for file in files {
        binder.bind_source_file(file);
    }
    binder.finish()
}

bitflags::bitflags! {
    /// How a node scopes the declarations beneath it.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ContainerFlags: u32 {
        const NONE                        = 0;
        /// Declarations go into this node's symbol tables.
        const IS_CONTAINER                = 1 << 0;
        /// Block-scoped declarations go into this node's locals.
        const IS_BLOCK_SCOPED_CONTAINER   = 1 << 1;
        const HAS_LOCALS                  = 1 << 2;
        const IS_INTERFACE                = 1 << 3;
    }
}

pub fn get_container_flags(ast: &Ast, node: NodeId) -> ContainerFlags {
    match ast.kind(node) {
        SyntaxKind::ClassExpression
        | SyntaxKind::ClassDeclaration
        | SyntaxKind::EnumDeclaration
        | SyntaxKind::ObjectLiteralExpression
        | SyntaxKind::TypeLiteral => ContainerFlags::IS_CONTAINER,
        SyntaxKind::InterfaceDeclaration => ContainerFlags::IS_CONTAINER | ContainerFlags::IS_INTERFACE,
        SyntaxKind::ModuleDeclaration
        | SyntaxKind::TypeAliasDeclaration
        | SyntaxKind::MappedType
        | SyntaxKind::IndexSignature
        | SyntaxKind::SourceFile
        | SyntaxKind::GetAccessor
        | SyntaxKind::SetAccessor
        | SyntaxKind::MethodDeclaration
        | SyntaxKind::Constructor
        | SyntaxKind::FunctionDeclaration
        | SyntaxKind::MethodSignature
        | SyntaxKind::CallSignature
        | SyntaxKind::FunctionType
        | SyntaxKind::ConstructSignature
        | SyntaxKind::ConstructorType
        | SyntaxKind::ClassStaticBlockDeclaration
        | SyntaxKind::FunctionExpression
        | SyntaxKind::ArrowFunction => ContainerFlags::IS_CONTAINER | ContainerFlags::HAS_LOCALS,
        SyntaxKind::CatchClause
        | SyntaxKind::ForStatement
        | SyntaxKind::ForInStatement
        | SyntaxKind::ForOfStatement
        | SyntaxKind::CaseBlock => ContainerFlags::IS_BLOCK_SCOPED_CONTAINER | ContainerFlags::HAS_LOCALS,
        SyntaxKind::Block => {
            // A function body shares the locals of its function.
            let in_function = ast.parent(node).is_some_and(|p| {
                is_function_like(ast, p) || ast.kind(p) == SyntaxKind::ClassStaticBlockDeclaration
            });
            if in_function {
                ContainerFlags::NONE
            } else {
                ContainerFlags::IS_BLOCK_SCOPED_CONTAINER | ContainerFlags::HAS_LOCALS
            }
        }
        _ => ContainerFlags::NONE,
    }
}

// ============================================================================
// Module instance state
// ============================================================================

/// Whether a namespace produces a runtime value. Ordered so that the
/// strongest state of a body wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ModuleInstanceState {
    NonInstantiated,
    Instantiated,
    ConstEnumOnly,
}

pub fn get_module_instance_state(ast: &Ast, module: NodeId) -> ModuleInstanceState {
    let mut visited = FxHashMap::default();
    module_instance_state_of_module(ast, module, &mut visited)
}

type InstanceStateCache = FxHashMap<NodeId, Option<ModuleInstanceState>>;

fn module_instance_state_of_module(ast: &Ast, module: NodeId, visited: &mut InstanceStateCache) -> ModuleInstanceState {
    match ast.body(module) {
        Some(body) => module_instance_state_cached(ast, body, visited),
        None => ModuleInstanceState::Instantiated,
    }
}

fn module_instance_state_cached(ast: &Ast, node: NodeId, visited: &mut InstanceStateCache) -> ModuleInstanceState {
    if let Some(state) = visited.get(&node) {
        // In progress: a cycle through export specifiers.
        return state.unwrap_or(ModuleInstanceState::NonInstantiated);
    }
    visited.insert(node, None);
    let state = module_instance_state_worker(ast, node, visited);
    visited.insert(node, Some(state));
    state
}

fn module_instance_state_worker(ast: &Ast, node: NodeId, visited: &mut InstanceStateCache) -> ModuleInstanceState {
    match ast.kind(node) {
        SyntaxKind::InterfaceDeclaration | SyntaxKind::TypeAliasDeclaration => {
            return ModuleInstanceState::NonInstantiated;
        }
        SyntaxKind::EnumDeclaration if is_enum_const(ast, node) => {
            return ModuleInstanceState::ConstEnumOnly;
        }
        SyntaxKind::ImportDeclaration | SyntaxKind::ImportEqualsDeclaration
            if !has_syntactic_modifier(ast, node, ModifierFlags::EXPORT) =>
        {
            return ModuleInstanceState::NonInstantiated;
        }
        SyntaxKind::ExportDeclaration => {
            if let NodePayload::ExportDeclaration {
                export_clause: Some(clause),
                module_specifier: None,
                ..
            } = &ast.node(node).payload
            {
                if ast.kind(*clause) == SyntaxKind::NamedExports {
                    let specifiers: Vec<NodeId> = ast.elements(*clause).map(|l| l.iter().collect()).unwrap_or_default();
                    let mut state = ModuleInstanceState::NonInstantiated;
                    for specifier in specifiers {
                        let specifier_state = module_instance_state_for_alias_target(ast, specifier, visited);
                        if specifier_state > state {
                            state = specifier_state;
                        }
                        if state == ModuleInstanceState::Instantiated {
                            return state;
                        }
                    }
                    return state;
                }
            }
        }
        SyntaxKind::ModuleBlock => {
            let mut state = ModuleInstanceState::NonInstantiated;
            ast.for_each_child(node, |child| match module_instance_state_cached(ast, child, visited) {
                ModuleInstanceState::NonInstantiated => false,
                ModuleInstanceState::ConstEnumOnly => {
                    state = ModuleInstanceState::ConstEnumOnly;
                    false
                }
                ModuleInstanceState::Instantiated => {
                    state = ModuleInstanceState::Instantiated;
                    true
                }
            });
            return state;
        }
        SyntaxKind::ModuleDeclaration => return module_instance_state_of_module(ast, node, visited),
        _ => {}
    }
    ModuleInstanceState::Instantiated
}

/// State of the local declaration an `export { x }` specifier refers to.
fn module_instance_state_for_alias_target(
    ast: &Ast,
    specifier: NodeId,
    visited: &mut InstanceStateCache,
) -> ModuleInstanceState {
    let Some(name) = ast.property_name(specifier).or_else(|| ast.name(specifier)) else {
        return ModuleInstanceState::Instantiated;
    };
    if ast.kind(name) != SyntaxKind::Identifier {
        return ModuleInstanceState::Instantiated;
    }
    let text = ast.text(name);
    let mut ancestor = ast.parent(specifier);
    while let Some(scope) = ancestor {
        if matches!(
            ast.kind(scope),
            SyntaxKind::Block | SyntaxKind::ModuleBlock | SyntaxKind::SourceFile
        ) {
            let statements: Vec<NodeId> = ast.statements(scope).map(|l| l.iter().collect()).unwrap_or_default();
            let mut found: Option<ModuleInstanceState> = None;
            for statement in statements {
                if !statement_has_name(ast, statement, text) {
                    continue;
                }
                let state = module_instance_state_cached(ast, statement, visited);
                if found.map_or(true, |f| state > f) {
                    found = Some(state);
                }
                if found == Some(ModuleInstanceState::Instantiated) {
                    return ModuleInstanceState::Instantiated;
                }
                if ast.kind(statement) == SyntaxKind::ImportEqualsDeclaration {
                    found = Some(ModuleInstanceState::Instantiated);
                }
            }
            if let Some(found) = found {
                return found;
            }
        }
        ancestor = ast.parent(scope);
    }
    ModuleInstanceState::Instantiated
}

fn statement_has_name(ast: &Ast, statement: NodeId, text: &str) -> bool {
    if let Some(name) = ast.name(statement) {
        return ast.kind(name) == SyntaxKind::Identifier && ast.text(name) == text;
    }
    if let NodePayload::VariableStatement { declaration_list, .. } = &ast.node(statement).payload {
        return ast
            .elements(*declaration_list)
            .is_some_and(|list| list.iter().any(|d| statement_has_name(ast, d, text)));
    }
    false
}

// ============================================================================
// Binder
// ============================================================================

/// Symbol table a declaration is entered into.
#[derive(Debug, Clone, Copy)]
enum Table {
    Locals(NodeId),
    Members(SymbolId),
    Exports(SymbolId),
    GlobalExports(SymbolId),
    Globals,
}

/// The binder creates symbols and links declarations.
pub struct Binder<'a> {
    ast: &'a mut Ast,
    options: &'a CompilerOptions,
    /// Everything bound so far, across files.
    binding: Binding,
    /// The file being bound.
    file: NodeId,
    /// Nearest node whose tables receive declarations.
    container: NodeId,
    /// Nearest node whose locals receive block-scoped declarations.
    block_scope_container: NodeId,
    /// Whether we're in a strict mode context.
    in_strict_mode: bool,
    /// A `this` type was seen in the current interface.
    seen_this_keyword: bool,
}

impl<'a> Binder<'a> {
    pub fn new(ast: &'a mut Ast, options: &'a CompilerOptions) -> Self {
        let binding = Binding::new(ast.interner());
        Self {
            ast,
            options,
            binding,
            file: NodeId::INVALID,
            container: NodeId::INVALID,
            block_scope_container: NodeId::INVALID,
            in_strict_mode: false,
            seen_this_keyword: false,
        }
    }

    pub fn finish(self) -> Binding {
        self.binding
    }

    // ========================================================================
    // Source file binding
    // ========================================================================

    pub fn bind_source_file(&mut self, file: NodeId) {
        let data = self.ast.source_file(file);
        let file_name = data.file_name.clone();
        debug!(file = %file_name, "binding source file");
        let symbols_before = self.binding.symbols.len();

        self.in_strict_mode =
            (self.options.always_strict_enabled() && !data.is_declaration_file) || data.is_external_module();
        self.file = file;
        self.container = file;
        self.block_scope_container = file;
        self.seen_this_keyword = false;

        self.bind(file);
        self.merge_file_into_globals(file);

        debug!(
            file = %file_name,
            symbols = self.binding.symbols.len() - symbols_before,
            diagnostics = self.binding.diagnostics.len(),
            "bound source file"
        );
    }

    fn bind(&mut self, node: NodeId) {
        let save_in_strict_mode = self.in_strict_mode;
        self.bind_worker(node);
        if !self.ast.kind(node).is_token() {
            let flags = get_container_flags(self.ast, node);
            if flags == ContainerFlags::NONE {
                self.bind_children(node);
            } else {
                self.bind_container(node, flags);
            }
        }
        self.in_strict_mode = save_in_strict_mode;
    }

    fn bind_container(&mut self, node: NodeId, flags: ContainerFlags) {
        let save_container = self.container;
        let save_block_scope_container = self.block_scope_container;
        if flags.contains(ContainerFlags::IS_CONTAINER) {
            self.container = node;
            self.block_scope_container = node;
        } else if flags.contains(ContainerFlags::IS_BLOCK_SCOPED_CONTAINER) {
            self.block_scope_container = node;
        }
        if flags.contains(ContainerFlags::IS_INTERFACE) {
            self.seen_this_keyword = false;
            self.bind_children(node);
            let node_flags = &mut self.ast.node_mut(node).flags;
            node_flags.set(NodeFlags::CONTAINS_THIS, self.seen_this_keyword);
        } else {
            self.bind_children(node);
        }
        self.container = save_container;
        self.block_scope_container = save_block_scope_container;
    }

    fn bind_children(&mut self, node: NodeId) {
        match self.ast.kind(node) {
            SyntaxKind::SourceFile | SyntaxKind::Block | SyntaxKind::ModuleBlock => {
                // Function declarations are hoisted.
                let statements = self.statements_of(node);
                for &statement in &statements {
                    if self.ast.kind(statement) == SyntaxKind::FunctionDeclaration {
                        self.bind(statement);
                    }
                }
                for &statement in &statements {
                    if self.ast.kind(statement) != SyntaxKind::FunctionDeclaration {
                        self.bind(statement);
                    }
                }
            }
            _ => {
                for child in self.ast.children(node) {
                    self.bind(child);
                }
            }
        }
    }

    fn bind_worker(&mut self, node: NodeId) {
        match self.ast.kind(node) {
            SyntaxKind::ThisType => self.seen_this_keyword = true,
            SyntaxKind::TypeParameter => self.bind_type_parameter(node),
            SyntaxKind::Parameter => self.bind_parameter(node),
            SyntaxKind::VariableDeclaration | SyntaxKind::BindingElement => {
                self.bind_variable_declaration_or_binding_element(node)
            }
            SyntaxKind::PropertyDeclaration | SyntaxKind::PropertySignature => {
                let includes = SymbolFlags::PROPERTY | self.optional_flag(node);
                self.bind_property_or_method_or_accessor(node, includes, SymbolFlags::PROPERTY_EXCLUDES);
            }
            SyntaxKind::PropertyAssignment | SyntaxKind::ShorthandPropertyAssignment => {
                self.bind_property_or_method_or_accessor(node, SymbolFlags::PROPERTY, SymbolFlags::PROPERTY_EXCLUDES)
            }
            SyntaxKind::EnumMember => {
                self.bind_property_or_method_or_accessor(node, SymbolFlags::ENUM_MEMBER, SymbolFlags::ENUM_MEMBER_EXCLUDES)
            }
            SyntaxKind::CallSignature | SyntaxKind::ConstructSignature | SyntaxKind::IndexSignature => {
                self.declare_symbol_and_add_to_symbol_table(node, SymbolFlags::SIGNATURE, SymbolFlags::NONE);
            }
            SyntaxKind::MethodDeclaration | SyntaxKind::MethodSignature => {
                let includes = SymbolFlags::METHOD | self.optional_flag(node);
                let is_object_literal_method = self.ast.kind(node) == SyntaxKind::MethodDeclaration
                    && self
                        .ast
                        .parent(node)
                        .is_some_and(|p| self.ast.kind(p) == SyntaxKind::ObjectLiteralExpression);
                let excludes = if is_object_literal_method {
                    SymbolFlags::PROPERTY_EXCLUDES
                } else {
                    SymbolFlags::METHOD_EXCLUDES
                };
                self.bind_property_or_method_or_accessor(node, includes, excludes);
            }
            SyntaxKind::FunctionDeclaration => self.bind_function_declaration(node),
            SyntaxKind::Constructor => {
                self.declare_symbol_and_add_to_symbol_table(node, SymbolFlags::CONSTRUCTOR, SymbolFlags::NONE);
            }
            SyntaxKind::GetAccessor => {
                self.bind_property_or_method_or_accessor(node, SymbolFlags::GET_ACCESSOR, SymbolFlags::GET_ACCESSOR_EXCLUDES)
            }
            SyntaxKind::SetAccessor => {
                self.bind_property_or_method_or_accessor(node, SymbolFlags::SET_ACCESSOR, SymbolFlags::SET_ACCESSOR_EXCLUDES)
            }
            SyntaxKind::FunctionType | SyntaxKind::ConstructorType => self.bind_function_or_constructor_type(node),
            SyntaxKind::TypeLiteral | SyntaxKind::MappedType => {
                self.bind_anonymous_declaration(node, SymbolFlags::TYPE_LITERAL, internal_names::TYPE)
            }
            SyntaxKind::ObjectLiteralExpression => {
                self.bind_anonymous_declaration(node, SymbolFlags::OBJECT_LITERAL, internal_names::OBJECT)
            }
            SyntaxKind::FunctionExpression | SyntaxKind::ArrowFunction => {
                let name = match self.ast.name(node) {
                    Some(name) => self.ast.text(name).to_string(),
                    None => internal_names::FUNCTION.to_string(),
                };
                self.bind_anonymous_declaration(node, SymbolFlags::FUNCTION, &name);
            }
            SyntaxKind::ClassDeclaration | SyntaxKind::ClassExpression => {
                self.in_strict_mode = true;
                self.bind_class_like_declaration(node);
            }
            SyntaxKind::InterfaceDeclaration => {
                self.bind_block_scoped_declaration(node, SymbolFlags::INTERFACE, SymbolFlags::INTERFACE_EXCLUDES)
            }
            SyntaxKind::TypeAliasDeclaration => {
                self.bind_block_scoped_declaration(node, SymbolFlags::TYPE_ALIAS, SymbolFlags::TYPE_ALIAS_EXCLUDES)
            }
            SyntaxKind::EnumDeclaration => {
                if is_enum_const(self.ast, node) {
                    self.bind_block_scoped_declaration(node, SymbolFlags::CONST_ENUM, SymbolFlags::CONST_ENUM_EXCLUDES)
                } else {
                    self.bind_block_scoped_declaration(node, SymbolFlags::REGULAR_ENUM, SymbolFlags::REGULAR_ENUM_EXCLUDES)
                }
            }
            SyntaxKind::ModuleDeclaration => self.bind_module_declaration(node),
            SyntaxKind::ImportEqualsDeclaration
            | SyntaxKind::NamespaceImport
            | SyntaxKind::ImportSpecifier
            | SyntaxKind::ExportSpecifier => {
                self.declare_symbol_and_add_to_symbol_table(node, SymbolFlags::ALIAS, SymbolFlags::ALIAS_EXCLUDES);
            }
            SyntaxKind::NamespaceExportDeclaration => self.bind_namespace_export_declaration(node),
            SyntaxKind::ImportClause => {
                if self.ast.name(node).is_some() {
                    self.declare_symbol_and_add_to_symbol_table(node, SymbolFlags::ALIAS, SymbolFlags::ALIAS_EXCLUDES);
                }
            }
            SyntaxKind::ExportDeclaration => self.bind_export_declaration(node),
            SyntaxKind::ExportAssignment => self.bind_export_assignment(node),
            SyntaxKind::SourceFile => {
                self.update_strict_mode_statement_list(node);
                self.set_export_context_flag(node);
                if is_external_module(self.ast, node) {
                    let name = format!("\"{}\"", remove_file_extension(&self.ast.source_file(node).file_name));
                    self.bind_anonymous_declaration(node, SymbolFlags::VALUE_MODULE, &name);
                }
            }
            SyntaxKind::Block => {
                let in_function = self.ast.parent(node).is_some_and(|p| {
                    is_function_like(self.ast, p) || self.ast.kind(p) == SyntaxKind::ClassStaticBlockDeclaration
                });
                if in_function {
                    self.update_strict_mode_statement_list(node);
                }
            }
            SyntaxKind::ModuleBlock => self.update_strict_mode_statement_list(node),
            _ => {}
        }
    }

    // ========================================================================
    // Declarations
    // ========================================================================

    fn bind_type_parameter(&mut self, node: NodeId) {
        let parent = self.ast.parent(node);
        if let Some(infer) = parent.filter(|&p| self.ast.kind(p) == SyntaxKind::InferType) {
            match self.infer_type_container(infer) {
                Some(conditional) => {
                    self.declare_symbol(
                        Table::Locals(conditional),
                        None,
                        node,
                        SymbolFlags::TYPE_PARAMETER,
                        SymbolFlags::TYPE_PARAMETER_EXCLUDES,
                    );
                }
                None => {
                    let name = self.declaration_name(node);
                    self.bind_anonymous_declaration(node, SymbolFlags::TYPE_PARAMETER, &name);
                }
            }
        } else {
            self.declare_symbol_and_add_to_symbol_table(
                node,
                SymbolFlags::TYPE_PARAMETER,
                SymbolFlags::TYPE_PARAMETER_EXCLUDES,
            );
        }
    }

    /// The conditional type whose `extends` clause contains `infer`.
    fn infer_type_container(&self, infer: NodeId) -> Option<NodeId> {
        let ast = &*self.ast;
        let extends_type = find_ancestor(ast, Some(infer), |n| {
            ast.parent(n).is_some_and(|p| {
                matches!(&ast.node(p).payload, NodePayload::ConditionalType { extends_type, .. } if *extends_type == n)
            })
        });
        extends_type.and_then(|n| ast.parent(n))
    }

    fn bind_parameter(&mut self, node: NodeId) {
        let name = self.ast.name(node);
        let parent = self.ast.parent(node);
        if name.is_some_and(|n| is_binding_pattern_kind(self.ast.kind(n))) {
            let index = parent
                .and_then(|p| self.ast.parameters(p))
                .and_then(|params| params.iter().position(|p| p == node))
                .unwrap_or(0);
            self.bind_anonymous_declaration(node, SymbolFlags::FUNCTION_SCOPED_VARIABLE, &format!("__{}", index));
        } else {
            self.declare_symbol_and_add_to_symbol_table(
                node,
                SymbolFlags::FUNCTION_SCOPED_VARIABLE,
                SymbolFlags::PARAMETER_EXCLUDES,
            );
        }

        // Parameter properties are also members of the class.
        let is_parameter_property = self.ast.modifier_flags(node).intersects(ModifierFlags::PARAMETER_PROPERTY_MODIFIER)
            && parent.is_some_and(|p| self.ast.kind(p) == SyntaxKind::Constructor);
        if is_parameter_property {
            let class_symbol = parent.and_then(|ctor| self.ast.parent(ctor)).and_then(|class| self.ast.symbol(class));
            if let Some(class_symbol) = class_symbol {
                let flags = SymbolFlags::PROPERTY | self.optional_flag(node);
                self.declare_symbol(
                    Table::Members(class_symbol),
                    Some(class_symbol),
                    node,
                    flags,
                    SymbolFlags::PROPERTY_EXCLUDES,
                );
            }
        }
    }

    fn bind_variable_declaration_or_binding_element(&mut self, node: NodeId) {
        let Some(name) = self.ast.name(node) else {
            return;
        };
        if is_binding_pattern_kind(self.ast.kind(name)) {
            return;
        }
        if is_block_or_catch_scoped(self.ast, node) {
            self.bind_block_scoped_declaration(
                node,
                SymbolFlags::BLOCK_SCOPED_VARIABLE,
                SymbolFlags::BLOCK_SCOPED_VARIABLE_EXCLUDES,
            );
        } else if is_part_of_parameter_declaration(self.ast, node) {
            self.declare_symbol_and_add_to_symbol_table(
                node,
                SymbolFlags::FUNCTION_SCOPED_VARIABLE,
                SymbolFlags::PARAMETER_EXCLUDES,
            );
        } else {
            self.declare_symbol_and_add_to_symbol_table(
                node,
                SymbolFlags::FUNCTION_SCOPED_VARIABLE,
                SymbolFlags::FUNCTION_SCOPED_VARIABLE_EXCLUDES,
            );
        }
    }

    fn bind_property_or_method_or_accessor(&mut self, node: NodeId, includes: SymbolFlags, excludes: SymbolFlags) {
        if has_dynamic_name(self.ast, node) {
            self.bind_anonymous_declaration(node, includes, internal_names::COMPUTED);
        } else {
            self.declare_symbol_and_add_to_symbol_table(node, includes, excludes);
        }
    }

    fn bind_function_declaration(&mut self, node: NodeId) {
        if self.in_strict_mode {
            self.bind_block_scoped_declaration(node, SymbolFlags::FUNCTION, SymbolFlags::FUNCTION_EXCLUDES);
        } else {
            self.declare_symbol_and_add_to_symbol_table(node, SymbolFlags::FUNCTION, SymbolFlags::FUNCTION_EXCLUDES);
        }
    }

    /// `(x) => T` gets the same symbols as `{ (x): T }`.
    fn bind_function_or_constructor_type(&mut self, node: NodeId) {
        let signature_name = self.declaration_name(node);
        let signature = self.new_symbol(SymbolFlags::SIGNATURE, &signature_name);
        self.add_declaration_to_symbol(signature, node, SymbolFlags::SIGNATURE);
        let type_literal = self.new_symbol(SymbolFlags::TYPE_LITERAL, internal_names::TYPE);
        self.add_declaration_to_symbol(type_literal, node, SymbolFlags::TYPE_LITERAL);
        let name = self.binding.symbol(signature).name;
        let mut members = SymbolTable::new();
        members.set(name, signature);
        self.binding.symbol_mut(type_literal).members = Some(members);
    }

    fn bind_class_like_declaration(&mut self, node: NodeId) {
        if self.ast.kind(node) == SyntaxKind::ClassDeclaration {
            self.bind_block_scoped_declaration(node, SymbolFlags::CLASS, SymbolFlags::CLASS_EXCLUDES);
        } else {
            let name = match self.ast.name(node) {
                Some(name) => self.ast.text(name).to_string(),
                None => internal_names::CLASS.to_string(),
            };
            self.bind_anonymous_declaration(node, SymbolFlags::CLASS, &name);
        }
        let Some(class_symbol) = self.ast.symbol(node) else {
            return;
        };

        // Every class has an implicit static `prototype` property.
        let prototype = self.new_symbol(SymbolFlags::PROPERTY | SymbolFlags::PROTOTYPE, internal_names::PROTOTYPE);
        let prototype_name = self.binding.symbol(prototype).name;
        let existing = self
            .binding
            .exports(class_symbol)
            .and_then(|exports| exports.get(prototype_name))
            .and_then(|existing| self.binding.symbol(existing).first_declaration());
        if let Some(declaration) = existing {
            let diagnostic = create_diagnostic_for_node(
                self.ast,
                declaration,
                &messages::DUPLICATE_IDENTIFIER_0,
                &[internal_names::PROTOTYPE],
            );
            self.binding.diagnostics.add(diagnostic);
        }
        self.table_mut(Table::Exports(class_symbol)).set(prototype_name, prototype);
        self.binding.symbol_mut(prototype).parent = Some(class_symbol);
    }

    fn bind_module_declaration(&mut self, node: NodeId) {
        self.set_export_context_flag(node);
        if is_ambient_module(self.ast, node) {
            if has_syntactic_modifier(self.ast, node, ModifierFlags::EXPORT) {
                let diagnostic = create_diagnostic_for_first_token(
                    self.ast,
                    node,
                    &messages::EXPORT_MODIFIER_CANNOT_BE_APPLIED_TO_AMBIENT_MODULES_AND_MODULE_AUGMENTATIONS_SINCE_THEY_ARE_ALWAYS_VISIBLE,
                    &[],
                );
                self.binding.diagnostics.add(diagnostic);
            }
            if is_module_augmentation_external(self.ast, node) {
                self.declare_module_symbol(node);
            } else {
                self.declare_symbol_and_add_to_symbol_table(
                    node,
                    SymbolFlags::VALUE_MODULE,
                    SymbolFlags::VALUE_MODULE_EXCLUDES,
                );
            }
        } else {
            self.declare_module_symbol(node);
        }
    }

    fn declare_module_symbol(&mut self, node: NodeId) -> ModuleInstanceState {
        let state = get_module_instance_state(self.ast, node);
        if state == ModuleInstanceState::NonInstantiated {
            self.declare_symbol_and_add_to_symbol_table(
                node,
                SymbolFlags::NAMESPACE_MODULE,
                SymbolFlags::NAMESPACE_MODULE_EXCLUDES,
            );
        } else {
            self.declare_symbol_and_add_to_symbol_table(
                node,
                SymbolFlags::VALUE_MODULE,
                SymbolFlags::VALUE_MODULE_EXCLUDES,
            );
        }
        state
    }

    fn bind_namespace_export_declaration(&mut self, node: NodeId) {
        if self.ast.modifiers(node).is_some() {
            self.error_on_node(node, &messages::MODIFIERS_CANNOT_APPEAR_HERE);
        }
        let parent = self.ast.parent(node);
        let Some(file) = parent.filter(|&p| self.ast.kind(p) == SyntaxKind::SourceFile) else {
            self.error_on_node(node, &messages::GLOBAL_MODULE_EXPORTS_MAY_ONLY_APPEAR_AT_TOP_LEVEL);
            return;
        };
        if !is_external_module(self.ast, file) {
            self.error_on_node(node, &messages::GLOBAL_MODULE_EXPORTS_MAY_ONLY_APPEAR_IN_MODULE_FILES);
        } else if !self.ast.source_file(file).is_declaration_file {
            self.error_on_node(node, &messages::GLOBAL_MODULE_EXPORTS_MAY_ONLY_APPEAR_IN_DECLARATION_FILES);
        } else if let Some(file_symbol) = self.ast.symbol(file) {
            self.declare_symbol(
                Table::GlobalExports(file_symbol),
                Some(file_symbol),
                node,
                SymbolFlags::ALIAS,
                SymbolFlags::ALIAS_EXCLUDES,
            );
        }
    }

    fn bind_export_declaration(&mut self, node: NodeId) {
        let export_clause = match &self.ast.node(node).payload {
            NodePayload::ExportDeclaration { export_clause, .. } => *export_clause,
            _ => None,
        };
        match self.ast.symbol(self.container) {
            // `export *` inside a block.
            None => {
                let name = self.declaration_name(node);
                self.bind_anonymous_declaration(node, SymbolFlags::EXPORT_STAR, &name);
            }
            Some(container_symbol) => match export_clause {
                None => {
                    self.declare_symbol(
                        Table::Exports(container_symbol),
                        Some(container_symbol),
                        node,
                        SymbolFlags::EXPORT_STAR,
                        SymbolFlags::NONE,
                    );
                }
                Some(clause) if self.ast.kind(clause) == SyntaxKind::NamespaceExport => {
                    self.declare_symbol(
                        Table::Exports(container_symbol),
                        Some(container_symbol),
                        clause,
                        SymbolFlags::ALIAS,
                        SymbolFlags::ALIAS_EXCLUDES,
                    );
                }
                Some(_) => {}
            },
        }
    }

    fn bind_export_assignment(&mut self, node: NodeId) {
        match self.ast.symbol(self.container) {
            None => {
                let name = self.declaration_name(node);
                self.bind_anonymous_declaration(node, SymbolFlags::VALUE, &name);
            }
            Some(container_symbol) => {
                let is_alias = self
                    .ast
                    .expression(node)
                    .is_some_and(|e| is_entity_name_expression(self.ast, e));
                let flags = if is_alias {
                    SymbolFlags::ALIAS
                } else {
                    SymbolFlags::PROPERTY
                };
                // `export default x` excludes every other default export.
                let symbol = self.declare_symbol(
                    Table::Exports(container_symbol),
                    Some(container_symbol),
                    node,
                    flags,
                    SymbolFlags::all(),
                );
                if is_export_equals(self.ast, node) {
                    set_value_declaration(self.ast, self.binding.symbol_mut(symbol), node);
                }
            }
        }
    }

    // ========================================================================
    // Symbol tables
    // ========================================================================

    fn declare_symbol_and_add_to_symbol_table(
        &mut self,
        node: NodeId,
        includes: SymbolFlags,
        excludes: SymbolFlags,
    ) -> SymbolId {
        let container = self.container;
        match self.ast.kind(container) {
            SyntaxKind::ModuleDeclaration => self.declare_module_member(node, includes, excludes),
            SyntaxKind::SourceFile => {
                if is_external_module(self.ast, self.file) {
                    self.declare_module_member(node, includes, excludes)
                } else {
                    self.declare_symbol(Table::Locals(self.file), None, node, includes, excludes)
                }
            }
            SyntaxKind::ClassDeclaration | SyntaxKind::ClassExpression => {
                let class_symbol = self.container_symbol();
                let table = if is_static(self.ast, node) {
                    Table::Exports(class_symbol)
                } else {
                    Table::Members(class_symbol)
                };
                self.declare_symbol(table, Some(class_symbol), node, includes, excludes)
            }
            SyntaxKind::EnumDeclaration => {
                let enum_symbol = self.container_symbol();
                self.declare_symbol(Table::Exports(enum_symbol), Some(enum_symbol), node, includes, excludes)
            }
            SyntaxKind::TypeLiteral | SyntaxKind::ObjectLiteralExpression | SyntaxKind::InterfaceDeclaration => {
                let symbol = self.container_symbol();
                self.declare_symbol(Table::Members(symbol), Some(symbol), node, includes, excludes)
            }
            SyntaxKind::FunctionType
            | SyntaxKind::ConstructorType
            | SyntaxKind::CallSignature
            | SyntaxKind::ConstructSignature
            | SyntaxKind::IndexSignature
            | SyntaxKind::MethodDeclaration
            | SyntaxKind::MethodSignature
            | SyntaxKind::Constructor
            | SyntaxKind::GetAccessor
            | SyntaxKind::SetAccessor
            | SyntaxKind::FunctionDeclaration
            | SyntaxKind::FunctionExpression
            | SyntaxKind::ArrowFunction
            | SyntaxKind::ClassStaticBlockDeclaration
            | SyntaxKind::TypeAliasDeclaration
            | SyntaxKind::MappedType => self.declare_symbol(Table::Locals(container), None, node, includes, excludes),
            _ => panic!("Unhandled case in declareSymbolAndAddToSymbolTable"),
        }
    }

    fn bind_block_scoped_declaration(&mut self, node: NodeId, includes: SymbolFlags, excludes: SymbolFlags) {
        let scope = self.block_scope_container;
        match self.ast.kind(scope) {
            SyntaxKind::ModuleDeclaration => {
                self.declare_module_member(node, includes, excludes);
            }
            SyntaxKind::SourceFile if is_external_module(self.ast, scope) => {
                self.declare_module_member(node, includes, excludes);
            }
            _ => {
                self.declare_symbol(Table::Locals(scope), None, node, includes, excludes);
            }
        }
    }

    /// Exported module members get two symbols: an `ExportValue` local
    /// and the export itself, linked through `export_symbol`.
    fn declare_module_member(&mut self, node: NodeId, includes: SymbolFlags, excludes: SymbolFlags) -> SymbolId {
        let container = self.container;
        let has_export_modifier = get_combined_modifier_flags(self.ast, node).contains(ModifierFlags::EXPORT);
        if includes.intersects(SymbolFlags::ALIAS) {
            let kind = self.ast.kind(node);
            if kind == SyntaxKind::ExportSpecifier
                || (kind == SyntaxKind::ImportEqualsDeclaration && has_export_modifier)
            {
                let symbol = self.container_symbol();
                return self.declare_symbol(Table::Exports(symbol), Some(symbol), node, includes, excludes);
            }
            return self.declare_symbol(Table::Locals(container), None, node, includes, excludes);
        }

        // Nested ambient modules stay local so they never merge globally.
        let in_export_context = self.ast.flags(container).contains(NodeFlags::EXPORT_CONTEXT);
        if !is_ambient_module(self.ast, node) && (has_export_modifier || in_export_context) {
            let container_symbol = self.container_symbol();
            if has_syntactic_modifier(self.ast, node, ModifierFlags::DEFAULT)
                && self.declaration_name(node) == internal_names::MISSING
            {
                // No local for an unnamed default export.
                return self.declare_symbol(
                    Table::Exports(container_symbol),
                    Some(container_symbol),
                    node,
                    includes,
                    excludes,
                );
            }
            let export_kind = if includes.intersects(SymbolFlags::VALUE) {
                SymbolFlags::EXPORT_VALUE
            } else {
                SymbolFlags::NONE
            };
            let local = self.declare_symbol(Table::Locals(container), None, node, export_kind, excludes);
            let exported = self.declare_symbol(
                Table::Exports(container_symbol),
                Some(container_symbol),
                node,
                includes,
                excludes,
            );
            self.binding.symbol_mut(local).export_symbol = Some(exported);
            self.ast.node_mut(node).local_symbol = Some(local);
            return local;
        }
        self.declare_symbol(Table::Locals(container), None, node, includes, excludes)
    }

    fn declare_symbol(
        &mut self,
        table: Table,
        parent: Option<SymbolId>,
        node: NodeId,
        includes: SymbolFlags,
        excludes: SymbolFlags,
    ) -> SymbolId {
        let is_default_export = has_syntactic_modifier(self.ast, node, ModifierFlags::DEFAULT)
            || (self.ast.kind(node) == SyntaxKind::ExportSpecifier
                && self.ast.name(node).is_some_and(|n| self.ast.text(n) == internal_names::DEFAULT));
        let name = if is_default_export && parent.is_some() {
            internal_names::DEFAULT.to_string()
        } else {
            self.declaration_name(node)
        };

        let symbol = if name == internal_names::MISSING {
            self.new_symbol(SymbolFlags::NONE, &name)
        } else {
            let key = self.ast.interner().intern(&name);
            match self.table(table).and_then(|t| t.get(key)) {
                None => {
                    let symbol = self.binding.create_symbol(SymbolFlags::NONE, key);
                    self.table_mut(table).set(key, symbol);
                    trace!(name = %name, flags = ?includes, "declared symbol");
                    symbol
                }
                Some(existing) if self.binding.symbol(existing).flags.intersects(excludes) => {
                    trace!(name = %name, flags = ?includes, "duplicate declaration");
                    self.report_duplicate_declaration(existing, node, includes, is_default_export);
                    self.binding.create_symbol(SymbolFlags::NONE, key)
                }
                Some(existing) => existing,
            }
        };

        self.add_declaration_to_symbol(symbol, node, includes);
        let symbol_data = self.binding.symbol_mut(symbol);
        match symbol_data.parent {
            None => symbol_data.parent = parent,
            Some(existing) if Some(existing) != parent => panic!("Existing symbol parent should match new one"),
            Some(_) => {}
        }
        symbol
    }

    fn report_duplicate_declaration(
        &mut self,
        existing: SymbolId,
        node: NodeId,
        includes: SymbolFlags,
        is_default_export: bool,
    ) {
        let existing_flags = self.binding.symbol(existing).flags;
        let declarations = self.binding.symbol(existing).declarations.clone();

        let mut message = if existing_flags.contains(SymbolFlags::BLOCK_SCOPED_VARIABLE) {
            &messages::CANNOT_REDECLARE_BLOCK_SCOPED_VARIABLE_0
        } else {
            &messages::DUPLICATE_IDENTIFIER_0
        };
        let mut message_needs_name = true;
        if existing_flags.intersects(SymbolFlags::ENUM) || includes.intersects(SymbolFlags::ENUM) {
            message = &messages::ENUM_DECLARATIONS_CAN_ONLY_MERGE_WITH_NAMESPACE_OR_OTHER_ENUM_DECLARATIONS;
            message_needs_name = false;
        }
        let mut multiple_default_exports = false;
        if !declarations.is_empty()
            && (is_default_export
                || (self.ast.kind(node) == SyntaxKind::ExportAssignment && !is_export_equals(self.ast, node)))
        {
            message = &messages::A_MODULE_CANNOT_HAVE_MULTIPLE_DEFAULT_EXPORTS;
            message_needs_name = false;
            multiple_default_exports = true;
        }

        let declaration_name = self.ast.name(node).unwrap_or(node);
        let mut diagnostic = self.duplicate_diagnostic(declaration_name, node, message, message_needs_name);
        for (index, &declaration) in declarations.iter().enumerate() {
            let previous_name = self.ast.name(declaration).unwrap_or(declaration);
            let mut previous = self.duplicate_diagnostic(previous_name, declaration, message, message_needs_name);
            if multiple_default_exports {
                let related = if index == 0 {
                    &messages::ANOTHER_EXPORT_DEFAULT_IS_HERE
                } else {
                    &messages::X_AND_HERE
                };
                previous.add_related(create_diagnostic_for_node(self.ast, declaration_name, related, &[]));
                diagnostic.add_related(create_diagnostic_for_node(
                    self.ast,
                    previous_name,
                    &messages::THE_FIRST_EXPORT_DEFAULT_IS_HERE,
                    &[],
                ));
            }
            self.binding.diagnostics.add(previous);
        }
        self.binding.diagnostics.add(diagnostic);

        // A get accessor clashing with a non-accessor makes every later
        // declaration of the name clash too.
        let existing_accessor = existing_flags & SymbolFlags::ACCESSOR;
        if !existing_accessor.is_empty() && existing_accessor != (includes & SymbolFlags::ACCESSOR) {
            self.binding.symbol_mut(existing).flags |= SymbolFlags::ACCESSOR;
        }
    }

    fn duplicate_diagnostic(
        &self,
        location: NodeId,
        declaration: NodeId,
        message: &DiagnosticMessage,
        needs_name: bool,
    ) -> Diagnostic {
        if needs_name {
            let display_name = self.display_name(declaration);
            create_diagnostic_for_node(self.ast, location, message, &[display_name.as_str()])
        } else {
            create_diagnostic_for_node(self.ast, location, message, &[])
        }
    }

    fn add_declaration_to_symbol(&mut self, symbol: SymbolId, node: NodeId, includes: SymbolFlags) {
        let symbol_data = self.binding.symbol_mut(symbol);
        symbol_data.flags |= includes;
        if !symbol_data.declarations.contains(&node) {
            symbol_data.declarations.push(node);
        }
        if includes.intersects(SymbolFlags::VALUE) {
            set_value_declaration(self.ast, symbol_data, node);
        }
        self.ast.node_mut(node).symbol = Some(symbol);
    }

    fn bind_anonymous_declaration(&mut self, node: NodeId, flags: SymbolFlags, name: &str) {
        let symbol = self.new_symbol(flags, name);
        if flags.intersects(SymbolFlags::ENUM_MEMBER | SymbolFlags::CLASS_MEMBER) {
            let parent = self.ast.symbol(self.container);
            self.binding.symbol_mut(symbol).parent = parent;
        }
        self.add_declaration_to_symbol(symbol, node, flags);
    }

    fn new_symbol(&mut self, flags: SymbolFlags, name: &str) -> SymbolId {
        let name = self.ast.interner().intern(name);
        self.binding.create_symbol(flags, name)
    }

    fn container_symbol(&self) -> SymbolId {
        match self.ast.symbol(self.container) {
            Some(symbol) => symbol,
            None => panic!("container {} has no symbol", self.container),
        }
    }

    fn table(&self, table: Table) -> Option<&SymbolTable> {
        match table {
            Table::Locals(node) => self.binding.locals.get(&node),
            Table::Members(symbol) => self.binding.symbol(symbol).members.as_ref(),
            Table::Exports(symbol) => self.binding.symbol(symbol).exports.as_ref(),
            Table::GlobalExports(symbol) => self.binding.symbol(symbol).global_exports.as_ref(),
            Table::Globals => Some(&self.binding.globals),
        }
    }

    fn table_mut(&mut self, table: Table) -> &mut SymbolTable {
        match table {
            Table::Locals(node) => self.binding.locals.entry(node).or_default(),
            Table::Members(symbol) => self.binding.symbol_mut(symbol).members.get_or_insert_with(SymbolTable::new),
            Table::Exports(symbol) => self.binding.symbol_mut(symbol).exports.get_or_insert_with(SymbolTable::new),
            Table::GlobalExports(symbol) => self
                .binding
                .symbol_mut(symbol)
                .global_exports
                .get_or_insert_with(SymbolTable::new),
            Table::Globals => &mut self.binding.globals,
        }
    }

    // ========================================================================
    // Names
    // ========================================================================

    /// The symbol-table key of a declaration.
    fn declaration_name(&self, node: NodeId) -> String {
        let ast = &*self.ast;
        if ast.kind(node) == SyntaxKind::ExportAssignment {
            return if is_export_equals(ast, node) {
                internal_names::EXPORT_EQUALS.to_string()
            } else {
                internal_names::DEFAULT.to_string()
            };
        }
        if let Some(name) = ast.name(node) {
            if is_ambient_module(ast, node) {
                if is_global_scope_augmentation(ast, node) {
                    return internal_names::GLOBAL.to_string();
                }
                return format!("\"{}\"", ast.text(name));
            }
            return match ast.kind(name) {
                SyntaxKind::PrivateIdentifier => {
                    match get_containing_class(ast, node).and_then(|class| ast.symbol(class)) {
                        Some(class_symbol) => private_identifier_symbol_name(class_symbol, ast.text(name)),
                        None => internal_names::MISSING.to_string(),
                    }
                }
                _ if is_property_name_literal(ast, name) => ast.text(name).to_string(),
                SyntaxKind::ComputedPropertyName => {
                    let Some(expression) = ast.expression(name) else {
                        return internal_names::MISSING.to_string();
                    };
                    if is_string_or_numeric_literal_like(ast, expression) {
                        return ast.text(expression).to_string();
                    }
                    match &ast.node(expression).payload {
                        NodePayload::Unary { operator, operand } if is_signed_numeric_literal(ast, expression) => {
                            format!("{}{}", operator.token_text().unwrap_or(""), ast.text(*operand))
                        }
                        _ => panic!("Only computed properties with literal names have declaration names"),
                    }
                }
                _ => internal_names::MISSING.to_string(),
            };
        }
        match ast.kind(node) {
            SyntaxKind::Constructor => internal_names::CONSTRUCTOR,
            SyntaxKind::FunctionType | SyntaxKind::CallSignature => internal_names::CALL,
            SyntaxKind::ConstructorType | SyntaxKind::ConstructSignature => internal_names::NEW,
            SyntaxKind::IndexSignature => internal_names::INDEX,
            SyntaxKind::ExportDeclaration => internal_names::EXPORT_STAR,
            SyntaxKind::SourceFile => internal_names::EXPORT_EQUALS,
            _ => internal_names::MISSING,
        }
        .to_string()
    }

    /// Name shown in duplicate-declaration messages.
    fn display_name(&self, node: NodeId) -> String {
        if let Some(name) = self.ast.name(node) {
            return self.ast.source_text(name).to_string();
        }
        let name = self.declaration_name(node);
        if name == internal_names::MISSING {
            "(Missing)".to_string()
        } else {
            name
        }
    }

    fn optional_flag(&self, node: NodeId) -> SymbolFlags {
        if self.ast.question_token(node).is_some() {
            SymbolFlags::OPTIONAL
        } else {
            SymbolFlags::NONE
        }
    }

    // ========================================================================
    // Context
    // ========================================================================

    fn statements_of(&self, node: NodeId) -> Vec<NodeId> {
        self.ast.statements(node).map(|l| l.iter().collect()).unwrap_or_default()
    }

    fn update_strict_mode_statement_list(&mut self, node: NodeId) {
        if !self.in_strict_mode {
            let statements = self.statements_of(node);
            if find_use_strict_prologue(self.ast, &statements).is_some() {
                self.in_strict_mode = true;
            }
        }
    }

    /// Ambient files and modules without `export` statements export
    /// every declaration implicitly.
    fn set_export_context_flag(&mut self, node: NodeId) {
        let statements = match self.ast.kind(node) {
            SyntaxKind::SourceFile => self.statements_of(node),
            _ => match self.ast.body(node) {
                Some(body) if self.ast.kind(body) == SyntaxKind::ModuleBlock => self.statements_of(body),
                _ => Vec::new(),
            },
        };
        let has_export_declarations = statements.iter().any(|&s| {
            matches!(
                self.ast.kind(s),
                SyntaxKind::ExportDeclaration | SyntaxKind::ExportAssignment
            )
        });
        let export_context = self.ast.flags(node).contains(NodeFlags::AMBIENT) && !has_export_declarations;
        self.ast.node_mut(node).flags.set(NodeFlags::EXPORT_CONTEXT, export_context);
    }

    fn error_on_node(&mut self, node: NodeId, message: &DiagnosticMessage) {
        let diagnostic = create_diagnostic_for_node(self.ast, node, message, &[]);
        self.binding.diagnostics.add(diagnostic);
    }

    // ========================================================================
    // Globals
    // ========================================================================

    fn merge_file_into_globals(&mut self, file: NodeId) {
        if !is_external_module(self.ast, file) {
            let locals: Vec<SymbolId> = self
                .binding
                .locals(file)
                .map(|t| t.iter().map(|(_, s)| s).collect())
                .unwrap_or_default();
            for symbol in locals {
                self.merge_into(Table::Globals, symbol);
            }
        }
        for statement in self.statements_of(file) {
            if !is_global_scope_augmentation(self.ast, statement) {
                continue;
            }
            let exports: Vec<SymbolId> = self
                .ast
                .symbol(statement)
                .and_then(|s| self.binding.exports(s))
                .map(|t| t.iter().map(|(_, s)| s).collect())
                .unwrap_or_default();
            for symbol in exports {
                self.merge_into(Table::Globals, symbol);
            }
        }
    }

    fn merge_into(&mut self, target: Table, source: SymbolId) {
        let name = self.binding.symbol(source).name;
        match self.table(target).and_then(|t| t.get(name)) {
            None => self.table_mut(target).set(name, source),
            Some(existing) if existing == source => {}
            Some(existing) => self.merge_symbol(existing, source),
        }
    }

    fn merge_symbol(&mut self, target: SymbolId, source: SymbolId) {
        let target_flags = self.binding.symbol(target).flags;
        let source_data = self.binding.symbol(source).clone();
        if target_flags.intersects(get_excluded_symbol_flags(source_data.flags)) {
            self.report_merge_conflict(target, source);
            return;
        }
        let target_data = self.binding.symbol_mut(target);
        target_data.flags |= source_data.flags;
        if let Some(value_declaration) = source_data.value_declaration {
            set_value_declaration(self.ast, target_data, value_declaration);
        }
        for &declaration in &source_data.declarations {
            if !target_data.declarations.contains(&declaration) {
                target_data.declarations.push(declaration);
            }
        }
        for &declaration in &source_data.declarations {
            self.ast.node_mut(declaration).symbol = Some(target);
        }
        if let Some(members) = &source_data.members {
            for (_, member) in members.iter() {
                self.merge_into(Table::Members(target), member);
            }
        }
        if let Some(exports) = &source_data.exports {
            for (_, export) in exports.iter() {
                self.merge_into(Table::Exports(target), export);
            }
        }
    }

    fn report_merge_conflict(&mut self, target: SymbolId, source: SymbolId) {
        let flags = self.binding.symbol(target).flags | self.binding.symbol(source).flags;
        let (message, needs_name) = if flags.intersects(SymbolFlags::ENUM) {
            (&messages::ENUM_DECLARATIONS_CAN_ONLY_MERGE_WITH_NAMESPACE_OR_OTHER_ENUM_DECLARATIONS, false)
        } else if flags.intersects(SymbolFlags::BLOCK_SCOPED_VARIABLE) {
            (&messages::CANNOT_REDECLARE_BLOCK_SCOPED_VARIABLE_0, true)
        } else {
            (&messages::DUPLICATE_IDENTIFIER_0, true)
        };
        let name = self
            .ast
            .interner()
            .resolve(self.binding.symbol(source).name)
            .to_string();
        trace!(name = %name, "conflicting global declarations");
        for symbol in [source, target] {
            for declaration in self.binding.symbol(symbol).declarations.clone() {
                let location = self.ast.name(declaration).unwrap_or(declaration);
                let diagnostic = if needs_name {
                    create_diagnostic_for_node(self.ast, location, message, &[name.as_str()])
                } else {
                    create_diagnostic_for_node(self.ast, location, message, &[])
                };
                self.binding.diagnostics.add(diagnostic);
            }
        }
    }
}

fn is_export_equals(ast: &Ast, node: NodeId) -> bool {
    matches!(
        &ast.node(node).payload,
        NodePayload::ExportAssignment { is_export_equals: true, .. }
    )
}

/// Non-namespace declarations take precedence over namespaces.
fn set_value_declaration(ast: &Ast, symbol: &mut Symbol, node: NodeId) {
    let replace = match symbol.value_declaration {
        None => true,
        Some(current) => ast.kind(current) != ast.kind(node) && ast.kind(current) == SyntaxKind::ModuleDeclaration,
    };
    if replace {
        symbol.value_declaration = Some(node);
    }
}

/// Private names are keyed by their class so that `#x` in two classes
/// never collide.
pub fn private_identifier_symbol_name(class_symbol: SymbolId, text: &str) -> String {
    format!("__#{}@{}", class_symbol.0, text)
}

pub fn remove_file_extension(file_name: &str) -> &str {
    const EXTENSIONS: [&str; 10] = [
        ".d.ts", ".d.mts", ".d.cts", ".ts", ".tsx", ".mts", ".cts", ".js", ".jsx", ".mjs",
    ];
    EXTENSIONS
        .iter()
        .find_map(|ext| file_name.strip_suffix(ext))
        .unwrap_or(file_name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tscheck_ast::AstBuilder;

    #[test]
    fn test_remove_file_extension() {
        assert_eq!(remove_file_extension("lib.d.ts"), "lib");
        assert_eq!(remove_file_extension("src/a.ts"), "src/a");
        assert_eq!(remove_file_extension("noext"), "noext");
    }

    #[test]
    fn test_function_body_block_is_not_a_container() {
        let mut b = AstBuilder::new();
        let func = b.function_declaration(None, "f", vec![], Some(vec![]));
        let inner = b.block(vec![]);
        b.finish_file("a.ts", vec![func, inner]);
        let ast = b.build();
        let body = ast.body(func).expect("function has a body");
        assert_eq!(get_container_flags(&ast, body), ContainerFlags::NONE);
        assert!(get_container_flags(&ast, inner).contains(ContainerFlags::HAS_LOCALS));
    }

    #[test]
    fn test_namespace_of_types_is_not_instantiated() {
        let mut b = AstBuilder::new();
        let alias_type = b.type_reference("string", vec![]);
        let alias = b.type_alias(None, "T", vec![], alias_type);
        let body = b.module_block(vec![alias]);
        let name = b.identifier("N");
        let ns = b.module_declaration(None, name, Some(body), NodeFlags::NAMESPACE);
        b.finish_file("a.ts", vec![ns]);
        let ast = b.build();
        assert_eq!(get_module_instance_state(&ast, ns), ModuleInstanceState::NonInstantiated);
    }
}

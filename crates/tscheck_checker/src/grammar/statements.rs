//! Statements, declaration lists and the top level of declaration files.

use crate::checker::Checker;
use crate::types::TypeFlags;
use tscheck_ast::types::{ModifierFlags, NodeFlags, NodeId};
use tscheck_ast::utilities::*;
use tscheck_ast::{NodePayload, SyntaxKind};
use tscheck_diagnostics::messages;
use tscheck_options::{ModuleKind, ScriptTarget};

/// Whether the options allow `await` at the top level of a module.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TopLevelAwaitSupport {
    Supported,
    /// A `node16`/`nodenext` file emitted as CommonJS.
    CommonJsFile,
    /// The module kind or target is too old.
    Unsupported,
}

fn block_scope_keyword(flags: NodeFlags) -> Option<&'static str> {
    let kind = flags.block_scope_kind();
    if kind == NodeFlags::LET {
        Some("let")
    } else if kind == NodeFlags::CONST {
        Some("const")
    } else if kind == NodeFlags::USING {
        Some("using")
    } else if kind == NodeFlags::AWAIT_USING {
        Some("await using")
    } else {
        None
    }
}

/// Whether a `let`/`const` statement may appear directly under `parent`.
/// Single-statement bodies of control flow statements may not hold one.
fn allows_block_declarations(ast: &tscheck_ast::Ast, parent: NodeId) -> bool {
    match ast.kind(parent) {
        SyntaxKind::IfStatement
        | SyntaxKind::DoStatement
        | SyntaxKind::WhileStatement
        | SyntaxKind::WithStatement
        | SyntaxKind::ForStatement
        | SyntaxKind::ForInStatement
        | SyntaxKind::ForOfStatement => false,
        SyntaxKind::LabeledStatement => ast.parent(parent).map_or(true, |p| allows_block_declarations(ast, p)),
        _ => true,
    }
}

/// The statement owning a variable declaration, through its list.
fn declaration_owner(ast: &tscheck_ast::Ast, node: NodeId) -> Option<NodeId> {
    ast.parent(node)
        .filter(|&list| ast.kind(list) == SyntaxKind::VariableDeclarationList)
        .and_then(|list| ast.parent(list))
}

impl<'a> Checker<'a> {
    pub(crate) fn top_level_await_support(&self, node: NodeId) -> TopLevelAwaitSupport {
        match self.module_kind {
            ModuleKind::Node16 | ModuleKind::NodeNext if self.emit_module_format_of_file(node) == ModuleKind::CommonJS => {
                TopLevelAwaitSupport::CommonJsFile
            }
            ModuleKind::Node16
            | ModuleKind::NodeNext
            | ModuleKind::ES2022
            | ModuleKind::ESNext
            | ModuleKind::Preserve
            | ModuleKind::System
                if self.language_version >= ScriptTarget::ES2017 =>
            {
                TopLevelAwaitSupport::Supported
            }
            _ => TopLevelAwaitSupport::Unsupported,
        }
    }

    // ========================================================================
    // Files
    // ========================================================================

    /// Top-level declarations of a declaration file need `declare` or
    /// `export`. Only the first offender is reported.
    pub(crate) fn check_grammar_source_file(&mut self, file: NodeId) -> bool {
        let ast = self.ast;
        if !ast.flags(file).contains(NodeFlags::AMBIENT) {
            return false;
        }
        for statement in ast.source_file(file).statements.iter() {
            let needs_modifier = match ast.kind(statement) {
                SyntaxKind::FunctionDeclaration
                | SyntaxKind::ClassDeclaration
                | SyntaxKind::EnumDeclaration
                | SyntaxKind::ModuleDeclaration
                | SyntaxKind::VariableStatement => {
                    !has_syntactic_modifier(ast, statement, ModifierFlags::AMBIENT | ModifierFlags::EXPORT | ModifierFlags::DEFAULT)
                }
                _ => false,
            };
            if needs_modifier
                && self.grammar_error_on_first_token(
                    statement,
                    &messages::TOP_LEVEL_DECLARATIONS_IN_D_TS_FILES_MUST_START_WITH_EITHER_A_DECLARE_OR_EXPORT_MODIFIER,
                    &[],
                )
            {
                return true;
            }
        }
        false
    }

    // ========================================================================
    // Ambient context
    // ========================================================================

    /// Executable statements are not allowed in ambient code. A block
    /// reports once, on its first offending statement.
    pub(crate) fn check_grammar_statement_in_ambient_context(&mut self, node: NodeId) -> bool {
        let ast = self.ast;
        if !ast.flags(node).contains(NodeFlags::AMBIENT) {
            return false;
        }
        let Some(parent) = ast.parent(node) else {
            return false;
        };
        let already_reported = self
            .node_links
            .try_get(node)
            .is_some_and(|links| links.has_reported_statement_in_ambient_context);
        if !already_reported && (is_function_like(ast, parent) || is_accessor_kind(ast.kind(parent))) {
            let reported =
                self.grammar_error_on_first_token(node, &messages::AN_IMPLEMENTATION_CANNOT_BE_DECLARED_IN_AMBIENT_CONTEXTS, &[]);
            self.node_links.get_or_insert(node).has_reported_statement_in_ambient_context = reported;
            return reported;
        }
        if matches!(
            ast.kind(parent),
            SyntaxKind::Block | SyntaxKind::ModuleBlock | SyntaxKind::SourceFile
        ) {
            let parent_reported = self
                .node_links
                .try_get(parent)
                .is_some_and(|links| links.has_reported_statement_in_ambient_context);
            if !parent_reported {
                let reported =
                    self.grammar_error_on_first_token(node, &messages::STATEMENTS_ARE_NOT_ALLOWED_IN_AMBIENT_CONTEXTS, &[]);
                self.node_links.get_or_insert(parent).has_reported_statement_in_ambient_context = reported;
                return reported;
            }
        }
        false
    }

    // ========================================================================
    // Loops and jumps
    // ========================================================================

    pub(crate) fn check_grammar_for_in_or_for_of_statement(&mut self, node: NodeId) -> bool {
        let ast = self.ast;
        if self.check_grammar_statement_in_ambient_context(node) {
            return true;
        }
        let NodePayload::ForInOrOf {
            await_modifier,
            initializer,
            ..
        } = &ast.node(node).payload
        else {
            return false;
        };
        let (await_modifier, initializer) = (*await_modifier, *initializer);
        let is_for_of = ast.kind(node) == SyntaxKind::ForOfStatement;
        let in_await_context = ast.flags(node).contains(NodeFlags::AWAIT_CONTEXT);

        let misplaced_await = await_modifier.filter(|_| is_for_of && !in_await_context && !self.has_parse_diagnostics(node));
        if let Some(await_modifier) = misplaced_await {
            if is_in_top_level_context(ast, node) {
                if !is_external_module(ast, ast.source_file_of(node)) {
                    self.add_diagnostic(create_diagnostic_for_node(
                        ast,
                        await_modifier,
                        &messages::FOR_AWAIT_LOOPS_ARE_ONLY_ALLOWED_AT_THE_TOP_LEVEL_OF_A_FILE_WHEN_THAT_FILE_IS_A_MODULE,
                        &[],
                    ));
                }
                let message = match self.top_level_await_support(node) {
                    TopLevelAwaitSupport::Supported => None,
                    TopLevelAwaitSupport::CommonJsFile => {
                        Some(&messages::THE_CURRENT_FILE_IS_A_COMMONJS_MODULE_AND_CANNOT_USE_AWAIT_AT_THE_TOP_LEVEL)
                    }
                    TopLevelAwaitSupport::Unsupported => {
                        Some(&messages::TOP_LEVEL_FOR_AWAIT_LOOPS_ARE_ONLY_ALLOWED_WHEN_THE_MODULE_OPTION_IS_SET_APPROPRIATELY)
                    }
                };
                if let Some(message) = message {
                    self.add_diagnostic(create_diagnostic_for_node(ast, await_modifier, message, &[]));
                }
            } else {
                let mut diagnostic = create_diagnostic_for_node(
                    ast,
                    await_modifier,
                    &messages::FOR_AWAIT_LOOPS_ARE_ONLY_ALLOWED_WITHIN_ASYNC_FUNCTIONS_AND_AT_THE_TOP_LEVELS_OF_MODULES,
                    &[],
                );
                if let Some(func) = get_containing_function(ast, node).filter(|&f| ast.kind(f) != SyntaxKind::Constructor) {
                    debug_assert!(!has_syntactic_modifier(ast, func, ModifierFlags::ASYNC));
                    diagnostic.add_related(create_diagnostic_for_node(
                        ast,
                        func,
                        &messages::DID_YOU_MEAN_TO_MARK_THIS_FUNCTION_AS_ASYNC,
                        &[],
                    ));
                }
                self.add_diagnostic(diagnostic);
                return true;
            }
        }

        if is_for_of && !in_await_context && ast.kind(initializer) == SyntaxKind::Identifier && ast.text(initializer) == "async" {
            self.grammar_error_on_node(initializer, &messages::THE_LEFT_HAND_SIDE_OF_A_FOR_OF_STATEMENT_MAY_NOT_BE_ASYNC, &[]);
            return false;
        }

        if ast.kind(initializer) != SyntaxKind::VariableDeclarationList || self.check_grammar_variable_declaration_list(initializer) {
            return false;
        }
        let Some(declarations) = ast.elements(initializer) else {
            return false;
        };
        if let Some(second) = declarations.get(1) {
            let message = if is_for_of {
                &messages::ONLY_A_SINGLE_VARIABLE_DECLARATION_IS_ALLOWED_IN_A_FOR_OF_STATEMENT
            } else {
                &messages::ONLY_A_SINGLE_VARIABLE_DECLARATION_IS_ALLOWED_IN_A_FOR_IN_STATEMENT
            };
            return self.grammar_error_on_first_token(second, message, &[]);
        }
        let Some(first) = declarations.first() else {
            return false;
        };
        if ast.initializer(first).is_some() {
            let message = if is_for_of {
                &messages::THE_VARIABLE_DECLARATION_OF_A_FOR_OF_STATEMENT_CANNOT_HAVE_AN_INITIALIZER
            } else {
                &messages::THE_VARIABLE_DECLARATION_OF_A_FOR_IN_STATEMENT_CANNOT_HAVE_AN_INITIALIZER
            };
            return match ast.name(first) {
                Some(name) => self.grammar_error_on_node(name, message, &[]),
                None => false,
            };
        }
        if ast.type_node(first).is_some() {
            let message = if is_for_of {
                &messages::THE_LEFT_HAND_SIDE_OF_A_FOR_OF_STATEMENT_CANNOT_USE_A_TYPE_ANNOTATION
            } else {
                &messages::THE_LEFT_HAND_SIDE_OF_A_FOR_IN_STATEMENT_CANNOT_USE_A_TYPE_ANNOTATION
            };
            return self.grammar_error_on_node(first, message, &[]);
        }
        false
    }

    /// `break` and `continue` need an enclosing target in the same function.
    pub(crate) fn check_grammar_break_or_continue_statement(&mut self, node: NodeId) -> bool {
        let ast = self.ast;
        let is_break = ast.kind(node) == SyntaxKind::BreakStatement;
        let label = ast.label(node);
        let label_text = label.map(|l| ast.text(l));

        let mut current = Some(node);
        while let Some(n) = current {
            if is_function_like(ast, n) || ast.kind(n) == SyntaxKind::ClassStaticBlockDeclaration {
                return self.grammar_error_on_node(node, &messages::JUMP_TARGET_CANNOT_CROSS_FUNCTION_BOUNDARY, &[]);
            }
            match ast.kind(n) {
                SyntaxKind::LabeledStatement if label_text.is_some() && ast.label(n).map(|l| ast.text(l)) == label_text => {
                    let is_misplaced_continue = !is_break && !is_iteration_statement(ast, n, true);
                    if is_misplaced_continue {
                        return self.grammar_error_on_node(
                            node,
                            &messages::A_CONTINUE_STATEMENT_CAN_ONLY_JUMP_TO_A_LABEL_OF_AN_ENCLOSING_ITERATION_STATEMENT,
                            &[],
                        );
                    }
                    return false;
                }
                SyntaxKind::SwitchStatement if is_break && label.is_none() => return false,
                _ if label.is_none() && is_iteration_statement(ast, n, false) => return false,
                _ => {}
            }
            current = ast.parent(n);
        }

        let message = match (label.is_some(), is_break) {
            (true, true) => &messages::A_BREAK_STATEMENT_CAN_ONLY_JUMP_TO_A_LABEL_OF_AN_ENCLOSING_STATEMENT,
            (true, false) => &messages::A_CONTINUE_STATEMENT_CAN_ONLY_JUMP_TO_A_LABEL_OF_AN_ENCLOSING_ITERATION_STATEMENT,
            (false, true) => &messages::A_BREAK_STATEMENT_CAN_ONLY_BE_USED_WITHIN_AN_ENCLOSING_ITERATION_OR_SWITCH_STATEMENT,
            (false, false) => &messages::A_CONTINUE_STATEMENT_CAN_ONLY_BE_USED_WITHIN_AN_ENCLOSING_ITERATION_STATEMENT,
        };
        self.grammar_error_on_node(node, message, &[])
    }

    // ========================================================================
    // Other statements
    // ========================================================================

    pub(crate) fn check_grammar_return_statement(&mut self, node: NodeId) -> bool {
        let ast = self.ast;
        if self.check_grammar_statement_in_ambient_context(node) {
            return true;
        }
        match get_containing_function_or_class_static_block(ast, node) {
            Some(container) if ast.kind(container) == SyntaxKind::ClassStaticBlockDeclaration => {
                self.grammar_error_on_first_token(node, &messages::A_RETURN_STATEMENT_CANNOT_BE_USED_INSIDE_A_CLASS_STATIC_BLOCK, &[])
            }
            Some(_) => false,
            None => self.grammar_error_on_first_token(node, &messages::A_RETURN_STATEMENT_CAN_ONLY_BE_USED_WITHIN_A_FUNCTION_BODY, &[]),
        }
    }

    pub(crate) fn check_grammar_with_statement(&mut self, node: NodeId) -> bool {
        if self.check_grammar_statement_in_ambient_context(node) {
            return true;
        }
        if self.ast.flags(node).contains(NodeFlags::AWAIT_CONTEXT) {
            return self.grammar_error_on_first_token(node, &messages::WITH_STATEMENTS_ARE_NOT_ALLOWED_IN_AN_ASYNC_FUNCTION_BLOCK, &[]);
        }
        false
    }

    pub(crate) fn check_grammar_switch_statement(&mut self, node: NodeId) -> bool {
        let ast = self.ast;
        if self.check_grammar_statement_in_ambient_context(node) {
            return true;
        }
        let NodePayload::Switch { case_block, .. } = &ast.node(node).payload else {
            return false;
        };
        let Some(clauses) = ast.elements(*case_block) else {
            return false;
        };
        let mut seen_default = false;
        for clause in clauses.iter().filter(|&c| ast.kind(c) == SyntaxKind::DefaultClause) {
            if seen_default {
                return self.grammar_error_on_node(
                    clause,
                    &messages::A_DEFAULT_CLAUSE_CANNOT_APPEAR_MORE_THAN_ONCE_IN_A_SWITCH_STATEMENT,
                    &[],
                );
            }
            seen_default = true;
        }
        false
    }

    /// Labels may not shadow an enclosing label of the same function.
    pub(crate) fn check_grammar_labeled_statement(&mut self, node: NodeId) -> bool {
        let ast = self.ast;
        if self.check_grammar_statement_in_ambient_context(node) {
            return true;
        }
        let Some(label) = ast.label(node) else {
            return false;
        };
        let text = ast.text(label);
        let duplicate = find_ancestor(ast, ast.parent(node), |n| {
            is_function_like(ast, n) || (ast.kind(n) == SyntaxKind::LabeledStatement && ast.label(n).is_some_and(|l| ast.text(l) == text))
        })
        .filter(|&n| ast.kind(n) == SyntaxKind::LabeledStatement);
        if duplicate.is_some() {
            return self.grammar_error_on_node(label, &messages::DUPLICATE_LABEL_0, &[text]);
        }
        false
    }

    /// A catch variable may only be typed `any` or `unknown` and takes
    /// no initializer.
    pub(crate) fn check_grammar_try_statement(&mut self, node: NodeId) -> bool {
        let ast = self.ast;
        if self.check_grammar_statement_in_ambient_context(node) {
            return true;
        }
        let declaration = match &ast.node(node).payload {
            NodePayload::Try {
                catch_clause: Some(catch_clause),
                ..
            } => match &ast.node(*catch_clause).payload {
                NodePayload::CatchClause {
                    variable_declaration: Some(declaration),
                    ..
                } => *declaration,
                _ => return false,
            },
            _ => return false,
        };
        if let Some(type_node) = ast.type_node(declaration) {
            let ty = self.get_type_from_type_node(type_node);
            if !self.types.get(ty).flags.intersects(TypeFlags::ANY_OR_UNKNOWN) {
                return self.grammar_error_on_first_token(
                    type_node,
                    &messages::CATCH_CLAUSE_VARIABLE_TYPE_ANNOTATION_MUST_BE_ANY_OR_UNKNOWN_IF_SPECIFIED,
                    &[],
                );
            }
        } else if let Some(initializer) = ast.initializer(declaration) {
            return self.grammar_error_on_first_token(initializer, &messages::CATCH_CLAUSE_VARIABLE_CANNOT_HAVE_AN_INITIALIZER, &[]);
        }
        false
    }

    // ========================================================================
    // Variables
    // ========================================================================

    pub(crate) fn check_grammar_variable_declaration_list(&mut self, list: NodeId) -> bool {
        let ast = self.ast;
        let Some(declarations) = ast.elements(list) else {
            return false;
        };
        if self.check_grammar_for_disallowed_trailing_comma(Some(declarations), &messages::TRAILING_COMMA_NOT_ALLOWED) {
            return true;
        }
        if declarations.is_empty() {
            return self.grammar_error_at_pos(
                list,
                declarations.pos,
                declarations.end.saturating_sub(declarations.pos),
                &messages::VARIABLE_DECLARATION_LIST_CANNOT_BE_EMPTY,
                &[],
            );
        }
        let kind = ast.flags(list).block_scope_kind();
        let in_for_in = ast.parent(list).is_some_and(|p| ast.kind(p) == SyntaxKind::ForInStatement);
        if in_for_in && kind == NodeFlags::USING {
            return self.grammar_error_on_node(
                list,
                &messages::THE_LEFT_HAND_SIDE_OF_A_FOR_IN_STATEMENT_CANNOT_BE_A_USING_DECLARATION,
                &[],
            );
        }
        if in_for_in && kind == NodeFlags::AWAIT_USING {
            return self.grammar_error_on_node(
                list,
                &messages::THE_LEFT_HAND_SIDE_OF_A_FOR_IN_STATEMENT_CANNOT_BE_AN_AWAIT_USING_DECLARATION,
                &[],
            );
        }
        if kind == NodeFlags::AWAIT_USING {
            return self.check_grammar_await_or_await_using(list);
        }
        false
    }

    /// `if (x) let y = 1;` and friends.
    pub(crate) fn check_grammar_for_disallowed_block_scoped_variable_statement(&mut self, node: NodeId) -> bool {
        let ast = self.ast;
        if ast.parent(node).map_or(true, |parent| allows_block_declarations(ast, parent)) {
            return false;
        }
        let NodePayload::VariableStatement { declaration_list, .. } = &ast.node(node).payload else {
            return false;
        };
        let flags = get_combined_node_flags(ast, *declaration_list);
        if flags.block_scope_kind().is_empty() {
            return false;
        }
        let Some(keyword) = block_scope_keyword(flags) else {
            panic!("Unknown BlockScope flag {:?}", flags.block_scope_kind());
        };
        self.error(node, &messages::_0_DECLARATIONS_CAN_ONLY_BE_DECLARED_INSIDE_A_BLOCK, &[keyword]);
        true
    }

    pub(crate) fn check_grammar_variable_declaration(&mut self, node: NodeId) -> bool {
        let ast = self.ast;
        let flags = get_combined_node_flags(ast, node);
        let block_scope_kind = flags.block_scope_kind();
        let Some(name) = ast.name(node) else {
            return false;
        };
        let has_pattern_name = is_binding_pattern_kind(ast.kind(name));
        let is_using = block_scope_kind == NodeFlags::USING || block_scope_kind == NodeFlags::AWAIT_USING;
        if has_pattern_name && is_using {
            let keyword = if block_scope_kind == NodeFlags::USING { "using" } else { "await using" };
            return self.grammar_error_on_node(name, &messages::_0_DECLARATIONS_MAY_NOT_HAVE_BINDING_PATTERNS, &[keyword]);
        }

        let owner = declaration_owner(ast, node);
        let in_for_in_or_of =
            owner.is_some_and(|o| matches!(ast.kind(o), SyntaxKind::ForInStatement | SyntaxKind::ForOfStatement));
        // Catch clause variables have no declaration list.
        if owner.is_some() && !in_for_in_or_of {
            if flags.contains(NodeFlags::AMBIENT) {
                self.check_ambient_initializer(node);
            } else if ast.initializer(node).is_none() {
                if has_pattern_name {
                    return self.grammar_error_on_node(node, &messages::A_DESTRUCTURING_DECLARATION_MUST_HAVE_AN_INITIALIZER, &[]);
                }
                if is_using || block_scope_kind == NodeFlags::CONST {
                    let keyword = block_scope_keyword(flags).unwrap_or("const");
                    return self.grammar_error_on_node(node, &messages::_0_DECLARATIONS_MUST_BE_INITIALIZED, &[keyword]);
                }
            }
        }

        if let Some(exclamation) = ast.exclamation_token(node) {
            let in_variable_statement = owner.is_some_and(|o| ast.kind(o) == SyntaxKind::VariableStatement);
            let has_type = ast.type_node(node).is_some();
            let has_initializer = ast.initializer(node).is_some();
            if !in_variable_statement || !has_type || has_initializer || flags.contains(NodeFlags::AMBIENT) {
                let message = if has_initializer {
                    &messages::DECLARATIONS_WITH_INITIALIZERS_CANNOT_ALSO_HAVE_DEFINITE_ASSIGNMENT_ASSERTIONS
                } else if !has_type {
                    &messages::DECLARATIONS_WITH_DEFINITE_ASSIGNMENT_ASSERTIONS_MUST_ALSO_HAVE_TYPE_ANNOTATIONS
                } else {
                    &messages::A_DEFINITE_ASSIGNMENT_ASSERTION_IS_NOT_PERMITTED_IN_THIS_CONTEXT
                };
                return self.grammar_error_on_node(exclamation, message, &[]);
            }
        }

        let emits_without_es_modules = matches!(
            self.emit_module_format_of_file(node),
            ModuleKind::None | ModuleKind::CommonJS | ModuleKind::AMD | ModuleKind::UMD
        );
        let is_exported = owner.is_some_and(|o| {
            ast.kind(o) == SyntaxKind::VariableStatement && has_syntactic_modifier(ast, o, ModifierFlags::EXPORT)
        });
        if emits_without_es_modules && is_exported && !flags.contains(NodeFlags::AMBIENT) {
            self.check_es_module_marker(name);
        }

        !block_scope_kind.is_empty() && self.check_grammar_name_in_let_or_const_declarations(name)
    }

    /// `__esModule` is reserved by the CommonJS interop emit.
    fn check_es_module_marker(&mut self, name: NodeId) -> bool {
        let ast = self.ast;
        if ast.kind(name) == SyntaxKind::Identifier {
            if ast.text(name) == "__esModule" {
                return self.grammar_error_on_node(
                    name,
                    &messages::IDENTIFIER_EXPECTED_ESMODULE_IS_RESERVED_AS_AN_EXPORTED_MARKER_WHEN_TRANSFORMING_ECMASCRIPT_MODULES,
                    &[],
                );
            }
            return false;
        }
        let Some(elements) = ast.elements(name) else {
            return false;
        };
        for element in elements.iter().filter(|&e| ast.kind(e) != SyntaxKind::OmittedExpression) {
            if let Some(element_name) = ast.name(element) {
                return self.check_es_module_marker(element_name);
            }
        }
        false
    }

    /// Reports every `let` bound by a `let` or `const` declaration. Never
    /// stops the caller.
    fn check_grammar_name_in_let_or_const_declarations(&mut self, name: NodeId) -> bool {
        let ast = self.ast;
        if ast.kind(name) == SyntaxKind::Identifier {
            if ast.text(name) == "let" {
                return self.grammar_error_on_node(
                    name,
                    &messages::LET_IS_NOT_ALLOWED_TO_BE_USED_AS_A_NAME_IN_LET_OR_CONST_DECLARATIONS,
                    &[],
                );
            }
            return false;
        }
        if let Some(elements) = ast.elements(name) {
            for element in elements.iter().filter(|&e| ast.kind(e) != SyntaxKind::OmittedExpression) {
                if let Some(element_name) = ast.name(element) {
                    self.check_grammar_name_in_let_or_const_declarations(element_name);
                }
            }
        }
        false
    }

    pub(crate) fn check_grammar_binding_element(&mut self, node: NodeId) -> bool {
        let ast = self.ast;
        let initializer = ast.initializer(node);
        if ast.dot_dot_dot_token(node).is_some() {
            let elements = ast.parent(node).and_then(|pattern| ast.elements(pattern));
            if let Some(elements) = elements {
                if elements.last() != Some(node) {
                    return self.grammar_error_on_node(
                        node,
                        &messages::A_REST_ELEMENT_MUST_BE_LAST_IN_A_DESTRUCTURING_PATTERN,
                        &[],
                    );
                }
                self.check_grammar_for_disallowed_trailing_comma(
                    Some(elements),
                    &messages::A_REST_PARAMETER_OR_BINDING_PATTERN_MAY_NOT_HAVE_A_TRAILING_COMMA,
                );
            }
            if ast.property_name(node).is_some() {
                if let Some(name) = ast.name(node) {
                    return self.grammar_error_on_node(name, &messages::A_REST_ELEMENT_CANNOT_HAVE_A_PROPERTY_NAME, &[]);
                }
            }
            if let Some(initializer) = initializer {
                let pos = ast.range(initializer).pos.saturating_sub(1);
                return self.grammar_error_at_pos(node, pos, 1, &messages::A_REST_ELEMENT_CANNOT_HAVE_AN_INITIALIZER, &[]);
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use crate::checker::{Checker, Program};
    use tscheck_ast::{AstBuilder, NodeFlags, NodeId, SyntaxKind};
    use tscheck_diagnostics::messages;
    use tscheck_options::CompilerOptions;

    fn check_file(mut b: AstBuilder, file_name: &str, statements: Vec<NodeId>) -> Vec<u32> {
        b.finish_file(file_name, statements);
        let program = Program::new(b.build(), CompilerOptions::default());
        let mut checker = Checker::new(&program);
        checker.check_program();
        checker.diagnostics().diagnostics().iter().map(|d| d.code).collect()
    }

    fn check(b: AstBuilder, statements: Vec<NodeId>) -> Vec<u32> {
        check_file(b, "a.ts", statements)
    }

    #[test]
    fn test_break_outside_loop() {
        let mut b = AstBuilder::new();
        let stmt = b.jump(SyntaxKind::BreakStatement, None);
        assert_eq!(
            check(b, vec![stmt]),
            vec![messages::A_BREAK_STATEMENT_CAN_ONLY_BE_USED_WITHIN_AN_ENCLOSING_ITERATION_OR_SWITCH_STATEMENT.code]
        );
    }

    #[test]
    fn test_break_inside_loop_is_fine() {
        let mut b = AstBuilder::new();
        let stmt = b.jump(SyntaxKind::BreakStatement, None);
        let body = b.block(vec![stmt]);
        let condition = b.token(SyntaxKind::TrueKeyword);
        let loop_ = b.loop_statement(SyntaxKind::WhileStatement, condition, body);
        assert!(check(b, vec![loop_]).is_empty());
    }

    #[test]
    fn test_continue_to_non_loop_label() {
        let mut b = AstBuilder::new();
        let jump = b.jump(SyntaxKind::ContinueStatement, Some("l"));
        let body = b.block(vec![jump]);
        let labeled = b.labeled_statement("l", body);
        assert!(check(b, vec![labeled])
            .contains(&messages::A_CONTINUE_STATEMENT_CAN_ONLY_JUMP_TO_A_LABEL_OF_AN_ENCLOSING_ITERATION_STATEMENT.code));
    }

    #[test]
    fn test_break_cannot_cross_function_boundary() {
        let mut b = AstBuilder::new();
        let jump = b.jump(SyntaxKind::BreakStatement, Some("l"));
        let func = b.function_expression(None, None, vec![], vec![jump]);
        let call = b.call(func, vec![]);
        let inner = b.expression_statement(call);
        let body = b.block(vec![inner]);
        let labeled = b.labeled_statement("l", body);
        assert!(check(b, vec![labeled]).contains(&messages::JUMP_TARGET_CANNOT_CROSS_FUNCTION_BOUNDARY.code));
    }

    #[test]
    fn test_duplicate_label() {
        let mut b = AstBuilder::new();
        let empty = b.token(SyntaxKind::EmptyStatement);
        let inner = b.labeled_statement("l", empty);
        let outer = b.labeled_statement("l", inner);
        assert_eq!(check(b, vec![outer]), vec![messages::DUPLICATE_LABEL_0.code]);
    }

    #[test]
    fn test_return_outside_function() {
        let mut b = AstBuilder::new();
        let ret = b.return_statement(None);
        assert_eq!(
            check(b, vec![ret]),
            vec![messages::A_RETURN_STATEMENT_CAN_ONLY_BE_USED_WITHIN_A_FUNCTION_BODY.code]
        );
    }

    #[test]
    fn test_duplicate_default_clause() {
        let mut b = AstBuilder::new();
        let first = b.case_clause(None, vec![]);
        let second = b.case_clause(None, vec![]);
        let discriminant = b.numeric_literal("1");
        let switch = b.switch_statement(discriminant, vec![first, second]);
        assert!(check(b, vec![switch]).contains(&messages::A_DEFAULT_CLAUSE_CANNOT_APPEAR_MORE_THAN_ONCE_IN_A_SWITCH_STATEMENT.code));
    }

    #[test]
    fn test_statements_in_declaration_file_report_once() {
        let mut b = AstBuilder::new();
        let one = b.numeric_literal("1");
        let first = b.expression_statement(one);
        let two = b.numeric_literal("2");
        let second = b.expression_statement(two);
        let codes = check_file(b, "a.d.ts", vec![first, second]);
        let count = codes
            .iter()
            .filter(|&&c| c == messages::STATEMENTS_ARE_NOT_ALLOWED_IN_AMBIENT_CONTEXTS.code)
            .count();
        assert_eq!(count, 1);
    }

    #[test]
    fn test_declaration_file_requires_declare() {
        let mut b = AstBuilder::new();
        let statement = b.simple_variable(NodeFlags::LET, "x", None);
        assert!(check_file(b, "a.d.ts", vec![statement]).contains(
            &messages::TOP_LEVEL_DECLARATIONS_IN_D_TS_FILES_MUST_START_WITH_EITHER_A_DECLARE_OR_EXPORT_MODIFIER.code
        ));
    }

    #[test]
    fn test_const_must_be_initialized() {
        let mut b = AstBuilder::new();
        let statement = b.simple_variable(NodeFlags::CONST, "x", None);
        assert!(check(b, vec![statement]).contains(&messages::_0_DECLARATIONS_MUST_BE_INITIALIZED.code));
    }

    #[test]
    fn test_let_in_single_statement_body() {
        let mut b = AstBuilder::new();
        let one = b.numeric_literal("1");
        let statement = b.simple_variable(NodeFlags::LET, "y", Some(one));
        let condition = b.token(SyntaxKind::TrueKeyword);
        let if_statement = b.if_statement(condition, statement, None);
        assert!(check(b, vec![if_statement]).contains(&messages::_0_DECLARATIONS_CAN_ONLY_BE_DECLARED_INSIDE_A_BLOCK.code));
    }

    #[test]
    fn test_let_cannot_name_let_binding() {
        let mut b = AstBuilder::new();
        let one = b.numeric_literal("1");
        let statement = b.simple_variable(NodeFlags::LET, "let", Some(one));
        assert!(check(b, vec![statement])
            .contains(&messages::LET_IS_NOT_ALLOWED_TO_BE_USED_AS_A_NAME_IN_LET_OR_CONST_DECLARATIONS.code));
    }

    #[test]
    fn test_for_in_with_two_declarations() {
        let mut b = AstBuilder::new();
        let a = b.identifier("a");
        let first = b.variable_declaration(a, None, None);
        let c = b.identifier("c");
        let second = b.variable_declaration(c, None, None);
        let list = b.variable_declaration_list(NodeFlags::NONE, vec![first, second]);
        let object = b.identifier("o");
        let body = b.block(vec![]);
        let for_in = b.for_in_or_of(SyntaxKind::ForInStatement, false, list, object, body);
        assert!(check(b, vec![for_in]).contains(&messages::ONLY_A_SINGLE_VARIABLE_DECLARATION_IS_ALLOWED_IN_A_FOR_IN_STATEMENT.code));
    }

    #[test]
    fn test_rest_element_must_be_last() {
        let mut b = AstBuilder::new();
        let rest_name = b.identifier("rest");
        let rest = b.binding_element(true, None, rest_name, None);
        let last_name = b.identifier("last");
        let last = b.binding_element(false, None, last_name, None);
        let pattern = b.list(SyntaxKind::ArrayBindingPattern, vec![rest, last]);
        let source = b.identifier("xs");
        let declaration = b.variable_declaration(pattern, None, Some(source));
        let statement = b.variable_statement(None, NodeFlags::LET, vec![declaration]);
        assert!(check(b, vec![statement]).contains(&messages::A_REST_ELEMENT_MUST_BE_LAST_IN_A_DESTRUCTURING_PATTERN.code));
    }

    #[test]
    fn test_checking_twice_reports_twice() {
        let mut b = AstBuilder::new();
        let stmt = b.jump(SyntaxKind::ContinueStatement, None);
        b.finish_file("a.ts", vec![stmt]);
        let program = Program::new(b.build(), CompilerOptions::default());
        let mut checker = Checker::new(&program);
        assert!(checker.check_grammar_break_or_continue_statement(stmt));
        assert!(checker.check_grammar_break_or_continue_statement(stmt));
        let diagnostics = checker.diagnostics().diagnostics();
        assert_eq!(diagnostics.len(), 2);
        assert_eq!(diagnostics[0], diagnostics[1]);
    }
}

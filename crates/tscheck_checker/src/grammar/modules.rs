//! Namespaces, imports and exports.

use crate::checker::Checker;
use tscheck_ast::types::{NodeFlags, NodeId};
use tscheck_ast::utilities::*;
use tscheck_ast::{NodePayload, SyntaxKind};
use tscheck_diagnostics::{messages, DiagnosticMessage};

impl<'a> Checker<'a> {
    /// Module elements live at the top of a file or namespace. Returns
    /// `true` when `node` is somewhere else.
    pub(crate) fn check_grammar_module_element_context(&mut self, node: NodeId, message: &DiagnosticMessage) -> bool {
        let ast = self.ast;
        let in_module_context = ast.parent(node).is_some_and(|p| {
            matches!(
                ast.kind(p),
                SyntaxKind::SourceFile | SyntaxKind::ModuleBlock | SyntaxKind::ModuleDeclaration
            )
        });
        if !in_module_context {
            self.grammar_error_on_first_token(node, message, &[]);
        }
        !in_module_context
    }

    pub(crate) fn check_grammar_module_declaration(&mut self, node: NodeId) -> bool {
        let ast = self.ast;
        let Some(name) = ast.name(node) else {
            return false;
        };
        let in_ambient_context = ast.flags(node).contains(NodeFlags::AMBIENT);
        if is_global_scope_augmentation(ast, node) && !in_ambient_context {
            self.error(
                name,
                &messages::AUGMENTATIONS_FOR_THE_GLOBAL_SCOPE_SHOULD_HAVE_DECLARE_MODIFIER_UNLESS_THEY_APPEAR_IN_ALREADY_AMBIENT_CONTEXT,
                &[],
            );
        }
        let context_message = if is_ambient_module(ast, node) {
            &messages::AN_AMBIENT_MODULE_DECLARATION_IS_ONLY_ALLOWED_AT_THE_TOP_LEVEL_IN_A_FILE
        } else {
            &messages::A_NAMESPACE_DECLARATION_IS_ONLY_ALLOWED_AT_THE_TOP_LEVEL_OF_A_NAMESPACE_OR_MODULE
        };
        if self.check_grammar_module_element_context(node, context_message) {
            return true;
        }
        if !self.check_grammar_modifiers(node) && !in_ambient_context && ast.kind(name) == SyntaxKind::StringLiteral {
            return self.grammar_error_on_node(name, &messages::ONLY_AMBIENT_MODULES_CAN_USE_QUOTED_NAMES, &[]);
        }
        false
    }

    pub(crate) fn check_grammar_import_declaration(&mut self, node: NodeId) -> bool {
        let ast = self.ast;
        if self.check_grammar_module_element_context(
            node,
            &messages::AN_IMPORT_DECLARATION_CAN_ONLY_BE_USED_AT_THE_TOP_LEVEL_OF_A_NAMESPACE_OR_MODULE,
        ) {
            return true;
        }
        if !self.check_grammar_modifiers(node) && ast.modifiers(node).is_some_and(|m| !m.is_empty()) {
            return self.grammar_error_on_first_token(node, &messages::AN_IMPORT_DECLARATION_CANNOT_HAVE_MODIFIERS, &[]);
        }
        let NodePayload::ImportDeclaration {
            import_clause: Some(clause),
            ..
        } = &ast.node(node).payload
        else {
            return false;
        };
        self.check_grammar_import_clause(*clause)
    }

    /// `import type` takes a default import or named bindings, not both,
    /// and its specifiers cannot repeat `type`.
    fn check_grammar_import_clause(&mut self, clause: NodeId) -> bool {
        let ast = self.ast;
        let NodePayload::ImportClause {
            is_type_only: true,
            name,
            named_bindings,
        } = &ast.node(clause).payload
        else {
            return false;
        };
        if name.is_some() && named_bindings.is_some() {
            return self.grammar_error_on_node(
                clause,
                &messages::A_TYPE_ONLY_IMPORT_CAN_SPECIFY_A_DEFAULT_IMPORT_OR_NAMED_BINDINGS_BUT_NOT_BOTH,
                &[],
            );
        }
        match named_bindings {
            Some(bindings) if ast.kind(*bindings) == SyntaxKind::NamedImports => {
                self.check_grammar_type_only_named_imports_or_exports(*bindings)
            }
            _ => false,
        }
    }

    fn check_grammar_type_only_named_imports_or_exports(&mut self, named: NodeId) -> bool {
        let ast = self.ast;
        let Some(specifiers) = ast.elements(named) else {
            return false;
        };
        for specifier in specifiers.iter().filter(|&s| ast.is_type_only(s)) {
            let message = if ast.kind(specifier) == SyntaxKind::ImportSpecifier {
                &messages::THE_TYPE_MODIFIER_CANNOT_BE_USED_ON_A_NAMED_IMPORT_WHEN_IMPORT_TYPE_IS_USED_ON_ITS_IMPORT_STATEMENT
            } else {
                &messages::THE_TYPE_MODIFIER_CANNOT_BE_USED_ON_A_NAMED_EXPORT_WHEN_EXPORT_TYPE_IS_USED_ON_ITS_EXPORT_STATEMENT
            };
            if self.grammar_error_on_first_token(specifier, message, &[]) {
                return true;
            }
        }
        false
    }

    pub(crate) fn check_grammar_export_declaration_statement(&mut self, node: NodeId) -> bool {
        let ast = self.ast;
        if self.check_grammar_module_element_context(
            node,
            &messages::AN_EXPORT_DECLARATION_CAN_ONLY_BE_USED_AT_THE_TOP_LEVEL_OF_A_NAMESPACE_OR_MODULE,
        ) {
            return true;
        }
        if !self.check_grammar_modifiers(node) && ast.modifiers(node).is_some_and(|m| !m.is_empty()) {
            self.grammar_error_on_first_token(node, &messages::AN_EXPORT_DECLARATION_CANNOT_HAVE_MODIFIERS, &[]);
        }
        let NodePayload::ExportDeclaration {
            is_type_only,
            export_clause,
            module_specifier,
            ..
        } = &ast.node(node).payload
        else {
            return false;
        };
        let Some(export_clause) = *export_clause else {
            return false;
        };
        if *is_type_only && ast.kind(export_clause) == SyntaxKind::NamedExports {
            self.check_grammar_type_only_named_imports_or_exports(export_clause);
        }
        if ast.kind(export_clause) == SyntaxKind::NamespaceExport {
            return false;
        }

        let Some(parent) = ast.parent(node) else {
            return false;
        };
        let in_module_block = ast.kind(parent) == SyntaxKind::ModuleBlock;
        let in_ambient_external_module = in_module_block && ast.parent(parent).is_some_and(|m| is_ambient_module(ast, m));
        let in_ambient_namespace = !in_ambient_external_module
            && in_module_block
            && module_specifier.is_none()
            && ast.flags(node).contains(NodeFlags::AMBIENT);
        if ast.kind(parent) != SyntaxKind::SourceFile && !in_ambient_external_module && !in_ambient_namespace {
            self.error(node, &messages::EXPORT_DECLARATIONS_ARE_NOT_PERMITTED_IN_A_NAMESPACE, &[]);
            return true;
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

    fn check(mut b: AstBuilder, statements: Vec<NodeId>) -> Vec<u32> {
        b.finish_file("a.ts", statements);
        let program = Program::new(b.build(), CompilerOptions::default());
        let mut checker = Checker::new(&program);
        checker.check_program();
        checker.diagnostics().diagnostics().iter().map(|d| d.code).collect()
    }

    #[test]
    fn test_type_only_import_with_default_and_named() {
        let mut b = AstBuilder::new();
        let default_name = b.identifier("D");
        let specifier = b.specifier(SyntaxKind::ImportSpecifier, false, None, "A");
        let named = b.list(SyntaxKind::NamedImports, vec![specifier]);
        let clause = b.import_clause(true, Some(default_name), Some(named));
        let import = b.import_declaration(None, Some(clause), "./m");
        assert!(check(b, vec![import])
            .contains(&messages::A_TYPE_ONLY_IMPORT_CAN_SPECIFY_A_DEFAULT_IMPORT_OR_NAMED_BINDINGS_BUT_NOT_BOTH.code));
    }

    #[test]
    fn test_type_modifier_repeated_on_named_import() {
        let mut b = AstBuilder::new();
        let specifier = b.specifier(SyntaxKind::ImportSpecifier, true, None, "A");
        let named = b.list(SyntaxKind::NamedImports, vec![specifier]);
        let clause = b.import_clause(true, None, Some(named));
        let import = b.import_declaration(None, Some(clause), "./m");
        assert!(check(b, vec![import]).contains(
            &messages::THE_TYPE_MODIFIER_CANNOT_BE_USED_ON_A_NAMED_IMPORT_WHEN_IMPORT_TYPE_IS_USED_ON_ITS_IMPORT_STATEMENT.code
        ));
    }

    #[test]
    fn test_import_inside_block() {
        let mut b = AstBuilder::new();
        let import = b.import_declaration(None, None, "./m");
        let block = b.block(vec![import]);
        assert!(check(b, vec![block])
            .contains(&messages::AN_IMPORT_DECLARATION_CAN_ONLY_BE_USED_AT_THE_TOP_LEVEL_OF_A_NAMESPACE_OR_MODULE.code));
    }

    #[test]
    fn test_quoted_namespace_name_needs_declare() {
        let mut b = AstBuilder::new();
        let name = b.string_literal("m");
        let body = b.module_block(vec![]);
        let module = b.module_declaration(None, name, Some(body), NodeFlags::NONE);
        assert!(check(b, vec![module]).contains(&messages::ONLY_AMBIENT_MODULES_CAN_USE_QUOTED_NAMES.code));
    }

    #[test]
    fn test_export_declaration_in_namespace() {
        let mut b = AstBuilder::new();
        let one = b.numeric_literal("1");
        let variable = b.simple_variable(NodeFlags::CONST, "x", Some(one));
        let specifier = b.specifier(SyntaxKind::ExportSpecifier, false, None, "x");
        let named = b.list(SyntaxKind::NamedExports, vec![specifier]);
        let export = b.export_declaration(None, false, Some(named), None);
        let body = b.module_block(vec![variable, export]);
        let name = b.identifier("N");
        let module = b.module_declaration(None, name, Some(body), NodeFlags::NAMESPACE);
        assert!(check(b, vec![module]).contains(&messages::EXPORT_DECLARATIONS_ARE_NOT_PERMITTED_IN_A_NAMESPACE.code));
    }
}

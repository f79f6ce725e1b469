//! Grammar checks.
//!
//! These rules reject code that parses but is illegal in its context:
//! misplaced modifiers, `break` without a target, statements inside
//! ambient declarations and so on. Every `check_grammar_*` function
//! returns `true` when it reported something so the caller can skip the
//! remaining checks for the same node.
//!
//! Most reports go through the `grammar_error_*` helpers, which stay
//! silent in a file that already has parse diagnostics.

mod classes;
mod expressions;
mod functions;
mod modifiers;
mod modules;
mod statements;

use crate::checker::Checker;
use tscheck_ast::types::NodeId;
use tscheck_ast::utilities::create_diagnostic_for_first_token;
use tscheck_ast::NodeList;
use tscheck_core::text::TextSpan;
use tscheck_diagnostics::{messages, Diagnostic, DiagnosticMessage};
use tscheck_options::ModuleKind;

impl<'a> Checker<'a> {
    /// Whether the file containing `node` failed to parse cleanly.
    pub(crate) fn has_parse_diagnostics(&self, node: NodeId) -> bool {
        !self.ast.file_of(node).parse_diagnostics.is_empty()
    }

    pub(crate) fn grammar_error_on_node(&mut self, node: NodeId, message: &DiagnosticMessage, args: &[&str]) -> bool {
        if self.has_parse_diagnostics(node) {
            return false;
        }
        self.error(node, message, args);
        true
    }

    pub(crate) fn grammar_error_on_first_token(
        &mut self,
        node: NodeId,
        message: &DiagnosticMessage,
        args: &[&str],
    ) -> bool {
        if self.has_parse_diagnostics(node) {
            return false;
        }
        let diagnostic = create_diagnostic_for_first_token(self.ast, node, message, args);
        self.add_diagnostic(diagnostic);
        true
    }

    /// Report at an explicit span of the file containing `node`.
    pub(crate) fn grammar_error_at_pos(
        &mut self,
        node: NodeId,
        start: u32,
        length: u32,
        message: &DiagnosticMessage,
        args: &[&str],
    ) -> bool {
        if self.has_parse_diagnostics(node) {
            return false;
        }
        let file = self.ast.file_of(node);
        let diagnostic = Diagnostic::with_location(
            file.file_name.clone(),
            file.file_index,
            TextSpan::new(start, length),
            message,
            args,
        );
        self.add_diagnostic(diagnostic);
        true
    }

    /// Report a trailing comma in `list` at the comma itself.
    pub(crate) fn check_grammar_for_disallowed_trailing_comma(
        &mut self,
        list: Option<&NodeList>,
        message: &DiagnosticMessage,
    ) -> bool {
        match list {
            Some(list) if list.has_trailing_comma => match list.first() {
                Some(first) => self.grammar_error_at_pos(first, list.end - 1, 1, message, &[]),
                None => false,
            },
            _ => false,
        }
    }

    pub(crate) fn check_grammar_type_arguments(&mut self, node: NodeId, type_arguments: Option<&NodeList>) -> bool {
        if self.check_grammar_for_disallowed_trailing_comma(type_arguments, &messages::TRAILING_COMMA_NOT_ALLOWED) {
            return true;
        }
        match type_arguments {
            Some(list) if list.is_empty() => {
                let start = list.pos.saturating_sub(1);
                let end = tscheck_core::text::skip_trivia(&self.ast.file_of(node).text, list.end) + 1;
                self.grammar_error_at_pos(node, start, end - start, &messages::TYPE_ARGUMENT_LIST_CANNOT_BE_EMPTY, &[])
            }
            _ => false,
        }
    }

    /// Module format a file is emitted in. Under `node16`/`nodenext` the
    /// extension decides; `.cts` and `.cjs` files are CommonJS.
    pub(crate) fn emit_module_format_of_file(&self, node: NodeId) -> ModuleKind {
        match self.module_kind {
            ModuleKind::Node16 | ModuleKind::NodeNext => {
                let file_name = &self.ast.file_of(node).file_name;
                if [".cts", ".cjs"].iter().any(|ext| file_name.ends_with(ext)) {
                    ModuleKind::CommonJS
                } else {
                    ModuleKind::ESNext
                }
            }
            kind => kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::checker::{Checker, Program};
    use tscheck_ast::{AstBuilder, SyntaxKind};
    use tscheck_diagnostics::{messages, Diagnostic};
    use tscheck_options::CompilerOptions;

    fn program_with_parse_error(with_error: bool) -> Program {
        let mut b = AstBuilder::new();
        let stmt = b.jump(SyntaxKind::BreakStatement, None);
        if with_error {
            b.add_parse_diagnostic(Diagnostic::new(&messages::_0_EXPECTED, &[";"]));
        }
        b.finish_file("a.ts", vec![stmt]);
        Program::new(b.build(), CompilerOptions::default())
    }

    #[test]
    fn test_grammar_errors_report_in_clean_files() {
        let program = program_with_parse_error(false);
        let file = program.ast.files()[0];
        let statement = program.ast.source_file(file).statements.nodes[0];
        let mut checker = Checker::new(&program);
        assert!(checker.grammar_error_on_node(statement, &messages::STATEMENTS_ARE_NOT_ALLOWED_IN_AMBIENT_CONTEXTS, &[]));
        assert_eq!(checker.diagnostics().len(), 1);
    }

    #[test]
    fn test_grammar_errors_suppressed_after_parse_errors() {
        let program = program_with_parse_error(true);
        let file = program.ast.files()[0];
        let statement = program.ast.source_file(file).statements.nodes[0];
        let mut checker = Checker::new(&program);
        assert!(!checker.grammar_error_on_node(statement, &messages::STATEMENTS_ARE_NOT_ALLOWED_IN_AMBIENT_CONTEXTS, &[]));
        assert!(!checker.grammar_error_on_first_token(statement, &messages::STATEMENTS_ARE_NOT_ALLOWED_IN_AMBIENT_CONTEXTS, &[]));
        assert!(checker.diagnostics().is_empty());
    }
}

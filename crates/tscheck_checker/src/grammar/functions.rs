//! Signatures: parameter lists, accessors, index signatures, generators.

use super::modifiers::is_this_parameter;
use crate::checker::Checker;
use crate::types::TypeFlags;
use tscheck_ast::types::{ModifierFlags, NodeFlags, NodeId};
use tscheck_ast::utilities::*;
use tscheck_ast::{NodeList, SyntaxKind};
use tscheck_core::text::skip_trivia;
use tscheck_diagnostics::messages;

impl<'a> Checker<'a> {
    pub(crate) fn check_grammar_function_like_declaration(&mut self, node: NodeId) -> bool {
        let ast = self.ast;
        self.check_grammar_modifiers(node)
            || self.check_grammar_type_parameter_list(node, ast.type_parameters(node))
            || self.check_grammar_parameter_list(ast.parameters(node))
            || self.check_grammar_arrow_function(node)
            || (is_function_like_declaration_kind(ast.kind(node)) && self.check_grammar_for_use_strict_simple_parameter_list(node))
    }

    pub(crate) fn check_grammar_type_parameter_list(&mut self, node: NodeId, type_parameters: Option<&NodeList>) -> bool {
        if self.check_grammar_for_disallowed_trailing_comma(type_parameters, &messages::TRAILING_COMMA_NOT_ALLOWED) {
            return true;
        }
        match type_parameters {
            Some(list) if list.is_empty() => {
                let start = list.pos.saturating_sub(1);
                let end = skip_trivia(&self.ast.file_of(node).text, list.end) + 1;
                self.grammar_error_at_pos(node, start, end - start, &messages::TYPE_PARAMETER_LIST_CANNOT_BE_EMPTY, &[])
            }
            _ => false,
        }
    }

    pub(crate) fn check_grammar_parameter_list(&mut self, parameters: Option<&NodeList>) -> bool {
        let ast = self.ast;
        let Some(parameters) = parameters else {
            return false;
        };
        let mut seen_optional_parameter = false;
        let count = parameters.len();
        for (i, parameter) in parameters.iter().enumerate() {
            let name = ast.name(parameter).unwrap_or(parameter);
            if let Some(dot_dot_dot) = ast.dot_dot_dot_token(parameter) {
                if i != count - 1 {
                    return self.grammar_error_on_node(dot_dot_dot, &messages::A_REST_PARAMETER_MUST_BE_LAST_IN_A_PARAMETER_LIST, &[]);
                }
                if !ast.flags(parameter).contains(NodeFlags::AMBIENT) {
                    self.check_grammar_for_disallowed_trailing_comma(
                        Some(parameters),
                        &messages::A_REST_PARAMETER_OR_BINDING_PATTERN_MAY_NOT_HAVE_A_TRAILING_COMMA,
                    );
                }
                if let Some(question) = ast.question_token(parameter) {
                    return self.grammar_error_on_node(question, &messages::A_REST_PARAMETER_CANNOT_BE_OPTIONAL, &[]);
                }
                if ast.initializer(parameter).is_some() {
                    return self.grammar_error_on_node(name, &messages::A_REST_PARAMETER_CANNOT_HAVE_AN_INITIALIZER, &[]);
                }
            } else if ast.question_token(parameter).is_some() {
                seen_optional_parameter = true;
                if ast.initializer(parameter).is_some() {
                    return self.grammar_error_on_node(name, &messages::PARAMETER_CANNOT_HAVE_QUESTION_MARK_AND_INITIALIZER, &[]);
                }
            } else if seen_optional_parameter && ast.initializer(parameter).is_none() {
                return self.grammar_error_on_node(name, &messages::A_REQUIRED_PARAMETER_CANNOT_FOLLOW_AN_OPTIONAL_PARAMETER, &[]);
            }
        }
        false
    }

    fn check_grammar_arrow_function(&mut self, node: NodeId) -> bool {
        let ast = self.ast;
        if ast.kind(node) != SyntaxKind::ArrowFunction {
            return false;
        }
        if let Some(type_parameters) = ast.type_parameters(node) {
            let reserved_shape = type_parameters.len() == 1
                && !type_parameters.has_trailing_comma
                && type_parameters
                    .first()
                    .is_some_and(|tp| !matches!(&ast.node(tp).payload, tscheck_ast::NodePayload::TypeParameter { constraint: Some(_), .. }));
            let file_name = &ast.file_of(node).file_name;
            if reserved_shape && (file_name.ends_with(".mts") || file_name.ends_with(".cts")) {
                if let Some(first) = type_parameters.first() {
                    self.grammar_error_on_node(first, &messages::THIS_SYNTAX_IS_RESERVED_IN_FILES_WITH_THE_MTS_OR_CTS_EXTENSION, &[]);
                }
            }
        }
        let Some(arrow) = ast.arrow_token(node) else {
            return false;
        };
        let range = ast.range(arrow);
        let start_line = ast.line_of(arrow, range.pos);
        let end_line = ast.line_of(arrow, range.end);
        start_line != end_line
            && self.grammar_error_on_node(arrow, &messages::LINE_TERMINATOR_NOT_PERMITTED_BEFORE_ARROW, &[])
    }

    /// A `"use strict"` prologue requires a simple parameter list from
    /// ES2016 on. Reported regardless of parse errors.
    fn check_grammar_for_use_strict_simple_parameter_list(&mut self, node: NodeId) -> bool {
        let ast = self.ast;
        if self.language_version < tscheck_options::ScriptTarget::ES2016 {
            return false;
        }
        let Some(body) = ast.body(node).filter(|&b| ast.kind(b) == SyntaxKind::Block) else {
            return false;
        };
        let statements = ast.statements(body).map(|s| s.nodes.as_slice()).unwrap_or(&[]);
        let Some(directive) = find_use_strict_prologue(ast, statements) else {
            return false;
        };
        let non_simple: Vec<NodeId> = ast
            .parameters(node)
            .into_iter()
            .flat_map(|list| list.iter())
            .filter(|&p| {
                ast.initializer(p).is_some()
                    || ast.name(p).is_some_and(|n| is_binding_pattern_kind(ast.kind(n)))
                    || ast.dot_dot_dot_token(p).is_some()
            })
            .collect();
        if non_simple.is_empty() {
            return false;
        }
        for &parameter in &non_simple {
            let related = create_diagnostic_for_node(ast, directive, &messages::USE_STRICT_DIRECTIVE_USED_HERE, &[]);
            self.error_with_related(parameter, &messages::THIS_PARAMETER_IS_NOT_ALLOWED_WITH_USE_STRICT_DIRECTIVE, &[], related);
        }
        let mut diagnostic = create_diagnostic_for_node(
            ast,
            directive,
            &messages::USE_STRICT_DIRECTIVE_CANNOT_BE_USED_WITH_NON_SIMPLE_PARAMETER_LIST,
            &[],
        );
        for (index, &parameter) in non_simple.iter().enumerate() {
            let message = if index == 0 {
                &messages::NON_SIMPLE_PARAMETER_DECLARED_HERE
            } else {
                &messages::AND_HERE
            };
            diagnostic.add_related(create_diagnostic_for_node(ast, parameter, message, &[]));
        }
        self.add_diagnostic(diagnostic);
        true
    }

    pub(crate) fn check_grammar_for_generator(&mut self, node: NodeId) -> bool {
        let ast = self.ast;
        let Some(asterisk) = ast.asterisk_token(node) else {
            return false;
        };
        debug_assert!(matches!(
            ast.kind(node),
            SyntaxKind::FunctionDeclaration | SyntaxKind::FunctionExpression | SyntaxKind::MethodDeclaration
        ));
        if ast.flags(node).contains(NodeFlags::AMBIENT) {
            return self.grammar_error_on_node(asterisk, &messages::GENERATORS_ARE_NOT_ALLOWED_IN_AN_AMBIENT_CONTEXT, &[]);
        }
        if ast.body(node).is_none() {
            return self.grammar_error_on_node(asterisk, &messages::AN_OVERLOAD_SIGNATURE_CANNOT_BE_DECLARED_AS_A_GENERATOR, &[]);
        }
        false
    }

    // ========================================================================
    // Constructors and accessors
    // ========================================================================

    pub(crate) fn check_grammar_constructor_type_parameters(&mut self, node: NodeId) -> bool {
        let ast = self.ast;
        let Some(list) = ast.type_parameters(node) else {
            return false;
        };
        let pos = if list.pos == list.end {
            list.pos
        } else {
            skip_trivia(&ast.file_of(node).text, list.pos)
        };
        self.grammar_error_at_pos(
            node,
            pos,
            list.end - pos,
            &messages::TYPE_PARAMETERS_CANNOT_APPEAR_ON_A_CONSTRUCTOR_DECLARATION,
            &[],
        )
    }

    pub(crate) fn check_grammar_constructor_type_annotation(&mut self, node: NodeId) -> bool {
        match self.ast.type_node(node) {
            Some(type_node) => {
                self.grammar_error_on_node(type_node, &messages::TYPE_ANNOTATION_CANNOT_APPEAR_ON_A_CONSTRUCTOR_DECLARATION, &[])
            }
            None => false,
        }
    }

    pub(crate) fn check_grammar_accessor(&mut self, accessor: NodeId) -> bool {
        let ast = self.ast;
        let kind = ast.kind(accessor);
        let name = ast.name(accessor).unwrap_or(accessor);
        let body = ast.body(accessor);
        let in_type_member_list = ast
            .parent(accessor)
            .is_some_and(|p| matches!(ast.kind(p), SyntaxKind::TypeLiteral | SyntaxKind::InterfaceDeclaration));
        let is_abstract = has_syntactic_modifier(ast, accessor, ModifierFlags::ABSTRACT);

        if !ast.flags(accessor).contains(NodeFlags::AMBIENT) && !in_type_member_list {
            if self.language_version < tscheck_options::ScriptTarget::ES2015 && ast.kind(name) == SyntaxKind::PrivateIdentifier {
                return self.grammar_error_on_node(
                    name,
                    &messages::PRIVATE_IDENTIFIERS_ARE_ONLY_AVAILABLE_WHEN_TARGETING_ECMASCRIPT_2015_AND_HIGHER,
                    &[],
                );
            }
            if body.is_none() && !is_abstract {
                let end = ast.range(accessor).end;
                return self.grammar_error_at_pos(accessor, end.saturating_sub(1), 1, &messages::_0_EXPECTED, &["{"]);
            }
        }
        if let Some(body) = body {
            if is_abstract {
                return self.grammar_error_on_node(accessor, &messages::AN_ABSTRACT_ACCESSOR_CANNOT_HAVE_AN_IMPLEMENTATION, &[]);
            }
            if in_type_member_list {
                return self.grammar_error_on_node(body, &messages::AN_IMPLEMENTATION_CANNOT_BE_DECLARED_IN_AMBIENT_CONTEXTS, &[]);
            }
        }
        if ast.type_parameters(accessor).is_some() {
            return self.grammar_error_on_node(name, &messages::AN_ACCESSOR_CANNOT_HAVE_TYPE_PARAMETERS, &[]);
        }

        let parameters: &[NodeId] = ast.parameters(accessor).map(|l| l.nodes.as_slice()).unwrap_or(&[]);
        let expected = if kind == SyntaxKind::GetAccessor { 0 } else { 1 };
        let has_this_parameter =
            parameters.len() == expected + 1 && parameters.first().is_some_and(|&p| is_this_parameter(ast, p));
        if !has_this_parameter && parameters.len() != expected {
            let message = if kind == SyntaxKind::GetAccessor {
                &messages::A_GET_ACCESSOR_CANNOT_HAVE_PARAMETERS
            } else {
                &messages::A_SET_ACCESSOR_MUST_HAVE_EXACTLY_ONE_PARAMETER
            };
            return self.grammar_error_on_node(name, message, &[]);
        }

        if kind == SyntaxKind::SetAccessor {
            if ast.type_node(accessor).is_some() {
                return self.grammar_error_on_node(name, &messages::A_SET_ACCESSOR_CANNOT_HAVE_A_RETURN_TYPE_ANNOTATION, &[]);
            }
            let value_index = usize::from(has_this_parameter);
            let Some(&parameter) = parameters.get(value_index) else {
                panic!("Return value does not match parameter count assertion.");
            };
            if let Some(dot_dot_dot) = ast.dot_dot_dot_token(parameter) {
                return self.grammar_error_on_node(dot_dot_dot, &messages::A_SET_ACCESSOR_CANNOT_HAVE_REST_PARAMETER, &[]);
            }
            if let Some(question) = ast.question_token(parameter) {
                return self.grammar_error_on_node(question, &messages::A_SET_ACCESSOR_CANNOT_HAVE_AN_OPTIONAL_PARAMETER, &[]);
            }
            if ast.initializer(parameter).is_some() {
                return self.grammar_error_on_node(name, &messages::A_SET_ACCESSOR_PARAMETER_CANNOT_HAVE_AN_INITIALIZER, &[]);
            }
        }
        false
    }

    // ========================================================================
    // Index signatures
    // ========================================================================

    pub(crate) fn check_grammar_index_signature(&mut self, node: NodeId) -> bool {
        self.check_grammar_modifiers(node) || self.check_grammar_index_signature_parameters(node)
    }

    fn check_grammar_index_signature_parameters(&mut self, node: NodeId) -> bool {
        let ast = self.ast;
        let Some(parameters) = ast.parameters(node).filter(|p| !p.is_empty()) else {
            return self.grammar_error_on_node(node, &messages::AN_INDEX_SIGNATURE_MUST_HAVE_EXACTLY_ONE_PARAMETER, &[]);
        };
        let parameter = parameters.nodes[0];
        let name = ast.name(parameter).unwrap_or(parameter);
        if parameters.len() != 1 {
            return self.grammar_error_on_node(name, &messages::AN_INDEX_SIGNATURE_MUST_HAVE_EXACTLY_ONE_PARAMETER, &[]);
        }
        self.check_grammar_for_disallowed_trailing_comma(Some(parameters), &messages::AN_INDEX_SIGNATURE_CANNOT_HAVE_A_TRAILING_COMMA);
        if let Some(dot_dot_dot) = ast.dot_dot_dot_token(parameter) {
            return self.grammar_error_on_node(dot_dot_dot, &messages::AN_INDEX_SIGNATURE_CANNOT_HAVE_A_REST_PARAMETER, &[]);
        }
        if ast.modifiers(parameter).is_some_and(|m| !m.is_empty()) {
            return self.grammar_error_on_node(
                name,
                &messages::AN_INDEX_SIGNATURE_PARAMETER_CANNOT_HAVE_AN_ACCESSIBILITY_MODIFIER,
                &[],
            );
        }
        if let Some(question) = ast.question_token(parameter) {
            return self.grammar_error_on_node(question, &messages::AN_INDEX_SIGNATURE_PARAMETER_CANNOT_HAVE_A_QUESTION_MARK, &[]);
        }
        if ast.initializer(parameter).is_some() {
            return self.grammar_error_on_node(name, &messages::AN_INDEX_SIGNATURE_PARAMETER_CANNOT_HAVE_AN_INITIALIZER, &[]);
        }
        let Some(type_node) = ast.type_node(parameter) else {
            return self.grammar_error_on_node(name, &messages::AN_INDEX_SIGNATURE_PARAMETER_MUST_HAVE_A_TYPE_ANNOTATION, &[]);
        };
        let t = self.get_type_from_type_node(type_node);
        let types = &self.types;
        if types.some_type(t, |ty| ty.flags.intersects(TypeFlags::STRING_OR_NUMBER_LITERAL_OR_UNIQUE)) || types.is_generic_type(t) {
            return self.grammar_error_on_node(
                name,
                &messages::AN_INDEX_SIGNATURE_PARAMETER_TYPE_CANNOT_BE_A_LITERAL_TYPE_OR_GENERIC_TYPE_CONSIDER_USING_A_MAPPED_OBJECT_TYPE_INSTEAD,
                &[],
            );
        }
        if !types.every_type(t, |ty| types.is_valid_index_key_type(ty.id)) {
            return self.grammar_error_on_node(
                name,
                &messages::AN_INDEX_SIGNATURE_PARAMETER_TYPE_MUST_BE_STRING_NUMBER_SYMBOL_OR_A_TEMPLATE_LITERAL_TYPE,
                &[],
            );
        }
        if ast.type_node(node).is_none() {
            let range = ast.range(node);
            return self.grammar_error_at_pos(node, range.pos, range.len(), &messages::AN_INDEX_SIGNATURE_MUST_HAVE_A_TYPE_ANNOTATION, &[]);
        }
        false
    }
}

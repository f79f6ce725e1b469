//! Expressions: object literals, `await`, `yield`, literals and calls.

use super::statements::TopLevelAwaitSupport;
use crate::checker::Checker;
use crate::evaluator::parse_numeric_literal;
use crate::type_nodes::number_to_property_name;
use rustc_hash::FxHashMap;
use tscheck_ast::types::{ModifierFlags, NodeFlags, NodeId};
use tscheck_ast::utilities::*;
use tscheck_ast::{NodePayload, SyntaxKind};
use tscheck_diagnostics::{messages, Diagnostic};
use tscheck_options::{ModuleKind, ScriptTarget};

/// Largest integer a double holds exactly, 2^53 - 1.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

bitflags::bitflags! {
    /// What an object literal member declares under its name.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    struct DeclarationMeaning: u8 {
        const PROPERTY_ASSIGNMENT = 1 << 0;
        const METHOD              = 1 << 1;
        const GET_ACCESSOR        = 1 << 2;
        const SET_ACCESSOR        = 1 << 3;
        const GET_OR_SET_ACCESSOR = Self::GET_ACCESSOR.bits() | Self::SET_ACCESSOR.bits();
    }
}

/// Property name of a literal or literal-valued computed name. Numbers
/// are normalized so `1` and `1.0` collide.
fn effective_property_name(ast: &tscheck_ast::Ast, name: NodeId) -> Option<String> {
    let literal = match ast.kind(name) {
        SyntaxKind::ComputedPropertyName => ast.expression(name)?,
        _ => name,
    };
    match ast.kind(literal) {
        SyntaxKind::NumericLiteral => Some(number_to_property_name(parse_numeric_literal(ast.text(literal)))),
        SyntaxKind::StringLiteral | SyntaxKind::NoSubstitutionTemplateLiteral => Some(ast.text(literal).to_string()),
        SyntaxKind::Identifier | SyntaxKind::PrivateIdentifier if literal == name => Some(ast.text(name).to_string()),
        _ => None,
    }
}

/// `yield` or `await` inside a parameter initializer, not nested in a
/// function of its own.
fn is_in_parameter_initializer_before_containing_function(ast: &tscheck_ast::Ast, node: NodeId) -> bool {
    let mut in_binding_initializer = false;
    let mut current = node;
    while let Some(parent) = ast.parent(current).filter(|&p| !is_function_like(ast, p)) {
        match ast.kind(parent) {
            SyntaxKind::Parameter if in_binding_initializer || ast.initializer(parent) == Some(current) => return true,
            SyntaxKind::BindingElement if ast.initializer(parent) == Some(current) => in_binding_initializer = true,
            _ => {}
        }
        current = parent;
    }
    false
}

impl<'a> Checker<'a> {
    // ========================================================================
    // Literals
    // ========================================================================

    /// Integer literals past 2^53 - 1 lose precision. Reported as a
    /// suggestion.
    pub(crate) fn check_grammar_numeric_literal(&mut self, node: NodeId) {
        let ast = self.ast;
        let text = ast.source_text(node);
        // Any '.' or lowercase 'e' exempts the literal, hex digits included
        if text.contains('.') || text.contains('e') {
            return;
        }
        if parse_numeric_literal(ast.text(node)) <= MAX_SAFE_INTEGER {
            return;
        }
        self.add_diagnostic(create_diagnostic_for_node(
            ast,
            node,
            &messages::NUMERIC_LITERALS_WITH_ABSOLUTE_VALUES_EQUAL_TO_2_53_OR_GREATER_ARE_TOO_LARGE_TO_BE_REPRESENTED_ACCURATELY_AS_INTEGERS,
            &[],
        ));
    }

    pub(crate) fn check_grammar_big_int_literal(&mut self, node: NodeId) -> bool {
        let ast = self.ast;
        let is_literal_type = ast.parent(node).is_some_and(|p| {
            ast.kind(p) == SyntaxKind::LiteralType
                || (ast.kind(p) == SyntaxKind::PrefixUnaryExpression
                    && ast.parent(p).is_some_and(|pp| ast.kind(pp) == SyntaxKind::LiteralType))
        });
        if !is_literal_type && !ast.flags(node).contains(NodeFlags::AMBIENT) && self.language_version < ScriptTarget::ES2020 {
            return self.grammar_error_on_node(node, &messages::BIGINT_LITERALS_ARE_NOT_AVAILABLE_WHEN_TARGETING_LOWER_THAN_ES2020, &[]);
        }
        false
    }

    // ========================================================================
    // Object literals
    // ========================================================================

    pub(crate) fn check_grammar_object_literal_expression(&mut self, node: NodeId, in_destructuring: bool) -> bool {
        let ast = self.ast;
        let Some(properties) = ast.elements(node) else {
            return false;
        };
        let mut seen: FxHashMap<String, DeclarationMeaning> = FxHashMap::default();
        for property in properties.iter() {
            if ast.kind(property) == SyntaxKind::SpreadAssignment {
                if in_destructuring {
                    if let Some(expression) = ast.expression(property) {
                        let target = skip_parentheses(ast, expression);
                        if matches!(
                            ast.kind(target),
                            SyntaxKind::ArrayLiteralExpression | SyntaxKind::ObjectLiteralExpression
                        ) {
                            return self.grammar_error_on_node(
                                expression,
                                &messages::A_REST_ELEMENT_CANNOT_CONTAIN_A_BINDING_PATTERN,
                                &[],
                            );
                        }
                    }
                }
                continue;
            }
            let Some(name) = ast.name(property) else {
                continue;
            };
            self.check_grammar_computed_property_name(Some(name));

            if ast.kind(property) == SyntaxKind::ShorthandPropertyAssignment && !in_destructuring && ast.initializer(property).is_some() {
                self.grammar_error_on_first_token(
                    name,
                    &messages::DID_YOU_MEAN_TO_USE_A_COLON_AN_EQUALS_CAN_ONLY_FOLLOW_A_PROPERTY_NAME_WHEN_THE_CONTAINING_OBJECT_LITERAL_IS_PART_OF_A_DESTRUCTURING_PATTERN,
                    &[],
                );
            }
            if ast.kind(name) == SyntaxKind::PrivateIdentifier {
                self.grammar_error_on_node(name, &messages::PRIVATE_IDENTIFIERS_ARE_NOT_ALLOWED_OUTSIDE_CLASS_BODIES, &[]);
            }
            if let Some(modifiers) = ast.modifiers(property) {
                let is_method = ast.kind(property) == SyntaxKind::MethodDeclaration;
                for modifier in modifiers.iter() {
                    let kind = ast.kind(modifier);
                    if kind == SyntaxKind::Decorator || (kind == SyntaxKind::AsyncKeyword && is_method) {
                        continue;
                    }
                    let text = kind.keyword_text().unwrap_or_default();
                    self.grammar_error_on_node(modifier, &messages::_0_MODIFIER_CANNOT_BE_USED_HERE, &[text]);
                }
            }

            let current_kind = match ast.kind(property) {
                SyntaxKind::PropertyAssignment | SyntaxKind::ShorthandPropertyAssignment => {
                    let postfix = ast.postfix_token(property);
                    self.check_grammar_for_invalid_exclamation_token(
                        postfix,
                        &messages::A_DEFINITE_ASSIGNMENT_ASSERTION_IS_NOT_PERMITTED_IN_THIS_CONTEXT,
                    );
                    self.check_grammar_for_invalid_question_mark(postfix, &messages::AN_OBJECT_MEMBER_CANNOT_BE_DECLARED_OPTIONAL);
                    match ast.kind(name) {
                        SyntaxKind::NumericLiteral => self.check_grammar_numeric_literal(name),
                        SyntaxKind::BigIntLiteral => {
                            self.error(name, &messages::A_BIGINT_LITERAL_CANNOT_BE_USED_AS_A_PROPERTY_NAME, &[]);
                        }
                        _ => {}
                    }
                    DeclarationMeaning::PROPERTY_ASSIGNMENT
                }
                SyntaxKind::MethodDeclaration => DeclarationMeaning::METHOD,
                SyntaxKind::GetAccessor => DeclarationMeaning::GET_ACCESSOR,
                SyntaxKind::SetAccessor => DeclarationMeaning::SET_ACCESSOR,
                other => panic!("Unexpected syntax kind: {other:?}"),
            };

            if in_destructuring {
                continue;
            }
            let Some(effective_name) = effective_property_name(ast, name) else {
                continue;
            };
            let Some(&existing_kind) = seen.get(&effective_name) else {
                seen.insert(effective_name, current_kind);
                continue;
            };
            let name_text = ast.source_text(name);
            if current_kind.intersects(DeclarationMeaning::METHOD) && existing_kind.intersects(DeclarationMeaning::METHOD) {
                self.grammar_error_on_node(name, &messages::DUPLICATE_IDENTIFIER_0, &[name_text]);
            } else if current_kind.intersects(DeclarationMeaning::PROPERTY_ASSIGNMENT)
                && existing_kind.intersects(DeclarationMeaning::PROPERTY_ASSIGNMENT)
            {
                self.grammar_error_on_node(
                    name,
                    &messages::AN_OBJECT_LITERAL_CANNOT_HAVE_MULTIPLE_PROPERTIES_WITH_THE_SAME_NAME,
                    &[name_text],
                );
            } else if current_kind.intersects(DeclarationMeaning::GET_OR_SET_ACCESSOR)
                && existing_kind.intersects(DeclarationMeaning::GET_OR_SET_ACCESSOR)
            {
                if existing_kind != DeclarationMeaning::GET_OR_SET_ACCESSOR && current_kind != existing_kind {
                    seen.insert(effective_name, current_kind | existing_kind);
                } else {
                    return self.grammar_error_on_node(
                        name,
                        &messages::AN_OBJECT_LITERAL_CANNOT_HAVE_MULTIPLE_GET_SET_ACCESSORS_WITH_THE_SAME_NAME,
                        &[],
                    );
                }
            } else {
                return self.grammar_error_on_node(
                    name,
                    &messages::AN_OBJECT_LITERAL_CANNOT_HAVE_PROPERTY_AND_ACCESSOR_WITH_THE_SAME_NAME,
                    &[],
                );
            }
        }
        false
    }

    // ========================================================================
    // await and yield
    // ========================================================================

    /// `await` expressions and `await using` declaration lists.
    pub(crate) fn check_grammar_await_or_await_using(&mut self, node: NodeId) -> bool {
        let ast = self.ast;
        let is_await_expression = ast.kind(node) == SyntaxKind::AwaitExpression;
        let container = get_containing_function_or_class_static_block(ast, node);
        let mut has_error = false;

        if container.is_some_and(|c| ast.kind(c) == SyntaxKind::ClassStaticBlockDeclaration) {
            let message = if is_await_expression {
                &messages::AWAIT_EXPRESSION_CANNOT_BE_USED_INSIDE_A_CLASS_STATIC_BLOCK
            } else {
                &messages::AWAIT_USING_STATEMENTS_CANNOT_BE_USED_INSIDE_A_CLASS_STATIC_BLOCK
            };
            self.error(node, message, &[]);
            has_error = true;
        } else if !ast.flags(node).contains(NodeFlags::AWAIT_CONTEXT) && !self.has_parse_diagnostics(node) {
            let file = ast.file_of(node);
            let span = ast.first_token_span(node);
            let at_span = |message| Diagnostic::with_location(file.file_name.clone(), file.file_index, span, message, &[]);
            if is_in_top_level_context(ast, node) {
                if !file.is_external_module() {
                    let message = if is_await_expression {
                        &messages::AWAIT_EXPRESSIONS_ARE_ONLY_ALLOWED_AT_THE_TOP_LEVEL_OF_A_FILE_WHEN_THAT_FILE_IS_A_MODULE
                    } else {
                        &messages::AWAIT_USING_STATEMENTS_ARE_ONLY_ALLOWED_AT_THE_TOP_LEVEL_OF_A_FILE_WHEN_THAT_FILE_IS_A_MODULE
                    };
                    self.add_diagnostic(at_span(message));
                    has_error = true;
                }
                let message = match self.top_level_await_support(node) {
                    TopLevelAwaitSupport::Supported => None,
                    TopLevelAwaitSupport::CommonJsFile => {
                        Some(&messages::THE_CURRENT_FILE_IS_A_COMMONJS_MODULE_AND_CANNOT_USE_AWAIT_AT_THE_TOP_LEVEL)
                    }
                    TopLevelAwaitSupport::Unsupported if is_await_expression => {
                        Some(&messages::TOP_LEVEL_AWAIT_EXPRESSIONS_ARE_ONLY_ALLOWED_WHEN_THE_MODULE_OPTION_IS_SET_APPROPRIATELY)
                    }
                    TopLevelAwaitSupport::Unsupported => {
                        Some(&messages::TOP_LEVEL_AWAIT_USING_STATEMENTS_ARE_ONLY_ALLOWED_WHEN_THE_MODULE_OPTION_IS_SET_APPROPRIATELY)
                    }
                };
                if let Some(message) = message {
                    self.add_diagnostic(at_span(message));
                    has_error = true;
                }
            } else {
                let message = if is_await_expression {
                    &messages::AWAIT_EXPRESSIONS_ARE_ONLY_ALLOWED_WITHIN_ASYNC_FUNCTIONS_AND_AT_THE_TOP_LEVELS_OF_MODULES
                } else {
                    &messages::AWAIT_USING_STATEMENTS_ARE_ONLY_ALLOWED_WITHIN_ASYNC_FUNCTIONS_AND_AT_THE_TOP_LEVELS_OF_MODULES
                };
                let mut diagnostic = at_span(message);
                let suggest_async = container.filter(|&c| {
                    ast.kind(c) != SyntaxKind::Constructor && !has_syntactic_modifier(ast, c, ModifierFlags::ASYNC)
                });
                if let Some(container) = suggest_async {
                    diagnostic.add_related(create_diagnostic_for_node(
                        ast,
                        container,
                        &messages::DID_YOU_MEAN_TO_MARK_THIS_FUNCTION_AS_ASYNC,
                        &[],
                    ));
                }
                self.add_diagnostic(diagnostic);
                has_error = true;
            }
        }

        if is_await_expression && is_in_parameter_initializer_before_containing_function(ast, node) {
            self.error(node, &messages::AWAIT_EXPRESSIONS_CANNOT_BE_USED_IN_A_PARAMETER_INITIALIZER, &[]);
            has_error = true;
        }
        has_error
    }

    pub(crate) fn check_grammar_yield_expression(&mut self, node: NodeId) -> bool {
        let ast = self.ast;
        let mut has_error = false;
        if !ast.flags(node).contains(NodeFlags::YIELD_CONTEXT) {
            has_error = self.grammar_error_on_first_token(node, &messages::A_YIELD_EXPRESSION_IS_ONLY_ALLOWED_IN_A_GENERATOR_BODY, &[]);
        }
        if is_in_parameter_initializer_before_containing_function(ast, node) {
            self.error(node, &messages::YIELD_EXPRESSIONS_CANNOT_BE_USED_IN_A_PARAMETER_INITIALIZER, &[]);
            has_error = true;
        }
        has_error
    }

    // ========================================================================
    // Calls and meta properties
    // ========================================================================

    pub(crate) fn check_grammar_meta_property(&mut self, node: NodeId) -> bool {
        let ast = self.ast;
        let NodePayload::MetaProperty { keyword_token, name } = &ast.node(node).payload else {
            return false;
        };
        let expected = match keyword_token {
            SyntaxKind::NewKeyword => "target",
            SyntaxKind::ImportKeyword => "meta",
            _ => return false,
        };
        let text = ast.text(*name);
        if text != expected {
            let keyword = keyword_token.keyword_text().unwrap_or_default();
            return self.grammar_error_on_node(
                *name,
                &messages::_0_IS_NOT_A_VALID_META_PROPERTY_FOR_KEYWORD_1_DID_YOU_MEAN_2,
                &[text, keyword, expected],
            );
        }
        false
    }

    pub(crate) fn check_grammar_tagged_template_chain(&mut self, node: NodeId) -> bool {
        let ast = self.ast;
        let NodePayload::TaggedTemplate {
            question_dot_token,
            template,
            ..
        } = &ast.node(node).payload
        else {
            return false;
        };
        if question_dot_token.is_some() || ast.flags(node).contains(NodeFlags::OPTIONAL_CHAIN) {
            return self.grammar_error_on_node(
                *template,
                &messages::TAGGED_TEMPLATE_EXPRESSIONS_ARE_NOT_PERMITTED_IN_AN_OPTIONAL_CHAIN,
                &[],
            );
        }
        false
    }

    /// `import(specifier, attributes?)` under the module options in effect.
    pub(crate) fn check_grammar_import_call_expression(&mut self, node: NodeId) -> bool {
        let ast = self.ast;
        if self.options.verbatim_module_syntax == Some(true) && self.module_kind == ModuleKind::CommonJS {
            return self.grammar_error_on_node(
                node,
                &messages::ESM_SYNTAX_IS_NOT_ALLOWED_IN_A_COMMONJS_MODULE_WHEN_VERBATIMMODULESYNTAX_IS_ENABLED,
                &[],
            );
        }
        if self.module_kind == ModuleKind::ES2015 {
            return self.grammar_error_on_node(
                node,
                &messages::DYNAMIC_IMPORTS_ARE_ONLY_SUPPORTED_WHEN_THE_MODULE_FLAG_IS_SET_APPROPRIATELY,
                &[],
            );
        }
        if ast.type_arguments(node).is_some() {
            return self.grammar_error_on_node(node, &messages::THIS_USE_OF_IMPORT_IS_INVALID, &[]);
        }
        let arguments = ast.arguments(node);
        let argument_count = arguments.map_or(0, |a| a.len());
        let supports_attributes = matches!(
            self.module_kind,
            ModuleKind::Node16 | ModuleKind::NodeNext | ModuleKind::ESNext | ModuleKind::Preserve
        );
        if !supports_attributes {
            self.check_grammar_for_disallowed_trailing_comma(arguments, &messages::TRAILING_COMMA_NOT_ALLOWED);
            if let Some(attributes) = arguments.and_then(|a| a.get(1)) {
                return self.grammar_error_on_node(
                    attributes,
                    &messages::DYNAMIC_IMPORTS_ONLY_SUPPORT_A_SECOND_ARGUMENT_WHEN_THE_MODULE_OPTION_IS_SET_APPROPRIATELY,
                    &[],
                );
            }
        }
        if argument_count == 0 || argument_count > 2 {
            return self.grammar_error_on_node(
                node,
                &messages::DYNAMIC_IMPORTS_CAN_ONLY_ACCEPT_A_MODULE_SPECIFIER_AND_AN_OPTIONAL_SET_OF_ATTRIBUTES_AS_ARGUMENTS,
                &[],
            );
        }
        let spread = arguments.and_then(|a| a.iter().find(|&arg| ast.kind(arg) == SyntaxKind::SpreadElement));
        if let Some(spread) = spread {
            return self.grammar_error_on_node(spread, &messages::ARGUMENT_OF_DYNAMIC_IMPORT_CANNOT_BE_SPREAD_ELEMENT, &[]);
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use crate::checker::{Checker, Program};
    use tscheck_ast::{AstBuilder, NodeId, SyntaxKind};
    use tscheck_diagnostics::messages;
    use tscheck_options::{CompilerOptions, ModuleKind, ScriptTarget};

    fn check_with(mut b: AstBuilder, statements: Vec<NodeId>, options: CompilerOptions) -> Vec<u32> {
        b.finish_file("a.ts", statements);
        let program = Program::new(b.build(), options);
        let mut checker = Checker::new(&program);
        checker.check_program();
        checker.diagnostics().diagnostics().iter().map(|d| d.code).collect()
    }

    fn check(b: AstBuilder, statements: Vec<NodeId>) -> Vec<u32> {
        check_with(b, statements, CompilerOptions::default())
    }

    fn object_literal_statement(b: &mut AstBuilder, properties: Vec<NodeId>) -> NodeId {
        let object = b.list(SyntaxKind::ObjectLiteralExpression, properties);
        let paren = b.wrap(SyntaxKind::ParenthesizedExpression, object);
        b.expression_statement(paren)
    }

    #[test]
    fn test_duplicate_property_in_object_literal() {
        let mut b = AstBuilder::new();
        let first_name = b.identifier("a");
        let one = b.numeric_literal("1");
        let first = b.property_assignment(first_name, one);
        let second_name = b.identifier("a");
        let two = b.numeric_literal("2");
        let second = b.property_assignment(second_name, two);
        let statement = object_literal_statement(&mut b, vec![first, second]);
        assert!(check(b, vec![statement])
            .contains(&messages::AN_OBJECT_LITERAL_CANNOT_HAVE_MULTIPLE_PROPERTIES_WITH_THE_SAME_NAME.code));
    }

    #[test]
    fn test_numeric_property_names_are_normalized() {
        let mut b = AstBuilder::new();
        let first_name = b.numeric_literal("1");
        let one = b.numeric_literal("1");
        let first = b.property_assignment(first_name, one);
        let second_name = b.numeric_literal("1.0");
        let two = b.numeric_literal("2");
        let second = b.property_assignment(second_name, two);
        let statement = object_literal_statement(&mut b, vec![first, second]);
        assert!(check(b, vec![statement])
            .contains(&messages::AN_OBJECT_LITERAL_CANNOT_HAVE_MULTIPLE_PROPERTIES_WITH_THE_SAME_NAME.code));
    }

    #[test]
    fn test_invalid_meta_property() {
        let mut b = AstBuilder::new();
        let meta = b.meta_property(SyntaxKind::NewKeyword, "targte");
        let statement = b.expression_statement(meta);
        let function = b.function_declaration(None, "f", vec![], Some(vec![statement]));
        assert!(check(b, vec![function]).contains(&messages::_0_IS_NOT_A_VALID_META_PROPERTY_FOR_KEYWORD_1_DID_YOU_MEAN_2.code));
    }

    #[test]
    fn test_yield_outside_generator() {
        let mut b = AstBuilder::new();
        let yield_expression = b.yield_expression(false, None);
        let statement = b.expression_statement(yield_expression);
        let function = b.function_declaration(None, "f", vec![], Some(vec![statement]));
        assert!(check(b, vec![function]).contains(&messages::A_YIELD_EXPRESSION_IS_ONLY_ALLOWED_IN_A_GENERATOR_BODY.code));
    }

    #[test]
    fn test_await_in_non_async_function_suggests_async() {
        let mut b = AstBuilder::new();
        let operand = b.identifier("p");
        let await_expression = b.wrap(SyntaxKind::AwaitExpression, operand);
        let statement = b.expression_statement(await_expression);
        let function = b.function_declaration(None, "f", vec![], Some(vec![statement]));
        b.finish_file("a.ts", vec![function]);
        let program = Program::new(b.build(), CompilerOptions::default());
        let mut checker = Checker::new(&program);
        checker.check_program();
        let diagnostic = checker
            .diagnostics()
            .with_code(messages::AWAIT_EXPRESSIONS_ARE_ONLY_ALLOWED_WITHIN_ASYNC_FUNCTIONS_AND_AT_THE_TOP_LEVELS_OF_MODULES.code)
            .next()
            .expect("await outside async function is reported");
        assert_eq!(diagnostic.related_information.len(), 1);
        assert_eq!(
            diagnostic.related_information[0].code,
            messages::DID_YOU_MEAN_TO_MARK_THIS_FUNCTION_AS_ASYNC.code
        );
    }

    #[test]
    fn test_top_level_await_in_script() {
        let mut b = AstBuilder::new();
        let operand = b.identifier("p");
        let await_expression = b.wrap(SyntaxKind::AwaitExpression, operand);
        let statement = b.expression_statement(await_expression);
        let codes = check(b, vec![statement]);
        assert!(codes.contains(&messages::AWAIT_EXPRESSIONS_ARE_ONLY_ALLOWED_AT_THE_TOP_LEVEL_OF_A_FILE_WHEN_THAT_FILE_IS_A_MODULE.code));
        assert!(codes.contains(&messages::TOP_LEVEL_AWAIT_EXPRESSIONS_ARE_ONLY_ALLOWED_WHEN_THE_MODULE_OPTION_IS_SET_APPROPRIATELY.code));
    }

    #[test]
    fn test_bigint_needs_es2020() {
        let mut b = AstBuilder::new();
        let big = b.bigint_literal("1n");
        let old = b.simple_variable(tscheck_ast::NodeFlags::LET, "x", Some(big));
        assert!(check(b, vec![old]).contains(&messages::BIGINT_LITERALS_ARE_NOT_AVAILABLE_WHEN_TARGETING_LOWER_THAN_ES2020.code));

        let mut b = AstBuilder::new();
        let big = b.bigint_literal("1n");
        let new = b.simple_variable(tscheck_ast::NodeFlags::LET, "x", Some(big));
        let options = CompilerOptions {
            target: Some(ScriptTarget::ES2020),
            ..CompilerOptions::default()
        };
        assert!(!check_with(b, vec![new], options)
            .contains(&messages::BIGINT_LITERALS_ARE_NOT_AVAILABLE_WHEN_TARGETING_LOWER_THAN_ES2020.code));
    }

    #[test]
    fn test_unsafe_integer_is_a_suggestion() {
        let mut b = AstBuilder::new();
        let big = b.numeric_literal("9007199254740993");
        let statement = b.simple_variable(tscheck_ast::NodeFlags::LET, "x", Some(big));
        b.finish_file("a.ts", vec![statement]);
        let program = Program::new(b.build(), CompilerOptions::default());
        let mut checker = Checker::new(&program);
        checker.check_program();
        let code = messages::NUMERIC_LITERALS_WITH_ABSOLUTE_VALUES_EQUAL_TO_2_53_OR_GREATER_ARE_TOO_LARGE_TO_BE_REPRESENTED_ACCURATELY_AS_INTEGERS.code;
        assert_eq!(checker.suggestion_diagnostics().with_code(code).count(), 1);
        assert_eq!(checker.diagnostics().with_code(code).count(), 0);
    }

    #[test]
    fn test_dynamic_import_arguments() {
        let mut b = AstBuilder::new();
        let import = b.token(SyntaxKind::ImportKeyword);
        let call = b.call(import, vec![]);
        let statement = b.expression_statement(call);
        let options = CompilerOptions {
            module: Some(ModuleKind::ESNext),
            ..CompilerOptions::default()
        };
        assert!(check_with(b, vec![statement], options).contains(
            &messages::DYNAMIC_IMPORTS_CAN_ONLY_ACCEPT_A_MODULE_SPECIFIER_AND_AN_OPTIONAL_SET_OF_ATTRIBUTES_AS_ARGUMENTS.code
        ));
    }
}

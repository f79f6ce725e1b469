//! Classes, interfaces and their members.

use crate::checker::Checker;
use crate::types::TypeFlags;
use tscheck_ast::types::{ModifierFlags, NodeFlags, NodeId, SymbolId};
use tscheck_ast::utilities::*;
use tscheck_ast::{NodePayload, SyntaxKind};
use tscheck_binder::binder::private_identifier_symbol_name;
use tscheck_diagnostics::{messages, DiagnosticMessage};

/// A string, number or negated number literal.
fn is_initializer_string_or_number_literal(ast: &tscheck_ast::Ast, expr: NodeId) -> bool {
    is_string_or_numeric_literal_like(ast, expr) || is_negated_literal(ast, expr, SyntaxKind::NumericLiteral)
}

fn is_initializer_bigint_literal(ast: &tscheck_ast::Ast, expr: NodeId) -> bool {
    ast.kind(expr) == SyntaxKind::BigIntLiteral || is_negated_literal(ast, expr, SyntaxKind::BigIntLiteral)
}

fn is_negated_literal(ast: &tscheck_ast::Ast, expr: NodeId, literal: SyntaxKind) -> bool {
    match &ast.node(expr).payload {
        NodePayload::Unary { operator, operand } if ast.kind(expr) == SyntaxKind::PrefixUnaryExpression => {
            *operator == SyntaxKind::MinusToken && ast.kind(*operand) == literal
        }
        _ => false,
    }
}

/// `readonly` that is not a parameter property.
fn is_declaration_readonly(ast: &tscheck_ast::Ast, node: NodeId) -> bool {
    let is_parameter_property = ast.kind(node) == SyntaxKind::Parameter
        && ast.parent(node).is_some_and(|p| ast.kind(p) == SyntaxKind::Constructor);
    get_combined_modifier_flags(ast, node).contains(ModifierFlags::READONLY) && !is_parameter_property
}

fn is_auto_accessor_property(ast: &tscheck_ast::Ast, node: NodeId) -> bool {
    ast.kind(node) == SyntaxKind::PropertyDeclaration && has_syntactic_modifier(ast, node, ModifierFlags::ACCESSOR)
}

impl<'a> Checker<'a> {
    // ========================================================================
    // Declarations
    // ========================================================================

    pub(crate) fn check_grammar_class_like_declaration(&mut self, node: NodeId) -> bool {
        let ast = self.ast;
        self.check_grammar_class_declaration_heritage_clauses(node)
            || self.check_grammar_type_parameter_list(node, ast.type_parameters(node))
    }

    fn check_grammar_class_declaration_heritage_clauses(&mut self, node: NodeId) -> bool {
        let ast = self.ast;
        if self.check_grammar_modifiers(node) {
            return false;
        }
        let Some(clauses) = ast.heritage_clauses(node) else {
            return false;
        };
        let mut seen_extends_clause = false;
        let mut seen_implements_clause = false;
        for clause in clauses.iter() {
            let NodePayload::HeritageClause { token, types } = &ast.node(clause).payload else {
                continue;
            };
            match *token {
                SyntaxKind::ExtendsKeyword => {
                    if seen_extends_clause {
                        return self.grammar_error_on_first_token(clause, &messages::EXTENDS_CLAUSE_ALREADY_SEEN, &[]);
                    }
                    if seen_implements_clause {
                        return self.grammar_error_on_first_token(
                            clause,
                            &messages::EXTENDS_CLAUSE_MUST_PRECEDE_IMPLEMENTS_CLAUSE,
                            &[],
                        );
                    }
                    if let Some(second) = types.get(1) {
                        return self.grammar_error_on_first_token(second, &messages::CLASSES_CAN_ONLY_EXTEND_A_SINGLE_CLASS, &[]);
                    }
                    seen_extends_clause = true;
                }
                SyntaxKind::ImplementsKeyword => {
                    if seen_implements_clause {
                        return self.grammar_error_on_first_token(clause, &messages::IMPLEMENTS_CLAUSE_ALREADY_SEEN, &[]);
                    }
                    seen_implements_clause = true;
                }
                other => panic!("Unexpected token {other:?}"),
            }
            self.check_grammar_heritage_clause(clause);
        }
        false
    }

    pub(crate) fn check_grammar_interface_declaration(&mut self, node: NodeId) -> bool {
        let ast = self.ast;
        let Some(clauses) = ast.heritage_clauses(node) else {
            return false;
        };
        let mut seen_extends_clause = false;
        for clause in clauses.iter() {
            let NodePayload::HeritageClause { token, .. } = &ast.node(clause).payload else {
                continue;
            };
            match *token {
                SyntaxKind::ExtendsKeyword => {
                    if seen_extends_clause {
                        return self.grammar_error_on_first_token(clause, &messages::EXTENDS_CLAUSE_ALREADY_SEEN, &[]);
                    }
                    seen_extends_clause = true;
                }
                SyntaxKind::ImplementsKeyword => {
                    return self.grammar_error_on_first_token(
                        clause,
                        &messages::INTERFACE_DECLARATION_CANNOT_HAVE_IMPLEMENTS_CLAUSE,
                        &[],
                    );
                }
                other => panic!("Unexpected token {other:?}"),
            }
            self.check_grammar_heritage_clause(clause);
        }
        false
    }

    fn check_grammar_heritage_clause(&mut self, clause: NodeId) -> bool {
        let ast = self.ast;
        let NodePayload::HeritageClause { token, types } = &ast.node(clause).payload else {
            return false;
        };
        if self.check_grammar_for_disallowed_trailing_comma(Some(types), &messages::TRAILING_COMMA_NOT_ALLOWED) {
            return true;
        }
        if types.is_empty() {
            let list_type = token.keyword_text().unwrap_or_default();
            return self.grammar_error_at_pos(clause, types.pos, 0, &messages::_0_LIST_CANNOT_BE_EMPTY, &[list_type]);
        }
        types.iter().any(|ty| self.check_grammar_expression_with_type_arguments(ty))
    }

    pub(crate) fn check_grammar_expression_with_type_arguments(&mut self, node: NodeId) -> bool {
        let ast = self.ast;
        if ast.kind(node) != SyntaxKind::ExpressionWithTypeArguments {
            return false;
        }
        let type_arguments = ast.type_arguments(node);
        if ast.expression(node).is_some_and(|e| ast.kind(e) == SyntaxKind::ImportKeyword) && type_arguments.is_some() {
            return self.grammar_error_on_node(node, &messages::THIS_USE_OF_IMPORT_IS_INVALID, &[]);
        }
        self.check_grammar_type_arguments(node, type_arguments)
    }

    // ========================================================================
    // Members
    // ========================================================================

    pub(crate) fn check_grammar_property(&mut self, node: NodeId) -> bool {
        let ast = self.ast;
        let Some(name) = ast.name(node) else {
            return false;
        };
        let Some(parent) = ast.parent(node) else {
            return false;
        };
        if let Some(expression) = ast.expression(name).filter(|_| ast.kind(name) == SyntaxKind::ComputedPropertyName) {
            if binary_operator(ast, expression) == Some(SyntaxKind::InKeyword) {
                if let Some(first) = ast.members(parent).and_then(|m| m.first()) {
                    return self.grammar_error_on_node(first, &messages::A_MAPPED_TYPE_MAY_NOT_DECLARE_PROPERTIES_OR_METHODS, &[]);
                }
            }
        }

        let initializer = ast.initializer(node);
        if is_class_like(ast, parent) {
            if ast.kind(name) == SyntaxKind::StringLiteral && ast.text(name) == "constructor" {
                return self.grammar_error_on_node(name, &messages::CLASSES_MAY_NOT_HAVE_A_FIELD_NAMED_CONSTRUCTOR, &[]);
            }
            if self.check_grammar_for_invalid_dynamic_name(
                name,
                &messages::A_COMPUTED_PROPERTY_NAME_IN_A_CLASS_PROPERTY_DECLARATION_MUST_HAVE_A_SIMPLE_LITERAL_TYPE_OR_A_UNIQUE_SYMBOL_TYPE,
            ) {
                return true;
            }
            let below_es2015 = self.language_version < tscheck_options::ScriptTarget::ES2015;
            if below_es2015 && ast.kind(name) == SyntaxKind::PrivateIdentifier {
                return self.grammar_error_on_node(
                    name,
                    &messages::PRIVATE_IDENTIFIERS_ARE_ONLY_AVAILABLE_WHEN_TARGETING_ECMASCRIPT_2015_AND_HIGHER,
                    &[],
                );
            }
            if is_auto_accessor_property(ast, node) {
                if below_es2015 {
                    return self.grammar_error_on_node(
                        name,
                        &messages::PROPERTIES_WITH_THE_ACCESSOR_MODIFIER_ARE_ONLY_AVAILABLE_WHEN_TARGETING_ECMASCRIPT_2015_AND_HIGHER,
                        &[],
                    );
                }
                if self.check_grammar_for_invalid_question_mark(
                    ast.postfix_token(node),
                    &messages::AN_ACCESSOR_PROPERTY_CANNOT_BE_DECLARED_OPTIONAL,
                ) {
                    return true;
                }
            }
        } else if matches!(ast.kind(parent), SyntaxKind::InterfaceDeclaration | SyntaxKind::TypeLiteral) {
            let in_interface = ast.kind(parent) == SyntaxKind::InterfaceDeclaration;
            let dynamic_name_message = if in_interface {
                &messages::A_COMPUTED_PROPERTY_NAME_IN_AN_INTERFACE_MUST_REFER_TO_AN_EXPRESSION_WHOSE_TYPE_IS_A_LITERAL_TYPE_OR_A_UNIQUE_SYMBOL_TYPE
            } else {
                &messages::A_COMPUTED_PROPERTY_NAME_IN_A_TYPE_LITERAL_MUST_REFER_TO_AN_EXPRESSION_WHOSE_TYPE_IS_A_LITERAL_TYPE_OR_A_UNIQUE_SYMBOL_TYPE
            };
            if self.check_grammar_for_invalid_dynamic_name(name, dynamic_name_message) {
                return true;
            }
            assert_eq!(
                ast.kind(node),
                SyntaxKind::PropertySignature,
                "type members cannot contain property declarations"
            );
            if let Some(initializer) = initializer {
                let message = if in_interface {
                    &messages::AN_INTERFACE_PROPERTY_CANNOT_HAVE_AN_INITIALIZER
                } else {
                    &messages::A_TYPE_LITERAL_PROPERTY_CANNOT_HAVE_AN_INITIALIZER
                };
                return self.grammar_error_on_node(initializer, message, &[]);
            }
        }

        if ast.flags(node).contains(NodeFlags::AMBIENT) {
            self.check_ambient_initializer(node);
        }

        if ast.kind(node) == SyntaxKind::PropertyDeclaration {
            if let Some(exclamation) = ast.exclamation_token(node) {
                let message = if initializer.is_some() {
                    Some(&messages::DECLARATIONS_WITH_INITIALIZERS_CANNOT_ALSO_HAVE_DEFINITE_ASSIGNMENT_ASSERTIONS)
                } else if ast.type_node(node).is_none() {
                    Some(&messages::DECLARATIONS_WITH_DEFINITE_ASSIGNMENT_ASSERTIONS_MUST_ALSO_HAVE_TYPE_ANNOTATIONS)
                } else if !is_class_like(ast, parent)
                    || ast.flags(node).contains(NodeFlags::AMBIENT)
                    || is_static(ast, node)
                    || has_syntactic_modifier(ast, node, ModifierFlags::ABSTRACT)
                {
                    Some(&messages::A_DEFINITE_ASSIGNMENT_ASSERTION_IS_NOT_PERMITTED_IN_THIS_CONTEXT)
                } else {
                    None
                };
                if let Some(message) = message {
                    return self.grammar_error_on_node(exclamation, message, &[]);
                }
            }
        }
        false
    }

    pub(crate) fn check_grammar_method(&mut self, node: NodeId) -> bool {
        let ast = self.ast;
        if self.check_grammar_function_like_declaration(node) {
            return true;
        }
        let Some(parent) = ast.parent(node) else {
            return false;
        };
        if ast.kind(node) == SyntaxKind::MethodDeclaration {
            if ast.kind(parent) == SyntaxKind::ObjectLiteralExpression {
                let only_async = ast
                    .modifiers(node)
                    .map_or(true, |m| m.len() == 1 && m.first().is_some_and(|f| ast.kind(f) == SyntaxKind::AsyncKeyword));
                if !only_async {
                    return self.grammar_error_on_first_token(node, &messages::MODIFIERS_CANNOT_APPEAR_HERE, &[]);
                }
                let postfix = ast.postfix_token(node);
                if self.check_grammar_for_invalid_question_mark(postfix, &messages::AN_OBJECT_MEMBER_CANNOT_BE_DECLARED_OPTIONAL)
                    || self.check_grammar_for_invalid_exclamation_token(
                        postfix,
                        &messages::A_DEFINITE_ASSIGNMENT_ASSERTION_IS_NOT_PERMITTED_IN_THIS_CONTEXT,
                    )
                {
                    return true;
                }
                if ast.body(node).is_none() {
                    let end = ast.range(node).end;
                    return self.grammar_error_at_pos(node, end.saturating_sub(1), 1, &messages::_0_EXPECTED, &["{"]);
                }
            }
            if self.check_grammar_for_generator(node) {
                return true;
            }
        }

        let Some(name) = ast.name(node) else {
            return false;
        };
        if is_class_like(ast, parent) {
            if self.language_version < tscheck_options::ScriptTarget::ES2015 && ast.kind(name) == SyntaxKind::PrivateIdentifier {
                return self.grammar_error_on_node(
                    name,
                    &messages::PRIVATE_IDENTIFIERS_ARE_ONLY_AVAILABLE_WHEN_TARGETING_ECMASCRIPT_2015_AND_HIGHER,
                    &[],
                );
            }
            // Only methods reach here in ambient classes: property names are
            // checked separately and accessors are rejected outright.
            if ast.flags(node).contains(NodeFlags::AMBIENT) {
                return self.check_grammar_for_invalid_dynamic_name(
                    name,
                    &messages::A_COMPUTED_PROPERTY_NAME_IN_AN_AMBIENT_CONTEXT_MUST_REFER_TO_AN_EXPRESSION_WHOSE_TYPE_IS_A_LITERAL_TYPE_OR_A_UNIQUE_SYMBOL_TYPE,
                );
            }
            if ast.kind(node) == SyntaxKind::MethodDeclaration && ast.body(node).is_none() {
                return self.check_grammar_for_invalid_dynamic_name(
                    name,
                    &messages::A_COMPUTED_PROPERTY_NAME_IN_A_METHOD_OVERLOAD_MUST_REFER_TO_AN_EXPRESSION_WHOSE_TYPE_IS_A_LITERAL_TYPE_OR_A_UNIQUE_SYMBOL_TYPE,
                );
            }
        } else if ast.kind(parent) == SyntaxKind::InterfaceDeclaration {
            return self.check_grammar_for_invalid_dynamic_name(
                name,
                &messages::A_COMPUTED_PROPERTY_NAME_IN_AN_INTERFACE_MUST_REFER_TO_AN_EXPRESSION_WHOSE_TYPE_IS_A_LITERAL_TYPE_OR_A_UNIQUE_SYMBOL_TYPE,
            );
        } else if ast.kind(parent) == SyntaxKind::TypeLiteral {
            return self.check_grammar_for_invalid_dynamic_name(
                name,
                &messages::A_COMPUTED_PROPERTY_NAME_IN_A_TYPE_LITERAL_MUST_REFER_TO_AN_EXPRESSION_WHOSE_TYPE_IS_A_LITERAL_TYPE_OR_A_UNIQUE_SYMBOL_TYPE,
            );
        }
        false
    }

    pub(crate) fn check_grammar_computed_property_name(&mut self, name: Option<NodeId>) -> bool {
        let ast = self.ast;
        let Some(name) = name.filter(|&n| ast.kind(n) == SyntaxKind::ComputedPropertyName) else {
            return false;
        };
        match ast.expression(name) {
            Some(expression) if binary_operator(ast, expression) == Some(SyntaxKind::CommaToken) => self.grammar_error_on_node(
                expression,
                &messages::A_COMMA_EXPRESSION_IS_NOT_ALLOWED_IN_A_COMPUTED_PROPERTY_NAME,
                &[],
            ),
            _ => false,
        }
    }

    pub(crate) fn check_grammar_for_invalid_question_mark(&mut self, postfix: Option<NodeId>, message: &DiagnosticMessage) -> bool {
        match postfix {
            Some(token) if self.ast.kind(token) == SyntaxKind::QuestionToken => self.grammar_error_on_node(token, message, &[]),
            _ => false,
        }
    }

    pub(crate) fn check_grammar_for_invalid_exclamation_token(&mut self, postfix: Option<NodeId>, message: &DiagnosticMessage) -> bool {
        match postfix {
            Some(token) if self.ast.kind(token) == SyntaxKind::ExclamationToken => {
                self.grammar_error_on_node(token, message, &[])
            }
            _ => false,
        }
    }

    fn check_grammar_for_invalid_dynamic_name(&mut self, name: NodeId, message: &DiagnosticMessage) -> bool {
        self.is_non_bindable_dynamic_name(name) && self.grammar_error_on_node(name, message, &[])
    }

    /// A dynamic name whose value cannot be known when members are bound.
    pub(crate) fn is_non_bindable_dynamic_name(&mut self, name: NodeId) -> bool {
        is_dynamic_name(self.ast, name) && !self.is_late_bindable_name(name)
    }

    /// A computed name over an entity name whose type is a literal or
    /// `unique symbol`.
    fn is_late_bindable_name(&mut self, name: NodeId) -> bool {
        let ast = self.ast;
        let expression = match &ast.node(name).payload {
            NodePayload::Wrapped { expression } if ast.kind(name) == SyntaxKind::ComputedPropertyName => *expression,
            NodePayload::ElementAccess {
                argument_expression, ..
            } => *argument_expression,
            _ => return false,
        };
        if !is_entity_name_expression(ast, expression) {
            return false;
        }
        let ty = self.get_type_of_expression(expression);
        self.types.get(ty).flags.intersects(TypeFlags::STRING_OR_NUMBER_LITERAL_OR_UNIQUE)
    }

    /// Ambient variables and properties take an initializer only when it
    /// is a literal and the declaration is constant without a type.
    pub(crate) fn check_ambient_initializer(&mut self, node: NodeId) -> bool {
        let ast = self.ast;
        assert!(
            matches!(
                ast.kind(node),
                SyntaxKind::VariableDeclaration | SyntaxKind::PropertyDeclaration | SyntaxKind::PropertySignature
            ),
            "Unexpected node kind {:?}",
            ast.kind(node)
        );
        let Some(initializer) = ast.initializer(node) else {
            return false;
        };
        let is_valid_initializer = is_initializer_string_or_number_literal(ast, initializer)
            || self.is_initializer_simple_literal_enum_reference(initializer)
            || matches!(ast.kind(initializer), SyntaxKind::TrueKeyword | SyntaxKind::FalseKeyword)
            || is_initializer_bigint_literal(ast, initializer);
        let is_const_or_readonly = is_declaration_readonly(ast, node)
            || (ast.kind(node) == SyntaxKind::VariableDeclaration
                && get_combined_node_flags(ast, node).intersects(NodeFlags::CONST));
        if is_const_or_readonly && ast.type_node(node).is_none() {
            if !is_valid_initializer {
                return self.grammar_error_on_node(
                    initializer,
                    &messages::A_CONST_INITIALIZER_IN_AN_AMBIENT_CONTEXT_MUST_BE_A_STRING_OR_NUMERIC_LITERAL_OR_LITERAL_ENUM_REFERENCE,
                    &[],
                );
            }
            false
        } else {
            self.grammar_error_on_node(initializer, &messages::INITIALIZERS_ARE_NOT_ALLOWED_IN_AMBIENT_CONTEXTS, &[])
        }
    }

    fn is_initializer_simple_literal_enum_reference(&mut self, expr: NodeId) -> bool {
        let ast = self.ast;
        let is_candidate = match &ast.node(expr).payload {
            NodePayload::PropertyAccess { .. } => true,
            NodePayload::ElementAccess {
                expression,
                argument_expression,
                ..
            } => {
                is_initializer_string_or_number_literal(ast, *argument_expression)
                    && is_entity_name_expression(ast, *expression)
            }
            _ => false,
        };
        if !is_candidate {
            return false;
        }
        let ty = self.get_type_of_expression(expr);
        self.types.get(ty).flags.intersects(TypeFlags::ENUM_LIKE)
    }

    // ========================================================================
    // Decorators and private names
    // ========================================================================

    /// Decorator expressions are limited to a dotted name, optionally
    /// called once, unless parenthesized.
    pub(crate) fn check_grammar_decorator(&mut self, decorator: NodeId) -> bool {
        let ast = self.ast;
        if self.has_parse_diagnostics(decorator) {
            return false;
        }
        let Some(expression) = ast.expression(decorator) else {
            return false;
        };
        if ast.kind(expression) == SyntaxKind::ParenthesizedExpression {
            return false;
        }

        let mut node = expression;
        let mut can_have_call_expression = true;
        let mut error_node = None;
        loop {
            match (ast.kind(node), &ast.node(node).payload) {
                (SyntaxKind::ExpressionWithTypeArguments, NodePayload::TypeReference { type_name, .. }) => {
                    node = *type_name;
                }
                (SyntaxKind::NonNullExpression, NodePayload::Wrapped { expression }) => {
                    node = *expression;
                }
                (
                    SyntaxKind::CallExpression,
                    NodePayload::Call {
                        expression,
                        question_dot_token,
                        ..
                    },
                ) => {
                    if !can_have_call_expression {
                        error_node = Some(node);
                    }
                    // `?.` appears earlier in the text than any other error.
                    if let Some(token) = question_dot_token {
                        error_node = Some(*token);
                    }
                    node = *expression;
                    can_have_call_expression = false;
                }
                (
                    SyntaxKind::PropertyAccessExpression,
                    NodePayload::PropertyAccess {
                        expression,
                        question_dot_token,
                        ..
                    },
                ) => {
                    if let Some(token) = question_dot_token {
                        error_node = Some(*token);
                    }
                    node = *expression;
                    can_have_call_expression = false;
                }
                (kind, _) => {
                    if kind != SyntaxKind::Identifier {
                        error_node = Some(node);
                    }
                    break;
                }
            }
        }

        let Some(error_node) = error_node else {
            return false;
        };
        let related = create_diagnostic_for_node(ast, error_node, &messages::INVALID_SYNTAX_IN_DECORATOR, &[]);
        self.error_with_related(
            expression,
            &messages::EXPRESSION_MUST_BE_ENCLOSED_IN_PARENTHESES_TO_BE_USED_AS_A_DECORATOR,
            &[],
            related,
        );
        true
    }

    /// Private names are only usable inside a class body. Outside a
    /// property access or the left of `in`, the name must be declared by
    /// an enclosing class.
    pub(crate) fn check_grammar_private_identifier_expression(&mut self, node: NodeId) -> bool {
        let ast = self.ast;
        if is_declaration_name(ast, node) {
            return false;
        }
        if get_containing_class(ast, node).is_none() {
            return self.grammar_error_on_node(node, &messages::PRIVATE_IDENTIFIERS_ARE_NOT_ALLOWED_OUTSIDE_CLASS_BODIES, &[]);
        }
        let Some(parent) = ast.parent(node) else {
            return false;
        };
        let is_access_name = matches!(
            &ast.node(parent).payload,
            NodePayload::PropertyAccess { name, .. } if *name == node
        );
        let is_in_operation = binary_operator(ast, parent) == Some(SyntaxKind::InKeyword);
        if is_access_name || is_in_operation || ast.kind(parent) == SyntaxKind::ForInStatement {
            return false;
        }
        if self.lookup_private_identifier_declaration(node).is_none() {
            return self.grammar_error_on_node(node, &messages::CANNOT_FIND_NAME_0, &[ast.text(node)]);
        }
        false
    }

    /// The member declared for a private name by the innermost class that
    /// declares it.
    pub(crate) fn lookup_private_identifier_declaration(&self, node: NodeId) -> Option<SymbolId> {
        let ast = self.ast;
        let text = ast.text(node);
        let mut class = get_containing_class(ast, node);
        while let Some(current) = class {
            if let Some(class_symbol) = ast.symbol(current) {
                let key = private_identifier_symbol_name(class_symbol, text);
                if let Some(name) = ast.interner().get(&key) {
                    let found = self
                        .binding
                        .members(class_symbol)
                        .and_then(|table| table.get(name))
                        .or_else(|| self.binding.exports(class_symbol).and_then(|table| table.get(name)));
                    if found.is_some() {
                        return found;
                    }
                }
            }
            class = get_containing_class(ast, current);
        }
        None
    }

    // ========================================================================
    // Type nodes
    // ========================================================================

    pub(crate) fn check_grammar_type_operator_node(&mut self, node: NodeId) -> bool {
        let ast = self.ast;
        let NodePayload::TypeOperator { operator, type_node } = &ast.node(node).payload else {
            return false;
        };
        let inner = *type_node;
        match *operator {
            SyntaxKind::UniqueKeyword => {
                if ast.kind(inner) != SyntaxKind::SymbolKeyword {
                    return self.grammar_error_on_node(inner, &messages::_0_EXPECTED, &["symbol"]);
                }
                let mut parent = ast.parent(node);
                while let Some(p) = parent.filter(|&p| ast.kind(p) == SyntaxKind::ParenthesizedType) {
                    parent = ast.parent(p);
                }
                let Some(parent) = parent else {
                    return self.grammar_error_on_node(node, &messages::UNIQUE_SYMBOL_TYPES_ARE_NOT_ALLOWED_HERE, &[]);
                };
                let parent_name = ast.name(parent).unwrap_or(parent);
                match ast.kind(parent) {
                    SyntaxKind::VariableDeclaration => {
                        if ast.kind(parent_name) != SyntaxKind::Identifier {
                            return self.grammar_error_on_node(
                                node,
                                &messages::UNIQUE_SYMBOL_TYPES_MAY_NOT_BE_USED_ON_A_VARIABLE_DECLARATION_WITH_A_BINDING_NAME,
                                &[],
                            );
                        }
                        let list = ast.parent(parent);
                        let in_variable_statement = list
                            .and_then(|l| ast.parent(l))
                            .is_some_and(|s| ast.kind(s) == SyntaxKind::VariableStatement);
                        if !in_variable_statement {
                            return self.grammar_error_on_node(
                                node,
                                &messages::UNIQUE_SYMBOL_TYPES_ARE_ONLY_ALLOWED_ON_VARIABLES_IN_A_VARIABLE_STATEMENT,
                                &[],
                            );
                        }
                        if !list.is_some_and(|l| ast.flags(l).contains(NodeFlags::CONST)) {
                            return self.grammar_error_on_node(
                                parent_name,
                                &messages::A_VARIABLE_WHOSE_TYPE_IS_A_UNIQUE_SYMBOL_TYPE_MUST_BE_CONST,
                                &[],
                            );
                        }
                    }
                    SyntaxKind::PropertyDeclaration => {
                        if !is_static(ast, parent) || !is_declaration_readonly(ast, parent) {
                            return self.grammar_error_on_node(
                                parent_name,
                                &messages::A_PROPERTY_OF_A_CLASS_WHOSE_TYPE_IS_A_UNIQUE_SYMBOL_TYPE_MUST_BE_BOTH_STATIC_AND_READONLY,
                                &[],
                            );
                        }
                    }
                    SyntaxKind::PropertySignature => {
                        if !has_syntactic_modifier(ast, parent, ModifierFlags::READONLY) {
                            return self.grammar_error_on_node(
                                parent_name,
                                &messages::A_PROPERTY_OF_AN_INTERFACE_OR_TYPE_LITERAL_WHOSE_TYPE_IS_A_UNIQUE_SYMBOL_TYPE_MUST_BE_READONLY,
                                &[],
                            );
                        }
                    }
                    _ => {
                        return self.grammar_error_on_node(node, &messages::UNIQUE_SYMBOL_TYPES_ARE_NOT_ALLOWED_HERE, &[]);
                    }
                }
            }
            SyntaxKind::ReadonlyKeyword => {
                if !matches!(ast.kind(inner), SyntaxKind::ArrayType | SyntaxKind::TupleType) {
                    return self.grammar_error_on_first_token(
                        node,
                        &messages::READONLY_TYPE_MODIFIER_IS_ONLY_PERMITTED_ON_ARRAY_AND_TUPLE_LITERAL_TYPES,
                        &[],
                    );
                }
            }
            _ => {}
        }
        false
    }

    pub(crate) fn check_grammar_mapped_type(&mut self, node: NodeId) -> bool {
        match self.ast.members(node).and_then(|m| m.first()) {
            Some(first) => self.grammar_error_on_node(first, &messages::A_MAPPED_TYPE_MAY_NOT_DECLARE_PROPERTIES_OR_METHODS, &[]),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::checker::{Checker, Program};
    use tscheck_ast::{AstBuilder, ClassLikeData, NodeFlags, NodeId, NodeList, SyntaxKind, VariableLikeData};
    use tscheck_diagnostics::messages;
    use tscheck_options::CompilerOptions;

    fn check(mut b: AstBuilder, statements: Vec<NodeId>) -> Vec<u32> {
        b.finish_file("a.ts", statements);
        let program = Program::new(b.build(), CompilerOptions::default());
        let mut checker = Checker::new(&program);
        checker.check_program();
        checker.diagnostics().diagnostics().iter().map(|d| d.code).collect()
    }

    fn heritage(b: &mut AstBuilder, token: SyntaxKind, name: &str) -> NodeId {
        let expression = b.identifier(name);
        let ty = b.expression_with_type_arguments(expression, vec![]);
        b.heritage_clause(token, vec![ty])
    }

    #[test]
    fn test_duplicate_extends_clause() {
        let mut b = AstBuilder::new();
        let base = b.class_declaration(None, "A", vec![]);
        let first = heritage(&mut b, SyntaxKind::ExtendsKeyword, "A");
        let again = heritage(&mut b, SyntaxKind::ExtendsKeyword, "A");
        let name = b.identifier("C");
        let class = b.class_like(
            SyntaxKind::ClassDeclaration,
            ClassLikeData {
                name: Some(name),
                heritage_clauses: Some(NodeList::new(vec![first, again])),
                ..ClassLikeData::default()
            },
        );
        assert!(check(b, vec![base, class]).contains(&messages::EXTENDS_CLAUSE_ALREADY_SEEN.code));
    }

    #[test]
    fn test_interface_cannot_implement() {
        let mut b = AstBuilder::new();
        let base = b.interface_declaration(None, "A", vec![]);
        let implements = heritage(&mut b, SyntaxKind::ImplementsKeyword, "A");
        let name = b.identifier("I");
        let interface = b.class_like(
            SyntaxKind::InterfaceDeclaration,
            ClassLikeData {
                name: Some(name),
                heritage_clauses: Some(NodeList::new(vec![implements])),
                ..ClassLikeData::default()
            },
        );
        assert!(check(b, vec![base, interface]).contains(&messages::INTERFACE_DECLARATION_CANNOT_HAVE_IMPLEMENTS_CLAUSE.code));
    }

    #[test]
    fn test_definite_assignment_needs_type() {
        let mut b = AstBuilder::new();
        let name = b.identifier("x");
        let bang = b.token(SyntaxKind::ExclamationToken);
        let property = b.variable_like(
            SyntaxKind::PropertyDeclaration,
            VariableLikeData {
                postfix_token: Some(bang),
                ..VariableLikeData::named(name)
            },
        );
        let class = b.class_declaration(None, "C", vec![property]);
        assert!(check(b, vec![class])
            .contains(&messages::DECLARATIONS_WITH_DEFINITE_ASSIGNMENT_ASSERTIONS_MUST_ALSO_HAVE_TYPE_ANNOTATIONS.code));
    }

    #[test]
    fn test_unique_symbol_requires_const() {
        let mut b = AstBuilder::new();
        let symbol = b.token(SyntaxKind::SymbolKeyword);
        let unique = b.type_operator(SyntaxKind::UniqueKeyword, symbol);
        let name = b.identifier("s");
        let declaration = b.variable_declaration(name, Some(unique), None);
        let statement = b.variable_statement(None, NodeFlags::LET, vec![declaration]);
        assert!(check(b, vec![statement]).contains(&messages::A_VARIABLE_WHOSE_TYPE_IS_A_UNIQUE_SYMBOL_TYPE_MUST_BE_CONST.code));
    }

    #[test]
    fn test_readonly_type_operator_needs_array_or_tuple() {
        let mut b = AstBuilder::new();
        let string = b.token(SyntaxKind::StringKeyword);
        let readonly = b.type_operator(SyntaxKind::ReadonlyKeyword, string);
        let alias = b.type_alias(None, "R", vec![], readonly);
        assert!(check(b, vec![alias])
            .contains(&messages::READONLY_TYPE_MODIFIER_IS_ONLY_PERMITTED_ON_ARRAY_AND_TUPLE_LITERAL_TYPES.code));
    }

    #[test]
    fn test_ambient_const_initializer_must_be_literal() {
        let mut b = AstBuilder::new();
        let name = b.identifier("x");
        let callee = b.identifier("f");
        let call = b.call(callee, vec![]);
        let declaration = b.variable_declaration(name, None, Some(call));
        let modifiers = b.modifiers(&[SyntaxKind::DeclareKeyword]);
        let statement = b.variable_statement(modifiers, NodeFlags::CONST, vec![declaration]);
        let codes = check(b, vec![statement]);
        assert!(codes.contains(
            &messages::A_CONST_INITIALIZER_IN_AN_AMBIENT_CONTEXT_MUST_BE_A_STRING_OR_NUMERIC_LITERAL_OR_LITERAL_ENUM_REFERENCE.code
        ));
    }

    #[test]
    fn test_ambient_const_literal_initializer_accepted() {
        let mut b = AstBuilder::new();
        let name = b.identifier("x");
        let one = b.numeric_literal("1");
        let minus_one = b.prefix_unary(SyntaxKind::MinusToken, one);
        let declaration = b.variable_declaration(name, None, Some(minus_one));
        let modifiers = b.modifiers(&[SyntaxKind::DeclareKeyword]);
        let statement = b.variable_statement(modifiers, NodeFlags::CONST, vec![declaration]);
        assert!(check(b, vec![statement]).is_empty());
    }
}

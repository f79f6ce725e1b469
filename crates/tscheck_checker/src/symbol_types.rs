//! Types of value symbols, resolved members of structured types, and
//! signatures.
//!
//! Member resolution is lazy: an object type gets its `ResolvedMembers`
//! the first time a property, signature or index info is asked for.
//! Members of instantiated types are instantiated symbols that keep a
//! link to the symbol they came from and the mapper to apply, so their
//! types are only computed when read.

use crate::checker::{Checker, ResolutionTarget};
use crate::links::VarianceFlags;
use crate::mapper::MapperId;
use crate::signature::{
    CompositeSignature, IndexInfo, Signature, SignatureFlags, SignatureId, SignatureKind, TypePredicate,
    TypePredicateKind,
};
use crate::types::*;
use indexmap::IndexMap;
use tracing::trace;
use tscheck_ast::types::{ModifierFlags, NodeId, SymbolFlags, SymbolId};
use tscheck_ast::utilities::*;
use tscheck_ast::{NodePayload, SyntaxKind};
use tscheck_binder::{internal_names, CheckFlags};
use tscheck_core::InternedString;
use tscheck_diagnostics::messages;

impl<'a> Checker<'a> {
    // ========================================================================
    // Types of symbols
    // ========================================================================

    /// The type of a value symbol, computed once.
    pub fn get_type_of_symbol(&mut self, symbol: SymbolId) -> TypeId {
        if let Some(t) = self.value_symbol_links.try_get(symbol).and_then(|l| l.resolved_type) {
            return t;
        }
        let check_flags = self.symbol(symbol).check_flags;
        let flags = self.symbol(symbol).flags;
        let t = if check_flags.contains(CheckFlags::INSTANTIATED) {
            self.get_type_of_instantiated_symbol(symbol)
        } else if check_flags.contains(CheckFlags::MAPPED) {
            self.get_type_of_mapped_symbol(symbol)
        } else if check_flags.contains(CheckFlags::SYNTHETIC_PROPERTY) {
            self.get_type_of_synthetic_property(symbol)
        } else if flags.intersects(SymbolFlags::PROTOTYPE) {
            match self.symbol(symbol).parent {
                Some(class) => self.get_declared_type_of_symbol(class),
                None => self.types.any_type,
            }
        } else if flags.intersects(SymbolFlags::VARIABLE | SymbolFlags::PROPERTY) {
            match self.get_type_of_variable_or_parameter_or_property(symbol) {
                Some(t) => t,
                // Re-entered while resolving; the outer request reports the cycle
                None => return self.types.any_type,
            }
        } else if flags.intersects(
            SymbolFlags::FUNCTION
                | SymbolFlags::METHOD
                | SymbolFlags::CLASS
                | SymbolFlags::ENUM
                | SymbolFlags::VALUE_MODULE,
        ) {
            self.types.create_anonymous_type(Some(symbol), None)
        } else if flags.intersects(SymbolFlags::ENUM_MEMBER) {
            self.get_declared_type_of_enum_member(symbol)
        } else if flags.intersects(SymbolFlags::ACCESSOR) {
            self.get_type_of_accessors(symbol)
        } else if flags.intersects(SymbolFlags::ALIAS) {
            match self.resolve_alias(symbol) {
                Some(target) if flags.intersects(SymbolFlags::VALUE) || target != symbol => {
                    let target = self.resolve_symbol(target);
                    if self.symbol(target).has_flags(SymbolFlags::VALUE) {
                        self.get_type_of_symbol(target)
                    } else {
                        self.types.error_type
                    }
                }
                _ => self.types.error_type,
            }
        } else {
            self.types.error_type
        };
        let links = self.value_symbol_links.get_or_insert(symbol);
        *links.resolved_type.get_or_insert(t)
    }

    fn get_type_of_instantiated_symbol(&mut self, symbol: SymbolId) -> TypeId {
        let (target, mapper) = match self.value_symbol_links.try_get(symbol) {
            Some(links) => (links.target, links.mapper),
            None => (None, None),
        };
        match (target, mapper) {
            (Some(target), Some(mapper)) => {
                let t = self.get_type_of_symbol(target);
                self.instantiate_type(t, mapper)
            }
            _ => self.types.error_type,
        }
    }

    /// A property of a mapped type: the template with the type parameter
    /// bound to the property's key.
    fn get_type_of_mapped_symbol(&mut self, symbol: SymbolId) -> TypeId {
        let (key_type, mapped_type) = match self.mapped_symbol_links.try_get(symbol) {
            Some(links) => (links.key_type, links.mapped_type),
            None => (None, None),
        };
        let (Some(key_type), Some(mapped_type)) = (key_type, mapped_type) else {
            return self.types.error_type;
        };
        let object = self.types.get(mapped_type).as_object();
        let object_mapper = object.mapper;
        let ObjectShape::Mapped(data) = &object.shape else {
            return self.types.error_type;
        };
        let (Some(type_parameter), Some(template)) = (data.type_parameter, data.template_type) else {
            return self.types.any_type;
        };
        let mapper = self.types.append_type_mapping(object_mapper, type_parameter, key_type);
        self.instantiate_type(template, mapper)
    }

    /// A property read from a union or intersection: the union (or
    /// intersection) of the property's type in each constituent.
    fn get_type_of_synthetic_property(&mut self, symbol: SymbolId) -> TypeId {
        let (parent, constituents) = match self.deferred_symbol_links.try_get(symbol) {
            Some(links) => (links.parent, links.constituents.clone()),
            None => (None, Vec::new()),
        };
        let name = self.symbol(symbol).name;
        let mut types = Vec::with_capacity(constituents.len());
        for constituent in constituents {
            if let Some(property) = self.get_property_of_type(constituent, name) {
                types.push(self.get_type_of_symbol(property));
            }
        }
        let is_union = parent.is_some_and(|p| self.types.is_union(p));
        if is_union {
            self.types.get_union_type(self.ast, self.binding, &types)
        } else {
            self.types.get_intersection_type(self.ast, self.binding, &types)
        }
    }

    /// `None` when the symbol is already being resolved.
    fn get_type_of_variable_or_parameter_or_property(&mut self, symbol: SymbolId) -> Option<TypeId> {
        let ast = self.ast;
        let Some(declaration) = self.symbol(symbol).value_declaration else {
            return Some(self.types.any_type);
        };
        if !self.push_type_resolution(ResolutionTarget::Type(symbol)) {
            return None;
        }
        let t = match ast.kind(declaration) {
            SyntaxKind::ExportAssignment => match ast.expression(declaration) {
                Some(expression) => {
                    let t = self.get_type_of_expression(expression);
                    self.get_widened_literal_type(t)
                }
                None => self.types.any_type,
            },
            SyntaxKind::EnumMember => self.get_declared_type_of_enum_member(symbol),
            _ => self.get_widened_type_for_variable_like_declaration(declaration),
        };
        if !self.pop_type_resolution() {
            return Some(self.report_circularity_error(symbol, declaration));
        }
        Some(t)
    }

    fn report_circularity_error(&mut self, symbol: SymbolId, declaration: NodeId) -> TypeId {
        if self.ast.type_node(declaration).is_some() {
            let name = self.symbol_name(symbol);
            self.error(
                declaration,
                &messages::_0_IS_REFERENCED_DIRECTLY_OR_INDIRECTLY_IN_ITS_OWN_TYPE_ANNOTATION,
                &[name],
            );
            return self.types.error_type;
        }
        self.types.any_type
    }

    fn get_widened_type_for_variable_like_declaration(&mut self, declaration: NodeId) -> TypeId {
        let ast = self.ast;
        if ast.kind(declaration) == SyntaxKind::VariableDeclaration {
            let statement = ast.parent(declaration).and_then(|list| ast.parent(list));
            match statement.map(|s| ast.kind(s)) {
                Some(SyntaxKind::ForInStatement) => return self.types.string_type,
                Some(SyntaxKind::CatchClause) if ast.type_node(declaration).is_none() => {
                    return self.types.any_type;
                }
                _ => {}
            }
            if ast.parent(declaration).is_some_and(|p| ast.kind(p) == SyntaxKind::CatchClause)
                && ast.type_node(declaration).is_none()
            {
                return self.types.any_type;
            }
        }
        if let Some(type_node) = ast.type_node(declaration) {
            return self.get_type_from_type_node(type_node);
        }
        if ast.kind(declaration) == SyntaxKind::Parameter && ast.dot_dot_dot_token(declaration).is_some() {
            return self.create_array_type(self.types.any_type);
        }
        if ast.kind(declaration) == SyntaxKind::ShorthandPropertyAssignment {
            let value = ast
                .name(declaration)
                .and_then(|name| self.get_resolved_symbol(name))
                .map(|s| self.resolve_symbol(s));
            return match value {
                Some(value) => {
                    let t = self.get_type_of_symbol(value);
                    self.get_widened_literal_type(t)
                }
                None => self.types.any_type,
            };
        }
        let Some(initializer) = ast.initializer(declaration) else {
            return self.types.any_type;
        };
        let t = self.get_type_of_expression(initializer);
        let keeps_literal = is_var_const(ast, declaration)
            || (matches!(
                ast.kind(declaration),
                SyntaxKind::PropertyDeclaration | SyntaxKind::PropertySignature
            ) && has_syntactic_modifier(ast, declaration, ModifierFlags::READONLY));
        if keeps_literal {
            t
        } else {
            self.get_widened_literal_type(t)
        }
    }

    /// The getter's return annotation, else the setter's parameter
    /// annotation, else the getter's inferred return type.
    fn get_type_of_accessors(&mut self, symbol: SymbolId) -> TypeId {
        let ast = self.ast;
        let declarations = self.symbol(symbol).declarations.clone();
        let getter = declarations.iter().copied().find(|&d| ast.kind(d) == SyntaxKind::GetAccessor);
        let setter = declarations.iter().copied().find(|&d| ast.kind(d) == SyntaxKind::SetAccessor);
        if let Some(type_node) = getter.and_then(|g| ast.type_node(g)) {
            return self.get_type_from_type_node(type_node);
        }
        let setter_annotation = setter
            .and_then(|s| ast.parameters(s).and_then(|params| params.first()))
            .and_then(|p| ast.type_node(p));
        if let Some(type_node) = setter_annotation {
            return self.get_type_from_type_node(type_node);
        }
        match getter {
            Some(getter) => self.get_return_type_from_body(getter),
            None => self.types.any_type,
        }
    }

    /// The type writes to `symbol` must be assignable to. Differs from
    /// the read type only for accessors with a typed setter.
    pub fn get_write_type_of_symbol(&mut self, symbol: SymbolId) -> TypeId {
        if !self.symbol(symbol).has_flags(SymbolFlags::SET_ACCESSOR) {
            return self.get_type_of_symbol(symbol);
        }
        if let Some(t) = self.value_symbol_links.try_get(symbol).and_then(|l| l.write_type) {
            return t;
        }
        let ast = self.ast;
        let setter_annotation = self
            .symbol(symbol)
            .declarations
            .iter()
            .copied()
            .find(|&d| ast.kind(d) == SyntaxKind::SetAccessor)
            .and_then(|s| ast.parameters(s).and_then(|params| params.first()))
            .and_then(|p| ast.type_node(p));
        let t = match setter_annotation {
            Some(type_node) => self.get_type_from_type_node(type_node),
            None => self.get_type_of_symbol(symbol),
        };
        self.value_symbol_links.get_or_insert(symbol).write_type = Some(t);
        t
    }

    // ========================================================================
    // Expressions
    // ========================================================================

    /// The type of an initializer or other expression, without
    /// contextual typing or call resolution beyond declared signatures.
    pub fn get_type_of_expression(&mut self, node: NodeId) -> TypeId {
        let ast = self.ast;
        let node = skip_parentheses(ast, node);
        match ast.kind(node) {
            SyntaxKind::StringLiteral | SyntaxKind::NoSubstitutionTemplateLiteral => {
                self.types.get_string_literal_type(ast.text(node))
            }
            SyntaxKind::NumericLiteral => {
                let value = crate::evaluator::parse_numeric_literal(ast.text(node));
                self.types.get_number_literal_type(value)
            }
            SyntaxKind::BigIntLiteral => self.types.get_bigint_literal_type(PseudoBigInt::parse(ast.text(node))),
            SyntaxKind::TrueKeyword => self.types.true_type,
            SyntaxKind::FalseKeyword => self.types.false_type,
            SyntaxKind::NullKeyword => self.types.null_type,
            SyntaxKind::TemplateExpression | SyntaxKind::TypeOfExpression => self.types.string_type,
            SyntaxKind::VoidExpression => self.types.undefined_type,
            SyntaxKind::DeleteExpression => self.types.boolean_type,
            SyntaxKind::PostfixUnaryExpression => self.types.number_type,
            SyntaxKind::PrefixUnaryExpression => self.get_type_of_prefix_unary_expression(node),
            SyntaxKind::Identifier => {
                if ast.text(node) == "undefined" {
                    return self.types.undefined_type;
                }
                match self.get_resolved_symbol(node) {
                    Some(symbol) => {
                        let symbol = self.resolve_symbol(symbol);
                        self.get_type_of_symbol(symbol)
                    }
                    None => self.types.error_type,
                }
            }
            SyntaxKind::PropertyAccessExpression => {
                let NodePayload::PropertyAccess { expression, name, .. } = &ast.node(node).payload else {
                    return self.types.error_type;
                };
                let object = self.get_type_of_expression(*expression);
                let name = ast.interner().intern(ast.text(*name));
                match self.get_property_of_type(object, name) {
                    Some(property) => self.get_type_of_symbol(property),
                    None => self.types.any_type,
                }
            }
            SyntaxKind::TypeAssertionExpression | SyntaxKind::AsExpression | SyntaxKind::SatisfiesExpression => {
                let NodePayload::TypeAssertion { expression, type_node } = &ast.node(node).payload else {
                    return self.types.error_type;
                };
                if ast.kind(node) == SyntaxKind::SatisfiesExpression || is_const_type_reference(ast, *type_node) {
                    self.get_type_of_expression(*expression)
                } else {
                    self.get_type_from_type_node(*type_node)
                }
            }
            SyntaxKind::NonNullExpression | SyntaxKind::AwaitExpression => match ast.expression(node) {
                Some(expression) => self.get_type_of_expression(expression),
                None => self.types.error_type,
            },
            SyntaxKind::FunctionExpression
            | SyntaxKind::ArrowFunction
            | SyntaxKind::ClassExpression
            | SyntaxKind::ObjectLiteralExpression => self.types.create_anonymous_type(ast.symbol(node), Some(node)),
            SyntaxKind::ArrayLiteralExpression => {
                let elements: Vec<NodeId> = ast.elements(node).map(|list| list.iter().collect()).unwrap_or_default();
                let mut element_types = Vec::with_capacity(elements.len());
                for element in elements {
                    let t = self.get_type_of_expression(element);
                    element_types.push(self.get_widened_literal_type(t));
                }
                let element_type = if element_types.is_empty() {
                    self.types.never_type
                } else {
                    self.types.get_union_type(ast, self.binding, &element_types)
                };
                self.create_array_type(element_type)
            }
            SyntaxKind::ConditionalExpression => {
                let NodePayload::Conditional {
                    when_true, when_false, ..
                } = &ast.node(node).payload
                else {
                    return self.types.error_type;
                };
                let branches = [self.get_type_of_expression(*when_true), self.get_type_of_expression(*when_false)];
                self.types.get_union_type(ast, self.binding, &branches)
            }
            SyntaxKind::BinaryExpression => self.get_type_of_binary_expression(node),
            SyntaxKind::CallExpression | SyntaxKind::NewExpression => {
                let Some(callee) = ast.expression(node) else {
                    return self.types.any_type;
                };
                let callee_type = self.get_type_of_expression(callee);
                let kind = if ast.kind(node) == SyntaxKind::NewExpression {
                    SignatureKind::Construct
                } else {
                    SignatureKind::Call
                };
                match self.get_signatures_of_type(callee_type, kind).first() {
                    Some(&signature) => self.get_return_type_of_signature(signature),
                    None => self.types.any_type,
                }
            }
            _ => self.types.any_type,
        }
    }

    fn get_type_of_prefix_unary_expression(&mut self, node: NodeId) -> TypeId {
        let ast = self.ast;
        let NodePayload::Unary { operator, operand } = &ast.node(node).payload else {
            return self.types.error_type;
        };
        match operator {
            SyntaxKind::MinusToken if ast.kind(*operand) == SyntaxKind::NumericLiteral => {
                let value = crate::evaluator::parse_numeric_literal(ast.text(*operand));
                self.types.get_number_literal_type(-value)
            }
            SyntaxKind::MinusToken if ast.kind(*operand) == SyntaxKind::BigIntLiteral => {
                let value = PseudoBigInt::parse(ast.text(*operand));
                self.types.get_bigint_literal_type(PseudoBigInt::new(true, value.base10_value))
            }
            SyntaxKind::ExclamationToken => self.types.boolean_type,
            _ => self.types.number_type,
        }
    }

    fn get_type_of_binary_expression(&mut self, node: NodeId) -> TypeId {
        let ast = self.ast;
        let NodePayload::Binary { left, right, .. } = &ast.node(node).payload else {
            return self.types.error_type;
        };
        let (left, right) = (*left, *right);
        let Some(operator) = binary_operator(ast, node) else {
            return self.types.error_type;
        };
        match operator {
            SyntaxKind::EqualsToken | SyntaxKind::CommaToken => self.get_type_of_expression(right),
            SyntaxKind::LessThanToken
            | SyntaxKind::GreaterThanToken
            | SyntaxKind::LessThanEqualsToken
            | SyntaxKind::GreaterThanEqualsToken
            | SyntaxKind::EqualsEqualsToken
            | SyntaxKind::ExclamationEqualsToken
            | SyntaxKind::EqualsEqualsEqualsToken
            | SyntaxKind::ExclamationEqualsEqualsToken
            | SyntaxKind::InstanceOfKeyword
            | SyntaxKind::InKeyword => self.types.boolean_type,
            SyntaxKind::AmpersandAmpersandToken | SyntaxKind::BarBarToken | SyntaxKind::QuestionQuestionToken => {
                let operands = [self.get_type_of_expression(left), self.get_type_of_expression(right)];
                self.types.get_union_type(ast, self.binding, &operands)
            }
            SyntaxKind::PlusToken | SyntaxKind::PlusEqualsToken => {
                let left_type = self.get_type_of_expression(left);
                let right_type = self.get_type_of_expression(right);
                let left_flags = self.types.get(left_type).flags;
                let right_flags = self.types.get(right_type).flags;
                if left_flags.intersects(TypeFlags::STRING_LIKE) || right_flags.intersects(TypeFlags::STRING_LIKE) {
                    self.types.string_type
                } else if left_flags.intersects(TypeFlags::BIG_INT_LIKE) && right_flags.intersects(TypeFlags::BIG_INT_LIKE)
                {
                    self.types.bigint_type
                } else if left_flags.intersects(TypeFlags::NUMBER_LIKE) && right_flags.intersects(TypeFlags::NUMBER_LIKE) {
                    self.types.number_type
                } else {
                    self.types.any_type
                }
            }
            _ => self.types.number_type,
        }
    }

    /// Literal types widen to their primitive; enum members to their enum.
    pub fn get_widened_literal_type(&mut self, t: TypeId) -> TypeId {
        let ty = self.types.get(t);
        let flags = ty.flags;
        if flags.contains(TypeFlags::ENUM_LITERAL) {
            let parent = ty.symbol.and_then(|member| self.symbol(member).parent);
            return match parent {
                Some(enum_symbol) => self.get_declared_type_of_symbol(enum_symbol),
                None => t,
            };
        }
        if flags.intersects(TypeFlags::STRING_LITERAL) {
            return self.types.string_type;
        }
        if flags.intersects(TypeFlags::NUMBER_LITERAL) {
            return self.types.number_type;
        }
        if flags.intersects(TypeFlags::BIG_INT_LITERAL) {
            return self.types.bigint_type;
        }
        if flags.intersects(TypeFlags::BOOLEAN_LITERAL) {
            return self.types.boolean_type;
        }
        if flags.intersects(TypeFlags::UNION) && t != self.types.boolean_type {
            let members = self.types.types(t).to_vec();
            let widened: Vec<TypeId> = members.into_iter().map(|m| self.get_widened_literal_type(m)).collect();
            return self.types.get_union_type(self.ast, self.binding, &widened);
        }
        t
    }

    /// `T[]`, the one-element rest tuple.
    pub(crate) fn create_array_type(&mut self, element_type: TypeId) -> TypeId {
        let info = TupleElementInfo {
            flags: ElementFlags::REST,
            labeled_declaration: None,
        };
        self.types.create_tuple_type(vec![element_type], vec![info], false)
    }

    // ========================================================================
    // Structured members
    // ========================================================================

    /// Make sure `t` has resolved members. Only object types have them.
    pub(crate) fn resolve_structured_type_members(&mut self, t: TypeId) {
        let ty = self.types.get(t);
        if !ty.is_object() || ty.as_object().members.is_some() {
            return;
        }
        let members = self.resolve_object_type_members(t);
        trace!(
            type_id = t.index(),
            properties = members.properties.len(),
            "resolved structured type members"
        );
        // A member may have resolved `t` while it was being computed
        if self.types.get(t).as_object().members.is_none() {
            self.types.set_structured_members(t, members);
        }
    }

    fn resolve_object_type_members(&mut self, t: TypeId) -> ResolvedMembers {
        let object = self.types.get(t).as_object().clone();
        match &object.shape {
            ObjectShape::Interface(_) => self.resolve_class_or_interface_members(t),
            ObjectShape::Tuple(data) => {
                let arguments = data.type_parameters.clone();
                self.resolve_tuple_members(data, &arguments)
            }
            ObjectShape::Reference(reference) => {
                let target = reference.target;
                let arguments = self.get_type_arguments(t);
                match &self.types.get(target).as_object().shape {
                    ObjectShape::Tuple(data) => {
                        let data = data.clone();
                        self.resolve_tuple_members(&data, &arguments)
                    }
                    ObjectShape::Interface(data) => {
                        let mut sources = data.type_parameters.clone();
                        let mut targets = arguments;
                        targets.resize(sources.len(), self.types.unknown_type);
                        if let Some(this_type) = data.this_type {
                            sources.push(this_type);
                            targets.push(t);
                        }
                        self.resolve_structured_type_members(target);
                        let declared = self.structured_members(target);
                        let mapper = self.types.new_type_mapper(sources, Some(targets));
                        self.instantiate_members(&declared, mapper)
                    }
                    _ => ResolvedMembers::default(),
                }
            }
            ObjectShape::Anonymous { .. } | ObjectShape::Mapped(_) if object.target.is_some() => {
                let (Some(target), Some(mapper)) = (object.target, object.mapper) else {
                    return ResolvedMembers::default();
                };
                if let ObjectShape::Mapped(data) = &object.shape {
                    return self.resolve_mapped_type_members(t, data);
                }
                self.resolve_structured_type_members(target);
                let declared = self.structured_members(target);
                self.instantiate_members(&declared, mapper)
            }
            ObjectShape::Anonymous { declaration } => self.resolve_anonymous_type_members(t, *declaration),
            ObjectShape::Mapped(data) => self.resolve_mapped_type_members(t, data),
            _ => ResolvedMembers::default(),
        }
    }

    fn structured_members(&self, t: TypeId) -> ResolvedMembers {
        self.types.get(t).as_object().members.clone().unwrap_or_default()
    }

    /// Own members of a class instance type or interface, then the
    /// members of its base types that it does not redeclare.
    fn resolve_class_or_interface_members(&mut self, t: TypeId) -> ResolvedMembers {
        let Some(symbol) = self.types.get(t).symbol else {
            return ResolvedMembers::default();
        };
        let mut members = self.members_of_symbol_table(symbol, false);
        for base in self.get_base_types(t) {
            self.resolve_structured_type_members_of_any(base);
            for property in self.get_properties_of_type(base) {
                let name = self.symbol(property).name;
                members.properties.entry(name).or_insert(property);
            }
            if members.call_signatures.is_empty() {
                members.call_signatures = self.get_signatures_of_type(base, SignatureKind::Call);
            }
            if members.construct_signatures.is_empty() && self.types.get(t).object_flags.contains(ObjectFlags::INTERFACE)
            {
                members.construct_signatures = self.get_signatures_of_type(base, SignatureKind::Construct);
            }
            for info in self.get_index_infos_of_type(base) {
                if !members.index_infos.iter().any(|own| own.key_type == info.key_type) {
                    members.index_infos.push(info);
                }
            }
        }
        members
    }

    fn resolve_structured_type_members_of_any(&mut self, t: TypeId) {
        if self.types.get(t).is_object() {
            self.resolve_structured_type_members(t);
        }
    }

    /// Properties, signatures and index infos declared in `symbol`'s
    /// members table, or its exports for the static side of a class.
    fn members_of_symbol_table(&mut self, symbol: SymbolId, statics: bool) -> ResolvedMembers {
        let table = if statics {
            self.symbol(symbol).exports.clone()
        } else {
            self.symbol(symbol).members.clone()
        };
        let mut members = ResolvedMembers::default();
        let Some(table) = table else {
            return members;
        };
        let ast = self.ast;
        let interner = ast.interner();
        for (name, member) in table.iter() {
            let flags = self.symbol(member).flags;
            if flags.intersects(SymbolFlags::PROPERTY | SymbolFlags::METHOD | SymbolFlags::ACCESSOR) {
                members.properties.insert(name, member);
                continue;
            }
            if !flags.intersects(SymbolFlags::SIGNATURE) {
                continue;
            }
            let declarations = self.symbol(member).declarations.clone();
            match interner.resolve(name) {
                internal_names::CALL => {
                    for declaration in declarations {
                        members.call_signatures.push(self.get_signature_from_declaration(declaration));
                    }
                }
                internal_names::NEW => {
                    for declaration in declarations {
                        members.construct_signatures.push(self.get_signature_from_declaration(declaration));
                    }
                }
                internal_names::INDEX => {
                    for declaration in declarations {
                        if let Some(info) = self.get_index_info_of_index_signature(declaration) {
                            members.index_infos.push(info);
                        }
                    }
                }
                _ => {}
            }
        }
        members
    }

    /// Members of a type literal, object literal, function, class
    /// constructor, enum or namespace object.
    fn resolve_anonymous_type_members(&mut self, t: TypeId, declaration: Option<NodeId>) -> ResolvedMembers {
        let ast = self.ast;
        let Some(symbol) = self.types.get(t).symbol else {
            return ResolvedMembers::default();
        };
        let flags = self.symbol(symbol).flags;
        if flags.intersects(SymbolFlags::TYPE_LITERAL | SymbolFlags::OBJECT_LITERAL) {
            return self.members_of_symbol_table(symbol, false);
        }
        let mut members = ResolvedMembers::default();
        if flags.intersects(SymbolFlags::ENUM | SymbolFlags::VALUE_MODULE | SymbolFlags::CLASS | SymbolFlags::FUNCTION) {
            let exports = if flags.intersects(SymbolFlags::VALUE_MODULE) && !flags.intersects(SymbolFlags::CLASS) {
                self.get_exports_of_module(symbol)
            } else {
                self.symbol(symbol).exports.clone().unwrap_or_default()
            };
            for (name, export) in exports.iter() {
                if self.symbol_has_meaning(export, SymbolFlags::VALUE) {
                    members.properties.insert(name, export);
                }
            }
        }
        if flags.intersects(SymbolFlags::FUNCTION | SymbolFlags::METHOD) {
            members.call_signatures = self.get_signatures_of_symbol(symbol);
        }
        if flags.intersects(SymbolFlags::CLASS) {
            members.construct_signatures = self.get_construct_signatures_of_class(symbol);
            let prototype = ast.interner().intern(internal_names::PROTOTYPE);
            let prototype_symbol = self.create_transient_symbol(
                prototype,
                SymbolFlags::PROPERTY | SymbolFlags::PROTOTYPE,
                CheckFlags::READONLY,
            );
            self.transient_symbol_mut(prototype_symbol).parent = Some(symbol);
            members.properties.insert(prototype, prototype_symbol);
        }
        if members.call_signatures.is_empty() {
            if let Some(declaration) = declaration.filter(|&d| is_function_like(ast, d)) {
                members.call_signatures.push(self.get_signature_from_declaration(declaration));
            }
        }
        members
    }

    /// Signatures of a function or method symbol. Overloads hide the
    /// implementation.
    fn get_signatures_of_symbol(&mut self, symbol: SymbolId) -> Vec<SignatureId> {
        let ast = self.ast;
        let declarations: Vec<NodeId> = self
            .symbol(symbol)
            .declarations
            .iter()
            .copied()
            .filter(|&d| is_function_like(ast, d))
            .collect();
        let has_overloads = declarations.iter().any(|&d| ast.body(d).is_none());
        declarations
            .into_iter()
            .filter(|&d| !has_overloads || ast.body(d).is_none())
            .map(|d| self.get_signature_from_declaration(d))
            .collect()
    }

    fn get_construct_signatures_of_class(&mut self, symbol: SymbolId) -> Vec<SignatureId> {
        let ast = self.ast;
        let constructor = ast.interner().intern(internal_names::CONSTRUCTOR);
        let declarations = self
            .symbol(symbol)
            .members
            .as_ref()
            .and_then(|members| members.get(constructor))
            .map(|c| self.symbol(c).declarations.clone())
            .unwrap_or_default();
        if !declarations.is_empty() {
            let has_overloads = declarations.iter().any(|&d| ast.body(d).is_none());
            return declarations
                .into_iter()
                .filter(|&d| !has_overloads || ast.body(d).is_none())
                .map(|d| self.get_signature_from_declaration(d))
                .collect();
        }
        // Implicit constructor taking no arguments
        let declared = self.get_declared_type_of_symbol(symbol);
        let type_parameters = match &self.types.get(declared).kind {
            TypeKind::Object(ObjectData {
                shape: ObjectShape::Interface(data),
                ..
            }) => data.local_type_parameters.clone(),
            _ => Vec::new(),
        };
        let mut flags = SignatureFlags::CONSTRUCT;
        let class_declaration = self.symbol(symbol).value_declaration;
        if class_declaration.is_some_and(|d| has_syntactic_modifier(ast, d, ModifierFlags::ABSTRACT)) {
            flags |= SignatureFlags::ABSTRACT;
        }
        let mut signature = Signature::new(flags, None);
        signature.type_parameters = type_parameters;
        signature.resolved_return_type = Some(declared);
        vec![self.types.create_signature(signature)]
    }

    fn resolve_tuple_members(&mut self, data: &TupleData, arguments: &[TypeId]) -> ResolvedMembers {
        let ast = self.ast;
        let mut members = ResolvedMembers::default();
        for (i, info) in data.element_infos.iter().enumerate().take(data.fixed_length) {
            let name = ast.interner().intern(&i.to_string());
            let mut flags = SymbolFlags::PROPERTY;
            if info.flags.contains(ElementFlags::OPTIONAL) {
                flags |= SymbolFlags::OPTIONAL;
            }
            let check_flags = if data.readonly { CheckFlags::READONLY } else { CheckFlags::NONE };
            let property = self.create_transient_symbol(name, flags, check_flags);
            if let Some(declaration) = info.labeled_declaration {
                self.transient_symbol_mut(property).declarations.push(declaration);
            }
            let element_type = arguments.get(i).copied().unwrap_or(self.types.unknown_type);
            self.value_symbol_links.get_or_insert(property).resolved_type = Some(element_type);
            members.properties.insert(name, property);
        }
        let length_name = ast.interner().intern("length");
        let length_type = if data.combined_flags.intersects(ElementFlags::VARIABLE) {
            self.types.number_type
        } else if data.min_length == data.element_infos.len() {
            self.types.get_number_literal_type(data.element_infos.len() as f64)
        } else {
            let lengths: Vec<TypeId> = (data.min_length..=data.element_infos.len())
                .map(|n| self.types.get_number_literal_type(n as f64))
                .collect();
            self.types.get_union_type(ast, self.binding, &lengths)
        };
        let check_flags = if data.readonly { CheckFlags::READONLY } else { CheckFlags::NONE };
        let length = self.create_transient_symbol(length_name, SymbolFlags::PROPERTY, check_flags);
        self.value_symbol_links.get_or_insert(length).resolved_type = Some(length_type);
        members.properties.insert(length_name, length);

        let element_types: Vec<TypeId> = arguments.iter().copied().take(data.element_infos.len()).collect();
        if !element_types.is_empty() {
            let value_type = self.types.get_union_type(ast, self.binding, &element_types);
            members.index_infos.push(IndexInfo {
                key_type: self.types.number_type,
                value_type,
                is_readonly: data.readonly,
                declaration: None,
            });
        }
        members
    }

    /// One property per literal key of the constraint, or an index info
    /// for `string` and `number` keys. Generic constraints give no members.
    fn resolve_mapped_type_members(&mut self, t: TypeId, data: &MappedData) -> ResolvedMembers {
        let ast = self.ast;
        let mut members = ResolvedMembers::default();
        let (Some(constraint), Some(type_parameter)) = (data.constraint_type, data.type_parameter) else {
            return members;
        };
        if self.types.is_generic_type(constraint) {
            return members;
        }
        let (readonly_token, question_token) = match &ast.node(data.declaration).payload {
            NodePayload::MappedType {
                readonly_token,
                question_token,
                ..
            } => (*readonly_token, *question_token),
            _ => (None, None),
        };
        let removes = |token: Option<NodeId>| token.is_some_and(|n| ast.kind(n) == SyntaxKind::MinusToken);
        let object_mapper = self.types.get(t).mapper();
        let keys = self.types.distributed(constraint).to_vec();
        for key in keys {
            let name = match &self.types.get(key).kind {
                TypeKind::Literal(LiteralValue::String(s)) => s.clone(),
                TypeKind::Literal(LiteralValue::Number(n)) => crate::type_nodes::number_to_property_name(*n),
                TypeKind::UniqueESSymbol { escaped_name } => escaped_name.clone(),
                _ => {
                    let key_flags = self.types.get(key).flags;
                    if key_flags.intersects(TypeFlags::STRING | TypeFlags::NUMBER | TypeFlags::ANY) {
                        let key_type = if key_flags.intersects(TypeFlags::ANY) {
                            self.types.string_type
                        } else {
                            key
                        };
                        let mapper = self.types.append_type_mapping(object_mapper, type_parameter, key);
                        let value_type = match data.template_type {
                            Some(template) => self.instantiate_type(template, mapper),
                            None => self.types.any_type,
                        };
                        members.index_infos.push(IndexInfo {
                            key_type,
                            value_type,
                            is_readonly: readonly_token.is_some() && !removes(readonly_token),
                            declaration: None,
                        });
                    }
                    continue;
                }
            };
            let interned = ast.interner().intern(&name);
            let modifiers_property = data
                .modifiers_type
                .and_then(|modifiers| self.get_property_of_type(modifiers, interned));
            let inherits_optional = modifiers_property.is_some_and(|p| self.symbol(p).has_flags(SymbolFlags::OPTIONAL));
            let is_optional = match question_token {
                Some(_) => !removes(question_token),
                None => inherits_optional,
            };
            let inherits_readonly =
                modifiers_property.is_some_and(|p| self.symbol(p).check_flags.contains(CheckFlags::READONLY));
            let is_readonly = match readonly_token {
                Some(_) => !removes(readonly_token),
                None => inherits_readonly,
            };
            let mut flags = SymbolFlags::PROPERTY;
            if is_optional {
                flags |= SymbolFlags::OPTIONAL;
            }
            let mut check_flags = CheckFlags::MAPPED;
            if is_readonly {
                check_flags |= CheckFlags::READONLY;
            }
            let property = self.create_transient_symbol(interned, flags, check_flags);
            if let Some(source) = modifiers_property {
                let declarations = self.symbol(source).declarations.clone();
                self.transient_symbol_mut(property).declarations = declarations;
            }
            let links = self.mapped_symbol_links.get_or_insert(property);
            links.key_type = Some(key);
            links.mapped_type = Some(t);
            members.properties.insert(interned, property);
        }
        members
    }

    /// Members of a generic declaration seen through `mapper`.
    fn instantiate_members(&mut self, declared: &ResolvedMembers, mapper: MapperId) -> ResolvedMembers {
        let mut properties = IndexMap::with_capacity(declared.properties.len());
        for (&name, &property) in &declared.properties {
            properties.insert(name, self.instantiate_symbol(property, mapper));
        }
        let call_signatures = declared
            .call_signatures
            .iter()
            .map(|&s| self.instantiate_signature(s, mapper))
            .collect();
        let construct_signatures = declared
            .construct_signatures
            .iter()
            .map(|&s| self.instantiate_signature(s, mapper))
            .collect();
        let index_infos = declared
            .index_infos
            .iter()
            .map(|info| IndexInfo {
                key_type: self.instantiate_type(info.key_type, mapper),
                value_type: self.instantiate_type(info.value_type, mapper),
                is_readonly: info.is_readonly,
                declaration: info.declaration,
            })
            .collect();
        ResolvedMembers {
            properties,
            call_signatures,
            construct_signatures,
            index_infos,
        }
    }

    /// A symbol whose type is `symbol`'s type instantiated with `mapper`.
    pub(crate) fn instantiate_symbol(&mut self, symbol: SymbolId, mapper: MapperId) -> SymbolId {
        let mut target = symbol;
        let mut mapper = mapper;
        if self.symbol(symbol).check_flags.contains(CheckFlags::INSTANTIATED) {
            if let Some(links) = self.value_symbol_links.try_get(symbol) {
                if let (Some(t), Some(m)) = (links.target, links.mapper) {
                    target = t;
                    mapper = self.types.merge_type_mappers(Some(m), mapper);
                }
            }
        }
        let source = self.symbol(target);
        let name = source.name;
        let flags = source.flags & !SymbolFlags::TRANSIENT;
        let check_flags = CheckFlags::INSTANTIATED | (source.check_flags & CheckFlags::READONLY);
        let declarations = source.declarations.clone();
        let value_declaration = source.value_declaration;
        let parent = source.parent;
        let instantiated = self.create_transient_symbol(name, flags, check_flags);
        let symbol = self.transient_symbol_mut(instantiated);
        symbol.declarations = declarations;
        symbol.value_declaration = value_declaration;
        symbol.parent = parent;
        let links = self.value_symbol_links.get_or_insert(instantiated);
        links.target = Some(target);
        links.mapper = Some(mapper);
        instantiated
    }

    // ========================================================================
    // Properties
    // ========================================================================

    /// Object types as themselves, type parameters as their constraint.
    fn get_apparent_type(&mut self, t: TypeId) -> TypeId {
        let flags = self.types.get(t).flags;
        if flags.intersects(TypeFlags::TYPE_PARAMETER) {
            return match self.get_constraint_of_type_parameter(t) {
                Some(constraint) if constraint != t => self.get_apparent_type(constraint),
                _ => self.types.unknown_type,
            };
        }
        t
    }

    /// Properties of `t` in declaration order. A union only has the
    /// properties every constituent has.
    pub fn get_properties_of_type(&mut self, t: TypeId) -> Vec<SymbolId> {
        let t = self.get_apparent_type(t);
        let flags = self.types.get(t).flags;
        if flags.intersects(TypeFlags::UNION_OR_INTERSECTION) {
            let constituents = self.types.types(t).to_vec();
            let mut names: Vec<InternedString> = Vec::new();
            for constituent in constituents {
                for property in self.get_properties_of_type(constituent) {
                    let name = self.symbol(property).name;
                    if !names.contains(&name) {
                        names.push(name);
                    }
                }
            }
            return names
                .into_iter()
                .filter_map(|name| self.get_union_or_intersection_property(t, name))
                .collect();
        }
        if !flags.intersects(TypeFlags::OBJECT) {
            return Vec::new();
        }
        self.resolve_structured_type_members(t);
        self.types
            .get(t)
            .as_object()
            .members
            .as_ref()
            .map(|members| members.properties.values().copied().collect())
            .unwrap_or_default()
    }

    /// The property `name` of `t`, seen through type parameter constraints.
    pub fn get_property_of_type(&mut self, t: TypeId, name: InternedString) -> Option<SymbolId> {
        let t = self.get_apparent_type(t);
        let flags = self.types.get(t).flags;
        if flags.intersects(TypeFlags::UNION_OR_INTERSECTION) {
            return self.get_union_or_intersection_property(t, name);
        }
        if !flags.intersects(TypeFlags::OBJECT) {
            return None;
        }
        self.resolve_structured_type_members(t);
        self.types
            .get(t)
            .as_object()
            .members
            .as_ref()
            .and_then(|members| members.properties.get(&name).copied())
    }

    /// A synthetic property combining `name` across the constituents of
    /// a union (present in all) or an intersection (present in any).
    fn get_union_or_intersection_property(&mut self, t: TypeId, name: InternedString) -> Option<SymbolId> {
        if let Some(&cached) = self.union_property_cache.get(&(t, name)) {
            return cached;
        }
        let is_union = self.types.is_union(t);
        let mut constituents = Vec::new();
        let mut single = None;
        let mut optional = false;
        let mut readonly = false;
        for constituent in self.types.types(t).to_vec() {
            match self.get_property_of_type(constituent, name) {
                Some(property) => {
                    let symbol = self.symbol(property);
                    optional |= symbol.has_flags(SymbolFlags::OPTIONAL);
                    readonly |= symbol.check_flags.contains(CheckFlags::READONLY);
                    single = match single {
                        None if constituents.is_empty() => Some(property),
                        Some(existing) if existing == property => Some(existing),
                        _ => None,
                    };
                    constituents.push(constituent);
                }
                None if is_union => {
                    self.union_property_cache.insert((t, name), None);
                    return None;
                }
                None => {}
            }
        }
        let result = match (constituents.len(), single) {
            (0, _) => None,
            // Every constituent shares the same declared property
            (_, Some(property)) => Some(property),
            _ => {
                let mut flags = SymbolFlags::PROPERTY;
                if optional && is_union {
                    flags |= SymbolFlags::OPTIONAL;
                }
                let mut check_flags = CheckFlags::SYNTHETIC_PROPERTY;
                if readonly {
                    check_flags |= CheckFlags::READONLY;
                }
                let property = self.create_transient_symbol(name, flags, check_flags);
                let links = self.deferred_symbol_links.get_or_insert(property);
                links.parent = Some(t);
                links.constituents = constituents;
                Some(property)
            }
        };
        self.union_property_cache.insert((t, name), result);
        result
    }

    // ========================================================================
    // Signatures
    // ========================================================================

    /// The signature a function-like declaration declares, computed once.
    pub fn get_signature_from_declaration(&mut self, declaration: NodeId) -> SignatureId {
        if let Some(signature) = self
            .signature_links
            .try_get(declaration)
            .and_then(|links| links.resolved_signature)
        {
            return signature;
        }
        let ast = self.ast;
        let kind = ast.kind(declaration);
        let mut flags = SignatureFlags::NONE;
        if matches!(
            kind,
            SyntaxKind::Constructor | SyntaxKind::ConstructSignature | SyntaxKind::ConstructorType
        ) {
            flags |= SignatureFlags::CONSTRUCT;
        }
        if kind == SyntaxKind::ConstructorType && has_syntactic_modifier(ast, declaration, ModifierFlags::ABSTRACT) {
            flags |= SignatureFlags::ABSTRACT;
        }
        let mut parameters = Vec::new();
        let mut this_parameter = None;
        let mut min_argument_count = 0;
        let parameter_nodes: Vec<NodeId> = ast.parameters(declaration).map(|list| list.iter().collect()).unwrap_or_default();
        for (i, parameter) in parameter_nodes.iter().copied().enumerate() {
            let Some(symbol) = ast.symbol(parameter) else {
                continue;
            };
            let is_this = i == 0 && ast.name(parameter).is_some_and(|n| ast.text(n) == "this");
            if is_this {
                this_parameter = Some(symbol);
                continue;
            }
            if ast.type_node(parameter).is_some_and(|t| ast.kind(t) == SyntaxKind::LiteralType) {
                flags |= SignatureFlags::HAS_LITERAL_TYPES;
            }
            parameters.push(symbol);
            let is_optional = ast.question_token(parameter).is_some()
                || ast.initializer(parameter).is_some()
                || ast.dot_dot_dot_token(parameter).is_some();
            if !is_optional {
                min_argument_count = parameters.len();
            }
        }
        if parameter_nodes
            .last()
            .is_some_and(|&p| ast.dot_dot_dot_token(p).is_some())
        {
            flags |= SignatureFlags::HAS_REST_PARAMETER;
        }
        let type_parameters = if kind == SyntaxKind::Constructor {
            let class_symbol = ast.parent(declaration).and_then(|class| ast.symbol(class));
            match class_symbol {
                Some(class_symbol) => {
                    let declared = self.get_declared_type_of_symbol(class_symbol);
                    match &self.types.get(declared).kind {
                        TypeKind::Object(ObjectData {
                            shape: ObjectShape::Interface(data),
                            ..
                        }) => data.local_type_parameters.clone(),
                        _ => Vec::new(),
                    }
                }
                None => Vec::new(),
            }
        } else {
            let symbols: Vec<SymbolId> = ast
                .type_parameters(declaration)
                .into_iter()
                .flatten()
                .filter_map(|tp| ast.symbol(tp))
                .collect();
            symbols
                .into_iter()
                .map(|s| self.get_declared_type_of_type_parameter(s))
                .collect()
        };
        let mut signature = Signature::new(flags, Some(declaration));
        signature.min_argument_count = min_argument_count;
        signature.parameters = parameters;
        signature.this_parameter = this_parameter;
        signature.type_parameters = type_parameters;
        let id = self.types.create_signature(signature);
        self.signature_links.get_or_insert(declaration).resolved_signature = Some(id);
        id
    }

    pub(crate) fn instantiate_signature(&mut self, signature: SignatureId, mapper: MapperId) -> SignatureId {
        let source = self.types.signature(signature).clone();
        let parameters = source
            .parameters
            .iter()
            .map(|&p| self.instantiate_symbol(p, mapper))
            .collect();
        let this_parameter = source.this_parameter.map(|p| self.instantiate_symbol(p, mapper));
        let mut instantiated = Signature::new(source.flags, source.declaration);
        instantiated.min_argument_count = source.min_argument_count;
        instantiated.type_parameters = source.type_parameters;
        instantiated.parameters = parameters;
        instantiated.this_parameter = this_parameter;
        instantiated.target = Some(signature);
        instantiated.mapper = Some(mapper);
        self.types.create_signature(instantiated)
    }

    pub fn get_return_type_of_signature(&mut self, signature: SignatureId) -> TypeId {
        if let Some(t) = self.types.signature(signature).resolved_return_type {
            return t;
        }
        let source = self.types.signature(signature).clone();
        let t = if let (Some(target), Some(mapper)) = (source.target, source.mapper) {
            let t = self.get_return_type_of_signature(target);
            self.instantiate_type(t, mapper)
        } else if let Some(composite) = &source.composite {
            let returns: Vec<TypeId> = composite
                .signatures
                .iter()
                .map(|&s| self.get_return_type_of_signature(s))
                .collect();
            if composite.is_union {
                self.types.get_union_type(self.ast, self.binding, &returns)
            } else {
                self.types.get_intersection_type(self.ast, self.binding, &returns)
            }
        } else if let Some(declaration) = source.declaration {
            self.get_return_type_from_declaration(declaration)
        } else {
            self.types.any_type
        };
        self.types.signature_mut(signature).resolved_return_type = Some(t);
        t
    }

    fn get_return_type_from_declaration(&mut self, declaration: NodeId) -> TypeId {
        let ast = self.ast;
        if ast.kind(declaration) == SyntaxKind::Constructor {
            return match ast.parent(declaration).and_then(|class| ast.symbol(class)) {
                Some(class_symbol) => self.get_declared_type_of_symbol(class_symbol),
                None => self.types.error_type,
            };
        }
        if let Some(type_node) = ast.type_node(declaration) {
            return match &ast.node(type_node).payload {
                NodePayload::TypePredicate {
                    asserts_modifier: Some(_),
                    ..
                } => self.types.void_type,
                NodePayload::TypePredicate { .. } => self.types.boolean_type,
                _ => self.get_type_from_type_node(type_node),
            };
        }
        if ast.kind(declaration) == SyntaxKind::SetAccessor {
            return self.types.void_type;
        }
        self.get_return_type_from_body(declaration)
    }

    /// The widened union of the returned expressions, `void` for a body
    /// without any, `any` without a body.
    fn get_return_type_from_body(&mut self, declaration: NodeId) -> TypeId {
        let ast = self.ast;
        let Some(body) = ast.body(declaration) else {
            return self.types.any_type;
        };
        if ast.kind(body) != SyntaxKind::Block {
            let t = self.get_type_of_expression(body);
            return self.get_widened_literal_type(t);
        }
        let mut returned = Vec::new();
        collect_return_expressions(ast, body, &mut returned);
        if returned.is_empty() {
            return self.types.void_type;
        }
        let mut types = Vec::with_capacity(returned.len());
        for expression in returned {
            let t = self.get_type_of_expression(expression);
            types.push(self.get_widened_literal_type(t));
        }
        self.types.get_union_type(ast, self.binding, &types)
    }

    /// The `x is T` or `asserts x` predicate a signature declares.
    pub fn get_type_predicate_of_signature(&mut self, signature: SignatureId) -> Option<TypePredicate> {
        if let Some(predicate) = &self.types.signature(signature).resolved_type_predicate {
            return Some(predicate.clone());
        }
        let source = self.types.signature(signature).clone();
        let predicate = if let (Some(target), Some(mapper)) = (source.target, source.mapper) {
            self.get_type_predicate_of_signature(target).map(|mut predicate| {
                predicate.type_id = predicate.type_id.map(|t| self.instantiate_type(t, mapper));
                predicate
            })
        } else {
            source
                .declaration
                .and_then(|declaration| self.get_type_predicate_from_declaration(declaration))
        };
        self.types.signature_mut(signature).resolved_type_predicate = predicate.clone();
        predicate
    }

    fn get_type_predicate_from_declaration(&mut self, declaration: NodeId) -> Option<TypePredicate> {
        let ast = self.ast;
        let type_node = ast.type_node(declaration)?;
        let NodePayload::TypePredicate {
            asserts_modifier,
            parameter_name,
            type_node: predicate_type,
        } = &ast.node(type_node).payload
        else {
            return None;
        };
        let is_this = ast.kind(*parameter_name) == SyntaxKind::ThisType;
        let kind = match (asserts_modifier.is_some(), is_this) {
            (false, true) => TypePredicateKind::This,
            (false, false) => TypePredicateKind::Identifier,
            (true, true) => TypePredicateKind::AssertsThis,
            (true, false) => TypePredicateKind::AssertsIdentifier,
        };
        let (parameter_name_text, parameter_index) = if is_this {
            (None, None)
        } else {
            let text = ast.text(*parameter_name);
            let index = ast.parameters(declaration).and_then(|params| {
                params
                    .iter()
                    .filter(|&p| !ast.name(p).is_some_and(|n| ast.text(n) == "this"))
                    .position(|p| ast.name(p).is_some_and(|n| ast.text(n) == text))
            });
            (Some(text.to_string()), index)
        };
        let type_id = predicate_type.map(|t| self.get_type_from_type_node(t));
        Some(TypePredicate {
            kind,
            parameter_name: parameter_name_text,
            parameter_index,
            type_id,
        })
    }

    /// Call or construct signatures of `t`. Calling through a union needs
    /// every constituent to be callable; the result is one composite
    /// signature over the first signature of each.
    pub fn get_signatures_of_type(&mut self, t: TypeId, kind: SignatureKind) -> Vec<SignatureId> {
        let t = self.get_apparent_type(t);
        let flags = self.types.get(t).flags;
        if flags.intersects(TypeFlags::UNION) {
            let constituents = self.types.types(t).to_vec();
            let mut firsts = Vec::with_capacity(constituents.len());
            for constituent in constituents {
                match self.get_signatures_of_type(constituent, kind).first() {
                    Some(&signature) => firsts.push(signature),
                    None => return Vec::new(),
                }
            }
            if firsts.windows(2).all(|pair| pair[0] == pair[1]) {
                return firsts.into_iter().take(1).collect();
            }
            let mut flags = SignatureFlags::NONE;
            if kind == SignatureKind::Construct {
                flags |= SignatureFlags::CONSTRUCT;
            }
            let mut composite = Signature::new(flags, None);
            composite.composite = Some(CompositeSignature {
                is_union: true,
                signatures: firsts,
            });
            return vec![self.types.create_signature(composite)];
        }
        if flags.intersects(TypeFlags::INTERSECTION) {
            let constituents = self.types.types(t).to_vec();
            return constituents
                .into_iter()
                .flat_map(|c| self.get_signatures_of_type(c, kind))
                .collect();
        }
        if !flags.intersects(TypeFlags::OBJECT) {
            return Vec::new();
        }
        self.resolve_structured_type_members(t);
        let members = self.types.get(t).as_object().members.as_ref();
        match (members, kind) {
            (Some(members), SignatureKind::Call) => members.call_signatures.clone(),
            (Some(members), SignatureKind::Construct) => members.construct_signatures.clone(),
            (None, _) => Vec::new(),
        }
    }

    pub fn get_index_infos_of_type(&mut self, t: TypeId) -> Vec<IndexInfo> {
        let t = self.get_apparent_type(t);
        if !self.types.get(t).flags.intersects(TypeFlags::OBJECT) {
            return Vec::new();
        }
        self.resolve_structured_type_members(t);
        self.types
            .get(t)
            .as_object()
            .members
            .as_ref()
            .map(|members| members.index_infos.clone())
            .unwrap_or_default()
    }

    fn get_index_info_of_index_signature(&mut self, declaration: NodeId) -> Option<IndexInfo> {
        let ast = self.ast;
        let parameter = ast.parameters(declaration)?.first()?;
        let key_type = match ast.type_node(parameter) {
            Some(type_node) => self.get_type_from_type_node(type_node),
            None => self.types.string_type,
        };
        let value_type = match ast.type_node(declaration) {
            Some(type_node) => self.get_type_from_type_node(type_node),
            None => self.types.any_type,
        };
        Some(IndexInfo {
            key_type,
            value_type,
            is_readonly: has_syntactic_modifier(ast, declaration, ModifierFlags::READONLY),
            declaration: Some(declaration),
        })
    }

    // ========================================================================
    // Variance
    // ========================================================================

    /// Variance of each type parameter of a generic class, interface or
    /// type alias. `in`/`out` modifiers are taken as written; otherwise
    /// the declaration is walked and each occurrence of the parameter is
    /// recorded with the polarity of its position.
    pub fn get_variances(&mut self, symbol: SymbolId) -> Vec<VarianceFlags> {
        if let Some(links) = self.variance_links.try_get(symbol) {
            return links.variances.clone();
        }
        let ast = self.ast;
        let declarations = self.symbol(symbol).declarations.clone();
        let mut type_parameter_nodes: Vec<NodeId> = Vec::new();
        for &declaration in &declarations {
            for tp in ast.type_parameters(declaration).into_iter().flatten() {
                let duplicate = type_parameter_nodes
                    .iter()
                    .any(|&seen| ast.name(seen).map(|n| ast.text(n)) == ast.name(tp).map(|n| ast.text(n)));
                if !duplicate {
                    type_parameter_nodes.push(tp);
                }
            }
        }
        let mut variances = Vec::with_capacity(type_parameter_nodes.len());
        for tp in type_parameter_nodes {
            let modifiers = ast.modifier_flags(tp);
            let declared = match (
                modifiers.contains(ModifierFlags::IN),
                modifiers.contains(ModifierFlags::OUT),
            ) {
                (true, true) => Some(VarianceFlags::INVARIANT),
                (true, false) => Some(VarianceFlags::CONTRAVARIANT),
                (false, true) => Some(VarianceFlags::COVARIANT),
                (false, false) => None,
            };
            let variance = match declared {
                Some(variance) => variance,
                None => {
                    let Some(tp_symbol) = ast.symbol(tp) else {
                        variances.push(VarianceFlags::INDEPENDENT);
                        continue;
                    };
                    let mut witnessed = VarianceFlags::empty();
                    for &declaration in &declarations {
                        self.collect_variance(declaration, tp_symbol, true, &mut witnessed);
                    }
                    if witnessed.is_empty() {
                        VarianceFlags::INDEPENDENT
                    } else if witnessed == VarianceFlags::BIVARIANT {
                        VarianceFlags::INVARIANT
                    } else {
                        witnessed
                    }
                }
            };
            variances.push(variance);
        }
        trace!(symbol = symbol.0, ?variances, "computed variances");
        self.variance_links.get_or_insert(symbol).variances = variances.clone();
        variances
    }

    /// Record the polarity of every reference to `type_parameter` under
    /// `node`. Parameter positions flip the polarity; a writable
    /// property is both co- and contravariant.
    fn collect_variance(&mut self, node: NodeId, type_parameter: SymbolId, positive: bool, witnessed: &mut VarianceFlags) {
        let ast = self.ast;
        match ast.kind(node) {
            SyntaxKind::TypeReference => {
                if let NodePayload::TypeReference { type_name, .. } = &ast.node(node).payload {
                    if ast.kind(*type_name) == SyntaxKind::Identifier
                        && self.resolve_entity_name(*type_name, SymbolFlags::TYPE, true, false) == Some(type_parameter)
                    {
                        *witnessed |= if positive {
                            VarianceFlags::COVARIANT
                        } else {
                            VarianceFlags::CONTRAVARIANT
                        };
                    }
                }
            }
            SyntaxKind::Parameter => {
                if let Some(type_node) = ast.type_node(node) {
                    self.collect_variance(type_node, type_parameter, !positive, witnessed);
                }
                return;
            }
            SyntaxKind::TypeParameter => return,
            SyntaxKind::PropertySignature | SyntaxKind::PropertyDeclaration => {
                if let Some(type_node) = ast.type_node(node) {
                    self.collect_variance(type_node, type_parameter, positive, witnessed);
                    let is_readonly = has_syntactic_modifier(ast, node, ModifierFlags::READONLY);
                    if !is_readonly {
                        self.collect_variance(type_node, type_parameter, !positive, witnessed);
                    }
                }
                return;
            }
            _ => {}
        }
        for child in ast.children(node) {
            self.collect_variance(child, type_parameter, positive, witnessed);
        }
    }
}

/// Expressions of `return` statements in `body`, not descending into
/// nested functions or classes.
fn collect_return_expressions(ast: &tscheck_ast::Ast, node: NodeId, out: &mut Vec<NodeId>) {
    ast.for_each_child(node, |child| {
        match ast.kind(child) {
            SyntaxKind::ReturnStatement => {
                if let NodePayload::ReturnStatement {
                    expression: Some(expression),
                } = &ast.node(child).payload
                {
                    out.push(*expression);
                }
            }
            kind if is_function_like_kind(kind) || is_class_like_kind(kind) => {}
            _ => collect_return_expressions(ast, child, out),
        }
        false
    });
}

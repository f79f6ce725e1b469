//! Types of type nodes and declared types of type symbols.

use crate::checker::{Checker, ResolutionTarget};
use crate::evaluator::parse_numeric_literal;
use crate::mapper::MapperId;
use crate::types::*;
use tracing::trace;
use tscheck_ast::types::{NodeId, SymbolFlags, SymbolId};
use tscheck_ast::utilities::*;
use tscheck_ast::{NodePayload, SyntaxKind};
use tscheck_diagnostics::{messages, DiagnosticMessage};

/// Object types whose identity is created by their declaration, so an
/// alias name can be attached to them.
fn is_fresh_aliasable_kind(kind: SyntaxKind) -> bool {
    matches!(
        kind,
        SyntaxKind::TypeLiteral
            | SyntaxKind::MappedType
            | SyntaxKind::ConditionalType
            | SyntaxKind::FunctionType
            | SyntaxKind::ConstructorType
    )
}

impl<'a> Checker<'a> {
    /// The type a type node denotes, computed once per node.
    pub fn get_type_from_type_node(&mut self, node: NodeId) -> TypeId {
        if let Some(resolved) = self.type_node_links.try_get(node).and_then(|links| links.resolved_type) {
            return resolved;
        }
        let t = self.get_type_from_type_node_worker(node);
        self.type_node_links.get_or_insert(node).resolved_type = Some(t);
        t
    }

    fn get_type_from_type_node_worker(&mut self, node: NodeId) -> TypeId {
        let ast = self.ast;
        match ast.kind(node) {
            SyntaxKind::AnyKeyword => self.types.any_type,
            SyntaxKind::UnknownKeyword => self.types.unknown_type,
            SyntaxKind::StringKeyword => self.types.string_type,
            SyntaxKind::NumberKeyword => self.types.number_type,
            SyntaxKind::BigIntKeyword => self.types.bigint_type,
            SyntaxKind::BooleanKeyword => self.types.boolean_type,
            SyntaxKind::SymbolKeyword => self.types.es_symbol_type,
            SyntaxKind::VoidKeyword => self.types.void_type,
            SyntaxKind::UndefinedKeyword => self.types.undefined_type,
            SyntaxKind::NullKeyword => self.types.null_type,
            SyntaxKind::NeverKeyword => self.types.never_type,
            SyntaxKind::ObjectKeyword => self.types.non_primitive_type,
            SyntaxKind::LiteralType => self.get_type_from_literal_type_node(node),
            SyntaxKind::TypeReference | SyntaxKind::ExpressionWithTypeArguments => {
                self.get_type_from_type_reference(node)
            }
            SyntaxKind::TypeQuery => self.get_type_from_type_query_node(node),
            SyntaxKind::UnionType | SyntaxKind::IntersectionType => {
                let elements: Vec<NodeId> = ast.elements(node).map(|list| list.iter().collect()).unwrap_or_default();
                let types: Vec<TypeId> = elements.into_iter().map(|e| self.get_type_from_type_node(e)).collect();
                if ast.kind(node) == SyntaxKind::UnionType {
                    self.types.get_union_type(ast, self.binding, &types)
                } else {
                    self.types.get_intersection_type(ast, self.binding, &types)
                }
            }
            SyntaxKind::ArrayType | SyntaxKind::TupleType => self.get_type_from_array_or_tuple_type_node(node),
            SyntaxKind::ParenthesizedType
            | SyntaxKind::OptionalType
            | SyntaxKind::RestType
            | SyntaxKind::NamedTupleMember => match ast.type_node(node) {
                Some(inner) => self.get_type_from_type_node(inner),
                None => self.types.error_type,
            },
            SyntaxKind::TypeOperator => self.get_type_from_type_operator_node(node),
            SyntaxKind::IndexedAccessType => self.get_type_from_indexed_access_type_node(node),
            SyntaxKind::ConditionalType => self.get_type_from_conditional_type_node(node),
            SyntaxKind::InferType => match &ast.node(node).payload {
                NodePayload::InferType { type_parameter } => match ast.symbol(*type_parameter) {
                    Some(symbol) => self.get_declared_type_of_type_parameter(symbol),
                    None => self.types.error_type,
                },
                _ => self.types.error_type,
            },
            SyntaxKind::MappedType => self.get_type_from_mapped_type_node(node),
            SyntaxKind::TypeLiteral | SyntaxKind::FunctionType | SyntaxKind::ConstructorType => {
                self.types.create_anonymous_type(ast.symbol(node), Some(node))
            }
            SyntaxKind::TemplateLiteralType => self.get_type_from_template_literal_type_node(node),
            SyntaxKind::ThisType | SyntaxKind::ThisKeyword => self.get_this_type(node),
            SyntaxKind::TypePredicate => self.types.boolean_type,
            SyntaxKind::ImportType => self.get_type_from_import_type_node(node),
            _ => self.types.error_type,
        }
    }

    fn get_type_from_literal_type_node(&mut self, node: NodeId) -> TypeId {
        let ast = self.ast;
        let Some(literal) = ast.expression(node) else {
            return self.types.error_type;
        };
        match ast.kind(literal) {
            SyntaxKind::StringLiteral | SyntaxKind::NoSubstitutionTemplateLiteral => {
                self.types.get_string_literal_type(ast.text(literal))
            }
            SyntaxKind::NumericLiteral => self.types.get_number_literal_type(parse_numeric_literal(ast.text(literal))),
            SyntaxKind::BigIntLiteral => self.types.get_bigint_literal_type(PseudoBigInt::parse(ast.text(literal))),
            SyntaxKind::TrueKeyword => self.types.true_type,
            SyntaxKind::FalseKeyword => self.types.false_type,
            SyntaxKind::NullKeyword => self.types.null_type,
            SyntaxKind::PrefixUnaryExpression => match &ast.node(literal).payload {
                NodePayload::Unary {
                    operator: SyntaxKind::MinusToken,
                    operand,
                } => match ast.kind(*operand) {
                    SyntaxKind::NumericLiteral => {
                        let value = -parse_numeric_literal(ast.text(*operand));
                        self.types.get_number_literal_type(value)
                    }
                    SyntaxKind::BigIntLiteral => {
                        let value = PseudoBigInt::parse(ast.text(*operand));
                        self.types
                            .get_bigint_literal_type(PseudoBigInt::new(true, value.base10_value))
                    }
                    _ => self.types.error_type,
                },
                _ => self.types.error_type,
            },
            _ => self.types.error_type,
        }
    }

    // ========================================================================
    // Entity names
    // ========================================================================

    /// Resolve an identifier, qualified name or property access chain.
    /// Aliases are followed unless `meaning` asks for aliases or
    /// `dont_resolve_alias` is set.
    pub fn resolve_entity_name(
        &mut self,
        name: NodeId,
        meaning: SymbolFlags,
        ignore_errors: bool,
        dont_resolve_alias: bool,
    ) -> Option<SymbolId> {
        let ast = self.ast;
        let symbol = match &ast.node(name).payload {
            NodePayload::Identifier { .. } => {
                if !ignore_errors {
                    if let Some(links) = self.symbol_node_links.try_get(name) {
                        return links.resolved_symbol;
                    }
                }
                let message: Option<&DiagnosticMessage> = if ignore_errors {
                    None
                } else if meaning == SymbolFlags::NAMESPACE {
                    Some(&messages::CANNOT_FIND_NAMESPACE_0)
                } else {
                    Some(&messages::CANNOT_FIND_NAME_0)
                };
                let resolved = tscheck_binder::NameResolver::new(ast, self.binding, self.options).resolve(
                    self,
                    name,
                    ast.text(name),
                    meaning,
                    message,
                    true,
                    false,
                );
                if !ignore_errors {
                    self.symbol_node_links.get_or_insert(name).resolved_symbol = resolved;
                }
                resolved
            }
            NodePayload::QualifiedName { left, right } => {
                self.resolve_qualified_name(*left, *right, meaning, ignore_errors)
            }
            NodePayload::PropertyAccess { expression, name: right, .. } => {
                self.resolve_qualified_name(*expression, *right, meaning, ignore_errors)
            }
            _ => None,
        }?;
        if dont_resolve_alias || meaning.contains(SymbolFlags::ALIAS) || !self.symbol(symbol).has_flags(SymbolFlags::ALIAS)
        {
            return Some(symbol);
        }
        self.resolve_alias(symbol)
    }

    fn resolve_qualified_name(
        &mut self,
        left: NodeId,
        right: NodeId,
        meaning: SymbolFlags,
        ignore_errors: bool,
    ) -> Option<SymbolId> {
        let ast = self.ast;
        let namespace = self.resolve_entity_name(left, SymbolFlags::NAMESPACE, ignore_errors, false)?;
        let right_text = ast.text(right);
        let found = self
            .get_export_of_symbol(namespace, right_text)
            .filter(|&s| self.symbol_has_meaning(s, meaning));
        if found.is_none() && !ignore_errors {
            let namespace_name = ast.source_text(left);
            self.error(right, &messages::NAMESPACE_0_HAS_NO_EXPORTED_MEMBER_1, &[namespace_name, right_text]);
        }
        found
    }

    /// The symbol or the target of the alias has one of `meaning`.
    pub(crate) fn symbol_has_meaning(&mut self, symbol: SymbolId, meaning: SymbolFlags) -> bool {
        let flags = self.symbol(symbol).flags;
        if flags.intersects(meaning) {
            return true;
        }
        flags.intersects(SymbolFlags::ALIAS) && self.get_symbol_flags_of_alias(symbol).intersects(meaning)
    }

    // ========================================================================
    // Type references
    // ========================================================================

    fn get_type_from_type_reference(&mut self, node: NodeId) -> TypeId {
        let ast = self.ast;
        let type_name = match &ast.node(node).payload {
            NodePayload::TypeReference { type_name, .. } => *type_name,
            _ => return self.types.error_type,
        };
        let in_class_extends = is_expression_with_type_arguments_in_class_extends_clause(ast, node);
        match self.resolve_entity_name(type_name, SymbolFlags::TYPE, in_class_extends, false) {
            Some(symbol) => self.get_type_reference_type(node, symbol),
            None => self.types.error_type,
        }
    }

    fn get_type_reference_type(&mut self, node: NodeId, symbol: SymbolId) -> TypeId {
        let flags = self.symbol(symbol).flags;
        if flags.intersects(SymbolFlags::CLASS | SymbolFlags::INTERFACE) {
            return self.get_type_from_class_or_interface_reference(node, symbol);
        }
        if flags.intersects(SymbolFlags::TYPE_ALIAS) {
            return self.get_type_from_type_alias_reference(node, symbol);
        }
        if flags.intersects(SymbolFlags::TYPE_PARAMETER | SymbolFlags::ENUM | SymbolFlags::ENUM_MEMBER) {
            if self.ast.type_arguments(node).is_some_and(|args| !args.is_empty()) {
                let name = self.symbol_name(symbol);
                self.error(node, &messages::TYPE_0_IS_NOT_GENERIC, &[name]);
                return self.types.error_type;
            }
            return self.get_declared_type_of_symbol(symbol);
        }
        self.types.error_type
    }

    /// Resolve the type arguments written at `node`, or report a wrong
    /// count against `type_parameters`.
    fn get_type_arguments_for_reference(
        &mut self,
        node: NodeId,
        symbol: SymbolId,
        type_parameters: &[TypeId],
    ) -> Option<Vec<TypeId>> {
        let ast = self.ast;
        let argument_nodes: Vec<NodeId> = ast.type_arguments(node).map(|list| list.iter().collect()).unwrap_or_default();
        let min = self.get_min_type_argument_count(type_parameters);
        if argument_nodes.len() < min || argument_nodes.len() > type_parameters.len() {
            let name = self.symbol_name(symbol);
            let max = type_parameters.len().to_string();
            if min == type_parameters.len() {
                self.error(node, &messages::GENERIC_TYPE_0_REQUIRES_1_TYPE_ARGUMENT_S, &[name, &max]);
            } else {
                let min = min.to_string();
                self.error(node, &messages::GENERIC_TYPE_0_REQUIRES_BETWEEN_1_AND_2_TYPE_ARGUMENTS, &[name, &min, &max]);
            }
            return None;
        }
        let arguments: Vec<TypeId> = argument_nodes.into_iter().map(|n| self.get_type_from_type_node(n)).collect();
        Some(self.fill_missing_type_arguments(arguments, type_parameters))
    }

    fn get_type_from_class_or_interface_reference(&mut self, node: NodeId, symbol: SymbolId) -> TypeId {
        let declared = self.get_declared_type_of_symbol(symbol);
        if !self.types.get(declared).is_object() {
            return declared;
        }
        let (outer, local) = match &self.types.get(declared).as_object().shape {
            ObjectShape::Interface(data) => (data.outer_type_parameters.clone(), data.local_type_parameters.clone()),
            _ => return declared,
        };
        if !local.is_empty() {
            let Some(arguments) = self.get_type_arguments_for_reference(node, symbol, &local) else {
                return self.types.error_type;
            };
            let mut all = outer;
            all.extend(arguments);
            return self.types.create_type_reference(declared, all);
        }
        if self.ast.type_arguments(node).is_some_and(|args| !args.is_empty()) {
            let name = self.symbol_name(symbol);
            self.error(node, &messages::TYPE_0_IS_NOT_GENERIC, &[name]);
            return self.types.error_type;
        }
        declared
    }

    fn get_type_from_type_alias_reference(&mut self, node: NodeId, symbol: SymbolId) -> TypeId {
        let declared = self.get_declared_type_of_type_alias(symbol);
        let type_parameters = self
            .type_alias_links
            .try_get(symbol)
            .map(|links| links.type_parameters.clone())
            .unwrap_or_default();
        if !type_parameters.is_empty() {
            return match self.get_type_arguments_for_reference(node, symbol, &type_parameters) {
                Some(arguments) => self.get_type_alias_instantiation(symbol, arguments),
                None => self.types.error_type,
            };
        }
        if self.ast.type_arguments(node).is_some_and(|args| !args.is_empty()) {
            let name = self.symbol_name(symbol);
            self.error(node, &messages::TYPE_0_IS_NOT_GENERIC, &[name]);
            return self.types.error_type;
        }
        declared
    }

    /// `Alias<arguments>`, one type per argument list.
    pub fn get_type_alias_instantiation(&mut self, symbol: SymbolId, arguments: Vec<TypeId>) -> TypeId {
        if let Some(&cached) = self
            .type_alias_links
            .try_get(symbol)
            .and_then(|links| links.instantiations.get(&arguments))
        {
            return cached;
        }
        let declared = self.get_declared_type_of_type_alias(symbol);
        let type_parameters = self.type_alias_links.get_or_insert(symbol).type_parameters.clone();
        let mapper = self.types.new_type_mapper(type_parameters, Some(arguments.clone()));
        let instantiated = self.instantiate_type(declared, mapper);
        self.type_alias_links
            .get_or_insert(symbol)
            .instantiations
            .insert(arguments, instantiated);
        instantiated
    }

    /// Index of the last type parameter without a default, plus one.
    fn get_min_type_argument_count(&mut self, type_parameters: &[TypeId]) -> usize {
        let mut min = 0;
        for (i, &tp) in type_parameters.iter().enumerate() {
            if self.get_default_from_type_parameter(tp).is_none() {
                min = i + 1;
            }
        }
        min
    }

    /// Complete `arguments` with the defaults of the remaining parameters.
    /// Defaults may refer to earlier parameters.
    fn fill_missing_type_arguments(&mut self, mut arguments: Vec<TypeId>, type_parameters: &[TypeId]) -> Vec<TypeId> {
        for i in arguments.len()..type_parameters.len() {
            let filled = match self.get_default_from_type_parameter(type_parameters[i]) {
                Some(default) => {
                    let mut known = arguments.clone();
                    known.resize(type_parameters.len(), self.types.unknown_type);
                    let mapper = self.types.new_type_mapper(type_parameters.to_vec(), Some(known));
                    self.instantiate_type(default, mapper)
                }
                None => self.types.unknown_type,
            };
            arguments.push(filled);
        }
        arguments
    }

    fn get_type_from_type_query_node(&mut self, node: NodeId) -> TypeId {
        let ast = self.ast;
        let NodePayload::TypeReference { type_name, .. } = &ast.node(node).payload else {
            return self.types.error_type;
        };
        match self.resolve_entity_name(*type_name, SymbolFlags::VALUE, false, false) {
            Some(symbol) => self.get_type_of_symbol(symbol),
            None => self.types.error_type,
        }
    }

    fn get_type_from_import_type_node(&mut self, node: NodeId) -> TypeId {
        let ast = self.ast;
        let NodePayload::ImportType {
            is_type_of,
            argument,
            qualifier,
            ..
        } = &ast.node(node).payload
        else {
            return self.types.error_type;
        };
        let specifier = ast.expression(*argument).unwrap_or(*argument);
        let Some(module) = self.resolve_external_module_name(node, specifier, false) else {
            return self.types.error_type;
        };
        let module = self.resolve_es_module_symbol(module);
        let meaning = if *is_type_of { SymbolFlags::VALUE } else { SymbolFlags::TYPE };
        let target = match qualifier {
            Some(qualifier) => {
                let name = ast.text(*qualifier);
                let found = self
                    .get_export_of_symbol(module, name)
                    .map(|s| self.resolve_symbol(s))
                    .filter(|&s| self.symbol(s).has_flags(meaning));
                if found.is_none() {
                    let module_name = ast.text(specifier);
                    self.error(*qualifier, &messages::MODULE_0_HAS_NO_EXPORTED_MEMBER_1, &[module_name, name]);
                }
                found
            }
            None => Some(module),
        };
        match target {
            Some(symbol) if *is_type_of => self.get_type_of_symbol(symbol),
            Some(symbol) => self.get_type_reference_type(node, symbol),
            None => self.types.error_type,
        }
    }

    // ========================================================================
    // Structured type nodes
    // ========================================================================

    /// Arrays are one-element rest tuples. Inside type aliases their
    /// element types are resolved on first use.
    fn get_type_from_array_or_tuple_type_node(&mut self, node: NodeId) -> TypeId {
        let ast = self.ast;
        let readonly = ast.parent(node).is_some_and(|p| {
            matches!(
                ast.node(p).payload,
                NodePayload::TypeOperator {
                    operator: SyntaxKind::ReadonlyKeyword,
                    ..
                }
            )
        });
        let element_infos = self.get_tuple_element_infos(node);
        let target = self.types.get_tuple_target_type(element_infos, readonly);
        if self.is_deferred_type_reference_node(node) {
            trace!(node = node.0, "deferred array or tuple reference");
            return self.types.create_deferred_type_reference(target, node, None);
        }
        let arguments = self.get_element_types_of_tuple_node(node);
        self.types.create_type_reference(target, arguments)
    }

    fn is_deferred_type_reference_node(&self, node: NodeId) -> bool {
        let ast = self.ast;
        find_ancestor(ast, Some(node), |n| ast.kind(n) == SyntaxKind::TypeAliasDeclaration).is_some()
    }

    fn tuple_element_nodes(&self, node: NodeId) -> Vec<NodeId> {
        let ast = self.ast;
        match ast.kind(node) {
            SyntaxKind::ArrayType => ast.expression(node).into_iter().collect(),
            _ => ast.elements(node).map(|list| list.iter().collect()).unwrap_or_default(),
        }
    }

    fn get_tuple_element_infos(&self, node: NodeId) -> Vec<TupleElementInfo> {
        let ast = self.ast;
        if ast.kind(node) == SyntaxKind::ArrayType {
            return vec![TupleElementInfo {
                flags: ElementFlags::REST,
                labeled_declaration: None,
            }];
        }
        self.tuple_element_nodes(node)
            .into_iter()
            .map(|element| {
                let (flags, labeled_declaration) = match ast.kind(element) {
                    SyntaxKind::RestType => (ElementFlags::REST, None),
                    SyntaxKind::OptionalType => (ElementFlags::OPTIONAL, None),
                    SyntaxKind::NamedTupleMember => {
                        let flags = if ast.dot_dot_dot_token(element).is_some() {
                            ElementFlags::REST
                        } else if ast.question_token(element).is_some() {
                            ElementFlags::OPTIONAL
                        } else {
                            ElementFlags::REQUIRED
                        };
                        (flags, Some(element))
                    }
                    _ => (ElementFlags::REQUIRED, None),
                };
                TupleElementInfo {
                    flags,
                    labeled_declaration,
                }
            })
            .collect()
    }

    fn get_element_types_of_tuple_node(&mut self, node: NodeId) -> Vec<TypeId> {
        let elements = self.tuple_element_nodes(node);
        let is_array = self.ast.kind(node) == SyntaxKind::ArrayType;
        elements
            .into_iter()
            .map(|element| {
                let t = self.get_type_from_type_node(element);
                if is_array {
                    t
                } else {
                    self.get_rest_element_type(element, t)
                }
            })
            .collect()
    }

    /// `...T[]` contributes `T`.
    fn get_rest_element_type(&mut self, element: NodeId, t: TypeId) -> TypeId {
        let ast = self.ast;
        let is_rest = ast.kind(element) == SyntaxKind::RestType
            || (ast.kind(element) == SyntaxKind::NamedTupleMember && ast.dot_dot_dot_token(element).is_some());
        if !is_rest {
            return t;
        }
        match self.get_array_element_type(t) {
            Some(element_type) => element_type,
            None => t,
        }
    }

    /// Element type of a one-element rest tuple.
    pub(crate) fn get_array_element_type(&mut self, t: TypeId) -> Option<TypeId> {
        let ty = self.types.get(t);
        if !ty.object_flags.contains(ObjectFlags::REFERENCE) || !ty.is_object() {
            return None;
        }
        let (target, _, _) = ty.as_type_reference();
        let tuple = match &self.types.get(target).as_object().shape {
            ObjectShape::Tuple(data) => data,
            _ => return None,
        };
        if tuple.element_infos.len() != 1 || tuple.element_infos[0].flags != ElementFlags::REST {
            return None;
        }
        self.get_type_arguments(t).first().copied()
    }

    /// Type arguments of a reference. Deferred references resolve theirs
    /// from the reference node on first request.
    pub fn get_type_arguments(&mut self, t: TypeId) -> Vec<TypeId> {
        let ty = self.types.get(t);
        let (_, node, arguments) = ty.as_type_reference();
        let Some(node) = node.filter(|_| arguments.is_empty()) else {
            return arguments.to_vec();
        };
        let mapper = ty.mapper();
        let mut resolved = self.get_element_types_of_tuple_node(node);
        if let Some(mapper) = mapper {
            resolved = resolved.into_iter().map(|a| self.instantiate_type(a, mapper)).collect();
        }
        if let TypeKind::Object(ObjectData {
            shape: ObjectShape::Reference(data),
            ..
        }) = &mut self.types.get_mut(t).kind
        {
            data.resolved_type_arguments = resolved.clone();
        }
        resolved
    }

    fn get_type_from_type_operator_node(&mut self, node: NodeId) -> TypeId {
        let ast = self.ast;
        let NodePayload::TypeOperator { operator, type_node } = &ast.node(node).payload else {
            return self.types.error_type;
        };
        match operator {
            SyntaxKind::KeyOfKeyword => {
                let t = self.get_type_from_type_node(*type_node);
                self.get_index_type(t)
            }
            SyntaxKind::UniqueKeyword => {
                if ast.kind(*type_node) != SyntaxKind::SymbolKeyword {
                    return self.types.error_type;
                }
                let declaration = ast.parent(node).filter(|&p| {
                    matches!(
                        ast.kind(p),
                        SyntaxKind::VariableDeclaration | SyntaxKind::PropertyDeclaration | SyntaxKind::PropertySignature
                    )
                });
                match declaration.and_then(|d| ast.symbol(d)) {
                    Some(symbol) => self.get_unique_es_symbol_type_for_symbol(symbol),
                    None => self.types.es_symbol_type,
                }
            }
            _ => self.get_type_from_type_node(*type_node),
        }
    }

    fn get_unique_es_symbol_type_for_symbol(&mut self, symbol: SymbolId) -> TypeId {
        if let Some(t) = self.declared_type_links.try_get(symbol).and_then(|l| l.declared_type) {
            return t;
        }
        let escaped_name = format!("__@{}@{}", self.symbol_name(symbol), symbol.0);
        let t = self.types.create_unique_es_symbol_type(symbol, escaped_name);
        self.declared_type_links.get_or_insert(symbol).declared_type = Some(t);
        t
    }

    /// `keyof t`. Concrete object types produce the union of their
    /// property names.
    pub fn get_index_type(&mut self, t: TypeId) -> TypeId {
        let ty = self.types.get(t);
        if self.types.is_generic_type(t) || ty.flags.intersects(TypeFlags::INSTANTIABLE) {
            return self.types.get_index_type(t, IndexFlags::NONE);
        }
        if ty.flags.intersects(TypeFlags::ANY) {
            let keys = [self.types.string_type, self.types.number_type, self.types.es_symbol_type];
            return self.types.get_union_type(self.ast, self.binding, &keys);
        }
        if !ty.flags.intersects(TypeFlags::STRUCTURED_TYPE) {
            return self.types.never_type;
        }
        let names: Vec<String> = self
            .get_properties_of_type(t)
            .into_iter()
            .map(|p| self.symbol_name(p).to_string())
            .collect();
        let keys: Vec<TypeId> = names.iter().map(|n| self.types.get_string_literal_type(n)).collect();
        self.types.get_union_type(self.ast, self.binding, &keys)
    }

    fn get_type_from_indexed_access_type_node(&mut self, node: NodeId) -> TypeId {
        let ast = self.ast;
        let NodePayload::IndexedAccessType { object_type, index_type } = &ast.node(node).payload else {
            return self.types.error_type;
        };
        let object = self.get_type_from_type_node(*object_type);
        let index = self.get_type_from_type_node(*index_type);
        self.get_indexed_access_type(object, index)
    }

    /// `object[index]`. Literal keys into concrete types read the property.
    pub fn get_indexed_access_type(&mut self, object: TypeId, index: TypeId) -> TypeId {
        if self.types.is_generic_type(object) || self.types.is_generic_type(index) {
            return self.types.get_indexed_access_type(object, index, AccessFlags::NONE);
        }
        let keys: Vec<TypeId> = self.types.distributed(index).to_vec();
        let mut property_types = Vec::with_capacity(keys.len());
        for key in keys {
            let name = match self.types.get(key).kind {
                TypeKind::Literal(LiteralValue::String(ref s)) => s.clone(),
                TypeKind::Literal(LiteralValue::Number(n)) => number_to_property_name(n),
                _ => return self.types.get_indexed_access_type(object, index, AccessFlags::NONE),
            };
            let interned = self.ast.interner().intern(&name);
            match self.get_property_of_type(object, interned) {
                Some(property) => property_types.push(self.get_type_of_symbol(property)),
                None => return self.types.error_type,
            }
        }
        self.types.get_union_type(self.ast, self.binding, &property_types)
    }

    fn get_type_from_conditional_type_node(&mut self, node: NodeId) -> TypeId {
        let ast = self.ast;
        let NodePayload::ConditionalType {
            check_type,
            extends_type,
            true_type,
            false_type,
        } = &ast.node(node).payload
        else {
            return self.types.error_type;
        };
        let check = self.get_type_from_type_node(*check_type);
        let extends = self.get_type_from_type_node(*extends_type);
        let infer_symbols: Vec<SymbolId> = self
            .binding
            .locals(node)
            .map(|locals| locals.iter().map(|(_, s)| s).collect())
            .unwrap_or_default();
        let infer_type_parameters = infer_symbols
            .into_iter()
            .map(|s| self.get_declared_type_of_type_parameter(s))
            .collect();
        let outer_type_parameters = self.get_outer_type_parameters(node);
        let root = ConditionalRoot {
            node,
            check_type: check,
            extends_type: extends,
            is_distributive: self.types.is_type_parameter(check),
            infer_type_parameters,
            outer_type_parameters,
        };
        let t = self.types.create_conditional_type(root, None);
        let resolved_true = self.get_type_from_type_node(*true_type);
        let resolved_false = self.get_type_from_type_node(*false_type);
        if let TypeKind::Conditional(data) = &mut self.types.get_mut(t).kind {
            data.resolved_true_type = Some(resolved_true);
            data.resolved_false_type = Some(resolved_false);
        }
        t
    }

    fn get_type_from_mapped_type_node(&mut self, node: NodeId) -> TypeId {
        let ast = self.ast;
        let NodePayload::MappedType {
            type_parameter,
            name_type,
            type_node,
            ..
        } = &ast.node(node).payload
        else {
            return self.types.error_type;
        };
        let type_parameter_type = ast
            .symbol(*type_parameter)
            .map(|s| self.get_declared_type_of_type_parameter(s));
        let constraint_type = type_parameter_type.and_then(|tp| self.get_constraint_of_type_parameter(tp));
        let name_type = name_type.map(|n| self.get_type_from_type_node(n));
        let template_type = Some(match type_node {
            Some(n) => self.get_type_from_type_node(*n),
            None => self.types.any_type,
        });
        // `{ [P in keyof T]: ... }` copies the modifiers of T's properties
        let keyof_operand = match &ast.node(*type_parameter).payload {
            NodePayload::TypeParameter {
                constraint: Some(constraint),
                ..
            } => match &ast.node(*constraint).payload {
                NodePayload::TypeOperator {
                    operator: SyntaxKind::KeyOfKeyword,
                    type_node,
                } => Some(*type_node),
                _ => None,
            },
            _ => None,
        };
        let modifiers_type = keyof_operand.map(|operand| self.get_type_from_type_node(operand));
        self.types.create_mapped_type(
            ast.symbol(node),
            MappedData {
                declaration: node,
                type_parameter: type_parameter_type,
                constraint_type,
                name_type,
                template_type,
                modifiers_type,
            },
        )
    }

    fn get_type_from_template_literal_type_node(&mut self, node: NodeId) -> TypeId {
        let ast = self.ast;
        let NodePayload::TemplateLiteral { head, spans } = &ast.node(node).payload else {
            return self.types.error_type;
        };
        let mut texts = vec![ast.text(*head).to_string()];
        let mut types = Vec::with_capacity(spans.len());
        for span in spans.iter() {
            if let NodePayload::TemplateSpan { expression, literal } = &ast.node(span).payload {
                types.push(self.get_type_from_type_node(*expression));
                texts.push(ast.text(*literal).to_string());
            }
        }
        if types.is_empty() {
            return self.types.get_string_literal_type(&texts[0]);
        }
        self.types.get_template_literal_type(texts, types)
    }

    /// `this` inside a class or interface.
    fn get_this_type(&mut self, node: NodeId) -> TypeId {
        let ast = self.ast;
        let container = find_ancestor(ast, ast.parent(node), |n| {
            is_class_like(ast, n) || ast.kind(n) == SyntaxKind::InterfaceDeclaration
        });
        let Some(symbol) = container.and_then(|c| ast.symbol(c)) else {
            return self.types.error_type;
        };
        let declared = self.get_declared_type_of_symbol(symbol);
        match &self.types.get(declared).kind {
            TypeKind::Object(ObjectData {
                shape: ObjectShape::Interface(data),
                ..
            }) => data.this_type.unwrap_or(declared),
            _ => declared,
        }
    }

    // ========================================================================
    // Declared types
    // ========================================================================

    /// The type a type-meaning symbol declares.
    pub fn get_declared_type_of_symbol(&mut self, symbol: SymbolId) -> TypeId {
        let flags = self.symbol(symbol).flags;
        if flags.intersects(SymbolFlags::CLASS | SymbolFlags::INTERFACE) {
            return self.get_declared_type_of_class_or_interface(symbol);
        }
        if flags.intersects(SymbolFlags::TYPE_ALIAS) {
            return self.get_declared_type_of_type_alias(symbol);
        }
        if flags.intersects(SymbolFlags::TYPE_PARAMETER) {
            return self.get_declared_type_of_type_parameter(symbol);
        }
        if flags.intersects(SymbolFlags::ENUM) {
            return self.get_declared_type_of_enum(symbol);
        }
        if flags.intersects(SymbolFlags::ENUM_MEMBER) {
            return self.get_declared_type_of_enum_member(symbol);
        }
        if flags.intersects(SymbolFlags::ALIAS) {
            return match self.resolve_alias(symbol) {
                Some(target) => self.get_declared_type_of_symbol(target),
                None => self.types.error_type,
            };
        }
        self.types.error_type
    }

    fn get_declared_type_of_class_or_interface(&mut self, symbol: SymbolId) -> TypeId {
        if let Some(t) = self.declared_type_links.try_get(symbol).and_then(|l| l.declared_type) {
            return t;
        }
        let ast = self.ast;
        let declarations = self.symbol(symbol).declarations.clone();
        let kind = if self.symbol(symbol).has_flags(SymbolFlags::CLASS) {
            ObjectFlags::CLASS
        } else {
            ObjectFlags::INTERFACE
        };
        let outer = match declarations.first() {
            Some(&first) => self.get_outer_type_parameters(first),
            None => Vec::new(),
        };
        let mut local_symbols: Vec<SymbolId> = Vec::new();
        for declaration in declarations {
            let is_generic_declaration =
                is_class_like(ast, declaration) || ast.kind(declaration) == SyntaxKind::InterfaceDeclaration;
            if !is_generic_declaration {
                continue;
            }
            for tp in ast.type_parameters(declaration).into_iter().flatten() {
                if let Some(tp_symbol) = ast.symbol(tp) {
                    if !local_symbols.contains(&tp_symbol) {
                        local_symbols.push(tp_symbol);
                    }
                }
            }
        }
        let local: Vec<TypeId> = local_symbols
            .into_iter()
            .map(|s| self.get_declared_type_of_type_parameter(s))
            .collect();
        let t = self.types.create_interface_type(kind, symbol, outer, local);
        let this_type = self.types.create_type_parameter(Some(symbol));
        if let TypeKind::TypeParameter(data) = &mut self.types.get_mut(this_type).kind {
            data.is_this_type = true;
            data.constraint = Some(t);
        }
        if let TypeKind::Object(ObjectData {
            shape: ObjectShape::Interface(data),
            ..
        }) = &mut self.types.get_mut(t).kind
        {
            data.this_type = Some(this_type);
        }
        self.declared_type_links.get_or_insert(symbol).declared_type = Some(t);
        trace!(symbol = symbol.0, "declared class or interface type");
        t
    }

    /// The declared type of a type alias, with a cycle through the
    /// alias body reported once on the alias name.
    pub(crate) fn get_declared_type_of_type_alias(&mut self, symbol: SymbolId) -> TypeId {
        if let Some(t) = self.type_alias_links.try_get(symbol).and_then(|l| l.declared_type) {
            return t;
        }
        let ast = self.ast;
        let Some(declaration) = self
            .symbol(symbol)
            .declarations
            .iter()
            .copied()
            .find(|&d| ast.kind(d) == SyntaxKind::TypeAliasDeclaration)
        else {
            return self.types.error_type;
        };
        if !self.push_type_resolution(ResolutionTarget::DeclaredType(symbol)) {
            return self.types.error_type;
        }
        let type_parameter_symbols: Vec<SymbolId> = ast
            .type_parameters(declaration)
            .into_iter()
            .flatten()
            .filter_map(|tp| ast.symbol(tp))
            .collect();
        let type_parameters: Vec<TypeId> = type_parameter_symbols
            .into_iter()
            .map(|s| self.get_declared_type_of_type_parameter(s))
            .collect();
        self.type_alias_links.get_or_insert(symbol).type_parameters = type_parameters.clone();

        let mut t = match ast.type_node(declaration) {
            Some(type_node) => {
                let t = self.get_type_from_type_node(type_node);
                if is_fresh_aliasable_kind(ast.kind(type_node)) && self.types.get(t).alias.is_none() {
                    self.types.set_alias(
                        t,
                        TypeAlias {
                            symbol,
                            type_arguments: type_parameters,
                        },
                    );
                }
                t
            }
            None => self.types.error_type,
        };
        if !self.pop_type_resolution() {
            let name = self.declaration_name_to_string(ast.name(declaration));
            let location = ast.name(declaration).unwrap_or(declaration);
            self.error(location, &messages::TYPE_ALIAS_0_CIRCULARLY_REFERENCES_ITSELF, &[name]);
            t = self.types.error_type;
        }
        let links = self.type_alias_links.get_or_insert(symbol);
        match links.declared_type {
            Some(existing) => existing,
            None => {
                links.declared_type = Some(t);
                t
            }
        }
    }

    pub(crate) fn get_declared_type_of_type_parameter(&mut self, symbol: SymbolId) -> TypeId {
        if let Some(t) = self.declared_type_links.try_get(symbol).and_then(|l| l.declared_type) {
            return t;
        }
        let t = self.types.create_type_parameter(Some(symbol));
        self.declared_type_links.get_or_insert(symbol).declared_type = Some(t);
        t
    }

    fn type_parameter_declaration(&self, tp: TypeId) -> Option<NodeId> {
        let ast = self.ast;
        let symbol = self.types.get(tp).symbol?;
        self.symbol(symbol)
            .declarations
            .iter()
            .copied()
            .find(|&d| ast.kind(d) == SyntaxKind::TypeParameter)
    }

    /// The `extends` constraint of a type parameter. A constraint that
    /// leads back to the parameter is reported and replaced by `error`.
    pub fn get_constraint_of_type_parameter(&mut self, tp: TypeId) -> Option<TypeId> {
        let data = self.types.get(tp).as_type_parameter();
        if data.constraint.is_some() || data.is_this_type {
            return data.constraint;
        }
        if let (Some(target), Some(mapper)) = (data.target, data.mapper) {
            let constraint = self.get_constraint_of_type_parameter(target)?;
            let instantiated = self.instantiate_type(constraint, mapper);
            self.types.set_type_parameter_constraint(tp, instantiated);
            return Some(instantiated);
        }
        let ast = self.ast;
        let declaration = self.type_parameter_declaration(tp)?;
        let NodePayload::TypeParameter {
            constraint: Some(constraint_node),
            ..
        } = &ast.node(declaration).payload
        else {
            return None;
        };
        let constraint_node = *constraint_node;
        if !self.push_type_resolution(ResolutionTarget::TypeParameterConstraint(tp)) {
            return None;
        }
        let mut constraint = self.get_type_from_type_node(constraint_node);
        if self.types.is_type_parameter(constraint) {
            self.get_constraint_of_type_parameter(constraint);
        }
        if !self.pop_type_resolution() || constraint == tp {
            let name = self.declaration_name_to_string(ast.name(declaration));
            self.error(constraint_node, &messages::TYPE_PARAMETER_0_HAS_A_CIRCULAR_CONSTRAINT, &[name]);
            constraint = self.types.error_type;
        }
        if self.types.get(tp).as_type_parameter().constraint.is_none() {
            self.types.set_type_parameter_constraint(tp, constraint);
        }
        self.types.get(tp).as_type_parameter().constraint
    }

    pub fn get_default_from_type_parameter(&mut self, tp: TypeId) -> Option<TypeId> {
        if let Some(default) = self.types.get(tp).as_type_parameter().default {
            return Some(default);
        }
        let ast = self.ast;
        let declaration = self.type_parameter_declaration(tp)?;
        let NodePayload::TypeParameter {
            default: Some(default_node),
            ..
        } = &ast.node(declaration).payload
        else {
            return None;
        };
        let default = self.get_type_from_type_node(*default_node);
        if let TypeKind::TypeParameter(data) = &mut self.types.get_mut(tp).kind {
            data.default = Some(default);
        }
        Some(default)
    }

    /// Type parameters of the declarations enclosing `node`, outermost
    /// first.
    pub(crate) fn get_outer_type_parameters(&mut self, node: NodeId) -> Vec<TypeId> {
        if let Some(cached) = self
            .type_node_links
            .try_get(node)
            .and_then(|links| links.outer_type_parameters.clone())
        {
            return cached;
        }
        let ast = self.ast;
        let mut containers = Vec::new();
        let mut child = node;
        let mut current = ast.parent(node);
        while let Some(container) = current {
            let symbols: Vec<SymbolId> = match &ast.node(container).payload {
                NodePayload::FunctionLike(_) | NodePayload::ClassLike(_) | NodePayload::TypeAlias { .. } => ast
                    .type_parameters(container)
                    .into_iter()
                    .flatten()
                    .filter_map(|tp| ast.symbol(tp))
                    .collect(),
                NodePayload::MappedType { type_parameter, .. } => ast.symbol(*type_parameter).into_iter().collect(),
                NodePayload::ConditionalType { true_type, .. } if *true_type == child => self
                    .binding
                    .locals(container)
                    .map(|locals| locals.iter().map(|(_, s)| s).collect())
                    .unwrap_or_default(),
                _ => Vec::new(),
            };
            if !symbols.is_empty() {
                containers.push(symbols);
            }
            child = container;
            current = ast.parent(container);
        }
        let mut result = Vec::new();
        for symbols in containers.into_iter().rev() {
            for symbol in symbols {
                result.push(self.get_declared_type_of_type_parameter(symbol));
            }
        }
        self.type_node_links.get_or_insert(node).outer_type_parameters = Some(result.clone());
        result
    }

    /// Types named in the `extends` clauses of a class or interface.
    pub fn get_base_types(&mut self, t: TypeId) -> Vec<TypeId> {
        let ty = self.types.get(t);
        let Some(symbol) = ty.symbol.filter(|_| ty.object_flags.intersects(ObjectFlags::CLASS_OR_INTERFACE)) else {
            return Vec::new();
        };
        if self.declared_type_links.try_get(symbol).is_some_and(|l| l.base_types_resolved) {
            return self.types.get(t).as_interface().base_types.clone();
        }
        if !self.push_type_resolution(ResolutionTarget::BaseTypes(symbol)) {
            return Vec::new();
        }
        let ast = self.ast;
        let mut heritage_types = Vec::new();
        for declaration in self.symbol(symbol).declarations.clone() {
            for clause in ast.heritage_clauses(declaration).into_iter().flatten() {
                if let NodePayload::HeritageClause {
                    token: SyntaxKind::ExtendsKeyword,
                    types,
                } = &ast.node(clause).payload
                {
                    heritage_types.extend(types.iter());
                }
            }
        }
        let mut base_types = Vec::new();
        for node in heritage_types {
            let base = self.get_type_from_type_node(node);
            if self.types.get(base).flags.intersects(TypeFlags::OBJECT | TypeFlags::INTERSECTION) {
                base_types.push(base);
            }
        }
        if !self.pop_type_resolution() {
            let name = self.symbol_name(symbol);
            if let Some(declaration) = self.symbol(symbol).first_declaration() {
                let location = ast.name(declaration).unwrap_or(declaration);
                self.error(location, &messages::TYPE_0_RECURSIVELY_REFERENCES_ITSELF_AS_A_BASE_TYPE, &[name]);
            }
            base_types.clear();
        }
        if let TypeKind::Object(ObjectData {
            shape: ObjectShape::Interface(data),
            ..
        }) = &mut self.types.get_mut(t).kind
        {
            data.base_types = base_types.clone();
        }
        self.declared_type_links.get_or_insert(symbol).base_types_resolved = true;
        base_types
    }

    // ========================================================================
    // Instantiation
    // ========================================================================

    /// Substitute type parameters in `t` through `mapper`.
    pub fn instantiate_type(&mut self, t: TypeId, mapper: MapperId) -> TypeId {
        let ast = self.ast;
        let binding = self.binding;
        let ty = self.types.get(t);
        let flags = ty.flags;
        if !flags.intersects(TypeFlags::TYPE_PARAMETER | TypeFlags::OBJECT | TypeFlags::UNION_OR_INTERSECTION | TypeFlags::INSTANTIABLE)
        {
            return t;
        }
        match ty.kind.clone() {
            TypeKind::TypeParameter(_) => self.types.map_type(mapper, t),
            TypeKind::Union(data) => {
                let types: Vec<TypeId> = data.types.iter().map(|&m| self.instantiate_type(m, mapper)).collect();
                self.types.get_union_type(ast, binding, &types)
            }
            TypeKind::Intersection { types } => {
                let types: Vec<TypeId> = types.iter().map(|&m| self.instantiate_type(m, mapper)).collect();
                self.types.get_intersection_type(ast, binding, &types)
            }
            TypeKind::Index { target, .. } => {
                let target = self.instantiate_type(target, mapper);
                self.get_index_type(target)
            }
            TypeKind::IndexedAccess {
                object_type,
                index_type,
                ..
            } => {
                let object = self.instantiate_type(object_type, mapper);
                let index = self.instantiate_type(index_type, mapper);
                self.get_indexed_access_type(object, index)
            }
            TypeKind::Conditional(data) => {
                if let Some(&cached) = self.instantiations.get(&(t, mapper)) {
                    return cached;
                }
                let combined = self.types.merge_type_mappers(data.mapper, mapper);
                let result = self.types.create_conditional_type(data.root.clone(), Some(combined));
                self.instantiations.insert((t, mapper), result);
                result
            }
            TypeKind::Substitution { base_type, constraint } => {
                let base = self.instantiate_type(base_type, mapper);
                let constraint = self.instantiate_type(constraint, mapper);
                self.types.get_substitution_type(base, constraint)
            }
            TypeKind::TemplateLiteral { texts, types } => {
                let types = types.iter().map(|&m| self.instantiate_type(m, mapper)).collect();
                self.types.get_template_literal_type(texts, types)
            }
            TypeKind::StringMapping { target } => {
                let target = self.instantiate_type(target, mapper);
                match self.types.get(t).symbol {
                    Some(symbol) => self.types.get_string_mapping_type(symbol, target),
                    None => t,
                }
            }
            TypeKind::Object(data) => self.instantiate_object_type(t, data, mapper),
            _ => t,
        }
    }

    fn instantiate_object_type(&mut self, t: TypeId, data: ObjectData, mapper: MapperId) -> TypeId {
        match &data.shape {
            ObjectShape::Reference(reference) => {
                let arguments = if reference.node.is_some() && reference.resolved_type_arguments.is_empty() {
                    self.get_type_arguments(t)
                } else {
                    reference.resolved_type_arguments.clone()
                };
                let mapped = arguments.iter().map(|&a| self.instantiate_type(a, mapper)).collect();
                self.types.create_type_reference(reference.target, mapped)
            }
            ObjectShape::Interface(interface) if !interface.type_parameters.is_empty() => {
                let mapped = interface
                    .type_parameters
                    .iter()
                    .map(|&a| self.instantiate_type(a, mapper))
                    .collect();
                self.types.create_type_reference(t, mapped)
            }
            ObjectShape::Anonymous { .. } | ObjectShape::Mapped(_) | ObjectShape::SingleSignature { .. } => {
                if let Some(&cached) = self.instantiations.get(&(t, mapper)) {
                    return cached;
                }
                let ty = self.types.get(t);
                let symbol = ty.symbol;
                let object_flags = ty.object_flags | ObjectFlags::INSTANTIATED;
                let target = data.target.unwrap_or(t);
                let combined = self.types.merge_type_mappers(data.mapper, mapper);
                let mut shape = data.shape.clone();
                if let ObjectShape::Mapped(mapped) = &mut shape {
                    mapped.constraint_type = mapped.constraint_type.map(|c| self.instantiate_type(c, mapper));
                    mapped.modifiers_type = mapped.modifiers_type.map(|c| self.instantiate_type(c, mapper));
                }
                let result = self.types.create_object_type(object_flags, symbol, shape);
                if let TypeKind::Object(object) = &mut self.types.get_mut(result).kind {
                    object.target = Some(target);
                    object.mapper = Some(combined);
                }
                self.instantiations.insert((t, mapper), result);
                result
            }
            _ => t,
        }
    }
}

/// Property name of a numeric key, `1` rather than `1.0`.
pub(crate) fn number_to_property_name(value: f64) -> String {
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value.fract() == 0.0 && value.abs() < 1e21 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

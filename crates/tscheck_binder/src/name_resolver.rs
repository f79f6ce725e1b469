//! Lexical name resolution.
//!
//! `NameResolver` walks outward from a reference through the scopes the
//! binder built and returns the first symbol whose flags match the
//! requested meaning. Checker-specific behavior (reporting, alias-aware
//! lookup, caches) is injected through `NameResolverHost`.

use crate::binder::Binding;
use crate::symbol::{internal_names, SymbolTable};
use tscheck_ast::types::{ModifierFlags, NodeFlags, NodeId, SymbolFlags, SymbolId};
use tscheck_ast::utilities::*;
use tscheck_ast::{Ast, NodePayload, SyntaxKind};
use tscheck_core::{InternedString, Tristate};
use tscheck_diagnostics::{messages, DiagnosticMessage};
use tscheck_options::{CompilerOptions, ScriptTarget};
use tracing::trace;

/// Hooks a resolver client provides. Every method has a default so a
/// host only overrides what it needs.
pub trait NameResolverHost {
    fn error(&mut self, _location: NodeId, _message: &DiagnosticMessage, _args: &[&str]) {}

    /// Called once per resolution that counts as a use of `symbol`.
    fn symbol_referenced(&mut self, _symbol: SymbolId, _meaning: SymbolFlags) {}

    /// Return `true` to suppress the result for a name referenced from an
    /// instance property initializer that a constructor parameter shadows.
    fn on_property_with_invalid_initializer(
        &mut self,
        _location: NodeId,
        _name: &str,
        _declaration: NodeId,
        _result: Option<SymbolId>,
    ) -> bool {
        false
    }

    fn on_failed_to_resolve_symbol(
        &mut self,
        _location: NodeId,
        _name: &str,
        _meaning: SymbolFlags,
        _message: &DiagnosticMessage,
    ) {
    }

    #[allow(clippy::too_many_arguments)]
    fn on_successfully_resolved_symbol(
        &mut self,
        _location: NodeId,
        _result: SymbolId,
        _meaning: SymbolFlags,
        _last_location: Option<NodeId>,
        _associated_declaration: Option<NodeId>,
        _within_deferred_context: bool,
    ) {
    }

    /// Find `name` in `table` when it has any of the `meaning` flags.
    fn lookup(
        &mut self,
        binding: &Binding,
        table: &SymbolTable,
        name: InternedString,
        meaning: SymbolFlags,
    ) -> Option<SymbolId> {
        if meaning.is_empty() {
            return None;
        }
        table
            .get(name)
            .filter(|&symbol| binding.symbol(symbol).flags.intersects(meaning))
    }

    fn get_requires_scope_change_cache(&mut self, _function: NodeId) -> Tristate {
        Tristate::Unknown
    }

    fn set_requires_scope_change_cache(&mut self, _function: NodeId, _value: Tristate) {}

    fn arguments_symbol(&mut self, binding: &Binding) -> SymbolId {
        binding.arguments_symbol
    }
}

/// A host that reports nothing and uses the plain table lookup.
#[derive(Debug, Default)]
pub struct DefaultHost;

impl NameResolverHost for DefaultHost {}

/// Resolves identifiers against the scopes of a bound program.
pub struct NameResolver<'a> {
    ast: &'a Ast,
    binding: &'a Binding,
    options: &'a CompilerOptions,
}

impl<'a> NameResolver<'a> {
    pub fn new(ast: &'a Ast, binding: &'a Binding, options: &'a CompilerOptions) -> Self {
        Self { ast, binding, options }
    }

    /// Resolve `name` as seen from `location`.
    ///
    /// With a `message`, failures and scoping errors are reported through
    /// the host. `is_use` marks the result as referenced unless the name
    /// refers to the declaration it appears in. `exclude_globals` skips
    /// the global table.
    #[allow(clippy::too_many_arguments)]
    pub fn resolve<H: NameResolverHost + ?Sized>(
        &self,
        host: &mut H,
        location: NodeId,
        name: &str,
        meaning: SymbolFlags,
        message: Option<&DiagnosticMessage>,
        is_use: bool,
        exclude_globals: bool,
    ) -> Option<SymbolId> {
        let ast = self.ast;
        let binding = self.binding;
        let key = ast.interner().intern(name);
        let original_location = location;
        let name_is_const = name == "const";

        let mut result: Option<SymbolId> = None;
        let mut last_location: Option<NodeId> = None;
        let mut last_self_reference_location: Option<NodeId> = None;
        let mut property_with_invalid_initializer: Option<NodeId> = None;
        let mut associated_declaration: Option<NodeId> = None;
        let mut within_deferred_context = false;
        let mut current = Some(location);

        'walk: while let Some(mut location) = current {
            if name_is_const && is_const_assertion(ast, location) {
                // `as const` names no symbol.
                return None;
            }
            if matches!(
                ast.kind(location),
                SyntaxKind::ModuleDeclaration | SyntaxKind::EnumDeclaration
            ) && last_location.is_some()
                && ast.name(location) == last_location
            {
                // The name of a namespace or enum is not in its own scope.
                last_location = Some(location);
                match ast.parent(location) {
                    Some(parent) => location = parent,
                    None => break 'walk,
                }
            }

            if let Some(locals) = binding.locals(location) {
                if !is_global_source_file(ast, location) {
                    result = host.lookup(binding, locals, key, meaning);
                    if let Some(found) = result {
                        if self.use_locals_result(host, found, location, last_location, meaning) {
                            break 'walk;
                        }
                        result = None;
                    }
                }
            }

            within_deferred_context = within_deferred_context || is_deferred_context(ast, location, last_location);

            'switch: {
                match ast.kind(location) {
                    SyntaxKind::SourceFile | SyntaxKind::ModuleDeclaration => {
                        let is_file = ast.kind(location) == SyntaxKind::SourceFile;
                        if is_file && !is_external_module(ast, location) {
                            break 'switch;
                        }
                        let Some(module_exports) = ast.symbol(location).and_then(|s| binding.exports(s)) else {
                            break 'switch;
                        };
                        let is_external = is_file
                            || (ast.flags(location).contains(NodeFlags::AMBIENT)
                                && !is_global_scope_augmentation(ast, location));
                        if is_external {
                            // A default export whose local name matches.
                            let default_key = ast.interner().intern(internal_names::DEFAULT);
                            if let Some(default_export) = module_exports.get(default_key) {
                                let local = local_symbol_for_export_default(ast, binding, default_export);
                                if let Some(local) = local {
                                    if binding.symbol(default_export).flags.intersects(meaning)
                                        && binding.symbol(local).name == key
                                    {
                                        result = Some(default_export);
                                        break 'walk;
                                    }
                                }
                            }
                            // An export specifier does not put a member in scope.
                            if let Some(module_export) = module_exports.get(key) {
                                let export_symbol = binding.symbol(module_export);
                                let is_pure_specifier = export_symbol.flags == SymbolFlags::ALIAS
                                    && export_symbol.declarations.iter().any(|&d| {
                                        matches!(
                                            ast.kind(d),
                                            SyntaxKind::ExportSpecifier | SyntaxKind::NamespaceExport
                                        )
                                    });
                                if is_pure_specifier {
                                    break 'switch;
                                }
                            }
                        }
                        if name != internal_names::DEFAULT {
                            result = host.lookup(binding, module_exports, key, meaning & SymbolFlags::MODULE_MEMBER);
                            if result.is_some() {
                                break 'walk;
                            }
                        }
                    }
                    SyntaxKind::EnumDeclaration => {
                        let Some(enum_symbol) = ast.symbol(location) else {
                            break 'switch;
                        };
                        let Some(exports) = binding.exports(enum_symbol) else {
                            break 'switch;
                        };
                        result = host.lookup(binding, exports, key, meaning & SymbolFlags::ENUM_MEMBER);
                        if let Some(member) = result {
                            let member_file = binding
                                .symbol(member)
                                .value_declaration
                                .map(|d| ast.source_file_of(d));
                            if message.is_some()
                                && self.options.isolated_modules_enabled()
                                && !ast.flags(location).contains(NodeFlags::AMBIENT)
                                && member_file != Some(ast.source_file_of(location))
                            {
                                let enum_name = ast.interner().resolve(binding.symbol(enum_symbol).name);
                                let qualified = format!("{}.{}", enum_name, name);
                                host.error(
                                    original_location,
                                    &messages::CANNOT_ACCESS_0_FROM_ANOTHER_FILE_WITHOUT_QUALIFICATION_WHEN_1_IS_ENABLED_USE_2_INSTEAD,
                                    &[name, self.options.isolated_modules_flag_name(), qualified.as_str()],
                                );
                            }
                            break 'walk;
                        }
                    }
                    SyntaxKind::PropertyDeclaration => {
                        if !is_static(ast, location) {
                            let ctor_locals = ast
                                .parent(location)
                                .and_then(|class| find_constructor_declaration(ast, class))
                                .and_then(|ctor| binding.locals(ctor));
                            if let Some(locals) = ctor_locals {
                                if host.lookup(binding, locals, key, meaning & SymbolFlags::VALUE).is_some() {
                                    property_with_invalid_initializer = Some(location);
                                }
                            }
                        }
                    }
                    SyntaxKind::ClassDeclaration | SyntaxKind::ClassExpression | SyntaxKind::InterfaceDeclaration => {
                        let members = ast.symbol(location).and_then(|s| binding.members(s));
                        if let Some(members) = members {
                            result = host.lookup(binding, members, key, meaning & SymbolFlags::TYPE);
                        }
                        if let Some(found) = result {
                            if !is_type_parameter_symbol_declared_in_container(ast, binding, found, location) {
                                result = None;
                                break 'switch;
                            }
                            if last_location.is_some_and(|last| is_static(ast, last)) {
                                if message.is_some() {
                                    host.error(
                                        original_location,
                                        &messages::STATIC_MEMBERS_CANNOT_REFERENCE_CLASS_TYPE_PARAMETERS,
                                        &[],
                                    );
                                }
                                return None;
                            }
                            break 'walk;
                        }
                        if ast.kind(location) == SyntaxKind::ClassExpression && meaning.intersects(SymbolFlags::CLASS) {
                            if let Some(class_name) = ast.name(location) {
                                if ast.text(class_name) == name {
                                    result = ast.symbol(location);
                                    break 'walk;
                                }
                            }
                        }
                    }
                    SyntaxKind::ExpressionWithTypeArguments => {
                        let Some(heritage) = ast.parent(location) else {
                            break 'switch;
                        };
                        let is_extends = matches!(
                            &ast.node(heritage).payload,
                            NodePayload::HeritageClause { token: SyntaxKind::ExtendsKeyword, .. }
                        );
                        if last_location.is_some() && last_location == ast.expression(location) && is_extends {
                            let Some(container) = ast.parent(heritage) else {
                                break 'switch;
                            };
                            if is_class_like(ast, container) {
                                let members = ast.symbol(container).and_then(|s| binding.members(s));
                                let found =
                                    members.and_then(|m| host.lookup(binding, m, key, meaning & SymbolFlags::TYPE));
                                if found.is_some() {
                                    if message.is_some() {
                                        host.error(
                                            original_location,
                                            &messages::BASE_CLASS_EXPRESSIONS_CANNOT_REFERENCE_CLASS_TYPE_PARAMETERS,
                                            &[],
                                        );
                                    }
                                    return None;
                                }
                            }
                        }
                    }
                    // A class's own type parameters are not in scope in its
                    // computed property names.
                    SyntaxKind::ComputedPropertyName => {
                        let Some(grandparent) = ast.parent(location).and_then(|p| ast.parent(p)) else {
                            break 'switch;
                        };
                        if is_class_like(ast, grandparent) || ast.kind(grandparent) == SyntaxKind::InterfaceDeclaration {
                            let members = ast.symbol(grandparent).and_then(|s| binding.members(s));
                            let found = members.and_then(|m| host.lookup(binding, m, key, meaning & SymbolFlags::TYPE));
                            if found.is_some() {
                                if message.is_some() {
                                    host.error(
                                        original_location,
                                        &messages::A_COMPUTED_PROPERTY_NAME_CANNOT_REFERENCE_A_TYPE_PARAMETER_FROM_ITS_CONTAINING_TYPE,
                                        &[],
                                    );
                                }
                                return None;
                            }
                        }
                    }
                    // Arrow functions have no `arguments` from ES2015 on.
                    SyntaxKind::ArrowFunction if self.options.emit_script_target() >= ScriptTarget::ES2015 => {}
                    SyntaxKind::ArrowFunction
                    | SyntaxKind::MethodDeclaration
                    | SyntaxKind::Constructor
                    | SyntaxKind::GetAccessor
                    | SyntaxKind::SetAccessor
                    | SyntaxKind::FunctionDeclaration => {
                        if meaning.intersects(SymbolFlags::VARIABLE) && name == internal_names::ARGUMENTS {
                            result = Some(host.arguments_symbol(binding));
                            break 'walk;
                        }
                    }
                    SyntaxKind::FunctionExpression => {
                        if meaning.intersects(SymbolFlags::VARIABLE) && name == internal_names::ARGUMENTS {
                            result = Some(host.arguments_symbol(binding));
                            break 'walk;
                        }
                        if meaning.intersects(SymbolFlags::FUNCTION) {
                            if let Some(function_name) = ast.name(location) {
                                if ast.text(function_name) == name {
                                    result = ast.symbol(location);
                                    break 'walk;
                                }
                            }
                        }
                    }
                    SyntaxKind::Decorator => {
                        // Parameter decorators resolve at the member, member
                        // and class decorators outside the class.
                        if let Some(parent) = ast.parent(location) {
                            if ast.kind(parent) == SyntaxKind::Parameter {
                                location = parent;
                            }
                        }
                        if let Some(parent) = ast.parent(location) {
                            if is_class_element(ast, parent) || ast.kind(parent) == SyntaxKind::ClassDeclaration {
                                location = parent;
                            }
                        }
                    }
                    SyntaxKind::Parameter => {
                        if is_initializer_or_binding_name(ast, location, last_location) && associated_declaration.is_none() {
                            associated_declaration = Some(location);
                        }
                    }
                    SyntaxKind::BindingElement => {
                        if is_initializer_or_binding_name(ast, location, last_location)
                            && is_part_of_parameter_declaration(ast, location)
                            && associated_declaration.is_none()
                        {
                            associated_declaration = Some(location);
                        }
                    }
                    SyntaxKind::InferType => {
                        if meaning.intersects(SymbolFlags::TYPE_PARAMETER) {
                            if let NodePayload::InferType { type_parameter } = &ast.node(location).payload {
                                let matches_name = ast.name(*type_parameter).is_some_and(|n| ast.text(n) == name);
                                if matches_name {
                                    result = ast.symbol(*type_parameter);
                                    break 'walk;
                                }
                            }
                        }
                    }
                    SyntaxKind::ExportSpecifier => {
                        // `export { a as b } from "m"`: `a` names a member of "m".
                        let declaration = ast.parent(location).and_then(|clause| ast.parent(clause));
                        if let Some(declaration) = declaration {
                            let has_module_specifier = matches!(
                                &ast.node(declaration).payload,
                                NodePayload::ExportDeclaration { module_specifier: Some(_), .. }
                            );
                            if last_location.is_some()
                                && last_location == ast.property_name(location)
                                && has_module_specifier
                            {
                                if let Some(outer) = ast.parent(declaration) {
                                    location = outer;
                                }
                            }
                        }
                    }
                    _ => {}
                }
            }

            if is_self_reference_location(ast, location, last_location) {
                last_self_reference_location = Some(location);
            }
            last_location = Some(location);
            current = ast.parent(location);
        }

        // A reference from inside the declaration it names is not a use.
        if is_use {
            if let Some(found) = result {
                let is_self_reference =
                    last_self_reference_location.is_some_and(|l| ast.symbol(l) == Some(found));
                if !is_self_reference {
                    host.symbol_referenced(found, meaning);
                }
            }
        }

        if result.is_none() && !exclude_globals {
            result = host.lookup(binding, &binding.globals, key, meaning | SymbolFlags::GLOBAL_LOOKUP);
        }

        match result {
            Some(found) => trace!(name = %name, symbol = found.0, "resolved name"),
            None => trace!(name = %name, "unresolved name"),
        }

        if let Some(message) = message {
            if let Some(property) = property_with_invalid_initializer {
                if host.on_property_with_invalid_initializer(original_location, name, property, result) {
                    return None;
                }
            }
            match result {
                None => host.on_failed_to_resolve_symbol(original_location, name, meaning, message),
                Some(found) => host.on_successfully_resolved_symbol(
                    original_location,
                    found,
                    meaning,
                    last_location,
                    associated_declaration,
                    within_deferred_context,
                ),
            }
        }
        result
    }

    /// Scoping rules for a name found in the locals of `location`.
    fn use_locals_result<H: NameResolverHost + ?Sized>(
        &self,
        host: &mut H,
        result: SymbolId,
        location: NodeId,
        last_location: Option<NodeId>,
        meaning: SymbolFlags,
    ) -> bool {
        let ast = self.ast;
        let flags = self.binding.symbol(result).flags;
        if is_function_like(ast, location) {
            let Some(last) = last_location else {
                return true;
            };
            if Some(last) == ast.body(location) {
                return true;
            }
            let mut use_result = true;
            // Type parameters are in scope in the whole signature; local
            // types only in the body.
            if !(meaning & flags & SymbolFlags::TYPE).is_empty() {
                use_result = flags.intersects(SymbolFlags::TYPE_PARAMETER)
                    && (ast.flags(last).contains(NodeFlags::SYNTHESIZED)
                        || Some(last) == ast.type_node(location)
                        || ast.kind(last) == SyntaxKind::Parameter);
            }
            if !(meaning & flags & SymbolFlags::VARIABLE).is_empty() {
                if self.use_outer_variable_scope_in_parameter(host, result, location, last) {
                    use_result = false;
                } else if flags.intersects(SymbolFlags::FUNCTION_SCOPED_VARIABLE) {
                    // Parameters are visible in the body, the parameter list
                    // and the return type.
                    let declared_in_parameter = self
                        .binding
                        .symbol(result)
                        .value_declaration
                        .and_then(|d| find_ancestor(ast, Some(d), |n| ast.kind(n) == SyntaxKind::Parameter))
                        .is_some();
                    use_result = ast.kind(last) == SyntaxKind::Parameter
                        || ast.flags(last).contains(NodeFlags::SYNTHESIZED)
                        || (Some(last) == ast.type_node(location) && declared_in_parameter);
                }
            }
            return use_result;
        }
        if ast.kind(location) == SyntaxKind::ConditionalType {
            // `infer T` is visible only in the true branch.
            return last_location.is_some_and(|last| {
                matches!(
                    &ast.node(location).payload,
                    NodePayload::ConditionalType { true_type, .. } if *true_type == last
                )
            });
        }
        true
    }

    /// From ES2015 on, a parameter initializer sees the outer scope rather
    /// than the function body, unless emit has to move the parameter into
    /// the body.
    fn use_outer_variable_scope_in_parameter<H: NameResolverHost + ?Sized>(
        &self,
        host: &mut H,
        result: SymbolId,
        location: NodeId,
        last_location: NodeId,
    ) -> bool {
        let ast = self.ast;
        if ast.kind(last_location) != SyntaxKind::Parameter {
            return false;
        }
        let (Some(body), Some(declaration)) = (ast.body(location), self.binding.symbol(result).value_declaration)
        else {
            return false;
        };
        let body_range = ast.range(body);
        let declaration_range = ast.range(declaration);
        if declaration_range.pos < body_range.pos || declaration_range.end > body_range.end {
            return false;
        }
        if self.options.emit_script_target() < ScriptTarget::ES2015 {
            return false;
        }
        let mut requires_scope_change = host.get_requires_scope_change_cache(location);
        if requires_scope_change == Tristate::Unknown {
            let any = ast
                .parameters(location)
                .is_some_and(|params| params.iter().any(|p| self.requires_scope_change(p)));
            requires_scope_change = if any { Tristate::True } else { Tristate::False };
            host.set_requires_scope_change_cache(location, requires_scope_change);
        }
        requires_scope_change != Tristate::True
    }

    fn requires_scope_change(&self, parameter: NodeId) -> bool {
        let ast = self.ast;
        ast.name(parameter).is_some_and(|n| self.requires_scope_change_worker(n))
            || ast.initializer(parameter).is_some_and(|i| self.requires_scope_change_worker(i))
    }

    fn requires_scope_change_worker(&self, node: NodeId) -> bool {
        let ast = self.ast;
        let target = self.options.emit_script_target();
        match ast.kind(node) {
            SyntaxKind::ArrowFunction
            | SyntaxKind::FunctionExpression
            | SyntaxKind::FunctionDeclaration
            | SyntaxKind::Constructor => false,
            SyntaxKind::MethodDeclaration
            | SyntaxKind::GetAccessor
            | SyntaxKind::SetAccessor
            | SyntaxKind::PropertyAssignment => ast.name(node).is_some_and(|n| self.requires_scope_change_worker(n)),
            SyntaxKind::PropertyDeclaration => {
                if has_syntactic_modifier(ast, node, ModifierFlags::STATIC) {
                    !self.options.emit_standard_class_fields()
                } else {
                    ast.name(node).is_some_and(|n| self.requires_scope_change_worker(n))
                }
            }
            kind => {
                if is_nullish_coalesce(ast, node) || is_optional_chain(ast, node) {
                    return target < ScriptTarget::ES2020;
                }
                if kind == SyntaxKind::BindingElement
                    && ast.dot_dot_dot_token(node).is_some()
                    && ast.parent(node).is_some_and(|p| ast.kind(p) == SyntaxKind::ObjectBindingPattern)
                {
                    return target < ScriptTarget::ES2017;
                }
                if kind.is_type_node() {
                    return false;
                }
                ast.for_each_child(node, |child| self.requires_scope_change_worker(child))
            }
        }
    }
}

fn is_initializer_or_binding_name(ast: &Ast, location: NodeId, last_location: Option<NodeId>) -> bool {
    let Some(last) = last_location else {
        return false;
    };
    Some(last) == ast.initializer(location)
        || (Some(last) == ast.name(location) && is_binding_pattern_kind(ast.kind(last)))
}

fn local_symbol_for_export_default(ast: &Ast, binding: &Binding, symbol: SymbolId) -> Option<SymbolId> {
    let declarations = &binding.symbol(symbol).declarations;
    let first = declarations.first()?;
    if !has_syntactic_modifier(ast, *first, ModifierFlags::DEFAULT) {
        return None;
    }
    declarations.iter().find_map(|&d| ast.local_symbol(d))
}

/// Whether code at `location` runs later than the code around it.
fn is_deferred_context(ast: &Ast, location: NodeId, last_location: Option<NodeId>) -> bool {
    let kind = ast.kind(location);
    if kind != SyntaxKind::ArrowFunction && kind != SyntaxKind::FunctionExpression {
        // Instance property initializers run in the constructor.
        return kind == SyntaxKind::TypeQuery
            || ((is_function_like_declaration_kind(kind)
                || (kind == SyntaxKind::PropertyDeclaration && !is_static(ast, location)))
                && (last_location.is_none() || last_location != ast.name(location)));
    }
    if last_location.is_some() && last_location == ast.name(location) {
        return false;
    }
    // Generators and async functions are never inlined when invoked
    // immediately.
    if ast.asterisk_token(location).is_some() || has_syntactic_modifier(ast, location, ModifierFlags::ASYNC) {
        return true;
    }
    get_immediately_invoked_function_expression(ast, location).is_none()
}

fn is_type_parameter_symbol_declared_in_container(
    ast: &Ast,
    binding: &Binding,
    symbol: SymbolId,
    container: NodeId,
) -> bool {
    binding
        .symbol(symbol)
        .declarations
        .iter()
        .any(|&d| ast.kind(d) == SyntaxKind::TypeParameter && ast.parent(d) == Some(container))
}

fn is_self_reference_location(ast: &Ast, node: NodeId, last_location: Option<NodeId>) -> bool {
    match ast.kind(node) {
        SyntaxKind::Parameter => last_location.is_some() && last_location == ast.name(node),
        SyntaxKind::FunctionDeclaration
        | SyntaxKind::ClassDeclaration
        | SyntaxKind::InterfaceDeclaration
        | SyntaxKind::EnumDeclaration
        | SyntaxKind::TypeAliasDeclaration
        | SyntaxKind::ModuleDeclaration => true,
        _ => false,
    }
}

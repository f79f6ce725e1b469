//! Modifier and decorator legality.

use crate::checker::Checker;
use tscheck_ast::types::{ModifierFlags, NodeFlags, NodeId};
use tscheck_ast::utilities::*;
use tscheck_ast::{Ast, NodeList, SyntaxKind};
use tscheck_diagnostics::{messages, DiagnosticMessage};
use tscheck_options::ModuleKind;

/// Declarations where any decorator is an error.
fn can_have_illegal_decorators(kind: SyntaxKind) -> bool {
    matches!(
        kind,
        SyntaxKind::PropertyAssignment
            | SyntaxKind::ShorthandPropertyAssignment
            | SyntaxKind::FunctionDeclaration
            | SyntaxKind::Constructor
            | SyntaxKind::IndexSignature
            | SyntaxKind::ClassStaticBlockDeclaration
            | SyntaxKind::VariableStatement
            | SyntaxKind::InterfaceDeclaration
            | SyntaxKind::TypeAliasDeclaration
            | SyntaxKind::EnumDeclaration
            | SyntaxKind::ModuleDeclaration
            | SyntaxKind::ImportEqualsDeclaration
            | SyntaxKind::ImportDeclaration
            | SyntaxKind::NamespaceExportDeclaration
            | SyntaxKind::ExportDeclaration
            | SyntaxKind::ExportAssignment
    )
}

fn modifier_text(kind: SyntaxKind) -> &'static str {
    kind.keyword_text().unwrap_or("")
}

fn first_modifier(ast: &Ast, modifiers: &NodeList) -> Option<NodeId> {
    modifiers.iter().find(|&m| ast.kind(m).is_modifier_kind())
}

fn first_modifier_except(ast: &Ast, modifiers: &NodeList, allowed: SyntaxKind) -> Option<NodeId> {
    modifiers
        .iter()
        .find(|&m| ast.kind(m).is_modifier_kind() && ast.kind(m) != allowed)
}

/// `this` as the name of a parameter.
pub(crate) fn is_this_parameter(ast: &Ast, node: NodeId) -> bool {
    ast.kind(node) == SyntaxKind::Parameter
        && ast
            .name(node)
            .is_some_and(|n| ast.kind(n) == SyntaxKind::Identifier && ast.text(n) == "this")
}

fn has_decorators(ast: &Ast, node: NodeId) -> bool {
    ast.modifiers(node)
        .is_some_and(|m| m.iter().any(|m| ast.kind(m) == SyntaxKind::Decorator))
}

impl<'a> Checker<'a> {
    pub(crate) fn check_grammar_modifiers(&mut self, node: NodeId) -> bool {
        let ast = self.ast;
        let Some(modifiers) = ast.modifiers(node) else {
            return false;
        };
        if modifiers.is_empty() {
            return false;
        }
        if self.report_obvious_decorator_errors(node, modifiers) || self.report_obvious_modifier_errors(node, modifiers) {
            return true;
        }
        if is_this_parameter(ast, node) {
            return self.grammar_error_on_first_token(
                node,
                &messages::NEITHER_DECORATORS_NOR_MODIFIERS_MAY_BE_APPLIED_TO_THIS_PARAMETERS,
                &[],
            );
        }

        let kind = ast.kind(node);
        let Some(parent) = ast.parent(node) else {
            return false;
        };
        let parent_kind = ast.kind(parent);
        let block_scope_kind = match &ast.node(node).payload {
            tscheck_ast::NodePayload::VariableStatement { declaration_list, .. } => {
                ast.flags(*declaration_list) & NodeFlags::BLOCK_SCOPED
            }
            _ => NodeFlags::NONE,
        };

        let mut flags = ModifierFlags::NONE;
        let mut last_static = None;
        let mut last_declare = None;
        let mut last_async = None;
        let mut last_override = None;
        let mut first_decorator: Option<NodeId> = None;
        let mut saw_export_before_decorators = false;
        let mut has_leading_decorators = false;

        for modifier in modifiers.iter() {
            let modifier_kind = ast.kind(modifier);
            if modifier_kind == SyntaxKind::Decorator {
                if !self.node_can_be_decorated(node) {
                    if kind == SyntaxKind::MethodDeclaration && ast.body(node).is_none() {
                        return self.grammar_error_on_first_token(
                            node,
                            &messages::A_DECORATOR_CAN_ONLY_DECORATE_A_METHOD_IMPLEMENTATION_NOT_AN_OVERLOAD,
                            &[],
                        );
                    }
                    return self.grammar_error_on_first_token(node, &messages::DECORATORS_ARE_NOT_VALID_HERE, &[]);
                }
                if self.legacy_decorators && is_accessor_kind(kind) {
                    let (first, second) = self.accessor_pair(node);
                    if second == Some(node) && has_decorators(ast, first) {
                        return self.grammar_error_on_first_token(
                            node,
                            &messages::DECORATORS_CANNOT_BE_APPLIED_TO_MULTIPLE_GET_SET_ACCESSORS_OF_THE_SAME_NAME,
                            &[],
                        );
                    }
                }
                if flags.intersects(!(ModifierFlags::EXPORT_DEFAULT | ModifierFlags::DECORATOR)) {
                    return self.grammar_error_on_node(modifier, &messages::DECORATORS_ARE_NOT_VALID_HERE, &[]);
                }
                if has_leading_decorators && flags.intersects(ModifierFlags::MODIFIER) {
                    let Some(first) = first_decorator else {
                        panic!("Leading decorators without a first decorator");
                    };
                    if self.has_parse_diagnostics(node) {
                        return false;
                    }
                    let related = create_diagnostic_for_node(ast, first, &messages::DECORATOR_USED_BEFORE_EXPORT_HERE, &[]);
                    self.error_with_related(
                        modifier,
                        &messages::DECORATORS_MAY_NOT_APPEAR_AFTER_EXPORT_OR_EXPORT_DEFAULT_IF_THEY_ALSO_APPEAR_BEFORE_EXPORT,
                        &[],
                        related,
                    );
                    return true;
                }
                flags |= ModifierFlags::DECORATOR;
                if !flags.intersects(ModifierFlags::MODIFIER) {
                    has_leading_decorators = true;
                } else if flags.contains(ModifierFlags::EXPORT) {
                    saw_export_before_decorators = true;
                }
                first_decorator.get_or_insert(modifier);
                continue;
            }

            let text = modifier_text(modifier_kind);
            if modifier_kind != SyntaxKind::ReadonlyKeyword {
                if matches!(kind, SyntaxKind::PropertySignature | SyntaxKind::MethodSignature) {
                    return self.grammar_error_on_node(modifier, &messages::_0_MODIFIER_CANNOT_APPEAR_ON_A_TYPE_MEMBER, &[text]);
                }
                if kind == SyntaxKind::IndexSignature
                    && (modifier_kind != SyntaxKind::StaticKeyword || !is_class_like(ast, parent))
                {
                    return self.grammar_error_on_node(
                        modifier,
                        &messages::_0_MODIFIER_CANNOT_APPEAR_ON_AN_INDEX_SIGNATURE,
                        &[text],
                    );
                }
            }
            if !matches!(
                modifier_kind,
                SyntaxKind::InKeyword | SyntaxKind::OutKeyword | SyntaxKind::ConstKeyword
            ) && kind == SyntaxKind::TypeParameter
            {
                return self.grammar_error_on_node(modifier, &messages::_0_MODIFIER_CANNOT_APPEAR_ON_A_TYPE_PARAMETER, &[text]);
            }

            let must_precede = |this: &mut Self, before: &str, after: &str| {
                this.grammar_error_on_node(modifier, &messages::_0_MODIFIER_MUST_PRECEDE_1_MODIFIER, &[before, after])
            };
            let cannot_be_used_with = |this: &mut Self, a: &str, b: &str| {
                this.grammar_error_on_node(modifier, &messages::_0_MODIFIER_CANNOT_BE_USED_WITH_1_MODIFIER, &[a, b])
            };
            let already_seen = |this: &mut Self| this.grammar_error_on_node(modifier, &messages::_0_MODIFIER_ALREADY_SEEN, &[text]);
            let report = |this: &mut Self, message: &DiagnosticMessage| this.grammar_error_on_node(modifier, message, &[text]);

            match modifier_kind {
                SyntaxKind::ConstKeyword => {
                    if !matches!(kind, SyntaxKind::EnumDeclaration | SyntaxKind::TypeParameter) {
                        return self.grammar_error_on_node(node, &messages::A_CLASS_MEMBER_CANNOT_HAVE_THE_0_KEYWORD, &["const"]);
                    }
                    if kind == SyntaxKind::TypeParameter
                        && !(is_function_like_declaration_kind(parent_kind)
                            || is_class_like_kind(parent_kind)
                            || matches!(
                                parent_kind,
                                SyntaxKind::FunctionType
                                    | SyntaxKind::ConstructorType
                                    | SyntaxKind::CallSignature
                                    | SyntaxKind::ConstructSignature
                                    | SyntaxKind::MethodSignature
                            ))
                    {
                        return report(self, &messages::_0_MODIFIER_CAN_ONLY_APPEAR_ON_A_TYPE_PARAMETER_OF_A_FUNCTION_METHOD_OR_CLASS);
                    }
                }
                SyntaxKind::OverrideKeyword => {
                    if flags.contains(ModifierFlags::OVERRIDE) {
                        return already_seen(self);
                    } else if flags.contains(ModifierFlags::AMBIENT) {
                        return cannot_be_used_with(self, "override", "declare");
                    } else if flags.contains(ModifierFlags::READONLY) {
                        return must_precede(self, "override", "readonly");
                    } else if flags.contains(ModifierFlags::ACCESSOR) {
                        return must_precede(self, "override", "accessor");
                    } else if flags.contains(ModifierFlags::ASYNC) {
                        return must_precede(self, "override", "async");
                    }
                    last_override = Some(modifier);
                }
                SyntaxKind::PublicKeyword | SyntaxKind::ProtectedKeyword | SyntaxKind::PrivateKeyword => {
                    if flags.intersects(ModifierFlags::ACCESSIBILITY_MODIFIER) {
                        return self.grammar_error_on_node(modifier, &messages::ACCESSIBILITY_MODIFIER_ALREADY_SEEN, &[]);
                    } else if flags.contains(ModifierFlags::OVERRIDE) {
                        return must_precede(self, text, "override");
                    } else if flags.contains(ModifierFlags::STATIC) {
                        return must_precede(self, text, "static");
                    } else if flags.contains(ModifierFlags::ACCESSOR) {
                        return must_precede(self, text, "accessor");
                    } else if flags.contains(ModifierFlags::READONLY) {
                        return must_precede(self, text, "readonly");
                    } else if flags.contains(ModifierFlags::ASYNC) {
                        return must_precede(self, text, "async");
                    } else if matches!(parent_kind, SyntaxKind::ModuleBlock | SyntaxKind::SourceFile) {
                        return report(self, &messages::_0_MODIFIER_CANNOT_APPEAR_ON_A_MODULE_OR_NAMESPACE_ELEMENT);
                    } else if flags.contains(ModifierFlags::ABSTRACT) {
                        if modifier_kind == SyntaxKind::PrivateKeyword {
                            return cannot_be_used_with(self, text, "abstract");
                        }
                        return must_precede(self, text, "abstract");
                    } else if is_private_identifier_class_element_declaration(ast, node) {
                        return self.grammar_error_on_node(
                            modifier,
                            &messages::AN_ACCESSIBILITY_MODIFIER_CANNOT_BE_USED_WITH_A_PRIVATE_IDENTIFIER,
                            &[],
                        );
                    }
                }
                SyntaxKind::StaticKeyword => {
                    if flags.contains(ModifierFlags::STATIC) {
                        return already_seen(self);
                    } else if flags.contains(ModifierFlags::READONLY) {
                        return must_precede(self, "static", "readonly");
                    } else if flags.contains(ModifierFlags::ASYNC) {
                        return must_precede(self, "static", "async");
                    } else if flags.contains(ModifierFlags::ACCESSOR) {
                        return must_precede(self, "static", "accessor");
                    } else if matches!(parent_kind, SyntaxKind::ModuleBlock | SyntaxKind::SourceFile) {
                        return report(self, &messages::_0_MODIFIER_CANNOT_APPEAR_ON_A_MODULE_OR_NAMESPACE_ELEMENT);
                    } else if kind == SyntaxKind::Parameter {
                        return report(self, &messages::_0_MODIFIER_CANNOT_APPEAR_ON_A_PARAMETER);
                    } else if flags.contains(ModifierFlags::ABSTRACT) {
                        return cannot_be_used_with(self, "static", "abstract");
                    } else if flags.contains(ModifierFlags::OVERRIDE) {
                        return must_precede(self, "static", "override");
                    }
                    last_static = Some(modifier);
                }
                SyntaxKind::AccessorKeyword => {
                    if flags.contains(ModifierFlags::ACCESSOR) {
                        return already_seen(self);
                    } else if flags.contains(ModifierFlags::READONLY) {
                        return cannot_be_used_with(self, "accessor", "readonly");
                    } else if flags.contains(ModifierFlags::AMBIENT) {
                        return cannot_be_used_with(self, "accessor", "declare");
                    } else if kind != SyntaxKind::PropertyDeclaration {
                        return self.grammar_error_on_node(
                            modifier,
                            &messages::ACCESSOR_MODIFIER_CAN_ONLY_APPEAR_ON_A_PROPERTY_DECLARATION,
                            &[],
                        );
                    }
                }
                SyntaxKind::ReadonlyKeyword => {
                    if flags.contains(ModifierFlags::READONLY) {
                        return already_seen(self);
                    } else if !matches!(
                        kind,
                        SyntaxKind::PropertyDeclaration
                            | SyntaxKind::PropertySignature
                            | SyntaxKind::IndexSignature
                            | SyntaxKind::Parameter
                    ) {
                        return self.grammar_error_on_node(
                            modifier,
                            &messages::READONLY_MODIFIER_CAN_ONLY_APPEAR_ON_A_PROPERTY_DECLARATION_OR_INDEX_SIGNATURE,
                            &[],
                        );
                    } else if flags.contains(ModifierFlags::ACCESSOR) {
                        return cannot_be_used_with(self, "readonly", "accessor");
                    }
                }
                SyntaxKind::ExportKeyword => {
                    if self.options.verbatim_module_syntax == Some(true)
                        && !ast.flags(node).contains(NodeFlags::AMBIENT)
                        && !matches!(
                            kind,
                            SyntaxKind::TypeAliasDeclaration
                                | SyntaxKind::InterfaceDeclaration
                                | SyntaxKind::ModuleDeclaration
                        )
                        && parent_kind == SyntaxKind::SourceFile
                        && self.emit_module_format_of_file(node) == ModuleKind::CommonJS
                    {
                        return self.grammar_error_on_node(
                            modifier,
                            &messages::A_TOP_LEVEL_EXPORT_MODIFIER_CANNOT_BE_USED_ON_VALUE_DECLARATIONS_IN_A_COMMONJS_MODULE_WHEN_VERBATIMMODULESYNTAX_IS_ENABLED,
                            &[],
                        );
                    }
                    if flags.contains(ModifierFlags::EXPORT) {
                        return already_seen(self);
                    } else if flags.contains(ModifierFlags::AMBIENT) {
                        return must_precede(self, "export", "declare");
                    } else if flags.contains(ModifierFlags::ABSTRACT) {
                        return must_precede(self, "export", "abstract");
                    } else if flags.contains(ModifierFlags::ASYNC) {
                        return must_precede(self, "export", "async");
                    } else if is_class_like_kind(parent_kind) {
                        return report(self, &messages::_0_MODIFIER_CANNOT_APPEAR_ON_CLASS_ELEMENTS_OF_THIS_KIND);
                    } else if kind == SyntaxKind::Parameter {
                        return report(self, &messages::_0_MODIFIER_CANNOT_APPEAR_ON_A_PARAMETER);
                    } else if block_scope_kind == NodeFlags::USING {
                        return report(self, &messages::_0_MODIFIER_CANNOT_APPEAR_ON_A_USING_DECLARATION);
                    } else if block_scope_kind == NodeFlags::AWAIT_USING {
                        return report(self, &messages::_0_MODIFIER_CANNOT_APPEAR_ON_AN_AWAIT_USING_DECLARATION);
                    }
                }
                SyntaxKind::DefaultKeyword => {
                    let container = if parent_kind == SyntaxKind::SourceFile {
                        Some(parent)
                    } else {
                        ast.parent(parent)
                    };
                    let in_namespace = container.is_some_and(|c| {
                        ast.kind(c) == SyntaxKind::ModuleDeclaration && !is_ambient_module(ast, c)
                    });
                    if in_namespace {
                        return self.grammar_error_on_node(
                            modifier,
                            &messages::A_DEFAULT_EXPORT_CAN_ONLY_BE_USED_IN_AN_ECMASCRIPT_STYLE_MODULE,
                            &[],
                        );
                    } else if block_scope_kind == NodeFlags::USING {
                        return report(self, &messages::_0_MODIFIER_CANNOT_APPEAR_ON_A_USING_DECLARATION);
                    } else if block_scope_kind == NodeFlags::AWAIT_USING {
                        return report(self, &messages::_0_MODIFIER_CANNOT_APPEAR_ON_AN_AWAIT_USING_DECLARATION);
                    } else if !flags.contains(ModifierFlags::EXPORT) {
                        return must_precede(self, "export", "default");
                    } else if saw_export_before_decorators {
                        if let Some(first) = first_decorator {
                            return self.grammar_error_on_node(first, &messages::DECORATORS_ARE_NOT_VALID_HERE, &[]);
                        }
                    }
                }
                SyntaxKind::DeclareKeyword => {
                    if flags.contains(ModifierFlags::AMBIENT) {
                        return already_seen(self);
                    } else if flags.contains(ModifierFlags::ASYNC) {
                        return self.grammar_error_on_node(modifier, &messages::_0_MODIFIER_CANNOT_BE_USED_IN_AN_AMBIENT_CONTEXT, &["async"]);
                    } else if flags.contains(ModifierFlags::OVERRIDE) {
                        return self.grammar_error_on_node(modifier, &messages::_0_MODIFIER_CANNOT_BE_USED_IN_AN_AMBIENT_CONTEXT, &["override"]);
                    } else if is_class_like_kind(parent_kind) && kind != SyntaxKind::PropertyDeclaration {
                        return report(self, &messages::_0_MODIFIER_CANNOT_APPEAR_ON_CLASS_ELEMENTS_OF_THIS_KIND);
                    } else if kind == SyntaxKind::Parameter {
                        return report(self, &messages::_0_MODIFIER_CANNOT_APPEAR_ON_A_PARAMETER);
                    } else if block_scope_kind == NodeFlags::USING {
                        return report(self, &messages::_0_MODIFIER_CANNOT_APPEAR_ON_A_USING_DECLARATION);
                    } else if block_scope_kind == NodeFlags::AWAIT_USING {
                        return report(self, &messages::_0_MODIFIER_CANNOT_APPEAR_ON_AN_AWAIT_USING_DECLARATION);
                    } else if parent_kind == SyntaxKind::ModuleBlock && ast.flags(parent).contains(NodeFlags::AMBIENT) {
                        return self.grammar_error_on_node(
                            modifier,
                            &messages::A_DECLARE_MODIFIER_CANNOT_BE_USED_IN_AN_ALREADY_AMBIENT_CONTEXT,
                            &[],
                        );
                    } else if is_private_identifier_class_element_declaration(ast, node) {
                        return report(self, &messages::_0_MODIFIER_CANNOT_BE_USED_WITH_A_PRIVATE_IDENTIFIER);
                    } else if flags.contains(ModifierFlags::ACCESSOR) {
                        return cannot_be_used_with(self, "declare", "accessor");
                    }
                    last_declare = Some(modifier);
                }
                SyntaxKind::AbstractKeyword => {
                    if flags.contains(ModifierFlags::ABSTRACT) {
                        return already_seen(self);
                    }
                    if !matches!(kind, SyntaxKind::ClassDeclaration | SyntaxKind::ConstructorType) {
                        if !matches!(
                            kind,
                            SyntaxKind::MethodDeclaration
                                | SyntaxKind::PropertyDeclaration
                                | SyntaxKind::GetAccessor
                                | SyntaxKind::SetAccessor
                        ) {
                            return self.grammar_error_on_node(
                                modifier,
                                &messages::ABSTRACT_MODIFIER_CAN_ONLY_APPEAR_ON_A_CLASS_METHOD_OR_PROPERTY_DECLARATION,
                                &[],
                            );
                        }
                        let in_abstract_class = parent_kind == SyntaxKind::ClassDeclaration
                            && has_syntactic_modifier(ast, parent, ModifierFlags::ABSTRACT);
                        if !in_abstract_class {
                            let message = if kind == SyntaxKind::PropertyDeclaration {
                                &messages::ABSTRACT_PROPERTIES_CAN_ONLY_APPEAR_WITHIN_AN_ABSTRACT_CLASS
                            } else {
                                &messages::ABSTRACT_METHODS_CAN_ONLY_APPEAR_WITHIN_AN_ABSTRACT_CLASS
                            };
                            return self.grammar_error_on_node(modifier, message, &[]);
                        }
                        if flags.contains(ModifierFlags::STATIC) {
                            return cannot_be_used_with(self, "static", "abstract");
                        }
                        if flags.contains(ModifierFlags::PRIVATE) {
                            return cannot_be_used_with(self, "private", "abstract");
                        }
                        if flags.contains(ModifierFlags::ASYNC) {
                            if let Some(last_async) = last_async {
                                return self.grammar_error_on_node(
                                    last_async,
                                    &messages::_0_MODIFIER_CANNOT_BE_USED_WITH_1_MODIFIER,
                                    &["async", "abstract"],
                                );
                            }
                        }
                        if flags.contains(ModifierFlags::OVERRIDE) {
                            return must_precede(self, "abstract", "override");
                        }
                        if flags.contains(ModifierFlags::ACCESSOR) {
                            return must_precede(self, "abstract", "accessor");
                        }
                    }
                    if ast.name(node).is_some_and(|n| ast.kind(n) == SyntaxKind::PrivateIdentifier) {
                        return report(self, &messages::_0_MODIFIER_CANNOT_BE_USED_WITH_A_PRIVATE_IDENTIFIER);
                    }
                }
                SyntaxKind::AsyncKeyword => {
                    if flags.contains(ModifierFlags::ASYNC) {
                        return already_seen(self);
                    } else if flags.contains(ModifierFlags::AMBIENT) || ast.flags(parent).contains(NodeFlags::AMBIENT) {
                        return report(self, &messages::_0_MODIFIER_CANNOT_BE_USED_IN_AN_AMBIENT_CONTEXT);
                    } else if kind == SyntaxKind::Parameter {
                        return report(self, &messages::_0_MODIFIER_CANNOT_APPEAR_ON_A_PARAMETER);
                    }
                    if flags.contains(ModifierFlags::ABSTRACT) {
                        return cannot_be_used_with(self, "async", "abstract");
                    }
                    last_async = Some(modifier);
                }
                SyntaxKind::InKeyword | SyntaxKind::OutKeyword => {
                    let in_out_flag = ModifierFlags::from_modifier_kind(modifier_kind);
                    let on_variance_position = kind == SyntaxKind::TypeParameter
                        && (matches!(
                            parent_kind,
                            SyntaxKind::InterfaceDeclaration | SyntaxKind::TypeAliasDeclaration
                        ) || is_class_like_kind(parent_kind));
                    if !on_variance_position {
                        return report(self, &messages::_0_MODIFIER_CAN_ONLY_APPEAR_ON_A_TYPE_PARAMETER_OF_A_CLASS_INTERFACE_OR_TYPE_ALIAS);
                    }
                    if flags.contains(in_out_flag) {
                        return already_seen(self);
                    }
                    if in_out_flag == ModifierFlags::IN && flags.contains(ModifierFlags::OUT) {
                        return must_precede(self, "in", "out");
                    }
                }
                _ => {}
            }
            flags |= ModifierFlags::from_modifier_kind(modifier_kind);
        }

        if kind == SyntaxKind::Constructor {
            let constructor_error = [
                (ModifierFlags::STATIC, last_static, "static"),
                (ModifierFlags::OVERRIDE, last_override, "override"),
                (ModifierFlags::ASYNC, last_async, "async"),
            ]
            .into_iter()
            .find_map(|(flag, last, text)| flags.contains(flag).then_some(last.map(|n| (n, text))).flatten());
            return match constructor_error {
                Some((modifier, text)) => self.grammar_error_on_node(
                    modifier,
                    &messages::_0_MODIFIER_CANNOT_APPEAR_ON_A_CONSTRUCTOR_DECLARATION,
                    &[text],
                ),
                None => false,
            };
        }
        if matches!(kind, SyntaxKind::ImportDeclaration | SyntaxKind::ImportEqualsDeclaration)
            && flags.contains(ModifierFlags::AMBIENT)
        {
            if let Some(last_declare) = last_declare {
                return self.grammar_error_on_node(
                    last_declare,
                    &messages::A_0_MODIFIER_CANNOT_BE_USED_WITH_AN_IMPORT_DECLARATION,
                    &["declare"],
                );
            }
        }
        if kind == SyntaxKind::Parameter && flags.intersects(ModifierFlags::PARAMETER_PROPERTY_MODIFIER) {
            if ast.name(node).is_some_and(|n| is_binding_pattern_kind(ast.kind(n))) {
                return self.grammar_error_on_node(
                    node,
                    &messages::A_PARAMETER_PROPERTY_MAY_NOT_BE_DECLARED_USING_A_BINDING_PATTERN,
                    &[],
                );
            }
            if ast.dot_dot_dot_token(node).is_some() {
                return self.grammar_error_on_node(
                    node,
                    &messages::A_PARAMETER_PROPERTY_CANNOT_BE_DECLARED_USING_A_REST_PARAMETER,
                    &[],
                );
            }
        }
        if flags.contains(ModifierFlags::ASYNC) {
            if let Some(last_async) = last_async {
                return self.check_grammar_async_modifier(node, last_async);
            }
        }
        false
    }

    fn report_obvious_decorator_errors(&mut self, node: NodeId, modifiers: &NodeList) -> bool {
        let ast = self.ast;
        if !can_have_illegal_decorators(ast.kind(node)) {
            return false;
        }
        match modifiers.iter().find(|&m| ast.kind(m) == SyntaxKind::Decorator) {
            Some(decorator) => self.grammar_error_on_first_token(decorator, &messages::DECORATORS_ARE_NOT_VALID_HERE, &[]),
            None => false,
        }
    }

    fn report_obvious_modifier_errors(&mut self, node: NodeId, modifiers: &NodeList) -> bool {
        match self.find_first_illegal_modifier(node, modifiers) {
            Some(modifier) => self.grammar_error_on_first_token(modifier, &messages::MODIFIERS_CANNOT_APPEAR_HERE, &[]),
            None => false,
        }
    }

    fn find_first_illegal_modifier(&self, node: NodeId, modifiers: &NodeList) -> Option<NodeId> {
        let ast = self.ast;
        let kind = ast.kind(node);
        match kind {
            SyntaxKind::GetAccessor
            | SyntaxKind::SetAccessor
            | SyntaxKind::Constructor
            | SyntaxKind::PropertyDeclaration
            | SyntaxKind::PropertySignature
            | SyntaxKind::MethodDeclaration
            | SyntaxKind::MethodSignature
            | SyntaxKind::IndexSignature
            | SyntaxKind::ModuleDeclaration
            | SyntaxKind::ImportDeclaration
            | SyntaxKind::ImportEqualsDeclaration
            | SyntaxKind::ExportDeclaration
            | SyntaxKind::ExportAssignment
            | SyntaxKind::FunctionExpression
            | SyntaxKind::ArrowFunction
            | SyntaxKind::Parameter
            | SyntaxKind::TypeParameter => None,
            SyntaxKind::ClassStaticBlockDeclaration
            | SyntaxKind::PropertyAssignment
            | SyntaxKind::ShorthandPropertyAssignment
            | SyntaxKind::NamespaceExportDeclaration => first_modifier(ast, modifiers),
            _ => {
                let top_level = ast
                    .parent(node)
                    .is_some_and(|p| matches!(ast.kind(p), SyntaxKind::ModuleBlock | SyntaxKind::SourceFile));
                if top_level {
                    return None;
                }
                match kind {
                    SyntaxKind::FunctionDeclaration => first_modifier_except(ast, modifiers, SyntaxKind::AsyncKeyword),
                    SyntaxKind::ClassDeclaration | SyntaxKind::ConstructorType => {
                        first_modifier_except(ast, modifiers, SyntaxKind::AbstractKeyword)
                    }
                    SyntaxKind::ClassExpression | SyntaxKind::InterfaceDeclaration | SyntaxKind::TypeAliasDeclaration => {
                        first_modifier(ast, modifiers)
                    }
                    SyntaxKind::VariableStatement => {
                        let is_using = match &ast.node(node).payload {
                            tscheck_ast::NodePayload::VariableStatement { declaration_list, .. } => {
                                ast.flags(*declaration_list).intersects(NodeFlags::USING)
                            }
                            _ => false,
                        };
                        if is_using {
                            first_modifier_except(ast, modifiers, SyntaxKind::AwaitKeyword)
                        } else {
                            first_modifier(ast, modifiers)
                        }
                    }
                    SyntaxKind::EnumDeclaration => first_modifier_except(ast, modifiers, SyntaxKind::ConstKeyword),
                    _ => panic!("Unhandled case in findFirstIllegalModifier: {:?}", kind),
                }
            }
        }
    }

    fn node_can_be_decorated(&self, node: NodeId) -> bool {
        let ast = self.ast;
        let legacy = self.legacy_decorators;
        if legacy && ast.name(node).is_some_and(|n| ast.kind(n) == SyntaxKind::PrivateIdentifier) {
            return false;
        }
        let parent = ast.parent(node);
        let parent_kind = parent.map(|p| ast.kind(p));
        let parent_is_class = |legacy: bool| match parent_kind {
            Some(SyntaxKind::ClassDeclaration) => true,
            Some(kind) => !legacy && is_class_like_kind(kind),
            None => false,
        };
        match ast.kind(node) {
            SyntaxKind::ClassDeclaration => true,
            SyntaxKind::ClassExpression => !legacy,
            SyntaxKind::PropertyDeclaration => {
                if legacy {
                    parent_is_class(true)
                } else {
                    parent_is_class(false)
                        && !has_syntactic_modifier(ast, node, ModifierFlags::ABSTRACT)
                        && !has_syntactic_modifier(ast, node, ModifierFlags::AMBIENT)
                }
            }
            SyntaxKind::GetAccessor | SyntaxKind::SetAccessor | SyntaxKind::MethodDeclaration => {
                ast.body(node).is_some() && parent_is_class(legacy)
            }
            SyntaxKind::Parameter => {
                if !legacy {
                    return false;
                }
                let Some(parent) = parent else {
                    return false;
                };
                ast.body(parent).is_some()
                    && matches!(
                        ast.kind(parent),
                        SyntaxKind::Constructor | SyntaxKind::MethodDeclaration | SyntaxKind::SetAccessor
                    )
                    && !is_this_parameter(ast, node)
                    && ast
                        .parent(parent)
                        .is_some_and(|g| ast.kind(g) == SyntaxKind::ClassDeclaration)
            }
            _ => false,
        }
    }

    /// First and second accessor sharing the name and staticness of
    /// `accessor` in its class.
    fn accessor_pair(&self, accessor: NodeId) -> (NodeId, Option<NodeId>) {
        let ast = self.ast;
        let name_text = |n: NodeId| ast.name(n).map(|name| ast.source_text(name));
        let key = (name_text(accessor), is_static(ast, accessor));
        let mut pair = ast
            .parent(accessor)
            .and_then(|p| ast.members(p))
            .into_iter()
            .flat_map(|members| members.iter())
            .filter(|&m| is_accessor_kind(ast.kind(m)) && (name_text(m), is_static(ast, m)) == key);
        let first = pair.next().unwrap_or(accessor);
        (first, pair.next())
    }

    fn check_grammar_async_modifier(&mut self, node: NodeId, async_modifier: NodeId) -> bool {
        match self.ast.kind(node) {
            SyntaxKind::MethodDeclaration
            | SyntaxKind::FunctionDeclaration
            | SyntaxKind::FunctionExpression
            | SyntaxKind::ArrowFunction => false,
            _ => self.grammar_error_on_node(async_modifier, &messages::_0_MODIFIER_CANNOT_BE_USED_HERE, &["async"]),
        }
    }
}

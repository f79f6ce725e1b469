//! Tree predicates and walks shared by the binder and the checker.

use crate::ast::Ast;
use crate::node::NodePayload;
use crate::syntax_kind::SyntaxKind;
use crate::types::*;
use tscheck_diagnostics::{Diagnostic, DiagnosticMessage};

// ============================================================================
// Kind predicates
// ============================================================================

pub fn is_function_like_kind(kind: SyntaxKind) -> bool {
    matches!(
        kind,
        SyntaxKind::FunctionDeclaration
            | SyntaxKind::MethodDeclaration
            | SyntaxKind::Constructor
            | SyntaxKind::GetAccessor
            | SyntaxKind::SetAccessor
            | SyntaxKind::FunctionExpression
            | SyntaxKind::ArrowFunction
            | SyntaxKind::MethodSignature
            | SyntaxKind::CallSignature
            | SyntaxKind::ConstructSignature
            | SyntaxKind::IndexSignature
            | SyntaxKind::FunctionType
            | SyntaxKind::ConstructorType
    )
}

/// Function-like kinds that can have a body.
pub fn is_function_like_declaration_kind(kind: SyntaxKind) -> bool {
    matches!(
        kind,
        SyntaxKind::FunctionDeclaration
            | SyntaxKind::MethodDeclaration
            | SyntaxKind::Constructor
            | SyntaxKind::GetAccessor
            | SyntaxKind::SetAccessor
            | SyntaxKind::FunctionExpression
            | SyntaxKind::ArrowFunction
    )
}

pub fn is_class_like_kind(kind: SyntaxKind) -> bool {
    matches!(kind, SyntaxKind::ClassDeclaration | SyntaxKind::ClassExpression)
}

pub fn is_class_element_kind(kind: SyntaxKind) -> bool {
    matches!(
        kind,
        SyntaxKind::Constructor
            | SyntaxKind::PropertyDeclaration
            | SyntaxKind::MethodDeclaration
            | SyntaxKind::GetAccessor
            | SyntaxKind::SetAccessor
            | SyntaxKind::IndexSignature
            | SyntaxKind::ClassStaticBlockDeclaration
            | SyntaxKind::SemicolonClassElement
    )
}

pub fn is_binding_pattern_kind(kind: SyntaxKind) -> bool {
    matches!(kind, SyntaxKind::ObjectBindingPattern | SyntaxKind::ArrayBindingPattern)
}

pub fn is_accessor_kind(kind: SyntaxKind) -> bool {
    matches!(kind, SyntaxKind::GetAccessor | SyntaxKind::SetAccessor)
}

pub fn is_function_like(ast: &Ast, id: NodeId) -> bool {
    is_function_like_kind(ast.kind(id))
}

pub fn is_class_like(ast: &Ast, id: NodeId) -> bool {
    is_class_like_kind(ast.kind(id))
}

pub fn is_class_element(ast: &Ast, id: NodeId) -> bool {
    is_class_element_kind(ast.kind(id))
}

pub fn is_iteration_statement(ast: &Ast, id: NodeId, look_in_labeled_statements: bool) -> bool {
    match ast.kind(id) {
        SyntaxKind::ForStatement
        | SyntaxKind::ForInStatement
        | SyntaxKind::ForOfStatement
        | SyntaxKind::DoStatement
        | SyntaxKind::WhileStatement => true,
        SyntaxKind::LabeledStatement => {
            look_in_labeled_statements
                && ast
                    .statement(id)
                    .is_some_and(|s| is_iteration_statement(ast, s, look_in_labeled_statements))
        }
        _ => false,
    }
}

/// Blocks whose parent is function-like.
pub fn is_function_block(ast: &Ast, id: NodeId) -> bool {
    ast.kind(id) == SyntaxKind::Block && ast.parent(id).is_some_and(|p| is_function_like(ast, p))
}

// ============================================================================
// Walks
// ============================================================================

/// First node, starting at `id` itself, that satisfies `predicate`.
pub fn find_ancestor(ast: &Ast, id: Option<NodeId>, mut predicate: impl FnMut(NodeId) -> bool) -> Option<NodeId> {
    let mut current = id;
    while let Some(node) = current {
        if predicate(node) {
            return Some(node);
        }
        current = ast.parent(node);
    }
    None
}

pub fn get_containing_function(ast: &Ast, id: NodeId) -> Option<NodeId> {
    find_ancestor(ast, ast.parent(id), |n| is_function_like(ast, n))
}

pub fn get_containing_function_or_class_static_block(ast: &Ast, id: NodeId) -> Option<NodeId> {
    find_ancestor(ast, ast.parent(id), |n| {
        is_function_like(ast, n) || ast.kind(n) == SyntaxKind::ClassStaticBlockDeclaration
    })
}

pub fn get_containing_class(ast: &Ast, id: NodeId) -> Option<NodeId> {
    find_ancestor(ast, ast.parent(id), |n| is_class_like(ast, n))
}

/// Nearest node that determines the meaning of `this` at `id`.
pub fn get_this_container(
    ast: &Ast,
    id: NodeId,
    include_arrow_functions: bool,
    include_class_computed_property_name: bool,
) -> NodeId {
    let mut node = id;
    loop {
        node = match ast.parent(node) {
            Some(parent) => parent,
            None => panic!("nil parent in getThisContainer"),
        };
        match ast.kind(node) {
            SyntaxKind::ComputedPropertyName => {
                let grandparent = ast.parent(node).and_then(|p| ast.parent(p));
                if let Some(grandparent) = grandparent {
                    if include_class_computed_property_name && is_class_like(ast, grandparent) {
                        return node;
                    }
                    node = grandparent;
                }
            }
            SyntaxKind::Decorator => {
                if let Some(parent) = ast.parent(node) {
                    let grandparent = ast.parent(parent);
                    if ast.kind(parent) == SyntaxKind::Parameter
                        && grandparent.is_some_and(|g| is_class_element(ast, g))
                    {
                        node = grandparent.unwrap_or(parent);
                    } else if is_class_element(ast, parent) {
                        node = parent;
                    }
                }
            }
            SyntaxKind::ArrowFunction => {
                if include_arrow_functions {
                    return node;
                }
            }
            SyntaxKind::FunctionDeclaration
            | SyntaxKind::FunctionExpression
            | SyntaxKind::ModuleDeclaration
            | SyntaxKind::ClassStaticBlockDeclaration
            | SyntaxKind::PropertyDeclaration
            | SyntaxKind::PropertySignature
            | SyntaxKind::MethodDeclaration
            | SyntaxKind::MethodSignature
            | SyntaxKind::Constructor
            | SyntaxKind::GetAccessor
            | SyntaxKind::SetAccessor
            | SyntaxKind::CallSignature
            | SyntaxKind::ConstructSignature
            | SyntaxKind::IndexSignature
            | SyntaxKind::EnumDeclaration
            | SyntaxKind::SourceFile => return node,
            _ => {}
        }
    }
}

/// Whether `id` is evaluated directly at the top level of its file.
pub fn is_in_top_level_context(ast: &Ast, id: NodeId) -> bool {
    let mut node = id;
    if ast.kind(node) == SyntaxKind::Identifier {
        if let Some(parent) = ast.parent(node) {
            let kind = ast.kind(parent);
            if matches!(kind, SyntaxKind::ClassDeclaration | SyntaxKind::FunctionDeclaration)
                && ast.name(parent) == Some(node)
            {
                node = parent;
            }
        }
    }
    ast.kind(get_this_container(ast, node, true, false)) == SyntaxKind::SourceFile
}

/// Climb out of binding elements and patterns to the declaration that
/// owns them.
pub fn get_root_declaration(ast: &Ast, id: NodeId) -> NodeId {
    let mut node = id;
    while ast.kind(node) == SyntaxKind::BindingElement {
        match ast.parent(node).and_then(|p| ast.parent(p)) {
            Some(owner) => node = owner,
            None => break,
        }
    }
    node
}

pub fn is_part_of_parameter_declaration(ast: &Ast, id: NodeId) -> bool {
    ast.kind(get_root_declaration(ast, id)) == SyntaxKind::Parameter
}

/// `(((x)))` to `x`.
pub fn skip_parentheses(ast: &Ast, id: NodeId) -> NodeId {
    let mut node = id;
    while ast.kind(node) == SyntaxKind::ParenthesizedExpression {
        match ast.expression(node) {
            Some(inner) => node = inner,
            None => break,
        }
    }
    node
}

/// The call that immediately invokes a function or arrow expression.
pub fn get_immediately_invoked_function_expression(ast: &Ast, func: NodeId) -> Option<NodeId> {
    if !matches!(ast.kind(func), SyntaxKind::FunctionExpression | SyntaxKind::ArrowFunction) {
        return None;
    }
    let mut prev = func;
    let mut parent = ast.parent(func)?;
    while ast.kind(parent) == SyntaxKind::ParenthesizedExpression {
        prev = parent;
        parent = ast.parent(parent)?;
    }
    (ast.kind(parent) == SyntaxKind::CallExpression && ast.expression(parent) == Some(prev)).then_some(parent)
}

// ============================================================================
// Flags
// ============================================================================

pub fn has_syntactic_modifier(ast: &Ast, id: NodeId, flags: ModifierFlags) -> bool {
    ast.modifier_flags(id).intersects(flags)
}

pub fn is_static(ast: &Ast, id: NodeId) -> bool {
    (is_class_element(ast, id) && has_syntactic_modifier(ast, id, ModifierFlags::STATIC))
        || ast.kind(id) == SyntaxKind::ClassStaticBlockDeclaration
}

fn combined_flags<T: std::ops::BitOr<Output = T> + Copy>(ast: &Ast, id: NodeId, get: impl Fn(NodeId) -> T) -> T {
    let mut node = get_root_declaration(ast, id);
    let mut flags = get(node);
    if ast.kind(node) == SyntaxKind::VariableDeclaration {
        match ast.parent(node) {
            Some(parent) => node = parent,
            None => return flags,
        }
    }
    if ast.kind(node) == SyntaxKind::VariableDeclarationList {
        flags = flags | get(node);
        match ast.parent(node) {
            Some(parent) => node = parent,
            None => return flags,
        }
    }
    if ast.kind(node) == SyntaxKind::VariableStatement {
        flags = flags | get(node);
    }
    flags
}

/// Node flags of a declaration merged with its declaration list and statement.
pub fn get_combined_node_flags(ast: &Ast, id: NodeId) -> NodeFlags {
    combined_flags(ast, id, |n| ast.flags(n))
}

pub fn get_combined_modifier_flags(ast: &Ast, id: NodeId) -> ModifierFlags {
    combined_flags(ast, id, |n| ast.modifier_flags(n))
}

pub fn is_var_const(ast: &Ast, id: NodeId) -> bool {
    get_combined_node_flags(ast, id).block_scope_kind() == NodeFlags::CONST
}

pub fn is_let(ast: &Ast, id: NodeId) -> bool {
    get_combined_node_flags(ast, id).block_scope_kind() == NodeFlags::LET
}

pub fn is_enum_const(ast: &Ast, id: NodeId) -> bool {
    get_combined_modifier_flags(ast, id).contains(ModifierFlags::CONST)
}

pub fn is_catch_clause_variable_declaration_or_binding_element(ast: &Ast, id: NodeId) -> bool {
    let root = get_root_declaration(ast, id);
    ast.kind(root) == SyntaxKind::VariableDeclaration
        && ast
            .parent(root)
            .is_some_and(|p| ast.kind(p) == SyntaxKind::CatchClause)
}

pub fn is_block_or_catch_scoped(ast: &Ast, id: NodeId) -> bool {
    get_combined_node_flags(ast, id).intersects(NodeFlags::BLOCK_SCOPED)
        || is_catch_clause_variable_declaration_or_binding_element(ast, id)
}

/// Whether any node from `id` up has `NodeFlags::AMBIENT`.
pub fn is_in_ambient_context(ast: &Ast, id: NodeId) -> bool {
    ast.flags(id).contains(NodeFlags::AMBIENT)
}

// ============================================================================
// Expressions
// ============================================================================

pub fn is_optional_chain(ast: &Ast, id: NodeId) -> bool {
    matches!(
        ast.kind(id),
        SyntaxKind::PropertyAccessExpression
            | SyntaxKind::ElementAccessExpression
            | SyntaxKind::CallExpression
            | SyntaxKind::NonNullExpression
    ) && ast.flags(id).contains(NodeFlags::OPTIONAL_CHAIN)
}

pub fn binary_operator(ast: &Ast, id: NodeId) -> Option<SyntaxKind> {
    match &ast.node(id).payload {
        NodePayload::Binary { operator_token, .. } => Some(ast.kind(*operator_token)),
        _ => None,
    }
}

pub fn is_nullish_coalesce(ast: &Ast, id: NodeId) -> bool {
    binary_operator(ast, id) == Some(SyntaxKind::QuestionQuestionToken)
}

/// `const` as a bare type reference.
pub fn is_const_type_reference(ast: &Ast, id: NodeId) -> bool {
    match &ast.node(id).payload {
        NodePayload::TypeReference {
            type_name,
            type_arguments: None,
        } if ast.kind(id) == SyntaxKind::TypeReference => {
            ast.kind(*type_name) == SyntaxKind::Identifier && ast.text(*type_name) == "const"
        }
        _ => false,
    }
}

/// `x as const` or `<const>x`.
pub fn is_const_assertion(ast: &Ast, id: NodeId) -> bool {
    matches!(
        ast.kind(id),
        SyntaxKind::AsExpression | SyntaxKind::TypeAssertionExpression
    ) && ast.type_node(id).is_some_and(|t| is_const_type_reference(ast, t))
}

/// Identifiers and dotted property accesses of identifiers.
pub fn is_entity_name_expression(ast: &Ast, id: NodeId) -> bool {
    match &ast.node(id).payload {
        NodePayload::Identifier { .. } => ast.kind(id) == SyntaxKind::Identifier,
        NodePayload::PropertyAccess { expression, name, .. } => {
            ast.kind(*name) == SyntaxKind::Identifier && is_entity_name_expression(ast, *expression)
        }
        _ => false,
    }
}

pub fn is_import_meta(ast: &Ast, id: NodeId) -> bool {
    match &ast.node(id).payload {
        NodePayload::MetaProperty { keyword_token, name } => {
            *keyword_token == SyntaxKind::ImportKeyword && ast.text(*name) == "meta"
        }
        _ => false,
    }
}

/// The assignment, increment or `for-in/of` that writes to `id`.
pub fn get_assignment_target(ast: &Ast, id: NodeId) -> Option<NodeId> {
    let mut node = id;
    loop {
        let parent = ast.parent(node)?;
        match &ast.node(parent).payload {
            NodePayload::Binary { left, operator_token, .. } => {
                let is_target = *left == node && ast.kind(*operator_token).is_assignment_operator();
                return is_target.then_some(parent);
            }
            NodePayload::Unary { operator, .. } => {
                let is_update = matches!(operator, SyntaxKind::PlusPlusToken | SyntaxKind::MinusMinusToken);
                return is_update.then_some(parent);
            }
            NodePayload::ForInOrOf { initializer, .. } => {
                return (*initializer == node).then_some(parent);
            }
            _ => match ast.kind(parent) {
                SyntaxKind::ParenthesizedExpression
                | SyntaxKind::ArrayLiteralExpression
                | SyntaxKind::SpreadElement
                | SyntaxKind::NonNullExpression => node = parent,
                SyntaxKind::SpreadAssignment => node = ast.parent(parent)?,
                SyntaxKind::ShorthandPropertyAssignment => {
                    if ast.name(parent) != Some(node) {
                        return None;
                    }
                    node = ast.parent(parent)?;
                }
                SyntaxKind::PropertyAssignment => {
                    if ast.initializer(parent) != Some(node) {
                        return None;
                    }
                    node = ast.parent(parent)?;
                }
                _ => return None,
            },
        }
    }
}

pub fn is_assignment_target(ast: &Ast, id: NodeId) -> bool {
    get_assignment_target(ast, id).is_some()
}

// ============================================================================
// Types
// ============================================================================

/// `extends`/`implements` element that denotes a type rather than a value.
fn is_part_of_type_expression_with_type_arguments(ast: &Ast, id: NodeId) -> bool {
    let Some(parent) = ast.parent(id) else {
        return false;
    };
    match &ast.node(parent).payload {
        NodePayload::HeritageClause { token, .. } => {
            let owner_is_class = ast.parent(parent).is_some_and(|o| is_class_like(ast, o));
            !owner_is_class || *token == SyntaxKind::ImplementsKeyword
        }
        _ => false,
    }
}

pub fn is_part_of_type_node(ast: &Ast, id: NodeId) -> bool {
    let kind = ast.kind(id);
    if kind >= SyntaxKind::FIRST_TYPE_NODE && kind <= SyntaxKind::LAST_TYPE_NODE {
        return true;
    }
    match kind {
        SyntaxKind::AnyKeyword
        | SyntaxKind::UnknownKeyword
        | SyntaxKind::NumberKeyword
        | SyntaxKind::BigIntKeyword
        | SyntaxKind::StringKeyword
        | SyntaxKind::BooleanKeyword
        | SyntaxKind::SymbolKeyword
        | SyntaxKind::ObjectKeyword
        | SyntaxKind::UndefinedKeyword
        | SyntaxKind::NullKeyword
        | SyntaxKind::NeverKeyword => true,
        SyntaxKind::VoidKeyword => ast
            .parent(id)
            .is_some_and(|p| ast.kind(p) != SyntaxKind::VoidExpression),
        SyntaxKind::ExpressionWithTypeArguments => is_part_of_type_expression_with_type_arguments(ast, id),
        SyntaxKind::TypeParameter => ast
            .parent(id)
            .is_some_and(|p| matches!(ast.kind(p), SyntaxKind::MappedType | SyntaxKind::InferType)),
        SyntaxKind::Identifier => {
            let Some(parent) = ast.parent(id) else {
                return false;
            };
            let is_right = match &ast.node(parent).payload {
                NodePayload::QualifiedName { right, .. } => *right == id,
                NodePayload::PropertyAccess { name, .. } => *name == id,
                _ => false,
            };
            is_part_of_type_node_in_parent(ast, if is_right { parent } else { id })
        }
        SyntaxKind::QualifiedName | SyntaxKind::PropertyAccessExpression | SyntaxKind::ThisKeyword => {
            is_part_of_type_node_in_parent(ast, id)
        }
        _ => false,
    }
}

fn is_part_of_type_node_in_parent(ast: &Ast, id: NodeId) -> bool {
    let Some(parent) = ast.parent(id) else {
        return false;
    };
    let parent_kind = ast.kind(parent);
    if parent_kind == SyntaxKind::TypeQuery {
        return false;
    }
    if let NodePayload::ImportType { is_type_of, .. } = &ast.node(parent).payload {
        return !is_type_of;
    }
    if parent_kind >= SyntaxKind::FIRST_TYPE_NODE && parent_kind <= SyntaxKind::LAST_TYPE_NODE {
        return true;
    }
    match parent_kind {
        SyntaxKind::ExpressionWithTypeArguments => is_part_of_type_expression_with_type_arguments(ast, parent),
        SyntaxKind::TypeParameter => {
            matches!(ast.node(parent).payload, NodePayload::TypeParameter { constraint: Some(c), .. } if c == id)
        }
        SyntaxKind::VariableDeclaration
        | SyntaxKind::Parameter
        | SyntaxKind::PropertyDeclaration
        | SyntaxKind::PropertySignature
        | SyntaxKind::FunctionDeclaration
        | SyntaxKind::FunctionExpression
        | SyntaxKind::ArrowFunction
        | SyntaxKind::Constructor
        | SyntaxKind::MethodDeclaration
        | SyntaxKind::MethodSignature
        | SyntaxKind::GetAccessor
        | SyntaxKind::SetAccessor
        | SyntaxKind::CallSignature
        | SyntaxKind::ConstructSignature
        | SyntaxKind::IndexSignature
        | SyntaxKind::TypeAssertionExpression => ast.type_node(parent) == Some(id),
        SyntaxKind::CallExpression | SyntaxKind::NewExpression | SyntaxKind::TaggedTemplateExpression => ast
            .type_arguments(parent)
            .is_some_and(|args| args.iter().any(|a| a == id)),
        _ => false,
    }
}

pub fn is_part_of_type_query(ast: &Ast, id: NodeId) -> bool {
    let mut node = id;
    while matches!(ast.kind(node), SyntaxKind::QualifiedName | SyntaxKind::Identifier) {
        match ast.parent(node) {
            Some(parent) => node = parent,
            None => return false,
        }
    }
    ast.kind(node) == SyntaxKind::TypeQuery
}

/// Whether `id` is the `extends` element of a class heritage clause.
pub fn is_expression_with_type_arguments_in_class_extends_clause(ast: &Ast, id: NodeId) -> bool {
    if ast.kind(id) != SyntaxKind::ExpressionWithTypeArguments {
        return false;
    }
    let Some(clause) = ast.parent(id) else {
        return false;
    };
    match &ast.node(clause).payload {
        NodePayload::HeritageClause { token, .. } => {
            *token == SyntaxKind::ExtendsKeyword && ast.parent(clause).is_some_and(|c| is_class_like(ast, c))
        }
        _ => false,
    }
}

// ============================================================================
// Declarations and modules
// ============================================================================

pub fn is_global_source_file(ast: &Ast, id: NodeId) -> bool {
    ast.kind(id) == SyntaxKind::SourceFile && !ast.source_file(id).is_external_module()
}

pub fn is_external_module(ast: &Ast, id: NodeId) -> bool {
    ast.kind(id) == SyntaxKind::SourceFile && ast.source_file(id).is_external_module()
}

pub fn is_global_scope_augmentation(ast: &Ast, id: NodeId) -> bool {
    ast.kind(id) == SyntaxKind::ModuleDeclaration && ast.flags(id).contains(NodeFlags::GLOBAL_AUGMENTATION)
}

pub fn is_module_with_string_literal_name(ast: &Ast, id: NodeId) -> bool {
    ast.kind(id) == SyntaxKind::ModuleDeclaration
        && ast
            .name(id)
            .is_some_and(|n| ast.kind(n) == SyntaxKind::StringLiteral)
}

/// `declare module "m"` or `declare global`.
pub fn is_ambient_module(ast: &Ast, id: NodeId) -> bool {
    is_module_with_string_literal_name(ast, id) || is_global_scope_augmentation(ast, id)
}

pub fn is_module_augmentation_external(ast: &Ast, id: NodeId) -> bool {
    let Some(parent) = ast.parent(id) else {
        return false;
    };
    match ast.kind(parent) {
        SyntaxKind::SourceFile => is_external_module(ast, parent),
        SyntaxKind::ModuleBlock => ast.parent(parent).is_some_and(|grandparent| {
            is_ambient_module(ast, grandparent)
                && ast
                    .parent(grandparent)
                    .is_some_and(|f| ast.kind(f) == SyntaxKind::SourceFile && !is_external_module(ast, f))
        }),
        _ => false,
    }
}

pub fn is_external_module_augmentation(ast: &Ast, id: NodeId) -> bool {
    is_ambient_module(ast, id) && is_module_augmentation_external(ast, id)
}

/// Whether `id` is the name of the declaration that owns it.
pub fn is_declaration_name(ast: &Ast, id: NodeId) -> bool {
    let kind = ast.kind(id);
    if kind == SyntaxKind::SourceFile || is_binding_pattern_kind(kind) {
        return false;
    }
    ast.parent(id)
        .is_some_and(|p| ast.kind(p).is_declaration() && ast.name(p) == Some(id))
}

/// Constructor with a body among the members of a class.
pub fn find_constructor_declaration(ast: &Ast, class: NodeId) -> Option<NodeId> {
    ast.members(class)?
        .iter()
        .find(|&m| ast.kind(m) == SyntaxKind::Constructor && ast.body(m).is_some())
}

/// `"use strict"` among the leading string-literal statements.
pub fn find_use_strict_prologue(ast: &Ast, statements: &[NodeId]) -> Option<NodeId> {
    for &statement in statements {
        if !is_prologue_directive(ast, statement) {
            return None;
        }
        if ast.expression(statement).is_some_and(|e| ast.text(e) == "use strict") {
            return Some(statement);
        }
    }
    None
}

pub fn is_prologue_directive(ast: &Ast, id: NodeId) -> bool {
    ast.kind(id) == SyntaxKind::ExpressionStatement
        && ast
            .expression(id)
            .is_some_and(|e| ast.kind(e) == SyntaxKind::StringLiteral)
}

pub fn is_object_literal_or_class_expression_method_or_accessor(ast: &Ast, id: NodeId) -> bool {
    matches!(
        ast.kind(id),
        SyntaxKind::MethodDeclaration | SyntaxKind::GetAccessor | SyntaxKind::SetAccessor
    ) && ast.parent(id).is_some_and(|p| {
        matches!(
            ast.kind(p),
            SyntaxKind::ObjectLiteralExpression | SyntaxKind::ClassExpression
        )
    })
}

pub fn is_private_identifier_class_element_declaration(ast: &Ast, id: NodeId) -> bool {
    matches!(
        ast.kind(id),
        SyntaxKind::PropertyDeclaration | SyntaxKind::MethodDeclaration | SyntaxKind::GetAccessor | SyntaxKind::SetAccessor
    ) && ast
        .name(id)
        .is_some_and(|n| ast.kind(n) == SyntaxKind::PrivateIdentifier)
}

// ============================================================================
// Names and diagnostics
// ============================================================================

pub fn is_string_or_numeric_literal_like(ast: &Ast, id: NodeId) -> bool {
    matches!(
        ast.kind(id),
        SyntaxKind::StringLiteral | SyntaxKind::NumericLiteral | SyntaxKind::NoSubstitutionTemplateLiteral
    )
}

/// `-1` or `+1`.
pub fn is_signed_numeric_literal(ast: &Ast, id: NodeId) -> bool {
    match &ast.node(id).payload {
        NodePayload::Unary { operator, operand } if ast.kind(id) == SyntaxKind::PrefixUnaryExpression => {
            matches!(operator, SyntaxKind::PlusToken | SyntaxKind::MinusToken)
                && ast.kind(*operand) == SyntaxKind::NumericLiteral
        }
        _ => false,
    }
}

pub fn is_property_name_literal(ast: &Ast, id: NodeId) -> bool {
    ast.kind(id) == SyntaxKind::Identifier || is_string_or_numeric_literal_like(ast, id)
}

/// A computed or element-access name whose text is not known statically.
pub fn is_dynamic_name(ast: &Ast, name: NodeId) -> bool {
    let expression = match &ast.node(name).payload {
        NodePayload::Wrapped { expression } if ast.kind(name) == SyntaxKind::ComputedPropertyName => *expression,
        NodePayload::ElementAccess {
            argument_expression, ..
        } => skip_parentheses(ast, *argument_expression),
        _ => return false,
    };
    !is_string_or_numeric_literal_like(ast, expression) && !is_signed_numeric_literal(ast, expression)
}

pub fn has_dynamic_name(ast: &Ast, declaration: NodeId) -> bool {
    ast.name(declaration).is_some_and(|name| is_dynamic_name(ast, name))
}

/// A diagnostic located at the error span of `id`.
pub fn create_diagnostic_for_node(ast: &Ast, id: NodeId, message: &DiagnosticMessage, args: &[&str]) -> Diagnostic {
    let file = ast.file_of(id);
    Diagnostic::with_location(file.file_name.clone(), file.file_index, ast.error_span(id), message, args)
}

/// A diagnostic located at the first token of `id`.
pub fn create_diagnostic_for_first_token(
    ast: &Ast,
    id: NodeId,
    message: &DiagnosticMessage,
    args: &[&str],
) -> Diagnostic {
    let file = ast.file_of(id);
    Diagnostic::with_location(file.file_name.clone(), file.file_index, ast.first_token_span(id), message, args)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::AstBuilder;

    #[test]
    fn test_this_container_skips_arrows_unless_asked() {
        let mut b = AstBuilder::new();
        let this = b.token(SyntaxKind::ThisKeyword);
        let ret = b.return_statement(Some(this));
        let body = b.block(vec![ret]);
        let arrow = b.arrow_function(None, vec![], body);
        let stmt = b.expression_statement(arrow);
        let func = b.function_declaration(None, "f", vec![], Some(vec![stmt]));
        b.finish_file("a.ts", vec![func]);
        let ast = b.build();
        assert_eq!(get_this_container(&ast, this, false, false), func);
        assert_eq!(get_this_container(&ast, this, true, false), arrow);
    }

    #[test]
    fn test_combined_flags_reach_statement() {
        let mut b = AstBuilder::new();
        let mods = b.modifiers(&[SyntaxKind::ExportKeyword]);
        let x = b.identifier("x");
        let decl = b.variable_declaration(x, None, None);
        let stmt = b.variable_statement(mods, NodeFlags::CONST, vec![decl]);
        b.finish_file("a.ts", vec![stmt]);
        let ast = b.build();
        assert!(is_var_const(&ast, decl));
        assert!(get_combined_modifier_flags(&ast, decl).contains(ModifierFlags::EXPORT));
    }

    #[test]
    fn test_const_assertion() {
        let mut b = AstBuilder::new();
        let one = b.numeric_literal("1");
        let const_ref = b.type_reference("const", vec![]);
        let assertion = b.type_assertion(SyntaxKind::AsExpression, one, const_ref);
        let stmt = b.expression_statement(assertion);
        b.finish_file("a.ts", vec![stmt]);
        let ast = b.build();
        assert!(is_const_assertion(&ast, assertion));
    }
}

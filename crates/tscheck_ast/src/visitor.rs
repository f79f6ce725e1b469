//! Child iteration in source order.
//!
//! `visit_children` yields the direct children of a node, keeping node
//! lists intact so callers that care about list ranges (the builder's
//! position pass, trailing-comma checks) can see them. `Ast::for_each_child`
//! flattens the lists.

use crate::node::*;
use crate::syntax_kind::SyntaxKind;
use crate::types::NodeId;

/// What a node list holds; decides its delimiters in synthesized text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListRole {
    Modifiers,
    TypeParameters,
    TypeArguments,
    Parameters,
    Arguments,
    /// Braced members: class/interface/type-literal/object/enum bodies.
    Members,
    /// Braced statements of a block-like node.
    Statements,
    /// Unbraced statements (source file, case clause).
    BareStatements,
    /// Bracketed elements of tuples, array literals and array patterns.
    Elements,
    /// `|`- or `&`-separated constituents.
    Types,
    HeritageClauses,
    HeritageTypes,
    Declarations,
    TemplateSpans,
}

impl ListRole {
    /// Opening and closing delimiter, if any.
    pub fn delimiters(self) -> Option<(&'static str, &'static str)> {
        match self {
            ListRole::TypeParameters | ListRole::TypeArguments => Some(("<", ">")),
            ListRole::Parameters | ListRole::Arguments => Some(("(", ")")),
            ListRole::Members | ListRole::Statements => Some(("{", "}")),
            ListRole::Elements => Some(("[", "]")),
            _ => None,
        }
    }

    /// Separator emitted between elements.
    pub fn separator(self, owner: SyntaxKind) -> Option<&'static str> {
        match self {
            ListRole::Types => Some(if owner == SyntaxKind::IntersectionType { "&" } else { "|" }),
            ListRole::TypeParameters
            | ListRole::TypeArguments
            | ListRole::Parameters
            | ListRole::Arguments
            | ListRole::Elements
            | ListRole::HeritageTypes
            | ListRole::Declarations => Some(","),
            ListRole::Members => match owner {
                SyntaxKind::ObjectLiteralExpression
                | SyntaxKind::ObjectBindingPattern
                | SyntaxKind::NamedImports
                | SyntaxKind::NamedExports
                | SyntaxKind::EnumDeclaration => Some(","),
                _ => None,
            },
            _ => None,
        }
    }
}

/// A direct child: a single node or a whole list.
#[derive(Debug, Clone, Copy)]
pub enum Child<'a> {
    Node(NodeId),
    List(ListRole, &'a NodeList),
}

/// Role of the single list held by a `NodePayload::List` node.
pub fn list_role(kind: SyntaxKind) -> ListRole {
    match kind {
        SyntaxKind::Block | SyntaxKind::ModuleBlock | SyntaxKind::CaseBlock => ListRole::Statements,
        SyntaxKind::TupleType | SyntaxKind::ArrayLiteralExpression | SyntaxKind::ArrayBindingPattern => {
            ListRole::Elements
        }
        SyntaxKind::UnionType | SyntaxKind::IntersectionType => ListRole::Types,
        SyntaxKind::VariableDeclarationList => ListRole::Declarations,
        _ => ListRole::Members,
    }
}

/// Visit the direct children of `node` in source order. Stops and
/// returns `true` as soon as `f` does.
pub fn visit_children<'a>(node: &'a Node, f: &mut dyn FnMut(Child<'a>) -> bool) -> bool {
    macro_rules! visit {
        (node $e:expr) => {
            if f(Child::Node($e)) {
                return true;
            }
        };
        (opt $e:expr) => {
            if let Some(id) = $e {
                visit!(node id);
            }
        };
        (list $role:expr, $e:expr) => {
            if f(Child::List($role, $e)) {
                return true;
            }
        };
        (optlist $role:expr, $e:expr) => {
            if let Some(list) = $e {
                visit!(list $role, list);
            }
        };
    }

    match &node.payload {
        NodePayload::Token | NodePayload::Identifier { .. } | NodePayload::Literal { .. } => {}
        NodePayload::SourceFile(data) => visit!(list ListRole::BareStatements, &data.statements),
        NodePayload::QualifiedName { left, right } => {
            visit!(node *left);
            visit!(node *right);
        }
        NodePayload::Wrapped { expression } => visit!(node *expression),
        NodePayload::ReturnStatement { expression } => visit!(opt *expression),
        NodePayload::List(list) => visit!(list list_role(node.kind), list),
        NodePayload::FunctionLike(data) => {
            visit!(optlist ListRole::Modifiers, &data.modifiers);
            visit!(opt data.asterisk_token);
            visit!(opt data.name);
            visit!(opt data.postfix_token);
            visit!(optlist ListRole::TypeParameters, &data.type_parameters);
            visit!(list ListRole::Parameters, &data.parameters);
            visit!(opt data.type_node);
            visit!(opt data.equals_greater_than_token);
            visit!(opt data.body);
        }
        NodePayload::ClassLike(data) => {
            visit!(optlist ListRole::Modifiers, &data.modifiers);
            visit!(opt data.name);
            visit!(optlist ListRole::TypeParameters, &data.type_parameters);
            visit!(optlist ListRole::HeritageClauses, &data.heritage_clauses);
            visit!(list ListRole::Members, &data.members);
        }
        NodePayload::VariableLike(data) => {
            visit!(optlist ListRole::Modifiers, &data.modifiers);
            visit!(opt data.dot_dot_dot_token);
            visit!(opt data.property_name);
            visit!(node data.name);
            visit!(opt data.postfix_token);
            visit!(opt data.type_node);
            visit!(opt data.initializer);
        }
        NodePayload::TypeParameter { modifiers, name, constraint, default } => {
            visit!(optlist ListRole::Modifiers, modifiers);
            visit!(node *name);
            visit!(opt *constraint);
            visit!(opt *default);
        }
        NodePayload::TypeAlias { modifiers, name, type_parameters, type_node } => {
            visit!(optlist ListRole::Modifiers, modifiers);
            visit!(node *name);
            visit!(optlist ListRole::TypeParameters, type_parameters);
            visit!(node *type_node);
        }
        NodePayload::Enum { modifiers, name, members } => {
            visit!(optlist ListRole::Modifiers, modifiers);
            visit!(node *name);
            visit!(list ListRole::Members, members);
        }
        NodePayload::Module { modifiers, name, body } => {
            visit!(optlist ListRole::Modifiers, modifiers);
            visit!(node *name);
            visit!(opt *body);
        }
        NodePayload::VariableStatement { modifiers, declaration_list } => {
            visit!(optlist ListRole::Modifiers, modifiers);
            visit!(node *declaration_list);
        }
        NodePayload::HeritageClause { types, .. } => visit!(list ListRole::HeritageTypes, types),
        NodePayload::TypeReference { type_name, type_arguments } => {
            visit!(node *type_name);
            visit!(optlist ListRole::TypeArguments, type_arguments);
        }
        NodePayload::TypeOperator { type_node, .. } => visit!(node *type_node),
        NodePayload::IndexedAccessType { object_type, index_type } => {
            visit!(node *object_type);
            visit!(node *index_type);
        }
        NodePayload::ConditionalType { check_type, extends_type, true_type, false_type } => {
            visit!(node *check_type);
            visit!(node *extends_type);
            visit!(node *true_type);
            visit!(node *false_type);
        }
        NodePayload::InferType { type_parameter } => visit!(node *type_parameter),
        NodePayload::MappedType {
            readonly_token,
            type_parameter,
            name_type,
            question_token,
            type_node,
            members,
        } => {
            visit!(opt *readonly_token);
            visit!(node *type_parameter);
            visit!(opt *name_type);
            visit!(opt *question_token);
            visit!(opt *type_node);
            visit!(optlist ListRole::Members, members);
        }
        NodePayload::TemplateLiteral { head, spans } => {
            visit!(node *head);
            visit!(list ListRole::TemplateSpans, spans);
        }
        NodePayload::TemplateSpan { expression, literal } => {
            visit!(node *expression);
            visit!(node *literal);
        }
        NodePayload::TypePredicate { asserts_modifier, parameter_name, type_node } => {
            visit!(opt *asserts_modifier);
            visit!(node *parameter_name);
            visit!(opt *type_node);
        }
        NodePayload::ImportType { argument, qualifier, type_arguments, .. } => {
            visit!(node *argument);
            visit!(opt *qualifier);
            visit!(optlist ListRole::TypeArguments, type_arguments);
        }
        NodePayload::PropertyAccess { expression, question_dot_token, name } => {
            visit!(node *expression);
            visit!(opt *question_dot_token);
            visit!(node *name);
        }
        NodePayload::ElementAccess { expression, question_dot_token, argument_expression } => {
            visit!(node *expression);
            visit!(opt *question_dot_token);
            visit!(node *argument_expression);
        }
        NodePayload::Call { expression, question_dot_token, type_arguments, arguments } => {
            visit!(node *expression);
            visit!(opt *question_dot_token);
            visit!(optlist ListRole::TypeArguments, type_arguments);
            visit!(optlist ListRole::Arguments, arguments);
        }
        NodePayload::TaggedTemplate { tag, question_dot_token, type_arguments, template } => {
            visit!(node *tag);
            visit!(opt *question_dot_token);
            visit!(optlist ListRole::TypeArguments, type_arguments);
            visit!(node *template);
        }
        NodePayload::TypeAssertion { expression, type_node } => {
            if node.kind == SyntaxKind::TypeAssertionExpression {
                visit!(node *type_node);
                visit!(node *expression);
            } else {
                visit!(node *expression);
                visit!(node *type_node);
            }
        }
        NodePayload::Unary { operand, .. } => visit!(node *operand),
        NodePayload::Binary { left, operator_token, right } => {
            visit!(node *left);
            visit!(node *operator_token);
            visit!(node *right);
        }
        NodePayload::Conditional { condition, when_true, when_false } => {
            visit!(node *condition);
            visit!(node *when_true);
            visit!(node *when_false);
        }
        NodePayload::Yield { asterisk_token, expression } => {
            visit!(opt *asterisk_token);
            visit!(opt *expression);
        }
        NodePayload::MetaProperty { name, .. } => visit!(node *name),
        NodePayload::If { expression, then_statement, else_statement } => {
            visit!(node *expression);
            visit!(node *then_statement);
            visit!(opt *else_statement);
        }
        NodePayload::Loop { expression, statement } => {
            if node.kind == SyntaxKind::DoStatement {
                visit!(node *statement);
                visit!(node *expression);
            } else {
                visit!(node *expression);
                visit!(node *statement);
            }
        }
        NodePayload::For { initializer, condition, incrementor, statement } => {
            visit!(opt *initializer);
            visit!(opt *condition);
            visit!(opt *incrementor);
            visit!(node *statement);
        }
        NodePayload::ForInOrOf { await_modifier, initializer, expression, statement } => {
            visit!(opt *await_modifier);
            visit!(node *initializer);
            visit!(node *expression);
            visit!(node *statement);
        }
        NodePayload::Jump { label } => visit!(opt *label),
        NodePayload::With { expression, statement } => {
            visit!(node *expression);
            visit!(node *statement);
        }
        NodePayload::Switch { expression, case_block } => {
            visit!(node *expression);
            visit!(node *case_block);
        }
        NodePayload::Labeled { label, statement } => {
            visit!(node *label);
            visit!(node *statement);
        }
        NodePayload::Try { try_block, catch_clause, finally_block } => {
            visit!(node *try_block);
            visit!(opt *catch_clause);
            visit!(opt *finally_block);
        }
        NodePayload::CatchClause { variable_declaration, block } => {
            visit!(opt *variable_declaration);
            visit!(node *block);
        }
        NodePayload::CaseClause { expression, statements } => {
            visit!(opt *expression);
            visit!(list ListRole::BareStatements, statements);
        }
        NodePayload::ImportDeclaration { modifiers, import_clause, module_specifier } => {
            visit!(optlist ListRole::Modifiers, modifiers);
            visit!(opt *import_clause);
            visit!(node *module_specifier);
        }
        NodePayload::ImportEquals { modifiers, name, module_reference, .. } => {
            visit!(optlist ListRole::Modifiers, modifiers);
            visit!(node *name);
            visit!(node *module_reference);
        }
        NodePayload::ImportClause { name, named_bindings, .. } => {
            visit!(opt *name);
            visit!(opt *named_bindings);
        }
        NodePayload::Named { modifiers, name } => {
            visit!(optlist ListRole::Modifiers, modifiers);
            visit!(node *name);
        }
        NodePayload::Specifier { property_name, name, .. } => {
            visit!(opt *property_name);
            visit!(node *name);
        }
        NodePayload::ExportAssignment { modifiers, expression, .. } => {
            visit!(optlist ListRole::Modifiers, modifiers);
            visit!(node *expression);
        }
        NodePayload::ExportDeclaration { modifiers, export_clause, module_specifier, .. } => {
            visit!(optlist ListRole::Modifiers, modifiers);
            visit!(opt *export_clause);
            visit!(opt *module_specifier);
        }
    }
    false
}

/// Call `f` on each node list owned by `node`, in the same order
/// `visit_children` reports them.
pub fn for_each_list_mut(node: &mut Node, f: &mut dyn FnMut(&mut NodeList)) {
    fn opt(list: &mut Option<NodeList>, f: &mut dyn FnMut(&mut NodeList)) {
        if let Some(list) = list {
            f(list);
        }
    }
    match &mut node.payload {
        NodePayload::SourceFile(data) => f(&mut data.statements),
        NodePayload::List(list) => f(list),
        NodePayload::FunctionLike(data) => {
            opt(&mut data.modifiers, f);
            opt(&mut data.type_parameters, f);
            f(&mut data.parameters);
        }
        NodePayload::ClassLike(data) => {
            opt(&mut data.modifiers, f);
            opt(&mut data.type_parameters, f);
            opt(&mut data.heritage_clauses, f);
            f(&mut data.members);
        }
        NodePayload::VariableLike(data) => opt(&mut data.modifiers, f),
        NodePayload::TypeAlias { modifiers, type_parameters, .. } => {
            opt(modifiers, f);
            opt(type_parameters, f);
        }
        NodePayload::Enum { modifiers, members, .. } => {
            opt(modifiers, f);
            f(members);
        }
        NodePayload::TypeParameter { modifiers, .. }
        | NodePayload::Module { modifiers, .. }
        | NodePayload::VariableStatement { modifiers, .. }
        | NodePayload::ImportDeclaration { modifiers, .. }
        | NodePayload::ImportEquals { modifiers, .. }
        | NodePayload::Named { modifiers, .. }
        | NodePayload::ExportAssignment { modifiers, .. }
        | NodePayload::ExportDeclaration { modifiers, .. } => opt(modifiers, f),
        NodePayload::HeritageClause { types, .. } => f(types),
        NodePayload::MappedType { members, .. } => opt(members, f),
        NodePayload::TemplateLiteral { spans, .. } => f(spans),
        NodePayload::CaseClause { statements, .. } => f(statements),
        NodePayload::TypeReference { type_arguments, .. } | NodePayload::ImportType { type_arguments, .. } => {
            opt(type_arguments, f)
        }
        NodePayload::Call { type_arguments, arguments, .. } => {
            opt(type_arguments, f);
            opt(arguments, f);
        }
        NodePayload::TaggedTemplate { type_arguments, .. } => opt(type_arguments, f),
        _ => {}
    }
}

//! Assignment marking and switch exhaustiveness.

use crate::checker::Checker;
use crate::links::{ExhaustiveState, NodeCheckFlags};
use crate::signature::SignatureKind;
use crate::types::{TypeFlags, TypeId};
use tscheck_ast::types::{ModifierFlags, NodeFlags, NodeId, SymbolId};
use tscheck_ast::utilities::*;
use tscheck_ast::{NodePayload, SyntaxKind};

/// Names `typeof` can produce.
const TYPEOF_NAMES: [&str; 8] = [
    "string",
    "number",
    "bigint",
    "boolean",
    "symbol",
    "undefined",
    "object",
    "function",
];

fn is_function_or_source_file(ast: &tscheck_ast::Ast, node: NodeId) -> bool {
    ast.kind(node) == SyntaxKind::SourceFile || is_function_like(ast, node)
}

impl<'a> Checker<'a> {
    /// Parameters, catch variables and non-exported `let` locals.
    fn is_parameter_or_mutable_local_variable(&self, symbol: SymbolId) -> bool {
        let ast = self.ast;
        let Some(value_declaration) = self.symbol(symbol).value_declaration else {
            return false;
        };
        let declaration = get_root_declaration(ast, value_declaration);
        match ast.kind(declaration) {
            SyntaxKind::Parameter => true,
            SyntaxKind::VariableDeclaration => {
                let Some(list) = ast.parent(declaration) else {
                    return false;
                };
                if ast.kind(list) == SyntaxKind::CatchClause {
                    return true;
                }
                let is_let = ast.node(list).flags.contains(NodeFlags::LET);
                let is_exported = get_combined_modifier_flags(ast, declaration).contains(ModifierFlags::EXPORT);
                let is_global = ast.parent(list).is_some_and(|statement| {
                    ast.kind(statement) == SyntaxKind::VariableStatement
                        && ast.parent(statement).is_some_and(|file| is_global_source_file(ast, file))
                });
                is_let && !is_exported && !is_global
            }
            _ => false,
        }
    }

    /// Record an assignment to `symbol` through the identifier `node`.
    /// Assignments from a nested function make every later read suspect.
    pub(crate) fn mark_assignment(&mut self, node: NodeId, symbol: SymbolId) {
        let ast = self.ast;
        let Some(target) = get_assignment_target(ast, node) else {
            return;
        };
        if !self.is_parameter_or_mutable_local_variable(symbol) {
            return;
        }
        let Some(declaration) = self.symbol(symbol).value_declaration else {
            return;
        };
        let is_definite = match &ast.node(target).payload {
            NodePayload::Binary { operator_token, .. } => ast.kind(*operator_token) == SyntaxKind::EqualsToken,
            NodePayload::ForInOrOf { .. } => true,
            _ => false,
        };
        let referencing = find_ancestor(ast, Some(node), |n| is_function_or_source_file(ast, n));
        let declaring = find_ancestor(ast, Some(declaration), |n| is_function_or_source_file(ast, n));
        let position = if referencing == declaring {
            extend_assignment_position(ast, node, declaration)
        } else {
            u32::MAX
        };
        let links = self.marked_assignment_symbol_links.get_or_insert(symbol);
        links.last_assignment_pos = Some(links.last_assignment_pos.map_or(position, |last| last.max(position)));
        links.has_definite_assignment |= is_definite;
    }

    /// Mark every assignment in the function or file declaring `symbol`,
    /// once per container.
    fn ensure_assignments_marked(&mut self, symbol: SymbolId) {
        let ast = self.ast;
        if self
            .marked_assignment_symbol_links
            .try_get(symbol)
            .is_some_and(|links| links.last_assignment_pos.is_some())
        {
            return;
        }
        let Some(declaration) = self.symbol(symbol).value_declaration else {
            return;
        };
        let Some(container) = find_ancestor(ast, Some(declaration), |n| is_function_or_source_file(ast, n)) else {
            return;
        };
        let flags = &mut self.node_links.get_or_insert(container).flags;
        if flags.contains(NodeCheckFlags::ASSIGNMENTS_MARKED) {
            return;
        }
        *flags |= NodeCheckFlags::ASSIGNMENTS_MARKED;
        let marked_above = find_ancestor(ast, ast.parent(container), |n| {
            is_function_or_source_file(ast, n)
                && self
                    .node_links
                    .try_get(n)
                    .is_some_and(|links| links.flags.contains(NodeCheckFlags::ASSIGNMENTS_MARKED))
        });
        if marked_above.is_none() {
            self.mark_node_assignments(container);
        }
    }

    fn mark_node_assignments(&mut self, node: NodeId) {
        let ast = self.ast;
        match ast.kind(node) {
            SyntaxKind::Identifier => {
                if is_assignment_target(ast, node) {
                    if let Some(symbol) = self.get_resolved_symbol(node) {
                        self.mark_assignment(node, symbol);
                    }
                }
                return;
            }
            SyntaxKind::InterfaceDeclaration | SyntaxKind::TypeAliasDeclaration | SyntaxKind::EnumDeclaration => {
                return;
            }
            _ if is_part_of_type_node(ast, node) => return,
            _ => {}
        }
        for child in ast.children(node) {
            self.mark_node_assignments(child);
        }
    }

    /// `symbol` is assigned somewhere after its declaration.
    pub fn is_symbol_assigned(&mut self, symbol: SymbolId) -> bool {
        self.ensure_assignments_marked(symbol);
        self.marked_assignment_symbol_links
            .try_get(symbol)
            .is_some_and(|links| links.last_assignment_pos.is_some())
    }

    /// `symbol` is assigned with a plain `=` or a `for-in/of` somewhere.
    pub fn is_symbol_assigned_definitely(&mut self, symbol: SymbolId) -> bool {
        self.ensure_assignments_marked(symbol);
        self.marked_assignment_symbol_links
            .try_get(symbol)
            .is_some_and(|links| links.has_definite_assignment)
    }

    /// No assignment to `symbol` can happen at or after `location`.
    pub fn is_past_last_assignment(&mut self, symbol: SymbolId, location: NodeId) -> bool {
        self.ensure_assignments_marked(symbol);
        match self.marked_assignment_symbol_links.try_get(symbol).and_then(|l| l.last_assignment_pos) {
            None => true,
            Some(last) => last < self.ast.range(location).pos,
        }
    }

    /// The clauses of a switch cover every value of its operand. A
    /// switch that depends on itself is not exhaustive.
    pub fn is_exhaustive_switch_statement(&mut self, node: NodeId) -> bool {
        let state = self.switch_statement_links.get_or_insert(node).exhaustive_state;
        match state {
            ExhaustiveState::Unknown => {
                self.switch_statement_links.get_or_insert(node).exhaustive_state = ExhaustiveState::Computing;
                let is_exhaustive = self.compute_exhaustive_switch_statement(node);
                let links = self.switch_statement_links.get_or_insert(node);
                if links.exhaustive_state == ExhaustiveState::Computing {
                    links.exhaustive_state = if is_exhaustive {
                        ExhaustiveState::True
                    } else {
                        ExhaustiveState::False
                    };
                }
            }
            ExhaustiveState::Computing => {
                self.switch_statement_links.get_or_insert(node).exhaustive_state = ExhaustiveState::False;
            }
            ExhaustiveState::False | ExhaustiveState::True => {}
        }
        self.switch_statement_links.get_or_insert(node).exhaustive_state == ExhaustiveState::True
    }

    fn compute_exhaustive_switch_statement(&mut self, node: NodeId) -> bool {
        let ast = self.ast;
        let NodePayload::Switch { expression, .. } = &ast.node(node).payload else {
            return false;
        };
        let expression = skip_parentheses(ast, *expression);
        if ast.kind(expression) == SyntaxKind::TypeOfExpression {
            return self.compute_exhaustive_typeof_switch(node, expression);
        }
        let operand = self.get_type_of_expression(expression);
        let is_unit_union = self.types.every_type(operand, |t| t.flags.intersects(TypeFlags::UNIT));
        if !is_unit_union {
            return false;
        }
        let switch_types = self.get_switch_clause_types(node);
        if switch_types.is_empty() {
            return false;
        }
        let is_unit_or_never = |types: &crate::types::TypeTable, t: TypeId| {
            types.get(t).flags.intersects(TypeFlags::UNIT | TypeFlags::NEVER)
        };
        if !switch_types.iter().all(|&t| is_unit_or_never(&self.types, t)) {
            return false;
        }
        self.types
            .distributed(operand)
            .iter()
            .all(|constituent| switch_types.contains(constituent))
    }

    /// Type of each clause in order, `never` for `default`.
    fn get_switch_clause_types(&mut self, node: NodeId) -> Vec<TypeId> {
        if let Some(types) = self
            .switch_statement_links
            .try_get(node)
            .and_then(|links| links.switch_types.clone())
        {
            return types;
        }
        let clauses = self.switch_clauses(node);
        let mut types = Vec::with_capacity(clauses.len());
        for clause in clauses {
            let t = match &self.ast.node(clause).payload {
                NodePayload::CaseClause {
                    expression: Some(expression),
                    ..
                } => self.get_type_of_expression(*expression),
                _ => self.types.never_type,
            };
            types.push(t);
        }
        self.switch_statement_links.get_or_insert(node).switch_types = Some(types.clone());
        types
    }

    fn switch_clauses(&self, node: NodeId) -> Vec<NodeId> {
        let ast = self.ast;
        match &ast.node(node).payload {
            NodePayload::Switch { case_block, .. } => ast.children(*case_block),
            _ => Vec::new(),
        }
    }

    /// `switch (typeof x)` covers every `typeof` result `x` can have.
    fn compute_exhaustive_typeof_switch(&mut self, node: NodeId, typeof_expression: NodeId) -> bool {
        let ast = self.ast;
        let mut witnesses: Vec<&str> = Vec::new();
        for clause in self.switch_clauses(node) {
            let NodePayload::CaseClause {
                expression: Some(expression),
                ..
            } = &ast.node(clause).payload
            else {
                continue;
            };
            if !matches!(
                ast.kind(*expression),
                SyntaxKind::StringLiteral | SyntaxKind::NoSubstitutionTemplateLiteral
            ) {
                return false;
            }
            witnesses.push(ast.text(*expression));
        }
        let Some(operand_expression) = ast.expression(typeof_expression) else {
            return false;
        };
        let operand = self.get_type_of_expression(operand_expression);
        if self.types.get(operand).flags.intersects(TypeFlags::ANY_OR_UNKNOWN) {
            return TYPEOF_NAMES.iter().all(|name| witnesses.contains(name));
        }
        let constituents = self.types.distributed(operand).to_vec();
        for constituent in constituents {
            let Some(name) = self.typeof_name(constituent) else {
                return false;
            };
            if !witnesses.contains(&name) {
                return false;
            }
        }
        true
    }

    /// What `typeof` yields for a value of type `t`.
    fn typeof_name(&mut self, t: TypeId) -> Option<&'static str> {
        let flags = self.types.get(t).flags;
        let name = if flags.intersects(TypeFlags::STRING_LIKE) {
            "string"
        } else if flags.intersects(TypeFlags::NUMBER_LIKE) {
            "number"
        } else if flags.intersects(TypeFlags::BIG_INT_LIKE) {
            "bigint"
        } else if flags.intersects(TypeFlags::BOOLEAN_LIKE) {
            "boolean"
        } else if flags.intersects(TypeFlags::ES_SYMBOL_LIKE) {
            "symbol"
        } else if flags.intersects(TypeFlags::VOID_LIKE) {
            "undefined"
        } else if flags.intersects(TypeFlags::NULL | TypeFlags::NON_PRIMITIVE) {
            "object"
        } else if flags.intersects(TypeFlags::OBJECT) {
            let callable = !self.get_signatures_of_type(t, SignatureKind::Call).is_empty()
                || !self.get_signatures_of_type(t, SignatureKind::Construct).is_empty();
            if callable {
                "function"
            } else {
                "object"
            }
        } else {
            return None;
        };
        Some(name)
    }
}

/// End of the outermost statement between `node` and `declaration` that
/// contains the assignment, so that reads later in the same statement
/// see it.
fn extend_assignment_position(ast: &tscheck_ast::Ast, node: NodeId, declaration: NodeId) -> u32 {
    let declaration_pos = ast.range(declaration).pos;
    let mut position = ast.range(node).pos;
    let mut current = Some(node);
    while let Some(n) = current {
        if ast.range(n).pos <= declaration_pos {
            break;
        }
        if matches!(
            ast.kind(n),
            SyntaxKind::VariableStatement
                | SyntaxKind::ExpressionStatement
                | SyntaxKind::IfStatement
                | SyntaxKind::DoStatement
                | SyntaxKind::WhileStatement
                | SyntaxKind::ForStatement
                | SyntaxKind::ForInStatement
                | SyntaxKind::ForOfStatement
                | SyntaxKind::WithStatement
                | SyntaxKind::SwitchStatement
                | SyntaxKind::TryStatement
                | SyntaxKind::ClassDeclaration
        ) {
            position = ast.range(n).end;
        }
        current = ast.parent(n);
    }
    position
}

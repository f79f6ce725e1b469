//! Constant evaluation of enum member initializers and the declared
//! types of enums.

use crate::checker::Checker;
use crate::links::{EnumValue, NodeCheckFlags};
use crate::type_nodes::number_to_property_name;
use crate::types::{LiteralValue, TypeId};
use tracing::debug;
use tscheck_ast::types::{NodeId, SymbolFlags, SymbolId};
use tscheck_ast::utilities::*;
use tscheck_ast::{NodePayload, SyntaxKind};
use tscheck_diagnostics::messages;

/// Value of a numeric literal's source text: decimal, `0x`, `0o`, `0b`,
/// legacy octal, with `_` separators.
pub(crate) fn parse_numeric_literal(text: &str) -> f64 {
    let text: String = text.chars().filter(|&c| c != '_').collect();
    let radix_digits = |digits: &str, radix: u32| {
        digits
            .chars()
            .try_fold(0f64, |acc, c| c.to_digit(radix).map(|d| acc * radix as f64 + d as f64))
            .unwrap_or(f64::NAN)
    };
    let bytes = text.as_bytes();
    if bytes.len() > 2 && bytes[0] == b'0' {
        match bytes[1] {
            b'x' | b'X' => return radix_digits(&text[2..], 16),
            b'o' | b'O' => return radix_digits(&text[2..], 8),
            b'b' | b'B' => return radix_digits(&text[2..], 2),
            _ => {}
        }
    }
    if bytes.len() > 1 && bytes[0] == b'0' && text.chars().all(|c| matches!(c, '0'..='7')) {
        return radix_digits(&text[1..], 8);
    }
    text.parse::<f64>().unwrap_or(f64::NAN)
}

/// ECMAScript ToInt32.
fn to_int32(value: f64) -> i32 {
    if !value.is_finite() {
        return 0;
    }
    let truncated = value.trunc() % 4_294_967_296.0;
    let wrapped = if truncated < 0.0 { truncated + 4_294_967_296.0 } else { truncated };
    (wrapped as u32) as i32
}

fn enum_value_to_string(value: &EnumValue) -> String {
    match value {
        EnumValue::String(s) => s.clone(),
        EnumValue::Number(n) if n.is_nan() => "NaN".to_string(),
        EnumValue::Number(n) => number_to_property_name(*n),
    }
}

impl<'a> Checker<'a> {
    /// Compute and store the value of every member of an enum
    /// declaration. Runs once per declaration.
    pub(crate) fn compute_enum_member_values(&mut self, declaration: NodeId) {
        let flags = &mut self.node_links.get_or_insert(declaration).flags;
        if flags.contains(NodeCheckFlags::ENUM_VALUES_COMPUTED) {
            return;
        }
        *flags |= NodeCheckFlags::ENUM_VALUES_COMPUTED;
        let ast = self.ast;
        let members: Vec<NodeId> = ast.members(declaration).map(|list| list.iter().collect()).unwrap_or_default();
        let is_const = is_enum_const(ast, declaration);
        let mut auto_value = Some(0.0);
        for member in members {
            let value = match ast.initializer(member) {
                Some(initializer) => self.compute_constant_enum_member_value(member, initializer, is_const),
                None => match auto_value {
                    Some(n) => Some(EnumValue::Number(n)),
                    None => {
                        self.error(
                            ast.name(member).unwrap_or(member),
                            &messages::ENUM_MEMBER_MUST_HAVE_INITIALIZER,
                            &[],
                        );
                        None
                    }
                },
            };
            auto_value = match &value {
                Some(EnumValue::Number(n)) => Some(n + 1.0),
                _ => None,
            };
            self.enum_member_links.get_or_insert(member).value = value;
        }
        debug!(declaration = declaration.0, "computed enum member values");
    }

    fn compute_constant_enum_member_value(
        &mut self,
        member: NodeId,
        initializer: NodeId,
        is_const: bool,
    ) -> Option<EnumValue> {
        let value = self.evaluate(initializer, member);
        if !is_const {
            return value;
        }
        match value {
            None => {
                self.error(
                    initializer,
                    &messages::CONST_ENUM_MEMBER_INITIALIZERS_MUST_BE_CONSTANT_EXPRESSIONS,
                    &[],
                );
                None
            }
            Some(EnumValue::Number(n)) if n.is_nan() => {
                self.error(
                    initializer,
                    &messages::CONST_ENUM_MEMBER_INITIALIZER_WAS_EVALUATED_TO_DISALLOWED_VALUE_NAN,
                    &[],
                );
                Some(EnumValue::Number(0.0))
            }
            Some(EnumValue::Number(n)) if n.is_infinite() => {
                self.error(
                    initializer,
                    &messages::CONST_ENUM_MEMBER_INITIALIZER_WAS_EVALUATED_TO_A_NON_FINITE_VALUE,
                    &[],
                );
                Some(EnumValue::Number(0.0))
            }
            value => value,
        }
    }

    /// Constant value of `expr`, an initializer of `location`'s enum.
    fn evaluate(&mut self, expr: NodeId, location: NodeId) -> Option<EnumValue> {
        let ast = self.ast;
        match &ast.node(expr).payload {
            NodePayload::Literal { text } => match ast.kind(expr) {
                SyntaxKind::NumericLiteral => Some(EnumValue::Number(parse_numeric_literal(text))),
                SyntaxKind::StringLiteral | SyntaxKind::NoSubstitutionTemplateLiteral => {
                    Some(EnumValue::String(text.clone()))
                }
                _ => None,
            },
            NodePayload::Wrapped { expression } if ast.kind(expr) == SyntaxKind::ParenthesizedExpression => {
                self.evaluate(*expression, location)
            }
            NodePayload::Unary { operator, operand } if ast.kind(expr) == SyntaxKind::PrefixUnaryExpression => {
                let EnumValue::Number(n) = self.evaluate(*operand, location)? else {
                    return None;
                };
                match operator {
                    SyntaxKind::PlusToken => Some(EnumValue::Number(n)),
                    SyntaxKind::MinusToken => Some(EnumValue::Number(-n)),
                    SyntaxKind::TildeToken => Some(EnumValue::Number(!to_int32(n) as f64)),
                    _ => None,
                }
            }
            NodePayload::Binary { left, right, .. } => {
                let operator = binary_operator(ast, expr)?;
                let left = self.evaluate(*left, location)?;
                let right = self.evaluate(*right, location)?;
                evaluate_binary(operator, left, right)
            }
            NodePayload::TemplateLiteral { head, spans } if ast.kind(expr) == SyntaxKind::TemplateExpression => {
                let mut result = ast.text(*head).to_string();
                for span in spans.iter() {
                    let NodePayload::TemplateSpan { expression, literal } = &ast.node(span).payload else {
                        return None;
                    };
                    let value = self.evaluate(*expression, location)?;
                    result.push_str(&enum_value_to_string(&value));
                    result.push_str(ast.text(*literal));
                }
                Some(EnumValue::String(result))
            }
            NodePayload::Identifier { .. } => match ast.text(expr) {
                "Infinity" => Some(EnumValue::Number(f64::INFINITY)),
                "NaN" => Some(EnumValue::Number(f64::NAN)),
                text => {
                    let enum_symbol = ast.parent(location).and_then(|d| ast.symbol(d));
                    let name = ast.interner().get(text)?;
                    let member = enum_symbol
                        .and_then(|e| self.symbol(e).exports.as_ref())
                        .and_then(|exports| exports.get(name))
                        .or_else(|| self.resolve_entity_name(expr, SymbolFlags::VALUE, true, false))?;
                    self.evaluate_enum_member_reference(member, expr, location)
                }
            },
            NodePayload::PropertyAccess { .. } => {
                let member = self.resolve_entity_name(expr, SymbolFlags::VALUE, true, false)?;
                self.evaluate_enum_member_reference(member, expr, location)
            }
            NodePayload::ElementAccess {
                expression,
                argument_expression,
                ..
            } if ast.kind(*argument_expression) == SyntaxKind::StringLiteral => {
                let enum_symbol = self.resolve_entity_name(*expression, SymbolFlags::VALUE, true, false)?;
                let name = ast.interner().get(ast.text(*argument_expression))?;
                let member = self.symbol(enum_symbol).exports.as_ref()?.get(name)?;
                self.evaluate_enum_member_reference(member, expr, location)
            }
            _ => None,
        }
    }

    /// Value of an enum member used inside another member's initializer.
    /// Members of the same declaration must come first.
    fn evaluate_enum_member_reference(&mut self, member: SymbolId, reference: NodeId, location: NodeId) -> Option<EnumValue> {
        let ast = self.ast;
        if !self.symbol(member).has_flags(SymbolFlags::ENUM_MEMBER) {
            return None;
        }
        let declaration = self.symbol(member).value_declaration?;
        let enum_declaration = ast.parent(declaration)?;
        if enum_declaration == ast.parent(location)? {
            let members = ast.members(enum_declaration)?;
            let referenced = members.iter().position(|m| m == declaration);
            let current = members.iter().position(|m| m == location);
            if referenced >= current {
                self.error(
                    reference,
                    &messages::A_MEMBER_INITIALIZER_IN_A_ENUM_DECLARATION_CANNOT_REFERENCE_MEMBERS_DECLARED_AFTER_IT_INCLUDING_MEMBERS_DEFINED_IN_OTHER_ENUMS,
                    &[],
                );
                return None;
            }
        } else {
            self.compute_enum_member_values(enum_declaration);
        }
        self.enum_member_links.try_get(declaration).and_then(|links| links.value.clone())
    }

    /// Value of an enum member after its enum has been evaluated.
    pub fn get_enum_member_value(&mut self, declaration: NodeId) -> Option<EnumValue> {
        let enum_declaration = self.ast.parent(declaration)?;
        self.compute_enum_member_values(enum_declaration);
        self.enum_member_links.try_get(declaration).and_then(|links| links.value.clone())
    }

    /// Every member of every declaration of the enum has a known value.
    fn is_literal_enum(&mut self, symbol: SymbolId) -> bool {
        let ast = self.ast;
        let declarations: Vec<NodeId> = self
            .symbol(symbol)
            .declarations
            .iter()
            .copied()
            .filter(|&d| ast.kind(d) == SyntaxKind::EnumDeclaration)
            .collect();
        let mut is_literal = true;
        for declaration in declarations {
            self.compute_enum_member_values(declaration);
            for member in ast.members(declaration).into_iter().flatten() {
                is_literal &= self.enum_member_links.try_get(member).is_some_and(|l| l.value.is_some());
            }
        }
        is_literal
    }

    /// A literal enum is the union of its members' literal types; any
    /// other enum is an opaque enum type.
    pub(crate) fn get_declared_type_of_enum(&mut self, symbol: SymbolId) -> TypeId {
        if let Some(t) = self.declared_type_links.try_get(symbol).and_then(|l| l.declared_type) {
            return t;
        }
        let t = if self.is_literal_enum(symbol) {
            let ast = self.ast;
            let members: Vec<SymbolId> = self
                .symbol(symbol)
                .exports
                .as_ref()
                .map(|exports| exports.iter().map(|(_, member)| member).collect())
                .unwrap_or_default();
            let mut member_types = Vec::with_capacity(members.len());
            for member in members {
                if self.symbol(member).has_flags(SymbolFlags::ENUM_MEMBER) {
                    member_types.push(self.get_declared_type_of_enum_member(member));
                }
            }
            if member_types.is_empty() {
                self.types.create_enum_type(symbol)
            } else {
                self.types.get_union_type(ast, self.binding, &member_types)
            }
        } else {
            self.types.create_enum_type(symbol)
        };
        self.declared_type_links.get_or_insert(symbol).declared_type = Some(t);
        t
    }

    /// The member's literal type in a literal enum, else the enum type.
    pub(crate) fn get_declared_type_of_enum_member(&mut self, symbol: SymbolId) -> TypeId {
        if let Some(t) = self.declared_type_links.try_get(symbol).and_then(|l| l.declared_type) {
            return t;
        }
        let Some(parent) = self.symbol(symbol).parent else {
            return self.types.error_type;
        };
        let t = if self.is_literal_enum(parent) {
            let value = self
                .symbol(symbol)
                .value_declaration
                .and_then(|d| self.enum_member_links.try_get(d))
                .and_then(|l| l.value.clone());
            match value {
                Some(EnumValue::Number(n)) => self.types.create_enum_literal_type(symbol, LiteralValue::Number(n)),
                Some(EnumValue::String(s)) => self.types.create_enum_literal_type(symbol, LiteralValue::String(s)),
                None => self.types.error_type,
            }
        } else {
            self.get_declared_type_of_enum(parent)
        };
        self.declared_type_links.get_or_insert(symbol).declared_type = Some(t);
        t
    }
}

fn evaluate_binary(operator: SyntaxKind, left: EnumValue, right: EnumValue) -> Option<EnumValue> {
    match (left, right) {
        (EnumValue::Number(l), EnumValue::Number(r)) => {
            let value = match operator {
                SyntaxKind::PlusToken => l + r,
                SyntaxKind::MinusToken => l - r,
                SyntaxKind::AsteriskToken => l * r,
                SyntaxKind::SlashToken => l / r,
                SyntaxKind::PercentToken => l % r,
                SyntaxKind::AsteriskAsteriskToken => l.powf(r),
                SyntaxKind::BarToken => (to_int32(l) | to_int32(r)) as f64,
                SyntaxKind::AmpersandToken => (to_int32(l) & to_int32(r)) as f64,
                SyntaxKind::CaretToken => (to_int32(l) ^ to_int32(r)) as f64,
                SyntaxKind::LessThanLessThanToken => to_int32(l).wrapping_shl(to_int32(r) as u32 & 31) as f64,
                SyntaxKind::GreaterThanGreaterThanToken => to_int32(l).wrapping_shr(to_int32(r) as u32 & 31) as f64,
                SyntaxKind::GreaterThanGreaterThanGreaterThanToken => {
                    (to_int32(l) as u32).wrapping_shr(to_int32(r) as u32 & 31) as f64
                }
                _ => return None,
            };
            Some(EnumValue::Number(value))
        }
        (left, right) if operator == SyntaxKind::PlusToken => Some(EnumValue::String(format!(
            "{}{}",
            enum_value_to_string(&left),
            enum_value_to_string(&right)
        ))),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_numeric_literal_forms() {
        assert_eq!(parse_numeric_literal("42"), 42.0);
        assert_eq!(parse_numeric_literal("1_000"), 1000.0);
        assert_eq!(parse_numeric_literal("0xff"), 255.0);
        assert_eq!(parse_numeric_literal("0o17"), 15.0);
        assert_eq!(parse_numeric_literal("0b101"), 5.0);
        assert_eq!(parse_numeric_literal("017"), 15.0);
        assert_eq!(parse_numeric_literal("1.5e3"), 1500.0);
    }

    #[test]
    fn bitwise_operators_use_int32_semantics() {
        let shift = evaluate_binary(SyntaxKind::LessThanLessThanToken, EnumValue::Number(1.0), EnumValue::Number(31.0));
        assert_eq!(shift, Some(EnumValue::Number(-2147483648.0)));
        let unsigned = evaluate_binary(
            SyntaxKind::GreaterThanGreaterThanGreaterThanToken,
            EnumValue::Number(-1.0),
            EnumValue::Number(28.0),
        );
        assert_eq!(unsigned, Some(EnumValue::Number(15.0)));
    }

    #[test]
    fn string_concatenation_formats_numbers() {
        let value = evaluate_binary(SyntaxKind::PlusToken, EnumValue::String("a".into()), EnumValue::Number(1.0));
        assert_eq!(value, Some(EnumValue::String("a1".into())));
        assert_eq!(evaluate_binary(SyntaxKind::MinusToken, EnumValue::String("a".into()), EnumValue::Number(1.0)), None);
    }
}

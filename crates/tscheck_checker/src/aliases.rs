//! Import and export aliases, and the modules they point into.

use crate::checker::Checker;
use rustc_hash::FxHashSet;
use tracing::trace;
use tscheck_ast::types::{NodeId, SymbolFlags, SymbolId};
use tscheck_ast::utilities::*;
use tscheck_ast::{NodePayload, SyntaxKind};
use tscheck_binder::{internal_names, remove_file_extension, SymbolTable};
use tscheck_core::InternedString;
use tscheck_diagnostics::messages;

/// Resolve `reference` against the directory of `from` and drop the
/// extension. Bare names are returned unchanged.
fn normalize_module_path(from: &str, reference: &str) -> String {
    let reference = remove_file_extension(reference);
    let is_relative = reference.starts_with("./") || reference.starts_with("../");
    let mut parts: Vec<&str> = Vec::new();
    if is_relative {
        if let Some((dir, _)) = from.rsplit_once('/') {
            parts.extend(dir.split('/').filter(|p| !p.is_empty() && *p != "."));
        }
    }
    for part in reference.split('/') {
        match part {
            "" | "." => {}
            ".." => {
                parts.pop();
            }
            _ => parts.push(part),
        }
    }
    parts.join("/")
}

fn is_external_module_name_relative(name: &str) -> bool {
    name.starts_with("./") || name.starts_with("../") || name.starts_with('/')
}

impl<'a> Checker<'a> {
    fn is_alias_symbol_declaration(&self, node: NodeId) -> bool {
        let ast = self.ast;
        match ast.kind(node) {
            SyntaxKind::ImportEqualsDeclaration
            | SyntaxKind::NamespaceImport
            | SyntaxKind::NamespaceExport
            | SyntaxKind::ImportSpecifier
            | SyntaxKind::ExportSpecifier
            | SyntaxKind::NamespaceExportDeclaration => true,
            SyntaxKind::ImportClause => ast.name(node).is_some(),
            SyntaxKind::ExportAssignment => ast
                .expression(node)
                .is_some_and(|e| is_entity_name_expression(ast, e)),
            _ => false,
        }
    }

    /// The declaration an alias symbol was created from.
    pub(crate) fn get_declaration_of_alias_symbol(&self, symbol: SymbolId) -> Option<NodeId> {
        self.symbol(symbol)
            .declarations
            .iter()
            .rev()
            .copied()
            .find(|&d| self.is_alias_symbol_declaration(d))
    }

    /// The final target of an alias. A chain of aliases that leads back
    /// to itself is reported once and resolves to nothing.
    pub fn resolve_alias(&mut self, symbol: SymbolId) -> Option<SymbolId> {
        let links = self.alias_symbol_links.get_or_insert(symbol);
        if links.alias_target_resolved {
            return links.alias_target;
        }
        if links.resolving {
            links.alias_target_resolved = true;
            links.alias_target = None;
            return None;
        }
        links.resolving = true;
        let Some(node) = self.get_declaration_of_alias_symbol(symbol) else {
            let links = self.alias_symbol_links.get_or_insert(symbol);
            links.resolving = false;
            links.alias_target_resolved = true;
            return None;
        };
        let target = self.get_target_of_alias_declaration(node, false);
        let links = self.alias_symbol_links.get_or_insert(symbol);
        links.resolving = false;
        if links.alias_target_resolved {
            let name = self.symbol_name(symbol);
            self.error(node, &messages::CIRCULAR_DEFINITION_OF_IMPORT_ALIAS_0, &[name]);
            return None;
        }
        links.alias_target = target;
        links.alias_target_resolved = true;
        trace!(alias = symbol.0, target = ?target.map(|t| t.0), "resolved alias");
        target
    }

    /// The symbol an alias names directly, without following further
    /// aliases.
    pub fn get_immediate_aliased_symbol(&mut self, symbol: SymbolId) -> Option<SymbolId> {
        if let Some(target) = self.alias_symbol_links.try_get(symbol).and_then(|l| l.immediate_target) {
            return Some(target);
        }
        let node = self.get_declaration_of_alias_symbol(symbol)?;
        let target = self.get_target_of_alias_declaration(node, true);
        self.alias_symbol_links.get_or_insert(symbol).immediate_target = target;
        target
    }

    /// Aliases resolve to their target. Unresolvable aliases stay as they are.
    pub(crate) fn resolve_symbol(&mut self, symbol: SymbolId) -> SymbolId {
        self.resolve_symbol_ex(symbol, false)
    }

    fn resolve_symbol_ex(&mut self, symbol: SymbolId, dont_resolve_alias: bool) -> SymbolId {
        if dont_resolve_alias || !self.symbol(symbol).has_flags(SymbolFlags::ALIAS) {
            return symbol;
        }
        self.resolve_alias(symbol).unwrap_or(symbol)
    }

    /// Flags of `symbol` combined with those of every alias target on
    /// its chain. An alias that resolves to nothing has every flag.
    pub(crate) fn get_symbol_flags_of_alias(&mut self, symbol: SymbolId) -> SymbolFlags {
        let mut flags = self.symbol(symbol).flags;
        let mut current = symbol;
        let mut seen: FxHashSet<SymbolId> = FxHashSet::default();
        seen.insert(symbol);
        while self.symbol(current).has_flags(SymbolFlags::ALIAS) {
            let Some(target) = self.resolve_alias(current) else {
                return SymbolFlags::all();
            };
            if !seen.insert(target) {
                break;
            }
            flags |= self.symbol(target).flags;
            current = target;
        }
        flags
    }

    fn get_target_of_alias_declaration(&mut self, node: NodeId, dont_resolve_alias: bool) -> Option<SymbolId> {
        match self.ast.kind(node) {
            SyntaxKind::ImportEqualsDeclaration => self.get_target_of_import_equals_declaration(node, dont_resolve_alias),
            SyntaxKind::ImportClause => self.get_target_of_import_clause(node, dont_resolve_alias),
            SyntaxKind::NamespaceImport | SyntaxKind::NamespaceExport => {
                self.get_target_of_namespace_import_or_export(node)
            }
            SyntaxKind::ImportSpecifier => self.get_target_of_import_specifier(node, dont_resolve_alias),
            SyntaxKind::ExportSpecifier => self.get_target_of_export_specifier(node, dont_resolve_alias),
            SyntaxKind::ExportAssignment => {
                let expression = self.ast.expression(node)?;
                let meaning = SymbolFlags::VALUE | SymbolFlags::TYPE | SymbolFlags::NAMESPACE;
                self.resolve_entity_name(expression, meaning, true, dont_resolve_alias)
            }
            SyntaxKind::NamespaceExportDeclaration => {
                let file = self.ast.parent(node)?;
                let module = self.ast.symbol(file)?;
                Some(self.resolve_external_module_symbol(module))
            }
            _ => None,
        }
    }

    fn get_target_of_import_equals_declaration(&mut self, node: NodeId, dont_resolve_alias: bool) -> Option<SymbolId> {
        let ast = self.ast;
        let NodePayload::ImportEquals { module_reference, .. } = &ast.node(node).payload else {
            return None;
        };
        let module_reference = *module_reference;
        if ast.kind(module_reference) == SyntaxKind::ExternalModuleReference {
            let specifier = ast.expression(module_reference)?;
            let module = self.resolve_external_module_name(node, specifier, false)?;
            return Some(self.resolve_external_module_symbol(module));
        }
        // `import a = b` names a namespace, `import a = b.c` anything.
        let meaning = if ast.kind(module_reference) == SyntaxKind::Identifier {
            SymbolFlags::NAMESPACE
        } else {
            SymbolFlags::VALUE | SymbolFlags::TYPE | SymbolFlags::NAMESPACE
        };
        self.resolve_entity_name(module_reference, meaning, false, dont_resolve_alias)
    }

    /// The string literal module specifier of the import or export
    /// declaration enclosing `node`.
    fn get_module_specifier_for_import_or_export(&self, node: NodeId) -> Option<NodeId> {
        let ast = self.ast;
        let declaration = find_ancestor(ast, Some(node), |n| {
            matches!(ast.kind(n), SyntaxKind::ImportDeclaration | SyntaxKind::ExportDeclaration)
        })?;
        match &ast.node(declaration).payload {
            NodePayload::ImportDeclaration { module_specifier, .. } => Some(*module_specifier),
            NodePayload::ExportDeclaration { module_specifier, .. } => *module_specifier,
            _ => None,
        }
    }

    fn get_target_of_import_clause(&mut self, node: NodeId, dont_resolve_alias: bool) -> Option<SymbolId> {
        let specifier = self.get_module_specifier_for_import_or_export(node)?;
        let module = self.resolve_external_module_name(node, specifier, false)?;
        self.get_target_of_module_default(module, node, specifier, dont_resolve_alias)
    }

    /// `import x from "m"`. A module defined by `export =` is its own
    /// default.
    fn get_target_of_module_default(
        &mut self,
        module: SymbolId,
        node: NodeId,
        specifier: NodeId,
        dont_resolve_alias: bool,
    ) -> Option<SymbolId> {
        let ast = self.ast;
        if let Some(default) = self.get_export_of_module(module, internal_names::DEFAULT) {
            return Some(self.resolve_symbol_ex(default, dont_resolve_alias));
        }
        if self.module_export_equals(module).is_some() {
            return Some(self.resolve_external_module_symbol(module));
        }
        let module_name = format!("\"{}\"", ast.text(specifier));
        let location = ast.name(node).unwrap_or(node);
        self.error(location, &messages::MODULE_0_HAS_NO_DEFAULT_EXPORT, &[&module_name]);
        None
    }

    fn get_target_of_namespace_import_or_export(&mut self, node: NodeId) -> Option<SymbolId> {
        let specifier = self.get_module_specifier_for_import_or_export(node)?;
        let module = self.resolve_external_module_name(node, specifier, false)?;
        Some(self.resolve_es_module_symbol(module))
    }

    fn get_target_of_import_specifier(&mut self, node: NodeId, dont_resolve_alias: bool) -> Option<SymbolId> {
        let ast = self.ast;
        let name = ast.property_name(node).or(ast.name(node))?;
        if ast.text(name) == internal_names::DEFAULT {
            let specifier = self.get_module_specifier_for_import_or_export(node)?;
            let module = self.resolve_external_module_name(node, specifier, false)?;
            return self.get_target_of_module_default(module, node, specifier, dont_resolve_alias);
        }
        self.get_external_module_member(node, name, dont_resolve_alias)
    }

    fn get_target_of_export_specifier(&mut self, node: NodeId, dont_resolve_alias: bool) -> Option<SymbolId> {
        let ast = self.ast;
        let name = ast.property_name(node).or(ast.name(node))?;
        if self.get_module_specifier_for_import_or_export(node).is_some() {
            if ast.text(name) == internal_names::DEFAULT {
                let specifier = self.get_module_specifier_for_import_or_export(node)?;
                let module = self.resolve_external_module_name(node, specifier, false)?;
                return self.get_target_of_module_default(module, node, specifier, dont_resolve_alias);
            }
            return self.get_external_module_member(node, name, dont_resolve_alias);
        }
        if ast.kind(name) == SyntaxKind::StringLiteral {
            return None;
        }
        let meaning = SymbolFlags::VALUE | SymbolFlags::TYPE | SymbolFlags::NAMESPACE;
        self.resolve_entity_name(name, meaning, false, dont_resolve_alias)
    }

    /// `import { name } from "m"` and `export { name } from "m"`.
    fn get_external_module_member(&mut self, specifier: NodeId, name: NodeId, dont_resolve_alias: bool) -> Option<SymbolId> {
        let ast = self.ast;
        let module_specifier = self.get_module_specifier_for_import_or_export(specifier)?;
        let module = self.resolve_external_module_name(specifier, module_specifier, false)?;
        let target = self.resolve_es_module_symbol(module);
        let name_text = ast.text(name);
        match self.get_export_of_module(target, name_text) {
            Some(member) => Some(self.resolve_symbol_ex(member, dont_resolve_alias)),
            None => {
                let module_name = format!("\"{}\"", ast.text(module_specifier));
                self.error(name, &messages::MODULE_0_HAS_NO_EXPORTED_MEMBER_1, &[&module_name, name_text]);
                None
            }
        }
    }

    // ========================================================================
    // Modules
    // ========================================================================

    /// The module a string literal specifier names: an ambient module
    /// declared as `declare module "name"`, or a module file.
    pub(crate) fn resolve_external_module_name(
        &mut self,
        location: NodeId,
        specifier: NodeId,
        ignore_errors: bool,
    ) -> Option<SymbolId> {
        let ast = self.ast;
        if !matches!(
            ast.kind(specifier),
            SyntaxKind::StringLiteral | SyntaxKind::NoSubstitutionTemplateLiteral
        ) {
            return None;
        }
        let reference = ast.text(specifier);
        if !is_external_module_name_relative(reference) {
            let ambient_name = format!("\"{reference}\"");
            let ambient = ast
                .interner()
                .get(&ambient_name)
                .and_then(|key| self.binding.globals.get(key))
                .filter(|&s| self.symbol(s).has_flags(SymbolFlags::VALUE_MODULE));
            if ambient.is_some() {
                return ambient;
            }
        }
        let from = &ast.file_of(location).file_name;
        let wanted = normalize_module_path(from, reference);
        for &file in ast.files() {
            let data = ast.source_file(file);
            if normalize_module_path("", &data.file_name) != wanted {
                continue;
            }
            if let Some(symbol) = ast.symbol(file) {
                return Some(symbol);
            }
            if !ignore_errors {
                self.error(specifier, &messages::FILE_0_IS_NOT_A_MODULE, &[&data.file_name]);
            }
            return None;
        }
        if !ignore_errors {
            self.error(
                specifier,
                &messages::CANNOT_FIND_MODULE_0_OR_ITS_CORRESPONDING_TYPE_DECLARATIONS,
                &[reference],
            );
        }
        None
    }

    fn module_export_equals(&self, module: SymbolId) -> Option<SymbolId> {
        let key = self.ast.interner().get(internal_names::EXPORT_EQUALS)?;
        self.symbol(module).exports.as_ref()?.get(key)
    }

    /// A module defined by `export =` stands for the exported entity.
    pub(crate) fn resolve_external_module_symbol(&mut self, module: SymbolId) -> SymbolId {
        match self.module_export_equals(module) {
            Some(export_equals) => self.resolve_symbol(export_equals),
            None => module,
        }
    }

    pub(crate) fn resolve_es_module_symbol(&mut self, module: SymbolId) -> SymbolId {
        self.resolve_external_module_symbol(module)
    }

    /// Exports of a module including those re-exported through
    /// `export *`, computed once per module.
    pub fn get_exports_of_module(&mut self, module: SymbolId) -> SymbolTable {
        self.ensure_exports_of_module(module);
        self.module_symbol_links
            .try_get(module)
            .and_then(|links| links.resolved_exports.clone())
            .unwrap_or_default()
    }

    fn ensure_exports_of_module(&mut self, module: SymbolId) {
        if self
            .module_symbol_links
            .try_get(module)
            .is_some_and(|links| links.resolved_exports.is_some())
        {
            return;
        }
        let target = self.resolve_external_module_symbol(module);
        let mut visited = Vec::new();
        let exports = self.visit_module_exports(Some(target), &mut visited).unwrap_or_default();
        self.module_symbol_links.get_or_insert(module).resolved_exports = Some(exports);
    }

    fn visit_module_exports(&mut self, module: Option<SymbolId>, visited: &mut Vec<SymbolId>) -> Option<SymbolTable> {
        let ast = self.ast;
        let module = module?;
        if visited.contains(&module) {
            return None;
        }
        visited.push(module);
        let mut symbols = self.symbol(module).exports.clone()?;
        let export_star = ast
            .interner()
            .get(internal_names::EXPORT_STAR)
            .and_then(|key| symbols.get(key));
        let Some(export_star) = export_star else {
            return Some(symbols);
        };
        let default_key = ast.interner().get(internal_names::DEFAULT);
        let mut nested = SymbolTable::new();
        // Names exported by more than one `export *`, with the declarations
        // that brought them in.
        let mut origins: Vec<(InternedString, NodeId, Vec<NodeId>)> = Vec::new();
        for declaration in self.symbol(export_star).declarations.clone() {
            let NodePayload::ExportDeclaration {
                module_specifier: Some(specifier),
                ..
            } = &ast.node(declaration).payload
            else {
                continue;
            };
            let resolved = self.resolve_external_module_name(declaration, *specifier, false);
            let Some(exported) = self.visit_module_exports(resolved, visited) else {
                continue;
            };
            for (name, symbol) in exported.iter() {
                if Some(name) == default_key {
                    continue;
                }
                match nested.get(name) {
                    None => {
                        nested.set(name, symbol);
                        origins.push((name, declaration, Vec::new()));
                    }
                    Some(existing) => {
                        if self.resolve_symbol(existing) != self.resolve_symbol(symbol) {
                            if let Some(entry) = origins.iter_mut().find(|(n, _, _)| *n == name) {
                                entry.2.push(declaration);
                            }
                        }
                    }
                }
            }
        }
        let export_equals = ast.interner().get(internal_names::EXPORT_EQUALS);
        for (name, first, duplicates) in origins {
            if duplicates.is_empty() || Some(name) == export_equals || symbols.has(name) {
                continue;
            }
            let name_text = ast.interner().resolve(name);
            for declaration in duplicates {
                let specifier_text = match &ast.node(declaration).payload {
                    NodePayload::ExportDeclaration {
                        module_specifier: Some(specifier),
                        ..
                    } => ast.source_text(*specifier),
                    _ => ast.source_text(first),
                };
                self.error(
                    declaration,
                    &messages::MODULE_0_HAS_ALREADY_EXPORTED_A_MEMBER_NAMED_1_CONSIDER_EXPLICITLY_RE_EXPORTING_TO_RESOLVE_THE_AMBIGUITY,
                    &[specifier_text, name_text],
                );
            }
        }
        for (name, symbol) in nested.iter() {
            if !symbols.has(name) {
                symbols.set(name, symbol);
            }
        }
        Some(symbols)
    }

    /// One export of a module, namespace, enum or class, by name.
    pub(crate) fn get_export_of_module(&mut self, symbol: SymbolId, name: &str) -> Option<SymbolId> {
        let key = self.ast.interner().get(name)?;
        if self.symbol(symbol).flags.intersects(SymbolFlags::MODULE) {
            self.ensure_exports_of_module(symbol);
            return self
                .module_symbol_links
                .try_get(symbol)
                .and_then(|links| links.resolved_exports.as_ref())
                .and_then(|exports| exports.get(key));
        }
        self.symbol(symbol).exports.as_ref()?.get(key)
    }

    /// The export `name` of the namespace-like `symbol`, without
    /// resolving it if it is an alias.
    pub(crate) fn get_export_of_symbol(&mut self, symbol: SymbolId, name: &str) -> Option<SymbolId> {
        let symbol = self.resolve_symbol(symbol);
        self.get_export_of_module(symbol, name)
    }

    // ========================================================================
    // Type-only imports and exports
    // ========================================================================

    pub(crate) fn is_type_only_import_or_export_declaration(&self, node: NodeId) -> bool {
        let ast = self.ast;
        match ast.kind(node) {
            SyntaxKind::ImportSpecifier | SyntaxKind::ExportSpecifier => {
                ast.is_type_only(node)
                    || find_ancestor(ast, ast.parent(node), |n| {
                        matches!(ast.kind(n), SyntaxKind::ImportClause | SyntaxKind::ExportDeclaration)
                    })
                    .is_some_and(|n| ast.is_type_only(n))
            }
            SyntaxKind::NamespaceImport | SyntaxKind::NamespaceExport => {
                ast.parent(node).is_some_and(|p| ast.is_type_only(p))
            }
            SyntaxKind::ImportClause | SyntaxKind::ImportEqualsDeclaration | SyntaxKind::ExportDeclaration => {
                ast.is_type_only(node)
            }
            _ => false,
        }
    }

    /// The first `import type` or `export type` on the alias chain of
    /// `symbol`. With a non-empty `include` the declaration is only
    /// returned when the final target has one of those meanings.
    pub(crate) fn get_type_only_alias_declaration(&mut self, symbol: SymbolId, include: SymbolFlags) -> Option<NodeId> {
        if !self.symbol(symbol).has_flags(SymbolFlags::ALIAS) {
            return None;
        }
        if !self
            .alias_symbol_links
            .try_get(symbol)
            .is_some_and(|links| links.type_only_declaration_resolved)
        {
            self.alias_symbol_links.get_or_insert(symbol).type_only_declaration_resolved = true;
            let declaration = self.find_type_only_declaration_on_chain(symbol);
            self.alias_symbol_links.get_or_insert(symbol).type_only_declaration = declaration;
        }
        let declaration = self.alias_symbol_links.try_get(symbol)?.type_only_declaration?;
        if include.is_empty() {
            return Some(declaration);
        }
        let target = self.resolve_symbol(symbol);
        self.symbol(target).flags.intersects(include).then_some(declaration)
    }

    fn find_type_only_declaration_on_chain(&mut self, symbol: SymbolId) -> Option<NodeId> {
        let mut current = symbol;
        let mut seen: FxHashSet<SymbolId> = FxHashSet::default();
        while seen.insert(current) && self.symbol(current).has_flags(SymbolFlags::ALIAS) {
            let declaration = self.get_declaration_of_alias_symbol(current)?;
            if self.is_type_only_import_or_export_declaration(declaration) {
                return Some(declaration);
            }
            current = self.get_immediate_aliased_symbol(current)?;
        }
        None
    }

    /// Resolve the alias declared by `node` so failures are reported, and
    /// reject an import that merges with a local of the same meaning.
    pub(crate) fn check_alias_symbol(&mut self, node: NodeId) {
        let ast = self.ast;
        let Some(symbol) = ast.symbol(node) else {
            return;
        };
        let Some(target) = self.resolve_alias(symbol) else {
            return;
        };
        if matches!(ast.kind(node), SyntaxKind::ExportSpecifier | SyntaxKind::NamespaceExport) {
            if self.symbol(target).flags.intersects(SymbolFlags::VALUE) {
                self.alias_symbol_links.get_or_insert(symbol).referenced = true;
            }
            return;
        }
        let local_flags = self.symbol(symbol).flags;
        let mut excluded = SymbolFlags::NONE;
        if local_flags.intersects(SymbolFlags::VALUE | SymbolFlags::EXPORT_VALUE) {
            excluded |= SymbolFlags::VALUE;
        }
        if local_flags.intersects(SymbolFlags::TYPE) {
            excluded |= SymbolFlags::TYPE;
        }
        if local_flags.intersects(SymbolFlags::NAMESPACE) {
            excluded |= SymbolFlags::NAMESPACE;
        }
        if self.symbol(target).flags.intersects(excluded) {
            let name = self.declaration_name_to_string(ast.name(node));
            let location = ast.name(node).unwrap_or(node);
            self.error(location, &messages::IMPORT_DECLARATION_CONFLICTS_WITH_LOCAL_DECLARATION_OF_0, &[name]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_module_path() {
        assert_eq!(normalize_module_path("src/a.ts", "./b"), "src/b");
        assert_eq!(normalize_module_path("src/a.ts", "../lib/c.js"), "lib/c");
        assert_eq!(normalize_module_path("a.ts", "./b.ts"), "b");
        assert_eq!(normalize_module_path("", "lib/c.d.ts"), "lib/c");
        assert_eq!(normalize_module_path("a.ts", "fs"), "fs");
    }
}

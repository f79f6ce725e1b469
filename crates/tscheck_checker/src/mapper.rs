//! Type mappers.
//!
//! A mapper maps type parameters to type arguments. Mappers live in the
//! `TypeTable` next to the types that reference them and are identified
//! by `MapperId`.

use crate::types::{TypeId, TypeTable};

/// Handle to a mapper in a `TypeTable`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct MapperId(pub(crate) u32);

impl MapperId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Shape of a mapper. The declaration order is the sort order.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd)]
pub enum TypeMapperKind {
    Simple,
    Array,
    ArrayToSingle,
    Merged,
}

#[derive(Debug, Clone)]
pub enum TypeMapper {
    /// One source to one target.
    Simple { source: TypeId, target: TypeId },
    /// Parallel lists. Without targets every source maps to `any`.
    Array {
        sources: Vec<TypeId>,
        targets: Option<Vec<TypeId>>,
    },
    /// Every source maps to the same target.
    ArrayToSingle { sources: Vec<TypeId>, target: TypeId },
    /// Apply `mapper1`, then `mapper2`.
    Merged { mapper1: MapperId, mapper2: MapperId },
}

impl TypeMapper {
    pub fn kind(&self) -> TypeMapperKind {
        match self {
            TypeMapper::Simple { .. } => TypeMapperKind::Simple,
            TypeMapper::Array { .. } => TypeMapperKind::Array,
            TypeMapper::ArrayToSingle { .. } => TypeMapperKind::ArrayToSingle,
            TypeMapper::Merged { .. } => TypeMapperKind::Merged,
        }
    }
}

impl TypeTable {
    fn add_mapper(&mut self, mapper: TypeMapper) -> MapperId {
        let id = MapperId(self.mappers.len() as u32);
        self.mappers.push(mapper);
        id
    }

    pub fn mapper_data(&self, id: MapperId) -> &TypeMapper {
        &self.mappers[id.index()]
    }

    pub fn new_type_mapper(&mut self, sources: Vec<TypeId>, targets: Option<Vec<TypeId>>) -> MapperId {
        if sources.len() == 1 {
            let target = targets
                .as_ref()
                .and_then(|targets| targets.first().copied())
                .unwrap_or(self.any_type);
            return self.add_mapper(TypeMapper::Simple {
                source: sources[0],
                target,
            });
        }
        self.add_mapper(TypeMapper::Array { sources, targets })
    }

    pub fn new_simple_type_mapper(&mut self, source: TypeId, target: TypeId) -> MapperId {
        self.add_mapper(TypeMapper::Simple { source, target })
    }

    pub fn new_array_to_single_type_mapper(&mut self, sources: Vec<TypeId>, target: TypeId) -> MapperId {
        self.add_mapper(TypeMapper::ArrayToSingle { sources, target })
    }

    pub fn merge_type_mappers(&mut self, mapper1: Option<MapperId>, mapper2: MapperId) -> MapperId {
        match mapper1 {
            Some(mapper1) => self.add_mapper(TypeMapper::Merged { mapper1, mapper2 }),
            None => mapper2,
        }
    }

    /// Extend `mapper` with `source -> target`.
    pub fn append_type_mapping(&mut self, mapper: Option<MapperId>, source: TypeId, target: TypeId) -> MapperId {
        let single = self.new_simple_type_mapper(source, target);
        self.merge_type_mappers(mapper, single)
    }

    /// Map one type through `mapper`. Types the mapper does not mention
    /// map to themselves.
    pub fn map_type(&self, mapper: MapperId, t: TypeId) -> TypeId {
        match self.mapper_data(mapper) {
            TypeMapper::Simple { source, target } => {
                if *source == t {
                    *target
                } else {
                    t
                }
            }
            TypeMapper::Array { sources, targets } => match sources.iter().position(|&s| s == t) {
                Some(i) => targets
                    .as_ref()
                    .and_then(|targets| targets.get(i).copied())
                    .unwrap_or(self.any_type),
                None => t,
            },
            TypeMapper::ArrayToSingle { sources, target } => {
                if sources.contains(&t) {
                    *target
                } else {
                    t
                }
            }
            TypeMapper::Merged { mapper1, mapper2 } => {
                let mapped = self.map_type(*mapper1, t);
                self.map_type(*mapper2, mapped)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_source_is_simple() {
        let mut table = TypeTable::new();
        let t = table.create_type_parameter(None);
        let mapper = table.new_type_mapper(vec![t], Some(vec![table.string_type]));
        assert_eq!(table.mapper_data(mapper).kind(), TypeMapperKind::Simple);
        assert_eq!(table.map_type(mapper, t), table.string_type);
        assert_eq!(table.map_type(mapper, table.number_type), table.number_type);
    }

    #[test]
    fn test_missing_targets_map_to_any() {
        let mut table = TypeTable::new();
        let a = table.create_type_parameter(None);
        let b = table.create_type_parameter(None);
        let mapper = table.new_type_mapper(vec![a, b], None);
        assert_eq!(table.map_type(mapper, b), table.any_type);
    }

    #[test]
    fn test_merged_applies_in_order() {
        let mut table = TypeTable::new();
        let a = table.create_type_parameter(None);
        let b = table.create_type_parameter(None);
        let first = table.new_simple_type_mapper(a, b);
        let merged = table.append_type_mapping(Some(first), b, table.string_type);
        assert_eq!(table.mapper_data(merged).kind(), TypeMapperKind::Merged);
        assert_eq!(table.map_type(merged, a), table.string_type);
    }
}

use std::fmt;

use uuid::Uuid;

/// Identifier of a placed element.
///
/// Ids are random v4 UUIDs: unique for the lifetime of the editor session,
/// with no ordering meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementId(Uuid);

impl ElementId {
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "el-{}", self.0.simple())
    }
}

pub fn generate_id() -> ElementId {
    ElementId(Uuid::new_v4())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn generated_ids_are_distinct() {
        let ids: HashSet<ElementId> = (0..1000).map(|_| generate_id()).collect();
        assert_eq!(ids.len(), 1000);
    }

    #[test]
    fn display_has_prefix() {
        assert!(generate_id().to_string().starts_with("el-"));
    }
}

use serde::Serialize;

/// A named capability granted by a user's permission level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    CanSee,
    CanCreate,
    CanEdit,
    CanDelete,
    CanApprove,
}

impl Capability {
    pub fn code(self) -> &'static str {
        match self {
            Capability::CanSee => "can_see",
            Capability::CanCreate => "can_create",
            Capability::CanEdit => "can_edit",
            Capability::CanDelete => "can_delete",
            Capability::CanApprove => "can_approve",
        }
    }
}

/// Lowest permission level; users at this level only see their own documents.
pub const LEVEL_OWN_ONLY: i16 = 0;

/// Capability set for a permission level, with a `has()` check for handlers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Capabilities(Vec<Capability>);

impl Capabilities {
    /// Resolve the fixed capability set for a permission level.
    /// Unknown levels get no capabilities at all.
    pub fn for_level(level: i16) -> Self {
        use Capability::*;
        let caps = match level {
            2 => vec![CanSee, CanCreate, CanEdit, CanDelete, CanApprove],
            1 => vec![CanSee, CanCreate, CanApprove],
            0 => vec![CanSee],
            _ => vec![],
        };
        Capabilities(caps)
    }

    pub fn has(&self, cap: Capability) -> bool {
        self.0.contains(&cap)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn codes(&self) -> Vec<&'static str> {
        self.0.iter().map(|c| c.code()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_level_has_everything() {
        let caps = Capabilities::for_level(2);
        assert_eq!(
            caps.codes(),
            vec!["can_see", "can_create", "can_edit", "can_delete", "can_approve"]
        );
    }

    #[test]
    fn manager_level_can_approve_but_not_edit() {
        let caps = Capabilities::for_level(1);
        assert_eq!(caps.codes(), vec!["can_see", "can_create", "can_approve"]);
        assert!(!caps.has(Capability::CanEdit));
        assert!(!caps.has(Capability::CanDelete));
    }

    #[test]
    fn lowest_level_can_only_see() {
        assert_eq!(Capabilities::for_level(0).codes(), vec!["can_see"]);
    }

    #[test]
    fn unknown_levels_resolve_to_nothing() {
        for level in [-1, 3, 7, i16::MAX] {
            assert!(Capabilities::for_level(level).is_empty(), "level {level}");
        }
    }

    #[test]
    fn serializes_as_code_list() {
        let json = serde_json::to_value(Capabilities::for_level(1)).unwrap();
        assert_eq!(json, serde_json::json!(["can_see", "can_create", "can_approve"]));
    }
}

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// NewType wrapper for the identity of a component
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComponentUuid(pub Uuid);

impl ComponentUuid {
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl From<Uuid> for ComponentUuid {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl FromStr for ComponentUuid {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s.trim()).map(Self)
    }
}

impl fmt::Display for ComponentUuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Type tag of a component
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Qualifier {
    #[serde(rename = "TRK")]
    Project,
    #[serde(rename = "BRC")]
    Module,
    #[serde(rename = "DIR")]
    Directory,
    #[serde(rename = "FIL")]
    File,
    #[serde(rename = "UTS")]
    UnitTestFile,
    #[serde(rename = "VW")]
    View,
    #[serde(rename = "SVW")]
    SubView,
    #[serde(rename = "APP")]
    Application,
}

impl Qualifier {
    pub const ALL: [Qualifier; 8] = [
        Qualifier::Application,
        Qualifier::Module,
        Qualifier::Directory,
        Qualifier::File,
        Qualifier::SubView,
        Qualifier::Project,
        Qualifier::UnitTestFile,
        Qualifier::View,
    ];

    /// Short code used on the wire (`TRK`, `FIL`, ...)
    pub fn code(self) -> &'static str {
        match self {
            Qualifier::Project => "TRK",
            Qualifier::Module => "BRC",
            Qualifier::Directory => "DIR",
            Qualifier::File => "FIL",
            Qualifier::UnitTestFile => "UTS",
            Qualifier::View => "VW",
            Qualifier::SubView => "SVW",
            Qualifier::Application => "APP",
        }
    }

    /// Comma separated list of every accepted code, for error messages
    pub fn all_codes() -> String {
        Self::ALL
            .iter()
            .map(|q| q.code())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl FromStr for Qualifier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|q| q.code() == s)
            .ok_or_else(|| format!("Unknown qualifier: {}", s))
    }
}

impl fmt::Display for Qualifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A node of the analysed component tree (project, directory, file, ...)
///
/// `branch_uuid` is the root component of the branch the component belongs
/// to; `copy_component_uuid` points at the component a copy stands for in
/// views and applications.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Component {
    pub uuid: ComponentUuid,
    pub key: String,
    pub name: String,
    pub qualifier: Qualifier,
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub parent_uuid: Option<ComponentUuid>,
    pub branch_uuid: ComponentUuid,
    #[serde(default)]
    pub copy_component_uuid: Option<ComponentUuid>,
    #[serde(default = "enabled_by_default")]
    pub enabled: bool,
}

fn enabled_by_default() -> bool {
    true
}

impl Component {
    /// Creates the root component of a branch (its own branch root)
    pub fn root(uuid: Uuid, key: impl Into<String>, qualifier: Qualifier) -> Self {
        let key = key.into();
        Self {
            uuid: ComponentUuid(uuid),
            name: key.clone(),
            key,
            qualifier,
            path: None,
            description: None,
            language: None,
            parent_uuid: None,
            branch_uuid: ComponentUuid(uuid),
            copy_component_uuid: None,
            enabled: true,
        }
    }

    /// Creates a component placed under `parent` in the same branch
    pub fn child_of(parent: &Component, uuid: Uuid, key: impl Into<String>, qualifier: Qualifier) -> Self {
        let key = key.into();
        Self {
            uuid: ComponentUuid(uuid),
            name: key.clone(),
            key,
            qualifier,
            path: None,
            description: None,
            language: None,
            parent_uuid: Some(parent.uuid),
            branch_uuid: parent.branch_uuid,
            copy_component_uuid: None,
            enabled: true,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn with_copy_of(mut self, reference: &Component) -> Self {
        self.copy_component_uuid = Some(reference.uuid);
        self
    }

    /// True for the root of a branch
    pub fn is_root(&self) -> bool {
        self.uuid == self.branch_uuid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_qualifier_codes_round_trip_through_from_str() {
        for qualifier in Qualifier::ALL {
            assert_eq!(Qualifier::from_str(qualifier.code()).unwrap(), qualifier);
        }
        assert!(Qualifier::from_str("fil").is_err());
        assert!(Qualifier::from_str("BRANCH").is_err());
    }

    #[test]
    fn test_all_codes_lists_every_qualifier() {
        assert_eq!(Qualifier::all_codes(), "APP, BRC, DIR, FIL, SVW, TRK, UTS, VW");
    }

    #[test]
    fn test_child_inherits_branch_of_parent() {
        let project = Component::root(Uuid::from_u128(1), "my_app", Qualifier::Project);
        let file = Component::child_of(&project, Uuid::from_u128(2), "my_app:A.java", Qualifier::File);

        assert!(project.is_root());
        assert!(!file.is_root());
        assert_eq!(file.branch_uuid, project.uuid);
        assert_eq!(file.parent_uuid, Some(project.uuid));
    }

    #[test]
    fn test_component_uuid_parses_trimmed_input() {
        let uuid = ComponentUuid::from_str(" 00000000-0000-0000-0000-000000000007 ").unwrap();
        assert_eq!(uuid, ComponentUuid(Uuid::from_u128(7)));
        assert!(ComponentUuid::from_str("project-uuid").is_err());
    }

    #[test]
    fn test_component_deserializes_qualifier_code() {
        let component: Component = serde_json::from_str(
            r#"{
                "uuid": "00000000-0000-0000-0000-000000000002",
                "key": "my_app:src/A.java",
                "name": "A.java",
                "qualifier": "FIL",
                "path": "src/A.java",
                "parentUuid": "00000000-0000-0000-0000-000000000001",
                "branchUuid": "00000000-0000-0000-0000-000000000001"
            }"#,
        )
        .unwrap();
        assert_eq!(component.qualifier, Qualifier::File);
        assert!(component.enabled);
        assert!(component.copy_component_uuid.is_none());
    }
}

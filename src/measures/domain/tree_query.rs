use super::component::{Component, ComponentUuid, Qualifier};
use std::fmt;
use std::str::FromStr;

/// Traversal mode of a component tree request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// Direct children of the base component
    Children,
    /// Descendants at any depth whose qualifier is a leaf qualifier
    Leaves,
    /// Every descendant at any depth
    #[default]
    All,
}

impl Strategy {
    pub const VALUES: [&'static str; 3] = ["all", "children", "leaves"];

    pub fn as_str(self) -> &'static str {
        match self {
            Strategy::Children => "children",
            Strategy::Leaves => "leaves",
            Strategy::All => "all",
        }
    }
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "children" => Ok(Strategy::Children),
            "leaves" => Ok(Strategy::Leaves),
            "all" => Ok(Strategy::All),
            other => Err(format!(
                "Value of parameter 'strategy' ({}) must be one of: [{}]",
                other,
                Self::VALUES.join(", ")
            )),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolved shape of a tree navigation, built once per request
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentTreeQuery {
    base_uuid: ComponentUuid,
    strategy: Strategy,
    name_or_key_query: Option<String>,
    qualifiers: Option<Vec<Qualifier>>,
}

impl ComponentTreeQuery {
    /// `qualifiers` of `None` means any qualifier; an empty list matches nothing
    pub fn new(
        base_uuid: ComponentUuid,
        strategy: Strategy,
        name_or_key_query: Option<String>,
        qualifiers: Option<Vec<Qualifier>>,
    ) -> Self {
        Self {
            base_uuid,
            strategy,
            name_or_key_query,
            qualifiers,
        }
    }

    pub fn base_uuid(&self) -> ComponentUuid {
        self.base_uuid
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn name_or_key_query(&self) -> Option<&str> {
        self.name_or_key_query.as_deref()
    }

    pub fn qualifiers(&self) -> Option<&[Qualifier]> {
        self.qualifiers.as_deref()
    }

    /// True when the qualifier whitelist is present but empty
    pub fn matches_nothing(&self) -> bool {
        self.qualifiers.as_ref().is_some_and(|q| q.is_empty())
    }

    /// Applies the qualifier whitelist and the name/key filter to a descendant
    pub fn accepts(&self, component: &Component) -> bool {
        let qualifier_ok = self
            .qualifiers
            .as_ref()
            .is_none_or(|q| q.contains(&component.qualifier));
        qualifier_ok && self.matches_name_or_key(component)
    }

    /// Name contains the query (case-insensitive) or key equals it
    fn matches_name_or_key(&self, component: &Component) -> bool {
        match &self.name_or_key_query {
            None => true,
            Some(query) => {
                component.key == *query
                    || component
                        .name
                        .to_lowercase()
                        .contains(&query.to_lowercase())
            }
        }
    }
}

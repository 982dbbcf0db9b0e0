use crate::measures::domain::Qualifier;
use crate::ports::outbound::ComponentTypes;

/// DefaultComponentTypes adapter describing the built-in component hierarchy
///
/// Projects and modules hold directories and files; portfolios hold
/// projects and applications; applications hold projects.
pub struct DefaultComponentTypes;

impl DefaultComponentTypes {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DefaultComponentTypes {
    fn default() -> Self {
        Self::new()
    }
}

impl ComponentTypes for DefaultComponentTypes {
    fn leaf_qualifiers(&self, base: Qualifier) -> Vec<Qualifier> {
        match base {
            Qualifier::Project | Qualifier::Module | Qualifier::Directory => {
                vec![Qualifier::File, Qualifier::UnitTestFile]
            }
            Qualifier::View | Qualifier::SubView => vec![Qualifier::Project, Qualifier::Application],
            Qualifier::Application => vec![Qualifier::Project],
            Qualifier::File | Qualifier::UnitTestFile => vec![],
        }
    }
}

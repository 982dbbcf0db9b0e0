use crate::measures::domain::Qualifier;

/// ComponentTypes port describing the shape of component trees
pub trait ComponentTypes {
    /// Qualifiers of the leaves found below a component of qualifier `base`
    fn leaf_qualifiers(&self, base: Qualifier) -> Vec<Qualifier>;
}

impl<T: ComponentTypes + ?Sized> ComponentTypes for &T {
    fn leaf_qualifiers(&self, base: Qualifier) -> Vec<Qualifier> {
        (**self).leaf_qualifiers(base)
    }
}

/// Measures domain: metrics, components, measures and the rules that
/// reconcile stored measures into complete views.
pub mod domain;
pub mod policies;
pub mod services;

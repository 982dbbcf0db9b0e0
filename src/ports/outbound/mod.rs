/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to reach the measure database, the component type registry and the
/// output destination.
pub mod analysis_repository;
pub mod component_repository;
pub mod component_types;
pub mod measure_store;
pub mod metric_catalog;
pub mod output_presenter;
pub mod response_formatter;

pub use analysis_repository::AnalysisRepository;
pub use component_repository::ComponentRepository;
pub use component_types::ComponentTypes;
pub use measure_store::MeasureStore;
pub use metric_catalog::MetricCatalog;
pub use output_presenter::OutputPresenter;
pub use response_formatter::ResponseFormatter;

//! measures-ws - measures web services over a component tree
//!
//! This library serves the `component`, `component_tree`, `search` and
//! `search_history` measure actions against a local dataset, following
//! hexagonal architecture and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`measures`): Metrics, components, measures, best-value
//!   backfill and branch metric remapping
//! - **Application Layer** (`application`): Request validation, use cases and response views
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use measures_ws::prelude::*;
//!
//! # fn main() -> Result<()> {
//! // Create adapters
//! let dataset = DatasetLoader::new("measures.json").load()?;
//! let ws = MeasuresWs::new(
//!     InMemoryDatabase::new(dataset),
//!     DefaultComponentTypes::new(),
//!     RequestLimits::default(),
//! );
//!
//! // Serve a request
//! let params = RequestParams::new()
//!     .with("component", "my_project")
//!     .with("metricKeys", "ncloc,coverage")
//!     .with("qualifiers", "FIL");
//! let response = ws.handle("component_tree", &params)?;
//!
//! // Format output
//! let output = JsonFormatter::new().format(&response)?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod measures;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::inbound::MeasuresWs;
    pub use crate::adapters::outbound::dataset::{
        Dataset, DatasetLoader, DefaultComponentTypes, InMemoryDatabase,
    };
    pub use crate::adapters::outbound::filesystem::{FileSystemWriter, StdoutPresenter};
    pub use crate::adapters::outbound::formatters::{JsonFormatter, MarkdownFormatter};
    pub use crate::application::dto::{
        ComponentRequest, ComponentTreeRequest, OutputFormat, RequestLimits, RequestParams,
        SearchHistoryRequest, SearchRequest,
    };
    pub use crate::application::read_models::{
        ComponentResponse, ComponentTreeResponse, ComponentView, MeasureView,
        SearchHistoryResponse, SearchResponse, WsResponse,
    };
    pub use crate::application::use_cases::{
        ComponentTreeUseCase, ComponentUseCase, SearchHistoryUseCase, SearchUseCase,
    };
    pub use crate::measures::domain::{
        Analysis, Branch, Component, ComponentUuid, Measure, Metric, Qualifier,
    };
    pub use crate::measures::services::{BranchMetricRemapper, Paging};
    pub use crate::ports::inbound::MeasuresPort;
    pub use crate::ports::outbound::{
        AnalysisRepository, ComponentRepository, ComponentTypes, MeasureStore, MetricCatalog,
        OutputPresenter, ResponseFormatter,
    };
    pub use crate::shared::{status_code_of, ExitCode, MeasuresError, Result};
}

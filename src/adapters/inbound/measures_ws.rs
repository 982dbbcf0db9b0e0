use crate::application::dto::{
    ComponentRequest, ComponentTreeRequest, RequestLimits, RequestParams, SearchHistoryRequest,
    SearchRequest,
};
use crate::application::read_models::WsResponse;
use crate::application::use_cases::{
    ComponentTreeUseCase, ComponentUseCase, SearchHistoryUseCase, SearchUseCase,
};
use crate::ports::inbound::MeasuresPort;
use crate::ports::outbound::{
    AnalysisRepository, ComponentRepository, ComponentTypes, MeasureStore, MetricCatalog,
};
use crate::shared::{MeasuresError, Result};
use tracing::debug;

pub const COMPONENT_ACTION: &str = "component";
pub const COMPONENT_TREE_ACTION: &str = "component_tree";
pub const SEARCH_ACTION: &str = "search";
pub const SEARCH_HISTORY_ACTION: &str = "search_history";

/// Actions served by [`MeasuresWs`]
pub const ACTIONS: [&str; 4] = [
    COMPONENT_ACTION,
    COMPONENT_TREE_ACTION,
    SEARCH_ACTION,
    SEARCH_HISTORY_ACTION,
];

/// Former time series endpoint, answered with a removal notice
pub const TIMEMACHINE_ACTION: &str = "timemachine";

/// Parameters of the dropped developer cockpit, rejected on every action
pub const DEVELOPER_PARAMS: [&str; 2] = ["developerId", "developerKey"];

const TIMEMACHINE_REMOVED: &str =
    "The 'api/timemachine' web service has been removed, use 'api/measures/search_history' instead";
const DEVELOPER_COCKPIT_REMOVED: &str =
    "The Developer Cockpit feature has been dropped. The specified developer cannot be found.";

/// MeasuresWs adapter routing raw requests to the measures use cases
///
/// Requests are validated into their DTO before any store is queried.
///
/// # Type Parameters
/// * `D` - Database implementing every data port
/// * `T` - ComponentTypes implementation
pub struct MeasuresWs<D, T> {
    database: D,
    component_types: T,
    limits: RequestLimits,
}

impl<D, T> MeasuresWs<D, T>
where
    D: ComponentRepository + MetricCatalog + MeasureStore + AnalysisRepository,
    T: ComponentTypes,
{
    pub fn new(database: D, component_types: T, limits: RequestLimits) -> Self {
        Self {
            database,
            component_types,
            limits,
        }
    }

    fn reject_removed_features(&self, action: &str, params: &RequestParams) -> Result<()> {
        if action == TIMEMACHINE_ACTION {
            return Err(MeasuresError::feature_removed(TIMEMACHINE_REMOVED).into());
        }
        if DEVELOPER_PARAMS.iter().any(|p| params.has(p)) {
            return Err(MeasuresError::feature_removed(DEVELOPER_COCKPIT_REMOVED).into());
        }
        Ok(())
    }

    fn component(&self, params: &RequestParams) -> Result<WsResponse> {
        let request = ComponentRequest::from_params(params)?;
        let db = &self.database;
        let response = ComponentUseCase::new(db, db, db, db).execute(&request)?;
        Ok(WsResponse::Component(response))
    }

    fn component_tree(&self, params: &RequestParams) -> Result<WsResponse> {
        let request = ComponentTreeRequest::from_params(params, &self.limits)?;
        let db = &self.database;
        let response = ComponentTreeUseCase::new(db, db, db, db, &self.component_types)
            .execute(&request)?;
        Ok(WsResponse::ComponentTree(response))
    }

    fn search(&self, params: &RequestParams) -> Result<WsResponse> {
        let request = SearchRequest::from_params(params, &self.limits)?;
        let db = &self.database;
        let response = SearchUseCase::new(db, db, db).execute(&request)?;
        Ok(WsResponse::Search(response))
    }

    fn search_history(&self, params: &RequestParams) -> Result<WsResponse> {
        let request = SearchHistoryRequest::from_params(params, &self.limits)?;
        let db = &self.database;
        let response = SearchHistoryUseCase::new(db, db, db, db).execute(&request)?;
        Ok(WsResponse::SearchHistory(response))
    }
}

impl<D, T> MeasuresPort for MeasuresWs<D, T>
where
    D: ComponentRepository + MetricCatalog + MeasureStore + AnalysisRepository,
    T: ComponentTypes,
{
    fn handle(&self, action: &str, params: &RequestParams) -> Result<WsResponse> {
        debug!(action, "Handling request");
        self.reject_removed_features(action, params)?;

        match action {
            COMPONENT_ACTION => self.component(params),
            COMPONENT_TREE_ACTION => self.component_tree(params),
            SEARCH_ACTION => self.search(params),
            SEARCH_HISTORY_ACTION => self.search_history(params),
            other => Err(MeasuresError::bad_request(format!(
                "Unknown action '{}'. Expected one of: {}",
                other,
                ACTIONS.join(", ")
            ))
            .into()),
        }
    }
}

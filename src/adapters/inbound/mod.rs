/// Inbound adapters - Entry points driving the application core
mod measures_ws;

pub use measures_ws::{
    MeasuresWs, ACTIONS, COMPONENT_ACTION, COMPONENT_TREE_ACTION, DEVELOPER_PARAMS, SEARCH_ACTION,
    SEARCH_HISTORY_ACTION, TIMEMACHINE_ACTION,
};

/// Use cases module containing application business logic orchestration
///
/// Each use case is generic over the outbound ports it needs and receives a
/// request DTO that was validated before any of them is touched.
mod component;
mod component_tree;
mod lookups;
mod search;
mod search_history;


pub use component::ComponentUseCase;
pub use component_tree::ComponentTreeUseCase;
pub use search::{SearchUseCase, SEARCHABLE_QUALIFIERS};
pub use search_history::SearchHistoryUseCase;

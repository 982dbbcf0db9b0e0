/// Mock implementations for testing
mod failing_measure_store;
mod recording_database;

pub use failing_measure_store::FailingMeasureStore;
pub use recording_database::RecordingDatabase;

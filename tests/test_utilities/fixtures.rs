use measures_ws::prelude::*;
use std::path::PathBuf;

/// Directory holding the JSON datasets used by the tests
pub fn fixtures_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

/// Path of the sample project dataset
pub fn sample_dataset_path() -> PathBuf {
    fixtures_path().join("measures.json")
}

/// Sample dataset: `my_project` with `src/A.java` and `src/B.java`, two
/// analyses, and `another`, a project that was never analysed
pub fn sample_dataset() -> Dataset {
    DatasetLoader::new(sample_dataset_path())
        .load()
        .expect("sample dataset should load")
}

pub fn sample_database() -> InMemoryDatabase {
    InMemoryDatabase::new(sample_dataset())
}

/// Web service over the sample dataset with default limits
pub fn sample_ws() -> MeasuresWs<InMemoryDatabase, DefaultComponentTypes> {
    MeasuresWs::new(
        sample_database(),
        DefaultComponentTypes::new(),
        RequestLimits::default(),
    )
}

//! Engine initialization against real source implementations.

use bqnexus_core::filter::StatusFlag;
use bqnexus_core::model::{Cycle, Modality, Question, Status};
use bqnexus_core::{Catalog, FilterEngine, Readiness};
use bqnexus_sources::{FileSource, FixedSource, HttpSource};
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn question(cycle: Cycle, module: &str, status: Status) -> Question {
    Question {
        id: None,
        cycle,
        module: module.into(),
        modality: Modality::Pbl,
        status,
    }
}

#[tokio::test]
async fn engine_loads_from_fixed_source() {
    let source = FixedSource::new(Catalog::new(vec![
        question(Cycle::Basic, "Module 2", Status::Unanswered),
        question(Cycle::Basic, "Module 10", Status::Error),
    ]));

    let mut engine = FilterEngine::new();
    assert_eq!(engine.load(&source).await, Readiness::Ready);
    assert_eq!(engine.modules(), vec!["Module 2", "Module 10"]);
    assert_eq!(engine.filtered_count(), 1);

    engine.toggle_status(StatusFlag::Errors);
    assert_eq!(engine.generate().unwrap().final_quantity, 2);
}

#[tokio::test]
async fn failed_fetch_is_not_retried() {
    let source = FixedSource::failing(500);
    let mut engine = FilterEngine::new();

    assert_eq!(engine.load(&source).await, Readiness::NotReady);
    assert_eq!(source.call_count(), 1);
    assert_eq!(engine.total_questions(), 0);
    assert!(engine.view().modules.is_empty());
}

#[tokio::test]
async fn engine_loads_from_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("questoes.json");
    std::fs::write(
        &path,
        r#"[
            {"ciclo": "Ciclo Básico", "modulo": "Módulo 1", "modalidade": "PBL", "status": "Nao Respondida"},
            {"ciclo": "Ciclo Básico", "modulo": "Módulo 1", "modalidade": "PBL", "status": "Nao Respondida"},
            {"ciclo": "Ciclo Básico", "modulo": "Módulo 1", "modalidade": "PBL", "status": "Acerto"}
        ]"#,
    )
    .unwrap();

    let mut engine = FilterEngine::new();
    engine.load(&FileSource::new(&path)).await;
    assert!(engine.is_ready());
    assert_eq!(engine.total_questions(), 3);
    assert_eq!(engine.filtered_count(), 2);
}

#[tokio::test]
async fn server_error_leaves_engine_uninitialized() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data/questoes.json"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let mut engine = FilterEngine::new();
    let readiness = engine.load(&HttpSource::new(&server.uri())).await;
    assert_eq!(readiness, Readiness::NotReady);
    assert!(!engine.can_generate());
}

use anyhow::Result;
use std::path::PathBuf;
use tempfile::TempDir;
use titanic_survival::domain::model::{EmbarkPort, Sex, TicketClass};
use titanic_survival::{LogisticModel, ModelHandle, PassengerInput, PredictError, PredictionService};

fn sample_model_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("models/titanic_model.json")
}

fn passenger(ticket_class: TicketClass, sex: Sex, age: f64) -> PassengerInput {
    PassengerInput {
        ticket_class,
        sex,
        age,
        siblings_spouses: 0,
        parents_children: 0,
        fare: 30.0,
        embark_port: EmbarkPort::Southampton,
    }
}

fn load(path: &str) -> ModelHandle {
    ModelHandle::load_with(path, |p| LogisticModel::from_file(p))
}

#[test]
fn test_sample_artifact_loads_and_predicts() -> Result<()> {
    let path = sample_model_path();
    let handle = load(path.to_str().unwrap());
    assert!(handle.is_available());
    assert!(handle.load_error().is_none());

    let service = PredictionService::new(handle);
    let rich_woman = service.submit(&passenger(TicketClass::First, Sex::Female, 30.0))?;
    let poor_man = service.submit(&passenger(TicketClass::Third, Sex::Male, 30.0))?;

    assert!((0.0..=1.0).contains(&rich_woman.probability));
    assert!((0.0..=1.0).contains(&poor_man.probability));
    assert!(rich_woman.probability > poor_man.probability);
    assert!(rich_woman.survived);
    assert!(!poor_man.survived);
    Ok(())
}

#[test]
fn test_missing_artifact_leaves_handle_unset() {
    let handle = load("/definitely/not/here/titanic_model.json");
    assert!(!handle.is_available());
    assert!(handle
        .load_error()
        .unwrap()
        .contains("/definitely/not/here/titanic_model.json"));

    let service = PredictionService::new(handle);
    let err = service
        .submit(&passenger(TicketClass::First, Sex::Female, 30.0))
        .unwrap_err();
    assert!(matches!(err, PredictError::ModelUnavailable));
}

#[test]
fn test_corrupt_artifact_leaves_handle_unset() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("titanic_model.json");
    std::fs::write(&path, "this is not a model document")?;

    let handle = load(path.to_str().unwrap());
    assert!(!handle.is_available());
    assert!(handle.load_error().unwrap().contains("corrupt"));
    Ok(())
}

#[test]
fn test_incompatible_artifact_leaves_handle_unset() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("titanic_model.json");
    std::fs::write(
        &path,
        r#"{"name": "cabin", "intercept": 0.0, "categorical": [{"column": "Cabin", "weights": {"C85": 1.0}}]}"#,
    )?;

    let handle = load(path.to_str().unwrap());
    assert!(!handle.is_available());
    assert!(handle.load_error().unwrap().contains("Cabin"));
    Ok(())
}

#[test]
fn test_unseen_category_surfaces_as_inference_failure() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("titanic_model.json");
    std::fs::write(
        &path,
        r#"{
            "name": "two-ports",
            "intercept": 0.1,
            "categorical": [{"column": "Embarked", "weights": {"S": -0.2, "C": 0.3}}]
        }"#,
    )?;

    let service = PredictionService::new(load(path.to_str().unwrap()));
    let mut queenstown = passenger(TicketClass::Third, Sex::Female, 19.0);
    queenstown.embark_port = EmbarkPort::Queenstown;

    match service.submit(&queenstown) {
        Err(PredictError::InferenceFailure { message }) => {
            assert!(message.contains("unseen category 'Q' in column 'Embarked'"))
        }
        other => panic!("expected InferenceFailure, got {:?}", other),
    }

    // 其他輸入仍可正常預測
    let southampton = passenger(TicketClass::Third, Sex::Female, 19.0);
    assert!(service.submit(&southampton).is_ok());
    Ok(())
}

mod helpers;

use std::sync::Arc;

use doctasks::application::ports::InferenceError;
use doctasks::application::services::{ModelCatalog, ModelRegistry};
use doctasks::domain::TargetLanguage;

use helpers::{CallCounts, FailingProvider, MockProvider};

#[tokio::test]
async fn given_repeated_requests_when_resolving_summarizer_then_loads_model_once() {
    let provider = Arc::new(MockProvider::new());
    let counts = Arc::clone(&provider.counts);
    let registry = ModelRegistry::new(provider, ModelCatalog::default());

    for _ in 0..3 {
        registry.summarizer().await.unwrap();
    }

    assert_eq!(CallCounts::get(&counts.summarizer_loads), 1);
}

#[tokio::test]
async fn given_concurrent_requests_when_resolving_classifier_then_loads_model_once() {
    let provider = Arc::new(MockProvider::new());
    let counts = Arc::clone(&provider.counts);
    let registry = Arc::new(ModelRegistry::new(provider, ModelCatalog::default()));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let registry = Arc::clone(&registry);
            tokio::spawn(async move { registry.classifier().await.map(|_| ()) })
        })
        .collect();
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    assert_eq!(CallCounts::get(&counts.classifier_loads), 1);
}

#[tokio::test]
async fn given_warm_up_when_called_then_loads_single_model_tasks_but_not_translators() {
    let provider = Arc::new(MockProvider::new());
    let counts = Arc::clone(&provider.counts);
    let registry = ModelRegistry::new(provider, ModelCatalog::default());

    registry.warm_up().await.unwrap();
    registry.warm_up().await.unwrap();

    assert_eq!(CallCounts::get(&counts.summarizer_loads), 1);
    assert_eq!(CallCounts::get(&counts.answerer_loads), 1);
    assert_eq!(CallCounts::get(&counts.classifier_loads), 1);
    assert_eq!(CallCounts::get(&counts.translator_loads), 0);
}

#[tokio::test]
async fn given_two_languages_when_resolving_translators_then_each_gets_its_own_model() {
    let provider = Arc::new(MockProvider::new());
    let counts = Arc::clone(&provider.counts);
    let registry = ModelRegistry::new(provider, ModelCatalog::default());

    let french = registry.translator(TargetLanguage::French).await.unwrap();
    let german = registry.translator(TargetLanguage::German).await.unwrap();
    registry.translator(TargetLanguage::French).await.unwrap();

    assert_eq!(CallCounts::get(&counts.translator_loads), 2);
    assert_eq!(
        french.translate("hi").await.unwrap(),
        "Helsinki-NLP/opus-mt-en-fr:hi"
    );
    assert_eq!(
        german.translate("hi").await.unwrap(),
        "Helsinki-NLP/opus-mt-en-de:hi"
    );
}

#[tokio::test]
async fn given_failing_provider_when_resolving_then_surfaces_load_error() {
    let registry = ModelRegistry::new(Arc::new(FailingProvider), ModelCatalog::default());

    let result = registry.question_answerer().await;

    assert!(matches!(result, Err(InferenceError::ModelLoadFailed(_))));
}

#[test]
fn given_default_catalog_when_built_then_names_pretrained_models() {
    let catalog = ModelCatalog::default();

    assert_eq!(catalog.summarization, "facebook/bart-large-cnn");
    assert_eq!(catalog.question_answering, "deepset/roberta-base-squad2");
}

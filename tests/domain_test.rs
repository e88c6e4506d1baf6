use doctasks::domain::{
    Chunk, ChunkBoundary, ContentType, DocumentId, TargetLanguage, TaskKind, normalize_whitespace,
    reassemble,
};

#[test]
fn given_known_extensions_when_resolving_content_type_then_maps_case_insensitively() {
    assert_eq!(ContentType::from_filename("report.PDF"), Some(ContentType::Pdf));
    assert_eq!(ContentType::from_filename("notes.txt"), Some(ContentType::Text));
    assert_eq!(ContentType::from_filename("letter.final.docx"), Some(ContentType::Docx));
}

#[test]
fn given_unknown_or_missing_extension_when_resolving_content_type_then_returns_none() {
    assert_eq!(ContentType::from_filename("sheet.xlsx"), None);
    assert_eq!(ContentType::from_filename("README"), None);
}

#[test]
fn given_mime_with_parameters_when_resolving_content_type_then_ignores_parameters() {
    assert_eq!(
        ContentType::from_mime("text/plain; charset=utf-8"),
        Some(ContentType::Text)
    );
    assert_eq!(
        ContentType::from_mime(ContentType::Docx.as_mime()),
        Some(ContentType::Docx)
    );
    assert_eq!(ContentType::from_mime("image/png"), None);
}

#[test]
fn given_task_aliases_when_parsing_then_resolves_task_kind() {
    assert_eq!("summarization".parse::<TaskKind>(), Ok(TaskKind::Summarize));
    assert_eq!("QA".parse::<TaskKind>(), Ok(TaskKind::Answer));
    assert_eq!("question-answering".parse::<TaskKind>(), Ok(TaskKind::Answer));
    assert_eq!("classification".parse::<TaskKind>(), Ok(TaskKind::Classify));
    assert_eq!(" translate ".parse::<TaskKind>(), Ok(TaskKind::Translate));
    assert!("paraphrase".parse::<TaskKind>().is_err());
}

#[test]
fn given_every_task_kind_when_displayed_then_round_trips_through_parse() {
    for kind in TaskKind::ALL {
        assert_eq!(kind.to_string().parse::<TaskKind>(), Ok(kind));
    }
}

#[test]
fn given_language_name_or_code_when_parsing_then_resolves_target() {
    assert_eq!("french".parse::<TargetLanguage>(), Ok(TargetLanguage::French));
    assert_eq!("ZH".parse::<TargetLanguage>(), Ok(TargetLanguage::Chinese));
    assert!("klingon".parse::<TargetLanguage>().is_err());
}

#[test]
fn given_each_target_language_when_mapping_then_uses_english_source_model() {
    assert_eq!(TargetLanguage::German.model_id(), "Helsinki-NLP/opus-mt-en-de");
    for language in TargetLanguage::ALL {
        assert_eq!(
            language.model_id(),
            format!("Helsinki-NLP/opus-mt-en-{}", language.code())
        );
    }
}

#[test]
fn given_chunks_with_mixed_boundaries_when_reassembling_then_restores_spacing() {
    let id = DocumentId::new();
    let chunks = vec![
        Chunk::new("alpha beta".to_string(), id, 0, 0, ChunkBoundary::Start),
        Chunk::new("gam".to_string(), id, 1, 11, ChunkBoundary::Whitespace),
        Chunk::new("ma".to_string(), id, 2, 14, ChunkBoundary::Continuation),
    ];

    assert_eq!(reassemble(&chunks), "alpha beta gamma");
}

#[test]
fn given_no_chunks_when_reassembling_then_returns_empty() {
    assert_eq!(reassemble(&[]), "");
}

#[test]
fn given_irregular_whitespace_when_normalizing_then_collapses_runs() {
    assert_eq!(normalize_whitespace("  a\t\tb \n\n c  "), "a b c");
}

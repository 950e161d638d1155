use std::io::Write;

use storage::{JsonFileRepository, QuestionRepository, StorageError};

fn write_temp(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(contents.as_bytes()).expect("write");
    file
}

#[tokio::test]
async fn loads_questions_from_disk() {
    let file = write_temp(
        r#"[
            {"question": "Capital of Brazil?", "options": ["Rio", "Brasília"], "correctAnswer": "Brasília"},
            {"question": "3 x 3?", "options": ["6", "9"], "correctAnswer": "9"}
        ]"#,
    );

    let repo = JsonFileRepository::new(file.path());
    let set = repo.load_questions().await.unwrap();

    assert_eq!(set.len(), 2);
    assert_eq!(set.get(0).unwrap().correct_answer(), "Brasília");
    assert!(set.get(1).unwrap().is_correct("9"));
}

#[tokio::test]
async fn reload_sees_file_changes() {
    let file = write_temp("[]");
    let repo = JsonFileRepository::new(file.path());
    assert!(repo.load_questions().await.unwrap().is_empty());

    std::fs::write(
        file.path(),
        r#"[{"question": "Q", "options": ["a"], "correctAnswer": "a"}]"#,
    )
    .unwrap();
    assert_eq!(repo.load_questions().await.unwrap().len(), 1);
}

#[tokio::test]
async fn invalid_json_is_reported() {
    let file = write_temp("{ not json");
    let repo = JsonFileRepository::new(file.path());

    let err = repo.load_questions().await.unwrap_err();
    assert!(matches!(err, StorageError::Serialization(_)));
}

#[tokio::test]
async fn missing_file_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("questions.json");
    let repo = JsonFileRepository::new(&path);

    let err = repo.load_questions().await.unwrap_err();
    assert!(matches!(err, StorageError::NotFound(p) if p == path));
}

//! Session persistence against a scratch data directory.

use vision_guide::session::QuestionnaireSession;
use vision_guide::storage::SessionStore;

fn scratch_store(tag: &str, limit: usize) -> SessionStore {
    let dir = std::env::temp_dir().join(format!("vision-guide-it-{}-{}", tag, uuid::Uuid::new_v4()));
    SessionStore::new(dir, limit)
}

#[test]
fn test_history_keeps_most_recent_sessions() {
    let store = scratch_store("cap", 10);
    let mut ids = Vec::new();
    for i in 0..12 {
        let session = QuestionnaireSession::new().with_answer("time_2", i);
        ids.push(store.save_session(&session).unwrap().session_id);
        store.clear_all().unwrap();
    }

    let sessions = store.saved_sessions();
    assert_eq!(sessions.len(), 10);
    let kept: Vec<&str> = sessions.iter().map(|s| s.session_id.as_str()).collect();
    assert!(!kept.contains(&ids[0].as_str()));
    assert!(!kept.contains(&ids[1].as_str()));
    assert_eq!(kept[0], ids[11]);
    assert!(
        sessions
            .windows(2)
            .all(|w| w[0].last_updated >= w[1].last_updated)
    );
    let _ = std::fs::remove_dir_all(store.root());
}

#[test]
fn test_load_session_restores_answers_and_cursor() {
    let store = scratch_store("load", 10);
    let session = QuestionnaireSession::new()
        .with_answer("time_1", "mixed")
        .next()
        .with_answer("time_2", 7)
        .next();
    let saved = store.save_session(&session).unwrap();
    store.clear_all().unwrap();
    assert!(store.answers().is_empty());

    let loaded = store.load_session(&saved.session_id).unwrap().unwrap();
    assert_eq!(loaded.current_question_index, 2);
    let restored = store.restore();
    assert_eq!(restored.current_index(), 2);
    assert_eq!(restored.answers(), session.answers());
    assert_eq!(store.session_id().unwrap(), saved.session_id);

    assert!(store.load_session("session_0_missing").unwrap().is_none());
    let _ = std::fs::remove_dir_all(store.root());
}

#[test]
fn test_saved_session_wire_format() {
    let store = scratch_store("wire", 10);
    let saved = store
        .save_session(&QuestionnaireSession::new().with_answer("social_2", 40))
        .unwrap();
    let raw = std::fs::read_to_string(store.root().join("session.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value["sessionId"], saved.session_id.as_str());
    assert_eq!(value["version"], "1.0");
    assert_eq!(value["currentQuestionIndex"], 0);
    assert_eq!(value["answers"]["social_2"], 40.0);
    assert!(value["lastUpdated"].is_string());
    let _ = std::fs::remove_dir_all(store.root());
}

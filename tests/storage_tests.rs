use bytes::Bytes;
use image_server::storage::models::{Submission, User};
use image_server::storage::Database;

fn test_db() -> (tempfile::TempDir, Database) {
    let dir = tempfile::tempdir().unwrap();
    let db = Database::open(dir.path().join("data")).unwrap();
    (dir, db)
}

fn sample_submission(id: &str, author_id: &str) -> Submission {
    Submission {
        id: id.to_string(),
        is_animated: false,
        author_id: author_id.to_string(),
        timestamp_ms: 1_700_000_000_000,
        payload: Bytes::from_static(b"not-actually-webp"),
    }
}

fn sample_user(id: &str, username: &str) -> User {
    User {
        id: id.to_string(),
        username: username.to_string(),
        password_hash: "$argon2id$stub".to_string(),
        max_upload_size_mb: 8,
        is_admin: false,
        submitted_ids: Vec::new(),
    }
}

#[test]
fn test_put_and_get_submission() {
    let (_dir, db) = test_db();
    let submission = sample_submission("sub-1", "user-1");

    db.put_submission(&submission).unwrap();

    let retrieved = db
        .get_submission("sub-1")
        .unwrap()
        .expect("submission should exist");
    assert_eq!(retrieved.id, "sub-1");
    assert_eq!(retrieved.author_id, "user-1");
    assert_eq!(retrieved.timestamp_ms, 1_700_000_000_000);
    assert_eq!(retrieved.payload, Bytes::from_static(b"not-actually-webp"));
    assert!(!retrieved.is_animated);
}

#[test]
fn test_get_submission_not_found() {
    let (_dir, db) = test_db();
    assert!(db.get_submission("nonexistent").unwrap().is_none());
}

#[test]
fn test_list_submissions() {
    let (_dir, db) = test_db();
    db.put_submission(&sample_submission("sub-1", "user-1"))
        .unwrap();
    db.put_submission(&sample_submission("sub-2", "user-1"))
        .unwrap();
    db.put_submission(&sample_submission("sub-3", "user-2"))
        .unwrap();

    let mut ids: Vec<String> = db
        .list_submissions()
        .unwrap()
        .into_iter()
        .map(|s| s.id)
        .collect();
    ids.sort();
    assert_eq!(ids, vec!["sub-1", "sub-2", "sub-3"]);
}

#[test]
fn test_put_submission_overwrite() {
    let (_dir, db) = test_db();
    let mut submission = sample_submission("sub-1", "user-1");
    db.put_submission(&submission).unwrap();

    submission.is_animated = true;
    db.put_submission(&submission).unwrap();

    let retrieved = db.get_submission("sub-1").unwrap().unwrap();
    assert!(retrieved.is_animated);
    assert_eq!(db.list_submissions().unwrap().len(), 1);
}

#[test]
fn test_put_and_get_user() {
    let (_dir, db) = test_db();
    let mut user = sample_user("user-1", "alice");
    user.submitted_ids = vec!["sub-1".to_string(), "sub-2".to_string()];

    db.put_user(&user).unwrap();

    let retrieved = db.get_user("user-1").unwrap().expect("user should exist");
    assert_eq!(retrieved.username, "alice");
    assert_eq!(retrieved.max_upload_size_mb, 8);
    assert_eq!(retrieved.submitted_ids, vec!["sub-1", "sub-2"]);
    assert!(!retrieved.is_admin);
}

#[test]
fn test_get_user_not_found() {
    let (_dir, db) = test_db();
    assert!(db.get_user("nonexistent").unwrap().is_none());
}

#[test]
fn test_list_users() {
    let (_dir, db) = test_db();
    db.put_user(&sample_user("user-1", "alice")).unwrap();
    db.put_user(&sample_user("user-2", "bob")).unwrap();

    let mut names: Vec<String> = db
        .list_users()
        .unwrap()
        .into_iter()
        .map(|u| u.username)
        .collect();
    names.sort();
    assert_eq!(names, vec!["alice", "bob"]);
}

#[test]
fn test_records_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let data_dir = dir.path().join("data");

    {
        let db = Database::open(&data_dir).unwrap();
        db.put_submission(&sample_submission("sub-1", "user-1"))
            .unwrap();
        db.put_user(&sample_user("user-1", "alice")).unwrap();
    }

    let db = Database::open(&data_dir).unwrap();
    assert!(db.get_submission("sub-1").unwrap().is_some());
    assert!(db.get_user("user-1").unwrap().is_some());
}

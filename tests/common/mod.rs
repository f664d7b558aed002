//! Shared test infrastructure.
//!
//! - `setup()` - in-memory store plus a temp-dir blob root
//! - `create_user()` - user with the shared test password
//! - `seed_document()` - document created through the lifecycle code
//! - `multipart()` - hand-built multipart bodies for HTTP tests

#![allow(dead_code)]

use std::sync::{Arc, OnceLock};

use tempfile::TempDir;

use docflow::auth::password;
use docflow::models::document::{Document, DocumentForm, Upload, lifecycle};
use docflow::models::user::{NewUser, User};
use docflow::state::AppState;
use docflow::storage::FileStorage;
use docflow::store::MemoryStore;

// ============================================================================
// TEST CONSTANTS
// ============================================================================

pub const PASSWORD: &str = "password123";
pub const MAX_UPLOAD: usize = 64 * 1024;
pub const BOUNDARY: &str = "docflow-test-boundary";

/// Temp dir must outlive the state that writes into it.
pub struct TestEnv {
    pub dir: TempDir,
    pub state: AppState,
}

pub fn setup() -> TestEnv {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let files = FileStorage::new(dir.path());
    let state = AppState::new(Arc::new(MemoryStore::new()), files, MAX_UPLOAD);
    TestEnv { dir, state }
}

/// Hashing is slow in debug builds; hash the shared password once.
fn password_hash() -> String {
    static HASH: OnceLock<String> = OnceLock::new();
    HASH.get_or_init(|| password::hash_password(PASSWORD).expect("hash"))
        .clone()
}

pub async fn create_user(state: &AppState, name: &str, permissions: i16) -> User {
    state
        .store()
        .insert_user(NewUser {
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            password: password_hash(),
            permissions,
        })
        .await
        .expect("create user")
}

pub fn upload(file_name: &str, bytes: &[u8]) -> Upload {
    Upload { file_name: file_name.to_string(), bytes: bytes.to_vec() }
}

pub fn create_form(name: &str, priority: &str) -> DocumentForm {
    DocumentForm {
        name: Some(name.to_string()),
        description: Some(format!("Description of {name}")),
        priority: Some(priority.to_string()),
        user_id: None,
        document: Some(upload("attachment.pdf", b"%PDF-1.4 test")),
    }
}

/// Create a document owned by `owner`, acting as `actor`.
pub async fn seed_document(state: &AppState, actor: &User, owner: &User, name: &str, priority: &str) -> Document {
    let form = DocumentForm {
        user_id: Some(owner.id.to_string()),
        ..create_form(name, priority)
    };
    lifecycle::create(state.store(), &state.files, actor, form, state.max_upload_bytes)
        .await
        .expect("seed document")
}

/// Build a multipart/form-data body. Returns (content type, body).
pub fn multipart(fields: &[(&str, &str)], file: Option<(&str, &[u8])>) -> (String, Vec<u8>) {
    let mut body = Vec::new();
    for (name, value) in fields {
        body.extend_from_slice(
            format!("--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n")
                .as_bytes(),
        );
    }
    if let Some((file_name, bytes)) = file {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"document\"; filename=\"{file_name}\"\r\n\
                 Content-Type: application/octet-stream\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(bytes);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    (format!("multipart/form-data; boundary={BOUNDARY}"), body)
}

/// Number of stored blobs under the temp root.
pub fn blob_count(env: &TestEnv) -> usize {
    std::fs::read_dir(env.dir.path().join("documents"))
        .map(|entries| entries.count())
        .unwrap_or(0)
}

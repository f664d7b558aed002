use chrono::{Duration, Utc};
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use crate::auth::password;
use crate::errors::AppError;
use crate::models::document::{NewDocument, Priority};
use crate::models::user::NewUser;
use crate::storage::FileStorage;
use crate::store::Store;

pub const MIGRATIONS: &str = include_str!("schema.sql");

pub async fn init_pool(database_url: &str) -> Result<PgPool, AppError> {
    let pool = PgPoolOptions::new()
        .max_connections(8)
        .connect(database_url)
        .await?;
    Ok(pool)
}

pub async fn run_migrations(pool: &PgPool) -> Result<(), AppError> {
    sqlx::raw_sql(MIGRATIONS).execute(pool).await?;
    log::info!("Database migrations complete");
    Ok(())
}

/// Demo accounts, one per permission level: (name, email, level).
const DEMO_USERS: [(&str, &str, i16); 3] = [
    ("Admin", "admin@example.com", 2),
    ("Manager", "manager@example.com", 1),
    ("Assigned", "assigned@example.com", 0),
];

/// Seed demo users and documents into an empty store.
pub async fn seed_demo(store: &dyn Store, files: &FileStorage, demo_password: &str) -> Result<(), AppError> {
    let count = store.count_users().await?;
    if count > 0 {
        log::info!("Store already seeded ({count} users), skipping demo seed");
        return Ok(());
    }

    let hash = password::hash_password(demo_password)?;
    let mut ids = Vec::with_capacity(DEMO_USERS.len());
    for (name, email, permissions) in DEMO_USERS {
        let user = store
            .insert_user(NewUser {
                name: name.to_string(),
                email: email.to_string(),
                password: hash.clone(),
                permissions,
            })
            .await?;
        ids.push(user.id);
    }

    let (admin, manager) = (ids[0], ids[1]);
    let docs = [
        ("Document 1", Priority::Low, admin, Some(0)),
        ("Document 2", Priority::Medium, manager, None),
        ("Document 3", Priority::High, manager, Some(120)),
        ("Document 4", Priority::High, manager, Some(30)),
    ];
    let total = docs.len();
    for (i, (name, priority, owner, approved_days_ago)) in docs.into_iter().enumerate() {
        let url = files
            .put(&format!("document{}.txt", i + 1), format!("{name}\n").as_bytes())
            .await?;
        let doc = store
            .insert_document(NewDocument {
                name: name.to_string(),
                description: format!("Description of {}", name.to_lowercase()),
                priority,
                date_submitted: Utc::now(),
                url,
                user_id: owner,
            })
            .await?;
        if let Some(days) = approved_days_ago {
            let mut approved = doc;
            approved.date_approved = Some(Utc::now() - Duration::days(days));
            store.save_document(&approved).await?;
        }
    }

    log::info!("Demo seed complete: {} users, {} documents", DEMO_USERS.len(), total);
    Ok(())
}

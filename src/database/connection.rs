use mongodb::{Client, Database};
use std::env;
use tracing::{error, info, warn};

pub async fn get_db_client() -> Database {
    let database_url = env::var("DATABASE_URL")
        .expect("DATABASE_URL must be set as an environment variable");

    let client = Client::with_uri_str(&database_url)
        .await
        .expect("Failed to connect to MongoDB");

    let db_name = "fulizaboost";
    let db = client.database(db_name);

    // Verify database exists by listing collections
    match db.list_collection_names().await {
        Ok(collections) => {
            info!("✅ Connected to database: {}", db_name);
            if !collections.contains(&"boosts".to_string()) {
                warn!("'boosts' collection not found; it will be created on first insert");
            }
        }
        Err(e) => {
            error!("❌ Database '{}' may not exist or is inaccessible: {}", db_name, e);
        }
    }

    db
}

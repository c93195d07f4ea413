// src/infrastructure/database.rs
use mongodb::{Client, Database};

/// Connect to MongoDB and select the application database. The driver
/// establishes connections lazily; a bad URI surfaces on first use.
pub async fn connect(uri: &str, database_name: &str) -> Result<Database, mongodb::error::Error> {
    let client = Client::with_uri_str(uri).await?;
    Ok(client.database(database_name))
}

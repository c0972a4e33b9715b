use mongodb::{Client, Collection};
use mongodb::options::ClientOptions;
use bson::Document;

use crate::config::ShelterConfig;
use crate::error::Result;

/// Builds the connection URI from the credentials and config, constructs a
/// client, and binds a handle to the configured database and collection.
///
/// The driver connects lazily; errors here come from URI or option parsing
/// (e.g. credentials containing reserved characters).
pub(crate) async fn connect(
    username: &str,
    password: &str,
    config: &ShelterConfig,
) -> Result<Collection<Document>> {
    let uri = format!(
        "mongodb://{}:{}@{}:{}",
        username, password, config.host, config.port
    );
    let mut client_options = ClientOptions::parse(uri).await?;
    if let Some(timeout) = config.server_selection_timeout {
        client_options.server_selection_timeout = Some(timeout);
    }
    let client = Client::with_options(client_options)?;
    let db = client.database(&config.database);
    Ok(db.collection::<Document>(&config.collection))
}

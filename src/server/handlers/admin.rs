use axum::extract::Extension;

use crate::error::Error;
use crate::server::DynAPI;

pub async fn create_db(Extension(api): Extension<DynAPI>) -> Result<&'static str, Error> {
    api.migrate().await?;

    Ok("database schema created")
}

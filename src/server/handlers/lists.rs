use axum::extract::{Extension, Json};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::entities::CustomList;
use crate::error::Error;
use crate::server::DynAPI;

#[derive(Serialize, Deserialize)]
pub struct CreateParams {
    list_name: String,
}

pub async fn create(
    Extension(api): Extension<DynAPI>,
    Json(params): Json<CreateParams>,
) -> Result<Json<Value>, Error> {
    let list = api.create_list(params.list_name).await?;

    Ok(Json(json!({
        "message": format!("list '{}' created", list.name),
    })))
}

pub async fn index(Extension(api): Extension<DynAPI>) -> Result<Json<Vec<CustomList>>, Error> {
    let lists = api.list_lists().await?;

    Ok(lists.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Arc;

    use axum::http::StatusCode;
    use axum::response::IntoResponse;

    use crate::server::handlers::testing::StubAPI;

    #[tokio::test]
    async fn create_confirms_with_the_list_name() {
        let api: DynAPI = Arc::new(StubAPI::default());

        let Json(body) = create(
            Extension(api.clone()),
            Json(CreateParams {
                list_name: "weekend trips".into(),
            }),
        )
        .await
        .unwrap();

        assert_eq!(body["message"], "list 'weekend trips' created");

        let Json(lists) = index(Extension(api)).await.unwrap();
        assert_eq!(lists.len(), 1);
        assert_eq!(lists[0].name, "weekend trips");
    }

    #[tokio::test]
    async fn duplicate_name_is_a_conflict_and_changes_nothing() {
        let api: DynAPI = Arc::new(StubAPI::default());

        create(
            Extension(api.clone()),
            Json(CreateParams {
                list_name: "weekend trips".into(),
            }),
        )
        .await
        .unwrap();

        let err = create(
            Extension(api.clone()),
            Json(CreateParams {
                list_name: "weekend trips".into(),
            }),
        )
        .await
        .unwrap_err();

        assert_eq!(err.into_response().status(), StatusCode::CONFLICT);

        let Json(lists) = index(Extension(api)).await.unwrap();
        assert_eq!(lists.len(), 1);
    }

    #[tokio::test]
    async fn empty_name_is_rejected() {
        let api: DynAPI = Arc::new(StubAPI::default());

        let err = create(
            Extension(api),
            Json(CreateParams {
                list_name: "  ".into(),
            }),
        )
        .await
        .unwrap_err();

        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }
}

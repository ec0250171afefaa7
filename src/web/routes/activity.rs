use axum::{
    async_trait,
    extract::{FromRequestParts, Path, Query, State},
    http::request::Parts,
    Json,
};

use crate::models::Activity;
use crate::services::activities_service::{self, MessageResponse};
use crate::web::error::AppError;
use crate::web::SharedRegistry;

/// URL-decoded `:activity_name` path segment.
#[derive(Debug)]
pub struct ActivityName(pub String);

#[async_trait]
impl<S> FromRequestParts<S> for ActivityName
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(name) = Path::<String>::from_request_parts(parts, state).await?;
        Ok(Self(name))
    }
}

/// `?email=` query parameter. When repeated, the last value wins.
#[derive(Debug, Default)]
pub struct EmailQuery {
    pub email: Option<String>,
}

impl EmailQuery {
    // Format is not checked; any non-blank value is accepted as-is.
    fn require_email(self) -> Result<String, AppError> {
        self.email
            .filter(|e| !e.trim().is_empty())
            .ok_or(AppError::MissingEmail)
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for EmailQuery
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(pairs) = Query::<Vec<(String, String)>>::from_request_parts(parts, state).await?;
        let email = pairs
            .into_iter()
            .filter(|(key, _)| key == "email")
            .map(|(_, value)| value)
            .last();
        Ok(Self { email })
    }
}

pub async fn activity_detail_handler(
    ActivityName(activity_name): ActivityName,
    State(registry): State<SharedRegistry>,
) -> Result<Json<Activity>, AppError> {
    let activity = activities_service::load_activity(&registry, &activity_name)?;
    Ok(Json(activity))
}

pub async fn signup_handler(
    ActivityName(activity_name): ActivityName,
    query: EmailQuery,
    State(registry): State<SharedRegistry>,
) -> Result<Json<MessageResponse>, AppError> {
    let email = query.require_email()?;
    let response = activities_service::sign_up(&registry, &activity_name, &email)?;
    Ok(Json(response))
}

pub async fn unregister_handler(
    ActivityName(activity_name): ActivityName,
    query: EmailQuery,
    State(registry): State<SharedRegistry>,
) -> Result<Json<MessageResponse>, AppError> {
    let email = query.require_email()?;
    let response = activities_service::unregister(&registry, &activity_name, &email)?;
    Ok(Json(response))
}

use super::error::*;
use crate::application_port::*;
use crate::domain_model::User;
use crate::logger::*;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use warp::http::StatusCode;
use warp::hyper::body::Bytes;
use warp::{self, reject};

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub image: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        UserResponse {
            id: user.id.to_string(),
            name: user.name,
            image: user.image,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
}

// The body is decoded as JSON whatever its declared content type.
// Answers 201 whether or not the user already existed.
pub async fn create_user(
    body: Bytes,
    user_service: Arc<dyn UserService>,
) -> Result<impl warp::Reply, warp::Rejection> {
    let body: CreateUserRequest = serde_json::from_slice(&body)
        .map_err(ApiError::bad_request)
        .map_err(reject::custom)?;

    let registration = user_service
        .register(&body.name)
        .await
        .map_err(ApiError::from)
        .map_err(reject::custom)?;

    if registration.created {
        info!(user_id = %registration.user.id, name = %registration.user.name, "user created");
    } else {
        info!(user_id = %registration.user.id, name = %registration.user.name, "user already exists");
    }

    let response = UserResponse::from(registration.user);
    Ok(warp::reply::with_status(
        warp::reply::json(&response),
        StatusCode::CREATED,
    ))
}

/// Raw query pairs in order of appearance; repeated keys are kept.
pub type QueryPairs = Vec<(String, String)>;

// The first `name` wins; a missing one is looked up as "".
fn first_name(query: &QueryPairs) -> &str {
    query
        .iter()
        .find(|(key, _)| key == "name")
        .map(|(_, value)| value.as_str())
        .unwrap_or_default()
}

pub async fn find_user(
    query: QueryPairs,
    user_service: Arc<dyn UserService>,
) -> Result<impl warp::Reply, warp::Rejection> {
    let user = user_service
        .find_by_name(first_name(&query))
        .await
        .map_err(ApiError::from)
        .map_err(reject::custom)?;

    Ok(warp::reply::json(&UserResponse::from(user)))
}

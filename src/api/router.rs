use super::handler::{self, QueryPairs};
use crate::server::*;
use std::convert::Infallible;
use std::sync::Arc;
use warp::Filter;

pub fn routes(
    server: Arc<Server>,
) -> impl Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone {
    let create_user = warp::path("users")
        .and(warp::path::end())
        .and(warp::post())
        .and(warp::body::bytes())
        .and(with(server.user_service.clone()))
        .and_then(handler::create_user);

    let find_user = warp::path("users")
        .and(warp::path::end())
        .and(warp::get())
        .and(warp::query::<QueryPairs>())
        .and(with(server.user_service.clone()))
        .and_then(handler::find_user);

    create_user.or(find_user)
}

fn with<ServiceType>(
    service: Arc<ServiceType>,
) -> impl Filter<Extract = (Arc<ServiceType>,), Error = Infallible> + Clone
where
    ServiceType: Send + Sync + ?Sized,
{
    warp::any().map(move || service.clone())
}

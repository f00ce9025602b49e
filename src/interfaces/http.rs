use crate::domain::ports::SharedAggregator;
use crate::domain::types::{DistanceEvent, ObuId};
use crate::error::AggregatorError;
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use warp::http::StatusCode;
use warp::reply::{Json, WithStatus};
use warp::{Filter, Rejection, Reply};

/// Wire shape of every error response: `{"error": "<message>"}`.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, Deserialize)]
struct InvoiceQuery {
    obu: ObuId,
}

/// The full HTTP surface of the aggregator:
/// `POST /aggregate` with a distance event body, and
/// `GET /invoice?obu=<id>` returning the invoice document.
pub fn routes(
    svc: SharedAggregator,
) -> impl Filter<Extract = impl Reply, Error = Infallible> + Clone {
    aggregate(svc.clone()).or(invoice(svc)).recover(handle_rejection)
}

fn with_service(
    svc: SharedAggregator,
) -> impl Filter<Extract = (SharedAggregator,), Error = Infallible> + Clone {
    warp::any().map(move || svc.clone())
}

fn aggregate(
    svc: SharedAggregator,
) -> impl Filter<Extract = (WithStatus<Json>,), Error = Rejection> + Clone {
    warp::path("aggregate")
        .and(warp::path::end())
        .and(warp::post())
        .and(warp::body::json())
        .and(with_service(svc))
        .and_then(handle_aggregate)
}

fn invoice(
    svc: SharedAggregator,
) -> impl Filter<Extract = (WithStatus<Json>,), Error = Rejection> + Clone {
    warp::path("invoice")
        .and(warp::path::end())
        .and(warp::get())
        .and(warp::query::<InvoiceQuery>())
        .and(with_service(svc))
        .and_then(handle_invoice)
}

async fn handle_aggregate(
    event: DistanceEvent,
    svc: SharedAggregator,
) -> Result<WithStatus<Json>, Rejection> {
    match svc.record_distance(event).await {
        Ok(()) => Ok(warp::reply::with_status(
            warp::reply::json(&serde_json::json!({"message": "distance aggregated"})),
            StatusCode::OK,
        )),
        Err(err) => Ok(error_reply(&err)),
    }
}

async fn handle_invoice(
    query: InvoiceQuery,
    svc: SharedAggregator,
) -> Result<WithStatus<Json>, Rejection> {
    match svc.compute_invoice(query.obu).await {
        Ok(invoice) => Ok(warp::reply::with_status(
            warp::reply::json(&invoice),
            StatusCode::OK,
        )),
        Err(err) => Ok(error_reply(&err)),
    }
}

fn error_reply(err: &AggregatorError) -> WithStatus<Json> {
    let status = match err {
        AggregatorError::NotFound(_) => StatusCode::NOT_FOUND,
        AggregatorError::Malformed(_) => StatusCode::BAD_REQUEST,
        AggregatorError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    warp::reply::with_status(
        warp::reply::json(&ErrorBody {
            error: err.to_string(),
        }),
        status,
    )
}

async fn handle_rejection(err: Rejection) -> Result<impl Reply, Infallible> {
    let (status, message) = if err.is_not_found() {
        (StatusCode::NOT_FOUND, "resource not found".to_string())
    } else if let Some(e) = err.find::<warp::filters::body::BodyDeserializeError>() {
        (StatusCode::BAD_REQUEST, e.to_string())
    } else if err.find::<warp::reject::InvalidQuery>().is_some() {
        (StatusCode::BAD_REQUEST, "missing or invalid OBU ID".to_string())
    } else if err.find::<warp::reject::MethodNotAllowed>().is_some() {
        (
            StatusCode::METHOD_NOT_ALLOWED,
            "method not allowed".to_string(),
        )
    } else {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "internal server error".to_string(),
        )
    };
    Ok(warp::reply::with_status(
        warp::reply::json(&ErrorBody { error: message }),
        status,
    ))
}

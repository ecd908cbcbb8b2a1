//! String analysis API endpoints.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use analysis::record::format_utc_z;
use analysis::{AnalysisError, InterpretedQuery, MatchResult, Properties, StringFilters, StringRecord};

use crate::server::error::{ApiError, ApiErrorResponse};
use crate::server::ServerState;

/// A stored string together with its freshly computed properties.
#[derive(Debug, Serialize, ToSchema)]
pub struct StringResponse {
    pub id: String,
    pub value: String,
    /// UTC, second precision, literal `Z` suffix.
    pub created_at: String,
    #[schema(value_type = Object)]
    pub properties: Properties,
}

/// Structured filter parameters for the list endpoint.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListStringsParams {
    pub is_palindrome: Option<bool>,
    pub min_length: Option<i64>,
    pub max_length: Option<i64>,
    pub word_count: Option<i64>,
    /// Exactly one character.
    pub contains_character: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ListStringsResponse {
    pub data: Vec<StringResponse>,
    pub count: usize,
    #[schema(value_type = Object)]
    pub filters_applied: StringFilters,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct NaturalLanguageParams {
    /// Free-text query, e.g. "all single word palindromic strings".
    pub query: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct NaturalLanguageResponse {
    pub data: Vec<StringResponse>,
    pub count: usize,
    #[schema(value_type = Object)]
    pub interpreted_query: InterpretedQuery,
}

#[utoipa::path(
    post,
    path = "/api/v1/strings",
    tag = "strings",
    responses(
        (status = 201, description = "String stored and analyzed", body = StringResponse),
        (status = 400, body = ApiErrorResponse),
        (status = 409, body = ApiErrorResponse),
        (status = 422, body = ApiErrorResponse),
    )
)]
#[tracing::instrument(skip_all)]
pub(crate) async fn create(
    State(state): State<Arc<ServerState>>,
    Json(payload): Json<serde_json::Value>,
) -> Result<(StatusCode, Json<StringResponse>), ApiError> {
    // The payload is inspected untyped so a present-but-non-string `value`
    // can be told apart from a missing one.
    let value = payload
        .get("value")
        .ok_or_else(|| ApiError::bad_request("invalid request body or missing \"value\" field"))?;
    let value = value
        .as_str()
        .ok_or_else(|| ApiError::from(AnalysisError::NotAString))?;

    let (record, properties) = state.strings.create(value)?;
    Ok((StatusCode::CREATED, Json(to_response(record, properties))))
}

#[utoipa::path(
    get,
    path = "/api/v1/strings",
    tag = "strings",
    params(ListStringsParams),
    responses(
        (status = 200, body = ListStringsResponse),
        (status = 400, body = ApiErrorResponse),
    )
)]
pub(crate) async fn list(
    State(state): State<Arc<ServerState>>,
    Query(params): Query<ListStringsParams>,
) -> Result<Json<ListStringsResponse>, ApiError> {
    let filters = filters_from_params(params)?;
    let result = state.strings.list(&filters)?;
    Ok(Json(ListStringsResponse {
        count: result.count,
        data: to_responses(result),
        filters_applied: filters,
    }))
}

#[utoipa::path(
    get,
    path = "/api/v1/strings/filter-by-natural-language",
    tag = "strings",
    params(NaturalLanguageParams),
    responses(
        (status = 200, body = NaturalLanguageResponse),
        (status = 400, body = ApiErrorResponse),
        (status = 422, body = ApiErrorResponse),
    ),
    description = "Filter the corpus with a free-text query such as \
                   'strings longer than 10 characters'."
)]
#[tracing::instrument(skip_all)]
pub(crate) async fn filter_by_natural_language(
    State(state): State<Arc<ServerState>>,
    Query(params): Query<NaturalLanguageParams>,
) -> Result<Json<NaturalLanguageResponse>, ApiError> {
    let (interpreted, result) = state.strings.query(&params.query)?;
    Ok(Json(NaturalLanguageResponse {
        count: result.count,
        data: to_responses(result),
        interpreted_query: interpreted,
    }))
}

#[utoipa::path(
    get,
    path = "/api/v1/strings/{value}",
    tag = "strings",
    params(("value" = String, Path, description = "The raw string value")),
    responses(
        (status = 200, body = StringResponse),
        (status = 404, body = ApiErrorResponse),
    )
)]
pub(crate) async fn get_by_value(
    State(state): State<Arc<ServerState>>,
    Path(value): Path<String>,
) -> Result<Json<StringResponse>, ApiError> {
    let (record, properties) = state.strings.get_by_value(&value)?;
    Ok(Json(to_response(record, properties)))
}

#[utoipa::path(
    delete,
    path = "/api/v1/strings/{value}",
    tag = "strings",
    params(("value" = String, Path, description = "The raw string value")),
    responses(
        (status = 204, description = "String deleted"),
        (status = 404, body = ApiErrorResponse),
    )
)]
pub(crate) async fn delete_by_value(
    State(state): State<Arc<ServerState>>,
    Path(value): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.strings.delete_by_value(&value)?;
    Ok(StatusCode::NO_CONTENT)
}

fn filters_from_params(params: ListStringsParams) -> Result<StringFilters, ApiError> {
    let contains_character = match params.contains_character {
        None => None,
        Some(raw) => {
            let mut chars = raw.chars();
            match (chars.next(), chars.next()) {
                (Some(ch), None) => Some(ch),
                _ => {
                    return Err(ApiError::from(AnalysisError::InvalidFilters(
                        "contains_character must be exactly one character".to_string(),
                    )))
                }
            }
        }
    };
    Ok(StringFilters {
        is_palindrome: params.is_palindrome,
        min_length: params.min_length,
        max_length: params.max_length,
        word_count: params.word_count,
        contains_character,
    })
}

fn to_response(record: StringRecord, properties: Properties) -> StringResponse {
    StringResponse {
        id: record.id,
        value: record.value,
        created_at: format_utc_z(record.created_at),
        properties,
    }
}

fn to_responses(result: MatchResult) -> Vec<StringResponse> {
    result
        .matches
        .into_iter()
        .map(|(record, properties)| to_response(record, properties))
        .collect()
}

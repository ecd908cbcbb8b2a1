use axum::Json;
use utoipa::OpenApi;

use crate::server::error::{ApiErrorBody, ApiErrorResponse};
use crate::server::strings::{
    ListStringsResponse, NaturalLanguageResponse, StringResponse,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Strand API",
        version = "0.1.0",
        description = "Analyzes strings and answers structured and natural-language queries over them"
    ),
    paths(
        crate::server::strings::create,
        crate::server::strings::list,
        crate::server::strings::filter_by_natural_language,
        crate::server::strings::get_by_value,
        crate::server::strings::delete_by_value,
    ),
    components(schemas(
        ApiErrorResponse,
        ApiErrorBody,
        StringResponse,
        ListStringsResponse,
        NaturalLanguageResponse,
    ))
)]
pub struct ApiDoc;

/// GET /api/v1/openapi.json
pub(crate) async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

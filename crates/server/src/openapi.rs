use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

/// Stored bank as returned by list/get/update.
#[derive(ToSchema)]
pub struct BankDoc { pub id: String, pub name: String, pub location: String }

/// Create/update payload; both fields are required.
#[derive(ToSchema)]
pub struct BankInputDoc { pub name: String, pub location: String }

#[derive(ToSchema)]
pub struct MessageDoc { pub message: String }

#[derive(ToSchema)]
pub struct ErrorDoc { pub error: String }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::banks::create,
        crate::routes::banks::list,
        crate::routes::banks::get,
        crate::routes::banks::update,
        crate::routes::banks::delete,
    ),
    components(
        schemas(
            HealthResponse,
            BankDoc,
            BankInputDoc,
            MessageDoc,
            ErrorDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "banks")
    )
)]
pub struct ApiDoc;

use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct AutoDoc {
    pub color: String,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub vin: String,
    pub owner: Option<String>,
}

#[derive(ToSchema)]
pub struct UpdateAutoDoc {
    pub color: Option<String>,
    pub owner: Option<String>,
}

#[derive(ToSchema)]
#[allow(non_snake_case)]
pub struct AutosListDoc {
    pub autosList: Vec<AutoDoc>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::autos::list_autos,
        crate::routes::autos::add_auto,
        crate::routes::autos::get_auto,
        crate::routes::autos::update_auto,
        crate::routes::autos::delete_auto,
    ),
    components(
        schemas(
            HealthResponse,
            AutoDoc,
            UpdateAutoDoc,
            AutosListDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "autos")
    )
)]
pub struct ApiDoc;

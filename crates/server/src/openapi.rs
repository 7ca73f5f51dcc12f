use serde::Serialize;
use utoipa::{OpenApi, ToSchema};

#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(Serialize, ToSchema)]
pub struct StudentDoc {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub course: Option<String>,
    /// `Active` or `Inactive`
    pub status: String,
    pub created_at: String,
}

#[derive(Serialize, ToSchema)]
pub struct StudentDraftDoc {
    pub name: Option<String>,
    pub email: Option<String>,
    pub course: Option<String>,
    /// Defaults to `Active`
    pub status: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct StudentChangesDoc {
    pub name: Option<String>,
    pub email: Option<String>,
    pub course: Option<String>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::students::list,
        crate::routes::students::create,
        crate::routes::students::update,
        crate::routes::students::delete,
    ),
    components(
        schemas(
            HealthResponse,
            StudentDoc,
            StudentDraftDoc,
            StudentChangesDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "students")
    )
)]
pub struct ApiDoc;

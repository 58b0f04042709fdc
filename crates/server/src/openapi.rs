use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(ToSchema)]
pub struct ErrorResponse {
    pub message: String,
}

#[derive(ToSchema)]
pub struct CreateClienteRequest {
    pub cpf: String,
    pub nome: String,
    pub email: Option<String>,
    pub telefone: Option<String>,
}

#[derive(ToSchema)]
pub struct UpdateClienteRequest {
    pub cpf: Option<String>,
    pub nome: Option<String>,
    pub email: Option<String>,
    pub telefone: Option<String>,
}

#[derive(ToSchema)]
pub struct RegisterRequest {
    pub email: String,
    pub nome: String,
    pub senha: String,
}

#[derive(ToSchema)]
pub struct LoginRequest {
    pub email: String,
    pub senha: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::auth::register,
        crate::routes::auth::login,
        crate::routes::clientes::create,
        crate::routes::clientes::list,
        crate::routes::clientes::get_one,
        crate::routes::clientes::get_by_cpf,
        crate::routes::clientes::update,
        crate::routes::clientes::remove,
        crate::routes::clientes::link,
        crate::routes::clientes::download_status,
    ),
    components(
        schemas(
            HealthResponse,
            ErrorResponse,
            CreateClienteRequest,
            UpdateClienteRequest,
            RegisterRequest,
            LoginRequest,
        )
    ),
    tags(
        (name = "health"),
        (name = "auth"),
        (name = "clientes")
    )
)]
pub struct ApiDoc;

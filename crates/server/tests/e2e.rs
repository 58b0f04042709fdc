use std::net::SocketAddr;

use axum::Router;
use migration::MigratorTrait;
use reqwest::StatusCode as HttpStatusCode;
use sea_orm::{DatabaseConnection, EntityTrait};
use serde_json::json;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use uuid::Uuid;

use server::routes::{self, auth};
use service::download::DownloadConfig;

const TEST_SECRET: &str = "test-secret";
const TEST_BASE_URL: &str = "https://painel.example.com/download/";

fn cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

struct TestApp {
    base_url: String,
    db: DatabaseConnection,
}

async fn start_server() -> anyhow::Result<TestApp> {
    // Ensure models prefer env over config file
    std::env::set_var("CONFIG_PATH", "/nonexistent-config-for-tests.toml");

    // Connect DB and run migrations; callers skip when no database is around
    let db = models::db::connect().await?;
    migration::Migrator::up(&db, None).await?;

    let state = auth::ServerState {
        db: db.clone(),
        auth: auth::ServerAuthConfig { jwt_secret: TEST_SECRET.into() },
        download: DownloadConfig::new(TEST_SECRET, TEST_BASE_URL, 4 * 3600),
    };

    let app: Router = routes::build_router(cors(), state);
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            eprintln!("server error: {}", e);
        }
    });

    Ok(TestApp { base_url, db })
}

fn client() -> reqwest::Client {
    reqwest::Client::builder().cookie_store(true).build().expect("reqwest client")
}

fn unique_cpf() -> String {
    let n = Uuid::new_v4().as_u128() % 100_000_000_000;
    format!("{:011}", n)
}

#[tokio::test]
async fn e2e_public_health() -> anyhow::Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return Ok(());
    }
    let app = match start_server().await {
        Ok(a) => a,
        Err(_) => return Ok(()),
    };
    let res = client().get(format!("{}/health", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["status"], "ok");
    Ok(())
}

#[tokio::test]
async fn e2e_cliente_crud_and_link_flow() -> anyhow::Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return Ok(());
    }
    let app = match start_server().await {
        Ok(a) => a,
        Err(_) => return Ok(()),
    };
    let c = client();

    // Empty table first: listing must be a 404, not an empty array
    models::cliente::Entity::delete_many().exec(&app.db).await?;
    let res = c.get(format!("{}/clientes", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["message"], "Nenhum cliente encontrado");

    // Create
    let cpf = unique_cpf();
    let res = c
        .post(format!("{}/clientes", app.base_url))
        .json(&json!({"cpf": cpf, "nome": "Maria Silva", "email": "maria@example.com"}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let created = res.json::<serde_json::Value>().await?;
    assert_eq!(created["cpf"], cpf.as_str());
    assert_eq!(created["nome"], "Maria Silva");
    // Internal columns never leave the API
    assert!(created.get("created_at").is_none());
    assert!(created.get("updated_at").is_none());
    let id = created["id"].as_i64().expect("created id");

    // Duplicate CPF
    let res = c
        .post(format!("{}/clientes", app.base_url))
        .json(&json!({"cpf": cpf, "nome": "Outra Pessoa"}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["message"], "CPF ja cadastrado");

    // Read back, by id and by cpf
    let res = c.get(format!("{}/clientes/{}", app.base_url, id)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let res = c.get(format!("{}/clientes/cpf/{}", app.base_url, cpf)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);

    // Unknown id is a 404
    let res = c.get(format!("{}/clientes/2000000000", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["message"], "Nenhum cliente encontrado");

    // Partial update touches only the provided field
    let res = c
        .patch(format!("{}/clientes/{}", app.base_url, id))
        .json(&json!({"nome": "Maria Souza"}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let updated = res.json::<serde_json::Value>().await?;
    assert_eq!(updated["nome"], "Maria Souza");
    assert_eq!(updated["cpf"], cpf.as_str());
    assert_eq!(updated["email"], "maria@example.com");

    // Generate the download link and follow it
    let res = c.post(format!("{}/clientes/{}/link", app.base_url, id)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    let link = body["linkdownload"].as_str().expect("linkdownload");
    assert!(link.starts_with(TEST_BASE_URL));
    let token = link.strip_prefix(TEST_BASE_URL).unwrap();

    let res = c.get(format!("{}/download/{}", app.base_url, token)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["statusdownload"], "ACESSOU LINK");

    let res = c.get(format!("{}/clientes/{}", app.base_url, id)).send().await?;
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["statusdownload"], "ACESSOU LINK");
    assert_eq!(body["linkdownload"], link);

    // A garbled token is a 404, not a 500
    let res = c.get(format!("{}/download/um-token-invalido", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["message"], "Erro Token Invalido");

    // Delete, then delete again: the second one is a 404, never a 500
    let res = c.delete(format!("{}/clientes/{}", app.base_url, id)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let res = c.delete(format!("{}/clientes/{}", app.base_url, id)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);

    // Documento flow rides on the same test to keep table wipes serialized.
    // Documento rows hang off a cliente
    let res = c
        .post(format!("{}/clientes", app.base_url))
        .json(&json!({"cpf": unique_cpf(), "nome": "Dono Documento"}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let owner = res.json::<serde_json::Value>().await?;
    let owner_id = owner["id"].as_i64().expect("owner id");

    let res = c
        .post(format!("{}/documentos", app.base_url))
        .json(&json!({
            "userId": owner_id,
            "tipodocumento": "RG",
            "numerodocumento": "123456789",
            "validade": "01-01-2030",
            "status": "PENDENTE",
            "arquivoDocumento": "https://files.example.com/rg.png"
        }))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let doc = res.json::<serde_json::Value>().await?;
    let doc_id = doc["id"].as_i64().expect("doc id");
    assert_eq!(doc["userId"], owner_id);
    assert_eq!(doc["arquivoDocumento"], "https://files.example.com/rg.png");

    // Only status and motivo change
    let res = c
        .patch(format!("{}/documentos/{}", app.base_url, doc_id))
        .json(&json!({"status": "REPROVADO", "motivo": "Documento ilegivel"}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let updated = res.json::<serde_json::Value>().await?;
    assert_eq!(updated["status"], "REPROVADO");
    assert_eq!(updated["motivo"], "Documento ilegivel");
    assert_eq!(updated["tipodocumento"], "RG");
    assert_eq!(updated["numerodocumento"], "123456789");

    let res = c
        .patch(format!("{}/documentos/2000000000", app.base_url))
        .json(&json!({"status": "APROVADO"}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["message"], "Nenhum documento encontrado");

    // Cleanup cascades to the documento
    let res = c.delete(format!("{}/clientes/{}", app.base_url, owner_id)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    Ok(())
}

#[tokio::test]
async fn e2e_auth_register_login_me() -> anyhow::Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return Ok(());
    }
    let app = match start_server().await {
        Ok(a) => a,
        Err(_) => return Ok(()),
    };
    let c = client();

    let email = format!("op_{}@example.com", Uuid::new_v4());
    let senha = "S3nhaForte!";

    // Register
    let res = c
        .post(format!("{}/auth/register", app.base_url))
        .json(&json!({"email": email, "nome": "Operadora", "senha": senha}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    let usuario_id = body["usuario_id"].as_i64().expect("usuario_id");

    // Duplicate email
    let res = c
        .post(format!("{}/auth/register", app.base_url))
        .json(&json!({"email": email, "nome": "Outra", "senha": senha}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["message"], "Email ja cadastrado");

    // Wrong password
    let res = c
        .post(format!("{}/auth/login", app.base_url))
        .json(&json!({"email": email, "senha": "senha-errada"}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::UNAUTHORIZED);

    // Login -> token + cookie
    let res = c
        .post(format!("{}/auth/login", app.base_url))
        .json(&json!({"email": email, "senha": senha}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert!(res.headers().get("set-cookie").is_some());
    let body = res.json::<serde_json::Value>().await?;
    let token = body["token"].as_str().expect("token").to_string();
    assert_eq!(body["usuario_id"], usuario_id);

    // Bearer token resolves back to the usuario
    let res = c
        .get(format!("{}/auth/me", app.base_url))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["usuario_id"], usuario_id);
    assert_eq!(body["email"], email.as_str());

    // An expired token is rejected
    {
        use jsonwebtoken::{encode, EncodingKey, Header};
        #[derive(serde::Serialize)]
        struct Claims {
            sub: String,
            uid: i32,
            exp: usize,
        }
        let exp = (chrono::Utc::now() - chrono::Duration::hours(1)).timestamp() as usize;
        let claims = Claims { sub: email.clone(), uid: usuario_id as i32, exp };
        let expired = encode(&Header::default(), &claims, &EncodingKey::from_secret(TEST_SECRET.as_bytes()))?;
        let res = c
            .get(format!("{}/auth/me", app.base_url))
            .header("Authorization", format!("Bearer {}", expired))
            .send()
            .await?;
        assert_eq!(res.status(), HttpStatusCode::UNAUTHORIZED);
    }

    models::usuario::hard_delete(&app.db, usuario_id as i32).await?;
    Ok(())
}

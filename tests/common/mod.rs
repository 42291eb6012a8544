use std::net::SocketAddr;

use reqwest::{Client, StatusCode};
use serde_json::{json, Value};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use uuid::Uuid;

use equipe::config::Config;

/// A running test server instance with a dedicated test database.
pub struct TestApp {
    pub addr: SocketAddr,
    pub pool: PgPool,
    pub client: Client,
    pub db_name: String,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// GET a JSON endpoint, return (body, status).
    pub async fn get_json(&self, path: &str) -> (Value, StatusCode) {
        let resp = self
            .client
            .get(self.url(path))
            .send()
            .await
            .expect("get request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    /// GET a plain-text endpoint, return (body, status).
    pub async fn get_text(&self, path: &str) -> (String, StatusCode) {
        let resp = self
            .client
            .get(self.url(path))
            .send()
            .await
            .expect("get request failed");
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        (body, status)
    }

    /// POST a JSON body, return the plain-text response + status.
    pub async fn post_json(&self, path: &str, body: &Value) -> (String, StatusCode) {
        let resp = self
            .client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .expect("post request failed");
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        (body, status)
    }

    /// PUT a JSON body, return the plain-text response + status.
    pub async fn put_json(&self, path: &str, body: &Value) -> (String, StatusCode) {
        let resp = self
            .client
            .put(self.url(path))
            .json(body)
            .send()
            .await
            .expect("put request failed");
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        (body, status)
    }

    /// DELETE, return the plain-text response + status.
    pub async fn delete(&self, path: &str) -> (String, StatusCode) {
        let resp = self
            .client
            .delete(self.url(path))
            .send()
            .await
            .expect("delete request failed");
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        (body, status)
    }

    /// Create an employee and return its id (looked up by name, so use a
    /// name unique within the test).
    pub async fn create_funcionario(&self, nome: &str, cargo: &str) -> i64 {
        let (body, status) = self
            .post_json(
                "/funcionarios",
                &json!({
                    "nome": nome,
                    "cargo": cargo,
                    "email": "teste@exemplo.com",
                    "data_contratacao": "2024-01-15",
                }),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "create funcionario failed: {body}");

        let (lista, _) = self.get_json("/funcionarios").await;
        lista
            .as_array()
            .unwrap()
            .iter()
            .find(|f| f["nome"] == nome)
            .expect("created funcionario not listed")["id"]
            .as_i64()
            .unwrap()
    }

    /// Create a project and return its id.
    pub async fn create_projeto(&self, nome: &str, descricao: &str) -> i64 {
        let (body, status) = self
            .post_json(
                "/projetos",
                &json!({
                    "nome": nome,
                    "descricao": descricao,
                    "data_inicio": "2024-02-01",
                    "data_fim": null,
                }),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "create projeto failed: {body}");

        let (lista, _) = self.get_json("/projetos").await;
        lista
            .as_array()
            .unwrap()
            .iter()
            .find(|p| p["nome"] == nome)
            .expect("created projeto not listed")["id"]
            .as_i64()
            .unwrap()
    }

    /// Assign an employee to a project, return (body, status).
    pub async fn atribuir(&self, id_f: i64, id_p: i64) -> (String, StatusCode) {
        self.post_json(
            "/atribuir-funcionario",
            &json!({ "funcionarios_id": id_f, "projetos_id": id_p }),
        )
        .await
    }
}

/// Spawn a test app with a fresh temporary database.
pub async fn spawn_app() -> TestApp {
    let _ = dotenvy::dotenv();

    let base_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for tests");

    // Create a unique test database
    let db_name = format!("equipe_test_{}", Uuid::now_v7().to_string().replace('-', ""));

    // Connect to default postgres DB to create test DB
    let admin_url = base_url
        .rsplit_once('/')
        .map(|(base, _)| format!("{base}/postgres"))
        .unwrap_or_else(|| base_url.clone());

    let admin_pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&admin_url)
        .await
        .expect("Failed to connect to postgres for test DB creation");

    sqlx::query(&format!("CREATE DATABASE \"{db_name}\""))
        .execute(&admin_pool)
        .await
        .expect("Failed to create test database");

    admin_pool.close().await;

    // Connect to test DB and run migrations
    let test_url = base_url
        .rsplit_once('/')
        .map(|(base, _)| format!("{base}/{db_name}"))
        .unwrap_or_else(|| base_url.clone());

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&test_url)
        .await
        .expect("Failed to connect to test database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations on test database");

    let config = Config {
        database_url: test_url,
        host: "127.0.0.1".parse().unwrap(),
        port: 0, // unused, we bind to random port
        max_body_size: 1_048_576,
        log_level: "warn".to_string(),
    };

    let app = equipe::build_app(pool.clone(), config);

    // Bind to random port
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to random port");
    let addr = listener.local_addr().unwrap();

    // Spawn server in background
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server failed");
    });

    let client = Client::new();

    TestApp {
        addr,
        pool,
        client,
        db_name,
    }
}

/// Drop the test database after tests complete.
pub async fn cleanup(app: TestApp) {
    let db_name = app.db_name.clone();
    app.pool.close().await;

    let base_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for tests");
    let admin_url = base_url
        .rsplit_once('/')
        .map(|(base, _)| format!("{base}/postgres"))
        .unwrap_or_else(|| base_url.clone());

    let admin_pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&admin_url)
        .await
        .expect("Failed to connect for cleanup");

    let _ = sqlx::query(&format!("DROP DATABASE IF EXISTS \"{db_name}\" WITH (FORCE)"))
        .execute(&admin_pool)
        .await;

    admin_pool.close().await;
}

use chrono::NaiveDate;
use sqlx::PgPool;

use crate::models::Funcionario;

pub async fn list(pool: &PgPool) -> Result<Vec<Funcionario>, sqlx::Error> {
    sqlx::query_as::<_, Funcionario>("SELECT * FROM funcionarios ORDER BY id")
        .fetch_all(pool)
        .await
}

pub async fn create(
    pool: &PgPool,
    nome: &str,
    cargo: &str,
    email: &str,
    data_contratacao: NaiveDate,
) -> Result<Funcionario, sqlx::Error> {
    sqlx::query_as::<_, Funcionario>(
        "INSERT INTO funcionarios (nome, cargo, email, data_contratacao)
         VALUES ($1, $2, $3, $4) RETURNING *",
    )
    .bind(nome)
    .bind(cargo)
    .bind(email)
    .bind(data_contratacao)
    .fetch_one(pool)
    .await
}

pub async fn find_by_id(pool: &PgPool, id: i32) -> Result<Option<Funcionario>, sqlx::Error> {
    sqlx::query_as::<_, Funcionario>("SELECT * FROM funcionarios WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn update(
    pool: &PgPool,
    id: i32,
    nome: &str,
    cargo: &str,
    email: &str,
    data_contratacao: NaiveDate,
) -> Result<Funcionario, sqlx::Error> {
    sqlx::query_as::<_, Funcionario>(
        "UPDATE funcionarios SET nome = $2, cargo = $3, email = $4, data_contratacao = $5
         WHERE id = $1 RETURNING *",
    )
    .bind(id)
    .bind(nome)
    .bind(cargo)
    .bind(email)
    .bind(data_contratacao)
    .fetch_one(pool)
    .await
}

/// Runs inside the cascade-delete transaction, after the assignment rows
/// referencing the employee are gone. Returns the number of rows removed.
pub async fn delete<'e, E: sqlx::PgExecutor<'e>>(executor: E, id: i32) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM funcionarios WHERE id = $1")
        .bind(id)
        .execute(executor)
        .await?;
    Ok(result.rows_affected())
}

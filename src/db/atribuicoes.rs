use sqlx::PgPool;

use crate::models::Atribuicao;

pub async fn list(pool: &PgPool) -> Result<Vec<Atribuicao>, sqlx::Error> {
    sqlx::query_as::<_, Atribuicao>(
        "SELECT * FROM funcionario_projeto ORDER BY funcionarios_id, projetos_id",
    )
    .fetch_all(pool)
    .await
}

/// Plain insert; the composite primary key rejects duplicate pairs and the
/// foreign keys reject unknown ids. Callers map those violations.
pub async fn create(
    pool: &PgPool,
    funcionarios_id: i32,
    projetos_id: i32,
) -> Result<(), sqlx::Error> {
    sqlx::query("INSERT INTO funcionario_projeto (funcionarios_id, projetos_id) VALUES ($1, $2)")
        .bind(funcionarios_id)
        .bind(projetos_id)
        .execute(pool)
        .await?;
    Ok(())
}

/// Returns the number of rows removed; zero means the pair was not assigned.
pub async fn delete(
    pool: &PgPool,
    funcionarios_id: i32,
    projetos_id: i32,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        "DELETE FROM funcionario_projeto WHERE funcionarios_id = $1 AND projetos_id = $2",
    )
    .bind(funcionarios_id)
    .bind(projetos_id)
    .execute(pool)
    .await?;
    Ok(result.rows_affected())
}

pub async fn delete_by_funcionario<'e, E: sqlx::PgExecutor<'e>>(
    executor: E,
    funcionarios_id: i32,
) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM funcionario_projeto WHERE funcionarios_id = $1")
        .bind(funcionarios_id)
        .execute(executor)
        .await?;
    Ok(())
}

pub async fn delete_by_projeto<'e, E: sqlx::PgExecutor<'e>>(
    executor: E,
    projetos_id: i32,
) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM funcionario_projeto WHERE projetos_id = $1")
        .bind(projetos_id)
        .execute(executor)
        .await?;
    Ok(())
}

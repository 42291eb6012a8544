use chrono::NaiveDate;
use sqlx::PgPool;

use crate::models::{FuncionarioResumo, Projeto, ProjetoComFuncionarios};

pub async fn list(pool: &PgPool) -> Result<Vec<Projeto>, sqlx::Error> {
    sqlx::query_as::<_, Projeto>("SELECT * FROM projetos ORDER BY id")
        .fetch_all(pool)
        .await
}

pub async fn create(
    pool: &PgPool,
    nome: &str,
    descricao: &str,
    data_inicio: NaiveDate,
    data_fim: Option<NaiveDate>,
) -> Result<Projeto, sqlx::Error> {
    sqlx::query_as::<_, Projeto>(
        "INSERT INTO projetos (nome, descricao, data_inicio, data_fim)
         VALUES ($1, $2, $3, $4) RETURNING *",
    )
    .bind(nome)
    .bind(descricao)
    .bind(data_inicio)
    .bind(data_fim)
    .fetch_one(pool)
    .await
}

pub async fn find_by_id(pool: &PgPool, id: i32) -> Result<Option<Projeto>, sqlx::Error> {
    sqlx::query_as::<_, Projeto>("SELECT * FROM projetos WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn update(
    pool: &PgPool,
    id: i32,
    nome: &str,
    descricao: &str,
    data_inicio: NaiveDate,
    data_fim: Option<NaiveDate>,
) -> Result<Projeto, sqlx::Error> {
    sqlx::query_as::<_, Projeto>(
        "UPDATE projetos SET nome = $2, descricao = $3, data_inicio = $4, data_fim = $5
         WHERE id = $1 RETURNING *",
    )
    .bind(id)
    .bind(nome)
    .bind(descricao)
    .bind(data_inicio)
    .bind(data_fim)
    .fetch_one(pool)
    .await
}

/// Runs inside the cascade-delete transaction, after the assignment rows
/// referencing the project are gone. Returns the number of rows removed.
pub async fn delete<'e, E: sqlx::PgExecutor<'e>>(executor: E, id: i32) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM projetos WHERE id = $1")
        .bind(id)
        .execute(executor)
        .await?;
    Ok(result.rows_affected())
}

#[derive(sqlx::FromRow)]
struct ProjetoFuncionarioRow {
    projeto_id: i32,
    projeto_nome: String,
    funcionario_id: Option<i32>,
    funcionario_nome: Option<String>,
}

/// Aggregate view: every project with its assigned employees. Projects with
/// no assignments appear with an empty list; grouping keeps the order in
/// which projects first show up in the joined result set.
pub async fn list_with_funcionarios(
    pool: &PgPool,
) -> Result<Vec<ProjetoComFuncionarios>, sqlx::Error> {
    let rows = sqlx::query_as::<_, ProjetoFuncionarioRow>(
        "SELECT
             p.id AS projeto_id,
             p.nome AS projeto_nome,
             f.id AS funcionario_id,
             f.nome AS funcionario_nome
         FROM projetos p
         LEFT JOIN funcionario_projeto fp ON p.id = fp.projetos_id
         LEFT JOIN funcionarios f ON fp.funcionarios_id = f.id
         ORDER BY p.id, f.id",
    )
    .fetch_all(pool)
    .await?;

    Ok(group_by_projeto(rows))
}

fn group_by_projeto(rows: Vec<ProjetoFuncionarioRow>) -> Vec<ProjetoComFuncionarios> {
    let mut projetos: Vec<ProjetoComFuncionarios> = Vec::new();
    let mut index: std::collections::HashMap<i32, usize> = std::collections::HashMap::new();

    for row in rows {
        let pos = *index.entry(row.projeto_id).or_insert_with(|| {
            projetos.push(ProjetoComFuncionarios {
                projeto_id: row.projeto_id,
                projeto_nome: row.projeto_nome.clone(),
                funcionarios: Vec::new(),
            });
            projetos.len() - 1
        });

        // LEFT JOIN leaves both columns NULL for projects with no assignments.
        if let (Some(funcionario_id), Some(funcionario_nome)) =
            (row.funcionario_id, row.funcionario_nome)
        {
            projetos[pos].funcionarios.push(FuncionarioResumo {
                funcionario_id,
                funcionario_nome,
            });
        }
    }

    projetos
}

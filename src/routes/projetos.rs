use axum::extract::{Path, State};
use axum::Json;
use chrono::NaiveDate;
use serde::Deserialize;

use crate::db;
use crate::error::AppError;
use crate::models::{Projeto, ProjetoComFuncionarios};
use crate::state::SharedState;

#[derive(Deserialize)]
pub struct CreateProjeto {
    pub nome: String,
    pub descricao: String,
    pub data_inicio: NaiveDate,
    pub data_fim: Option<NaiveDate>,
}

#[derive(Deserialize)]
pub struct UpdateProjeto {
    pub nome: String,
    pub descricao: String,
    pub data_inicio: NaiveDate,
    pub data_fim: Option<NaiveDate>,
}

pub async fn list(State(state): State<SharedState>) -> Result<Json<Vec<Projeto>>, AppError> {
    let projetos = db::projetos::list(&state.pool).await?;
    Ok(Json(projetos))
}

pub async fn create(
    State(state): State<SharedState>,
    Json(req): Json<CreateProjeto>,
) -> Result<String, AppError> {
    validate_nome(&req.nome)?;
    validate_descricao(&req.descricao)?;

    db::projetos::create(
        &state.pool,
        &req.nome,
        &req.descricao,
        req.data_inicio,
        req.data_fim,
    )
    .await?;

    Ok("Projeto adicionado com sucesso.".to_string())
}

pub async fn get(
    State(state): State<SharedState>,
    Path(id): Path<i32>,
) -> Result<Json<Projeto>, AppError> {
    let projeto = db::projetos::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Projeto não encontrado.".to_string()))?;
    Ok(Json(projeto))
}

pub async fn update(
    State(state): State<SharedState>,
    Path(id): Path<i32>,
    Json(req): Json<UpdateProjeto>,
) -> Result<String, AppError> {
    validate_nome(&req.nome)?;
    validate_descricao(&req.descricao)?;

    db::projetos::update(
        &state.pool,
        id,
        &req.nome,
        &req.descricao,
        req.data_inicio,
        req.data_fim,
    )
    .await
    .map_err(|e| match e {
        sqlx::Error::RowNotFound => AppError::NotFound("Projeto não encontrado.".to_string()),
        _ => AppError::Database(e),
    })?;

    Ok("Projeto atualizado com sucesso.".to_string())
}

/// Cascade delete: assignment rows referencing the project and the project
/// row itself go in one transaction, so neither persists without the other.
pub async fn delete(
    State(state): State<SharedState>,
    Path(id): Path<i32>,
) -> Result<String, AppError> {
    let mut tx = state.pool.begin().await?;

    db::atribuicoes::delete_by_projeto(&mut *tx, id).await?;

    let removed = db::projetos::delete(&mut *tx, id).await?;
    if removed == 0 {
        return Err(AppError::NotFound("Projeto não encontrado.".to_string()));
    }

    tx.commit().await?;

    Ok("Projeto excluído com sucesso.".to_string())
}

pub async fn list_with_funcionarios(
    State(state): State<SharedState>,
) -> Result<Json<Vec<ProjetoComFuncionarios>>, AppError> {
    let projetos = db::projetos::list_with_funcionarios(&state.pool).await?;
    Ok(Json(projetos))
}

// Lengths are counted in characters, not bytes, so accented names validate
// the way users see them.
fn validate_nome(nome: &str) -> Result<(), AppError> {
    let len = nome.chars().count();
    if !(5..=45).contains(&len) {
        return Err(AppError::BadRequest(
            "O campo 'nome' é obrigatório e deve ter entre 5 e 45 caracteres.".to_string(),
        ));
    }
    Ok(())
}

fn validate_descricao(descricao: &str) -> Result<(), AppError> {
    let len = descricao.chars().count();
    if !(10..=100).contains(&len) {
        return Err(AppError::BadRequest(
            "O campo 'descrição' é obrigatório e deve ter entre 10 e 100 caracteres.".to_string(),
        ));
    }
    Ok(())
}

use axum::extract::{Path, State};
use axum::Json;
use chrono::NaiveDate;
use serde::Deserialize;

use crate::db;
use crate::error::AppError;
use crate::models::Funcionario;
use crate::state::SharedState;

#[derive(Deserialize)]
pub struct CreateFuncionario {
    pub nome: String,
    pub cargo: String,
    pub email: String,
    pub data_contratacao: NaiveDate,
}

#[derive(Deserialize)]
pub struct UpdateFuncionario {
    pub nome: String,
    pub cargo: String,
    pub email: String,
    pub data_contratacao: NaiveDate,
}

pub async fn list(State(state): State<SharedState>) -> Result<Json<Vec<Funcionario>>, AppError> {
    let funcionarios = db::funcionarios::list(&state.pool).await?;
    Ok(Json(funcionarios))
}

pub async fn create(
    State(state): State<SharedState>,
    Json(req): Json<CreateFuncionario>,
) -> Result<String, AppError> {
    db::funcionarios::create(
        &state.pool,
        &req.nome,
        &req.cargo,
        &req.email,
        req.data_contratacao,
    )
    .await?;

    Ok("Funcionário adicionado com sucesso.".to_string())
}

pub async fn get(
    State(state): State<SharedState>,
    Path(id): Path<i32>,
) -> Result<Json<Funcionario>, AppError> {
    let funcionario = db::funcionarios::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Funcionário não encontrado.".to_string()))?;
    Ok(Json(funcionario))
}

pub async fn update(
    State(state): State<SharedState>,
    Path(id): Path<i32>,
    Json(req): Json<UpdateFuncionario>,
) -> Result<String, AppError> {
    db::funcionarios::update(
        &state.pool,
        id,
        &req.nome,
        &req.cargo,
        &req.email,
        req.data_contratacao,
    )
    .await
    .map_err(|e| match e {
        sqlx::Error::RowNotFound => {
            AppError::NotFound("Funcionário não encontrado.".to_string())
        }
        _ => AppError::Database(e),
    })?;

    Ok("Funcionário atualizado com sucesso.".to_string())
}

/// Cascade delete: assignment rows referencing the employee and the employee
/// row itself go in one transaction, so neither persists without the other.
pub async fn delete(
    State(state): State<SharedState>,
    Path(id): Path<i32>,
) -> Result<String, AppError> {
    let mut tx = state.pool.begin().await?;

    db::atribuicoes::delete_by_funcionario(&mut *tx, id).await?;

    let removed = db::funcionarios::delete(&mut *tx, id).await?;
    if removed == 0 {
        // Dropping the transaction rolls the cascade back.
        return Err(AppError::NotFound("Funcionário não encontrado.".to_string()));
    }

    tx.commit().await?;

    Ok("Funcionário excluído com sucesso.".to_string())
}

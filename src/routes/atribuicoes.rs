use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;

use crate::db;
use crate::error::AppError;
use crate::models::Atribuicao;
use crate::state::SharedState;

#[derive(Deserialize)]
pub struct CreateAtribuicao {
    pub funcionarios_id: i32,
    pub projetos_id: i32,
}

pub async fn list(State(state): State<SharedState>) -> Result<Json<Vec<Atribuicao>>, AppError> {
    let atribuicoes = db::atribuicoes::list(&state.pool).await?;
    Ok(Json(atribuicoes))
}

/// Duplicate pairs are rejected by the join table's composite primary key,
/// so two concurrent identical requests cannot both insert.
pub async fn create(
    State(state): State<SharedState>,
    Json(req): Json<CreateAtribuicao>,
) -> Result<String, AppError> {
    db::atribuicoes::create(&state.pool, req.funcionarios_id, req.projetos_id)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
                AppError::Conflict("Funcionário já está atribuído a este projeto.".to_string())
            }
            sqlx::Error::Database(ref db_err) if db_err.is_foreign_key_violation() => {
                AppError::BadRequest("Funcionário ou projeto inexistente.".to_string())
            }
            _ => AppError::Database(e),
        })?;

    Ok("Funcionário atribuído ao projeto com sucesso.".to_string())
}

pub async fn delete(
    State(state): State<SharedState>,
    Path((id_f, id_p)): Path<(i32, i32)>,
) -> Result<String, AppError> {
    let removed = db::atribuicoes::delete(&state.pool, id_f, id_p).await?;
    if removed == 0 {
        return Err(AppError::Conflict(
            "Funcionário não está atribuído a este projeto.".to_string(),
        ));
    }

    Ok("Funcionário destituído do projeto.".to_string())
}

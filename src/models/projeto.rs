use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct Projeto {
    pub id: i32,
    pub nome: String,
    pub descricao: String,
    pub data_inicio: NaiveDate,
    /// `None` for projects still in progress.
    pub data_fim: Option<NaiveDate>,
}

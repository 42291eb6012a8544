use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct Funcionario {
    pub id: i32,
    pub nome: String,
    pub cargo: String,
    pub email: String,
    pub data_contratacao: NaiveDate,
}

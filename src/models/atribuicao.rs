use serde::{Deserialize, Serialize};

/// A row of the `funcionario_projeto` join table.
#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct Atribuicao {
    pub funcionarios_id: i32,
    pub projetos_id: i32,
}

/// One entry of the aggregate view: a project with the employees assigned
/// to it, in the order the join returned them.
#[derive(Debug, Clone, Serialize)]
pub struct ProjetoComFuncionarios {
    pub projeto_id: i32,
    pub projeto_nome: String,
    pub funcionarios: Vec<FuncionarioResumo>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FuncionarioResumo {
    pub funcionario_id: i32,
    pub funcionario_nome: String,
}

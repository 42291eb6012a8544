pub mod atribuicoes;
pub mod funcionarios;
pub mod projetos;

use axum::routing::{delete, get};
use axum::Router;

use crate::state::SharedState;

pub fn api_routes() -> Router<SharedState> {
    Router::new()
        // Funcionários
        .route(
            "/funcionarios",
            get(funcionarios::list).post(funcionarios::create),
        )
        .route(
            "/funcionarios/{id}",
            get(funcionarios::get)
                .put(funcionarios::update)
                .delete(funcionarios::delete),
        )
        // Projetos
        .route("/projetos", get(projetos::list).post(projetos::create))
        .route(
            "/projetos/{id}",
            get(projetos::get)
                .put(projetos::update)
                .delete(projetos::delete),
        )
        // Atribuições
        .route(
            "/atribuir-funcionario",
            get(atribuicoes::list).post(atribuicoes::create),
        )
        .route(
            "/atribuir-funcionario/{id_f}/{id_p}",
            delete(atribuicoes::delete),
        )
        // Aggregate view
        .route(
            "/projetos-com-funcionarios",
            get(projetos::list_with_funcionarios),
        )
}

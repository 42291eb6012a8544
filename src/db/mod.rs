pub mod atribuicoes;
pub mod funcionarios;
pub mod projetos;

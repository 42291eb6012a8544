pub mod atribuicao;
pub mod funcionario;
pub mod projeto;

pub use atribuicao::{Atribuicao, FuncionarioResumo, ProjetoComFuncionarios};
pub use funcionario::Funcionario;
pub use projeto::Projeto;

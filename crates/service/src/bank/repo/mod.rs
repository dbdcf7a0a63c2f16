pub mod seaorm;

pub use seaorm::SeaOrmBankRepository;

use common::ConfigError;
use sea_orm::DbErr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ManageError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to initialize logging: {0}")]
    Logger(#[from] fern::InitError),

    #[error("database error: {0}")]
    Db(#[from] DbErr),

    #[error("failed to encode report: {0}")]
    Json(#[from] serde_json::Error),
}

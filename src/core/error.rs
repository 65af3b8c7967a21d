//! Error types for Aerocode operations
//!
//! Every menu operation returns [`Result`]. The shell prints the error and
//! keeps running; nothing here is fatal to the process.

use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

use crate::entities::{PermissionLevel, StageStatus};

/// Errors raised by domain operations and persistence
#[derive(Debug, Error, Diagnostic)]
pub enum AerocodeError {
    #[error("Já existe {kind} com {field} '{key}'")]
    #[diagnostic(code(aerocode::duplicate_identity))]
    DuplicateIdentity {
        kind: &'static str,
        field: &'static str,
        key: String,
    },

    #[error("Não encontrado: {kind} '{key}'")]
    #[diagnostic(code(aerocode::not_found))]
    NotFound { kind: &'static str, key: String },

    #[error("Transição inválida na etapa '{stage}': {from} → {to}")]
    #[diagnostic(
        code(aerocode::invalid_transition),
        help("Etapas seguem PENDENTE → ANDAMENTO → CONCLUIDA, sem pular estados")
    )]
    InvalidTransition {
        stage: String,
        from: StageStatus,
        to: StageStatus,
    },

    #[error(
        "Não é possível iniciar '{stage}': há etapas anteriores não concluídas ({})",
        .pending.join(", ")
    )]
    #[diagnostic(code(aerocode::preceding_stage_incomplete))]
    PrecedingStageIncomplete { stage: String, pending: Vec<String> },

    #[error("Ação restrita: faça login primeiro")]
    #[diagnostic(code(aerocode::unauthenticated), help("Use a opção 1 do menu para entrar"))]
    Unauthenticated,

    #[error(
        "Permissão insuficiente: nível {level} não autorizado (requer {})",
        .allowed.iter().map(ToString::to_string).collect::<Vec<_>>().join(" ou ")
    )]
    #[diagnostic(code(aerocode::insufficient_permission))]
    InsufficientPermission {
        level: PermissionLevel,
        allowed: Vec<PermissionLevel>,
    },

    #[error("Usuário/Senha inválidos")]
    #[diagnostic(code(aerocode::invalid_credentials))]
    InvalidCredentials,

    #[error("Entrada inválida: {message}")]
    #[diagnostic(code(aerocode::invalid_input))]
    InvalidInput { message: String },

    #[error("Falha ao gravar {path}: {source}")]
    #[diagnostic(code(aerocode::storage))]
    Storage {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Falha ao serializar {path}: {source}")]
    #[diagnostic(code(aerocode::serialize))]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Entrada encerrada")]
    #[diagnostic(code(aerocode::input_closed))]
    InputClosed,

    #[error("Erro de E/S: {0}")]
    #[diagnostic(code(aerocode::io))]
    Io(#[from] std::io::Error),
}

/// A specialized Result type for Aerocode operations
pub type Result<T> = std::result::Result<T, AerocodeError>;

impl AerocodeError {
    pub fn not_found(kind: &'static str, key: impl Into<String>) -> Self {
        Self::NotFound {
            kind,
            key: key.into(),
        }
    }

    pub fn duplicate(kind: &'static str, field: &'static str, key: impl Into<String>) -> Self {
        Self::DuplicateIdentity {
            kind,
            field,
            key: key.into(),
        }
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Check if input ended, which closes the session rather than failing it
    pub fn is_input_closed(&self) -> bool {
        match self {
            Self::InputClosed => true,
            Self::Io(err) => err.kind() == std::io::ErrorKind::UnexpectedEof,
            _ => false,
        }
    }
}

use std::time::Duration;

/// Erros de validação do workload de stress.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum WorkloadError {
    #[error("número de iterações deve ser maior que zero")]
    ZeroIterations,
    #[error("ttl curto ({short:?}) maior que o ttl longo ({long:?})")]
    TtlOrder { short: Duration, long: Duration },
}

/// Result type alias.
pub type WorkloadResult<T> = Result<T, WorkloadError>;

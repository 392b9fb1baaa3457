#![forbid(unsafe_code)]

mod error;

use std::time::Duration;

pub use error::*;

/// Operações totais do stress padrão.
pub const DEFAULT_ITERATIONS: u64 = 15_000_000;
/// TTL longo o bastante para não vencer durante uma execução.
pub const LONG_TTL: Duration = Duration::from_secs(60);
/// TTL curto usado na chave que expira.
pub const SHORT_TTL: Duration = Duration::from_secs(1);
/// Pausa antes de encerrar o processo (ms), para profilers fecharem a coleta.
pub const DEFAULT_SETTLE_MS: u64 = 1_000;
pub const BENCH_RANDOM_KEYSPACE: i32 = 1_000;

use clap::{Parser, Subcommand};
use tokio::time::Duration;
use tracing::info;

use chronocache_cli::{Workload, demo_scenario};
use chronocache_common::{DEFAULT_ITERATIONS, DEFAULT_SETTLE_MS, LONG_TTL, SHORT_TTL};
use chronocache_storage::ManualClock;

#[derive(Parser, Debug)]
#[command(name = "chronocache", about = "ChronoCache: TTL map stress driver and demo")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Executa o stress de put/get (mesma carga usada em profiling de memória)
    Stress {
        #[arg(long, default_value_t = DEFAULT_ITERATIONS)]
        iterations: u64,
        #[arg(long, default_value_t = LONG_TTL.as_secs())]
        long_ttl_secs: u64,
        #[arg(long, default_value_t = SHORT_TTL.as_secs())]
        short_ttl_secs: u64,
        /// Dica de pré-alocação (0 = sem pré-alocação)
        #[arg(long, default_value_t = 0)]
        capacity_hint: usize,
        /// Pausa antes de sair, em ms
        #[arg(long, default_value_t = DEFAULT_SETTLE_MS)]
        settle_ms: u64,
    },
    /// Roda o cenário de expiração com relógio simulado
    Demo,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "chronocache_cli=info".into()),
        )
        .init();

    let args = Args::parse();

    match args.command {
        Command::Stress {
            iterations,
            long_ttl_secs,
            short_ttl_secs,
            capacity_hint,
            settle_ms,
        } => {
            let workload = Workload {
                iterations,
                long_ttl: Duration::from_secs(long_ttl_secs),
                short_ttl: Duration::from_secs(short_ttl_secs),
                capacity_hint,
            };

            let report = workload.run()?;
            println!(
                "hits={} misses={} reinserts={} live={} stored={} elapsed={:?}",
                report.hits,
                report.misses,
                report.reinserts,
                report.live_at_end,
                report.stored_at_end,
                report.elapsed
            );

            if settle_ms > 0 {
                info!("aguardando {settle_ms}ms antes de sair");
                tokio::time::sleep(Duration::from_millis(settle_ms)).await;
            }
        }
        Command::Demo => {
            let outcome = demo_scenario(ManualClock::new());
            println!("{outcome:#?}");
        }
    }

    Ok(())
}

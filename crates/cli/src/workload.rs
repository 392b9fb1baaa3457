use std::hint::black_box;
use std::time::Duration;

use tokio::time::Instant;
use tracing::{debug, info};

use chronocache_common::{DEFAULT_ITERATIONS, LONG_TTL, SHORT_TTL, WorkloadError, WorkloadResult};
use chronocache_storage::{Clock, MonotonicClock, TtlMap};

/// Chave nunca inserida: cobre o caminho de miss frio.
pub const COLD_MISS_KEY: u64 = 0;
/// Chave com ttl longo: sempre hit.
pub const HIT_KEY: u64 = 1;
/// Chave com ttl curto, reinserida a cada quatro operações.
pub const EXPIRING_KEY: u64 = 2;
const FIRST_BULK_KEY: u64 = 3;

/// Workload de stress sobre um `TtlMap<u64, u64>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workload {
    pub iterations: u64,
    pub long_ttl: Duration,
    pub short_ttl: Duration,
    pub capacity_hint: usize,
}

impl Default for Workload {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
            long_ttl: LONG_TTL,
            short_ttl: SHORT_TTL,
            capacity_hint: 0,
        }
    }
}

/// Contadores de uma execução.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StressReport {
    pub bulk_inserts: u64,
    pub hits: u64,
    pub misses: u64,
    pub reinserts: u64,
    pub live_at_end: usize,
    pub stored_at_end: usize,
    pub elapsed: Duration,
}

impl Workload {
    pub fn validate(&self) -> WorkloadResult<()> {
        if self.iterations == 0 {
            return Err(WorkloadError::ZeroIterations);
        }
        if self.short_ttl > self.long_ttl {
            return Err(WorkloadError::TtlOrder {
                short: self.short_ttl,
                long: self.long_ttl,
            });
        }
        Ok(())
    }

    pub fn run(&self) -> WorkloadResult<StressReport> {
        self.run_with_clock(MonotonicClock)
    }

    pub fn run_with_clock<C: Clock>(&self, clock: C) -> WorkloadResult<StressReport> {
        self.validate()?;
        let started = Instant::now();

        let mut map = TtlMap::with_capacity_and_clock(self.capacity_hint, clock);
        map.put(HIT_KEY, 0, self.long_ttl);
        map.put(EXPIRING_KEY, 1, self.short_ttl);

        let mut bulk_inserts = 0;
        for key in FIRST_BULK_KEY..self.iterations {
            map.put(key, key + 42, self.long_ttl);
            bulk_inserts += 1;
        }
        debug!(bulk_inserts, stored = map.stored_len(), "carga inicial concluída");

        let mut hits = 0;
        let mut misses = 0;
        let mut reinserts = 0;

        for i in 0..self.iterations {
            let key = match i & 3 {
                0 => COLD_MISS_KEY,
                1 => HIT_KEY,
                2 => EXPIRING_KEY,
                _ => {
                    map.put(EXPIRING_KEY, 1, self.short_ttl);
                    reinserts += 1;
                    continue;
                }
            };

            match black_box(map.get(&key)) {
                Some(_) => hits += 1,
                None => misses += 1,
            }
        }

        let report = StressReport {
            bulk_inserts,
            hits,
            misses,
            reinserts,
            live_at_end: map.size(),
            stored_at_end: map.stored_len(),
            elapsed: started.elapsed(),
        };

        info!(
            iterations = self.iterations,
            hits = report.hits,
            misses = report.misses,
            reinserts = report.reinserts,
            live = report.live_at_end,
            stored = report.stored_at_end,
            elapsed_ms = report.elapsed.as_millis() as u64,
            "stress concluído"
        );

        Ok(report)
    }
}

use std::time::Duration;

use tracing::info;

use chronocache_storage::{ManualClock, TtlMap};

/// Observações do cenário de demonstração.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoOutcome {
    /// `get("a")` em T=0.5s.
    pub before_expiry: Option<i32>,
    /// `get("a")` em T=1.5s.
    pub after_expiry: Option<i32>,
    /// `size()` em T=1.5s.
    pub size_after_expiry: usize,
    /// `size()` logo após inserir duas chaves vivas e uma com ttl zero.
    pub size_with_pre_expired: usize,
}

/// Roda o cenário com um relógio manual, sem dormir de verdade.
pub fn demo_scenario(clock: ManualClock) -> DemoOutcome {
    let mut tokens: TtlMap<&str, i32, _> = TtlMap::with_clock(clock.clone());
    tokens.put("a", 1, Duration::from_secs(1));

    clock.advance(Duration::from_millis(500));
    let before_expiry = tokens.get("a").copied();
    info!(?before_expiry, "T=0.5s");

    clock.advance(Duration::from_secs(1));
    let after_expiry = tokens.get("a").copied();
    let size_after_expiry = tokens.size();
    info!(?after_expiry, size = size_after_expiry, "T=1.5s");

    let mut names: TtlMap<i32, &str, _> = TtlMap::with_clock(clock);
    names.put(1, "x", Duration::from_secs(5));
    names.put(2, "y", Duration::from_secs(5));
    names.put(3, "z", Duration::ZERO);
    let size_with_pre_expired = names.size();
    info!(size = size_with_pre_expired, "chave 3 nasce expirada");

    DemoOutcome {
        before_expiry,
        after_expiry,
        size_after_expiry,
        size_with_pre_expired,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_matches_expected_timeline() {
        let outcome = demo_scenario(ManualClock::new());
        assert_eq!(
            outcome,
            DemoOutcome {
                before_expiry: Some(1),
                after_expiry: None,
                size_after_expiry: 0,
                size_with_pre_expired: 2,
            }
        );
    }
}

use tokio::time::{Duration, Instant};

/// Entrada no map: valor + instante de expiração.
///
/// `expires_at == None` só acontece quando `now + ttl` estoura o alcance do
/// relógio; na prática a entrada nunca expira.
#[derive(Debug, Clone)]
pub struct Entry<V> {
    value: V,
    expires_at: Option<Instant>,
}

impl<V> Entry<V> {
    pub fn new(value: V, now: Instant, ttl: Duration) -> Self {
        Self {
            value,
            expires_at: now.checked_add(ttl),
        }
    }

    pub fn value(&self) -> &V {
        &self.value
    }

    pub fn expires_at(&self) -> Option<Instant> {
        self.expires_at
    }

    /// Viva enquanto `now < expires_at` (estrito).
    pub fn is_live_at(&self, now: Instant) -> bool {
        self.expires_at.map(|t| now < t).unwrap_or(true)
    }

    pub fn is_expired_at(&self, now: Instant) -> bool {
        !self.is_live_at(now)
    }
}

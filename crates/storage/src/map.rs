use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use tokio::time::Duration;
use tracing::{debug, trace};

use crate::clock::{Clock, MonotonicClock};
use crate::entry::Entry;

/// Map in-memory onde cada valor carrega um prazo de expiração.
///
/// A expiração é preguiçosa: `get` remove a entrada vencida que encontrar,
/// `size` apenas conta as vivas sem remover nada. Não existe task de purga.
///
/// Não é sincronizado; para uso entre threads, envolva em um lock externo.
pub struct TtlMap<K, V, C = MonotonicClock> {
    entries: HashMap<K, Entry<V>>,
    clock: C,
}

impl<K, V> TtlMap<K, V, MonotonicClock> {
    pub fn new() -> Self {
        Self::with_clock(MonotonicClock)
    }

    /// `capacity` é só uma dica de pré-alocação, não um limite.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_clock(capacity, MonotonicClock)
    }
}

impl<K, V, C> TtlMap<K, V, C> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            entries: HashMap::new(),
            clock,
        }
    }

    pub fn with_capacity_and_clock(capacity: usize, clock: C) -> Self {
        if capacity > 0 {
            debug!(capacity, "pré-alocando ttl map");
        }
        Self {
            entries: HashMap::with_capacity(capacity),
            clock,
        }
    }

    /// Entradas fisicamente armazenadas, vivas ou vencidas.
    pub fn stored_len(&self) -> usize {
        self.entries.len()
    }

    pub fn capacity(&self) -> usize {
        self.entries.capacity()
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }
}

impl<K, V, C> TtlMap<K, V, C>
where
    K: Eq + Hash,
    C: Clock,
{
    /// Upsert: sobrescreve valor e prazo anteriores da chave.
    ///
    /// `ttl` zero gera uma entrada já expirada.
    pub fn put(&mut self, key: K, value: V, ttl: Duration) {
        let now = self.clock.now();
        self.entries.insert(key, Entry::new(value, now, ttl));
    }

    /// Retorna o valor se a entrada ainda estiver viva.
    ///
    /// Uma entrada vencida é removida como efeito colateral e `None` é retornado;
    /// chave ausente e chave vencida são indistinguíveis para o chamador.
    pub fn get<Q>(&mut self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let now = self.clock.now();

        if self
            .entries
            .get(key)
            .is_some_and(|entry| entry.is_expired_at(now))
        {
            self.entries.remove(key);
            trace!(stored = self.entries.len(), "entrada expirada removida no get");
            return None;
        }

        self.entries.get(key).map(Entry::value)
    }

    /// Conta as entradas vivas agora. Não remove as vencidas.
    pub fn size(&self) -> usize {
        let now = self.clock.now();
        self.entries
            .values()
            .filter(|entry| entry.is_live_at(now))
            .count()
    }
}

impl<K, V, C: Default> Default for TtlMap<K, V, C> {
    fn default() -> Self {
        Self::with_clock(C::default())
    }
}

impl<K, V, C> fmt::Debug for TtlMap<K, V, C>
where
    K: fmt::Debug,
    V: fmt::Debug,
    C: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TtlMap")
            .field("entries", &self.entries)
            .field("clock", &self.clock)
            .finish()
    }
}

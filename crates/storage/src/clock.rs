use std::cell::Cell;
use std::rc::Rc;

use tokio::time::{Duration, Instant};

/// Fonte de tempo monotônica consumida pelo [`TtlMap`](crate::TtlMap).
///
/// Implementações nunca devem retornar um instante anterior a uma leitura já feita.
pub trait Clock {
    fn now(&self) -> Instant;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> Instant {
        (**self).now()
    }
}

/// Relógio padrão: lê o relógio monotônico do sistema.
///
/// Dentro de um runtime tokio com o tempo pausado (`start_paused`), segue o
/// relógio virtual do runtime.
#[derive(Debug, Clone, Copy, Default)]
pub struct MonotonicClock;

impl Clock for MonotonicClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Relógio controlado manualmente, para testes e simulações single-thread.
///
/// Clones compartilham o mesmo instante.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Rc<Cell<Instant>>,
}

impl ManualClock {
    /// Começa no instante atual do relógio monotônico.
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    pub fn starting_at(start: Instant) -> Self {
        Self {
            now: Rc::new(Cell::new(start)),
        }
    }

    /// Avança o relógio. Só anda para frente.
    pub fn advance(&self, by: Duration) {
        let current = self.now.get();
        // Avanço além do alcance do Instant é ignorado
        if let Some(next) = current.checked_add(by) {
            self.now.set(next);
        }
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.now.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_clock_advances() {
        let clock = ManualClock::new();
        let start = clock.now();
        clock.advance(Duration::from_millis(250));
        assert_eq!(clock.now() - start, Duration::from_millis(250));
    }

    #[test]
    fn manual_clock_clones_share_time() {
        let clock = ManualClock::new();
        let other = clock.clone();
        clock.advance(Duration::from_secs(3));
        assert_eq!(clock.now(), other.now());
    }

    #[test]
    fn manual_clock_ignores_overflowing_advance() {
        let clock = ManualClock::new();
        let before = clock.now();
        clock.advance(Duration::MAX);
        assert_eq!(clock.now(), before);
    }

    #[test]
    fn monotonic_clock_never_goes_back() {
        let clock = MonotonicClock;
        let a = clock.now();
        let b = clock.now();
        assert!(b >= a);
    }

    #[test]
    fn borrowed_clock_reads_through() {
        let clock = ManualClock::new();
        let borrowed = &clock;
        assert_eq!(Clock::now(&borrowed), clock.now());
    }
}

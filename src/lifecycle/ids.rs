use rand::Rng;
use std::cell::{Cell, RefCell};
use std::collections::HashSet;

use super::event::InstanceId;

/// Hands out instance identities. Implementations must never return the
/// same id twice.
pub trait IdSource {
    fn next_id(&self) -> InstanceId;
}

/// `prefix-1`, `prefix-2`, ...
#[derive(Debug)]
pub struct SequentialIds {
    prefix: String,
    next: Cell<u64>,
}

impl SequentialIds {
    pub fn new(prefix: impl Into<String>) -> Self {
        SequentialIds { prefix: prefix.into(), next: Cell::new(1) }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new("w")
    }
}

impl IdSource for SequentialIds {
    fn next_id(&self) -> InstanceId {
        let n = self.next.get();
        self.next.set(n + 1);
        InstanceId::new(format!("{}-{}", self.prefix, n))
    }
}

const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const RANDOM_ID_LEN: usize = 9;

/// Random 9-character base-36 tokens. A seen-set rejects collisions so
/// uniqueness holds for the lifetime of the source.
#[derive(Debug, Default)]
pub struct RandomIds {
    seen: RefCell<HashSet<String>>,
}

impl RandomIds {
    pub fn new() -> Self {
        Self::default()
    }

    fn token() -> String {
        let mut rng = rand::rng();
        (0..RANDOM_ID_LEN)
            .map(|_| BASE36[rng.random_range(0..BASE36.len())] as char)
            .collect()
    }
}

impl IdSource for RandomIds {
    fn next_id(&self) -> InstanceId {
        let mut seen = self.seen.borrow_mut();
        loop {
            let t = Self::token();
            if seen.insert(t.clone()) {
                return InstanceId::new(t);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequential_ids_increment() {
        let ids = SequentialIds::new("guest");
        assert_eq!(ids.next_id().as_str(), "guest-1");
        assert_eq!(ids.next_id().as_str(), "guest-2");
    }

    #[test]
    fn random_ids_are_base36_and_unique() {
        let ids = RandomIds::new();
        let mut all = HashSet::new();
        for _ in 0..500 {
            let id = ids.next_id();
            assert_eq!(id.as_str().len(), RANDOM_ID_LEN);
            assert!(id.as_str().bytes().all(|b| BASE36.contains(&b)));
            assert!(all.insert(id));
        }
    }
}

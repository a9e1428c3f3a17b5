use std::convert::Infallible;

/// A single-entry cache keyed by the tuple of inputs a value was derived from.
///
/// The value is recomputed exactly when the key differs from the cached one,
/// otherwise the previous value is handed back. `computations` counts how many
/// times the derivation actually ran.
#[derive(Debug)]
pub struct Memo<K, V> {
    label: &'static str,
    entry: Option<(K, V)>,
    computations: u64,
}

impl<K: PartialEq, V> Memo<K, V> {
    pub const fn new(label: &'static str) -> Self {
        Self {
            label,
            entry: None,
            computations: 0,
        }
    }

    /// Returns the cached value for `key`, deriving it first if needed.
    pub fn get_or_compute(&mut self, key: K, compute: impl FnOnce(&K) -> V) -> &V {
        match self.try_get_or_compute(key, |key| Ok::<_, Infallible>(compute(key))) {
            Ok(value) => value,
            Err(never) => match never {},
        }
    }

    /// Fallible variant of [`Memo::get_or_compute`].
    ///
    /// A failed derivation leaves the memo empty, so the next call retries.
    pub fn try_get_or_compute<E>(
        &mut self,
        key: K,
        compute: impl FnOnce(&K) -> Result<V, E>,
    ) -> Result<&V, E> {
        let entry = match self.entry.take() {
            Some((cached, value)) if cached == key => (cached, value),
            _ => {
                let value = compute(&key)?;
                self.computations += 1;
                log::debug!(
                    "memo `{}` recomputed, {} computation(s) so far",
                    self.label,
                    self.computations
                );
                (key, value)
            }
        };
        let (_, value) = self.entry.insert(entry);
        Ok(value)
    }

    pub fn computations(&self) -> u64 {
        self.computations
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reuses_value_for_same_key() {
        let mut memo = Memo::new("test");
        assert_eq!(*memo.get_or_compute(1, |k| k * 10), 10);
        assert_eq!(*memo.get_or_compute(1, |_| unreachable!("cached")), 10);
        assert_eq!(memo.computations(), 1);
    }

    #[test]
    fn recomputes_when_key_changes() {
        let mut memo = Memo::new("test");
        memo.get_or_compute((false, 1), |_| "a");
        assert_eq!(*memo.get_or_compute((true, 1), |_| "b"), "b");
        assert_eq!(memo.computations(), 2);
        assert_eq!(*memo.get_or_compute((true, 1), |_| unreachable!("cached")), "b");
    }

    #[test]
    fn failed_computation_empties_memo() {
        let mut memo: Memo<u8, u8> = Memo::new("test");
        memo.get_or_compute(1, |_| 1);
        let result = memo.try_get_or_compute(2, |_| Err("boom"));
        assert_eq!(result, Err("boom"));
        assert_eq!(memo.computations(), 1);

        // The old entry is gone too, so even key 1 is derived again.
        assert_eq!(*memo.get_or_compute(1, |_| 3), 3);
        assert_eq!(memo.computations(), 2);
    }
}

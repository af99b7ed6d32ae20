//! Statistics command

use crate::output::print_statistics;
use crate::stats::Statistics;
use crate::storage::{KeyValueStore, Store};

/// Load the ledger and print it
pub fn show_statistics<S: KeyValueStore>(store: &Store<S>) -> Statistics {
    let stats = store.load_statistics();
    print_statistics(&stats);
    stats
}

/// Replace the stored ledger with an empty one
pub fn reset_statistics<S: KeyValueStore>(store: &mut Store<S>) {
    store.save_statistics(&Statistics::default());
    tracing::info!("Statistics reset");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn reset_clears_ledger() {
        let mut stats = Statistics::new();
        stats.record_win(2);

        let mut store = Store::new(MemoryStore::new());
        store.save_statistics(&stats);
        assert_eq!(show_statistics(&store).games_won(), 1);

        reset_statistics(&mut store);
        assert_eq!(store.load_statistics(), Statistics::default());
    }
}

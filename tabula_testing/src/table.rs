//! Utilities for testing table implementations.
use tabula_core::Table;

/// Asserts the bookkeeping invariants every table implementation must hold.
///
/// # Panics
///
/// - If emptiness disagrees with the entry count
/// - If the table reports more collisions than stored entries
pub fn assert_table_invariants<T: Table>(table: &T) {
    assert_eq!(table.is_empty(), table.len() == 0);
    assert!(
        table.num_collisions() <= table.len(),
        "More collisions than stored keys: {} > {}",
        table.num_collisions(),
        table.len(),
    );
}

/// Generates the tests every hashing method of the chaining table must pass.
#[macro_export]
macro_rules! chained_table_tests {
    ($method:ident, $ctor:expr) => {
        compose_idents::compose_idents!(
            test_fn = [test_, $method, _population_counts_duplicates],
            {
                #[test]
                fn test_fn() {
                    use tabula_core::Table;

                    let mut table = ($ctor)();
                    table.insert("sorry");
                    table.insert("sorry");

                    assert_eq!(table.population(), 2);
                    assert_eq!(table.num_collisions(), 1);
                    $crate::table::assert_table_invariants(&table);
                }
            }
        );

        compose_idents::compose_idents!(test_fn = [test_, $method, _search_absent], {
            #[test]
            fn test_fn() {
                let mut table = ($ctor)();
                assert_eq!(table.search("Norwegian"), None);

                table.insert("Notlob");
                assert_eq!(table.search("Norwegian"), None);
            }
        });

        compose_idents::compose_idents!(test_fn = [test_, $method, _delete_absent_is_noop], {
            #[test]
            fn test_fn() {
                let mut table = ($ctor)();
                assert_eq!(table.delete("cage"), None);
                assert_eq!(table.population(), 0);

                table.insert("bird");
                assert_eq!(table.delete("cage"), None);
                assert_eq!(table.population(), 1);
            }
        });

        compose_idents::compose_idents!(
            test_fn = [test_, $method, _delete_decrements_population],
            {
                #[test]
                fn test_fn() {
                    let mut table = ($ctor)();
                    table.insert("bird");
                    table.insert("cage");

                    assert_eq!(table.delete("bird"), Some("bird".to_owned()));
                    assert_eq!(table.population(), 1);
                    assert_eq!(table.search("bird"), None);
                    assert_eq!(table.search("cage"), Some("cage"));
                }
            }
        );

        compose_idents::compose_idents!(test_fn = [test_, $method, _randomized_round_trip], {
            #[test]
            fn test_fn() {
                use rand::prelude::*;
                use rand_chacha::ChaCha20Rng;
                use $crate::generate::{Generate, StringParams};

                let mut rng = ChaCha20Rng::seed_from_u64(31);
                let words = String::generate_many(&mut rng, &StringParams::new(1, 24), 300);

                let mut table = ($ctor)();
                for word in &words {
                    table.insert(word.as_str());
                }
                assert_eq!(table.population(), words.len());
                $crate::table::assert_table_invariants(&table);

                for word in &words {
                    assert_eq!(table.search(word), Some(word.as_str()));
                }
                for word in &words {
                    assert_eq!(table.delete(word), Some(word.clone()));
                }
                assert_eq!(table.population(), 0);
                $crate::table::assert_table_invariants(&table);
            }
        });
    };
}
pub use chained_table_tests;

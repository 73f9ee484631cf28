/// PROPERTY-BASED TESTS: binding table and protocol invariants
///
/// 1. Table order does not depend on insertion order
/// 2. Network ids round-trip for every declared function
/// 3. Sequence numbers never move backwards
use proptest::prelude::*;

use hotwire_shared::{
    FunctionRegistry, Key, KeyBinding, KeyBindingTable, KeyCombo, Protocol, SessionCommandState,
};
use hotwire_test::FUNCTIONS;

// Strategy for generating (function index, base key, modifiers, priority)
fn binding_strategy() -> impl Strategy<Value = (usize, Key, Vec<Key>, i32)> {
    (
        0..FUNCTIONS.len(),
        prop::sample::select(vec![Key::W, Key::A, Key::Space, Key::F1, Key::Mouse1]),
        prop::sample::subsequence(vec![Key::Shift, Key::Ctrl, Key::Alt, Key::Meta], 0..=3),
        -2i32..3,
    )
}

fn bindings_from(
    registry: &FunctionRegistry,
    specs: &[(usize, Key, Vec<Key>, i32)],
) -> Vec<KeyBinding> {
    let mut bindings: Vec<KeyBinding> = Vec::new();
    for (index, base, modifiers, priority) in specs {
        let function = registry.get(FUNCTIONS[*index]).unwrap();
        let combo = KeyCombo::with_modifiers(*base, modifiers).unwrap();
        // one binding per function and combo
        if bindings
            .iter()
            .any(|b| b.function == function && b.combo == combo)
        {
            continue;
        }
        bindings.push(KeyBinding::new(function, combo).priority(*priority));
    }
    bindings
}

fn table_of(bindings: impl IntoIterator<Item = KeyBinding>) -> Vec<KeyBinding> {
    let mut table = KeyBindingTable::new();
    for binding in bindings {
        table.add_binding(binding).unwrap();
    }
    table.bindings().cloned().collect()
}

proptest! {
    /// Inserting the same bindings forwards, backwards or rotated yields one table
    #[test]
    fn prop_table_order_is_deterministic(
        specs in prop::collection::vec(binding_strategy(), 1..24),
        rotation in 0usize..24,
    ) {
        let protocol = Protocol::builder().add_functions(FUNCTIONS).build();
        let bindings = bindings_from(&protocol.functions, &specs);

        let forwards = table_of(bindings.clone());
        let backwards = table_of(bindings.iter().rev().cloned());
        let mut rotated = bindings.clone();
        rotated.rotate_left(rotation % bindings.len());
        let rotated = table_of(rotated);

        prop_assert_eq!(&forwards, &backwards);
        prop_assert_eq!(&forwards, &rotated);

        for pair in forwards.windows(2) {
            let (first, second) = (&pair[0], &pair[1]);
            prop_assert!(first.combo.size() >= second.combo.size());
            if first.combo.size() == second.combo.size() {
                prop_assert!(first.priority >= second.priority);
            }
        }
    }

    /// Every declared function maps to a net id and back to itself
    #[test]
    fn prop_net_ids_round_trip(
        names in prop::collection::hash_set("[A-Za-z][A-Za-z0-9]{0,11}", 1..40),
    ) {
        let mut protocol = Protocol::builder();
        for name in &names {
            protocol.add_function(name);
        }
        let kinds = protocol.function_kinds();

        prop_assert_eq!(kinds.len(), names.len());
        for function in protocol.functions.iter() {
            let net_id = kinds.net_id_of(function).unwrap();
            prop_assert_eq!(kinds.function_of(net_id), Some(function));
        }
    }

    /// The stored sequence only ever grows, and only strictly larger values move it
    #[test]
    fn prop_sequence_is_monotonic(sequences in prop::collection::vec(0u32..64, 0..64)) {
        let mut state = SessionCommandState::new();
        let mut highest = 0;
        for sequence in sequences {
            let advanced = state.advance_sequence(sequence);
            prop_assert_eq!(advanced, sequence > highest);
            highest = highest.max(sequence);
            prop_assert_eq!(state.last_processed_sequence(), highest);
        }
    }
}

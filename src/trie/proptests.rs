use super::*;

use proptest::prelude::*;
use std::collections::HashMap;

fn key_strategy() -> impl Strategy<Value = Vec<u8>> + Clone {
    // A small alphabet so that keys share prefixes and force splits.
    prop::collection::vec(b'a'..=b'e', 0..=12)
}

fn entries_strategy() -> impl Strategy<Value = Vec<(Vec<u8>, u32)>> {
    prop::collection::vec((key_strategy(), any::<u32>()), 0..=200)
}

fn build(entries: &[(Vec<u8>, u32)]) -> (Node<u8, u32>, HashMap<Vec<u8>, u32>) {
    let mut trie = Node::new();
    let mut model = HashMap::new();
    for (key, payload) in entries {
        trie.put(key, *payload).unwrap();
        model.insert(key.clone(), *payload);
    }
    (trie, model)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    #[test]
    fn prop_round_trip(entries in entries_strategy()) {
        let (trie, model) = build(&entries);
        for (key, payload) in &model {
            let node = trie.lookup(key);
            prop_assert!(node.is_some_and(Node::is_entry));
            prop_assert_eq!(node.and_then(Node::payload), Some(payload));
        }
        prop_assert_eq!(trie.validate(), Ok(()));
    }

    #[test]
    fn prop_lookup_agrees_with_model(entries in entries_strategy(), probes in prop::collection::vec(key_strategy(), 0..=64)) {
        let (trie, model) = build(&entries);
        for probe in &probes {
            prop_assert_eq!(trie.get(probe), model.get(probe));
        }
    }

    #[test]
    fn prop_traverse_reconstructs(entries in entries_strategy()) {
        let (trie, model) = build(&entries);

        let mut seen = HashMap::new();
        trie.traverse(|prefixes, path| {
            let node = path[path.len() - 1];
            let mut key = prefixes.concat();
            key.extend_from_slice(node.prefix());
            seen.insert(key, *node.payload().unwrap());
        });
        prop_assert_eq!(&seen, &model);

        let iterated: HashMap<_, _> = trie.iter().map(|(key, &payload)| (key, payload)).collect();
        prop_assert_eq!(iterated.len(), trie.stats().entries);
        prop_assert_eq!(iterated, model);
    }

    #[test]
    fn prop_overwrite(key in key_strategy(), first in any::<u32>(), second in any::<u32>()) {
        let mut trie: Node<u8, u32> = Node::new();
        trie.put(&key, first).unwrap();
        let before = trie.stats();
        trie.put(&key, second).unwrap();

        prop_assert_eq!(trie.get(&key), Some(&second));
        prop_assert_eq!(trie.stats(), before);
    }
}

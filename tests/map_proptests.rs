use proptest::prelude::*;
use rw_collections::SyncMap;
use std::collections::{BTreeMap, BTreeSet, HashMap};

#[derive(Clone, Debug)]
enum Op {
    Set(usize, i32),
    Get(usize),
    Delete(usize),
    Contains(String),
    Clear,
    Snapshot,
    Duplicate(usize, i32),
}

// Pool-indexed keys so shrinking converges on early keys.
fn arb_scenario() -> impl Strategy<Value = (Vec<String>, Vec<Op>)> {
    proptest::collection::vec("[a-z]{0,4}", 1..=6).prop_flat_map(|pool| {
        let idxs: Vec<usize> = (0..pool.len()).collect();
        let idx = proptest::sample::select(idxs);
        let op = prop_oneof![
            4 => (idx.clone(), any::<i32>()).prop_map(|(i, v)| Op::Set(i, v)),
            3 => idx.clone().prop_map(Op::Get),
            2 => idx.clone().prop_map(Op::Delete),
            2 => "[a-z]{0,4}".prop_map(Op::Contains),
            1 => Just(Op::Clear),
            2 => Just(Op::Snapshot),
            1 => (idx, any::<i32>()).prop_map(|(i, v)| Op::Duplicate(i, v)),
        ];
        proptest::collection::vec(op, 1..60).prop_map(move |ops| (pool.clone(), ops))
    })
}

// Property: state-machine equivalence against std::collections::HashMap.
// - set overwrites and reports the previous value.
// - get/contains_key agree with the model; borrowed `&str` lookups work.
// - delete on an absent key is a no-op.
// - keys/values/entries snapshots match the model as multisets.
// - a duplicate never observes writes made to its source.
proptest! {
    #![proptest_config(ProptestConfig { cases: 96, .. ProptestConfig::default() })]
    #[test]
    fn prop_map_matches_hashmap((pool, ops) in arb_scenario()) {
        let sut: SyncMap<String, i32> = SyncMap::new();
        let mut model: HashMap<String, i32> = HashMap::new();

        for op in ops {
            match op {
                Op::Set(i, v) => {
                    let k = pool[i].clone();
                    prop_assert_eq!(sut.set(k.clone(), v), model.insert(k, v));
                }
                Op::Get(i) => {
                    prop_assert_eq!(sut.get(pool[i].as_str()), model.get(&pool[i]).copied());
                }
                Op::Delete(i) => {
                    prop_assert_eq!(sut.delete(pool[i].as_str()), model.remove(&pool[i]));
                }
                Op::Contains(s) => {
                    prop_assert_eq!(sut.contains_key(s.as_str()), model.contains_key(&s));
                }
                Op::Clear => {
                    sut.clear();
                    model.clear();
                }
                Op::Snapshot => {
                    let keys: BTreeSet<String> = sut.keys().into_iter().collect();
                    prop_assert_eq!(sut.keys().len(), keys.len(), "keys are unique");
                    let model_keys: BTreeSet<String> = model.keys().cloned().collect();
                    prop_assert_eq!(keys, model_keys);

                    let mut values = sut.values();
                    let mut model_values: Vec<i32> = model.values().copied().collect();
                    values.sort();
                    model_values.sort();
                    prop_assert_eq!(values, model_values);

                    let entries: BTreeMap<String, i32> = sut.entries().into_iter().collect();
                    let model_entries: BTreeMap<String, i32> =
                        model.iter().map(|(k, v)| (k.clone(), *v)).collect();
                    prop_assert_eq!(entries, model_entries);
                }
                Op::Duplicate(i, v) => {
                    let dup = sut.duplicate();
                    dup.set(pool[i].clone(), v);
                    dup.delete(pool[(i + 1) % pool.len()].as_str());
                    let source: BTreeMap<String, i32> = sut.entries().into_iter().collect();
                    let expected: BTreeMap<String, i32> =
                        model.iter().map(|(k, v)| (k.clone(), *v)).collect();
                    prop_assert_eq!(source, expected);
                }
            }
            prop_assert_eq!(sut.len(), model.len());
            prop_assert_eq!(sut.is_empty(), model.is_empty());
        }
    }
}

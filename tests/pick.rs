use entrywise::{
	pick_lenient, pick_strict, pick_strict_many, pick_strict_one, required, IndexMap, Mapping,
	PickKeys, Selector,
};
use pretty_assertions::assert_eq;

fn pairs<K: Clone, V: Clone, S>(map: &IndexMap<K, V, S>) -> Vec<(K, V)> {
	map.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
}

fn sparse() -> Mapping<String, Option<u32>> {
	[("a", Some(1)), ("b", Some(2)), ("c", None)]
		.into_iter()
		.map(|(k, v)| (k.to_owned(), v))
		.collect()
}

fn dense() -> Mapping<char, u32> {
	[('a', 1), ('b', 2)].into_iter().collect()
}

#[test]
fn strict_one() {
	let map = sparse();
	assert_eq!(pairs(&pick_strict_one(&map, "a").unwrap()), [("a".to_owned(), 1)]);
	assert_eq!(pick_strict_one(&map, "c"), None);
	assert_eq!(pick_strict_one(&map, "z"), None);
}

#[test]
fn strict_many_in_requested_order() {
	let map = sparse();
	assert_eq!(
		pairs(&pick_strict_many(&map, ["b", "a"]).unwrap()),
		[("b".to_owned(), 2), ("a".to_owned(), 1)]
	);
}

#[test]
fn strict_many_aborts_on_any_miss() {
	let map = sparse();
	assert_eq!(pick_strict_many(&map, ["a", "c"]), None);
	assert_eq!(pick_strict_many(&map, ["a", "z"]), None);
	assert_eq!(pick_strict_many(&map, ["z", "a"]), None);
}

#[test]
fn strict_many_of_nothing_is_empty() {
	let map = sparse();
	let none: [&str; 0] = [];
	assert_eq!(pick_strict_many(&map, none).map(|picked| picked.len()), Some(0));
}

#[test]
fn strict_dispatches_on_selector() {
	let map = sparse();
	assert_eq!(
		pick_strict(&map, Selector::one("b")).map(|picked| pairs(&picked)),
		Some(vec![("b".to_owned(), 2)])
	);
	assert_eq!(pick_strict(&map, Selector::many(["a", "c"])), None);

	let selector: Selector<&str> = ["a", "b"].into_iter().collect();
	assert_eq!(selector, Selector::Many(vec!["a", "b"]));
	assert_eq!(pick_strict(&map, selector).map(|picked| picked.len()), Some(2));
}

#[test]
fn lenient_skips_missing_and_unknown() {
	let map = sparse();
	assert_eq!(
		pairs(&pick_lenient(&map, ["c", "b", "z", "a"])),
		[("b".to_owned(), 2), ("a".to_owned(), 1)]
	);
	assert!(pick_lenient(&map, ["c", "z"]).is_empty());
}

#[test]
fn repeated_keys_appear_once() {
	let map = sparse();
	assert_eq!(
		pairs(&pick_lenient(&map, ["a", "b", "a"])),
		[("a".to_owned(), 1), ("b".to_owned(), 2)]
	);
	assert_eq!(pick_strict_many(&map, ["b", "b"]).map(|picked| picked.len()), Some(1));
}

#[test]
fn strict_on_plain_map_with_absent_key() {
	assert_eq!(dense().pick_keys_strict_many(&['a', 'c']), None);
	assert_eq!(dense().pick_keys_strict(Selector::Many(vec![&'a', &'c'])), None);
}

#[test]
fn plain_map_methods() {
	let map = dense();
	assert_eq!(pairs(&map.pick_keys_strict_one(&'b').unwrap()), [('b', 2)]);
	assert_eq!(pairs(&map.pick_keys_strict(Selector::one(&'a')).unwrap()), [('a', 1)]);
	assert_eq!(pairs(&map.pick_keys_lenient(&['c', 'b', 'a'])), [('b', 2), ('a', 1)]);
}

#[test]
fn strict_selection_never_yields_missing_values() {
	let mut map: Mapping<&str, Option<u32>> = [("a", Some(1)), ("c", None)].into_iter().collect();

	assert_eq!(pick_strict_many(&map, ["a", "c"]), None);
	assert_eq!(pick_strict(&map, Selector::one("c")), None);
	assert_eq!(pick_strict_one(&map, "c"), None);
	assert_eq!(
		pick_strict_many(&map, ["a"]).map(|picked| pairs(&picked)),
		Some(vec![("a", 1)])
	);

	// Once every value is present, the view's strict selection agrees with the free function.
	map["c"] = Some(3);
	let expected = pick_strict_many(&map, ["c", "a"]).map(|picked| pairs(&picked));
	let checked = required(&mut map).unwrap();
	assert_eq!(
		checked.pick_strict_many(["c", "a"]).map(|picked| pairs(&picked)),
		expected
	);
	assert_eq!(expected, Some(vec![("c", 3), ("a", 1)]));
}

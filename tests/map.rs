use bst_map::{BstMap, MapError};

fn map_of(keys: &[i32]) -> BstMap<i32, String> {
	let mut map = BstMap::new();
	for &k in keys {
		assert_eq!(map.insert(k, format!("v{}", k)), None);
	}
	map
}

#[test]
fn empty_map_misses() {
	let map: BstMap<i32, String> = BstMap::new();
	assert_eq!(map.get(&42), None);
	assert_eq!(map.try_get(&42), Err(MapError::KeyNotFound));
	assert!(!map.contains_key(&42));
	assert_eq!(map.first_key_value(), None);
	assert!(map.is_empty());
	assert_eq!(map.height(), 0);
	assert!(map.is_ordered());
}

#[test]
fn remove_from_empty_map_is_noop() {
	let mut map: BstMap<i32, String> = BstMap::default();
	assert_eq!(map.remove(&42), None);
	assert!(map.is_empty());
	assert_eq!(map.height(), 0);
}

#[test]
fn insert_and_retrieve() {
	let mut map = BstMap::new();
	assert_eq!(map.insert(42, "hello".to_string()), None);
	assert_eq!(map.get(&42), Some(&"hello".to_string()));
	assert_eq!(map.try_get(&42), Ok(&"hello".to_string()));
	assert_eq!(map.get_key_value(&42), Some((&42, &"hello".to_string())));
	assert_eq!(map.len(), 1);
	assert_eq!(map.height(), 1);
}

#[test]
fn overwrite_keeps_len_and_returns_old_value() {
	let mut map = map_of(&[5, 3, 8]);
	assert_eq!(map.insert(3, "z".to_string()), Some("v3".to_string()));
	assert_eq!(map.get(&3).map(String::as_str), Some("z"));
	assert_eq!(map.get(&8).map(String::as_str), Some("v8"));
	assert_eq!(map.len(), 3);
	assert_eq!(map.height(), 2);
}

#[test]
fn remove_root_with_two_children_promotes_successor() {
	let mut map = BstMap::new();
	map.insert(5, "a");
	map.insert(3, "b");
	map.insert(8, "c");
	map.insert(3, "z");

	assert_eq!(map.remove(&5), Some("a"));
	assert_eq!(map.get(&5), None);
	assert_eq!(map.get(&8), Some(&"c"));
	assert_eq!(map.get(&3), Some(&"z"));
	// 8 became the root with 3 as its only child
	assert_eq!(map.height(), 2);
	assert_eq!(format!("{:?}", map), r#"{3: "z", 8: "c"}"#);
}

#[test]
fn remove_leaf() {
	let mut map = map_of(&[50, 30, 70]);
	assert_eq!(map.remove(&30), Some("v30".to_string()));
	assert_eq!(map.get(&30), None);
	assert_eq!(map.get(&50).map(String::as_str), Some("v50"));
	assert_eq!(map.get(&70).map(String::as_str), Some("v70"));
	assert_eq!(map.len(), 2);
}

#[test]
fn remove_node_with_one_child() {
	let mut map = map_of(&[50, 30, 20]);
	assert_eq!(map.remove(&30), Some("v30".to_string()));
	assert_eq!(map.get(&30), None);
	assert_eq!(map.get(&50).map(String::as_str), Some("v50"));
	assert_eq!(map.get(&20).map(String::as_str), Some("v20"));
	assert_eq!(map.height(), 2);
	assert!(map.is_ordered());
}

#[test]
fn remove_inner_node_with_two_children() {
	let mut map = map_of(&[50, 30, 70, 60, 80]);
	assert_eq!(map.remove(&70), Some("v70".to_string()));
	assert_eq!(map.get(&70), None);
	for k in [50, 30, 60, 80] {
		assert_eq!(map.get(&k), Some(&format!("v{}", k)));
	}
	assert!(map.is_ordered());
	assert_eq!(map.len(), 4);
}

#[test]
fn remove_successor_with_right_child() {
	// successor of 50 is 60, whose right child 65 must stay reachable
	let mut map = map_of(&[50, 30, 70, 60, 80, 65]);
	assert_eq!(map.remove(&50), Some("v50".to_string()));
	assert_eq!(map.first_key_value(), Some((&30, &"v30".to_string())));
	for k in [30, 60, 65, 70, 80] {
		assert!(map.contains_key(&k), "lost key {}", k);
	}
	assert!(map.is_ordered());
}

#[test]
fn remove_missing_key_leaves_map_untouched() {
	let mut map = map_of(&[50]);
	assert_eq!(map.remove(&99), None);
	assert_eq!(map.get(&50).map(String::as_str), Some("v50"));
	assert_eq!(map.len(), 1);
}

#[test]
fn error_is_out_of_band_from_optional_values() {
	let mut map: BstMap<&str, Option<u32>> = BstMap::new();
	map.insert("present-but-none", None);

	assert_eq!(map.try_get("present-but-none"), Ok(&None));
	assert_eq!(map.try_get("absent"), Err(MapError::KeyNotFound));
	assert_eq!(map.get("present-but-none"), Some(&None));
	assert_eq!(map.get("absent"), None);
}

#[test]
fn borrowed_key_lookups() {
	let mut map: BstMap<String, usize> = BstMap::new();
	for word in ["pear", "apple", "quince", "fig"] {
		map.insert(word.to_string(), word.len());
	}
	assert_eq!(map.get("fig"), Some(&3));
	assert_eq!(map.first_key_value(), Some((&"apple".to_string(), &5)));
	assert_eq!(map.remove("pear"), Some(4));
	assert!(!map.contains_key("pear"));
}

#[test]
fn get_mut_updates_in_place() {
	let mut map = map_of(&[2, 1, 3]);
	map.get_mut(&1).unwrap().push('!');
	assert_eq!(map.get(&1).map(String::as_str), Some("v1!"));
	assert!(map.get_mut(&4).is_none());
}

#[test]
fn degenerate_tree_is_usable_and_drops() {
	const N: u32 = 20_000;

	let mut map = BstMap::new();
	for k in 0..N {
		map.insert(k, k);
	}
	assert_eq!(map.height(), N as usize);
	assert_eq!(map.get(&(N - 1)), Some(&(N - 1)));
	assert_eq!(map.remove(&0), Some(0));
	assert_eq!(map.first_key_value(), Some((&1, &1)));
	assert!(map.is_ordered());

	let copy = map.clone();
	assert_eq!(copy.len(), map.len());
	assert_eq!(copy.height(), map.height());
	assert_eq!(copy.first_key_value(), Some((&1, &1)));
	drop(map);
	drop(copy);
}

#[test]
fn repeated_lookups_are_stable() {
	let map = map_of(&[9, 4, 15, 2, 7]);
	let first: Vec<_> = (0..20).map(|k| map.get(&k).cloned()).collect();
	let second: Vec<_> = (0..20).map(|k| map.get(&k).cloned()).collect();
	assert_eq!(first, second);
}

use crate::steam::{SERIALIZE_DEPTH_LIMIT, Scalar, ValueMap, ValueNode};

fn string(value: &str) -> ValueNode {
	ValueNode::Scalar(Scalar::String(value.into()))
}

fn chain(depth: usize, leaf: &str) -> ValueNode {
	let mut map = ValueMap::new();
	map.insert("leaf".into(), string(leaf));
	for _ in 0..depth {
		let mut outer = ValueMap::new();
		outer.insert("n".into(), ValueNode::Map(map));
		map = outer;
	}
	ValueNode::Map(map)
}

#[test]
fn duplicate_insert_keeps_first_slot_and_last_value() {
	let mut map = ValueMap::new();
	map.insert("a".into(), string("1"));
	map.insert("b".into(), string("2"));
	map.insert("a".into(), string("3"));

	assert_eq!(map.len(), 2);
	assert_eq!(map.keys().collect::<Vec<_>>(), ["a", "b"]);
	assert_eq!(map.get("a").and_then(ValueNode::as_str), Some("3"));
}

#[test]
fn loose_lookup_prefers_exact_key() {
	let mut map = ValueMap::new();
	map.insert("appname".into(), string("lower"));
	map.insert("AppName".into(), string("exact"));

	assert_eq!(map.get_loose("AppName").and_then(ValueNode::as_str), Some("exact"));
	assert_eq!(map.get_loose("APPNAME").and_then(ValueNode::as_str), Some("lower"));
	assert!(map.get("APPNAME").is_none());
}

#[test]
fn get_path_walks_nested_maps_and_stops_at_scalars() {
	let mut inner = ValueMap::new();
	inner.insert("leaf".into(), string("x"));
	let mut root = ValueMap::new();
	root.insert("inner".into(), ValueNode::Map(inner));
	let root = ValueNode::Map(root);

	assert_eq!(root.get_path(&["inner", "leaf"]).and_then(ValueNode::as_str), Some("x"));
	assert!(root.get_path(&["inner", "leaf", "deeper"]).is_none());
	assert!(root.get_path(&["missing"]).is_none());
	assert_eq!(root.get_path(&[]), Some(&root));
}

#[test]
fn scalar_bool_and_display_forms() {
	assert_eq!(Scalar::Int32(1).as_bool(), Some(true));
	assert_eq!(Scalar::Int32(0).as_bool(), Some(false));
	assert_eq!(Scalar::Int32(2).as_bool(), None);
	assert_eq!(Scalar::String("true".into()).as_bool(), Some(true));
	assert_eq!(Scalar::Int32(1).to_string(), "1");
	assert_eq!(Scalar::UInt64(76561197960265728).to_string(), "76561197960265728");
}

#[test]
fn serializes_maps_in_insertion_order() {
	let mut map = ValueMap::new();
	map.insert("z".into(), ValueNode::Scalar(Scalar::Int32(-1)));
	map.insert("a".into(), string("text"));

	let json = serde_json::to_string(&ValueNode::Map(map)).expect("serializes");
	assert_eq!(json, r#"{"z":-1,"a":"text"}"#);
}

#[test]
fn deep_trees_compare_and_clone_without_recursion() {
	let depth = 100_000;
	let left = chain(depth, "x");
	let right = chain(depth, "x");
	assert!(left == right);
	assert!(left != chain(depth, "y"));
	assert!(left != chain(depth - 1, "x"));

	let copy = left.clone();
	assert!(copy == left);
}

#[test]
fn clone_keeps_order_and_lookup() {
	let mut map = ValueMap::new();
	map.insert("z".into(), string("1"));
	map.insert("a".into(), ValueNode::Map(ValueMap::new()));
	let copy = map.clone();

	assert_eq!(copy.keys().collect::<Vec<_>>(), ["z", "a"]);
	assert_eq!(copy.get("z").and_then(ValueNode::as_str), Some("1"));
	assert!(copy.get("a").and_then(ValueNode::as_map).is_some_and(ValueMap::is_empty));
}

#[test]
fn serialize_rejects_nesting_past_limit() {
	let shallow = chain(SERIALIZE_DEPTH_LIMIT - 1, "x");
	let json = serde_json::to_string(&shallow).expect("within limit serializes");
	assert!(json.contains(r#""leaf":"x""#));

	let err = serde_json::to_string(&chain(100_000, "x")).expect_err("deep tree is rejected");
	assert!(err.to_string().contains("nesting exceeds"), "got {err}");
}

use crate::{decode_root, error::Result, test::builder::Builder, Tag, Value};

fn sample() -> Vec<u8> {
    Builder::new()
        .start_compound("")
        .start_compound("Data")
        .int("version", 19133)
        .start_compound("Player")
        .string("id", "minecraft:player")
        .float("XpP", 0.5)
        .end_compound()
        .end_compound()
        .int("dup", 1)
        .int("dup", 2)
        .start_list("pos", Tag::Double, 2)
        .double_payload(1.0)
        .double_payload(-2.5)
        .end_compound()
        .build()
}

#[test]
fn get_returns_first_match() -> Result<()> {
    let root = decode_root(&sample())?;

    assert_eq!(root.get("dup"), Some(&Value::Int(1)));
    assert_eq!(root.get("missing"), None);
    assert!(root.contains("Data"));
    Ok(())
}

#[test]
fn path_walks_compounds() -> Result<()> {
    let root = decode_root(&sample())?;

    let player = root.path(&["Data", "Player"]).and_then(Value::as_compound);
    let player = player.expect("player compound");
    assert_eq!(player.get("id").and_then(Value::as_str), Some("minecraft:player"));
    assert_eq!(root.path(&["Data", "version"]).and_then(Value::as_i64), Some(19133));

    // Can't walk through a non-compound.
    assert_eq!(root.path(&["dup", "x"]), None);
    assert_eq!(root.path(&[]), None);
    Ok(())
}

#[test]
fn list_accessors() -> Result<()> {
    let root = decode_root(&sample())?;

    let pos = root.get_list("pos").expect("pos list");
    assert_eq!(pos.element(), Tag::Double);
    assert_eq!(pos.len(), 2);
    let xs: Vec<f64> = pos.iter().filter_map(Value::as_f64).collect();
    assert_eq!(xs, vec![1.0, -2.5]);
    Ok(())
}

#[test]
fn entries_keep_read_order() -> Result<()> {
    let root = decode_root(&sample())?;

    let names: Vec<_> = root.iter().filter_map(|e| e.name()).collect();
    assert_eq!(names, vec!["Data", "dup", "dup", "pos"]);
    Ok(())
}

#[test]
fn numeric_views() {
    assert_eq!(Value::Byte(-1).as_i64(), Some(-1));
    assert_eq!(Value::Long(1 << 40).as_i64(), Some(1 << 40));
    assert_eq!(Value::Float(0.5).as_i64(), None);
    assert_eq!(Value::Short(3).as_f64(), Some(3.0));
    assert_eq!(Value::String("a".into()).as_f64(), None);
}

#[test]
fn serializes_as_plain_json() -> Result<()> {
    let root = decode_root(&sample())?;

    let json = serde_json::to_value(&root.compound).unwrap();
    assert_eq!(json["Data"]["Player"]["id"], "minecraft:player");
    assert_eq!(json["Data"]["version"], 19133);
    assert_eq!(json["pos"], serde_json::json!([1.0, -2.5]));
    Ok(())
}

use nbtree::{decode_root, Value};

//
// Prints the player compound out of a world's level.dat, which is gzipped.
//

fn main() {
    let args: Vec<_> = std::env::args().skip(1).collect();
    let data = std::fs::read(&args[0]).unwrap();

    let level = decode_root(&data).unwrap();
    let player = level
        .path(&["Data", "Player"])
        .and_then(Value::as_compound)
        .expect("level.dat has no Data.Player");

    println!("{:#?}", player);
}

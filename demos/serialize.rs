use avlmap::AvlTreeMap;

fn main() {
    let mut map = AvlTreeMap::new();
    for key in 1..=7 {
        map.insert(key, key * 10);
        println!("after insert {key}: {}", map.serialize());
    }

    map.remove(&4);
    println!("after remove 4: {}", map.serialize());
}

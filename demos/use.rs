use avlmap::{AvlTreeMap, AvlTreeSet};

fn main() {
    let mut ages: AvlTreeMap<&str, u32> = AvlTreeMap::new();
    ages.insert("carol", 41);
    ages.insert("alice", 34);
    ages.insert("bob", 27);

    // Inserting an existing key overwrites the value, the key stays unique.
    ages.insert("bob", 28);
    assert_eq!(ages.len(), 3);
    assert_eq!(ages.get(&"bob"), Some(&28));

    println!("by name:");
    for (name, age) in &ages {
        println!("  {name}: {age}");
    }

    assert!(ages.remove(&"alice"));
    assert!(!ages.contains_key(&"alice"));
    println!("without alice: {ages:?}");

    let primes: AvlTreeSet<u32> = [11, 2, 7, 3, 5, 3].into_iter().collect();
    assert_eq!(primes.len(), 5);
    assert!(primes.contains(&7));

    let squares: Vec<u32> = primes.iter().map(|p| p * p).collect();
    println!("primes:  {primes:?}");
    println!("squares: {squares:?}");
}

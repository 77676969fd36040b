use trie_st::{Error, Trie, RADIX};

/// The classic "she sells sea shells by the sea shore" table.
fn shells() -> Trie<String, usize> {
    let mut trie = Trie::new();
    for (i, key) in "she sells sea shells by the sea shore"
        .split_whitespace()
        .enumerate()
    {
        trie.insert(key, i).unwrap();
    }
    trie
}

#[test]
fn test_symbol_table_basics() {
    let trie = shells();

    assert_eq!(trie.size(), 7);
    assert!(!trie.is_empty());

    let pairs: Vec<(String, usize)> = trie.iter().map(|(k, &v)| (k, v)).collect();
    assert_eq!(
        pairs,
        vec![
            ("by".to_string(), 4),
            ("sea".to_string(), 6),
            ("sells".to_string(), 1),
            ("she".to_string(), 0),
            ("shells".to_string(), 3),
            ("shore".to_string(), 7),
            ("the".to_string(), 5),
        ]
    );
}

#[test]
fn test_longest_prefix_of() {
    let trie = shells();

    assert_eq!(trie.longest_prefix_of("shellsort"), Some("shells".to_string()));
    assert_eq!(trie.longest_prefix_of("quicksort"), None);
    assert_eq!(trie.longest_prefix_of("shell"), Some("she".to_string()));
    assert_eq!(trie.longest_prefix_of("bye"), Some("by".to_string()));
}

#[test]
fn test_longest_prefix_of_documented_cases() {
    let trie: Trie<String, i32> = vec![("she", 0), ("sells", 1), ("shell", 2), ("shore", 3)]
        .into_iter()
        .collect();

    assert_eq!(trie.longest_prefix_of("shell"), Some("shell".to_string()));
    assert_eq!(trie.longest_prefix_of("shellsort"), Some("shell".to_string()));
    assert_eq!(trie.longest_prefix_of("sh"), None);
    assert_eq!(trie.longest_prefix_of("shely"), Some("she".to_string()));
}

#[test]
fn test_keys_with_prefix() {
    let trie = shells();

    let keys: Vec<String> = trie.keys_with_prefix("shor").collect();
    assert_eq!(keys, vec!["shore"]);

    let keys: Vec<String> = trie.keys_with_prefix("s").collect();
    assert_eq!(keys, vec!["sea", "sells", "she", "shells", "shore"]);

    assert_eq!(trie.keys_with_prefix("x").count(), 0);
}

#[test]
fn test_keys_that_match() {
    let trie = shells();

    let keys: Vec<String> = trie.keys_that_match(".he.l.").collect();
    assert_eq!(keys, vec!["shells"]);

    let keys: Vec<String> = trie.keys_that_match("...").collect();
    assert_eq!(keys, vec!["sea", "she", "the"]);

    let keys: Vec<String> = trie.keys_that_match("..").collect();
    assert_eq!(keys, vec!["by"]);
}

#[test]
fn test_wildcard_matches_literal_dot() {
    let mut trie = shells();
    trie.insert("s.a", 100).unwrap();

    let keys: Vec<String> = trie.keys_that_match("s.a").collect();
    assert_eq!(keys, vec!["s.a", "sea"]);
}

#[test]
fn test_delete_then_queries() {
    let mut trie = shells();

    assert_eq!(trie.delete("shells"), Some(3));
    assert_eq!(trie.delete("she"), Some(0));
    assert_eq!(trie.size(), 5);

    let keys: Vec<String> = trie.keys_with_prefix("she").collect();
    assert!(keys.is_empty());
    assert_eq!(trie.longest_prefix_of("shellsort"), None);
    assert_eq!(trie.keys_that_match("sh...").collect::<Vec<_>>(), vec!["shore"]);

    // Re-inserting grows the path back
    trie.insert("shell", 9).unwrap();
    assert_eq!(trie.longest_prefix_of("shellsort"), Some("shell".to_string()));
}

#[test]
fn test_put_none_is_delete() {
    let mut trie = shells();

    assert_eq!(trie.put("sea", None), Ok(Some(6)));
    assert!(!trie.contains("sea"));
    assert_eq!(trie.size(), 6);

    // Putting None for a missing key does nothing
    assert_eq!(trie.put("sea", None), Ok(None));
    assert_eq!(trie.size(), 6);
}

#[test]
fn test_unencodable_keys() {
    let mut trie = shells();

    assert_eq!(
        trie.insert("s€a", 1),
        Err(Error::UnencodableSymbol {
            position: 1,
            symbol: '€'
        })
    );
    assert_eq!(trie.size(), 7);
    assert!(!trie.contains_key("s€a"));
    assert_eq!(trie.keys_that_match("s€a").count(), 0);
    assert_eq!(trie.longest_prefix_of("she€"), Some("she".to_string()));

    let message = trie.insert("€", 1).unwrap_err().to_string();
    assert!(message.contains("position 0"), "{}", message);
}

#[test]
fn test_empty_key_is_a_prefix_of_everything() {
    let mut trie = shells();
    trie.insert("", 42).unwrap();

    assert_eq!(trie.size(), 8);
    assert_eq!(trie.longest_prefix_of("xylophone"), Some(String::new()));
    assert_eq!(trie.longest_prefix_of(""), Some(String::new()));
    assert_eq!(trie.longest_prefix_of("shore"), Some("shore".to_string()));
    assert_eq!(trie.keys().next(), Some(String::new()));
}

#[test]
fn test_byte_keys_cover_full_alphabet() {
    let mut trie: Trie<Vec<u8>, u8> = Trie::new();
    for symbol in 0..=255u8 {
        trie.insert(&[symbol, symbol][..], symbol).unwrap();
    }

    assert_eq!(trie.size(), RADIX);

    let keys: Vec<Vec<u8>> = trie.keys().collect();
    assert_eq!(keys.first(), Some(&vec![0, 0]));
    assert_eq!(keys.last(), Some(&vec![255, 255]));
    assert!(keys.windows(2).all(|pair| pair[0] < pair[1]));

    // The pattern is ".." over bytes, so every key matches
    assert_eq!(trie.keys_that_match(b"..").count(), RADIX);
    assert_eq!(trie.get(&[200u8, 200][..]), Some(&200));
}

#[test]
fn test_clone_is_independent() {
    let trie = shells();
    let mut copy = trie.clone();

    copy.delete("by");
    copy.insert("bye", 1).unwrap();

    assert_eq!(trie.get("by"), Some(&4));
    assert!(!trie.contains_key("bye"));
    assert_ne!(trie, copy);
}

#[test]
fn test_default_is_empty() {
    let trie: Trie<String, ()> = Trie::default();
    assert!(trie.is_empty());
    assert_eq!(trie.keys().count(), 0);
    assert_eq!(trie.longest_prefix_of("anything"), None);
}

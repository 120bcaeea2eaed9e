use growvec::{GrowVec, INITIAL_CAPACITY};

#[test]
fn test_default_initialization() {
    let vec: GrowVec<i32> = GrowVec::new();

    assert_eq!(vec.len(), 0);
    assert!(vec.is_empty());
    assert_eq!(vec.capacity(), INITIAL_CAPACITY);
    assert_eq!(vec.begin(), vec.end());
}

#[test]
fn test_default_trait_matches_new() {
    let vec: GrowVec<String> = GrowVec::default();
    assert!(vec.is_empty());
    assert_eq!(vec.capacity(), 1);
}

#[test]
fn test_with_capacity_leaves_slots_unconstructed() {
    let vec: GrowVec<String> = GrowVec::with_capacity(10);

    assert_eq!(vec.len(), 0);
    assert_eq!(vec.capacity(), 10);
}

#[test]
fn test_with_capacity_zero_is_raised_to_initial() {
    let mut vec: GrowVec<u8> = GrowVec::with_capacity(0);
    assert_eq!(vec.capacity(), INITIAL_CAPACITY);

    vec.push_back(1);
    vec.push_back(2);
    assert_eq!(vec.as_slice(), &[1, 2]);
}

#[test]
fn test_from_elem_fills_every_slot() {
    let vec = GrowVec::from_elem(3, &7);

    assert_eq!(vec.as_slice(), &[7, 7, 7]);
    assert_eq!(vec.len(), 3);
    assert_eq!(vec.capacity(), 3);
}

#[test]
fn test_from_elem_clones_owned_values() {
    let vec = GrowVec::from_elem(2, &String::from("abc"));
    assert_eq!(vec[0], "abc");
    assert_eq!(vec[1], "abc");
}

#[test]
fn test_from_elem_zero_count() {
    let vec = GrowVec::from_elem(0, &5);
    assert!(vec.is_empty());
    assert_eq!(vec.capacity(), 1);
}

#[test]
fn test_push_back_scenario() {
    let mut vec = GrowVec::new();
    assert_eq!((vec.len(), vec.capacity()), (0, 1));

    vec.push_back(10);
    assert_eq!(vec.len(), 1);
    assert!(vec.capacity() >= 1);

    vec.push_back(20);
    assert_eq!(vec.len(), 2);
    assert!(vec.capacity() >= 2);

    vec.push_back(30);
    assert_eq!(vec.len(), 3);

    vec.insert(vec.begin() + 1, 15);
    assert_eq!(vec.as_slice(), &[10, 15, 20, 30]);
    assert_eq!(vec.len(), 4);

    vec.erase(vec.begin() + 2);
    assert_eq!(vec.as_slice(), &[10, 15, 30]);
    assert_eq!(vec.len(), 3);
}

#[test]
fn test_push_back_cloned_keeps_original() {
    let mut vec = GrowVec::new();
    let value = String::from("shared");

    vec.push_back_cloned(&value);
    vec.push_back_cloned(&value);

    assert_eq!(vec.len(), 2);
    assert_eq!(value, "shared");
    assert_eq!(vec[1], "shared");
}

#[test]
fn test_pop_back_operation() {
    let mut vec = GrowVec::new();
    vec.push_back("hello");
    vec.push_back("world");

    assert_eq!(vec.pop_back(), Some("world"));
    assert_eq!(vec.len(), 1);
    assert_eq!(vec.pop_back(), Some("hello"));
    assert_eq!(vec.len(), 0);
    assert_eq!(vec.pop_back(), None);
    assert_eq!(vec.len(), 0);
}

#[test]
fn test_pop_back_keeps_capacity() {
    let mut vec = GrowVec::from([1, 2, 3, 4, 5]);
    while vec.pop_back().is_some() {}
    assert_eq!(vec.capacity(), 5);
}

#[test]
fn test_clear_operation() {
    let mut vec = GrowVec::new();
    for i in 0..5 {
        vec.push_back(i);
    }
    let capacity = vec.capacity();

    vec.clear();

    assert_eq!(vec.len(), 0);
    assert!(vec.is_empty());
    assert_eq!(vec.capacity(), capacity);

    vec.clear();
    assert_eq!(vec.len(), 0);
    assert_eq!(vec.capacity(), capacity);
}

#[test]
fn test_reuse_after_clear() {
    let mut vec = GrowVec::from([1, 2]);
    vec.clear();
    vec.push_back(3);
    assert_eq!(vec.as_slice(), &[3]);
    assert_eq!(vec.capacity(), 2);
}

#[test]
fn test_index_access() {
    let mut vec = GrowVec::from([1, 2, 3]);

    assert_eq!(vec[0], 1);
    assert_eq!(vec[2], 3);

    vec[1] = 20;
    assert_eq!(vec.as_slice(), &[1, 20, 3]);
}

#[test]
#[should_panic(expected = "Index 3 out of bounds for vector of length 3")]
fn test_index_out_of_bounds_panics() {
    let vec = GrowVec::from([1, 2, 3]);
    let _ = vec[3];
}

#[test]
fn test_unchecked_access_in_range() {
    let mut vec = GrowVec::from([4, 5, 6]);

    unsafe {
        assert_eq!(*vec.get_unchecked(1), 5);
        *vec.get_unchecked_mut(2) = 60;
    }
    assert_eq!(vec.as_slice(), &[4, 5, 60]);
}

#[test]
fn test_front_and_back() {
    let mut vec = GrowVec::from([1, 2, 3]);

    assert_eq!(*vec.front(), 1);
    assert_eq!(*vec.back(), 3);

    *vec.front_mut() = 10;
    *vec.back_mut() = 30;
    assert_eq!(vec.as_slice(), &[10, 2, 30]);
}

#[test]
fn test_front_and_back_single_element() {
    let vec = GrowVec::from([42]);
    assert_eq!(vec.front(), vec.back());
}

#[test]
#[should_panic(expected = "Cannot access front of empty vector")]
fn test_front_empty_panics() {
    let vec: GrowVec<i32> = GrowVec::new();
    let _ = vec.front();
}

#[test]
#[should_panic(expected = "Cannot access back of empty vector")]
fn test_back_empty_panics() {
    let mut vec: GrowVec<i32> = GrowVec::new();
    let _ = vec.back_mut();
}

#[test]
fn test_get_returns_option() {
    let mut vec = GrowVec::from([1, 2]);
    assert_eq!(vec.get(1), Some(&2));
    assert_eq!(vec.get(2), None);

    if let Some(value) = vec.get_mut(0) {
        *value = 100;
    }
    assert_eq!(vec[0], 100);
    assert!(vec.get_mut(5).is_none());
}

#[test]
fn test_insert_at_front_middle_and_end() {
    let mut vec = GrowVec::from([2, 4]);

    vec.insert(vec.begin(), 1);
    assert_eq!(vec.as_slice(), &[1, 2, 4]);

    vec.insert(vec.begin() + 2, 3);
    assert_eq!(vec.as_slice(), &[1, 2, 3, 4]);

    vec.insert(vec.end(), 5);
    assert_eq!(vec.as_slice(), &[1, 2, 3, 4, 5]);
}

#[test]
fn test_insert_into_empty() {
    let mut vec = GrowVec::new();
    vec.insert(vec.begin(), "only");
    assert_eq!(vec.as_slice(), &["only"]);
}

#[test]
fn test_insert_grows_full_buffer() {
    let mut vec = GrowVec::from([1, 2, 3, 4]);
    assert_eq!(vec.capacity(), 4);

    vec.insert(vec.begin() + 1, 9);

    assert_eq!(vec.capacity(), 8);
    assert_eq!(vec.as_slice(), &[1, 9, 2, 3, 4]);
}

#[test]
fn test_insert_cloned_owned_values() {
    let mut vec = GrowVec::from([String::from("a"), String::from("c")]);
    let middle = String::from("b");

    vec.insert_cloned(vec.begin() + 1, &middle);

    assert_eq!(vec.as_slice(), &["a", "b", "c"]);
    assert_eq!(middle, "b");
}

#[test]
#[should_panic(expected = "Insertion index 4 out of bounds for vector of length 2")]
fn test_insert_past_end_panics() {
    let mut vec = GrowVec::from([1, 2]);
    vec.insert(vec.begin() + 4, 3);
}

#[test]
fn test_erase_first_and_last() {
    let mut vec = GrowVec::from([1, 2, 3, 4]);

    vec.erase(vec.begin());
    assert_eq!(vec.as_slice(), &[2, 3, 4]);

    vec.erase(vec.end() - 1);
    assert_eq!(vec.as_slice(), &[2, 3]);
    assert_eq!(vec.capacity(), 4);
}

#[test]
#[should_panic(expected = "Index 2 out of bounds for vector of length 2")]
fn test_erase_at_end_panics() {
    let mut vec = GrowVec::from([1, 2]);
    vec.erase(vec.end());
}

#[test]
fn test_remove_returns_value() {
    let mut vec = GrowVec::from([String::from("x"), String::from("y"), String::from("z")]);

    assert_eq!(vec.remove(1), "y");
    assert_eq!(vec.as_slice(), &["x", "z"]);
}

#[test]
fn test_equality_ignores_capacity() {
    let mut grown = GrowVec::new();
    grown.push_back(1);
    grown.push_back(2);
    grown.push_back(3);

    let exact = GrowVec::from([1, 2, 3]);
    assert_ne!(grown.capacity(), exact.capacity());
    assert_eq!(grown, exact);
    assert_ne!(grown, GrowVec::from([1, 2]));
}

#[test]
fn test_debug_format_lists_elements() {
    let vec = GrowVec::from([1, 2, 3]);
    assert_eq!(format!("{vec:?}"), "[1, 2, 3]");
}

#[test]
fn test_extend_and_from_iter() {
    let mut vec: GrowVec<u32> = (0..3).collect();
    vec.extend([3, 4]);

    assert_eq!(vec.as_slice(), &[0, 1, 2, 3, 4]);
    assert_eq!(vec.capacity(), 8);
}

#[test]
fn test_from_empty_array() {
    let vec: GrowVec<u8> = GrowVec::from([]);
    assert!(vec.is_empty());
    assert_eq!(vec.capacity(), 1);
}

#[test]
fn test_as_mut_slice_writes_through() {
    let mut vec = GrowVec::from([3, 1, 2]);
    vec.as_mut_slice().sort_unstable();
    assert_eq!(vec.as_slice(), &[1, 2, 3]);
}

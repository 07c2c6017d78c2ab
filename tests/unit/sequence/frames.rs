use std::sync::Arc;

use super::*;

fn solid(width: u32, height: u32) -> PreparedImage {
    PreparedImage {
        width,
        height,
        rgba8_premul: Arc::new(vec![255; (width * height * 4) as usize]),
    }
}

#[test]
fn insert_and_lookup_are_one_based() {
    let mut store = FrameStore::new(3);
    assert_eq!(store.frame_count(), 3);
    assert!(store.insert(1, solid(4, 2)).unwrap());
    assert!(store.is_loaded(1));
    assert!(!store.is_loaded(2));
    assert_eq!(store.get(1).map(|i| i.width), Some(4));
    assert_eq!(
        store.info(1),
        Some(FrameInfo {
            index: 1,
            loaded: true,
            natural_size: Some((4, 2)),
        })
    );
    assert_eq!(store.info(3).map(|i| i.natural_size), Some(None));
}

#[test]
fn out_of_range_lookups_are_none_and_inserts_fail() {
    let mut store = FrameStore::new(2);
    assert!(store.get(0).is_none());
    assert!(store.get(3).is_none());
    assert!(store.info(0).is_none());
    assert!(store.insert(0, solid(1, 1)).is_err());
    assert!(store.insert(3, solid(1, 1)).is_err());
    assert_eq!(store.loaded_len(), 0);
}

#[test]
fn duplicate_insert_keeps_first_image() {
    let mut store = FrameStore::new(2);
    assert!(store.insert(2, solid(1, 1)).unwrap());
    assert!(!store.insert(2, solid(9, 9)).unwrap());
    assert_eq!(store.loaded_len(), 1);
    assert_eq!(store.get(2).map(|i| i.width), Some(1));
}

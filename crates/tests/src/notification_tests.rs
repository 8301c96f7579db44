use server::notifications;
use shared_types::{unread_count, ALL_ROLES};
use std::collections::HashSet;

#[test]
fn every_role_has_a_feed_with_unread_items() {
    for role in ALL_ROLES {
        let feed = notifications::for_role(*role);
        assert!(!feed.is_empty(), "{role}");
        assert!(unread_count(&feed) >= 1, "{role}");
        assert!(unread_count(&feed) <= feed.len());
    }
}

#[test]
fn ids_are_unique_within_a_feed() {
    for role in ALL_ROLES {
        let feed = notifications::for_role(*role);
        let ids: HashSet<u32> = feed.iter().map(|n| n.id).collect();
        assert_eq!(ids.len(), feed.len(), "{role}");
    }
}

#[test]
fn entries_carry_display_text() {
    for role in ALL_ROLES {
        for note in notifications::for_role(*role) {
            assert!(!note.title.is_empty());
            assert!(!note.body.is_empty());
            assert!(note.age.ends_with("ago"), "{role}: {}", note.age);
        }
    }
}

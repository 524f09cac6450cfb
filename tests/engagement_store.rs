use neonfeed::domain::{NotificationFilter, NotificationItem};
use neonfeed::{Dataset, EngagementStore, EntityKind};

fn seeded_store() -> EngagementStore {
    let dataset = Dataset::builtin().unwrap();
    EngagementStore::seeded(
        dataset.notifications.clone(),
        dataset.following.iter().copied(),
        dataset.read_notifications.iter().copied(),
    )
}

fn ids(items: &[&NotificationItem]) -> Vec<u64> {
    items.iter().map(|n| n.id).collect()
}

#[test]
fn toggling_twice_restores_membership() {
    let mut store = seeded_store();
    for kind in EntityKind::ALL {
        let before = store.is_on(kind, 4);
        store.toggle(kind, 4);
        assert_ne!(store.is_on(kind, 4), before, "{kind} did not flip");
        store.toggle(kind, 4);
        assert_eq!(store.is_on(kind, 4), before, "{kind} did not restore");
    }
}

#[test]
fn toggling_one_id_leaves_others_alone() {
    let mut store = seeded_store();
    store.toggle(EntityKind::Like, 1);

    assert!(store.is_on(EntityKind::Like, 1));
    assert!(!store.is_on(EntityKind::Like, 2));
    assert!(!store.is_on(EntityKind::Save, 1));
}

#[test]
fn displayed_like_count_tracks_membership() {
    let mut store = seeded_store();
    assert_eq!(store.displayed_count(EntityKind::Like, 1, 234), 234);
    store.toggle(EntityKind::Like, 1);
    assert_eq!(store.displayed_count(EntityKind::Like, 1, 234), 235);
    store.toggle(EntityKind::Like, 1);
    assert_eq!(store.displayed_count(EntityKind::Like, 1, 234), 234);
}

#[test]
fn seeded_unread_notifications_are_the_first_three() {
    let store = seeded_store();
    assert_eq!(store.notifications().len(), 7);
    assert_eq!(ids(&store.filter_notifications(NotificationFilter::Unread)), vec![1, 2, 3]);
    assert_eq!(store.unread_count(), 3);
}

#[test]
fn mark_all_read_empties_the_unread_filter() {
    let mut store = seeded_store();
    assert_eq!(store.mark_all_read(), 3);

    assert!(store.filter_notifications(NotificationFilter::Unread).is_empty());
    assert_eq!(store.filter_notifications(NotificationFilter::All).len(), 7);
    assert_eq!(store.mark_all_read(), 0);
}

#[test]
fn mark_read_is_idempotent_and_ignores_unknown_ids() {
    let mut store = seeded_store();
    assert!(store.mark_read(2));
    assert!(!store.mark_read(2));
    assert_eq!(ids(&store.filter_notifications(NotificationFilter::Unread)), vec![1, 3]);

    store.mark_read(999);
    assert_eq!(store.filter_notifications(NotificationFilter::All).len(), 7);
}

#[test]
fn all_filter_ignores_read_state() {
    let mut store = seeded_store();
    let before = store.filter_notifications(NotificationFilter::All).len();
    store.mark_read(1);
    assert_eq!(store.filter_notifications(NotificationFilter::All).len(), before);
}

#[test]
fn category_filters_reunite_into_all() {
    let store = seeded_store();
    let mut union: Vec<u64> = [
        NotificationFilter::Likes,
        NotificationFilter::Follows,
        NotificationFilter::Comments,
    ]
    .into_iter()
    .flat_map(|filter| ids(&store.filter_notifications(filter)))
    .collect();
    union.sort_unstable();

    assert_eq!(union, ids(&store.filter_notifications(NotificationFilter::All)));
    assert_eq!(ids(&store.filter_notifications(NotificationFilter::Likes)), vec![1, 2, 7]);
    assert_eq!(ids(&store.filter_notifications(NotificationFilter::Follows)), vec![4, 5]);
    assert_eq!(ids(&store.filter_notifications(NotificationFilter::Comments)), vec![3, 6]);
}

#[test]
fn members_are_sorted_and_seeded_follows_present() {
    let mut store = seeded_store();
    assert_eq!(store.members(EntityKind::Follow), vec![4]);

    store.toggle(EntityKind::Save, 9);
    store.toggle(EntityKind::Save, 2);
    assert_eq!(store.members(EntityKind::Save), vec![2, 9]);
}

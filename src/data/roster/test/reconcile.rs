use super::*;

const AS_OF: &str = "2024-06-01 12:00:00 CET";

fn live(id: u64, name: &str) -> LiveMember {
    LiveMember::new(id, name, false)
}

/// Tests reconciling a roster that knows one of two live members.
///
/// Expected: Ok(1) with exactly Bob's record appended
#[tokio::test]
async fn appends_missing_member() {
    let test = TestBuilder::new().with_roster_line(ALICE).build().unwrap();
    let store = RosterStore::new(test.roster_path());

    let added = store
        .reconcile(&store.begin_sweep(), &[live(1, "Alice"), live(2, "Bob")], AS_OF)
        .await
        .unwrap();

    assert_eq!(added, 1);
    assert_eq!(
        test.roster_lines().unwrap(),
        vec![ALICE.to_string(), "2|Bob|2024-06-01 12:00:00 CET".to_string()]
    );
}

/// Tests that a second reconcile with the same members changes nothing.
///
/// Expected: Ok(0) on the second call with the file unchanged
#[tokio::test]
async fn is_idempotent() {
    let test = TestBuilder::new().with_roster_line(ALICE).build().unwrap();
    let store = RosterStore::new(test.roster_path());
    let members = [live(3, "Carol"), live(1, "Alice"), live(2, "Bob")];

    let first = store
        .reconcile(&store.begin_sweep(), &members, AS_OF)
        .await
        .unwrap();
    let after_first = test.read_roster().unwrap();
    let second = store
        .reconcile(
            &store.begin_sweep(),
            &members,
            "2024-06-01 13:00:00 CET",
        )
        .await
        .unwrap();

    assert_eq!(first, 2);
    assert_eq!(second, 0);
    assert_eq!(test.read_roster().unwrap(), after_first);
}

/// Tests that new records are written sorted by id with one shared timestamp.
///
/// Expected: Ok(3) with lines ordered by ascending id
#[tokio::test]
async fn writes_batch_sorted_by_id() {
    let test = TestBuilder::new().build().unwrap();
    let store = RosterStore::new(test.roster_path());

    let added = store
        .reconcile(
            &store.begin_sweep(),
            &[live(30, "Zed"), live(4, "Amy"), live(100, "Max")],
            AS_OF,
        )
        .await
        .unwrap();

    assert_eq!(added, 3);
    assert_eq!(
        test.roster_lines().unwrap(),
        vec![
            "4|Amy|2024-06-01 12:00:00 CET".to_string(),
            "30|Zed|2024-06-01 12:00:00 CET".to_string(),
            "100|Max|2024-06-01 12:00:00 CET".to_string(),
        ]
    );
}

/// Tests that bot accounts are never recorded.
///
/// Expected: Ok(1) with only the human member appended
#[tokio::test]
async fn skips_bots() {
    let test = TestBuilder::new().build().unwrap();
    let store = RosterStore::new(test.roster_path());

    let added = store
        .reconcile(
            &store.begin_sweep(),
            &[LiveMember::new(9, "HelperBot", true), live(2, "Bob")],
            AS_OF,
        )
        .await
        .unwrap();

    assert_eq!(added, 1);
    assert_eq!(store.load_known_ids().await.unwrap(), BTreeSet::from([2]));
}

/// Tests a member reported by several guilds.
///
/// Expected: Ok(1) with a single record using the first name seen
#[tokio::test]
async fn deduplicates_live_members() {
    let test = TestBuilder::new().build().unwrap();
    let store = RosterStore::new(test.roster_path());

    let added = store
        .reconcile(&store.begin_sweep(), &[live(2, "Bob"), live(2, "Bobby")], AS_OF)
        .await
        .unwrap();

    assert_eq!(added, 1);
    assert_eq!(
        test.roster_lines().unwrap(),
        vec!["2|Bob|2024-06-01 12:00:00 CET".to_string()]
    );
}

/// Tests that legacy lines neither block nor disturb reconciliation.
///
/// Verifies a legacy name-only line does not count as a known member and is kept
/// in place when new records are appended.
///
/// Expected: Ok(1) with the legacy line still first
#[tokio::test]
async fn ignores_legacy_lines() {
    let test = TestBuilder::new()
        .with_roster_lines([LEGACY, "Bob"])
        .build()
        .unwrap();
    let store = RosterStore::new(test.roster_path());

    let added = store
        .reconcile(&store.begin_sweep(), &[live(2, "Bob")], AS_OF)
        .await
        .unwrap();

    assert_eq!(added, 1);
    assert_eq!(
        test.roster_lines().unwrap(),
        vec![
            LEGACY.to_string(),
            "Bob".to_string(),
            "2|Bob|2024-06-01 12:00:00 CET".to_string()
        ]
    );
}

/// Tests reconciling when everyone is already known, with no roster file.
///
/// Expected: Ok(0) and no file created
#[tokio::test]
async fn nothing_to_append_creates_no_file() {
    let test = TestBuilder::new().build().unwrap();
    let store = RosterStore::new(test.roster_path());

    let added = store
        .reconcile(&store.begin_sweep(), &[LiveMember::new(9, "HelperBot", true)], AS_OF)
        .await
        .unwrap();

    assert_eq!(added, 0);
    assert!(!test.roster_exists());
}

/// Tests that records removed after a sweep come back on the next one.
///
/// Expected: Ok(1) re-appending the removed member
#[tokio::test]
async fn reappends_after_removal() {
    let test = TestBuilder::new()
        .with_roster_lines([ALICE, BOB])
        .build()
        .unwrap();
    let store = RosterStore::new(test.roster_path());

    store.remove(2).await.unwrap();
    let added = store
        .reconcile(&store.begin_sweep(), &[live(1, "Alice"), live(2, "Bob")], AS_OF)
        .await
        .unwrap();

    assert_eq!(added, 1);
    assert_eq!(store.load_known_ids().await.unwrap(), BTreeSet::from([1, 2]));
}

/// Tests concurrent reconciles through a shared store.
///
/// Verifies the internal lock keeps the read-diff-append sequence atomic so two
/// overlapping sweeps never write the same member twice.
///
/// Expected: Ok with one record per member
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_reconciles_do_not_duplicate() {
    let test = TestBuilder::new().build().unwrap();
    let store = std::sync::Arc::new(RosterStore::new(test.roster_path()));
    let members: Vec<LiveMember> = (1..=50).map(|id| live(id, "member")).collect();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let store = store.clone();
            let members = members.clone();
            tokio::spawn(async move {
                let sweep = store.begin_sweep();
                store.reconcile(&sweep, &members, AS_OF).await.unwrap()
            })
        })
        .collect();

    let mut total = 0;
    for handle in handles {
        total += handle.await.unwrap();
    }

    assert_eq!(total, 50);
    assert_eq!(test.roster_lines().unwrap().len(), 50);
}

/// Tests a member leaving while the live member list is being fetched.
///
/// Verifies the departed member is not re-appended from the list taken before they
/// left, while the remaining live members are still reconciled.
///
/// Expected: Ok(1) with only Carol added and Bob gone
#[tokio::test]
async fn skips_members_removed_during_sweep() {
    let test = TestBuilder::new()
        .with_roster_lines([ALICE, BOB])
        .build()
        .unwrap();
    let store = RosterStore::new(test.roster_path());

    let sweep = store.begin_sweep();
    let fetched = [live(1, "Alice"), live(2, "Bob"), live(3, "Carol")];
    store.remove(2).await.unwrap();
    let added = store.reconcile(&sweep, &fetched, AS_OF).await.unwrap();

    assert_eq!(added, 1);
    assert_eq!(
        test.roster_lines().unwrap(),
        vec![ALICE.to_string(), "3|Carol|2024-06-01 12:00:00 CET".to_string()]
    );
}

/// Tests a member with no record leaving while the live list is fetched.
///
/// Expected: Ok(0) and no file created
#[tokio::test]
async fn skips_unrecorded_member_removed_during_sweep() {
    let test = TestBuilder::new().build().unwrap();
    let store = RosterStore::new(test.roster_path());

    let sweep = store.begin_sweep();
    store.remove(4).await.unwrap();
    let added = store
        .reconcile(&sweep, &[live(4, "Dave")], AS_OF)
        .await
        .unwrap();

    assert_eq!(added, 0);
    assert!(!test.roster_exists());
}

/// Tests that a departure only affects sweeps already open when it happened.
///
/// Expected: Ok(1) from a sweep begun after the removal
#[tokio::test]
async fn later_sweep_reappends_member_still_live() {
    let test = TestBuilder::new()
        .with_roster_lines([ALICE, BOB])
        .build()
        .unwrap();
    let store = RosterStore::new(test.roster_path());

    let stale = store.begin_sweep();
    store.remove(2).await.unwrap();
    drop(stale);

    let added = store
        .reconcile(&store.begin_sweep(), &[live(1, "Alice"), live(2, "Bob")], AS_OF)
        .await
        .unwrap();

    assert_eq!(added, 1);
    assert_eq!(store.load_known_ids().await.unwrap(), BTreeSet::from([1, 2]));
}

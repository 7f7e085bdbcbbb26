use super::*;

/// Tests reading all lines in file order.
///
/// Expected: Ok with known and opaque lines in their original order
#[tokio::test]
async fn returns_lines_in_order() {
    let test = TestBuilder::new()
        .with_roster_lines([LEGACY, BOB, ALICE])
        .build()
        .unwrap();
    let store = RosterStore::new(test.roster_path());

    let records = store.records().await.unwrap();

    assert_eq!(records.len(), 3);
    assert_eq!(records[0], RosterLine::Opaque(LEGACY.to_string()));
    assert_eq!(records[1].id(), Some(2));
    assert_eq!(records[2].id(), Some(1));
    assert!(
        matches!(&records[2], RosterLine::Known { display_name, .. } if display_name == "Alice")
    );
}

#[tokio::test]
async fn missing_file_has_no_records() {
    let test = TestBuilder::new().build().unwrap();
    let store = RosterStore::new(test.roster_path());

    assert!(store.records().await.unwrap().is_empty());
}

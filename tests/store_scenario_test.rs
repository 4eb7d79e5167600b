use anyhow::Result;
use student_roster::{RosterError, StudentStore};

fn class_of_five() -> StudentStore {
    let mut store = StudentStore::new();
    store.insert("Fatir", "M.Kausar", 40208, 900.0, "A");
    store.insert("Shoaib", "M.Ali", 40209, 950.0, "A+");
    store.insert("Mirza", "M.Alyan", 40210, 1000.0, "A+");
    store.insert("M.Faraz", "Jimmy", 40211, 1100.0, "B");
    store.insert("Fahad Ali", "Mr.Random", 40212, 1000.0, "A+");
    store
}

/// 範例班級：新增五位學生後的統計、查詢與刪除
#[test]
fn test_sample_class_walkthrough() -> Result<()> {
    let mut store = class_of_five();

    assert_eq!(store.count(), 5);
    assert_eq!(store.average_marks(), 990.0);
    assert_eq!(store.highest_marks(), 1100.0);

    let a_plus: Vec<u32> = store
        .find_by_grade("A+")
        .into_iter()
        .map(|record| record.roll_no)
        .collect();
    assert_eq!(a_plus, vec![40209, 40210, 40212]);

    let removed = store.delete(40208)?;
    assert_eq!(removed.name, "Fatir");
    assert_eq!(removed.father_name, "M.Kausar");
    assert_eq!(store.count(), 4);
    assert!(store.find_by_roll_no(40208).is_none());

    Ok(())
}

#[test]
fn test_exact_name_lookup_ignores_case() {
    let store = class_of_five();
    let upper = store.find_by_exact_name("FATIR");
    let lower = store.find_by_exact_name("fatir");
    assert!(upper.is_some());
    assert_eq!(upper, lower);
}

#[test]
fn test_empty_store_has_no_statistics() {
    let mut store = StudentStore::new();
    assert_eq!(store.count(), 0);
    assert_eq!(store.average_marks(), 0.0);
    assert_eq!(store.highest_marks(), 0.0);
    assert!(store.statistics().is_none());
    assert!(store.find_by_roll_no(40208).is_none());
    assert!(store.find_by_partial_name("fa").is_empty());
    assert!(matches!(
        store.delete(40208),
        Err(RosterError::NotFound { roll_no: 40208 })
    ));
}

#[test]
fn test_delete_everything_then_reuse() -> Result<()> {
    let mut store = class_of_five();
    for roll_no in [40212, 40208, 40210, 40209, 40211] {
        store.delete(roll_no)?;
    }
    assert!(store.is_empty());
    assert_eq!(store.count(), 0);
    assert!(store.statistics().is_none());

    store.try_insert("Fatir", "M.Kausar", 40208, 900.0, "A")?;
    assert_eq!(store.count(), 1);
    assert_eq!(store.statistics().map(|s| s.lowest), Some(900.0));
    Ok(())
}

#[test]
fn test_duplicate_policies() {
    let mut lenient = class_of_five();
    lenient.insert("Second Fatir", "Someone", 40208, 10.0, "F");
    assert_eq!(lenient.count(), 6);
    assert_eq!(lenient.find_by_roll_no(40208).map(|r| r.name.as_str()), Some("Fatir"));

    let mut strict = class_of_five();
    let err = strict
        .try_insert("Second Fatir", "Someone", 40208, 10.0, "F")
        .unwrap_err();
    assert!(matches!(err, RosterError::DuplicateKey { roll_no: 40208 }));
    assert_eq!(strict.count(), 5);
}

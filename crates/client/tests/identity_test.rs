use tabletime_client::identity::IdentityStore;
use tabletime_core::models::player::Player;

#[test]
fn test_identity_survives_reload() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("identity");

    let store = IdentityStore::new(&path);
    assert_eq!(store.load(), None);

    store.save(Player::Three).unwrap();
    assert_eq!(store.load(), Some(Player::Three));

    // A fresh store over the same path sees the persisted choice.
    let reopened = IdentityStore::new(&path);
    assert_eq!(reopened.load(), Some(Player::Three));
}

#[test]
fn test_clear_forgets_identity() {
    let dir = tempfile::tempdir().unwrap();
    let store = IdentityStore::new(dir.path().join("identity"));

    store.save(Player::One).unwrap();
    store.clear().unwrap();
    assert_eq!(store.load(), None);

    // Clearing twice is fine.
    store.clear().unwrap();
}

#[test]
fn test_garbage_contents_load_as_unset() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("identity");
    std::fs::write(&path, "Player 9\n").unwrap();

    let store = IdentityStore::new(&path);
    assert_eq!(store.load(), None);
}

#[test]
fn test_save_creates_parent_directories() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested/state/identity");

    let store = IdentityStore::new(&path);
    store.save(Player::Two).unwrap();
    assert_eq!(store.load(), Some(Player::Two));
}

use rolodex::codec;
use rolodex::collection::RecordCollection;
use rolodex::error::RolodexError;
use rolodex::gateway::PersistenceGateway;
use rolodex::model::Record;
use rolodex::prefs::{FilePreferences, InMemoryPreferences, PreferenceStore, LAST_PATH_KEY};
use rolodex::schema::Field;
use rolodex::session::EditSession;
use std::fs;
use tempfile::TempDir;

fn hans_and_ruth() -> Vec<Record> {
    vec![
        Record::new("Hans", "Muster")
            .with_street("Bahnhofstrasse 1")
            .with_postal_code(8001)
            .with_city("Zuerich"),
        Record::new("Ruth", "Mueller")
            .with_street("Marktgasse 7")
            .with_postal_code(3011)
            .with_city("Bern"),
    ]
}

#[test]
fn save_then_load_reproduces_collection() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("contacts.xml");
    let collection = RecordCollection::with_records(hans_and_ruth());

    let mut gateway = PersistenceGateway::new(InMemoryPreferences::new());
    gateway.save(&path, &collection).unwrap();

    let mut fresh = RecordCollection::new();
    gateway.load(&path, &mut fresh).unwrap();
    assert_eq!(fresh.snapshot(), collection.snapshot());
}

#[test]
fn wrong_root_leaves_collection_untouched() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("people.xml");
    fs::write(
        &path,
        "<?xml version=\"1.0\"?><people><model><firstName>X</firstName></model></people>",
    )
    .unwrap();

    let mut collection = RecordCollection::with_records(hans_and_ruth());
    let mut gateway = PersistenceGateway::new(InMemoryPreferences::new());
    let err = gateway.load(&path, &mut collection).unwrap_err();

    assert!(matches!(err, RolodexError::MalformedDocument(_)));
    assert_eq!(collection.snapshot(), hans_and_ruth().as_slice());
}

#[test]
fn non_numeric_postal_code_is_malformed() {
    let bytes = b"<models><model><firstName>Hans</firstName><postalCode>abc</postalCode></model></models>";
    assert!(matches!(
        codec::decode(bytes),
        Err(RolodexError::MalformedDocument(_))
    ));
}

#[test]
fn edit_save_reload_keeps_birthday() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("contacts.xml");
    let mut collection = RecordCollection::with_records(hans_and_ruth());

    let mut session = EditSession::begin_edit(&collection, 1).unwrap();
    session.stage_field(Field::Birthday, "1971-10-02").unwrap();
    collection.commit(session.confirm().unwrap()).unwrap();

    let mut gateway = PersistenceGateway::new(InMemoryPreferences::new());
    gateway.save(&path, &collection).unwrap();

    let mut fresh = RecordCollection::new();
    gateway.load(&path, &mut fresh).unwrap();
    assert_eq!(
        fresh.snapshot()[1].birthday.map(|d| d.to_string()),
        Some("1971-10-02".to_string())
    );
    assert!(fresh.snapshot()[0].birthday.is_none());
}

#[test]
fn remembered_path_survives_restart() {
    let home = TempDir::new().unwrap();
    let data = TempDir::new().unwrap();
    let path = data.path().join("contacts.xml");

    {
        let prefs = FilePreferences::open(home.path()).unwrap();
        let mut gateway = PersistenceGateway::new(prefs);
        gateway
            .save(&path, &RecordCollection::with_records(hans_and_ruth()))
            .unwrap();
    }

    let prefs = FilePreferences::open(home.path()).unwrap();
    assert_eq!(
        prefs.get(LAST_PATH_KEY).as_deref(),
        Some(path.to_string_lossy().as_ref())
    );

    let mut gateway = PersistenceGateway::new(prefs);
    let mut collection = RecordCollection::new();
    assert_eq!(gateway.restore_last(&mut collection).unwrap(), Some(path));
    assert_eq!(collection.len(), 2);
}

#[test]
fn failed_save_keeps_previous_remembered_path() {
    let dir = TempDir::new().unwrap();
    let good = dir.path().join("good.xml");
    let bad = dir.path().join("missing-dir").join("bad.xml");
    let collection = RecordCollection::with_records(hans_and_ruth());

    let mut gateway = PersistenceGateway::new(InMemoryPreferences::new());
    gateway.save(&good, &collection).unwrap();
    assert!(gateway.save(&bad, &collection).is_err());
    assert_eq!(gateway.last_path(), Some(good));
}

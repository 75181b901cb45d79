use gradebook::{Gradebook, JsonStore, LocalStorage};
use tempfile::TempDir;

fn populated_gradebook() -> Gradebook {
    let mut gradebook = Gradebook::new();
    gradebook.add_school("school 1");
    gradebook.add_student("school 1", "Jo Doe").unwrap();
    gradebook.add_student("school 1", "Ana Roe").unwrap();
    gradebook.add_course("school 1", "math").unwrap();
    gradebook
        .add_grade("school 1", "math", "Jo Doe", "test1", 6)
        .unwrap();
    gradebook
        .add_grade("school 1", "math", "Jo Doe", "test2", 8)
        .unwrap();
    gradebook
        .add_grade("school 1", "math", "Ana Roe", "test1", 4)
        .unwrap();
    gradebook
}

#[test]
fn round_trip_reproduces_equal_structure() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir
        .path()
        .join("school_data.json")
        .to_str()
        .unwrap()
        .to_string();

    let gradebook = populated_gradebook();
    let store = JsonStore::new(LocalStorage::new());

    store.save(&path, &gradebook);
    let reloaded = store.load(&path);

    assert_eq!(reloaded, gradebook);
    // roster order survives the trip
    assert_eq!(
        reloaded.schools["school 1"].students,
        vec!["Jo Doe", "Ana Roe"]
    );
}

#[test]
fn missing_file_loads_as_empty_gradebook() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir
        .path()
        .join("nope.json")
        .to_str()
        .unwrap()
        .to_string();

    let store = JsonStore::new(LocalStorage::new());
    assert!(store.load(&path).is_empty());
}

#[test]
fn corrupt_file_loads_as_empty_gradebook() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("broken.json");
    std::fs::write(&path, "{ this is not json").unwrap();

    let store = JsonStore::new(LocalStorage::new());
    assert!(store.load(path.to_str().unwrap()).is_empty());
}

#[test]
fn save_creates_missing_parent_directories() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir
        .path()
        .join("nested/dir/school_data.json")
        .to_str()
        .unwrap()
        .to_string();

    let gradebook = populated_gradebook();
    let store = JsonStore::new(LocalStorage::new());

    store.save(&path, &gradebook);
    assert_eq!(store.load(&path), gradebook);
}

#[test]
fn wire_format_matches_persisted_representation() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("school_data.json");

    let store = JsonStore::new(LocalStorage::new());
    store.save(path.to_str().unwrap(), &populated_gradebook());

    let raw = std::fs::read_to_string(&path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();

    // gradebook -> school -> { students: [..], courses: course -> student -> test -> grade }
    assert_eq!(value["school 1"]["students"][0], "Jo Doe");
    assert_eq!(value["school 1"]["students"][1], "Ana Roe");
    assert_eq!(value["school 1"]["courses"]["math"]["Jo Doe"]["test1"], 6);
    assert_eq!(value["school 1"]["courses"]["math"]["Jo Doe"]["test2"], 8);
    assert_eq!(value["school 1"]["courses"]["math"]["Ana Roe"]["test1"], 4);
}

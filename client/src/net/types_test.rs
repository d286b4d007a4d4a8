use super::*;

// =============================================================
// Helpers
// =============================================================

fn make_animal() -> Animal {
    Animal {
        id: 3,
        name: "Rex".to_owned(),
        species: Species::Dog,
        breed: "Vira-lata".to_owned(),
        age: 4,
        tutor_id: 1,
        photo_url: None,
    }
}

// =============================================================
// User
// =============================================================

#[test]
fn user_deserializes_numeric_id() {
    let user: User = serde_json::from_str(r#"{"id":7,"name":"Ana","email":"ana@hotel.com"}"#).unwrap();
    assert_eq!(user.id, 7);
    assert_eq!(user.name, "Ana");
}

#[test]
fn user_accepts_string_id() {
    let user: User = serde_json::from_str(r#"{"id":"12","name":"Bia","email":"b@hotel.com"}"#).unwrap();
    assert_eq!(user.id, 12);
}

#[test]
fn user_rejects_non_numeric_string_id() {
    let result = serde_json::from_str::<User>(r#"{"id":"abc","name":"Bia","email":"b@hotel.com"}"#);
    assert!(result.is_err());
}

#[test]
fn user_rejects_fractional_id() {
    let result = serde_json::from_str::<User>(r#"{"id":1.5,"name":"Bia","email":"b@hotel.com"}"#);
    assert!(result.is_err());
}

#[test]
fn user_serializes_id_as_number() {
    let user = User { id: 7, name: "Ana".to_owned(), email: "ana@hotel.com".to_owned() };
    let json = serde_json::to_value(&user).unwrap();
    assert_eq!(json, serde_json::json!({"id": 7, "name": "Ana", "email": "ana@hotel.com"}));
}

// =============================================================
// Species
// =============================================================

#[test]
fn species_uses_portuguese_wire_values() {
    assert_eq!(serde_json::to_string(&Species::Cat).unwrap(), "\"gato\"");
    assert_eq!(serde_json::to_string(&Species::Dog).unwrap(), "\"cachorro\"");
}

#[test]
fn species_from_wire_matches_as_str() {
    for species in Species::ALL {
        assert_eq!(Species::from_wire(species.as_str()), Some(species));
    }
    assert_eq!(Species::from_wire("Gato"), None);
    assert_eq!(Species::from_wire(""), None);
}

#[test]
fn species_labels() {
    assert_eq!(Species::Cat.label(), "Gato");
    assert_eq!(Species::Dog.label(), "Cachorro");
}

// =============================================================
// Animal
// =============================================================

#[test]
fn animal_uses_camel_case_fields() {
    let json = serde_json::to_value(make_animal()).unwrap();
    assert_eq!(json["tutorId"], 1);
    assert!(json.get("tutor_id").is_none());
    assert!(json.get("photoUrl").is_none(), "absent photo should not be serialized");
}

#[test]
fn animal_deserializes_from_service_payload() {
    let animal: Animal = serde_json::from_str(
        r#"{"id":"3","name":"Mia","species":"gato","breed":"Siamês","age":2,"tutorId":"1","photoUrl":"https://x.test/mia.png"}"#,
    )
    .unwrap();
    assert_eq!(animal.id, 3);
    assert_eq!(animal.species, Species::Cat);
    assert_eq!(animal.tutor_id, 1);
    assert_eq!(animal.photo_url.as_deref(), Some("https://x.test/mia.png"));
}

#[test]
fn animal_accepts_integral_float_age() {
    let animal: Animal = serde_json::from_str(
        r#"{"id":3,"name":"Mia","species":"gato","breed":"Siamês","age":2.0,"tutorId":1}"#,
    )
    .unwrap();
    assert_eq!(animal.age, 2);
}

#[test]
fn animal_rejects_negative_age() {
    let result = serde_json::from_str::<Animal>(
        r#"{"id":3,"name":"Mia","species":"gato","breed":"Siamês","age":-1,"tutorId":1}"#,
    );
    assert!(result.is_err());
}

#[test]
fn animal_rejects_unknown_species() {
    let result = serde_json::from_str::<Animal>(
        r#"{"id":3,"name":"Mia","species":"peixe","breed":"Betta","age":1,"tutorId":1}"#,
    );
    assert!(result.is_err());
}

use super::*;

fn tutor_form(name: &str, email: &str, phone: &str) -> TutorForm {
    TutorForm { name: name.to_owned(), email: email.to_owned(), phone: phone.to_owned() }
}

fn animal_form() -> AnimalForm {
    AnimalForm {
        name: "Rex".to_owned(),
        species: "cachorro".to_owned(),
        breed: "Labrador".to_owned(),
        age: "4".to_owned(),
        tutor_id: "2".to_owned(),
        photo_url: String::new(),
    }
}

// =============================================================
// Form mode
// =============================================================

#[test]
fn form_mode_from_route_param() {
    assert_eq!(FormMode::from_param(None), FormMode::Create);
    assert_eq!(FormMode::from_param(Some("12")), FormMode::Edit(12));
    assert_eq!(FormMode::from_param(Some("abc")), FormMode::InvalidId);
    assert!(FormMode::Create.is_create());
    assert!(!FormMode::Edit(1).is_create());
}

#[test]
fn invalid_route_id_never_saves() {
    assert_eq!(FormMode::Create.save_target(), Some(SaveTarget::Create));
    assert_eq!(FormMode::Edit(12).save_target(), Some(SaveTarget::Update(12)));
    assert_eq!(FormMode::from_param(Some("abc")).save_target(), None);
}

#[test]
fn save_label_reflects_saving() {
    assert_eq!(save_label(true), "Salvando...");
    assert_eq!(save_label(false), "Salvar");
}

// =============================================================
// Login
// =============================================================

#[test]
fn validate_login_trims_email_and_requires_both() {
    assert_eq!(validate_login("  a@b.com ", "pw"), Ok(("a@b.com".to_owned(), "pw".to_owned())));
    assert_eq!(validate_login("   ", "pw"), Err("Informe email e senha."));
    assert_eq!(validate_login("a@b.com", ""), Err("Informe email e senha."));
}

#[test]
fn validate_login_keeps_password_whitespace() {
    assert_eq!(validate_login("a@b.com", " pw "), Ok(("a@b.com".to_owned(), " pw ".to_owned())));
}

// =============================================================
// Tutor
// =============================================================

#[test]
fn valid_tutor_is_trimmed() {
    let input = validate_tutor(&tutor_form(" Carla ", " carla@hotel.com ", " (11) 99999-0000 ")).unwrap();
    assert_eq!(
        input,
        TutorInput {
            name: "Carla".to_owned(),
            email: "carla@hotel.com".to_owned(),
            phone: "(11) 99999-0000".to_owned(),
        }
    );
}

#[test]
fn empty_tutor_reports_every_required_field() {
    let errors = validate_tutor(&TutorForm::default()).unwrap_err();
    assert_eq!(errors.len(), 3);
    assert_eq!(errors.get("name"), Some("Nome é obrigatório"));
    assert_eq!(errors.get("email"), Some("Email é obrigatório"));
    assert_eq!(errors.get("phone"), Some("Telefone é obrigatório"));
}

#[test]
fn tutor_name_needs_two_characters() {
    let errors = validate_tutor(&tutor_form("C", "c@hotel.com", "1234")).unwrap_err();
    assert_eq!(errors.get("name"), Some("Nome deve ter pelo menos 2 caracteres"));
    assert_eq!(errors.len(), 1);
}

#[test]
fn tutor_name_length_counts_characters_not_bytes() {
    assert!(validate_tutor(&tutor_form("É", "c@hotel.com", "1234")).is_err());
    assert!(validate_tutor(&tutor_form("Zé", "c@hotel.com", "1234")).is_ok());
}

#[test]
fn tutor_email_pattern_is_case_insensitive() {
    assert!(validate_tutor(&tutor_form("Carla", "CARLA@Hotel.COM", "1234")).is_ok());
}

#[test]
fn tutor_email_rejects_malformed_addresses() {
    for email in ["carla", "carla@hotel", "@hotel.com", "carla@hotel.c", "carla hotel@x.com"] {
        let errors = validate_tutor(&tutor_form("Carla", email, "1234")).unwrap_err();
        assert_eq!(errors.get("email"), Some("Email inválido"), "expected {email:?} to be rejected");
    }
}

#[test]
fn tutor_phone_allows_digits_spaces_parens_dashes() {
    assert!(validate_tutor(&tutor_form("Carla", "c@hotel.com", "(11) 9999-0000")).is_ok());
    let errors = validate_tutor(&tutor_form("Carla", "c@hotel.com", "+55 11 9999")).unwrap_err();
    assert_eq!(errors.get("phone"), Some("Telefone inválido"));
}

#[test]
fn tutor_form_from_tutor_copies_fields() {
    let tutor = Tutor {
        id: 4,
        name: "Carla".to_owned(),
        email: "c@hotel.com".to_owned(),
        phone: "1234".to_owned(),
    };
    assert_eq!(TutorForm::from(&tutor), tutor_form("Carla", "c@hotel.com", "1234"));
}

// =============================================================
// Animal
// =============================================================

#[test]
fn valid_animal_builds_input() {
    let input = validate_animal(&animal_form()).unwrap();
    assert_eq!(
        input,
        AnimalInput {
            name: "Rex".to_owned(),
            species: Species::Dog,
            breed: "Labrador".to_owned(),
            age: 4,
            tutor_id: 2,
            photo_url: None,
        }
    );
}

#[test]
fn empty_animal_reports_required_fields() {
    let errors = validate_animal(&AnimalForm::default()).unwrap_err();
    assert_eq!(errors.get("name"), Some("Nome é obrigatório"));
    assert_eq!(errors.get("species"), Some("Espécie é obrigatória"));
    assert_eq!(errors.get("breed"), Some("Raça é obrigatória"));
    assert_eq!(errors.get("age"), Some("Idade é obrigatória"));
    assert_eq!(errors.get("tutor_id"), Some("Tutor é obrigatório"));
    assert_eq!(errors.get("photo_url"), None);
}

#[test]
fn animal_age_bounds() {
    for (raw, expected) in [
        ("0", Ok(0)),
        ("30", Ok(30)),
        ("31", Err("Idade deve ser menor ou igual a 30")),
        ("-1", Err("Idade deve ser maior ou igual a 0")),
        ("2.5", Err("Idade deve ser um número inteiro")),
        ("abc", Err("Idade deve ser um número inteiro")),
    ] {
        let form = AnimalForm { age: raw.to_owned(), ..animal_form() };
        let result = validate_animal(&form).map(|input| input.age).map_err(|e| e.get("age").unwrap_or(""));
        assert_eq!(result, expected, "age {raw:?}");
    }
}

#[test]
fn animal_species_must_be_known() {
    let form = AnimalForm { species: "peixe".to_owned(), ..animal_form() };
    let errors = validate_animal(&form).unwrap_err();
    assert_eq!(errors.get("species"), Some("Espécie é obrigatória"));
}

#[test]
fn animal_breed_needs_two_characters() {
    let form = AnimalForm { breed: "L".to_owned(), ..animal_form() };
    let errors = validate_animal(&form).unwrap_err();
    assert_eq!(errors.get("breed"), Some("Raça deve ter pelo menos 2 caracteres"));
}

#[test]
fn animal_photo_url_is_optional_but_checked() {
    let form = AnimalForm { photo_url: "https://fotos.test/rex.JPG".to_owned(), ..animal_form() };
    assert_eq!(validate_animal(&form).unwrap().photo_url.as_deref(), Some("https://fotos.test/rex.JPG"));

    for url in ["ftp://fotos.test/rex.jpg", "https://fotos.test/rex.bmp", "rex.png"] {
        let form = AnimalForm { photo_url: url.to_owned(), ..animal_form() };
        let errors = validate_animal(&form).unwrap_err();
        assert_eq!(
            errors.get("photo_url"),
            Some("URL inválida ou formato de imagem não suportado"),
            "expected {url:?} to be rejected"
        );
    }
}

#[test]
fn animal_form_round_trips_existing_animal() {
    let animal = Animal {
        id: 9,
        name: "Mia".to_owned(),
        species: Species::Cat,
        breed: "Siamês".to_owned(),
        age: 2,
        tutor_id: 5,
        photo_url: Some("https://fotos.test/mia.png".to_owned()),
    };
    let input = validate_animal(&AnimalForm::from(&animal)).unwrap();
    assert_eq!(input.name, animal.name);
    assert_eq!(input.species, animal.species);
    assert_eq!(input.age, animal.age);
    assert_eq!(input.tutor_id, animal.tutor_id);
    assert_eq!(input.photo_url, animal.photo_url);
}

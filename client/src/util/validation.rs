//! Client-side form validation for the login, tutor, and animal forms.
//!
//! Forms hold raw input strings; validation turns them into typed request
//! bodies or a per-field error map the page renders under each input.
//! Messages are user-facing (Portuguese, as shown in the UI).

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use regex::Regex;

use crate::net::types::{Animal, AnimalInput, Species, Tutor, TutorInput};

pub const MIN_NAME_LEN: usize = 2;
pub const MAX_ANIMAL_AGE: u32 = 30;

fn is_email(raw: &str) -> bool {
    let re = Regex::new(r"(?i)^[A-Z0-9._%+-]+@[A-Z0-9.-]+\.[A-Z]{2,}$").expect("static email pattern");
    re.is_match(raw)
}

fn is_phone(raw: &str) -> bool {
    let re = Regex::new(r"^[\d\s()\-]+$").expect("static phone pattern");
    re.is_match(raw)
}

fn is_photo_url(raw: &str) -> bool {
    let re = Regex::new(r"(?i)^https?://.+\.(jpg|jpeg|png|gif|webp)$").expect("static photo url pattern");
    re.is_match(raw)
}

/// Per-field validation messages, in field order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormErrors {
    entries: Vec<(&'static str, &'static str)>,
}

impl FormErrors {
    pub fn get(&self, field: &str) -> Option<&'static str> {
        self.entries.iter().find(|(f, _)| *f == field).map(|(_, msg)| *msg)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    fn push(&mut self, field: &'static str, message: &'static str) {
        self.entries.push((field, message));
    }

    fn into_result<T>(self, value: impl FnOnce() -> T) -> Result<T, FormErrors> {
        if self.is_empty() { Ok(value()) } else { Err(self) }
    }
}

/// Whether a form page creates a record or edits one, from the route's `id`
/// parameter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(i64),
    /// The route carried an `id` that is not a record id.
    InvalidId,
}

impl FormMode {
    pub fn from_param(raw: Option<&str>) -> Self {
        match raw {
            None => Self::Create,
            Some(raw) => match raw.trim().parse::<i64>() {
                Ok(id) => Self::Edit(id),
                Err(_) => Self::InvalidId,
            },
        }
    }

    pub fn is_create(self) -> bool {
        matches!(self, Self::Create)
    }

    /// Request a submit should issue, or `None` when the route id is invalid
    /// and nothing may be saved.
    pub fn save_target(self) -> Option<SaveTarget> {
        match self {
            Self::Create => Some(SaveTarget::Create),
            Self::Edit(id) => Some(SaveTarget::Update(id)),
            Self::InvalidId => None,
        }
    }
}

/// Write a form submit maps to: POST a new record or PUT an existing one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SaveTarget {
    Create,
    Update(i64),
}

/// Submit button text for the tutor and animal forms.
pub fn save_label(saving: bool) -> &'static str {
    if saving { "Salvando..." } else { "Salvar" }
}

// =============================================================
// Login
// =============================================================

/// Trimmed `(email, password)` when both are present.
///
/// # Errors
///
/// Returns the inline message when either field is blank.
pub fn validate_login(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Informe email e senha.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

// =============================================================
// Tutor
// =============================================================

/// Raw tutor form input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TutorForm {
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl From<&Tutor> for TutorForm {
    fn from(tutor: &Tutor) -> Self {
        Self { name: tutor.name.clone(), email: tutor.email.clone(), phone: tutor.phone.clone() }
    }
}

/// # Errors
///
/// Returns every failing field when the form is invalid.
pub fn validate_tutor(form: &TutorForm) -> Result<TutorInput, FormErrors> {
    let mut errors = FormErrors::default();
    let name = form.name.trim();
    let email = form.email.trim();
    let phone = form.phone.trim();

    if name.is_empty() {
        errors.push("name", "Nome é obrigatório");
    } else if name.chars().count() < MIN_NAME_LEN {
        errors.push("name", "Nome deve ter pelo menos 2 caracteres");
    }

    if email.is_empty() {
        errors.push("email", "Email é obrigatório");
    } else if !is_email(email) {
        errors.push("email", "Email inválido");
    }

    if phone.is_empty() {
        errors.push("phone", "Telefone é obrigatório");
    } else if !is_phone(phone) {
        errors.push("phone", "Telefone inválido");
    }

    errors.into_result(|| TutorInput { name: name.to_owned(), email: email.to_owned(), phone: phone.to_owned() })
}

// =============================================================
// Animal
// =============================================================

/// Raw animal form input. Selects and number inputs arrive as strings.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AnimalForm {
    pub name: String,
    pub species: String,
    pub breed: String,
    pub age: String,
    pub tutor_id: String,
    pub photo_url: String,
}

impl From<&Animal> for AnimalForm {
    fn from(animal: &Animal) -> Self {
        Self {
            name: animal.name.clone(),
            species: animal.species.as_str().to_owned(),
            breed: animal.breed.clone(),
            age: animal.age.to_string(),
            tutor_id: animal.tutor_id.to_string(),
            photo_url: animal.photo_url.clone().unwrap_or_default(),
        }
    }
}

/// # Errors
///
/// Returns every failing field when the form is invalid.
pub fn validate_animal(form: &AnimalForm) -> Result<AnimalInput, FormErrors> {
    let mut errors = FormErrors::default();
    let name = form.name.trim();
    let breed = form.breed.trim();
    let photo_url = form.photo_url.trim();

    if name.is_empty() {
        errors.push("name", "Nome é obrigatório");
    } else if name.chars().count() < MIN_NAME_LEN {
        errors.push("name", "Nome deve ter pelo menos 2 caracteres");
    }

    let species = Species::from_wire(form.species.trim());
    if species.is_none() {
        errors.push("species", "Espécie é obrigatória");
    }

    if breed.is_empty() {
        errors.push("breed", "Raça é obrigatória");
    } else if breed.chars().count() < MIN_NAME_LEN {
        errors.push("breed", "Raça deve ter pelo menos 2 caracteres");
    }

    let age = match parse_age(&form.age) {
        Ok(age) => Some(age),
        Err(message) => {
            errors.push("age", message);
            None
        }
    };

    let tutor_id = form.tutor_id.trim().parse::<i64>().ok();
    if tutor_id.is_none() {
        errors.push("tutor_id", "Tutor é obrigatório");
    }

    if !photo_url.is_empty() && !is_photo_url(photo_url) {
        errors.push("photo_url", "URL inválida ou formato de imagem não suportado");
    }

    match (species, age, tutor_id) {
        (Some(species), Some(age), Some(tutor_id)) if errors.is_empty() => Ok(AnimalInput {
            name: name.to_owned(),
            species,
            breed: breed.to_owned(),
            age,
            tutor_id,
            photo_url: (!photo_url.is_empty()).then(|| photo_url.to_owned()),
        }),
        _ => Err(errors),
    }
}

fn parse_age(raw: &str) -> Result<u32, &'static str> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err("Idade é obrigatória");
    }
    let Ok(age) = raw.parse::<i64>() else {
        return Err("Idade deve ser um número inteiro");
    };
    if age < 0 {
        return Err("Idade deve ser maior ou igual a 0");
    }
    match u32::try_from(age) {
        Ok(age) if age <= MAX_ANIMAL_AGE => Ok(age),
        _ => Err("Idade deve ser menor ou igual a 30"),
    }
}

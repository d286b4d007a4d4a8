//! REST helpers for the tutor and animal resources.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds: every call fails with [`ApiError::Unavailable`] so pages and
//! state compile and test without a browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics. Non-2xx responses are
//! [`ApiError::Status`]; the page decides which message to show.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::types::{Animal, AnimalInput, Tutor, TutorInput};
use crate::config::ApiConfig;
use crate::error::ApiError;

fn tutors_endpoint(config: &ApiConfig) -> String {
    config.endpoint("tutors")
}

fn tutor_endpoint(config: &ApiConfig, id: i64) -> String {
    config.endpoint(&format!("tutors/{id}"))
}

fn animals_endpoint(config: &ApiConfig) -> String {
    config.endpoint("animals")
}

fn animal_endpoint(config: &ApiConfig, id: i64) -> String {
    config.endpoint(&format!("animals/{id}"))
}

// =============================================================
// Tutors
// =============================================================

/// `GET /tutors`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the body is unreadable.
pub async fn list_tutors(config: &ApiConfig) -> Result<Vec<Tutor>, ApiError> {
    get_json(&tutors_endpoint(config)).await
}

/// `GET /tutors/{id}`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the body is unreadable.
pub async fn get_tutor(config: &ApiConfig, id: i64) -> Result<Tutor, ApiError> {
    get_json(&tutor_endpoint(config, id)).await
}

/// `POST /tutors`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the body is unreadable.
pub async fn create_tutor(config: &ApiConfig, input: &TutorInput) -> Result<Tutor, ApiError> {
    send_json(Method::Post, &tutors_endpoint(config), input).await
}

/// `PUT /tutors/{id}`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the body is unreadable.
pub async fn update_tutor(config: &ApiConfig, id: i64, input: &TutorInput) -> Result<Tutor, ApiError> {
    send_json(Method::Put, &tutor_endpoint(config, id), input).await
}

/// `DELETE /tutors/{id}`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the server rejects it.
pub async fn delete_tutor(config: &ApiConfig, id: i64) -> Result<(), ApiError> {
    delete(&tutor_endpoint(config, id)).await
}

// =============================================================
// Animals
// =============================================================

/// `GET /animals`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the body is unreadable.
pub async fn list_animals(config: &ApiConfig) -> Result<Vec<Animal>, ApiError> {
    get_json(&animals_endpoint(config)).await
}

/// `GET /animals/{id}`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the body is unreadable.
pub async fn get_animal(config: &ApiConfig, id: i64) -> Result<Animal, ApiError> {
    get_json(&animal_endpoint(config, id)).await
}

/// `POST /animals`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the body is unreadable.
pub async fn create_animal(config: &ApiConfig, input: &AnimalInput) -> Result<Animal, ApiError> {
    send_json(Method::Post, &animals_endpoint(config), input).await
}

/// `PUT /animals/{id}`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the body is unreadable.
pub async fn update_animal(config: &ApiConfig, id: i64, input: &AnimalInput) -> Result<Animal, ApiError> {
    send_json(Method::Put, &animal_endpoint(config, id), input).await
}

/// `DELETE /animals/{id}`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the server rejects it.
pub async fn delete_animal(config: &ApiConfig, id: i64) -> Result<(), ApiError> {
    delete(&animal_endpoint(config, id)).await
}

// =============================================================
// Transport
// =============================================================

#[derive(Clone, Copy, Debug)]
enum Method {
    Post,
    Put,
}

#[cfg(feature = "csr")]
fn network_error(e: gloo_net::Error) -> ApiError {
    ApiError::Network(e.to_string())
}

#[cfg(feature = "csr")]
async fn read_json<T: DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, ApiError> {
    if !resp.ok() {
        return Err(ApiError::Status(resp.status()));
    }
    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(feature = "csr")]
async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    let resp = gloo_net::http::Request::get(url).send().await.map_err(network_error)?;
    read_json(resp).await
}

#[cfg(feature = "csr")]
async fn send_json<T: DeserializeOwned, B: Serialize>(method: Method, url: &str, body: &B) -> Result<T, ApiError> {
    let builder = match method {
        Method::Post => gloo_net::http::Request::post(url),
        Method::Put => gloo_net::http::Request::put(url),
    };
    let resp = builder
        .json(body)
        .map_err(network_error)?
        .send()
        .await
        .map_err(network_error)?;
    read_json(resp).await
}

#[cfg(feature = "csr")]
async fn delete(url: &str) -> Result<(), ApiError> {
    let resp = gloo_net::http::Request::delete(url).send().await.map_err(network_error)?;
    if !resp.ok() {
        return Err(ApiError::Status(resp.status()));
    }
    Ok(())
}

#[cfg(not(feature = "csr"))]
async fn get_json<T: DeserializeOwned>(_url: &str) -> Result<T, ApiError> {
    Err(ApiError::Unavailable)
}

#[cfg(not(feature = "csr"))]
async fn send_json<T: DeserializeOwned, B: Serialize>(_method: Method, _url: &str, _body: &B) -> Result<T, ApiError> {
    Err(ApiError::Unavailable)
}

#[cfg(not(feature = "csr"))]
async fn delete(_url: &str) -> Result<(), ApiError> {
    Err(ApiError::Unavailable)
}

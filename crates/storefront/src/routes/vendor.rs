//! Vendor menu route handlers.
//!
//! All handlers require a signed-in vendor and only touch the menu of
//! the vendor's own store.

use axum::{
    Form,
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use town_basket_core::MenuItemId;

use crate::{error::AppError, middleware::RequireVendor, state::AppState};

/// Menu item form data, shared by the add and edit handlers.
#[derive(Debug, Deserialize)]
pub struct MenuItemForm {
    pub name: String,
    /// Dollar amount as typed, e.g. `12.99` or `$12.99`.
    pub price: String,
}

/// Parse a dollar amount like `12.99` into cents.
///
/// Accepts an optional leading `$` and at most two decimal places.
fn parse_price_cents(input: &str) -> Option<u32> {
    let input = input.trim().trim_start_matches('$');
    if input.is_empty() {
        return None;
    }
    let (dollars, cents) = match input.split_once('.') {
        Some((dollars, fraction)) => {
            if fraction.is_empty() || fraction.len() > 2 {
                return None;
            }
            let mut cents: u32 = fraction.parse().ok()?;
            if fraction.len() == 1 {
                cents *= 10;
            }
            (dollars, cents)
        }
        None => (input, 0),
    };
    let dollars: u32 = dollars.parse().ok()?;
    dollars.checked_mul(100)?.checked_add(cents)
}

fn validated(form: &MenuItemForm) -> Result<(&str, u32), AppError> {
    let name = form.name.trim();
    if name.is_empty() {
        return Err(AppError::BadRequest("item name must not be empty".to_owned()));
    }
    let price_cents = parse_price_cents(&form.price)
        .ok_or_else(|| AppError::BadRequest(format!("invalid price: {}", form.price)))?;
    Ok((name, price_cents))
}

/// Add a menu item to the vendor's store.
pub async fn add_item(
    State(state): State<AppState>,
    vendor: RequireVendor,
    Form(form): Form<MenuItemForm>,
) -> Result<Response, AppError> {
    let (name, price_cents) = validated(&form)?;
    let item = state.menus().add(vendor.store.id, name, price_cents);
    tracing::info!(store = %vendor.store.id, item = %item.id, "menu item added");
    Ok(Redirect::to("/").into_response())
}

/// Edit a menu item's name and price.
pub async fn update_item(
    State(state): State<AppState>,
    vendor: RequireVendor,
    Path(id): Path<MenuItemId>,
    Form(form): Form<MenuItemForm>,
) -> Result<Response, AppError> {
    let (name, price_cents) = validated(&form)?;
    if !state.menus().update(vendor.store.id, id, name, price_cents) {
        return Err(AppError::NotFound(format!("menu item {id}")));
    }
    Ok(Redirect::to("/").into_response())
}

/// Remove a menu item from the vendor's store.
pub async fn delete_item(
    State(state): State<AppState>,
    vendor: RequireVendor,
    Path(id): Path<MenuItemId>,
) -> Result<Response, AppError> {
    if !state.menus().delete(vendor.store.id, id) {
        return Err(AppError::NotFound(format!("menu item {id}")));
    }
    tracing::info!(store = %vendor.store.id, item = %id, "menu item removed");
    Ok(Redirect::to("/").into_response())
}

/// Flip a menu item between available and sold out.
pub async fn toggle_item(
    State(state): State<AppState>,
    vendor: RequireVendor,
    Path(id): Path<MenuItemId>,
) -> Result<Response, AppError> {
    match state.menus().toggle(vendor.store.id, id) {
        Some(_) => Ok(Redirect::to("/").into_response()),
        None => Err(AppError::NotFound(format!("menu item {id}"))),
    }
}

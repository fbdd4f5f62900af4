//! View selector route handler.

use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;

use crate::{state::AppState, view::CurrentView};

/// View switch form data.
#[derive(Debug, Deserialize)]
pub struct ViewForm {
    pub view: CurrentView,
}

/// Switch between the home and dashboard views.
///
/// The switch is applied unconditionally; which screen the view maps to
/// is decided when the root screen is rendered.
pub async fn set_view(State(state): State<AppState>, Form(form): Form<ViewForm>) -> Response {
    state.view().set(form.view);
    Redirect::to("/").into_response()
}

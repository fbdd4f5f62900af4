//! Root screen handler.
//!
//! While the loading gate is active every request to `/` renders the
//! loading screen. Once the gate opens the screen is picked from the
//! signed-in identity and the view selector.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use town_basket_core::Role;

use crate::filters;
use crate::{
    content::{
        self, AdminOrderView, AnalyticsView, CustomerOrderView, DishView, RestaurantView,
        StatView, TopRestaurantView, VendorOrderView,
    },
    error::AppError,
    middleware::OptionalAuth,
    models::{MenuItem, User},
    state::AppState,
    view::CurrentView,
};

/// The screen rendered at `/` for a given identity and view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Public landing page, also shown to signed-in customers browsing home.
    Landing,
    /// Customer order dashboard.
    CustomerDashboard,
    /// Admin overview.
    Admin,
    /// Vendor menu and orders dashboard.
    Vendor,
}

/// Pick the screen for the current identity and view selector state.
///
/// Admins and vendors always land on their dashboards; the view selector
/// only matters for customers.
pub fn select_screen(user: Option<&User>, view: CurrentView) -> Screen {
    match user {
        Some(user) if user.role == Role::Admin => Screen::Admin,
        Some(user) if user.role == Role::Vendor => Screen::Vendor,
        Some(_) if view == CurrentView::Dashboard => Screen::CustomerDashboard,
        _ => Screen::Landing,
    }
}

#[derive(Template, WebTemplate)]
#[template(path = "loading.html")]
struct LoadingTemplate {
    progress: u8,
}

#[derive(Template, WebTemplate)]
#[template(path = "landing.html")]
struct LandingTemplate {
    user: Option<User>,
    dishes: Vec<DishView>,
    restaurants: Vec<RestaurantView>,
}

#[derive(Template, WebTemplate)]
#[template(path = "dashboard/customer.html")]
struct CustomerDashboardTemplate {
    user: User,
    stats: Vec<StatView>,
    orders: Vec<CustomerOrderView>,
    favorites: Vec<RestaurantView>,
}

#[derive(Template, WebTemplate)]
#[template(path = "dashboard/admin.html")]
struct AdminDashboardTemplate {
    user: User,
    stats: Vec<StatView>,
    orders: Vec<AdminOrderView>,
    top_restaurants: Vec<TopRestaurantView>,
    analytics: Vec<AnalyticsView>,
}

#[derive(Template, WebTemplate)]
#[template(path = "dashboard/vendor.html")]
struct VendorDashboardTemplate {
    user: User,
    store_name: String,
    stats: Vec<StatView>,
    menu_items: Vec<MenuItem>,
    orders: Vec<VendorOrderView>,
    analytics: Vec<AnalyticsView>,
}

/// GET handler for the root screen.
pub async fn index(
    State(state): State<AppState>,
    OptionalAuth(user): OptionalAuth,
) -> Result<impl IntoResponse, AppError> {
    if state.loading().is_loading() {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let progress = state.loading().progress().floor() as u8;
        return Ok(LoadingTemplate { progress }.into_response());
    }

    let view = state.view().get();
    let response = match select_screen(user.as_ref(), view) {
        Screen::Landing => LandingTemplate {
            user,
            dishes: content::popular_dishes(),
            restaurants: content::featured_restaurants(),
        }
        .into_response(),
        Screen::CustomerDashboard => {
            let user = user.ok_or_else(|| AppError::Internal("missing identity".to_owned()))?;
            CustomerDashboardTemplate {
                user,
                stats: content::customer_stats(),
                orders: content::customer_orders(),
                favorites: content::customer_favorites(),
            }
            .into_response()
        }
        Screen::Admin => {
            let user = user.ok_or_else(|| AppError::Internal("missing identity".to_owned()))?;
            AdminDashboardTemplate {
                user,
                stats: content::admin_stats(),
                orders: content::admin_orders(),
                top_restaurants: content::top_restaurants(),
                analytics: content::admin_analytics(),
            }
            .into_response()
        }
        Screen::Vendor => {
            let user = user.ok_or_else(|| AppError::Internal("missing identity".to_owned()))?;
            let store = user
                .store
                .clone()
                .ok_or_else(|| AppError::Internal("vendor without a store".to_owned()))?;
            VendorDashboardTemplate {
                menu_items: state.menus().items(store.id),
                store_name: store.name,
                stats: content::vendor_stats(),
                orders: content::vendor_orders(),
                analytics: content::vendor_analytics(),
                user,
            }
            .into_response()
        }
    };
    Ok(response)
}

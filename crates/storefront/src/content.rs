//! Static display content.
//!
//! All storefront data is mocked in memory; these are the fixed rows the
//! landing page and the dashboards render. Purely presentational, the same
//! way the hero carousel and featured reviews are fixed content.

/// A dish card on the landing page.
#[derive(Clone)]
pub struct DishView {
    pub title: String,
    pub description: String,
    pub price: String,
    pub original_price: Option<String>,
    pub rating: String,
    pub review_count: u32,
    pub badge: Option<String>,
}

/// A restaurant row (landing page and customer favorites).
#[derive(Clone)]
pub struct RestaurantView {
    pub name: String,
    pub cuisine: String,
    pub rating: String,
}

/// A headline stat card on a dashboard.
#[derive(Clone)]
pub struct StatView {
    pub label: String,
    pub value: String,
    pub trend: String,
}

/// A row in the customer's order history.
#[derive(Clone)]
pub struct CustomerOrderView {
    pub id: String,
    pub date: String,
    pub restaurant: String,
    pub items: String,
    pub total: String,
    pub status: String,
}

/// A row in the admin order-management table.
#[derive(Clone)]
pub struct AdminOrderView {
    pub id: String,
    pub customer: String,
    pub restaurant: String,
    pub amount: String,
    pub status: String,
}

/// A restaurant row in the admin "top performing" list.
#[derive(Clone)]
pub struct TopRestaurantView {
    pub name: String,
    pub orders: u32,
    pub revenue: String,
    pub rating: String,
}

/// A row in the vendor's live order list.
#[derive(Clone)]
pub struct VendorOrderView {
    pub id: String,
    pub customer: String,
    pub items: String,
    pub amount: String,
    pub time: String,
    pub status: String,
}

/// A label/value pair in an analytics panel.
#[derive(Clone)]
pub struct AnalyticsView {
    pub label: String,
    pub value: String,
}

fn dish(
    title: &str,
    description: &str,
    price: &str,
    original_price: Option<&str>,
    rating: &str,
    review_count: u32,
    badge: Option<&str>,
) -> DishView {
    DishView {
        title: title.to_owned(),
        description: description.to_owned(),
        price: price.to_owned(),
        original_price: original_price.map(str::to_owned),
        rating: rating.to_owned(),
        review_count,
        badge: badge.map(str::to_owned),
    }
}

fn stat(label: &str, value: &str, trend: &str) -> StatView {
    StatView {
        label: label.to_owned(),
        value: value.to_owned(),
        trend: trend.to_owned(),
    }
}

fn analytics(label: &str, value: &str) -> AnalyticsView {
    AnalyticsView {
        label: label.to_owned(),
        value: value.to_owned(),
    }
}

/// Popular dishes for the landing page grid.
#[must_use]
pub fn popular_dishes() -> Vec<DishView> {
    vec![
        dish(
            "Margherita Pizza",
            "Fresh mozzarella, tomato sauce, and basil on a crispy thin crust",
            "$12.99",
            Some("$15.99"),
            "4.8",
            124,
            Some("Popular"),
        ),
        dish(
            "Chicken Burger",
            "Grilled chicken breast with lettuce, tomato, and our special sauce",
            "$9.99",
            None,
            "4.6",
            89,
            Some("New"),
        ),
        dish(
            "Chicken Biryani",
            "Aromatic basmati rice with tender chicken and traditional spices",
            "$15.99",
            None,
            "4.9",
            156,
            Some("Bestseller"),
        ),
    ]
}

/// Featured restaurants for the landing page.
#[must_use]
pub fn featured_restaurants() -> Vec<RestaurantView> {
    vec![
        RestaurantView {
            name: "Pizza Palace".to_owned(),
            cuisine: "Italian".to_owned(),
            rating: "4.8".to_owned(),
        },
        RestaurantView {
            name: "Burger House".to_owned(),
            cuisine: "American".to_owned(),
            rating: "4.6".to_owned(),
        },
        RestaurantView {
            name: "Spice Garden".to_owned(),
            cuisine: "Indian".to_owned(),
            rating: "4.9".to_owned(),
        },
        RestaurantView {
            name: "Sushi Master".to_owned(),
            cuisine: "Japanese".to_owned(),
            rating: "4.9".to_owned(),
        },
    ]
}

/// Quick stats for the customer dashboard.
#[must_use]
pub fn customer_stats() -> Vec<StatView> {
    vec![
        stat("Total Orders", "23", ""),
        stat("Total Spent", "$456", ""),
        stat("Favorite Places", "5", ""),
        stat("Avg Rating", "4.8", ""),
    ]
}

/// Recent orders for the customer dashboard.
#[must_use]
pub fn customer_orders() -> Vec<CustomerOrderView> {
    let order = |id: &str, date: &str, restaurant: &str, items: &str, total: &str| {
        CustomerOrderView {
            id: id.to_owned(),
            date: date.to_owned(),
            restaurant: restaurant.to_owned(),
            items: items.to_owned(),
            total: total.to_owned(),
            status: "Delivered".to_owned(),
        }
    };
    vec![
        order(
            "#12345",
            "2025-07-12",
            "Pizza Palace",
            "Margherita Pizza, Caesar Salad",
            "$24.99",
        ),
        order(
            "#12344",
            "2025-07-10",
            "Burger House",
            "Chicken Burger, Fries",
            "$15.99",
        ),
        order(
            "#12343",
            "2025-07-08",
            "Sushi Master",
            "California Roll, Miso Soup",
            "$32.50",
        ),
    ]
}

/// Favorite restaurants for the customer dashboard.
#[must_use]
pub fn customer_favorites() -> Vec<RestaurantView> {
    featured_restaurants().into_iter().take(3).collect()
}

/// System stats for the admin dashboard.
#[must_use]
pub fn admin_stats() -> Vec<StatView> {
    vec![
        stat("Total Users", "12,543", "+12%"),
        stat("Active Orders", "256", "+8%"),
        stat("Revenue Today", "$8,945", "+15%"),
        stat("Restaurants", "89", "+3%"),
    ]
}

/// Order-management rows for the admin dashboard.
#[must_use]
pub fn admin_orders() -> Vec<AdminOrderView> {
    let order = |id: &str, customer: &str, restaurant: &str, amount: &str, status: &str| {
        AdminOrderView {
            id: id.to_owned(),
            customer: customer.to_owned(),
            restaurant: restaurant.to_owned(),
            amount: amount.to_owned(),
            status: status.to_owned(),
        }
    };
    vec![
        order("#12350", "John Doe", "Pizza Palace", "$24.99", "Processing"),
        order("#12349", "Jane Smith", "Burger House", "$15.99", "Delivered"),
        order("#12348", "Mike Johnson", "Sushi Master", "$32.50", "Preparing"),
        order("#12347", "Sarah Wilson", "Spice Garden", "$18.75", "On Route"),
    ]
}

/// Top-performing restaurants for the admin dashboard.
#[must_use]
pub fn top_restaurants() -> Vec<TopRestaurantView> {
    let row = |name: &str, orders: u32, revenue: &str, rating: &str| TopRestaurantView {
        name: name.to_owned(),
        orders,
        revenue: revenue.to_owned(),
        rating: rating.to_owned(),
    };
    vec![
        row("Pizza Palace", 145, "$3,245", "4.8"),
        row("Burger House", 132, "$2,890", "4.6"),
        row("Sushi Master", 98, "$4,120", "4.9"),
    ]
}

/// Platform analytics for the admin dashboard.
#[must_use]
pub fn admin_analytics() -> Vec<AnalyticsView> {
    vec![
        analytics("Peak Hours", "12 PM - 2 PM"),
        analytics("Avg Delivery Time", "28 minutes"),
        analytics("Customer Satisfaction", "94%"),
        analytics("Active Drivers", "45"),
    ]
}

/// Headline stats for the vendor dashboard.
#[must_use]
pub fn vendor_stats() -> Vec<StatView> {
    vec![
        stat("Total Orders", "89", "+23%"),
        stat("Revenue Today", "$1,245", "+18%"),
        stat("Menu Items", "24", "+2"),
        stat("Avg Rating", "4.7", "+0.1"),
    ]
}

/// Live orders for the vendor dashboard.
#[must_use]
pub fn vendor_orders() -> Vec<VendorOrderView> {
    let order =
        |id: &str, customer: &str, items: &str, amount: &str, time: &str, status: &str| {
            VendorOrderView {
                id: id.to_owned(),
                customer: customer.to_owned(),
                items: items.to_owned(),
                amount: amount.to_owned(),
                time: time.to_owned(),
                status: status.to_owned(),
            }
        };
    vec![
        order(
            "#12355",
            "John D.",
            "Margherita Pizza x2",
            "$25.98",
            "2:30 PM",
            "Preparing",
        ),
        order(
            "#12354",
            "Sarah M.",
            "Caesar Salad, Garlic Bread",
            "$18.50",
            "2:15 PM",
            "Ready",
        ),
        order(
            "#12353",
            "Mike L.",
            "Pepperoni Pizza",
            "$14.99",
            "1:45 PM",
            "Delivered",
        ),
        order(
            "#12352",
            "Emma W.",
            "Veggie Pizza, Coke",
            "$19.75",
            "1:30 PM",
            "Delivered",
        ),
    ]
}

/// Performance analytics for the vendor dashboard.
#[must_use]
pub fn vendor_analytics() -> Vec<AnalyticsView> {
    vec![
        analytics("Avg Prep Time", "15 minutes"),
        analytics("Customer Rating", "4.7/5.0"),
        analytics("Monthly Revenue", "$12,450"),
        analytics("Top Selling Item", "Margherita Pizza"),
    ]
}

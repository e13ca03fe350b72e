//! Database seeder for BudgetOne development and testing.
//!
//! Seeds the demo users, locations, and the full chart of accounts for
//! local development. Safe to run repeatedly; existing rows are kept.
//!
//! Usage: cargo run --bin seeder

use budgetone_core::auth::hash_password;
use budgetone_db::UserRepository;
use budgetone_db::entities::{
    categories, locations,
    sea_orm_active_enums::{CategoryKind, UserRole},
};
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set,
};
use uuid::Uuid;

/// Demo password shared by every seeded account.
const DEMO_PASSWORD: &str = "123";

/// All leaf accounts grouped under their top-level account.
/// Order here is the chart's declaration order.
const CHART: &[(&str, &str, CategoryKind, &[(&str, &str)])] = &[
    (
        "100",
        "Revenue",
        CategoryKind::Income,
        &[
            ("100.01", "New Business Subscription Revenue"),
            ("100.02", "Renewal Subscription Revenue"),
            ("100.03", "Expansion and Upsell Revenue"),
            ("100.04", "Usage-Based Revenue (Data/API)"),
            ("100.05", "Implementation and Onboarding Fees"),
            ("100.06", "Custom Development and Training"),
        ],
    ),
    (
        "200",
        "Cost of Goods Sold (COGS)",
        CategoryKind::Expense,
        &[
            ("200.01", "Public Cloud Infrastructure (Production)"),
            ("200.02", "Content Delivery Network (CDN) Fees"),
            ("200.03", "Third-Party API and Licensing Fees"),
            ("200.04", "Technical Customer Support Salaries"),
            ("200.05", "Customer Success Salaries (Direct)"),
            ("200.06", "Payment Processing and Merchant Fees"),
        ],
    ),
    (
        "300",
        "Research & Development (R&D)",
        CategoryKind::Expense,
        &[
            ("300.01", "Software Engineering Salaries"),
            ("300.02", "Product Management and Design Salaries"),
            ("300.03", "QA Automation and Testing Tool Licenses"),
            ("300.04", "International Patent Filing Fees (PCT)"),
            ("300.05", "DevOps and CI/CD Pipeline Costs"),
        ],
    ),
    (
        "400",
        "Sales & Marketing (S&M)",
        CategoryKind::Expense,
        &[
            ("400.01", "Sales Base Salaries and OTE Commissions"),
            ("400.02", "Search Engine and Social Media Ad Spend"),
            ("400.03", "Trade Show Booth Space and Logistics"),
            ("400.04", "CRM and Marketing Automation Platform"),
        ],
    ),
    (
        "500",
        "General & Administrative (G&A)",
        CategoryKind::Expense,
        &[
            ("500.01", "G&A Salaries (HR, Finance, Admin)"),
            ("500.02", "Employer Payroll Taxes (Country-Specific)"),
            ("500.03", "Health, Retirement, and Welfare Benefits"),
            ("500.04", "International Relocation and Visa Costs"),
            ("500.05", "Office Rent and Multi-Market Utilities"),
            ("500.06", "Global Audit and Tax Compliance Fees"),
            ("500.07", "Business Liability and Cyber Insurance"),
        ],
    ),
    (
        "600",
        "IT & Security",
        CategoryKind::Expense,
        &[
            ("600.01", "Identity Management and SOC Services"),
            ("600.02", "Global Laptop and Network Procurement"),
        ],
    ),
    (
        "700",
        "Capital Expenditures (CapEx)",
        CategoryKind::Asset,
        &[("700.01", "Capitalized Internal-Use Development")],
    ),
];

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let database_url =
        std::env::var("DATABASE_URL").expect("DATABASE_URL must be set in environment");

    println!("Connecting to database...");
    let db = budgetone_db::connect(&database_url)
        .await
        .expect("Failed to connect to database");

    println!("Seeding users...");
    seed_user(&db, "admin@hq.com", "Can (Admin)", UserRole::Admin).await;
    let london_manager = seed_user(
        &db,
        "manager@london.com",
        "John (London)",
        UserRole::LocationManager,
    )
    .await;
    let istanbul_manager = seed_user(
        &db,
        "manager@istanbul.com",
        "Ayşe (Istanbul)",
        UserRole::LocationManager,
    )
    .await;

    // Both demo locations report in GBP so the consolidated report stays
    // available; the report refuses to sum across differing currencies.
    println!("Seeding locations...");
    seed_location(&db, "London HQ", "GBP", london_manager).await;
    seed_location(&db, "Istanbul Branch", "GBP", istanbul_manager).await;

    println!("Seeding chart of accounts...");
    seed_chart(&db).await;

    println!("Seeding complete!");
}

/// Inserts a user unless one with this email already exists. Returns the
/// row's ID either way.
async fn seed_user(db: &DatabaseConnection, email: &str, name: &str, role: UserRole) -> Uuid {
    let repo = UserRepository::new(db.clone());

    if let Some(existing) = repo
        .find_by_email(email)
        .await
        .expect("Failed to query users")
    {
        println!("  User {email} already exists, skipping...");
        return existing.id;
    }

    let password_hash = hash_password(DEMO_PASSWORD).expect("Failed to hash demo password");
    let user = repo
        .create(email, &password_hash, name, role)
        .await
        .expect("Failed to insert user");
    println!("  Created user: {email}");
    user.id
}

/// Inserts a location unless one with this name already exists.
async fn seed_location(db: &DatabaseConnection, name: &str, currency: &str, manager_id: Uuid) {
    if locations::Entity::find()
        .filter(locations::Column::Name.eq(name))
        .one(db)
        .await
        .expect("Failed to query locations")
        .is_some()
    {
        println!("  Location {name} already exists, skipping...");
        return;
    }

    let location = locations::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(name.to_string()),
        currency: Set(currency.to_string()),
        manager_id: Set(manager_id),
        created_at: Set(Utc::now().into()),
        updated_at: Set(Utc::now().into()),
    };
    location
        .insert(db)
        .await
        .expect("Failed to insert location");
    println!("  Created location: {name} ({currency})");
}

/// Seeds every account group and its leaves, assigning chart positions in
/// declaration order.
async fn seed_chart(db: &DatabaseConnection) {
    let mut position = 0;
    for (group_code, group_name, kind, leaves) in CHART {
        let group_id =
            seed_category(db, group_code, group_name, Some(kind.clone()), None, position).await;
        position += 1;

        for (code, name) in *leaves {
            seed_category(db, code, name, None, Some(group_id), position).await;
            position += 1;
        }
    }
}

/// Inserts a category unless one with this code already exists. Returns the
/// row's ID either way.
async fn seed_category(
    db: &DatabaseConnection,
    code: &str,
    name: &str,
    kind: Option<CategoryKind>,
    parent_id: Option<Uuid>,
    position: i32,
) -> Uuid {
    if let Some(existing) = categories::Entity::find()
        .filter(categories::Column::Code.eq(code))
        .one(db)
        .await
        .expect("Failed to query categories")
    {
        return existing.id;
    }

    let id = Uuid::new_v4();
    let category = categories::ActiveModel {
        id: Set(id),
        code: Set(code.to_string()),
        name: Set(name.to_string()),
        kind: Set(kind),
        parent_id: Set(parent_id),
        position: Set(position),
        created_at: Set(Utc::now().into()),
        updated_at: Set(Utc::now().into()),
    };
    category
        .insert(db)
        .await
        .expect("Failed to insert category");
    println!("  Created category {code} - {name}");
    id
}

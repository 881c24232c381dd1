//! Business categories a give can be filed under.
//!
//! The set is fixed by the directory backend. Slugs the backend adds later
//! still deserialize: they are carried as [`Category::Unrecognized`] and
//! round-trip verbatim.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    AdvertisingMarketing,
    Agriculture,
    Animals,
    ArchitectureEngineering,
    ArtEntertainment,
    CarMotorcycle,
    ComputerProgramming,
    Construction,
    Consulting,
    EmploymentActivities,
    EventBusinessService,
    FinanceInsurance,
    FoodBeverage,
    HealthWellness,
    LegalAccounting,
    Manufacturing,
    OrganizationsOthers,
    PersonalServices,
    RealEstateServices,
    Repair,
    Retail,
    SecurityInvestigation,
    SportsLeisure,
    Telecommunications,
    TrainingCoaching,
    TransportShipping,
    Travel,
    AutoTechStartup,
    /// Catch-all offered by the backend.
    Other,
    /// Slug outside the known set, kept as-is.
    Unrecognized(String),
}

impl Category {
    /// Every known category, in the order the backend lists them.
    pub const KNOWN: [Category; 29] = [
        Category::AdvertisingMarketing,
        Category::Agriculture,
        Category::Animals,
        Category::ArchitectureEngineering,
        Category::ArtEntertainment,
        Category::CarMotorcycle,
        Category::ComputerProgramming,
        Category::Construction,
        Category::Consulting,
        Category::EmploymentActivities,
        Category::EventBusinessService,
        Category::FinanceInsurance,
        Category::FoodBeverage,
        Category::HealthWellness,
        Category::LegalAccounting,
        Category::Manufacturing,
        Category::OrganizationsOthers,
        Category::PersonalServices,
        Category::RealEstateServices,
        Category::Repair,
        Category::Retail,
        Category::SecurityInvestigation,
        Category::SportsLeisure,
        Category::Telecommunications,
        Category::TrainingCoaching,
        Category::TransportShipping,
        Category::Travel,
        Category::Other,
        Category::AutoTechStartup,
    ];

    /// Parse a backend slug. Never fails: unknown slugs are preserved.
    pub fn from_slug(slug: &str) -> Self {
        Self::KNOWN
            .iter()
            .find(|known| known.slug() == slug)
            .cloned()
            .unwrap_or_else(|| Category::Unrecognized(slug.to_string()))
    }

    pub fn slug(&self) -> &str {
        match self {
            Category::AdvertisingMarketing => "advertising_marketing",
            Category::Agriculture => "agriculture",
            Category::Animals => "animals",
            Category::ArchitectureEngineering => "architecture_engineering",
            Category::ArtEntertainment => "art_entertainment",
            Category::CarMotorcycle => "car_motorcycle",
            Category::ComputerProgramming => "computer_programming",
            Category::Construction => "construction",
            Category::Consulting => "consulting",
            Category::EmploymentActivities => "employment_activities",
            Category::EventBusinessService => "event_business_service",
            Category::FinanceInsurance => "finance_insurance",
            Category::FoodBeverage => "food_beverage",
            Category::HealthWellness => "health_wellness",
            Category::LegalAccounting => "legal_accounting",
            Category::Manufacturing => "manufacturing",
            Category::OrganizationsOthers => "organizations_others",
            Category::PersonalServices => "personal_services",
            Category::RealEstateServices => "real_estate_services",
            Category::Repair => "repair",
            Category::Retail => "retail",
            Category::SecurityInvestigation => "security_investigation",
            Category::SportsLeisure => "sports_leisure",
            Category::Telecommunications => "telecommunications",
            Category::TrainingCoaching => "training_coaching",
            Category::TransportShipping => "transport_shipping",
            Category::Travel => "travel",
            Category::AutoTechStartup => "auto_tech_startup",
            Category::Other => "other",
            Category::Unrecognized(slug) => slug,
        }
    }

    /// Human-readable label. Unrecognized slugs are shown as-is.
    pub fn label(&self) -> &str {
        match self {
            Category::AdvertisingMarketing => "Advertising & Marketing",
            Category::Agriculture => "Agriculture",
            Category::Animals => "Animals",
            Category::ArchitectureEngineering => "Architecture & Engineering",
            Category::ArtEntertainment => "Art & Entertainment",
            Category::CarMotorcycle => "Car & Motorcycle",
            Category::ComputerProgramming => "Computer & Programming",
            Category::Construction => "Construction",
            Category::Consulting => "Consulting",
            Category::EmploymentActivities => "Employment Activities",
            Category::EventBusinessService => "Event & Business Service",
            Category::FinanceInsurance => "Finance & Insurance",
            Category::FoodBeverage => "Food & Beverage",
            Category::HealthWellness => "Health & Wellness",
            Category::LegalAccounting => "Legal & Accounting",
            Category::Manufacturing => "Manufacturing",
            Category::OrganizationsOthers => "Organizations & Others",
            Category::PersonalServices => "Personal Services",
            Category::RealEstateServices => "Real Estate Services",
            Category::Repair => "Repair",
            Category::Retail => "Retail",
            Category::SecurityInvestigation => "Security & Investigation",
            Category::SportsLeisure => "Sports & Leisure",
            Category::Telecommunications => "Telecommunications",
            Category::TrainingCoaching => "Training & Coaching",
            Category::TransportShipping => "Transport & Shipping",
            Category::Travel => "Travel",
            Category::AutoTechStartup => "Auto Tech Startup",
            Category::Other => "Other",
            Category::Unrecognized(slug) => slug,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Category::Unrecognized(_))
    }
}

impl Default for Category {
    fn default() -> Self {
        Category::Other
    }
}

impl From<String> for Category {
    fn from(slug: String) -> Self {
        Category::from_slug(&slug)
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        category.slug().to_string()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

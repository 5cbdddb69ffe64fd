use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    #[serde(rename = "F")]
    Female,
    #[serde(rename = "M")]
    Male,
}

impl Gender {
    pub const LABELS: [&'static str; 2] = ["Female", "Male"];

    /// Maps the form label onto the single-letter code the model was trained on.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Female" => Some(Gender::Female),
            "Male" => Some(Gender::Male),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Gender::Female => "Female",
            Gender::Male => "Male",
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Gender::Female => "F",
            Gender::Male => "M",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MerchantCategory {
    Entertainment,
    FoodDining,
    GasTransport,
    GroceryNet,
    GroceryPos,
    HealthFitness,
    Home,
    KidsPets,
    MiscNet,
    MiscPos,
    PersonalCare,
    ShoppingNet,
    ShoppingPos,
    Travel,
}

impl MerchantCategory {
    pub const ALL: [MerchantCategory; 14] = [
        MerchantCategory::Entertainment,
        MerchantCategory::FoodDining,
        MerchantCategory::GasTransport,
        MerchantCategory::GroceryNet,
        MerchantCategory::GroceryPos,
        MerchantCategory::HealthFitness,
        MerchantCategory::Home,
        MerchantCategory::KidsPets,
        MerchantCategory::MiscNet,
        MerchantCategory::MiscPos,
        MerchantCategory::PersonalCare,
        MerchantCategory::ShoppingNet,
        MerchantCategory::ShoppingPos,
        MerchantCategory::Travel,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MerchantCategory::Entertainment => "entertainment",
            MerchantCategory::FoodDining => "food_dining",
            MerchantCategory::GasTransport => "gas_transport",
            MerchantCategory::GroceryNet => "grocery_net",
            MerchantCategory::GroceryPos => "grocery_pos",
            MerchantCategory::HealthFitness => "health_fitness",
            MerchantCategory::Home => "home",
            MerchantCategory::KidsPets => "kids_pets",
            MerchantCategory::MiscNet => "misc_net",
            MerchantCategory::MiscPos => "misc_pos",
            MerchantCategory::PersonalCare => "personal_care",
            MerchantCategory::ShoppingNet => "shopping_net",
            MerchantCategory::ShoppingPos => "shopping_pos",
            MerchantCategory::Travel => "travel",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == value)
    }
}

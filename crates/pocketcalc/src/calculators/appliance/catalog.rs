use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplianceCategory {
    Kitchen,
    Laundry,
    Climate,
    Entertainment,
    Office,
    Lighting,
}

impl ApplianceCategory {
    pub const fn ordered() -> [Self; 6] {
        [
            Self::Kitchen,
            Self::Laundry,
            Self::Climate,
            Self::Entertainment,
            Self::Office,
            Self::Lighting,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Kitchen => "Kitchen",
            Self::Laundry => "Laundry",
            Self::Climate => "Heating & Cooling",
            Self::Entertainment => "Entertainment",
            Self::Office => "Home Office",
            Self::Lighting => "Lighting",
        }
    }
}

/// Static catalog entry describing a typical household appliance.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApplianceProfile {
    pub name: &'static str,
    pub category: ApplianceCategory,
    pub typical_watts: f64,
    pub standby_watts: Option<f64>,
    pub icon: &'static str,
}

#[derive(Debug)]
pub struct ApplianceCatalog {
    profiles: Vec<ApplianceProfile>,
}

impl ApplianceCatalog {
    pub fn standard() -> Self {
        Self {
            profiles: standard_profiles(),
        }
    }

    pub fn profiles(&self) -> &[ApplianceProfile] {
        &self.profiles
    }

    pub fn in_category(&self, category: ApplianceCategory) -> Vec<&ApplianceProfile> {
        self.profiles
            .iter()
            .filter(|profile| profile.category == category)
            .collect()
    }

    pub fn find(&self, name: &str) -> Option<&ApplianceProfile> {
        let needle = name.trim();
        self.profiles
            .iter()
            .find(|profile| profile.name.eq_ignore_ascii_case(needle))
    }
}

fn standard_profiles() -> Vec<ApplianceProfile> {
    vec![
        ApplianceProfile {
            name: "Refrigerator",
            category: ApplianceCategory::Kitchen,
            typical_watts: 150.0,
            standby_watts: None,
            icon: "refrigerator",
        },
        ApplianceProfile {
            name: "Microwave",
            category: ApplianceCategory::Kitchen,
            typical_watts: 1100.0,
            standby_watts: Some(3.0),
            icon: "microwave",
        },
        ApplianceProfile {
            name: "Electric Oven",
            category: ApplianceCategory::Kitchen,
            typical_watts: 2400.0,
            standby_watts: Some(4.0),
            icon: "oven",
        },
        ApplianceProfile {
            name: "Dishwasher",
            category: ApplianceCategory::Kitchen,
            typical_watts: 1800.0,
            standby_watts: Some(2.0),
            icon: "dishwasher",
        },
        ApplianceProfile {
            name: "Coffee Maker",
            category: ApplianceCategory::Kitchen,
            typical_watts: 900.0,
            standby_watts: Some(1.5),
            icon: "cup.and.saucer",
        },
        ApplianceProfile {
            name: "Washing Machine",
            category: ApplianceCategory::Laundry,
            typical_watts: 500.0,
            standby_watts: Some(1.5),
            icon: "washer",
        },
        ApplianceProfile {
            name: "Clothes Dryer",
            category: ApplianceCategory::Laundry,
            typical_watts: 3000.0,
            standby_watts: Some(2.0),
            icon: "dryer",
        },
        ApplianceProfile {
            name: "Window Air Conditioner",
            category: ApplianceCategory::Climate,
            typical_watts: 1000.0,
            standby_watts: Some(2.0),
            icon: "air.conditioner.horizontal",
        },
        ApplianceProfile {
            name: "Space Heater",
            category: ApplianceCategory::Climate,
            typical_watts: 1500.0,
            standby_watts: None,
            icon: "heater.vertical",
        },
        ApplianceProfile {
            name: "Ceiling Fan",
            category: ApplianceCategory::Climate,
            typical_watts: 75.0,
            standby_watts: None,
            icon: "fan.ceiling",
        },
        ApplianceProfile {
            name: "LED TV",
            category: ApplianceCategory::Entertainment,
            typical_watts: 100.0,
            standby_watts: Some(1.0),
            icon: "tv",
        },
        ApplianceProfile {
            name: "Game Console",
            category: ApplianceCategory::Entertainment,
            typical_watts: 200.0,
            standby_watts: Some(10.0),
            icon: "gamecontroller",
        },
        ApplianceProfile {
            name: "Desktop Computer",
            category: ApplianceCategory::Office,
            typical_watts: 250.0,
            standby_watts: Some(5.0),
            icon: "desktopcomputer",
        },
        ApplianceProfile {
            name: "Laptop",
            category: ApplianceCategory::Office,
            typical_watts: 60.0,
            standby_watts: Some(2.0),
            icon: "laptopcomputer",
        },
        ApplianceProfile {
            name: "Wi-Fi Router",
            category: ApplianceCategory::Office,
            typical_watts: 10.0,
            standby_watts: None,
            icon: "wifi.router",
        },
        ApplianceProfile {
            name: "LED Bulb",
            category: ApplianceCategory::Lighting,
            typical_watts: 10.0,
            standby_watts: None,
            icon: "lightbulb",
        },
        ApplianceProfile {
            name: "Incandescent Bulb",
            category: ApplianceCategory::Lighting,
            typical_watts: 60.0,
            standby_watts: None,
            icon: "lightbulb.fill",
        },
    ]
}

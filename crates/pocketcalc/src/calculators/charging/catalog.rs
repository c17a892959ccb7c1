use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Connector {
    Lightning,
    UsbC,
}

impl Connector {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Lightning => "Lightning",
            Self::UsbC => "USB-C",
        }
    }
}

/// Fixed hardware figures for a phone model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PhoneSpec {
    pub battery_mah: f64,
    pub max_watts: f64,
    pub connector: Connector,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhoneModel {
    Iphone15ProMax,
    Iphone15Pro,
    Iphone15Plus,
    Iphone15,
    Iphone14ProMax,
    Iphone14Pro,
    Iphone14Plus,
    Iphone14,
    Iphone13ProMax,
    Iphone13Pro,
    Iphone13,
    Iphone13Mini,
    Iphone12,
    Iphone11,
    IphoneSe3,
}

impl PhoneModel {
    pub const fn ordered() -> [Self; 15] {
        [
            Self::Iphone15ProMax,
            Self::Iphone15Pro,
            Self::Iphone15Plus,
            Self::Iphone15,
            Self::Iphone14ProMax,
            Self::Iphone14Pro,
            Self::Iphone14Plus,
            Self::Iphone14,
            Self::Iphone13ProMax,
            Self::Iphone13Pro,
            Self::Iphone13,
            Self::Iphone13Mini,
            Self::Iphone12,
            Self::Iphone11,
            Self::IphoneSe3,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Iphone15ProMax => "iPhone 15 Pro Max",
            Self::Iphone15Pro => "iPhone 15 Pro",
            Self::Iphone15Plus => "iPhone 15 Plus",
            Self::Iphone15 => "iPhone 15",
            Self::Iphone14ProMax => "iPhone 14 Pro Max",
            Self::Iphone14Pro => "iPhone 14 Pro",
            Self::Iphone14Plus => "iPhone 14 Plus",
            Self::Iphone14 => "iPhone 14",
            Self::Iphone13ProMax => "iPhone 13 Pro Max",
            Self::Iphone13Pro => "iPhone 13 Pro",
            Self::Iphone13 => "iPhone 13",
            Self::Iphone13Mini => "iPhone 13 mini",
            Self::Iphone12 => "iPhone 12",
            Self::Iphone11 => "iPhone 11",
            Self::IphoneSe3 => "iPhone SE (3rd gen)",
        }
    }

    pub const fn spec(self) -> PhoneSpec {
        let (battery_mah, max_watts, connector) = match self {
            Self::Iphone15ProMax => (4422.0, 27.0, Connector::UsbC),
            Self::Iphone15Pro => (3274.0, 27.0, Connector::UsbC),
            Self::Iphone15Plus => (4383.0, 20.0, Connector::UsbC),
            Self::Iphone15 => (3349.0, 20.0, Connector::UsbC),
            Self::Iphone14ProMax => (4323.0, 27.0, Connector::Lightning),
            Self::Iphone14Pro => (3200.0, 27.0, Connector::Lightning),
            Self::Iphone14Plus => (4325.0, 20.0, Connector::Lightning),
            Self::Iphone14 => (3279.0, 20.0, Connector::Lightning),
            Self::Iphone13ProMax => (4352.0, 27.0, Connector::Lightning),
            Self::Iphone13Pro => (3095.0, 23.0, Connector::Lightning),
            Self::Iphone13 => (3227.0, 20.0, Connector::Lightning),
            Self::Iphone13Mini => (2406.0, 20.0, Connector::Lightning),
            Self::Iphone12 => (2815.0, 20.0, Connector::Lightning),
            Self::Iphone11 => (3110.0, 18.0, Connector::Lightning),
            Self::IphoneSe3 => (2018.0, 20.0, Connector::Lightning),
        };
        PhoneSpec {
            battery_mah,
            max_watts,
            connector,
        }
    }

    pub fn find(name: &str) -> Option<Self> {
        let needle = name.trim();
        Self::ordered()
            .into_iter()
            .find(|model| model.label().eq_ignore_ascii_case(needle))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChargerSpec {
    pub max_watts: f64,
    pub wireless: bool,
    /// Share of the rated output that reaches the battery.
    pub efficiency: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChargerModel {
    UsbA5wLightning,
    UsbA12wLightning,
    UsbC18w,
    UsbC20w,
    UsbC30w,
    UsbC35wDual,
    QiPad,
    MagSafe15w,
    MagSafe25w,
}

impl ChargerModel {
    pub const fn ordered() -> [Self; 9] {
        [
            Self::UsbA5wLightning,
            Self::UsbA12wLightning,
            Self::UsbC18w,
            Self::UsbC20w,
            Self::UsbC30w,
            Self::UsbC35wDual,
            Self::QiPad,
            Self::MagSafe15w,
            Self::MagSafe25w,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::UsbA5wLightning => "5W USB-A to Lightning",
            Self::UsbA12wLightning => "12W USB-A to Lightning",
            Self::UsbC18w => "18W USB-C Power Adapter",
            Self::UsbC20w => "20W USB-C Power Adapter",
            Self::UsbC30w => "30W USB-C Power Adapter",
            Self::UsbC35wDual => "35W Dual USB-C Power Adapter",
            Self::QiPad => "7.5W Qi Wireless Pad",
            Self::MagSafe15w => "15W MagSafe Charger",
            Self::MagSafe25w => "25W MagSafe Charger (iPhone 15)",
        }
    }

    pub const fn spec(self) -> ChargerSpec {
        let (max_watts, wireless, efficiency) = match self {
            Self::UsbA5wLightning => (5.0, false, 0.90),
            Self::UsbA12wLightning => (12.0, false, 0.90),
            Self::UsbC18w => (18.0, false, 0.92),
            Self::UsbC20w => (20.0, false, 0.92),
            Self::UsbC30w => (30.0, false, 0.92),
            Self::UsbC35wDual => (35.0, false, 0.92),
            Self::QiPad => (7.5, true, 0.70),
            Self::MagSafe15w => (15.0, true, 0.75),
            Self::MagSafe25w => (25.0, true, 0.75),
        };
        ChargerSpec {
            max_watts,
            wireless,
            efficiency,
        }
    }

    pub fn find(name: &str) -> Option<Self> {
        let needle = name.trim();
        Self::ordered()
            .into_iter()
            .find(|model| model.label().eq_ignore_ascii_case(needle))
    }
}

/// Chargers usable with `phone`: USB-C phones cannot take wired Lightning cables, and the
/// 25W MagSafe puck only charges at that rate on USB-C models.
pub fn compatible_chargers(phone: PhoneModel) -> Vec<ChargerModel> {
    let connector = phone.spec().connector;
    ChargerModel::ordered()
        .into_iter()
        .filter(|charger| match connector {
            Connector::UsbC => charger.spec().wireless || !charger.label().contains("Lightning"),
            Connector::Lightning => *charger != ChargerModel::MagSafe25w,
        })
        .collect()
}

use serde::Serialize;

/// Rule identifier reported when no taxonomic rule fires
pub const DEFAULT_RULE_ID: &str = "default";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Sunlight {
    pub level: String,
    pub hours_per_day: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Watering {
    pub frequency: String,
    pub amount: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Soil {
    #[serde(rename = "type")]
    pub soil_type: String,
    pub ph_range: String,
    pub drainage_note: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Climate {
    pub temperature_range: String,
    pub humidity_range: String,
    pub tip: String,
}

/// Care recommendation for an identified plant
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CareProfile {
    pub sunlight: Sunlight,
    pub watering: Watering,
    pub soil: Soil,
    pub climate: Climate,

    /// Rule that produced this profile, or [`DEFAULT_RULE_ID`]
    pub rule_id: String,
}

impl CareProfile {
    #[must_use]
    pub fn is_default(&self) -> bool {
        self.rule_id == DEFAULT_RULE_ID
    }
}

/// Static care payload attached to a rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CareTemplate {
    pub sunlight_level: &'static str,
    pub sunlight_hours: &'static str,
    pub sunlight_description: &'static str,
    pub watering_frequency: &'static str,
    pub watering_amount: &'static str,
    pub watering_description: &'static str,
    pub soil_type: &'static str,
    pub soil_ph_range: &'static str,
    pub soil_drainage_note: &'static str,
    pub temperature_range: &'static str,
    pub humidity_range: &'static str,
    pub climate_tip: &'static str,
}

impl CareTemplate {
    /// Materialize this payload as a profile attributed to `rule_id`
    #[must_use]
    pub fn to_profile(&self, rule_id: &str) -> CareProfile {
        CareProfile {
            sunlight: Sunlight {
                level: self.sunlight_level.to_string(),
                hours_per_day: self.sunlight_hours.to_string(),
                description: self.sunlight_description.to_string(),
            },
            watering: Watering {
                frequency: self.watering_frequency.to_string(),
                amount: self.watering_amount.to_string(),
                description: self.watering_description.to_string(),
            },
            soil: Soil {
                soil_type: self.soil_type.to_string(),
                ph_range: self.soil_ph_range.to_string(),
                drainage_note: self.soil_drainage_note.to_string(),
            },
            climate: Climate {
                temperature_range: self.temperature_range.to_string(),
                humidity_range: self.humidity_range.to_string(),
                tip: self.climate_tip.to_string(),
            },
            rule_id: rule_id.to_string(),
        }
    }
}

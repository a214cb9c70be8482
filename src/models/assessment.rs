//! Assessment request model
//!
//! The five road-condition inputs the prediction backend accepts. Every field
//! is a closed enumeration; serialization writes back the exact wire value
//! (integers for road type and speed limit, strings for the rest).

use serde::{Deserialize, Serialize};

/// Road classification, sent upstream as its numeric code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum RoadType {
    Residential,
    ARoad,
    BRoad,
    Urban,
}

impl RoadType {
    pub fn code(&self) -> u8 {
        match self {
            RoadType::Residential => 1,
            RoadType::ARoad => 2,
            RoadType::BRoad => 3,
            RoadType::Urban => 6,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RoadType::Residential => "Residential",
            RoadType::ARoad => "A Road",
            RoadType::BRoad => "B Road",
            RoadType::Urban => "Urban",
        }
    }
}

impl TryFrom<u8> for RoadType {
    type Error = String;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(RoadType::Residential),
            2 => Ok(RoadType::ARoad),
            3 => Ok(RoadType::BRoad),
            6 => Ok(RoadType::Urban),
            other => Err(format!("invalid road_type {}, expected one of 1, 2, 3, 6", other)),
        }
    }
}

impl From<RoadType> for u8 {
    fn from(road_type: RoadType) -> Self {
        road_type.code()
    }
}

/// Weather at the time of travel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeatherCondition {
    Fine,
    Rain,
    Snow,
    Fog,
}

/// Posted speed limit in mph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum SpeedLimit {
    Mph20,
    Mph30,
    Mph40,
    Mph50,
    Mph60,
    Mph70,
}

impl SpeedLimit {
    pub fn mph(&self) -> u8 {
        match self {
            SpeedLimit::Mph20 => 20,
            SpeedLimit::Mph30 => 30,
            SpeedLimit::Mph40 => 40,
            SpeedLimit::Mph50 => 50,
            SpeedLimit::Mph60 => 60,
            SpeedLimit::Mph70 => 70,
        }
    }
}

impl TryFrom<u8> for SpeedLimit {
    type Error = String;

    fn try_from(mph: u8) -> Result<Self, Self::Error> {
        match mph {
            20 => Ok(SpeedLimit::Mph20),
            30 => Ok(SpeedLimit::Mph30),
            40 => Ok(SpeedLimit::Mph40),
            50 => Ok(SpeedLimit::Mph50),
            60 => Ok(SpeedLimit::Mph60),
            70 => Ok(SpeedLimit::Mph70),
            other => Err(format!(
                "invalid speed_limit {}, expected one of 20, 30, 40, 50, 60, 70",
                other
            )),
        }
    }
}

impl From<SpeedLimit> for u8 {
    fn from(limit: SpeedLimit) -> Self {
        limit.mph()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    Evening,
    Night,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JunctionDetail {
    #[serde(rename = "Not at junction")]
    NotAtJunction,
    #[serde(rename = "T Junction")]
    TJunction,
    Crossroads,
    Roundabout,
}

/// Inputs of one risk assessment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentRequest {
    pub road_type: RoadType,
    pub weather_conditions: WeatherCondition,
    pub speed_limit: SpeedLimit,
    pub time_of_day: TimeOfDay,
    pub junction_detail: JunctionDetail,
}

impl Default for AssessmentRequest {
    /// Initial form state
    fn default() -> Self {
        Self {
            road_type: RoadType::Residential,
            weather_conditions: WeatherCondition::Fine,
            speed_limit: SpeedLimit::Mph20,
            time_of_day: TimeOfDay::Afternoon,
            junction_detail: JunctionDetail::NotAtJunction,
        }
    }
}

impl AssessmentRequest {
    /// Parse and validate a raw request body
    pub fn from_slice(body: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(body)
    }
}

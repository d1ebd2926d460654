//! GTFS route type.

use serde::{Deserialize, Serialize};

/// Basic GTFS `route_type` values, serialized as their numeric code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum RouteType {
    Tram,
    Subway,
    Rail,
    Bus,
    Ferry,
}

impl From<RouteType> for u8 {
    fn from(route_type: RouteType) -> Self {
        match route_type {
            RouteType::Tram => 0,
            RouteType::Subway => 1,
            RouteType::Rail => 2,
            RouteType::Bus => 3,
            RouteType::Ferry => 4,
        }
    }
}

impl TryFrom<u8> for RouteType {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(RouteType::Tram),
            1 => Ok(RouteType::Subway),
            2 => Ok(RouteType::Rail),
            3 => Ok(RouteType::Bus),
            4 => Ok(RouteType::Ferry),
            other => Err(format!("unsupported route_type {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bus_is_three() {
        assert_eq!(serde_json::to_string(&RouteType::Bus).unwrap(), "3");
        assert_eq!(RouteType::try_from(3), Ok(RouteType::Bus));
        assert!(RouteType::try_from(9).is_err());
    }
}

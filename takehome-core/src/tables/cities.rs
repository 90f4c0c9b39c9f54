//! Cities offered for comparison, with average one-bedroom monthly rent
//! from 2024-2025 rental market reports.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::models::City;

pub const CITIES: &[City] = &[
    City {
        id: "atlanta",
        name: "Atlanta",
        state: "Georgia",
        state_code: "GA",
        avg_rent: dec!(1600),
    },
    City {
        id: "austin",
        name: "Austin",
        state: "Texas",
        state_code: "TX",
        avg_rent: dec!(1700),
    },
    City {
        id: "boston",
        name: "Boston",
        state: "Massachusetts",
        state_code: "MA",
        avg_rent: dec!(2800),
    },
    City {
        id: "charlotte",
        name: "Charlotte",
        state: "North Carolina",
        state_code: "NC",
        avg_rent: dec!(1500),
    },
    City {
        id: "chicago",
        name: "Chicago",
        state: "Illinois",
        state_code: "IL",
        avg_rent: dec!(1900),
    },
    City {
        id: "columbus",
        name: "Columbus",
        state: "Ohio",
        state_code: "OH",
        avg_rent: dec!(1300),
    },
    City {
        id: "dallas",
        name: "Dallas",
        state: "Texas",
        state_code: "TX",
        avg_rent: dec!(1600),
    },
    City {
        id: "denver",
        name: "Denver",
        state: "Colorado",
        state_code: "CO",
        avg_rent: dec!(2000),
    },
    City {
        id: "detroit",
        name: "Detroit",
        state: "Michigan",
        state_code: "MI",
        avg_rent: dec!(1200),
    },
    City {
        id: "la",
        name: "Los Angeles",
        state: "California",
        state_code: "CA",
        avg_rent: dec!(2600),
    },
    City {
        id: "vegas",
        name: "Las Vegas",
        state: "Nevada",
        state_code: "NV",
        avg_rent: dec!(1600),
    },
    City {
        id: "miami",
        name: "Miami",
        state: "Florida",
        state_code: "FL",
        avg_rent: dec!(2200),
    },
    City {
        id: "minneapolis",
        name: "Minneapolis",
        state: "Minnesota",
        state_code: "MN",
        avg_rent: dec!(1600),
    },
    City {
        id: "nashville",
        name: "Nashville",
        state: "Tennessee",
        state_code: "TN",
        avg_rent: dec!(1700),
    },
    City {
        id: "nyc",
        name: "New York",
        state: "New York",
        state_code: "NY",
        avg_rent: dec!(3500),
    },
    City {
        id: "philadelphia",
        name: "Philadelphia",
        state: "Pennsylvania",
        state_code: "PA",
        avg_rent: dec!(1800),
    },
    City {
        id: "phoenix",
        name: "Phoenix",
        state: "Arizona",
        state_code: "AZ",
        avg_rent: dec!(1500),
    },
    City {
        id: "portland",
        name: "Portland",
        state: "Oregon",
        state_code: "OR",
        avg_rent: dec!(1800),
    },
    City {
        id: "raleigh",
        name: "Raleigh",
        state: "North Carolina",
        state_code: "NC",
        avg_rent: dec!(1400),
    },
    City {
        id: "slc",
        name: "Salt Lake City",
        state: "Utah",
        state_code: "UT",
        avg_rent: dec!(1500),
    },
    City {
        id: "sandiego",
        name: "San Diego",
        state: "California",
        state_code: "CA",
        avg_rent: dec!(2700),
    },
    City {
        id: "sf",
        name: "San Francisco",
        state: "California",
        state_code: "CA",
        avg_rent: dec!(3200),
    },
    City {
        id: "seattle",
        name: "Seattle",
        state: "Washington",
        state_code: "WA",
        avg_rent: dec!(2400),
    },
    City {
        id: "tampa",
        name: "Tampa",
        state: "Florida",
        state_code: "FL",
        avg_rent: dec!(1800),
    },
    City {
        id: "dc",
        name: "Washington",
        state: "D.C.",
        state_code: "DC",
        avg_rent: dec!(2500),
    },
];

pub fn city_by_id(id: &str) -> Option<&'static City> {
    CITIES.iter().find(|city| city.id == id.trim())
}

/// Average monthly rent for a city id; zero when the id is unknown.
pub fn city_rent(id: &str) -> Decimal {
    city_by_id(id).map_or(Decimal::ZERO, |city| city.avg_rent)
}

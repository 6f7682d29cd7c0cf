use serde::Serialize;
use strum::{AsRefStr, Display, EnumIter, EnumString};
use utoipa::ToSchema;

/// The 50 US states, keyed by their two-letter postal abbreviation.
///
/// Parsing is case-sensitive: only the upper-case postal code is accepted.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema, AsRefStr, Display, EnumIter, EnumString,
)]
pub enum UsState {
    #[strum(serialize = "AL")]
    #[serde(rename = "AL")]
    Alabama,
    #[strum(serialize = "AK")]
    #[serde(rename = "AK")]
    Alaska,
    #[strum(serialize = "AZ")]
    #[serde(rename = "AZ")]
    Arizona,
    #[strum(serialize = "AR")]
    #[serde(rename = "AR")]
    Arkansas,
    #[strum(serialize = "CA")]
    #[serde(rename = "CA")]
    California,
    #[strum(serialize = "CO")]
    #[serde(rename = "CO")]
    Colorado,
    #[strum(serialize = "CT")]
    #[serde(rename = "CT")]
    Connecticut,
    #[strum(serialize = "DE")]
    #[serde(rename = "DE")]
    Delaware,
    #[strum(serialize = "FL")]
    #[serde(rename = "FL")]
    Florida,
    #[strum(serialize = "GA")]
    #[serde(rename = "GA")]
    Georgia,
    #[strum(serialize = "HI")]
    #[serde(rename = "HI")]
    Hawaii,
    #[strum(serialize = "ID")]
    #[serde(rename = "ID")]
    Idaho,
    #[strum(serialize = "IL")]
    #[serde(rename = "IL")]
    Illinois,
    #[strum(serialize = "IN")]
    #[serde(rename = "IN")]
    Indiana,
    #[strum(serialize = "IA")]
    #[serde(rename = "IA")]
    Iowa,
    #[strum(serialize = "KS")]
    #[serde(rename = "KS")]
    Kansas,
    #[strum(serialize = "KY")]
    #[serde(rename = "KY")]
    Kentucky,
    #[strum(serialize = "LA")]
    #[serde(rename = "LA")]
    Louisiana,
    #[strum(serialize = "ME")]
    #[serde(rename = "ME")]
    Maine,
    #[strum(serialize = "MD")]
    #[serde(rename = "MD")]
    Maryland,
    #[strum(serialize = "MA")]
    #[serde(rename = "MA")]
    Massachusetts,
    #[strum(serialize = "MI")]
    #[serde(rename = "MI")]
    Michigan,
    #[strum(serialize = "MN")]
    #[serde(rename = "MN")]
    Minnesota,
    #[strum(serialize = "MS")]
    #[serde(rename = "MS")]
    Mississippi,
    #[strum(serialize = "MO")]
    #[serde(rename = "MO")]
    Missouri,
    #[strum(serialize = "MT")]
    #[serde(rename = "MT")]
    Montana,
    #[strum(serialize = "NE")]
    #[serde(rename = "NE")]
    Nebraska,
    #[strum(serialize = "NV")]
    #[serde(rename = "NV")]
    Nevada,
    #[strum(serialize = "NH")]
    #[serde(rename = "NH")]
    NewHampshire,
    #[strum(serialize = "NJ")]
    #[serde(rename = "NJ")]
    NewJersey,
    #[strum(serialize = "NM")]
    #[serde(rename = "NM")]
    NewMexico,
    #[strum(serialize = "NY")]
    #[serde(rename = "NY")]
    NewYork,
    #[strum(serialize = "NC")]
    #[serde(rename = "NC")]
    NorthCarolina,
    #[strum(serialize = "ND")]
    #[serde(rename = "ND")]
    NorthDakota,
    #[strum(serialize = "OH")]
    #[serde(rename = "OH")]
    Ohio,
    #[strum(serialize = "OK")]
    #[serde(rename = "OK")]
    Oklahoma,
    #[strum(serialize = "OR")]
    #[serde(rename = "OR")]
    Oregon,
    #[strum(serialize = "PA")]
    #[serde(rename = "PA")]
    Pennsylvania,
    #[strum(serialize = "RI")]
    #[serde(rename = "RI")]
    RhodeIsland,
    #[strum(serialize = "SC")]
    #[serde(rename = "SC")]
    SouthCarolina,
    #[strum(serialize = "SD")]
    #[serde(rename = "SD")]
    SouthDakota,
    #[strum(serialize = "TN")]
    #[serde(rename = "TN")]
    Tennessee,
    #[strum(serialize = "TX")]
    #[serde(rename = "TX")]
    Texas,
    #[strum(serialize = "UT")]
    #[serde(rename = "UT")]
    Utah,
    #[strum(serialize = "VT")]
    #[serde(rename = "VT")]
    Vermont,
    #[strum(serialize = "VA")]
    #[serde(rename = "VA")]
    Virginia,
    #[strum(serialize = "WA")]
    #[serde(rename = "WA")]
    Washington,
    #[strum(serialize = "WV")]
    #[serde(rename = "WV")]
    WestVirginia,
    #[strum(serialize = "WI")]
    #[serde(rename = "WI")]
    Wisconsin,
    #[strum(serialize = "WY")]
    #[serde(rename = "WY")]
    Wyoming,
}

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};
use utoipa::ToSchema;

/// Departments an employee can belong to.
///
/// The text form (`HR`, `Engineering`, ...) is what the form submits, what the
/// JSON carries and what the `department` column stores.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
    EnumIter,
    ToSchema,
)]
pub enum Department {
    #[serde(rename = "HR")]
    #[strum(serialize = "HR")]
    Hr,
    Engineering,
    Marketing,
    Finance,
    Operations,
}

impl TryFrom<String> for Department {
    type Error = strum::ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

use core::fmt;
use core::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use larder_core::input::{format_date, parse_date};
use larder_core::name::validate_name;
use larder_core::{Clock, DomainError, DomainResult, Entity, SystemClock, ValueObject};

/// Measurement kind of an ingredient quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeasurementUnit {
    /// Counted items (price is a total for all items).
    Unit,
    Gram,
    Liter,
}

impl MeasurementUnit {
    /// Map a numeric unit code (0 = unit, 1 = gram, 2 = liter).
    pub fn from_code(code: i64) -> DomainResult<Self> {
        match code {
            0 => Ok(MeasurementUnit::Unit),
            1 => Ok(MeasurementUnit::Gram),
            2 => Ok(MeasurementUnit::Liter),
            other => Err(DomainError::validation(format!(
                "unknown measurement code {other}, expected 0, 1 or 2"
            ))),
        }
    }

    pub fn code(self) -> u8 {
        match self {
            MeasurementUnit::Unit => 0,
            MeasurementUnit::Gram => 1,
            MeasurementUnit::Liter => 2,
        }
    }

    /// Short display label: `Unit`, `G` or `L`.
    pub fn label(self) -> &'static str {
        match self {
            MeasurementUnit::Unit => "Unit",
            MeasurementUnit::Gram => "G",
            MeasurementUnit::Liter => "L",
        }
    }
}

impl ValueObject for MeasurementUnit {}

impl fmt::Display for MeasurementUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for MeasurementUnit {
    type Err = DomainError;

    /// Accepts the numeric code or the label, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(code) = s.parse::<i64>() {
            return Self::from_code(code);
        }
        match s.to_ascii_lowercase().as_str() {
            "unit" => Ok(MeasurementUnit::Unit),
            "g" | "gram" => Ok(MeasurementUnit::Gram),
            "l" | "liter" => Ok(MeasurementUnit::Liter),
            _ => Err(DomainError::validation(format!(
                "unknown measurement '{s}'"
            ))),
        }
    }
}

/// Expiration state of an ingredient relative to a given day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "date", rename_all = "snake_case")]
pub enum ExpirationStatus {
    Expired,
    ExpiresToday,
    ExpiresOn(NaiveDate),
    /// Requirement-form ingredients carry no date.
    NoExpiration,
}

impl ExpirationStatus {
    pub fn is_expired(self) -> bool {
        self == ExpirationStatus::Expired
    }
}

impl ValueObject for ExpirationStatus {}

impl fmt::Display for ExpirationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExpirationStatus::Expired => f.write_str("Expired"),
            ExpirationStatus::ExpiresToday => f.write_str("Expires Today"),
            ExpirationStatus::ExpiresOn(date) => f.write_str(&format_date(*date)),
            ExpirationStatus::NoExpiration => f.write_str("No expiration"),
        }
    }
}

/// A named quantity of a consumable good.
///
/// Two forms exist:
/// - **stocked** (`Ingredient::stocked`): carries a total price and an
///   expiration date; lives in the `Inventory`.
/// - **requirement** (`Ingredient::requirement`): name, quantity and unit
///   only; describes what a recipe needs.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(into = "IngredientView")]
pub struct Ingredient {
    name: String,
    quantity: f64,
    unit: MeasurementUnit,
    price: f64,
    expiration: Option<NaiveDate>,
}

impl Ingredient {
    /// Create a stocked ingredient.
    ///
    /// `expiration` must be a `yyyy-MM-dd` date.
    pub fn stocked(
        name: &str,
        quantity: f64,
        unit: MeasurementUnit,
        price: f64,
        expiration: &str,
    ) -> DomainResult<Self> {
        let name = validate_name(name, "ingredient name")?;
        ensure_positive_quantity(quantity)?;
        if !(price >= 0.0) || !price.is_finite() {
            return Err(DomainError::validation("price cannot be negative"));
        }
        let expiration = parse_date(expiration)?;

        Ok(Self {
            name,
            quantity,
            unit,
            price,
            expiration: Some(expiration),
        })
    }

    /// Create a requirement (what a recipe needs): no price, no expiration.
    pub fn requirement(name: &str, quantity: f64, unit: MeasurementUnit) -> DomainResult<Self> {
        let name = validate_name(name, "ingredient name")?;
        ensure_positive_quantity(quantity)?;

        Ok(Self {
            name,
            quantity,
            unit,
            price: 0.0,
            expiration: None,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn quantity(&self) -> f64 {
        self.quantity
    }

    pub fn unit(&self) -> MeasurementUnit {
        self.unit
    }

    pub fn expiration(&self) -> Option<NaiveDate> {
        self.expiration
    }

    /// Price per counted item for `Unit` ingredients, the stored price otherwise.
    pub fn unit_price(&self) -> f64 {
        match self.unit {
            MeasurementUnit::Unit => self.price / self.quantity,
            MeasurementUnit::Gram | MeasurementUnit::Liter => self.price,
        }
    }

    /// Expiration status relative to `today`.
    pub fn expiration_status_on(&self, today: NaiveDate) -> ExpirationStatus {
        match self.expiration {
            None => ExpirationStatus::NoExpiration,
            Some(date) if date < today => ExpirationStatus::Expired,
            Some(date) if date == today => ExpirationStatus::ExpiresToday,
            Some(date) => ExpirationStatus::ExpiresOn(date),
        }
    }

    /// Expiration status relative to the local calendar date.
    pub fn expiration_status(&self) -> ExpirationStatus {
        self.expiration_status_on(SystemClock.today())
    }

    pub fn is_expired_on(&self, today: NaiveDate) -> bool {
        self.expiration_status_on(today).is_expired()
    }

    /// Add `amount` to the stocked quantity.
    pub fn restock(&mut self, amount: f64) -> DomainResult<()> {
        if !(amount > 0.0) || !amount.is_finite() {
            return Err(DomainError::validation(
                "restock amount cannot be negative or zero",
            ));
        }
        self.quantity += amount;
        Ok(())
    }

    /// Take `amount` out of the stocked quantity.
    ///
    /// While the resulting unit price is positive, the stored price is
    /// reduced by `amount / price`. Quantity is untouched on failure.
    pub fn consume(&mut self, amount: f64) -> DomainResult<()> {
        if !(amount > 0.0) {
            return Err(DomainError::validation(
                "used amount cannot be negative or zero",
            ));
        }
        if amount > self.quantity {
            return Err(DomainError::validation(format!(
                "used amount {amount} is higher than the stocked amount {} of {}",
                self.quantity, self.name
            )));
        }

        self.quantity -= amount;
        if self.unit_price() > 0.0 {
            // Subtracts a ratio from a price; pinned by `consume_adjusts_price_by_amount_over_price`.
            self.price -= amount / self.price;
        }
        Ok(())
    }
}

impl Entity for Ingredient {
    type Id = str;

    fn id(&self) -> &Self::Id {
        &self.name
    }
}

fn ensure_positive_quantity(quantity: f64) -> DomainResult<()> {
    if !(quantity > 0.0) || !quantity.is_finite() {
        return Err(DomainError::validation("amount cannot be zero or negative"));
    }
    Ok(())
}

/// Serialized shape of an ingredient: unit price instead of the raw total.
#[derive(Serialize)]
struct IngredientView {
    name: String,
    quantity: f64,
    unit: MeasurementUnit,
    unit_price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    expiration: Option<String>,
}

impl From<Ingredient> for IngredientView {
    fn from(value: Ingredient) -> Self {
        Self {
            unit_price: value.unit_price(),
            expiration: value.expiration.map(format_date),
            name: value.name,
            quantity: value.quantity,
            unit: value.unit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn tomato() -> Ingredient {
        Ingredient::stocked("tomato", 5.0, MeasurementUnit::Unit, 25.0, "2030-01-10").unwrap()
    }

    #[test]
    fn stocked_kiwi_has_canonical_name_unit_price_and_is_expired() {
        let kiwi =
            Ingredient::stocked("kiwi", 10.0, MeasurementUnit::Unit, 100.0, "2023-04-25").unwrap();
        assert_eq!(kiwi.name(), "Kiwi");
        assert_eq!(kiwi.unit_price(), 10.0);
        assert_eq!(kiwi.expiration_status(), ExpirationStatus::Expired);
        assert_eq!(kiwi.expiration_status().to_string(), "Expired");
    }

    #[test]
    fn unit_price_is_raw_price_for_grams_and_liters() {
        let flour =
            Ingredient::stocked("flour", 1000.0, MeasurementUnit::Gram, 30.0, "2030-01-01").unwrap();
        let milk =
            Ingredient::stocked("milk", 2.0, MeasurementUnit::Liter, 40.0, "2030-01-01").unwrap();
        assert_eq!(flour.unit_price(), 30.0);
        assert_eq!(milk.unit_price(), 40.0);
    }

    #[test]
    fn expiration_status_is_relative_to_today() {
        let milk =
            Ingredient::stocked("milk", 1.0, MeasurementUnit::Liter, 20.0, "2024-05-10").unwrap();
        assert_eq!(milk.expiration_status_on(day(2024, 5, 11)), ExpirationStatus::Expired);
        assert_eq!(
            milk.expiration_status_on(day(2024, 5, 10)),
            ExpirationStatus::ExpiresToday
        );
        let upcoming = milk.expiration_status_on(day(2024, 5, 9));
        assert_eq!(upcoming, ExpirationStatus::ExpiresOn(day(2024, 5, 10)));
        assert_eq!(upcoming.to_string(), "2024-05-10");
        assert_eq!(
            milk.expiration_status_on(day(2024, 5, 10)).to_string(),
            "Expires Today"
        );
    }

    #[test]
    fn requirement_form_has_no_expiration_or_price() {
        let garlic = Ingredient::requirement("GARLIC", 3.0, MeasurementUnit::Unit).unwrap();
        assert_eq!(garlic.name(), "Garlic");
        assert_eq!(garlic.expiration(), None);
        assert_eq!(garlic.unit_price(), 0.0);
        assert_eq!(
            garlic.expiration_status_on(day(2099, 1, 1)),
            ExpirationStatus::NoExpiration
        );
        assert!(!garlic.is_expired_on(day(2099, 1, 1)));
    }

    #[test]
    fn stocked_rejects_invalid_arguments() {
        let cases = [
            Ingredient::stocked(" kiwi", 1.0, MeasurementUnit::Unit, 1.0, "2030-01-01"),
            Ingredient::stocked("kiwi ", 1.0, MeasurementUnit::Unit, 1.0, "2030-01-01"),
            Ingredient::stocked("", 1.0, MeasurementUnit::Unit, 1.0, "2030-01-01"),
            Ingredient::stocked("kiwi", 0.0, MeasurementUnit::Unit, 1.0, "2030-01-01"),
            Ingredient::stocked("kiwi", -2.0, MeasurementUnit::Unit, 1.0, "2030-01-01"),
            Ingredient::stocked("kiwi", 1.0, MeasurementUnit::Unit, -0.5, "2030-01-01"),
            Ingredient::stocked("kiwi", 1.0, MeasurementUnit::Unit, 1.0, "01-01-2030"),
            Ingredient::stocked("kiwi", 1.0, MeasurementUnit::Unit, 1.0, "2030-13-01"),
            Ingredient::stocked("kiwi", 1.0, MeasurementUnit::Unit, 1.0, "+999-01-01"),
        ];
        for case in cases {
            assert!(matches!(case, Err(DomainError::Validation(_))), "{case:?}");
        }
    }

    #[test]
    fn stocked_accepts_free_ingredients() {
        let salt = Ingredient::stocked("salt", 10.0, MeasurementUnit::Gram, 0.0, "2030-01-01");
        assert!(salt.is_ok());
    }

    #[test]
    fn requirement_rejects_invalid_arguments() {
        assert!(Ingredient::requirement("  ", 1.0, MeasurementUnit::Unit).is_err());
        assert!(Ingredient::requirement(" egg", 1.0, MeasurementUnit::Unit).is_err());
        assert!(Ingredient::requirement("egg", 0.0, MeasurementUnit::Unit).is_err());
        assert!(Ingredient::requirement("egg", f64::NAN, MeasurementUnit::Unit).is_err());
    }

    #[test]
    fn measurement_codes_and_labels() {
        assert_eq!(MeasurementUnit::from_code(0).unwrap(), MeasurementUnit::Unit);
        assert_eq!(MeasurementUnit::from_code(1).unwrap(), MeasurementUnit::Gram);
        assert_eq!(MeasurementUnit::from_code(2).unwrap(), MeasurementUnit::Liter);
        assert!(MeasurementUnit::from_code(3).is_err());
        assert!(MeasurementUnit::from_code(-1).is_err());

        assert_eq!("2".parse::<MeasurementUnit>().unwrap(), MeasurementUnit::Liter);
        assert_eq!("g".parse::<MeasurementUnit>().unwrap(), MeasurementUnit::Gram);
        assert_eq!(" Unit ".parse::<MeasurementUnit>().unwrap(), MeasurementUnit::Unit);
        assert!("cups".parse::<MeasurementUnit>().is_err());

        assert_eq!(MeasurementUnit::Unit.to_string(), "Unit");
        assert_eq!(MeasurementUnit::Gram.to_string(), "G");
        assert_eq!(MeasurementUnit::Liter.to_string(), "L");
        assert_eq!(MeasurementUnit::Liter.code(), 2);
    }

    #[test]
    fn restock_adds_and_rejects_non_positive() {
        let mut t = tomato();
        t.restock(3.0).unwrap();
        assert_eq!(t.quantity(), 8.0);
        assert!(t.restock(0.0).is_err());
        assert!(t.restock(-1.0).is_err());
        assert_eq!(t.quantity(), 8.0);
    }

    #[test]
    fn consume_rejects_non_positive_and_excess() {
        let mut t = tomato();
        assert!(t.consume(0.0).is_err());
        assert!(t.consume(-1.0).is_err());
        assert!(t.consume(5.5).is_err());
        assert_eq!(t.quantity(), 5.0);

        t.consume(5.0).unwrap();
        assert_eq!(t.quantity(), 0.0);
    }

    #[test]
    fn consume_adjusts_price_by_amount_over_price() {
        // Grams: unit price is the raw price, so 30 - 200 / 30.
        let mut flour =
            Ingredient::stocked("flour", 1000.0, MeasurementUnit::Gram, 30.0, "2030-01-01").unwrap();
        flour.consume(200.0).unwrap();
        assert_eq!(flour.quantity(), 800.0);
        assert_eq!(flour.unit_price(), 30.0 - 200.0 / 30.0);

        // Units: total 25 - 2 / 25 spread over the 3 remaining.
        let mut t = tomato();
        t.consume(2.0).unwrap();
        assert_eq!(t.unit_price(), (25.0 - 2.0 / 25.0) / 3.0);

        // Free ingredients keep a zero price.
        let mut salt =
            Ingredient::stocked("salt", 10.0, MeasurementUnit::Gram, 0.0, "2030-01-01").unwrap();
        salt.consume(4.0).unwrap();
        assert_eq!(salt.unit_price(), 0.0);
    }

    #[test]
    fn serializes_unit_price_not_total_price() {
        let json = serde_json::to_value(tomato()).unwrap();
        assert_eq!(json["name"], "Tomato");
        assert_eq!(json["unit"], "unit");
        assert_eq!(json["unit_price"], 5.0);
        assert_eq!(json["expiration"], "2030-01-10");
        assert!(json.get("price").is_none());
    }

    #[test]
    fn entity_id_is_canonical_name() {
        assert_eq!(tomato().id(), "Tomato");
    }

    proptest! {
        /// Property: restock(a) then consume(a) restores the quantity.
        #[test]
        fn restock_then_consume_restores_quantity(
            start in 0.1f64..1_000.0,
            amount in 0.1f64..1_000.0,
        ) {
            let mut flour = Ingredient::stocked(
                "flour", start, MeasurementUnit::Gram, 12.0, "2030-01-01",
            ).unwrap();
            flour.restock(amount).unwrap();
            flour.consume(amount).unwrap();
            prop_assert!((flour.quantity() - start).abs() < 1e-9);
        }

        /// Property: a failed consume leaves the quantity untouched.
        #[test]
        fn failed_consume_leaves_quantity_unchanged(
            start in 0.1f64..100.0,
            excess in 0.001f64..100.0,
            negative in -100.0f64..=0.0,
        ) {
            let mut milk = Ingredient::stocked(
                "milk", start, MeasurementUnit::Liter, 9.0, "2030-01-01",
            ).unwrap();
            prop_assert!(milk.consume(start + excess).is_err());
            prop_assert!(milk.consume(negative).is_err());
            prop_assert_eq!(milk.quantity(), start);
        }

        /// Property: with a positive price, consume subtracts amount / price
        /// from the stored price (gram/liter goods expose the raw price).
        #[test]
        fn consume_price_formula_is_literal(
            price in 0.5f64..500.0,
            quantity in 1.0f64..100.0,
            fraction in 0.01f64..=1.0,
        ) {
            let amount = quantity * fraction;
            let mut oil = Ingredient::stocked(
                "oil", quantity, MeasurementUnit::Liter, price, "2030-01-01",
            ).unwrap();
            oil.consume(amount).unwrap();
            prop_assert_eq!(oil.unit_price(), price - amount / price);
        }
    }
}

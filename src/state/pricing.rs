//! Plan and add-on pricing

use super::FormError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::Add;
use strum::{AsRefStr, Display, EnumCount, EnumIter, EnumString, IntoEnumIterator};

/// Subscription plan tiers
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Display,
    EnumString,
    EnumIter,
    EnumCount,
    AsRefStr,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum PlanId {
    #[default]
    Arcade,
    Advanced,
    Pro,
}

impl PlanId {
    /// Parse a plan id, rejecting anything outside the known tiers
    pub fn parse(id: &str) -> Result<Self, FormError> {
        id.parse()
            .map_err(|_| FormError::UnknownIdentifier(id.to_string()))
    }

    /// Display name ("Arcade", "Advanced", "Pro")
    pub fn label(&self) -> String {
        super::summary::capitalize(self.as_ref())
    }

    /// Previous tier, wrapping around
    pub fn prev(self) -> Self {
        let all: Vec<Self> = Self::iter().collect();
        let idx = self as usize;
        all[(idx + all.len() - 1) % all.len()]
    }

    /// Next tier, wrapping around
    pub fn next(self) -> Self {
        let all: Vec<Self> = Self::iter().collect();
        all[(self as usize + 1) % all.len()]
    }
}

/// Optional add-on services
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    EnumIter,
    EnumCount,
    AsRefStr,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum AddonId {
    OnlineService,
    LargerStorage,
    CustomizableProfile,
}

impl AddonId {
    /// Parse an add-on id, rejecting anything outside the known services
    pub fn parse(id: &str) -> Result<Self, FormError> {
        id.parse()
            .map_err(|_| FormError::UnknownIdentifier(id.to_string()))
    }

    /// Display name ("Online service", ...)
    pub fn label(&self) -> String {
        super::summary::humanize(self.as_ref())
    }
}

/// Billing period
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cycle {
    #[default]
    Monthly,
    Yearly,
}

impl Cycle {
    pub fn from_yearly(is_yearly: bool) -> Self {
        if is_yearly {
            Self::Yearly
        } else {
            Self::Monthly
        }
    }

    pub fn is_yearly(&self) -> bool {
        matches!(self, Self::Yearly)
    }

    pub fn toggle(&self) -> Self {
        match self {
            Self::Monthly => Self::Yearly,
            Self::Yearly => Self::Monthly,
        }
    }

    pub fn suffix(&self) -> &'static str {
        match self {
            Self::Monthly => "/mo",
            Self::Yearly => "/yr",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Monthly => "Monthly",
            Self::Yearly => "Yearly",
        }
    }

    /// Noun used in the total line ("per month")
    pub fn period(&self) -> &'static str {
        match self {
            Self::Monthly => "month",
            Self::Yearly => "year",
        }
    }
}

/// Whole amount in the billing currency
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(u32);

impl Money {
    pub const fn new(amount: u32) -> Self {
        Self(amount)
    }

    pub const fn amount(self) -> u32 {
        self.0
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0.saturating_add(rhs.0))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::default(), Add::add)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}", self.0)
    }
}

/// Monthly and yearly price of one item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PricePair {
    pub monthly: Money,
    pub yearly: Money,
}

impl PricePair {
    pub const fn new(monthly: u32, yearly: u32) -> Self {
        Self {
            monthly: Money::new(monthly),
            yearly: Money::new(yearly),
        }
    }

    pub fn for_cycle(&self, cycle: Cycle) -> Money {
        match cycle {
            Cycle::Monthly => self.monthly,
            Cycle::Yearly => self.yearly,
        }
    }
}

/// Anything with a price in the table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Priced {
    Plan(PlanId),
    Addon(AddonId),
}

impl From<PlanId> for Priced {
    fn from(id: PlanId) -> Self {
        Priced::Plan(id)
    }
}

impl From<AddonId> for Priced {
    fn from(id: AddonId) -> Self {
        Priced::Addon(id)
    }
}

const STANDARD_PLANS: [PricePair; PlanId::COUNT] = [
    PricePair::new(9, 90),   // arcade
    PricePair::new(12, 120), // advanced
    PricePair::new(15, 150), // pro
];

const STANDARD_ADDONS: [PricePair; AddonId::COUNT] = [
    PricePair::new(1, 10), // online-service
    PricePair::new(2, 20), // larger-storage
    PricePair::new(2, 20), // customizable-profile
];

/// Immutable price lookup, complete for every plan and add-on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PricingTable {
    plans: [PricePair; PlanId::COUNT],
    addons: [PricePair; AddonId::COUNT],
}

impl Default for PricingTable {
    fn default() -> Self {
        Self::standard()
    }
}

impl PricingTable {
    /// The published price list
    pub fn standard() -> Self {
        Self {
            plans: STANDARD_PLANS,
            addons: STANDARD_ADDONS,
        }
    }

    /// Build a table from explicit entries.
    ///
    /// Every plan and add-on needs an entry; later duplicates win.
    pub fn new(
        plans: impl IntoIterator<Item = (PlanId, PricePair)>,
        addons: impl IntoIterator<Item = (AddonId, PricePair)>,
    ) -> Result<Self, FormError> {
        let mut plan_slots: [Option<PricePair>; PlanId::COUNT] = [None; PlanId::COUNT];
        for (id, price) in plans {
            plan_slots[id as usize] = Some(price);
        }
        let mut addon_slots: [Option<PricePair>; AddonId::COUNT] = [None; AddonId::COUNT];
        for (id, price) in addons {
            addon_slots[id as usize] = Some(price);
        }

        let mut table = Self::standard();
        for id in PlanId::iter() {
            table.plans[id as usize] =
                plan_slots[id as usize].ok_or_else(|| FormError::MissingPrice(id.to_string()))?;
        }
        for id in AddonId::iter() {
            table.addons[id as usize] =
                addon_slots[id as usize].ok_or_else(|| FormError::MissingPrice(id.to_string()))?;
        }
        Ok(table)
    }

    /// Price of a plan or add-on for the given cycle
    pub fn price_of(&self, item: impl Into<Priced>, cycle: Cycle) -> Money {
        match item.into() {
            Priced::Plan(id) => self.plans[id as usize].for_cycle(cycle),
            Priced::Addon(id) => self.addons[id as usize].for_cycle(cycle),
        }
    }

    /// Price lookup by raw id string
    pub fn price_of_id(&self, id: &str, cycle: Cycle) -> Result<Money, FormError> {
        if let Ok(plan) = id.parse::<PlanId>() {
            return Ok(self.price_of(plan, cycle));
        }
        if let Ok(addon) = id.parse::<AddonId>() {
            return Ok(self.price_of(addon, cycle));
        }
        Err(FormError::UnknownIdentifier(id.to_string()))
    }

    /// Card price label: `$9/mo` for plans, `+$1/mo` for add-ons
    pub fn price_tag(&self, item: impl Into<Priced>, cycle: Cycle) -> String {
        let item = item.into();
        let price = self.price_of(item, cycle);
        match item {
            Priced::Plan(_) => format!("{}{}", price, cycle.suffix()),
            Priced::Addon(_) => format!("+{}{}", price, cycle.suffix()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod ids {
        use super::*;

        #[test]
        fn test_plan_ids_use_kebab_case() {
            assert_eq!(PlanId::Arcade.to_string(), "arcade");
            assert_eq!(PlanId::parse("advanced"), Ok(PlanId::Advanced));
            assert_eq!(PlanId::parse("pro"), Ok(PlanId::Pro));
        }

        #[test]
        fn test_addon_ids_use_kebab_case() {
            assert_eq!(AddonId::OnlineService.to_string(), "online-service");
            assert_eq!(
                AddonId::parse("customizable-profile"),
                Ok(AddonId::CustomizableProfile)
            );
        }

        #[test]
        fn test_unknown_ids_are_rejected() {
            assert_eq!(
                PlanId::parse("enterprise"),
                Err(FormError::UnknownIdentifier("enterprise".to_string()))
            );
            assert!(PlanId::parse("Pro").is_err());
            assert!(AddonId::parse("online_service").is_err());
        }

        #[test]
        fn test_default_plan_is_arcade() {
            assert_eq!(PlanId::default(), PlanId::Arcade);
        }

        #[test]
        fn test_plan_prev_next_wrap() {
            assert_eq!(PlanId::Pro.next(), PlanId::Arcade);
            assert_eq!(PlanId::Arcade.prev(), PlanId::Pro);
            assert_eq!(PlanId::Arcade.next(), PlanId::Advanced);
        }

        #[test]
        fn test_labels() {
            assert_eq!(PlanId::Advanced.label(), "Advanced");
            assert_eq!(AddonId::LargerStorage.label(), "Larger storage");
        }
    }

    mod cycle {
        use super::*;

        #[test]
        fn test_default_is_monthly() {
            assert_eq!(Cycle::default(), Cycle::Monthly);
        }

        #[test]
        fn test_toggle_round_trips() {
            assert_eq!(Cycle::Monthly.toggle(), Cycle::Yearly);
            assert_eq!(Cycle::Yearly.toggle(), Cycle::Monthly);
        }

        #[test]
        fn test_suffixes() {
            assert_eq!(Cycle::Monthly.suffix(), "/mo");
            assert_eq!(Cycle::Yearly.suffix(), "/yr");
            assert_eq!(Cycle::from_yearly(true), Cycle::Yearly);
        }
    }

    mod table {
        use super::*;

        #[test]
        fn test_standard_plan_prices() {
            let table = PricingTable::standard();
            assert_eq!(table.price_of(PlanId::Arcade, Cycle::Monthly), Money::new(9));
            assert_eq!(table.price_of(PlanId::Advanced, Cycle::Yearly), Money::new(120));
            assert_eq!(table.price_of(PlanId::Pro, Cycle::Yearly), Money::new(150));
        }

        #[test]
        fn test_standard_addon_prices() {
            let table = PricingTable::standard();
            assert_eq!(
                table.price_of(AddonId::OnlineService, Cycle::Monthly),
                Money::new(1)
            );
            assert_eq!(
                table.price_of(AddonId::CustomizableProfile, Cycle::Yearly),
                Money::new(20)
            );
        }

        #[test]
        fn test_price_of_id() {
            let table = PricingTable::standard();
            assert_eq!(table.price_of_id("pro", Cycle::Monthly), Ok(Money::new(15)));
            assert_eq!(
                table.price_of_id("larger-storage", Cycle::Yearly),
                Ok(Money::new(20))
            );
            assert_eq!(
                table.price_of_id("gold", Cycle::Monthly),
                Err(FormError::UnknownIdentifier("gold".to_string()))
            );
        }

        #[test]
        fn test_price_tags() {
            let table = PricingTable::standard();
            assert_eq!(table.price_tag(PlanId::Arcade, Cycle::Monthly), "$9/mo");
            assert_eq!(table.price_tag(PlanId::Arcade, Cycle::Yearly), "$90/yr");
            assert_eq!(
                table.price_tag(AddonId::OnlineService, Cycle::Yearly),
                "+$10/yr"
            );
        }

        #[test]
        fn test_new_requires_every_entry() {
            let result = PricingTable::new(
                [(PlanId::Arcade, PricePair::new(1, 10))],
                AddonId::iter().map(|id| (id, PricePair::new(1, 1))),
            );
            assert_eq!(result, Err(FormError::MissingPrice("advanced".to_string())));
        }

        #[test]
        fn test_new_with_full_entries() {
            let table = PricingTable::new(
                PlanId::iter().map(|id| (id, PricePair::new(5, 50))),
                AddonId::iter().map(|id| (id, PricePair::new(1, 10))),
            )
            .unwrap();
            assert_eq!(table.price_of(PlanId::Pro, Cycle::Yearly), Money::new(50));
        }

        #[test]
        fn test_money_sum_and_display() {
            let total: Money = [Money::new(150), Money::new(10), Money::new(20)]
                .into_iter()
                .sum();
            assert_eq!(total, Money::new(180));
            assert_eq!(total.to_string(), "$180");
        }
    }
}

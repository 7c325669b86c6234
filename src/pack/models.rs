use strum_macros::{Display, EnumIter, FromRepr};

/// Reward pack tiers, keyed by their wire code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, FromRepr)]
#[repr(u8)]
pub enum PackType {
    Silver = 0,
    PremiumSilver = 1,
    Gold = 2,
    PremiumGold = 3,
    UltimateGold = 4,
    PrimeGold = 5,
}

impl PackType {
    pub fn price(self) -> u32 {
        match self {
            PackType::Silver => 500,
            PackType::PremiumSilver => 750,
            PackType::Gold => 2000,
            PackType::PremiumGold => 5000,
            PackType::UltimateGold => 10000,
            PackType::PrimeGold => 15000,
        }
    }

    /// Inclusive overall rating range the pack draws from
    pub fn overall_range(self) -> (u32, u32) {
        match self {
            PackType::Silver => (65, 69),
            PackType::PremiumSilver => (70, 74),
            PackType::Gold => (75, 79),
            PackType::PremiumGold => (77, 83),
            PackType::UltimateGold => (81, 87),
            PackType::PrimeGold => (84, 99),
        }
    }
}

//! Per-performance pricing: amount owed and volume credits earned.
//!
//! All amounts are exact integers in minor currency units (e.g., cents).

use serde::{Deserialize, Serialize};

use theater_core::{DomainError, DomainResult, ValueObject};

use crate::invoice::Performance;
use crate::play::{Genre, Play};

/// Pricing rates for one statement run.
///
/// Every field is a positive integer; amounts are in minor currency units.
/// Missing fields fall back to the reference rates when deserialized, so a
/// regional rate file only needs to list what it overrides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PricingConfig {
    pub tragedy_base_amount: u64,
    pub tragedy_audience_threshold: u64,
    pub tragedy_over_base_capacity_per_person: u64,
    pub comedy_base_amount: u64,
    pub comedy_audience_threshold: u64,
    pub comedy_over_base_capacity_amount: u64,
    pub comedy_over_base_capacity_per_person: u64,
    pub comedy_amount_per_audience: u64,
    pub base_volume_credit_threshold: u64,
    pub comedy_extra_volume_factor: u64,
    /// Minor units per major unit (100 for cents).
    pub percent_factor: u64,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            tragedy_base_amount: 40_000,
            tragedy_audience_threshold: 30,
            tragedy_over_base_capacity_per_person: 1_000,
            comedy_base_amount: 30_000,
            comedy_audience_threshold: 20,
            comedy_over_base_capacity_amount: 10_000,
            comedy_over_base_capacity_per_person: 500,
            comedy_amount_per_audience: 300,
            base_volume_credit_threshold: 30,
            comedy_extra_volume_factor: 5,
            percent_factor: 100,
        }
    }
}

impl ValueObject for PricingConfig {}

impl PricingConfig {
    /// Reject configurations with a zero constant.
    pub fn validate(&self) -> DomainResult<()> {
        let fields = [
            ("tragedy_base_amount", self.tragedy_base_amount),
            ("tragedy_audience_threshold", self.tragedy_audience_threshold),
            (
                "tragedy_over_base_capacity_per_person",
                self.tragedy_over_base_capacity_per_person,
            ),
            ("comedy_base_amount", self.comedy_base_amount),
            ("comedy_audience_threshold", self.comedy_audience_threshold),
            (
                "comedy_over_base_capacity_amount",
                self.comedy_over_base_capacity_amount,
            ),
            (
                "comedy_over_base_capacity_per_person",
                self.comedy_over_base_capacity_per_person,
            ),
            ("comedy_amount_per_audience", self.comedy_amount_per_audience),
            (
                "base_volume_credit_threshold",
                self.base_volume_credit_threshold,
            ),
            ("comedy_extra_volume_factor", self.comedy_extra_volume_factor),
            ("percent_factor", self.percent_factor),
        ];

        for (name, value) in fields {
            if value == 0 {
                return Err(DomainError::validation(format!(
                    "pricing constant {name} must be positive"
                )));
            }
        }
        Ok(())
    }

    /// Amount owed for one performance of the given genre.
    pub fn amount_for(&self, genre: Genre, audience: u32) -> DomainResult<u64> {
        let audience = u64::from(audience);
        match genre {
            Genre::Tragedy => {
                let mut amount = self.tragedy_base_amount;
                if audience > self.tragedy_audience_threshold {
                    let extra = checked(
                        self.tragedy_over_base_capacity_per_person
                            .checked_mul(audience - self.tragedy_audience_threshold),
                    )?;
                    amount = checked(amount.checked_add(extra))?;
                }
                Ok(amount)
            }
            Genre::Comedy => {
                let mut amount = self.comedy_base_amount;
                if audience > self.comedy_audience_threshold {
                    let per_person = checked(
                        self.comedy_over_base_capacity_per_person
                            .checked_mul(audience - self.comedy_audience_threshold),
                    )?;
                    let extra =
                        checked(self.comedy_over_base_capacity_amount.checked_add(per_person))?;
                    amount = checked(amount.checked_add(extra))?;
                }
                let per_audience = checked(self.comedy_amount_per_audience.checked_mul(audience))?;
                checked(amount.checked_add(per_audience))
            }
        }
    }

    /// Volume credits earned for one performance of the given genre.
    pub fn credits_for(&self, genre: Genre, audience: u32) -> u64 {
        let audience = u64::from(audience);
        let mut credits = audience.saturating_sub(self.base_volume_credit_threshold);
        if genre == Genre::Comedy {
            // A zero factor (unvalidated config) earns no bonus.
            credits += audience
                .checked_div(self.comedy_extra_volume_factor)
                .unwrap_or(0);
        }
        credits
    }
}

fn checked(value: Option<u64>) -> DomainResult<u64> {
    value.ok_or_else(|| DomainError::invariant("performance amount overflow"))
}

fn ensure_resolved(performance: &Performance, play: &Play) -> DomainResult<()> {
    if &performance.play_id != play.id_typed() {
        return Err(DomainError::invariant(format!(
            "performance of {} priced against play {}",
            performance.play_id,
            play.id_typed()
        )));
    }
    Ok(())
}

/// Amount owed for `performance`, in minor currency units.
///
/// Fails with `UnknownGenre` if the play's genre is not recognized.
pub fn compute_amount(
    performance: &Performance,
    play: &Play,
    config: &PricingConfig,
) -> DomainResult<u64> {
    ensure_resolved(performance, play)?;
    config.amount_for(play.genre()?, performance.audience)
}

/// Volume credits earned for `performance`.
///
/// Unknown genres are rejected here too, so credits are never reported for a
/// performance that could not be priced.
pub fn compute_credits(
    performance: &Performance,
    play: &Play,
    config: &PricingConfig,
) -> DomainResult<u64> {
    ensure_resolved(performance, play)?;
    Ok(config.credits_for(play.genre()?, performance.audience))
}

//! Per-entity currency registry.
//!
//! Holds the currencies configured for one tenant entity and enforces the
//! base currency invariant: at most one currency is flagged as base, and
//! the base currency is always active.

use meridian_shared::config::CurrencyConfig;
use meridian_shared::types::{CurrencyCode, CurrencyId, EntityId, RoundingRule};
use tracing::{debug, info};

use super::error::CurrencyError;
use super::pairs::{CurrencyPair, currency_pairs};
use super::types::Currency;
use super::validation::{
    CurrencyInput, parse_code, validate_currency_input, validate_decimal_places,
};

/// Currencies configured for one entity, in insertion order.
#[derive(Debug, Clone)]
pub struct CurrencyRegistry {
    entity_id: EntityId,
    default_rounding_rule: RoundingRule,
    max_decimal_places: u32,
    currencies: Vec<Currency>,
}

impl CurrencyRegistry {
    /// Creates an empty registry using the configured currency defaults.
    #[must_use]
    pub fn new(entity_id: EntityId, config: &CurrencyConfig) -> Self {
        Self {
            entity_id,
            default_rounding_rule: config.default_rounding_rule,
            max_decimal_places: config.effective_max_decimal_places(),
            currencies: Vec::new(),
        }
    }

    /// The entity owning these currencies.
    #[must_use]
    pub const fn entity_id(&self) -> EntityId {
        self.entity_id
    }

    /// Adds a currency from form input.
    ///
    /// The new currency becomes base when the input asks for it, or when it
    /// is active and the registry has no base yet. Becoming base clears the
    /// flag on the previous base.
    pub fn add(&mut self, input: CurrencyInput) -> Result<&Currency, CurrencyError> {
        let code = validate_currency_input(&input, self.max_decimal_places)?;

        if self.find_by_code(code).is_some() {
            return Err(CurrencyError::DuplicateCode(code));
        }
        if input.is_base_currency && !input.is_active {
            return Err(CurrencyError::BaseCurrencyInactive(code));
        }

        let make_base = input.is_base_currency || (input.is_active && self.base().is_none());
        if make_base {
            self.clear_base();
        }

        let currency = Currency {
            id: CurrencyId::new(),
            code,
            name: input.name.trim().to_string(),
            symbol: input.symbol,
            decimal_places: input.decimal_places,
            is_active: input.is_active,
            is_base_currency: make_base,
            rounding_rule: input.rounding_rule.unwrap_or(self.default_rounding_rule),
        };

        info!(
            entity_id = %self.entity_id,
            code = %currency.code,
            decimal_places = currency.decimal_places,
            rounding_rule = %currency.rounding_rule,
            is_base = currency.is_base_currency,
            "Currency added"
        );

        self.currencies.push(currency);
        self.currencies
            .last()
            .ok_or_else(|| CurrencyError::CurrencyNotFound(code.to_string()))
    }

    /// Looks up a currency by ID.
    #[must_use]
    pub fn get(&self, id: CurrencyId) -> Option<&Currency> {
        self.currencies.iter().find(|c| c.id == id)
    }

    /// Looks up a currency by code.
    #[must_use]
    pub fn find_by_code(&self, code: CurrencyCode) -> Option<&Currency> {
        self.currencies.iter().find(|c| c.code == code)
    }

    /// Parses `code` and looks it up.
    pub fn resolve(&self, code: &str) -> Result<&Currency, CurrencyError> {
        let parsed = parse_code(code)?;
        self.find_by_code(parsed)
            .ok_or_else(|| CurrencyError::CurrencyNotFound(parsed.to_string()))
    }

    /// All currencies, in insertion order.
    #[must_use]
    pub fn list(&self) -> &[Currency] {
        &self.currencies
    }

    /// Active currencies, in insertion order.
    pub fn active(&self) -> impl Iterator<Item = &Currency> {
        self.currencies.iter().filter(|c| c.is_active)
    }

    /// Number of configured currencies.
    #[must_use]
    pub fn len(&self) -> usize {
        self.currencies.len()
    }

    /// True when no currency is configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.currencies.is_empty()
    }

    /// The entity's base currency, if one is set.
    #[must_use]
    pub fn base(&self) -> Option<&Currency> {
        self.currencies.iter().find(|c| c.is_base_currency)
    }

    /// Moves the base flag to `code`, which must be active.
    pub fn set_base(&mut self, code: &str) -> Result<(), CurrencyError> {
        let target = self.resolve(code)?;
        if !target.is_active {
            return Err(CurrencyError::BaseCurrencyInactive(target.code));
        }
        let target = target.code;

        let previous = self.base().map(|c| c.code);
        self.clear_base();
        if let Some(currency) = self.find_by_code_mut(target) {
            currency.is_base_currency = true;
        }

        info!(
            entity_id = %self.entity_id,
            previous = ?previous.map(|c| c.to_string()),
            base = %target,
            "Base currency changed"
        );
        Ok(())
    }

    /// Activates or deactivates a currency. The base currency stays active.
    pub fn set_active(&mut self, code: &str, active: bool) -> Result<(), CurrencyError> {
        let code = self.resolve(code)?.code;
        let entity_id = self.entity_id;

        let currency = self
            .find_by_code_mut(code)
            .ok_or_else(|| CurrencyError::CurrencyNotFound(code.to_string()))?;
        if !active && currency.is_base_currency {
            return Err(CurrencyError::BaseCurrencyInactive(code));
        }
        currency.is_active = active;

        debug!(entity_id = %entity_id, code = %code, active, "Currency activation changed");
        Ok(())
    }

    /// Changes how a currency rounds amounts.
    pub fn update_rounding(
        &mut self,
        code: &str,
        rule: RoundingRule,
        decimal_places: u32,
    ) -> Result<&Currency, CurrencyError> {
        validate_decimal_places(decimal_places, self.max_decimal_places)?;
        let code = self.resolve(code)?.code;

        let currency = self
            .find_by_code_mut(code)
            .ok_or_else(|| CurrencyError::CurrencyNotFound(code.to_string()))?;
        currency.rounding_rule = rule;
        currency.decimal_places = decimal_places;

        debug!(code = %code, rounding_rule = %rule, decimal_places, "Currency rounding updated");
        Ok(&*currency)
    }

    /// Ordered pairs over the active currencies.
    #[must_use]
    pub fn pairs(&self) -> Vec<CurrencyPair> {
        let active: Vec<Currency> = self.active().cloned().collect();
        currency_pairs(&active)
    }

    fn find_by_code_mut(&mut self, code: CurrencyCode) -> Option<&mut Currency> {
        self.currencies.iter_mut().find(|c| c.code == code)
    }

    fn clear_base(&mut self) {
        for currency in &mut self.currencies {
            currency.is_base_currency = false;
        }
    }
}

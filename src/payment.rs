//! Simulated payment collaborator.
//!
//! The desk treats payment as an opaque boolean-returning call made exactly
//! once per booking, never retried, with the answer trusted as-is. The
//! simulators here stand in for a real payment service integration.

use crate::types::Money;
use rand::Rng;
use tracing::info;

/// External payment collaborator.
///
/// Implementations must answer within the call; the desk never inspects how
/// the decision was made and carries no retry policy of its own.
pub trait PaymentGateway {
    /// Attempts to collect the given amount, returning whether it succeeded
    fn process_payment(&self, amount: Money) -> bool;
}

/// Gateway that approves every payment (demos and tests)
#[derive(Clone, Copy, Debug, Default)]
pub struct AlwaysApprove;

impl PaymentGateway for AlwaysApprove {
    fn process_payment(&self, amount: Money) -> bool {
        info!(amount = %amount, "simulated payment approved");
        true
    }
}

/// Gateway that declines every payment (failure-path tests)
#[derive(Clone, Copy, Debug, Default)]
pub struct AlwaysDecline;

impl PaymentGateway for AlwaysDecline {
    fn process_payment(&self, amount: Money) -> bool {
        info!(amount = %amount, "simulated payment declined");
        false
    }
}

/// Gateway that approves with a configurable probability
#[derive(Clone, Copy, Debug)]
pub struct CoinFlipGateway {
    success_rate: f64,
}

impl CoinFlipGateway {
    /// Creates a gateway approving with the given probability, clamped to
    /// `[0.0, 1.0]`
    #[must_use]
    pub fn new(success_rate: f64) -> Self {
        Self {
            success_rate: success_rate.clamp(0.0, 1.0),
        }
    }
}

impl PaymentGateway for CoinFlipGateway {
    fn process_payment(&self, amount: Money) -> bool {
        let approved = rand::thread_rng().gen_bool(self.success_rate);
        info!(amount = %amount, approved, "simulated payment processed");
        approved
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_gateways_answer_deterministically() {
        let amount = Money::from_units(4500);
        assert!(AlwaysApprove.process_payment(amount));
        assert!(!AlwaysDecline.process_payment(amount));
    }

    #[test]
    fn coin_flip_extremes_are_deterministic() {
        let amount = Money::from_units(4500);
        let certain = CoinFlipGateway::new(1.0);
        let never = CoinFlipGateway::new(0.0);
        for _ in 0..50 {
            assert!(certain.process_payment(amount));
            assert!(!never.process_payment(amount));
        }
    }

    #[test]
    fn success_rate_is_clamped() {
        let amount = Money::from_units(100);
        // Out-of-range rates must not panic inside the RNG.
        assert!(CoinFlipGateway::new(7.5).process_payment(amount));
        assert!(!CoinFlipGateway::new(-2.0).process_payment(amount));
    }
}

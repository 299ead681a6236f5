use busq_types::PaymentType;

use super::fare::round_currency;
use crate::model::PaymentSummary;

/// Split the amount due into what is paid now and what is left for the conductor
pub fn settle_payment(amount_due: f64, payment_type: PaymentType) -> PaymentSummary {
    let amount_paid = round_currency(amount_due * payment_type.rate());
    PaymentSummary {
        payment_type,
        amount_paid,
        balance: round_currency(amount_due - amount_paid),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deposit() {
        let summary = settle_payment(360.0, PaymentType::Deposit);
        assert!((summary.amount_paid - 108.0).abs() < 0.01);
        assert!((summary.balance - 252.0).abs() < 0.01);
    }

    #[test]
    fn test_full_payment() {
        let summary = settle_payment(144.0, PaymentType::Full);
        assert!((summary.amount_paid - 144.0).abs() < 0.01);
        assert_eq!(summary.balance, 0.0);
    }

    #[test]
    fn test_deposit_rounds_to_centavos() {
        let summary = settle_payment(100.10, PaymentType::Deposit);
        assert!((summary.amount_paid - 30.03).abs() < 0.001);
        assert!((summary.balance - 70.07).abs() < 0.001);
    }
}

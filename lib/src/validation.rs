use crate::{AMOUNT_LOWER_BOUND, AMOUNT_UPPER_BOUND};

/// Zero is a permitted term amount; negatives and amounts without
/// overflow headroom are not.
pub fn valid_amount(amount: i128) -> bool {
    amount >= AMOUNT_LOWER_BOUND && amount <= AMOUNT_UPPER_BOUND
}

/// Checked sum of rent plus both deposits.
pub fn total_up_front(rent: i128, rent_deposit: i128, security_deposit: i128) -> Option<i128> {
    rent.checked_add(rent_deposit)?.checked_add(security_deposit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TOKEN_UNIT;

    #[test]
    fn amount_validation_works() {
        assert!(valid_amount(0));
        assert!(valid_amount(500 * TOKEN_UNIT));
        assert!(valid_amount(AMOUNT_UPPER_BOUND));

        assert!(!valid_amount(-1));
        assert!(!valid_amount(i128::MAX));
    }

    #[test]
    fn total_up_front_sums_components() {
        assert_eq!(total_up_front(500, 1500, 500), Some(2500));
        assert_eq!(total_up_front(0, 0, 0), Some(0));
    }

    #[test]
    fn total_up_front_detects_overflow() {
        assert_eq!(total_up_front(i128::MAX, 1, 0), None);
        assert_eq!(
            total_up_front(AMOUNT_UPPER_BOUND, AMOUNT_UPPER_BOUND, AMOUNT_UPPER_BOUND),
            None
        );
    }
}

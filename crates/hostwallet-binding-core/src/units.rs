use alloy::primitives::utils::format_ether;
use alloy::primitives::U256;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid wei amount {raw}: {reason}")]
pub struct UnitConversionError {
    pub raw: String,
    pub reason: String,
}

/// Wei amount string (decimal or 0x-hex) to a trimmed ether display string.
pub fn wei_to_eth(wei: &str) -> Result<String, UnitConversionError> {
    let trimmed = wei.trim();
    let parsed = if let Some(hex) = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
    {
        U256::from_str_radix(hex, 16)
    } else {
        U256::from_str_radix(trimmed, 10)
    }
    .map_err(|e| UnitConversionError {
        raw: wei.to_owned(),
        reason: e.to_string(),
    })?;

    Ok(trim_decimal(&format_ether(parsed)))
}

fn trim_decimal(formatted: &str) -> String {
    match formatted.split_once('.') {
        Some((whole, frac)) => {
            let frac = frac.trim_end_matches('0');
            if frac.is_empty() {
                whole.to_owned()
            } else {
                format!("{whole}.{frac}")
            }
        }
        None => formatted.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_wei_reads_zero() {
        assert_eq!(wei_to_eth("0").expect("zero"), "0");
    }

    #[test]
    fn whole_ether_trims_fraction() {
        assert_eq!(wei_to_eth("1000000000000000000").expect("one ether"), "1");
    }

    #[test]
    fn fractional_ether_keeps_significant_digits() {
        assert_eq!(
            wei_to_eth("1500000000000000000").expect("one and a half"),
            "1.5"
        );
        assert_eq!(wei_to_eth("1").expect("one wei"), "0.000000000000000001");
    }

    #[test]
    fn hex_wei_is_accepted() {
        assert_eq!(wei_to_eth("0xde0b6b3a7640000").expect("one ether"), "1");
    }

    #[test]
    fn garbage_is_rejected() {
        let err = wei_to_eth("one ether").expect_err("must fail");
        assert_eq!(err.raw, "one ether");
    }
}

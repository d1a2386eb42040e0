//! Domain enumerations shared across the dashboard

use serde::{Deserialize, Serialize};

/// Card brand enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardType {
    Visa,
    Mastercard,
    Amex,
}

impl std::str::FromStr for CardType {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "visa" => Ok(CardType::Visa),
            "mastercard" => Ok(CardType::Mastercard),
            "amex" => Ok(CardType::Amex),
            _ => Err(format!("Invalid card type: {}", s)),
        }
    }
}

impl std::fmt::Display for CardType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CardType::Visa => write!(f, "visa"),
            CardType::Mastercard => write!(f, "mastercard"),
            CardType::Amex => write!(f, "amex"),
        }
    }
}

/// Payment method enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    /// Payment link
    Link,
    /// QR code
    Qr,
    /// Mobile point of sale
    Mpos,
    /// POS Pro terminal
    Pospro,
}

impl std::str::FromStr for PaymentMethod {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "link" => Ok(PaymentMethod::Link),
            "qr" => Ok(PaymentMethod::Qr),
            "mpos" => Ok(PaymentMethod::Mpos),
            "pospro" => Ok(PaymentMethod::Pospro),
            _ => Err(format!("Invalid payment method: {}", s)),
        }
    }
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaymentMethod::Link => write!(f, "link"),
            PaymentMethod::Qr => write!(f, "qr"),
            PaymentMethod::Mpos => write!(f, "mpos"),
            PaymentMethod::Pospro => write!(f, "pospro"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_type_from_str() {
        assert_eq!("visa".parse::<CardType>().unwrap(), CardType::Visa);
        assert_eq!("MASTERCARD".parse::<CardType>().unwrap(), CardType::Mastercard);
        assert_eq!("amex".parse::<CardType>().unwrap(), CardType::Amex);
        assert!("diners".parse::<CardType>().is_err());
    }

    #[test]
    fn test_payment_method_from_str() {
        assert_eq!("link".parse::<PaymentMethod>().unwrap(), PaymentMethod::Link);
        assert_eq!("qr".parse::<PaymentMethod>().unwrap(), PaymentMethod::Qr);
        assert_eq!("mpos".parse::<PaymentMethod>().unwrap(), PaymentMethod::Mpos);
        assert_eq!("pospro".parse::<PaymentMethod>().unwrap(), PaymentMethod::Pospro);
        assert!("cash".parse::<PaymentMethod>().is_err());
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(serde_json::to_string(&CardType::Visa).unwrap(), "\"visa\"");
        assert_eq!(
            serde_json::to_string(&PaymentMethod::Pospro).unwrap(),
            "\"pospro\""
        );
    }
}

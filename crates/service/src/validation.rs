//! Per-entity validation.
//!
//! Each validator checks its rules in a fixed order and returns the first
//! failure. Only presence and shape are checked; nothing here consults
//! storage.

use porto_core::error::CoreError;
use porto_core::rules::{is_blank, is_valid_email, require_present};
use porto_db::models::{Contact, Experience, Portfolio};

pub fn validate_portfolio(portfolio: &Portfolio) -> Result<(), CoreError> {
    require_present(&portfolio.name, "portfolio name is required")?;
    require_present(&portfolio.description, "portfolio description is required")?;
    Ok(())
}

/// `end_date` and `description` are optional.
pub fn validate_experience(experience: &Experience) -> Result<(), CoreError> {
    require_present(&experience.title, "experience title is required")?;
    require_present(&experience.company, "experience company is required")?;
    require_present(&experience.start_date, "start date is required")?;
    Ok(())
}

pub fn validate_contact(contact: &Contact) -> Result<(), CoreError> {
    require_present(&contact.name, "contact name is required")?;
    if is_blank(&contact.email) {
        return Err(CoreError::validation("contact email is required"));
    }
    if !is_valid_email(&contact.email) {
        return Err(CoreError::validation("invalid email format"));
    }
    require_present(&contact.message, "contact message is required")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn message(result: Result<(), CoreError>) -> Option<String> {
        match result {
            Ok(()) => None,
            Err(CoreError::Validation(msg)) => Some(msg),
            Err(other) => panic!("unexpected error kind: {other:?}"),
        }
    }

    fn portfolio(name: &str, description: &str) -> Portfolio {
        Portfolio {
            name: name.into(),
            description: description.into(),
            ..Default::default()
        }
    }

    fn contact(name: &str, email: &str, msg: &str) -> Contact {
        Contact {
            id: 0,
            name: name.into(),
            email: email.into(),
            message: msg.into(),
        }
    }

    #[test]
    fn portfolio_rules() {
        assert_eq!(message(validate_portfolio(&portfolio("A", "B"))), None);
        assert_eq!(
            message(validate_portfolio(&portfolio("", "B"))).as_deref(),
            Some("portfolio name is required")
        );
        assert_eq!(
            message(validate_portfolio(&portfolio("A", "  "))).as_deref(),
            Some("portfolio description is required")
        );
    }

    #[test]
    fn portfolio_reports_first_failure_only() {
        assert_eq!(
            message(validate_portfolio(&portfolio(" ", ""))).as_deref(),
            Some("portfolio name is required")
        );
    }

    #[test]
    fn experience_rules() {
        let valid = Experience {
            title: "Engineer".into(),
            company: "Acme".into(),
            start_date: "2020".into(),
            ..Default::default()
        };
        assert_matches!(validate_experience(&valid), Ok(()));

        let cases = [
            (
                Experience { title: "\t".into(), ..valid.clone() },
                "experience title is required",
            ),
            (
                Experience { company: String::new(), ..valid.clone() },
                "experience company is required",
            ),
            (
                Experience { start_date: " ".into(), ..valid.clone() },
                "start date is required",
            ),
        ];
        for (experience, expected) in cases {
            assert_eq!(
                message(validate_experience(&experience)).as_deref(),
                Some(expected)
            );
        }
    }

    #[test]
    fn contact_rules() {
        assert_eq!(message(validate_contact(&contact("A", "a@mail.com", "hi"))), None);
        assert_eq!(
            message(validate_contact(&contact("", "a@mail.com", "hi"))).as_deref(),
            Some("contact name is required")
        );
        assert_eq!(
            message(validate_contact(&contact("A", " ", "hi"))).as_deref(),
            Some("contact email is required")
        );
        assert_eq!(
            message(validate_contact(&contact("A", "a", "hi"))).as_deref(),
            Some("invalid email format")
        );
        assert_eq!(
            message(validate_contact(&contact("A", "a@mail.com", ""))).as_deref(),
            Some("contact message is required")
        );
    }
}

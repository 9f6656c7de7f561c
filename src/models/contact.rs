use serde::Serialize;

/// Outbound contact action. Rendered verbatim, never validated.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub enum ContactLink {
    Mail(&'static str),
    Tel(&'static str),
}

impl ContactLink {
    pub fn href(&self) -> String {
        match self {
            ContactLink::Mail(address) => format!("mailto:{address}"),
            ContactLink::Tel(number) => format!("tel:{number}"),
        }
    }

    /// Visible text for the link
    pub fn text(&self) -> &'static str {
        match self {
            ContactLink::Mail(s) | ContactLink::Tel(s) => s,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hrefs_are_literal() {
        assert_eq!(
            ContactLink::Mail("contact@gautam.com").href(),
            "mailto:contact@gautam.com"
        );
        assert_eq!(ContactLink::Tel("+919876543210").href(), "tel:+919876543210");
    }

    #[test]
    fn text_is_the_bare_destination() {
        assert_eq!(ContactLink::Mail("studio@email.com").text(), "studio@email.com");
        assert_eq!(ContactLink::Tel("+919876543210").text(), "+919876543210");
    }
}

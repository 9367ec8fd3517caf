use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Customer {
    pub customer_id: String,
    pub contact_name: Option<String>,
    pub company_name: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub postal_code: Option<String>,
    /// Concurrency token, assigned by the store on commit.
    #[serde(default)]
    pub version: u64,
}

impl Customer {
    pub fn new(customer_id: impl Into<String>) -> Self {
        Self {
            customer_id: customer_id.into(),
            ..Self::default()
        }
    }

    pub fn with_contact_name(mut self, contact_name: impl Into<String>) -> Self {
        self.contact_name = Some(contact_name.into());
        self
    }

    pub fn with_company_name(mut self, company_name: impl Into<String>) -> Self {
        self.company_name = Some(company_name.into());
        self
    }

    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    pub fn with_postal_code(mut self, postal_code: impl Into<String>) -> Self {
        self.postal_code = Some(postal_code.into());
        self
    }
}

/// A partial update: `None` leaves the field as it is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerUpdate {
    pub contact_name: Option<String>,
    pub country: Option<String>,
    pub city: Option<String>,
    pub postal_code: Option<String>,
}

impl CustomerUpdate {
    pub fn new(
        contact_name: Option<&str>,
        country: Option<&str>,
        city: Option<&str>,
        postal_code: Option<&str>,
    ) -> Self {
        Self {
            contact_name: contact_name.map(str::to_string),
            country: country.map(str::to_string),
            city: city.map(str::to_string),
            postal_code: postal_code.map(str::to_string),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.contact_name.is_none()
            && self.country.is_none()
            && self.city.is_none()
            && self.postal_code.is_none()
    }

    pub fn apply_to(&self, customer: &mut Customer) {
        if let Some(contact_name) = &self.contact_name {
            customer.contact_name = Some(contact_name.clone());
        }
        if let Some(country) = &self.country {
            customer.country = Some(country.clone());
        }
        if let Some(city) = &self.city {
            customer.city = Some(city.clone());
        }
        if let Some(postal_code) = &self.postal_code {
            customer.postal_code = Some(postal_code.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_overwrites_only_supplied_fields() {
        let mut customer = Customer::new("MANDA")
            .with_contact_name("Nish Mandal")
            .with_city("Birmingham")
            .with_postal_code("B1");

        CustomerUpdate::new(Some("Bob"), Some("Germany"), None, None).apply_to(&mut customer);

        assert_eq!(customer.contact_name.as_deref(), Some("Bob"));
        assert_eq!(customer.country.as_deref(), Some("Germany"));
        assert_eq!(customer.city.as_deref(), Some("Birmingham"));
        assert_eq!(customer.postal_code.as_deref(), Some("B1"));
    }

    #[test]
    fn empty_update_changes_nothing() {
        let update = CustomerUpdate::default();
        assert!(update.is_empty());

        let mut customer = Customer::new("PHILL").with_city("Birmingham");
        let before = customer.clone();
        update.apply_to(&mut customer);
        assert_eq!(customer, before);
    }

    #[test]
    fn missing_version_deserializes_as_zero() {
        let customer: Customer = serde_json::from_str(
            r#"{"customer_id":"ALFKI","contact_name":"Maria Anders","company_name":null,
                "city":"Berlin","country":"Germany","postal_code":"12209"}"#,
        )
        .unwrap();
        assert_eq!(customer.version, 0);
        assert_eq!(customer.city.as_deref(), Some("Berlin"));
    }
}

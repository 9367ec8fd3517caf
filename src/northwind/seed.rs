use crate::model::Customer;

/// A few rows from the classic Northwind customers table.
pub fn sample_customers() -> Vec<Customer> {
    vec![
        Customer::new("ALFKI")
            .with_contact_name("Maria Anders")
            .with_company_name("Alfreds Futterkiste")
            .with_city("Berlin")
            .with_country("Germany")
            .with_postal_code("12209"),
        Customer::new("ANATR")
            .with_contact_name("Ana Trujillo")
            .with_company_name("Ana Trujillo Emparedados y helados")
            .with_city("México D.F.")
            .with_country("Mexico")
            .with_postal_code("05021"),
        Customer::new("ANTON")
            .with_contact_name("Antonio Moreno")
            .with_company_name("Antonio Moreno Taquería")
            .with_city("México D.F.")
            .with_country("Mexico")
            .with_postal_code("05023"),
        Customer::new("AROUT")
            .with_contact_name("Thomas Hardy")
            .with_company_name("Around the Horn")
            .with_city("London")
            .with_country("UK")
            .with_postal_code("WA1 1DP"),
        Customer::new("BERGS")
            .with_contact_name("Christina Berglund")
            .with_company_name("Berglunds snabbköp")
            .with_city("Luleå")
            .with_country("Sweden")
            .with_postal_code("S-958 22"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn sample_ids_are_unique_and_non_empty() {
        let customers = sample_customers();
        let ids: HashSet<_> = customers.iter().map(|c| c.customer_id.as_str()).collect();
        assert_eq!(ids.len(), customers.len());
        assert!(ids.iter().all(|id| !id.is_empty()));
    }
}

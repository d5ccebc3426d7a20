//! Customer resources of the open-banking area.

use serde::{Deserialize, Serialize};

use super::Data;

/// Response of `get_customers_list`.
pub type CustomerListResponse = Data<CustomerList>;

/// Response of `get_customer_info`.
pub type CustomerResponse = Data<Customer>;

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct CustomerList {
    #[serde(rename = "Customer")]
    pub customer: Vec<Customer>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub customer_code: String,

    pub customer_type: CustomerType,

    #[serde(default)]
    pub is_resident: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_inn: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_kpp: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_ogrn: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_name: Option<String>,
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum CustomerType {
    Business,
    Personal,
}

#[cfg(test)]
mod tests {
    use super::{CustomerResponse, CustomerType};

    #[test]
    fn parses_customer_info_payload() {
        let raw = r#"{
            "Data": {
                "customerCode": "300000092",
                "customerType": "Business",
                "isResident": true,
                "customerInn": "7706428569",
                "shortName": "ООО Ромашка"
            }
        }"#;
        let parsed: CustomerResponse = serde_json::from_str(raw).expect("parses");
        assert_eq!(parsed.data.customer_type, CustomerType::Business);
        assert!(parsed.data.is_resident);
        assert!(parsed.data.customer_kpp.is_none());
    }
}

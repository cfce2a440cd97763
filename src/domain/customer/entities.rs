//! Customer Context - Entities

use serde::{Deserialize, Deserializer, Serialize};

use super::CustomerError;

/// `null` 与缺失字段一样取零值
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// 电话记录
///
/// `type` 与 `number` 均为自由格式字符串，不做格式校验
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phone {
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub kind: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub number: String,
}

impl Phone {
    pub fn new(kind: impl Into<String>, number: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            number: number.into(),
        }
    }
}

/// 客户实体
///
/// 不变量:
/// - `id` 由调用方指定，创建后不可修改
/// - 创建时 `name` 不能为空（更新时不校验）
///
/// 反序列化时缺失或为 `null` 的字段取零值，`phones` 始终序列化为数组
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub phones: Vec<Phone>,
}

impl Customer {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            phones: Vec::new(),
        }
    }

    pub fn with_phones(mut self, phones: Vec<Phone>) -> Self {
        self.phones = phones;
        self
    }

    /// 创建前校验
    pub fn validate_for_create(&self) -> Result<(), CustomerError> {
        if self.name.is_empty() {
            return Err(CustomerError::EmptyName);
        }
        Ok(())
    }

    /// 校验请求路径中的 ID 与请求体中的 ID 一致
    pub fn ensure_id(&self, path_id: &str) -> Result<(), CustomerError> {
        if self.id != path_id {
            return Err(CustomerError::IdMismatch {
                path: path_id.to_string(),
                body: self.id.clone(),
            });
        }
        Ok(())
    }

    /// 用 `other` 的可变字段替换当前记录（`id` 保持不变）
    pub fn replace_fields(&mut self, other: &Customer) {
        self.name = other.name.clone();
        self.phones = other.phones.clone();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_name_rejected() {
        let customer = Customer::new("123", "");
        assert_eq!(
            customer.validate_for_create(),
            Err(CustomerError::EmptyName)
        );
    }

    #[test]
    fn test_named_customer_accepted() {
        let customer = Customer::new("123", "John");
        assert!(customer.validate_for_create().is_ok());
    }

    #[test]
    fn test_ensure_id_mismatch() {
        let customer = Customer::new("1234", "John Test");
        let err = customer.ensure_id("123").unwrap_err();
        assert_eq!(
            err,
            CustomerError::IdMismatch {
                path: "123".to_string(),
                body: "1234".to_string(),
            }
        );
    }

    #[test]
    fn test_replace_fields_keeps_id() {
        let mut stored = Customer::new("123", "John");
        let incoming = Customer::new("999", "John Test")
            .with_phones(vec![Phone::new("mobile", "555-0100")]);

        stored.replace_fields(&incoming);

        assert_eq!(stored.id, "123");
        assert_eq!(stored.name, "John Test");
        assert_eq!(stored.phones.len(), 1);
    }

    #[test]
    fn test_json_shape() {
        let customer =
            Customer::new("123", "John").with_phones(vec![Phone::new("mobile", "555-0100")]);
        let json = serde_json::to_value(&customer).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": "123",
                "name": "John",
                "phones": [{"type": "mobile", "number": "555-0100"}]
            })
        );
    }

    #[test]
    fn test_null_fields_default_to_zero_values() {
        let customer: Customer =
            serde_json::from_str(r#"{"id":"1","name":null,"phones":null}"#).unwrap();
        assert_eq!(customer, Customer::new("1", ""));
        assert!(customer.validate_for_create().is_err());

        let customer: Customer =
            serde_json::from_str(r#"{"id":null,"name":"John","phones":[{"type":null,"number":null}]}"#)
                .unwrap();
        assert_eq!(customer.id, "");
        assert_eq!(customer.phones, vec![Phone::default()]);
    }

    #[test]
    fn test_missing_fields_default_to_zero_values() {
        let customer: Customer = serde_json::from_str(r#"{"id":"123"}"#).unwrap();
        assert_eq!(customer.name, "");
        assert!(customer.phones.is_empty());
        assert_eq!(
            serde_json::to_string(&customer).unwrap(),
            r#"{"id":"123","name":"","phones":[]}"#
        );
    }
}

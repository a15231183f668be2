use std::fmt;

use serde::{Deserialize, Deserializer};

use super::RealmError;

/// Decoded `getuserrealm.srf` response.
///
/// Absent fields take their zero value; an empty brand name or auth URL is a
/// meaningful answer, not a decode failure. An explicit `null` reads the
/// same as an absent field; a field of the wrong JSON type fails decoding.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RealmInfo {
    #[serde(rename = "State", deserialize_with = "null_as_default")]
    pub state: i64,
    #[serde(rename = "UserState", deserialize_with = "null_as_default")]
    pub user_state: i64,
    #[serde(rename = "Login", deserialize_with = "null_as_default")]
    pub login: String,
    #[serde(rename = "NameSpaceType", deserialize_with = "null_as_default")]
    pub namespace_type: String,
    #[serde(rename = "DomainName", deserialize_with = "null_as_default")]
    pub domain_name: String,
    #[serde(rename = "FederationGlobalVersion", deserialize_with = "null_as_default")]
    pub federation_global_version: i64,
    #[serde(rename = "AuthURL", deserialize_with = "null_as_default")]
    pub auth_url: String,
    #[serde(rename = "FederationBrandName", deserialize_with = "null_as_default")]
    pub federation_brand_name: String,
    #[serde(rename = "CloudInstanceName", deserialize_with = "null_as_default")]
    pub cloud_instance_name: String,
    #[serde(rename = "CloudInstanceIssuerUri", deserialize_with = "null_as_default")]
    pub cloud_instance_issuer_uri: String,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl RealmInfo {
    pub fn from_json(body: &str) -> Result<Self, RealmError> {
        serde_json::from_str(body).map_err(RealmError::decode)
    }

    pub fn namespace(&self) -> NamespaceType {
        NamespaceType::from(self.namespace_type.as_str())
    }
}

/// How the identity platform authenticates a domain's users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NamespaceType {
    /// Not registered with the platform.
    Unknown,
    /// Authentication handled by the platform itself.
    Managed,
    /// Delegated to a third-party identity provider.
    Federated,
    Other(String),
}

impl NamespaceType {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Unknown => "Unknown",
            Self::Managed => "Managed",
            Self::Federated => "Federated",
            Self::Other(value) => value.as_str(),
        }
    }
}

impl From<&str> for NamespaceType {
    fn from(value: &str) -> Self {
        match value {
            "Unknown" => Self::Unknown,
            "Managed" => Self::Managed,
            "Federated" => Self::Federated,
            other => Self::Other(other.to_string()),
        }
    }
}

impl fmt::Display for NamespaceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_every_known_field() {
        let body = r#"{
            "State": 3,
            "UserState": 2,
            "Login": "alice@contoso.com",
            "NameSpaceType": "Federated",
            "DomainName": "contoso.com",
            "FederationGlobalVersion": -1,
            "AuthURL": "https://sts.contoso.com/adfs/ls/?username=alice%40contoso.com",
            "FederationBrandName": "Contoso SSO",
            "CloudInstanceName": "microsoftonline.com",
            "CloudInstanceIssuerUri": "urn:federation:MicrosoftOnline"
        }"#;

        let info = RealmInfo::from_json(body).expect("valid body");
        assert_eq!(info.state, 3);
        assert_eq!(info.user_state, 2);
        assert_eq!(info.login, "alice@contoso.com");
        assert_eq!(info.namespace_type, "Federated");
        assert_eq!(info.domain_name, "contoso.com");
        assert_eq!(info.federation_global_version, -1);
        assert_eq!(
            info.auth_url,
            "https://sts.contoso.com/adfs/ls/?username=alice%40contoso.com"
        );
        assert_eq!(info.federation_brand_name, "Contoso SSO");
        assert_eq!(info.cloud_instance_name, "microsoftonline.com");
        assert_eq!(info.cloud_instance_issuer_uri, "urn:federation:MicrosoftOnline");
        assert_eq!(info.namespace(), NamespaceType::Federated);
    }

    #[test]
    fn missing_fields_default_and_unknown_fields_ignored() {
        let info = RealmInfo::from_json(r#"{"NameSpaceType":"Managed","Extra":{"a":1}}"#)
            .expect("valid body");
        assert_eq!(info.namespace(), NamespaceType::Managed);
        assert_eq!(info.state, 0);
        assert!(info.auth_url.is_empty());
        assert!(info.federation_brand_name.is_empty());
    }

    #[test]
    fn null_fields_read_as_zero_values() {
        let body = r#"{"State":null,"Login":"alice@contoso.com","NameSpaceType":"Managed","FederationBrandName":null,"AuthURL":null}"#;
        let info = RealmInfo::from_json(body).expect("nulls are not decode errors");
        assert_eq!(info.namespace(), NamespaceType::Managed);
        assert_eq!(info.state, 0);
        assert!(info.auth_url.is_empty());
        assert!(info.federation_brand_name.is_empty());
        assert_eq!(info.login, "alice@contoso.com");
    }

    #[test]
    fn field_names_are_case_sensitive() {
        let info = RealmInfo::from_json(r#"{"namespacetype":"Managed"}"#).expect("valid body");
        assert_eq!(info.namespace(), NamespaceType::Other(String::new()));
    }

    #[test]
    fn wrong_field_type_is_a_decode_error() {
        let err = RealmInfo::from_json(r#"{"State":"three"}"#).unwrap_err();
        assert!(matches!(err, RealmError::Decode { .. }));
    }

    #[test]
    fn malformed_json_is_a_decode_error() {
        let err = RealmInfo::from_json("<html>nope</html>").unwrap_err();
        assert!(matches!(err, RealmError::Decode { .. }));
    }

    #[test]
    fn namespace_parsing_is_exact() {
        assert_eq!(NamespaceType::from("Unknown"), NamespaceType::Unknown);
        assert_eq!(
            NamespaceType::from("managed"),
            NamespaceType::Other("managed".into())
        );
        assert_eq!(NamespaceType::from("Hybrid").as_str(), "Hybrid");
    }
}

//! Display-ready, redacted view of the provider configuration.
//!
//! [`build_groups`] never fails: malformed configuration is skipped, so one
//! broken section cannot take the whole dashboard down.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

use crate::auth::credential_value;
use crate::config::SERVICES_KEY;
use crate::names::{group_name, provider_name};
use crate::redact::{redact_credential, redact_endpoint};
use crate::testers::TesterRegistry;

/// Id of the synthetic group used when no `services` layout is configured.
pub const DEFAULT_GROUP_ID: &str = "services";

/// Name of the synthetic group used when no `services` layout is configured.
pub const DEFAULT_GROUP_NAME: &str = "Services";

/// One provider as shown on the dashboard. Secrets are already redacted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceCard {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub service_type: String,
    pub endpoint_short: String,
    pub apikey_short: String,
    pub has_tester: bool,
}

impl ServiceCard {
    /// Project a provider settings object onto a card.
    pub fn from_settings(service_type: &str, settings: &Map<String, Value>) -> Self {
        let endpoint = settings
            .get("endpoint")
            .and_then(Value::as_str)
            .unwrap_or_default();
        let credential = credential_value(settings).unwrap_or_default();

        Self {
            id: service_type.to_string(),
            name: provider_name(service_type),
            service_type: service_type.to_string(),
            endpoint_short: redact_endpoint(endpoint),
            apikey_short: redact_credential(credential),
            has_tester: true,
        }
    }
}

/// A named bucket of service cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub id: String,
    pub name: String,
    pub services: Vec<ServiceCard>,
}

/// Build the grouped dashboard listing.
///
/// With a `services` mapping, groups follow its key order and cards follow
/// each group's list. Without one, a single "Services" group lists every
/// configured provider in registry order. Providers lacking a settings object
/// or a tester are left out, as are groups that end up empty.
pub fn build_groups(config: &Value, testers: &TesterRegistry) -> Vec<Group> {
    let Some(config) = config.as_object() else {
        debug!("provider configuration is not a mapping");
        return Vec::new();
    };

    let Some(layout) = config.get(SERVICES_KEY).and_then(Value::as_object) else {
        return vec![Group {
            id: DEFAULT_GROUP_ID.to_string(),
            name: DEFAULT_GROUP_NAME.to_string(),
            services: flat_cards(config, testers),
        }];
    };

    layout
        .iter()
        .filter_map(|(group_id, members)| {
            let Some(members) = members.as_array() else {
                debug!(group_id = %group_id, "skipping group without a service list");
                return None;
            };

            let services: Vec<ServiceCard> = members
                .iter()
                .filter_map(member_type)
                .filter_map(|service_type| card(config, testers, &service_type))
                .collect();

            if services.is_empty() {
                debug!(group_id = %group_id, "skipping empty group");
                return None;
            }

            Some(Group {
                id: group_id.clone(),
                name: group_name(group_id),
                services,
            })
        })
        .collect()
}

fn flat_cards(config: &Map<String, Value>, testers: &TesterRegistry) -> Vec<ServiceCard> {
    testers
        .types()
        .into_iter()
        .filter_map(|service_type| {
            let settings = config.get(service_type)?.as_object()?;
            Some(ServiceCard::from_settings(service_type, settings))
        })
        .collect()
}

/// Provider type named by a group list entry; scalars are stringified.
fn member_type(entry: &Value) -> Option<String> {
    let service_type = match entry {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        _ => return None,
    };
    (!service_type.is_empty()).then_some(service_type)
}

fn card(config: &Map<String, Value>, testers: &TesterRegistry, service_type: &str) -> Option<ServiceCard> {
    let Some(settings) = config.get(service_type).and_then(Value::as_object) else {
        debug!(service_type, "skipping service without settings");
        return None;
    };
    if !testers.contains(service_type) {
        debug!(service_type, "skipping service without tester");
        return None;
    }
    Some(ServiceCard::from_settings(service_type, settings))
}

//! `network-properties` section and availability-zone ops-files.

use serde_yaml::{Mapping, Value};

use crate::domain::metadata::Metadata;
use crate::domain::metadata::reference::placeholder;
use crate::domain::template::feature_ops::OpsFiles;
use crate::domain::template::ops::{Ops, OpsValue};

const OTHER_AVAILABILITY_ZONES_PATH: &str = "/network-properties/other_availability_zones";

/// Zone counts offered as ready-made ops-files.
const AZ_LAYOUTS: [usize; 2] = [2, 3];

pub fn network_properties(metadata: &Metadata) -> Mapping {
    let mut network = Mapping::new();
    network.insert("network".into(), named("network_name"));
    network.insert(
        "other_availability_zones".into(),
        Value::Sequence(vec![named("singleton_availability_zone")]),
    );
    network.insert("singleton_availability_zone".into(), named("singleton_availability_zone"));
    if metadata.uses_service_network() {
        network.insert("service_network".into(), named("service_network_name"));
    }
    network
}

pub fn network_ops() -> OpsFiles {
    AZ_LAYOUTS
        .iter()
        .map(|&zones| {
            let names = (1..=zones).map(|zone| named(&format!("az{zone}_name"))).collect();
            (
                format!("{zones}-az-configuration"),
                vec![Ops::replace(
                    OTHER_AVAILABILITY_ZONES_PATH,
                    OpsValue::Structured(Value::Sequence(names)),
                )],
            )
        })
        .collect()
}

/// `{name: ((variable))}`
fn named(variable: &str) -> Value {
    let mut entry = Mapping::new();
    entry.insert("name".into(), placeholder(variable).into());
    Value::Mapping(entry)
}

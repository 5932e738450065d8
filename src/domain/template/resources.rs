//! `resource-config` and `errand-config` sections with their variable tables
//! and per-job resource ops-files.

use std::collections::BTreeMap;

use serde_yaml::{Mapping, Value};

use crate::domain::metadata::{JobType, Metadata};
use crate::domain::metadata::reference::placeholder;
use crate::domain::template::feature_ops::OpsFiles;
use crate::domain::template::ops::{Ops, OpsValue};

/// Variable name → suggested value.
pub type VariableTable = BTreeMap<String, Value>;

const AUTOMATIC: &str = "automatic";

/// Per-job settings that are off by default and toggled through ops-files.
const RESOURCE_TOGGLES: [&str; 3] = ["additional_vm_extensions", "elb_names", "internet_connected"];

pub fn resource_config(metadata: &Metadata) -> (Mapping, VariableTable) {
    let mut config = Mapping::new();
    let mut variables = VariableTable::new();

    for job in &metadata.job_types {
        let mut entry = Mapping::new();
        if job.has_configurable_instances() {
            let variable = format!("{}_instances", job.name);
            entry.insert("instances".into(), placeholder(&variable).into());
            variables.insert(variable, instances_default(job));
        }

        let instance_type = format!("{}_instance_type", job.name);
        let mut id = Mapping::new();
        id.insert("id".into(), placeholder(&instance_type).into());
        entry.insert("instance_type".into(), Value::Mapping(id));
        variables.insert(instance_type, AUTOMATIC.into());

        if job.has_persistent_disk() {
            let disk = format!("{}_persistent_disk_size", job.name);
            let mut size = Mapping::new();
            size.insert("size_mb".into(), placeholder(&disk).into());
            entry.insert("persistent_disk".into(), Value::Mapping(size));
            variables.insert(disk, AUTOMATIC.into());
        }

        config.insert(job.name.clone().into(), Value::Mapping(entry));
    }
    (config, variables)
}

pub fn resource_ops(metadata: &Metadata) -> OpsFiles {
    let mut files = OpsFiles::new();
    for job in &metadata.job_types {
        for setting in RESOURCE_TOGGLES {
            files.insert(
                format!("{}_{setting}", job.name),
                vec![Ops::replace(
                    format!("/resource-config/{}/{setting}?", job.name),
                    OpsValue::Literal(placeholder(&format!("{}_{setting}", job.name))),
                )],
            );
        }
    }
    files
}

/// Errand run states; empty when errands are excluded.
pub fn errand_config(metadata: &Metadata, include_errands: bool) -> (Mapping, VariableTable) {
    let mut config = Mapping::new();
    let mut variables = VariableTable::new();
    if !include_errands {
        return (config, variables);
    }

    let phases = [
        ("post-deploy-state", &metadata.post_deploy_errands),
        ("pre-delete-state", &metadata.pre_delete_errands),
    ];
    for (state, errands) in phases {
        for errand in errands {
            let variable = format!("{}_{}", errand.name, state.replace('-', "_"));
            let key = Value::from(errand.name.clone());
            if !matches!(config.get(&key), Some(Value::Mapping(_))) {
                config.insert(key.clone(), Value::Mapping(Mapping::new()));
            }
            if let Some(Value::Mapping(entry)) = config.get_mut(&key) {
                entry.insert(state.into(), placeholder(&variable).into());
            }
            variables.insert(variable, Value::Bool(true));
        }
    }
    (config, variables)
}

fn instances_default(job: &JobType) -> Value {
    match job.instance_definition.as_ref().and_then(|definition| definition.default) {
        Some(count) => Value::from(u64::from(count)),
        None => AUTOMATIC.into(),
    }
}

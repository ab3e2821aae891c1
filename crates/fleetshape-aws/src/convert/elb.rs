//! Load balancer conversions

use crate::convert::{expand_string_list, require_port, require_record};
use crate::model::elb::{HealthCheck, Instance, Listener, ListenerDescription};
use fleetshape_flatmap::{Record, Result, Value};

/// Build listeners from configured `listener` records.
///
/// Every record needs `instance_port`, `lb_port`, `instance_protocol` and
/// `lb_protocol`; the first record missing one of them fails the whole list.
pub fn expand_listeners(configured: &[Value]) -> Result<Vec<Listener>> {
    let listeners = configured
        .iter()
        .enumerate()
        .map(|(i, raw)| {
            let m = require_record(raw, i)?;
            Ok(Listener {
                instance_port: Some(require_port(m, "instance_port")?),
                load_balancer_port: Some(require_port(m, "lb_port")?),
                instance_protocol: Some(m.require_str("instance_protocol")?.to_string()),
                protocol: Some(m.require_str("lb_protocol")?.to_string()),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    tracing::debug!("Expanded {} listeners", listeners.len());
    Ok(listeners)
}

/// Flatten listeners read back from the API; protocols are lower-cased to
/// match how they are configured
pub fn flatten_listeners(list: &[ListenerDescription]) -> Vec<Record> {
    list.iter()
        .filter_map(|d| d.listener.as_ref())
        .map(|l| {
            Record::new()
                .with("instance_port", l.instance_port.unwrap_or_default())
                .with("instance_protocol", lowercase(&l.instance_protocol))
                .with("lb_port", l.load_balancer_port.unwrap_or_default())
                .with("lb_protocol", lowercase(&l.protocol))
        })
        .collect()
}

fn lowercase(protocol: &Option<String>) -> String {
    protocol.as_deref().unwrap_or_default().to_lowercase()
}

/// Flatten a health check. The result is always a single-element list, the
/// flat form of a singleton block.
pub fn flatten_health_check(check: &HealthCheck) -> Vec<Record> {
    let HealthCheck {
        unhealthy_threshold,
        healthy_threshold,
        target,
        timeout,
        interval,
    } = check;

    vec![
        Record::new()
            .with("unhealthy_threshold", unhealthy_threshold.unwrap_or_default())
            .with("healthy_threshold", healthy_threshold.unwrap_or_default())
            .with("target", target.clone().unwrap_or_default())
            .with("timeout", timeout.unwrap_or_default())
            .with("interval", interval.unwrap_or_default()),
    ]
}

/// Wrap configured instance ids
pub fn expand_instance_string(configured: &[Value]) -> Result<Vec<Instance>> {
    Ok(expand_string_list(configured)?
        .into_iter()
        .map(Instance::new)
        .collect())
}

/// Registered instance ids; instances without one are skipped
pub fn flatten_instances(list: &[Instance]) -> Vec<String> {
    list.iter().filter_map(|i| i.instance_id.clone()).collect()
}

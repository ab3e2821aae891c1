//! EC2 security group and network interface conversions

use crate::convert::expand_string_list;
use crate::model::ec2::{
    GroupIdentifier, IpPermission, IpRange, NetworkInterfaceAttachment,
    NetworkInterfacePrivateIpAddress, SecurityGroup, UserIdGroupPair,
};
use fleetshape_flatmap::{Record, Result, StringSet, Value};

/// Build ingress/egress permissions for `group` from configured rule records.
///
/// Each record may carry `protocol`, `from_port`, `to_port`, `cidr_blocks`,
/// `security_groups` and `self`. In a VPC group, references of the form
/// `owner/sg-id` become a pair with `user_id = owner`; in a classic group every
/// reference is a group name and no owner is ever set. The `self` pair is
/// appended after the referenced groups.
pub fn expand_ip_perms(group: &SecurityGroup, configured: &[Value]) -> Vec<IpPermission> {
    let vpc = group.is_vpc();
    let mut perms = Vec::with_capacity(configured.len());

    for (i, raw) in configured.iter().enumerate() {
        let Some(m) = raw.as_map() else {
            tracing::warn!("Skipping ip permission [{}]: not a map", i);
            continue;
        };

        let mut perm = IpPermission {
            ip_protocol: m.opt_str("protocol").map(String::from),
            from_port: optional_port(m, "from_port"),
            to_port: optional_port(m, "to_port"),
            ..Default::default()
        };

        if let Some(raw) = m.get("cidr_blocks") {
            perm.ip_ranges = cidr_blocks(raw).into_iter().map(IpRange::new).collect();
        }

        if let Some(raw) = m.get("security_groups") {
            let groups = security_group_set(raw);
            let pairs = groups.iter().map(|reference| group_pair(reference, vpc));
            perm.user_id_group_pairs.extend(pairs);
        }

        if m.opt_bool("self") == Some(true) {
            let pair = if vpc {
                UserIdGroupPair {
                    user_id: group.group_id.clone(),
                    ..Default::default()
                }
            } else {
                UserIdGroupPair {
                    group_name: group.group_name.clone(),
                    ..Default::default()
                }
            };
            perm.user_id_group_pairs.push(pair);
        }

        perms.push(perm);
    }

    let mode = if vpc { "vpc" } else { "classic" };
    tracing::debug!("Expanded {} ip permissions ({})", perms.len(), mode);
    perms
}

/// Turn one security group reference into a pair for the given addressing mode
fn group_pair(reference: &str, vpc: bool) -> UserIdGroupPair {
    match (vpc, reference.split_once('/')) {
        (true, Some((owner, id))) => UserIdGroupPair {
            user_id: Some(owner.to_string()),
            group_id: Some(id.to_string()),
            group_name: None,
        },
        (true, None) => UserIdGroupPair {
            group_id: Some(reference.to_string()),
            ..Default::default()
        },
        (false, Some((_, name))) => UserIdGroupPair {
            group_name: Some(name.to_string()),
            ..Default::default()
        },
        (false, None) => UserIdGroupPair {
            group_name: Some(reference.to_string()),
            ..Default::default()
        },
    }
}

fn optional_port(record: &Record, field: &str) -> Option<i32> {
    let raw = record.get(field)?;
    let port = raw.as_int().and_then(|n| i32::try_from(n).ok());
    if port.is_none() {
        tracing::warn!("Ignoring {}: {:?} is not a 32-bit integer", field, raw);
    }
    port
}

fn cidr_blocks(raw: &Value) -> Vec<String> {
    match raw {
        Value::List(items) => items
            .iter()
            .filter_map(|item| {
                let cidr = item.as_str();
                if cidr.is_none() {
                    tracing::warn!("Ignoring cidr block of type {}", item.kind());
                }
                cidr.map(String::from)
            })
            .collect(),
        Value::Set(set) => set.to_vec(),
        Value::String(s) => vec![s.clone()],
        other => {
            tracing::warn!("Ignoring cidr_blocks of type {}", other.kind());
            Vec::new()
        }
    }
}

/// Security group references as a set; a decoded list is re-hashed so its
/// order does not depend on the flat indices
fn security_group_set(raw: &Value) -> StringSet {
    match raw {
        Value::Set(set) => set.clone(),
        Value::List(items) => items
            .iter()
            .filter_map(|item| {
                let reference = item.as_str();
                if reference.is_none() {
                    tracing::warn!("Ignoring security group of type {}", item.kind());
                }
                reference
            })
            .collect(),
        Value::String(s) => std::iter::once(s.as_str()).collect(),
        other => {
            tracing::warn!("Ignoring security_groups of type {}", other.kind());
            StringSet::new()
        }
    }
}

/// Secondary private addresses for a network interface; the first is primary
pub fn expand_private_ip_addresses(
    configured: &[Value],
) -> Result<Vec<NetworkInterfacePrivateIpAddress>> {
    let addresses = expand_string_list(configured)?;
    Ok(addresses
        .into_iter()
        .enumerate()
        .map(|(i, address)| NetworkInterfacePrivateIpAddress {
            private_ip_address: Some(address),
            primary: Some(i == 0),
        })
        .collect())
}

/// Addresses of an interface, in the order the API returned them
pub fn flatten_network_interfaces_private_ip_addresses(
    list: &[NetworkInterfacePrivateIpAddress],
) -> Vec<String> {
    list.iter()
        .map(|ip| ip.private_ip_address.clone().unwrap_or_default())
        .collect()
}

pub fn flatten_group_identifiers(list: &[GroupIdentifier]) -> Vec<String> {
    list.iter()
        .map(|g| g.group_id.clone().unwrap_or_default())
        .collect()
}

/// Flatten an interface attachment; a detached interface yields an empty record
pub fn flatten_attachment(attachment: Option<&NetworkInterfaceAttachment>) -> Record {
    let Some(a) = attachment else {
        return Record::new();
    };

    Record::new()
        .with("instance", a.instance_id.clone().unwrap_or_default())
        .with("device_index", a.device_index.unwrap_or_default())
        .with("attachment_id", a.attachment_id.clone().unwrap_or_default())
}

/// Flatten permissions read back from the API into rule records for `group`.
///
/// This is the inverse of [`expand_ip_perms`]: a pair that refers to `group`
/// itself becomes `self = true`, and a VPC pair owned by another account is
/// written back as `owner/id`.
pub fn flatten_ip_perms(group: &SecurityGroup, list: &[IpPermission]) -> Vec<Record> {
    let vpc = group.is_vpc();
    list.iter()
        .map(|perm| {
            let mut record = Record::new()
                .with("protocol", perm.ip_protocol.clone().unwrap_or_default())
                .with("from_port", perm.from_port.unwrap_or_default())
                .with("to_port", perm.to_port.unwrap_or_default());

            if !perm.ip_ranges.is_empty() {
                let cidrs: Vec<String> = perm
                    .ip_ranges
                    .iter()
                    .filter_map(|r| r.cidr_ip.clone())
                    .collect();
                record.insert("cidr_blocks", cidrs);
            }

            let mut groups = StringSet::new();
            let mut refers_to_self = false;
            for pair in &perm.user_id_group_pairs {
                if is_self_pair(group, pair) {
                    refers_to_self = true;
                } else if let Some(reference) = group_reference(pair, vpc) {
                    groups.insert(reference);
                } else {
                    tracing::warn!("Dropping group pair without an id or name: {:?}", pair);
                }
            }
            if !groups.is_empty() {
                record.insert("security_groups", groups);
            }
            if refers_to_self {
                record.insert("self", true);
            }

            record
        })
        .collect()
}

/// Whether `pair` is the self reference `expand_ip_perms` builds for `group`
fn is_self_pair(group: &SecurityGroup, pair: &UserIdGroupPair) -> bool {
    if group.is_vpc() {
        pair.user_id.is_some()
            && pair.user_id == group.group_id
            && pair.group_id.is_none()
            && pair.group_name.is_none()
    } else {
        pair.group_name.is_some()
            && pair.group_name == group.group_name
            && pair.user_id.is_none()
            && pair.group_id.is_none()
    }
}

/// The `security_groups` entry that expands back into `pair`
fn group_reference(pair: &UserIdGroupPair, vpc: bool) -> Option<String> {
    match (vpc, &pair.user_id, &pair.group_id) {
        (true, Some(owner), Some(id)) => Some(format!("{}/{}", owner, id)),
        (true, None, Some(id)) => Some(id.clone()),
        _ => pair.group_name.clone().or_else(|| pair.group_id.clone()),
    }
}

/// Group ids referenced by a list of pairs
pub fn flatten_security_groups(list: &[UserIdGroupPair]) -> Vec<String> {
    list.iter().filter_map(|p| p.group_id.clone()).collect()
}

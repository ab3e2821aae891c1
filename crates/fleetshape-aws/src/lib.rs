//! FleetShape AWS shapes
//!
//! Typed request/response shapes for the AWS services the engine manages and
//! the converters between them and the flat configuration form.
//!
//! # Supported Services
//!
//! - **EC2**: Security group permissions, network interfaces
//! - **ELB**: Listeners, health checks, instance registration
//! - **RDS**: DB parameter groups
//! - **Route 53**: Resource record values
//!
//! # Example
//!
//! ```
//! use fleetshape_aws::{SecurityGroup, expand_ip_perms};
//! use fleetshape_flatmap::FlatMap;
//!
//! let state: FlatMap = [
//!     ("ingress.#", "1"),
//!     ("ingress.0.protocol", "tcp"),
//!     ("ingress.0.from_port", "22"),
//!     ("ingress.0.to_port", "22"),
//!     ("ingress.0.cidr_blocks.#", "1"),
//!     ("ingress.0.cidr_blocks.0", "0.0.0.0/0"),
//! ]
//! .into_iter()
//! .collect();
//!
//! let ingress = state.expand("ingress").unwrap();
//! let group = SecurityGroup::vpc("sg-12345678", "vpc-12345678");
//! let perms = expand_ip_perms(&group, ingress.as_list().unwrap_or_default());
//!
//! assert_eq!(perms[0].from_port, Some(22));
//! ```

pub mod convert;
pub mod model;

// Re-exports
pub use convert::ec2::{
    expand_ip_perms, expand_private_ip_addresses, flatten_attachment, flatten_group_identifiers,
    flatten_ip_perms, flatten_network_interfaces_private_ip_addresses, flatten_security_groups,
};
pub use convert::elb::{
    expand_instance_string, expand_listeners, flatten_health_check, flatten_instances,
    flatten_listeners,
};
pub use convert::expand_string_list;
pub use convert::rds::{expand_parameters, flatten_parameters};
pub use convert::route53::flatten_resource_records;
pub use fleetshape_flatmap::{Result, ShapeError};
pub use model::ec2::{
    GroupIdentifier, IpPermission, IpRange, NetworkInterfaceAttachment,
    NetworkInterfacePrivateIpAddress, SecurityGroup, UserIdGroupPair,
};
pub use model::elb::{HealthCheck, Instance, Listener, ListenerDescription};
pub use model::rds::Parameter;
pub use model::route53::ResourceRecord;

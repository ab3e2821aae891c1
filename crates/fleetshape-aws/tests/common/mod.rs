use fleetshape_flatmap::{FlatMap, Value};

/// Flat attributes of a load balancer with one listener and a security group
/// with one ingress rule
pub fn test_conf() -> FlatMap {
    [
        ("listener.#", "1"),
        ("listener.0.lb_port", "80"),
        ("listener.0.lb_protocol", "http"),
        ("listener.0.instance_port", "8000"),
        ("listener.0.instance_protocol", "http"),
        ("availability_zones.#", "2"),
        ("availability_zones.0", "us-east-1a"),
        ("availability_zones.1", "us-east-1b"),
        ("ingress.#", "1"),
        ("ingress.0.protocol", "icmp"),
        ("ingress.0.from_port", "1"),
        ("ingress.0.to_port", "-1"),
        ("ingress.0.cidr_blocks.#", "1"),
        ("ingress.0.cidr_blocks.0", "0.0.0.0/0"),
        ("ingress.0.security_groups.#", "2"),
        ("ingress.0.security_groups.0", "sg-11111"),
        ("ingress.0.security_groups.1", "foo/sg-22222"),
    ]
    .into_iter()
    .collect()
}

/// Expand `key` and return its elements
pub fn expand_list(conf: &FlatMap, key: &str) -> Vec<Value> {
    match conf.expand(key).unwrap() {
        Value::List(items) => items,
        other => panic!("expected {} to expand to a list, got {:?}", key, other),
    }
}

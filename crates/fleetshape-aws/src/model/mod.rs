//! Typed API shapes
//!
//! Every scalar is an `Option`: the API distinguishes an omitted field from one
//! sent as zero or empty, so absence has to survive the conversion. Shapes
//! serialize with the API's PascalCase member names and omit absent members.

pub mod ec2;
pub mod elb;
pub mod rds;
pub mod route53;

#[cfg(test)]
mod tests {
    use super::ec2::{IpPermission, IpRange, SecurityGroup, UserIdGroupPair};
    use super::elb::Listener;
    use super::rds::Parameter;

    #[test]
    fn test_security_group_mode() {
        assert!(SecurityGroup::vpc("sg-1", "vpc-1").is_vpc());
        assert!(!SecurityGroup::classic("default").is_vpc());
    }

    #[test]
    fn test_absent_fields_are_omitted_on_the_wire() {
        let parameter = Parameter {
            parameter_name: Some("character_set_client".to_string()),
            parameter_value: Some("utf8".to_string()),
            apply_method: None,
        };

        let json = serde_json::to_value(&parameter).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "ParameterName": "character_set_client",
                "ParameterValue": "utf8",
            })
        );
    }

    #[test]
    fn test_zero_is_distinct_from_absent() {
        let zero = IpPermission {
            from_port: Some(0),
            ..Default::default()
        };
        assert_ne!(zero, IpPermission::default());

        let json = serde_json::to_value(&zero).unwrap();
        assert_eq!(json, serde_json::json!({ "FromPort": 0 }));
    }

    #[test]
    fn test_nested_shapes_round_trip() {
        let permission = IpPermission {
            ip_protocol: Some("tcp".to_string()),
            from_port: Some(22),
            to_port: Some(22),
            ip_ranges: vec![IpRange::new("0.0.0.0/0")],
            user_id_group_pairs: vec![UserIdGroupPair {
                user_id: Some("123456789012".to_string()),
                group_id: Some("sg-22222".to_string()),
                group_name: None,
            }],
        };

        let json = serde_json::to_string(&permission).unwrap();
        assert!(json.contains("\"UserIdGroupPairs\""));
        assert!(json.contains("\"CidrIp\":\"0.0.0.0/0\""));

        let decoded: IpPermission = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, permission);
    }

    #[test]
    fn test_deserialize_partial_listener() {
        let json = r#"{"LoadBalancerPort": 443, "Protocol": "HTTPS"}"#;
        let listener: Listener = serde_json::from_str(json).unwrap();
        assert_eq!(listener.load_balancer_port, Some(443));
        assert_eq!(listener.protocol.as_deref(), Some("HTTPS"));
        assert_eq!(listener.instance_port, None);
    }
}

//! Firewall policy assembly across the allow-list matrix.

#[cfg(test)]
mod tests {
    use edgestack_core::build_plan;
    use edgestack_model::template::Resource;
    use edgestack_model::waf::{DefaultAction, RuleAction, RuleStatement, WafScope};

    use crate::{base_config, config_with_lists, web_acl};

    const GEO: &[&str] = &["NL", "DE"];
    const IP: &[&str] = &["192.0.2.0/24", "198.51.100.0/24"];

    const MANAGED_RULE_NAMES: &[&str] = &[
        "AWS-AWSManagedRulesAdminProtectionRuleSet",
        "AWS-AWSManagedRulesAmazonIpReputationList",
        "AWS-AWSManagedRulesCommonRuleSet",
        "AWS-AWSManagedRulesKnownBadInputsRuleSet",
        "AWS-AWSManagedRulesLinuxRuleSet",
        "AWS-AWSManagedRulesSQLiRuleSet",
    ];

    #[test]
    fn test_should_scale_rule_count_with_configured_lists() {
        let combos: [(&[&str], &[&str], usize); 4] = [
            (&[], &[], 6),
            (GEO, &[], 7),
            (&[], IP, 7),
            (GEO, IP, 8),
        ];
        for (geo, ip, expected) in combos {
            let plan = build_plan(&config_with_lists(geo, ip)).expect("plan");
            let acl = web_acl(&plan);
            assert_eq!(acl.rules.len(), expected, "geo={geo:?} ip={ip:?}");
            for (i, rule) in acl.rules.iter().enumerate() {
                assert_eq!(rule.priority as usize, i, "priority of {}", rule.name);
            }
        }
    }

    #[test]
    fn test_should_order_geo_before_ip_before_managed() {
        let plan = build_plan(&config_with_lists(GEO, IP)).expect("plan");
        let names: Vec<&str> = web_acl(&plan).rules.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names[0], "GeoMatch");
        assert_eq!(names[1], "IPMatch");
        assert_eq!(&names[2..], MANAGED_RULE_NAMES);
    }

    #[test]
    fn test_should_keep_managed_rules_first_without_allow_lists() {
        let plan = build_plan(&base_config()).expect("plan");
        let acl = web_acl(&plan);
        let names: Vec<&str> = acl.rules.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, MANAGED_RULE_NAMES);
        assert!(
            acl.rules
                .iter()
                .all(|r| r.action == RuleAction::DelegateToManaged)
        );
    }

    #[test]
    fn test_should_block_on_geo_and_ip_mismatch() {
        let plan = build_plan(&config_with_lists(GEO, IP)).expect("plan");
        let acl = web_acl(&plan);
        assert_eq!(acl.rules[0].action, RuleAction::Block);
        assert_eq!(acl.rules[1].action, RuleAction::Block);
        assert!(matches!(
            &acl.rules[0].statement,
            RuleStatement::GeoNotMatch { country_codes } if country_codes == &["NL", "DE"]
        ));
    }

    #[test]
    fn test_should_declare_ip_set_only_when_ip_list_configured() {
        let count_ip_sets = |plan: &edgestack_core::DistributionPlan| {
            plan.template
                .resources
                .values()
                .filter(|r| matches!(r, Resource::IpSet(_)))
                .count()
        };

        let plan = build_plan(&config_with_lists(GEO, &[])).expect("plan");
        assert_eq!(count_ip_sets(&plan), 0);

        let plan = build_plan(&config_with_lists(&[], IP)).expect("plan");
        assert_eq!(count_ip_sets(&plan), 1);
        let Some(Resource::IpSet(set)) = plan
            .template
            .resources
            .values()
            .find(|r| matches!(r, Resource::IpSet(_)))
        else {
            panic!("ip set not declared");
        };
        assert_eq!(set.name, "edgestack-dev-ipset-cloudfront");
        assert_eq!(set.addresses, IP);
    }

    #[test]
    fn test_should_reference_ip_set_from_ip_rule() {
        let plan = build_plan(&config_with_lists(&[], IP)).expect("plan");
        let acl = web_acl(&plan);
        let RuleStatement::IpSetNotReference { ip_set_arn } = &acl.rules[0].statement else {
            panic!("expected ip set reference in first rule");
        };
        let rendered = serde_json::to_string(ip_set_arn).expect("serialize");
        assert!(rendered.contains("CloudfrontIpSet"));
        assert!(rendered.contains("arn"));
    }

    #[test]
    fn test_should_guard_both_distributions_with_default_allow() {
        let plan = build_plan(&base_config()).expect("plan");
        let acl = web_acl(&plan);
        assert_eq!(acl.default_action, DefaultAction::Allow);
        assert_eq!(acl.scope, WafScope::Cloudfront);

        let frontend = crate::distribution(&plan, &plan.frontend);
        let userguide = crate::distribution(&plan, &plan.userguide);
        assert_eq!(frontend.web_acl_arn, userguide.web_acl_arn);
    }

    #[test]
    fn test_should_pass_managed_group_names_verbatim() {
        let plan = build_plan(&base_config()).expect("plan");
        let rendered = serde_json::to_string(&plan.template).expect("serialize");
        for group in [
            "AWSManagedRulesAdminProtectionRuleSet",
            "AWSManagedRulesAmazonIpReputationList",
            "AWSManagedRulesCommonRuleSet",
            "AWSManagedRulesKnownBadInputsRuleSet",
            "AWSManagedRulesLinuxRuleSet",
            "AWSManagedRulesSQLiRuleSet",
        ] {
            assert!(rendered.contains(group), "{group} missing from template");
        }
    }
}
